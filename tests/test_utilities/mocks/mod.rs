/// Mock implementations for testing
mod mock_component_repository;

pub use mock_component_repository::MockComponentRepository;
