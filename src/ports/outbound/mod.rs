/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the application core uses to reach its
/// external collaborators: the catalog and build storage, alert storage and
/// delivery, and the social graph.
pub mod alert_notifier;
pub mod alert_repository;
pub mod build_repository;
pub mod component_repository;
pub mod social_repository;

pub use alert_notifier::AlertNotifier;
pub use alert_repository::AlertRepository;
pub use build_repository::BuildRepository;
pub use component_repository::ComponentRepository;
pub use social_repository::SocialRepository;
