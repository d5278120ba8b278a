//! Use cases orchestrating the domain over the outbound ports.

mod assemble_build;
mod check_compatibility;
mod engagement;
mod track_inventory;

pub use assemble_build::{BuildAssembler, ResolvedPart};
pub use check_compatibility::CheckCompatibilityUseCase;
pub use engagement::Engagement;
pub use track_inventory::InventoryTracker;
