//! rigforge - compatibility checking and pricing for PC part lists
//!
//! This library validates PC builds against a catalog of components: it
//! enforces hardware compatibility rules (sockets, memory generations,
//! clearances, power headroom), prices builds with exact decimal
//! arithmetic, and tracks inventory thresholds. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`build_planning`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use rigforge::prelude::*;
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Load a catalog and wrap it in the caching decorator
//! let store = load_catalog_store(Path::new("catalog.json"))?;
//! let components = CachingComponentRepository::new(store);
//!
//! // Create use case with injected dependencies
//! let use_case = CheckCompatibilityUseCase::new(components);
//!
//! // Check a candidate against the current selection
//! let report = use_case
//!     .check(&[ComponentId(1), ComponentId(2)], ComponentId(3))
//!     .await?;
//! println!("compatible: {}", report.compatible);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod build_planning;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::caching::CachingComponentRepository;
    pub use crate::adapters::outbound::catalog::{load_catalog, load_catalog_store};
    pub use crate::adapters::outbound::console::StderrAlertNotifier;
    pub use crate::adapters::outbound::memory::{
        InMemoryAlertStore, InMemoryBuildStore, InMemoryComponentStore, InMemorySocialStore,
    };
    pub use crate::application::dto::{
        CompatibilityReport, CreateBuildRequest, PartSelection, UpdateBuildRequest,
        ValidationReport,
    };
    pub use crate::application::use_cases::{
        BuildAssembler, CheckCompatibilityUseCase, Engagement, InventoryTracker, ResolvedPart,
    };
    pub use crate::build_planning::domain::{
        AlertStatus, Build, BuildId, BuildLine, Category, Component, ComponentId, InventoryAlert,
        PricePoint, Specifications, StockChange, UserId,
    };
    pub use crate::build_planning::services::{CompatibilityChecker, Violation};
    pub use crate::ports::outbound::{
        AlertNotifier, AlertRepository, BuildRepository, ComponentRepository, SocialRepository,
    };
    pub use crate::shared::{ExitCode, ForgeError, Result};
}
