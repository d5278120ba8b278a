//! Domain layer: the component/build model, the pairwise compatibility
//! engine, pricing, and the category composition policy. Everything here is
//! pure - no I/O, no async, no repository access.

pub mod domain;
pub mod policies;
pub mod services;
