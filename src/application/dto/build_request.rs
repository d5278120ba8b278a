use crate::build_planning::domain::{ComponentId, UserId};
use serde::{Deserialize, Serialize};

fn default_quantity() -> u32 {
    1
}

/// One entry of a submitted parts list: a component id and how many of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartSelection {
    pub component_id: ComponentId,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl PartSelection {
    pub fn new(component_id: ComponentId, quantity: u32) -> Self {
        Self {
            component_id,
            quantity,
        }
    }

    /// A single unit of the component, the common case.
    pub fn one(component_id: ComponentId) -> Self {
        Self::new(component_id, 1)
    }
}

/// Request to create a build from a parts list.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBuildRequest {
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub parts: Vec<PartSelection>,
    pub is_public: bool,
}

/// Request to update an existing build. `is_public: None` leaves the
/// current visibility unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBuildRequest {
    pub title: String,
    pub description: String,
    pub parts: Vec<PartSelection>,
    pub is_public: Option<bool>,
}
