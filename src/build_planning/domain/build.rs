use super::component::ComponentId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a persisted build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildId(pub u64);

impl fmt::Display for BuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a user. Account data itself lives with the auth collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of a build: a component reference with the quantity and the
/// price frozen at assembly time.
///
/// `price_at_time` is captured from the validation snapshot so that later
/// catalog price changes never retroactively alter historical build totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildLine {
    pub component_id: ComponentId,
    /// Component name snapshot, so a build stays readable even if the
    /// catalog entry is renamed or removed.
    pub name: String,
    pub quantity: u32,
    pub price_at_time: Decimal,
}

impl BuildLine {
    pub fn line_total(&self) -> Decimal {
        self.price_at_time * Decimal::from(self.quantity)
    }
}

/// The build aggregate: a validated parts list with a derived total.
///
/// `total_price` is always recomputed from the lines on every save and is
/// never trusted from client input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Build {
    pub id: BuildId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub lines: Vec<BuildLine>,
    pub total_price: Decimal,
    pub is_public: bool,
    /// Opaque share identifier, present only once the build has been shared.
    pub share_token: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A build as handed to the repository for insertion. The repository assigns
/// the id and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBuild {
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub lines: Vec<BuildLine>,
    pub total_price: Decimal,
    pub is_public: bool,
}

/// Wholesale replacement of a build's mutable state.
///
/// Updates never diff or merge lines: the previous associations are replaced
/// with `lines` in one atomic step. `is_public` is left unchanged when
/// `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildUpdate {
    pub title: String,
    pub description: String,
    pub lines: Vec<BuildLine>,
    pub total_price: Decimal,
    pub is_public: Option<bool>,
}
