use crate::build_planning::domain::{Category, Component};
use std::collections::BTreeSet;

/// Policy over category composition of a selected set: which categories a
/// complete build requires, and which may occur only once.
pub struct RequiredCategories;

impl RequiredCategories {
    /// Returns the required categories absent from `components`, in stable
    /// (enum declaration) order, so error messages name exactly the gaps.
    pub fn missing(components: &[Component]) -> Vec<Category> {
        let present: BTreeSet<Category> = components.iter().map(|c| c.category).collect();
        let mut missing: Vec<Category> = Category::REQUIRED_FOR_BUILD
            .into_iter()
            .filter(|category| !present.contains(category))
            .collect();
        missing.sort();
        missing
    }

    /// Returns the first single-occurrence category that appears more than
    /// once, if any.
    ///
    /// The engine's per-category lookup silently picks the first match, so a
    /// duplicate CPU/Motherboard/Case/PSU would otherwise slip through with
    /// ambiguous semantics. Sets violating the invariant are rejected
    /// outright before the engine runs.
    pub fn duplicated(components: &[Component]) -> Option<Category> {
        for category in Category::SINGLE_OCCURRENCE {
            let count = components.iter().filter(|c| c.category == category).count();
            if count > 1 {
                return Some(category);
            }
        }
        None
    }
}
