use crate::application::dto::CompatibilityReport;
use crate::build_planning::domain::{Component, ComponentId};
use crate::build_planning::services::CompatibilityChecker;
use crate::ports::outbound::ComponentRepository;
use crate::shared::Result;

/// CheckCompatibilityUseCase - answers "does this part fit?" questions
/// against a partially selected build
///
/// Both entry points evaluate a candidate against the *entire* selected
/// set, so slot-exhaustion rules count every occupant. The listing variant
/// is the hot path behind part pickers; it reads the catalog once and runs
/// the engine in memory.
///
/// # Type Parameters
/// * `CR` - ComponentRepository implementation
pub struct CheckCompatibilityUseCase<CR> {
    components: CR,
}

impl<CR> CheckCompatibilityUseCase<CR>
where
    CR: ComponentRepository,
{
    pub fn new(components: CR) -> Self {
        Self { components }
    }

    /// Checks one candidate against the currently selected components.
    ///
    /// # Returns
    /// A report carrying the human-readable reason for the first rule the
    /// candidate breaks, or a compatible verdict.
    ///
    /// # Errors
    /// Returns an error when any id fails to resolve; an unknown component
    /// is a caller mistake, not an incompatibility.
    pub async fn check(
        &self,
        selected_ids: &[ComponentId],
        candidate_id: ComponentId,
    ) -> Result<CompatibilityReport> {
        let selected = self.resolve(selected_ids).await?;
        let candidate = self.components.get(candidate_id).await?;

        Ok(match CompatibilityChecker::check(&selected, &candidate) {
            Ok(()) => CompatibilityReport::compatible(),
            Err(violation) => CompatibilityReport::incompatible(&violation),
        })
    }

    /// Lists every catalog component, outside the selection itself, that
    /// would fit the current selection.
    ///
    /// Results are evaluated with the same all-occupants semantics as
    /// [`check`](Self::check), so a part reported here never fails the
    /// single check afterwards.
    pub async fn compatible_components(
        &self,
        selected_ids: &[ComponentId],
    ) -> Result<Vec<Component>> {
        let selected = self.resolve(selected_ids).await?;
        let candidates = self.components.list_excluding(selected_ids).await?;

        Ok(candidates
            .into_iter()
            .filter(|candidate| CompatibilityChecker::check(&selected, candidate).is_ok())
            .collect())
    }

    async fn resolve(&self, ids: &[ComponentId]) -> Result<Vec<Component>> {
        let mut components = Vec::with_capacity(ids.len());
        for id in ids {
            components.push(self.components.get(*id).await?);
        }
        Ok(components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::memory::InMemoryComponentStore;
    use crate::build_planning::domain::Category;
    use rust_decimal_macros::dec;

    fn store() -> InMemoryComponentStore {
        InMemoryComponentStore::with_components(vec![
            Component::new(ComponentId(1), "Core i5-12600K", Category::Cpu, dec!(32000.00))
                .unwrap()
                .with_spec("socket", "LGA 1700")
                .with_spec("tdp", 125),
            Component::new(ComponentId(2), "Z690-A", Category::Motherboard, dec!(28000.00))
                .unwrap()
                .with_spec("socket", "LGA 1700"),
            Component::new(ComponentId(3), "X570-E", Category::Motherboard, dec!(30000.00))
                .unwrap()
                .with_spec("socket", "AM4"),
        ])
    }

    #[tokio::test]
    async fn test_matching_socket_is_compatible() {
        let use_case = CheckCompatibilityUseCase::new(store());
        let report = use_case
            .check(&[ComponentId(1)], ComponentId(2))
            .await
            .unwrap();
        assert!(report.compatible);
        assert!(report.reason.is_none());
    }

    #[tokio::test]
    async fn test_socket_mismatch_reports_reason() {
        let use_case = CheckCompatibilityUseCase::new(store());
        let report = use_case
            .check(&[ComponentId(1)], ComponentId(3))
            .await
            .unwrap();
        assert!(!report.compatible);
        let reason = report.reason.unwrap();
        assert!(reason.contains("LGA 1700"));
        assert!(reason.contains("AM4"));
    }

    #[tokio::test]
    async fn test_listing_filters_out_mismatched_boards() {
        let use_case = CheckCompatibilityUseCase::new(store());
        let fits = use_case
            .compatible_components(&[ComponentId(1)])
            .await
            .unwrap();
        assert_eq!(fits.len(), 1);
        assert_eq!(fits[0].id, ComponentId(2));
    }

    #[tokio::test]
    async fn test_unknown_candidate_is_an_error() {
        let use_case = CheckCompatibilityUseCase::new(store());
        assert!(use_case.check(&[], ComponentId(99)).await.is_err());
    }
}
