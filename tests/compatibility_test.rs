/// Integration tests for the compatibility use case
mod test_utilities;

use rigforge::prelude::*;
use rust_decimal_macros::dec;
use test_utilities::mocks::MockComponentRepository;

fn component(id: u64, name: &str, category: Category) -> Component {
    Component::new(ComponentId(id), name, category, dec!(1000.00)).unwrap()
}

fn catalog() -> Vec<Component> {
    vec![
        component(1, "Ryzen 7 5800X", Category::Cpu)
            .with_spec("socket", "AM4")
            .with_spec("tdp", 105),
        component(2, "Core i5-12600K", Category::Cpu)
            .with_spec("socket", "LGA 1700")
            .with_spec("tdp", 125),
        component(3, "B550 Tomahawk", Category::Motherboard)
            .with_spec("socket", "AM4")
            .with_spec("ram_type", "DDR4")
            .with_spec("generation", "DDR4")
            .with_spec("max_ram_speed", 4400)
            .with_spec("ram_slots", 2)
            .with_spec("nvme_slots", 1)
            .with_spec("form_factor", "ATX"),
        component(4, "Z690 Edge", Category::Motherboard)
            .with_spec("socket", "LGA 1700")
            .with_spec("ram_type", "DDR5")
            .with_spec("generation", "DDR5")
            .with_spec("max_ram_speed", 6400)
            .with_spec("ram_slots", 4)
            .with_spec("form_factor", "ATX"),
        component(5, "Vengeance 16GB", Category::Ram)
            .with_spec("ram_type", "DDR4")
            .with_spec("generation", "DDR4")
            .with_spec("speed", 3200),
        component(6, "Fury DDR5 32GB", Category::Ram)
            .with_spec("ram_type", "DDR5")
            .with_spec("generation", "DDR5")
            .with_spec("speed", 5600),
        component(7, "SN850X 1TB", Category::Storage).with_spec("type", "NVMe"),
        component(8, "SN850X 2TB", Category::Storage).with_spec("type", "NVMe"),
    ]
}

fn use_case() -> CheckCompatibilityUseCase<InMemoryComponentStore> {
    CheckCompatibilityUseCase::new(InMemoryComponentStore::with_components(catalog()))
}

#[tokio::test]
async fn test_candidate_checked_against_whole_selection() {
    // One NVMe slot on the board, one NVMe drive already selected.
    let use_case = use_case();
    let report = use_case
        .check(&[ComponentId(3), ComponentId(7)], ComponentId(8))
        .await
        .unwrap();
    assert!(!report.compatible);
    assert!(report.reason.unwrap().contains("NVMe"));
}

#[tokio::test]
async fn test_empty_selection_accepts_anything() {
    let use_case = use_case();
    let report = use_case.check(&[], ComponentId(6)).await.unwrap();
    assert!(report.compatible);
}

#[tokio::test]
async fn test_listing_matches_single_checks() {
    // Whatever the listing returns must also pass the one-off check.
    let use_case = use_case();
    let selected = vec![ComponentId(1), ComponentId(3)];
    let fits = use_case.compatible_components(&selected).await.unwrap();

    assert!(!fits.is_empty());
    for candidate in &fits {
        let report = use_case.check(&selected, candidate.id).await.unwrap();
        assert!(
            report.compatible,
            "{} was listed but fails the single check",
            candidate.name
        );
    }
}

#[tokio::test]
async fn test_listing_excludes_the_selection_itself() {
    let use_case = use_case();
    let selected = vec![ComponentId(1), ComponentId(3)];
    let fits = use_case.compatible_components(&selected).await.unwrap();
    assert!(fits.iter().all(|c| !selected.contains(&c.id)));
}

#[tokio::test]
async fn test_listing_filters_cross_platform_parts() {
    let use_case = use_case();
    let fits = use_case
        .compatible_components(&[ComponentId(1), ComponentId(3)])
        .await
        .unwrap();
    let ids: Vec<ComponentId> = fits.iter().map(|c| c.id).collect();

    // DDR4 stick fits, DDR5 stick and the Intel platform parts do not.
    assert!(ids.contains(&ComponentId(5)));
    assert!(!ids.contains(&ComponentId(2)));
    assert!(!ids.contains(&ComponentId(4)));
    assert!(!ids.contains(&ComponentId(6)));
}

#[tokio::test]
async fn test_unknown_selected_id_is_an_error() {
    let use_case = use_case();
    let result = use_case.check(&[ComponentId(99)], ComponentId(1)).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_repository_failure_propagates() {
    let use_case = CheckCompatibilityUseCase::new(MockComponentRepository::with_failure());
    assert!(use_case.compatible_components(&[]).await.is_err());
}
