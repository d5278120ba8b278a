/// Integration tests for build assembly and pricing
mod test_utilities;

use rigforge::prelude::*;
use rust_decimal_macros::dec;
use std::sync::Arc;
use test_utilities::mocks::MockComponentRepository;

fn catalog() -> Vec<Component> {
    vec![
        Component::new(ComponentId(1), "Ryzen 7 5800X", Category::Cpu, dec!(35000.00))
            .unwrap()
            .with_spec("socket", "AM4")
            .with_spec("tdp", 105),
        Component::new(
            ComponentId(2),
            "B550 Tomahawk",
            Category::Motherboard,
            dec!(25000.00),
        )
        .unwrap()
        .with_spec("socket", "AM4")
        .with_spec("ram_type", "DDR4")
        .with_spec("generation", "DDR4")
        .with_spec("max_ram_speed", 4400)
        .with_spec("ram_slots", 4)
        .with_spec("form_factor", "ATX"),
        Component::new(ComponentId(3), "Vengeance 16GB", Category::Ram, dec!(12000.00))
            .unwrap()
            .with_spec("ram_type", "DDR4")
            .with_spec("generation", "DDR4")
            .with_spec("speed", 3200),
        Component::new(ComponentId(4), "RM750", Category::Psu, dec!(15000.00))
            .unwrap()
            .with_spec("form_factor", "ATX")
            .with_spec("wattage", 750),
        Component::new(ComponentId(5), "Meshify 2", Category::Case, dec!(10000.00))
            .unwrap()
            .with_spec("form_factors", serde_json::json!(["ATX", "mATX"]))
            .with_spec("psu_form_factors", serde_json::json!(["ATX"]))
            .with_spec("max_gpu_length", 360)
            .with_spec("max_cooler_height", 170),
        Component::new(ComponentId(6), "RTX 4070", Category::Gpu, dec!(60000.00))
            .unwrap()
            .with_spec("length", 300)
            .with_spec("tdp", 200),
    ]
}

fn full_parts() -> Vec<PartSelection> {
    (1..=5).map(|id| PartSelection::one(ComponentId(id))).collect()
}

fn assembler_over(
    store: Arc<InMemoryComponentStore>,
) -> BuildAssembler<Arc<InMemoryComponentStore>, Arc<InMemoryBuildStore>> {
    BuildAssembler::new(store, Arc::new(InMemoryBuildStore::new()))
}

fn create_request(parts: Vec<PartSelection>) -> CreateBuildRequest {
    CreateBuildRequest {
        user_id: UserId(1),
        title: "Mid-range gaming rig".to_string(),
        description: "First build".to_string(),
        parts,
        is_public: false,
    }
}

#[tokio::test]
async fn test_create_build_happy_path() {
    let store = Arc::new(InMemoryComponentStore::with_components(catalog()));
    let assembler = assembler_over(store);

    let build = assembler
        .create_build(create_request(full_parts()))
        .await
        .unwrap();

    assert_eq!(build.lines.len(), 5);
    assert_eq!(build.total_price, dec!(97000.00));
    assert_eq!(build.user_id, UserId(1));
    assert!(build.share_token.is_none());
}

#[tokio::test]
async fn test_quantity_multiplies_line_total() {
    let store = Arc::new(InMemoryComponentStore::with_components(catalog()));
    let assembler = assembler_over(store);

    let mut parts = full_parts();
    // Two RAM kits.
    parts[2] = PartSelection::new(ComponentId(3), 2);

    let build = assembler.create_build(create_request(parts)).await.unwrap();
    assert_eq!(build.total_price, dec!(109000.00));
}

#[tokio::test]
async fn test_ram_quantity_does_not_consume_slots() {
    let store = Arc::new(InMemoryComponentStore::with_components(catalog()));
    let assembler = assembler_over(store);

    // One RAM line with quantity 5 on a 4-slot board: slot checks count
    // lines, so the build still validates and only the price scales.
    let mut parts = full_parts();
    parts[2] = PartSelection::new(ComponentId(3), 5);

    let build = assembler.create_build(create_request(parts)).await.unwrap();
    assert_eq!(build.total_price, dec!(145000.00));
}

#[tokio::test]
async fn test_price_frozen_after_catalog_change() {
    let store = Arc::new(InMemoryComponentStore::with_components(catalog()));
    let assembler = assembler_over(Arc::clone(&store));

    let build = assembler
        .create_build(create_request(full_parts()))
        .await
        .unwrap();

    store
        .update_price(ComponentId(1), dec!(40000.00))
        .await
        .unwrap();

    let reloaded = assembler.get_build(build.id).await.unwrap();
    assert_eq!(reloaded.lines[0].price_at_time, dec!(35000.00));
    assert_eq!(reloaded.total_price, dec!(97000.00));

    // A fresh assembly sees the new price.
    let fresh = assembler
        .create_build(create_request(full_parts()))
        .await
        .unwrap();
    assert_eq!(fresh.total_price, dec!(102000.00));
}

#[tokio::test]
async fn test_missing_required_categories_reported_individually() {
    let store = Arc::new(InMemoryComponentStore::with_components(catalog()));
    let assembler = assembler_over(store);

    let parts = vec![
        PartSelection::one(ComponentId(1)),
        PartSelection::one(ComponentId(2)),
    ];
    let report = assembler.validate_report(&parts).await.unwrap();
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 3);
    assert!(report.errors.iter().any(|e| e.contains("RAM")));
    assert!(report.errors.iter().any(|e| e.contains("PSU")));
    assert!(report.errors.iter().any(|e| e.contains("Case")));
}

#[tokio::test]
async fn test_unknown_component_is_an_error_not_a_report() {
    let store = Arc::new(InMemoryComponentStore::with_components(catalog()));
    let assembler = assembler_over(store);

    let mut parts = full_parts();
    parts.push(PartSelection::one(ComponentId(99)));

    let err = assembler.validate(&parts).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ForgeError>(),
        Some(ForgeError::ComponentNotFound {
            id: ComponentId(99)
        })
    ));
}

#[tokio::test]
async fn test_infrastructure_failures_propagate_from_validate_report() {
    let assembler = BuildAssembler::new(
        MockComponentRepository::with_failure(),
        InMemoryBuildStore::new(),
    );

    let result = assembler
        .validate_report(&[PartSelection::one(ComponentId(1))])
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_update_replaces_lines_wholesale() {
    let store = Arc::new(InMemoryComponentStore::with_components(catalog()));
    let assembler = assembler_over(store);

    let build = assembler
        .create_build(create_request(full_parts()))
        .await
        .unwrap();

    let mut parts = full_parts();
    parts.push(PartSelection::one(ComponentId(6)));

    let updated = assembler
        .update_build(
            build.id,
            UpdateBuildRequest {
                title: "Now with a GPU".to_string(),
                description: String::new(),
                parts,
                is_public: Some(true),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.lines.len(), 6);
    assert_eq!(updated.total_price, dec!(157000.00));
    assert_eq!(updated.title, "Now with a GPU");
    assert!(updated.is_public);
}

#[tokio::test]
async fn test_update_unknown_build_fails_before_validation() {
    let store = Arc::new(InMemoryComponentStore::with_components(catalog()));
    let assembler = assembler_over(store);

    let err = assembler
        .update_build(
            BuildId(42),
            UpdateBuildRequest {
                title: String::new(),
                description: String::new(),
                parts: Vec::new(),
                is_public: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ForgeError>(),
        Some(ForgeError::BuildNotFound { id: BuildId(42) })
    ));
}

#[tokio::test]
async fn test_delete_build() {
    let store = Arc::new(InMemoryComponentStore::with_components(catalog()));
    let assembler = assembler_over(store);

    let build = assembler
        .create_build(create_request(full_parts()))
        .await
        .unwrap();
    assembler.delete_build(build.id).await.unwrap();
    assert!(assembler.get_build(build.id).await.is_err());
}

#[tokio::test]
async fn test_public_listing_excludes_private_builds() {
    let store = Arc::new(InMemoryComponentStore::with_components(catalog()));
    let assembler = assembler_over(store);

    assembler
        .create_build(create_request(full_parts()))
        .await
        .unwrap();
    let mut public_request = create_request(full_parts());
    public_request.is_public = true;
    public_request.title = "Shared rig".to_string();
    assembler.create_build(public_request).await.unwrap();

    let public = assembler.public_builds().await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].title, "Shared rig");

    let mine = assembler.user_builds(UserId(1)).await.unwrap();
    assert_eq!(mine.len(), 2);
}

#[tokio::test]
async fn test_share_token_is_minted_once() {
    let store = Arc::new(InMemoryComponentStore::with_components(catalog()));
    let assembler = assembler_over(store);

    let build = assembler
        .create_build(create_request(full_parts()))
        .await
        .unwrap();
    let first = assembler.share_build(build.id).await.unwrap();
    let second = assembler.share_build(build.id).await.unwrap();
    assert_eq!(first, second);
}
