use crate::application::dto::{
    CreateBuildRequest, PartSelection, UpdateBuildRequest, ValidationReport,
};
use crate::build_planning::domain::{
    Build, BuildId, BuildLine, BuildUpdate, Component, NewBuild, UserId,
};
use crate::build_planning::policies::RequiredCategories;
use crate::build_planning::services::{pricing, CompatibilityChecker};
use crate::ports::outbound::{BuildRepository, ComponentRepository};
use crate::shared::{ForgeError, Result};
use rust_decimal::Decimal;
use uuid::Uuid;

/// A parts-list entry resolved against the catalog.
///
/// The component is the snapshot read during validation; its price is the
/// one frozen into the build line, regardless of later catalog changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPart {
    pub component: Component,
    pub quantity: u32,
}

impl ResolvedPart {
    fn to_line(&self) -> BuildLine {
        BuildLine {
            component_id: self.component.id,
            name: self.component.name.clone(),
            quantity: self.quantity,
            price_at_time: self.component.price,
        }
    }
}

/// BuildAssembler - orchestrates validation, pricing, and persistence of
/// builds
///
/// Validation is a pure pipeline over a snapshot of the catalog:
/// resolve ids, enforce the category composition policy, then run the
/// compatibility engine for every component against all *others* in the
/// list. The same all-others semantics is used by the incremental
/// compatibility use case, so the two paths cannot disagree on slot
/// counting.
///
/// # Type Parameters
/// * `CR` - ComponentRepository implementation
/// * `BR` - BuildRepository implementation
pub struct BuildAssembler<CR, BR> {
    components: CR,
    builds: BR,
}

impl<CR, BR> BuildAssembler<CR, BR>
where
    CR: ComponentRepository,
    BR: BuildRepository,
{
    /// Creates a new BuildAssembler with injected storage collaborators
    pub fn new(components: CR, builds: BR) -> Self {
        Self { components, builds }
    }

    /// Validates a parts list against the catalog and the compatibility
    /// rules.
    ///
    /// # Returns
    /// The resolved component snapshots on success. Validation has no side
    /// effects: running it twice over an unchanged list yields the same
    /// outcome.
    ///
    /// # Errors
    /// * [`ForgeError::EmptyParts`] for an empty list
    /// * [`ForgeError::Validation`] for a zero quantity
    /// * [`ForgeError::ComponentNotFound`] for an unresolved id
    /// * [`ForgeError::DuplicateCategory`] when a single-occurrence
    ///   category appears twice
    /// * [`ForgeError::MissingRequired`] naming every absent required
    ///   category
    /// * [`ForgeError::Incompatible`] carrying the first rule violation
    pub async fn validate(&self, parts: &[PartSelection]) -> Result<Vec<ResolvedPart>> {
        if parts.is_empty() {
            return Err(ForgeError::EmptyParts.into());
        }

        // Resolve each id once; the snapshot is threaded through pricing so
        // a concurrent catalog update cannot alter this build mid-flight.
        let mut resolved = Vec::with_capacity(parts.len());
        for part in parts {
            if part.quantity == 0 {
                return Err(ForgeError::Validation {
                    message: format!(
                        "Quantity for component {} must be at least 1",
                        part.component_id
                    ),
                }
                .into());
            }
            let component = self.components.get(part.component_id).await?;
            resolved.push(ResolvedPart {
                component,
                quantity: part.quantity,
            });
        }

        let components: Vec<Component> =
            resolved.iter().map(|part| part.component.clone()).collect();

        if let Some(category) = RequiredCategories::duplicated(&components) {
            return Err(ForgeError::DuplicateCategory { category }.into());
        }

        let missing = RequiredCategories::missing(&components);
        if !missing.is_empty() {
            return Err(ForgeError::MissingRequired {
                categories: missing,
            }
            .into());
        }

        // Each component against all others, not just against the ones
        // before it: rules like CPU/motherboard sockets are checked
        // one-directionally per invocation, and this is where symmetry
        // comes from.
        for (index, part) in resolved.iter().enumerate() {
            let others: Vec<Component> = components
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != index)
                .map(|(_, component)| component.clone())
                .collect();
            CompatibilityChecker::check(&others, &part.component)
                .map_err(ForgeError::Incompatible)?;
        }

        Ok(resolved)
    }

    /// Validates a parts list and folds the outcome into a report DTO.
    ///
    /// Domain rejections become report entries (missing categories one per
    /// gap); infrastructure failures still propagate as errors.
    pub async fn validate_report(&self, parts: &[PartSelection]) -> Result<ValidationReport> {
        match self.validate(parts).await {
            Ok(_) => Ok(ValidationReport::valid()),
            Err(error) => match error.downcast::<ForgeError>() {
                Ok(ForgeError::MissingRequired { categories }) => Ok(ValidationReport::invalid(
                    categories
                        .into_iter()
                        .map(|category| format!("Missing required component: {}", category))
                        .collect(),
                )),
                Ok(rejection) => Ok(ValidationReport::invalid(vec![rejection.to_string()])),
                Err(other) => Err(other),
            },
        }
    }

    /// Computes the exact total of a resolved parts list.
    pub fn total_price(parts: &[ResolvedPart]) -> Decimal {
        let lines: Vec<BuildLine> = parts.iter().map(ResolvedPart::to_line).collect();
        pricing::total_price(&lines)
    }

    /// Creates a build from a validated parts list, freezing each line's
    /// price at assembly time.
    pub async fn create_build(&self, request: CreateBuildRequest) -> Result<Build> {
        let resolved = self.validate(&request.parts).await?;
        let lines: Vec<BuildLine> = resolved.iter().map(ResolvedPart::to_line).collect();
        let total_price = pricing::total_price(&lines);

        self.builds
            .insert(NewBuild {
                user_id: request.user_id,
                title: request.title,
                description: request.description,
                lines,
                total_price,
                is_public: request.is_public,
            })
            .await
    }

    /// Re-validates and updates an existing build, replacing all of its
    /// lines wholesale. The previous lines are never merged with the new
    /// ones.
    pub async fn update_build(&self, id: BuildId, request: UpdateBuildRequest) -> Result<Build> {
        // Surface an unknown build before running validation.
        self.builds.get(id).await?;

        let resolved = self.validate(&request.parts).await?;
        let lines: Vec<BuildLine> = resolved.iter().map(ResolvedPart::to_line).collect();
        let total_price = pricing::total_price(&lines);

        self.builds
            .replace_lines(
                id,
                BuildUpdate {
                    title: request.title,
                    description: request.description,
                    lines,
                    total_price,
                    is_public: request.is_public,
                },
            )
            .await
    }

    pub async fn get_build(&self, id: BuildId) -> Result<Build> {
        self.builds.get(id).await
    }

    pub async fn delete_build(&self, id: BuildId) -> Result<()> {
        self.builds.delete(id).await
    }

    pub async fn user_builds(&self, user_id: UserId) -> Result<Vec<Build>> {
        self.builds.list_by_user(user_id).await
    }

    pub async fn public_builds(&self) -> Result<Vec<Build>> {
        self.builds.list_public().await
    }

    /// Returns the build's share token, minting one on first use.
    pub async fn share_build(&self, id: BuildId) -> Result<Uuid> {
        self.builds.ensure_share_token(id).await
    }
}
