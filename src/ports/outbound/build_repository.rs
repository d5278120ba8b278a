use crate::build_planning::domain::{Build, BuildId, BuildUpdate, NewBuild, UserId};
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// BuildRepository port for the build aggregate
///
/// The repository owns id assignment, timestamps, and transactional
/// isolation. In particular `replace_lines` must be atomic relative to
/// concurrent reads of the same build: the core assumes an atomic wholesale
/// replace primitive and never diffs association rows itself.
#[async_trait]
pub trait BuildRepository: Send + Sync {
    /// Persists a new build and its lines, assigning id and timestamps.
    async fn insert(&self, build: NewBuild) -> Result<Build>;

    /// Fetches a build by id
    ///
    /// # Errors
    /// Returns [`ForgeError::BuildNotFound`](crate::shared::ForgeError) for
    /// an unknown id.
    async fn get(&self, id: BuildId) -> Result<Build>;

    /// Atomically replaces the build's mutable state: title, description,
    /// all lines, the recomputed total, and (optionally) visibility.
    async fn replace_lines(&self, id: BuildId, update: BuildUpdate) -> Result<Build>;

    /// Deletes a build, cascading its lines.
    async fn delete(&self, id: BuildId) -> Result<()>;

    /// Lists builds owned by the user, oldest first.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Build>>;

    /// Lists public builds, oldest first.
    async fn list_public(&self) -> Result<Vec<Build>>;

    /// Returns the build's share token, minting one if not yet shared.
    /// Calling this twice returns the same token.
    async fn ensure_share_token(&self, id: BuildId) -> Result<Uuid>;
}

// Lets use cases share one store without an extra indirection layer.
#[async_trait]
impl<T: BuildRepository + ?Sized> BuildRepository for Arc<T> {
    async fn insert(&self, build: NewBuild) -> Result<Build> {
        (**self).insert(build).await
    }

    async fn get(&self, id: BuildId) -> Result<Build> {
        (**self).get(id).await
    }

    async fn replace_lines(&self, id: BuildId, update: BuildUpdate) -> Result<Build> {
        (**self).replace_lines(id, update).await
    }

    async fn delete(&self, id: BuildId) -> Result<()> {
        (**self).delete(id).await
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Build>> {
        (**self).list_by_user(user_id).await
    }

    async fn list_public(&self) -> Result<Vec<Build>> {
        (**self).list_public().await
    }

    async fn ensure_share_token(&self, id: BuildId) -> Result<Uuid> {
        (**self).ensure_share_token(id).await
    }
}
