use crate::build_planning::domain::{Build, BuildId, BuildUpdate, NewBuild, UserId};
use crate::ports::outbound::BuildRepository;
use crate::shared::{ForgeError, Result};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// In-memory BuildRepository backed by a concurrent map.
///
/// `replace_lines` mutates the build under its map entry lock, which gives
/// the atomic wholesale-replace semantics the assembler relies on: a
/// concurrent `get` sees either the old line set or the new one, never a
/// mix.
#[derive(Default)]
pub struct InMemoryBuildStore {
    builds: DashMap<BuildId, Build>,
    next_id: AtomicU64,
}

impl InMemoryBuildStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&self) -> BuildId {
        BuildId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[async_trait]
impl BuildRepository for InMemoryBuildStore {
    async fn insert(&self, build: NewBuild) -> Result<Build> {
        let now = Utc::now();
        let stored = Build {
            id: self.allocate_id(),
            user_id: build.user_id,
            title: build.title,
            description: build.description,
            lines: build.lines,
            total_price: build.total_price,
            is_public: build.is_public,
            share_token: None,
            created_at: now,
            updated_at: now,
        };
        self.builds.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: BuildId) -> Result<Build> {
        self.builds
            .get(&id)
            .map(|entry| entry.clone())
            .ok_or_else(|| ForgeError::BuildNotFound { id }.into())
    }

    async fn replace_lines(&self, id: BuildId, update: BuildUpdate) -> Result<Build> {
        let mut entry = self
            .builds
            .get_mut(&id)
            .ok_or(ForgeError::BuildNotFound { id })?;
        entry.title = update.title;
        entry.description = update.description;
        entry.lines = update.lines;
        entry.total_price = update.total_price;
        if let Some(is_public) = update.is_public {
            entry.is_public = is_public;
        }
        entry.updated_at = Utc::now();
        Ok(entry.clone())
    }

    async fn delete(&self, id: BuildId) -> Result<()> {
        self.builds
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ForgeError::BuildNotFound { id }.into())
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Build>> {
        let mut builds: Vec<Build> = self
            .builds
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.clone())
            .collect();
        builds.sort_by_key(|b| b.id);
        Ok(builds)
    }

    async fn list_public(&self) -> Result<Vec<Build>> {
        let mut builds: Vec<Build> = self
            .builds
            .iter()
            .filter(|entry| entry.is_public)
            .map(|entry| entry.clone())
            .collect();
        builds.sort_by_key(|b| b.id);
        Ok(builds)
    }

    async fn ensure_share_token(&self, id: BuildId) -> Result<Uuid> {
        let mut entry = self
            .builds
            .get_mut(&id)
            .ok_or(ForgeError::BuildNotFound { id })?;
        if let Some(token) = entry.share_token {
            return Ok(token);
        }
        let token = Uuid::new_v4();
        entry.share_token = Some(token);
        entry.updated_at = Utc::now();
        Ok(token)
    }
}
