use crate::build_planning::domain::{
    BuildId, Comment, CommentId, Like, Notification, NotificationId, NotificationKind, UserId,
};
use crate::ports::outbound::SocialRepository;
use crate::shared::{ForgeError, Result};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::{DashMap, DashSet};
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory SocialRepository backed by concurrent maps.
#[derive(Default)]
pub struct InMemorySocialStore {
    likes: DashSet<(UserId, BuildId)>,
    like_times: DashMap<(UserId, BuildId), Like>,
    comments: DashMap<CommentId, Comment>,
    notifications: DashMap<NotificationId, Notification>,
    next_comment_id: AtomicU64,
    next_notification_id: AtomicU64,
}

impl InMemorySocialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SocialRepository for InMemorySocialStore {
    async fn add_like(&self, user_id: UserId, build_id: BuildId) -> Result<bool> {
        let inserted = self.likes.insert((user_id, build_id));
        if inserted {
            self.like_times.insert(
                (user_id, build_id),
                Like {
                    user_id,
                    build_id,
                    created_at: Utc::now(),
                },
            );
        }
        Ok(inserted)
    }

    async fn remove_like(&self, user_id: UserId, build_id: BuildId) -> Result<bool> {
        self.like_times.remove(&(user_id, build_id));
        Ok(self.likes.remove(&(user_id, build_id)).is_some())
    }

    async fn like_count(&self, build_id: BuildId) -> Result<usize> {
        Ok(self
            .likes
            .iter()
            .filter(|entry| entry.1 == build_id)
            .count())
    }

    async fn add_comment(
        &self,
        user_id: UserId,
        build_id: BuildId,
        content: String,
    ) -> Result<Comment> {
        let comment = Comment {
            id: CommentId(self.next_comment_id.fetch_add(1, Ordering::SeqCst) + 1),
            build_id,
            user_id,
            content,
            created_at: Utc::now(),
        };
        self.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn list_comments(&self, build_id: BuildId) -> Result<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments
            .iter()
            .filter(|entry| entry.build_id == build_id)
            .map(|entry| entry.clone())
            .collect();
        // Newest first, matching the feed ordering of the web frontend.
        comments.sort_by_key(|c| std::cmp::Reverse(c.id));
        Ok(comments)
    }

    async fn push_notification(
        &self,
        recipient: UserId,
        sender: UserId,
        kind: NotificationKind,
        build_id: BuildId,
        content: String,
    ) -> Result<Notification> {
        let notification = Notification {
            id: NotificationId(self.next_notification_id.fetch_add(1, Ordering::SeqCst) + 1),
            recipient,
            sender,
            kind,
            build_id,
            content,
            is_read: false,
            created_at: Utc::now(),
        };
        self.notifications
            .insert(notification.id, notification.clone());
        Ok(notification)
    }

    async fn notifications_for(&self, user_id: UserId) -> Result<Vec<Notification>> {
        let mut notifications: Vec<Notification> = self
            .notifications
            .iter()
            .filter(|entry| entry.recipient == user_id)
            .map(|entry| entry.clone())
            .collect();
        notifications.sort_by_key(|n| std::cmp::Reverse(n.id));
        Ok(notifications)
    }

    async fn mark_read(&self, user_id: UserId, id: NotificationId) -> Result<()> {
        let mut entry = self.notifications.get_mut(&id).ok_or_else(|| {
            ForgeError::Validation {
                message: format!("Notification not found: {}", id),
            }
        })?;
        if entry.recipient != user_id {
            anyhow::bail!("Notification {} does not belong to user {}", id, user_id);
        }
        entry.is_read = true;
        Ok(())
    }
}
