use crate::build_planning::domain::{
    BuildId, Comment, Notification, NotificationId, NotificationKind, UserId,
};
use crate::shared::Result;
use async_trait::async_trait;

/// SocialRepository port for likes, comments, and notifications
#[async_trait]
pub trait SocialRepository: Send + Sync {
    /// Records a like. Returns false if the user had already liked the
    /// build (the like is unique per user and build).
    async fn add_like(&self, user_id: UserId, build_id: BuildId) -> Result<bool>;

    /// Removes a like. Returns false if there was none to remove.
    async fn remove_like(&self, user_id: UserId, build_id: BuildId) -> Result<bool>;

    /// Number of likes on the build.
    async fn like_count(&self, build_id: BuildId) -> Result<usize>;

    /// Records a comment, assigning its id and timestamp.
    async fn add_comment(
        &self,
        user_id: UserId,
        build_id: BuildId,
        content: String,
    ) -> Result<Comment>;

    /// Lists the build's comments, newest first.
    async fn list_comments(&self, build_id: BuildId) -> Result<Vec<Comment>>;

    /// Records a notification for the recipient, assigning its id.
    async fn push_notification(
        &self,
        recipient: UserId,
        sender: UserId,
        kind: NotificationKind,
        build_id: BuildId,
        content: String,
    ) -> Result<Notification>;

    /// Lists the user's notifications, newest first.
    async fn notifications_for(&self, user_id: UserId) -> Result<Vec<Notification>>;

    /// Marks one of the user's notifications as read.
    async fn mark_read(&self, user_id: UserId, id: NotificationId) -> Result<()>;
}
