use crate::build_planning::domain::{
    BuildId, Comment, Notification, NotificationId, NotificationKind, UserId,
};
use crate::ports::outbound::{BuildRepository, SocialRepository};
use crate::shared::{ForgeError, Result};
use uuid::Uuid;

/// Engagement - likes, comments, and the notifications they trigger
///
/// Every interaction first resolves the build, so engagement on a deleted
/// build fails the same way everywhere. Owners are notified about other
/// people's likes and comments but never about their own.
///
/// # Type Parameters
/// * `SR` - SocialRepository implementation
/// * `BR` - BuildRepository implementation
pub struct Engagement<SR, BR> {
    social: SR,
    builds: BR,
}

impl<SR, BR> Engagement<SR, BR>
where
    SR: SocialRepository,
    BR: BuildRepository,
{
    pub fn new(social: SR, builds: BR) -> Self {
        Self { social, builds }
    }

    /// Likes a build.
    ///
    /// # Returns
    /// `false` when the user had already liked it; liking twice is a no-op
    /// and does not notify the owner again.
    pub async fn like(&self, user_id: UserId, build_id: BuildId) -> Result<bool> {
        let build = self.builds.get(build_id).await?;
        let added = self.social.add_like(user_id, build_id).await?;

        if added && build.user_id != user_id {
            self.social
                .push_notification(
                    build.user_id,
                    user_id,
                    NotificationKind::Like,
                    build_id,
                    format!("Your build \"{}\" received a like", build.title),
                )
                .await?;
        }
        Ok(added)
    }

    /// Removes the user's like, if any.
    pub async fn unlike(&self, user_id: UserId, build_id: BuildId) -> Result<bool> {
        self.builds.get(build_id).await?;
        self.social.remove_like(user_id, build_id).await
    }

    pub async fn like_count(&self, build_id: BuildId) -> Result<usize> {
        self.social.like_count(build_id).await
    }

    /// Comments on a build and notifies its owner.
    ///
    /// # Errors
    /// Returns [`ForgeError::Validation`] for empty or whitespace-only
    /// content.
    pub async fn comment(
        &self,
        user_id: UserId,
        build_id: BuildId,
        content: &str,
    ) -> Result<Comment> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ForgeError::Validation {
                message: "Comment content cannot be empty".to_string(),
            }
            .into());
        }

        let build = self.builds.get(build_id).await?;
        let comment = self
            .social
            .add_comment(user_id, build_id, content.to_string())
            .await?;

        if build.user_id != user_id {
            self.social
                .push_notification(
                    build.user_id,
                    user_id,
                    NotificationKind::Comment,
                    build_id,
                    format!("New comment on your build \"{}\"", build.title),
                )
                .await?;
        }
        Ok(comment)
    }

    pub async fn comments(&self, build_id: BuildId) -> Result<Vec<Comment>> {
        self.builds.get(build_id).await?;
        self.social.list_comments(build_id).await
    }

    /// Returns the build's share token, minting one on first use. The
    /// token is stable across calls.
    pub async fn share(&self, build_id: BuildId) -> Result<Uuid> {
        self.builds.ensure_share_token(build_id).await
    }

    pub async fn notifications(&self, user_id: UserId) -> Result<Vec<Notification>> {
        self.social.notifications_for(user_id).await
    }

    pub async fn mark_notification_read(&self, user_id: UserId, id: NotificationId) -> Result<()> {
        self.social.mark_read(user_id, id).await
    }
}
