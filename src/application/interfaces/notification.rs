use crate::error::AppError;
use crate::model::auth::Credentials;
use crate::model::responses::{Notification, NotificationSpec};
use async_trait::async_trait;

/// Interface for availability notifications
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Lists the active notifications of the user
    async fn list_notifications(
        &self,
        credentials: &Credentials,
    ) -> Result<Vec<Notification>, AppError>;

    /// Creates or updates the notification described by `spec`
    async fn create_notification(
        &self,
        credentials: &Credentials,
        spec: &NotificationSpec,
    ) -> Result<(), AppError>;

    /// Deletes the notification described by `spec`
    ///
    /// Only the venue, day, party size and service type identify a
    /// notification; the preferred times are ignored.
    async fn delete_notification(
        &self,
        credentials: &Credentials,
        spec: &NotificationSpec,
    ) -> Result<(), AppError>;
}
