use crate::application::client::Client;
use crate::application::interfaces::notification::NotificationService;
use crate::error::AppError;
use crate::model::auth::Credentials;
use crate::model::endpoint::{CREATE_NOTIFICATION, DELETE_NOTIFICATION, LIST_NOTIFICATIONS};
use crate::model::http::Transport;
use crate::model::request::Params;
use crate::model::requests::DeleteNotificationRequest;
use crate::model::responses::{Notification, NotificationSpec};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl<T: Transport + 'static> NotificationService for Client<T> {
    async fn list_notifications(
        &self,
        credentials: &Credentials,
    ) -> Result<Vec<Notification>, AppError> {
        info!("Listing notifications");
        let list = self
            .execute(&LIST_NOTIFICATIONS, &Params::new(), credentials)
            .await?;
        debug!("Notifications obtained: {}", list.notify.len());
        Ok(list.notify)
    }

    async fn create_notification(
        &self,
        credentials: &Credentials,
        spec: &NotificationSpec,
    ) -> Result<(), AppError> {
        info!(
            "Creating notification for venue {} on {}",
            spec.venue_id, spec.day
        );
        let params = Params::from_serialize(spec)?;
        self.execute_ack(&CREATE_NOTIFICATION, &params, credentials)
            .await
    }

    async fn delete_notification(
        &self,
        credentials: &Credentials,
        spec: &NotificationSpec,
    ) -> Result<(), AppError> {
        info!(
            "Deleting notification for venue {} on {}",
            spec.venue_id, spec.day
        );
        let params = Params::from_serialize(&DeleteNotificationRequest::from(spec))?;
        self.execute_ack(&DELETE_NOTIFICATION, &params, credentials)
            .await
    }
}
