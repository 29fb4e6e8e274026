use crate::error::AppError;
use crate::model::auth::Credentials;
use crate::model::responses::{RestaurantCityConfig, Venue, VenueHit};
use async_trait::async_trait;

/// Interface for the venue and location endpoints
#[async_trait]
pub trait VenueService: Send + Sync {
    /// Gets every city of the Resy network
    async fn city_configs(
        &self,
        credentials: &Credentials,
    ) -> Result<Vec<RestaurantCityConfig>, AppError>;

    /// Searches a venue by name around a city
    ///
    /// Assumes the name is specific enough that the best hit is the venue the
    /// caller means.
    ///
    /// # Returns
    /// * `Some(VenueHit)` - The best match
    /// * `None` - Nothing matched
    async fn search_venue(
        &self,
        credentials: &Credentials,
        city: &RestaurantCityConfig,
        name: &str,
    ) -> Result<Option<VenueHit>, AppError>;

    /// Gets the details of one venue
    async fn venue(&self, credentials: &Credentials, venue_id: &str) -> Result<Venue, AppError>;
}
