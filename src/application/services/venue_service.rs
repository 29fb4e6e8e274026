use crate::application::client::Client;
use crate::application::interfaces::venue::VenueService;
use crate::error::AppError;
use crate::model::auth::Credentials;
use crate::model::endpoint::{LOCATION_CONFIG, VENUE, VENUE_SEARCH};
use crate::model::http::Transport;
use crate::model::request::Params;
use crate::model::requests::{VenueRequest, VenueSearchRequest};
use crate::model::responses::{RestaurantCityConfig, Venue, VenueHit};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl<T: Transport + 'static> VenueService for Client<T> {
    async fn city_configs(
        &self,
        credentials: &Credentials,
    ) -> Result<Vec<RestaurantCityConfig>, AppError> {
        info!("Loading city configurations");
        let cities = self
            .execute(&LOCATION_CONFIG, &Params::new(), credentials)
            .await?;
        debug!("City configurations obtained: {} cities", cities.len());
        Ok(cities)
    }

    async fn search_venue(
        &self,
        credentials: &Credentials,
        city: &RestaurantCityConfig,
        name: &str,
    ) -> Result<Option<VenueHit>, AppError> {
        info!("Searching venue {:?} in {}", name, city.url_slug);
        let params = Params::from_serialize(&VenueSearchRequest::new(city, name))?;

        let search = self.execute(&VENUE_SEARCH, &params, credentials).await?;

        debug!("Venue search returned {} hits", search.search.hits.len());
        Ok(search.first_hit().cloned())
    }

    async fn venue(&self, credentials: &Credentials, venue_id: &str) -> Result<Venue, AppError> {
        info!("Getting venue {}", venue_id);
        let params = Params::from_serialize(&VenueRequest {
            id: venue_id.to_owned(),
        })?;
        self.execute(&VENUE, &params, credentials).await
    }
}
