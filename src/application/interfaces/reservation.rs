use crate::error::AppError;
use crate::model::auth::Credentials;
use crate::model::responses::{PaymentMethod, Reservation, ReservationDetails, ReservationSlot};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Interface for the reservation endpoints
#[async_trait]
pub trait ReservationService: Send + Sync {
    /// Gets the bookable slots of a venue
    ///
    /// # Arguments
    /// * `credentials` - Credentials attached to the request
    /// * `venue_id` - Resy venue id
    /// * `day` - Day to search
    /// * `party_size` - Number of guests
    ///
    /// # Returns
    /// * Every slot of every venue in the result, possibly none
    async fn find_reservations(
        &self,
        credentials: &Credentials,
        venue_id: &str,
        day: NaiveDate,
        party_size: u8,
    ) -> Result<Vec<ReservationSlot>, AppError>;

    /// Exchanges a slot config token for booking details
    async fn reservation_details(
        &self,
        credentials: &Credentials,
        config_token: &str,
        day: NaiveDate,
        party_size: u8,
    ) -> Result<ReservationDetails, AppError>;

    /// Books a reservation with a book token from [`Self::reservation_details`]
    async fn book_reservation(
        &self,
        credentials: &Credentials,
        book_token: &str,
        payment_method: PaymentMethod,
    ) -> Result<Reservation, AppError>;

    /// Cancels a reservation by the token returned when it was booked
    async fn cancel_reservation(
        &self,
        credentials: &Credentials,
        resy_token: &str,
    ) -> Result<(), AppError>;
}
