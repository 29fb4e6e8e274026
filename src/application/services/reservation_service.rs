use crate::application::client::Client;
use crate::application::interfaces::reservation::ReservationService;
use crate::error::AppError;
use crate::model::auth::Credentials;
use crate::model::endpoint::{
    BOOK_RESERVATION, CANCEL_RESERVATION, FIND_RESERVATIONS, RESERVATION_DETAILS,
};
use crate::model::http::Transport;
use crate::model::request::Params;
use crate::model::requests::{
    BookReservationRequest, CancelReservationRequest, FindReservationsRequest,
    ReservationDetailsRequest,
};
use crate::model::responses::{PaymentMethod, Reservation, ReservationDetails, ReservationSlot};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, info};

#[async_trait]
impl<T: Transport + 'static> ReservationService for Client<T> {
    async fn find_reservations(
        &self,
        credentials: &Credentials,
        venue_id: &str,
        day: NaiveDate,
        party_size: u8,
    ) -> Result<Vec<ReservationSlot>, AppError> {
        info!(
            "Finding reservations at venue {} on {} for {}",
            venue_id, day, party_size
        );
        let params = Params::from_serialize(&FindReservationsRequest::new(
            venue_id, day, party_size,
        ))?;

        let slots = self
            .execute(&FIND_RESERVATIONS, &params, credentials)
            .await?
            .into_slots();

        debug!("Slots obtained: {} slots", slots.len());
        Ok(slots)
    }

    async fn reservation_details(
        &self,
        credentials: &Credentials,
        config_token: &str,
        day: NaiveDate,
        party_size: u8,
    ) -> Result<ReservationDetails, AppError> {
        info!("Getting reservation details for {}", day);
        let params = Params::from_serialize(&ReservationDetailsRequest::new(
            config_token,
            day,
            party_size,
        ))?;

        let details = self
            .execute(&RESERVATION_DETAILS, &params, credentials)
            .await?;

        debug!(
            "Reservation details obtained: {} payment methods",
            details.user.payment_methods.len()
        );
        Ok(details)
    }

    async fn book_reservation(
        &self,
        credentials: &Credentials,
        book_token: &str,
        payment_method: PaymentMethod,
    ) -> Result<Reservation, AppError> {
        info!("Booking reservation");
        let params = Params::from_serialize(&BookReservationRequest::new(
            book_token,
            payment_method,
        ))?;

        let reservation = self
            .execute(&BOOK_RESERVATION, &params, credentials)
            .await?;

        info!(
            "Reservation {} booked with status {}",
            reservation.id,
            reservation.status.as_deref().unwrap_or("unknown")
        );
        Ok(reservation)
    }

    async fn cancel_reservation(
        &self,
        credentials: &Credentials,
        resy_token: &str,
    ) -> Result<(), AppError> {
        info!("Cancelling reservation");
        let params = Params::from_serialize(&CancelReservationRequest {
            resy_token: resy_token.to_owned(),
        })?;

        self.execute_ack(&CANCEL_RESERVATION, &params, credentials)
            .await?;

        info!("Reservation cancelled");
        Ok(())
    }
}
