/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Find, pick and book
//!
//! One [`attempt_booking`] call runs find -> details -> book once and tags any
//! failure with the [`Step`] that produced it. [`book_with_retries`] repeats
//! attempts while the venue has nothing suitable or a lookup hit a transient
//! error. A failed book call is never repeated: the reservation may exist even
//! though the response was lost.

use crate::selection::{TimeMode, select_slot};
use chrono::{NaiveDate, NaiveTime};
use resy_client::prelude::*;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// What to book
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    /// Resy venue id
    pub venue_id: String,
    /// Day of the reservation
    pub day: NaiveDate,
    /// Number of guests
    pub party_size: u8,
    /// Wanted start time
    pub time: NaiveTime,
    /// How far from `time` a slot may be
    pub mode: TimeMode,
    /// Seating preference, matched ignoring case
    pub table_type: Option<String>,
}

/// Result of one booking attempt that reached Resy without failing
#[derive(Debug, Clone, PartialEq)]
pub enum Attempt {
    /// The reservation was made
    Booked(Reservation),
    /// The venue offered nothing for that day and party size
    NoSlots,
    /// Slots exist but none fits the time and table preferences
    NoMatch {
        /// Number of slots offered
        offered: usize,
    },
    /// The account has no payment method to guarantee the booking
    NoPaymentMethod,
}

impl Attempt {
    /// True when trying again later may change the outcome
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Attempt::NoSlots | Attempt::NoMatch { .. })
    }
}

/// Call of a booking attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Listing the venue's slots
    Find,
    /// Fetching the book token and payment methods of a slot
    Details,
    /// Booking the slot
    Book,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Find => "find",
            Step::Details => "details",
            Step::Book => "book",
        };
        f.write_str(name)
    }
}

/// A client error and the step it came from
#[derive(Debug, Error)]
#[error("{step} step failed: {source}")]
pub struct StepError {
    /// Where the attempt stopped
    pub step: Step,
    /// What the client reported
    #[source]
    pub source: AppError,
}

impl StepError {
    fn at(step: Step) -> impl FnOnce(AppError) -> Self {
        move |source| Self { step, source }
    }

    /// True when the attempt may be repeated without risking a second booking
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.step != Step::Book && is_transient(&self.source)
    }
}

/// Why [`book_with_retries`] gave up
#[derive(Debug, Error)]
pub enum BookingError {
    /// The account cannot guarantee a booking
    #[error("the Resy account has no payment method")]
    NoPaymentMethod,
    /// Every attempt found nothing suitable
    #[error("nothing to book after {attempts} attempt(s), last outcome {last:?}")]
    Exhausted {
        /// Attempts made
        attempts: u32,
        /// Outcome of the final attempt
        last: Attempt,
    },
    /// A call failed and was not repeated
    #[error(transparent)]
    Failed(#[from] StepError),
}

/// Runs find -> details -> book once
pub async fn attempt_booking<S: ReservationService + ?Sized>(
    service: &S,
    credentials: &Credentials,
    request: &BookingRequest,
) -> Result<Attempt, StepError> {
    let slots = service
        .find_reservations(credentials, &request.venue_id, request.day, request.party_size)
        .await
        .map_err(StepError::at(Step::Find))?;
    if slots.is_empty() {
        return Ok(Attempt::NoSlots);
    }

    let Some(slot) = select_slot(
        &slots,
        request.time,
        request.mode,
        request.table_type.as_deref(),
    ) else {
        return Ok(Attempt::NoMatch {
            offered: slots.len(),
        });
    };
    info!(
        "Selected {} slot at {}",
        slot.config.slot_type, slot.date.start
    );

    let details = service
        .reservation_details(credentials, &slot.config.token, request.day, request.party_size)
        .await
        .map_err(StepError::at(Step::Details))?;
    let Some(payment_method) = details.payment_method().copied() else {
        return Ok(Attempt::NoPaymentMethod);
    };

    let reservation = service
        .book_reservation(credentials, &details.book_token.value, payment_method)
        .await
        .map_err(StepError::at(Step::Book))?;
    Ok(Attempt::Booked(reservation))
}

/// Attempts a booking up to `retries + 1` times, sleeping `delay` in between
///
/// # Returns
/// * `Ok(Reservation)` - An attempt booked a slot
/// * `Err(BookingError::NoPaymentMethod)` - The account has no payment method
/// * `Err(BookingError::Exhausted)` - No attempt found a suitable slot
/// * `Err(BookingError::Failed)` - A call failed with a non-retryable error,
///   any failure of the book call included
pub async fn book_with_retries<S: ReservationService + ?Sized>(
    service: &S,
    credentials: &Credentials,
    request: &BookingRequest,
    retries: u8,
    delay: Duration,
) -> Result<Reservation, BookingError> {
    let mut attempt = 0u8;
    loop {
        let number = u32::from(attempt) + 1;
        let (last, failure) = match attempt_booking(service, credentials, request).await {
            Ok(Attempt::Booked(reservation)) => return Ok(reservation),
            Ok(Attempt::NoPaymentMethod) => return Err(BookingError::NoPaymentMethod),
            Ok(other) => {
                warn!("Attempt {} found nothing to book: {:?}", number, other);
                (other, None)
            }
            Err(err) if err.is_retryable() && attempt < retries => {
                warn!("Attempt {} failed: {}", number, err);
                (Attempt::NoSlots, Some(err.source))
            }
            Err(err) => return Err(err.into()),
        };

        if attempt >= retries {
            return Err(BookingError::Exhausted {
                attempts: number,
                last,
            });
        }
        attempt += 1;
        tokio::time::sleep(next_delay(failure.as_ref(), delay)).await;
    }
}

/// True for failures that may clear up on their own
#[must_use]
pub fn is_transient(err: &AppError) -> bool {
    match err {
        AppError::NetworkError(_) | AppError::TimeoutError(_) | AppError::RateLimited { .. } => {
            true
        }
        AppError::UpstreamError { status, .. } => status.is_server_error(),
        _ => false,
    }
}

/// Delay before the next attempt, honouring any `Retry-After` hint
#[must_use]
pub fn next_delay(err: Option<&AppError>, base: Duration) -> Duration {
    match err {
        Some(AppError::RateLimited {
            retry_after: Some(hint),
        }) => (*hint).max(base),
        _ => base,
    }
}
