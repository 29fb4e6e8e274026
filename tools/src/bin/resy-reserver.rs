/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use anyhow::anyhow;
use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use resy_client::prelude::*;
use resy_tools::args::{AuthArgs, QueryArgs, explain};
use resy_tools::booking::{BookingError, BookingRequest, Step, book_with_retries};
use resy_tools::output::print_json;
use resy_tools::selection::TimeMode;
use std::time::Duration;

/// Books a reservation on Resy
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Resy id of the restaurant, as printed by resy-searcher --info-only
    #[arg(long = "id", env = "RESY_VENUE_ID")]
    restaurant_id: String,
    /// Time to book, HH:MM
    #[arg(short, long, env = "RESY_TIME")]
    time: String,
    /// Seating type (Indoor, Patio, Bar...); any when omitted
    #[arg(long, env = "RESY_TABLE_TYPE")]
    table_type: Option<String>,
    /// Which other times are acceptable when the exact one is taken
    #[arg(long, value_enum, env = "RESY_TIME_MODE", default_value_t = TimeMode::Exact)]
    reservation_time_mode: TimeMode,
    /// Print the booked reservation as JSON
    #[arg(long, action)]
    json: bool,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    query: QueryArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Try once; retrying is up to the caller
    OneShot,
    /// Keep refreshing the venue until a slot is booked or attempts run out
    Automatic {
        /// How many times to refresh after the first attempt
        #[arg(long, env = "RESY_RETRY_COUNT", default_value_t = 5)]
        retry_count: u8,
        /// Seconds to wait between attempts
        #[arg(long, env = "RESY_RETRY_DELAY", default_value_t = 1)]
        retry_delay: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.auth.init_logging();

    let request = BookingRequest {
        venue_id: cli.restaurant_id.clone(),
        day: cli.query.day()?,
        party_size: cli.query.party_size,
        time: NaiveTime::parse_from_str(&cli.time, "%H:%M")
            .map_err(|_| anyhow!("time must be in HH:MM format, got {:?}", cli.time))?,
        mode: cli.reservation_time_mode,
        table_type: cli.table_type.clone(),
    };
    let credentials = cli.auth.credentials()?;
    let client = cli.auth.client()?;

    let (retries, delay) = match cli.command {
        Commands::OneShot => (0, Duration::ZERO),
        Commands::Automatic {
            retry_count,
            retry_delay,
        } => (retry_count, Duration::from_secs(u64::from(retry_delay))),
    };

    let reservation = match book_with_retries(&client, &credentials, &request, retries, delay).await
    {
        Ok(reservation) => reservation,
        Err(BookingError::NoPaymentMethod) => {
            return Err(anyhow!(
                "the Resy account has no payment method; add one at https://resy.com"
            ));
        }
        Err(BookingError::Exhausted { attempts, .. }) => {
            return Err(anyhow!(
                "no reservation matching {} on {} for a party of {} at venue {} after {} attempt(s)",
                cli.time,
                request.day,
                request.party_size,
                request.venue_id,
                attempts
            ));
        }
        Err(BookingError::Failed(err)) if err.step == Step::Book => {
            return Err(explain(err.source).context(
                "the book call failed; check your upcoming reservations on resy.com before trying again",
            ));
        }
        Err(BookingError::Failed(err)) => {
            let step = err.step;
            return Err(explain(err.source).context(format!("the {step} step failed")));
        }
    };

    if cli.json {
        return print_json(&reservation);
    }
    println!(
        "Booked reservation {} ({}) for {} on {}",
        reservation.id,
        reservation.status.as_deref().unwrap_or("status unknown"),
        request.party_size,
        request.day
    );
    if let Some(token) = &reservation.resy_token {
        println!("Cancellation token: {token}");
    }
    Ok(())
}
