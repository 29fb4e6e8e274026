/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use anyhow::anyhow;
use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use resy_client::prelude::*;
use resy_tools::args::{AuthArgs, explain, parse_day};
use resy_tools::output::{notifications_table, print_json};

/// Manages Resy availability notifications
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Print JSON instead of tables
    #[arg(long, action)]
    json: bool,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List active notifications
    List {
        /// Only show notifications for this restaurant
        #[arg(long = "id")]
        restaurant_id: Option<u32>,
    },
    /// Delete one notification, or all of them
    Delete {
        /// Delete every active notification
        #[arg(long, action, conflicts_with_all = ["date", "restaurant_id", "num_seats", "service_type_id"])]
        all: bool,
        /// Day the notification is for, YYYYMMDD
        #[arg(long, short)]
        date: Option<String>,
        /// Resy id of the restaurant
        #[arg(long, short)]
        restaurant_id: Option<u32>,
        /// Party size the notification is for
        #[arg(long, short)]
        num_seats: Option<u8>,
        /// Service type the notification is for
        #[arg(long, short)]
        service_type_id: Option<u8>,
    },
    /// Create or update a notification
    Create {
        /// Day to watch, YYYYMMDD
        #[arg(long, short)]
        date: String,
        /// Resy id of the restaurant
        #[arg(long, short)]
        restaurant_id: u32,
        /// Party size
        #[arg(long, short, default_value_t = DEFAULT_PARTY_SIZE)]
        num_seats: u8,
        /// Service type (lunch, dinner...) as Resy numbers it
        #[arg(long = "type", short = 't')]
        service_type_id: u8,
        /// Earliest acceptable time, HH:MM
        #[arg(long, short)]
        start_time: String,
        /// Latest acceptable time, HH:MM
        #[arg(long, short)]
        end_time: String,
    },
}

fn check_time(text: &str) -> anyhow::Result<String> {
    NaiveTime::parse_from_str(text, "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| anyhow!("time must be in HH:MM format, got {text:?}"))
}

fn wire_day(text: &str) -> anyhow::Result<String> {
    Ok(parse_day(Some(text))?.format(DAY_FORMAT).to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.auth.init_logging();

    let credentials = cli.auth.credentials()?;
    let client = cli.auth.client()?;

    match cli.command {
        Commands::List { restaurant_id } => {
            let notifications: Vec<Notification> = client
                .list_notifications(&credentials)
                .await
                .map_err(explain)?
                .into_iter()
                .filter(|n| restaurant_id.is_none_or(|id| n.specs.venue_id == id))
                .collect();

            if cli.json {
                return print_json(&notifications);
            }
            if notifications.is_empty() {
                println!("No active notifications");
            } else {
                notifications_table(&notifications).printstd();
            }
        }
        Commands::Delete {
            all: true, ..
        } => {
            let notifications = client
                .list_notifications(&credentials)
                .await
                .map_err(explain)?;
            for notification in &notifications {
                client
                    .delete_notification(&credentials, &notification.specs)
                    .await
                    .map_err(explain)?;
            }
            println!("Deleted {} notifications", notifications.len());
        }
        Commands::Delete {
            date: Some(date),
            restaurant_id: Some(venue_id),
            num_seats: Some(party_size),
            service_type_id: Some(service_type_id),
            ..
        } => {
            let spec = NotificationSpec {
                venue_id,
                party_size,
                day: wire_day(&date)?,
                time_preferred_start: String::new(),
                time_preferred_end: String::new(),
                service_type_id,
            };
            client
                .delete_notification(&credentials, &spec)
                .await
                .map_err(explain)?;
            println!("Deleted notification for venue {} on {}", venue_id, spec.day);
        }
        Commands::Delete { .. } => {
            return Err(anyhow!(
                "deleting a single notification needs --date, --restaurant-id, --num-seats and \
                 --service-type-id"
            ));
        }
        Commands::Create {
            date,
            restaurant_id,
            num_seats,
            service_type_id,
            start_time,
            end_time,
        } => {
            let spec = NotificationSpec {
                venue_id: restaurant_id,
                party_size: num_seats,
                day: wire_day(&date)?,
                time_preferred_start: check_time(&start_time)?,
                time_preferred_end: check_time(&end_time)?,
                service_type_id,
            };
            client
                .create_notification(&credentials, &spec)
                .await
                .map_err(explain)?;

            if cli.json {
                return print_json(&spec);
            }
            println!(
                "Watching venue {} on {} between {} and {}",
                spec.venue_id, spec.day, spec.time_preferred_start, spec.time_preferred_end
            );
        }
    }
    Ok(())
}
