/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use anyhow::anyhow;
use clap::{CommandFactory, Parser};
use resy_client::prelude::*;
use resy_tools::args::{AuthArgs, QueryArgs, explain};
use resy_tools::output::{print_json, slots_table};

/// Finds a restaurant on Resy and lists its open reservations
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Country to search in, as an ISO code
    #[arg(long, env = "RESY_COUNTRY", default_value = "US")]
    country: String,
    /// City to search in, matched against Resy's city slugs
    #[arg(short, long, env = "RESY_CITY")]
    city: String,
    /// Restaurant name; several words are joined with spaces
    #[arg(trailing_var_arg = true)]
    restaurant_names: Vec<String>,
    /// Print the restaurant name and Resy id, then exit
    #[arg(long, action)]
    info_only: bool,
    /// Print JSON instead of tables
    #[arg(long, action)]
    json: bool,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    query: QueryArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.auth.init_logging();

    if cli.restaurant_names.is_empty() {
        let _ = Cli::command().print_help();
        return Err(anyhow!("a restaurant name is required"));
    }
    let name = cli.restaurant_names.join(" ");
    let day = cli.query.day()?;
    let credentials = cli.auth.credentials()?;
    let client = cli.auth.client()?;

    let cities = client.city_configs(&credentials).await.map_err(explain)?;
    let city = find_city_config(&cities, &cli.city, &cli.country)
        .ok_or_else(|| anyhow!("no city {} found in country {}", cli.city, cli.country))?;

    let venue = client
        .search_venue(&credentials, city, &name)
        .await
        .map_err(explain)?
        .ok_or_else(|| anyhow!("unable to find a restaurant {} in {}", name, cli.city))?;

    if cli.info_only {
        if cli.json {
            return print_json(&venue);
        }
        println!("Restaurant Name: {}, Resy ID: {}", venue.name, venue.object_id);
        return Ok(());
    }

    info!(
        "Looking for reservations at {} on {} for a party of {}",
        venue.name, day, cli.query.party_size
    );
    let slots = client
        .find_reservations(&credentials, &venue.object_id, day, cli.query.party_size)
        .await
        .map_err(explain)?;

    if cli.json {
        return print_json(&slots);
    }
    if slots.is_empty() {
        println!(
            "There are no reservations at {} on {} for a party of {}",
            venue.name, day, cli.query.party_size
        );
    } else {
        println!(
            "Reservations at {} (Resy ID {}) on {}:",
            venue.name, venue.object_id, day
        );
        slots_table(&slots).printstd();
    }
    Ok(())
}
