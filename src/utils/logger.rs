/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global tracing subscriber
///
/// The level comes from `LOGLEVEL` (`TRACE`, `DEBUG`, `INFO`, `WARN`,
/// `ERROR`), defaulting to `INFO`. Later calls are no-ops.
pub fn setup_logger() {
    let level = env::var("LOGLEVEL")
        .ok()
        .and_then(|l| parse_level(&l))
        .unwrap_or(Level::INFO);
    setup_logger_with_level(level);
}

/// Installs the global tracing subscriber at `level`
///
/// Later calls, including calls to [`setup_logger`], are no-ops.
pub fn setup_logger_with_level(level: Level) {
    INIT.call_once(|| {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish();
        // A subscriber installed by the host application wins.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

fn parse_level(value: &str) -> Option<Level> {
    match value.trim().to_uppercase().as_str() {
        "TRACE" => Some(Level::TRACE),
        "DEBUG" => Some(Level::DEBUG),
        "INFO" => Some(Level::INFO),
        "WARN" | "WARNING" => Some(Level::WARN),
        "ERROR" => Some(Level::ERROR),
        _ => None,
    }
}
