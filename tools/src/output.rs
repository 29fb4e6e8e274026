/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use prettytable::format;
use prettytable::{Cell, Row, Table};
use resy_client::prelude::{Notification, ReservationSlot};
use serde::Serialize;

/// Prints `value` as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Renders reservation slots, earliest first as Resy returns them
#[must_use]
pub fn slots_table(slots: &[ReservationSlot]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.add_row(Row::new(vec![
        Cell::new("START"),
        Cell::new("TABLE TYPE"),
        Cell::new("CONFIG ID"),
    ]));

    for slot in slots {
        table.add_row(Row::new(vec![
            Cell::new(&slot.date.start),
            Cell::new(&slot.config.slot_type),
            Cell::new(&slot.config.id.to_string()),
        ]));
    }
    table
}

/// Renders active notifications
#[must_use]
pub fn notifications_table(notifications: &[Notification]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.add_row(Row::new(vec![
        Cell::new("VENUE ID"),
        Cell::new("DAY"),
        Cell::new("PARTY"),
        Cell::new("FROM"),
        Cell::new("TO"),
        Cell::new("SERVICE TYPE"),
    ]));

    for notification in notifications {
        let spec = &notification.specs;
        table.add_row(Row::new(vec![
            Cell::new(&spec.venue_id.to_string()),
            Cell::new(&spec.day),
            Cell::new(&spec.party_size.to_string()),
            Cell::new(&spec.time_preferred_start),
            Cell::new(&spec.time_preferred_end),
            Cell::new(&spec.service_type_id.to_string()),
        ]));
    }
    table
}
