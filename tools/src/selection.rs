/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Picking the slot to book out of what Resy offers

use chrono::NaiveTime;
use clap::ValueEnum;
use resy_client::prelude::ReservationSlot;
use tracing::warn;

/// How far a slot may be from the requested time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TimeMode {
    /// Only the requested time
    #[default]
    Exact,
    /// The requested time or the closest one before it
    Earlier,
    /// The requested time or the closest one after it
    Later,
}

/// True when the slot seating matches `table_type`, or no preference was given
#[must_use]
pub fn table_type_matches(slot: &ReservationSlot, table_type: Option<&str>) -> bool {
    table_type.is_none_or(|wanted| wanted.eq_ignore_ascii_case(&slot.config.slot_type))
}

/// Chooses the slot closest to `time` that `mode` and `table_type` allow
///
/// Slots whose start time cannot be parsed are skipped. Ties keep the first
/// slot in Resy's order.
#[must_use]
pub fn select_slot<'a>(
    slots: &'a [ReservationSlot],
    time: NaiveTime,
    mode: TimeMode,
    table_type: Option<&str>,
) -> Option<&'a ReservationSlot> {
    slots
        .iter()
        .filter(|slot| table_type_matches(slot, table_type))
        .filter_map(|slot| match slot.start_time() {
            Ok(start) => Some((slot, start.time())),
            Err(e) => {
                warn!("Skipping slot: {}", e);
                None
            }
        })
        .filter(|(_, start)| match mode {
            TimeMode::Exact => *start == time,
            TimeMode::Earlier => *start <= time,
            TimeMode::Later => *start >= time,
        })
        .min_by_key(|(_, start)| (*start - time).num_seconds().abs())
        .map(|(slot, _)| slot)
}
