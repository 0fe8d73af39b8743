//! Domain models for slot availability.

use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;

use crate::{
    model::slot::{DaySlotsDto, SlotDto},
    server::util::{
        interval::Interval,
        time::{format_clock_label, weekday_name},
    },
};

/// Opening and closing time of day of a salon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalonHours {
    pub open: NaiveTime,
    /// `00:00` means midnight at the end of the day.
    pub close: NaiveTime,
}

/// Query for the free slots of a salon.
#[derive(Debug, Clone, Default)]
pub struct SlotQuery {
    /// Raw date; absent or unparsable values fall back to today.
    pub date: Option<String>,
    /// Salon to look at; the first salon when absent.
    pub salon_id: Option<i32>,
}

/// Free slots of one salon on one calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySlots {
    pub date: NaiveDate,
    /// Zone the slot labels are rendered in.
    pub tz: Tz,
    /// Set when a DAY leave closes the salon for the whole date.
    pub closed: bool,
    pub slots: Vec<Interval>,
}

impl DaySlots {
    pub fn into_dto(self) -> DaySlotsDto {
        let slots: Vec<SlotDto> = self
            .slots
            .iter()
            .map(|slot| SlotDto {
                start: format_clock_label(slot.start, self.tz),
                end: format_clock_label(slot.end, self.tz),
            })
            .collect();

        DaySlotsDto {
            date: self.date,
            day: weekday_name(self.date),
            total_slots: slots.len(),
            slots,
        }
    }
}
