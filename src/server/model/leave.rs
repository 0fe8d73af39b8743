//! Domain & parameter models for salon leave
//!
//! A leave either closes the salon for a whole date or removes one window of
//! hours from it. The HOURS window invariant (both times present, start before
//! end) is enforced when parameters are built and again when rows are loaded.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::{
    model::leave::{CreateLeaveDto, LeaveDto, UpdateLeaveDto},
    server::{
        error::{internal::InternalError, AppError},
        util::{
            interval::Interval,
            parse::{parse_date, parse_optional_clock_label},
            time::{format_time_of_day, rebase},
        },
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveKind {
    /// The salon is closed for the whole date.
    Day,
    /// The salon is unavailable during `[start, end)`.
    Hours { start: NaiveTime, end: NaiveTime },
}

impl LeaveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "DAY",
            Self::Hours { .. } => "HOURS",
        }
    }

    pub fn start_time(&self) -> Option<NaiveTime> {
        match self {
            Self::Day => None,
            Self::Hours { start, .. } => Some(*start),
        }
    }

    pub fn end_time(&self) -> Option<NaiveTime> {
        match self {
            Self::Day => None,
            Self::Hours { end, .. } => Some(*end),
        }
    }

    /// Builds a kind from its wire parts. Times are ignored for `DAY`.
    ///
    /// # Returns
    /// - `Ok(LeaveKind)` - Valid kind
    /// - `Err(AppError::BadRequest)` - Unknown type, or an HOURS leave without both
    ///   times or with start not before end
    pub fn from_parts(
        leave_type: &str,
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
    ) -> Result<Self, AppError> {
        if leave_type.eq_ignore_ascii_case("DAY") {
            return Ok(Self::Day);
        }
        if !leave_type.eq_ignore_ascii_case("HOURS") {
            return Err(AppError::BadRequest(format!(
                "Invalid leave type '{}'. Expected DAY or HOURS",
                leave_type
            )));
        }

        match (start, end) {
            (Some(start), Some(end)) if start < end => Ok(Self::Hours { start, end }),
            (Some(_), Some(_)) => Err(AppError::BadRequest(
                "startTime must be before endTime".to_string(),
            )),
            _ => Err(AppError::BadRequest(
                "startTime and endTime are required when leave type is HOURS".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Leave {
    pub id: i32,
    pub salon_id: i32,
    pub date: NaiveDate,
    pub kind: LeaveKind,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Leave {
    /// Converts an entity model to the leave domain model
    ///
    /// # Returns
    /// - `Ok(Leave)` - The converted domain model
    /// - `Err(AppError::InternalErr)` - Unknown leave type or HOURS row without times
    pub fn from_entity(entity: entity::leave::Model) -> Result<Self, AppError> {
        let kind = match entity.leave_type.as_str() {
            "DAY" => LeaveKind::Day,
            "HOURS" => match (entity.start_time, entity.end_time) {
                (Some(start), Some(end)) => LeaveKind::Hours { start, end },
                _ => return Err(InternalError::IncompleteHoursLeave { id: entity.id }.into()),
            },
            other => {
                return Err(InternalError::UnknownEnumValue {
                    column: "leave.leave_type",
                    value: other.to_string(),
                }
                .into())
            }
        };

        Ok(Self {
            id: entity.id,
            salon_id: entity.salon_id,
            date: entity.date,
            kind,
            reason: entity.reason,
            created_at: entity.created_at,
        })
    }

    /// Blocked window as UTC instants, `None` for a whole-day leave.
    pub fn window(&self, tz: Tz) -> Option<Interval> {
        match self.kind {
            LeaveKind::Day => None,
            LeaveKind::Hours { start, end } => Some(Interval::new(
                rebase(self.date, start, tz),
                rebase(self.date, end, tz),
            )),
        }
    }

    pub fn into_dto(self) -> LeaveDto {
        LeaveDto {
            id: self.id,
            salon_id: self.salon_id,
            date: self.date,
            leave_type: self.kind.as_str().to_string(),
            start_time: self.kind.start_time().map(format_time_of_day),
            end_time: self.kind.end_time().map(format_time_of_day),
            reason: self.reason,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a leave.
#[derive(Debug, Clone)]
pub struct CreateLeaveParam {
    pub salon_id: i32,
    pub date: NaiveDate,
    pub kind: LeaveKind,
    pub reason: Option<String>,
}

impl CreateLeaveParam {
    /// Builds leave parameters from the request body.
    ///
    /// # Returns
    /// - `Ok(CreateLeaveParam)` - Valid leave
    /// - `Err(AppError::BadRequest)` - Unknown type, bad date or labels, or an HOURS
    ///   leave without both times or with start not before end
    pub fn from_dto(dto: CreateLeaveDto) -> Result<Self, AppError> {
        let date = parse_date(&dto.date)?;

        let kind = LeaveKind::from_parts(
            &dto.leave_type,
            parse_optional_clock_label(dto.start_time.as_deref())?,
            parse_optional_clock_label(dto.end_time.as_deref())?,
        )?;

        Ok(Self {
            salon_id: dto.salon_id,
            date,
            kind,
            reason: dto.reason,
        })
    }
}

/// Parsed leave changes; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateLeaveParam {
    pub date: Option<NaiveDate>,
    pub leave_type: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub reason: Option<String>,
}

/// A leave after changes were merged in, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaveChanges {
    pub date: NaiveDate,
    pub kind: LeaveKind,
    pub reason: Option<String>,
}

impl UpdateLeaveParam {
    pub fn from_dto(dto: UpdateLeaveDto) -> Result<Self, AppError> {
        Ok(Self {
            date: dto.date.as_deref().map(parse_date).transpose()?,
            leave_type: dto.leave_type,
            start_time: parse_optional_clock_label(dto.start_time.as_deref())?,
            end_time: parse_optional_clock_label(dto.end_time.as_deref())?,
            reason: dto.reason,
        })
    }

    /// Merges the changes over `current` and re-validates the resulting kind.
    ///
    /// Omitted times fall back to the stored window, so an HOURS leave can move
    /// only its end while keeping its start.
    pub fn merge(self, current: &Leave) -> Result<LeaveChanges, AppError> {
        let leave_type = self
            .leave_type
            .unwrap_or_else(|| current.kind.as_str().to_string());
        let kind = LeaveKind::from_parts(
            &leave_type,
            self.start_time.or(current.kind.start_time()),
            self.end_time.or(current.kind.end_time()),
        )?;

        Ok(LeaveChanges {
            date: self.date.unwrap_or(current.date),
            kind,
            reason: self.reason.or_else(|| current.reason.clone()),
        })
    }
}
