//! Reservation Model

use crate::error::{AppError, ErrorCode};
use crate::types::Timestamp;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Opening hour of the first bookable slot
pub const FIRST_SLOT_HOUR: u32 = 11;
/// Hour of the last bookable slot (22:30 being the final one)
pub const LAST_SLOT_HOUR: u32 = 22;

/// A bookable half-hour slot between 11:00 and 22:30 inclusive (24 slots)
///
/// Serialized as `"HH:MM"`; construction is validated so a `TimeSlot` value
/// is always one of the 24 offered slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    /// Validate an arbitrary time as a bookable slot
    pub fn from_time(time: NaiveTime) -> Result<Self, AppError> {
        use chrono::Timelike;
        let on_half_hour = time.minute() == 0 || time.minute() == 30;
        let in_window = (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR).contains(&time.hour());
        if on_half_hour && in_window && time.second() == 0 {
            Ok(TimeSlot(time))
        } else {
            Err(AppError::with_message(
                ErrorCode::ReservationInvalidTime,
                format!("{} is not an available slot", time.format("%H:%M")),
            ))
        }
    }

    /// Parse an `"HH:MM"` string as a bookable slot
    pub fn parse(s: &str) -> Result<Self, AppError> {
        let time = NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| {
            AppError::with_message(
                ErrorCode::ReservationInvalidTime,
                format!("Invalid time format: {}", s),
            )
        })?;
        Self::from_time(time)
    }

    /// All 24 bookable slots in display order (11:00 .. 22:30)
    pub fn all() -> Vec<TimeSlot> {
        let mut slots = Vec::with_capacity(24);
        for hour in FIRST_SLOT_HOUR..=LAST_SLOT_HOUR {
            for minute in [0, 30] {
                // In-range by construction
                if let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0) {
                    slots.push(TimeSlot(time));
                }
            }
        }
        slots
    }

    /// The wrapped time of day
    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        TimeSlot::parse(&s)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

/// Reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    /// All statuses (for admin dropdowns)
    pub const ALL: [ReservationStatus; 3] = [
        ReservationStatus::Pending,
        ReservationStatus::Confirmed,
        ReservationStatus::Cancelled,
    ];
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Party size, 1..=20
    pub number_of_people: u32,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub status: ReservationStatus,
    /// Unix millis
    pub created_at: Timestamp,
}

/// Reservation payload as assembled by the reservation page (everything but
/// id, status, and timestamp, which the store assigns)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub number_of_people: u32,
    pub date: NaiveDate,
    pub time: TimeSlot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_slots() {
        let slots = TimeSlot::all();
        assert_eq!(slots.len(), 24);
        assert_eq!(slots.first().unwrap().to_string(), "11:00");
        assert_eq!(slots.last().unwrap().to_string(), "22:30");
    }

    #[test]
    fn test_parse_valid_slots() {
        assert!(TimeSlot::parse("11:00").is_ok());
        assert!(TimeSlot::parse("19:30").is_ok());
        assert!(TimeSlot::parse("22:30").is_ok());
    }

    #[test]
    fn test_parse_rejects_off_grid_times() {
        for s in ["10:30", "23:00", "12:15", "22:31", "nonsense"] {
            let err = TimeSlot::parse(s).unwrap_err();
            assert_eq!(err.code, ErrorCode::ReservationInvalidTime, "{}", s);
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let slot = TimeSlot::parse("12:30").unwrap();
        let json = serde_json::to_string(&slot).unwrap();
        assert_eq!(json, "\"12:30\"");
        let back: TimeSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slot);
    }

    #[test]
    fn test_deserialize_rejects_invalid_slot() {
        assert!(serde_json::from_str::<TimeSlot>("\"09:00\"").is_err());
    }
}
