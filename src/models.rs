use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default slot length when neither the caller nor a consultation record
/// specifies a duration.
pub const DEFAULT_SLOT_MINUTES: i32 = 30;

/// Minutes in a day; the exclusive upper bound for a rule's end time.
pub const MINUTES_PER_DAY: i32 = 1440;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => DayOfWeek::Sunday,
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        };
        write!(f, "{}", name)
    }
}

/// One weekday window during which a doctor is nominally available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHoursRule {
    pub day: DayOfWeek,
    pub start_minutes: i32,
    pub end_minutes: i32,
}

impl WorkingHoursRule {
    /// A rule participates in slot generation only when its window is
    /// well-formed; anything else is skipped, never an error.
    pub fn is_well_formed(&self) -> bool {
        self.start_minutes >= 0
            && self.end_minutes <= MINUTES_PER_DAY
            && self.start_minutes < self.end_minutes
    }
}

/// A scheduled event occupying part of a working-hours window, already
/// localized to the doctor's timezone. `end_minutes` may exceed 1440 for an
/// event starting near midnight; the event stays attributed to its start day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyEvent {
    pub day: DayOfWeek,
    pub start_minutes: i32,
    pub end_minutes: i32,
}

/// A fixed-duration candidate booking window. Busy slots carry
/// `type: "busy"` on the wire; available slots omit the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub day: DayOfWeek,
    pub start: String,
    pub end: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub slot_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<DayOfWeek>,
    #[serde(rename = "availableSlots")]
    pub available_slots: Vec<Slot>,
    #[serde(rename = "busySlots")]
    pub busy_slots: Vec<Slot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    #[serde(default = "default_slot_duration")]
    pub slot_duration_minutes: i32,
    pub day_filter: Option<DayOfWeek>,
}

fn default_slot_duration() -> i32 {
    DEFAULT_SLOT_MINUTES
}

impl Default for AvailabilityQuery {
    fn default() -> Self {
        Self {
            slot_duration_minutes: DEFAULT_SLOT_MINUTES,
            day_filter: None,
        }
    }
}

/// The doctor's persisted availability blob: index-correlated parallel
/// arrays of day names and `"HH:MM-HH:MM"` windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringAvailability {
    pub days: Vec<DayOfWeek>,
    pub hours: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Every non-cancelled appointment blocks the schedule.
    pub fn blocks_schedule(&self) -> bool {
        !matches!(self, AppointmentStatus::Cancelled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl ConsultationStatus {
    /// Cancelled and completed consultations no longer block the schedule.
    pub fn blocks_schedule(&self) -> bool {
        !matches!(
            self,
            ConsultationStatus::Cancelled | ConsultationStatus::Completed
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultationRecord {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: Option<i32>,
    pub status: ConsultationStatus,
}
