use tracing::{debug, warn};

use crate::error::AvailabilityError;
use crate::models::{
    AppointmentRecord, BusyEvent, ConsultationRecord, RecurringAvailability, WorkingHoursRule,
    DEFAULT_SLOT_MINUTES,
};
use crate::services::timezone::TimeZoneConverter;

/// Input-assembly boundary between persisted doctor data and the pure slot
/// computation: builds ordered `WorkingHoursRule`s out of the availability
/// blob's parallel arrays, and localizes appointment/consultation records
/// into `BusyEvent`s.
pub struct ScheduleAssembler<C: TimeZoneConverter> {
    converter: C,
}

impl<C: TimeZoneConverter> ScheduleAssembler<C> {
    pub fn new(converter: C) -> Self {
        Self { converter }
    }

    /// Pair up `days[i]` with `hours[i]` into one rule per index. Mismatched
    /// array lengths drop the excess tail; a window that does not parse as
    /// `"HH:MM-HH:MM"` is skipped. Neither case fails the whole schedule.
    pub fn working_hours_rules(&self, availability: &RecurringAvailability) -> Vec<WorkingHoursRule> {
        if availability.days.len() != availability.hours.len() {
            warn!(
                "Availability arrays have mismatched lengths ({} days, {} hour windows), ignoring excess entries",
                availability.days.len(),
                availability.hours.len()
            );
        }

        let mut rules = Vec::with_capacity(availability.days.len().min(availability.hours.len()));

        for (day, window) in availability.days.iter().zip(availability.hours.iter()) {
            match parse_window(window) {
                Ok((start_minutes, end_minutes)) => rules.push(WorkingHoursRule {
                    day: *day,
                    start_minutes,
                    end_minutes,
                }),
                Err(e) => warn!("Skipping availability entry for {}: {}", day, e),
            }
        }

        debug!("Assembled {} working-hours rules", rules.len());
        rules
    }

    /// Localize every schedule-blocking appointment and consultation into a
    /// busy event on the doctor's local weekday. An event keeps its start
    /// day even when its duration runs past midnight.
    pub fn busy_events(
        &self,
        appointments: &[AppointmentRecord],
        consultations: &[ConsultationRecord],
        timezone: &str,
    ) -> Result<Vec<BusyEvent>, AvailabilityError> {
        let mut events = Vec::new();

        for appointment in appointments {
            if !appointment.status.blocks_schedule() {
                debug!("Skipping appointment {} with status {:?}", appointment.id, appointment.status);
                continue;
            }

            let (day, start_minutes) = self
                .converter
                .to_local_weekday_and_minute(appointment.start_time, timezone)?;

            events.push(BusyEvent {
                day,
                start_minutes,
                end_minutes: start_minutes + appointment.duration_minutes,
            });
        }

        for consultation in consultations {
            if !consultation.status.blocks_schedule() {
                debug!(
                    "Skipping consultation {} with status {:?}",
                    consultation.id, consultation.status
                );
                continue;
            }

            let (day, start_minutes) = self
                .converter
                .to_local_weekday_and_minute(consultation.start_time, timezone)?;

            let duration = consultation.duration_minutes.unwrap_or(DEFAULT_SLOT_MINUTES);

            events.push(BusyEvent {
                day,
                start_minutes,
                end_minutes: start_minutes + duration,
            });
        }

        debug!("Localized {} busy events in {}", events.len(), timezone);
        Ok(events)
    }
}

/// Parse a `"HH:MM-HH:MM"` window into start/end minutes-of-day. Range
/// checks (start < end, within a day) are left to the slot computation,
/// which skips ill-formed rules.
fn parse_window(window: &str) -> Result<(i32, i32), AvailabilityError> {
    let (start, end) = window
        .split_once('-')
        .ok_or_else(|| AvailabilityError::MalformedWindow(window.to_string()))?;

    Ok((
        parse_minutes(start, window)?,
        parse_minutes(end, window)?,
    ))
}

fn parse_minutes(time: &str, window: &str) -> Result<i32, AvailabilityError> {
    let malformed = || AvailabilityError::MalformedWindow(window.to_string());

    let (hours, minutes) = time.trim().split_once(':').ok_or_else(malformed)?;
    let hours: i32 = hours.parse().map_err(|_| malformed())?;
    let minutes: i32 = minutes.parse().map_err(|_| malformed())?;

    if !(0..60).contains(&minutes) || hours < 0 {
        return Err(malformed());
    }

    Ok(hours * 60 + minutes)
}
