use tracing::{debug, warn};

use crate::models::{AvailabilityQuery, AvailabilityResult, BusyEvent, Slot, WorkingHoursRule};

/// Pure slot computation over a doctor's weekly working hours and their
/// already-localized busy events. No I/O; loading the doctor, filtering
/// cancelled records and timezone conversion all happen upstream (see
/// `ScheduleAssembler`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AvailabilityCalculator;

impl AvailabilityCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Partition each working-hours window into fixed-length slots and tag
    /// each one available or busy.
    ///
    /// Output order is rule order, then ascending start time within a rule.
    /// A trailing window shorter than the slot duration is dropped. Rules
    /// with inverted or out-of-range minutes produce no slots.
    pub fn compute_availability(
        &self,
        rules: &[WorkingHoursRule],
        busy_events: &[BusyEvent],
        query: &AvailabilityQuery,
    ) -> AvailabilityResult {
        let duration = query.slot_duration_minutes;

        let mut result = AvailabilityResult {
            day: query.day_filter,
            available_slots: Vec::new(),
            busy_slots: Vec::new(),
        };

        if duration <= 0 {
            warn!("Non-positive slot duration {} requested, returning no slots", duration);
            return result;
        }

        for rule in rules {
            if let Some(day) = query.day_filter {
                if rule.day != day {
                    continue;
                }
            }

            if !rule.is_well_formed() {
                debug!(
                    "Skipping malformed working-hours rule on {}: {}..{}",
                    rule.day, rule.start_minutes, rule.end_minutes
                );
                continue;
            }

            let mut current = rule.start_minutes;
            while current + duration <= rule.end_minutes {
                let slot_end = current + duration;

                let has_conflict = busy_events.iter().any(|event| {
                    event.day == rule.day
                        && event.start_minutes < slot_end
                        && current < event.end_minutes
                });

                let slot = Slot {
                    day: rule.day,
                    start: format_minutes(current),
                    end: format_minutes(slot_end),
                    slot_type: has_conflict.then(|| "busy".to_string()),
                };

                if has_conflict {
                    result.busy_slots.push(slot);
                } else {
                    result.available_slots.push(slot);
                }

                current += duration;
            }
        }

        debug!(
            "Computed {} available and {} busy slots across {} rules",
            result.available_slots.len(),
            result.busy_slots.len(),
            rules.len()
        );

        result
    }
}

/// Format minutes-of-day as a zero-padded `"HH:MM"` string.
fn format_minutes(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
