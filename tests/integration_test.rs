// End-to-end flow: persisted availability blob + appointment records through
// the assembly boundary into the slot computation, checked against the
// endpoint's JSON contract.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use availability_cell::models::{
    AppointmentRecord, AppointmentStatus, AvailabilityQuery, ConsultationRecord,
    ConsultationStatus, DayOfWeek, RecurringAvailability,
};
use availability_cell::services::{AvailabilityCalculator, ChronoTzConverter, ScheduleAssembler};

fn utc(rfc3339: &str) -> DateTime<Utc> {
    rfc3339.parse().unwrap()
}

#[test]
fn booked_monday_morning_produces_mixed_slot_grid() {
    let assembler = ScheduleAssembler::new(ChronoTzConverter::new());
    let calculator = AvailabilityCalculator::new();

    let availability: RecurringAvailability = serde_json::from_value(serde_json::json!({
        "days": ["Monday", "Wednesday"],
        "hours": ["09:00-11:00", "09:00-10:00"]
    }))
    .unwrap();

    // 2025-06-16 is a Monday; the doctor sits in New York (EDT, UTC-4).
    let appointments = [AppointmentRecord {
        id: Uuid::new_v4(),
        start_time: utc("2025-06-16T13:30:00Z"), // 09:30 local
        duration_minutes: 30,
        status: AppointmentStatus::Confirmed,
    }];
    let consultations = [ConsultationRecord {
        id: Uuid::new_v4(),
        start_time: utc("2025-06-16T14:30:00Z"), // 10:30 local
        duration_minutes: None,                  // defaults to 30
        status: ConsultationStatus::Scheduled,
    }];

    let rules = assembler.working_hours_rules(&availability);
    let events = assembler
        .busy_events(&appointments, &consultations, "America/New_York")
        .unwrap();

    let query = AvailabilityQuery {
        day_filter: Some(DayOfWeek::Monday),
        ..Default::default()
    };
    let result = calculator.compute_availability(&rules, &events, &query);

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        serde_json::json!({
            "day": "Monday",
            "availableSlots": [
                { "day": "Monday", "start": "09:00", "end": "09:30" },
                { "day": "Monday", "start": "10:00", "end": "10:30" }
            ],
            "busySlots": [
                { "day": "Monday", "start": "09:30", "end": "10:00", "type": "busy" },
                { "day": "Monday", "start": "10:30", "end": "11:00", "type": "busy" }
            ]
        })
    );
}

#[test]
fn unfiltered_query_spans_every_configured_day() {
    let assembler = ScheduleAssembler::new(ChronoTzConverter::new());
    let calculator = AvailabilityCalculator::new();

    let availability = RecurringAvailability {
        days: vec![DayOfWeek::Monday, DayOfWeek::Wednesday],
        hours: vec!["09:00-10:00".to_string(), "15:00-16:00".to_string()],
    };

    let rules = assembler.working_hours_rules(&availability);
    let result = calculator.compute_availability(&rules, &[], &AvailabilityQuery::default());

    assert!(result.day.is_none());
    assert_eq!(result.available_slots.len(), 4);
    assert_eq!(
        result
            .available_slots
            .iter()
            .filter(|slot| slot.day == DayOfWeek::Wednesday)
            .count(),
        2
    );
}
