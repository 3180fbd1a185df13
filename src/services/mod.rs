pub mod availability;
pub mod schedule;
pub mod timezone;

pub use availability::AvailabilityCalculator;
pub use schedule::ScheduleAssembler;
pub use timezone::{ChronoTzConverter, TimeZoneConverter};
