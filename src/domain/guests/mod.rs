pub mod activity;
pub mod attendance;
pub mod attendance_merger;
pub mod guest;
pub mod guest_mapper;
pub mod messages;
pub mod schema;

pub use activity::{Activity, ActivitySet, UnknownActivity};
pub use attendance::{Attendance, Decision, GuestRef};
pub use attendance_merger::{attendance_updates, merge_attendance, AttendanceUpdate};
pub use guest::Guest;
pub use guest_mapper::{map_guests, GuestMapperError};
pub use schema::{GuestSchema, SchemaError};
