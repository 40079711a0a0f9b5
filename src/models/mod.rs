pub mod record;
pub mod roster;
pub mod schema;

pub use record::{AttendanceState, AttendeeRecord};
pub use roster::Roster;
pub use schema::{ColumnNames, KeyMatch, Profile, RosterSchema};
