pub mod access;
pub mod checkin;
pub mod roster;
pub mod score;

pub use access::{Access, AccessGate};
pub use checkin::{CheckinLogic, CheckinOutcome, apply_checkin};
pub use roster::{RosterLogic, RowEdit};
pub use score::{ScoreLogic, apply_delta};
