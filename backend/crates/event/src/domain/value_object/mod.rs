pub mod event_date;
pub mod event_patch;

pub use kernel::id::{EventId, RegistrationId, UserId};
