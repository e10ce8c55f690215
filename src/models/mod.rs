pub mod draft;
pub mod event;
pub mod event_type;

pub use draft::{Draft, SavedDraft};
pub use event::EventRecord;
pub use event_type::EventType;
