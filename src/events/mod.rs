//! Event stream: every state change, mirrored as a record.
//!
//! The orchestrator records exactly one [`Event`] per state change, in
//! the order the changes happened. Consumers either drain the log's
//! queue at their own pace or register an [`EventObserver`] for
//! synchronous delivery.
//!
//! ## Key Types
//!
//! - `EventKind`: Closed enum of everything the engine reports
//! - `Event`: One record, with builder-style context setters
//! - `EventLog`: Unbounded consumer queue plus a bounded recent ring
//! - `EventObserver`: Synchronous fan-out hook

pub mod event;
pub mod log;

pub use event::{Event, EventKind};
pub use log::{EventLog, EventObserver, DEFAULT_RECENT_CAPACITY};
