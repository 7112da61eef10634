//! Application Services
//!
//! Services that orchestrate domain logic and coordinate between ports.
//!
//! - `StreamSupervisor`: Keeps one subscription alive across transient
//!   failures and reports progress as ordered [`SessionEvent`]s
//! - `SubscriptionHandle`: The driver's view of a running session
//!
//! [`SessionEvent`]: crate::domain::streaming::SessionEvent

mod stream_supervisor;

pub use stream_supervisor::{PayloadExtractor, StreamSupervisor, SubscriptionHandle};
