//! Application layer - Use cases and port interfaces
//!
//! Contains the dispatch use case and trait definitions
//! for external system interactions.

pub mod dispatcher;
pub mod ports;
pub mod schedule;

// Re-export use cases
pub use dispatcher::{
    DeliveryOutcome, DeliveryTicket, DispatchOutcome, Dispatcher, DispatcherState,
    SuppressionReason,
};
pub use schedule::{schedule, CancelHandle};
