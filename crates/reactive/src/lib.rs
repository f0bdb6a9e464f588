//! Reactive primitives for the viewer synchronization layer
//!
//! Provides versioned observable value cells with poll-based subscriptions
//! and a trailing-edge debounce for coalescing bursts of writes.

pub mod debounce;
pub mod observable;

pub use debounce::Debounced;
pub use observable::{Observable, ReadOnlyObservable, Subscription};
