//! Notification delivery.
//!
//! - **Poll**: one `get_notifications` round trip behind the [`PollSource`] trait
//! - **Subscription**: background long-poll loop exposed as a pull-based stream

pub mod poll;
pub mod subscription;

pub use poll::{PollSource, RpcPollSource, GET_NOTIFICATIONS};
pub use subscription::Subscription;
