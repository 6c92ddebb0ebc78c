//! Search request sequencing: at most one request in flight, at most one
//! query queued behind it, latest query wins.
//!
//! The state machine itself is synchronous and lives in [`CoordinatorState`];
//! [`SearchCoordinator`] runs it on a dedicated task and hands out
//! [`SearchSession`] handles.

mod session;
mod state;

pub use session::{SearchCoordinator, SearchSession};
pub use state::{CoordinatorState, Phase};
