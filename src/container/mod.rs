//! The containers: the load/success/failure state machine and its two
//! public flavors.

mod core;
mod embed;
mod generic;
mod result;
mod state;

pub use generic::AsyncContainer;
pub use result::{AsyncResultContainer, FailureResolution};
pub use state::LifecycleState;
