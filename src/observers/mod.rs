//! Lifecycle observers: the containers' extension point for success,
//! failure, and embed notifications.

mod observe;
mod set;

pub use observe::{ContainerObserver, ResultObserver};
pub use set::ObserverSet;

// Optional: a simple built-in stdout observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
mod log;
#[cfg(feature = "logging")]
pub use log::LogObserver;
