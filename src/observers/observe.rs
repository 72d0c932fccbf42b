//! # Lifecycle observer contracts.
//!
//! Observers are the extension point for reacting to container lifecycle
//! milestones without subclassing: hosts register any number of them and
//! the container notifies each in registration order.
//!
//! ## Contract
//! - Hooks are invoked synchronously, with **no internal container locks
//!   held** — an observer may call back into the container (for example,
//!   trigger another `reload`).
//! - All methods default to no-ops; implement only what you need.

use std::sync::Arc;

use crate::views::{View, ViewRef};

/// Hooks for [`AsyncContainer`](crate::AsyncContainer).
pub trait ContainerObserver: Send + Sync + 'static {
    /// A view produced by the `build` collaborator was embedded.
    ///
    /// Invoked once per successful embed, after the view is attached.
    fn did_load_view(&self, view: &ViewRef) {
        let _ = view;
    }
}

/// Hooks for [`AsyncResultContainer`](crate::AsyncResultContainer).
///
/// `V` is the success view type, `E` the failure type of the load result.
pub trait ResultObserver<V: View, E>: Send + Sync + 'static {
    /// A terminal view was produced for embedding.
    ///
    /// On success this fires before the view is attached (so it can still be
    /// configured); for a failure resolved by showing a view it fires after
    /// the attachment. It does not fire for custom failure resolutions.
    fn did_load_view(&self, view: &ViewRef) {
        let _ = view;
    }

    /// The load delivered a success and `view` was built from it.
    ///
    /// Fires before the view is attached.
    fn did_succeed_loading(&self, view: &Arc<V>) {
        let _ = view;
    }

    /// The load delivered a failure.
    ///
    /// Fires before the `failure` collaborator resolves it.
    fn did_fail_loading(&self, error: &E) {
        let _ = error;
    }
}
