//! # Simple logging observer for debugging and demos.
//!
//! [`LogObserver`] prints lifecycle milestones to stdout in a human-readable
//! format. This is primarily useful for development, debugging, and the
//! demo programs.
//!
//! ## Output format
//! ```text
//! [loaded] view embedded
//! [succeeded] success view ready
//! [failed] err=Timeout
//! ```

use std::sync::Arc;

use crate::views::{View, ViewRef};

use super::observe::{ContainerObserver, ResultObserver};

/// Simple stdout logging observer.
///
/// Enabled via the `logging` feature. Not intended for production use —
/// implement a custom [`ContainerObserver`] or [`ResultObserver`] for
/// structured logging or metrics collection.
pub struct LogObserver;

impl ContainerObserver for LogObserver {
    fn did_load_view(&self, _view: &ViewRef) {
        println!("[loaded] view embedded");
    }
}

impl<V, E> ResultObserver<V, E> for LogObserver
where
    V: View,
    E: std::fmt::Debug,
{
    fn did_load_view(&self, _view: &ViewRef) {
        println!("[loaded] view embedded");
    }

    fn did_succeed_loading(&self, _view: &Arc<V>) {
        println!("[succeeded] success view ready");
    }

    fn did_fail_loading(&self, error: &E) {
        println!("[failed] err={error:?}");
    }
}
