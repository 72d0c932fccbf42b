//! # Embed and removal protocol.
//!
//! The two halves of child containment, always used as a pair:
//!
//! - **attach**: pin the child's root surface to the parent's full bounds,
//!   then signal the child that the move completed;
//! - **detach**: signal the child that it is about to leave, then remove its
//!   root surface from the hierarchy.
//!
//! A view is never left attached after being logically replaced. The fade-in
//! transition lives here too: a stepped alpha ramp on `tokio::time`, aborted
//! early when the cycle it belongs to is superseded.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::views::{Surface, View};

/// Number of alpha increments a fade is stepped over.
const FADE_STEPS: u32 = 20;

/// Attaches `child` to `parent`, filling its bounds, and signals completion.
pub(crate) fn attach<V: View + ?Sized>(parent: &Surface, child: &V) {
    parent.add_subview_filling(&child.surface());
    child.did_move_to_parent(Some(parent));
}

/// Signals `child` that it is leaving, then detaches its surface.
pub(crate) fn detach<V: View + ?Sized>(child: &V) {
    child.will_move_to_parent(None);
    child.surface().remove_from_superview();
}

/// Ramps `surface` alpha from its current value to 1.0 over `duration`.
///
/// Cancelling `token` stops the ramp at whatever alpha it reached; the
/// surface is detached along with its view in that case anyway.
pub(crate) async fn fade_in(surface: Surface, duration: Duration, token: CancellationToken) {
    let step = duration / FADE_STEPS;
    for i in 1..=FADE_STEPS {
        tokio::select! {
            _ = token.cancelled() => return,
            _ = tokio::time::sleep(step) => {}
        }
        surface.set_alpha(f64::from(i) / f64::from(FADE_STEPS));
    }
}
