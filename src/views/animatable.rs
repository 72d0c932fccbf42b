//! # Loading capability contract.
//!
//! [`LoadingAnimatable`] marks a [`View`] that can display an animated
//! "busy" indication. The containers drive it around every load cycle:
//! start when the loading view is embedded, stop right before the terminal
//! view replaces it.
//!
//! ## Rules
//! - `is_animating` reflects the indicator's actual animation status, not an
//!   intended one.
//! - `start`/`stop` are idempotent: starting while animating (or stopping
//!   while stopped) is a no-op.
//! - These are presentation-only operations with no failure mode.

use std::sync::Arc;

use super::view::View;

/// Capability for views that can animate a busy indication.
pub trait LoadingAnimatable: View {
    /// True while the indicator is actually animating.
    fn is_animating(&self) -> bool;

    /// Starts the busy animation. No-op if already animating.
    fn start_loading_animation(&self);

    /// Stops the busy animation. No-op if not animating.
    fn stop_loading_animation(&self);
}

/// Shared handle to a loading-capable view.
pub type LoadingViewRef = Arc<dyn LoadingAnimatable>;
