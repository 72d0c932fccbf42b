//! # Default loading view: spinner plus label.
//!
//! [`LoadingView`] is the built-in [`LoadingAnimatable`] implementation the
//! containers fall back to when the host does not plug in its own. It holds
//! an [`ActivityIndicator`] and a [`Label`] whose text is fixed at
//! construction (default `"Loading ..."`).
//!
//! `is_animating` delegates directly to the indicator's own flag, so the
//! reported status is always the indicator's actual one.

use std::sync::atomic::{AtomicBool, Ordering};

use super::animatable::LoadingAnimatable;
use super::nav::NavigationItem;
use super::surface::Surface;
use super::view::View;

/// Spinner-like busy indicator.
///
/// Tracks its own animation flag; starting and stopping are idempotent.
#[derive(Default)]
pub struct ActivityIndicator {
    surface: Surface,
    animating: AtomicBool,
}

impl ActivityIndicator {
    /// Creates a stopped indicator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the indicator's root surface.
    pub fn surface(&self) -> Surface {
        self.surface.clone()
    }

    /// True while the indicator is animating.
    pub fn is_animating(&self) -> bool {
        self.animating.load(Ordering::SeqCst)
    }

    /// Starts animating. No-op if already animating.
    pub fn start_animating(&self) {
        self.animating.store(true, Ordering::SeqCst);
    }

    /// Stops animating. No-op if already stopped.
    pub fn stop_animating(&self) {
        self.animating.store(false, Ordering::SeqCst);
    }
}

/// Static one-line text surface.
pub struct Label {
    surface: Surface,
    text: String,
}

impl Label {
    /// Creates a label with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            surface: Surface::new(),
            text: text.into(),
        }
    }

    /// Returns the label's root surface.
    pub fn surface(&self) -> Surface {
        self.surface.clone()
    }

    /// Returns the label text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Default loading view: an [`ActivityIndicator`] above a [`Label`].
///
/// ## Example
/// ```rust
/// use asyncview::{LoadingAnimatable, LoadingView};
///
/// let view = LoadingView::new();
/// assert_eq!(view.label().text(), "Loading ...");
/// assert!(!view.is_animating());
///
/// view.start_loading_animation();
/// assert!(view.is_animating());
/// ```
pub struct LoadingView {
    surface: Surface,
    nav: NavigationItem,
    indicator: ActivityIndicator,
    label: Label,
}

impl LoadingView {
    /// Creates a loading view with the default `"Loading ..."` label.
    pub fn new() -> Self {
        Self::with_title("Loading ...")
    }

    /// Creates a loading view with a custom label text.
    ///
    /// The text is fixed for the lifetime of the view.
    pub fn with_title(title: impl Into<String>) -> Self {
        let surface = Surface::new();
        let indicator = ActivityIndicator::new();
        let label = Label::new(title);
        surface.add_subview(&indicator.surface());
        surface.add_subview(&label.surface());
        Self {
            surface,
            nav: NavigationItem::new(),
            indicator,
            label,
        }
    }

    /// Returns the busy indicator.
    pub fn indicator(&self) -> &ActivityIndicator {
        &self.indicator
    }

    /// Returns the label.
    pub fn label(&self) -> &Label {
        &self.label
    }
}

impl Default for LoadingView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for LoadingView {
    fn surface(&self) -> Surface {
        self.surface.clone()
    }

    fn navigation_item(&self) -> NavigationItem {
        self.nav.clone()
    }
}

impl LoadingAnimatable for LoadingView {
    fn is_animating(&self) -> bool {
        self.indicator.is_animating()
    }

    fn start_loading_animation(&self) {
        self.indicator.start_animating();
    }

    fn stop_loading_animation(&self) {
        self.indicator.stop_animating();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_label_text() {
        let view = LoadingView::new();
        assert_eq!(view.label().text(), "Loading ...");
    }

    #[test]
    fn test_custom_label_text() {
        let view = LoadingView::with_title("Fetching inbox ...");
        assert_eq!(view.label().text(), "Fetching inbox ...");
    }

    #[test]
    fn test_subviews_are_attached_at_construction() {
        let view = LoadingView::new();
        assert!(view.surface().has_subview(&view.indicator().surface()));
        assert!(view.surface().has_subview(&view.label().surface()));
    }

    #[test]
    fn test_is_animating_delegates_to_indicator() {
        let view = LoadingView::new();
        assert!(!view.is_animating());
        view.indicator().start_animating();
        assert!(view.is_animating());
    }

    #[test]
    fn test_start_is_idempotent() {
        let view = LoadingView::new();
        view.start_loading_animation();
        view.start_loading_animation();
        assert!(view.is_animating());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let view = LoadingView::new();
        view.start_loading_animation();
        view.stop_loading_animation();
        view.stop_loading_animation();
        assert!(!view.is_animating());
    }
}
