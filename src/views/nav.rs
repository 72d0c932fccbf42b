//! # Navigation chrome: actions and the per-view navigation item.
//!
//! [`NavigationItem`] is the navigation-bar configuration a view carries:
//! a title, an optional custom title surface, and the action lists for the
//! leading and trailing edges. Every [`View`](crate::View) exposes one; the
//! containers copy fields from an embedded view's item into their own
//! according to the configured [`OverridePolicy`](crate::OverridePolicy).
//!
//! Like [`Surface`](crate::Surface), a `NavigationItem` is a cheap-clone
//! shared handle: the container and the host read and write the same record.
//!
//! [`Action`] is a plain value describing a single navigation-bar control.

use std::sync::{Arc, Mutex};

use super::surface::Surface;

/// A single navigation-bar control (a tappable item on either edge).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    title: String,
}

impl Action {
    /// Creates an action with the given display title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Returns the display title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Default)]
struct NavState {
    title: Option<String>,
    title_view: Option<Surface>,
    left_actions: Vec<Action>,
    right_actions: Vec<Action>,
}

/// Shared navigation-bar configuration for a view.
///
/// ## Example
/// ```rust
/// use asyncview::{Action, NavigationItem};
///
/// let item = NavigationItem::new();
/// item.set_title("Profile");
/// item.set_right_actions(vec![Action::new("Edit")]);
///
/// assert_eq!(item.title().as_deref(), Some("Profile"));
/// assert_eq!(item.right_actions(), vec![Action::new("Edit")]);
/// ```
#[derive(Clone, Default)]
pub struct NavigationItem {
    inner: Arc<Mutex<NavState>>,
}

impl NavigationItem {
    /// Creates an empty navigation item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the title, if set.
    pub fn title(&self) -> Option<String> {
        self.inner.lock().unwrap().title.clone()
    }

    /// Sets the title.
    pub fn set_title(&self, title: impl Into<String>) {
        self.inner.lock().unwrap().title = Some(title.into());
    }

    /// Clears the title.
    pub fn clear_title(&self) {
        self.inner.lock().unwrap().title = None;
    }

    /// Returns the custom title surface, if set.
    pub fn title_view(&self) -> Option<Surface> {
        self.inner.lock().unwrap().title_view.clone()
    }

    /// Sets or clears the custom title surface.
    pub fn set_title_view(&self, view: Option<Surface>) {
        self.inner.lock().unwrap().title_view = view;
    }

    /// Returns the leading-edge actions.
    pub fn left_actions(&self) -> Vec<Action> {
        self.inner.lock().unwrap().left_actions.clone()
    }

    /// Replaces the leading-edge actions.
    pub fn set_left_actions(&self, actions: Vec<Action>) {
        self.inner.lock().unwrap().left_actions = actions;
    }

    /// Returns the trailing-edge actions.
    pub fn right_actions(&self) -> Vec<Action> {
        self.inner.lock().unwrap().right_actions.clone()
    }

    /// Replaces the trailing-edge actions.
    pub fn set_right_actions(&self, actions: Vec<Action>) {
        self.inner.lock().unwrap().right_actions = actions;
    }
}

impl std::fmt::Debug for NavigationItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.lock().unwrap();
        f.debug_struct("NavigationItem")
            .field("title", &state.title)
            .field("left_actions", &state.left_actions.len())
            .field("right_actions", &state.right_actions.len())
            .finish()
    }
}
