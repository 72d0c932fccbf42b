//! # Surface: retained node in the view hierarchy.
//!
//! [`Surface`] is a cheap-clone handle to a node of the retained hierarchy the
//! containers operate on. It tracks just enough structure to sequence and
//! observe display states:
//!
//! - the superview/subview relationship,
//! - an alpha value (used by the fade-in transition),
//! - whether the node is pinned to its superview's full bounds.
//!
//! There is deliberately no geometry or layout solving here; actual rendering
//! belongs to the host. A `Surface` is an identity: cloning the handle does
//! not copy the node, and equality compares handles, not contents.
//!
//! ## Rules
//! - A surface has at most one superview; adding it somewhere else detaches
//!   it from its previous superview first.
//! - Alpha is clamped to `0.0..=1.0`.
//! - All operations are internally synchronized and never hold more than one
//!   node lock at a time.

use std::sync::{Arc, Mutex, Weak};

/// Handle to a retained hierarchy node.
///
/// ### Properties
/// - **Cheap to clone**: internally an `Arc`; clones refer to the same node.
/// - **Identity equality**: `==` is true only for handles to the same node.
///
/// ## Example
/// ```rust
/// use asyncview::Surface;
///
/// let parent = Surface::new();
/// let child = Surface::new();
/// parent.add_subview_filling(&child);
///
/// assert_eq!(child.superview(), Some(parent.clone()));
/// assert!(child.is_pinned_to_bounds());
///
/// child.remove_from_superview();
/// assert!(parent.subviews().is_empty());
/// ```
#[derive(Clone, Default)]
pub struct Surface {
    inner: Arc<Mutex<SurfaceState>>,
}

struct SurfaceState {
    alpha: f64,
    pinned_to_bounds: bool,
    superview: Weak<Mutex<SurfaceState>>,
    subviews: Vec<Surface>,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            pinned_to_bounds: false,
            superview: Weak::new(),
            subviews: Vec::new(),
        }
    }
}

impl Surface {
    /// Creates a detached surface with alpha `1.0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current alpha in `0.0..=1.0`.
    pub fn alpha(&self) -> f64 {
        self.inner.lock().unwrap().alpha
    }

    /// Sets the alpha, clamped to `0.0..=1.0`.
    pub fn set_alpha(&self, alpha: f64) {
        self.inner.lock().unwrap().alpha = alpha.clamp(0.0, 1.0);
    }

    /// Appends `child` as a subview without pinning it.
    ///
    /// If `child` already has a superview it is detached from it first.
    pub fn add_subview(&self, child: &Surface) {
        self.insert_subview(child, false);
    }

    /// Appends `child` as a subview pinned to this surface's full bounds
    /// (top/left/right/bottom).
    pub fn add_subview_filling(&self, child: &Surface) {
        self.insert_subview(child, true);
    }

    fn insert_subview(&self, child: &Surface, pinned: bool) {
        child.remove_from_superview();
        self.inner.lock().unwrap().subviews.push(child.clone());
        let mut state = child.inner.lock().unwrap();
        state.superview = Arc::downgrade(&self.inner);
        state.pinned_to_bounds = pinned;
    }

    /// Detaches this surface from its superview, if any.
    pub fn remove_from_superview(&self) {
        let parent = {
            let mut state = self.inner.lock().unwrap();
            let parent = state.superview.upgrade();
            state.superview = Weak::new();
            state.pinned_to_bounds = false;
            parent
        };
        if let Some(parent) = parent {
            parent
                .lock()
                .unwrap()
                .subviews
                .retain(|s| !Arc::ptr_eq(&s.inner, &self.inner));
        }
    }

    /// Returns the superview, if attached.
    pub fn superview(&self) -> Option<Surface> {
        self.inner
            .lock()
            .unwrap()
            .superview
            .upgrade()
            .map(|inner| Surface { inner })
    }

    /// Returns a snapshot of the subviews, in attachment order.
    pub fn subviews(&self) -> Vec<Surface> {
        self.inner.lock().unwrap().subviews.clone()
    }

    /// True if `child` is currently a direct subview of this surface.
    pub fn has_subview(&self, child: &Surface) -> bool {
        self.inner
            .lock()
            .unwrap()
            .subviews
            .iter()
            .any(|s| Arc::ptr_eq(&s.inner, &child.inner))
    }

    /// True if this surface is pinned to its superview's full bounds.
    ///
    /// Always false while detached.
    pub fn is_pinned_to_bounds(&self) -> bool {
        self.inner.lock().unwrap().pinned_to_bounds
    }
}

impl PartialEq for Surface {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Surface {}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.lock().unwrap();
        f.debug_struct("Surface")
            .field("alpha", &state.alpha)
            .field("pinned_to_bounds", &state.pinned_to_bounds)
            .field("subviews", &state.subviews.len())
            .finish()
    }
}
