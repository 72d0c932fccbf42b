//! # View abstraction: the child presentation unit.
//!
//! A [`View`] is anything the containers can embed: it exposes a root
//! [`Surface`], a [`NavigationItem`], and receives the containment signals
//! when it enters or leaves a parent hierarchy. The common handle type is
//! [`ViewRef`], an `Arc<dyn View>` suitable for sharing between the
//! container, hooks, and host code.
//!
//! Implementations are handles themselves in practice: they hold `Surface`
//! and `NavigationItem` handles (both cheap to clone) plus whatever state
//! the host needs, so `&self` access is enough for every operation.

use std::sync::Arc;

use super::nav::NavigationItem;
use super::surface::Surface;

/// # Embeddable presentation unit.
///
/// A `View` owns a root surface and a navigation item, and may react to
/// being attached to or detached from a parent. The containment signals
/// default to no-ops; the containers invoke them with no internal locks
/// held, so a signal handler may call back into its container.
///
/// # Example
/// ```rust
/// use asyncview::{NavigationItem, Surface, View};
///
/// struct Banner {
///     surface: Surface,
///     nav: NavigationItem,
/// }
///
/// impl Banner {
///     fn new(title: &str) -> Self {
///         let nav = NavigationItem::new();
///         nav.set_title(title);
///         Self { surface: Surface::new(), nav }
///     }
/// }
///
/// impl View for Banner {
///     fn surface(&self) -> Surface {
///         self.surface.clone()
///     }
///
///     fn navigation_item(&self) -> NavigationItem {
///         self.nav.clone()
///     }
/// }
/// ```
pub trait View: Send + Sync + 'static {
    /// Returns a handle to the view's root surface.
    fn surface(&self) -> Surface;

    /// Returns a handle to the view's navigation item.
    fn navigation_item(&self) -> NavigationItem;

    /// Signals that the view is about to enter or leave a parent hierarchy.
    ///
    /// `parent` is the new parent's root surface, or `None` when the view is
    /// about to be detached.
    fn will_move_to_parent(&self, parent: Option<&Surface>) {
        let _ = parent;
    }

    /// Signals that the move into (or out of) a parent hierarchy completed.
    ///
    /// `parent` is the parent's root surface, or `None` after detachment.
    fn did_move_to_parent(&self, parent: Option<&Surface>) {
        let _ = parent;
    }
}

/// Shared handle to a view (`Arc<dyn View>`).
pub type ViewRef = Arc<dyn View>;
