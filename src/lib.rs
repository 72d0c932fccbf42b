//! # asyncview
//!
//! **asyncview** is a small load-then-present composition helper for
//! retained view hierarchies.
//!
//! It sequences exactly three display states — a loading indicator, then
//! either a success view or a failure-resolution view — and delegates all
//! actual rendering to externally supplied view objects. The crate is
//! designed as a building block for hosts that own the real screen
//! hierarchy.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  Host code supplies:                  Container owns:
//!  ┌───────────────┐                   ┌─────────────────────────────────┐
//!  │ load closure  │──── reload ─────► │  state machine                  │
//!  │ build/success │                   │  idle → loading → terminal      │
//!  │ failure       │                   │                                 │
//!  └───────────────┘                   │  content slot (exactly one):    │
//!                                      │   loading view │ terminal view  │
//!  ┌───────────────┐   hooks           │                                 │
//!  │ observers     │◄──────────────────│  chrome override, fade-in       │
//!  └───────────────┘                   └─────────────────────────────────┘
//! ```
//!
//! ### Lifecycle
//! ```text
//! appear() (first time) ──► reload()
//!
//! reload():
//!   ├─► cycle += 1, cancel previous cycle token
//!   ├─► state := loading
//!   ├─► detach terminal content (if any)
//!   ├─► embed loading view, start its animation
//!   └─► spawn: select { token.cancelled, load(token) }
//!                                          │
//!                                 delivery │ (dropped if the cycle
//!                                          ▼  was superseded)
//!   ┌─► stop + detach loading view
//!   ├─► state := finished | succeeded | failed
//!   ├─► resolve: build(value) / success(value) / failure(error)
//!   └─► embed view (fade-in, chrome override) + hooks
//! ```
//!
//! ## Features
//! | Area            | Description                                          | Key types / traits                        |
//! |-----------------|------------------------------------------------------|-------------------------------------------|
//! | **Containers**  | Generic and result-typed load-then-present flow.     | [`AsyncContainer`], [`AsyncResultContainer`] |
//! | **Views**       | Embeddable unit, surfaces, navigation chrome.        | [`View`], [`Surface`], [`NavigationItem`] |
//! | **Loading**     | Busy-indication capability and default spinner view. | [`LoadingAnimatable`], [`LoadingView`]    |
//! | **Policies**    | Chrome propagation from embedded view to container.  | [`OverridePolicy`], [`OverrideField`]     |
//! | **Load**        | Async, cancelable fetch collaborator.                | [`Load`], [`LoadFn`], [`LoadRef`]         |
//! | **Observers**   | Lifecycle hooks without subclassing.                 | [`ContainerObserver`], [`ResultObserver`] |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogObserver`] *(demo/reference only)*.
//!
//! ## Example
//! ```no_run
//! use asyncview::{
//!     AsyncResultContainer, FailureResolution, LoadFn, NavigationItem, Surface, View,
//! };
//! use tokio_util::sync::CancellationToken;
//!
//! struct Greeting {
//!     surface: Surface,
//!     nav: NavigationItem,
//!     text: String,
//! }
//!
//! impl Greeting {
//!     fn new(text: String) -> Self {
//!         let nav = NavigationItem::new();
//!         nav.set_title("Greeting");
//!         Self { surface: Surface::new(), nav, text }
//!     }
//! }
//!
//! impl View for Greeting {
//!     fn surface(&self) -> Surface {
//!         self.surface.clone()
//!     }
//!     fn navigation_item(&self) -> NavigationItem {
//!         self.nav.clone()
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let container = AsyncResultContainer::new(
//!         LoadFn::arc(|_ctx: CancellationToken| async {
//!             // Fetch from anywhere; resolve once.
//!             Ok::<_, String>("Hello".to_string())
//!         }),
//!         |text: String| Greeting::new(text),
//!         |_err: String| FailureResolution::custom(|container| container.reload()),
//!     );
//!
//!     // Becoming visible triggers the first load cycle.
//!     container.appear();
//! }
//! ```

mod config;
mod container;
mod load;
mod observers;
mod policies;
mod views;

// ---- Public re-exports ----

pub use config::ContainerConfig;
pub use container::{AsyncContainer, AsyncResultContainer, FailureResolution, LifecycleState};
pub use load::{Load, LoadFn, LoadRef};
pub use observers::{ContainerObserver, ObserverSet, ResultObserver};
pub use policies::{OverrideField, OverridePolicy};
pub use views::{
    Action, ActivityIndicator, Label, LoadingAnimatable, LoadingView, LoadingViewRef,
    NavigationItem, Surface, View, ViewRef,
};

// Optional: a simple stdout observer for demos.
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogObserver;
