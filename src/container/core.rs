//! # Shared state-machine core behind both container flavors.
//!
//! [`ContainerCore`] owns the lifecycle state, the embedded-content slot,
//! the loading view, and the per-cycle cancellation token. The two public
//! containers are thin layers over it: each supplies a `classify` closure
//! (which terminal state a delivered value maps to) and a `resolve` closure
//! (which view, if any, to embed, plus any hooks to run around the embed).
//!
//! ## Cycle guard
//! Every `reload` bumps a generation counter and replaces the cycle token,
//! cancelling the previous one. The generation is re-checked at every lock
//! reacquisition while a delivery is applied, so a stale load completing
//! after a newer reload (or a collaborator reloading re-entrantly from a
//! hook) never embeds anything. Reload tasks hold only a `Weak` back to the
//! core: tearing the container down turns a pending completion into a no-op.
//!
//! ## Delivery application order
//! ```text
//! delivery ─► stop loading animation ─► detach loading view
//!          ─► state := terminal ─► resolve (collaborators + pre-embed hooks)
//!          ─► attach view ─► fade-in ─► chrome override ─► post-embed hooks
//! ```
//!
//! Collaborator closures, hooks, and containment signals always run with no
//! internal locks held.

use std::sync::{Arc, Mutex};

use tokio_util::sync::CancellationToken;

use crate::config::ContainerConfig;
use crate::load::LoadRef;
use crate::views::{LoadingAnimatable, LoadingView, NavigationItem, Surface, ViewRef};

use super::embed;
use super::state::LifecycleState;

/// Outcome of resolving a delivered value into displayable content.
pub(crate) struct Resolution {
    /// The terminal view to embed, or `None` to leave the container empty.
    pub(crate) view: Option<ViewRef>,
    /// Hook to run after the view is attached (ignored when `view` is `None`
    /// or the cycle was superseded before the embed).
    pub(crate) post_embed: Option<Box<dyn FnOnce(&ViewRef) + Send>>,
}

pub(crate) type Classify<T> = Box<dyn Fn(&T) -> LifecycleState + Send + Sync>;
pub(crate) type Resolve<T> = Box<dyn Fn(T) -> Resolution + Send + Sync>;

/// What currently occupies the container's single content slot.
enum EmbeddedContent {
    Loading(Arc<dyn LoadingAnimatable>),
    Terminal(ViewRef),
}

struct CoreState {
    lifecycle: LifecycleState,
    content: Option<EmbeddedContent>,
    loading: Arc<dyn LoadingAnimatable>,
    config: ContainerConfig,
    cycle: u64,
    cycle_token: CancellationToken,
    appeared: bool,
}

/// Load/success/failure state machine with exclusive ownership of the
/// embedded-content slot.
pub(crate) struct ContainerCore<T: Send + 'static> {
    surface: Surface,
    nav: NavigationItem,
    load: LoadRef<T>,
    classify: Classify<T>,
    resolve: Resolve<T>,
    state: Mutex<CoreState>,
}

impl<T: Send + 'static> ContainerCore<T> {
    pub(crate) fn new(load: LoadRef<T>, classify: Classify<T>, resolve: Resolve<T>) -> Arc<Self> {
        Arc::new(Self {
            surface: Surface::new(),
            nav: NavigationItem::new(),
            load,
            classify,
            resolve,
            state: Mutex::new(CoreState {
                lifecycle: LifecycleState::Idle,
                content: None,
                loading: Arc::new(LoadingView::new()),
                config: ContainerConfig::default(),
                cycle: 0,
                cycle_token: CancellationToken::new(),
                appeared: false,
            }),
        })
    }

    /// Marks the container visible; the first call triggers one automatic
    /// reload, later calls are no-ops.
    pub(crate) fn appear(self: &Arc<Self>) {
        {
            let mut st = self.state.lock().unwrap();
            if st.appeared {
                return;
            }
            st.appeared = true;
        }
        self.reload();
    }

    /// Starts a new load cycle, superseding any cycle still in flight.
    ///
    /// Removes embedded terminal content, shows the loading view (leaving it
    /// in place if it is already up), and spawns the load. Must be called
    /// from within a tokio runtime.
    pub(crate) fn reload(self: &Arc<Self>) {
        let (stale_terminal, loading, needs_attach, token, cycle) = {
            let mut st = self.state.lock().unwrap();
            st.cycle += 1;
            st.cycle_token.cancel();
            st.cycle_token = CancellationToken::new();
            let from = st.lifecycle;
            st.lifecycle = LifecycleState::Loading;
            log::debug!(
                "reload: state {} -> loading (cycle {})",
                from.as_label(),
                st.cycle
            );
            let loading = Arc::clone(&st.loading);
            let (stale, needs_attach) = match st.content.take() {
                Some(EmbeddedContent::Terminal(view)) => (Some(view), true),
                // Reload while already loading: keep the embedded loading
                // view rather than re-attaching it.
                Some(EmbeddedContent::Loading(lv)) => {
                    st.content = Some(EmbeddedContent::Loading(lv));
                    (None, false)
                }
                None => (None, true),
            };
            if needs_attach {
                st.content = Some(EmbeddedContent::Loading(Arc::clone(&loading)));
            }
            (stale, loading, needs_attach, st.cycle_token.clone(), st.cycle)
        };

        if let Some(view) = stale_terminal {
            embed::detach(&*view);
        }
        if needs_attach {
            embed::attach(&self.surface, &*loading);
            loading.start_loading_animation();
        }

        let weak = Arc::downgrade(self);
        let load = Arc::clone(&self.load);
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                value = load.load(token.clone()) => {
                    if let Some(core) = weak.upgrade() {
                        core.apply(cycle, value);
                    }
                }
            }
        });
    }

    /// Applies one delivery for the given cycle.
    ///
    /// Every lock reacquisition re-checks the cycle so a reload issued from
    /// a containment signal or hook safely supersedes the rest of the
    /// application.
    fn apply(&self, cycle: u64, value: T) {
        let loading = {
            let mut st = self.state.lock().unwrap();
            if st.cycle != cycle {
                log::debug!("dropping stale delivery (cycle {cycle})");
                return;
            }
            match st.content.take() {
                Some(EmbeddedContent::Loading(lv)) => Some(lv),
                other => {
                    st.content = other;
                    None
                }
            }
        };
        if let Some(loading) = loading {
            loading.stop_loading_animation();
            embed::detach(&*loading);
        }

        let terminal = (self.classify)(&value);
        {
            let mut st = self.state.lock().unwrap();
            if st.cycle != cycle {
                return;
            }
            st.lifecycle = terminal;
        }
        log::debug!("load delivered: state loading -> {}", terminal.as_label());

        let resolution = (self.resolve)(value);
        let Some(view) = resolution.view else { return };

        let (token, fade, policy) = {
            let mut st = self.state.lock().unwrap();
            if st.cycle != cycle {
                return;
            }
            st.content = Some(EmbeddedContent::Terminal(Arc::clone(&view)));
            (
                st.cycle_token.clone(),
                st.config.fade(),
                st.config.override_policy,
            )
        };

        embed::attach(&self.surface, &*view);
        if let Some(duration) = fade {
            let surface = view.surface();
            surface.set_alpha(0.0);
            tokio::spawn(embed::fade_in(surface, duration, token));
        }
        policy.apply(&self.nav, &view.navigation_item());

        if let Some(post_embed) = resolution.post_embed {
            post_embed(&view);
        }
    }

    pub(crate) fn state(&self) -> LifecycleState {
        self.state.lock().unwrap().lifecycle
    }

    pub(crate) fn surface(&self) -> Surface {
        self.surface.clone()
    }

    pub(crate) fn navigation_item(&self) -> NavigationItem {
        self.nav.clone()
    }

    /// The currently embedded terminal view, if any.
    pub(crate) fn destination_view(&self) -> Option<ViewRef> {
        match &self.state.lock().unwrap().content {
            Some(EmbeddedContent::Terminal(view)) => Some(Arc::clone(view)),
            _ => None,
        }
    }

    pub(crate) fn loading_view(&self) -> Arc<dyn LoadingAnimatable> {
        Arc::clone(&self.state.lock().unwrap().loading)
    }

    /// Replaces the loading view; effective from the next reload.
    pub(crate) fn set_loading_view(&self, view: Arc<dyn LoadingAnimatable>) {
        self.state.lock().unwrap().loading = view;
    }

    pub(crate) fn config(&self) -> ContainerConfig {
        self.state.lock().unwrap().config
    }

    pub(crate) fn configure(&self, f: impl FnOnce(&mut ContainerConfig)) {
        f(&mut self.state.lock().unwrap().config);
    }
}

impl<T: Send + 'static> Drop for ContainerCore<T> {
    fn drop(&mut self) {
        // Wake any pending reload task so it exits instead of lingering.
        if let Ok(st) = self.state.lock() {
            st.cycle_token.cancel();
        }
    }
}
