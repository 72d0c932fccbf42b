//! # Result-typed container.
//!
//! [`AsyncResultContainer`] specializes the load-then-present cycle for an
//! operation yielding `Result<T, E>`: a success is mapped to a typed view
//! via the `success` collaborator, a failure is handed to the `failure`
//! collaborator which decides between showing an alternate view and running
//! an arbitrary side effect ([`FailureResolution`]).
//!
//! It is a thin composition layer over the same state-machine core as
//! [`AsyncContainer`](crate::AsyncContainer) — no subclassing, just a
//! resolver computed from the two collaborators — and adds the typed
//! lifecycle hooks of [`ResultObserver`].
//!
//! ## Hook ordering
//! - success: record the success view, `did_load_view`,
//!   `did_succeed_loading`, then embed — the hooks can still configure the
//!   view before it is displayed;
//! - failure: `did_fail_loading`, then resolve; a shown view is embedded
//!   first and `did_load_view` fires after the attachment; a custom
//!   resolution embeds nothing and fires no `did_load_view`.

use std::sync::{Arc, Mutex, Weak};

use crate::config::ContainerConfig;
use crate::load::LoadRef;
use crate::observers::{ObserverSet, ResultObserver};
use crate::policies::OverridePolicy;
use crate::views::{LoadingAnimatable, NavigationItem, Surface, View, ViewRef};

use super::core::{ContainerCore, Resolution};
use super::state::LifecycleState;

/// What to do about a failed load.
///
/// Constructed fresh by the `failure` collaborator on every failed cycle
/// and consumed immediately.
pub enum FailureResolution<V, T, E>
where
    V: View,
    T: Send + 'static,
    E: Send + 'static,
{
    /// Embed this view as the terminal content.
    ShowView(ViewRef),
    /// Run a side effect with a handle to the container; embed nothing.
    Custom(Box<dyn FnOnce(AsyncResultContainer<V, T, E>) + Send>),
}

impl<V, T, E> FailureResolution<V, T, E>
where
    V: View,
    T: Send + 'static,
    E: Send + 'static,
{
    /// Convenience constructor for [`FailureResolution::Custom`].
    pub fn custom<F>(f: F) -> Self
    where
        F: FnOnce(AsyncResultContainer<V, T, E>) + Send + 'static,
    {
        Self::Custom(Box::new(f))
    }
}

struct ResultShared<V, T, E>
where
    V: View,
    T: Send + 'static,
    E: Send + 'static,
{
    success_view: Mutex<Option<Arc<V>>>,
    observers: ObserverSet<dyn ResultObserver<V, E>>,
    // Back-reference for handing the container to custom resolutions;
    // weak, so the resolver does not keep its own core alive.
    core: Mutex<Weak<ContainerCore<Result<T, E>>>>,
}

/// Load-then-present container for an operation yielding `Result<T, E>`.
///
/// ```no_run
/// use std::sync::Arc;
/// use asyncview::{
///     AsyncResultContainer, FailureResolution, LoadFn, NavigationItem, Surface, View, ViewRef,
/// };
/// use tokio_util::sync::CancellationToken;
///
/// struct Profile {
///     surface: Surface,
///     nav: NavigationItem,
///     name: String,
/// }
///
/// impl View for Profile {
///     fn surface(&self) -> Surface {
///         self.surface.clone()
///     }
///     fn navigation_item(&self) -> NavigationItem {
///         self.nav.clone()
///     }
/// }
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let container = AsyncResultContainer::new(
///         LoadFn::arc(|_ctx: CancellationToken| async {
///             Ok::<_, String>("Jane".to_string())
///         }),
///         |name: String| Profile {
///             surface: Surface::new(),
///             nav: NavigationItem::new(),
///             name,
///         },
///         |_err: String| FailureResolution::custom(|container| container.reload()),
///     );
///
///     container.appear();
/// }
/// ```
pub struct AsyncResultContainer<V, T, E>
where
    V: View,
    T: Send + 'static,
    E: Send + 'static,
{
    core: Arc<ContainerCore<Result<T, E>>>,
    shared: Arc<ResultShared<V, T, E>>,
}

impl<V, T, E> AsyncResultContainer<V, T, E>
where
    V: View,
    T: Send + 'static,
    E: Send + 'static,
{
    /// Creates a container from its three collaborators.
    pub fn new<S, F>(load: LoadRef<Result<T, E>>, success: S, failure: F) -> Self
    where
        S: Fn(T) -> V + Send + Sync + 'static,
        F: Fn(E) -> FailureResolution<V, T, E> + Send + Sync + 'static,
    {
        let shared = Arc::new(ResultShared {
            success_view: Mutex::new(None),
            observers: ObserverSet::new(),
            core: Mutex::new(Weak::new()),
        });
        let resolver_shared = Arc::clone(&shared);
        let core = ContainerCore::new(
            load,
            Box::new(|result: &Result<T, E>| match result {
                Ok(_) => LifecycleState::Succeeded,
                Err(_) => LifecycleState::Failed,
            }),
            Box::new(move |result| {
                Self::resolve(&resolver_shared, &success, &failure, result)
            }),
        );
        *shared.core.lock().unwrap() = Arc::downgrade(&core);
        Self { core, shared }
    }

    fn resolve<S, F>(
        shared: &Arc<ResultShared<V, T, E>>,
        success: &S,
        failure: &F,
        result: Result<T, E>,
    ) -> Resolution
    where
        S: Fn(T) -> V + Send + Sync + 'static,
        F: Fn(E) -> FailureResolution<V, T, E> + Send + Sync + 'static,
    {
        match result {
            Ok(value) => {
                let view = Arc::new(success(value));
                *shared.success_view.lock().unwrap() = Some(Arc::clone(&view));
                let view_ref: ViewRef = view.clone();
                shared.observers.notify(|o| o.did_load_view(&view_ref));
                shared.observers.notify(|o| o.did_succeed_loading(&view));
                Resolution {
                    view: Some(view_ref),
                    post_embed: None,
                }
            }
            Err(error) => {
                shared.observers.notify(|o| o.did_fail_loading(&error));
                match failure(error) {
                    FailureResolution::ShowView(view) => {
                        let hook_shared = Arc::clone(shared);
                        Resolution {
                            view: Some(view),
                            post_embed: Some(Box::new(move |view: &ViewRef| {
                                hook_shared.observers.notify(|o| o.did_load_view(view));
                            })),
                        }
                    }
                    FailureResolution::Custom(callback) => {
                        let core = shared.core.lock().unwrap().upgrade();
                        if let Some(core) = core {
                            callback(Self {
                                core,
                                shared: Arc::clone(shared),
                            });
                        }
                        Resolution {
                            view: None,
                            post_embed: None,
                        }
                    }
                }
            }
        }
    }

    /// Replaces the pluggable loading view; effective from the next reload.
    #[must_use]
    pub fn with_loading_view(self, view: Arc<dyn LoadingAnimatable>) -> Self {
        self.core.set_loading_view(view);
        self
    }

    /// Replaces the whole presentation configuration.
    #[must_use]
    pub fn with_config(self, config: ContainerConfig) -> Self {
        self.core.configure(|c| *c = config);
        self
    }

    /// Sets the navigation-chrome override policy.
    #[must_use]
    pub fn with_override_policy(self, policy: OverridePolicy) -> Self {
        self.core.configure(|c| c.override_policy = policy);
        self
    }

    /// Enables or disables the fade-in of the terminal view.
    #[must_use]
    pub fn with_fades_in_resulting_view(self, fades: bool) -> Self {
        self.core.configure(|c| c.fades_in_resulting_view = fades);
        self
    }

    /// Registers an observer and returns the container for chaining.
    #[must_use]
    pub fn with_observer(self, observer: Arc<dyn ResultObserver<V, E>>) -> Self {
        self.add_observer(observer);
        self
    }

    /// Registers an observer.
    pub fn add_observer(&self, observer: Arc<dyn ResultObserver<V, E>>) {
        self.shared.observers.add(observer);
    }

    /// Marks the container visible.
    ///
    /// The first call triggers exactly one automatic [`reload`](Self::reload);
    /// later calls are no-ops.
    pub fn appear(&self) {
        self.core.appear();
    }

    /// Re-runs the whole load cycle.
    pub fn reload(&self) {
        self.core.reload();
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.core.state()
    }

    /// The container's root surface, the one embedded views are pinned to.
    pub fn surface(&self) -> Surface {
        self.core.surface()
    }

    /// The container's navigation item, the target of chrome overrides.
    pub fn navigation_item(&self) -> NavigationItem {
        self.core.navigation_item()
    }

    /// The view built from the most recent successful delivery.
    ///
    /// `None` until the first success; failure cycles do not update it.
    pub fn success_view(&self) -> Option<Arc<V>> {
        self.shared.success_view.lock().unwrap().clone()
    }

    /// The currently embedded terminal view, if any.
    pub fn destination_view(&self) -> Option<ViewRef> {
        self.core.destination_view()
    }

    /// The loading view shown while a cycle is in flight.
    pub fn loading_view(&self) -> Arc<dyn LoadingAnimatable> {
        self.core.loading_view()
    }

    /// Snapshot of the presentation configuration.
    pub fn config(&self) -> ContainerConfig {
        self.core.config()
    }
}

impl<V, T, E> Clone for AsyncResultContainer<V, T, E>
where
    V: View,
    T: Send + 'static,
    E: Send + 'static,
{
    fn clone(&self) -> Self {
        Self {
            core: Arc::clone(&self.core),
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<V, T, E> View for AsyncResultContainer<V, T, E>
where
    V: View,
    T: Send + 'static,
    E: Send + 'static,
{
    fn surface(&self) -> Surface {
        self.core.surface()
    }

    fn navigation_item(&self) -> NavigationItem {
        self.core.navigation_item()
    }

    fn did_move_to_parent(&self, parent: Option<&Surface>) {
        // Entering a parent hierarchy counts as becoming visible.
        if parent.is_some() {
            self.appear();
        }
    }
}
