//! # Generic async container.
//!
//! [`AsyncContainer`] runs the plain load-then-present cycle: embed the
//! loading view, run the [`Load`](crate::Load) collaborator, then swap in
//! whatever view the `build` collaborator maps the delivered value to.
//!
//! The container is a cheap-clone handle: clones share the same state, so a
//! handle can be kept by the host, passed to hooks, or stored in other
//! views. It also implements [`View`] itself — attach it to a parent
//! hierarchy and the attachment signal triggers its first appearance.

use std::sync::Arc;

use crate::config::ContainerConfig;
use crate::load::LoadRef;
use crate::observers::{ContainerObserver, ObserverSet};
use crate::policies::OverridePolicy;
use crate::views::{LoadingAnimatable, NavigationItem, Surface, View, ViewRef};

use super::core::{ContainerCore, Resolution};
use super::state::LifecycleState;

/// Load-then-present container for an operation delivering a plain value.
///
/// Construction takes the two collaborators; presentation settings have
/// defaults and are adjusted with the `with_*` builders:
///
/// ```no_run
/// use std::sync::Arc;
/// use asyncview::{AsyncContainer, LoadFn, NavigationItem, Surface, View, ViewRef};
/// use tokio_util::sync::CancellationToken;
///
/// struct Message {
///     surface: Surface,
///     nav: NavigationItem,
///     text: String,
/// }
///
/// impl View for Message {
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
///     let container = AsyncContainer::new(
///         LoadFn::arc(|_ctx: CancellationToken| async { "Hello".to_string() }),
///         |text: String| {
///             Some(Arc::new(Message {
///                 surface: Surface::new(),
///                 nav: NavigationItem::new(),
///                 text,
///             }) as ViewRef)
///         },
///     )
///     .with_fades_in_resulting_view(false);
///
///     container.appear();
/// }
/// ```
///
/// `reload` (and therefore `appear`) must be called from within a tokio
/// runtime; the load and fade transitions run as spawned tasks.
pub struct AsyncContainer<T: Send + 'static> {
    core: Arc<ContainerCore<T>>,
    observers: Arc<ObserverSet<dyn ContainerObserver>>,
}

impl<T: Send + 'static> AsyncContainer<T> {
    /// Creates a container from its two collaborators.
    ///
    /// `build` maps the delivered value to the view to embed; returning
    /// `None` leaves the container empty (the loading view is removed
    /// either way).
    pub fn new<B>(load: LoadRef<T>, build: B) -> Self
    where
        B: Fn(T) -> Option<ViewRef> + Send + Sync + 'static,
    {
        let observers: Arc<ObserverSet<dyn ContainerObserver>> = Arc::new(ObserverSet::new());
        let obs = Arc::clone(&observers);
        let core = ContainerCore::new(
            load,
            Box::new(|_| LifecycleState::Finished),
            Box::new(move |value| {
                let view = build(value);
                let obs = Arc::clone(&obs);
                Resolution {
                    view,
                    post_embed: Some(Box::new(move |view: &ViewRef| {
                        obs.notify(|o| o.did_load_view(view));
                    })),
                }
            }),
        );
        Self { core, observers }
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
    pub fn with_observer(self, observer: Arc<dyn ContainerObserver>) -> Self {
        self.add_observer(observer);
        self
    }

    /// Registers an observer.
    pub fn add_observer(&self, observer: Arc<dyn ContainerObserver>) {
        self.observers.add(observer);
    }

    /// Marks the container visible.
    ///
    /// The first call triggers exactly one automatic [`reload`](Self::reload);
    /// later calls are no-ops. Also invoked through the container's own
    /// [`View::did_move_to_parent`] when it is attached to a parent.
    pub fn appear(&self) {
        self.core.appear();
    }

    /// Re-runs the whole load cycle.
    ///
    /// Safe to call at any time; a cycle still in flight is superseded and
    /// its eventual delivery dropped.
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

impl<T: Send + 'static> Clone for AsyncContainer<T> {
    fn clone(&self) -> Self {
        Self {
            core: Arc::clone(&self.core),
            observers: Arc::clone(&self.observers),
        }
    }
}

impl<T: Send + 'static> View for AsyncContainer<T> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use tokio_util::sync::CancellationToken;

    use crate::load::LoadFn;

    struct TestView {
        surface: Surface,
        nav: NavigationItem,
    }

    impl TestView {
        fn arc() -> Arc<Self> {
            Arc::new(Self {
                surface: Surface::new(),
                nav: NavigationItem::new(),
            })
        }
    }

    impl View for TestView {
        fn surface(&self) -> Surface {
            self.surface.clone()
        }

        fn navigation_item(&self) -> NavigationItem {
            self.nav.clone()
        }
    }

    /// Records whether the view was attached at the time the hook fired.
    struct EmbedProbe {
        attached_at_hook: Mutex<Vec<bool>>,
    }

    impl EmbedProbe {
        fn arc() -> Arc<Self> {
            Arc::new(Self {
                attached_at_hook: Mutex::new(Vec::new()),
            })
        }
    }

    impl ContainerObserver for EmbedProbe {
        fn did_load_view(&self, view: &ViewRef) {
            self.attached_at_hook
                .lock()
                .unwrap()
                .push(view.surface().superview().is_some());
        }
    }

    fn container_delivering(
        value: u32,
        delay: Duration,
    ) -> (AsyncContainer<u32>, Arc<TestView>) {
        let view = TestView::arc();
        let embedded = Arc::clone(&view);
        let container = AsyncContainer::new(
            LoadFn::arc(move |_ctx: CancellationToken| async move {
                tokio::time::sleep(delay).await;
                value
            }),
            move |_| Some(Arc::clone(&embedded) as ViewRef),
        );
        (container, view)
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_until_first_appearance() {
        let (container, _view) = container_delivering(1, Duration::from_millis(50));
        assert_eq!(container.state(), LifecycleState::Idle);
        assert!(!container.loading_view().is_animating());
        assert!(container.surface().subviews().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_appear_embeds_animating_loading_view() {
        let (container, _view) = container_delivering(1, Duration::from_millis(50));
        container.appear();

        assert_eq!(container.state(), LifecycleState::Loading);
        let loading = container.loading_view();
        assert!(loading.is_animating());
        assert!(container.surface().has_subview(&loading.surface()));
        assert!(loading.surface().is_pinned_to_bounds());
        assert!(container.destination_view().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_appear_is_idempotent() {
        let calls = Arc::new(AtomicU32::new(0));
        let counted = Arc::clone(&calls);
        let container = AsyncContainer::new(
            LoadFn::arc(move |_ctx: CancellationToken| {
                counted.fetch_add(1, Ordering::SeqCst);
                async { 1u32 }
            }),
            |_| None,
        );
        container.appear();
        container.appear();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delivery_swaps_loading_for_built_view() {
        let (container, view) = container_delivering(7, Duration::from_millis(50));
        container.appear();
        tokio::time::sleep(Duration::from_millis(60)).await;

        assert_eq!(container.state(), LifecycleState::Finished);
        let loading = container.loading_view();
        assert!(!loading.is_animating());
        assert!(!container.surface().has_subview(&loading.surface()));
        assert!(container.surface().has_subview(&view.surface()));
        assert!(view.surface().is_pinned_to_bounds());
        assert_eq!(container.surface().subviews().len(), 1);

        let destination = container.destination_view().expect("terminal view embedded");
        assert_eq!(destination.surface(), view.surface());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reload_runs_a_second_full_cycle() {
        let (container, view) = container_delivering(7, Duration::from_millis(50));
        container.appear();
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(container.state(), LifecycleState::Finished);

        container.reload();
        assert_eq!(container.state(), LifecycleState::Loading);
        assert!(container.loading_view().is_animating());
        assert!(!container.surface().has_subview(&view.surface()));

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(container.state(), LifecycleState::Finished);
        assert!(container.surface().has_subview(&view.surface()));
        assert_eq!(container.surface().subviews().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_build_returning_none_leaves_container_empty() {
        let container = AsyncContainer::new(
            LoadFn::arc(|_ctx: CancellationToken| async { 1u32 }),
            |_| None,
        );
        container.appear();
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(container.state(), LifecycleState::Finished);
        assert!(container.destination_view().is_none());
        assert!(container.surface().subviews().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_did_load_view_fires_after_embed() {
        let probe = EmbedProbe::arc();
        let (container, _view) = container_delivering(1, Duration::from_millis(10));
        let container = container.with_observer(probe.clone());
        container.appear();
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(*probe.attached_at_hook.lock().unwrap(), vec![true]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_delivery_is_dropped() {
        let builds = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&builds);
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&attempts);
        let view = TestView::arc();
        let embedded = Arc::clone(&view);

        let container = AsyncContainer::new(
            LoadFn::arc(move |_ctx: CancellationToken| {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                async move {
                    // First cycle is slow, second is fast.
                    let delay = if n == 0 { 100 } else { 10 };
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                    n
                }
            }),
            move |n| {
                seen.lock().unwrap().push(n);
                Some(Arc::clone(&embedded) as ViewRef)
            },
        );

        container.appear();
        // Let the first cycle start its slow load before superseding it.
        tokio::task::yield_now().await;
        container.reload();
        tokio::time::sleep(Duration::from_millis(200)).await;

        // Only the second cycle's delivery was applied; the first one was
        // superseded and dropped.
        assert_eq!(*builds.lock().unwrap(), vec![1]);
        assert_eq!(container.state(), LifecycleState::Finished);
        assert_eq!(container.surface().subviews().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reload_while_loading_keeps_single_loading_view() {
        let (container, _view) = container_delivering(1, Duration::from_millis(100));
        container.appear();
        container.reload();

        let loading = container.loading_view();
        assert!(loading.is_animating());
        assert_eq!(container.surface().subviews().len(), 1);
        assert!(container.surface().has_subview(&loading.surface()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_indicator_stops_and_detaches_before_build_runs() {
        let loading = Arc::new(crate::views::LoadingView::new());
        let probe = Arc::clone(&loading);
        let observed = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&observed);
        let container = AsyncContainer::new(
            LoadFn::arc(|_ctx: CancellationToken| async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                1u32
            }),
            move |_| {
                seen.lock()
                    .unwrap()
                    .push((probe.is_animating(), probe.surface().superview().is_some()));
                None
            },
        )
        .with_loading_view(loading.clone());

        container.appear();
        assert!(loading.is_animating());
        tokio::time::sleep(Duration::from_millis(20)).await;

        // By the time the build collaborator ran, the indicator had been
        // stopped and removed.
        assert_eq!(*observed.lock().unwrap(), vec![(false, false)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_container_ignores_late_delivery() {
        let builds = Arc::new(AtomicU32::new(0));
        let counted = Arc::clone(&builds);
        let container = AsyncContainer::new(
            LoadFn::arc(|_ctx: CancellationToken| async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                1u32
            }),
            move |_| {
                counted.fetch_add(1, Ordering::SeqCst);
                None
            },
        );
        container.appear();
        drop(container);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(builds.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_attachment_to_parent_triggers_first_appearance() {
        let (container, _view) = container_delivering(1, Duration::from_millis(50));
        let parent = Surface::new();
        container.did_move_to_parent(Some(&parent));

        assert_eq!(container.state(), LifecycleState::Loading);
        assert!(container.loading_view().is_animating());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fade_in_ramps_embedded_view_alpha() {
        let (container, view) = container_delivering(1, Duration::from_millis(50));
        container.appear();
        tokio::time::sleep(Duration::from_millis(60)).await;

        // Embedded, but the fade has only just begun.
        assert_eq!(view.surface().alpha(), 0.0);
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(view.surface().alpha(), 1.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fade_can_be_disabled() {
        let (container, view) = container_delivering(1, Duration::from_millis(50));
        let container = container.with_fades_in_resulting_view(false);
        container.appear();
        tokio::time::sleep(Duration::from_millis(60)).await;

        assert_eq!(view.surface().alpha(), 1.0);
    }
}
