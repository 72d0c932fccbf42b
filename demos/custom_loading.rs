//! Plugging in a custom loading view and propagating navigation chrome.
//!
//! Run with: `cargo run --example custom_loading`

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use asyncview::{
    AsyncContainer, LoadFn, LoadingAnimatable, NavigationItem, OverridePolicy, Surface, View,
    ViewRef,
};
use tokio_util::sync::CancellationToken;

/// A bare-bones replacement for the built-in loading view.
struct PulseLoading {
    surface: Surface,
    nav: NavigationItem,
    animating: AtomicBool,
}

impl PulseLoading {
    fn new() -> Self {
        Self {
            surface: Surface::new(),
            nav: NavigationItem::new(),
            animating: AtomicBool::new(false),
        }
    }
}

impl View for PulseLoading {
    fn surface(&self) -> Surface {
        self.surface.clone()
    }

    fn navigation_item(&self) -> NavigationItem {
        self.nav.clone()
    }
}

impl LoadingAnimatable for PulseLoading {
    fn is_animating(&self) -> bool {
        self.animating.load(Ordering::SeqCst)
    }

    fn start_loading_animation(&self) {
        self.animating.store(true, Ordering::SeqCst);
        println!("[pulse] ~~~");
    }

    fn stop_loading_animation(&self) {
        self.animating.store(false, Ordering::SeqCst);
        println!("[pulse] done");
    }
}

struct Dashboard {
    surface: Surface,
    nav: NavigationItem,
}

impl Dashboard {
    fn new() -> Self {
        let nav = NavigationItem::new();
        nav.set_title("Dashboard");
        Self {
            surface: Surface::new(),
            nav,
        }
    }
}

impl View for Dashboard {
    fn surface(&self) -> Surface {
        self.surface.clone()
    }

    fn navigation_item(&self) -> NavigationItem {
        self.nav.clone()
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let container = AsyncContainer::new(
        LoadFn::arc(|_ctx: CancellationToken| async {
            tokio::time::sleep(Duration::from_millis(250)).await;
        }),
        |()| Some(Arc::new(Dashboard::new()) as ViewRef),
    )
    .with_loading_view(Arc::new(PulseLoading::new()))
    .with_override_policy(OverridePolicy::TITLE)
    .with_fades_in_resulting_view(false);

    container.appear();
    tokio::time::sleep(Duration::from_millis(400)).await;

    // The dashboard's title propagated to the container per the policy.
    println!(
        "container title: {:?}",
        container.navigation_item().title()
    );
}
