//! Result-typed container with a failing first attempt.
//!
//! The first load fails; the failure collaborator resolves it with a custom
//! side effect that simply retries. The second attempt succeeds and the
//! success view is embedded.
//!
//! Run with: `cargo run --example failure_resolution`

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use asyncview::{
    AsyncResultContainer, FailureResolution, LoadFn, NavigationItem, ResultObserver, Surface,
    View, ViewRef,
};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Error)]
#[error("the backend is unreachable")]
struct FetchError;

struct Report {
    surface: Surface,
    nav: NavigationItem,
    body: String,
}

impl Report {
    fn new(body: String) -> Self {
        Self {
            surface: Surface::new(),
            nav: NavigationItem::new(),
            body,
        }
    }
}

impl View for Report {
    fn surface(&self) -> Surface {
        self.surface.clone()
    }

    fn navigation_item(&self) -> NavigationItem {
        self.nav.clone()
    }
}

struct StatusPrinter;

impl ResultObserver<Report, FetchError> for StatusPrinter {
    fn did_load_view(&self, _view: &ViewRef) {
        println!("[hook] view embedded");
    }

    fn did_succeed_loading(&self, view: &Arc<Report>) {
        println!("[hook] succeeded: {}", view.body);
    }

    fn did_fail_loading(&self, error: &FetchError) {
        println!("[hook] failed: {error}");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let attempts = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempts);

    let container = AsyncResultContainer::new(
        LoadFn::arc(move |_ctx: CancellationToken| {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                tokio::time::sleep(Duration::from_millis(200)).await;
                if n == 0 {
                    Err(FetchError)
                } else {
                    Ok(format!("report ready after {} attempts", n + 1))
                }
            }
        }),
        |body: String| Report::new(body),
        |_err: FetchError| {
            println!("[resolution] retrying once");
            FailureResolution::custom(|container| container.reload())
        },
    )
    .with_observer(Arc::new(StatusPrinter));

    container.appear();
    tokio::time::sleep(Duration::from_millis(600)).await;

    println!("final state: {}", container.state().as_label());
    if let Some(report) = container.success_view() {
        println!("success view: {}", report.body);
    }
}
