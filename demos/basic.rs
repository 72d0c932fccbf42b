//! Minimal load-then-present flow with the generic container.
//!
//! Run with: `cargo run --example basic --features logging`

use std::sync::Arc;
use std::time::Duration;

use asyncview::{AsyncContainer, LoadFn, LogObserver, NavigationItem, Surface, View, ViewRef};
use tokio_util::sync::CancellationToken;

struct Message {
    surface: Surface,
    nav: NavigationItem,
    text: String,
}

impl Message {
    fn new(text: String) -> Self {
        let nav = NavigationItem::new();
        nav.set_title("Message");
        Self {
            surface: Surface::new(),
            nav,
            text,
        }
    }
}

impl View for Message {
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
            tokio::time::sleep(Duration::from_millis(300)).await;
            "Hello from the demo loader".to_string()
        }),
        |text: String| Some(Arc::new(Message::new(text)) as ViewRef),
    )
    .with_observer(Arc::new(LogObserver));

    container.appear();
    println!("state after appear: {}", container.state().as_label());

    tokio::time::sleep(Duration::from_millis(400)).await;
    println!("state after delivery: {}", container.state().as_label());

    if let Some(view) = container.destination_view() {
        println!(
            "embedded view pinned to bounds: {}",
            view.surface().is_pinned_to_bounds()
        );
    }
}
