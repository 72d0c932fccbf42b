//! # Function-backed load operation (`LoadFn`).
//!
//! [`LoadFn`] wraps a closure `F: Fn(CancellationToken) -> Fut`, producing a
//! fresh future per reload cycle. Each invocation owns its own state; if the
//! fetch needs shared state across reloads, capture an `Arc<...>` explicitly
//! inside the closure.
//!
//! ## Example
//! ```rust
//! use asyncview::{LoadFn, LoadRef};
//! use tokio_util::sync::CancellationToken;
//!
//! let op: LoadRef<u32> = LoadFn::arc(|_ctx: CancellationToken| async { 42 });
//! ```

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::operation::Load;

/// Function-backed load implementation.
///
/// Wraps a closure that *creates* a new future per reload.
#[derive(Debug)]
pub struct LoadFn<F> {
    f: F,
}

impl<F> LoadFn<F> {
    /// Creates a new function-backed load operation.
    ///
    /// Prefer [`LoadFn::arc`] when you immediately need a
    /// [`LoadRef`](super::operation::LoadRef).
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the operation and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<F, Fut, T> Load for LoadFn<F>
where
    F: Fn(CancellationToken) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    type Output = T;

    async fn load(&self, ctx: CancellationToken) -> T {
        (self.f)(ctx).await
    }
}
