//! # Load operation contract.
//!
//! [`Load`] is the asynchronous fetch a container runs on every reload. It
//! receives the cycle's [`CancellationToken`]: the token is cancelled as
//! soon as a newer reload supersedes the cycle or the container is torn
//! down, so implementations can abandon work early. Honoring the token is
//! cooperative — a result produced after cancellation is dropped by the
//! container either way.
//!
//! The common handle type is [`LoadRef`], an `Arc<dyn Load>` shared between
//! the container and the reload tasks it spawns.
//!
//! ## Contract
//! - The returned future resolves at most once per invocation, which is what
//!   delivers the result; a future that never resolves leaves the container
//!   showing its loading view indefinitely (there is no built-in timeout).
//! - `load` is invoked once per reload cycle, possibly many times over the
//!   container's lifetime.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// # Asynchronous, cancelable fetch.
///
/// Implementors produce one value per invocation and should check the token
/// to stop early when the cycle has been superseded.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use asyncview::Load;
/// use tokio_util::sync::CancellationToken;
///
/// struct Greeting;
///
/// #[async_trait]
/// impl Load for Greeting {
///     type Output = String;
///
///     async fn load(&self, ctx: CancellationToken) -> String {
///         if ctx.is_cancelled() {
///             return String::new();
///         }
///         "Hello".to_string()
///     }
/// }
/// ```
#[async_trait]
pub trait Load: Send + Sync + 'static {
    /// The value a completed fetch delivers.
    type Output: Send + 'static;

    /// Runs the fetch until it produces a value or is abandoned.
    async fn load(&self, ctx: CancellationToken) -> Self::Output;
}

/// Shared handle to a load operation (`Arc<dyn Load>`).
pub type LoadRef<T> = std::sync::Arc<dyn Load<Output = T>>;
