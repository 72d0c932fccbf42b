//! Configuration policies for the containers.
//!
//! ## Contents
//! - [`OverridePolicy`] which navigation-chrome fields propagate from an
//!   embedded view to its container
//! - [`OverrideField`] the individual propagatable fields
//!
//! ## Defaults
//! - `OverridePolicy::default()` is empty: no propagation.

mod override_policy;

pub use override_policy::{OverrideField, OverridePolicy};
