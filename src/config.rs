//! # Container configuration.
//!
//! Provides [`ContainerConfig`], the presentation settings both container
//! flavors share. The configuration is read at the moment it matters — the
//! fade settings and override policy when a terminal view is embedded — so
//! changes apply from the next completed cycle on.
//!
//! ## Sentinel values
//! - `fade_duration = 0` → no fade even when `fades_in_resulting_view` is on
//!   (treated as `None` by [`ContainerConfig::fade`]).

use std::time::Duration;

use crate::policies::OverridePolicy;

/// Presentation settings for a container.
///
/// ## Field semantics
/// - `fades_in_resulting_view`: whether the terminal view's alpha fades from
///   0 to 1 after embedding
/// - `fade_duration`: length of that fade
/// - `override_policy`: which navigation-chrome fields are copied from the
///   embedded view to the container
#[derive(Clone, Copy, Debug)]
pub struct ContainerConfig {
    /// Whether the terminal view fades in after the loading view is removed.
    pub fades_in_resulting_view: bool,

    /// Duration of the fade-in transition.
    ///
    /// `Duration::ZERO` disables the fade regardless of
    /// `fades_in_resulting_view`.
    pub fade_duration: Duration,

    /// Navigation-chrome propagation policy.
    ///
    /// Applied once per embed; not reactive to later changes of the
    /// embedded view's own chrome.
    pub override_policy: OverridePolicy,
}

impl ContainerConfig {
    /// Returns the effective fade duration as an `Option`.
    ///
    /// - `None` → no fade (disabled or zero duration)
    /// - `Some(d)` → fade the embedded view's alpha from 0 to 1 over `d`
    #[inline]
    pub fn fade(&self) -> Option<Duration> {
        if self.fades_in_resulting_view && self.fade_duration > Duration::ZERO {
            Some(self.fade_duration)
        } else {
            None
        }
    }
}

impl Default for ContainerConfig {
    /// Default configuration:
    ///
    /// - `fades_in_resulting_view = true`
    /// - `fade_duration = 500ms`
    /// - `override_policy = empty` (no propagation)
    fn default() -> Self {
        Self {
            fades_in_resulting_view: true,
            fade_duration: Duration::from_millis(500),
            override_policy: OverridePolicy::default(),
        }
    }
}
