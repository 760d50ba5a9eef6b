//! User-agent classification and the per-view device snapshot.
//!
//! [`DeviceProbe::mount`] classifies the device once and keeps the result
//! for the lifetime of the probe. Later changes to the user agent or the
//! viewport are not observed. Callers that need a fresh reading use
//! [`DeviceProbe::classify_now`] or create a new probe.

use std::cell::OnceCell;
use tracing::debug;

/// Substrings marking a mobile user agent, compared case-insensitively.
pub const MOBILE_MARKERS: [&str; 2] = ["mobi", "android"];

/// Returns whether a user-agent string belongs to a mobile device.
#[must_use]
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let user_agent = user_agent.to_ascii_lowercase();
    MOBILE_MARKERS
        .iter()
        .any(|marker| user_agent.contains(marker))
}

/// Supplies the current user-agent string.
pub trait UserAgentSource {
    /// Returns the user agent, or `None` if it cannot be read.
    fn user_agent(&self) -> Option<String>;
}

impl<F> UserAgentSource for F
where
    F: Fn() -> Option<String>,
{
    fn user_agent(&self) -> Option<String> {
        self()
    }
}

/// A fixed user-agent string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticUserAgent(pub String);

impl UserAgentSource for StaticUserAgent {
    fn user_agent(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Result of classifying a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceFlag {
    is_mobile: bool,
}

impl DeviceFlag {
    /// Classifies a user agent; a missing one is treated as desktop.
    #[must_use]
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        Self {
            is_mobile: user_agent.is_some_and(is_mobile_user_agent),
        }
    }

    /// Returns whether the device is mobile.
    #[must_use]
    pub fn is_mobile(self) -> bool {
        self.is_mobile
    }
}

/// One-shot device classification owned by a single view instance.
pub struct DeviceProbe<S> {
    source: S,
    snapshot: OnceCell<DeviceFlag>,
}

impl<S: UserAgentSource> DeviceProbe<S> {
    /// Creates an unmounted probe.
    pub fn new(source: S) -> Self {
        Self {
            source,
            snapshot: OnceCell::new(),
        }
    }

    /// Classifies the device on the first call and returns that snapshot
    /// on every call after it.
    pub fn mount(&self) -> DeviceFlag {
        *self.snapshot.get_or_init(|| {
            let flag = self.classify_now();
            debug!(is_mobile = flag.is_mobile(), "device classified");
            flag
        })
    }

    /// Returns the snapshot, or `None` before [`mount`](Self::mount).
    #[must_use]
    pub fn flag(&self) -> Option<DeviceFlag> {
        self.snapshot.get().copied()
    }

    /// Returns the snapshot value; `false` before mount.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.flag().is_some_and(DeviceFlag::is_mobile)
    }

    /// Reads the user agent again without touching the snapshot.
    #[must_use]
    pub fn classify_now(&self) -> DeviceFlag {
        DeviceFlag::from_user_agent(self.source.user_agent().as_deref())
    }
}
