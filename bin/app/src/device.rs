//! Device detection hook for views.

use hashnav_device::{DeviceProbe, UserAgentSource, is_mobile_user_agent};
use leptos::prelude::*;

/// Reads `navigator.userAgent`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigatorUserAgent;

impl UserAgentSource for NavigatorUserAgent {
    #[cfg(feature = "csr")]
    fn user_agent(&self) -> Option<String> {
        window().navigator().user_agent().ok()
    }

    #[cfg(not(feature = "csr"))]
    fn user_agent(&self) -> Option<String> {
        None
    }
}

/// Device information for the calling view.
#[derive(Clone, Copy)]
pub struct Device {
    /// `false` until the view mounts, then the classification taken at mount.
    pub is_mobile: ReadSignal<bool>,
    /// Classifies an arbitrary user-agent string.
    pub classify: fn(&str) -> bool,
}

/// Classifies the device once, after the calling view mounts.
pub fn use_device() -> Device {
    let (is_mobile, set_is_mobile) = signal(false);
    let probe = StoredValue::new_local(DeviceProbe::new(NavigatorUserAgent));

    Effect::new(move || {
        set_is_mobile.set(probe.with_value(|probe| probe.mount().is_mobile()));
    });

    Device {
        is_mobile,
        classify: is_mobile_user_agent,
    }
}
