//! Device detection for hashnav views.
//!
//! Views branch their rendering on whether the page runs on a mobile device.
//! The decision is made once, when the owning view mounts, from the
//! browser's user-agent string.

pub mod probe;

pub use probe::{DeviceFlag, DeviceProbe, StaticUserAgent, UserAgentSource, is_mobile_user_agent};
