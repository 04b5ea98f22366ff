//! Platform bridge backends and the event sink they deliver through.

pub mod bridge_trait;
pub mod host_bridge;
#[cfg(all(feature = "native", any(target_os = "ios", target_os = "macos")))]
pub mod native_bridge;
pub mod null_bridge;
pub mod registry;
pub mod sink;

pub use bridge_trait::SpeechBridge;
pub use host_bridge::{HostBridge, HostInvoker, InvokeArg, InvokeReturn};
#[cfg(all(feature = "native", any(target_os = "ios", target_os = "macos")))]
pub use native_bridge::NativeBridge;
pub use null_bridge::NullBridge;
pub use registry::BridgeRegistry;
pub use sink::{BridgeCallbacks, EventSink};
