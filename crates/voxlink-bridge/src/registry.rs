use std::collections::HashMap;

use voxlink_core::BridgeError;

use crate::bridge_trait::SpeechBridge;
use crate::null_bridge::NullBridge;

type BridgeFactory = Box<dyn Fn() -> Box<dyn SpeechBridge> + Send + Sync>;

/// Registry of bridge backends, keyed by the name used in `[bridge] backend`.
///
/// `"null"` is always present and the native backend registers itself when
/// compiled in. Embeddings add their own entries, typically a closure
/// capturing the injected [`HostInvoker`](crate::HostInvoker).
pub struct BridgeRegistry {
    factories: HashMap<String, BridgeFactory>,
}

impl BridgeRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            factories: HashMap::new(),
        };
        registry.register("null", || Box::new(NullBridge::new()));
        #[cfg(all(feature = "native", any(target_os = "ios", target_os = "macos")))]
        registry.register("native", || {
            Box::new(crate::native_bridge::NativeBridge::new())
        });
        registry
    }

    /// Register a factory under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn() -> Box<dyn SpeechBridge> + Send + Sync + 'static,
    {
        self.factories.insert(name.to_string(), Box::new(factory));
    }

    /// Instantiate the backend registered under `name`.
    pub fn create(&self, name: &str) -> Result<Box<dyn SpeechBridge>, BridgeError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| BridgeError::BackendNotFound(name.to_string()))?;
        Ok(factory())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn list_backends(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for BridgeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
