//! Editor registry.
//!
//! Maps the short, unpackaged name of an edited type (`Float`, `ByteArray`)
//! to the editor registered for it. Built once from a [`ProviderSource`] and
//! read-only afterwards, so it can be shared behind an `Arc` and read from any
//! thread without locking.

use std::collections::HashMap;
use std::sync::Arc;

use propedit_api::editor::EDITOR_MARKER;
use propedit_api::types::simple_name;
use propedit_api::PropertyEditor;

use crate::discovery::ProviderSource;
use crate::error::EngineError;

/// Why a discovered provider was not registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Another provider already owns the key. Holds that provider's name.
    Duplicate { existing: String },
    /// Provider name does not contain `EDITOR_MARKER`.
    MissingMarker,
}

/// A provider dropped during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub provider: String,
    /// Derived key, empty for `MissingMarker`.
    pub key: String,
    pub reason: RejectReason,
}

pub struct EditorRegistry {
    editors: HashMap<String, Arc<dyn PropertyEditor>>,
    rejections: Vec<Rejection>,
}

impl std::fmt::Debug for EditorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorRegistry")
            .field("keys", &self.keys())
            .field("rejections", &self.rejections)
            .finish()
    }
}

impl EditorRegistry {
    /// Run discovery on `source` and register every provider it returns.
    ///
    /// A failing source fails the build; conflicts between providers do not.
    pub fn discover(source: &dyn ProviderSource) -> Result<Self, EngineError> {
        let providers = source.providers()?;
        tracing::debug!(providers = providers.len(), "discovered editor providers");
        Ok(Self::from_providers(providers))
    }

    /// Register `providers` in order. First provider for a key wins.
    pub fn from_providers(providers: impl IntoIterator<Item = Arc<dyn PropertyEditor>>) -> Self {
        let mut editors: HashMap<String, Arc<dyn PropertyEditor>> = HashMap::new();
        let mut rejections = Vec::new();

        for editor in providers {
            let provider = editor.provider_name().to_string();
            let Some(key) = editor_key(&provider) else {
                tracing::warn!(
                    provider = %provider,
                    "editor provider name lacks the '{EDITOR_MARKER}' marker, ignoring"
                );
                rejections.push(Rejection {
                    provider,
                    key: String::new(),
                    reason: RejectReason::MissingMarker,
                });
                continue;
            };

            if let Some(existing) = editors.get(key) {
                let existing = existing.provider_name().to_string();
                tracing::warn!(
                    key = %key,
                    existing = %existing,
                    rejected = %provider,
                    "editor already defined for key, ignoring provider"
                );
                rejections.push(Rejection {
                    key: key.to_string(),
                    provider,
                    reason: RejectReason::Duplicate { existing },
                });
                continue;
            }

            tracing::trace!(key = %key, provider = %provider, "registered editor");
            editors.insert(key.to_string(), editor);
        }

        Self { editors, rejections }
    }

    pub fn lookup(&self, key: &str) -> Option<Arc<dyn PropertyEditor>> {
        self.editors.get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.editors.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.editors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.editors.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Providers dropped during discovery, in discovery order.
    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }
}

/// Derive the registry key from a provider's qualified name.
///
/// `propedit.editors.FloatEditor` → `Float`. Everything from the last
/// occurrence of the marker on is dropped; `None` if there is no marker.
pub fn editor_key(provider_name: &str) -> Option<&str> {
    let name = simple_name(provider_name);
    name.rfind(EDITOR_MARKER).map(|idx| &name[..idx])
}
