//! Asset resolution for `icon` / `image` option fields
//!
//! Image options are either textual references (left untouched by the walker)
//! or bundled-asset handles: small integers standing for an asset registered
//! with the bundler. The [`AssetCatalog`] maps handles to platform asset
//! descriptors.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Error when a non-textual image value cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AssetError {
    /// Numeric handle that was never registered
    #[error("no bundled asset registered under handle {0}")]
    UnknownHandle(u64),
    /// Value that does not name an asset
    #[error("cannot resolve an asset from {0}")]
    Unresolvable(String),
}

/// A bundled asset as the native layer consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSource {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    1.0
}

impl AssetSource {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into(), width: None, height: None, scale: 1.0 }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}

/// Resolves non-textual image values into platform asset references.
pub trait AssetResolver {
    fn resolve_from_require(&self, value: &Value) -> Result<Value, AssetError>;
}

/// Catalog of bundled assets keyed by handle (handles start at 1).
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    assets: Vec<AssetSource>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self { assets: Vec::new() }
    }

    /// Register an asset and return its handle.
    pub fn register(&mut self, asset: AssetSource) -> u64 {
        self.assets.push(asset);
        self.assets.len() as u64
    }

    pub fn get(&self, handle: u64) -> Option<&AssetSource> {
        let index = usize::try_from(handle).ok()?.checked_sub(1)?;
        self.assets.get(index)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

fn is_uri_source(value: &Value) -> bool {
    value.get("uri").is_some_and(Value::is_string)
}

impl AssetResolver for AssetCatalog {
    fn resolve_from_require(&self, value: &Value) -> Result<Value, AssetError> {
        match value {
            Value::Number(n) => {
                let handle =
                    n.as_u64().ok_or_else(|| AssetError::Unresolvable(format!("handle {}", n)))?;
                let asset = self.get(handle).ok_or(AssetError::UnknownHandle(handle))?;
                serde_json::to_value(asset).map_err(|e| AssetError::Unresolvable(e.to_string()))
            }
            // Already resolved sources
            Value::Object(_) if is_uri_source(value) => Ok(value.clone()),
            Value::Array(sources) if !sources.is_empty() && sources.iter().all(is_uri_source) => {
                Ok(value.clone())
            }
            other => Err(AssetError::Unresolvable(other.to_string())),
        }
    }
}
