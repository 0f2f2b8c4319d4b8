//! Error type for options normalization

use thiserror::Error;

use crate::assets::AssetError;
use crate::color::ColorError;
use crate::registry::ComponentError;

/// Failure that aborts a walk.
///
/// Collaborator errors are carried through unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum NormalizeError {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Component(#[from] ComponentError),
    /// A field the options at `path` must carry is absent
    #[error("'{path}' has no '{field}' entry")]
    MissingField { path: String, field: &'static str },
    /// The value at `path` does not have the required shape
    #[error("'{path}' must be {expected}")]
    UnexpectedShape { path: String, expected: &'static str },
}

/// Result type alias for normalization.
pub type Result<T> = std::result::Result<T, NormalizeError>;
