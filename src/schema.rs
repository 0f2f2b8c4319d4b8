//! Field kinds for option keys
//!
//! Every key of an options object is classified once into a [`FieldKind`],
//! and the walker dispatches on that kind. The naming conventions are:
//!
//! | Kind            | Key                                   |
//! |-----------------|---------------------------------------|
//! | `Color`         | `color` or ends with `Color`          |
//! | `Image`         | `icon`, `image`, ends with `Icon`/`Image` |
//! | `Component`     | `component`                           |
//! | `Buttons`       | ends with `Buttons`                   |
//! | `SearchBar`     | `searchBar`                           |
//! | `Interpolation` | `interpolation`                       |
//! | `Push`, `Pop`, `SetStackRoot` | `push`, `pop`, `setStackRoot` |
//!
//! A [`FieldSchema`] can override the conventions for individual keys.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// What an option key holds, as far as normalization is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Color,
    Image,
    Component,
    Buttons,
    SearchBar,
    Interpolation,
    Push,
    Pop,
    SetStackRoot,
    /// No built-in transform applies
    Plain,
}

impl FieldKind {
    /// Whether the kind is one of the stack animation slots.
    pub fn is_stack_animation(self) -> bool {
        matches!(self, FieldKind::Push | FieldKind::Pop | FieldKind::SetStackRoot)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Color => "color",
            FieldKind::Image => "image",
            FieldKind::Component => "component",
            FieldKind::Buttons => "buttons",
            FieldKind::SearchBar => "searchBar",
            FieldKind::Interpolation => "interpolation",
            FieldKind::Push => "push",
            FieldKind::Pop => "pop",
            FieldKind::SetStackRoot => "setStackRoot",
            FieldKind::Plain => "plain",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a key purely by naming convention.
///
/// # Examples
///
/// ```
/// use navopts::schema::{classify_by_convention, FieldKind};
///
/// assert_eq!(classify_by_convention("backgroundColor"), FieldKind::Color);
/// assert_eq!(classify_by_convention("leftButtons"), FieldKind::Buttons);
/// assert_eq!(classify_by_convention("title"), FieldKind::Plain);
/// ```
pub fn classify_by_convention(key: &str) -> FieldKind {
    match key {
        "color" => FieldKind::Color,
        "icon" | "image" => FieldKind::Image,
        "component" => FieldKind::Component,
        "searchBar" => FieldKind::SearchBar,
        "interpolation" => FieldKind::Interpolation,
        "push" => FieldKind::Push,
        "pop" => FieldKind::Pop,
        "setStackRoot" => FieldKind::SetStackRoot,
        _ if key.ends_with("Color") => FieldKind::Color,
        _ if key.ends_with("Icon") || key.ends_with("Image") => FieldKind::Image,
        _ if key.ends_with("Buttons") => FieldKind::Buttons,
        _ => FieldKind::Plain,
    }
}

/// Key classification with per-key overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSchema {
    overrides: HashMap<String, FieldKind>,
}

impl FieldSchema {
    /// Schema using the naming conventions only.
    pub fn new() -> Self {
        Self { overrides: HashMap::new() }
    }

    pub fn with_overrides(overrides: HashMap<String, FieldKind>) -> Self {
        Self { overrides }
    }

    /// Force `key` to be treated as `kind`.
    pub fn set_override(&mut self, key: impl Into<String>, kind: FieldKind) {
        self.overrides.insert(key.into(), kind);
    }

    pub fn classify(&self, key: &str) -> FieldKind {
        self.overrides.get(key).copied().unwrap_or_else(|| classify_by_convention(key))
    }
}
