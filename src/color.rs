//! Color resolution for `color` / `*Color` option fields
//!
//! Converts the color representations an options object may carry into the
//! packed ARGB integers native renderers consume. Supported inputs:
//! - Hex: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - Functional: `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hwb()`, `oklch()`
//! - Named: `red`, `blue`, `transparent`, etc.
//! - Numbers (already native), platform colors and `{ light, dark }` dynamic colors

use lightningcss::traits::Parse;
use lightningcss::values::color::CssColor;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::Platform;

/// Sentinel written in place of a `null` color; tells the renderer to disable the color.
pub const NO_COLOR: &str = "NoColor";

/// Keys that mark an object as a platform color (passed to the renderer untouched).
const PLATFORM_COLOR_KEYS: [&str; 2] = ["semantic", "resource_paths"];

/// Error type for color resolution failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
    /// CSS parsing error from lightningcss
    #[error("CSS parse error: {0}")]
    CssParse(String),
    /// JSON value that cannot describe a color
    #[error("cannot resolve a color from {0}")]
    Unsupported(String),
}

/// Converts option color values into the platform's native color representation.
pub trait ColorResolver {
    /// Resolve `value` into a native color handle.
    fn to_native_color(&self, value: &Value) -> Result<Value, ColorError>;
}

/// Default resolver producing packed ARGB integers.
///
/// iOS receives the unsigned 32-bit value, Android the same bits as a signed
/// 32-bit integer (what `android.graphics.Color` expects).
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeColorResolver {
    platform: Platform,
}

impl NativeColorResolver {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    fn resolve_dynamic(&self, colors: &Map<String, Value>) -> Result<Value, ColorError> {
        let mut resolved = Map::with_capacity(colors.len());
        for (appearance, color) in colors {
            resolved.insert(appearance.clone(), self.to_native_color(color)?);
        }
        Ok(Value::Object(resolved))
    }
}

impl ColorResolver for NativeColorResolver {
    fn to_native_color(&self, value: &Value) -> Result<Value, ColorError> {
        match value {
            Value::Null => Ok(Value::String(NO_COLOR.to_string())),
            Value::Number(_) => Ok(value.clone()),
            Value::String(s) if s == NO_COLOR => Ok(value.clone()),
            Value::String(s) => {
                let rgba = parse_color(s)?;
                Ok(Value::from(to_native(rgba, self.platform)))
            }
            Value::Object(map) if PLATFORM_COLOR_KEYS.iter().any(|k| map.contains_key(*k)) => {
                Ok(value.clone())
            }
            Value::Object(map) => self.resolve_dynamic(map),
            Value::Bool(b) => Err(ColorError::Unsupported(format!("boolean {}", b))),
            Value::Array(_) => Err(ColorError::Unsupported("an array".to_string())),
        }
    }
}

/// Pack RGBA channels into the platform's native integer.
///
/// # Examples
///
/// ```
/// use navopts::color::to_native;
/// use navopts::config::Platform;
///
/// assert_eq!(to_native([255, 0, 0, 255], Platform::Ios), 0xFFFF0000);
/// assert_eq!(to_native([255, 0, 0, 255], Platform::Android), -65536);
/// ```
pub fn to_native(rgba: [u8; 4], platform: Platform) -> i64 {
    let [r, g, b, a] = rgba;
    let argb = u32::from_be_bytes([a, r, g, b]);
    match platform {
        Platform::Ios => i64::from(argb),
        Platform::Android => i64::from(argb as i32),
    }
}

/// Parse a CSS color string into RGBA channels.
///
/// # Examples
///
/// ```
/// use navopts::color::parse_color;
///
/// assert_eq!(parse_color("#F00").unwrap(), [255, 0, 0, 255]);
/// assert_eq!(parse_color("rgb(0, 255, 0)").unwrap(), [0, 255, 0, 255]);
/// assert_eq!(parse_color("blue").unwrap(), [0, 0, 255, 255]);
/// assert_eq!(parse_color("hsl(0, 100%, 50%)").unwrap(), [255, 0, 0, 255]);
/// ```
///
/// # Errors
///
/// Returns `ColorError` if the input is invalid or unparseable.
pub fn parse_color(s: &str) -> Result<[u8; 4], ColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    // Fast path for hex colors
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }

    parse_css_color(s)
}

/// Parse the digits of a hex color (#RGB, #RGBA, #RRGGBB, #RRGGBBAA)
fn parse_hex_color(hex: &str) -> Result<[u8; 4], ColorError> {
    if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(c));
    }

    let digits: Vec<u8> = hex.bytes().map(hex_value).collect();
    match digits.as_slice() {
        // Short forms double each digit
        [r, g, b] => Ok([r * 17, g * 17, b * 17, 255]),
        [r, g, b, a] => Ok([r * 17, g * 17, b * 17, a * 17]),
        [r1, r2, g1, g2, b1, b2] => Ok([r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2, 255]),
        [r1, r2, g1, g2, b1, b2, a1, a2] => {
            Ok([r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2, a1 * 16 + a2])
        }
        _ => Err(ColorError::InvalidLength(digits.len())),
    }
}

/// Value of an ASCII hex digit; callers have already validated the byte.
fn hex_value(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        _ => byte - b'A' + 10,
    }
}

/// Parse a CSS color using lightningcss (rgb, hsl, hwb, oklch, named colors)
fn parse_css_color(s: &str) -> Result<[u8; 4], ColorError> {
    let css_color = CssColor::parse_string(s).map_err(|e| ColorError::CssParse(e.to_string()))?;
    css_color_to_rgba(css_color)
}

/// Convert a lightningcss CssColor to RGBA
fn css_color_to_rgba(color: CssColor) -> Result<[u8; 4], ColorError> {
    use lightningcss::values::color::FloatColor;

    let rgb_color = color
        .to_rgb()
        .map_err(|_| ColorError::CssParse("cannot convert color to RGB".to_string()))?;

    match rgb_color {
        CssColor::RGBA(rgba) => Ok([rgba.red, rgba.green, rgba.blue, rgba.alpha]),
        CssColor::Float(float_color) => match float_color.as_ref() {
            // Components with 'none' values stay as floats
            FloatColor::RGB(rgb) => Ok([
                (rgb.r * 255.0).round() as u8,
                (rgb.g * 255.0).round() as u8,
                (rgb.b * 255.0).round() as u8,
                (rgb.alpha * 255.0).round() as u8,
            ]),
            _ => Err(ColorError::CssParse("unexpected float color format".to_string())),
        },
        _ => Err(ColorError::CssParse("color conversion did not produce RGB".to_string())),
    }
}
