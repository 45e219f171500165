use std::fmt;

use serde::{Deserialize, Serialize};

/// Size used for width and height when the caller supplies none.
pub const DEFAULT_SIZE: f64 = 14.0;

/// A magnitude given either as a number or as free-form text.
///
/// Values are never validated: negative numbers, empty strings and
/// non-numeric text are carried through to the rendered attributes as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Number(f64),
    Text(String),
}

impl fmt::Display for Dimension {
    /// Formats the way string interpolation does in the UI runtime the icons
    /// target: `14` rather than `14.0`, `Infinity` rather than `inf`, and
    /// exponent form (`1e+21`, `1.5e-7`) outside `[1e-6, 1e21)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Number(n) if n.is_nan() => f.write_str("NaN"),
            Dimension::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // -0 prints as 0
            Dimension::Number(n) if *n == 0.0 => f.write_str("0"),
            Dimension::Number(n) if n.abs() >= 1e21 || n.abs() < 1e-6 => write_exponent(f, *n),
            Dimension::Number(n) => write!(f, "{}", n),
            Dimension::Text(s) => f.write_str(s),
        }
    }
}

/// Shortest mantissa with an always-signed exponent.
fn write_exponent(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    let formatted = format!("{:e}", n);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => f.write_str(&formatted),
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::Number(DEFAULT_SIZE)
    }
}

macro_rules! dimension_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Dimension {
                fn from(value: $t) -> Self {
                    Dimension::Number(value as f64)
                }
            }
        )*
    };
}

dimension_from_number!(f64, f32, i32, u32, i64, u64);

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Dimension::Text(value.to_string())
    }
}

impl From<String> for Dimension {
    fn from(value: String) -> Self {
        Dimension::Text(value)
    }
}

/// Optional rendering hints accepted by every icon.
///
/// Each field can be omitted independently. Missing fields are filled in by
/// [`IconRenderParams::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IconRenderParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

impl IconRenderParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: impl Into<Dimension>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Apply default substitution: `size` falls back to [`DEFAULT_SIZE`],
    /// `width` and `height` fall back to the resolved size, and `fill` falls
    /// back to the empty string.
    pub fn resolve(&self) -> ResolvedParams {
        let size = self.size.clone().unwrap_or_default();
        let width = self.width.clone().unwrap_or_else(|| size.clone());
        let height = self.height.clone().unwrap_or_else(|| size.clone());
        let fill = self.fill.clone().unwrap_or_default();
        ResolvedParams {
            size,
            width,
            height,
            fill,
        }
    }

    // ── Serialization ────────────────────────────────────────────────

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, crate::IconError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Render parameters after default substitution. Width and height are always set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedParams {
    pub size: Dimension,
    pub width: Dimension,
    pub height: Dimension,
    /// Empty means unset; the glyph inherits its color.
    pub fill: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let resolved = IconRenderParams::new().resolve();
        assert_eq!(resolved.size, Dimension::Number(14.0));
        assert_eq!(resolved.width, Dimension::Number(14.0));
        assert_eq!(resolved.height, Dimension::Number(14.0));
        assert_eq!(resolved.fill, "");
    }

    #[test]
    fn test_width_overrides_size_independently() {
        let resolved = IconRenderParams::new().with_size(20).with_width(32).resolve();
        assert_eq!(resolved.width.to_string(), "32");
        assert_eq!(resolved.height.to_string(), "20");
    }

    #[test]
    fn test_height_only() {
        let resolved = IconRenderParams::new().with_height("3em").resolve();
        assert_eq!(resolved.width.to_string(), "14");
        assert_eq!(resolved.height.to_string(), "3em");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(Dimension::from(14).to_string(), "14");
        assert_eq!(Dimension::from(20.5).to_string(), "20.5");
        assert_eq!(Dimension::from(-3).to_string(), "-3");
        assert_eq!(Dimension::from(-0.0).to_string(), "0");
        assert_eq!(Dimension::from(f64::NAN).to_string(), "NaN");
        assert_eq!(Dimension::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Dimension::from(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn test_number_formatting_switches_to_exponent() {
        assert_eq!(Dimension::from(1e-7).to_string(), "1e-7");
        assert_eq!(Dimension::from(1.5e-7).to_string(), "1.5e-7");
        assert_eq!(Dimension::from(-2e-9).to_string(), "-2e-9");
        assert_eq!(Dimension::from(1e21).to_string(), "1e+21");
        assert_eq!(Dimension::from(-1.25e22).to_string(), "-1.25e+22");
        assert_eq!(Dimension::from(1e-6).to_string(), "0.000001");
        assert_eq!(Dimension::from(1e20).to_string(), "100000000000000000000");
    }

    #[test]
    fn test_with_fill_accepts_owned_string() {
        let color = String::from("#00ff00");
        let resolved = IconRenderParams::new().with_fill(color).resolve();
        assert_eq!(resolved.fill, "#00ff00");
    }

    #[test]
    fn test_text_passes_through_verbatim() {
        assert_eq!(Dimension::from("not a size").to_string(), "not a size");
        assert_eq!(Dimension::from("").to_string(), "");
    }

    #[test]
    fn test_from_json_number_or_string() {
        let json = r#"{"size": 20, "width": "50%", "fill": "red"}"#;
        let params = IconRenderParams::from_json(json).unwrap();
        assert_eq!(params.size, Some(Dimension::Number(20.0)));
        assert_eq!(params.width, Some(Dimension::Text("50%".to_string())));
        assert_eq!(params.height, None);
        assert_eq!(params.fill.as_deref(), Some("red"));
    }

    #[test]
    fn test_from_json_empty_and_unknown_keys() {
        let params = IconRenderParams::from_json(r#"{"className": "x"}"#).unwrap();
        assert_eq!(params, IconRenderParams::default());
    }

    #[test]
    fn test_from_json_rejects_wrong_types() {
        let err = IconRenderParams::from_json(r#"{"size": true}"#).unwrap_err();
        assert!(matches!(err, crate::IconError::Json(_)));
        assert!(IconRenderParams::from_json("not json").is_err());
    }

    #[test]
    fn test_to_json_skips_unset_fields() {
        let json = IconRenderParams::new().with_fill("#fff").to_json().unwrap();
        assert_eq!(json, r##"{"fill":"#fff"}"##);
    }
}
