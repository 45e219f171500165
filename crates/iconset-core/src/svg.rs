use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::ViewBox;
use crate::params::ResolvedParams;

/// The single path primitive inside an icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgPath {
    pub d: String,
    pub fill: String,
}

/// A rendered icon, ready to be serialized to markup or sent to a frontend as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgNode {
    #[serde(rename = "viewBox")]
    pub view_box: ViewBox,
    /// Resolved width with a `px` suffix.
    pub width: String,
    /// Resolved height with a `px` suffix.
    pub height: String,
    pub path: SvgPath,
}

impl SvgNode {
    pub fn new(view_box: ViewBox, resolved: &ResolvedParams, path_data: &str) -> Self {
        Self {
            view_box,
            width: format!("{}px", resolved.width),
            height: format!("{}px", resolved.height),
            path: SvgPath {
                d: path_data.to_string(),
                fill: resolved.fill.clone(),
            },
        }
    }

    pub fn to_markup(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for SvgNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<svg viewBox="{}" width="{}" height="{}"><path d="{}" fill="{}"/></svg>"#,
            self.view_box,
            Escaped(&self.width),
            Escaped(&self.height),
            Escaped(&self.path.d),
            Escaped(&self.path.fill),
        )
    }
}

/// Attribute-value escaping, applied only when writing markup.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(&['&', '<', '>', '"'][..]) {
            f.write_str(&rest[..pos])?;
            let entity = match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                _ => "&quot;",
            };
            f.write_str(entity)?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}
