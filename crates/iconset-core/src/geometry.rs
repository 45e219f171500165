use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IconError;

/// The user-space coordinate window of an SVG document (`viewBox` attribute).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub const fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// Width over height, or `None` for a degenerate box.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.height > 0.0 {
            Some(self.width / self.height)
        } else {
            None
        }
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }
}

impl FromStr for ViewBox {
    type Err = IconError;

    /// Parses the attribute form: four numbers separated by whitespace and/or commas.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 4 {
            return Err(IconError::invalid_view_box(
                s,
                format!("expected 4 numbers, found {}", parts.len()),
            ));
        }

        let mut values = [0.0f64; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    IconError::invalid_view_box(s, format!("'{}' is not a number", part))
                })?;
        }

        let [min_x, min_y, width, height] = values;
        if width < 0.0 || height < 0.0 {
            return Err(IconError::invalid_view_box(
                s,
                "width and height must not be negative",
            ));
        }
        Ok(Self::new(min_x, min_y, width, height))
    }
}
