//! Picks a readable text color for a colored event background.

use crate::model::Rgb;
use serde::{Deserialize, Serialize};

/// Backgrounds brighter than this get dark text.
pub const BRIGHTNESS_THRESHOLD: f64 = 16256.0;

/// The two text colors a theme offers for event markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextColors {
    pub dark_on_light: Rgb,
    pub light_on_dark: Rgb,
}

impl Default for TextColors {
    fn default() -> Self {
        TextColors {
            dark_on_light: Rgb::new(0x4b, 0x4b, 0x4b),
            light_on_dark: Rgb::new(0xc2, 0xc2, 0xc2),
        }
    }
}

/// Weighted sum of squared channels (HSP color model, without the root).
pub fn brightness(color: Rgb) -> f64 {
    let [r, g, b] = [color.r, color.g, color.b].map(f64::from);
    0.299 * r * r + 0.587 * g * g + 0.114 * b * b
}

impl TextColors {
    pub fn for_background(&self, background: Rgb) -> Rgb {
        if brightness(background) > BRIGHTNESS_THRESHOLD {
            self.dark_on_light
        } else {
            self.light_on_dark
        }
    }
}
