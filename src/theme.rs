//! Light and dark color palettes for rendering the schedule.

use crate::model::Rgb;

/// Colors of the non-event parts of the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub label_text: Rgb,
    pub menu_text: Rgb,
    pub prompt_text: Rgb,
    pub faint_text: Rgb,
    pub background: Rgb,
    pub widget: Rgb,
    pub faint_display: Rgb,
}

impl Palette {
    pub const DARK: Palette = Palette {
        label_text: Rgb::new(0xc2, 0xc2, 0xc2),
        menu_text: Rgb::new(0xeb, 0xeb, 0xeb),
        prompt_text: Rgb::new(0x83, 0x83, 0x83),
        faint_text: Rgb::new(0x49, 0x49, 0x49),
        background: Rgb::new(0x2c, 0x2c, 0x2c),
        widget: Rgb::new(0x38, 0x38, 0x38),
        faint_display: Rgb::new(0x42, 0x42, 0x42),
    };

    pub const LIGHT: Palette = Palette {
        label_text: Rgb::new(0x4b, 0x4b, 0x4b),
        menu_text: Rgb::new(0x50, 0x50, 0x50),
        prompt_text: Rgb::new(0x79, 0x79, 0x79),
        faint_text: Rgb::new(0xa5, 0xa5, 0xa5),
        background: Rgb::new(0xd3, 0xd3, 0xd3),
        widget: Rgb::new(0xb3, 0xb3, 0xb3),
        faint_display: Rgb::new(0xa1, 0xa1, 0xa1),
    };

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Palette::DARK
        } else {
            Palette::LIGHT
        }
    }
}
