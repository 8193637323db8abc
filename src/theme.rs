//! Light/dark color tokens built on the Catppuccin palette

use catppuccin::PALETTE;
use egui::Color32;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    #[default]
    Dark,
}

impl ColorMode {
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorMode::Light => "☀ Light",
            ColorMode::Dark => "☾ Dark",
        }
    }
}

/// Color tokens consumed by the section painters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub paper: Color32,
    pub primary: Color32,
    pub secondary: Color32,
    pub text: Color32,
    pub subtext: Color32,
    pub divider: Color32,
    pub overlay: Color32,
}

fn rgb(color: &catppuccin::Color) -> Color32 {
    Color32::from_rgb(color.rgb.r, color.rgb.g, color.rgb.b)
}

impl Palette {
    pub fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Dark => {
                let c = &PALETTE.mocha.colors;
                Self {
                    background: rgb(&c.crust),
                    paper: rgb(&c.base),
                    primary: rgb(&c.sky),
                    secondary: rgb(&c.mauve),
                    text: rgb(&c.text),
                    subtext: rgb(&c.subtext0),
                    divider: rgb(&c.surface1),
                    overlay: Color32::from_black_alpha(200),
                }
            }
            ColorMode::Light => {
                let c = &PALETTE.latte.colors;
                Self {
                    background: rgb(&c.base),
                    paper: rgb(&c.mantle),
                    primary: rgb(&c.blue),
                    secondary: rgb(&c.maroon),
                    text: rgb(&c.text),
                    subtext: rgb(&c.subtext0),
                    divider: rgb(&c.surface0),
                    overlay: Color32::from_black_alpha(120),
                }
            }
        }
    }

    /// Particle and link color for the hero backdrop
    pub fn particle(&self) -> Color32 {
        self.primary
    }
}

/// Push the palette into egui's visuals
pub fn apply(ctx: &egui::Context, mode: ColorMode) {
    let palette = Palette::for_mode(mode);
    let mut visuals = if mode.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.paper;
    visuals.extreme_bg_color = palette.paper;
    visuals.override_text_color = Some(palette.text);
    visuals.hyperlink_color = palette.primary;
    visuals.selection.bg_fill = palette.primary.gamma_multiply(0.35);
    visuals.selection.stroke.color = palette.primary;
    visuals.window_stroke.color = palette.divider;
    visuals.widgets.noninteractive.bg_stroke.color = palette.divider;

    ctx.set_visuals(visuals);
}
