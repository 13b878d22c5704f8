//! # GUI Theme
//!
//! Light and dark palettes for egui. The mode is a local preference stored next to the
//! session; see [`crate::services::session::ThemePreference`].

use egui::{Color32, Context, Stroke, Visuals};

use crate::services::session::ThemeMode;

/// Color palette for one mode
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color32,
    pub panel: Color32,
    pub text: Color32,
    /// Brand accent for headings and the active nav entry
    pub accent: Color32,
    pub border: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
    /// Secondary text
    pub dim: Color32,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(17, 19, 24),     // #111318
            panel: Color32::from_rgb(26, 29, 36),          // #1A1D24
            text: Color32::from_rgb(235, 237, 240),
            accent: Color32::from_rgb(59, 130, 246),       // #3B82F6
            border: Color32::from_rgb(51, 56, 66),
            success: Color32::from_rgb(34, 197, 94),
            error: Color32::from_rgb(239, 68, 68),
            warning: Color32::from_rgb(245, 158, 11),
            info: Color32::from_rgb(96, 165, 250),
            dim: Color32::from_rgb(148, 155, 168),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(248, 250, 252),  // #F8FAFC
            panel: Color32::WHITE,
            text: Color32::from_rgb(15, 23, 42),
            accent: Color32::from_rgb(37, 99, 235),        // #2563EB
            border: Color32::from_rgb(226, 232, 240),
            success: Color32::from_rgb(22, 163, 74),
            error: Color32::from_rgb(220, 38, 38),
            warning: Color32::from_rgb(217, 119, 6),
            info: Color32::from_rgb(37, 99, 235),
            dim: Color32::from_rgb(100, 116, 139),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }
}

/// egui visuals for `mode`
pub fn visuals(mode: ThemeMode) -> Visuals {
    let palette = Palette::for_mode(mode);
    let mut visuals = match mode {
        ThemeMode::Dark => Visuals::dark(),
        ThemeMode::Light => Visuals::light(),
    };

    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.panel;
    visuals.window_stroke = Stroke::new(1.0, palette.border);
    visuals.faint_bg_color = palette.panel;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.border);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.active.bg_stroke = Stroke::new(1.5, palette.accent);
    visuals.selection.bg_fill = palette.accent.gamma_multiply(0.35);
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.hyperlink_color = palette.info;
    visuals
}

/// Apply `mode` to the context. Cheap enough to call every frame.
pub fn apply(ctx: &Context, mode: ThemeMode) {
    ctx.set_visuals(visuals(mode));
    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 5.0);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visuals_follow_mode() {
        assert!(visuals(ThemeMode::Dark).dark_mode);
        assert!(!visuals(ThemeMode::Light).dark_mode);
        assert_eq!(visuals(ThemeMode::Light).panel_fill, Palette::light().background);
    }
}
