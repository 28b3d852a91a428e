use eframe::egui::{Color32, Stroke};

use crate::selection::{EdgeTier, EntityTier, SpokeTier};

pub(super) const CENTER_COLOR: Color32 = Color32::from_rgb(0x00, 0x65, 0xF2);
pub(super) const CENTER_FILL: Color32 = Color32::from_rgb(0x1a, 0x74, 0xe8);

/// Opacity floor for everything outside the highlight set.
pub(super) const DIM_OPACITY: f32 = 0.08;
const LINE_DEFAULT_OPACITY: f32 = 0.12;
const LINE_HIGHLIGHT_OPACITY: f32 = 0.65;
const LINE_PARTIAL_OPACITY: f32 = 0.25;
const SPOKE_DEFAULT_OPACITY: f32 = 0.12;
const SPOKE_ACTIVE_OPACITY: f32 = 0.35;
const SPOKE_ELEVATED_OPACITY: f32 = 0.5;
const SPOKE_DIMMED_OPACITY: f32 = 0.03;
pub(super) const SPOKE_EXT_OPACITY: f32 = 0.05;

pub(super) fn silver(opacity: f32) -> Color32 {
    Color32::from_rgb(211, 211, 211).gamma_multiply(opacity)
}

/// Branch colors arrive as `#rgb` or `#rrggbb` strings from the dataset;
/// anything unparseable falls back to a neutral gray rather than failing.
pub(super) fn parse_hex_color(hex: &str) -> Color32 {
    let digits = hex.trim().trim_start_matches('#');
    let expanded = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => digits.to_string(),
        _ => return Color32::GRAY,
    };

    match u32::from_str_radix(&expanded, 16) {
        Ok(value) => Color32::from_rgb(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        ),
        Err(_) => Color32::GRAY,
    }
}

pub(super) fn entity_opacity(tier: EntityTier) -> f32 {
    match tier {
        EntityTier::Full => 1.0,
        EntityTier::Dimmed => DIM_OPACITY,
    }
}

/// Stroke for a cross-connection. Widths are in world units; `scale` maps
/// them to screen pixels. `focus_color` is the branch color of the current
/// focus and only applies to the highlight and partial tiers.
pub(super) fn edge_stroke(tier: EdgeTier, focus_color: Color32, scale: f32) -> Stroke {
    let (width, color) = match tier {
        EdgeTier::Default => (1.0, silver(LINE_DEFAULT_OPACITY)),
        EdgeTier::Highlight => (1.8, focus_color.gamma_multiply(LINE_HIGHLIGHT_OPACITY)),
        EdgeTier::Partial => (1.2, focus_color.gamma_multiply(LINE_PARTIAL_OPACITY)),
        EdgeTier::Dimmed => (0.5, silver(LINE_DEFAULT_OPACITY * 0.3)),
    };
    Stroke::new(width * scale, color)
}

/// Stroke for a center-to-anchor spoke. Branch focus colors the elevated
/// spoke; node focus only brightens it.
pub(super) fn spoke_stroke(
    tier: SpokeTier,
    branch_color: Color32,
    branch_focused: bool,
    scale: f32,
) -> Stroke {
    let color = match tier {
        SpokeTier::Default => silver(SPOKE_DEFAULT_OPACITY),
        SpokeTier::Active => silver(SPOKE_ACTIVE_OPACITY),
        SpokeTier::Elevated if branch_focused => branch_color.gamma_multiply(SPOKE_ELEVATED_OPACITY),
        SpokeTier::Elevated => silver(0.4),
        SpokeTier::Dimmed => silver(SPOKE_DIMMED_OPACITY),
    };
    Stroke::new(2.0 * scale, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(parse_hex_color("#ff8800"), Color32::from_rgb(255, 136, 0));
        assert_eq!(parse_hex_color("0065F2"), Color32::from_rgb(0, 101, 242));
    }

    #[test]
    fn parses_three_digit_hex() {
        assert_eq!(parse_hex_color("#f80"), Color32::from_rgb(255, 136, 0));
    }

    #[test]
    fn malformed_colors_fall_back_to_gray() {
        assert_eq!(parse_hex_color("teal"), Color32::GRAY);
        assert_eq!(parse_hex_color("#12345"), Color32::GRAY);
        assert_eq!(parse_hex_color("#zzzzzz"), Color32::GRAY);
    }

    #[test]
    fn dim_floor_matches_entity_tier() {
        assert_eq!(entity_opacity(EntityTier::Full), 1.0);
        assert_eq!(entity_opacity(EntityTier::Dimmed), DIM_OPACITY);
    }
}
