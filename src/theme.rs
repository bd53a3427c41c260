use serde::{Deserialize, Serialize};

/// Fixed palette and font conventions for the rendered document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub background: String,
    pub landmark_fill: String,
    pub landmark_stroke: String,
    pub location_fill: String,
    pub location_stroke: String,
    pub crop_fill: String,
    pub badge_ring: String,
    pub badge_glyph: String,
    pub crop_initial_color: String,
    pub text_color: String,
    pub placeholder_text_color: String,
}

impl Theme {
    pub fn garden_default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            background: "#f5f0e8".to_string(),
            landmark_fill: "#cccccc".to_string(),
            landmark_stroke: "#999999".to_string(),
            location_fill: "#d4e6b5".to_string(),
            location_stroke: "#8faa6e".to_string(),
            crop_fill: "#6b8e23".to_string(),
            badge_ring: "#fff".to_string(),
            badge_glyph: "#fff".to_string(),
            crop_initial_color: "#fff".to_string(),
            text_color: "#333".to_string(),
            placeholder_text_color: "#999".to_string(),
        }
    }

    /// The shared style block: crop-initial labels, pointer-cursor
    /// hit-regions, free-text labels.
    pub fn style_block(&self) -> String {
        format!(
            ".crop-initial {{ font-family: {family}; font-weight: 600; fill: {initial}; text-anchor: middle; dominant-baseline: central; pointer-events: none; }}\
             .tooltip-target {{ cursor: pointer; }}\
             .text-label {{ font-family: {family}; fill: {text}; dominant-baseline: hanging; pointer-events: none; }}",
            family = self.font_family,
            initial = self.crop_initial_color,
            text = self.text_color,
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::garden_default()
    }
}
