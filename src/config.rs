use serde::{Deserialize, Serialize};

/// Numeric rendering conventions: defaults substituted for missing input
/// values, and the clamps that keep decorative source values from blowing
/// up the output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    pub plan_width: f64,
    pub plan_height: f64,
    pub placeholder_width: f64,
    pub placeholder_height: f64,
    pub placeholder_font_size: f64,
    pub landmark_fill_opacity: f64,
    pub stroke_width_default: f64,
    pub stroke_width_min: f64,
    pub stroke_width_max: f64,
    pub location_stroke_width: f64,
    pub badge_extent_ratio: f64,
    pub badge_radius_min: f64,
    pub badge_radius_max: f64,
    pub badge_ring_width: f64,
    /// Glyph span relative to badge radius; 1.2 fits the 24-unit glyph box
    /// into ~60% of the badge diameter.
    pub badge_glyph_scale: f64,
    pub plant_spacing_default: f64,
    pub outer_circle_ratio: f64,
    pub outer_circle_opacity: f64,
    pub inner_circle_ratio: f64,
    pub initial_extent_ratio: f64,
    pub initial_font_min: f64,
    pub initial_font_max: f64,
    pub text_font_size_default: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            plan_width: 800.0,
            plan_height: 600.0,
            placeholder_width: 400.0,
            placeholder_height: 200.0,
            placeholder_font_size: 14.0,
            landmark_fill_opacity: 0.55,
            stroke_width_default: 1.0,
            stroke_width_min: 3.0,
            stroke_width_max: 60.0,
            location_stroke_width: 1.0,
            badge_extent_ratio: 0.15,
            badge_radius_min: 30.0,
            badge_radius_max: 80.0,
            badge_ring_width: 4.0,
            badge_glyph_scale: 1.2,
            plant_spacing_default: 80.0,
            outer_circle_ratio: 0.5,
            outer_circle_opacity: 0.3,
            inner_circle_ratio: 0.35,
            initial_extent_ratio: 0.35,
            initial_font_min: 24.0,
            initial_font_max: 80.0,
            text_font_size_default: 14.0,
        }
    }
}

/// Raster output dimensions for PNG export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}
