use crate::config::RenderOptions;
use crate::geometry::{centroid, extent, shape_to_path};
use crate::icons::{self, IconSpec};
use crate::layout::{plant_positions, render_order, RenderItem};
use crate::model::{Garden, GardenCrop, Landmark, PlantingFormation, PlantingLocation, Text};
use crate::svg::{escape_xml, Circle, Document, Group, Label, Node, Path};
use crate::theme::Theme;
use anyhow::Result;

/// Render a complete garden snapshot as an SVG document string.
///
/// All non-draft formations are included with their date metadata so a
/// frontend can filter by date client-side; the engine itself does no date
/// filtering. An absent plan yields a fixed placeholder document.
pub fn render_garden_svg(garden: &Garden, theme: &Theme, options: &RenderOptions) -> String {
    let Some(plan) = &garden.garden_plan else {
        return placeholder_svg("No garden plan data", theme, options);
    };

    let width = or_nonzero(plan.width, options.plan_width);
    let height = or_nonzero(plan.height, options.plan_height);

    let order = render_order(plan.landmarks(), plan.planting_locations(), plan.groups());

    let mut nodes = Vec::new();
    for item in order {
        let node = match item {
            RenderItem::Landmark(landmark) => render_landmark(landmark, theme, options),
            RenderItem::Location(location) => render_location(location, theme, options),
        };
        nodes.extend(node);
    }

    // Text elements go last so they always sit on top.
    for text in plan.texts() {
        if text.is_hidden() {
            continue;
        }
        nodes.extend(render_text(text, options));
    }

    Document {
        width,
        height,
        background: theme.background.clone(),
        style: theme.style_block(),
        nodes,
    }
    .to_svg()
}

/// Landmark: semitransparent filled outline with an opaque stroke, plus an
/// icon badge for the known icon kinds. House markers draw only the badge.
fn render_landmark(landmark: &Landmark, theme: &Theme, options: &RenderOptions) -> Option<Node> {
    let shape = landmark.shape.as_ref()?;
    let d = shape_to_path(shape);
    if d.is_empty() {
        return None;
    }

    let fill = landmark
        .fill_color
        .clone()
        .unwrap_or_else(|| theme.landmark_fill.clone());
    let stroke = landmark
        .stroke_color
        .clone()
        .unwrap_or_else(|| theme.landmark_stroke.clone());
    // Clamp stroke width: a floor for visibility, a ceiling because some
    // sources set widths like 1000 on background layers, which would extend
    // the outline by 500 units on each side.
    let stroke_width = landmark
        .stroke_width
        .unwrap_or(options.stroke_width_default)
        .clamp(options.stroke_width_min, options.stroke_width_max);
    let name = landmark.name.clone().unwrap_or_default();
    let icon_name = landmark.icon_name.as_deref().unwrap_or("");

    let mut attrs = vec![("data-name".to_string(), name.clone())];
    let class = if !icon_name.is_empty() && !name.is_empty() {
        attrs.push(("data-crop".to_string(), name.clone()));
        attrs.push(("data-color".to_string(), fill.clone()));
        "landmark tooltip-target"
    } else {
        "landmark"
    };

    let icon = icons::lookup(icon_name);
    let mut children = Vec::new();
    if !icon.map(|spec| spec.suppress_fill).unwrap_or(false) {
        children.push(Node::Path(Path {
            d,
            fill,
            fill_opacity: Some(options.landmark_fill_opacity),
            stroke: Some(stroke),
            stroke_width: Some(stroke_width),
            transform: None,
        }));
    }
    if let Some(spec) = icon {
        let (cx, cy) = centroid(shape);
        let radius = (extent(shape) * options.badge_extent_ratio)
            .clamp(options.badge_radius_min, options.badge_radius_max);
        children.extend(badge_nodes(spec, cx, cy, radius, theme, options));
    }

    Some(Node::Group(Group {
        class: class.to_string(),
        attrs,
        children,
    }))
}

/// Circular badge with a centered glyph, scaled to roughly 60% of the badge
/// diameter from the 24-unit glyph box.
fn badge_nodes(
    spec: &IconSpec,
    cx: f64,
    cy: f64,
    radius: f64,
    theme: &Theme,
    options: &RenderOptions,
) -> [Node; 2] {
    let scale = radius * options.badge_glyph_scale / 24.0;
    let tx = cx - 12.0 * scale;
    let ty = cy - 12.0 * scale;
    [
        Node::Circle(Circle {
            cx,
            cy,
            r: radius,
            fill: spec.badge_color.to_string(),
            fill_opacity: None,
            stroke: Some(theme.badge_ring.clone()),
            stroke_width: Some(options.badge_ring_width),
        }),
        Node::Path(Path {
            d: spec.glyph.to_string(),
            fill: theme.badge_glyph.clone(),
            fill_opacity: None,
            stroke: None,
            stroke_width: None,
            transform: Some(format!("translate({tx:.1},{ty:.1}) scale({scale:.3})")),
        }),
    ]
}

/// Planting location: filled outline plus every non-draft formation that
/// has a crop attached.
fn render_location(
    location: &PlantingLocation,
    theme: &Theme,
    options: &RenderOptions,
) -> Option<Node> {
    let shape = location.shape.as_ref()?;
    let d = shape_to_path(shape);
    if d.is_empty() {
        return None;
    }

    let fill = location
        .fill_color
        .clone()
        .unwrap_or_else(|| theme.location_fill.clone());
    let name = location.name.clone().unwrap_or_default();

    let mut children = vec![Node::Path(Path {
        d,
        fill,
        fill_opacity: None,
        stroke: Some(theme.location_stroke.clone()),
        stroke_width: Some(options.location_stroke_width),
        transform: None,
    })];

    for formation in location.formations() {
        if formation.is_draft() || formation.garden_crop.is_none() {
            continue;
        }
        children.extend(render_formation(formation, theme, options));
    }

    Some(Node::Group(Group {
        class: "planting-location".to_string(),
        attrs: vec![("data-name".to_string(), name)],
        children,
    }))
}

/// Formation: an invisible hit-region carrying tooltip/date metadata, plant
/// circles per cluster, and a centered crop-initial label.
fn render_formation(
    formation: &PlantingFormation,
    theme: &Theme,
    options: &RenderOptions,
) -> Option<Node> {
    let shape = formation.shape.as_ref()?;
    let d = shape_to_path(shape);
    if d.is_empty() {
        return None;
    }
    let crop = formation.garden_crop.as_ref()?;

    let color = crop.color.clone().unwrap_or_else(|| theme.crop_fill.clone());
    let title = crop.title.clone().unwrap_or_else(|| "Unknown".to_string());
    let seeding = crop.seeding_date.clone().unwrap_or_default();
    let harvest = crop.harvesting_date.clone().unwrap_or_default();
    let ground_start = crop.ground_occupation_start.clone().unwrap_or_default();
    let ground_end = crop.ground_occupation_end.clone().unwrap_or_default();
    let spacing = or_nonzero(formation.plant_spacing, options.plant_spacing_default);
    let plant_count: i64 = formation
        .clusters
        .iter()
        .map(|cluster| cluster.plant_count.unwrap_or(0))
        .sum();

    let mut attrs = vec![
        ("data-crop".to_string(), title),
        ("data-seeding".to_string(), seeding),
        ("data-harvest".to_string(), harvest),
        ("data-plants".to_string(), plant_count.to_string()),
        ("data-ground-start".to_string(), ground_start),
        ("data-ground-end".to_string(), ground_end),
    ];
    if !color.is_empty() {
        attrs.push(("data-color".to_string(), color.clone()));
    }

    // Outer circle marks the spacing boundary, inner circle the plant body.
    let outer_r = spacing * options.outer_circle_ratio;
    let inner_r = spacing * options.inner_circle_ratio;

    // Formation outline doubles as the invisible pointer hit-region.
    let mut children = vec![Node::Path(Path {
        d,
        fill: color.clone(),
        fill_opacity: Some(0.0),
        stroke: Some("none".to_string()),
        stroke_width: None,
        transform: None,
    })];

    for cluster in &formation.clusters {
        if !cluster.rows.is_empty() {
            let positions = plant_positions(&cluster.rows, spacing);
            // All outer circles of the cluster first, then all inner
            // circles, so an inner circle is never hidden by a neighbor's
            // spacing boundary.
            for &(px, py) in &positions {
                children.push(Node::Circle(Circle {
                    cx: px,
                    cy: py,
                    r: outer_r,
                    fill: color.clone(),
                    fill_opacity: Some(options.outer_circle_opacity),
                    stroke: Some("none".to_string()),
                    stroke_width: None,
                }));
            }
            for &(px, py) in &positions {
                children.push(Node::Circle(Circle {
                    cx: px,
                    cy: py,
                    r: inner_r,
                    fill: color.clone(),
                    fill_opacity: None,
                    stroke: Some("none".to_string()),
                    stroke_width: None,
                }));
            }
        } else if let Some(cluster_shape) = &cluster.shape {
            // No row data: fall back to the cluster's own outline.
            let cluster_d = shape_to_path(cluster_shape);
            if !cluster_d.is_empty() {
                children.push(Node::Path(Path {
                    d: cluster_d,
                    fill: color.clone(),
                    fill_opacity: None,
                    stroke: Some("none".to_string()),
                    stroke_width: None,
                    transform: None,
                }));
            }
        }
    }

    let initial = crop_initial(crop);
    if !initial.is_empty() {
        let (cx, cy) = centroid(shape);
        let font_size = (extent(shape) * options.initial_extent_ratio)
            .clamp(options.initial_font_min, options.initial_font_max)
            .round();
        children.push(Node::Label(Label {
            x: cx,
            y: cy,
            class: Some("crop-initial".to_string()),
            font_size,
            font_weight: None,
            content: initial,
        }));
    }

    Some(Node::Group(Group {
        class: "tooltip-target".to_string(),
        attrs,
        children,
    }))
}

/// Single-letter label for a crop: first character of the crop name,
/// falling back to the title.
fn crop_initial(crop: &GardenCrop) -> String {
    let name = crop
        .crop_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .or(crop.title.as_deref())
        .unwrap_or("");
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

fn render_text(text: &Text, options: &RenderOptions) -> Option<Node> {
    let shape = text.shape.as_ref()?;
    let first = shape.segments().first()?.start?;
    Some(Node::Label(Label {
        x: first.x,
        y: first.y,
        class: Some("text-label".to_string()),
        font_size: text.font_size.unwrap_or(options.text_font_size_default),
        font_weight: Some("bold".to_string()),
        content: text.text.clone().unwrap_or_default(),
    }))
}

/// Fixed placeholder document with a centered message.
fn placeholder_svg(message: &str, theme: &Theme, options: &RenderOptions) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\">\
         <rect width=\"{w}\" height=\"{h}\" fill=\"{bg}\"/>\
         <text x=\"{cx}\" y=\"{cy}\" text-anchor=\"middle\" font-family=\"{family}\" font-size=\"{size}\" fill=\"{color}\">{message}</text>\
         </svg>",
        w = options.placeholder_width,
        h = options.placeholder_height,
        cx = options.placeholder_width / 2.0,
        cy = options.placeholder_height / 2.0,
        bg = theme.background,
        family = theme.font_family,
        size = options.placeholder_font_size,
        color = theme.placeholder_text_color,
        message = escape_xml(message),
    )
}

/// Treat zero the way the wire format does: unset.
fn or_nonzero(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v != 0.0 => v,
        _ => default,
    }
}

pub fn write_output_svg(svg: &str, output: Option<&std::path::Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(
    svg: &str,
    output: &std::path::Path,
    render_cfg: &crate::config::RenderConfig,
) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = "sans-serif".to_string();
    opt.default_size = usvg::Size::from_wh(render_cfg.width, render_cfg.height)
        .unwrap_or(usvg::Size::from_wh(800.0, 600.0).unwrap());

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}
