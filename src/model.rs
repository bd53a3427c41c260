//! Typed view of a garden plan snapshot.
//!
//! Every field the wire format may omit is an `Option` (or a defaulted
//! `Vec`), and decoding is lenient: a present-but-wrong-type value reads as
//! absent instead of failing the whole document. Collections arrive wrapped
//! as `{"nodes": [...]}`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One vertex of a shape outline plus the control points describing the
/// curve to the next vertex: two for a cubic, one for a quadratic, none for
/// a straight line.
///
/// `bezier_control_points` is `None` when the wire value was present but
/// unusable; a missing key means "no control points".
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    #[serde(default, deserialize_with = "lenient")]
    pub start: Option<Point>,
    #[serde(default = "no_control_points", deserialize_with = "control_points")]
    pub bezier_control_points: Option<Vec<Point>>,
}

impl Segment {
    pub fn control_points(&self) -> Option<&[Point]> {
        self.bezier_control_points.as_deref()
    }
}

/// A closed outline as an ordered segment sequence. Rotation is carried but
/// unused: coordinates arrive in the final rotated frame.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    #[serde(default, deserialize_with = "lenient")]
    pub rotation: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub segments: Option<Vec<Segment>>,
}

impl Shape {
    pub fn segments(&self) -> &[Segment] {
        self.segments.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landmark {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub fill_color: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub stroke_color: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub stroke_width: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub icon_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub hidden: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub index: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub group_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub shape: Option<Shape>,
}

impl Landmark {
    pub fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantingLocation {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub fill_color: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub hidden: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub index: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub group_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub shape: Option<Shape>,
    #[serde(
        rename = "plantingFormations",
        default,
        deserialize_with = "lenient"
    )]
    pub formations: Option<NodeList<PlantingFormation>>,
}

impl PlantingLocation {
    pub fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }

    pub fn formations(&self) -> &[PlantingFormation] {
        self.formations.as_ref().map(|list| list.nodes.as_slice()).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantingFormation {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub draft: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub plant_spacing: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub shape: Option<Shape>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub clusters: Vec<Cluster>,
    #[serde(default, deserialize_with = "lenient")]
    pub garden_crop: Option<GardenCrop>,
}

impl PlantingFormation {
    pub fn is_draft(&self) -> bool {
        self.draft.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    #[serde(default, deserialize_with = "lenient")]
    pub plant_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub shape: Option<Shape>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    #[serde(default, deserialize_with = "lenient")]
    pub start: Option<Point>,
    #[serde(default, deserialize_with = "lenient")]
    pub end: Option<Point>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenCrop {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub crop_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub seeding_date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub harvesting_date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub ground_occupation_start: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub ground_occupation_end: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub hidden: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub index: Option<i64>,
}

impl Group {
    pub fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }
}

/// Free text placed at its shape's first vertex. Always composited above
/// every other element.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub font_size: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub hidden: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub shape: Option<Shape>,
}

impl Text {
    pub fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }
}

/// Wire wrapper for entity collections: `{"nodes": [...]}`. Entries that
/// fail to decode are dropped rather than poisoning the list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct NodeList<T> {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub nodes: Vec<T>,
}

/// Root plan aggregate. A transient per-render snapshot with no identity
/// inside the engine.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenPlan {
    #[serde(default, deserialize_with = "lenient")]
    pub width: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub planting_locations: Option<NodeList<PlantingLocation>>,
    #[serde(default, deserialize_with = "lenient")]
    pub landmarks: Option<NodeList<Landmark>>,
    #[serde(default, deserialize_with = "lenient")]
    pub groups: Option<NodeList<Group>>,
    #[serde(default, deserialize_with = "lenient")]
    pub texts: Option<NodeList<Text>>,
}

impl GardenPlan {
    pub fn planting_locations(&self) -> &[PlantingLocation] {
        self.planting_locations
            .as_ref()
            .map(|list| list.nodes.as_slice())
            .unwrap_or(&[])
    }

    pub fn landmarks(&self) -> &[Landmark] {
        self.landmarks.as_ref().map(|list| list.nodes.as_slice()).unwrap_or(&[])
    }

    pub fn groups(&self) -> &[Group] {
        self.groups.as_ref().map(|list| list.nodes.as_slice()).unwrap_or(&[])
    }

    pub fn texts(&self) -> &[Text] {
        self.texts.as_ref().map(|list| list.nodes.as_slice()).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Garden {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub garden_plan: Option<GardenPlan>,
}

fn no_control_points() -> Option<Vec<Point>> {
    Some(Vec::new())
}

/// Decode a value if it has the expected type, otherwise read it as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decode a list, dropping undecodable entries; a non-list value reads as
/// an empty list.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// Control points: a missing key means a straight segment, a present but
/// unusable value marks the segment malformed (`None`).
fn control_points<'de, D>(deserializer: D) -> Result<Option<Vec<Point>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(Some(Vec::new())),
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_typed_leaves_read_as_absent() {
        let landmark: Landmark = serde_json::from_str(
            r#"{
                "name": "Shed",
                "strokeWidth": "wide",
                "hidden": "yes",
                "index": 2,
                "shape": 17
            }"#,
        )
        .unwrap();
        assert_eq!(landmark.name.as_deref(), Some("Shed"));
        assert_eq!(landmark.stroke_width, None);
        assert!(!landmark.is_hidden());
        assert_eq!(landmark.index, Some(2));
        assert!(landmark.shape.is_none());
    }

    #[test]
    fn missing_control_points_mean_straight_segment() {
        let segment: Segment =
            serde_json::from_str(r#"{"start": {"x": 1, "y": 2}}"#).unwrap();
        assert_eq!(segment.control_points(), Some(&[][..]));
    }

    #[test]
    fn bad_control_point_marks_segment_malformed() {
        let segment: Segment = serde_json::from_str(
            r#"{"start": {"x": 1, "y": 2}, "bezierControlPoints": [{"x": 3}]}"#,
        )
        .unwrap();
        assert!(segment.control_points().is_none());
    }

    #[test]
    fn malformed_point_reads_as_absent() {
        let segment: Segment =
            serde_json::from_str(r#"{"start": {"x": "a", "y": 2}}"#).unwrap();
        assert!(segment.start.is_none());
    }

    #[test]
    fn node_list_drops_undecodable_entries() {
        let plan: GardenPlan = serde_json::from_str(
            r#"{"landmarks": {"nodes": [{"name": "Oak"}, 42]}}"#,
        )
        .unwrap();
        assert_eq!(plan.landmarks().len(), 1);
        assert_eq!(plan.landmarks()[0].name.as_deref(), Some("Oak"));
    }

    #[test]
    fn formations_come_from_wire_field_planting_formations() {
        let location: PlantingLocation = serde_json::from_str(
            r#"{"plantingFormations": {"nodes": [{"draft": false}]}}"#,
        )
        .unwrap();
        assert_eq!(location.formations().len(), 1);
    }
}
