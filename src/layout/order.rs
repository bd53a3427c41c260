//! Back-to-front compositing order for landmarks and planting locations.
//!
//! The domain convention is "lower index = closer to the viewer", while SVG
//! composites later elements on top, so render units are emitted in
//! descending index order: the highest index lands furthest back. Members of
//! a non-hidden group form one unit at the group's index; everything else is
//! its own unit at its own index. Text elements never enter this ordering,
//! they are appended after the whole sequence.

use std::collections::HashMap;

use crate::model::{Group, Landmark, PlantingLocation};

#[derive(Debug, Clone, Copy)]
pub enum RenderItem<'a> {
    Landmark(&'a Landmark),
    Location(&'a PlantingLocation),
}

struct RenderUnit<'a> {
    key: i64,
    items: Vec<RenderItem<'a>>,
}

/// Produce the ordered draw sequence: first item is drawn first and sits
/// visually furthest back. Hidden landmarks, locations and members of the
/// input collections are excluded outright, and a hidden group drops out of
/// index resolution so its members fall back to their own indices.
///
/// Ties between equal keys keep unit creation order: groups in first
/// encounter order, then ungrouped landmarks, then ungrouped locations,
/// each in collection order.
pub fn render_order<'a>(
    landmarks: &'a [Landmark],
    locations: &'a [PlantingLocation],
    groups: &'a [Group],
) -> Vec<RenderItem<'a>> {
    let mut group_index: HashMap<&str, i64> = HashMap::new();
    for group in groups {
        if group.is_hidden() {
            continue;
        }
        if let Some(id) = group.id.as_deref() {
            group_index.insert(id, group.index.unwrap_or(0));
        }
    }

    // Grouped members keyed by group id, in first-encounter order.
    let mut grouped: Vec<(&str, Vec<RenderItem<'a>>)> = Vec::new();
    let mut ungrouped: Vec<(i64, RenderItem<'a>)> = Vec::new();

    let mut place = |group_id: Option<&'a str>, index: Option<i64>, item: RenderItem<'a>| {
        match group_id.filter(|id| group_index.contains_key(id)) {
            Some(id) => match grouped.iter_mut().find(|(gid, _)| *gid == id) {
                Some((_, items)) => items.push(item),
                None => grouped.push((id, vec![item])),
            },
            None => ungrouped.push((index.unwrap_or(0), item)),
        }
    };

    for landmark in landmarks {
        if landmark.is_hidden() {
            continue;
        }
        place(
            landmark.group_id.as_deref(),
            landmark.index,
            RenderItem::Landmark(landmark),
        );
    }
    for location in locations {
        if location.is_hidden() {
            continue;
        }
        place(
            location.group_id.as_deref(),
            location.index,
            RenderItem::Location(location),
        );
    }

    let mut units: Vec<RenderUnit<'a>> = grouped
        .into_iter()
        .map(|(id, items)| RenderUnit {
            key: group_index[id],
            items,
        })
        .collect();
    units.extend(ungrouped.into_iter().map(|(key, item)| RenderUnit {
        key,
        items: vec![item],
    }));

    // Stable sort: equal keys keep unit creation order.
    units.sort_by(|a, b| b.key.cmp(&a.key));

    units.into_iter().flat_map(|unit| unit.items).collect()
}
