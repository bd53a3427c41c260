//! Aggregate facts about a snapshot, for hosts that surface plan
//! attributes next to the rendered image.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::Garden;

#[derive(Debug, Clone, Serialize)]
pub struct PlanSummary {
    pub garden_title: Option<String>,
    pub plan_width: Option<f64>,
    pub plan_height: Option<f64>,
    pub location_count: usize,
    pub crop_count: usize,
}

/// Count planting locations and distinct crop titles across all formations.
/// Drafts count too; the summary reflects the snapshot, not the drawing.
pub fn summarize(garden: &Garden) -> PlanSummary {
    let plan = garden.garden_plan.as_ref();
    let locations = plan.map(|p| p.planting_locations()).unwrap_or(&[]);

    let mut crop_titles: BTreeSet<&str> = BTreeSet::new();
    for location in locations {
        for formation in location.formations() {
            if let Some(title) = formation
                .garden_crop
                .as_ref()
                .and_then(|crop| crop.title.as_deref())
                .filter(|title| !title.is_empty())
            {
                crop_titles.insert(title);
            }
        }
    }

    PlanSummary {
        garden_title: garden.title.clone(),
        plan_width: plan.and_then(|p| p.width),
        plan_height: plan.and_then(|p| p.height),
        location_count: locations.len(),
        crop_count: crop_titles.len(),
    }
}
