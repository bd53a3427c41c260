//! Decode boundary for garden snapshot documents.
//!
//! A syntactically invalid document is the one hard error here; semantic
//! gaps (missing, null or wrong-typed leaves) decode leniently via the
//! model and never fail the parse.

use crate::model::Garden;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid garden snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a snapshot document into a [`Garden`].
///
/// Accepts both the bare garden object and the coordinator-style wrapper
/// `{"garden": {...}}` that upstream data refreshes produce.
pub fn parse_garden(input: &str) -> Result<Garden, PlanError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    let value = match value.get("garden") {
        Some(inner) => inner.clone(),
        None => value,
    };
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_garden_object() {
        let garden =
            parse_garden(r#"{"title": "Backyard", "gardenPlan": {"width": 800}}"#).unwrap();
        assert_eq!(garden.title.as_deref(), Some("Backyard"));
        assert_eq!(garden.garden_plan.unwrap().width, Some(800.0));
    }

    #[test]
    fn unwraps_coordinator_style_document() {
        let garden =
            parse_garden(r#"{"garden": {"title": "Allotment", "gardenPlan": {}}}"#).unwrap();
        assert_eq!(garden.title.as_deref(), Some("Allotment"));
        assert!(garden.garden_plan.is_some());
    }

    #[test]
    fn rejects_non_json_input() {
        assert!(matches!(parse_garden("not json"), Err(PlanError::Json(_))));
    }

    #[test]
    fn tolerates_missing_plan() {
        let garden = parse_garden(r#"{"title": "Empty"}"#).unwrap();
        assert!(garden.garden_plan.is_none());
    }
}
