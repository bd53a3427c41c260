//! Per-formation plant layout: row and spacing metadata turned into
//! individual plant coordinates.

use crate::model::Row;
use log::debug;

/// Compute evenly spaced plant positions along each row, concatenated in
/// row order.
///
/// A row shorter than one unit, or a spacing below one unit, yields a
/// single plant at the row's start; this avoids division by zero and
/// unbounded density. Otherwise a row of length `L` carries
/// `floor(L / spacing) + 1` plants at `spacing` intervals from the start.
/// When `L` is not an exact multiple of the spacing the tail of the row
/// stays unplanted; the count is not stretched to reach the end point.
pub fn plant_positions(rows: &[Row], plant_spacing: f64) -> Vec<(f64, f64)> {
    let mut positions = Vec::new();
    for row in rows {
        let (Some(start), Some(end)) = (row.start, row.end) else {
            debug!("row missing an endpoint, skipping");
            continue;
        };
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let row_len = (dx * dx + dy * dy).sqrt();

        if row_len < 1.0 || plant_spacing < 1.0 {
            positions.push((start.x, start.y));
            continue;
        }

        let ux = dx / row_len;
        let uy = dy / row_len;
        let plant_count = (row_len / plant_spacing) as usize + 1;
        for i in 0..plant_count {
            let offset = i as f64 * plant_spacing;
            positions.push((start.x + offset * ux, start.y + offset * uy));
        }
    }
    positions
}
