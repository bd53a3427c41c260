mod order;
mod plants;

pub use order::{render_order, RenderItem};
pub use plants::plant_positions;
