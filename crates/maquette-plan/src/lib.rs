//! Floor-plan data model, height quantization, and tile metadata.
#![forbid(unsafe_code)]

pub mod config;
pub mod tile;
pub mod types;

pub use tile::{TileCatalog, TileInfo, TileProvider};
pub use types::{Bounds, FloorPlan, Shape, Structure, StructureId, StructureKind};

/// Quantized height increment an avatar may climb in one tick, and the
/// grid raised-block heights snap to. World units.
pub const STEP_UNIT: f32 = 0.5;

/// Rounds a free-form height (e.g. from a UI slider) to the nearest
/// positive multiple of [`STEP_UNIT`]. Never rejects: sub-step inputs
/// become one step unit.
#[inline]
pub fn quantize_height(h: f32) -> f32 {
    let steps = (h / STEP_UNIT).round().max(1.0);
    steps * STEP_UNIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_snaps_to_half_units() {
        assert_eq!(quantize_height(0.5), 0.5);
        assert_eq!(quantize_height(1.0), 1.0);
        assert_eq!(quantize_height(0.74), 0.5);
        assert_eq!(quantize_height(0.76), 1.0);
        assert_eq!(quantize_height(2.249), 2.0);
    }

    #[test]
    fn quantize_floors_at_one_step() {
        assert_eq!(quantize_height(0.0), 0.5);
        assert_eq!(quantize_height(0.1), 0.5);
        assert_eq!(quantize_height(-3.0), 0.5);
    }
}
