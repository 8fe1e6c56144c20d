use crate::constants::{
    ANGLE_SCALE, BASE_RADIUS, BASE_ROTATION_DEG, BOTTOM_ROW_OFFSET_FACTOR, KEY_HEIGHT,
    POSITION_SPACE, SPACE_WIDTH_SLOTS, SPACING_COLUMN, SPACING_ROW,
};
use serde::{Deserialize, Serialize};

/// Point in the keyboard's local frame (y up, z forward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Resolved row of a key slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSlot {
    pub row: usize,
    pub row_len: usize,
    pub keys_placed: f64, // keys before this row, shrunk for the wide bottom keys
}

impl RowSlot {
    /// Slot position inside the row, in key widths
    #[inline]
    pub fn offset(&self, index: usize) -> f64 {
        index as f64 - self.keys_placed
    }
}

/// Placement of one key on the cylinder
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeyPlacement {
    pub index: usize,
    pub row: usize,
    pub angle_deg: f64, // around the keyboard axis, 90 = straight ahead
    pub position: Vec3,
    pub yaw_deg: f64, // faces the axis
}

/// Fixed spacing constants of a layout
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutParams {
    pub base_radius: f64,
    pub column_spacing: f64,
    pub row_spacing: f64,
    pub base_rotation_deg: f64,
    pub angle_scale: f64,
    pub bottom_row_offset_factor: f64,
    pub space_index: usize,
    pub space_width_slots: f64,
    pub key_height: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            base_radius: BASE_RADIUS,
            column_spacing: SPACING_COLUMN,
            row_spacing: SPACING_ROW,
            base_rotation_deg: BASE_ROTATION_DEG,
            angle_scale: ANGLE_SCALE,
            bottom_row_offset_factor: BOTTOM_ROW_OFFSET_FACTOR,
            space_index: POSITION_SPACE,
            space_width_slots: SPACE_WIDTH_SLOTS,
            key_height: KEY_HEIGHT,
        }
    }
}
