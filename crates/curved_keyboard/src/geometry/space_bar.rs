use super::{placement::CurvedLayout, types::Vec3};
use crate::error::{KeyboardError, Result};

/// Triangle strip for the wide space key, bent along the cylinder
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceBarStrip {
    pub vertices: Vec<Vec3>, // (top, bottom) pairs from left edge to right edge
    pub indices: Vec<u32>,
}

impl SpaceBarStrip {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

// keeps every strip index (at most 2 * segments + 1) inside u32
const MAX_SEGMENTS: usize = ((u32::MAX - 3) / 2) as usize;

impl CurvedLayout {
    /// Face of the space key, split into `segments` quads across its arc.
    pub fn space_bar_strip(&self, segments: usize) -> Result<SpaceBarStrip> {
        if segments == 0 || segments > MAX_SEGMENTS {
            return Err(KeyboardError::Geometry {
                message: format!(
                    "space bar segments must be in 1..={MAX_SEGMENTS}, got {segments}"
                ),
            });
        }

        let params = self.params();
        let index = params.space_index;
        let slot = self.resolve(index)?;
        let width = params.space_width_slots;
        let start = slot.offset(index) - width / 2.0;
        let y = self.row_height(slot.row);
        let half_height = params.key_height / 2.0;

        let mut vertices = Vec::with_capacity(2 * (segments + 1));
        for s in 0..=segments {
            let offset = start + width * s as f64 / segments as f64;
            let angle = self.slot_angle_deg(&slot, offset);
            vertices.push(self.point_on_cylinder(angle, y + half_height));
            vertices.push(self.point_on_cylinder(angle, y - half_height));
        }

        let mut indices = Vec::with_capacity(6 * segments);
        for s in 0..segments {
            let s = s as u32;
            let base = 2 * s;
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 1, base + 3]);
        }

        Ok(SpaceBarStrip { vertices, indices })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::{BASE_RADIUS, KEY_NUMBER, ROWS},
        geometry::{rows::RowTable, types::LayoutParams},
    };

    const EPS: f64 = 1e-9;

    fn layout(curvature: f64) -> CurvedLayout {
        let rows = RowTable::new(ROWS.to_vec(), KEY_NUMBER).unwrap();
        CurvedLayout::new(rows, LayoutParams::default(), curvature).unwrap()
    }

    #[test]
    fn test_strip_shape() {
        let strip = layout(0.8).space_bar_strip(8).unwrap();
        assert_eq!(strip.vertices.len(), 18);
        assert_eq!(strip.indices.len(), 48);
        assert_eq!(strip.triangle_count(), 16);
        let max = *strip.indices.iter().max().unwrap() as usize;
        assert_eq!(max, strip.vertices.len() - 1);
    }

    #[test]
    fn test_strip_follows_space_key() {
        let layout = layout(0.8);
        let space = layout.placement(28).unwrap();
        let strip = layout.space_bar_strip(2).unwrap();

        // middle column sits on the space key itself
        let top = strip.vertices[2];
        let bottom = strip.vertices[3];
        assert!((top.x - space.position.x).abs() < EPS);
        assert!((top.z - space.position.z).abs() < EPS);
        assert!((top.y - (space.position.y + 0.4)).abs() < EPS);
        assert!((bottom.y - (space.position.y - 0.4)).abs() < EPS);
        assert!((top.z - BASE_RADIUS).abs() < EPS);
    }

    #[test]
    fn test_strip_spans_three_slots() {
        let layout = layout(0.8);
        let strip = layout.space_bar_strip(1).unwrap();
        let step = layout.angle_step_deg().to_radians();
        let d = layout.distance_to_center();
        let left = strip.vertices[0];
        let right = strip.vertices[2];
        // symmetric about the forward axis, 1.5 slots each side
        assert!((left.x + right.x).abs() < EPS);
        assert!((right.x - (std::f64::consts::FRAC_PI_2 - 1.5 * step).cos() * d).abs() < EPS);
    }

    #[test]
    fn test_segment_count_bounds() {
        assert!(layout(0.5).space_bar_strip(0).is_err());
        assert!(layout(0.5).space_bar_strip(MAX_SEGMENTS + 1).is_err());
        assert!(layout(0.5).space_bar_strip(usize::MAX).is_err());
    }
}
