use super::{
    curvature::{clamp_curvature, distance_to_center, effective_curvature},
    rows::RowTable,
    types::{KeyPlacement, LayoutParams, RowSlot, Vec3},
};
use crate::error::{KeyboardError, Result};
use log::debug;

/// Keys on a partial cylinder around the viewer.
///
/// Only the working radius is cached; every placement is recomputed from
/// the key index, the row table and the current curvature.
#[derive(Debug, Clone)]
pub struct CurvedLayout {
    rows: RowTable,
    params: LayoutParams,
    curvature: f64,
    distance_to_center: f64,
}

impl CurvedLayout {
    pub fn new(rows: RowTable, params: LayoutParams, curvature: f64) -> Result<Self> {
        validate_params(&params)?;
        let mut layout = Self {
            rows,
            params,
            curvature: 0.0,
            distance_to_center: 0.0,
        };
        layout.set_curvature(curvature)?;
        Ok(layout)
    }

    /// Update the public curvature control and the derived radius.
    pub fn set_curvature(&mut self, raw: f64) -> Result<()> {
        self.curvature = clamp_curvature(raw)?;
        self.distance_to_center = distance_to_center(
            self.curvature,
            self.params.angle_scale,
            self.params.base_radius,
        );
        debug!(
            "curvature {:.3} -> distance to center {:.4}",
            self.curvature, self.distance_to_center
        );
        Ok(())
    }

    pub fn curvature(&self) -> f64 {
        self.curvature
    }

    pub fn effective_curvature(&self) -> f64 {
        effective_curvature(self.curvature)
    }

    pub fn distance_to_center(&self) -> f64 {
        self.distance_to_center
    }

    pub fn rows(&self) -> &RowTable {
        &self.rows
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    pub fn key_count(&self) -> usize {
        self.rows.key_count()
    }

    /// Angular width of one key slot [deg]. Shrinks as the radius grows.
    pub fn angle_step_deg(&self) -> f64 {
        self.params.column_spacing / self.distance_to_center
    }

    pub fn resolve(&self, index: usize) -> Result<RowSlot> {
        self.rows.resolve(index, self.params.bottom_row_offset_factor)
    }

    /// Angle of a slot around the axis [deg]; the row is centered on the base rotation.
    pub fn slot_angle_deg(&self, slot: &RowSlot, offset: f64) -> f64 {
        let step = self.angle_step_deg();
        let gaps = (slot.row_len - 1) as f64;
        self.params.base_rotation_deg + gaps * step / 2.0 - offset * step
    }

    /// Point on the working cylinder, restored to the base radius.
    pub fn point_on_cylinder(&self, angle_deg: f64, y: f64) -> Vec3 {
        let d = self.distance_to_center;
        let rad = angle_deg.to_radians();
        let z = rad.sin() * d;
        Vec3::new(rad.cos() * d, y, self.restore_depth(z))
    }

    /// Rows are laid out on the working radius, which can be far larger than
    /// the base radius; pull them back so the keyboard stays at base radius.
    #[inline]
    fn restore_depth(&self, z: f64) -> f64 {
        z - self.distance_to_center + self.params.base_radius
    }

    pub fn row_height(&self, row: usize) -> f64 {
        -(row as f64) * self.params.row_spacing
    }

    pub fn placement(&self, index: usize) -> Result<KeyPlacement> {
        let slot = self.resolve(index)?;
        Ok(self.place(index, &slot))
    }

    pub fn placements(&self) -> Vec<KeyPlacement> {
        let factor = self.params.bottom_row_offset_factor;
        (0..self.key_count())
            .map(|index| self.place(index, &self.rows.locate(index, factor)))
            .collect()
    }

    fn place(&self, index: usize, slot: &RowSlot) -> KeyPlacement {
        let angle_deg = self.slot_angle_deg(slot, slot.offset(index));
        KeyPlacement {
            index,
            row: slot.row,
            angle_deg,
            position: self.point_on_cylinder(angle_deg, self.row_height(slot.row)),
            yaw_deg: -angle_deg - 90.0,
        }
    }
}

fn validate_params(params: &LayoutParams) -> Result<()> {
    let positive = [
        ("base_radius", params.base_radius),
        ("column_spacing", params.column_spacing),
        ("row_spacing", params.row_spacing),
        ("angle_scale", params.angle_scale),
        ("space_width_slots", params.space_width_slots),
        ("key_height", params.key_height),
    ];
    for (name, value) in positive {
        if !value.is_finite() || value <= 0.0 {
            return Err(KeyboardError::Geometry {
                message: format!("{name} must be positive and finite, got {value}"),
            });
        }
    }
    if params.angle_scale >= std::f64::consts::FRAC_PI_2 {
        return Err(KeyboardError::Geometry {
            message: format!(
                "angle_scale must stay below pi/2, got {}",
                params.angle_scale
            ),
        });
    }
    if !params.base_rotation_deg.is_finite() || !params.bottom_row_offset_factor.is_finite() {
        return Err(KeyboardError::Geometry {
            message: "base_rotation_deg and bottom_row_offset_factor must be finite".to_string(),
        });
    }
    Ok(())
}
