pub mod curvature;
pub mod placement;
pub mod rows;
pub mod space_bar;
pub mod types;

pub use curvature::{distance_to_center, effective_curvature};
pub use placement::CurvedLayout;
pub use rows::RowTable;
pub use space_bar::SpaceBarStrip;
pub use types::{KeyPlacement, LayoutParams, RowSlot, Vec3};
