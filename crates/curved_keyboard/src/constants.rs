/// Layout tuning (distances in scene units, angles in degrees)
pub const SPACING_COLUMN: f64 = 56.3; // arc length of one key slot at radius 1
pub const SPACING_ROW: f64 = 1.0;
pub const BASE_ROTATION_DEG: f64 = 90.0; // forward axis
pub const BASE_RADIUS: f64 = 3.0;
pub const ANGLE_SCALE: f64 = 1.57; // just under pi/2 so tan() stays finite
pub const BOTTOM_ROW_OFFSET_FACTOR: f64 = 1.5;
pub const DEFAULT_CURVATURE: f64 = 0.2;

/// Keyset shape
pub const KEY_NUMBER: usize = 30;
pub const ROWS: [usize; 4] = [10, 9, 8, 6];
pub const POSITION_SPACE: usize = 28;

/// Space bar strip
pub const SPACE_WIDTH_SLOTS: f64 = 3.0;
pub const KEY_HEIGHT: f64 = 0.8;

/// Text output
pub const MAXIMUM_INPUT: usize = 30;

/// Theme
pub const DEFAULT_THEME_TAG: &str = "default";
pub const KEYBOARD_THEME_TAG: &str = "keyboard";
