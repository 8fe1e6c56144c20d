pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod geometry;
pub mod input;
pub mod keyboard;
pub mod keys;
pub mod keyset;
pub mod output;
pub mod theme;

pub use config::KeyboardConfig;
pub use constants::{BASE_RADIUS, KEY_NUMBER, MAXIMUM_INPUT, ROWS};
pub use error::{KeyboardError, Result};
pub use geometry::{CurvedLayout, KeyPlacement, LayoutParams, RowTable, SpaceBarStrip, Vec3};
pub use input::KeyWidget;
pub use keyboard::Keyboard;
pub use keys::{KeyAction, KeySet, KeyState, LabelTables};
pub use keyset::KeySwitcher;
pub use output::{TextBuffer, TextSink};
pub use theme::Theme;
