use crate::{
    constants::{DEFAULT_CURVATURE, KEY_NUMBER, KEYBOARD_THEME_TAG, MAXIMUM_INPUT, ROWS},
    error::{KeyboardError, Result},
    geometry::{CurvedLayout, LayoutParams, RowTable},
    keys::LabelTables,
    theme::{Theme, find_theme},
};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// メイン設定構造体
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyboardConfig {
    pub theme_tag: String,
    pub layout: LayoutConfig,
    pub output: OutputConfig,
    pub labels: LabelTables,
    pub themes: Vec<Theme<String>>,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            theme_tag: KEYBOARD_THEME_TAG.to_string(),
            layout: LayoutConfig::default(),
            output: OutputConfig::default(),
            labels: LabelTables::default(),
            themes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub curvature: f64, // 0 = flat, 1 = tightest arc
    pub rows: Vec<usize>,
    pub key_count: usize,
    #[serde(flatten)]
    pub params: LayoutParams,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            curvature: DEFAULT_CURVATURE,
            rows: ROWS.to_vec(),
            key_count: KEY_NUMBER,
            params: LayoutParams::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub maximum_input: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            maximum_input: MAXIMUM_INPUT,
        }
    }
}

impl KeyboardConfig {
    /// 設定ファイルから読み込み
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            KeyboardError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| {
            KeyboardError::Config(format!(
                "Failed to load config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        info!("Loaded keyboard configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: KeyboardConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 設定の検証
    pub fn validate(&self) -> Result<()> {
        let layout = self.build_layout()?;

        if self.layout.params.space_index >= layout.key_count() {
            return Err(KeyboardError::Config(format!(
                "space_index {} is outside the {} keys",
                self.layout.params.space_index,
                layout.key_count()
            )));
        }

        self.labels.validate(layout.key_count())?;

        if self.output.maximum_input == 0 {
            return Err(KeyboardError::Config(
                "maximum_input must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn row_table(&self) -> Result<RowTable> {
        RowTable::new(self.layout.rows.clone(), self.layout.key_count)
    }

    pub fn build_layout(&self) -> Result<CurvedLayout> {
        CurvedLayout::new(
            self.row_table()?,
            self.layout.params.clone(),
            self.layout.curvature,
        )
    }

    /// Theme the keyboard is drawn with, if this file defines it.
    /// Shared themes are consulted by [`crate::Keyboard::from_config_with_themes`].
    pub fn theme(&self) -> Option<&Theme<String>> {
        find_theme(&self.themes, &self.theme_tag)
    }
}
