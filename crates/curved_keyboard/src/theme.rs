use crate::{
    constants::DEFAULT_THEME_TAG,
    error::{KeyboardError, Result},
    keys::KeyState,
};
use serde::{Deserialize, Serialize};

/// Visual resource per key state. `T` is whatever the host renders with
/// (a material handle, a colour string, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme<T> {
    #[serde(default = "default_tag")]
    pub tag: String,
    pub default: T,
    pub focused: T,
    pub pressed: T,
    pub selected: T,
}

fn default_tag() -> String {
    DEFAULT_THEME_TAG.to_string()
}

impl<T> Theme<T> {
    pub fn new(tag: impl Into<String>, default: T, focused: T, pressed: T, selected: T) -> Self {
        Self {
            tag: tag.into(),
            default,
            focused,
            pressed,
            selected,
        }
    }

    pub fn value(&self, state: KeyState) -> &T {
        match state {
            KeyState::Default => &self.default,
            KeyState::Focused => &self.focused,
            KeyState::Pressed => &self.pressed,
            KeyState::Selected => &self.selected,
        }
    }
}

pub fn find_theme<'a, T>(themes: &'a [Theme<T>], tag: &str) -> Option<&'a Theme<T>> {
    themes.iter().find(|theme| theme.tag == tag)
}

/// Tagged lookup: the keyboard's own themes first, then the shared ones.
pub fn resolve_theme<'a, T>(
    local: &'a [Theme<T>],
    global: &'a [Theme<T>],
    tag: &str,
) -> Result<&'a Theme<T>> {
    find_theme(local, tag)
        .or_else(|| find_theme(global, tag))
        .ok_or_else(|| KeyboardError::ThemeNotFound(tag.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn theme(tag: &str, prefix: &str) -> Theme<String> {
        Theme::new(
            tag,
            format!("{prefix}-default"),
            format!("{prefix}-focused"),
            format!("{prefix}-pressed"),
            format!("{prefix}-selected"),
        )
    }

    #[test]
    fn test_value_per_state() {
        let t = theme("keyboard", "kb");
        assert_eq!(t.value(KeyState::Default), "kb-default");
        assert_eq!(t.value(KeyState::Focused), "kb-focused");
        assert_eq!(t.value(KeyState::Pressed), "kb-pressed");
        assert_eq!(t.value(KeyState::Selected), "kb-selected");
        assert_eq!(KeyState::iter().count(), 4);
    }

    #[test]
    fn test_resolve_prefers_local() {
        let local = vec![theme("keyboard", "local")];
        let global = vec![theme("keyboard", "global"), theme("dialog", "global")];

        let t = resolve_theme(&local, &global, "keyboard").unwrap();
        assert_eq!(t.default, "local-default");

        let t = resolve_theme(&local, &global, "dialog").unwrap();
        assert_eq!(t.default, "global-default");

        assert!(matches!(
            resolve_theme(&local, &global, "missing"),
            Err(KeyboardError::ThemeNotFound(tag)) if tag == "missing"
        ));
    }

    #[test]
    fn test_deserialize_with_default_tag() {
        let t: Theme<String> = toml::from_str(
            r##"
default = "#202020"
focused = "#303030"
pressed = "#404040"
selected = "#505050"
"##,
        )
        .unwrap();
        assert_eq!(t.tag, "default");
        assert_eq!(t.value(KeyState::Pressed), "#404040");
    }
}
