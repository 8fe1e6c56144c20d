use crate::{
    config::KeyboardConfig,
    error::{KeyboardError, Result},
    geometry::{CurvedLayout, KeyPlacement},
    input::KeyWidget,
    keys::{KeyAction, KeySet, KeyState, LabelTables, SPACE},
    keyset::KeySwitcher,
    output::{TextBuffer, TextSink},
    theme::{Theme, resolve_theme},
};
use log::{debug, info};

/// One keyboard instance: layout, labels, key states and the text sink it types into.
///
/// The host forwards focus/press events by key index and places widgets from
/// [`Keyboard::placements`]. Taps are routed straight into the injected sink.
#[derive(Debug)]
pub struct Keyboard<S> {
    layout: CurvedLayout,
    labels: LabelTables,
    switcher: KeySwitcher,
    keys: Vec<KeyWidget>,
    theme: Option<Theme<String>>, // None: the host draws its own default
    output: S,
}

impl Keyboard<TextBuffer> {
    /// Keyboard typing into its own capped buffer
    pub fn with_text_buffer(config: &KeyboardConfig) -> Result<Self> {
        Self::from_config(config, TextBuffer::new(config.output.maximum_input))
    }
}

impl<S: TextSink> Keyboard<S> {
    pub fn new(layout: CurvedLayout, labels: LabelTables, output: S) -> Result<Self> {
        labels.validate(layout.key_count())?;
        let keys = (0..layout.key_count()).map(KeyWidget::new).collect();
        info!(
            "Keyboard ready: {} keys in rows {:?}, distance to center {:.3}",
            layout.key_count(),
            layout.rows().rows(),
            layout.distance_to_center()
        );
        Ok(Self {
            layout,
            labels,
            switcher: KeySwitcher::default(),
            keys,
            theme: None,
            output,
        })
    }

    pub fn from_config(config: &KeyboardConfig, output: S) -> Result<Self> {
        Self::from_config_with_themes(config, &[], output)
    }

    /// Build from configuration, resolving `theme_tag` against the config's
    /// own themes first and then `global`.
    pub fn from_config_with_themes(
        config: &KeyboardConfig,
        global: &[Theme<String>],
        output: S,
    ) -> Result<Self> {
        config.validate()?;
        let mut keyboard = Self::new(config.build_layout()?, config.labels.clone(), output)?;
        if !config.themes.is_empty() || !global.is_empty() {
            let theme = resolve_theme(&config.themes, global, &config.theme_tag)?;
            debug!("keyboard theme '{}'", theme.tag);
            keyboard.set_theme(theme.clone());
        }
        Ok(keyboard)
    }

    pub fn layout(&self) -> &CurvedLayout {
        &self.layout
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Change the curvature and return the recomputed placements.
    pub fn set_curvature(&mut self, raw: f64) -> Result<Vec<KeyPlacement>> {
        self.layout.set_curvature(raw)?;
        Ok(self.layout.placements())
    }

    pub fn placements(&self) -> Vec<KeyPlacement> {
        self.layout.placements()
    }

    pub fn placement(&self, index: usize) -> Result<KeyPlacement> {
        self.layout.placement(index)
    }

    pub fn key_set(&self) -> KeySet {
        self.switcher.current()
    }

    /// Labels of every key in the current set
    pub fn labels(&self) -> &[String] {
        self.labels.table(self.switcher.current())
    }

    pub fn label(&self, index: usize) -> Result<&str> {
        self.labels
            .label(self.switcher.current(), index)
            .ok_or(KeyboardError::KeyIndexOutOfRange {
                index,
                count: self.key_count(),
            })
    }

    pub fn key_state(&self, index: usize) -> Result<KeyState> {
        self.key(index).map(KeyWidget::state)
    }

    pub fn theme(&self) -> Option<&Theme<String>> {
        self.theme.as_ref()
    }

    pub fn set_theme(&mut self, theme: Theme<String>) {
        self.theme = Some(theme);
    }

    /// Theme value for the key's current state, `None` when no theme is set.
    pub fn key_visual(&self, index: usize) -> Result<Option<&str>> {
        let state = self.key_state(index)?;
        Ok(self
            .theme
            .as_ref()
            .map(|theme| theme.value(state).as_str()))
    }

    pub fn focus_enter(&mut self, index: usize) -> Result<()> {
        self.key_mut(index)?.on_focus_enter();
        Ok(())
    }

    pub fn focus_exit(&mut self, index: usize) -> Result<()> {
        self.key_mut(index)?.on_focus_exit();
        Ok(())
    }

    pub fn press_down(&mut self, index: usize) -> Result<()> {
        self.key_mut(index)?.on_press_down();
        Ok(())
    }

    /// Release of a key; a release after a press on the same key is a tap.
    pub fn press_up(&mut self, index: usize) -> Result<Option<KeyAction>> {
        if self.key_mut(index)?.on_press_up() {
            self.handle_tap(index).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Route a tap on `index` by the label the key currently shows.
    pub fn handle_tap(&mut self, index: usize) -> Result<KeyAction> {
        let action = KeyAction::from_value(self.label(index)?);
        debug!("tap on key {index}: {action:?}");
        self.apply(&action);
        Ok(action)
    }

    pub fn apply(&mut self, action: &KeyAction) {
        match action {
            KeyAction::ToggleMode => self.switcher.toggle_mode(),
            KeyAction::ToggleCase => {
                self.switcher.toggle_case();
            }
            KeyAction::Space => self.output.append(SPACE),
            KeyAction::Backspace => self.output.backspace(),
            KeyAction::Text(text) => self.output.append(text),
        }
    }

    pub fn output(&self) -> &S {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut S {
        &mut self.output
    }

    pub fn into_output(self) -> S {
        self.output
    }

    fn key(&self, index: usize) -> Result<&KeyWidget> {
        let count = self.keys.len();
        self.keys
            .get(index)
            .ok_or(KeyboardError::KeyIndexOutOfRange { index, count })
    }

    fn key_mut(&mut self, index: usize) -> Result<&mut KeyWidget> {
        let count = self.keys.len();
        self.keys
            .get_mut(index)
            .ok_or(KeyboardError::KeyIndexOutOfRange { index, count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{ABC, QEH, UP};

    const H: usize = 15;
    const I: usize = 7;
    const SHIFT: usize = 19;
    const MODE: usize = 27;
    const SPACE_KEY: usize = 28;
    const BACKSPACE: usize = 29;

    fn keyboard() -> Keyboard<TextBuffer> {
        Keyboard::with_text_buffer(&KeyboardConfig::default()).unwrap()
    }

    fn tap_all(kb: &mut Keyboard<TextBuffer>, indices: &[usize]) {
        for &i in indices {
            kb.handle_tap(i).unwrap();
        }
    }

    #[test]
    fn test_typing_letters() {
        let mut kb = keyboard();
        tap_all(&mut kb, &[H, I, SPACE_KEY, SHIFT, H, SHIFT, I]);
        assert_eq!(kb.output().text(), "hi Hi");
        assert_eq!(kb.key_set(), KeySet::LowerCase);
    }

    #[test]
    fn test_backspace_routing() {
        let mut kb = keyboard();
        assert_eq!(kb.handle_tap(BACKSPACE).unwrap(), KeyAction::Backspace);
        assert!(kb.output().is_empty());

        tap_all(&mut kb, &[H, I, BACKSPACE]);
        assert_eq!(kb.output().text(), "h");
    }

    #[test]
    fn test_special_round_trip() {
        let mut kb = keyboard();
        assert_eq!(kb.label(MODE).unwrap(), QEH);
        assert_eq!(kb.handle_tap(MODE).unwrap(), KeyAction::ToggleMode);
        assert_eq!(kb.key_set(), KeySet::Special);
        assert_eq!(kb.label(0).unwrap(), "1");
        assert_eq!(kb.label(MODE).unwrap(), ABC);

        // the shift slot types '*' in the special set
        kb.handle_tap(SHIFT).unwrap();
        kb.apply(&KeyAction::ToggleCase);
        assert_eq!(kb.key_set(), KeySet::Special);

        kb.handle_tap(MODE).unwrap();
        assert_eq!(kb.key_set(), KeySet::LowerCase);
        assert_eq!(kb.label(SHIFT).unwrap(), UP);
        assert_eq!(kb.labels(), LabelTables::default().lower.as_slice());
        assert_eq!(kb.output().text(), "*");
    }

    #[test]
    fn test_upper_case_returns_lower_after_special() {
        let mut kb = keyboard();
        tap_all(&mut kb, &[SHIFT, MODE, MODE]);
        assert_eq!(kb.key_set(), KeySet::LowerCase);
        kb.handle_tap(0).unwrap();
        assert_eq!(kb.output().text(), "q");
    }

    #[test]
    fn test_press_release_taps() {
        let mut kb = keyboard();
        kb.focus_enter(3).unwrap();
        assert_eq!(kb.key_state(3).unwrap(), KeyState::Focused);
        kb.press_down(3).unwrap();
        assert_eq!(kb.key_state(3).unwrap(), KeyState::Pressed);

        let action = kb.press_up(3).unwrap();
        assert_eq!(action, Some(KeyAction::Text("r".to_string())));
        assert_eq!(kb.key_state(3).unwrap(), KeyState::Focused);
        assert_eq!(kb.output().text(), "r");

        // release without press does nothing
        assert_eq!(kb.press_up(3).unwrap(), None);
        kb.focus_exit(3).unwrap();
        assert_eq!(kb.key_state(3).unwrap(), KeyState::Default);
        assert_eq!(kb.output().text(), "r");
    }

    #[test]
    fn test_input_cap() {
        let mut config = KeyboardConfig::default();
        config.output.maximum_input = 2;
        let mut kb = Keyboard::with_text_buffer(&config).unwrap();
        tap_all(&mut kb, &[H, I, H, SPACE_KEY]);
        assert_eq!(kb.output().text(), "hi");
    }

    #[test]
    fn test_injected_sink() {
        let mut buffer = TextBuffer::new(10);
        {
            let config = KeyboardConfig::default();
            let mut kb = Keyboard::from_config(&config, &mut buffer).unwrap();
            kb.handle_tap(H).unwrap();
        }
        assert_eq!(buffer.text(), "h");
    }

    fn themed_config() -> KeyboardConfig {
        KeyboardConfig {
            themes: vec![Theme::new(
                "keyboard",
                "#2b2b2b".to_string(),
                "#3c6e9f".to_string(),
                "#1d4a73".to_string(),
                "#5d9bd5".to_string(),
            )],
            ..KeyboardConfig::default()
        }
    }

    #[test]
    fn test_key_visual_follows_state() {
        let mut kb = Keyboard::from_config(&themed_config(), TextBuffer::default()).unwrap();
        assert_eq!(kb.key_visual(3).unwrap(), Some("#2b2b2b"));

        kb.focus_enter(3).unwrap();
        assert_eq!(kb.key_visual(3).unwrap(), Some("#3c6e9f"));
        kb.press_down(3).unwrap();
        assert_eq!(kb.key_visual(3).unwrap(), Some("#1d4a73"));
        kb.press_up(3).unwrap();
        assert_eq!(kb.key_visual(3).unwrap(), Some("#3c6e9f"));
        kb.focus_exit(3).unwrap();
        assert_eq!(kb.key_visual(3).unwrap(), Some("#2b2b2b"));

        // other keys keep their own state
        assert_eq!(kb.key_visual(4).unwrap(), Some("#2b2b2b"));
        assert!(kb.key_visual(30).is_err());
    }

    #[test]
    fn test_theme_falls_back_to_global() {
        let global = themed_config().themes;
        let config = KeyboardConfig::default();
        let kb = Keyboard::from_config_with_themes(&config, &global, TextBuffer::default()).unwrap();
        assert_eq!(kb.theme().unwrap().tag, "keyboard");

        // local themes win over the shared set
        let mut config = themed_config();
        config.themes[0].default = "#000000".to_string();
        let kb = Keyboard::from_config_with_themes(&config, &global, TextBuffer::default()).unwrap();
        assert_eq!(kb.key_visual(0).unwrap(), Some("#000000"));
    }

    #[test]
    fn test_unthemed_keyboard_has_no_visual() {
        let kb = keyboard();
        assert!(kb.theme().is_none());
        assert_eq!(kb.key_visual(0).unwrap(), None);
    }

    #[test]
    fn test_unknown_theme_tag_rejected() {
        let mut config = themed_config();
        config.theme_tag = "dialog".to_string();
        assert!(matches!(
            Keyboard::from_config(&config, TextBuffer::default()),
            Err(KeyboardError::ThemeNotFound(tag)) if tag == "dialog"
        ));
    }

    #[test]
    fn test_out_of_range_index() {
        let mut kb = keyboard();
        assert!(matches!(
            kb.handle_tap(30),
            Err(KeyboardError::KeyIndexOutOfRange { index: 30, count: 30 })
        ));
        assert!(kb.focus_enter(99).is_err());
        assert!(kb.press_up(30).is_err());
    }

    #[test]
    fn test_label_mismatch_rejected() {
        let config = KeyboardConfig::default();
        let mut labels = LabelTables::default();
        labels.upper.truncate(20);
        let result = Keyboard::new(config.build_layout().unwrap(), labels, TextBuffer::default());
        assert!(matches!(
            result,
            Err(KeyboardError::LabelTableLength { set: KeySet::UpperCase, .. })
        ));
    }

    #[test]
    fn test_curvature_change_keeps_labels() {
        let mut kb = keyboard();
        kb.handle_tap(SHIFT).unwrap();
        let before = kb.placements();
        let after = kb.set_curvature(0.9).unwrap();
        assert_ne!(before, after);
        assert_eq!(after.len(), 30);
        assert_eq!(kb.key_set(), KeySet::UpperCase);
        assert_eq!(kb.label(0).unwrap(), "Q");
        assert_eq!(kb.placement(0).unwrap(), after[0]);
    }
}
