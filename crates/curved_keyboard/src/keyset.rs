use crate::keys::KeySet;
use log::debug;

/// Which label table the keys currently show.
///
/// The case toggle only flips between the letter sets. Entering the special
/// set forgets the case, so leaving it always lands on lower case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeySwitcher {
    current: KeySet,
}

impl KeySwitcher {
    pub fn new(initial: KeySet) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> KeySet {
        self.current
    }

    pub fn is_lower_case(&self) -> bool {
        self.current == KeySet::LowerCase
    }

    pub fn is_special(&self) -> bool {
        self.current == KeySet::Special
    }

    /// Shift key. Returns `false` when ignored (special set).
    pub fn toggle_case(&mut self) -> bool {
        let next = match self.current {
            KeySet::LowerCase => KeySet::UpperCase,
            KeySet::UpperCase => KeySet::LowerCase,
            KeySet::Special => {
                debug!("case toggle ignored in special set");
                return false;
            }
        };
        self.transition(next);
        true
    }

    /// Mode key: letters <-> special.
    pub fn toggle_mode(&mut self) {
        let next = match self.current {
            KeySet::LowerCase | KeySet::UpperCase => KeySet::Special,
            KeySet::Special => KeySet::LowerCase,
        };
        self.transition(next);
    }

    fn transition(&mut self, next: KeySet) {
        debug!("key set {} -> {}", self.current, next);
        self.current = next;
    }
}
