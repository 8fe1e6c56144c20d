use crate::constants::MAXIMUM_INPUT;

/// Receiver of typed text
pub trait TextSink {
    fn append(&mut self, text: &str);
    fn backspace(&mut self);
}

impl<T: TextSink + ?Sized> TextSink for &mut T {
    fn append(&mut self, text: &str) {
        (**self).append(text);
    }

    fn backspace(&mut self) {
        (**self).backspace();
    }
}

/// Text field with a character cap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    maximum_input: usize,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new(MAXIMUM_INPUT)
    }
}

impl TextBuffer {
    pub fn new(maximum_input: usize) -> Self {
        Self {
            text: String::with_capacity(maximum_input),
            maximum_input,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.len() >= self.maximum_input
    }

    pub fn maximum_input(&self) -> usize {
        self.maximum_input
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

impl TextSink for TextBuffer {
    /// Appends only if the whole of `text` fits under the cap.
    fn append(&mut self, text: &str) {
        if self.len() + text.chars().count() <= self.maximum_input {
            self.text.push_str(text);
        }
    }

    fn backspace(&mut self) {
        self.text.pop();
    }
}
