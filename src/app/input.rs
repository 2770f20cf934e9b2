//! Filter text field.
//!
//! The host owns the text field; this type is its model. Each edit returns
//! the field's full text, which the host forwards as a `keyup` signal.

/// Single-line text field holding the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterField {
    text: String,
}

impl FilterField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Appends a character and returns the new text.
    pub fn insert(&mut self, c: char) -> &str {
        self.text.push(c);
        &self.text
    }

    /// Removes the last character and returns the new text.
    pub fn delete_back(&mut self) -> &str {
        self.text.pop();
        &self.text
    }

    /// Overwrites the field, e.g. when the text arrives over a pipe.
    pub fn replace(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    /// Empties the field. Returns `false` if it was already empty.
    pub fn clear(&mut self) -> bool {
        let had_text = !self.text.is_empty();
        self.text.clear();
        had_text
    }
}
