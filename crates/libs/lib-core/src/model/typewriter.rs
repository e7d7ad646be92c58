//! Typed-text reveal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterTick {
    /// One more character became visible.
    Revealed,
    /// Text was already complete; stop the timer.
    Finished,
}

/// Reveals `text` one character per tick.
///
/// Works on `char`s so multi-byte text never splits mid-codepoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    text: String,
    revealed: usize,
    total: usize,
    finished: bool,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let total = text.chars().count();
        Self {
            text,
            revealed: 0,
            total,
            finished: false,
        }
    }

    /// Currently visible prefix.
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.revealed) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Characters in the full text.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn tick(&mut self) -> TypewriterTick {
        if self.revealed < self.total {
            self.revealed += 1;
            TypewriterTick::Revealed
        } else {
            self.finished = true;
            TypewriterTick::Finished
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TYPEWRITER_TEXT;

    #[test]
    fn test_reveals_one_char_per_tick_then_stops() {
        let mut typewriter = Typewriter::new(TYPEWRITER_TEXT);
        let len = typewriter.len();
        assert_eq!(typewriter.visible(), "");

        for i in 1..=len {
            assert_eq!(typewriter.tick(), TypewriterTick::Revealed);
            assert_eq!(typewriter.visible().chars().count(), i);
        }
        assert_eq!(typewriter.visible(), TYPEWRITER_TEXT);
        assert!(!typewriter.is_finished());

        assert_eq!(typewriter.tick(), TypewriterTick::Finished);
        assert!(typewriter.is_finished());
        assert_eq!(typewriter.tick(), TypewriterTick::Finished);
        assert_eq!(typewriter.visible(), TYPEWRITER_TEXT);
    }

    #[test]
    fn test_multibyte_text() {
        let mut typewriter = Typewriter::new("héllo 🚀");
        typewriter.tick();
        typewriter.tick();
        assert_eq!(typewriter.visible(), "hé");
        while typewriter.tick() == TypewriterTick::Revealed {}
        assert_eq!(typewriter.visible(), "héllo 🚀");
    }

    #[test]
    fn test_empty_text_finishes_on_first_tick() {
        let mut typewriter = Typewriter::new("");
        assert!(typewriter.is_empty());
        assert_eq!(typewriter.tick(), TypewriterTick::Finished);
    }
}
