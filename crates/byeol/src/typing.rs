//! Typing-text loop for the tagline.

/// Phrases cycled by the tagline.
const WORDS: &[&str] = &[
    "a drifting constellation",
    "quiet particle trails",
    "lines between neighbors",
    "an ambient night sky",
    "eighty wandering stars",
];

/// Milliseconds per typed character.
const TYPE_MS: u64 = 100;
/// Milliseconds per deleted character.
const DELETE_MS: u64 = 50;
/// Pause after a word is fully typed.
const WORD_PAUSE_MS: u64 = 2000;
/// Pause after a word is fully deleted, before the next one.
const NEXT_WORD_PAUSE_MS: u64 = 500;

/// Type-pause-delete-pause loop over [`WORDS`], driven by the app's
/// elapsed-milliseconds clock.
#[derive(Debug)]
pub struct TypingLoop {
    word_index: usize,
    char_index: usize,
    deleting: bool,
    next_step_ms: u64,
}

impl Default for TypingLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl TypingLoop {
    pub fn new() -> Self {
        Self {
            word_index: 0,
            char_index: 0,
            deleting: false,
            next_step_ms: 0,
        }
    }

    /// Advance to `elapsed_ms`, taking as many steps as have come due. Each
    /// step types or deletes one character and schedules the next step.
    pub fn update(&mut self, elapsed_ms: u64) {
        while elapsed_ms >= self.next_step_ms {
            let delay = self.step();
            self.next_step_ms += delay;
        }
    }

    fn step(&mut self) -> u64 {
        let word = WORDS[self.word_index];
        if self.deleting {
            self.char_index -= 1;
            if self.char_index == 0 {
                self.deleting = false;
                self.word_index = (self.word_index + 1) % WORDS.len();
                return NEXT_WORD_PAUSE_MS;
            }
            DELETE_MS
        } else {
            self.char_index += 1;
            if self.char_index == word.chars().count() {
                self.deleting = true;
                return WORD_PAUSE_MS;
            }
            TYPE_MS
        }
    }

    /// The currently visible prefix of the active word.
    pub fn text(&self) -> String {
        WORDS[self.word_index].chars().take(self.char_index).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_one_character_per_interval() {
        let mut typing = TypingLoop::new();
        typing.update(0);
        assert_eq!(typing.text(), &WORDS[0][..1]);
        typing.update(TYPE_MS * 3);
        assert_eq!(typing.text(), &WORDS[0][..4]);
    }

    #[test]
    fn pauses_then_deletes_then_moves_to_the_next_word() {
        let mut typing = TypingLoop::new();
        let len = WORDS[0].len() as u64;

        // Fully typed after one step per character.
        let typed_at = TYPE_MS * (len - 1);
        typing.update(typed_at);
        assert_eq!(typing.text(), WORDS[0]);

        // Holds through the end-of-word pause.
        typing.update(typed_at + WORD_PAUSE_MS - 1);
        assert_eq!(typing.text(), WORDS[0]);

        // First deletion fires when the pause elapses.
        typing.update(typed_at + WORD_PAUSE_MS);
        assert_eq!(typing.text(), &WORDS[0][..WORDS[0].len() - 1]);

        // Fully deleted, then the next word starts after its own pause.
        let deleted_at = typed_at + WORD_PAUSE_MS + DELETE_MS * (len - 1);
        typing.update(deleted_at);
        assert_eq!(typing.text(), "");
        typing.update(deleted_at + NEXT_WORD_PAUSE_MS);
        assert_eq!(typing.text(), &WORDS[1][..1]);
    }

    #[test]
    fn wraps_around_the_word_list() {
        let mut typing = TypingLoop::new();
        // Far enough to cycle the whole list several times.
        typing.update(10 * 60 * 1000);
        assert!(WORDS.iter().any(|w| w.starts_with(&typing.text())));
    }
}
