//! Konami-code detection.

use crossterm::event::KeyCode;

const SEQUENCE: [KeyCode; 10] = [
    KeyCode::Up,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Char('b'),
    KeyCode::Char('a'),
];

/// Tracks progress through the Konami sequence. Any wrong key resets
/// progress to the start.
#[derive(Debug, Default)]
pub struct KonamiTracker {
    index: usize,
}

impl KonamiTracker {
    /// Feed one key press. Returns true when the full sequence completes.
    pub fn press(&mut self, code: KeyCode) -> bool {
        if code == SEQUENCE[self.index] {
            self.index += 1;
            if self.index == SEQUENCE.len() {
                self.index = 0;
                return true;
            }
        } else {
            self.index = 0;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_sequence_completes() {
        let mut tracker = KonamiTracker::default();
        for (i, &code) in SEQUENCE.iter().enumerate() {
            let done = tracker.press(code);
            assert_eq!(done, i == SEQUENCE.len() - 1);
        }
        // And it can be performed again afterwards.
        for (i, &code) in SEQUENCE.iter().enumerate() {
            assert_eq!(tracker.press(code), i == SEQUENCE.len() - 1);
        }
    }

    #[test]
    fn wrong_key_resets_progress() {
        let mut tracker = KonamiTracker::default();
        assert!(!tracker.press(KeyCode::Up));
        assert!(!tracker.press(KeyCode::Up));
        assert!(!tracker.press(KeyCode::Char('x')));
        // Must replay from the very beginning.
        for &code in &SEQUENCE[..SEQUENCE.len() - 1] {
            assert!(!tracker.press(code));
        }
        assert!(tracker.press(SEQUENCE[SEQUENCE.len() - 1]));
    }

    #[test]
    fn unrelated_keys_never_complete_it() {
        let mut tracker = KonamiTracker::default();
        for _ in 0..100 {
            assert!(!tracker.press(KeyCode::Char('q')));
        }
    }
}
