use std::collections::HashSet;

use super::types::{InputEvent, Key};

/// Current keyboard state for the surface.
///
/// Backs the point-in-time `is_key_down` poll, which is independent of the
/// per-frame event drain and safe to call any number of times per frame.
#[derive(Debug, Default)]
pub struct InputState {
    keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies one translated platform event.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                if !*f {
                    // On focus loss, clear the down-set. Avoids stuck keys
                    // when focus changes mid-press.
                    self.keys_down.clear();
                }
            }
            InputEvent::Key { key, pressed, .. } => {
                if *pressed {
                    self.keys_down.insert(*key);
                } else {
                    self.keys_down.remove(key);
                }
            }
            InputEvent::CloseRequested | InputEvent::Resized { .. } => {}
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_track_down_set() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::Key { key: Key::W, pressed: true, repeat: false });
        assert!(s.key_down(Key::W));
        s.apply_event(&InputEvent::Key { key: Key::W, pressed: false, repeat: false });
        assert!(!s.key_down(Key::W));
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::Focused(true));
        s.apply_event(&InputEvent::Key { key: Key::Space, pressed: true, repeat: false });
        s.apply_event(&InputEvent::Focused(false));
        assert!(!s.key_down(Key::Space));
    }
}
