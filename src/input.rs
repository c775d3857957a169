/// Input sampling.
///
/// Key events arrive asynchronously, but the simulation wants one fixed
/// set of intents per frame.  `HeldKeys` absorbs raw crossterm key events
/// as they arrive; at each frame boundary the game loop asks it for an
/// `InputSnapshot`, which then stays constant for that frame's tick.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames (≈133 ms at
/// 30 FPS) is always refreshed before expiry.
const HOLD_WINDOW: u64 = 4;

// ── Per-frame intents ─────────────────────────────────────────────────────────

/// The three held intents the simulation reads each frame.  Pause, restart
/// and quit are edge-triggered and handled by the game loop directly, not
/// polled through the snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// Maps each held key → the frame it was last seen (press or repeat).
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire naturally after `HOLD_WINDOW` frames
///   of silence, which is shorter than the OS repeat interval, so a key
///   stays live while it is actively generating repeats.
#[derive(Debug, Default)]
pub struct HeldKeys {
    key_frame: HashMap<KeyCode, u64>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one key event in, stamped with the current frame number.
    pub fn observe(&mut self, event: &KeyEvent, frame: u64) {
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.key_frame.insert(event.code, frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&event.code);
            }
        }
    }

    /// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
    fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    /// Sample the three intents for this frame boundary.
    pub fn snapshot(&self, frame: u64) -> InputSnapshot {
        InputSnapshot {
            left: self.is_held(KeyCode::Left, frame)
                || self.is_held(KeyCode::Char('a'), frame)
                || self.is_held(KeyCode::Char('A'), frame),
            right: self.is_held(KeyCode::Right, frame)
                || self.is_held(KeyCode::Char('d'), frame)
                || self.is_held(KeyCode::Char('D'), frame),
            fire: self.is_held(KeyCode::Char(' '), frame)
                || self.is_held(KeyCode::Up, frame),
        }
    }
}
