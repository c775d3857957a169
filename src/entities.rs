/// All game entity types — pure data, no logic.

// ── Run status ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum RunStatus {
    Running,
    Paused,
    GameOver,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A player shot travelling straight up.  Positions are play-field units
/// (centre-anchored), not terminal cells.
#[derive(Clone, Debug)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    /// Vertical velocity per frame; negative moves toward the top bound.
    pub vy: f32,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    /// Centre of the ship's bounding box.
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Horizontal movement per frame while a direction intent is held.
    pub speed: f32,
    /// Frames remaining before the next shot is allowed.
    pub cooldown: u32,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    /// Centre of the enemy's bounding box.
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Descent per frame.
    pub speed: f32,
}

// ── Master run state ──────────────────────────────────────────────────────────

/// The entire state of one run.  Cloneable so pure update functions can
/// return a new copy without mutating the original; the renderer and HUD
/// only ever read it.
#[derive(Clone, Debug)]
pub struct RunState {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    /// Only ever increases during a run.
    pub score: u32,
    /// Only ever decreases during a run; 0 is terminal.
    pub lives: u32,
    pub status: RunStatus,
    /// Frames since the last enemy spawn.
    pub spawn_timer: u32,
    /// Current spawn cadence in frames; tightens over the run, never
    /// below the configured floor.
    pub spawn_interval: f32,
    pub frame: u64,
    pub width: f32,
    pub height: f32,
}

// ── Per-frame effects ─────────────────────────────────────────────────────────

/// Observable outcomes of a single tick, for the HUD and logging.
/// `game_over` carries the final score and is emitted exactly once per
/// run, on the Running → GameOver transition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameEffects {
    pub score_delta: u32,
    pub lives_lost: u32,
    pub game_over: Option<u32>,
}

impl FrameEffects {
    pub fn is_empty(&self) -> bool {
        self.score_delta == 0 && self.lives_lost == 0 && self.game_over.is_none()
    }
}
