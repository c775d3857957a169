/// Fixed configuration constants.
///
/// The play-field bounds are established at startup and stay constant for
/// the whole run — clamping and collision math depends on them.  World
/// coordinates are abstract units, not terminal cells; the display layer
/// scales them down to whatever terminal it is drawing into.

// ── Play field ────────────────────────────────────────────────────────────────

pub const PLAY_WIDTH: f32 = 720.0;
pub const PLAY_HEIGHT: f32 = 480.0;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_W: f32 = 40.0;
pub const PLAYER_H: f32 = 14.0;
pub const PLAYER_SPEED: f32 = 5.0; // units per frame
/// Vertical offset of the ship centre above the bottom bound.
pub const PLAYER_Y_OFFSET: f32 = 50.0;
pub const INITIAL_LIVES: u32 = 3;

// ── Bullets ───────────────────────────────────────────────────────────────────

pub const BULLET_RADIUS: f32 = 4.0;
pub const BULLET_VELOCITY: f32 = -6.0; // negative = upward
/// Muzzle sits this far above the ship centre.
pub const MUZZLE_OFFSET: f32 = 10.0;
/// Bullets are dropped once they pass this far beyond the top bound,
/// rather than exactly at y = 0, to avoid flicker at the edge.
pub const BULLET_TOP_MARGIN: f32 = 10.0;
pub const FIRE_COOLDOWN: u32 = 10; // frames between shots

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const ENEMY_MIN_SIZE: f32 = 18.0;
pub const ENEMY_MAX_SIZE: f32 = 40.0;
pub const ENEMY_MIN_SPEED: f32 = 1.0; // units per frame
pub const ENEMY_MAX_SPEED: f32 = 3.2;
/// Horizontal spawn margin; keeps even the largest enemy fully inside
/// the play field (ENEMY_MAX_SIZE / 2 == 20).
pub const ENEMY_SPAWN_MARGIN: f32 = 20.0;
pub const KILL_REWARD: u32 = 10;

// ── Spawn cadence ─────────────────────────────────────────────────────────────

pub const INITIAL_SPAWN_INTERVAL: f32 = 60.0; // frames between spawns
/// Cadence tightens by this much after every spawn...
pub const SPAWN_INTERVAL_DECREMENT: f32 = 0.4;
/// ...but never below this floor.
pub const MIN_SPAWN_INTERVAL: f32 = 20.0;
