/// Pure simulation functions.
///
/// Every public function takes an immutable reference to the current
/// `RunState` (and, where needed, an RNG handle and the frame's
/// `InputSnapshot`) and returns a brand-new `RunState`.  Side effects are
/// limited to the injected RNG; `tick` additionally reports the frame's
/// observable outcomes as a `FrameEffects` value.

use rand::Rng;

use crate::constants::{
    BULLET_RADIUS, BULLET_TOP_MARGIN, BULLET_VELOCITY, ENEMY_MAX_SIZE, ENEMY_MAX_SPEED,
    ENEMY_MIN_SIZE, ENEMY_MIN_SPEED, ENEMY_SPAWN_MARGIN, FIRE_COOLDOWN, INITIAL_LIVES,
    INITIAL_SPAWN_INTERVAL, KILL_REWARD, MIN_SPAWN_INTERVAL, MUZZLE_OFFSET, PLAYER_H,
    PLAYER_SPEED, PLAYER_W, PLAYER_Y_OFFSET, SPAWN_INTERVAL_DECREMENT,
};
use crate::entities::{Bullet, Enemy, FrameEffects, Player, RunState, RunStatus};
use crate::input::InputSnapshot;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial run state for the given play-field bounds.  The
/// bounds are fixed for the lifetime of the run.
pub fn init_state(width: f32, height: f32) -> RunState {
    RunState {
        player: Player {
            x: width / 2.0,
            y: height - PLAYER_Y_OFFSET,
            w: PLAYER_W,
            h: PLAYER_H,
            speed: PLAYER_SPEED,
            cooldown: 0,
        },
        bullets: Vec::new(),
        enemies: Vec::new(),
        score: 0,
        lives: INITIAL_LIVES,
        status: RunStatus::Running,
        spawn_timer: 0,
        spawn_interval: INITIAL_SPAWN_INTERVAL,
        frame: 0,
        width,
        height,
    }
}

/// Re-initialize the run, keeping the play-field bounds.
pub fn restart(state: &RunState) -> RunState {
    init_state(state.width, state.height)
}

// ── Control transitions (pure) ───────────────────────────────────────────────

/// Running ⇄ Paused.  A no-op on GameOver — a dead run can only be
/// revived through `restart`.
pub fn toggle_pause(state: &RunState) -> RunState {
    let status = match state.status {
        RunStatus::Running => RunStatus::Paused,
        RunStatus::Paused => RunStatus::Running,
        RunStatus::GameOver => RunStatus::GameOver,
    };
    RunState {
        status,
        ..state.clone()
    }
}

// ── Collision test ───────────────────────────────────────────────────────────

/// Bullet-centre-inside-enemy-box test.  Boxes are centre-anchored, so an
/// enemy at (x, y) spans x ± w/2 horizontally and y ± h/2 vertically.
pub fn overlaps(bullet: &Bullet, enemy: &Enemy) -> bool {
    bullet.x > enemy.x - enemy.w / 2.0
        && bullet.x < enemy.x + enemy.w / 2.0
        && bullet.y > enemy.y - enemy.h / 2.0
        && bullet.y < enemy.y + enemy.h / 2.0
}

// ── Spawning ─────────────────────────────────────────────────────────────────

/// One enemy at a uniformly random x (fully inside the horizontal bounds),
/// just above the visible area, with random size and descent speed.
pub fn spawn_enemy(width: f32, rng: &mut impl Rng) -> Enemy {
    let size = rng.gen_range(ENEMY_MIN_SIZE..ENEMY_MAX_SIZE);
    Enemy {
        x: rng.gen_range(ENEMY_SPAWN_MARGIN..(width - ENEMY_SPAWN_MARGIN)),
        y: -size,
        w: size,
        h: size,
        speed: rng.gen_range(ENEMY_MIN_SPEED..ENEMY_MAX_SPEED),
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ───────────────────────────

/// Advance the simulation by one frame.
///
/// Input intents are sampled by the caller at the frame boundary and held
/// fixed for the whole step.  All randomness comes through `rng` so callers
/// control determinism (tests use a seeded RNG).  While paused or after
/// game over this is a no-op: the state comes back unchanged and the
/// effects are empty.
pub fn tick(
    state: &RunState,
    input: &InputSnapshot,
    rng: &mut impl Rng,
) -> (RunState, FrameEffects) {
    if state.status != RunStatus::Running {
        return (state.clone(), FrameEffects::default());
    }
    let frame = state.frame + 1;

    // ── 1. Player motion, clamped to the field ───────────────────────────────
    let mut px = state.player.x;
    if input.left {
        px -= state.player.speed;
    }
    if input.right {
        px += state.player.speed;
    }
    let half_w = state.player.w / 2.0;
    let px = px.clamp(half_w, state.width - half_w);

    // ── 2. Fire control ──────────────────────────────────────────────────────
    // The cooldown decrements before the fire check, so a held trigger
    // fires again on the exact frame the counter reaches zero.
    let mut cooldown = state.player.cooldown.saturating_sub(1);
    let mut bullets = state.bullets.clone();
    if input.fire && cooldown == 0 {
        bullets.push(Bullet {
            x: px,
            y: state.player.y - MUZZLE_OFFSET,
            r: BULLET_RADIUS,
            vy: BULLET_VELOCITY,
        });
        cooldown = FIRE_COOLDOWN;
    }

    // ── 3. Bullet advance ────────────────────────────────────────────────────
    // A bullet fired this frame moves this frame too.  Bullets are dropped
    // a margin past the top bound, not exactly at it.
    let bullets: Vec<Bullet> = bullets
        .into_iter()
        .filter_map(|b| {
            let y = b.y + b.vy;
            if y < -BULLET_TOP_MARGIN {
                None
            } else {
                Some(Bullet { y, ..b })
            }
        })
        .collect();

    // ── 4. Spawn control (counter-threshold policy) ──────────────────────────
    let mut enemies = state.enemies.clone();
    let mut spawn_timer = state.spawn_timer + 1;
    let mut spawn_interval = state.spawn_interval;
    if spawn_timer as f32 >= spawn_interval {
        spawn_timer = 0;
        enemies.push(spawn_enemy(state.width, rng));
        spawn_interval = (spawn_interval - SPAWN_INTERVAL_DECREMENT).max(MIN_SPAWN_INTERVAL);
    }

    // ── 5. Enemy advance & collision resolution ──────────────────────────────
    let enemies: Vec<Enemy> = enemies
        .into_iter()
        .map(|e| Enemy { y: e.y + e.speed, ..e })
        .collect();

    // First-found-in-iteration-order wins; an enemy dies at most once per
    // frame and a bullet is consumed by at most one enemy.
    let mut killed: Vec<usize> = Vec::new();
    let mut spent: Vec<usize> = Vec::new();
    for (ei, enemy) in enemies.iter().enumerate() {
        for (bi, bullet) in bullets.iter().enumerate() {
            if !spent.contains(&bi) && overlaps(bullet, enemy) {
                killed.push(ei);
                spent.push(bi);
                break;
            }
        }
    }
    let score_delta = KILL_REWARD * killed.len() as u32;

    // Removal by membership over the pre-removal vectors — same-frame
    // multiple removals cannot skip or double-count elements.
    let enemies: Vec<Enemy> = enemies
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !killed.contains(i))
        .map(|(_, e)| e)
        .collect();
    let bullets: Vec<Bullet> = bullets
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !spent.contains(i))
        .map(|(_, b)| b)
        .collect();

    // ── 6. Breach detection ──────────────────────────────────────────────────
    let breached = enemies
        .iter()
        .filter(|e| e.y > state.height + e.h)
        .count() as u32;
    let enemies: Vec<Enemy> = enemies
        .into_iter()
        .filter(|e| e.y <= state.height + e.h)
        .collect();

    let lives = state.lives.saturating_sub(breached);
    let lives_lost = state.lives - lives;
    let score = state.score + score_delta;

    // ── 7. Status & effects ──────────────────────────────────────────────────
    // `lives > 0` held on entry (Running implies a live run), so reaching
    // zero here is exactly the once-per-run transition.
    let status = if lives == 0 {
        RunStatus::GameOver
    } else {
        RunStatus::Running
    };
    let effects = FrameEffects {
        score_delta,
        lives_lost,
        game_over: if status == RunStatus::GameOver {
            Some(score)
        } else {
            None
        },
    };

    let player = Player {
        x: px,
        cooldown,
        ..state.player.clone()
    };
    let next = RunState {
        player,
        bullets,
        enemies,
        score,
        lives,
        status,
        spawn_timer,
        spawn_interval,
        frame,
        width: state.width,
        height: state.height,
    };
    (next, effects)
}
