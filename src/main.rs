mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::info;
use rand::thread_rng;

use shoot_survive::compute::{init_state, restart, tick, toggle_pause};
use shoot_survive::constants::{PLAY_HEIGHT, PLAY_WIDTH};
use shoot_survive::entities::RunStatus;
use shoot_survive::input::HeldKeys;

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One frame per iteration: drain pending key events, sample the input
/// snapshot, advance the simulation, render.  Pause and game over keep the
/// loop scheduled — their ticks are just no-ops.  Returns when the player
/// quits.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut held = HeldKeys::new();
    let mut state = init_state(PLAY_WIDTH, PLAY_HEIGHT);
    let mut frame: u64 = 0;

    info!(
        "run started ({}x{} field, {}x{} terminal)",
        PLAY_WIDTH, PLAY_HEIGHT, cols, rows
    );

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(ev)) = rx.try_recv() {
            if ev.kind == KeyEventKind::Press {
                match ev.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        info!("quit at frame {} with score {}", frame, state.score);
                        return Ok(());
                    }
                    KeyCode::Char('c') if ev.modifiers.contains(KeyModifiers::CONTROL) => {
                        info!("quit (ctrl-c) at frame {}", frame);
                        return Ok(());
                    }
                    KeyCode::Char('p') | KeyCode::Char('P') => {
                        state = toggle_pause(&state);
                    }
                    KeyCode::Char('r') | KeyCode::Char('R')
                        if state.status == RunStatus::GameOver =>
                    {
                        info!("restart requested (previous score {})", state.score);
                        state = restart(&state);
                    }
                    _ => {}
                }
            }
            held.observe(&ev, frame);
        }

        // ── Sample intents once, advance, render ──────────────────────────────
        let input = held.snapshot(frame);
        let (next, effects) = tick(&state, &input, &mut rng);
        state = next;

        if let Some(final_score) = effects.game_over {
            info!("game over at frame {}: final score {}", frame, final_score);
        }

        display::render(out, &state, cols, rows)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let _ = simple_logging::log_to_file("shoot_survive.log", log::LevelFilter::Info);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back
    // to the hold-window expiry in HeldKeys.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let (cols, rows) = terminal::size()?;
    let result = game_loop(&mut out, &rx, cols, rows);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
