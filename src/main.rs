mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal,
    ExecutableCommand, QueueableCommand,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use spacewar::config::TICK_MILLIS;
use spacewar::{apply_command, init_state, tick, Command, GameEvent, GameState, GameStatus, SimConfig};

const FRAME: Duration = Duration::from_millis(TICK_MILLIS);

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// 7 frames @ 20 ms ≈ 140 ms, longer than the OS key-repeat interval.
const HOLD_WINDOW: u64 = 7;

#[derive(Parser, Debug)]
#[command(name = "spacewar", about = "Terminal arcade shooter")]
struct Args {
    /// RNG seed; a random one is chosen (and logged) when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding simulation parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write log output to this file (the terminal is used for the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|key| {
        key_frame
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    })
}

fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    SimConfig::from_json_str(&text)
        .with_context(|| format!("invalid config {}", path.display()))
}

// ── Title screen ──────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

fn show_menu<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let lines: &[(&str, Color)] = &[
        ("★  S P A C E W A R  ★", Color::Cyan),
        ("", Color::White),
        ("Clear waves, collect the ★ to face the bosses,", Color::White),
        ("grab ♥ for an extra life.", Color::White),
        ("", Color::White),
        ("ENTER : Start    Q : Quit", Color::DarkGrey),
    ];
    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = cy.saturating_sub(3) + i as u16;
        out.queue(cursor::MoveTo(
            cx.saturating_sub(msg.chars().count() as u16 / 2),
            row,
        ))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        if let Ok(Event::Key(KeyEvent { code, kind, .. })) = rx.recv() {
            if kind == KeyEventKind::Release {
                continue;
            }
            match code {
                KeyCode::Enter | KeyCode::Char(' ') => return Ok(MenuResult::Start),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            }
        } else {
            return Ok(MenuResult::Quit);
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Hand the simulation's events to the (absent) audio collaborator.
fn dispatch(events: Vec<GameEvent>) {
    for event in events {
        match event {
            GameEvent::GameOver { final_score } => {
                log::info!("final score {}", final_score);
            }
            sound => log::debug!("sfx: {:?}", sound),
        }
    }
}

/// Returns `true` → quit program,  `false` → back to the title screen.
///
/// Input model: a `key_frame` map records the frame of the last
/// press/repeat event per key.  Each frame the held state of every direction
/// is recomputed and a `MoveX(bool)` command is sent only when it changes.
/// Fire is edge-triggered on the press event; repeats do not fire.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
) -> Result<bool> {
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut held = [false; 4];
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(true);
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(true);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R')
                            if state.status == GameStatus::GameOver =>
                        {
                            return Ok(false);
                        }
                        KeyCode::Char(' ') => {
                            let (next, events) = apply_command(state, Command::Fire);
                            *state = next;
                            dispatch(events);
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Translate held keys into movement intents ─────────────────────────
        let now = [
            is_held(&key_frame, &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')], frame),
            is_held(&key_frame, &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')], frame),
            is_held(&key_frame, &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')], frame),
            is_held(&key_frame, &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')], frame),
        ];
        let commands = [
            Command::MoveLeft(now[0]),
            Command::MoveRight(now[1]),
            Command::MoveUp(now[2]),
            Command::MoveDown(now[3]),
        ];
        for (i, command) in commands.into_iter().enumerate() {
            if now[i] != held[i] {
                let (next, events) = apply_command(state, command);
                *state = next;
                dispatch(events);
                held[i] = now[i];
            }
        }

        if state.status == GameStatus::Playing {
            let (next, events) = tick(state, rng);
            *state = next;
            dispatch(events);
        }

        display::render(out, state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;
    let config = load_config(args.config.as_ref())?;

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("spacewar starting with seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx, &config, &mut rng);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &SimConfig,
    rng: &mut StdRng,
) -> Result<()> {
    loop {
        match show_menu(out, rx)? {
            MenuResult::Quit => break,
            MenuResult::Start => {
                let mut state = init_state(config.clone(), rng);
                let quit = game_loop(out, &mut state, rx, rng)?;
                log::info!(
                    "session ended: score {} level {} wave {}",
                    state.score,
                    state.level,
                    state.wave_number
                );
                if quit {
                    break;
                }
            }
        }
    }
    Ok(())
}
