mod display;

use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    style::{self, Color, Print},
    terminal,
    ExecutableCommand, QueueableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use xp_shooter::compute::{cycle_weapon, init_state, tick};
use xp_shooter::config::GameConfig;
use xp_shooter::entities::{GameState, GameStatus, InputState};
use xp_shooter::error::{GameError, Result};

use display::Viewport;

#[derive(Parser)]
#[command(name = "xp_shooter")]
#[command(about = "Pointer-driven arcade shooter for the terminal")]
struct Args {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Log file (overrides the config)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Target frame length in milliseconds
    #[arg(long)]
    frame_ms: Option<u64>,
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// Send tracing output to `path`; stdout belongs to the game screen.
fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| GameError::Logging(e.to_string()))
}

// ── Title screen ──────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

fn show_menu<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "★  XP  SHOOTER  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    let lines: &[(&str, Color)] = &[
        ("Shoot enemies to earn XP and level up.", Color::White),
        ("Weapon 2 unlocks at level 3, weapon 3 at 6,", Color::DarkGrey),
        ("the beam (weapon 4) at level 10, where the boss waits.", Color::DarkGrey),
        ("Each enemy that slips past costs 10 HP.", Color::DarkGrey),
    ];
    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = cy.saturating_sub(3) + i as u16;
        out.queue(cursor::MoveTo(cx.saturating_sub(msg.chars().count() as u16 / 2), row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    let prompt = "CLICK or ENTER : Start   Q : Quit";
    out.queue(cursor::MoveTo(cx.saturating_sub(prompt.chars().count() as u16 / 2), cy + 3))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(prompt))?;

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        match rx.recv() {
            Ok(Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. })) => match code {
                KeyCode::Enter | KeyCode::Char(' ') => return Ok(MenuResult::Start),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            },
            Ok(Event::Mouse(MouseEvent { kind: MouseEventKind::Down(MouseButton::Left), .. })) => {
                return Ok(MenuResult::Start);
            }
            Ok(_) => {}
            Err(_) => return Ok(MenuResult::Quit),
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → back to the title screen.
///
/// Input model: mouse motion and drag events move the pointer, the left
/// button's down/up events toggle the held-fire flag, and Tab cycles the
/// weapon. Each frame the accumulated input and the real elapsed time are
/// handed to `tick`.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    view: &Viewport,
    frame: Duration,
    rng: &mut StdRng,
) -> std::io::Result<bool> {
    let mut input = InputState { pointer: state.player.pos(), firing: false };
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. }) => {
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(true);
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(true);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R')
                            if state.status != GameStatus::Playing =>
                        {
                            return Ok(false);
                        }
                        KeyCode::Tab if state.status == GameStatus::Playing => {
                            *state = cycle_weapon(state);
                        }
                        _ => {}
                    }
                }
                Event::Mouse(MouseEvent { kind, column, row, .. }) => {
                    input.pointer = view.to_world(column, row);
                    match kind {
                        MouseEventKind::Down(MouseButton::Left) => input.firing = true,
                        MouseEventKind::Up(MouseButton::Left) => input.firing = false,
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let dt_ms = now.duration_since(last_tick).as_secs_f64() * 1000.0;
        last_tick = now;

        if state.status == GameStatus::Playing {
            *state = tick(state, &input, dt_ms, rng);
        }

        display::render(out, state, view)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            std::thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = GameConfig::load(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(path) = args.log_file {
        config.log_file = path;
    }
    if let Some(ms) = args.frame_ms {
        config.frame_ms = ms;
    }
    config.validate()?;
    init_logging(&config.log_file)?;
    tracing::info!(?config, "starting");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(EnableMouseCapture)?;
    out.execute(cursor::Hide)?;

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

    let result = run(&mut out, &rx, &config);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        tracing::error!(error = %e, "exiting on error");
    }
    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, config: &GameConfig) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let frame = Duration::from_millis(config.frame_ms);

    loop {
        match show_menu(out, rx)? {
            MenuResult::Quit => break,
            MenuResult::Start => {
                let (cols, rows) = terminal::size()?;
                let view = Viewport::new(cols, rows, config.cell_width, config.cell_height);
                let (width, height) = view.field_size();
                let mut state = init_state(width, height);
                tracing::info!(width, height, "game started");

                let quit = game_loop(out, &mut state, rx, &view, frame, &mut rng)?;
                tracing::info!(
                    status = ?state.status,
                    level = state.progression.level,
                    frames = state.frame,
                    "game ended"
                );
                if quit {
                    break;
                }
            }
        }
    }
    Ok(())
}
