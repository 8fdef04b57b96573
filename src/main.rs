use anyhow::{Context, Result};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use flappy::constants::TICK_INTERVAL_MS;
use flappy::game::{Flow, GameState};
use flappy::game_loop::{run_frame, FrameClock};
use flappy::{build_info, input, ui};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Restores the terminal when dropped, including on early return.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)
            .context("failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    let _ = disable_raw_mode();
}

fn print_help() {
    println!("Flappy Bird - terminal edition\n");
    println!("Usage: flappy [option]\n");
    println!("Options:");
    println!("  --version  Show version information");
    println!("  --help     Show this help message\n");
    println!("Controls:");
    println!("  Space / Up / Enter  Start, flap, retry");
    println!("  Esc / q / Ctrl+C    Quit");
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'flappy --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    log::info!("{} starting", build_info::version_line());

    // Leave the alternate screen before the panic message is printed
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));

    let state = run()?;

    log::info!("exiting after {} episode(s)", state.episode);
    if state.episode > 0 {
        println!("Thanks for playing! Last score: {}", state.score);
    } else {
        println!("Goodbye!");
    }
    Ok(())
}

/// Run the frame loop until the player quits. Returns the final state.
fn run() -> Result<GameState> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("failed to create terminal")?;

    let mut state = GameState::default();
    let mut rng = rand::thread_rng();
    let mut clock = FrameClock::default();
    let tick = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_frame = Instant::now();

    loop {
        terminal
            .draw(|frame| ui::draw(frame, &state))
            .context("failed to draw frame")?;

        // Waiting out the rest of the tick here is what caps the frame rate
        let budget = tick.saturating_sub(last_frame.elapsed());
        let events = input::drain_events(budget).context("failed to read terminal input")?;

        let now = Instant::now();
        let dt_ms = now.duration_since(last_frame).as_millis() as u64;
        last_frame = now;

        let steps = clock.steps(dt_ms);
        if run_frame(&mut state, &events, steps, &mut rng) == Flow::Quit {
            break;
        }
    }

    Ok(state)
}
