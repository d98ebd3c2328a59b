//! Skyflap entry point
//!
//! Loads settings, takes over the terminal and runs the shell loop.

use std::io::stdout;
use std::process::ExitCode;

use skyflap::audio::AudioManager;
use skyflap::consts::TICK_RATE;
use skyflap::platform::{FixedRateClock, TerminalPlatform};
use skyflap::shell::Shell;
use skyflap::{Settings, ShellError};

fn run() -> Result<(), ShellError> {
    let settings = Settings::load()?;
    let audio = AudioManager::new(stdout(), &settings);
    let platform = TerminalPlatform::enter()?;
    let clock = FixedRateClock::new(TICK_RATE);

    let mut shell = Shell::new(platform, audio, clock, settings);
    shell.run()?;

    let scores = shell.high_scores();
    log::info!(
        "Session over: {} rounds, best {}",
        scores.rounds_played(),
        scores.best()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Skyflap starting...");

    // The terminal is restored when the shell (and its platform) drops
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("skyflap: {}", e);
            ExitCode::FAILURE
        }
    }
}
