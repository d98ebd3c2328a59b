//! Presentation shell
//!
//! Owns everything that outlives a round: settings, palette, the session
//! leaderboard and the seed stream. Runs the screens in an explicit loop:
//! start menu, then round / game-over / restart until the player quits.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::audio::SoundEffect;
use crate::consts::SIM_DT;
use crate::error::ShellError;
use crate::highscores::HighScores;
use crate::platform::{AudioCue, Clock, InputEvent, InputSource, Renderer};
use crate::renderer::{DrawCommand, Palette, scene};
use crate::settings::Settings;
use crate::sim::{GameEvent, RoundState, TickInput, TickOutcome, tick};

/// Frames averaged for the FPS readout
const FPS_WINDOW: usize = 60;

/// Rolling frames-per-second estimate
#[derive(Debug)]
struct FpsCounter {
    frame_times: [Duration; FPS_WINDOW],
    frame_index: usize,
    filled: usize,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            frame_times: [Duration::ZERO; FPS_WINDOW],
            frame_index: 0,
            filled: 0,
        }
    }

    fn record(&mut self, frame: Duration) {
        self.frame_times[self.frame_index] = frame;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.filled = (self.filled + 1).min(FPS_WINDOW);
    }

    fn fps(&self) -> u32 {
        let total: Duration = self.frame_times[..self.filled].iter().sum();
        if total.is_zero() {
            return 0;
        }
        (self.filled as f64 / total.as_secs_f64()).round() as u32
    }
}

/// Fold one tick's worth of events into simulation input
pub fn tick_input(events: &[InputEvent]) -> TickInput {
    TickInput {
        jump: events.contains(&InputEvent::Jump),
        quit: events.contains(&InputEvent::Quit),
    }
}

/// The game around the simulation
pub struct Shell<P, A, C>
where
    P: InputSource + Renderer,
    A: AudioCue,
    C: Clock,
{
    platform: P,
    audio: A,
    clock: C,
    settings: Settings,
    palette: Palette,
    high_scores: HighScores,
    seeds: Pcg32,
    fps: FpsCounter,
}

impl<P, A, C> Shell<P, A, C>
where
    P: InputSource + Renderer,
    A: AudioCue,
    C: Clock,
{
    pub fn new(platform: P, audio: A, clock: C, settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Session seed: {}", seed);
        Self {
            platform,
            audio,
            clock,
            palette: Palette::for_settings(settings.high_contrast),
            settings,
            high_scores: HighScores::new(),
            seeds: Pcg32::seed_from_u64(seed),
            fps: FpsCounter::new(),
        }
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Run until the player quits
    pub fn run(&mut self) -> Result<(), ShellError> {
        let menu = scene::start_menu(&self.palette);
        if !self.wait_for(&menu, InputEvent::Jump)? {
            return Ok(());
        }

        loop {
            let Some(score) = self.play_round()? else {
                return Ok(());
            };

            let screen = scene::game_over(score, self.high_scores.best(), &self.palette);
            if !self.wait_for(&screen, InputEvent::Restart)? {
                return Ok(());
            }
        }
    }

    /// Show a static screen until `wanted` arrives
    ///
    /// Returns false if the player quit instead.
    fn wait_for(&mut self, screen: &[DrawCommand], wanted: InputEvent) -> Result<bool, ShellError> {
        loop {
            self.platform.present(screen)?;
            let events = self.platform.poll()?;
            if events.contains(&InputEvent::Quit) {
                log::info!("Quit requested");
                return Ok(false);
            }
            if events.contains(&wanted) {
                return Ok(true);
            }
            self.clock.wait_for_next_tick();
        }
    }

    /// Play one round; None if the player quit mid-round
    fn play_round(&mut self) -> Result<Option<u32>, ShellError> {
        let seed = self.seeds.random::<u64>();
        let mut state = RoundState::new(seed);
        log::info!(
            "Round {} starting (seed {})",
            self.high_scores.rounds_played() + 1,
            seed
        );
        self.audio.set_music(true);

        loop {
            let frame = self.clock.wait_for_next_tick();
            self.fps.record(frame);

            let events = self.platform.poll()?;
            let outcome = tick(&mut state, &tick_input(&events), SIM_DT);
            for event in state.drain_events() {
                self.play_event(event);
            }

            match outcome {
                TickOutcome::Running(snapshot) => {
                    let fps = self.settings.show_fps.then(|| self.fps.fps());
                    self.platform
                        .present(&scene::round(&snapshot, &self.palette, fps))?;
                }
                TickOutcome::Ended { final_score } => {
                    self.audio.set_music(false);
                    if self.high_scores.record(final_score, state.time_ticks) {
                        self.audio.play(SoundEffect::HighScore);
                    }
                    return Ok(Some(final_score));
                }
                TickOutcome::Quit => {
                    self.audio.set_music(false);
                    log::info!("Quit requested mid-round");
                    return Ok(None);
                }
            }
        }
    }

    fn play_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Jumped => self.audio.play(SoundEffect::Jump),
            GameEvent::Scored { .. } => self.audio.play(SoundEffect::Score),
            GameEvent::Crashed => self.audio.play(SoundEffect::GameOver),
        }
    }
}
