//! Fixed timestep simulation tick
//!
//! Core round loop that advances the simulation deterministically.

use std::time::Duration;

use super::collision::is_game_over;
use super::state::{GameEvent, RenderSnapshot, RoundPhase, RoundState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap (space)
    pub jump: bool,
    /// Leave the game right now
    pub quit: bool,
}

/// What the shell should do after a tick
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Round continues; draw this
    Running(RenderSnapshot),
    /// Round is over with the truncated final score
    Ended { final_score: u32 },
    /// Quit requested; nothing was simulated
    Quit,
}

/// Advance the round by one fixed step
///
/// `elapsed` feeds the obstacle spawn cadence only. Physics constants are
/// per tick.
pub fn tick(state: &mut RoundState, input: &TickInput, elapsed: Duration) -> TickOutcome {
    if input.quit {
        return TickOutcome::Quit;
    }

    // Ended is terminal
    if state.phase == RoundPhase::Ended {
        return TickOutcome::Ended {
            final_score: state.display_score(),
        };
    }

    state.time_ticks += 1;

    if input.jump {
        state.avatar.jump();
        state.events.push(GameEvent::Jumped);
    }

    state.avatar.integrate();
    state.avatar.animate();

    state.field.try_spawn(elapsed);
    state.field.advance();

    let bounds = state.avatar.bounds();
    if is_game_over(&bounds, &state.field.obstacles, state.field.playfield()) {
        state.phase = RoundPhase::Ended;
        state.events.push(GameEvent::Crashed);
        let final_score = state.display_score();
        log::info!(
            "Round over after {} ticks, score {}",
            state.time_ticks,
            final_score
        );
        return TickOutcome::Ended { final_score };
    }

    let cleared = state.field.update_scoring(bounds.left());
    if cleared > 0 {
        state.passed_obstacles += cleared;
        state.events.push(GameEvent::Scored { obstacles: cleared });
    }

    TickOutcome::Running(state.snapshot())
}
