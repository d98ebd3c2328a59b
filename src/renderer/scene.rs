//! Screen composition: round view, start menu and game-over screen

use glam::Vec2;

use super::{DrawCommand, Palette, shapes};
use crate::consts::{HEIGHT, WIDTH};
use crate::sim::RenderSnapshot;

fn text(text: impl Into<String>, y: f32, size: f32, palette: &Palette) -> DrawCommand {
    DrawCommand::Text {
        text: text.into(),
        center: Vec2::new(WIDTH / 2.0, y),
        size,
        color: palette.text,
    }
}

/// In-round frame: sky, pipes, avatar, score HUD
pub fn round(snapshot: &RenderSnapshot, palette: &Palette, fps: Option<u32>) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(snapshot.obstacles.len() + 8);
    commands.push(DrawCommand::Clear(palette.sky));
    commands.extend(snapshot.obstacles.iter().map(|rect| DrawCommand::FillRect {
        rect: *rect,
        color: palette.pipe,
    }));
    commands.extend(shapes::avatar(&snapshot.avatar, palette));
    commands.push(text(format!("Score: {}", snapshot.score), 30.0, 32.0, palette));

    if let Some(fps) = fps {
        commands.push(DrawCommand::Text {
            text: format!("FPS {}", fps),
            center: Vec2::new(40.0, HEIGHT - 20.0),
            size: 16.0,
            color: palette.text,
        });
    }
    commands
}

pub fn start_menu(palette: &Palette) -> Vec<DrawCommand> {
    vec![
        DrawCommand::Clear(palette.sky),
        text("Flappy Bird", HEIGHT / 2.0 - 50.0, 48.0, palette),
        text("Press SPACE to Start", HEIGHT / 2.0 + 20.0, 28.0, palette),
    ]
}

pub fn game_over(score: u32, high_score: u32, palette: &Palette) -> Vec<DrawCommand> {
    let mut commands = vec![
        DrawCommand::Clear(palette.sky),
        text("Game Over", HEIGHT / 2.0 - 60.0, 40.0, palette),
        text(format!("Score: {}", score), HEIGHT / 2.0 - 20.0, 32.0, palette),
        text(format!("High Score: {}", high_score), HEIGHT / 2.0 + 20.0, 28.0, palette),
        text("Press R to Restart", HEIGHT / 2.0 + 70.0, 26.0, palette),
    ];
    commands.extend(shapes::restart_icon(
        Vec2::new(WIDTH / 2.0, HEIGHT / 2.0 + 130.0),
        palette.text,
    ));
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::RoundState;

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_round_draws_pipes_and_score() {
        let mut state = RoundState::new(3);
        state.field.spawn_pair(250.0);
        state.passed_obstacles = 5;

        let commands = round(&state.snapshot(), &Palette::standard(), None);
        assert_eq!(commands[0], DrawCommand::Clear(Palette::standard().sky));
        let pipes = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count();
        assert_eq!(pipes, 2);
        assert_eq!(texts(&commands), vec!["Score: 2"]);
    }

    #[test]
    fn test_round_fps_readout() {
        let state = RoundState::new(3);
        let commands = round(&state.snapshot(), &Palette::standard(), Some(60));
        assert_eq!(texts(&commands), vec!["Score: 0", "FPS 60"]);
    }

    #[test]
    fn test_game_over_text() {
        let commands = game_over(7, 12, &Palette::standard());
        assert_eq!(
            texts(&commands),
            vec!["Game Over", "Score: 7", "High Score: 12", "Press R to Restart"]
        );
        assert!(commands.iter().any(|c| matches!(c, DrawCommand::Ring { .. })));
    }

    #[test]
    fn test_start_menu_prompt() {
        let commands = start_menu(&Palette::high_contrast());
        assert_eq!(texts(&commands), vec!["Flappy Bird", "Press SPACE to Start"]);
    }
}
