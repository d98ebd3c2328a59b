//! Obstacle spawning, scrolling, culling and pass tracking

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Playfield, Rect};
use crate::consts::*;

/// A single pipe: one half of a gated pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    /// Set once the avatar has fully cleared this pipe
    pub passed: bool,
}

impl Obstacle {
    fn new(x: f32, y: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, PIPE_WIDTH, height),
            passed: false,
        }
    }
}

/// All live obstacles plus the spawn cadence
#[derive(Debug, Clone)]
pub struct ObstacleField {
    /// Live obstacles in spawn order (top before bottom within a pair)
    pub obstacles: Vec<Obstacle>,
    playfield: Playfield,
    /// Time accumulated toward the next spawn
    spawn_timer: Duration,
    rng: Pcg32,
}

impl ObstacleField {
    pub fn new(playfield: Playfield, seed: u64) -> Self {
        Self {
            obstacles: Vec::new(),
            playfield,
            spawn_timer: Duration::ZERO,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Feed elapsed time into the spawn cadence
    ///
    /// Spawns one gated pair each time the accumulator reaches
    /// `PIPE_FREQUENCY`. Returns true if a pair was spawned.
    pub fn try_spawn(&mut self, elapsed: Duration) -> bool {
        self.spawn_timer += elapsed;
        if self.spawn_timer < PIPE_FREQUENCY {
            return false;
        }
        self.spawn_timer -= PIPE_FREQUENCY;

        let max_center = self.playfield.height as i32 - GAP_CENTER_MARGIN;
        let gap_center = self.rng.random_range(GAP_CENTER_MARGIN..=max_center);
        self.spawn_pair(gap_center as f32);
        true
    }

    /// Spawn a top/bottom pair at the right edge around `gap_center`
    pub fn spawn_pair(&mut self, gap_center: f32) {
        let half_gap = PIPE_GAP / 2.0;
        let x = self.playfield.width;

        let top_height = gap_center - half_gap;
        let bottom_top = gap_center + half_gap;
        let bottom_height = self.playfield.height - bottom_top;

        log::debug!(
            "Spawned pair: gap center {} (top {}, bottom {})",
            gap_center,
            top_height,
            bottom_height
        );

        self.obstacles.push(Obstacle::new(x, 0.0, top_height));
        self.obstacles.push(Obstacle::new(x, bottom_top, bottom_height));
    }

    /// Scroll every obstacle left and drop the ones fully off-screen
    pub fn advance(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.rect.pos.x -= PIPE_SPEED;
        }

        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.rect.right() >= 0.0);
        let culled = before - self.obstacles.len();
        if culled > 0 {
            log::debug!("Culled {} obstacles", culled);
        }
    }

    /// Mark obstacles the avatar has cleared
    ///
    /// Returns how many obstacles became passed this call. Each obstacle
    /// counts at most once.
    pub fn update_scoring(&mut self, avatar_left: f32) -> u32 {
        let mut newly_passed = 0;
        for obstacle in self.obstacles.iter_mut().filter(|o| !o.passed) {
            if obstacle.rect.right() < avatar_left {
                obstacle.passed = true;
                newly_passed += 1;
            }
        }
        newly_passed
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    /// Rectangles of all live obstacles
    pub fn rects(&self) -> Vec<Rect> {
        self.obstacles.iter().map(|o| o.rect).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> ObstacleField {
        ObstacleField::new(Playfield::default(), 7)
    }

    #[test]
    fn test_pair_placement() {
        let mut field = field();
        field.spawn_pair(300.0);

        let top = field.obstacles[0].rect;
        let bottom = field.obstacles[1].rect;
        assert_eq!(top.top(), 0.0);
        assert_eq!(top.size.y, 200.0);
        assert_eq!(bottom.top(), 400.0);
        assert_eq!(bottom.size.y, 200.0);
        assert_eq!(bottom.bottom(), HEIGHT);
        assert_eq!(top.left(), WIDTH);
        assert_eq!(bottom.left(), WIDTH);
    }

    #[test]
    fn test_spawn_cadence() {
        let mut field = field();
        for _ in 0..89 {
            assert!(!field.try_spawn(SIM_DT));
        }
        assert!(field.obstacles.is_empty());

        assert!(field.try_spawn(SIM_DT));
        assert_eq!(field.obstacles.len(), 2);

        // Leftover time carries over, next pair after another ~1500 ms
        for _ in 0..89 {
            assert!(!field.try_spawn(SIM_DT));
        }
        assert!(field.try_spawn(SIM_DT));
        assert_eq!(field.obstacles.len(), 4);
    }

    #[test]
    fn test_cadence_independent_of_step_size() {
        let mut field = field();
        assert!(!field.try_spawn(Duration::from_millis(1000)));
        assert!(field.try_spawn(Duration::from_millis(500)));
        assert!(!field.try_spawn(Duration::from_millis(1499)));
        assert!(field.try_spawn(Duration::from_millis(1)));
    }

    #[test]
    fn test_cull_when_right_edge_negative() {
        let mut field = field();
        field.spawn_pair(300.0);

        // 115 steps of 4px: x = -60, right edge exactly 0, still alive
        for _ in 0..115 {
            field.advance();
        }
        assert_eq!(field.obstacles.len(), 2);
        assert_eq!(field.obstacles[0].rect.right(), 0.0);

        field.advance();
        assert!(field.obstacles.is_empty());
    }

    #[test]
    fn test_scoring_is_strict_and_once() {
        let mut field = field();
        field.spawn_pair(300.0);
        for o in &mut field.obstacles {
            o.rect.pos.x = 20.0; // right edge at 80
        }

        assert_eq!(field.update_scoring(80.0), 0);
        assert_eq!(field.update_scoring(80.5), 2);
        assert!(field.obstacles.iter().all(|o| o.passed));
        assert_eq!(field.update_scoring(80.5), 0);
        assert_eq!(field.update_scoring(200.0), 0);
    }

    #[test]
    fn test_seeded_spawns_repeat() {
        let mut a = ObstacleField::new(Playfield::default(), 42);
        let mut b = ObstacleField::new(Playfield::default(), 42);
        for _ in 0..10 {
            a.try_spawn(PIPE_FREQUENCY);
            b.try_spawn(PIPE_FREQUENCY);
        }
        assert_eq!(a.obstacles, b.obstacles);
    }

    proptest! {
        #[test]
        fn prop_pair_fills_playfield(gap_center in 150i32..=450) {
            let mut field = field();
            field.spawn_pair(gap_center as f32);
            let top = field.obstacles[0].rect;
            let bottom = field.obstacles[1].rect;
            prop_assert_eq!(top.size.y + PIPE_GAP + bottom.size.y, HEIGHT);
            prop_assert!(top.size.y >= 50.0);
            prop_assert!(bottom.size.y >= 50.0);
        }

        #[test]
        fn prop_random_gap_in_range(seed in any::<u64>()) {
            let mut field = ObstacleField::new(Playfield::default(), seed);
            field.try_spawn(PIPE_FREQUENCY);
            let top = field.obstacles[0].rect;
            let gap_center = top.size.y + PIPE_GAP / 2.0;
            prop_assert!((150.0..=450.0).contains(&gap_center));
            prop_assert_eq!(gap_center.fract(), 0.0);
        }
    }
}
