/// The stream of pipes scrolling toward the duck.
///
/// `PipeStream` is the only owner of the pipe collection. Pipes are kept in
/// spawn order; removal always goes through a predicate, never an index.

use rand::Rng;

use crate::config::{DifficultyProfile, GameConfig};
use crate::entities::{Duck, Pipe};

/// Outcome of testing every live pipe against the duck for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassReport {
    pub collided: bool,
    /// Pipes passed for the first time this tick.
    pub scored: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PipeStream {
    pipes: Vec<Pipe>,
}

impl PipeStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    pub fn push(&mut self, pipe: Pipe) {
        self.pipes.push(pipe);
    }

    /// Spawns one pipe at the right edge when `tick` lands on the profile's
    /// cadence. Returns whether a pipe was spawned.
    pub fn maybe_spawn(
        &mut self,
        tick: u64,
        profile: &DifficultyProfile,
        config: &GameConfig,
        rng: &mut impl Rng,
    ) -> bool {
        if tick % profile.pipe_frequency != 0 {
            return false;
        }
        let (lo, hi) = config.gap_offset_range(profile);
        let gap_y = rng.gen_range(lo..=hi) as f32;
        log::debug!("tick {tick}: pipe spawned with gap at {gap_y}");
        self.pipes
            .push(Pipe::new(config.screen_width, profile.pipe_gap, gap_y));
        true
    }

    pub fn advance_all(&mut self, speed: f32) {
        for pipe in &mut self.pipes {
            pipe.update(speed);
        }
    }

    /// Drops every pipe whose trailing edge has left the screen. Returns how
    /// many were removed.
    pub fn prune_off_screen(&mut self) -> usize {
        let before = self.pipes.len();
        self.pipes.retain(|p| !p.is_off_screen());
        before - self.pipes.len()
    }

    /// Checks each pipe for a hit and for a first-time pass. A pass is
    /// counted when the trailing edge is strictly left of the duck's x.
    pub fn test_collisions_and_scoring(&mut self, duck: &Duck, screen_height: f32) -> PassReport {
        let mut report = PassReport::default();
        for pipe in &mut self.pipes {
            if pipe.collides_with(duck, screen_height) {
                report.collided = true;
            }
            if !pipe.passed && pipe.trailing_edge() < duck.x {
                pipe.passed = true;
                report.scored += 1;
            }
        }
        report
    }
}
