use std::io::Write;

use anyhow::Context;
use libgame::{Game, board::GameBoard, rule::Rule};
use log::debug;
use rand::Rng;

use crate::{
    config::SimulationConfig,
    renderer::{self, FrameStatus, sleeper::Sleeper},
};

/// Drives a game through a fixed number of generations, writing one frame per tick.
pub struct Ticker {
    pub game: Game,
    config: SimulationConfig,
    sleeper: Sleeper,
}

impl Ticker {
    pub fn new<R>(config: SimulationConfig, rng: &mut R) -> anyhow::Result<Self>
    where
        R: Rng + ?Sized,
    {
        config.validate().context("Invalid simulation config")?;

        let board = GameBoard::new_random(config.width, config.height, config.alive_chance, rng);
        debug!("Initial board has {} live tiles", board.alive_count());

        Ok(Self {
            game: Game::new(board, Rule::default()),
            sleeper: Sleeper::new(config.frame_delay()),
            config,
        })
    }

    pub fn run<W>(&mut self, out: &mut W, clear_screen: bool) -> anyhow::Result<()>
    where
        W: Write,
    {
        self.sleeper.start();

        for generation in 0..self.config.generations {
            self.game.tick();
            debug!(
                "Generation {generation}: {} live tiles",
                self.game.board.alive_count()
            );

            let status = FrameStatus {
                generation,
                total: self.config.generations,
            };

            renderer::write_frame(
                out,
                &self.game.board,
                self.config.glyphs(),
                status,
                clear_screen,
            )
            .with_context(|| format!("Writing frame for generation {generation}"))?;

            if !self.sleeper.sleep() {
                debug!("Generation {generation} overran the frame delay");
            }
        }

        Ok(())
    }
}
