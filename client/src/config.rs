use std::time::Duration;

use anyhow::bail;
use serde::Serialize;

use crate::renderer::Glyphs;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    pub generations: usize,
    pub frame_delay_millis: u64,
    pub alive_chance: f64, // Probability of each tile starting alive.
    pub alive_glyph: char,
    pub dead_glyph: char,
}

impl SimulationConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!(
                "Board must be at least 1x1, got {}x{}",
                self.width,
                self.height
            );
        }

        if !(0.0..=1.0).contains(&self.alive_chance) {
            bail!("Alive chance {} is outside 0..=1", self.alive_chance);
        }

        if self.alive_glyph == self.dead_glyph {
            bail!("Alive and dead glyphs are both {:?}", self.alive_glyph);
        }

        if self.alive_glyph.is_control() || self.dead_glyph.is_control() {
            bail!("Glyphs must be printable characters");
        }

        Ok(())
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_millis)
    }

    pub fn glyphs(&self) -> Glyphs {
        Glyphs {
            alive: self.alive_glyph,
            dead: self.dead_glyph,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 10,
            generations: 300,
            frame_delay_millis: 1000,
            alive_chance: 1.0 / 3.0,
            alive_glyph: '#',
            dead_glyph: '.',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = SimulationConfig::default();

        config.validate().unwrap();
        assert_eq!(config.frame_delay(), Duration::from_secs(1));
    }

    #[test]
    fn rejects_empty_board() {
        let zero_width = SimulationConfig {
            width: 0,
            ..Default::default()
        };
        let zero_height = SimulationConfig {
            height: 0,
            ..Default::default()
        };

        assert!(zero_width.validate().is_err());
        assert!(zero_height.validate().is_err());
    }

    #[test]
    fn rejects_bad_alive_chance() {
        for alive_chance in [-0.1, 1.5, f64::NAN] {
            let config = SimulationConfig {
                alive_chance,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "accepted {alive_chance}");
        }
    }

    #[test]
    fn rejects_unusable_glyphs() {
        let same = SimulationConfig {
            dead_glyph: '#',
            ..Default::default()
        };
        let newline = SimulationConfig {
            alive_glyph: '\n',
            ..Default::default()
        };

        assert!(same.validate().is_err());
        assert!(newline.validate().is_err());
    }

    #[test]
    fn serializes_field_names() {
        let json = serde_json::to_value(SimulationConfig::default()).unwrap();

        assert_eq!(json["width"], 20);
        assert_eq!(json["height"], 10);
        assert_eq!(json["generations"], 300);
        assert_eq!(json["alive_glyph"], "#");
    }
}
