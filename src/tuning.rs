//! Data-driven physics balance
//!
//! Every field has a default, so a tuning document only needs the values it
//! overrides.

use serde::{Deserialize, Serialize};

/// Physics tuning for the rolling ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration (px/s²)
    pub gravity: f32,
    /// Upward velocity applied on jump (px/s)
    pub jump_force: f32,
    /// Absolute cap on horizontal speed (px/s)
    pub max_speed: f32,
    /// Fraction of `max_speed` available at the start of a run
    pub base_speed_fraction: f32,
    /// Seconds for the speed cap to ease up to `max_speed`
    pub speed_ramp_secs: f32,
    /// Rate (1/s) at which vx approaches the desired velocity on the ground
    pub ground_response: f32,
    /// Response multiplier when input opposes current motion
    pub brake_multiplier: f32,
    /// Response multiplier while airborne
    pub air_multiplier: f32,
    /// Air drag rate (1/s) when airborne with no horizontal input
    pub air_drag: f32,
    /// Grace window after leaving a platform (s)
    pub coyote_secs: f32,
    /// Grace window for an early jump press (s)
    pub jump_buffer_secs: f32,
    /// Gravity multiplier while rising with jump released
    pub jump_cut_multiplier: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 1400.0,
            jump_force: 640.0,
            max_speed: 420.0,
            base_speed_fraction: 0.55,
            speed_ramp_secs: 3.0,
            ground_response: 10.0,
            brake_multiplier: 2.2,
            air_multiplier: 0.35,
            air_drag: 1.2,
            coyote_secs: 0.1,
            jump_buffer_secs: 0.12,
            jump_cut_multiplier: 2.0,
        }
    }
}

impl Tuning {
    /// Parse a tuning document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let tuning: Self = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Parse a tuning document, falling back to defaults on bad input
    pub fn load_or_default(json: Option<&str>) -> Self {
        let Some(json) = json else {
            log::info!("Using default tuning");
            return Self::default();
        };

        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning (max speed {})", tuning.max_speed);
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning document ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Speed cap after `elapsed` seconds of the run
    pub fn ramped_max_speed(&self, elapsed: f32) -> f32 {
        let progress = if self.speed_ramp_secs > 0.0 {
            crate::ease_out_cubic(elapsed / self.speed_ramp_secs)
        } else {
            1.0
        };
        let base = self.base_speed_fraction;
        self.max_speed * (base + (1.0 - base) * progress)
    }

    /// Clamp values into ranges the simulation relies on
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.max_speed.is_finite() || self.max_speed <= 0.0 {
            self.max_speed = defaults.max_speed;
        }
        self.base_speed_fraction = if self.base_speed_fraction.is_finite() {
            self.base_speed_fraction.clamp(0.0, 1.0)
        } else {
            defaults.base_speed_fraction
        };
        for (value, default) in [
            (&mut self.gravity, defaults.gravity),
            (&mut self.jump_force, defaults.jump_force),
            (&mut self.speed_ramp_secs, defaults.speed_ramp_secs),
            (&mut self.ground_response, defaults.ground_response),
            (&mut self.brake_multiplier, defaults.brake_multiplier),
            (&mut self.air_multiplier, defaults.air_multiplier),
            (&mut self.air_drag, defaults.air_drag),
            (&mut self.coyote_secs, defaults.coyote_secs),
            (&mut self.jump_buffer_secs, defaults.jump_buffer_secs),
            (&mut self.jump_cut_multiplier, defaults.jump_cut_multiplier),
        ] {
            if !value.is_finite() || *value < 0.0 {
                *value = default;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "max_speed": 300.0 }"#).unwrap();
        assert_eq!(tuning.max_speed, 300.0);
        assert_eq!(tuning.gravity, Tuning::default().gravity);
    }

    #[test]
    fn test_invalid_document_is_an_error() {
        assert!(Tuning::from_json("{ max_speed: fast }").is_err());
        assert_eq!(Tuning::load_or_default(Some("nope")), Tuning::default());
        assert_eq!(Tuning::load_or_default(None), Tuning::default());
    }

    #[test]
    fn test_sanitize_rejects_negative_values() {
        let tuning =
            Tuning::from_json(r#"{ "max_speed": -5.0, "gravity": -1.0, "base_speed_fraction": 4.0 }"#)
                .unwrap();
        assert_eq!(tuning.max_speed, Tuning::default().max_speed);
        assert_eq!(tuning.gravity, Tuning::default().gravity);
        assert_eq!(tuning.base_speed_fraction, 1.0);
    }

    #[test]
    fn test_speed_ramp() {
        let tuning = Tuning::default();
        let start = tuning.ramped_max_speed(0.0);
        assert!((start - tuning.max_speed * tuning.base_speed_fraction).abs() < 1e-3);
        assert!(tuning.ramped_max_speed(1.0) > start);
        assert!((tuning.ramped_max_speed(100.0) - tuning.max_speed).abs() < 1e-3);
    }

    #[test]
    fn test_zero_ramp_is_full_speed() {
        let tuning = Tuning {
            speed_ramp_secs: 0.0,
            ..Default::default()
        };
        assert_eq!(tuning.ramped_max_speed(0.0), tuning.max_speed);
    }
}
