//! Face configuration
//!
//! A face is built from display geometry and frame rate. Everything else
//! has defaults tuned for the 64x32 HUB75 panels.

use std::env;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::gaze::GazeEnvelope;
use crate::{DEFAULT_FPS, PANEL_HEIGHT, PANEL_WIDTH};

/// Timing and speed of the random saccade wander
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WanderConfig {
    /// Shortest fixation between saccades
    pub min_hold_secs: f64,
    /// Longest fixation between saccades
    pub max_hold_secs: f64,
    /// Pupil speed in envelope radii per second
    pub speed: f64,
    /// Largest time step one tick may consume, in frames
    pub max_frame_dt_frames: f64,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            min_hold_secs: 0.4,
            max_hold_secs: 2.5,
            speed: 6.0,
            max_frame_dt_frames: 4.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    /// Share of each display dimension the pupils may travel from center
    pub envelope_fraction: f64,
    /// Fixed RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
    pub wander: WanderConfig,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self::new(PANEL_WIDTH, PANEL_HEIGHT, DEFAULT_FPS)
    }
}

impl FaceConfig {
    pub fn new(width: u32, height: u32, fps: u32) -> Self {
        Self {
            width,
            height,
            fps,
            envelope_fraction: 0.15,
            seed: None,
            wander: WanderConfig::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn envelope(&self) -> GazeEnvelope {
        GazeEnvelope::for_display(self.width, self.height, self.envelope_fraction)
    }

    /// Nominal seconds per frame; zero when the frame rate is zero
    pub fn frame_secs(&self) -> f64 {
        if self.fps == 0 {
            0.0
        } else {
            1.0 / self.fps as f64
        }
    }

    /// Upper bound on the dt a single tick may consume
    pub fn max_tick_secs(&self) -> f64 {
        self.frame_secs() * self.wander.max_frame_dt_frames
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        if !(self.envelope_fraction > 0.0 && self.envelope_fraction <= 0.5) {
            return Err(ConfigError::EnvelopeOutOfRange(self.envelope_fraction));
        }
        let WanderConfig { min_hold_secs: min, max_hold_secs: max, speed, max_frame_dt_frames } =
            self.wander;
        if !(speed.is_finite() && speed > 0.0) {
            return Err(ConfigError::InvalidSpeed(speed));
        }
        if !(max_frame_dt_frames.is_finite() && max_frame_dt_frames > 0.0) {
            return Err(ConfigError::InvalidTickCap(max_frame_dt_frames));
        }
        // A fixation shorter than one frame would pick a new goal every tick
        let frame = self.frame_secs();
        if !(min >= frame && min <= max && max.is_finite()) {
            return Err(ConfigError::HoldRange { min, max, frame });
        }
        Ok(())
    }

    /// Panel defaults overlaid with `VECTOR_EYES_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`FaceConfig::from_env`] with an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(width) = parse_var(&lookup, "VECTOR_EYES_WIDTH")? {
            config.width = width;
        }
        if let Some(height) = parse_var(&lookup, "VECTOR_EYES_HEIGHT")? {
            config.height = height;
        }
        if let Some(fps) = parse_var(&lookup, "VECTOR_EYES_FPS")? {
            config.fps = fps;
        }
        if let Some(fraction) = parse_var(&lookup, "VECTOR_EYES_ENVELOPE")? {
            config.envelope_fraction = fraction;
        }
        config.seed = parse_var(&lookup, "VECTOR_EYES_SEED")?;
        config.validate()?;
        Ok(config)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_panel() {
        let config = FaceConfig::default();
        assert_eq!((config.width, config.height, config.fps), (64, 32, 60));
        assert!(config.validate().is_ok());
        assert!((config.frame_secs() - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_degenerate_geometry() {
        assert_eq!(
            FaceConfig::new(0, 32, 60).validate(),
            Err(ConfigError::ZeroDimension { width: 0, height: 32 })
        );
        assert_eq!(FaceConfig::new(64, 32, 0).validate(), Err(ConfigError::ZeroFrameRate));
    }

    #[test]
    fn rejects_bad_wander_settings() {
        let mut config = FaceConfig::default();
        config.envelope_fraction = 0.9;
        assert_eq!(config.validate(), Err(ConfigError::EnvelopeOutOfRange(0.9)));

        let mut config = FaceConfig::default();
        config.wander.speed = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidSpeed(0.0)));

        let mut config = FaceConfig::default();
        config.wander.speed = f64::INFINITY;
        assert_eq!(config.validate(), Err(ConfigError::InvalidSpeed(f64::INFINITY)));

        let mut config = FaceConfig::default();
        config.wander.min_hold_secs = 3.0;
        config.wander.max_hold_secs = 1.0;
        assert!(matches!(config.validate(), Err(ConfigError::HoldRange { .. })));
    }

    #[test]
    fn rejects_fixations_shorter_than_a_frame() {
        let mut config = FaceConfig::default();
        config.wander.min_hold_secs = 0.0;
        config.wander.max_hold_secs = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::HoldRange { .. })));

        config.wander.min_hold_secs = 0.5 / 60.0;
        config.wander.max_hold_secs = 1.0;
        assert!(matches!(config.validate(), Err(ConfigError::HoldRange { .. })));

        config.wander.min_hold_secs = 1.0 / 60.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_missing_tick_cap() {
        for frames in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut config = FaceConfig::default();
            config.wander.max_frame_dt_frames = frames;
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidTickCap(_))),
                "{} frames accepted",
                frames
            );
        }
    }

    #[test]
    fn env_overrides_defaults() {
        let config = FaceConfig::from_lookup(lookup_from(&[
            ("VECTOR_EYES_WIDTH", "240"),
            ("VECTOR_EYES_HEIGHT", "240"),
            ("VECTOR_EYES_SEED", "42"),
        ]))
        .unwrap();
        assert_eq!(config.width, 240);
        assert_eq!(config.height, 240);
        assert_eq!(config.fps, 60);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn env_reports_unparsable_values() {
        let err = FaceConfig::from_lookup(lookup_from(&[("VECTOR_EYES_FPS", "fast")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "VECTOR_EYES_FPS".to_string(),
                value: "fast".to_string(),
            }
        );
    }

    #[test]
    fn env_values_are_validated() {
        let err = FaceConfig::from_lookup(lookup_from(&[("VECTOR_EYES_WIDTH", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroDimension { .. }));
    }
}
