//! # Effects Configuration
//!
//! Every count, duration and palette used by the visual effects lives in
//! [`EffectsConfig`]. The defaults reproduce the hand-tuned page; a page can
//! override any subset through an embedded JSON block, which is validated
//! before use so a typo never yields an empty starfield or a runaway timer.
//!
//! ```rust
//! use lib_core::config::EffectsConfig;
//!
//! let config = EffectsConfig::from_json(r#"{ "starfield": { "count": 40 } }"#).unwrap();
//! assert_eq!(config.starfield.count, 40);
//! assert_eq!(config.particles.count, 30);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::model::RandomSource;

/// Accent colors the starfield draws from.
pub const STAR_PALETTE: [&str; 5] = ["#00ff88", "#00d4ff", "#ffd23f", "#ff0080", "#ffffff"];

/// Subtitle revealed by the typewriter on the home section.
pub const TYPEWRITER_TEXT: &str = "Computer Engineering Student & Code Architect";

/// Half-open sampling interval `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
}

impl SampleRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Draw a value uniformly from the interval.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f64 {
        self.min + rng.next_f64() * (self.max - self.min)
    }

    /// Whether `value` lies inside the half-open interval.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }

    fn validate(&self, field: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(AppError::Config(format!("{} must be finite", field)));
        }
        if self.max < self.min {
            return Err(AppError::Config(format!(
                "{} is inverted (min {} > max {})",
                field, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Decorative twinkling stars.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub count: usize,
    pub size_px: SampleRange,
    pub duration_s: SampleRange,
    pub delay_s: SampleRange,
    pub palette: Vec<String>,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 100,
            size_px: SampleRange::new(1.0, 4.0),
            duration_s: SampleRange::new(2.0, 5.0),
            delay_s: SampleRange::new(0.0, 2.0),
            palette: STAR_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Floating particles that drift across the viewport forever.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub size_px: f64,
    pub color: String,
    pub opacity: f64,
    pub duration_ms: SampleRange,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 30,
            size_px: 4.0,
            color: "#00ff88".to_string(),
            opacity: 0.7,
            duration_ms: SampleRange::new(5_000.0, 15_000.0),
        }
    }
}

/// One-shot click burst fired by the easter egg.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    pub count: usize,
    pub size_px: f64,
    pub color: String,
    pub duration_ms: f64,
    pub speed: SampleRange,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            count: 20,
            size_px: 6.0,
            color: "#00ff88".to_string(),
            duration_ms: 1_000.0,
            speed: SampleRange::new(100.0, 200.0),
        }
    }
}

/// Statistic counters on the about section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub tick_ms: u32,
    /// Number of equal increments from zero to the target.
    pub steps: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { tick_ms: 20, steps: 100 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub text: String,
    pub tick_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            text: TYPEWRITER_TEXT.to_string(),
            tick_ms: 100,
        }
    }
}

/// Complete effects configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub starfield: StarfieldConfig,
    pub particles: ParticleConfig,
    pub burst: BurstConfig,
    pub counters: CounterConfig,
    pub typewriter: TypewriterConfig,
}

impl EffectsConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    ///
    /// Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        let star = &self.starfield;
        if star.count == 0 {
            return Err(AppError::Config("starfield.count must be greater than zero".to_string()));
        }
        if star.palette.is_empty() {
            return Err(AppError::Config("starfield.palette must not be empty".to_string()));
        }
        star.size_px.validate("starfield.size_px")?;
        star.duration_s.validate("starfield.duration_s")?;
        star.delay_s.validate("starfield.delay_s")?;

        let particles = &self.particles;
        if particles.count == 0 {
            return Err(AppError::Config("particles.count must be greater than zero".to_string()));
        }
        if !(0.0..=1.0).contains(&particles.opacity) {
            return Err(AppError::Config("particles.opacity must be within 0..=1".to_string()));
        }
        particles.duration_ms.validate("particles.duration_ms")?;
        if particles.duration_ms.min <= 0.0 {
            return Err(AppError::Config("particles.duration_ms must be positive".to_string()));
        }

        let burst = &self.burst;
        if burst.count == 0 {
            return Err(AppError::Config("burst.count must be greater than zero".to_string()));
        }
        if burst.duration_ms <= 0.0 {
            return Err(AppError::Config("burst.duration_ms must be positive".to_string()));
        }
        burst.speed.validate("burst.speed")?;

        if self.counters.tick_ms == 0 || self.counters.steps == 0 {
            return Err(AppError::Config(
                "counters.tick_ms and counters.steps must be non-zero".to_string(),
            ));
        }
        if self.typewriter.tick_ms == 0 {
            return Err(AppError::Config("typewriter.tick_ms must be non-zero".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page() {
        let config = EffectsConfig::default();
        assert_eq!(config.starfield.count, 100);
        assert_eq!(config.starfield.palette.len(), 5);
        assert_eq!(config.particles.count, 30);
        assert_eq!(config.burst.count, 20);
        assert_eq!(config.counters.tick_ms, 20);
        assert_eq!(config.typewriter.tick_ms, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EffectsConfig::from_json(r#"{ "burst": { "count": 5 } }"#)
            .expect("partial config should parse");
        assert_eq!(config.burst.count, 5);
        assert_eq!(config.burst.duration_ms, 1_000.0);
        assert_eq!(config.starfield, StarfieldConfig::default());
    }

    #[test]
    fn test_rejects_empty_palette() {
        let result = EffectsConfig::from_json(r#"{ "starfield": { "palette": [] } }"#);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let mut config = EffectsConfig::default();
        config.particles.duration_ms = SampleRange::new(15_000.0, 5_000.0);
        let err = config.validate().expect_err("inverted range should be rejected");
        assert!(err.to_string().contains("particles.duration_ms"));
    }

    #[test]
    fn test_rejects_zero_tick() {
        let mut config = EffectsConfig::default();
        config.counters.tick_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let result = EffectsConfig::from_json("{ starfield: ");
        assert!(matches!(result, Err(AppError::Serialization(_))));
    }
}
