//! Scene configuration and validation.
//!
//! [`DonutConfig`] is the loose, user-facing form: every field has a default
//! and the projection scale is optional. [`DonutConfig::validate`] checks it
//! once and produces an immutable [`Scene`] that the renderer and the
//! animation loop share for the whole run.

use std::f64::consts::{SQRT_2, TAU};

use serde::Deserialize;
use thiserror::Error;

use crate::types::{
    derive_k1, Angles, BLANK_GLYPH, DEFAULT_DELTA_A, DEFAULT_DELTA_B, DEFAULT_FRAME_INTERVAL_MS,
    DEFAULT_GLYPH_RAMP, DEFAULT_HEIGHT, DEFAULT_INITIAL_A, DEFAULT_INITIAL_B, DEFAULT_K2,
    DEFAULT_PHI_SPACING, DEFAULT_R1, DEFAULT_R2, DEFAULT_THETA_SPACING, DEFAULT_WIDTH,
};

/// Largest accepted angular step. Anything coarser leaves visible holes.
pub const MAX_SPACING: f64 = 1.0;

/// Upper bound on surface samples per frame. Frame counters are `u32`.
pub const MAX_SAMPLES_PER_FRAME: f64 = u32::MAX as f64;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid configuration: `{field}` {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::InvalidConfiguration { field, .. } => field,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DonutConfig {
    pub width: u16,
    pub height: u16,
    /// Projection scale. `None` derives it from the window and torus size.
    pub k1: Option<f64>,
    pub k2: f64,
    pub r1: f64,
    pub r2: f64,
    pub initial_a: f64,
    pub initial_b: f64,
    pub theta_spacing: f64,
    pub phi_spacing: f64,
    pub glyph_ramp: String,
    pub delta_a: f64,
    pub delta_b: f64,
    pub frame_interval_ms: u64,
}

impl Default for DonutConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            k1: None,
            k2: DEFAULT_K2,
            r1: DEFAULT_R1,
            r2: DEFAULT_R2,
            initial_a: DEFAULT_INITIAL_A,
            initial_b: DEFAULT_INITIAL_B,
            theta_spacing: DEFAULT_THETA_SPACING,
            phi_spacing: DEFAULT_PHI_SPACING,
            glyph_ramp: DEFAULT_GLYPH_RAMP.to_string(),
            delta_a: DEFAULT_DELTA_A,
            delta_b: DEFAULT_DELTA_B,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

impl DonutConfig {
    /// Parse a JSON document. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Check every precondition the renderer relies on and resolve `k1`.
    pub fn validate(&self) -> Result<Scene, ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::invalid("width", "must be at least 1"));
        }
        if self.height == 0 {
            return Err(ConfigError::invalid("height", "must be at least 1"));
        }

        positive("r1", self.r1)?;
        positive("r2", self.r2)?;
        positive("k2", self.k2)?;
        // Nearest surface point sits at z = k2 - (r1 + r2).
        if self.k2 <= self.r1 + self.r2 {
            return Err(ConfigError::invalid(
                "k2",
                format!(
                    "must exceed r1 + r2 ({}) to keep the torus in front of the viewer",
                    self.r1 + self.r2
                ),
            ));
        }

        let k1 = match self.k1 {
            Some(k1) => {
                positive("k1", k1)?;
                k1
            }
            None => derive_k1(self.width, self.k2, self.r1, self.r2),
        };

        spacing("theta_spacing", self.theta_spacing)?;
        spacing("phi_spacing", self.phi_spacing)?;
        let budget = steps_upper_bound(self.theta_spacing) * steps_upper_bound(self.phi_spacing);
        if budget > MAX_SAMPLES_PER_FRAME {
            let field = if self.phi_spacing <= self.theta_spacing {
                "phi_spacing"
            } else {
                "theta_spacing"
            };
            return Err(ConfigError::invalid(
                field,
                format!(
                    "is too fine: about {budget:.0} samples per frame, limit is {MAX_SAMPLES_PER_FRAME:.0}"
                ),
            ));
        }

        let ramp: Vec<char> = self.glyph_ramp.chars().collect();
        if ramp.is_empty() {
            return Err(ConfigError::invalid("glyph_ramp", "must not be empty"));
        }

        finite("initial_a", self.initial_a)?;
        finite("initial_b", self.initial_b)?;
        finite("delta_a", self.delta_a)?;
        finite("delta_b", self.delta_b)?;

        log::debug!(
            "scene {}x{} r1={} r2={} k1={} k2={} ramp={} glyphs",
            self.width,
            self.height,
            self.r1,
            self.r2,
            k1,
            self.k2,
            ramp.len()
        );

        Ok(Scene {
            width: self.width,
            height: self.height,
            r1: self.r1,
            r2: self.r2,
            k1,
            k2: self.k2,
            theta_spacing: self.theta_spacing,
            phi_spacing: self.phi_spacing,
            luminance_scale: luminance_scale(ramp.len()),
            ramp,
            initial: Angles::new(self.initial_a, self.initial_b),
            step: Angles::new(self.delta_a, self.delta_b),
            frame_interval_ms: self.frame_interval_ms,
        })
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be finite, got {value}")))
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be positive, got {value}")))
    }
}

fn spacing(field: &'static str, value: f64) -> Result<(), ConfigError> {
    positive(field, value)?;
    if value >= MAX_SPACING {
        return Err(ConfigError::invalid(
            field,
            format!("must be below {MAX_SPACING} radian, got {value}"),
        ));
    }
    Ok(())
}

// One extra step covers rounding drift in the accumulating loop.
fn steps_upper_bound(step: f64) -> f64 {
    (TAU / step).ceil() + 1.0
}

/// Factor mapping luminance in `(0, sqrt(2)]` onto ramp indices `0..len`.
pub fn luminance_scale(ramp_len: usize) -> f64 {
    ramp_len.saturating_sub(1) as f64 / SQRT_2
}

/// Validated, immutable scene parameters.
///
/// Only [`DonutConfig::validate`] builds one, so holders can rely on every
/// precondition (positive radii, `k2 > r1 + r2`, non-empty ramp...).
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    width: u16,
    height: u16,
    r1: f64,
    r2: f64,
    k1: f64,
    k2: f64,
    theta_spacing: f64,
    phi_spacing: f64,
    ramp: Vec<char>,
    luminance_scale: f64,
    initial: Angles,
    step: Angles,
    frame_interval_ms: u64,
}

impl Scene {
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn r1(&self) -> f64 {
        self.r1
    }

    pub fn r2(&self) -> f64 {
        self.r2
    }

    pub fn k1(&self) -> f64 {
        self.k1
    }

    pub fn k2(&self) -> f64 {
        self.k2
    }

    pub fn theta_spacing(&self) -> f64 {
        self.theta_spacing
    }

    pub fn phi_spacing(&self) -> f64 {
        self.phi_spacing
    }

    /// Glyphs from dimmest to brightest. Never empty.
    pub fn ramp(&self) -> &[char] {
        &self.ramp
    }

    pub fn blank(&self) -> char {
        BLANK_GLYPH
    }

    pub fn luminance_scale(&self) -> f64 {
        self.luminance_scale
    }

    pub fn initial_angles(&self) -> Angles {
        self.initial
    }

    /// Rotation added to the angles after every frame.
    pub fn rotation_step(&self) -> Angles {
        self.step
    }

    pub fn frame_interval_ms(&self) -> u64 {
        self.frame_interval_ms
    }

    /// Number of surface samples one frame visits.
    pub fn samples_per_frame(&self) -> usize {
        steps_below(TAU, self.theta_spacing) * steps_below(TAU, self.phi_spacing)
    }
}

// Mirrors the renderer's accumulate-while-below loop exactly.
fn steps_below(limit: f64, step: f64) -> usize {
    let mut n = 0;
    let mut t = 0.0;
    while t < limit {
        n += 1;
        t += step;
    }
    n
}
