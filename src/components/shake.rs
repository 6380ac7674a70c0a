//! Trauma-driven camera shake.
//!
//! Gameplay code reports "trauma" impulses under named sources (an
//! explosion, a hull impact, an earthquake zone). Each source holds an
//! independently decaying two-axis value; every frame the ledger is ticked,
//! the summed trauma is normalized and shaped through a response curve, and
//! coherent noise turns the result into a positional/rotational jitter.

use std::collections::HashMap;

use bevy::prelude::*;
use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

use crate::utils::curve::ResponseCurve;

/// Source name used when trauma is reported without one.
pub const DEFAULT_TRAUMA_SOURCE: &str = "default";

/// Roll intensity below which the shake output snaps to zero instead of
/// jittering at imperceptible amplitudes.
const SHAKE_CUTOFF: f32 = 0.001;

/// How a new trauma amount combines with the value already stored under the
/// same source name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TraumaMode {
    /// Each axis keeps the larger of stored and incoming.
    KeepMax,
    /// Adds, then clamps each axis to [0, max_trauma].
    #[default]
    Add,
    /// Overwrites the stored value. Writes through unclamped; only `Add`
    /// clamps on write.
    Replace,
}

/// One frame's shake output: a translational offset plus a Z roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeSample {
    pub offset: Vec2,
    pub roll: f32,
}

impl ShakeSample {
    pub const ZERO: Self = Self {
        offset: Vec2::ZERO,
        roll: 0.0,
    };
}

/// Coherent 2D noise sampled along fixed rows, one row per output channel.
///
/// Sampling is a pure function of the time input; the caller owns the time
/// accumulator. Distinct, non-integer rows keep the X, Y, and roll signals
/// decorrelated while each stays smooth over time.
pub struct NoiseChannels {
    perlin: Perlin,
}

/// Channel row for the X offset.
const CHANNEL_X: f64 = 0.37;
/// Channel row for the Y offset.
const CHANNEL_Y: f64 = 17.73;
/// Channel row for the roll.
const CHANNEL_ROLL: f64 = 29.41;

impl NoiseChannels {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }

    /// Samples the given channel row at time `t`. Output is roughly [-1, 1].
    pub fn sample(&self, t: f32, channel: f64) -> f32 {
        self.perlin.get([t as f64, channel]) as f32
    }
}

/// The trauma ledger: accumulates named trauma impulses, decays them over
/// time, and renders the total into a continuous shake signal.
///
/// `tick` must run once per frame before `sample` for decay to be
/// frame-rate independent; the rig driver does both in order.
#[derive(Component)]
pub struct CameraShake {
    sources: HashMap<String, Vec2>,
    /// Per-axis trauma ceiling. Summed trauma is normalized against this
    /// before shaping.
    pub max_trauma: f32,
    /// Trauma units removed per second from each axis of every source.
    pub decay_speed: f32,
    /// How fast the noise field is traversed; higher is more frantic.
    pub shake_speed: f32,
    /// Offset at full intensity, per axis, in world units.
    pub max_offset: Vec2,
    /// Roll at full intensity, in radians.
    pub max_roll: f32,
    /// Maps normalized trauma to output intensity.
    pub response: ResponseCurve,
    noise: NoiseChannels,
    noise_time: f32,
}

impl CameraShake {
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Seeds the noise field, for reproducible shake in tests and replays.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            sources: HashMap::new(),
            max_trauma: 100.0,
            decay_speed: 80.0,
            shake_speed: 12.0,
            max_offset: Vec2::splat(12.0),
            max_roll: 0.05,
            response: ResponseCurve::Quadratic,
            noise: NoiseChannels::new(seed),
            noise_time: 0.0,
        }
    }

    /// Reports trauma on the default source, the same amount on both axes.
    pub fn add_trauma(&mut self, amount: f32, mode: TraumaMode) {
        self.add_trauma_on(DEFAULT_TRAUMA_SOURCE, Vec2::splat(amount), mode);
    }

    /// Reports trauma under a named source. The entry is created on first
    /// use; amounts are expected non-negative per axis.
    pub fn add_trauma_on(&mut self, source: impl Into<String>, amount: Vec2, mode: TraumaMode) {
        let stored = self.sources.entry(source.into()).or_insert(Vec2::ZERO);
        match mode {
            TraumaMode::KeepMax => *stored = stored.max(amount),
            TraumaMode::Add => {
                *stored = (*stored + amount).clamp(Vec2::ZERO, Vec2::splat(self.max_trauma));
            }
            TraumaMode::Replace => *stored = amount,
        }
    }

    /// Current trauma stored under `source`, zero if the source is unknown.
    pub fn trauma(&self, source: &str) -> Vec2 {
        self.sources.get(source).copied().unwrap_or(Vec2::ZERO)
    }

    /// Sum of all stored trauma, componentwise.
    pub fn total_trauma(&self) -> Vec2 {
        self.sources.values().copied().sum()
    }

    /// Per-axis trauma level normalized against `max_trauma` and capped
    /// at 1.
    pub fn normalized(&self) -> Vec2 {
        (self.total_trauma() / self.max_trauma).min(Vec2::ONE)
    }

    /// Named sources and their current values, for debug display.
    pub fn iter_sources(&self) -> impl Iterator<Item = (&str, Vec2)> {
        self.sources.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Decays every source linearly toward zero and advances the noise
    /// clock. Each axis is floored at zero independently.
    pub fn tick(&mut self, dt: f32) {
        let decay = Vec2::splat(self.decay_speed * dt);
        for value in self.sources.values_mut() {
            if *value != Vec2::ZERO {
                *value = (*value - decay).max(Vec2::ZERO);
            }
        }
        self.noise_time += self.shake_speed * dt;
    }

    /// Renders the current trauma level into a shake sample.
    ///
    /// Translational intensity is shaped per axis; roll intensity is shaped
    /// from the average of the two normalized axes and gates the whole
    /// output, so near-zero trauma produces exactly zero shake.
    pub fn sample(&self) -> ShakeSample {
        let level = self.normalized();
        let roll_intensity = self.response.evaluate((level.x + level.y) * 0.5);
        if roll_intensity < SHAKE_CUTOFF {
            return ShakeSample::ZERO;
        }

        let intensity = Vec2::new(
            self.response.evaluate(level.x),
            self.response.evaluate(level.y),
        );
        let offset = Vec2::new(
            self.noise.sample(self.noise_time, CHANNEL_X) * self.max_offset.x * intensity.x,
            self.noise.sample(self.noise_time, CHANNEL_Y) * self.max_offset.y * intensity.y,
        );
        let roll = self.noise.sample(self.noise_time, CHANNEL_ROLL) * self.max_roll * roll_intensity;

        ShakeSample { offset, roll }
    }
}

impl Default for CameraShake {
    fn default() -> Self {
        Self::new()
    }
}
