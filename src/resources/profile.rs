//! Serializable camera tuning profiles.
//!
//! A profile captures every rig and shake tunable in plain scalars so teams
//! can keep camera feel in version-controlled JSON and iterate without
//! recompiling.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::rig::{CameraRig, ReferenceMode};
use crate::components::shake::CameraShake;
use crate::utils::curve::ResponseCurve;

/// Complete tuning for a tracked camera, loadable from JSON.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct RigProfile {
    pub reference_mode: ReferenceMode,
    pub falloff: ResponseCurve,
    pub responsiveness: f32,
    /// World-space containment view rectangle, `[width, height]`.
    pub view_size: [f32; 2],
    pub base_scale: f32,
    pub shake: ShakeProfile,
}

/// Shake-ledger tuning embedded in a `RigProfile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShakeProfile {
    pub max_trauma: f32,
    pub decay_speed: f32,
    pub shake_speed: f32,
    /// Peak offset per axis, `[x, y]`, in world units.
    pub max_offset: [f32; 2],
    /// Peak roll in radians.
    pub max_roll: f32,
    pub response: ResponseCurve,
    /// Noise seed, kept in the profile so replays shake identically.
    pub seed: u32,
}

impl Default for RigProfile {
    fn default() -> Self {
        let rig = CameraRig::default();
        Self {
            reference_mode: rig.reference_mode,
            falloff: rig.falloff,
            responsiveness: rig.responsiveness,
            view_size: rig.view_size.into(),
            base_scale: rig.base_scale,
            shake: ShakeProfile::default(),
        }
    }
}

impl Default for ShakeProfile {
    fn default() -> Self {
        let shake = CameraShake::new();
        Self {
            max_trauma: shake.max_trauma,
            decay_speed: shake.decay_speed,
            shake_speed: shake.shake_speed,
            max_offset: shake.max_offset.into(),
            max_roll: shake.max_roll,
            response: shake.response,
            seed: 0,
        }
    }
}

impl RigProfile {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Builds a rig with this profile's tuning and a fresh pose.
    pub fn build_rig(&self) -> CameraRig {
        let mut rig = CameraRig::new(Vec2::from(self.view_size));
        rig.reference_mode = self.reference_mode;
        rig.falloff = self.falloff;
        rig.responsiveness = self.responsiveness;
        rig.base_scale = self.base_scale;
        rig
    }

    /// Builds a shake ledger with this profile's tuning.
    pub fn build_shake(&self) -> CameraShake {
        let mut shake = CameraShake::with_seed(self.shake.seed);
        shake.max_trauma = self.shake.max_trauma;
        shake.decay_speed = self.shake.decay_speed;
        shake.shake_speed = self.shake.shake_speed;
        shake.max_offset = Vec2::from(self.shake.max_offset);
        shake.max_roll = self.shake.max_roll;
        shake.response = self.shake.response;
        shake
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let mut profile = RigProfile::default();
        profile.responsiveness = 7.5;
        profile.falloff = ResponseCurve::FadeSmooth;
        profile.shake.max_trauma = 250.0;
        profile.shake.response = ResponseCurve::Cubic;

        let json = profile.to_json().unwrap();
        let restored = RigProfile::from_json(&json).unwrap();
        assert_eq!(restored.responsiveness, 7.5);
        assert_eq!(restored.falloff, ResponseCurve::FadeSmooth);
        assert_eq!(restored.shake.max_trauma, 250.0);
        assert_eq!(restored.shake.response, ResponseCurve::Cubic);
    }

    #[test]
    fn test_build_rig_applies_tuning() {
        let mut profile = RigProfile::default();
        profile.view_size = [320.0, 180.0];
        profile.reference_mode = ReferenceMode::Primary;
        let rig = profile.build_rig();
        assert_eq!(rig.view_size, Vec2::new(320.0, 180.0));
        assert_eq!(rig.reference_mode, ReferenceMode::Primary);
        assert_eq!(rig.pan, Vec2::ZERO);
    }

    #[test]
    fn test_build_shake_applies_tuning() {
        let mut profile = RigProfile::default();
        profile.shake.max_offset = [3.0, 9.0];
        profile.shake.decay_speed = 40.0;
        let shake = profile.build_shake();
        assert_eq!(shake.max_offset, Vec2::new(3.0, 9.0));
        assert_eq!(shake.decay_speed, 40.0);
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(RigProfile::from_json("{\"responsiveness\": }").is_err());
    }
}
