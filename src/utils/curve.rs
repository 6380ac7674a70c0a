//! Response curves: monotonic mappings from a normalized input to an
//! intensity scalar.
//!
//! One curve type serves two consumers with opposite orientations: rising
//! shapes (`Linear`, `Quadratic`, ...) convert accumulated trauma into shake
//! intensity, while fading shapes (`FadeLinear`, `FadeSmooth`) convert
//! normalized distance into focal-point falloff.

use serde::{Deserialize, Serialize};

/// A monotonic mapping from a normalized scalar in [0, 1] to an intensity.
///
/// Input is clamped to [0, 1] before evaluation, so callers may pass raw
/// ratios without pre-clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ResponseCurve {
    /// Identity: intensity equals input.
    Linear,
    /// Input squared. The classic trauma-to-shake mapping.
    Quadratic,
    /// Input cubed, for an even softer onset.
    Cubic,
    /// Hermite smoothstep, 3t² - 2t³.
    SmoothStep,
    /// 1 - t: full intensity at zero input, fading linearly to nothing.
    FadeLinear,
    /// (1 - t)²: full intensity at zero input with an eased tail.
    FadeSmooth,
    /// 0 below the threshold, 1 at or above it.
    Step(f32),
}

impl ResponseCurve {
    /// Evaluates the curve at `input`, clamped to [0, 1].
    pub fn evaluate(self, input: f32) -> f32 {
        let t = input.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Quadratic => t * t,
            Self::Cubic => t * t * t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::FadeLinear => 1.0 - t,
            Self::FadeSmooth => {
                let u = 1.0 - t;
                u * u
            }
            Self::Step(threshold) => {
                if t >= threshold {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// True for shapes that start at full intensity and fade toward zero,
    /// the orientation used for distance falloff.
    pub fn is_fade(self) -> bool {
        matches!(self, Self::FadeLinear | Self::FadeSmooth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_rising_curve_endpoints() {
        for curve in [
            ResponseCurve::Linear,
            ResponseCurve::Quadratic,
            ResponseCurve::Cubic,
            ResponseCurve::SmoothStep,
        ] {
            assert!(curve.evaluate(0.0).abs() < EPS);
            assert!((curve.evaluate(1.0) - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_fade_curve_endpoints() {
        for curve in [ResponseCurve::FadeLinear, ResponseCurve::FadeSmooth] {
            assert!((curve.evaluate(0.0) - 1.0).abs() < EPS);
            assert!(curve.evaluate(1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert!((ResponseCurve::Linear.evaluate(-2.0)).abs() < EPS);
        assert!((ResponseCurve::Linear.evaluate(7.5) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_quadratic_softens_low_end() {
        let q = ResponseCurve::Quadratic.evaluate(0.3);
        assert!((q - 0.09).abs() < EPS);
        assert!(q < ResponseCurve::Linear.evaluate(0.3));
    }

    #[test]
    fn test_step_threshold() {
        let step = ResponseCurve::Step(0.5);
        assert_eq!(step.evaluate(0.49), 0.0);
        assert_eq!(step.evaluate(0.5), 1.0);
        assert_eq!(step.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_monotonic_samples() {
        for curve in [
            ResponseCurve::Linear,
            ResponseCurve::Quadratic,
            ResponseCurve::Cubic,
            ResponseCurve::SmoothStep,
        ] {
            let mut prev = curve.evaluate(0.0);
            for i in 1..=20 {
                let next = curve.evaluate(i as f32 / 20.0);
                assert!(next >= prev);
                prev = next;
            }
        }
    }
}
