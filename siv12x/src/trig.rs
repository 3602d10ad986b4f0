// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! Fixed point sine and cosine for the hue rotation registers.
//!
//! The hue rotation is a 2D transform whose coefficients are programmed as sign-magnitude bytes,
//! with 64 representing 1.0 and bit 7 as the sign.

/// The sign bit of a coefficient.
pub const SIGN_BIT: u8 = 0x80;

/// The angle between table entries, in degrees.
pub const STEP_DEGREES: i32 = 5;

/// `round(sin(θ) * 64)` for θ = 0°, 5°, … 90°.
const SINE_TABLE: [u8; 19] = [
    0, 6, 11, 17, 22, 27, 32, 37, 41, 45, 49, 52, 55, 58, 60, 62, 63, 64, 64,
];

fn table_entry(theta: u32) -> u8 {
    // Angles are not interpolated; anything between steps is truncated to the lower step.
    let index = (theta / STEP_DEGREES as u32) as usize;
    SINE_TABLE[index.min(SINE_TABLE.len() - 1)]
}

/// The sine of `theta` (in degrees, -180 to 180) as a sign-magnitude coefficient.
///
/// Angles past ±180 are not wrapped; the table saturates and they give a zero magnitude.
pub fn sine(theta: i32) -> u8 {
    let sign = if theta < 0 { SIGN_BIT } else { 0 };
    let theta = theta.unsigned_abs();
    let magnitude = if theta <= 90 {
        table_entry(theta)
    } else {
        64 - table_entry(theta - 90)
    };
    magnitude ^ sign
}

/// The cosine of `theta` (in degrees, -180 to 180) as a sign-magnitude coefficient.
pub fn cosine(theta: i32) -> u8 {
    let mut theta = 90i32.saturating_sub(theta);
    if theta > 180 {
        theta -= 360;
    } else if theta < -180 {
        theta += 360;
    }
    sine(theta)
}

/// The pair of hue rotation coefficients for an angle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HueCoefficients {
    pub cosine: u8,
    pub sine: u8,
}

impl HueCoefficients {
    pub fn from_degrees(theta: i32) -> Self {
        Self {
            cosine: cosine(theta),
            sine: sine(theta),
        }
    }
}

#[cfg(test)]
mod test {
    use float_cmp::approx_eq;

    use super::{cosine, sine, HueCoefficients, SIGN_BIT, SINE_TABLE};

    #[test]
    fn table_matches_sine() {
        for (step, entry) in SINE_TABLE.iter().enumerate() {
            let radians = ((step * 5) as f64).to_radians();
            let expected = (radians.sin() * 64.0).round();
            assert!(
                approx_eq!(f64, *entry as f64, expected, epsilon = 1.0),
                "{} degrees",
                step * 5
            );
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(sine(0), 0);
        assert_eq!(sine(90), 64);
        assert_eq!(sine(30), 32);
        assert_eq!(sine(180), 0);
        assert_eq!(cosine(0), sine(90));
        assert_eq!(cosine(90), 0);
    }

    #[test]
    fn negative_angles_are_sign_magnitude() {
        assert_eq!(sine(-45) & SIGN_BIT, SIGN_BIT);
        assert_eq!(sine(-45) & !SIGN_BIT, sine(45));
        assert_eq!(sine(-45), 0xAD);
        assert_eq!(sine(-90), 64 | SIGN_BIT);
    }

    #[test]
    fn reflection_past_ninety() {
        assert_eq!(sine(135), 64 - 45);
        assert_eq!(sine(-135), (64 - 45) | SIGN_BIT);
    }

    #[test]
    fn truncates_between_steps() {
        assert_eq!(sine(44), sine(40));
        assert_eq!(sine(-3), SIGN_BIT);
    }

    #[test]
    fn cosine_wraps() {
        // 90 - 180 = -90
        assert_eq!(cosine(180), 64 | SIGN_BIT);
        // 90 + 180 = 270, wrapped to -90
        assert_eq!(cosine(-180), 64 | SIGN_BIT);
        assert_eq!(cosine(-120), sine(-150));
    }

    #[test]
    fn extreme_angles() {
        assert_eq!(sine(i32::MIN), SIGN_BIT);
        assert_eq!(sine(i32::MAX), 0);
        assert_eq!(cosine(i32::MIN), 0);
        assert_eq!(cosine(i32::MAX), SIGN_BIT);
        assert_eq!(
            HueCoefficients::from_degrees(i32::MIN),
            HueCoefficients {
                cosine: 0,
                sine: SIGN_BIT
            }
        );
    }

    #[test]
    fn odd_symmetry() {
        for theta in 1..=180 {
            assert_eq!(sine(-theta), sine(theta) ^ SIGN_BIT, "{} degrees", theta);
        }
    }

    #[test]
    fn coefficients_pair() {
        assert_eq!(
            HueCoefficients::from_degrees(0),
            HueCoefficients {
                cosine: 64,
                sine: 0
            }
        );
        assert_eq!(
            HueCoefficients::from_degrees(-30),
            HueCoefficients {
                // 90 + 30 = 120, reflected as 64 - sin(30)
                cosine: 32,
                sine: 32 | SIGN_BIT
            }
        );
    }
}
