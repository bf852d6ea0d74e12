//! Deterministic backdrop generation. The intro plays over a field of
//! twinkling stars and an occasional shooting star; placement and cadence
//! come from a seed, never from host RNG, so the same storyboard always
//! produces the same sky.

use crate::core::Seconds;

/// One twinkling star: unit-square position, size scale, and its repeating
/// fade cycle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    /// Full fade-in/out cycle length.
    pub period: Seconds,
    /// Initial delay before the first cycle.
    pub delay: Seconds,
    /// Every third star takes the warm accent tint.
    pub accent: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StarField {
    pub seed: u64,
    pub stars: Vec<Star>,
}

/// One shooting star: launch delay and the gap before each repeat.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ShootingStar {
    pub delay: Seconds,
    pub repeat_after: Seconds,
}

// SplitMix64; enough for decorative placement.
fn mix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

struct SeededRng(u64);

impl SeededRng {
    fn next_unit(&mut self) -> f64 {
        self.0 = mix64(self.0);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    fn in_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_unit() * (hi - lo)
    }
}

impl StarField {
    /// Authored band: 4-9 s twinkle cycles, up to 10 s of initial stagger.
    pub fn generate(seed: u64, count: usize) -> Self {
        let mut rng = SeededRng(mix64(seed));
        let stars = (0..count)
            .map(|i| Star {
                x: rng.next_unit(),
                y: rng.next_unit(),
                scale: rng.in_range(1.0, 3.0),
                period: Seconds(rng.in_range(4.0, 9.0)),
                delay: Seconds(rng.in_range(0.0, 10.0)),
                accent: i % 3 == 0,
            })
            .collect();
        Self { seed, stars }
    }
}

/// Authored band: staggered launches, 10-25 s between repeats.
pub fn shooting_stars(seed: u64, count: usize) -> Vec<ShootingStar> {
    let mut rng = SeededRng(mix64(seed ^ 0x5348_4F4F_5453_5441));
    (0..count)
        .map(|i| ShootingStar {
            delay: Seconds(2.0 + 13.0 * i as f64),
            repeat_after: Seconds(rng.in_range(10.0, 25.0)),
        })
        .collect()
}
