//! Integer hash noise.
//!
//! [`hash_noise`] maps an `(x, y, seed)` lattice point to a value in `[0, 1)` with
//! wrapping 32-bit arithmetic and no hidden state. [`fractal_noise`] layers several
//! octaves of it, and [`blend_weight`] scales the result into the weight the noise
//! tiles use to interpolate between their two colors.

/// Multiplier for the x coordinate.
const PRIME_X: u32 = 374_761_393;
/// Multiplier for the y coordinate.
const PRIME_Y: u32 = 668_265_263;
/// Multiplier for the seed.
const PRIME_SEED: u32 = 700_001;
/// Multiplier applied after the first xor-shift.
const PRIME_MIX: u32 = 1_274_126_177;

/// Seed offset between consecutive octaves.
pub const OCTAVE_SEED_STEP: i32 = 97;
/// Frequency multiplier between consecutive octaves.
pub const FREQUENCY_GAIN: f64 = 2.1;
/// Amplitude multiplier between consecutive octaves.
pub const AMPLITUDE_GAIN: f64 = 0.5;
/// Octaves used for a roughness of zero.
pub const BASE_OCTAVES: u32 = 3;
/// Contrast applied to fractal noise before it is used as a blend weight.
pub const BLEND_CONTRAST: f64 = 0.8;

/// Hash a lattice point to 32 bits.
#[inline]
pub fn hash_u32(x: i32, y: i32, seed: i32) -> u32 {
    let mut n = (x as u32)
        .wrapping_mul(PRIME_X)
        .wrapping_add((y as u32).wrapping_mul(PRIME_Y))
        .wrapping_add((seed as u32).wrapping_mul(PRIME_SEED));
    n = (n ^ (n >> 13)).wrapping_mul(PRIME_MIX);
    n ^ (n >> 16)
}

/// Hash noise in `[0, 1)`. Deterministic for fixed inputs.
#[inline]
pub fn hash_noise(x: i32, y: i32, seed: i32) -> f64 {
    // 2^32, so u32::MAX still maps strictly below 1.
    hash_u32(x, y, seed) as f64 / 4_294_967_296.0
}

/// Sum of `octaves` hash noise samples at increasing frequency and decreasing amplitude,
/// normalized by the total amplitude. Returns a value in `[0, 1)`; zero octaves yield `0.0`.
///
/// Sample coordinates are truncated toward zero after scaling, so the noise stays on the
/// integer lattice at every octave.
pub fn fractal_noise(x: i32, y: i32, seed: i32, octaves: u32) -> f64 {
    let mut sum = 0.0;
    let mut total = 0.0;
    let mut freq = 1.0;
    let mut amp = 1.0;

    for octave in 0..octaves {
        let sx = (x as f64 * freq) as i32;
        let sy = (y as f64 * freq) as i32;
        let octave_seed = seed.wrapping_add((octave as i32).wrapping_mul(OCTAVE_SEED_STEP));

        sum += hash_noise(sx, sy, octave_seed) * amp;
        total += amp;
        freq *= FREQUENCY_GAIN;
        amp *= AMPLITUDE_GAIN;
    }

    sum / f64::max(total, 1e-6)
}

/// Blend weight for a pixel: fractal noise with `BASE_OCTAVES + rough` octaves, scaled by
/// [`BLEND_CONTRAST`]. Lies in `[0, BLEND_CONTRAST)`.
#[inline]
pub fn blend_weight(x: i32, y: i32, seed: i32, rough: u32) -> f64 {
    fractal_noise(x, y, seed, BASE_OCTAVES + rough) * BLEND_CONTRAST
}
