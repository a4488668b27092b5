use embassy_time::Duration;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Truncating fixed-point multiply. `scale8(x, 255) == x` and
/// `scale8(x, 0) == 0` for every `x`, so a full-scale factor is lossless.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Convert a fraction in 0.0-1.0 to 0-255, rounding to nearest
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_uint8(value: f32) -> u8 {
    libm::roundf(value.clamp(0.0, 1.0) * 255.0) as u8
}

/// Calculate progress (0.0-1.0) based on elapsed time and duration
///
/// A zero duration is complete immediately.
#[allow(clippy::cast_precision_loss)]
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.as_millis() == 0 || elapsed.as_millis() >= duration.as_millis() {
        return 1.0;
    }

    elapsed.as_millis() as f32 / duration.as_millis() as f32
}

/// Quintic smoothstep, `6x^5 - 15x^4 + 10x^3`
///
/// Sigmoid-like ease from 0 to 1 with zero first and second derivatives at
/// both ends. Shared by every fade so all outputs ramp alike.
#[inline]
pub fn smoothstep(x: f32) -> f32 {
    x * x * x * (x * (x * 6.0 - 15.0) + 10.0)
}
