//! Gamma lookup tables
//!
//! LEDs respond linearly to PWM duty while the eye does not, so logical
//! values are raised to `gamma` before they reach the strip. Both directions
//! are precomputed into 256-entry tables so correcting a pixel is a single
//! array index.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::math8::to_uint8;

/// Gamma commonly used for WS2812-class LEDs
pub const DEFAULT_GAMMA: f32 = 2.8;

/// Apply gamma to a fraction in 0.0-1.0
///
/// A gamma of zero or below disables correction.
pub fn gamma_correct(value: f32, gamma: f32) -> f32 {
    if value <= 0.0 {
        return 0.0;
    }
    if gamma <= 0.0 {
        return value;
    }
    libm::powf(value, gamma)
}

/// Undo [`gamma_correct`]
pub fn gamma_uncorrect(value: f32, gamma: f32) -> f32 {
    if value <= 0.0 {
        return 0.0;
    }
    if gamma <= 0.0 {
        return value;
    }
    libm::powf(value, 1.0 / gamma)
}

#[allow(clippy::cast_possible_truncation)]
const fn identity_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = i as u8;
        i += 1;
    }
    table
}

/// Forward and inverse gamma tables
#[derive(Debug, Clone)]
pub struct GammaTable {
    gamma: f32,
    forward: [u8; 256],
    inverse: [u8; 256],
}

impl Default for GammaTable {
    fn default() -> Self {
        Self::identity()
    }
}

impl GammaTable {
    /// Tables that pass values through unchanged (gamma 0)
    pub const fn identity() -> Self {
        Self {
            gamma: 0.0,
            forward: identity_table(),
            inverse: identity_table(),
        }
    }

    pub fn new(gamma: f32) -> Self {
        let mut table = Self::identity();
        table.rebuild(gamma);
        table
    }

    /// Recompute both tables for `gamma`
    ///
    /// `forward[i] = round(255 * (i/255)^gamma)` and
    /// `inverse[i] = round(255 * (i/255)^(1/gamma))`. A gamma of zero (or
    /// below) yields identity tables.
    #[allow(clippy::cast_precision_loss)]
    pub fn rebuild(&mut self, gamma: f32) {
        #[cfg(feature = "esp32-log")]
        println!("[GammaTable.rebuild] rebuilding tables for gamma {}", gamma);

        self.gamma = gamma;
        if gamma <= 0.0 {
            self.forward = identity_table();
            self.inverse = identity_table();
            return;
        }
        for (i, (forward, inverse)) in self
            .forward
            .iter_mut()
            .zip(self.inverse.iter_mut())
            .enumerate()
        {
            let value = i as f32 / 255.0;
            *forward = to_uint8(gamma_correct(value, gamma));
            *inverse = to_uint8(gamma_uncorrect(value, gamma));
        }
    }

    pub const fn gamma(&self) -> f32 {
        self.gamma
    }

    /// Logical value to physical value
    #[inline]
    pub const fn forward(&self, value: u8) -> u8 {
        self.forward[value as usize]
    }

    /// Physical value back to logical value
    #[inline]
    pub const fn inverse(&self, value: u8) -> u8 {
        self.inverse[value as usize]
    }
}
