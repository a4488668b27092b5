//! Color correction
//!
//! Converts between logical channel values (what the caller asked for) and
//! physical values (what is written to the strip):
//!
//! ```text
//! physical = gamma[scale8(scale8(logical, max_brightness), brightness)]
//! ```
//!
//! The white channel skips the brightness factor. White LEDs are usually
//! driven at a calibrated output and dimmed elsewhere.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Channel, Color};
use crate::gamma::{DEFAULT_GAMMA, GammaTable};
use crate::math8::{scale8, to_uint8};

/// Configuration for the color correction
#[derive(Debug, Clone, Copy)]
pub struct CorrectionConfig {
    /// Gamma exponent, 0 disables gamma correction
    pub gamma: f32,
    /// Per-channel output ceiling (255 = 100%)
    pub max_brightness: Color,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            max_brightness: Color::WHITE,
        }
    }
}

/// Gamma and brightness correction
#[derive(Debug, Clone)]
pub struct ColorCorrection {
    gamma: GammaTable,
    max_brightness: Color,
    brightness: u8,
}

impl Default for ColorCorrection {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorCorrection {
    /// Correction that passes values through unchanged
    pub const fn new() -> Self {
        Self {
            gamma: GammaTable::identity(),
            max_brightness: Color::WHITE,
            brightness: 255,
        }
    }

    pub fn from_config(config: &CorrectionConfig) -> Self {
        Self {
            gamma: GammaTable::new(config.gamma),
            max_brightness: config.max_brightness,
            brightness: 255,
        }
    }

    /// Rebuild the gamma tables
    pub fn set_gamma(&mut self, gamma: f32) {
        self.gamma.rebuild(gamma);
    }

    pub const fn gamma(&self) -> f32 {
        self.gamma.gamma()
    }

    pub const fn gamma_table(&self) -> &GammaTable {
        &self.gamma
    }

    pub const fn set_max_brightness(&mut self, max_brightness: Color) {
        self.max_brightness = max_brightness;
    }

    pub const fn max_brightness(&self) -> Color {
        self.max_brightness
    }

    /// Set per-channel ceilings from fractions in 0.0-1.0
    pub fn set_correction(&mut self, red: f32, green: f32, blue: f32, white: f32) {
        self.max_brightness = Color::new(
            to_uint8(red),
            to_uint8(green),
            to_uint8(blue),
            to_uint8(white),
        );
        #[cfg(feature = "esp32-log")]
        println!(
            "[ColorCorrection.set_correction] max brightness set to {:?}",
            self.max_brightness
        );
    }

    /// Live brightness used by views created without an explicit one
    pub const fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Logical channel value to physical value
    #[inline]
    pub const fn correct_channel(&self, value: u8, brightness: u8, channel: Channel) -> u8 {
        let mut scaled = scale8(value, self.max_brightness.channel(channel));
        if !matches!(channel, Channel::White) {
            scaled = scale8(scaled, brightness);
        }
        self.gamma.forward(scaled)
    }

    /// Physical channel value back to a logical value
    ///
    /// Approximate: gamma and brightness are two independent 8-bit
    /// quantizations, so `uncorrect(correct(x))` is not always `x`.
    /// Returns 0 when the channel ceiling or the brightness is 0.
    #[inline]
    #[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
    pub const fn uncorrect_channel(&self, value: u8, brightness: u8, channel: Channel) -> u8 {
        let max = self.max_brightness.channel(channel);
        if max == 0 || brightness == 0 {
            return 0;
        }
        let mut uncorrected = self.gamma.inverse(value) as u32 * 255 / max as u32;
        if !matches!(channel, Channel::White) {
            uncorrected = uncorrected * 255 / brightness as u32;
        }
        if uncorrected > 255 { 255 } else { uncorrected as u8 }
    }

    /// Correct all four channels at `brightness`
    pub fn correct(&self, color: Color, brightness: u8) -> Color {
        color.map(|channel, value| self.correct_channel(value, brightness, channel))
    }

    /// Uncorrect all four channels at `brightness`
    pub fn uncorrect(&self, color: Color, brightness: u8) -> Color {
        color.map(|channel, value| self.uncorrect_channel(value, brightness, channel))
    }
}
