//! Addressable light output
//!
//! [`AddressableLight`] owns the pixel store and its color correction, and
//! decides per update whether to write the requested color directly or to
//! hand the strip to the running [`AddressableFade`].

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::buffer::PixelStore;
use crate::color::Color;
use crate::correction::{ColorCorrection, CorrectionConfig};
use crate::error::Error;
use crate::transition::AddressableFade;
use crate::view::RangeView;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms. Colors are
/// physical values in strip order; channel ordering is up to the driver.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write<I: Iterator<Item = Color>>(&mut self, colors: I);
}

/// Resolved light state the output renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightValues {
    pub on: bool,
    pub brightness: u8,
    /// Logical color, already resolved from the color mode
    pub color: Color,
}

impl Default for LightValues {
    fn default() -> Self {
        Self::OFF
    }
}

impl LightValues {
    pub const OFF: Self = Self {
        on: false,
        brightness: 255,
        color: Color::WHITE,
    };

    pub const fn new(on: bool, brightness: u8, color: Color) -> Self {
        Self {
            on,
            brightness,
            color,
        }
    }

    /// Brightness with the on/off state applied
    pub const fn effective_brightness(&self) -> u8 {
        if self.on { self.brightness } else { 0 }
    }
}

/// Configuration for the addressable light
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressableLightConfig {
    pub correction: CorrectionConfig,
    pub values: LightValues,
}

/// A strip of up to `N` addressable pixels
#[derive(Debug)]
pub struct AddressableLight<const N: usize> {
    store: PixelStore<N>,
    correction: ColorCorrection,
    values: LightValues,
    fade: AddressableFade,
    effect_active: bool,
}

impl<const N: usize> AddressableLight<N> {
    /// Create a light with `count` pixels, all black
    pub fn new(count: usize, config: &AddressableLightConfig) -> Result<Self, Error> {
        let mut correction = ColorCorrection::from_config(&config.correction);
        correction.set_brightness(config.values.effective_brightness());
        Ok(Self {
            store: PixelStore::new(count)?,
            correction,
            values: config.values,
            fade: AddressableFade::new(),
            effect_active: false,
        })
    }

    /// View over every pixel at the current brightness
    pub fn pixels(&self) -> RangeView<'_> {
        self.store.pixels(&self.correction)
    }

    /// View over every pixel at full brightness
    pub fn fullrange_pixels(&self) -> RangeView<'_> {
        self.pixels().with_brightness(u8::MAX)
    }

    pub const fn store(&self) -> &PixelStore<N> {
        &self.store
    }

    pub const fn correction(&self) -> &ColorCorrection {
        &self.correction
    }

    pub fn set_gamma(&mut self, gamma: f32) {
        self.correction.set_gamma(gamma);
    }

    /// Set per-channel output ceilings from fractions in 0.0-1.0
    pub fn set_correction(&mut self, red: f32, green: f32, blue: f32, white: f32) {
        self.correction.set_correction(red, green, blue, white);
    }

    /// Whether an effect writes the buffer directly
    pub const fn is_effect_active(&self) -> bool {
        self.effect_active
    }

    pub const fn set_effect_active(&mut self, effect_active: bool) {
        self.effect_active = effect_active;
    }

    /// Last values rendered or adopted
    pub const fn values(&self) -> LightValues {
        self.values
    }

    pub const fn is_transitioning(&self) -> bool {
        self.fade.is_active()
    }

    /// Render `values` without a transition
    ///
    /// Replaces any running transition. Subsequent writes through
    /// [`pixels`](Self::pixels) use the new brightness. The color itself is
    /// only written while no effect owns the buffer.
    pub fn update(&mut self, values: LightValues) {
        self.fade.cancel();
        self.values = values;
        self.correction
            .set_brightness(values.effective_brightness());
        if self.effect_active {
            return;
        }
        if values.on {
            self.pixels().set(values.color);
        } else {
            self.pixels().set_raw(Color::BLACK);
        }
    }

    /// Begin fading every pixel toward `target`
    pub fn start_transition(&mut self, target: LightValues) {
        // The fade folds brightness into its target color
        self.correction.set_brightness(u8::MAX);
        self.fade.start(target, &self.correction);
    }

    /// Advance the running transition to `progress` (0.0-1.0)
    ///
    /// Returns the target values when an active effect cut the transition
    /// short. Once the transition completes, the target values are adopted
    /// and the target color is written, so coarse ticks still end on it.
    pub fn transition_tick(&mut self, progress: f32) -> Option<LightValues> {
        if !self.fade.is_active() {
            return None;
        }
        let pixels = self.store.pixels(&self.correction).with_brightness(u8::MAX);
        let interrupted = self.fade.apply(&pixels, progress, self.effect_active);

        match interrupted {
            Some(_) => self.finish_transition(),
            None if !self.fade.is_active() => {
                self.finish_transition();
                let target = self.fade.target_color();
                self.fullrange_pixels().set_raw(target);
            }
            None => {}
        }
        interrupted
    }

    fn finish_transition(&mut self) {
        self.values = self.fade.target_values();
        self.correction
            .set_brightness(self.values.effective_brightness());

        #[cfg(feature = "esp32-log")]
        println!(
            "[AddressableLight.finish_transition] adopted {:?}",
            self.values
        );
    }

    /// Push the raw frame to `driver`
    pub fn write_to<D: OutputDriver>(&self, driver: &mut D) {
        driver.write(self.store.raw_colors());
    }
}
