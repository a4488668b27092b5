//! Transitions
//!
//! - [`AddressableFade`] fades every pixel of a strip toward a target,
//!   starting from whatever each pixel currently shows.
//! - [`ValueTransition`] interpolates a single value from a stored start,
//!   for outputs that are not individually addressable.
//! - [`TransitionClock`] turns a start time and a length into the progress
//!   fraction both of them consume.
//!
//! All of them ease with the same [`smoothstep`] curve.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Color;
use crate::correction::ColorCorrection;
use crate::light::LightValues;
use crate::math8::{blend8, progress, smoothstep, to_uint8};
use crate::view::RangeView;

/// Start time and length of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionClock {
    start: Instant,
    length: Duration,
}

impl TransitionClock {
    pub const fn new(start: Instant, length: Duration) -> Self {
        Self { start, length }
    }

    pub const fn start(&self) -> Instant {
        self.start
    }

    pub const fn length(&self) -> Duration {
        self.length
    }

    /// Linear progress in 0.0-1.0 at `now`
    pub fn progress(&self, now: Instant) -> f32 {
        progress(now.saturating_duration_since(self.start), self.length)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.length
    }
}

/// Dithered per-pixel fade toward a target color
///
/// Lerping from a start color would need a copy of every pixel taken when the
/// fade starts. Instead each tick blends the *current* pixel toward the
/// target by `alpha = (s - s_prev) / (1 - s)`, where `s` is the smoothed
/// progress. Applied repeatedly this exponential average traces the same
/// curve as the lerp from the starting value.
///
/// The 8-bit blend truncates small alphas to zero, which would stall the
/// beginning of the fade. The fractional part of `alpha * 255` is therefore
/// carried to the next tick, so the applied alpha averages out to the ideal
/// one.
#[derive(Debug, Clone, Default)]
pub struct AddressableFade {
    target_values: LightValues,
    target_color: Color,
    last_progress: f32,
    accumulated_alpha: f32,
    active: bool,
}

impl AddressableFade {
    pub const fn new() -> Self {
        Self {
            target_values: LightValues::OFF,
            target_color: Color::BLACK,
            last_progress: 0.0,
            accumulated_alpha: 0.0,
            active: false,
        }
    }

    /// Begin fading toward `target`, discarding any fade in progress
    ///
    /// The fade owns brightness while it runs: it is folded into the physical
    /// target color here, so pixels must be written at full brightness.
    /// Brightness scales the logical value before gamma, the same as
    /// [`ColorCorrection::correct`] does for a steady write, rather than
    /// scaling the gamma-corrected color afterwards. A finished fade then
    /// matches what a direct write at the target values would show.
    pub fn start(&mut self, target: LightValues, correction: &ColorCorrection) {
        self.target_values = target;
        self.target_color = if target.on {
            correction.correct(target.color, target.brightness)
        } else {
            Color::BLACK
        };
        self.last_progress = 0.0;
        self.accumulated_alpha = 0.0;
        self.active = true;

        #[cfg(feature = "esp32-log")]
        println!(
            "[AddressableFade.start] target {:?} -> {:?}",
            target, self.target_color
        );
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Stop the fade where it is, leaving pixels untouched
    pub fn cancel(&mut self) {
        if self.active {
            #[cfg(feature = "esp32-log")]
            println!("[AddressableFade.cancel] fade replaced");
            self.active = false;
        }
    }

    pub const fn target_values(&self) -> LightValues {
        self.target_values
    }

    /// Physical color the pixels converge to
    pub const fn target_color(&self) -> Color {
        self.target_color
    }

    /// Advance the easing state to `progress` and return this tick's alpha
    ///
    /// `progress` must be monotonic within one fade and lie in 0.0-1.0;
    /// values outside are clamped.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn step(&mut self, progress: f32) -> u8 {
        let smoothed = smoothstep(progress.clamp(0.0, 1.0));
        let denom = 1.0 - smoothed;
        let alpha = if denom == 0.0 {
            0.0
        } else {
            (smoothed - self.last_progress) / denom
        };
        self.last_progress = smoothed;

        let alpha255 = alpha.max(0.0) * 255.0 + self.accumulated_alpha;
        let whole = libm::floorf(alpha255);
        self.accumulated_alpha = alpha255 - whole;

        whole.min(255.0) as u8
    }

    /// Run one tick of the fade over `pixels`
    ///
    /// An active effect owns the buffer: the fade ends without blending and
    /// the target values are returned so the caller can adopt them at once.
    /// Otherwise returns `None`; the fade ends once `progress` reaches 1.
    pub fn apply(
        &mut self,
        pixels: &RangeView<'_>,
        progress: f32,
        effect_active: bool,
    ) -> Option<LightValues> {
        if !self.active {
            return None;
        }
        if effect_active {
            self.active = false;
            return Some(self.target_values);
        }

        let alpha = self.step(progress);
        if alpha != 0 {
            let add = self.target_color * alpha;
            let keep = 255 - alpha;
            pixels.map_raw(|current| add + current * keep);
        }

        if progress >= 1.0 {
            self.active = false;
            #[cfg(feature = "esp32-log")]
            println!("[AddressableFade.apply] fade complete");
        }
        None
    }
}

/// Blends two values of type `T` using a progress value (0-255)
pub type ValueBlender<T> = fn(T, T, u8) -> T;

/// Eased transition between two values of type `T`
#[derive(Debug, Clone)]
pub struct ValueTransition<T: Copy> {
    /// Blender function
    blend: ValueBlender<T>,
    /// Current interpolated value
    current: T,
    /// Value at the start of transition
    source: T,
    /// Target value (None if no transition in progress)
    target: Option<T>,
    clock: TransitionClock,
}

impl<T: Copy> ValueTransition<T> {
    pub const fn new(initial: T, blend: ValueBlender<T>) -> Self {
        Self {
            blend,
            current: initial,
            source: initial,
            target: None,
            clock: TransitionClock::new(Instant::from_millis(0), Duration::from_millis(0)),
        }
    }

    pub const fn current(&self) -> T {
        self.current
    }

    pub const fn is_transitioning(&self) -> bool {
        self.target.is_some()
    }

    /// Start moving toward `value`, immediately when `duration` is zero
    pub fn set(&mut self, value: T, duration: Duration, start_time: Instant) {
        self.clock = TransitionClock::new(start_time, duration);
        if duration.as_millis() == 0 {
            self.current = value;
            self.source = value;
            self.target = None;
        } else {
            self.source = self.current;
            self.target = Some(value);
        }
    }

    /// Update transition state
    ///
    /// Call this once per frame.
    pub fn tick(&mut self, now: Instant) {
        let Some(target) = self.target else {
            return;
        };

        if self.clock.is_finished(now) {
            self.current = target;
            self.source = target;
            self.target = None;
            return;
        }

        let amount = to_uint8(smoothstep(self.clock.progress(now)));
        self.current = (self.blend)(self.source, target, amount);
    }
}

impl ValueTransition<u8> {
    pub const fn new_u8(initial: u8) -> Self {
        Self::new(initial, blend8)
    }
}

impl ValueTransition<Color> {
    pub const fn new_color(initial: Color) -> Self {
        Self::new(initial, blend_colors)
    }
}

/// Blend two colors channel by channel
///
/// `amount_of_b` 0 yields `a`, 255 yields `b`.
pub fn blend_colors(a: Color, b: Color, amount_of_b: u8) -> Color {
    a.map(|channel, value| blend8(value, b.channel(channel), amount_of_b))
}
