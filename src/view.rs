//! Windowed pixel views
//!
//! A [`RangeView`] is a half-open window `[begin, end)` over any
//! [`PixelBuffer`], bound to the [`ColorCorrection`] and brightness used when
//! writing logical colors. Views are `Copy` and never own pixels; sub-ranging
//! and indexing only produce new windows over the same buffer.
//!
//! Negative indices count from the end of the view, so `view.at(-1)` is the
//! last pixel and `view.range(0, -1)` drops it.

use core::fmt;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::buffer::{CorrectedBuffer, PixelBuffer};
use crate::color::{Channel, Color};
use crate::correction::ColorCorrection;
use crate::error::Error;

/// Resolve a possibly negative index against `size`
#[inline]
pub const fn interpret_index(index: i32, size: i32) -> i32 {
    if index < 0 { size + index } else { index }
}

/// Half-open window over a pixel buffer
#[derive(Clone, Copy)]
pub struct RangeView<'a> {
    buffer: &'a dyn PixelBuffer,
    correction: &'a ColorCorrection,
    brightness: u8,
    begin: i32,
    end: i32,
}

impl fmt::Debug for RangeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeView")
            .field("begin", &self.begin)
            .field("end", &self.end)
            .field("brightness", &self.brightness)
            .finish_non_exhaustive()
    }
}

impl<'a> RangeView<'a> {
    /// View over the whole buffer at the live brightness of `correction`
    pub fn new(buffer: &'a dyn PixelBuffer, correction: &'a ColorCorrection) -> Self {
        Self::with_bounds(
            buffer,
            correction,
            correction.brightness(),
            0,
            buffer.size(),
        )
    }

    /// View over `[begin, end)`; `end` is clamped to at least `begin`
    pub const fn with_bounds(
        buffer: &'a dyn PixelBuffer,
        correction: &'a ColorCorrection,
        brightness: u8,
        begin: i32,
        end: i32,
    ) -> Self {
        Self {
            buffer,
            correction,
            brightness,
            begin,
            end: if end < begin { begin } else { end },
        }
    }

    /// Same window, writing logical colors at `brightness`
    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    pub const fn size(&self) -> i32 {
        self.end.saturating_sub(self.begin)
    }

    pub const fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub const fn begin(&self) -> i32 {
        self.begin
    }

    pub const fn end(&self) -> i32 {
        self.end
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn correction(&self) -> &'a ColorCorrection {
        self.correction
    }

    pub const fn buffer(&self) -> &'a dyn PixelBuffer {
        self.buffer
    }

    /// Whether both views address the same underlying buffer object
    ///
    /// Compares buffer addresses only. A view over a
    /// [`SegmentPartition`](crate::partition::SegmentPartition) and a view
    /// over one of its source stores alias the same pixels but do not share a
    /// buffer.
    pub fn shares_buffer(&self, other: &RangeView<'_>) -> bool {
        core::ptr::addr_eq(self.buffer, other.buffer)
    }

    /// Single-pixel view at `index`
    pub const fn at(&self, index: i32) -> RangeView<'a> {
        let index = interpret_index(index, self.size()).saturating_add(self.begin);
        Self::with_bounds(
            self.buffer,
            self.correction,
            self.brightness,
            index,
            index.saturating_add(1),
        )
    }

    /// Sub-view `[from, to)` relative to this view
    pub const fn range(&self, from: i32, to: i32) -> RangeView<'a> {
        let from = interpret_index(from, self.size());
        let to = interpret_index(to, self.size());
        Self::with_bounds(
            self.buffer,
            self.correction,
            self.brightness,
            self.begin.saturating_add(from),
            self.begin.saturating_add(to),
        )
    }

    /// Single-pixel views in order
    pub fn iter(&self) -> impl Iterator<Item = RangeView<'a>> + use<'a> {
        let view = *self;
        (0..view.size()).map(move |i| view.at(i))
    }

    /// Logical-value access to the underlying buffer at this view's brightness
    pub const fn logical(&self) -> CorrectedBuffer<'a> {
        CorrectedBuffer::new(self.buffer, self.correction, self.brightness)
    }

    // Reads look at the first pixel; they are meant for single-pixel views.

    /// Logical color of the first pixel
    pub fn get(&self) -> Color {
        self.correction
            .uncorrect(self.buffer.get(self.begin), self.brightness)
    }

    /// Physical color of the first pixel
    pub fn get_raw(&self) -> Color {
        self.buffer.get(self.begin)
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        let raw = self.buffer.channel(self.begin, channel);
        self.correction
            .uncorrect_channel(raw, self.brightness, channel)
    }

    pub fn raw_channel(&self, channel: Channel) -> u8 {
        self.buffer.channel(self.begin, channel)
    }

    pub fn effect_data(&self) -> u8 {
        self.buffer.effect_data(self.begin)
    }

    /// Correct `color` once and write it to every pixel
    pub fn set(&self, color: Color) {
        let corrected = self.correction.correct(color, self.brightness);
        self.set_raw(corrected);
    }

    /// Write physical bytes to every pixel, bypassing correction
    pub fn set_raw(&self, color: Color) {
        for i in self.begin..self.end {
            self.buffer.set(i, color);
        }
    }

    /// Correct `value` once and write it to `channel` of every pixel
    pub fn set_channel(&self, channel: Channel, value: u8) {
        let corrected = self
            .correction
            .correct_channel(value, self.brightness, channel);
        self.set_raw_channel(channel, corrected);
    }

    pub fn set_raw_channel(&self, channel: Channel, value: u8) {
        for i in self.begin..self.end {
            self.buffer.set_channel(i, channel, value);
        }
    }

    pub fn set_red(&self, red: u8) {
        self.set_channel(Channel::Red, red);
    }

    pub fn set_green(&self, green: u8) {
        self.set_channel(Channel::Green, green);
    }

    pub fn set_blue(&self, blue: u8) {
        self.set_channel(Channel::Blue, blue);
    }

    pub fn set_white(&self, white: u8) {
        self.set_channel(Channel::White, white);
    }

    pub fn set_rgb(&self, red: u8, green: u8, blue: u8) {
        self.set_red(red);
        self.set_green(green);
        self.set_blue(blue);
    }

    pub fn set_effect_data(&self, value: u8) {
        for i in self.begin..self.end {
            self.buffer.set_effect_data(i, value);
        }
    }

    /// Move every pixel toward white, see [`Color::fade_to_white`]
    pub fn fade_to_white(&self, amount: u8) {
        self.map_raw(|color| color.fade_to_white(amount));
    }

    /// Move every pixel toward black, see [`Color::fade_to_black`]
    pub fn fade_to_black(&self, amount: u8) {
        self.map_raw(|color| color.fade_to_black(amount));
    }

    pub fn lighten(&self, delta: u8) {
        self.map_raw(|color| color.lighten(delta));
    }

    pub fn darken(&self, delta: u8) {
        self.map_raw(|color| color.darken(delta));
    }

    /// Rewrite the physical bytes of every pixel in place
    pub fn map_raw(&self, mut f: impl FnMut(Color) -> Color) {
        for i in self.begin..self.end {
            self.buffer.set(i, f(self.buffer.get(i)));
        }
    }

    /// Move pixels `amount` places toward the start
    ///
    /// The last `amount` pixels keep their previous values. A negative amount
    /// shifts right.
    pub fn shift_left(&self, amount: i32) {
        if amount < 0 {
            self.shift_right(amount.saturating_neg());
            return;
        }
        let amount = amount.min(self.size());
        if amount == 0 {
            return;
        }
        self.range(0, -amount)
            .copy_from(&self.range(amount, self.size()));
    }

    /// Move pixels `amount` places toward the end
    ///
    /// The first `amount` pixels keep their previous values. A negative amount
    /// shifts left.
    pub fn shift_right(&self, amount: i32) {
        if amount < 0 {
            self.shift_left(amount.saturating_neg());
            return;
        }
        let amount = amount.min(self.size());
        if amount == 0 {
            return;
        }
        self.range(amount, self.size())
            .copy_from(&self.range(0, -amount));
    }

    /// Copy the physical bytes of `other` into this view
    ///
    /// Views over the same buffer may overlap; the copy direction is chosen
    /// like `memmove` so no source pixel is overwritten before it is read.
    /// Overlap is only detected within one buffer object, see
    /// [`shares_buffer`](Self::shares_buffer). Views over different buffers
    /// are copied in ascending order.
    pub fn assign(&self, other: &RangeView<'_>) -> Result<(), Error> {
        if other.size() != self.size() {
            #[cfg(feature = "esp32-log")]
            println!(
                "[RangeView.assign] size mismatch: {} != {}",
                other.size(),
                self.size()
            );
            return Err(Error::SizeMismatch {
                expected: self.size(),
                actual: other.size(),
            });
        }
        self.copy_from(other);
        Ok(())
    }

    fn copy_from(&self, other: &RangeView<'_>) {
        let copy = |i: i32| {
            self.buffer
                .set(self.begin + i, other.buffer.get(other.begin + i));
        };

        if !self.shares_buffer(other) || other.begin > self.begin {
            (0..self.size()).for_each(copy);
        } else if other.begin < self.begin {
            (0..self.size()).rev().for_each(copy);
        }
    }
}
