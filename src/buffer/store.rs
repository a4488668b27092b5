use core::cell::Cell;

use heapless::Vec;

use super::PixelBuffer;
use crate::color::{Channel, Color};
use crate::correction::ColorCorrection;
use crate::error::Error;
use crate::view::RangeView;

/// Raw bytes of one pixel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pixel {
    /// Physical channel values
    pub color: Color,
    /// Scratch byte effects use to keep state between ticks
    pub effect_data: u8,
}

/// Flat storage for up to `CAPACITY` pixels
///
/// The pixel count is fixed at construction.
#[derive(Debug)]
pub struct PixelStore<const CAPACITY: usize> {
    pixels: Vec<Cell<Pixel>, CAPACITY>,
}

impl<const CAPACITY: usize> PixelStore<CAPACITY> {
    /// Create a store of `count` black pixels
    pub fn new(count: usize) -> Result<Self, Error> {
        if count == 0 {
            return Err(Error::ZeroPixels);
        }
        if count > CAPACITY {
            return Err(Error::CapacityExceeded {
                requested: count,
                capacity: CAPACITY,
            });
        }
        let mut pixels = Vec::new();
        for _ in 0..count {
            // Cannot fail, count was checked against the capacity above
            let _ = pixels.push(Cell::new(Pixel::default()));
        }
        Ok(Self { pixels })
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// View over every pixel at the live brightness of `correction`
    pub fn pixels<'a>(&'a self, correction: &'a ColorCorrection) -> RangeView<'a> {
        RangeView::new(self, correction)
    }

    /// Raw pixel at `index`
    pub fn pixel(&self, index: usize) -> Option<Pixel> {
        self.pixels.get(index).map(Cell::get)
    }

    /// Raw colors in strip order, for drivers
    pub fn raw_colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.pixels.iter().map(|pixel| pixel.get().color)
    }

    /// Reset every pixel to black and clear effect data
    pub fn clear(&self) {
        for pixel in &self.pixels {
            pixel.set(Pixel::default());
        }
    }

    fn cell(&self, index: i32) -> Option<&Cell<Pixel>> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.pixels.get(index))
    }

    fn update(&self, index: i32, f: impl FnOnce(&mut Pixel)) {
        if let Some(cell) = self.cell(index) {
            let mut pixel = cell.get();
            f(&mut pixel);
            cell.set(pixel);
        }
    }
}

impl<const CAPACITY: usize> PixelBuffer for PixelStore<CAPACITY> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn size(&self) -> i32 {
        self.pixels.len() as i32
    }

    fn channel(&self, index: i32, channel: Channel) -> u8 {
        self.cell(index)
            .map_or(0, |cell| cell.get().color.channel(channel))
    }

    fn set_channel(&self, index: i32, channel: Channel, value: u8) {
        self.update(index, |pixel| pixel.color.set_channel(channel, value));
    }

    fn effect_data(&self, index: i32) -> u8 {
        self.cell(index).map_or(0, |cell| cell.get().effect_data)
    }

    fn set_effect_data(&self, index: i32, value: u8) {
        self.update(index, |pixel| pixel.effect_data = value);
    }

    fn get(&self, index: i32) -> Color {
        self.cell(index).map_or(Color::BLACK, |cell| cell.get().color)
    }

    fn set(&self, index: i32, color: Color) {
        self.update(index, |pixel| pixel.color = color);
    }
}
