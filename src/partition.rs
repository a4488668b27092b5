//! Segment partitions
//!
//! A [`SegmentPartition`] stitches sub-ranges of one or more source views
//! into a single contiguous strip. Segments are laid out back to back in the
//! order given, each optionally reversed, and a global index is resolved to
//! its source pixel with a binary search.

use core::cmp::Ordering;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use heapless::Vec;

use crate::buffer::PixelBuffer;
use crate::color::{Channel, Color};
use crate::correction::ColorCorrection;
use crate::error::Error;
use crate::view::RangeView;

/// A run of pixels taken from a source view
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    source: RangeView<'a>,
    src_offset: i32,
    size: i32,
    reversed: bool,
    dst_offset: i32,
}

impl<'a> Segment<'a> {
    /// `size` pixels of `source` starting at `src_offset`
    pub const fn new(source: RangeView<'a>, src_offset: i32, size: i32, reversed: bool) -> Self {
        Self {
            source,
            src_offset,
            size,
            reversed,
            dst_offset: 0,
        }
    }

    pub const fn source(&self) -> RangeView<'a> {
        self.source
    }

    pub const fn src_offset(&self) -> i32 {
        self.src_offset
    }

    pub const fn size(&self) -> i32 {
        self.size
    }

    pub const fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// First global index covered by this segment
    pub const fn dst_offset(&self) -> i32 {
        self.dst_offset
    }

    const fn contains(&self, index: i32) -> Ordering {
        if index < self.dst_offset {
            Ordering::Greater
        } else if index >= self.dst_offset + self.size {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }

    /// Source offset of the global `index`, which must lie in this segment
    const fn source_offset(&self, index: i32) -> i32 {
        let local = index - self.dst_offset;
        if self.reversed {
            self.src_offset + self.size - local - 1
        } else {
            self.src_offset + local
        }
    }
}

/// Up to `N` segments viewed as one strip
#[derive(Debug)]
pub struct SegmentPartition<'a, const N: usize> {
    segments: Vec<Segment<'a>, N>,
    size: i32,
}

impl<'a, const N: usize> SegmentPartition<'a, N> {
    /// Lay out `segments` back to back
    ///
    /// Fails when the list is empty, exceeds `N`, or contains a segment
    /// whose size is not positive.
    pub fn new(segments: &[Segment<'a>]) -> Result<Self, Error> {
        if segments.is_empty() {
            return Err(Error::NoSegments);
        }
        if segments.len() > N {
            return Err(Error::CapacityExceeded {
                requested: segments.len(),
                capacity: N,
            });
        }

        let mut laid_out = Vec::new();
        let mut offset = 0;
        for (index, segment) in segments.iter().enumerate() {
            if segment.size <= 0 {
                return Err(Error::EmptySegment { index });
            }
            let mut segment = *segment;
            segment.dst_offset = offset;
            offset += segment.size;
            // Cannot fail, the length was checked against N above
            let _ = laid_out.push(segment);
        }

        Ok(Self {
            segments: laid_out,
            size: offset,
        })
    }

    /// Total number of pixels
    pub const fn size(&self) -> i32 {
        self.size
    }

    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// View over the whole partition at the live brightness of `correction`
    pub fn pixels<'b>(&'b self, correction: &'b ColorCorrection) -> RangeView<'b> {
        RangeView::new(self, correction)
    }

    /// Source view and offset within it for the global `index`
    ///
    /// Returns `None` outside `0..size()`.
    pub fn resolve(&self, index: i32) -> Option<(RangeView<'a>, i32)> {
        if index < 0 || index >= self.size {
            #[cfg(feature = "esp32-log")]
            println!(
                "[SegmentPartition.resolve] index {} out of range 0..{}",
                index, self.size
            );
            return None;
        }
        let found = self
            .segments
            .binary_search_by(|segment| segment.contains(index))
            .ok()?;
        let segment = &self.segments[found];
        Some((segment.source, segment.source_offset(index)))
    }

    /// Single-pixel source view for the global `index`
    pub fn find_pixel(&self, index: i32) -> Option<RangeView<'a>> {
        self.resolve(index)
            .map(|(source, offset)| source.at(offset))
    }
}

impl<const N: usize> PixelBuffer for SegmentPartition<'_, N> {
    fn size(&self) -> i32 {
        self.size
    }

    fn channel(&self, index: i32, channel: Channel) -> u8 {
        self.find_pixel(index)
            .map_or(0, |pixel| pixel.raw_channel(channel))
    }

    fn set_channel(&self, index: i32, channel: Channel, value: u8) {
        if let Some(pixel) = self.find_pixel(index) {
            pixel.set_raw_channel(channel, value);
        }
    }

    fn effect_data(&self, index: i32) -> u8 {
        self.find_pixel(index).map_or(0, |pixel| pixel.effect_data())
    }

    fn set_effect_data(&self, index: i32, value: u8) {
        if let Some(pixel) = self.find_pixel(index) {
            pixel.set_effect_data(value);
        }
    }

    fn get(&self, index: i32) -> Color {
        self.find_pixel(index)
            .map_or(Color::BLACK, |pixel| pixel.get_raw())
    }

    fn set(&self, index: i32, color: Color) {
        if let Some(pixel) = self.find_pixel(index) {
            pixel.set_raw(color);
        }
    }
}
