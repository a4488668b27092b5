//! Pixel buffers
//!
//! Everything a [`RangeView`](crate::view::RangeView) can address implements
//! [`PixelBuffer`]: the flat [`PixelStore`], the color-correcting
//! [`CorrectedBuffer`] wrapper and the
//! [`SegmentPartition`](crate::partition::SegmentPartition).
//!
//! Buffers are written through shared references. Views are cheap copies that
//! alias the same storage, and only one writer touches a buffer per tick.

mod corrected;
mod store;

pub use corrected::CorrectedBuffer;
pub use store::{Pixel, PixelStore};

use crate::color::{Channel, Color};

/// Indexed access to pixel channels
///
/// Indices outside `0..size()` read as zero and ignore writes.
pub trait PixelBuffer {
    /// Number of addressable pixels
    fn size(&self) -> i32;

    fn channel(&self, index: i32, channel: Channel) -> u8;

    fn set_channel(&self, index: i32, channel: Channel, value: u8);

    /// Per-pixel scratch byte owned by effects
    fn effect_data(&self, index: i32) -> u8;

    fn set_effect_data(&self, index: i32, value: u8);

    fn get(&self, index: i32) -> Color {
        Color::new(
            self.channel(index, Channel::Red),
            self.channel(index, Channel::Green),
            self.channel(index, Channel::Blue),
            self.channel(index, Channel::White),
        )
    }

    fn set(&self, index: i32, color: Color) {
        for channel in Channel::ALL {
            self.set_channel(index, channel, color.channel(channel));
        }
    }
}
