use super::PixelBuffer;
use crate::color::Channel;
use crate::correction::ColorCorrection;

/// Buffer wrapper that reads and writes logical values
///
/// Writes are corrected before they reach `parent`, reads are uncorrected.
/// Effect data passes through untouched.
#[derive(Clone, Copy)]
pub struct CorrectedBuffer<'a> {
    parent: &'a dyn PixelBuffer,
    correction: &'a ColorCorrection,
    brightness: u8,
}

impl<'a> CorrectedBuffer<'a> {
    pub const fn new(
        parent: &'a dyn PixelBuffer,
        correction: &'a ColorCorrection,
        brightness: u8,
    ) -> Self {
        Self {
            parent,
            correction,
            brightness,
        }
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }
}

impl PixelBuffer for CorrectedBuffer<'_> {
    fn size(&self) -> i32 {
        self.parent.size()
    }

    fn channel(&self, index: i32, channel: Channel) -> u8 {
        let raw = self.parent.channel(index, channel);
        self.correction
            .uncorrect_channel(raw, self.brightness, channel)
    }

    fn set_channel(&self, index: i32, channel: Channel, value: u8) {
        let corrected = self
            .correction
            .correct_channel(value, self.brightness, channel);
        self.parent.set_channel(index, channel, corrected);
    }

    fn effect_data(&self, index: i32) -> u8 {
        self.parent.effect_data(index)
    }

    fn set_effect_data(&self, index: i32, value: u8) {
        self.parent.set_effect_data(index, value);
    }
}
