//! Four-channel pixel color
//!
//! [`Color`] is the value type stored per pixel. All arithmetic saturates at
//! the channel bounds and scaling uses [`scale8`], so nothing here can
//! overflow.

mod kelvin;

use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use smart_leds::RGB8;
use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::math8::scale8;

/// A single color channel of a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    White,
}

impl Channel {
    /// All channels in storage order
    pub const ALL: [Self; 4] = [Self::Red, Self::Green, Self::Blue, Self::White];
}

/// RGBW color with 8 bits per channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub white: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8, white: u8) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }

    /// Color with the white channel off
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 0)
    }

    /// Create a color from a u32 value (0xWWRRGGBB format)
    pub const fn from_u32(color: u32) -> Self {
        Self {
            white: ((color >> 24) & 0xFF) as u8,
            red: ((color >> 16) & 0xFF) as u8,
            green: ((color >> 8) & 0xFF) as u8,
            blue: (color & 0xFF) as u8,
        }
    }

    /// Convert an HSV color (all components 0-255), white channel off
    pub fn from_hsv(hue: u8, sat: u8, val: u8) -> Self {
        hsv2rgb(Hsv { hue, sat, val }).into()
    }

    /// Approximate the color of a black body at `kelvin`
    ///
    /// Supports temperatures between 1000K and 40000K.
    pub fn from_color_temperature(kelvin: u16) -> Self {
        kelvin::kelvin_to_color(kelvin)
    }

    pub const fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::White => self.white,
        }
    }

    pub const fn set_channel(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
            Channel::White => self.white = value,
        }
    }

    /// Apply `f` to every channel
    #[must_use]
    pub fn map(self, mut f: impl FnMut(Channel, u8) -> u8) -> Self {
        Self {
            red: f(Channel::Red, self.red),
            green: f(Channel::Green, self.green),
            blue: f(Channel::Blue, self.blue),
            white: f(Channel::White, self.white),
        }
    }

    /// Keep `amount`/255 of the distance from white
    ///
    /// 255 leaves the color unchanged, 0 yields pure white.
    #[must_use]
    pub fn fade_to_white(self, amount: u8) -> Self {
        Self::WHITE - (Self::WHITE - self) * amount
    }

    /// Keep `amount`/255 of the brightness
    ///
    /// 255 leaves the color unchanged, 0 yields black.
    #[must_use]
    pub fn fade_to_black(self, amount: u8) -> Self {
        self * amount
    }

    /// Add `delta` to every channel, saturating at 255
    #[must_use]
    pub fn lighten(self, delta: u8) -> Self {
        self.map(|_, value| value.saturating_add(delta))
    }

    /// Subtract `delta` from every channel, saturating at 0
    #[must_use]
    pub fn darken(self, delta: u8) -> Self {
        self.map(|_, value| value.saturating_sub(delta))
    }

    pub const fn is_black(self) -> bool {
        self.red == 0 && self.green == 0 && self.blue == 0 && self.white == 0
    }
}

impl Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.map(|channel, value| value.saturating_add(rhs.channel(channel)))
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Color {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.map(|channel, value| value.saturating_sub(rhs.channel(channel)))
    }
}

impl SubAssign for Color {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<u8> for Color {
    type Output = Self;

    fn mul(self, scale: u8) -> Self {
        self.map(|_, value| scale8(value, scale))
    }
}

impl MulAssign<u8> for Color {
    fn mul_assign(&mut self, scale: u8) {
        *self = *self * scale;
    }
}

impl From<RGB8> for Color {
    fn from(rgb: RGB8) -> Self {
        Self::rgb(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Color> for RGB8 {
    fn from(color: Color) -> Self {
        RGB8 {
            r: color.red,
            g: color.green,
            b: color.blue,
        }
    }
}
