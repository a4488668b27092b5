use super::Color;

/// Convert a Kelvin temperature to an RGB color
///
/// Piecewise curve fit of the black body locus; below 6600K red saturates,
/// above it blue does. The white channel is left off.
#[allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub(super) fn kelvin_to_color(kelvin: u16) -> Color {
    let temp = (kelvin as f32 / 100.0).clamp(10.0, 400.0);

    let red = if temp <= 66.0 {
        255.0
    } else {
        329.698_73 * libm::powf(temp - 60.0, -0.133_204_76)
    }
    .clamp(0.0, 255.0);

    let green = if temp <= 66.0 {
        99.470_8 * libm::logf(temp) - 161.119_57
    } else {
        288.122_17 * libm::powf(temp - 60.0, -0.075_514_85)
    }
    .clamp(0.0, 255.0);

    let blue = if temp >= 66.0 {
        255.0
    } else if temp <= 19.0 {
        0.0
    } else {
        138.517_73 * libm::logf(temp - 10.0) - 305.044_8
    }
    .clamp(0.0, 255.0);

    Color::rgb(red as u8, green as u8, blue as u8)
}
