mod tests {
    use pixelview::color::{Channel, Color};
    use pixelview::correction::{ColorCorrection, CorrectionConfig};
    use pixelview::gamma::GammaTable;

    fn expected_gamma(value: u8, gamma: f32) -> u8 {
        libm::roundf(255.0 * libm::powf(f32::from(value) / 255.0, gamma)) as u8
    }

    #[test]
    fn test_identity_by_default() {
        let correction = ColorCorrection::new();
        for value in 0..=255u8 {
            for channel in Channel::ALL {
                assert_eq!(correction.correct_channel(value, 255, channel), value);
                assert_eq!(correction.uncorrect_channel(value, 255, channel), value);
            }
        }
    }

    #[test]
    fn test_gamma_table_values() {
        let table = GammaTable::new(2.2);
        assert_eq!(table.gamma(), 2.2);
        assert_eq!(table.forward(0), 0);
        assert_eq!(table.forward(255), 255);
        assert_eq!(table.inverse(0), 0);
        assert_eq!(table.inverse(255), 255);
        assert_eq!(table.forward(128), expected_gamma(128, 2.2));
        assert_eq!(table.forward(128), 56);
        assert_eq!(table.inverse(56), expected_gamma(56, 1.0 / 2.2));
    }

    #[test]
    fn test_gamma_zero_is_identity() {
        let mut correction = ColorCorrection::new();
        correction.set_gamma(2.8);
        correction.set_gamma(0.0);
        for value in 0..=255u8 {
            assert_eq!(correction.gamma_table().forward(value), value);
            assert_eq!(correction.gamma_table().inverse(value), value);
        }
    }

    #[test]
    fn test_gamma_round_trip_is_bounded() {
        let table = GammaTable::new(2.2);
        for value in 0..=255u8 {
            let back = table.inverse(table.forward(value));
            let error = (i16::from(back) - i16::from(value)).abs();
            // Dark values collapse onto few physical levels
            assert!(error <= 16, "value {value} came back as {back}");
            if value >= 140 {
                assert!(error <= 1, "value {value} came back as {back}");
            }
        }
    }

    #[test]
    fn test_forward_table_is_monotonic() {
        let table = GammaTable::new(2.8);
        for value in 1..=255u8 {
            assert!(table.forward(value) >= table.forward(value - 1));
            assert!(table.inverse(value) >= table.inverse(value - 1));
        }
    }

    #[test]
    fn test_correct_uncorrect_round_trip() {
        let mut correction = ColorCorrection::new();
        correction.set_gamma(1.0);
        for value in 0..=255u8 {
            for channel in Channel::ALL {
                let physical = correction.correct_channel(value, 255, channel);
                let logical = correction.uncorrect_channel(physical, 255, channel);
                assert!((i16::from(logical) - i16::from(value)).abs() <= 1);
            }
        }

        correction.set_gamma(2.2);
        for value in 140..=255u8 {
            let physical = correction.correct_channel(value, 255, Channel::Red);
            let logical = correction.uncorrect_channel(physical, 255, Channel::Red);
            assert!((i16::from(logical) - i16::from(value)).abs() <= 1);
        }
    }

    #[test]
    fn test_brightness_skips_white() {
        let correction = ColorCorrection::new();
        assert_eq!(correction.correct_channel(255, 128, Channel::Red), 128);
        assert_eq!(correction.correct_channel(255, 128, Channel::White), 255);
        assert_eq!(correction.correct_channel(255, 0, Channel::Green), 0);
        assert_eq!(correction.correct_channel(255, 0, Channel::White), 255);
    }

    #[test]
    fn test_max_brightness() {
        let mut correction = ColorCorrection::new();
        correction.set_max_brightness(Color::new(255, 128, 0, 64));
        let corrected = correction.correct(Color::WHITE, 255);
        assert_eq!(corrected, Color::new(255, 128, 0, 64));
    }

    #[test]
    fn test_set_correction_from_fractions() {
        let mut correction = ColorCorrection::new();
        correction.set_correction(1.0, 0.5, 0.0, 1.0);
        assert_eq!(correction.max_brightness(), Color::new(255, 128, 0, 255));
    }

    #[test]
    fn test_uncorrect_degenerate() {
        let mut correction = ColorCorrection::new();
        correction.set_max_brightness(Color::new(255, 0, 255, 255));
        assert_eq!(correction.uncorrect_channel(200, 255, Channel::Green), 0);
        assert_eq!(correction.uncorrect_channel(200, 0, Channel::Red), 0);
        assert_eq!(correction.uncorrect_channel(200, 0, Channel::White), 0);
    }

    #[test]
    fn test_uncorrect_scales_by_brightness() {
        let correction = ColorCorrection::new();
        // 64 * 255 / 128 = 127
        assert_eq!(correction.uncorrect_channel(64, 128, Channel::Red), 127);
        assert_eq!(correction.uncorrect_channel(64, 128, Channel::White), 64);
        // Saturates instead of wrapping
        assert_eq!(correction.uncorrect_channel(200, 128, Channel::Blue), 255);
    }

    #[test]
    fn test_from_config() {
        let correction = ColorCorrection::from_config(&CorrectionConfig {
            gamma: 2.2,
            max_brightness: Color::WHITE,
        });
        assert_eq!(correction.gamma(), 2.2);
        assert_eq!(correction.brightness(), 255);
        assert_eq!(correction.correct_channel(128, 255, Channel::Red), 56);
    }
}
