mod tests {
    use embassy_time::{Duration, Instant};
    use pixelview::buffer::{PixelBuffer, PixelStore};
    use pixelview::color::Color;
    use pixelview::correction::ColorCorrection;
    use pixelview::light::LightValues;
    use pixelview::transition::{AddressableFade, TransitionClock, ValueTransition};

    const STEPS: u32 = 100;

    fn red_target() -> LightValues {
        LightValues::new(true, 255, Color::rgb(255, 0, 0))
    }

    /// Run a fade over one pixel and collect its red channel after each tick
    fn run_fade(store: &PixelStore<1>, fade: &mut AddressableFade) -> Vec<u8> {
        let correction = ColorCorrection::new();
        let pixels = store.pixels(&correction).with_brightness(255);
        (1..=STEPS)
            .map(|step| {
                let result = fade.apply(&pixels, step as f32 / STEPS as f32, false);
                assert!(result.is_none());
                store.get(0).red
            })
            .collect()
    }

    #[test]
    fn test_value_transition_u8() {
        let mut transition = ValueTransition::new_u8(0);
        assert_eq!(transition.current(), 0);
        assert!(!transition.is_transitioning());
        transition.set(100, Duration::from_millis(100), Instant::from_millis(0));
        assert!(transition.is_transitioning());

        transition.tick(Instant::from_millis(50));
        assert_eq!(transition.current(), 50);

        transition.tick(Instant::from_millis(100));
        assert_eq!(transition.current(), 100);
        assert!(!transition.is_transitioning());
    }

    #[test]
    fn test_value_transition_color() {
        let mut transition = ValueTransition::new_color(Color::BLACK);
        assert_eq!(transition.current(), Color::BLACK);
        transition.set(
            Color::new(255, 255, 255, 0),
            Duration::from_millis(100),
            Instant::from_millis(0),
        );
        assert!(transition.is_transitioning());

        transition.tick(Instant::from_millis(50));
        assert_eq!(transition.current(), Color::new(128, 128, 128, 0));

        transition.tick(Instant::from_millis(200));
        assert_eq!(transition.current(), Color::new(255, 255, 255, 0));
        assert!(!transition.is_transitioning());
    }

    #[test]
    fn test_value_transition_zero_duration() {
        let mut transition = ValueTransition::new_u8(10);
        transition.set(200, Duration::from_millis(0), Instant::from_millis(5));
        assert_eq!(transition.current(), 200);
        assert!(!transition.is_transitioning());
    }

    #[test]
    fn test_transition_clock() {
        let clock = TransitionClock::new(Instant::from_millis(1000), Duration::from_millis(200));
        assert_eq!(clock.progress(Instant::from_millis(500)), 0.0);
        assert_eq!(clock.progress(Instant::from_millis(1000)), 0.0);
        assert_eq!(clock.progress(Instant::from_millis(1050)), 0.25);
        assert_eq!(clock.progress(Instant::from_millis(1400)), 1.0);
        assert!(!clock.is_finished(Instant::from_millis(1199)));
        assert!(clock.is_finished(Instant::from_millis(1200)));
    }

    #[test]
    fn test_fade_reaches_target_exactly() {
        let store = PixelStore::<1>::new(1).unwrap();
        let mut fade = AddressableFade::new();
        fade.start(red_target(), &ColorCorrection::new());
        assert!(fade.is_active());
        assert_eq!(fade.target_color(), Color::rgb(255, 0, 0));

        let reds = run_fade(&store, &mut fade);
        assert_eq!(*reds.last().unwrap(), 255);
        assert!(!fade.is_active());
    }

    #[test]
    fn test_fade_starts_early_despite_small_alphas() {
        let store = PixelStore::<1>::new(1).unwrap();
        let mut fade = AddressableFade::new();
        fade.start(red_target(), &ColorCorrection::new());

        let reds = run_fade(&store, &mut fade);
        let first_change = reds.iter().position(|&red| red != 0).unwrap();
        assert!(first_change < 9, "first change at tick {first_change}");
    }

    #[test]
    fn test_fade_is_monotonic() {
        let store = PixelStore::<1>::new(1).unwrap();
        let mut fade = AddressableFade::new();
        fade.start(red_target(), &ColorCorrection::new());

        let reds = run_fade(&store, &mut fade);
        assert!(reds.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_fade_off_goes_black() {
        let store = PixelStore::<1>::new(1).unwrap();
        store.set(0, Color::new(255, 200, 100, 50));
        let mut fade = AddressableFade::new();
        fade.start(LightValues::OFF, &ColorCorrection::new());
        assert_eq!(fade.target_color(), Color::BLACK);

        let reds = run_fade(&store, &mut fade);
        assert!(reds.windows(2).all(|pair| pair[0] >= pair[1]));
        assert_eq!(store.get(0), Color::BLACK);
    }

    #[test]
    fn test_fade_target_includes_brightness() {
        let mut correction = ColorCorrection::new();
        correction.set_gamma(2.2);
        let mut fade = AddressableFade::new();
        fade.start(
            LightValues::new(true, 128, Color::new(255, 255, 255, 255)),
            &correction,
        );
        assert_eq!(fade.target_color(), Color::new(56, 56, 56, 255));
    }

    #[test]
    fn test_fade_interrupted_by_effect() {
        let store = PixelStore::<1>::new(1).unwrap();
        let correction = ColorCorrection::new();
        let pixels = store.pixels(&correction);
        let mut fade = AddressableFade::new();
        fade.start(red_target(), &correction);

        assert_eq!(fade.apply(&pixels, 0.5, true), Some(red_target()));
        assert!(!fade.is_active());
        assert_eq!(store.get(0), Color::BLACK);
        assert_eq!(fade.apply(&pixels, 0.6, true), None);
    }

    #[test]
    fn test_fade_restart_resets_state() {
        let store = PixelStore::<1>::new(1).unwrap();
        let mut fade = AddressableFade::new();
        fade.start(red_target(), &ColorCorrection::new());
        let first = run_fade(&store, &mut fade);

        store.clear();
        fade.start(red_target(), &ColorCorrection::new());
        let second = run_fade(&store, &mut fade);
        assert_eq!(first, second);
    }

    #[test]
    fn test_cancel_stops_fade() {
        let store = PixelStore::<1>::new(1).unwrap();
        let correction = ColorCorrection::new();
        let pixels = store.pixels(&correction);
        let mut fade = AddressableFade::new();
        fade.start(red_target(), &correction);
        assert_eq!(fade.apply(&pixels, 0.5, false), None);
        let halfway = store.get(0);
        assert!(halfway.red > 0);

        fade.cancel();
        assert!(!fade.is_active());
        assert_eq!(fade.apply(&pixels, 1.0, false), None);
        assert_eq!(store.get(0), halfway);
    }

    #[test]
    fn test_inactive_fade_leaves_pixels() {
        let store = PixelStore::<1>::new(1).unwrap();
        store.set(0, Color::rgb(1, 2, 3));
        let correction = ColorCorrection::new();
        let mut fade = AddressableFade::new();
        assert_eq!(fade.apply(&store.pixels(&correction), 0.5, false), None);
        assert_eq!(store.get(0), Color::rgb(1, 2, 3));
    }
}
