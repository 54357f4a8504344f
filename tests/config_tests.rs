// Host-side tests for presets, themes and start-up options.

use portfolio_web::core::{
    AppConfig, AudioConfig, BackgroundConfig, Intensity, ParseConfigError, Rgb, Variant,
};

#[test]
fn intensity_table_matches_presets() {
    let low = Intensity::Low.settings();
    assert_eq!((low.orb_count, low.speed, low.size, low.max_opacity), (3, 0.2, 0.7, 0.3));
    let med = Intensity::Medium.settings();
    assert_eq!((med.orb_count, med.speed, med.size, med.max_opacity), (5, 0.3, 1.0, 0.5));
    let high = Intensity::High.settings();
    assert_eq!((high.orb_count, high.speed, high.size, high.max_opacity), (8, 0.4, 1.3, 0.7));
}

#[test]
fn presets_grow_monotonically() {
    for pair in Intensity::ALL.windows(2) {
        let (a, b) = (pair[0].settings(), pair[1].settings());
        assert!(a.orb_count < b.orb_count);
        assert!(a.particle_count < b.particle_count);
        assert!(a.star_count < b.star_count);
        assert!(a.max_opacity < b.max_opacity);
    }
}

#[test]
fn parses_names_case_insensitively() {
    assert_eq!("HIGH".parse::<Intensity>(), Ok(Intensity::High));
    assert_eq!(" low ".parse::<Intensity>(), Ok(Intensity::Low));
    assert_eq!(
        "extreme".parse::<Intensity>(),
        Err(ParseConfigError::Intensity("extreme".into()))
    );
    assert_eq!("Space".parse::<Variant>(), Ok(Variant::Space));
    assert_eq!("default".parse::<Variant>(), Ok(Variant::Purple));
    assert_eq!("alternate".parse::<Variant>(), Ok(Variant::Dark));
    assert!("neon".parse::<Variant>().is_err());
}

#[test]
fn defaults_are_medium_purple() {
    let cfg = BackgroundConfig::default();
    assert_eq!(cfg.intensity, Intensity::Medium);
    assert_eq!(cfg.variant, Variant::Purple);
}

#[test]
fn themes_have_palettes_and_black_base() {
    for v in Variant::ALL {
        let theme = v.theme();
        assert!(!theme.palette.is_empty());
        assert_eq!(theme.darkest(), Rgb::BLACK);
        assert!(theme.css_gradient().starts_with("linear-gradient("));
    }
    assert!(Variant::Space.theme().starfield);
    assert!(!Variant::Purple.theme().starfield);
}

#[test]
fn audio_defaults() {
    let a = AudioConfig::default();
    assert_eq!(a.track_src, "/sounds/background-music.mp3");
    assert_eq!(a.track_volume, 0.1);
    assert_eq!(a.effect_volume, 0.15);
}

#[test]
fn query_string_options() {
    let cfg = AppConfig::from_query("?seed=42&intensity=high&muted=1");
    assert_eq!(cfg.seed, Some(42));
    assert_eq!(cfg.intensity_override, Some(Intensity::High));
    assert!(cfg.start_muted);

    let page = BackgroundConfig::new(Variant::Dark, Intensity::Low);
    assert_eq!(
        cfg.background_for(page),
        BackgroundConfig::new(Variant::Dark, Intensity::High)
    );
}

#[test]
fn bad_query_values_are_ignored() {
    let cfg = AppConfig::from_query("seed=abc&intensity=loud&muted=0&theme=x&&");
    assert_eq!(cfg, AppConfig::default());
    let page = BackgroundConfig::new(Variant::Space, Intensity::Low);
    assert_eq!(cfg.background_for(page), page);
    assert_eq!(AppConfig::from_query(""), AppConfig::default());
}
