use starfall_background::{Palette, STYLE_PROPERTIES, StarField};
use starfall_core::{ColorPair, GlowColor, Rgb};

#[test]
fn batch_styles_carry_every_property() {
    let field = StarField::new(25, Some(2024)).unwrap();
    for style in field.styles(Palette::standard()) {
        let names: Vec<&str> = style
            .split(';')
            .filter_map(|d| d.trim().split_once(':').map(|(name, _)| name))
            .collect();
        assert_eq!(names, STYLE_PROPERTIES);
    }
}

#[test]
fn overridden_palette_reaches_styles() {
    let field = StarField::new(40, Some(3)).unwrap();
    let palette = Palette::with_overrides(
        GlowColor::ALL.map(|c| (c, ColorPair::new(Rgb::new(9, 9, 9), Rgb::new(8, 8, 8)))),
    );
    for style in field.styles(&palette) {
        assert!(style.contains("--star-color: rgb(9, 9, 9);"));
        assert!(style.contains("--star-glow-color: rgba(8, 8, 8, 0.8);"));
    }
}

#[test]
fn stars_serialize_with_flat_trajectory() {
    let field = StarField::new(1, Some(10)).unwrap();
    let star = &field.stars()[0];
    let json = serde_json::to_value(star).unwrap();

    assert_eq!(json["id"], 0);
    assert_eq!(json["origin"], star.origin().name());
    assert_eq!(json["color"], star.color().name());
    assert_eq!(json["magnitude"], star.magnitude().name());
    assert_eq!(json["start_left"], star.start_left());
    assert_eq!(json["end_top"], star.end_top());
    assert_eq!(json["duration"], star.duration());
}
