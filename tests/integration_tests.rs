//! Integration tests for color conversion and palette loading.
//!
//! These exercise the public API end to end: hex strings in, adjusted
//! colors and hex strings out, and resource dictionaries scanned into
//! validated palettes.

use pretty_assertions::assert_eq;
use xaml_colors::config::float_cmp::approx_eq;
use xaml_colors::config::HEX_ROUND_TRIP_TOLERANCE;
use xaml_colors::{
    darken, from_hex, from_hex_rgba, lighten, load_palette, to_hex, to_hex_with_alpha, with_alpha,
    with_opacity, Color, ColorError,
};

/// Dictionary shaped like the default MAUI template.
const COLORS_XAML: &str = r##"<?xml version="1.0" encoding="UTF-8" ?>
<?xaml-comp compile="true" ?>
<ResourceDictionary
    xmlns="http://schemas.microsoft.com/dotnet/2021/maui"
    xmlns:x="http://schemas.microsoft.com/winfx/2009/xaml">

    <!-- Note: For Android please see also Platforms\Android\Resources\values\colors.xml -->

    <Color x:Key="Primary">#512BD4</Color>
    <Color x:Key="PrimaryDark">#ac99ea</Color>
    <Color x:Key="PrimaryDarkText">#242424</Color>
    <Color x:Key="Secondary">#DFD8F7</Color>
    <Color x:Key="Tertiary">#2B0B98</Color>
    <Color x:Key="White">White</Color>
    <Color x:Key="Black">#000</Color>
    <Color x:Key="Magenta">#D600AA</Color>
    <Color x:Key="Gray100">#E1E1E1</Color>
    <Color x:Key="Gray200">#C8C8C8</Color>
    <Color x:Key="Gray950">#141414</Color>
    <Color x:Key="Overlay">#80000000</Color>

    <SolidColorBrush x:Key="PrimaryBrush" Color="{StaticResource Primary}"/>
    <SolidColorBrush x:Key="WhiteBrush" Color="{StaticResource White}"/>
</ResourceDictionary>
"##;

// ==================== Color utility properties ====================

#[test]
fn test_alpha_setters_clamp() {
    let c = Color::new(0.1, 0.2, 0.3, 0.4);
    for a in [-2.0, -0.1, 0.0, 0.33, 1.0, 1.01, 50.0] {
        let out = with_alpha(c, a);
        assert_eq!(out.alpha, a.clamp(0.0, 1.0));
        assert_eq!((out.red, out.green, out.blue), (c.red, c.green, c.blue));
    }
    for p in [-100, 0, 1, 42, 100, 101, i32::MAX] {
        assert_eq!(with_opacity(c, p).alpha, p.clamp(0, 100) as f64 / 100.0);
    }
}

#[test]
fn test_tone_extremes() {
    let c = from_hex("#80512BD4").unwrap();

    assert_eq!(lighten(c, 0.0), c);
    assert_eq!(darken(c, 0.0), c);

    let white = lighten(c, 1.0);
    assert!(approx_eq(white.red, 1.0) && approx_eq(white.green, 1.0) && approx_eq(white.blue, 1.0));
    assert_eq!(white.alpha, c.alpha);

    let black = darken(c, 1.0);
    assert_eq!((black.red, black.green, black.blue), (0.0, 0.0, 0.0));
    assert_eq!(black.alpha, c.alpha);
}

#[test]
fn test_hex_encoding_examples() {
    assert_eq!(to_hex(Color::new(1.0, 0.0, 0.0, 1.0)), "#FF0000");
    assert_eq!(to_hex_with_alpha(Color::new(1.0, 0.0, 0.0, 0.5)), "#FF00007F");
}

#[test]
fn test_hex_decoding_examples() {
    assert_eq!(from_hex("#F00").unwrap(), from_hex("#FF0000").unwrap());
    assert_eq!(from_hex("#F00").unwrap(), Color::new(1.0, 0.0, 0.0, 1.0));

    let argb = from_hex("#803D9BD7").unwrap();
    assert!((argb.alpha - 0.502).abs() < 0.001);

    let rgba = from_hex_rgba("#3D9BD780").unwrap();
    assert!((rgba.alpha - 0.502).abs() < 0.001);
    assert_eq!(argb, rgba);

    for bad in ["", "12", "ZZZZZZ"] {
        assert!(matches!(
            from_hex(bad),
            Err(ColorError::InvalidFormat { .. })
        ));
    }
}

#[test]
fn test_round_trip_within_tolerance() {
    // Truncating encode loses at most one byte step.
    let samples = [
        Color::new(0.0, 0.0, 0.0, 0.0),
        Color::new(0.123, 0.456, 0.789, 0.5),
        Color::new(1.0, 0.999, 0.001, 0.75),
        Color::new(0.3333, 0.6667, 0.5, 1.0),
    ];
    for c in samples {
        let back = from_hex_rgba(&to_hex_with_alpha(c)).unwrap();
        for (orig, decoded) in [
            (c.red, back.red),
            (c.green, back.green),
            (c.blue, back.blue),
            (c.alpha, back.alpha),
        ] {
            assert!(decoded <= orig + 1e-12);
            assert!(orig - decoded < HEX_ROUND_TRIP_TOLERANCE);
        }
    }
}

#[test]
fn test_serialized_color() {
    let c = Color::new(1.0, 0.0, 0.0, 0.5);
    insta::assert_snapshot!(serde_json::to_string_pretty(&c).unwrap(), @r###"
    {
      "red": 1.0,
      "green": 0.0,
      "blue": 0.0,
      "alpha": 0.5
    }
    "###);
}

// ==================== Palette loading ====================

#[test]
fn test_load_palette() {
    let palette = load_palette(COLORS_XAML).unwrap();
    assert_eq!(palette.len(), 12);

    assert_eq!(to_hex(palette.get("Primary").unwrap().color), "#512BD4");
    assert_eq!(to_hex(palette.get("PrimaryDark").unwrap().color), "#AC99EA");
    assert_eq!(palette.get("Black").unwrap().color, Color::BLACK);
    assert_eq!(palette.get("White").unwrap().color, Color::WHITE);
    assert_eq!(to_hex_with_alpha(palette.get("Overlay").unwrap().color), "#00000080");
}

#[test]
fn test_palette_groups() {
    let palette = load_palette(COLORS_XAML).unwrap();
    let groups = palette.groups();

    let names: Vec<_> = groups.keys().copied().collect();
    assert_eq!(
        names,
        vec!["Black", "Gray", "Magenta", "Overlay", "Primary", "Secondary", "Tertiary", "White"]
    );

    let primary: Vec<_> = groups["Primary"].iter().map(|r| r.key.as_str()).collect();
    assert_eq!(primary, vec!["Primary", "PrimaryDark", "PrimaryDarkText"]);

    let gray: Vec<_> = groups["Gray"].iter().map(|r| r.key.as_str()).collect();
    assert_eq!(gray, vec!["Gray100", "Gray200", "Gray950"]);
}

#[test]
fn test_load_palette_resolves_named_color() {
    let palette = load_palette(COLORS_XAML).unwrap();
    let white = palette.get("White").unwrap();
    assert_eq!(white.line, 14);
    assert_eq!(to_hex_with_alpha(white.color), "#FFFFFFFF");

    let content = COLORS_XAML.replace(">White<", ">Transparent<");
    let palette = load_palette(&content).unwrap();
    assert!(palette.get("White").unwrap().color.is_transparent());
}

#[test]
fn test_load_palette_rejects_unknown_name() {
    let content = COLORS_XAML.replace(">White<", ">Whiteish<");
    let err = load_palette(&content).unwrap_err();
    assert!(matches!(err, ColorError::ParseError { line: 14, .. }));
}

#[test]
fn test_load_palette_duplicate_key_fails() {
    let content = COLORS_XAML.replace("x:Key=\"Tertiary\"", "x:Key=\"Secondary\"");
    let err = load_palette(&content).unwrap_err();
    assert!(matches!(err, ColorError::ValidationFailed { count: 1 }));
}

#[test]
fn test_load_palette_empty() {
    let err = load_palette("<ResourceDictionary/>").unwrap_err();
    assert!(matches!(err, ColorError::NoColorsFound));
    assert_eq!(err.code_value(), -11);
}
