//! MAUI named color constants (`Colors.*`) usable as XAML values.

use crate::model::Color;

/// Named colors as `(name, 0xRRGGBB)`.
const NAMED_COLORS: &[(&str, u32)] = &[
    ("AliceBlue", 0xF0F8FF),
    ("AntiqueWhite", 0xFAEBD7),
    ("Aqua", 0x00FFFF),
    ("Aquamarine", 0x7FFFD4),
    ("Azure", 0xF0FFFF),
    ("Beige", 0xF5F5DC),
    ("Black", 0x000000),
    ("Blue", 0x0000FF),
    ("BlueViolet", 0x8A2BE2),
    ("Brown", 0xA52A2A),
    ("CadetBlue", 0x5F9EA0),
    ("Chocolate", 0xD2691E),
    ("Coral", 0xFF7F50),
    ("CornflowerBlue", 0x6495ED),
    ("Crimson", 0xDC143C),
    ("Cyan", 0x00FFFF),
    ("DarkBlue", 0x00008B),
    ("DarkGray", 0xA9A9A9),
    ("DarkGreen", 0x006400),
    ("DarkOrange", 0xFF8C00),
    ("DarkRed", 0x8B0000),
    ("DeepPink", 0xFF1493),
    ("DeepSkyBlue", 0x00BFFF),
    ("DimGray", 0x696969),
    ("DodgerBlue", 0x1E90FF),
    ("Firebrick", 0xB22222),
    ("ForestGreen", 0x228B22),
    ("Fuchsia", 0xFF00FF),
    ("Gainsboro", 0xDCDCDC),
    ("Gold", 0xFFD700),
    ("Goldenrod", 0xDAA520),
    ("Gray", 0x808080),
    ("Green", 0x008000),
    ("GreenYellow", 0xADFF2F),
    ("HotPink", 0xFF69B4),
    ("Indigo", 0x4B0082),
    ("Ivory", 0xFFFFF0),
    ("Khaki", 0xF0E68C),
    ("Lavender", 0xE6E6FA),
    ("LightBlue", 0xADD8E6),
    ("LightGray", 0xD3D3D3),
    ("LightGreen", 0x90EE90),
    ("LightPink", 0xFFB6C1),
    ("LightYellow", 0xFFFFE0),
    ("Lime", 0x00FF00),
    ("LimeGreen", 0x32CD32),
    ("Magenta", 0xFF00FF),
    ("Maroon", 0x800000),
    ("MidnightBlue", 0x191970),
    ("Navy", 0x000080),
    ("Olive", 0x808000),
    ("Orange", 0xFFA500),
    ("OrangeRed", 0xFF4500),
    ("Orchid", 0xDA70D6),
    ("Pink", 0xFFC0CB),
    ("Plum", 0xDDA0DD),
    ("Purple", 0x800080),
    ("Red", 0xFF0000),
    ("RoyalBlue", 0x4169E1),
    ("Salmon", 0xFA8072),
    ("SeaGreen", 0x2E8B57),
    ("Silver", 0xC0C0C0),
    ("SkyBlue", 0x87CEEB),
    ("SlateGray", 0x708090),
    ("Snow", 0xFFFAFA),
    ("SteelBlue", 0x4682B4),
    ("Tan", 0xD2B48C),
    ("Teal", 0x008080),
    ("Tomato", 0xFF6347),
    ("Turquoise", 0x40E0D0),
    ("Violet", 0xEE82EE),
    ("Wheat", 0xF5DEB3),
    ("White", 0xFFFFFF),
    ("WhiteSmoke", 0xF5F5F5),
    ("Yellow", 0xFFFF00),
    ("YellowGreen", 0x9ACD32),
];

/// Look up a named color, ignoring case and an optional `Colors.` prefix.
///
/// `Transparent` is white with zero alpha, as MAUI defines it.
pub fn named_color(name: &str) -> Option<Color> {
    let name = name.trim();
    let name = name.strip_prefix("Colors.").unwrap_or(name);

    if name.eq_ignore_ascii_case("Transparent") {
        return Some(Color::from_bytes(255, 255, 255, 0));
    }

    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, rgb)| {
            let [_, r, g, b] = rgb.to_be_bytes();
            Color::from_bytes(r, g, b, 255)
        })
}
