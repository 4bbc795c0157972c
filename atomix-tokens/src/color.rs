//! Hex colour helpers used when deriving palettes and token values.
//!
//! The string helpers take and return CSS colour strings. Input they cannot
//! parse is returned unchanged so a token like `var(--x)` survives a pass
//! through them.
use std::fmt;

/// An opaque sRGB colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// `#000000`.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// `#ffffff`.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Creates a colour from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            6 => Some(Self::new(
                u8::from_str_radix(&digits[0..2], 16).ok()?,
                u8::from_str_radix(&digits[2..4], 16).ok()?,
                u8::from_str_radix(&digits[4..6], 16).ok()?,
            )),
            3 => {
                let channel = |idx: usize| {
                    u8::from_str_radix(&digits[idx..idx + 1], 16)
                        .ok()
                        .map(|v| v * 17)
                };
                Some(Self::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => None,
        }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// The `"r, g, b"` triple used by the `*-rgb` tokens.
    pub fn to_rgb_triple(self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }

    /// WCAG relative luminance in `[0, 1]`.
    pub fn luminance(self) -> f64 {
        let linear = |c: u8| {
            let v = f64::from(c) / 255.0;
            if v <= 0.03928 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// Mixes each channel toward white by `amount` (0-1).
    pub fn lighten(self, amount: f64) -> Self {
        self.map(|v| v + (255.0 - v) * amount)
    }

    /// Scales each channel toward black by `amount` (0-1).
    pub fn darken(self, amount: f64) -> Self {
        self.map(|v| v * (1.0 - amount))
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        let channel = |c: u8| f(f64::from(c)).round().clamp(0.0, 255.0) as u8;
        Self::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    #[inline]
    fn from(color: Rgb) -> Self {
        [color.r, color.g, color.b]
    }
}

/// `"r, g, b"` for a hex colour.
pub fn rgb_triple(color: &str) -> Option<String> {
    Rgb::from_hex(color).map(Rgb::to_rgb_triple)
}

/// Relative luminance, 0 for unparseable input.
pub fn luminance(color: &str) -> f64 {
    Rgb::from_hex(color).map_or(0.0, Rgb::luminance)
}

/// WCAG contrast ratio between two colours, from 1 to 21.
pub fn contrast_ratio(foreground: &str, background: &str) -> f64 {
    let a = luminance(foreground);
    let b = luminance(background);
    (a.max(b) + 0.05) / (a.min(b) + 0.05)
}

/// Picks white or black text for `background`.
///
/// White wins when it reaches `threshold`, then black; otherwise whichever
/// contrasts more.
pub fn contrast_text(background: &str, threshold: f64) -> &'static str {
    let white = contrast_ratio("#FFFFFF", background);
    let black = contrast_ratio("#000000", background);
    if white >= threshold {
        "#FFFFFF"
    } else if black >= threshold || black >= white {
        "#000000"
    } else {
        "#FFFFFF"
    }
}

/// Lightens a hex colour.
pub fn lighten(color: &str, amount: f64) -> String {
    Rgb::from_hex(color).map_or_else(|| color.to_string(), |rgb| rgb.lighten(amount).to_hex())
}

/// Darkens a hex colour.
pub fn darken(color: &str, amount: f64) -> String {
    Rgb::from_hex(color).map_or_else(|| color.to_string(), |rgb| rgb.darken(amount).to_hex())
}

/// `rgba(r, g, b, a)` with the opacity clamped to `[0, 1]`.
pub fn alpha(color: &str, opacity: f64) -> String {
    match Rgb::from_hex(color) {
        Some(Rgb { r, g, b }) => format!("rgba({r}, {g}, {b}, {})", opacity.clamp(0.0, 1.0)),
        None => color.to_string(),
    }
}

/// Darkens light colours and lightens dark ones.
pub fn emphasize(color: &str, coefficient: f64) -> String {
    if luminance(color) > 0.5 {
        darken(color, coefficient)
    } else {
        lighten(color, coefficient)
    }
}

/// Ten-step scale around `base`, which sits at step 6.
///
/// Steps 1-5 mix toward white (up to 80%), steps 7-10 toward black (up to
/// 60%). Returns `None` when `base` is not a hex colour.
pub fn color_scale(base: &str) -> Option<[String; 10]> {
    let rgb = Rgb::from_hex(base)?;
    Some(std::array::from_fn(|idx| {
        let step = idx as f64 + 1.0;
        if step < 6.0 {
            rgb.lighten((6.0 - step) / 5.0 * 0.8).to_hex()
        } else if step == 6.0 {
            base.to_string()
        } else {
            rgb.darken((step - 6.0) / 4.0 * 0.6).to_hex()
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(Rgb::from_hex("#7c3aed"), Some(Rgb::new(124, 58, 237)));
        assert_eq!(Rgb::from_hex("7C3AED"), Some(Rgb::new(124, 58, 237)));
        assert_eq!(Rgb::from_hex("#fff"), Some(Rgb::WHITE));
        assert_eq!(Rgb::from_hex("#ggg"), None);
        assert_eq!(Rgb::from_hex("rgb(1,2,3)"), None);
        assert_eq!(Rgb::new(31, 41, 55).to_hex(), "#1f2937");
        assert_eq!(rgb_triple("#7c3aed").as_deref(), Some("124, 58, 237"));
    }

    #[test]
    fn lighten_and_darken() {
        assert_eq!(lighten("#000000", 0.5), "#808080");
        assert_eq!(darken("#ffffff", 0.5), "#808080");
        assert_eq!(lighten("var(--x)", 0.5), "var(--x)");
    }

    #[test]
    fn alpha_formats_rgba() {
        assert_eq!(alpha("#7c3aed", 0.5), "rgba(124, 58, 237, 0.5)");
        assert_eq!(alpha("#000000", 3.0), "rgba(0, 0, 0, 1)");
        assert_eq!(alpha("red", 0.5), "red");
    }

    #[test]
    fn contrast_between_extremes() {
        assert!((contrast_ratio("#ffffff", "#000000") - 21.0).abs() < 1e-9);
        assert!((contrast_ratio("#123456", "#123456") - 1.0).abs() < 1e-9);
        assert_eq!(contrast_text("#000000", 3.0), "#FFFFFF");
        assert_eq!(contrast_text("#ffffff", 3.0), "#000000");
    }

    #[test]
    fn emphasize_moves_away_from_luminance() {
        assert_eq!(emphasize("#ffffff", 0.15), "#d9d9d9");
        assert_eq!(emphasize("#000000", 0.5), "#808080");
    }

    #[test]
    fn scale_is_centered_on_base() {
        let scale = color_scale("#7c3aed").expect("hex base");
        assert_eq!(scale[5], "#7c3aed");
        assert_eq!(scale[0], "#e5d8fb");
        assert_eq!(scale[9], "#32175f");
        assert!(luminance(&scale[0]) > luminance(&scale[4]));
        assert!(luminance(&scale[6]) > luminance(&scale[9]));
        assert!(color_scale("not a colour").is_none());
    }
}
