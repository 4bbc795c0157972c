//! Structured theme objects and their conversion to and from flat tokens.
//!
//! The token direction is lossy: only values that have a token slot are
//! carried over. Going back from tokens recovers the palette, body colours
//! and font family, and keeps every token in [`Theme::css_vars`].
use derive_setters::Setters;
use indexmap::IndexMap;

use crate::{
    color,
    tokens::{self, DesignTokens},
};

/// Name given to themes rebuilt from tokens.
pub const TOKENS_THEME_NAME: &str = "Design Tokens Theme";

const DEFAULT_FONT_FAMILY: &str = "\"Inter\", \"Roboto\", \"Helvetica\", \"Arial\", sans-serif";
const DEFAULT_SHADE_AMOUNT: f64 = 0.2;
const CONTRAST_THRESHOLD: f64 = 3.0;
const TEXT_EMPHASIS: f64 = 0.15;
const BG_SUBTLE_OPACITY: f64 = 0.1;
const BORDER_SUBTLE_OPACITY: f64 = 0.2;

/// Main colour of a palette entry with optional shades.
#[derive(Debug, Clone, PartialEq, Eq, Default, Setters)]
pub struct PaletteColor {
    /// The base colour.
    #[setters(into)]
    pub main: String,
    /// Lighter shade.
    #[setters(strip_option, into)]
    pub light: Option<String>,
    /// Darker shade.
    #[setters(strip_option, into)]
    pub dark: Option<String>,
    /// Text colour readable on `main`.
    #[setters(strip_option, into)]
    pub contrast_text: Option<String>,
}

impl PaletteColor {
    /// An entry with only a main colour.
    pub fn new(main: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            ..Default::default()
        }
    }

    /// An entry whose shades and contrast text are derived from `main`.
    pub fn derived(main: impl Into<String>) -> Self {
        let main = main.into();
        Self {
            light: Some(color::lighten(&main, DEFAULT_SHADE_AMOUNT)),
            dark: Some(color::darken(&main, DEFAULT_SHADE_AMOUNT)),
            contrast_text: Some(color::contrast_text(&main, CONTRAST_THRESHOLD).to_string()),
            main,
        }
    }
}

/// Page background colours.
#[derive(Debug, Clone, PartialEq, Eq, Default, Setters)]
#[setters(strip_option, into)]
pub struct BackgroundColors {
    /// Body background.
    pub default: Option<String>,
    /// Raised surfaces.
    pub paper: Option<String>,
    /// Subtle fills.
    pub subtle: Option<String>,
}

/// Text colours.
#[derive(Debug, Clone, PartialEq, Eq, Default, Setters)]
#[setters(strip_option, into)]
pub struct TextColors {
    /// Body text.
    pub primary: Option<String>,
    /// Secondary text.
    pub secondary: Option<String>,
    /// Disabled text.
    pub disabled: Option<String>,
}

/// Semantic colours of a theme.
#[derive(Debug, Clone, PartialEq, Eq, Default, Setters)]
#[setters(strip_option)]
pub struct Palette {
    /// Brand colour.
    pub primary: Option<PaletteColor>,
    /// Neutral accent.
    pub secondary: Option<PaletteColor>,
    /// Errors.
    pub error: Option<PaletteColor>,
    /// Success states.
    pub success: Option<PaletteColor>,
    /// Warnings.
    pub warning: Option<PaletteColor>,
    /// Informational states.
    pub info: Option<PaletteColor>,
    /// Backgrounds.
    pub background: Option<BackgroundColors>,
    /// Text.
    pub text: Option<TextColors>,
}

/// Font settings of a theme.
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct Typography {
    /// Body font stack.
    #[setters(into)]
    pub font_family: String,
    /// Body font size in pixels.
    pub font_size: f32,
    /// Light weight.
    pub font_weight_light: u16,
    /// Regular weight.
    pub font_weight_regular: u16,
    /// Medium weight.
    pub font_weight_medium: u16,
    /// Semi-bold weight.
    pub font_weight_semi_bold: u16,
    /// Bold weight.
    pub font_weight_bold: u16,
    /// Heading line height, used as the base line height.
    #[setters(strip_option)]
    pub line_height: Option<f32>,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: 14.0,
            font_weight_light: 300,
            font_weight_regular: 400,
            font_weight_medium: 500,
            font_weight_semi_bold: 600,
            font_weight_bold: 700,
            line_height: Some(1.2),
        }
    }
}

/// Transition timings keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Setters)]
pub struct Transitions {
    /// Durations such as `fast = "0.15s"`.
    pub duration: IndexMap<String, String>,
    /// Easing curves.
    pub easing: IndexMap<String, String>,
}

/// A structured theme.
#[derive(Debug, Clone, PartialEq, Default, Setters)]
pub struct Theme {
    /// Display name.
    #[setters(into)]
    pub name: String,
    /// Colours.
    pub palette: Palette,
    /// Fonts.
    #[setters(strip_option)]
    pub typography: Option<Typography>,
    /// Spacing scale keyed by step.
    pub spacing: IndexMap<String, String>,
    /// Radii keyed by size (`sm`, `md`, ...).
    pub border_radius: IndexMap<String, String>,
    /// Shadows keyed by size (`xs`, `sm`, ...).
    pub shadows: IndexMap<String, String>,
    /// Stacking levels.
    pub z_index: IndexMap<String, String>,
    /// Transition timings.
    pub transitions: Transitions,
    /// Breakpoint widths.
    pub breakpoints: IndexMap<String, String>,
    /// Raw custom properties, keyed with or without the `--atomix-` prefix.
    pub css_vars: IndexMap<String, String>,
}

/// Converts a theme to the tokens it defines.
///
/// The result only holds keys the theme sets; see [`tokens_from_theme`] for a
/// complete map.
pub fn theme_to_tokens(theme: &Theme) -> DesignTokens {
    let mut out = DesignTokens::new();
    let mut put = |key: &str, value: &str| {
        out.insert(key.to_string(), value.to_string());
    };

    let palette = &theme.palette;
    if let Some(primary) = &palette.primary {
        put_palette_color(&mut put, "primary", primary, None, "primary-3", "primary-9");
    }
    if let Some(secondary) = &palette.secondary {
        put_palette_color(&mut put, "secondary", secondary, None, "gray-1", "gray-3");
    }
    for (name, scale, entry) in [
        ("error", "red", &palette.error),
        ("success", "green", &palette.success),
        ("warning", "yellow", &palette.warning),
        ("info", "blue", &palette.info),
    ] {
        if let Some(entry) = entry {
            let (base, light, dark) = (
                format!("{scale}-6"),
                format!("{scale}-4"),
                format!("{scale}-9"),
            );
            put_palette_color(&mut put, name, entry, Some(&base), &light, &dark);
        }
    }
    if let Some(background) = &palette.background {
        if let Some(default) = &background.default {
            put("body-bg", default);
            put("primary-bg-subtle", default);
        }
        if let Some(paper) = &background.paper {
            put("secondary-bg-subtle", paper);
        }
        if let Some(subtle) = &background.subtle {
            put("tertiary-bg-subtle", subtle);
        }
    }
    if let Some(text) = &palette.text {
        if let Some(primary) = &text.primary {
            put("body-color", primary);
            put("heading-color", primary);
            put("primary-text-emphasis", primary);
        }
        if let Some(secondary) = &text.secondary {
            put("secondary-text-emphasis", secondary);
        }
        if let Some(disabled) = &text.disabled {
            put("disabled-text-emphasis", disabled);
        }
    }

    if let Some(typography) = &theme.typography {
        put("body-font-family", &typography.font_family);
        put("font-sans-serif", &typography.font_family);
        put("body-font-size", &format!("{}px", typography.font_size));
        put("body-font-weight", &typography.font_weight_regular.to_string());
        put("font-weight-light", &typography.font_weight_light.to_string());
        put("font-weight-normal", &typography.font_weight_regular.to_string());
        put("font-weight-medium", &typography.font_weight_medium.to_string());
        put("font-weight-semibold", &typography.font_weight_semi_bold.to_string());
        put("font-weight-bold", &typography.font_weight_bold.to_string());
        if let Some(line_height) = typography.line_height {
            put("line-height-base", &line_height.to_string());
        }
    }

    for (key, value) in &theme.spacing {
        put(&format!("spacing-{key}"), value);
    }
    for (key, value) in &theme.border_radius {
        put(&radius_token(key), value);
    }
    for (key, value) in &theme.shadows {
        put(&shadow_token(key), value);
    }
    for (key, value) in &theme.z_index {
        put(&format!("z-{key}"), value);
    }
    for (key, value) in &theme.transitions.duration {
        put(&format!("transition-duration-{key}"), value);
    }
    for (key, value) in &theme.transitions.easing {
        put(&format!("easing-{key}"), value);
    }
    for (key, value) in &theme.breakpoints {
        put(&format!("breakpoint-{key}"), value);
    }
    for (key, value) in &theme.css_vars {
        let key = key
            .strip_prefix("--atomix-")
            .or_else(|| key.strip_prefix("--"))
            .unwrap_or(key);
        put(key, value);
    }

    out
}

/// The defaults with everything `theme` defines merged on top.
pub fn tokens_from_theme(theme: &Theme) -> DesignTokens {
    tokens::create_tokens(theme_to_tokens(theme))
}

/// `--atomix-<key>` for every token.
pub fn tokens_to_theme_css_vars(tokens: &DesignTokens) -> IndexMap<String, String> {
    tokens
        .iter()
        .map(|(key, value)| (format!("--atomix-{key}"), value.clone()))
        .collect()
}

/// Custom properties for `theme`, including the shades derived from its
/// palette.
///
/// Each palette entry gets a ten-step scale, an `-rgb` triple, a `-hover`
/// shade, emphasised text and translucent background and border variants.
/// Text, error, success, info and warning colours also reseed the gray, red,
/// green, blue and yellow scales. Values the theme sets explicitly win over
/// derived ones, and derived ones over the defaults.
pub fn theme_css_variables(theme: &Theme) -> IndexMap<String, String> {
    let mut tokens = tokens::create_tokens(palette_tokens(&theme.palette));
    tokens::merge_tokens(&mut tokens, theme_to_tokens(theme));
    tokens_to_theme_css_vars(&tokens)
}

fn palette_tokens(palette: &Palette) -> DesignTokens {
    let mut out = DesignTokens::new();
    for (name, entry) in [
        ("primary", &palette.primary),
        ("secondary", &palette.secondary),
        ("error", &palette.error),
        ("warning", &palette.warning),
        ("info", &palette.info),
        ("success", &palette.success),
    ] {
        let Some(entry) = entry else { continue };
        let main = entry.main.as_str();
        out.insert(name.to_string(), main.to_string());
        if let Some(rgb) = color::rgb_triple(main) {
            out.insert(format!("{name}-rgb"), rgb);
        }
        if let Some(dark) = &entry.dark {
            out.insert(format!("{name}-hover"), dark.clone());
        }
        out.insert(
            format!("{name}-text-emphasis"),
            color::emphasize(main, TEXT_EMPHASIS),
        );
        out.insert(format!("{name}-bg-subtle"), color::alpha(main, BG_SUBTLE_OPACITY));
        out.insert(
            format!("{name}-border-subtle"),
            color::alpha(main, BORDER_SUBTLE_OPACITY),
        );
        put_scale(&mut out, name, main);
    }

    let text = palette.text.as_ref().and_then(|text| text.primary.as_ref());
    let reseeded = [
        ("gray", text),
        ("red", palette.error.as_ref().map(|e| &e.main)),
        ("green", palette.success.as_ref().map(|e| &e.main)),
        ("blue", palette.info.as_ref().map(|e| &e.main)),
        ("yellow", palette.warning.as_ref().map(|e| &e.main)),
    ];
    for (scale, base) in reseeded {
        if let Some(base) = base {
            put_scale(&mut out, scale, base);
        }
    }
    out
}

fn put_scale(out: &mut DesignTokens, name: &str, base: &str) {
    let Some(steps) = color::color_scale(base) else {
        return;
    };
    for (idx, value) in steps.into_iter().enumerate() {
        out.insert(format!("{name}-{}", idx + 1), value);
    }
}

/// Rebuilds a partial theme from tokens.
pub fn theme_from_tokens(tokens: &DesignTokens) -> Theme {
    let get = |key: &str| tokens.get(key).cloned();
    let entry = |main: &str, light: &str, dark: &str| {
        get(main).map(|main| PaletteColor {
            main,
            light: get(light),
            dark: get(dark),
            contrast_text: None,
        })
    };

    let background = BackgroundColors {
        default: get("body-bg"),
        paper: get("secondary-bg-subtle"),
        subtle: get("tertiary-bg-subtle"),
    };
    let text = TextColors {
        primary: get("body-color"),
        secondary: get("secondary-text-emphasis"),
        disabled: get("disabled-text-emphasis"),
    };

    Theme {
        name: TOKENS_THEME_NAME.to_string(),
        palette: Palette {
            primary: entry("primary", "primary-3", "primary-9"),
            secondary: entry("secondary", "gray-1", "gray-3"),
            error: entry("error", "red-4", "red-9"),
            success: entry("success", "green-4", "green-9"),
            warning: entry("warning", "yellow-4", "yellow-9"),
            info: entry("info", "blue-4", "blue-9"),
            background: (background != <BackgroundColors as Default>::default()).then_some(background),
            text: (text != TextColors::default()).then_some(text),
        },
        typography: get("body-font-family").map(|font_family| Typography {
            font_family,
            ..Default::default()
        }),
        css_vars: tokens_to_theme_css_vars(tokens),
        ..Default::default()
    }
}

fn put_palette_color(
    put: &mut impl FnMut(&str, &str),
    name: &str,
    entry: &PaletteColor,
    base: Option<&str>,
    light: &str,
    dark: &str,
) {
    put(name, &entry.main);
    if let Some(base) = base {
        put(base, &entry.main);
    }
    if let Some(value) = &entry.light {
        put(light, value);
    }
    if let Some(value) = &entry.dark {
        put(dark, value);
    }
    if let Some(rgb) = color::rgb_triple(&entry.main) {
        put(&format!("{name}-rgb"), &rgb);
    }
}

fn radius_token(key: &str) -> String {
    match key {
        "md" => "border-radius".to_string(),
        other => format!("border-radius-{other}"),
    }
}

fn shadow_token(key: &str) -> String {
    match key {
        "md" => "box-shadow".to_string(),
        other => format!("box-shadow-{other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_maps_to_scale_slots() {
        let theme = Theme::default().palette(
            Palette::default()
                .primary(PaletteColor::new("#7c3aed").light("#d0b2f5").dark("#3c1583"))
                .error(PaletteColor::new("#ef4444").light("#fca5a5")),
        );
        let tokens = theme_to_tokens(&theme);
        assert_eq!(tokens["primary"], "#7c3aed");
        assert_eq!(tokens["primary-3"], "#d0b2f5");
        assert_eq!(tokens["primary-9"], "#3c1583");
        assert_eq!(tokens["primary-rgb"], "124, 58, 237");
        assert!(!tokens.contains_key("primary-6"));
        assert_eq!(tokens["red-6"], "#ef4444");
        assert_eq!(tokens["red-4"], "#fca5a5");
        assert!(!tokens.contains_key("red-9"));
    }

    #[test]
    fn secondary_shades_go_to_gray() {
        let theme = Theme::default().palette(
            Palette::default().secondary(PaletteColor::new("#f3f4f6").light("#fff").dark("#eee")),
        );
        let tokens = theme_to_tokens(&theme);
        assert_eq!(tokens["gray-1"], "#fff");
        assert_eq!(tokens["gray-3"], "#eee");
    }

    #[test]
    fn typography_and_named_scales() {
        let theme = Theme::default()
            .typography(Typography::default())
            .border_radius(IndexMap::from([
                ("md".to_string(), "6px".to_string()),
                ("sm".to_string(), "2px".to_string()),
            ]))
            .shadows(IndexMap::from([("md".to_string(), "none".to_string())]))
            .z_index(IndexMap::from([("modal".to_string(), "900".to_string())]))
            .css_vars(IndexMap::from([
                ("--atomix-custom".to_string(), "1".to_string()),
                ("--raw".to_string(), "2".to_string()),
            ]));
        let tokens = theme_to_tokens(&theme);
        assert_eq!(tokens["body-font-size"], "14px");
        assert_eq!(tokens["font-weight-semibold"], "600");
        assert_eq!(tokens["line-height-base"], "1.2");
        assert_eq!(tokens["border-radius"], "6px");
        assert_eq!(tokens["border-radius-sm"], "2px");
        assert_eq!(tokens["box-shadow"], "none");
        assert_eq!(tokens["z-modal"], "900");
        assert_eq!(tokens["custom"], "1");
        assert_eq!(tokens["raw"], "2");
    }

    #[test]
    fn full_tokens_keep_defaults() {
        let theme = Theme::default().palette(Palette::default().info(PaletteColor::new("#000000")));
        let tokens = tokens_from_theme(&theme);
        assert_eq!(tokens["info"], "#000000");
        assert_eq!(tokens["blue-6"], "#000000");
        assert_eq!(tokens["spacing-4"], "1rem");
        assert_eq!(tokens.len(), tokens::DEFAULT_TOKENS.len());
    }

    #[test]
    fn theme_from_default_tokens() {
        let theme = theme_from_tokens(&tokens::default_tokens());
        assert_eq!(theme.name, TOKENS_THEME_NAME);
        let primary = theme.palette.primary.expect("primary");
        assert_eq!(primary.main, "#7c3aed");
        assert_eq!(primary.light.as_deref(), Some("#d0b2f5"));
        assert_eq!(primary.dark.as_deref(), Some("#3c1583"));
        assert_eq!(
            theme.palette.background.and_then(|b| b.default).as_deref(),
            Some("#ffffff")
        );
        assert_eq!(theme.css_vars["--atomix-primary"], "#7c3aed");
        assert_eq!(theme.css_vars.len(), tokens::DEFAULT_TOKENS.len());
    }

    #[test]
    fn css_variables_derive_palette_shades() {
        let theme = Theme::default().palette(
            Palette::default()
                .primary(PaletteColor::new("#000000").dark("#010101"))
                .error(PaletteColor::new("#ff0000"))
                .text(TextColors::default().primary("#222222")),
        );
        let vars = theme_css_variables(&theme);
        assert_eq!(vars["--atomix-primary"], "#000000");
        assert_eq!(vars["--atomix-primary-rgb"], "0, 0, 0");
        assert_eq!(vars["--atomix-primary-hover"], "#010101");
        assert_eq!(vars["--atomix-primary-bg-subtle"], "rgba(0, 0, 0, 0.1)");
        assert_eq!(vars["--atomix-primary-border-subtle"], "rgba(0, 0, 0, 0.2)");
        assert_eq!(vars["--atomix-primary-6"], "#000000");
        assert_eq!(vars["--atomix-primary-10"], "#000000");
        assert_eq!(vars["--atomix-primary-1"], color::lighten("#000000", 0.8));
        assert_eq!(vars["--atomix-error-text-emphasis"], color::emphasize("#ff0000", 0.15));
        assert_eq!(vars["--atomix-red-6"], "#ff0000");
        assert_eq!(vars["--atomix-gray-6"], "#222222");
        // Explicit text colour beats the derived emphasis.
        assert_eq!(vars["--atomix-primary-text-emphasis"], "#222222");
        // Untouched scales keep their defaults.
        assert_eq!(vars["--atomix-green-6"], tokens::default_tokens()["green-6"]);
    }

    #[test]
    fn derived_palette_colors() {
        let entry = PaletteColor::derived("#000000");
        assert_eq!(entry.light.as_deref(), Some("#333333"));
        assert_eq!(entry.dark.as_deref(), Some("#000000"));
        assert_eq!(entry.contrast_text.as_deref(), Some("#FFFFFF"));
    }
}
