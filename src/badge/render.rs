//! SVG badge rendering.
//!
//! # Layout
//! ```text
//! ┌──────────────── 138 ────────────────┐
//! │   label (83, #555)  │ count (55, c) │ 28
//! └─────────────────────────────────────┘
//! ```
//! Text is drawn at 10x scale and shrunk with `scale(.1)`, shadow pass first.

use std::fmt::Write;

use crate::config::BadgeConfig;

pub const WIDTH: u32 = 138;
pub const HEIGHT: u32 = 28;
const LABEL_WIDTH: u32 = 83;
const VALUE_WIDTH: u32 = WIDTH - LABEL_WIDTH;

// Text coordinates at 10x scale.
const LABEL_X: u32 = 415;
const VALUE_X: u32 = 1105;
const TEXT_Y: u32 = 200;
const LABEL_TEXT_LENGTH: u32 = 730;
const VALUE_TEXT_LENGTH: u32 = 350;

pub const CONTENT_TYPE: &str = "image/svg+xml";
pub const CACHE_CONTROL: &str = "no-cache, no-store, must-revalidate";

/// Resolved badge appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeOptions {
    pub label: String,
    /// Hex color without the leading `#`.
    pub color: String,
    /// Accepted for compatibility; every style renders the same layout.
    pub style: String,
}

impl BadgeOptions {
    /// Fill omitted values from configured defaults.
    pub fn resolve(
        label: Option<String>,
        color: Option<String>,
        style: Option<String>,
        defaults: &BadgeConfig,
    ) -> Self {
        let color = color.unwrap_or_else(|| defaults.color.clone());
        Self {
            label: label.unwrap_or_else(|| defaults.label.clone()),
            color: color.strip_prefix('#').map(str::to_owned).unwrap_or(color),
            style: style.unwrap_or_else(|| defaults.style.clone()),
        }
    }
}

impl Default for BadgeOptions {
    fn default() -> Self {
        Self::resolve(None, None, None, &BadgeConfig::default())
    }
}

/// Render a badge showing `value` next to the label.
pub fn render_badge(options: &BadgeOptions, value: u64) -> String {
    let label = escape_xml(&options.label);
    let color = escape_xml(&options.color);

    let mut svg = String::with_capacity(1536);
    // Writing into a String cannot fail.
    let _ = write!(
        svg,
        r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{WIDTH}" height="{HEIGHT}" role="img" aria-label="{label}: {value}">
  <title>{label}: {value}</title>
  <linearGradient id="s" x2="0" y2="100%">
    <stop offset="0" stop-color="#bbb" stop-opacity=".1"/>
    <stop offset="1" stop-opacity=".1"/>
  </linearGradient>
  <clipPath id="r">
    <rect width="{WIDTH}" height="{HEIGHT}" rx="4" fill="#fff"/>
  </clipPath>
  <g clip-path="url(#r)">
    <rect width="{LABEL_WIDTH}" height="{HEIGHT}" fill="#555"/>
    <rect x="{LABEL_WIDTH}" width="{VALUE_WIDTH}" height="{HEIGHT}" fill="#{color}"/>
    <rect width="{WIDTH}" height="{HEIGHT}" fill="url(#s)"/>
  </g>
  <g fill="#fff" text-anchor="middle" font-family="Verdana,Geneva,DejaVu Sans,sans-serif" text-rendering="geometricPrecision" font-size="110">
"##
    );
    push_text_pair(&mut svg, LABEL_X, LABEL_TEXT_LENGTH, &label);
    push_text_pair(&mut svg, VALUE_X, VALUE_TEXT_LENGTH, &value.to_string());
    svg.push_str("  </g>\n</svg>\n");
    svg
}

fn push_text_pair(svg: &mut String, x: u32, text_length: u32, text: &str) {
    let _ = writeln!(
        svg,
        r##"    <text aria-hidden="true" x="{x}" y="{TEXT_Y}" fill="#010101" fill-opacity=".3" transform="scale(.1)" textLength="{text_length}">{text}</text>"##
    );
    let _ = writeln!(
        svg,
        r##"    <text x="{x}" y="{TEXT_Y}" fill="#fff" transform="scale(.1)" textLength="{text_length}">{text}</text>"##
    );
}

/// Escape the five XML special characters.
pub fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_badge() {
        let svg = render_badge(&BadgeOptions::default(), 42);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="138" height="28""#));
        assert!(svg.contains(r#"aria-label="Profile Views: 42""#));
        assert!(svg.contains("<title>Profile Views: 42</title>"));
        assert!(svg.contains(r##"fill="#00D4FF""##));
        assert!(svg.contains(r##"fill="#555""##));
    }

    #[test]
    fn test_two_passes_per_segment() {
        let svg = render_badge(&BadgeOptions::default(), 7);
        assert_eq!(svg.matches(">Profile Views</text>").count(), 2);
        assert_eq!(svg.matches(">7</text>").count(), 2);
        assert_eq!(svg.matches(r#"fill-opacity=".3""#).count(), 2);
    }

    #[test]
    fn test_custom_label_and_color() {
        let options = BadgeOptions::resolve(
            Some("Stars".into()),
            Some("ff0000".into()),
            None,
            &BadgeConfig::default(),
        );
        let svg = render_badge(&options, 3);
        assert!(svg.contains(">Stars</text>"));
        assert!(svg.contains(r##"fill="#ff0000""##));
        assert_eq!(options.style, "for-the-badge");
    }

    #[test]
    fn test_style_does_not_change_layout() {
        let flat = BadgeOptions {
            style: "flat".into(),
            ..BadgeOptions::default()
        };
        assert_eq!(render_badge(&flat, 1), render_badge(&BadgeOptions::default(), 1));
    }

    #[test]
    fn test_leading_hash_stripped() {
        let options = BadgeOptions::resolve(None, Some("#abc".into()), None, &BadgeConfig::default());
        assert_eq!(options.color, "abc");
        assert!(render_badge(&options, 0).contains(r##"fill="#abc""##));
    }

    #[test]
    fn test_markup_is_escaped() {
        let options = BadgeOptions::resolve(
            Some("</text><script>alert(1)</script>".into()),
            Some("f00\" onload=\"x".into()),
            None,
            &BadgeConfig::default(),
        );
        let svg = render_badge(&options, 1);
        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&lt;/text&gt;&lt;script&gt;"));
        assert!(svg.contains(r##"fill="#f00&quot; onload=&quot;x""##));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("'q'"), "&apos;q&apos;");
        assert_eq!(escape_xml("plain"), "plain");
    }
}
