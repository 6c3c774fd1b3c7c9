//! Self-contained placeholder images.
//!
//! The placeholder is an SVG with a gradient tinted by the car color, a
//! stylised silhouette and the descriptor text. It needs no network access,
//! which makes it the fallback for every other image source.

use crate::descriptor::VehicleDescriptor;
use log::trace;
use std::borrow::Cow;

pub const DATA_URI_PREFIX: &str = "data:image/svg+xml,";

const WIDTH: u32 = 800;
const HEIGHT: u32 = 500;
const FONT_FAMILY: &str = "system-ui, -apple-system, sans-serif";
const SILHOUETTE: &str = "M-120,60 L-100,60 L-85,30 L-30,30 L-10,0 L90,0 L110,30 L125,30 L140,60 L160,60 L160,90 L140,90 L140,75 L125,75 L125,90 L-105,90 L-105,75 L-120,75 L-120,90 L-140,90 L-140,60 Z";

/// Escapes the five XML special characters. Borrows when there is nothing to escape.
#[must_use]
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// SVG markup of the placeholder.
#[must_use]
pub fn placeholder_svg(descriptor: &VehicleDescriptor) -> String {
    let sheet = descriptor.style.sheet();
    let [stop1, stop2] = sheet.gradient;
    let accent = escape_xml(&descriptor.display_color()).into_owned();
    let make = escape_xml(&descriptor.make);
    let model = escape_xml(&descriptor.model);
    let color = escape_xml(&descriptor.color);
    let year = descriptor.year_built;
    let label = descriptor.style.label();
    let shine_height = HEIGHT / 2;

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">
  <defs>
    <linearGradient id="bg" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="{stop1}"/>
      <stop offset="50%" stop-color="{stop2}"/>
      <stop offset="100%" stop-color="{accent}"/>
    </linearGradient>
    <linearGradient id="shine" x1="0%" y1="0%" x2="0%" y2="100%">
      <stop offset="0%" stop-color="white" stop-opacity="0.1"/>
      <stop offset="100%" stop-color="white" stop-opacity="0"/>
    </linearGradient>
  </defs>
  <rect width="{WIDTH}" height="{HEIGHT}" fill="url(#bg)"/>
  <rect width="{WIDTH}" height="{shine_height}" fill="url(#shine)"/>
  <g transform="translate(400, 140)">
    <path d="{SILHOUETTE}" fill="white" opacity="0.15"/>
    <ellipse cx="-75" cy="90" rx="25" ry="25" fill="white" opacity="0.15"/>
    <ellipse cx="95" cy="90" rx="25" ry="25" fill="white" opacity="0.15"/>
    <ellipse cx="-75" cy="90" rx="15" ry="15" fill="white" opacity="0.1"/>
    <ellipse cx="95" cy="90" rx="15" ry="15" fill="white" opacity="0.1"/>
  </g>
  <text x="400" y="300" font-family="{FONT_FAMILY}" font-size="52" font-weight="700" fill="white" text-anchor="middle">{make}</text>
  <text x="400" y="355" font-family="{FONT_FAMILY}" font-size="32" font-weight="400" fill="white" text-anchor="middle" opacity="0.9">{model}</text>
  <text x="400" y="410" font-family="{FONT_FAMILY}" font-size="22" fill="white" text-anchor="middle" opacity="0.7">{year} · {color}</text>
  <rect x="340" y="440" width="120" height="28" rx="14" fill="white" opacity="0.15"/>
  <text x="400" y="460" font-family="{FONT_FAMILY}" font-size="12" font-weight="600" fill="white" text-anchor="middle" opacity="0.8">{label}</text>
</svg>"##
    )
}

/// Placeholder as a `data:image/svg+xml,` URI.
#[must_use]
pub fn placeholder_data_uri(descriptor: &VehicleDescriptor) -> String {
    let svg = placeholder_svg(descriptor);
    trace!(
        "Rendered {} byte placeholder for {} {}",
        svg.len(),
        descriptor.make,
        descriptor.model
    );
    format!("{DATA_URI_PREFIX}{}", urlencoding::encode(&svg))
}
