#![cfg_attr(not(feature = "std"), no_std)]

//! Packed 32-bit ARGB color values with conversions to and from the
//! cylindrical HSB (a.k.a. HSV) and HSL color models.
//!
//! The packed `u32` is the canonical representation; the HSB and HSL views
//! are derived from it on demand and never cached. All operations are pure
//! and every type is `Copy`, so values are freely shareable across threads.

use core::fmt;
use core::str::FromStr;
#[cfg(not(feature = "std"))]
#[allow(unused)]
use num_traits::float::Float;
#[cfg(feature = "use_serde")]
use serde::{Deserialize, Serialize};

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// Mask each channel to its low 8 bits and combine as
/// `(alpha << 24) | (red << 16) | (green << 8) | blue`.
///
/// Out-of-range inputs wrap: bit 8 and above are simply dropped, nothing is
/// clamped and no error is possible.
pub const fn pack(alpha: u32, red: u32, green: u32, blue: u32) -> u32 {
    ((alpha & 0xff) << 24) | ((red & 0xff) << 16) | ((green & 0xff) << 8) | (blue & 0xff)
}

/// Extract `(alpha, red, green, blue)` from a packed value.
///
/// Total inverse of [`pack`] for any 32-bit value.
pub const fn unpack(value: u32) -> (u8, u8, u8, u8) {
    (
        (value >> 24) as u8,
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
    )
}

/// Pack red/green/blue with the alpha channel fixed at fully opaque.
pub const fn pack_rgb(red: u32, green: u32, blue: u32) -> u32 {
    pack(0xff, red, green, blue)
}

/// Pack red/green/blue with a floating point opacity.
///
/// Opacity converts to alpha as `floor(opacity * 255)` masked to its low
/// 8 bits, so out-of-range opacity WRAPS rather than clamps: 1.5 yields
/// alpha `0x7e`, not `0xff`. This is intentional compatibility behavior,
/// pinned by test; do not "fix" it to clamp.
pub fn pack_with_opacity(red: u32, green: u32, blue: u32, opacity: f64) -> u32 {
    pack(opacity_to_alpha(opacity), red, green, blue)
}

fn opacity_to_alpha(opacity: f64) -> u32 {
    ((opacity * 255.0).floor() as i64 as u32) & 0xff
}

/// RGB→HSB for normalized channels. Returns (hue degrees, saturation,
/// brightness).
fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let mn = r.min(g).min(b);
    let mx = r.max(g).max(b);

    if mn == mx {
        // Achromatic: hue is undefined (0 by convention) and the divisions
        // below would hit zero.
        return (0.0, 0.0, mn);
    }

    // The minimum channel selects the sector base. Tie-break order is
    // r, then b, else g; ties land on the same hue either way but the
    // order is part of the contract.
    let (d, h) = if mn == r {
        (g - b, 3.0)
    } else if mn == b {
        (r - g, 1.0)
    } else {
        (b - r, 5.0)
    };

    (60.0 * (h - d / (mx - mn)), (mx - mn) / mx, mx)
}

/// HSB→RGB. Returns normalized channels.
fn hsb_to_rgb(hue: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h = hue / 360.0 * 6.0;
    let f = h - h.floor();
    // Euclidean modulo so negative hues and hues >= 360 land in 0..=5
    let sector = (h.floor() as i64).rem_euclid(6);

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        5 => (v, p, q),
        _ => unreachable!("hue {} normalized to impossible sector {}", hue, sector),
    }
}

/// HSB→HSL saturation/lightness. Hue and opacity pass through unchanged.
fn hsb_to_hsl(s: f64, v: f64) -> (f64, f64) {
    let l = (2.0 - s) * v;
    let sl = if l == 0.0 || l == 2.0 {
        // Black or white; saturation is meaningless and the divisor
        // below would be zero.
        0.0
    } else {
        s * v / if l <= 1.0 { l } else { 2.0 - l }
    };
    (sl, l / 2.0)
}

/// HSL→HSB saturation/brightness; exact algebraic inverse of
/// [`hsb_to_hsl`]. Hue and opacity pass through unchanged.
fn hsl_to_hsb(s: f64, l: f64) -> (f64, f64) {
    let sp = s * if l < 0.5 { l } else { 1.0 - l };
    let sv = if sp <= 0.0 { 0.0 } else { (2.0 * sp) / (l + sp) };
    (sv, l + sp)
}

/// An immutable color value stored as packed 32-bit ARGB, most significant
/// byte first.
///
/// The packed integer is the canonical form: equality and hashing consider
/// nothing else, and two colors are equal iff their packed values are equal.
/// "Modification" methods return a new value with the requested channels
/// replaced; nothing is ever mutated in place.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "use_serde", serde(transparent))]
pub struct ArgbColor {
    bits: u32,
}

impl ArgbColor {
    /// Construct from an already-packed ARGB value.
    pub const fn from_packed(bits: u32) -> Self {
        Self { bits }
    }

    /// Construct a fully-opaque color from discrete red, green and blue
    /// values. Each channel is masked to its low 8 bits; out-of-range
    /// values wrap.
    pub const fn from_rgb(red: u32, green: u32, blue: u32) -> Self {
        Self {
            bits: pack_rgb(red, green, blue),
        }
    }

    /// Construct from discrete alpha, red, green and blue values, each
    /// masked to its low 8 bits.
    pub const fn from_argb(alpha: u32, red: u32, green: u32, blue: u32) -> Self {
        Self {
            bits: pack(alpha, red, green, blue),
        }
    }

    /// Construct from red/green/blue plus a floating point opacity, using
    /// the wrap-around opacity rule of [`pack_with_opacity`].
    pub fn from_rgb_with_opacity(red: u32, green: u32, blue: u32, opacity: f64) -> Self {
        Self {
            bits: pack_with_opacity(red, green, blue, opacity),
        }
    }

    /// Construct a fully-opaque color from hue (degrees), saturation and
    /// brightness.
    pub fn from_hsb(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self::from_hsb_with_opacity(hue, saturation, brightness, 1.0)
    }

    /// Construct from hue (degrees), saturation, brightness and opacity.
    ///
    /// The hue may be any angle; it is normalized into a sector internally.
    /// Channels scale to 8 bits by rounding, opacity by the wrap-around
    /// rule of [`pack_with_opacity`].
    pub fn from_hsb_with_opacity(
        hue: f64,
        saturation: f64,
        brightness: f64,
        opacity: f64,
    ) -> Self {
        let (r, g, b) = hsb_to_rgb(hue, saturation, brightness);
        Self {
            bits: pack_with_opacity(
                (r * 255.0).round() as u32,
                (g * 255.0).round() as u32,
                (b * 255.0).round() as u32,
                opacity,
            ),
        }
    }

    /// Construct a fully-opaque color from hue (degrees), saturation and
    /// lightness.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self::from_hsl_with_opacity(hue, saturation, lightness, 1.0)
    }

    /// Construct from hue (degrees), saturation, lightness and opacity.
    /// Routes through HSB and then packs.
    pub fn from_hsl_with_opacity(hue: f64, saturation: f64, lightness: f64, opacity: f64) -> Self {
        let (s, v) = hsl_to_hsb(saturation, lightness);
        Self::from_hsb_with_opacity(hue, s, v, opacity)
    }

    /// The packed ARGB value.
    pub const fn as_packed(self) -> u32 {
        self.bits
    }

    /// The alpha channel, 0-255.
    pub const fn alpha(self) -> u8 {
        (self.bits >> 24) as u8
    }

    /// The red channel, 0-255.
    pub const fn red(self) -> u8 {
        (self.bits >> 16) as u8
    }

    /// The green channel, 0-255.
    pub const fn green(self) -> u8 {
        (self.bits >> 8) as u8
    }

    /// The blue channel, 0-255.
    pub const fn blue(self) -> u8 {
        self.bits as u8
    }

    /// The alpha channel as a floating point opacity in the range 0.0-1.0.
    pub fn opacity(self) -> f64 {
        f64::from(self.alpha()) / 255.0
    }

    /// True if the alpha channel is at its maximum.
    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xff
    }

    /// True if the alpha channel is below its maximum. Not mutually
    /// exclusive with [`is_visible`](Self::is_visible): a half-transparent
    /// color is both.
    pub const fn is_transparent(self) -> bool {
        self.alpha() < 0xff
    }

    /// True if the alpha channel is nonzero.
    pub const fn is_visible(self) -> bool {
        self.alpha() > 0
    }

    /// Returns a new color with the alpha channel replaced. The replacement
    /// is masked to its low 8 bits, exactly as in
    /// [`from_argb`](Self::from_argb); the other channels keep their
    /// current values.
    pub const fn with_alpha(self, alpha: u32) -> Self {
        Self {
            bits: ((alpha & 0xff) << 24) | (self.bits & 0x00ff_ffff),
        }
    }

    /// Returns a new color with the red channel replaced.
    pub const fn with_red(self, red: u32) -> Self {
        Self {
            bits: ((red & 0xff) << 16) | (self.bits & 0xff00_ffff),
        }
    }

    /// Returns a new color with the green channel replaced.
    pub const fn with_green(self, green: u32) -> Self {
        Self {
            bits: ((green & 0xff) << 8) | (self.bits & 0xffff_00ff),
        }
    }

    /// Returns a new color with the blue channel replaced.
    pub const fn with_blue(self, blue: u32) -> Self {
        Self {
            bits: (blue & 0xff) | (self.bits & 0xffff_ff00),
        }
    }

    /// Returns a new color with alpha re-derived from a floating point
    /// opacity, inheriting the wrap-around rule of [`pack_with_opacity`].
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            bits: (opacity_to_alpha(opacity) << 24) | (self.bits & 0x00ff_ffff),
        }
    }

    /// Compute the HSB (a.k.a. HSV) view of this color, derived fresh from
    /// the packed value on every call.
    pub fn to_hsb(self) -> HsbColor {
        let (hue, saturation, brightness) = rgb_to_hsb(
            f64::from(self.red()) / 255.0,
            f64::from(self.green()) / 255.0,
            f64::from(self.blue()) / 255.0,
        );
        HsbColor {
            hue,
            saturation,
            brightness,
            opacity: self.opacity(),
        }
    }

    /// Compute the HSL view of this color, derived fresh on every call.
    /// Routes through HSB.
    pub fn to_hsl(self) -> HslColor {
        self.to_hsb().to_hsl()
    }

    /// Returns the packed value as `#AARRGGBB` with uppercase hex digits.
    pub fn to_argb_string(self) -> String {
        format!("{}", self)
    }
}

impl fmt::Display for ArgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.bits)
    }
}

impl From<u32> for ArgbColor {
    fn from(bits: u32) -> Self {
        Self::from_packed(bits)
    }
}

impl From<ArgbColor> for u32 {
    fn from(color: ArgbColor) -> u32 {
        color.as_packed()
    }
}

/// Reasons a color string can fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("color string must start with '#'")]
    MissingPrefix,
    #[error("expected 6 or 8 hex digits, got {0}")]
    BadLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

impl FromStr for ArgbColor {
    type Err = ParseColorError;

    /// Parses `#RRGGBB` (alpha implied opaque) or `#AARRGGBB`; the inverse
    /// of the `Display` form. Hex digits may be either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or(ParseColorError::MissingPrefix)?;
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ParseColorError::BadLength(digits.len()));
        }

        let mut bits = 0u32;
        for c in digits.chars() {
            let nybble = c.to_digit(16).ok_or(ParseColorError::InvalidDigit(c))?;
            bits = (bits << 4) | nybble;
        }

        if digits.len() == 6 {
            Ok(Self::from_packed(0xff00_0000 | bits))
        } else {
            Ok(Self::from_packed(bits))
        }
    }
}

/// A snapshot of a color in the cylindrical HSB (a.k.a. HSV) model.
///
/// Instances are only produced by the conversion functions, never
/// constructed directly, so the fields are in range by construction: hue in
/// degrees `0.0..360.0`, everything else `0.0..=1.0`. The record does not
/// track the color it was derived from.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct HsbColor {
    hue: f64,
    saturation: f64,
    brightness: f64,
    opacity: f64,
}

impl HsbColor {
    /// Hue angle in degrees, `0.0..360.0`. Conventionally 0 for achromatic
    /// colors.
    pub const fn hue(self) -> f64 {
        self.hue
    }

    /// Saturation, `0.0..=1.0`.
    pub const fn saturation(self) -> f64 {
        self.saturation
    }

    /// Brightness (the V of HSV), `0.0..=1.0`.
    pub const fn brightness(self) -> f64 {
        self.brightness
    }

    /// Opacity, `0.0..=1.0`.
    pub const fn opacity(self) -> f64 {
        self.opacity
    }

    /// Pack back into an [`ArgbColor`].
    pub fn to_color(self) -> ArgbColor {
        ArgbColor::from_hsb_with_opacity(self.hue, self.saturation, self.brightness, self.opacity)
    }

    /// Convert to the HSL model. Hue and opacity carry over unchanged.
    pub fn to_hsl(self) -> HslColor {
        let (saturation, lightness) = hsb_to_hsl(self.saturation, self.brightness);
        HslColor {
            hue: self.hue,
            saturation,
            lightness,
            opacity: self.opacity,
        }
    }
}

/// A snapshot of a color in the cylindrical HSL model.
///
/// Same production rules as [`HsbColor`]: only conversion functions create
/// instances, so values are always in range.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct HslColor {
    hue: f64,
    saturation: f64,
    lightness: f64,
    opacity: f64,
}

impl HslColor {
    /// Hue angle in degrees, `0.0..360.0`. Conventionally 0 for achromatic
    /// colors.
    pub const fn hue(self) -> f64 {
        self.hue
    }

    /// Saturation, `0.0..=1.0`. Note that HSL saturation differs from HSB
    /// saturation for the same color.
    pub const fn saturation(self) -> f64 {
        self.saturation
    }

    /// Lightness, `0.0..=1.0`.
    pub const fn lightness(self) -> f64 {
        self.lightness
    }

    /// Opacity, `0.0..=1.0`.
    pub const fn opacity(self) -> f64 {
        self.opacity
    }

    /// Convert to the HSB model; exact inverse of [`HsbColor::to_hsl`].
    pub fn to_hsb(self) -> HsbColor {
        let (saturation, brightness) = hsl_to_hsb(self.saturation, self.lightness);
        HsbColor {
            hue: self.hue,
            saturation,
            brightness,
            opacity: self.opacity,
        }
    }

    /// Pack back into an [`ArgbColor`], routing through HSB.
    pub fn to_color(self) -> ArgbColor {
        self.to_hsb().to_color()
    }
}
