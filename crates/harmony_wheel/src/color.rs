//! Color state and conversions.
//!
//! [`ColorState`] is the HSV triple the picker edits. Packed colors are plain
//! `u32` values laid out as `0xRRGGBB`; any bits above the low 24 are ignored
//! on input and always zero on output.

use serde::{Deserialize, Serialize};

/// Mask selecting the 24 RGB bits of a packed color
pub const RGB_MASK: u32 = 0x00FF_FFFF;

/// Normalize a hue into `[0, 360)`. Non-finite input maps to 0.
pub fn normalize_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Clamp a channel into `[0, 1]`. NaN maps to 0.
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Convert HSV to RGB.
///
/// # Arguments
/// * `h` - Hue in degrees (0-360)
/// * `s` - Saturation (0.0-1.0)
/// * `v` - Value/brightness (0.0-1.0)
///
/// # Returns
/// RGB tuple with values in range 0.0-1.0
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let h = normalize_hue(h);
    let s = clamp_unit(s);
    let v = clamp_unit(v);

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r + m, g + m, b + m)
}

/// Convert RGB channels (0.0-1.0) to HSV.
///
/// Achromatic input (all channels equal) yields hue 0 and saturation 0;
/// black additionally has value 0.
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta <= f32::EPSILON {
        0.0
    } else if (max - r).abs() <= f32::EPSILON {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if (max - g).abs() <= f32::EPSILON {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let saturation = if max <= f32::EPSILON { 0.0 } else { delta / max };

    (normalize_hue(hue), saturation, max)
}

fn channel_to_byte(channel: f32) -> u32 {
    (clamp_unit(channel) * 255.0).round() as u32
}

fn byte_to_channel(packed: u32, shift: u32) -> f32 {
    ((packed >> shift) & 0xFF) as f32 / 255.0
}

/// The picker's current color as a normalized HSV triple.
///
/// Hue is kept in `[0, 360)`, saturation and value in `[0, 1]`; every
/// constructor and setter enforces this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorState {
    hue: f32,
    saturation: f32,
    value: f32,
}

impl ColorState {
    /// White: hue 0, saturation 0, value 1.
    pub const DEFAULT: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        value: 1.0,
    };

    /// Create a state, normalizing hue and clamping saturation/value.
    pub fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue: normalize_hue(hue),
            saturation: clamp_unit(saturation),
            value: clamp_unit(value),
        }
    }

    /// Build from a packed `0xRRGGBB` color.
    pub fn from_packed(rgb: u32) -> Self {
        let rgb = rgb & RGB_MASK;
        let (h, s, v) = rgb_to_hsv(
            byte_to_channel(rgb, 16),
            byte_to_channel(rgb, 8),
            byte_to_channel(rgb, 0),
        );
        Self::new(h, s, v)
    }

    /// Replace this state with the HSV form of a packed color.
    pub fn set_from_packed(&mut self, rgb: u32) {
        *self = Self::from_packed(rgb);
    }

    /// Pack into `0xRRGGBB`.
    pub fn to_packed(&self) -> u32 {
        let (r, g, b) = hsv_to_rgb(self.hue, self.saturation, self.value);
        (channel_to_byte(r) << 16) | (channel_to_byte(g) << 8) | channel_to_byte(b)
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_hue(&mut self, hue: f32) {
        self.hue = normalize_hue(hue);
    }

    pub fn set_saturation(&mut self, saturation: f32) {
        self.saturation = clamp_unit(saturation);
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = clamp_unit(value);
    }

    /// Same state with a different hue (normalized).
    pub fn with_hue(self, hue: f32) -> Self {
        Self {
            hue: normalize_hue(hue),
            ..self
        }
    }

    /// Same hue and saturation at full brightness.
    pub fn at_full_value(self) -> Self {
        Self { value: 1.0, ..self }
    }

    /// Convert to an opaque render color.
    pub fn to_color(&self) -> Color {
        let (r, g, b) = hsv_to_rgb(self.hue, self.saturation, self.value);
        Color::rgb(r, g, b)
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// RGBA color with floating-point components in `0.0..=1.0`, used by
/// render descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque gray with all channels set to `level`.
    pub fn gray(level: f32) -> Self {
        let level = clamp_unit(level);
        Self::rgb(level, level, level)
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    pub fn from_packed(rgb: u32) -> Self {
        Self::rgb(
            byte_to_channel(rgb, 16),
            byte_to_channel(rgb, 8),
            byte_to_channel(rgb, 0),
        )
    }

    /// Pack the RGB channels into `0xRRGGBB`, dropping alpha.
    pub fn to_packed(&self) -> u32 {
        (channel_to_byte(self.r) << 16) | (channel_to_byte(self.g) << 8) | channel_to_byte(self.b)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation of all four channels.
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let t = clamp_unit(t);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Porter-Duff source-over: `self` composited on top of `dst`.
    pub fn over(self, dst: Color) -> Self {
        let a = self.a + dst.a * (1.0 - self.a);
        if a <= f32::EPSILON {
            return Self::TRANSPARENT;
        }
        let blend = |src: f32, dst_c: f32| (src * self.a + dst_c * dst.a * (1.0 - self.a)) / a;
        Self {
            r: blend(self.r, dst.r),
            g: blend(self.g, dst.g),
            b: blend(self.b, dst.b),
            a,
        }
    }
}
