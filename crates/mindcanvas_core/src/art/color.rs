//! Linear RGB color value shared by palettes, layers and overlays.

use serde::{Deserialize, Serialize};

/// RGB triple with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Uniform gray.
    pub const fn gray(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Returns `#rrggbb`, clamping each channel into range first.
    pub fn to_hex(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b)
        )
    }

    /// Linear interpolation towards `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    /// Diverging red-yellow-green ramp used by the mood chart.
    ///
    /// `t = 0` is deep red, `0.5` pale yellow, `1` dark green.
    pub fn red_yellow_green(t: f64) -> Self {
        const LOW: Rgb = Rgb::new(0.647, 0.0, 0.149);
        const MID: Rgb = Rgb::new(1.0, 1.0, 0.749);
        const HIGH: Rgb = Rgb::new(0.0, 0.408, 0.216);

        let t = t.clamp(0.0, 1.0);
        if t <= 0.5 {
            LOW.lerp(MID, t * 2.0)
        } else {
            MID.lerp(HIGH, (t - 0.5) * 2.0)
        }
    }
}

fn channel_to_u8(value: f64) -> u8 {
    // Clamped into [0, 255] before the cast.
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
