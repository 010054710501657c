//! Continuous gradients through the colors of a palette.

use rgb::{RGB8, RGBA8};

use crate::error::{Error, Result};
use crate::{parse_hex, ColorRange, Gradient, RGBColor};

/// Colors of a gradient with the position each one sits at.
///
/// Positions are in \[0, 1\] and non-decreasing; there is one per
/// color.
#[derive(Clone, Debug, PartialEq)]
pub struct Anchors {
    colors: Vec<RGB8>,
    positions: Vec<f64>,
}

impl Anchors {
    /// Anchor `colors` at `positions`, or evenly spaced positions if
    /// `None`.  Fails with [`Error::NoColors`] if `colors` is empty.
    pub fn new(colors: Vec<RGB8>, positions: Option<Vec<f64>>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::NoColors);
        }
        let positions = match positions {
            None => return Ok(Self::evenly_spaced(colors)),
            Some(p) => p,
        };
        if positions.len() != colors.len() {
            return Err(Error::InvalidPositions(format!(
                "{} positions given for {} colors",
                positions.len(), colors.len())));
        }
        if let Some(p) = positions.iter().find(|p| !(0. ..= 1.).contains(*p)) {
            return Err(Error::InvalidPositions(
                format!("{p} is not in [0, 1]")));
        }
        if let Some(w) = positions.windows(2).find(|w| w[0] > w[1]) {
            return Err(Error::InvalidPositions(
                format!("{} comes after {}", w[1], w[0])));
        }
        Ok(Anchors { colors, positions })
    }

    /// Parse `#RRGGBB` colors and anchor them.  Alpha is dropped.
    pub fn from_hex(colors: &[&str], positions: Option<Vec<f64>>) -> Result<Self> {
        let colors = colors.iter()
            .map(|s| parse_hex(s).map(|c: RGBA8| RGB8::new(c.r, c.g, c.b)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(colors, positions)
    }

    /// `colors` must not be empty.
    pub(crate) fn evenly_spaced(colors: Vec<RGB8>) -> Self {
        let last = colors.len().saturating_sub(1);
        let positions = (0 ..= last).map(|i| {
            if last == 0 { 0. } else { i as f64 / last as f64 }
        }).collect();
        Anchors { colors, positions }
    }

    /// Number of anchors.
    pub fn len(&self) -> usize { self.colors.len() }

    /// Always `false` for anchors built by [`Anchors::new`].
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// The anchored colors, in gradient order.
    pub fn colors(&self) -> &[RGB8] { &self.colors }

    /// The position of each color in \[0, 1\].
    pub fn positions(&self) -> &[f64] { &self.positions }

    /// `(color, position)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (RGB8, f64)> + '_ {
        self.colors.iter().copied().zip(self.positions.iter().copied())
    }

    /// Interpolate between the anchors in CIE L*C*h.
    pub fn gradient<Color: RGBColor>(&self) -> PaletteGradient<Color> {
        let colors: Vec<Color> = self.colors.iter()
            .map(|c| Color::from_rgba(c.to_rgba()))
            .collect();
        if colors.len() == 1 {
            // A constant gradient spanning the whole range.
            return PaletteGradient {
                positions: vec![0., 1.],
                gradients: vec![colors[0].gradient(&colors[0])],
            };
        }
        PaletteGradient {
            positions: self.positions.clone(),
            gradients: colors.windows(2).map(|c| c[0].gradient(&c[1])).collect(),
        }
    }
}

/// A gradient based on a palette, made of one [`Gradient`] per pair
/// of consecutive anchors.
///
/// Created by [`Anchors::gradient`].  Before the first anchor and
/// after the last one the color is constant.
pub struct PaletteGradient<Color> {
    positions: Vec<f64>, // Invariant: gradients.len() + 1 elements
    gradients: Vec<Gradient<Color>>,
}

impl<Color> ColorRange<Color> for PaletteGradient<Color>
where Color: RGBColor {
    fn rgb(&self, t: f64) -> Color {
        let n = self.gradients.len();
        let t = t.clamp(0., 1.);
        if !(t > self.positions[0]) {
            return self.gradients[0].rgb_unsafe(0.);
        }
        if t >= self.positions[n] {
            return self.gradients[n - 1].rgb_unsafe(1.);
        }
        // positions[i] < t < positions[n], so 1 ≤ i < n + 1.
        let i = self.positions.partition_point(|&p| p <= t) - 1;
        let (p0, p1) = (self.positions[i], self.positions[i + 1]);
        self.gradients[i].rgb_unsafe((t - p0) / (p1 - p0))
    }
}
