//! Palette functions: a resolved table, a direction and a capacity.

use log::{debug, trace};
use rgb::RGB8;

use crate::error::{Error, Result};
use crate::gradient::{Anchors, PaletteGradient};
use crate::marker::Marker;
use crate::palettes::ty::{ColorVariant, Family, ShapeVariant, Variant};
use crate::registry::Registry;
use crate::RGBColor;

/// Order in which a palette hands out its entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Catalog order.
    #[default]
    Forward,
    /// Reversed catalog order.
    Reverse,
}

// Numeric directions follow the plotting convention `direction = 1` /
// `direction = -1`.  Only strictly negative values reverse; zero,
// positive values and NaN mean forward.

impl From<i32> for Direction {
    fn from(d: i32) -> Self {
        if d < 0 { Direction::Reverse } else { Direction::Forward }
    }
}

impl From<f64> for Direction {
    fn from(d: f64) -> Self {
        if d < 0. { Direction::Reverse } else { Direction::Forward }
    }
}

/// A function `n ↦ first n entries` over a palette.
///
/// Implemented by [`PaletteFn`] and [`AnyPalette`]; this is what the
/// discrete scales consume.
pub trait DiscretePalette {
    type Value;

    /// The maximum number of values the palette can supply.
    fn max_n(&self) -> usize;

    /// Return the first `n` values of the palette.  Fails with
    /// [`Error::InsufficientPaletteCapacity`] if `n > self.max_n()`.
    fn apply(&self, n: usize) -> Result<Vec<Self::Value>>;
}

/// A palette table bound to a direction.
///
/// Created by [`Registry::color`], [`Registry::shape`], [`color_pal`]
/// and [`shape_pal`].  Its capacity `max_n` is the length of the
/// table.
#[derive(Clone, Copy, Debug)]
pub struct PaletteFn<'a, T> {
    name: &'a str,
    values: &'a [T],
    direction: Direction,
    max_n: usize,
}

impl<'a, T: Copy> PaletteFn<'a, T> {
    // `values` must not be empty.
    pub(crate) fn new(name: &'a str, values: &'a [T], direction: Direction) -> Self {
        PaletteFn { name, values, direction, max_n: values.len() }
    }

    /// Name of the palette in its table.
    pub fn name(&self) -> &'a str { self.name }

    /// Order in which the palette hands out its entries.
    pub fn direction(&self) -> Direction { self.direction }

    /// The maximum number of values the palette can supply.
    #[inline]
    pub fn max_n(&self) -> usize { self.max_n }

    /// Return the first `n` entries in the palette's direction.
    ///
    /// `n == 0` yields an empty vector.  Requesting more than
    /// [`max_n`](Self::max_n) entries is an error; values are never
    /// recycled.
    pub fn apply(&self, n: usize) -> Result<Vec<T>> {
        if n > self.max_n {
            return Err(Error::InsufficientPaletteCapacity {
                max_n: self.max_n, n });
        }
        trace!("palette “{}”: {} of {} values ({:?})",
               self.name, n, self.max_n, self.direction);
        Ok(self.iter().take(n).collect())
    }

    /// All the entries of the palette, in its direction.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + 'a {
        let values = self.values.iter().copied();
        let (fwd, rev) = match self.direction {
            Direction::Forward => (Some(values), None),
            Direction::Reverse => (None, Some(values.rev())),
        };
        fwd.into_iter().flatten().chain(rev.into_iter().flatten())
    }
}

impl<'a, T: Copy> DiscretePalette for PaletteFn<'a, T> {
    type Value = T;

    fn max_n(&self) -> usize { PaletteFn::max_n(self) }

    fn apply(&self, n: usize) -> Result<Vec<T>> { PaletteFn::apply(self, n) }
}

/// # Color palettes
impl<'a> PaletteFn<'a, RGB8> {
    /// Return the first `n` colors converted to `Color`.
    pub fn colors<Color: RGBColor>(&self, n: usize) -> Result<Vec<Color>> {
        let colors = self.apply(n)?;
        Ok(colors.iter().map(|c| Color::from_rgba(c.to_rgba())).collect())
    }

    /// Return the first `n` colors as `#RRGGBB` strings.
    pub fn hex(&self, n: usize) -> Result<Vec<String>> {
        Ok(self.apply(n)?.iter().map(|c| c.to_hex()).collect())
    }

    /// Gradient anchors: all the colors of the palette, in its
    /// direction, placed at `positions` (evenly spaced if `None`).
    pub fn anchors(&self, positions: Option<Vec<f64>>) -> Result<Anchors> {
        Anchors::new(self.iter().collect(), positions)
    }

    /// A continuous gradient through all the colors of the palette.
    pub fn gradient<Color: RGBColor>(&self) -> PaletteGradient<Color> {
        // Evenly spaced anchors over a non-empty table are always valid.
        Anchors::evenly_spaced(self.iter().collect()).gradient()
    }
}

/// A value of a palette of any family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Value {
    Color(RGB8),
    Shape(Marker),
}

/// A palette function of either family, as returned by [`resolve`].
#[derive(Clone, Copy, Debug)]
pub enum AnyPalette<'a> {
    Color(PaletteFn<'a, RGB8>),
    Shape(PaletteFn<'a, Marker>),
}

impl<'a> AnyPalette<'a> {
    /// Family of the palette.
    pub fn family(&self) -> Family {
        match self {
            AnyPalette::Color(_) => Family::Color,
            AnyPalette::Shape(_) => Family::Shape,
        }
    }

    /// Name of the palette in its table.
    pub fn name(&self) -> &'a str {
        match self {
            AnyPalette::Color(p) => p.name(),
            AnyPalette::Shape(p) => p.name(),
        }
    }

    /// Order in which the palette hands out its entries.
    pub fn direction(&self) -> Direction {
        match self {
            AnyPalette::Color(p) => p.direction(),
            AnyPalette::Shape(p) => p.direction(),
        }
    }

    /// The color palette, if this is one.
    pub fn as_color(&self) -> Option<&PaletteFn<'a, RGB8>> {
        match self {
            AnyPalette::Color(p) => Some(p),
            AnyPalette::Shape(_) => None,
        }
    }

    /// The shape palette, if this is one.
    pub fn as_shape(&self) -> Option<&PaletteFn<'a, Marker>> {
        match self {
            AnyPalette::Shape(p) => Some(p),
            AnyPalette::Color(_) => None,
        }
    }
}

impl<'a> DiscretePalette for AnyPalette<'a> {
    type Value = Value;

    fn max_n(&self) -> usize {
        match self {
            AnyPalette::Color(p) => p.max_n(),
            AnyPalette::Shape(p) => p.max_n(),
        }
    }

    fn apply(&self, n: usize) -> Result<Vec<Value>> {
        match self {
            AnyPalette::Color(p) =>
                Ok(p.apply(n)?.into_iter().map(Value::Color).collect()),
            AnyPalette::Shape(p) =>
                Ok(p.apply(n)?.into_iter().map(Value::Shape).collect()),
        }
    }
}

/// Resolve a palette from string keys against the Tableau registry.
///
/// `family` is `"color"` or `"shape"`; `variant` must be one of the
/// variants of the family (see [`ColorVariant`] and [`ShapeVariant`]);
/// `name` must be a palette of that variant.  Only a strictly negative
/// `direction` reverses the palette.
///
/// # Example
///
/// ```
/// use tableau_palettes::{resolve, DiscretePalette};
/// let pal = resolve("color", "regular", "Tableau 10", -1).unwrap();
/// assert_eq!(pal.max_n(), 10);
/// assert_eq!(pal.apply(3).unwrap().len(), 3);
/// ```
pub fn resolve(family: &str, variant: &str, name: &str,
               direction: impl Into<Direction>) -> Result<AnyPalette<'static>> {
    let family: Family = family.parse()?;
    let variant = Variant::parse(family, variant)?;
    Registry::tableau().resolve(variant, name, direction)
}

/// Tableau color palette.
///
/// # Example
///
/// ```
/// use tableau_palettes::{color_pal, ColorVariant};
/// let pal = color_pal("Tableau 10", ColorVariant::Regular, 1).unwrap();
/// assert_eq!(pal.hex(2).unwrap(), ["#4E79A7", "#F28E2B"]);
/// ```
pub fn color_pal(name: &str, variant: ColorVariant,
                 direction: impl Into<Direction>)
                 -> Result<PaletteFn<'static, RGB8>> {
    Registry::tableau().color(variant, name, direction)
}

/// Tableau shape palette.
pub fn shape_pal(variant: ShapeVariant) -> PaletteFn<'static, Marker> {
    Registry::tableau().shape(variant, Direction::Forward)
}

/// Continuous gradient through the colors of a Tableau palette.
pub fn gradient_pal<Color: RGBColor>(
    name: &str, variant: ColorVariant, direction: impl Into<Direction>,
) -> Result<PaletteGradient<Color>> {
    Ok(color_pal(name, variant, direction)?.gradient())
}

/// Sequential gradient.  The usual default palette is `"Blue"`.
pub fn seq_gradient_pal<Color: RGBColor>(
    name: &str, direction: impl Into<Direction>,
) -> Result<PaletteGradient<Color>> {
    gradient_pal(name, ColorVariant::OrderedSequential, direction)
}

/// Diverging gradient.  The usual default palette is
/// `"Orange-Blue Diverging"`.
pub fn div_gradient_pal<Color: RGBColor>(
    name: &str, direction: impl Into<Direction>,
) -> Result<PaletteGradient<Color>> {
    gradient_pal(name, ColorVariant::OrderedDiverging, direction)
}

/// Options selecting a discrete color palette.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorPalOptions {
    pub palette: String,
    pub variant: ColorVariant,
    pub direction: Direction,
}

impl Default for ColorPalOptions {
    fn default() -> Self {
        ColorPalOptions {
            palette: "Tableau 10".to_string(),
            variant: ColorVariant::Regular,
            direction: Direction::Forward,
        }
    }
}

impl ColorPalOptions {
    /// Look the palette up in the Tableau registry.
    pub fn resolve(&self) -> Result<PaletteFn<'static, RGB8>> {
        color_pal(&self.palette, self.variant, self.direction)
    }
}

/// Options selecting a gradient.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientOptions {
    pub palette: String,
    pub variant: ColorVariant,
    pub direction: Direction,
    /// Where each color of the palette sits in \[0, 1\]; evenly
    /// spaced when `None`.
    pub positions: Option<Vec<f64>>,
}

impl Default for GradientOptions {
    /// The sequential `"Blue"` gradient.
    fn default() -> Self {
        GradientOptions {
            palette: "Blue".to_string(),
            variant: ColorVariant::OrderedSequential,
            direction: Direction::Forward,
            positions: None,
        }
    }
}

impl GradientOptions {
    /// The `"Orange-Blue Diverging"` gradient.
    pub fn diverging() -> Self {
        GradientOptions {
            palette: "Orange-Blue Diverging".to_string(),
            variant: ColorVariant::OrderedDiverging,
            ..Default::default()
        }
    }

    /// The palette colors anchored at [`positions`](Self::positions).
    pub fn anchors(&self) -> Result<Anchors> {
        let pal = color_pal(&self.palette, self.variant, self.direction)?;
        let anchors = pal.anchors(self.positions.clone())?;
        debug!("gradient “{}”: {} anchors", self.palette, anchors.len());
        Ok(anchors)
    }

    /// Interpolate between the [`anchors`](Self::anchors).
    pub fn gradient<Color: RGBColor>(&self) -> Result<PaletteGradient<Color>> {
        Ok(self.anchors()?.gradient())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLEAU_10: [u32; 10] = [
        0x4E79A7, 0xF28E2B, 0xE15759, 0x76B7B2, 0x59A14F,
        0xEDC948, 0xB07AA1, 0xFF9DA7, 0x9C755F, 0xBAB0AC];

    fn rgb(hex: u32) -> RGB8 {
        RGB8::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    #[test]
    fn tableau_10_forward_and_reversed() {
        let fwd = color_pal("Tableau 10", ColorVariant::Regular, 1).unwrap();
        assert_eq!(fwd.max_n(), 10);
        assert_eq!(fwd.apply(3).unwrap(),
                   vec![rgb(TABLEAU_10[0]), rgb(TABLEAU_10[1]), rgb(TABLEAU_10[2])]);
        let rev = color_pal("Tableau 10", ColorVariant::Regular, -1).unwrap();
        assert_eq!(rev.max_n(), 10);
        assert_eq!(rev.apply(3).unwrap(),
                   vec![rgb(TABLEAU_10[9]), rgb(TABLEAU_10[8]), rgb(TABLEAU_10[7])]);
    }

    #[test]
    fn zero_is_empty() {
        let pal = color_pal("Tableau 10", ColorVariant::Regular, 1).unwrap();
        assert!(pal.apply(0).unwrap().is_empty());
        assert!(shape_pal(ShapeVariant::Filled).apply(0).unwrap().is_empty());
    }

    #[test]
    fn too_many_values() {
        let pal = color_pal("Tableau 10", ColorVariant::Regular, 1).unwrap();
        let err = pal.apply(12).unwrap_err();
        assert_eq!(err, Error::InsufficientPaletteCapacity { max_n: 10, n: 12 });
        let msg = err.to_string();
        assert!(msg.contains("10") && msg.contains("12"), "{msg}");
        assert_eq!(pal.apply(10).unwrap().len(), 10);
    }

    #[test]
    fn direction_is_negative_only() {
        assert_eq!(Direction::from(-1), Direction::Reverse);
        assert_eq!(Direction::from(-7), Direction::Reverse);
        assert_eq!(Direction::from(-0.5), Direction::Reverse);
        assert_eq!(Direction::from(0), Direction::Forward);
        assert_eq!(Direction::from(2), Direction::Forward);
        assert_eq!(Direction::from(f64::NAN), Direction::Forward);
        assert_eq!(Direction::from(-0.), Direction::Forward);
        let pal = color_pal("Tableau 10", ColorVariant::Regular, 0).unwrap();
        assert_eq!(pal.apply(1).unwrap(), vec![rgb(TABLEAU_10[0])]);
    }

    #[test]
    fn resolve_by_strings() {
        let pal = resolve("shape", "proportions", "proportions", 1).unwrap();
        assert_eq!(pal.family(), Family::Shape);
        assert!(pal.as_color().is_none());
        assert_eq!(pal.as_shape().map(|p| p.max_n()), Some(5));
        assert_eq!(pal.apply(2).unwrap(),
                   vec![Value::Shape(Marker::Circle),
                        Value::Shape(Marker::CircleQuarter)]);
        assert!(matches!(resolve("colour", "regular", "Tableau 10", 1),
                         Err(Error::FamilyNotRecognized { .. })));
        assert!(matches!(resolve("color", "sequential", "Blue", 1),
                         Err(Error::VariantNotRecognized { .. })));
        assert!(matches!(resolve("color", "regular", "Blue", 1),
                         Err(Error::NameNotFound { .. })));
        let pal = resolve("color", "ordered-sequential", "Blue", -1).unwrap();
        assert_eq!(pal.family(), Family::Color);
        assert_eq!(pal.direction(), Direction::Reverse);
        assert!(pal.as_shape().is_none());
        let blue = pal.as_color().unwrap();
        assert_eq!(blue.name(), "Blue");
        assert_eq!(pal.apply(1).unwrap(),
                   vec![Value::Color(blue.apply(1).unwrap()[0])]);
    }

    #[test]
    fn hex_strings() {
        let pal = color_pal("Classic 10", ColorVariant::Regular, -1).unwrap();
        assert_eq!(pal.hex(2).unwrap(), ["#17BECF", "#BCBD22"]);
    }

    #[test]
    fn options_defaults() {
        let pal = ColorPalOptions::default().resolve().unwrap();
        assert_eq!(pal.name(), "Tableau 10");
        let anchors = GradientOptions::diverging().anchors().unwrap();
        assert_eq!(anchors.len(), 7);
        assert_eq!(anchors.positions()[0], 0.);
        assert_eq!(anchors.positions()[6], 1.);
        let opts = GradientOptions { positions: Some(vec![0., 0.5]),
                                     ..Default::default() };
        assert!(matches!(opts.anchors(), Err(Error::InvalidPositions(_))));
    }
}
