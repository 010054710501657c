//! Scales: map data onto aesthetic values through a palette.
//!
//! A [`DiscreteScale`] hands the `k`-th distinct level of the data the
//! `k`-th value of a [`DiscretePalette`]; a [`ContinuousScale`]
//! rescales numbers into \[0, 1\] and samples a [`ColorRange`].  The
//! `scale_*_tableau` functions build both from the Tableau palettes.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use log::debug;
use rgb::RGB8;

use crate::accessor::{color_pal, shape_pal, Direction, DiscretePalette,
                      GradientOptions, PaletteFn};
use crate::error::Result;
use crate::gradient::PaletteGradient;
use crate::marker::Marker;
use crate::palettes::ty::{ColorVariant, ShapeVariant};
use crate::ColorRange;

/// Visual property a scale maps data onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Aesthetic {
    Colour,
    Fill,
    Shape,
}

impl fmt::Display for Aesthetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Aesthetic::Colour => "colour",
            Aesthetic::Fill => "fill",
            Aesthetic::Shape => "shape",
        })
    }
}

/// A scale for categorical data.
pub struct DiscreteScale<P: DiscretePalette> {
    aesthetics: Vec<Aesthetic>,
    scale_name: &'static str,
    palette: P,
    na_value: Option<P::Value>,
}

impl<P> DiscreteScale<P>
where P: DiscretePalette, P::Value: Clone {
    /// A scale for `aesthetic` drawing its values from `palette`.
    pub fn new(aesthetic: Aesthetic, scale_name: &'static str, palette: P) -> Self {
        DiscreteScale { aesthetics: vec![aesthetic], scale_name, palette,
                        na_value: None }
    }

    /// Value given to missing data.
    pub fn na_value(mut self, value: P::Value) -> Self {
        self.na_value = Some(value);
        self
    }

    pub fn aesthetics(&self) -> &[Aesthetic] { &self.aesthetics }

    pub fn scale_name(&self) -> &'static str { self.scale_name }

    pub fn palette(&self) -> &P { &self.palette }

    /// The distinct levels of `data`, in order of first appearance.
    /// Missing values are skipped.
    pub fn train<K>(&self, data: &[Option<K>]) -> Vec<K>
    where K: Eq + Hash + Clone {
        let mut seen = HashSet::new();
        data.iter().flatten()
            .filter(|&k| seen.insert(k))
            .cloned()
            .collect()
    }

    /// Pair each level with its palette value.  Fails if the palette
    /// cannot supply as many values as there are levels.
    pub fn map_levels<K>(&self, levels: &[K]) -> Result<Vec<(K, P::Value)>>
    where K: Clone {
        let values = self.palette.apply(levels.len())?;
        Ok(levels.iter().cloned().zip(values).collect())
    }

    /// Map every datum to the value of its level; missing data map to
    /// the scale's `na_value`.
    pub fn map<K>(&self, data: &[Option<K>]) -> Result<Vec<Option<P::Value>>>
    where K: Eq + Hash + Clone {
        let levels = self.train(data);
        let values = self.palette.apply(levels.len())?;
        debug!("{} scale “{}”: {} levels", self.aesthetics[0], self.scale_name,
               levels.len());
        let index: HashMap<&K, usize> = levels.iter().enumerate()
            .map(|(i, k)| (k, i))
            .collect();
        Ok(data.iter().map(|d| match d {
            Some(k) => index.get(k).map(|&i| values[i].clone()),
            None => self.na_value.clone(),
        }).collect())
    }
}

impl<P> fmt::Debug for DiscreteScale<P>
where P: DiscretePalette + fmt::Debug, P::Value: fmt::Debug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscreteScale")
            .field("aesthetics", &self.aesthetics)
            .field("scale_name", &self.scale_name)
            .field("palette", &self.palette)
            .field("na_value", &self.na_value)
            .finish()
    }
}

/// A scale for numeric data mapped onto colors.
pub struct ContinuousScale<R, Color> {
    aesthetics: Vec<Aesthetic>,
    scale_name: &'static str,
    palette: R,
    limits: (f64, f64),
    na_value: Option<Color>,
}

impl<R, Color> ContinuousScale<R, Color>
where R: ColorRange<Color>, Color: Clone {
    /// A scale sampling `palette` between `limits`.
    pub fn new(aesthetic: Aesthetic, scale_name: &'static str, palette: R,
               limits: (f64, f64)) -> Self {
        ContinuousScale { aesthetics: vec![aesthetic], scale_name, palette,
                          limits, na_value: None }
    }

    /// Value given to missing data and data outside the limits.
    pub fn na_value(mut self, value: Color) -> Self {
        self.na_value = Some(value);
        self
    }

    pub fn aesthetics(&self) -> &[Aesthetic] { &self.aesthetics }

    pub fn scale_name(&self) -> &'static str { self.scale_name }

    pub fn limits(&self) -> (f64, f64) { self.limits }

    /// Position of `x` in \[0, 1\] relative to the limits, or `None`
    /// if `x` is NaN or outside them.  A zero-width range maps to the
    /// middle.
    pub fn rescale(&self, x: f64) -> Option<f64> {
        let (lo, hi) = self.limits;
        if !(lo.min(hi) <= x && x <= lo.max(hi)) {
            return None;
        }
        if lo == hi { Some(0.5) } else { Some((x - lo) / (hi - lo)) }
    }

    pub fn map(&self, x: f64) -> Option<Color> {
        match self.rescale(x) {
            Some(t) => Some(self.palette.rgb(t)),
            None => self.na_value.clone(),
        }
    }

    /// [`map`](Self::map) every datum.
    pub fn map_all(&self, data: &[f64]) -> Vec<Option<Color>> {
        data.iter().map(|&x| self.map(x)).collect()
    }

    /// `n` evenly spaced legend keys between the limits, with their
    /// colors.
    pub fn breaks(&self, n: usize) -> Vec<(f64, Color)> {
        let (lo, hi) = self.limits;
        (&self.palette).range(lo, hi, n).collect()
    }
}

impl<R, Color: fmt::Debug> fmt::Debug for ContinuousScale<R, Color> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContinuousScale")
            .field("aesthetics", &self.aesthetics)
            .field("scale_name", &self.scale_name)
            .field("limits", &self.limits)
            .field("na_value", &self.na_value)
            .finish_non_exhaustive()
    }
}

pub type ColorScale = DiscreteScale<PaletteFn<'static, RGB8>>;
pub type ShapeScale = DiscreteScale<PaletteFn<'static, Marker>>;
pub type GradientScale = ContinuousScale<PaletteGradient<RGB8>, RGB8>;

fn tableau(aesthetic: Aesthetic, palette: &str, variant: ColorVariant,
           direction: Direction) -> Result<ColorScale> {
    let pal = color_pal(palette, variant, direction)?;
    debug!("{aesthetic} scale: tableau “{palette}” ({variant})");
    Ok(DiscreteScale::new(aesthetic, "tableau", pal))
}

/// Discrete colour scale from a Tableau color palette.
pub fn scale_colour_tableau(palette: &str, variant: ColorVariant,
                            direction: impl Into<Direction>) -> Result<ColorScale> {
    tableau(Aesthetic::Colour, palette, variant, direction.into())
}

/// Discrete fill scale from a Tableau color palette.
pub fn scale_fill_tableau(palette: &str, variant: ColorVariant,
                          direction: impl Into<Direction>) -> Result<ColorScale> {
    tableau(Aesthetic::Fill, palette, variant, direction.into())
}

/// Discrete shape scale from a Tableau shape palette.
pub fn scale_shape_tableau(variant: ShapeVariant) -> ShapeScale {
    debug!("shape scale: tableau ({variant})");
    DiscreteScale::new(Aesthetic::Shape, "tableau", shape_pal(variant))
}

fn gradient(aesthetic: Aesthetic, scale_name: &'static str,
            opts: &GradientOptions, limits: (f64, f64)) -> Result<GradientScale> {
    let grad = opts.gradient()?;
    debug!("{aesthetic} scale: {scale_name} “{}” over {limits:?}", opts.palette);
    Ok(ContinuousScale::new(aesthetic, scale_name, grad, limits))
}

/// Continuous colour scale along a sequential Tableau palette
/// ([`GradientOptions::default`] is `"Blue"`).
pub fn scale_colour_gradient_tableau(opts: &GradientOptions, limits: (f64, f64))
                                     -> Result<GradientScale> {
    gradient(Aesthetic::Colour, "gradient_tableau", opts, limits)
}

/// Continuous fill scale along a sequential Tableau palette.
pub fn scale_fill_gradient_tableau(opts: &GradientOptions, limits: (f64, f64))
                                   -> Result<GradientScale> {
    gradient(Aesthetic::Fill, "gradient_tableau", opts, limits)
}

/// Continuous colour scale along a diverging Tableau palette
/// ([`GradientOptions::diverging`] is `"Orange-Blue Diverging"`).
pub fn scale_colour_gradient2_tableau(opts: &GradientOptions, limits: (f64, f64))
                                      -> Result<GradientScale> {
    gradient(Aesthetic::Colour, "gradient2_tableau", opts, limits)
}

/// Continuous fill scale along a diverging Tableau palette.
pub fn scale_fill_gradient2_tableau(opts: &GradientOptions, limits: (f64, f64))
                                    -> Result<GradientScale> {
    gradient(Aesthetic::Fill, "gradient2_tableau", opts, limits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn levels_in_order_of_appearance() {
        let scale = scale_colour_tableau("Tableau 10", ColorVariant::Regular, 1)
            .unwrap();
        let data = [Some("b"), Some("a"), None, Some("b"), Some("c")];
        assert_eq!(scale.train(&data), ["b", "a", "c"]);
        let pal = scale.palette().apply(3).unwrap();
        let mapped = scale.map(&data).unwrap();
        assert_eq!(mapped, [Some(pal[0]), Some(pal[1]), None, Some(pal[0]),
                            Some(pal[2])]);
        assert_eq!(scale.aesthetics(), &[Aesthetic::Colour]);
    }

    #[test]
    fn missing_data_use_na_value() {
        let gray = RGB8::new(0x80, 0x80, 0x80);
        let scale = scale_fill_tableau("Tableau 10", ColorVariant::Regular, -1)
            .unwrap()
            .na_value(gray);
        let mapped = scale.map(&[None, Some(1)]).unwrap();
        assert_eq!(mapped[0], Some(gray));
        assert_eq!(mapped[1], Some(RGB8::new(0xBA, 0xB0, 0xAC)));
    }

    #[test]
    fn too_many_levels() {
        let scale = scale_shape_tableau(ShapeVariant::Proportions);
        let data: Vec<_> = (0 .. 6).map(Some).collect();
        assert_eq!(scale.map(&data).unwrap_err(),
                   Error::InsufficientPaletteCapacity { max_n: 5, n: 6 });
        let levels = scale.map_levels(&["x", "y"]).unwrap();
        assert_eq!(levels, [("x", Marker::Circle), ("y", Marker::CircleQuarter)]);
    }

    #[test]
    fn continuous_limits() {
        let scale = scale_colour_gradient_tableau(&GradientOptions::default(),
                                                  (10., 20.))
            .unwrap();
        let pal = color_pal("Blue", ColorVariant::OrderedSequential, 1).unwrap();
        let blues: Vec<RGB8> = pal.colors(pal.max_n()).unwrap();
        assert_eq!(scale.map(10.), Some(blues[0]));
        assert_eq!(scale.map(20.), Some(blues[blues.len() - 1]));
        assert_eq!(scale.map(25.), None);
        assert_eq!(scale.map(f64::NAN), None);
        let red = RGB8::new(255, 0, 0);
        let scale = scale.na_value(red);
        assert_eq!(scale.map_all(&[10., f64::NAN, 5., 20.]),
                   [Some(blues[0]), Some(red), Some(red),
                    Some(blues[blues.len() - 1])]);
        assert_eq!(scale.rescale(15.), Some(0.5));
        let breaks = scale.breaks(3);
        assert_eq!(breaks.iter().map(|b| b.0).collect::<Vec<_>>(), [10., 15., 20.]);
        assert_eq!(breaks[0].1, blues[0]);
    }

    #[test]
    fn diverging_reversed() {
        let opts = GradientOptions { direction: Direction::Reverse,
                                     ..GradientOptions::diverging() };
        let scale = scale_fill_gradient2_tableau(&opts, (-1., 1.)).unwrap();
        let pal = color_pal("Orange-Blue Diverging", ColorVariant::OrderedDiverging,
                            1).unwrap();
        let colors: Vec<RGB8> = pal.colors(7).unwrap();
        assert_eq!(scale.map(-1.), Some(colors[6]));
        assert_eq!(scale.map(0.), Some(colors[3]));
        assert_eq!(scale.map(1.), Some(colors[0]));
        let bad = GradientOptions { palette: "Blue".to_string(),
                                    ..GradientOptions::diverging() };
        assert!(matches!(scale_colour_gradient2_tableau(&bad, (0., 1.)),
                         Err(Error::NameNotFound { .. })));
    }
}
