//! Tableau color and shape palettes for grammar-of-graphics plotting.
//!
//! - [`resolve`], [`color_pal`], [`shape_pal`]: discrete palettes as
//!   [`PaletteFn`]s, `n ↦ first n values`, bounded by their capacity
//!   [`PaletteFn::max_n`].
//! - [`gradient_pal`], [`seq_gradient_pal`], [`div_gradient_pal`]:
//!   continuous [`PaletteGradient`]s (see the [`ColorRange`] trait).
//! - [`scale`]: discrete and continuous scales built on the palettes.
//!
//! All palettes live in an immutable [`Registry`], built once.
//!
//! # Example
//!
//! ```
//! use rgb::RGB8;
//! use tableau_palettes::{color_pal, ColorVariant};
//! let pal = color_pal("Tableau 10", ColorVariant::Regular, -1).unwrap();
//! let colors: Vec<RGB8> = pal.colors(3).unwrap();
//! assert_eq!(colors[0], RGB8::new(0xBA, 0xB0, 0xAC));
//! assert!(pal.apply(11).is_err());
//! ```

use std::f64::consts::PI;
use std::marker::PhantomData;
use rgb::{RGBA, RGB8, RGB16, RGBA8, RGBA16};

mod accessor;
mod error;
mod gradient;
mod marker;
mod palettes;
mod registry;
pub mod scale;

pub use accessor::{resolve, color_pal, shape_pal, gradient_pal,
                   seq_gradient_pal, div_gradient_pal,
                   AnyPalette, ColorPalOptions, Direction, DiscretePalette,
                   GradientOptions, PaletteFn, Value};
pub use error::{Error, Result};
pub use gradient::{Anchors, PaletteGradient};
pub use marker::Marker;
pub use palettes::ty::{ColorVariant, Family, ShapeVariant, Variant};
pub use registry::{PaletteFind, Registry};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.
    fn range(self, mut a: f64, mut b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        // `a` or `b` NaN will give an iterator yielding NaN.
        if n == 0 {
            Range { range: self,  color: PhantomData,
                    a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self,  color: PhantomData,
                    a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }
}

impl<Color, R> ColorRange<Color> for &R
where R: ColorRange<Color> {
    #[inline]
    fn rgb(&self, t: f64) -> Color { R::rgb(self, t) }
}

/// An iterator yielding `f64` in a given range together with colors.
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// Return the float and RGB color of the position `k` (assuming
    /// it is in the range `0 ..= self.last`).
    fn rgb(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, R::rgb(&self.range, 0.))
        } else if k == self.last {
            (self.b, R::rgb(&self.range, 1.))
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let t = beta / self.flast;
            let mut x = (alpha * self.a + beta * self.b) / self.flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, R::rgb(&self.range, t))
        }
    }

    fn remaining(&self) -> usize {
        if self.i <= self.j { self.j - self.i + 1 } else { 0 }
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn len(&self) -> usize { self.remaining() }
}

impl<R, Color> DoubleEndedIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Return a gradient from color `c0` to color `c1`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use tableau_palettes::{RGBColor, ColorRange};
    /// let red = RGB8::new(255,0, 0);
    /// let blue = RGB8::new(0, 0, 255);
    /// let grad = red.gradient(&blue);
    /// let rgb = grad.rgb(0.5);
    /// ```
    fn gradient(&self, c1: &Self) -> Gradient<Self> {
        let lch0 = Lch::from_rgb(Self::to_rgba(self));
        let lch1 = Lch::from_rgb(Self::to_rgba(c1));
        let h0 = lch0.h;
        let h1 = lch1.h;
        let dh = {
            if h1 > h0 && h1 - h0 > PI { h1 - (h0 + TWO_PI) }
            else if h1 < h0 && h0 - h1 > PI { h1 + TWO_PI - h0 }
            else { h1 - h0 } };
        Gradient { c0: lch0,
                   dc: Lch { l: lch1.l - lch0.l, c: lch1.c - lch0.c,
                             h: dh, a: lch1.a - lch0.a },
                   color: PhantomData }
    }

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let RGBA{ r, g, b, a } = Self::to_rgba(self);
        let x = 0.299 * r + 0.587 * g + 0.114 * b;
        Self::from_rgba(RGBA{ r: x, g: x, b: x, a })
    }

    /// CSS notation of the color: `#RRGGBB`, or `#RRGGBBAA` if it is
    /// not opaque.
    fn to_hex(&self) -> String {
        let c = RGBA8::from_rgba(self.to_rgba());
        if c.a == 255 {
            format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", c.r, c.g, c.b, c.a)
        }
    }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: c.r.round() as u8,  g: c.g.round() as u8,
               b: c.b.round() as u8 }
    }
}

// 16 bits components are scaled by 257 = 65535 / 255.

impl RGBColor for RGB16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 257., g: self.g as f64 / 257.,
              b: self.b as f64 / 257., a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB16 { r: (257. * c.r).round() as u16,  g: (257. * c.g).round() as u16,
                b: (257. * c.b).round() as u16 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: c.r.round() as u8,  g: c.g.round() as u8,
                b: c.b.round() as u8, a: c.a.round() as u8 }
    }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 257., g: self.g as f64 / 257.,
              b: self.b as f64 / 257., a: self.a as f64 / 257. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA16 { r: (257. * c.r).round() as u16,  g: (257. * c.g).round() as u16,
                 b: (257. * c.b).round() as u16, a: (257. * c.a).round() as u16 }
    }
}

/// Parse a CSS hexadecimal color: `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
///
/// ```
/// use rgb::RGBA8;
/// use tableau_palettes::parse_hex;
/// assert_eq!(parse_hex("#4E79A7").unwrap(), RGBA8::new(0x4E, 0x79, 0xA7, 255));
/// assert!(parse_hex("4E79A7").is_err());
/// ```
pub fn parse_hex(s: &str) -> Result<RGBA8> {
    let err = || Error::InvalidColor(s.to_string());
    let hex = s.strip_prefix('#').ok_or_else(err)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(err());
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i .. i + 2], 16)
        .map_err(|_| err());
    match hex.len() {
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&hex[i .. i + 1], 16)
                .map(|x| 17 * x)
                .map_err(|_| err());
            Ok(RGBA8::new(nibble(0)?, nibble(1)?, nibble(2)?, 255))
        }
        6 => Ok(RGBA8::new(byte(0)?, byte(2)?, byte(4)?, 255)),
        8 => Ok(RGBA8::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => Err(err()),
    }
}

/// The type for colors in the CIE L*C*h*_ab color space with a D50
/// reference white point and an alpha component.  This color space is
/// CIE L*a*b* with polar coordinates.
#[derive(Clone, Copy)]
struct Lch {
    /// The lightness in the range 0. to 100.
    l: f64,
    /// The chroma, in the range 0. to 181.02, but less in practice.
    c: f64,
    /// The hue in radians in the range 0. to 2π.
    h: f64,
    /// Alpha component
    a: f64,
}

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0 ;
const TWO_PI: f64 = 2. * PI;

/// sRGB component in \[0, 255\] to linear intensity in \[0, 1\].
fn linearize(x: f64) -> f64 {
    let x = x / 255.;
    if x <= 0.04045 { x / 12.92 } else { ((x + 0.055) / 1.055).powf(2.4) }
}

/// Inverse of [`linearize`].
fn delinearize(x: f64) -> f64 {
    let x = if x <= 0.0031308 { 12.92 * x }
            else { 1.055 * x.powf(1. / 2.4) - 0.055 };
    255. * x
}

impl Lch {
    fn from_rgb(c: RGBA<f64>) -> Lch {
        // See https://github.com/dbuenzli/gg/blob/b8704687d669d139bb4ac7a54115afc7e5caaa55/src/gg.ml#L2926
        const C0: f64 = 1. / 3.;
        const C1: f64 = 841. / 108.;
        const C2: f64 = 4. / 29.;
        let (r, g, b) = (linearize(c.r), linearize(c.g), linearize(c.b));
        let xr = 0.4522795 * r + 0.3993744 * g + 0.1483460 * b;
        let yr = 0.2225105 * r + 0.7168863 * g + 0.0606032 * b;
        let zr = 0.0168820 * r + 0.1176865 * g + 0.8654315 * b;
        let fx = if xr > EPS { xr.powf(C0) } else { C1 * xr + C2 };
        let fy = if yr > EPS { yr.powf(C0) } else { C1 * yr + C2 };
        let fz = if zr > EPS { zr.powf(C0) } else { C1 * zr + C2 };
        let l = 116. * fy - 16.;
        let a = 500. * (fx - fy);
        let b = 200. * (fy - fz);
        let h = { let h = b.atan2(a);
                  if h < 0. { h + TWO_PI } else { h } };
        Lch { l, c: a.hypot(b), h, a: c.a }
    }

    fn to_rgb(&self) -> RGBA<f64> {
        const C0: f64 = 108. / 841.;
        const C1: f64 = 4. / 29.;
        let a = self.c * self.h.cos();
        let b =  self.c * self.h.sin();
        let fy = (self.l + 16.) / 116.;
        let fx = a / 500. + fy;
        let fz = fy - b / 200.;
        let fx1 = if fx > EPS0 { fx * fx * fx } else { C0 * (fx - C1) };
        let fy1 = if fy > EPS0 { fy * fy * fy } else { C0 * (fy - C1) };
        let fz1 = if fz > EPS0 { fz * fz * fz } else { C0 * (fz - C1) };
        let r = 3.0215932  * fx1 - 1.6168777 * fy1 - 0.4047152 * fz1;
        let g = -0.9437222 * fx1 + 1.9161365 * fy1 + 0.0275856 * fz1;
        let b = 0.0693906  * fx1 - 0.2290271 * fy1 + 1.1596365 * fz1;
        RGBA { r: delinearize(r).clamp(0., 255.),
               g: delinearize(g).clamp(0., 255.),
               b: delinearize(b).clamp(0., 255.),
               a: self.a }
    }
}

/// Gradient between two colors.
///
/// Created by [`RGBColor::gradient`].  See the [`ColorRange`] trait
/// for methods.
pub struct Gradient<Color> {
    c0: Lch, // first color
    dc: Lch, // last - fist color
    color: PhantomData<Color>,
}

impl<Color> Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\] but does
    /// not check the later condition.
    #[inline]
    fn rgb_unsafe(&self, t: f64) -> Color {
        let lhc = Lch { l: self.c0.l + t * self.dc.l,
              c: self.c0.c + t * self.dc.c,
              h: self.c0.h + t * self.dc.h,
              a: self.c0.a + t * self.dc.a };
        Color::from_rgba(lhc.to_rgb())
    }
}

impl<Color> ColorRange<Color> for Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\], where
    /// `t == 0.` returns the first color provided in the gradient and
    /// `t == 1.` the second.
    fn rgb(&self, t: f64) -> Color { self.rgb_unsafe(t.clamp(0., 1.)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_range() {
        let c0 = RGB8::new(94, 0, 99);
        let c1 = RGB8::new(255, 235, 170);
        let g = c0.gradient(&c1);
        let samples: Vec<_> = (&g).range(0., 1., 11).collect();
        assert_eq!(samples.len(), 11);
        for (i, &(x, c)) in samples.iter().enumerate() {
            assert!((x - 0.1 * i as f64).abs() <= 1e-15,
                    "{} ≉ {}", x, 0.1 * i as f64);
            assert_eq!(g.rgb(x), c);
        }
        assert_eq!(samples[0].1, c0);
        assert_eq!(samples[10].1, c1);
    }

    #[test]
    fn range_from_both_ends() {
        let g = RGB8::new(0, 0, 0).gradient(&RGB8::new(255, 255, 255));
        let mut r = g.range(10., 20., 3);
        assert_eq!(r.len(), 3);
        assert_eq!(r.next_back().map(|(x, _)| x), Some(20.));
        assert_eq!(r.len(), 2);
        assert_eq!(r.next().map(|(x, _)| x), Some(10.));
        assert_eq!(r.next().map(|(x, _)| x), Some(15.));
        assert_eq!(r.len(), 0);
        assert!(r.next().is_none());
        assert_eq!(RGB8::new(0, 0, 0).gradient(&RGB8::new(1, 1, 1))
                   .range(0., 1., 0).count(), 0);
    }

    #[test]
    fn conversions() {
        let c = RGB8::new(0x4E, 0x79, 0xA7);
        assert_eq!(c.to_hex(), "#4E79A7");
        assert_eq!(RGBA8::new(1, 2, 3, 4).to_hex(), "#01020304");
        assert_eq!(RGB16::from_rgba(c.to_rgba()), RGB16::new(0x4E4E, 0x7979, 0xA7A7));
        assert_eq!(RGB8::from_rgba(RGB16::new(0x4E4E, 0x7979, 0xA7A7).to_rgba()), c);
        let gray = RGB8::new(255, 0, 0).to_gray();
        assert_eq!((gray.r, gray.g, gray.b), (76, 76, 76));
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(parse_hex("#fff"), Ok(RGBA8::new(255, 255, 255, 255)));
        assert_eq!(parse_hex("#4e79a780"), Ok(RGBA8::new(0x4E, 0x79, 0xA7, 0x80)));
        for s in ["", "#", "#12345", "#12345G", "4E79A7", "#ééé"] {
            assert_eq!(parse_hex(s), Err(Error::InvalidColor(s.to_string())));
        }
    }

    #[test]
    fn lch_round_trip() {
        for c in [RGB8::new(0, 0, 0), RGB8::new(255, 255, 255),
                  RGB8::new(0x4E, 0x79, 0xA7), RGB8::new(255, 0, 0),
                  RGB8::new(0, 255, 0), RGB8::new(0, 0, 255)] {
            assert_eq!(RGB8::from_rgba(Lch::from_rgb(c.to_rgba()).to_rgb()), c);
        }
    }
}
