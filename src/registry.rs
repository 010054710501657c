//! The palette store.

use std::slice;

use lazy_static::lazy_static;
use log::debug;
use rgb::RGB8;

use crate::accessor::{AnyPalette, Direction, PaletteFn};
use crate::error::{Error, Result};
use crate::marker::Marker;
use crate::palettes::{self, Table};
use crate::palettes::ty::{ColorVariant, PaletteData, ShapeVariant, Variant};

/// Immutable store of palettes keyed by variant and name.
///
/// The Tableau registry is built once, on first use, and shared by
/// reference afterwards; see [`Registry::tableau`].
pub struct Registry {
    regular: Table<RGB8>,
    sequential: Table<RGB8>,
    diverging: Table<RGB8>,
    shapes_default: Table<Marker>,
    shapes_filled: Table<Marker>,
    shapes_proportions: Table<Marker>,
}

lazy_static! {
    static ref TABLEAU: Registry = Registry {
        regular: Table::new(palettes::REGULAR),
        sequential: Table::new(palettes::ORDERED_SEQUENTIAL),
        diverging: Table::new(palettes::ORDERED_DIVERGING),
        shapes_default: Table::new(slice::from_ref(shape_data(ShapeVariant::Default))),
        shapes_filled: Table::new(slice::from_ref(shape_data(ShapeVariant::Filled))),
        shapes_proportions:
            Table::new(slice::from_ref(shape_data(ShapeVariant::Proportions))),
    };
}

fn shape_data(variant: ShapeVariant) -> &'static PaletteData<Marker> {
    match variant {
        ShapeVariant::Default => &palettes::SHAPES_DEFAULT,
        ShapeVariant::Filled => &palettes::SHAPES_FILLED,
        ShapeVariant::Proportions => &palettes::SHAPES_PROPORTIONS,
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("regular", &self.regular.names().len())
            .field("ordered-sequential", &self.sequential.names().len())
            .field("ordered-diverging", &self.diverging.names().len())
            .finish_non_exhaustive()
    }
}

impl Registry {
    /// The Tableau palettes.
    pub fn tableau() -> &'static Registry { &TABLEAU }

    fn colors(&self, variant: ColorVariant) -> &Table<RGB8> {
        match variant {
            ColorVariant::Regular => &self.regular,
            ColorVariant::OrderedSequential => &self.sequential,
            ColorVariant::OrderedDiverging => &self.diverging,
        }
    }

    fn shapes(&self, variant: ShapeVariant) -> &Table<Marker> {
        match variant {
            ShapeVariant::Default => &self.shapes_default,
            ShapeVariant::Filled => &self.shapes_filled,
            ShapeVariant::Proportions => &self.shapes_proportions,
        }
    }

    /// Names of the palettes of `variant`, in catalog order.
    pub fn names(&self, variant: impl Into<Variant>) -> Vec<&'static str> {
        match variant.into() {
            Variant::Color(v) => self.colors(v).names(),
            Variant::Shape(v) => self.shapes(v).names(),
        }
    }

    fn color_data(&self, variant: ColorVariant, name: &str)
                  -> Result<&'static PaletteData<RGB8>> {
        self.colors(variant).get(name).ok_or_else(|| Error::NameNotFound {
            variant: variant.into(),
            name: name.to_string(),
            valid: self.colors(variant).names(),
        })
    }

    /// The colors of the palette `name`, in catalog order.
    pub fn color_values(&self, variant: ColorVariant, name: &str)
                        -> Result<&'static [RGB8]> {
        Ok(self.color_data(variant, name)?.values)
    }

    /// Color palette `name` of `variant`, in the given direction.
    pub fn color(&self, variant: ColorVariant, name: &str,
                 direction: impl Into<Direction>)
                 -> Result<PaletteFn<'static, RGB8>> {
        let direction = direction.into();
        let p = self.color_data(variant, name)?;
        debug!("resolved color palette “{}” ({variant}, {} values, {:?})",
               p.name, p.values.len(), direction);
        Ok(PaletteFn::new(p.name, p.values, direction))
    }

    /// The shape palette of `variant`.  Each shape variant holds a
    /// single palette named after the variant.
    pub fn shape(&self, variant: ShapeVariant, direction: impl Into<Direction>)
                 -> PaletteFn<'static, Marker> {
        let direction = direction.into();
        let p = shape_data(variant);
        debug!("resolved shape palette “{}” ({} values, {:?})",
               p.name, p.values.len(), direction);
        PaletteFn::new(p.name, p.values, direction)
    }

    /// Resolve `name` among the palettes of `variant`.
    pub fn resolve(&self, variant: impl Into<Variant>, name: &str,
                   direction: impl Into<Direction>)
                   -> Result<AnyPalette<'static>> {
        match variant.into() {
            Variant::Color(v) =>
                self.color(v, name, direction).map(AnyPalette::Color),
            Variant::Shape(v) => {
                if self.shapes(v).get(name).is_none() {
                    return Err(Error::NameNotFound {
                        variant: v.into(),
                        name: name.to_string(),
                        valid: self.shapes(v).names(),
                    });
                }
                Ok(AnyPalette::Shape(self.shape(v, direction)))
            }
        }
    }

    /// Find color palettes able to supply at least `len` values.
    pub fn find(&self, len: usize) -> PaletteFind<'_> {
        PaletteFind { registry: self, len, variants: vec![] }
    }
}

/// Set criteria to find matching palettes.
///
/// Created by [`Registry::find`].
#[derive(Clone)]
pub struct PaletteFind<'a> {
    registry: &'a Registry,
    len: usize,
    variants: Vec<ColorVariant>,
}

impl<'a> PaletteFind<'a> {
    /// Find palettes of this variant.  Use several times to specify
    /// more than one [`ColorVariant`].
    pub fn variant(mut self, v: ColorVariant) -> Self {
        self.variants.push(v);
        self
    }

    /// Return the palettes of capacity at least `len` (and of the
    /// requested variants, all of them if none was given), in forward
    /// direction.
    pub fn find(self) -> impl Iterator<Item = PaletteFn<'static, RGB8>> + 'a {
        let variants = if self.variants.is_empty() { ColorVariant::ALL.to_vec() }
                       else { self.variants };
        let registry = self.registry;
        let len = self.len;
        variants.into_iter()
            .flat_map(move |v| registry.colors(v).iter())
            .filter(move |p| p.values.len() >= len)
            .map(|p| PaletteFn::new(p.name, p.values, Direction::Forward))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_n_is_table_length() {
        let reg = Registry::tableau();
        for v in ColorVariant::ALL {
            for name in reg.names(v) {
                let pal = reg.color(v, name, 1).unwrap();
                assert_eq!(pal.max_n(), reg.color_values(v, name).unwrap().len());
                assert_eq!(pal.name(), name);
            }
        }
        assert_eq!(reg.shape(ShapeVariant::Default, 1).max_n(), 10);
        assert_eq!(reg.shape(ShapeVariant::Proportions, 1).max_n(), 5);
    }

    #[test]
    fn unknown_name_lists_every_palette() {
        let reg = Registry::tableau();
        let err = reg.color(ColorVariant::OrderedDiverging, "does-not-exist", 1)
            .unwrap_err();
        match &err {
            Error::NameNotFound { variant, name, valid } => {
                assert_eq!(*variant, Variant::Color(ColorVariant::OrderedDiverging));
                assert_eq!(name, "does-not-exist");
                assert_eq!(*valid, reg.names(ColorVariant::OrderedDiverging));
            }
            e => panic!("unexpected error {e:?}"),
        }
        let msg = err.to_string();
        for name in reg.names(ColorVariant::OrderedDiverging) {
            assert!(msg.contains(name), "{name} missing from “{msg}”");
        }
    }

    #[test]
    fn shape_names() {
        let reg = Registry::tableau();
        assert_eq!(reg.names(ShapeVariant::Filled), ["filled"]);
        assert!(reg.resolve(ShapeVariant::Filled, "filled", -1).is_ok());
        let err = reg.resolve(ShapeVariant::Filled, "default", 1).unwrap_err();
        assert!(matches!(err, Error::NameNotFound { ref valid, .. }
                         if valid == &["filled"]));
    }

    #[test]
    fn shape_prefix_and_reversal() {
        let reg = Registry::tableau();
        for v in ShapeVariant::ALL {
            let fwd = reg.shape(v, 1);
            let rev = reg.shape(v, -1);
            let m = fwd.max_n();
            let all = fwd.apply(m).unwrap();
            let mut reversed = all.clone();
            reversed.reverse();
            assert_eq!(rev.apply(m).unwrap(), reversed, "{v}");
            for n in 0 ..= m {
                assert_eq!(fwd.apply(n).unwrap(), &all[.. n], "{v}");
                assert_eq!(rev.apply(n).unwrap(), &reversed[.. n], "{v}");
            }
            for pal in [fwd, rev] {
                assert_eq!(pal.apply(m + 1).unwrap_err(),
                           Error::InsufficientPaletteCapacity { max_n: m, n: m + 1 });
            }
        }
    }

    #[test]
    fn find_by_capacity() {
        let reg = Registry::tableau();
        let big: Vec<_> = reg.find(20).variant(ColorVariant::Regular).find()
            .map(|p| p.name())
            .collect();
        assert_eq!(big, ["Tableau 20", "Classic 20", "Classic Cyclic"]);
        assert!(reg.find(21).find().next().is_none());
        let all = reg.find(0).find().count();
        let expected: usize = ColorVariant::ALL.iter()
            .map(|&v| reg.names(v).len()).sum();
        assert_eq!(all, expected);
    }
}
