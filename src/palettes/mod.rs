//! Palette tables and their name index.

use std::collections::HashMap;

pub(crate) mod ty;
mod tableau;
use ty::PaletteData;

pub(crate) use tableau::{ORDERED_DIVERGING, ORDERED_SEQUENTIAL, REGULAR,
                         SHAPES_DEFAULT, SHAPES_FILLED, SHAPES_PROPORTIONS};

/// The palettes of one `(family, variant)`, indexed by name.
pub(crate) struct Table<T: 'static> {
    palettes: &'static [PaletteData<T>],
    index: HashMap<&'static str, usize>,
}

impl<T: 'static> Table<T> {
    pub(crate) fn new(palettes: &'static [PaletteData<T>]) -> Self {
        let index = palettes.iter().enumerate()
            .map(|(i, p)| (p.name, i))
            .collect();
        Table { palettes, index }
    }

    pub(crate) fn get(&self, name: &str) -> Option<&'static PaletteData<T>> {
        self.index.get(name).map(|&i| &self.palettes[i])
    }

    /// Names of the palettes, in catalog order.
    pub(crate) fn names(&self) -> Vec<&'static str> {
        self.palettes.iter().map(|p| p.name).collect()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &'static PaletteData<T>> {
        self.palettes.iter()
    }
}
