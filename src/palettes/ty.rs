use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A named palette table with its entries in catalog order.
pub(crate) struct PaletteData<T: 'static> {
    pub(crate) name: &'static str,
    pub(crate) values: &'static [T], // Invariant: length ≥ 1
}

/// Family of a palette: what kind of values its entries are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// Entries are RGB colors.
    Color,
    /// Entries are [`Marker`](crate::Marker)s.
    Shape,
}

impl Family {
    pub const ALL: [Family; 2] = [Family::Color, Family::Shape];

    pub fn name(self) -> &'static str {
        match self {
            Family::Color => "color",
            Family::Shape => "shape",
        }
    }

    /// Names of the variants recognized for this family.
    pub fn variant_names(self) -> Vec<&'static str> {
        match self {
            Family::Color => ColorVariant::ALL.iter().map(|v| v.name()).collect(),
            Family::Shape => ShapeVariant::ALL.iter().map(|v| v.name()).collect(),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Family::ALL.into_iter().find(|f| f.name() == s)
            .ok_or_else(|| Error::FamilyNotRecognized { family: s.to_string() })
    }
}

/// Type of color palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorVariant {
    /// Qualitative color scheme.  They do not imply magnitude
    /// differences between legend classes, and hues are used to
    /// create the primary visual differences between classes.
    /// Qualitative schemes are best suited to representing nominal or
    /// categorical data.
    Regular,
    /// Sequential color scheme, suited to ordered data that progress
    /// from low to high.  Lightness steps dominate the look of these
    /// schemes, with light colors for low data values to dark colors
    /// for high data values.
    OrderedSequential,
    /// Divergent color scheme.  They put equal emphasis on mid-range
    /// critical values and extremes at both ends of the data
    /// range.  The critical class or break in the middle of the legend
    /// is emphasized with light colors and low and high extremes are
    /// emphasized with dark colors that have contrasting hues.
    OrderedDiverging,
}

impl ColorVariant {
    pub const ALL: [ColorVariant; 3] = [
        ColorVariant::Regular,
        ColorVariant::OrderedSequential,
        ColorVariant::OrderedDiverging,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorVariant::Regular => "regular",
            ColorVariant::OrderedSequential => "ordered-sequential",
            ColorVariant::OrderedDiverging => "ordered-diverging",
        }
    }
}

impl fmt::Display for ColorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        ColorVariant::ALL.into_iter().find(|v| v.name() == s)
            .ok_or_else(|| Error::VariantNotRecognized {
                family: Family::Color,
                variant: s.to_string(),
                valid: Family::Color.variant_names(),
            })
    }
}

/// Style of shape palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeVariant {
    /// Outlined markers and strokes.
    Default,
    /// Solid markers.
    Filled,
    /// Circles filled by quarters, for part-of-whole encodings.
    Proportions,
}

impl ShapeVariant {
    pub const ALL: [ShapeVariant; 3] = [
        ShapeVariant::Default,
        ShapeVariant::Filled,
        ShapeVariant::Proportions,
    ];

    /// The variant name, which is also the name of its only palette.
    pub fn name(self) -> &'static str {
        match self {
            ShapeVariant::Default => "default",
            ShapeVariant::Filled => "filled",
            ShapeVariant::Proportions => "proportions",
        }
    }
}

impl fmt::Display for ShapeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        ShapeVariant::ALL.into_iter().find(|v| v.name() == s)
            .ok_or_else(|| Error::VariantNotRecognized {
                family: Family::Shape,
                variant: s.to_string(),
                valid: Family::Shape.variant_names(),
            })
    }
}

/// A variant together with its family.  This is the key under which
/// the registry stores its tables (the palette name being the last
/// component).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Color(ColorVariant),
    Shape(ShapeVariant),
}

impl Variant {
    pub fn family(self) -> Family {
        match self {
            Variant::Color(_) => Family::Color,
            Variant::Shape(_) => Family::Shape,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Color(v) => v.name(),
            Variant::Shape(v) => v.name(),
        }
    }

    /// Parse `variant` as one of the variants of `family`.  Only exact
    /// names are accepted.
    pub fn parse(family: Family, variant: &str) -> Result<Variant, Error> {
        match family {
            Family::Color => variant.parse().map(Variant::Color),
            Family::Shape => variant.parse().map(Variant::Shape),
        }
    }
}

impl From<ColorVariant> for Variant {
    fn from(v: ColorVariant) -> Self { Variant::Color(v) }
}

impl From<ShapeVariant> for Variant {
    fn from(v: ShapeVariant) -> Self { Variant::Shape(v) }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} palettes of type {}", self.family(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_parse_exact_names_only() {
        assert_eq!("ordered-diverging".parse::<ColorVariant>(),
                   Ok(ColorVariant::OrderedDiverging));
        assert_eq!(Variant::parse(Family::Shape, "filled"),
                   Ok(Variant::Shape(ShapeVariant::Filled)));
        let err = "ordered".parse::<ColorVariant>().unwrap_err();
        assert_eq!(err, Error::VariantNotRecognized {
            family: Family::Color,
            variant: "ordered".to_string(),
            valid: vec!["regular", "ordered-sequential", "ordered-diverging"],
        });
        assert!(Variant::parse(Family::Shape, "regular").is_err());
    }

    #[test]
    fn family_round_trips_through_display() {
        for f in Family::ALL {
            assert_eq!(f.to_string().parse::<Family>(), Ok(f));
        }
        assert!(matches!("colour".parse::<Family>(),
                         Err(Error::FamilyNotRecognized { .. })));
    }
}
