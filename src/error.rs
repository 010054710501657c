use thiserror::Error;

use crate::palettes::ty::{Family, Variant};

/// Errors raised when resolving or applying a palette.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The palette name is not present in the requested table.  `valid`
    /// holds every name of that table, in catalog order.
    #[error("`palette` must be one of {}; got “{name}” for {variant}.",
            .valid.join(", "))]
    NameNotFound {
        variant: Variant,
        name: String,
        valid: Vec<&'static str>,
    },

    #[error("this palette can handle a maximum of {max_n} values. \
             You have supplied {n}.")]
    InsufficientPaletteCapacity { max_n: usize, n: usize },

    #[error("`type` must be one of {} for the {family} family; got “{variant}”.",
            .valid.join(", "))]
    VariantNotRecognized {
        family: Family,
        variant: String,
        valid: Vec<&'static str>,
    },

    #[error("`family` must be one of color, shape; got “{family}”.")]
    FamilyNotRecognized { family: String },

    #[error("a gradient needs at least one color")]
    NoColors,

    #[error("invalid gradient positions: {0}")]
    InvalidPositions(String),

    #[error("not a color “{0}”")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, Error>;
