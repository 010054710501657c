//! Point markers used by the shape palettes.

use std::fmt;

/// A marker style for point geoms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    Circle,
    Square,
    Plus,
    Cross,
    Diamond,
    TriangleUp,
    TriangleDown,
    Asterisk,
    Star,
    Hexagon,
    FilledCircle,
    FilledSquare,
    FilledDiamond,
    FilledTriangleUp,
    FilledTriangleDown,
    FilledTriangleLeft,
    FilledTriangleRight,
    FilledStar,
    CircleQuarter,
    CircleHalf,
    CircleThreeQuarters,
}

impl Marker {
    /// Unicode glyph drawing the marker.
    pub fn glyph(self) -> char {
        use Marker::*;
        match self {
            Circle => '○',
            Square => '□',
            Plus => '+',
            Cross => '×',
            Diamond => '◇',
            TriangleUp => '△',
            TriangleDown => '▽',
            Asterisk => '✳',
            Star => '☆',
            Hexagon => '⬡',
            FilledCircle => '●',
            FilledSquare => '■',
            FilledDiamond => '◆',
            FilledTriangleUp => '▲',
            FilledTriangleDown => '▼',
            FilledTriangleLeft => '◀',
            FilledTriangleRight => '▶',
            FilledStar => '★',
            CircleQuarter => '◔',
            CircleHalf => '◑',
            CircleThreeQuarters => '◕',
        }
    }

    /// The conventional plotting-symbol code (`pch`) of the marker,
    /// if it has one.
    pub fn pch(self) -> Option<u8> {
        use Marker::*;
        match self {
            Square => Some(0),
            Circle => Some(1),
            TriangleUp => Some(2),
            Plus => Some(3),
            Cross => Some(4),
            Diamond => Some(5),
            TriangleDown => Some(6),
            Asterisk => Some(8),
            FilledSquare => Some(15),
            FilledCircle => Some(16),
            FilledTriangleUp => Some(17),
            FilledDiamond => Some(18),
            FilledTriangleDown => Some(25),
            Star | Hexagon | FilledTriangleLeft | FilledTriangleRight
                | FilledStar | CircleQuarter | CircleHalf
                | CircleThreeQuarters => None,
        }
    }

    /// Whether the marker has a solid interior.
    pub fn is_filled(self) -> bool {
        use Marker::*;
        matches!(self, FilledCircle | FilledSquare | FilledDiamond
                 | FilledTriangleUp | FilledTriangleDown | FilledTriangleLeft
                 | FilledTriangleRight | FilledStar)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
