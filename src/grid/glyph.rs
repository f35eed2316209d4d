use crate::furniture::Chair;

/// Classification of a single plan character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// `+`
    Corner,
    /// `-`
    Horizontal,
    /// `|`
    Vertical,
    /// `/`
    Slash,
    /// `\`
    Backslash,
    /// `(`
    NameOpen,
    /// `)`
    NameClose,
    Chair(Chair),
    /// Floor, blanks and name text.
    Other,
}

impl Glyph {
    #[must_use]
    pub fn of(c: char) -> Self {
        match c {
            '+' => Self::Corner,
            '-' => Self::Horizontal,
            '|' => Self::Vertical,
            '/' => Self::Slash,
            '\\' => Self::Backslash,
            '(' => Self::NameOpen,
            ')' => Self::NameClose,
            _ => Chair::from_code(c).map_or(Self::Other, Self::Chair),
        }
    }

    /// Straight or diagonal wall segment.
    #[must_use]
    pub fn is_segment(self) -> bool {
        matches!(
            self,
            Self::Horizontal | Self::Vertical | Self::Slash | Self::Backslash
        )
    }

    /// Any glyph that belongs to a wall: a segment or a corner.
    #[must_use]
    pub fn is_wall(self) -> bool {
        self == Self::Corner || self.is_segment()
    }
}
