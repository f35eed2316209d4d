use std::fmt;

/// Chair types recognised in a plan, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chair {
    /// `W`
    Wooden,
    /// `P`
    Plastic,
    /// `S`
    Sofa,
    /// `C`
    China,
}

impl Chair {
    pub const ALL: [Chair; 4] = [Chair::Wooden, Chair::Plastic, Chair::Sofa, Chair::China];

    /// Parses a chair code letter.
    #[must_use]
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'W' => Some(Self::Wooden),
            'P' => Some(Self::Plastic),
            'S' => Some(Self::Sofa),
            'C' => Some(Self::China),
            _ => None,
        }
    }

    /// The letter used for this chair in plans and reports.
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Self::Wooden => 'W',
            Self::Plastic => 'P',
            Self::Sofa => 'S',
            Self::China => 'C',
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Chair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Per-type chair tally. Every type is always present, starting at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FurnitureCounts {
    counts: [u32; 4],
}

impl FurnitureCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, chair: Chair) {
        self.counts[chair.index()] += 1;
    }

    #[must_use]
    pub fn get(&self, chair: Chair) -> u32 {
        self.counts[chair.index()]
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Iterates `(chair, count)` pairs in `W, P, S, C` order.
    pub fn iter(&self) -> impl Iterator<Item = (Chair, u32)> + '_ {
        Chair::ALL.iter().map(move |&chair| (chair, self.get(chair)))
    }
}

impl fmt::Display for FurnitureCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (chair, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{chair}: {count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for chair in Chair::ALL {
            assert_eq!(Chair::from_code(chair.code()), Some(chair));
        }
        assert_eq!(Chair::from_code('X'), None);
    }

    #[test]
    fn counts_start_at_zero_and_accumulate() {
        let mut counts = FurnitureCounts::new();
        assert_eq!(counts.total(), 0);
        counts.add(Chair::Plastic);
        counts.add(Chair::Plastic);
        counts.add(Chair::China);
        assert_eq!(counts.get(Chair::Plastic), 2);
        assert_eq!(counts.get(Chair::China), 1);
        assert_eq!(counts.get(Chair::Wooden), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn display_lists_every_type_in_order() {
        let mut counts = FurnitureCounts::new();
        counts.add(Chair::Sofa);
        assert_eq!(counts.to_string(), "W: 0, P: 0, S: 1, C: 0");
    }
}
