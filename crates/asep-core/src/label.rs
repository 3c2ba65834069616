//! Column labels and hop directions.

use std::fmt;

/// Raw label stored in a track column.
///
/// Values in `[0, n)` are type-1 particles, values in `[n, 2n)` are type-2
/// particles whose lane affiliation is `value - n`.
pub type RawLabel = u32;

/// Decoded meaning of a [`RawLabel`] for a given lane count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    /// The unique type-1 particle of `lane`.
    Type1 {
        /// Lane the particle belongs to.
        lane: usize,
    },
    /// A type-2 particle affiliated with `lane`.
    Type2 {
        /// Lane affiliation.
        lane: usize,
    },
}

impl Label {
    /// Decode a raw label. Returns `None` for values `>= 2 * lanes`.
    #[inline]
    pub fn decode(raw: RawLabel, lanes: usize) -> Option<Self> {
        let raw = raw as usize;
        if raw < lanes {
            Some(Self::Type1 { lane: raw })
        } else if raw < 2 * lanes {
            Some(Self::Type2 { lane: raw - lanes })
        } else {
            None
        }
    }

    /// Encode back into a raw label for a track with `lanes` lanes.
    #[inline]
    pub fn encode(self, lanes: usize) -> RawLabel {
        match self {
            Self::Type1 { lane } => lane as RawLabel,
            Self::Type2 { lane } => (lane + lanes) as RawLabel,
        }
    }

    /// Lane index (type-1) or lane affiliation (type-2).
    #[inline]
    pub fn lane(self) -> usize {
        match self {
            Self::Type1 { lane } | Self::Type2 { lane } => lane,
        }
    }

    /// Whether this is a type-1 particle.
    #[inline]
    pub fn is_type1(self) -> bool {
        matches!(self, Self::Type1 { .. })
    }
}

/// Direction of an elementary hop along the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards increasing column index (`+1`).
    Forward,
    /// Towards decreasing column index (`-1`).
    Backward,
}

impl Direction {
    /// Column offset of one hop: `+1` or `-1`.
    #[inline]
    pub fn sign(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// The opposite direction.
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "+1"),
            Self::Backward => write!(f, "-1"),
        }
    }
}
