#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open,
    Blocked,
    /// any other map symbol, kept as-is and walkable
    Other(char),
}

impl Cell {
    pub const OPEN: char = '.';
    pub const BLOCKED: char = '#';

    pub fn from_char(c: char) -> Self {
        match c {
            Self::OPEN => Self::Open,
            Self::BLOCKED => Self::Blocked,
            other => Self::Other(other),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Open => Self::OPEN,
            Self::Blocked => Self::BLOCKED,
            Self::Other(c) => c,
        }
    }

    pub fn is_blocked(self) -> bool {
        self == Self::Blocked
    }
}
