//! Pattern options, bit-compatible with .NET `RegexOptions`.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RegexOptions(u16);

impl RegexOptions {
    pub const NONE: Self = Self(0);
    pub const IGNORE_CASE: Self = Self(0x0001);
    pub const MULTILINE: Self = Self(0x0002);
    pub const EXPLICIT_CAPTURE: Self = Self(0x0004);
    pub const SINGLELINE: Self = Self(0x0010);
    pub const IGNORE_PATTERN_WHITESPACE: Self = Self(0x0020);
    pub const RIGHT_TO_LEFT: Self = Self(0x0040);
    pub const ECMA_SCRIPT: Self = Self(0x0100);

    const NAMED: [(Self, &'static str); 7] = [
        (Self::IGNORE_CASE, "IgnoreCase"),
        (Self::MULTILINE, "Multiline"),
        (Self::EXPLICIT_CAPTURE, "ExplicitCapture"),
        (Self::SINGLELINE, "Singleline"),
        (Self::IGNORE_PATTERN_WHITESPACE, "IgnorePatternWhitespace"),
        (Self::RIGHT_TO_LEFT, "RightToLeft"),
        (Self::ECMA_SCRIPT, "ECMAScript"),
    ];

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Option letter usable inside `(?imnsx-imnsx)`, case-insensitive.
    pub fn from_inline_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'i' => Some(Self::IGNORE_CASE),
            'm' => Some(Self::MULTILINE),
            'n' => Some(Self::EXPLICIT_CAPTURE),
            's' => Some(Self::SINGLELINE),
            'x' => Some(Self::IGNORE_PATTERN_WHITESPACE),
            _ => None,
        }
    }

    /// Applies an inline toggle run such as `i-sx+m`.
    ///
    /// Letters after `-` clear, letters after `+` (or with no sign yet) set.
    /// Characters that are not option letters are ignored.
    pub fn apply_toggles(self, toggles: &str) -> Self {
        let mut result = self;
        let mut on = true;
        for ch in toggles.chars() {
            match ch {
                '-' => on = false,
                '+' => on = true,
                _ => match Self::from_inline_char(ch) {
                    Some(flag) if on => result.insert(flag),
                    Some(flag) => result.remove(flag),
                    None => {}
                },
            }
        }
        result
    }
}

impl BitOr for RegexOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for RegexOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for RegexOptions {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for RegexOptions {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl fmt::Debug for RegexOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }
        let mut first = true;
        for (flag, name) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseOptionsError {
    #[error("unknown option letter `{0}` (expected one of i, m, n, s, x, r, e)")]
    UnknownOption(char),
}

impl FromStr for RegexOptions {
    type Err = ParseOptionsError;

    /// Parses a letter string such as `"ix"`. `r` is right-to-left, `e` is ECMAScript.
    fn from_str(letters: &str) -> Result<Self, Self::Err> {
        let mut options = Self::NONE;
        for ch in letters.chars() {
            let flag = match ch.to_ascii_lowercase() {
                'r' => Self::RIGHT_TO_LEFT,
                'e' => Self::ECMA_SCRIPT,
                _ => Self::from_inline_char(ch).ok_or(ParseOptionsError::UnknownOption(ch))?,
            };
            options.insert(flag);
        }
        Ok(options)
    }
}
