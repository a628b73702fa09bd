//! Character classes for password generation.

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[{]}|;:',\\<.>/?\"";

/// A character class, in the fixed order passwords are assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Number,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Number,
        CharClass::Symbol,
    ];

    /// Built-in members of this class. Symbols may be overridden by a policy.
    pub fn default_chars(self) -> &'static str {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Number => NUMBERS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Upper => "upper",
            CharClass::Lower => "lower",
            CharClass::Number => "number",
            CharClass::Symbol => "symbol",
        }
    }
}

/// Classify `c` against the given symbol set and the letter/digit classes.
/// Membership in `symbols` wins, so a custom set such as `ABC` counts as
/// symbols. Returns `None` for characters outside every class.
pub fn classify(c: char, symbols: &[char]) -> Option<CharClass> {
    if symbols.contains(&c) {
        Some(CharClass::Symbol)
    } else if c.is_ascii_uppercase() {
        Some(CharClass::Upper)
    } else if c.is_ascii_lowercase() {
        Some(CharClass::Lower)
    } else if c.is_ascii_digit() {
        Some(CharClass::Number)
    } else {
        None
    }
}

/// Per-class character counts of a password.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Composition {
    pub upper: usize,
    pub lower: usize,
    pub number: usize,
    pub symbol: usize,
    pub other: usize,
}

impl Composition {
    pub fn of(password: &str, symbols: &[char]) -> Self {
        let mut counts = Composition::default();
        for c in password.chars() {
            match classify(c, symbols) {
                Some(CharClass::Upper) => counts.upper += 1,
                Some(CharClass::Lower) => counts.lower += 1,
                Some(CharClass::Number) => counts.number += 1,
                Some(CharClass::Symbol) => counts.symbol += 1,
                None => counts.other += 1,
            }
        }
        counts
    }

    pub fn count(&self, class: CharClass) -> usize {
        match class {
            CharClass::Upper => self.upper,
            CharClass::Lower => self.lower,
            CharClass::Number => self.number,
            CharClass::Symbol => self.symbol,
        }
    }
}
