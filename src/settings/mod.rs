//! Generation settings used by the command line.

mod file;

use std::path::Path;

use crate::pass::Policy;
use crate::rand::Generator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub min_length: i64,
    pub min_upper: i64,
    pub min_lower: i64,
    pub min_number: i64,
    pub min_symbol: i64,
    /// Empty means the built-in symbol set.
    pub special_chars: Vec<char>,
    pub generator: Generator,
    pub number_of_passwords: usize,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(&file::default_path())
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        self.save_to(&file::default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(path, &mut settings)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(path, self)
    }

    pub fn policy(&self) -> Policy {
        Policy {
            min_length: self.min_length,
            min_upper: self.min_upper,
            min_lower: self.min_lower,
            min_number: self.min_number,
            min_symbol: self.min_symbol,
            allowed_symbols: (!self.special_chars.is_empty()).then(|| self.special_chars.clone()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_length: 16,
            min_upper: 1,
            min_lower: 1,
            min_number: 1,
            min_symbol: 1,
            special_chars: Vec::new(),
            generator: Generator::Secure,
            number_of_passwords: 1,
        }
    }
}
