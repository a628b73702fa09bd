//! Settings file persistence.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::Settings;

const FIELDS: usize = 8;

pub fn save(path: &Path, settings: &Settings) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let special_chars_str: String = settings
        .special_chars
        .iter()
        .map(|&c| match c {
            ',' => "|,".to_string(),
            '|' => "||".to_string(),
            _ => c.to_string(),
        })
        .collect();

    let data = format!(
        "{},{},{},{},{},{},{},{}\n",
        settings.min_length,
        settings.min_upper,
        settings.min_lower,
        settings.min_number,
        settings.min_symbol,
        special_chars_str,
        settings.generator,
        settings.number_of_passwords,
    );

    file.write_all(data.as_bytes())?;
    Ok(())
}

/// Missing file keeps defaults. A malformed line is overwritten with them.
pub fn load(path: &Path, settings: &mut Settings) -> std::io::Result<()> {
    let file = match OpenOptions::new().read(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let line = line.trim_end_matches(['\n', '\r']);
    let parts = split_escaped(line, ',');

    if parts.len() != FIELDS {
        log::warn!("settings file {} is malformed, resetting", path.display());
        return save(path, settings);
    }

    settings.min_length = parts[0].parse().unwrap_or(settings.min_length);
    settings.min_upper = parts[1].parse().unwrap_or(settings.min_upper);
    settings.min_lower = parts[2].parse().unwrap_or(settings.min_lower);
    settings.min_number = parts[3].parse().unwrap_or(settings.min_number);
    settings.min_symbol = parts[4].parse().unwrap_or(settings.min_symbol);
    settings.special_chars = parts[5].chars().collect();
    settings.generator = parts[6].parse().unwrap_or(settings.generator);
    settings.number_of_passwords = parts[7].parse().unwrap_or(settings.number_of_passwords);

    Ok(())
}

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/asciipass/settings")
}

/// Split on `delimiter`, treating `|` as an escape for the next character.
fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::Generator;

    #[test]
    fn split_handles_escapes_and_empty_fields() {
        assert_eq!(split_escaped("a,,b", ','), vec!["a", "", "b"]);
        assert_eq!(split_escaped("|,|||x,y", ','), vec![",|x", "y"]);
        assert_eq!(split_escaped("", ','), vec![""]);
    }

    #[test]
    fn save_then_load_keeps_awkward_symbols() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings");

        let settings = Settings {
            min_length: 32,
            min_symbol: 4,
            special_chars: vec![',', '|', '#'],
            generator: Generator::Fast,
            number_of_passwords: 5,
            ..Default::default()
        };
        save(&path, &settings).unwrap();

        let mut loaded = Settings::default();
        load(&path, &mut loaded).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn missing_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut loaded = Settings::default();
        load(&dir.path().join("absent"), &mut loaded).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn malformed_file_is_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "74,19,false\n").unwrap();

        let mut loaded = Settings::default();
        load(&path, &mut loaded).unwrap();
        assert_eq!(loaded, Settings::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "16,1,1,1,1,,secure,1\n");
    }
}
