//! CLI context - bundles settings, flags, and clipboard state.

use std::io::Write;

use asciipass::rand::source_name;
use asciipass::settings::Settings;
use asciipass::{Generator, generate_batch};
use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::help::print_help;
use super::{CliFlags, prompts, quiet};

/// Why a run stopped before printing passwords.
pub enum Stop {
    /// Early exit, not an error.
    Done,
    Failed(asciipass::Error),
}

impl From<asciipass::Error> for Stop {
    fn from(err: asciipass::Error) -> Self {
        Stop::Failed(err)
    }
}

pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Parse arguments and resolve settings. Returns the message on failure.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;
        quiet::set(flags.quiet);

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), Stop> {
        self.handle_info_flags()?;
        self.apply_flags();
        self.handle_clipboard()?;
        self.generate_output()?;
        self.handle_save();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Stop> {
        if self.flags.help {
            print_help();
            return Err(Stop::Done);
        }
        if self.flags.version {
            println!("asciipass {}", env!("CARGO_PKG_VERSION"));
            return Err(Stop::Done);
        }
        Ok(())
    }

    fn apply_flags(&mut self) {
        let s = &mut self.settings;
        let f = &self.flags;

        if let Some(n) = f.length {
            s.min_length = n;
        }
        if let Some(n) = f.upper {
            s.min_upper = n;
        }
        if let Some(n) = f.lower {
            s.min_lower = n;
        }
        if let Some(n) = f.number {
            s.min_number = n;
        }
        if let Some(n) = f.symbol {
            s.min_symbol = n;
        }
        if let Some(ref chars) = f.special {
            s.special_chars = chars.chars().collect();
        }
        if let Some(generator) = f.generator {
            s.generator = generator;
        }
        if let Some(count) = f.count {
            s.number_of_passwords = count;
        }
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save_to_file() {
            Ok(()) => prompts::settings_saved("~/.config/asciipass/settings"),
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }

    fn handle_clipboard(&mut self) -> Result<(), Stop> {
        if !self.flags.clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(c) => self.clipboard = Some(c),
            Err(_) => {
                if !prompts::clipboard_fallback_prompt() {
                    return Err(Stop::Done);
                }
            }
        }
        Ok(())
    }

    /// Generate passwords and print them or copy them to the clipboard.
    pub fn generate_output(&mut self) -> Result<(), Stop> {
        let policy = self.settings.policy();
        let count = self.settings.number_of_passwords;

        if self.settings.generator == Generator::Fast {
            prompts::fast_generator_notice();
        }
        log::debug!(
            "generating {} password(s) with the {} generator ({})",
            count,
            self.settings.generator,
            source_name(self.settings.generator)
        );

        let mut passwords = generate_batch(&policy, self.settings.generator, count)?;
        let mut joined = passwords.join("\n");
        passwords.iter_mut().for_each(Zeroize::zeroize);

        if let Some(ctx) = self.clipboard.as_mut() {
            match ctx.set_contents(joined.clone()) {
                Ok(()) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied(count);
                }
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
        } else if !joined.is_empty() {
            joined.push('\n');
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let _ = out.write_all(joined.as_bytes());
            let _ = out.flush();
        }

        joined.zeroize();
        Ok(())
    }
}
