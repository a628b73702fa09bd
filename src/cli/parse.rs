use asciipass::Generator;
use asciipass::rand::UnknownGenerator;
use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid number for {flag}: {value}")]
    InvalidNumber { flag: String, value: String },
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
    #[error(transparent)]
    Generator(#[from] UnknownGenerator),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "--save" => flags.save = true,
            "--saved" => flags.saved = true,
            "-l" | "--length" => flags.length = Some(number(args, &mut i)?),
            "-u" | "--upper" => flags.upper = Some(number(args, &mut i)?),
            "-w" | "--lower" => flags.lower = Some(number(args, &mut i)?),
            "-n" | "--number" => flags.number = Some(number(args, &mut i)?),
            "-s" | "--symbol" => flags.symbol = Some(number(args, &mut i)?),
            "-c" | "--count" => flags.count = Some(number(args, &mut i)?),
            "--special" => flags.special = Some(value(args, &mut i)?.to_string()),
            "-g" | "--generator" => flags.generator = Some(value(args, &mut i)?.parse::<Generator>()?),
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

// Values are taken verbatim, so "-l -1" reaches policy validation.
fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number<T: std::str::FromStr>(args: &[String], i: &mut usize) -> Result<T, ParseError> {
    let flag = args[*i].clone();
    let raw = value(args, i)?;
    raw.trim().parse().map_err(|_| ParseError::InvalidNumber {
        flag,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        std::iter::once("asciipass")
            .chain(s.split_whitespace())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_policy_flags() {
        let flags = parse(&args("-l 20 -u 2 --lower 3 -n 4 -s 5 --special #$ -g m -c 3")).unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.upper, Some(2));
        assert_eq!(flags.lower, Some(3));
        assert_eq!(flags.number, Some(4));
        assert_eq!(flags.symbol, Some(5));
        assert_eq!(flags.special.as_deref(), Some("#$"));
        assert_eq!(flags.generator, Some(Generator::Fast));
        assert_eq!(flags.count, Some(3));
    }

    #[test]
    fn negative_counts_are_kept_for_validation() {
        let flags = parse(&args("-l -1 -s -2")).unwrap();
        assert_eq!(flags.length, Some(-1));
        assert_eq!(flags.symbol, Some(-2));
    }

    #[test]
    fn empty_special_is_a_value() {
        let mut argv = args("--special");
        argv.push(String::new());
        assert_eq!(parse(&argv).unwrap().special.as_deref(), Some(""));
    }

    #[test]
    fn switches() {
        let flags = parse(&args("-q -b --save --saved -h -v")).unwrap();
        assert!(flags.quiet && flags.clipboard && flags.save && flags.saved);
        assert!(flags.help && flags.version);
    }

    #[test]
    fn errors() {
        assert!(matches!(parse(&args("--bogus")), Err(ParseError::UnknownArg(_))));
        assert!(matches!(parse(&args("-l")), Err(ParseError::MissingValue(_))));
        assert!(matches!(
            parse(&args("-l ten")),
            Err(ParseError::InvalidNumber { .. })
        ));
        assert!(matches!(parse(&args("-c -1")), Err(ParseError::InvalidNumber { .. })));
        assert!(matches!(parse(&args("-g z")), Err(ParseError::Generator(_))));
    }
}
