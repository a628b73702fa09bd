use asciipass::SYMBOLS;

pub fn print_help() {
    println!(
        "\
asciipass {version}
Generate passwords with minimum counts of upper case, lower case, numeric
and symbol characters.

USAGE:
    asciipass [OPTIONS]

POLICY:
    -l, --length <N>       Minimum password length (default: 16)
    -u, --upper <N>        Minimum upper case letters (default: 1)
    -w, --lower <N>        Minimum lower case letters (default: 1)
    -n, --number <N>       Minimum digits (default: 1)
    -s, --symbol <N>       Minimum symbols (default: 1)
        --special <CHARS>  Allowed symbols; empty for the default set
                           {symbols}

    A class with a minimum of 0 never appears in the password.

GENERATOR:
    -g, --generator <G>    secure|c (OS CSPRNG, default) or fast|m (seeded PRNG)

OUTPUT:
    -c, --count <N>        Passwords to generate (default: 1)
    -b, --board            Copy to clipboard instead of printing
    -q, --quiet            Suppress warnings and confirmations

SETTINGS:
        --save             Save the effective options as defaults
        --saved            Start from saved defaults

    -h, --help             Display this help message
    -v, --version          Display version

    RUST_LOG=debug shows generation steps on stderr.

EXAMPLES:
    asciipass                       16 chars, one of each class
    asciipass -l 24 -s 0            alphanumeric only
    asciipass -l 10 -s 5 -u 0 -w 0 -n 0 --special ABC
    asciipass -g fast -c 5          five non-secret passwords",
        version = env!("CARGO_PKG_VERSION"),
        symbols = SYMBOLS,
    );
}
