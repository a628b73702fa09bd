use asciipass::Generator;

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub save: bool,
    pub saved: bool,
    pub length: Option<i64>,
    pub upper: Option<i64>,
    pub lower: Option<i64>,
    pub number: Option<i64>,
    pub symbol: Option<i64>,
    pub special: Option<String>,
    pub generator: Option<Generator>,
    pub count: Option<usize>,
}
