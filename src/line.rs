/// A single assembly line: the raw text plus its whitespace tokenization.
/// The first token is the mnemonic, the rest are operand tokens. Token
/// text is kept verbatim so operands can be reconstructed exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub raw: String,
    pub parsed: Vec<String>,
}

impl Line {
    pub fn new(raw: &str) -> Line {
        Line {
            raw: raw.to_string(),
            parsed: raw.split_whitespace().map(|tok| tok.to_string()).collect(),
        }
    }

    pub fn mnemonic(&self) -> Option<&str> {
        self.parsed.first().map(String::as_str)
    }

    pub fn is_push(&self) -> bool {
        self.mnemonic() == Some("push")
    }

    pub fn is_pop(&self) -> bool {
        self.mnemonic() == Some("pop")
    }

    /// Operand tokens joined back into a single string.
    pub fn operand(&self) -> String {
        self.parsed[1..].join(" ")
    }

    pub fn operand_tokens(&self) -> &[String] {
        &self.parsed[1..]
    }
}

pub fn parse_program(src: &str) -> Vec<Line> {
    src.lines().map(|line| Line::new(line.trim())).collect()
}
