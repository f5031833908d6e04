use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LINE_COMMENT_RE: Regex = Regex::new(r"//.*\n").unwrap();
    static ref BLOCK_COMMENT_RE: Regex = Regex::new(r"(?s)/\*.*\*/").unwrap();
    static ref BLANK_RUN_RE: Regex = Regex::new(r"\n\s*\n").unwrap();
}

/// Removes `//` line comments and `/* */` block comments (greedy across
/// newlines), then collapses the resulting blank-line runs.
pub fn strip_comments(src: &str) -> String {
    let src = LINE_COMMENT_RE.replace_all(src, "\n");
    let src = BLOCK_COMMENT_RE.replace_all(&src, "");
    BLANK_RUN_RE.replace_all(&src, "\n").into_owned()
}
