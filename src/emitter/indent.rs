use crate::line::Line;

const INDENT: &str = "    ";

/// Prefixes instruction lines with one indentation unit. Directives,
/// label declarations and blank lines pass through untouched.
pub fn indent(lines: &[Line]) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            if line.raw.is_empty() || line.raw.starts_with('.') || line.raw.ends_with(':') {
                line.raw.clone()
            } else {
                format!("{}{}", INDENT, line.raw)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::parse_program;

    #[test]
    fn instructions_are_indented() {
        let lines = parse_program("mov rax, 1\nret");
        assert_eq!(indent(&lines), vec!["    mov rax, 1", "    ret"]);
    }

    #[test]
    fn directives_and_labels_are_not() {
        let lines = parse_program(".globl main\nmain:\nret");
        assert_eq!(indent(&lines), vec![".globl main", "main:", "    ret"]);
    }

    #[test]
    fn blank_lines_pass_through() {
        let lines = parse_program("ret\n\nret");
        assert_eq!(indent(&lines), vec!["    ret", "", "    ret"]);
    }
}
