use crate::line::Line;

/// Drops a `jmp LABEL` whose target label is declared on the very next
/// line, since falling through is equivalent. Single pass with one-line
/// lookahead; the last line always survives.
pub fn eliminate_dead_jumps(lines: &[Line]) -> Vec<Line> {
    let mut output = vec![];

    for (i, line) in lines.iter().enumerate() {
        if line.mnemonic() == Some("jmp") {
            if let Some(next) = lines.get(i + 1) {
                if next.raw.trim() == format!("{}:", line.operand()) {
                    continue;
                }
            }
        }
        output.push(line.clone());
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::parse_program;

    fn eliminate(input: &[&str]) -> Vec<String> {
        eliminate_dead_jumps(&parse_program(&input.join("\n")))
            .iter()
            .map(|line| line.raw.clone())
            .collect()
    }

    #[test]
    fn jump_to_next_label_is_dropped() {
        assert_eq!(eliminate(&["jmp L1", "L1:", "ret"]), vec!["L1:", "ret"]);
    }

    #[test]
    fn jump_to_other_label_is_kept() {
        assert_eq!(
            eliminate(&["jmp L2", "L3:", "ret"]),
            vec!["jmp L2", "L3:", "ret"]
        );
    }

    #[test]
    fn trailing_jump_is_kept() {
        assert_eq!(eliminate(&["L1:", "jmp L1"]), vec!["L1:", "jmp L1"]);
    }

    #[test]
    fn only_the_jump_before_its_label_is_dropped() {
        assert_eq!(
            eliminate(&["jmp L0", "jmp L1", "L1:", "jmp L1"]),
            vec!["jmp L0", "L1:", "jmp L1"]
        );
    }
}
