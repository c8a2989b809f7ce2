use regex::Regex;
use std::sync::OnceLock;

static STEP_DELIMITER: OnceLock<Regex> = OnceLock::new();

fn step_delimiter() -> &'static Regex {
    STEP_DELIMITER.get_or_init(|| {
        // A line that starts with "12. " or "- ".
        Regex::new(r"\n[0-9]+\. |\n- ").expect("step delimiter pattern is valid")
    })
}

/// Splits an answer into trimmed, non-empty steps.
pub fn segment(text: &str) -> Vec<String> {
    step_delimiter()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// How an answer is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerLayout<'a> {
    Steps(Vec<String>),
    Plain(&'a str),
}

impl<'a> AnswerLayout<'a> {
    pub fn of(text: &'a str) -> Self {
        let steps = segment(text);
        if steps.len() > 1 {
            AnswerLayout::Steps(steps)
        } else {
            AnswerLayout::Plain(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_lines_become_steps() {
        assert_eq!(
            AnswerLayout::of("Step 1. Do X\n2. Do Y"),
            AnswerLayout::Steps(vec!["Step 1. Do X".to_string(), "Do Y".to_string()])
        );
    }

    #[test]
    fn bullets_and_numbers_mix() {
        let text = "To form a contract:\n1. Offer\n- Acceptance\n10. Consideration  ";
        assert_eq!(
            segment(text),
            vec!["To form a contract:", "Offer", "Acceptance", "Consideration"]
        );
    }

    #[test]
    fn plain_answer_stays_plain() {
        let text = "Contracts require offer and acceptance.";
        assert_eq!(AnswerLayout::of(text), AnswerLayout::Plain(text));
    }

    #[test]
    fn delimiter_needs_a_leading_newline() {
        let text = "1. Offer 2. Acceptance - Consideration";
        assert_eq!(AnswerLayout::of(text), AnswerLayout::Plain(text));
    }

    #[test]
    fn empty_fragments_do_not_count() {
        // Splits into ["", ""]; nothing left to list.
        assert_eq!(AnswerLayout::of("\n- "), AnswerLayout::Plain("\n- "));
        assert_eq!(
            AnswerLayout::of("\n1. Only step"),
            AnswerLayout::Plain("\n1. Only step")
        );
    }

    #[test]
    fn non_ascii_digits_are_not_numbering() {
        let text = "Intro\n١. Arabic-indic numeral";
        assert_eq!(AnswerLayout::of(text), AnswerLayout::Plain(text));
    }
}
