use std::sync::LazyLock;

use regex::Regex;

use super::explain;
use crate::store::{AnswerOption, QuestionRecord};

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[Question[^\]\n]*\]\(([^)\n]*)\)").unwrap());

const MARKER_EMPTY: &str = "- [ ] ";
const MARKER_FILLED: &str = "- [x] ";
/// Bold back-to-top arrow that closes a question's option list in the source.
const OPTION_TERMINATOR: &str = "**[⬆";

/// Parse one block into a record. Returns None when the block violates the
/// output invariants (empty title or no options) — no partial record is ever
/// emitted. The id is assigned later by the pipeline, once retention order
/// across the whole document is known.
pub fn parse_block(text: &str) -> Option<QuestionRecord> {
    let title = text.lines().next().unwrap_or("").trim().to_string();

    let image = IMAGE_RE
        .captures(text)
        .map(|c| c[1].to_string())
        .unwrap_or_default();

    let options = parse_options(text);

    if title.is_empty() || options.is_empty() {
        return None;
    }

    // The source format implies at most one checked option per question; on
    // malformed multi-correct input the last checked option wins.
    let correct_answer = options
        .iter()
        .filter(|o| o.is_correct)
        .last()
        .map(|o| o.text.clone())
        .unwrap_or_default();

    let explanation = explain::for_title(&title);

    Some(QuestionRecord {
        id: 0,
        text: title,
        image,
        options,
        correct_answer,
        explanation,
    })
}

/// Scan for checkbox lines. An option's text runs until the next checkbox
/// line, the terminator sequence, or block end, with physical line breaks
/// collapsed to single spaces.
fn parse_options(text: &str) -> Vec<AnswerOption> {
    let mut options = Vec::new();
    let mut current: Option<(bool, Vec<String>)> = None;

    for line in text.lines() {
        let trimmed = line.trim();
        let is_correct = if trimmed.starts_with(MARKER_FILLED) {
            Some(true)
        } else if trimmed.starts_with(MARKER_EMPTY) {
            Some(false)
        } else {
            None
        };

        if let Some(is_correct) = is_correct {
            finish_option(&mut options, current.take());
            let rest = &trimmed[MARKER_EMPTY.len()..];
            if let Some(cut) = rest.find(OPTION_TERMINATOR) {
                finish_option(&mut options, Some((is_correct, vec![rest[..cut].to_string()])));
            } else {
                current = Some((is_correct, vec![rest.to_string()]));
            }
            continue;
        }

        if let Some(cut) = line.find(OPTION_TERMINATOR) {
            if let Some((_, parts)) = current.as_mut() {
                parts.push(line[..cut].to_string());
            }
            finish_option(&mut options, current.take());
        } else if let Some((_, parts)) = current.as_mut() {
            parts.push(line.to_string());
        }
    }
    finish_option(&mut options, current.take());

    options
}

/// Join an option's physical lines with single spaces; an option whose text
/// trims to nothing is dropped entirely, never kept as a placeholder.
fn finish_option(options: &mut Vec<AnswerOption>, current: Option<(bool, Vec<String>)>) {
    let Some((is_correct, parts)) = current else {
        return;
    };
    let text = parts.join(" ").trim().to_string();
    if !text.is_empty() {
        options.push(AnswerOption { text, is_correct });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_question() {
        let rec = parse_block(
            "What is the capital of France?\n\n- [x] Paris\n- [ ] Lyon\n- [ ] Marseille",
        )
        .unwrap();
        assert_eq!(rec.text, "What is the capital of France?");
        assert_eq!(rec.options.len(), 3);
        assert!(rec.options[0].is_correct);
        assert_eq!(rec.correct_answer, "Paris");
        assert_eq!(rec.image, "");
    }

    #[test]
    fn multi_correct_last_wins() {
        let rec =
            parse_block("What is the capital of France?\n\n- [x] Paris\n- [x] Lyon").unwrap();
        assert_eq!(rec.correct_answer, "Lyon");
        assert_eq!(rec.options.len(), 2);
    }

    #[test]
    fn no_correct_option_yields_empty_answer() {
        let rec = parse_block("Pick one.\n- [ ] A\n- [ ] B").unwrap();
        assert_eq!(rec.correct_answer, "");
    }

    #[test]
    fn empty_title_discards_block() {
        // Block begins immediately with options, no leading text line.
        assert!(parse_block("\n- [ ] A\n- [x] B").is_none());
        assert!(parse_block("   \n- [x] B").is_none());
    }

    #[test]
    fn no_options_discards_block() {
        assert!(parse_block("You need to review the table in the appendix.").is_none());
    }

    #[test]
    fn image_url_extracted() {
        let rec = parse_block(
            "Look at the diagram.\n\n![Question 3](https://example.com/q3.png)\n\n- [x] A",
        )
        .unwrap();
        assert_eq!(rec.image, "https://example.com/q3.png");
    }

    #[test]
    fn first_image_only() {
        let rec = parse_block(
            "Two diagrams.\n![Question 4a](https://example.com/a.png)\n![Question 4b](https://example.com/b.png)\n- [x] A",
        )
        .unwrap();
        assert_eq!(rec.image, "https://example.com/a.png");
    }

    #[test]
    fn non_question_images_ignored() {
        let rec = parse_block("Pick.\n![Logo](https://example.com/logo.png)\n- [x] A").unwrap();
        assert_eq!(rec.image, "");
    }

    #[test]
    fn multiline_option_collapsed() {
        let rec = parse_block("Pick.\n- [ ] spans\ntwo lines\n- [x] other").unwrap();
        assert_eq!(rec.options[0].text, "spans two lines");
        assert!(rec.options.iter().all(|o| !o.text.contains('\n')));
    }

    #[test]
    fn terminator_cuts_option_text() {
        let rec = parse_block("Pick.\n- [ ] A\n- [x] Lyon **[⬆ Back to Top](#toc)**").unwrap();
        assert_eq!(rec.options[1].text, "Lyon");
        assert_eq!(rec.correct_answer, "Lyon");
    }

    #[test]
    fn terminator_on_own_line() {
        let rec = parse_block("Pick.\n- [x] Lyon\n\n**[⬆ Back to Top](#toc)**\ntrailing prose")
            .unwrap();
        assert_eq!(rec.options.len(), 1);
        assert_eq!(rec.options[0].text, "Lyon");
    }

    #[test]
    fn empty_option_dropped() {
        // A checked box whose text is only the back-to-top link trims to
        // nothing and is dropped, not replaced with a placeholder.
        let rec = parse_block("Pick.\n- [x] **[⬆ Back to Top](#toc)**\n- [ ] Real").unwrap();
        assert_eq!(rec.options.len(), 1);
        assert_eq!(rec.options[0].text, "Real");
        assert_eq!(rec.correct_answer, "");
    }

    #[test]
    fn trailing_prose_absorbed_into_last_option() {
        let rec = parse_block("Pick.\n- [x] Strong\nconsistency").unwrap();
        assert_eq!(rec.options[0].text, "Strong consistency");
    }
}
