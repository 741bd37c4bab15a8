/// Level-3 heading marker that separates one question block from the next.
const BOUNDARY: &str = "### ";

/// Phrases that open a scenario-style exam question, checked against the
/// lower-cased block text. The exact phrase set decides which blocks survive,
/// so changing it silently changes the output.
const QUESTION_INDICATORS: &[&str] = &[
    "you are",
    "you develop",
    "you have",
    "you need",
    "a company",
    "contoso",
    "fourth coffee",
    "determine",
];

/// One candidate question: the text from a `### ` heading (marker excluded,
/// heading remainder as the first line) down to the next heading or end of
/// document.
#[derive(Debug, Clone)]
pub struct QuestionBlock {
    pub text: String,
}

/// Split the document on `### ` lines and keep only blocks that read like
/// questions. Prose before the first heading never forms a block, and a
/// document with no headings yields no blocks at all.
pub fn split_blocks(doc: &str) -> Vec<QuestionBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<Vec<&str>> = None;

    for line in doc.lines() {
        if let Some(rest) = line.strip_prefix(BOUNDARY) {
            if let Some(lines) = current.take() {
                push_block(&mut blocks, &lines);
            }
            current = Some(vec![rest]);
        } else if let Some(lines) = current.as_mut() {
            lines.push(line);
        }
    }
    if let Some(lines) = current.take() {
        push_block(&mut blocks, &lines);
    }

    blocks
}

fn push_block(blocks: &mut Vec<QuestionBlock>, lines: &[&str]) {
    let text = lines.join("\n");
    if looks_like_question(&text) {
        blocks.push(QuestionBlock { text });
    }
}

/// Lexical retention filter. Section headers ("Table of Contents",
/// "Additional Resources") share the `### ` marker but never phrase like a
/// question; a genuine question that avoids every indicator is silently lost,
/// which is the accepted precision/recall trade-off.
fn looks_like_question(text: &str) -> bool {
    let lower = text.to_lowercase();
    QUESTION_INDICATORS.iter().any(|kw| lower.contains(kw))
}
