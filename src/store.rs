use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

/// One selectable answer.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerOption {
    pub text: String,
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,
}

/// Normalized output record. Field declaration order is the field order the
/// viewer expects in the JSON file.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionRecord {
    pub id: usize,
    pub text: String,
    pub image: String,
    pub options: Vec<AnswerOption>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
    pub explanation: String,
}

/// Read the whole source document up front. A missing file aborts the run
/// before any parsing starts, so no stale output is left behind.
pub fn load_document(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!("input document not found: {}", path.display());
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Serialize records as indented JSON, replacing any previous output file.
pub fn save_records(path: &Path, records: &[QuestionRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}
