pub mod explain;
pub mod question;
pub mod segment;

use rayon::prelude::*;

use crate::store::QuestionRecord;

/// Pipeline outcome: emitted records plus the count of blocks that passed the
/// question filter but failed the record invariants.
pub struct ExtractOutcome {
    pub records: Vec<QuestionRecord>,
    pub skipped: usize,
}

/// Two-pass pipeline: document → question blocks → records.
///
/// Blocks are independent, so they parse in parallel; the ordered collect
/// keeps document order, and ids are assigned afterwards so they stay dense
/// over emitted records no matter how many blocks were filtered or skipped.
pub fn extract(doc: &str) -> ExtractOutcome {
    let blocks = segment::split_blocks(doc);
    let total = blocks.len();

    let mut records: Vec<QuestionRecord> = blocks
        .par_iter()
        .filter_map(|b| question::parse_block(&b.text))
        .collect();

    for (i, record) in records.iter_mut().enumerate() {
        record.id = i + 1;
    }

    let skipped = total - records.len();
    ExtractOutcome { records, skipped }
}
