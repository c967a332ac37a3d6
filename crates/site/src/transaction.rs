//! Human-readable notes on transactions

use portalkit_core::limits::MAX_TRANSACTION_NOTE_BYTES;
use portalkit_core::Transaction;
use tracing::warn;

/// Append `note` to the transaction's description
///
/// Notes that would push the description to `MAX_TRANSACTION_NOTE_BYTES` or
/// beyond are dropped with a warning. Returns whether the note was added.
pub fn transaction_note<T: Transaction + ?Sized>(txn: &mut T, note: &str) -> bool {
    let total = txn.description().len() + note.len();
    if total >= MAX_TRANSACTION_NOTE_BYTES {
        warn!(
            note_bytes = note.len(),
            description_bytes = txn.description().len(),
            "Transaction note too large, omitting it"
        );
        return false;
    }
    txn.note(note);
    true
}

/// In-memory transaction description
///
/// Notes are trimmed and separated by a blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionRecord {
    description: String,
}

impl TransactionRecord {
    /// Empty record
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transaction for TransactionRecord {
    fn description(&self) -> &str {
        &self.description
    }

    fn note(&mut self, text: &str) {
        let text = text.trim();
        if !self.description.is_empty() {
            self.description.push_str("\n\n");
        }
        self.description.push_str(text);
    }
}
