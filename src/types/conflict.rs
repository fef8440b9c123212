/// How `insert` treats a unique-key violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Surface the error to the caller.
    #[default]
    Fail,
    /// Overwrite the listed columns of the existing row (`ON DUPLICATE KEY UPDATE`).
    Update,
    /// Leave the existing row untouched and report success.
    Ignore,
}

/// What the server did with an `insert` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The statement ran and was committed.
    ///
    /// For an upsert MySQL reports 1 affected row for a fresh insert, 2 when an
    /// existing row changed and 0 when it already held the same values.
    Written {
        affected_rows: u64,
        last_insert_id: Option<u64>,
    },
    /// The row collided with an existing key and `ConflictPolicy::Ignore` was set.
    Ignored,
}

impl InsertOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, InsertOutcome::Ignored)
    }
}
