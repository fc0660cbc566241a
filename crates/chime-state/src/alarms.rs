//! Alarm table with snapshot-replacement semantics
//!
//! The sync protocol only ever ships the full alarm list, so the table
//! is replaced wholesale on every alarm-sync: last-writer-wins. Bad
//! entries are dropped one by one; a single malformed entry never
//! aborts the batch.

use chime_core::{Alarm, ChimeError};

/// Result of one replace-all batch
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplaceReport {
    /// Entries accepted into the table
    pub kept: usize,
    /// Rejected entries, with the reason each was dropped
    pub dropped: Vec<ChimeError>,
}

/// The current set of alarms
#[derive(Debug, Default)]
pub struct AlarmTable {
    alarms: Vec<Alarm>,
}

impl AlarmTable {
    pub fn new() -> Self {
        AlarmTable::default()
    }

    /// Replace the whole table from a batch of (time, zone) entries
    ///
    /// Each entry is parsed and range-checked; rejected entries are
    /// reported in the result and the rest are kept in order. The
    /// operation itself always succeeds at the table level.
    pub fn replace_all<'a, I>(&mut self, entries: I) -> ReplaceReport
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut report = ReplaceReport::default();
        let mut next = Vec::new();

        for (time, zone) in entries {
            match Alarm::parse(time, zone) {
                Ok(alarm) => {
                    next.push(alarm);
                    report.kept += 1;
                }
                Err(err) => {
                    tracing::warn!(%err, "dropping malformed alarm entry");
                    report.dropped.push(err);
                }
            }
        }

        self.alarms = next;
        report
    }

    /// Read-only snapshot for the evaluator
    #[inline]
    pub fn alarms(&self) -> &[Alarm] {
        &self.alarms
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.alarms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alarms.is_empty()
    }
}
