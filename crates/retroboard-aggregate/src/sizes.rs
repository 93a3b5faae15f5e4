use std::collections::HashMap;

use retroboard_core::{Commit, DataError, Summary, SummaryId};

/// Commit counts binned by total changed-line count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitSizes {
    /// Commits of 1 to 100 changed lines.
    pub up_to_100: u64,
    /// Commits of 101 to 500 changed lines.
    pub up_to_500: u64,
    /// Commits of 501 to 1000 changed lines.
    pub up_to_1000: u64,
    /// Commits of 1001+ changed lines.
    pub more_than_1000: u64,
}

impl CommitSizes {
    /// Count a commit into the bucket matching its size: `added + removed`
    /// summed over its summaries, resolved through the summary map.
    ///
    /// A summary reference with no registered entity is a fatal
    /// data-integrity error: the size cannot be computed without it.
    pub fn count_in(
        &mut self,
        commit: &Commit,
        summaries: &HashMap<SummaryId, Summary>,
    ) -> Result<(), DataError> {
        let mut size = 0;
        for summary in &commit.summaries {
            let id = summary.id();
            let summary = summaries.get(&id).ok_or_else(|| DataError::UnknownSummary {
                commit: commit.id.clone(),
                summary: id,
            })?;
            size += summary.added + summary.removed;
        }

        if size <= 100 {
            self.up_to_100 += 1;
        } else if size <= 500 {
            self.up_to_500 += 1;
        } else if size <= 1000 {
            self.up_to_1000 += 1;
        } else {
            self.more_than_1000 += 1;
        }
        Ok(())
    }

    /// Total commits counted across all buckets.
    pub fn total(&self) -> u64 {
        self.up_to_100 + self.up_to_500 + self.up_to_1000 + self.more_than_1000
    }
}
