use thiserror::Error;

use crate::entity::{CommitId, SprintId, SummaryId, UserId};

/// Data-integrity failures surfaced while deriving slide data.
///
/// The entity stream is caller-supplied and read-only: every variant reports
/// an inconsistency in that stream, not a recoverable runtime condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// The target sprint id matched no sprint entity in the stream.
    #[error("sprint {0} is not present in the entity stream")]
    MissingSprint(SprintId),

    /// The window preceding the target sprint is required for the size
    /// diagram and was not found. A target id of 0 has no predecessor.
    #[error("sprint {0} has no predecessor in the entity stream")]
    MissingPreviousSprint(SprintId),

    #[error("commit {commit} references summary {summary}, which is not present in the entity stream")]
    UnknownSummary { commit: CommitId, summary: SummaryId },

    #[error("user {0} is referenced as an author but never appears in the entity stream")]
    UnknownUser(UserId),

    #[error("commit {0} has a timestamp outside the representable datetime range")]
    TimestampOutOfRange(CommitId),
}
