//! The aggregation pass: classify every comment and commit against the
//! sprint windows and accumulate the five slide statistics in one sweep.

use std::collections::HashMap;

use time::OffsetDateTime;
use tracing::debug;

use retroboard_core::{Commit, DataError, Sprint, SprintId, UserId};

use crate::sizes::CommitSizes;
use crate::timeline::{within_sprint, SprintIndex};
use crate::walker::EntityBag;

/// Commit counters indexed by weekday (0 = Sunday .. 6 = Saturday) and
/// hour of day, both taken in UTC.
pub type ActivityGrid = [[u64; 24]; 7];

/// Raw aggregates for one target sprint and its predecessor.
#[derive(Debug, Clone, Default)]
pub struct SprintStats {
    /// Likes received on current-sprint comments, keyed by comment author.
    pub likes_per_user: HashMap<UserId, u64>,
    /// Current-sprint commit counts keyed by commit author.
    pub commits_per_user: HashMap<UserId, u64>,
    pub sizes_current: CommitSizes,
    pub sizes_previous: CommitSizes,
    /// Commit totals per containing sprint, across the whole timeline.
    pub commits_per_sprint: HashMap<SprintId, u64>,
    pub activity: ActivityGrid,
}

fn utc_slot(commit: &Commit) -> Result<(usize, usize), DataError> {
    let moment = OffsetDateTime::from_unix_timestamp(commit.timestamp.div_euclid(1_000))
        .map_err(|_| DataError::TimestampOutOfRange(commit.id.clone()))?;
    let weekday = moment.weekday().number_days_from_sunday() as usize;
    Ok((weekday, moment.hour() as usize))
}

/// Run the aggregation pass over fully reconciled collections.
///
/// The comment and commit sweeps are independent; a commit landing in both
/// windows is counted for each (cannot happen with non-overlapping windows,
/// but nothing here assumes it). Commits outside every known window are
/// excluded from the historical series only.
pub fn aggregate(
    bag: &EntityBag,
    timeline: &SprintIndex,
    current: &Sprint,
    previous: &Sprint,
) -> Result<SprintStats, DataError> {
    let mut stats = SprintStats::default();

    for comment in &bag.comments {
        if within_sprint(comment.created_at, current) {
            *stats.likes_per_user.entry(comment.author.id()).or_insert(0) +=
                comment.likes.len() as u64;
        }
    }

    for commit in &bag.commits {
        if within_sprint(commit.timestamp, current) {
            *stats.commits_per_user.entry(commit.author.id()).or_insert(0) += 1;
            stats.sizes_current.count_in(commit, &bag.summaries)?;
            let (weekday, hour) = utc_slot(commit)?;
            stats.activity[weekday][hour] += 1;
        }
        if within_sprint(commit.timestamp, previous) {
            stats.sizes_previous.count_in(commit, &bag.summaries)?;
        }
        if let Some(sprint) = timeline.locate(commit.timestamp) {
            *stats.commits_per_sprint.entry(sprint.id).or_insert(0) += 1;
        }
    }

    debug!(
        comments = bag.comments.len(),
        commits = bag.commits.len(),
        current_sprint = stats.sizes_current.total(),
        previous_sprint = stats.sizes_previous.total(),
        "aggregated sprint stats"
    );
    Ok(stats)
}
