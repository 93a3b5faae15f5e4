use std::collections::HashMap;

use retroboard_core::{Sprint, SprintId, Timestamp};

/// Position of a timestamp relative to a sprint window on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativePosition {
    Earlier,
    Within,
    Later,
}

/// Three-way comparison of a timestamp against a sprint window.
/// `finish_at` is exclusive.
pub fn relative_to_sprint(sprint: &Sprint, timestamp: Timestamp) -> RelativePosition {
    if timestamp < sprint.start_at {
        return RelativePosition::Earlier;
    }
    if timestamp >= sprint.finish_at {
        return RelativePosition::Later;
    }
    RelativePosition::Within
}

/// Whether a timestamp falls within the duration of a sprint.
pub fn within_sprint(timestamp: Timestamp, sprint: &Sprint) -> bool {
    relative_to_sprint(sprint, timestamp) == RelativePosition::Within
}

/// The known sprint windows, ordered ascending by start time, with O(1)
/// lookup by id and O(log n) positional lookup by timestamp.
#[derive(Debug, Clone, Default)]
pub struct SprintIndex {
    ordered: Vec<Sprint>,
    by_id: HashMap<SprintId, usize>,
}

impl SprintIndex {
    pub fn new(mut sprints: Vec<Sprint>) -> Self {
        // Stable: sprints sharing a start keep their stream order.
        sprints.sort_by_key(|sprint| sprint.start_at);
        let by_id = sprints
            .iter()
            .enumerate()
            .map(|(idx, sprint)| (sprint.id, idx))
            .collect();
        Self {
            ordered: sprints,
            by_id,
        }
    }

    /// All sprints, ascending by start time.
    pub fn ordered(&self) -> &[Sprint] {
        &self.ordered
    }

    pub fn get(&self, id: SprintId) -> Option<&Sprint> {
        self.by_id.get(&id).map(|&idx| &self.ordered[idx])
    }

    /// Binary-search the window containing a timestamp. The tri-state
    /// comparator steers the probe and tests membership in one shot;
    /// `None` means the timestamp fell in a gap or outside all windows.
    pub fn locate(&self, timestamp: Timestamp) -> Option<&Sprint> {
        let mut lo = 0;
        let mut hi = self.ordered.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match relative_to_sprint(&self.ordered[mid], timestamp) {
                RelativePosition::Later => lo = mid + 1,
                RelativePosition::Earlier => hi = mid,
                RelativePosition::Within => return Some(&self.ordered[mid]),
            }
        }
        None
    }
}
