use retroboard_aggregate::ActivityGrid;
use retroboard_core::Sprint;

use crate::model::{ActivityData, Slide, WeekGrid};

/// The weekday×hour heat-map slide. Pure relabeling: the aggregator's
/// 0=Sunday rows become a named Monday-first record.
pub fn activity_slide(current: &Sprint, grid: &ActivityGrid) -> Slide {
    Slide::Activity(ActivityData {
        title: "Коммиты".into(),
        subtitle: current.name.clone(),
        data: WeekGrid {
            mon: grid[1],
            tue: grid[2],
            wed: grid[3],
            thu: grid[4],
            fri: grid[5],
            sat: grid[6],
            sun: grid[0],
        },
    })
}
