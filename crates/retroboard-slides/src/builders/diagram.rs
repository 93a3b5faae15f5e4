use retroboard_aggregate::CommitSizes;
use retroboard_core::Sprint;

use crate::model::{Category, DiagramData, Slide};
use crate::plural::{Lexicon, NounCategory};

/// The commit-size distribution slide: four fixed buckets, largest first,
/// each with its current count and a signed delta against the previous
/// sprint, plus page-level totals.
pub fn diagram_slide(
    current: &Sprint,
    this_sprint: &CommitSizes,
    last_sprint: &CommitSizes,
    lexicon: &Lexicon,
) -> Slide {
    let rows = [
        ("> 1001 строки", this_sprint.more_than_1000, last_sprint.more_than_1000),
        ("501 — 1000 строк", this_sprint.up_to_1000, last_sprint.up_to_1000),
        ("101 — 500 строк", this_sprint.up_to_500, last_sprint.up_to_500),
        ("1 — 100 строк", this_sprint.up_to_100, last_sprint.up_to_100),
    ];

    let total_now = this_sprint.total() as i64;
    let total_before = last_sprint.total() as i64;

    Slide::Diagram(DiagramData {
        title: "Размер коммитов".into(),
        subtitle: current.name.clone(),
        total_text: lexicon.pluralize(total_now, NounCategory::Commits),
        difference_text: lexicon.pluralize_signed(total_now - total_before, NounCategory::Commits),
        categories: rows
            .iter()
            .map(|&(title, now, before)| Category {
                title: title.into(),
                value_text: lexicon.pluralize(now as i64, NounCategory::Commits),
                difference_text: lexicon
                    .pluralize_signed(now as i64 - before as i64, NounCategory::Commits),
            })
            .collect(),
    })
}
