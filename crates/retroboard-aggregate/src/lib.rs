pub mod rollup;
pub mod sizes;
pub mod timeline;
pub mod walker;

pub use rollup::{aggregate, SprintStats, ActivityGrid};
pub use sizes::CommitSizes;
pub use timeline::{relative_to_sprint, within_sprint, RelativePosition, SprintIndex};
pub use walker::EntityBag;
