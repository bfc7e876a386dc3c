pub mod dedupe;
pub mod pipeline;
pub mod transform;

pub use dedupe::DedupIndex;
pub use pipeline::{ImportPlan, commit, plan, sort_key};
pub use transform::to_completed_credit;
