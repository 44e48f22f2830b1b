pub mod conflict;
pub mod policy;

pub use conflict::{ConflictReport, ConflictRule, MergeConflict};
pub use policy::{MergePolicy, MergePolicyTable};
