pub mod directory;
pub mod record;

pub use directory::{resolve_branch, BranchDirectory, BranchLookup, HttpBranchDirectory};
pub use record::{BranchRecord, BranchView, ServiceBadge, MISSING_FIELD};
