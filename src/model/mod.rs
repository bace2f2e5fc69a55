pub mod commit;

pub use commit::{CommitDetail, CommitStats, CommitSummary, FileChange, FileStatus, short_sha};
