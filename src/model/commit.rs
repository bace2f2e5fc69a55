use std::fmt;

use serde::Deserialize;

/// Number of characters shown for a commit SHA.
pub const SHORT_SHA_LEN: usize = 8;

/// Messages longer than this are cut in the summary listing.
pub const SUMMARY_MESSAGE_LEN: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Added,
    Modified,
    Removed,
    Renamed,
    Copied,
    Changed,
    Unchanged,
}

impl FileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Added => "added",
            FileStatus::Modified => "modified",
            FileStatus::Removed => "removed",
            FileStatus::Renamed => "renamed",
            FileStatus::Copied => "copied",
            FileStatus::Changed => "changed",
            FileStatus::Unchanged => "unchanged",
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            FileStatus::Added => 'A',
            FileStatus::Modified | FileStatus::Changed => 'M',
            FileStatus::Removed => 'D',
            FileStatus::Renamed => 'R',
            FileStatus::Copied => 'C',
            FileStatus::Unchanged => ' ',
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    pub sha: String,
    pub author: String,
    pub email: Option<String>,
    pub message: String,
    pub date: String,
}

impl CommitSummary {
    pub fn short_sha(&self) -> &str {
        short_sha(&self.sha)
    }

    /// First line of the message, cut for the listing.
    pub fn headline(&self) -> String {
        truncate_message(first_line(&self.message), SUMMARY_MESSAGE_LEN)
    }

    pub fn is_bot(&self) -> bool {
        is_bot_author(&self.author, self.email.as_deref().unwrap_or(""))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitStats {
    pub additions: u64,
    pub deletions: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub filename: String,
    pub previous_filename: Option<String>,
    pub status: FileStatus,
    pub additions: u64,
    pub deletions: u64,
    /// Absent for binary files and for diffs GitHub considers too large.
    pub patch: Option<String>,
}

impl FileChange {
    pub fn display_name(&self) -> String {
        match &self.previous_filename {
            Some(old) if self.status == FileStatus::Renamed => {
                format!("{} -> {}", old, self.filename)
            }
            _ => self.filename.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitDetail {
    pub sha: String,
    pub message: String,
    pub files: Vec<FileChange>,
    pub stats: CommitStats,
}

impl CommitDetail {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn patch_count(&self) -> usize {
        self.files.iter().filter(|f| f.patch.is_some()).count()
    }
}

pub fn short_sha(sha: &str) -> &str {
    match sha.char_indices().nth(SHORT_SHA_LEN) {
        Some((idx, _)) => &sha[..idx],
        None => sha,
    }
}

pub fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or("")
}

pub fn truncate_message(message: &str, max_chars: usize) -> String {
    match message.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &message[..idx]),
        None => message.to_string(),
    }
}

/// Matches the usual markers of automation accounts (dependabot, renovate,
/// GitHub's noreply addresses).
pub fn is_bot_author(name: &str, email: &str) -> bool {
    let name = name.to_lowercase();
    let email = email.to_lowercase();
    name.contains("[bot]")
        || name.ends_with(" bot")
        || email.contains("bot@")
        || email.contains("noreply.github.com")
}
