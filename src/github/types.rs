//! Wire shapes of the GitHub commits API.
//!
//! Only the fields the report needs are declared; serde ignores the rest.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

use crate::model::{CommitDetail, CommitStats, CommitSummary, FileChange, FileStatus};

#[derive(Debug, Deserialize)]
pub struct GitUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct GitCommit {
    pub author: Option<GitUser>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiCommit {
    pub sha: String,
    pub commit: GitCommit,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiStats {
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
}

#[derive(Debug, Deserialize)]
pub struct ApiFile {
    pub filename: String,
    pub previous_filename: Option<String>,
    pub status: FileStatus,
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
    pub patch: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiCommitDetail {
    pub sha: String,
    pub commit: GitCommit,
    #[serde(default)]
    pub stats: ApiStats,
    #[serde(default)]
    pub files: Vec<ApiFile>,
}

impl From<ApiCommit> for CommitSummary {
    fn from(api: ApiCommit) -> Self {
        let (author, email, date) = match api.commit.author {
            Some(user) => (
                user.name.unwrap_or_else(|| "Unknown".to_string()),
                user.email,
                user.date
                    .map(|d| d.to_rfc3339_opts(SecondsFormat::Secs, true))
                    .unwrap_or_default(),
            ),
            None => ("Unknown".to_string(), None, String::new()),
        };

        Self {
            sha: api.sha,
            author,
            email,
            message: api.commit.message,
            date,
        }
    }
}

impl From<ApiFile> for FileChange {
    fn from(api: ApiFile) -> Self {
        Self {
            filename: api.filename,
            previous_filename: api.previous_filename,
            status: api.status,
            additions: api.additions,
            deletions: api.deletions,
            patch: api.patch,
        }
    }
}

impl From<ApiCommitDetail> for CommitDetail {
    fn from(api: ApiCommitDetail) -> Self {
        Self {
            sha: api.sha,
            message: api.commit.message,
            files: api.files.into_iter().map(FileChange::from).collect(),
            stats: CommitStats {
                additions: api.stats.additions,
                deletions: api.stats.deletions,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_commit_list_entry() {
        // given
        let json = r#"{
            "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
            "node_id": "MDY6Q29tbWl0",
            "commit": {
                "author": {
                    "name": "Monalisa Octocat",
                    "email": "support@github.com",
                    "date": "2011-04-14T16:00:49Z"
                },
                "message": "Fix all the bugs\n\nDetails here"
            },
            "author": { "login": "octocat" }
        }"#;

        // when
        let api: ApiCommit = serde_json::from_str(json).unwrap();
        let summary = CommitSummary::from(api);

        // then
        assert_eq!(summary.author, "Monalisa Octocat");
        assert_eq!(summary.email.as_deref(), Some("support@github.com"));
        assert_eq!(summary.date, "2011-04-14T16:00:49Z");
        assert_eq!(summary.message, "Fix all the bugs\n\nDetails here");
    }

    #[test]
    fn should_normalize_offset_dates_to_utc() {
        let json = r#"{
            "sha": "abc",
            "commit": {
                "author": { "name": "A", "email": "a@b.c", "date": "2024-03-01T14:00:00+02:00" },
                "message": "m"
            }
        }"#;
        let summary = CommitSummary::from(serde_json::from_str::<ApiCommit>(json).unwrap());
        assert_eq!(summary.date, "2024-03-01T12:00:00Z");
    }

    #[test]
    fn should_fall_back_when_author_missing() {
        let json = r#"{ "sha": "abc", "commit": { "author": null, "message": "m" } }"#;
        let summary = CommitSummary::from(serde_json::from_str::<ApiCommit>(json).unwrap());
        assert_eq!(summary.author, "Unknown");
        assert_eq!(summary.date, "");
    }

    #[test]
    fn should_parse_detail_with_and_without_patch() {
        // given
        let json = r#"{
            "sha": "abc",
            "commit": { "author": null, "message": "Full message" },
            "stats": { "additions": 3, "deletions": 1, "total": 4 },
            "files": [
                {
                    "filename": "src/lib.rs",
                    "status": "modified",
                    "additions": 3,
                    "deletions": 1,
                    "changes": 4,
                    "patch": "@@ -1 +1 @@\n-a\n+b"
                },
                {
                    "filename": "logo.png",
                    "status": "added",
                    "additions": 0,
                    "deletions": 0,
                    "changes": 0
                }
            ]
        }"#;

        // when
        let detail = CommitDetail::from(serde_json::from_str::<ApiCommitDetail>(json).unwrap());

        // then
        assert_eq!(detail.file_count(), 2);
        assert_eq!(detail.patch_count(), 1);
        assert_eq!(detail.stats, CommitStats { additions: 3, deletions: 1 });
        assert_eq!(detail.files[1].status, FileStatus::Added);
        assert!(detail.files[1].patch.is_none());
    }

    #[test]
    fn should_reject_unknown_file_status() {
        let json = r#"{ "filename": "a", "status": "exploded" }"#;
        assert!(serde_json::from_str::<ApiFile>(json).is_err());
    }
}
