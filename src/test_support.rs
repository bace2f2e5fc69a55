//! Canned HTTP responses for tests

use std::cell::RefCell;

use crate::error::{ReporterError, Result};
use crate::github::http::{HttpClient, HttpResponse};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Serves the first response whose pattern the URL ends with, and records
/// every request made.
pub struct MockHttp {
    responses: Vec<(String, HttpResponse)>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl MockHttp {
    pub fn new(responses: Vec<(String, HttpResponse)>) -> Self {
        Self {
            responses,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn json(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }
}

impl HttpClient for MockHttp {
    fn get(&self, url: &str, headers: &[(&'static str, String)]) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.to_vec(),
        });

        for (pattern, response) in &self.responses {
            if url.ends_with(pattern.as_str()) {
                return Ok(response.clone());
            }
        }
        Err(ReporterError::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            format!("no mock response for GET {}", url),
        )))
    }
}

pub fn commit_json(sha: &str, author: &str, message: &str, date: &str) -> serde_json::Value {
    serde_json::json!({
        "sha": sha,
        "commit": {
            "author": { "name": author, "email": format!("{}@example.com", author.to_lowercase()), "date": date },
            "message": message
        }
    })
}

pub fn commit_list_json(commits: &[serde_json::Value]) -> String {
    serde_json::Value::Array(commits.to_vec()).to_string()
}
