pub mod client;
pub mod http;
pub mod types;

pub use client::{ApiOutcome, GitHubClient};
pub use http::{HttpClient, ReqwestHttp};
