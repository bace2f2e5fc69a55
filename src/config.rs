//! Runtime configuration for a report run.

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_OWNER: &str = "NeeleshSamptur";
pub const DEFAULT_REPO: &str = "CS5704_SE_Project";
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const API_URL_ENV: &str = "GITHUB_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl RepositoryRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl Default for RepositoryRef {
    fn default() -> Self {
        Self::new(DEFAULT_OWNER, DEFAULT_REPO)
    }
}

impl std::fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Opaque token. Never validated; an unset variable yields an empty token.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self(lookup(TOKEN_ENV).unwrap_or_default())
    }

    pub fn authorization(&self) -> String {
        format!("token {}", self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub repository: RepositoryRef,
    pub credential: Credential,
}

impl Config {
    pub fn new(api_url: impl Into<String>, repository: RepositoryRef, credential: Credential) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self {
            api_url,
            repository,
            credential,
        }
    }
}
