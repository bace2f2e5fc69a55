//! Blocking HTTP transport.
//!
//! The reporter only ever issues GETs, one at a time. The trait keeps the
//! transport swappable so reports can be produced against canned responses.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;

use crate::error::{ReporterError, Result};

pub trait HttpClient {
    fn get(&self, url: &str, headers: &[(&'static str, String)]) -> Result<HttpResponse>;
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Body as text, lossy on invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// reqwest's blocking client with its default timeouts.
pub struct ReqwestHttp {
    client: Client,
}

impl ReqwestHttp {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for ReqwestHttp {
    fn default() -> Self {
        Self::new()
    }
}

// Header names must be lowercase for `HeaderName::from_static`.
impl HttpClient for ReqwestHttp {
    fn get(&self, url: &str, headers: &[(&'static str, String)]) -> Result<HttpResponse> {
        let mut header_map = HeaderMap::with_capacity(headers.len());
        for &(name, ref value) in headers {
            let value =
                HeaderValue::from_str(value).map_err(|_| ReporterError::InvalidHeader(name))?;
            header_map.insert(HeaderName::from_static(name), value);
        }

        let response = self.client.get(url).headers(header_map).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();

        Ok(HttpResponse { status, body })
    }
}
