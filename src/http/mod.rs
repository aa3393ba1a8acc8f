use reqwest::{
    header::{ACCEPT, USER_AGENT},
    Client, RequestBuilder,
};
use std::ops::{Deref, DerefMut};
use thiserror::Error;

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl DerefMut for HttpClient {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.client
    }
}

pub trait Headers {
    fn contents_headers(self) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn contents_headers(self) -> RequestBuilder {
        self.header(ACCEPT, "application/vnd.github.v3+json")
            .header(USER_AGENT, "repofetch")
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Remote fetch failed with status code {status}")]
    RemoteFetchError { status: u16 },
    #[error("Failed to send request")]
    RequestError {
        #[from]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[from]
        cause: serde_json::Error,
    },
    #[error("Failed to decode file content")]
    DecodeContentError {
        #[from]
        cause: base64::DecodeError,
    },
    #[error("File content is not valid UTF-8")]
    InvalidUtf8Error {
        #[from]
        cause: std::string::FromUtf8Error,
    },
}
