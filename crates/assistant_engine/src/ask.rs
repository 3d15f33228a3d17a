use std::time::Duration;

use assistant_logging::assistant_debug;
use bytes::BytesMut;
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

use crate::payload::{decode_answer, encode_question};
use crate::{AnswerPayload, AskError, FailureKind};

/// Path of the question endpoint, relative to the configured base address.
pub const ASK_PATH: &str = "python";
/// Path of the backend liveness endpoint.
pub const HEALTH_PATH: &str = "health";

#[derive(Debug, Clone)]
pub struct AskSettings {
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl AskSettings {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
            max_bytes: 5 * 1024 * 1024,
        }
    }

    /// `<base>/<path>`, keeping any path prefix the base already carries.
    pub fn endpoint(&self, path: &str) -> Result<Url, AskError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}/{path}"))
            .map_err(|err| AskError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
pub trait Asker: Send + Sync {
    async fn ask(&self, message: &str) -> Result<AnswerPayload, AskError>;

    async fn health(&self) -> Result<(), AskError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAsker {
    settings: AskSettings,
    client: reqwest::Client,
}

impl ReqwestAsker {
    pub fn new(settings: AskSettings) -> Result<Self, AskError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| AskError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<BytesMut, AskError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(AskError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut body = BytesMut::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(AskError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[async_trait::async_trait]
impl Asker for ReqwestAsker {
    async fn ask(&self, message: &str) -> Result<AnswerPayload, AskError> {
        let url = self.settings.endpoint(ASK_PATH)?;
        assistant_debug!("POST {} ({} byte question)", url, message.len());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(encode_question(message))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AskError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = self.read_body(response).await?;
        decode_answer(&body)
    }

    async fn health(&self) -> Result<(), AskError> {
        let url = self.settings.endpoint(HEALTH_PATH)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(AskError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ))
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> AskError {
    if err.is_timeout() {
        return AskError::new(FailureKind::Timeout, err.to_string());
    }
    AskError::new(FailureKind::Network, err.to_string())
}
