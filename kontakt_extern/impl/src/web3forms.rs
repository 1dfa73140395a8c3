use std::sync::Arc;

use anyhow::{anyhow, Context};
use kontakt_extern_contracts::{
    FormSubmissionApiService, FormSubmissionError, FormSubmissionRequest, FormSubmissionResponse,
};
use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use crate::http::HttpClient;

const SUBMIT_ENDPOINT: &str = "https://api.web3forms.com/submit";

#[derive(Debug, Clone)]
pub struct Web3FormsApiServiceImpl {
    config: Web3FormsApiServiceConfig,
    http: HttpClient,
}

#[derive(Clone)]
pub struct Web3FormsApiServiceConfig {
    submit_endpoint: Arc<Url>,
    access_key: Arc<str>,
}

impl std::fmt::Debug for Web3FormsApiServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Web3FormsApiServiceConfig")
            .field("submit_endpoint", &self.submit_endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl Web3FormsApiServiceConfig {
    pub fn new(access_key: impl Into<Arc<str>>, submit_endpoint_override: Option<Url>) -> Self {
        Self {
            submit_endpoint: submit_endpoint_override
                .unwrap_or_else(|| SUBMIT_ENDPOINT.parse().unwrap())
                .into(),
            access_key: access_key.into(),
        }
    }
}

impl Web3FormsApiServiceImpl {
    pub fn new(config: Web3FormsApiServiceConfig, http: HttpClient) -> Self {
        Self { config, http }
    }
}

impl FormSubmissionApiService for Web3FormsApiServiceImpl {
    #[instrument(skip_all, fields(endpoint = %self.config.submit_endpoint))]
    async fn submit(
        &self,
        request: FormSubmissionRequest,
    ) -> Result<FormSubmissionResponse, FormSubmissionError> {
        let FormSubmissionRequest {
            subject,
            submission,
        } = &request;

        let body = SubmitRequest {
            access_key: &self.config.access_key,
            subject,
            from_name: &submission.name,
            name: &submission.name,
            email: submission.email.as_str(),
            message: &submission.message,
            botcheck: submission.botcheck,
        };

        let response = self
            .http
            .post((*self.config.submit_endpoint).clone())
            .header(header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .context("Failed to send submission request")
            .map_err(FormSubmissionError::Network)?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .context("Failed to receive submission response")
            .map_err(FormSubmissionError::Network)?;

        let parsed = serde_json::from_slice::<SubmitResponse>(&bytes);
        debug!(%status, parsed = parsed.is_ok(), "received submission response");

        match parsed {
            Ok(SubmitResponse { success, message }) => Ok(FormSubmissionResponse {
                success: success && status.is_success(),
                message,
            }),
            Err(err) if status.is_success() => Err(FormSubmissionError::MalformedResponse(
                anyhow!(err).context("Failed to deserialize submission response"),
            )),
            Err(_) => Err(FormSubmissionError::MalformedResponse(anyhow!(
                "Submission request returned status {status} without a JSON body"
            ))),
        }
    }
}

#[derive(Serialize)]
struct SubmitRequest<'a> {
    access_key: &'a str,
    subject: &'a str,
    from_name: &'a str,
    name: &'a str,
    email: &'a str,
    message: &'a str,
    botcheck: bool,
}

#[derive(Deserialize)]
struct SubmitResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}
