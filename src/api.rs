//! HTTP client for the profile API.

use crate::app::GetApiClient;
use crate::config::Config;
use crate::error::{PfError, PfResult};
use crate::profile::image::PendingImage;
use crate::profile::{EditDraft, ProfileRecord, UserId};

use entrait::*;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Body shared by fulfilled and rejected profile/image updates.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

/// An image change for one user: upload `file`, or delete the current
/// picture when `is_deleted` is set.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImageRequest {
    pub user_id: UserId,
    pub file: Option<PendingImage>,
    pub is_deleted: bool,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> PfResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> PfResult<T> {
        let response = self.authorize(request).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(rejection(status.as_u16(), &body))
        }
    }

    /// Like `send`, for the update endpoints. Their success body may be
    /// empty (204) or plain text.
    async fn send_message(&self, request: RequestBuilder) -> PfResult<ApiMessage> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            Ok(fulfilment(&body))
        } else {
            Err(rejection(status.as_u16(), &body))
        }
    }
}

fn fulfilment(body: &str) -> ApiMessage {
    serde_json::from_str(body).unwrap_or_else(|_| ApiMessage {
        message: body.trim().to_string(),
    })
}

/// A rejected response carries `{message}` like a fulfilled one. Anything
/// else in the body is passed on as-is.
fn rejection(status: u16, body: &str) -> PfError {
    let message = match serde_json::from_str::<ApiMessage>(body) {
        Ok(ApiMessage { message }) if !message.is_empty() => message,
        _ => body.trim().to_string(),
    };

    PfError::Rejected { status, message }
}

fn image_form(request: ImageRequest, bytes: Option<Vec<u8>>) -> PfResult<Form> {
    let mut form = Form::new().text("UserId", request.user_id.to_string());

    if let (Some(file), Some(bytes)) = (request.file, bytes) {
        let part = Part::bytes(bytes)
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type())?;
        form = form.part("file", part);
    }
    if request.is_deleted {
        form = form.text("isDeleted", "true");
    }

    Ok(form)
}

#[entrait(pub FetchProfile, mock_api=FetchProfileMock)]
async fn fetch_profile(deps: &impl GetApiClient, user_id: UserId) -> PfResult<ProfileRecord> {
    let api = deps.get_api_client();
    tracing::debug!("GET profile of user {user_id}");

    api.send(api.client.get(api.url(&format!("/profile/{user_id}"))))
        .await
}

#[entrait(pub UpdateProfile, mock_api=UpdateProfileMock)]
async fn update_profile(deps: &impl GetApiClient, draft: EditDraft) -> PfResult<ApiMessage> {
    let api = deps.get_api_client();
    tracing::debug!("PUT profile");

    api.send_message(api.client.put(api.url("/profile")).json(&draft))
        .await
}

#[entrait(pub UpdateProfileImage, mock_api=UpdateProfileImageMock)]
async fn update_profile_image(
    deps: &impl GetApiClient,
    request: ImageRequest,
) -> PfResult<ApiMessage> {
    let api = deps.get_api_client();
    tracing::debug!(
        "POST profile image of user {} (deleted: {})",
        request.user_id,
        request.is_deleted
    );

    let bytes = match &request.file {
        Some(file) => Some(tokio::fs::read(&file.path).await?),
        None => None,
    };
    let form = image_form(request, bytes)?;

    api.send_message(api.client.post(api.url("/profile/image")).multipart(form))
        .await
}
