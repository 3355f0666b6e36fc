use anyhow::Error;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use crate::config::ServerConfig;
use crate::requests::notification_types::NotificationTypes;

pub const LUNASEA_SETTINGS_PATH: &str = "/api/v1/settings/notifications/lunasea";

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LunaSeaOptions {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub profile: String,
    #[serde(default)]
    pub is_device_token: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_payload: Option<String>,
}

/// The LunaSea agent settings resource, read and written as a whole.
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
pub struct LunaSeaSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub types: NotificationTypes,
    #[serde(default)]
    pub options: LunaSeaOptions,
}

/// The remote settings resource the panel reads, overwrites and tests.
#[allow(async_fn_in_trait)]
pub trait SettingsStore {
    async fn fetch(&self) -> Result<LunaSeaSettings, Error>;
    async fn save(&self, settings: &LunaSeaSettings) -> Result<(), Error>;
    async fn test(&self, settings: &LunaSeaSettings) -> Result<(), Error>;
}

/// [`SettingsStore`] backed by the server's REST endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct LunaSeaClient {
    config: ServerConfig,
}

impl LunaSeaClient {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}

impl SettingsStore for LunaSeaClient {
    async fn fetch(&self) -> Result<LunaSeaSettings, Error> {
        call_get_lunasea_settings(&self.config).await
    }

    async fn save(&self, settings: &LunaSeaSettings) -> Result<(), Error> {
        call_update_lunasea_settings(&self.config, settings).await
    }

    async fn test(&self, settings: &LunaSeaSettings) -> Result<(), Error> {
        call_test_lunasea_settings(&self.config, settings).await
    }
}

fn authorize(request: RequestBuilder, config: &ServerConfig) -> RequestBuilder {
    let request = request.header("Content-Type", "application/json");
    match config.api_key() {
        Some(api_key) => request.header("X-Api-Key", api_key),
        None => request,
    }
}

async fn error_detail(response: Response) -> String {
    match response.text().await {
        Ok(body) if !body.trim().is_empty() => body,
        _ => format!("{} {}", response.status(), response.status_text()),
    }
}

pub async fn call_get_lunasea_settings(config: &ServerConfig) -> Result<LunaSeaSettings, Error> {
    let url = config.url(LUNASEA_SETTINGS_PATH);

    let response = authorize(Request::get(&url), config)
        .send()
        .await
        .map_err(|e| Error::msg(format!("Network error: {}", e)))?;

    if response.ok() {
        response
            .json::<LunaSeaSettings>()
            .await
            .map_err(|e| Error::msg(format!("Error parsing JSON: {}", e)))
    } else {
        let detail = error_detail(response).await;
        log::error!("Error getting LunaSea settings: {}", detail);
        Err(Error::msg(detail))
    }
}

pub async fn call_update_lunasea_settings(
    config: &ServerConfig,
    settings: &LunaSeaSettings,
) -> Result<(), Error> {
    let url = config.url(LUNASEA_SETTINGS_PATH);

    let response = authorize(Request::post(&url), config)
        .json(settings)?
        .send()
        .await
        .map_err(|e| Error::msg(format!("Network error: {}", e)))?;

    if response.ok() {
        Ok(())
    } else {
        let detail = error_detail(response).await;
        log::error!("Error updating LunaSea settings: {}", detail);
        Err(Error::msg(detail))
    }
}

pub async fn call_test_lunasea_settings(
    config: &ServerConfig,
    settings: &LunaSeaSettings,
) -> Result<(), Error> {
    let url = config.url(&format!("{}/test", LUNASEA_SETTINGS_PATH));

    let response = authorize(Request::post(&url), config)
        .json(settings)?
        .send()
        .await
        .map_err(|e| Error::msg(format!("Network error: {}", e)))?;

    if response.ok() {
        Ok(())
    } else {
        let detail = error_detail(response).await;
        log::error!("Error sending LunaSea test notification: {}", detail);
        Err(Error::msg(detail))
    }
}
