use serde::{Deserialize, Serialize};

/// localStorage key holding the backend connection details.
pub const SERVER_DETAILS_KEY: &str = "server_details";

/// Where the settings backend lives and how to authenticate against it.
///
/// An empty `server_name` means the backend is served from the same origin
/// as the app, so request paths stay relative.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ServerConfig {
    #[serde(default)]
    pub server_name: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl ServerConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: ServerConfig = serde_json::from_str(raw)?;
        config.server_name = config.server_name.trim().trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Reads the stored connection details, falling back to same-origin
    /// defaults when nothing usable is stored.
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(SERVER_DETAILS_KEY).ok().flatten());

        match stored {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed {} entry: {}", SERVER_DETAILS_KEY, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server_name, path)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}
