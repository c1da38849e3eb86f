use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const DEFAULT_BACKEND_URL: &str = "http://localhost:54321";
const DEFAULT_ANON_KEY: &str = "";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub backend_url: String,
    #[serde(default)]
    pub anon_key: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            anon_key: DEFAULT_ANON_KEY.to_string(),
        }
    }
}

/// Partial config as found in `window.__RONIN_ENV` or `config.json`.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawConfig {
    #[serde(default, alias = "BACKEND_URL")]
    backend_url: Option<String>,
    #[serde(default, alias = "ANON_KEY")]
    anon_key: Option<String>,
}

impl RawConfig {
    fn resolve(self) -> Option<RuntimeConfig> {
        let backend_url = self.backend_url.filter(|url| !url.trim().is_empty())?;
        Some(RuntimeConfig {
            backend_url,
            anon_key: self.anon_key.unwrap_or_default(),
        })
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

fn cache(config: RuntimeConfig) -> RuntimeConfig {
    let _ = RUNTIME_CONFIG.set(config.clone());
    RUNTIME_CONFIG.get().cloned().unwrap_or(config)
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    // Optional global object: window.__RONIN_ENV = { backend_url: "...", anon_key: "..." }
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &"__RONIN_ENV".into()).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let json = js_sys::JSON::stringify(&value).ok()?.as_string()?;
    serde_json::from_str::<RawConfig>(&json).ok()?.resolve()
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RawConfig>().await.ok()?.resolve()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

pub async fn await_runtime_config() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    if let Some(config) = snapshot_from_globals() {
        return cache(config);
    }
    if let Some(config) = fetch_runtime_config().await {
        return cache(config);
    }
    log::warn!(
        "No runtime config found, falling back to {}",
        DEFAULT_BACKEND_URL
    );
    cache(RuntimeConfig::default())
}

pub async fn init() {
    let config = await_runtime_config().await;
    log::info!("Backend endpoint: {}", config.backend_url);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_config_accepts_upper_case_keys() {
        let raw: RawConfig = serde_json::from_value(json!({
            "BACKEND_URL": "https://project.example.co",
            "ANON_KEY": "public-key"
        }))
        .expect("decode");
        assert_eq!(
            raw.resolve(),
            Some(RuntimeConfig {
                backend_url: "https://project.example.co".into(),
                anon_key: "public-key".into(),
            })
        );
    }

    #[test]
    fn blank_backend_url_is_ignored() {
        let raw: RawConfig =
            serde_json::from_value(json!({ "backend_url": "  " })).expect("decode");
        assert_eq!(raw.resolve(), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn host_build_falls_back_to_default() {
        let config = futures::executor::block_on(await_runtime_config());
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    }
}
