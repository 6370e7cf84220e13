use serde::Deserialize;
use std::net::SocketAddr;

pub const DEFAULT_FEED_ENDPOINT: &str =
    "https://qgpc32qkwc.execute-api.ap-northeast-1.amazonaws.com/prod/get_display_temp_humi";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const ENV_PREFIX: &str = "CLIMATE_CHART";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub feed: FeedSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedSettings {
    pub endpoint: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: SocketAddr,
}

/// Load `config/feed.toml` (optional) with `CLIMATE_CHART__*` env overrides
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    build_app_config(config::File::with_name("config/feed").required(false))
}

fn build_app_config<S>(file: S) -> anyhow::Result<AppConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .set_default("feed.endpoint", DEFAULT_FEED_ENDPOINT)?
        .set_default("server.bind", DEFAULT_BIND_ADDR)?
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
