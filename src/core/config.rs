use serde::Deserialize;

fn default_token_lifetime() -> u64 {
    300
}

fn default_sweep_interval() -> u64 {
    60
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct Args {
    pub(crate) log_level: String,
    pub(crate) port: u16,
    pub(crate) secret: String,
    pub(crate) api_key: String,
    #[serde(default = "default_token_lifetime")]
    pub(crate) token_lifetime_secs: u64,
    #[serde(default = "default_sweep_interval")]
    pub(crate) sweep_interval_secs: u64,
}
