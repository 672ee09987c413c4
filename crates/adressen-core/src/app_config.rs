use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub pdok_endpoint: String,
    pub page_size: u32,
    pub request_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
    pub output_path: PathBuf,
}
