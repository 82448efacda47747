#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    // no timeout by default: a hung backend blocks the caller until it
    // answers, matching the dashboard contract
    pub request_timeout_secs: Option<u64>,
}
