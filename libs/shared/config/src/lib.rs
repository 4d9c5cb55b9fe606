use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ehr_feed_base_url: String,
    pub ehr_feed_api_key: String,
    pub practice_timezone: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            ehr_feed_base_url: env::var("EHR_FEED_BASE_URL")
                .unwrap_or_else(|_| {
                    warn!("EHR_FEED_BASE_URL not set, using empty value");
                    String::new()
                }),
            ehr_feed_api_key: env::var("EHR_FEED_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("EHR_FEED_API_KEY not set, using empty value");
                    String::new()
                }),
            practice_timezone: env::var("PRACTICE_TIMEZONE")
                .unwrap_or_else(|_| "America/Los_Angeles".to_string()),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.ehr_feed_base_url.is_empty() && !self.ehr_feed_api_key.is_empty()
    }
}
