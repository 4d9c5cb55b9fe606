use std::sync::Arc;
use serde_json::json;

use shared_config::AppConfig;

pub struct TestConfig {
    pub ehr_feed_base_url: String,
    pub ehr_feed_api_key: String,
    pub practice_timezone: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            ehr_feed_base_url: "http://localhost:8090".to_string(),
            ehr_feed_api_key: "test-api-key".to_string(),
            practice_timezone: "America/Los_Angeles".to_string(),
        }
    }
}

impl TestConfig {
    /// Config pointed at a mock feed server (usually a wiremock uri).
    pub fn with_feed_url(url: &str) -> AppConfig {
        Self {
            ehr_feed_base_url: url.to_string(),
            ..Self::default()
        }
        .to_app_config()
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            ehr_feed_base_url: self.ehr_feed_base_url.clone(),
            ehr_feed_api_key: self.ehr_feed_api_key.clone(),
            practice_timezone: self.practice_timezone.clone(),
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct MockFeedResponses;

impl MockFeedResponses {
    /// Payload with every optional field present but empty.
    pub fn empty_payload() -> serde_json::Value {
        json!({
            "schedule": {},
            "practitioner_names": {},
            "practitioner_roles": {},
            "location_names": {}
        })
    }

    /// One rostered practitioner with a clinic morning on the given date.
    /// "Daniel Su" sits in the default Central pod, so the row survives
    /// roster matching without any custom configuration.
    pub fn single_practitioner_payload(date: &str) -> serde_json::Value {
        json!({
            "schedule": {
                date: {
                    "prac-su": {
                        "AM": { "loc-irv": "9:00" },
                        "PM": {}
                    }
                }
            },
            "practitioner_names": { "prac-su": "Daniel Su, MD" },
            "practitioner_roles": { "prac-su": "MD" },
            "location_names": { "loc-irv": "Irvine" }
        })
    }

    /// Payload carrying a block key outside {AM, PM}.
    pub fn malformed_block_payload(date: &str) -> serde_json::Value {
        json!({
            "schedule": {
                date: {
                    "prac-su": {
                        "EVENING": { "loc-irv": "18:00" }
                    }
                }
            },
            "practitioner_names": { "prac-su": "Daniel Su, MD" },
            "location_names": { "loc-irv": "Irvine" }
        })
    }

    pub fn error_response(message: &str, code: &str) -> serde_json::Value {
        json!({
            "error": {
                "message": message,
                "code": code
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = TestConfig::default();
        let app_config = config.to_app_config();

        assert_eq!(app_config.ehr_feed_base_url, "http://localhost:8090");
        assert_eq!(app_config.ehr_feed_api_key, "test-api-key");
        assert!(app_config.is_configured());
    }

    #[test]
    fn test_with_feed_url() {
        let app_config = TestConfig::with_feed_url("http://127.0.0.1:9999");
        assert_eq!(app_config.ehr_feed_base_url, "http://127.0.0.1:9999");
        assert_eq!(app_config.practice_timezone, "America/Los_Angeles");
    }
}
