use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::{RecordStore, ServiceError};
use crate::config::ServiceConfig;

/// Inserts rows through the PostgREST endpoint of a hosted project.
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    anon_key: String,
    configured: bool,
}

impl SupabaseClient {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            anon_key: config.supabase_anon_key.clone(),
            configured: config.store_configured(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

#[async_trait]
impl RecordStore for SupabaseClient {
    async fn insert(&self, table: &str, row: Value) -> Result<(), ServiceError> {
        if !self.configured {
            return Err(ServiceError::NotConfigured("record store"));
        }

        let response = self
            .http
            .post(self.table_url(table))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=minimal")
            .json(&[row])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%table, %status, %body, "insert rejected");
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(%table, "row inserted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url() {
        let config = ServiceConfig {
            supabase_url: "https://demo.supabase.co/".to_string(),
            supabase_anon_key: "anon".to_string(),
            ..Default::default()
        };
        let client = SupabaseClient::new(&config);
        assert_eq!(
            client.table_url("subscribers"),
            "https://demo.supabase.co/rest/v1/subscribers"
        );
    }

    #[tokio::test]
    async fn test_placeholder_config_is_rejected() {
        let client = SupabaseClient::new(&ServiceConfig::default());
        let res = client
            .insert("subscribers", serde_json::json!({ "email": "a@b" }))
            .await;
        assert_eq!(res, Err(ServiceError::NotConfigured("record store")));
    }
}
