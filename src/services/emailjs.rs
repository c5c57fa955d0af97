use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{info, warn};

use super::{Mailer, ServiceError};
use crate::config::ServiceConfig;
use crate::contact::ContactForm;

const SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// Named fields the email template expects.
#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

pub struct EmailJsClient {
    http: Client,
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
    configured: bool,
}

impl EmailJsClient {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            http: Client::new(),
            endpoint: SEND_URL.to_string(),
            service_id: config.emailjs_service_id.clone(),
            template_id: config.emailjs_template_id.clone(),
            public_key: config.emailjs_public_key.clone(),
            configured: config.mail_configured(),
        }
    }

    fn request<'a>(&'a self, form: &'a ContactForm) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: TemplateParams {
                name: &form.name,
                email: &form.email,
                subject: &form.subject,
                message: &form.message,
            },
        }
    }
}

#[async_trait]
impl Mailer for EmailJsClient {
    async fn send(&self, form: &ContactForm) -> Result<(), ServiceError> {
        if !self.configured {
            return Err(ServiceError::NotConfigured("email delivery"));
        }

        let response = self
            .http
            .post(&self.endpoint)
            .json(&self.request(form))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // the API answers errors in plain text
            let body = response.text().await.unwrap_or_default();
            warn!(%status, %body, "email delivery rejected");
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        info!(subject = %form.subject, "contact email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ServiceConfig {
        ServiceConfig {
            emailjs_service_id: "service_abc".to_string(),
            emailjs_template_id: "template_xyz".to_string(),
            emailjs_public_key: "pk_123".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_request_body() {
        let client = EmailJsClient::new(&config());
        let form = ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Service Request: Data Analysis".to_string(),
            message: "Hi".to_string(),
        };
        let body = serde_json::to_value(client.request(&form)).expect("should serialize");
        assert_eq!(
            body,
            serde_json::json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk_123",
                "template_params": {
                    "name": "Ada",
                    "email": "ada@example.com",
                    "subject": "Service Request: Data Analysis",
                    "message": "Hi",
                }
            })
        );
    }

    #[tokio::test]
    async fn test_unconfigured_client_fails_without_request() {
        let client = EmailJsClient::new(&ServiceConfig::default());
        let res = client.send(&ContactForm::default()).await;
        assert_eq!(res, Err(ServiceError::NotConfigured("email delivery")));
    }

    #[tokio::test]
    async fn test_partial_config_fails_without_request() {
        let client = EmailJsClient::new(&ServiceConfig {
            emailjs_template_id: String::new(),
            ..config()
        });
        let res = client.send(&ContactForm::default()).await;
        assert_eq!(res, Err(ServiceError::NotConfigured("email delivery")));
    }
}
