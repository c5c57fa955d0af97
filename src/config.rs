use std::sync::LazyLock;

/// Credentials of the hosted services, read once from the environment.
pub static SERVICE_CONFIG: LazyLock<ServiceConfig> =
    LazyLock::new(|| ServiceConfig::from_lookup(|key| std::env::var(key).ok()));

const PLACEHOLDER_URL: &str = "https://placeholder-url.supabase.co";
const PLACEHOLDER_KEY: &str = "placeholder-key";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub emailjs_service_id: String,
    pub emailjs_template_id: String,
    pub emailjs_public_key: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            emailjs_service_id: String::new(),
            emailjs_template_id: String::new(),
            emailjs_public_key: String::new(),
            supabase_url: PLACEHOLDER_URL.into(),
            supabase_anon_key: PLACEHOLDER_KEY.into(),
        }
    }
}

impl ServiceConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(v) = get("EMAILJS_SERVICE_ID") {
            config.emailjs_service_id = v;
        }
        if let Some(v) = get("EMAILJS_TEMPLATE_ID") {
            config.emailjs_template_id = v;
        }
        if let Some(v) = get("EMAILJS_PUBLIC_KEY") {
            config.emailjs_public_key = v;
        }
        if let Some(v) = get("SUPABASE_URL") {
            config.supabase_url = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = get("SUPABASE_ANON_KEY") {
            config.supabase_anon_key = v;
        }

        config
    }

    pub fn mail_configured(&self) -> bool {
        !self.emailjs_service_id.is_empty()
            && !self.emailjs_template_id.is_empty()
            && !self.emailjs_public_key.is_empty()
    }

    pub fn store_configured(&self) -> bool {
        self.supabase_url != PLACEHOLDER_URL && self.supabase_anon_key != PLACEHOLDER_KEY
    }

    pub fn warn_if_incomplete(&self) {
        if !self.mail_configured() {
            log::warn!(
                "EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID and EMAILJS_PUBLIC_KEY must be set; the contact form will not deliver messages"
            );
        }
        if !self.store_configured() {
            log::warn!(
                "record store initialized with placeholder values; set SUPABASE_URL and SUPABASE_ANON_KEY for newsletter signups and message logging"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_placeholders() {
        let config = ServiceConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServiceConfig::default());
        assert!(!config.mail_configured());
        assert!(!config.store_configured());
    }

    #[test]
    fn test_reads_all_keys() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("EMAILJS_SERVICE_ID", "service_abc"),
            ("EMAILJS_TEMPLATE_ID", "template_xyz"),
            ("EMAILJS_PUBLIC_KEY", "pk_123"),
            ("SUPABASE_URL", "https://demo.supabase.co/"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]));
        assert_eq!(config.emailjs_service_id, "service_abc");
        assert_eq!(config.supabase_url, "https://demo.supabase.co");
        assert!(config.mail_configured());
        assert!(config.store_configured());
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "   "),
            ("EMAILJS_SERVICE_ID", ""),
        ]));
        assert_eq!(config, ServiceConfig::default());
    }
}
