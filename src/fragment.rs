use url::form_urlencoded;

use crate::sections::Section;

pub const SERVICE_KEY: &str = "service";

/// The visible URL fragment, e.g. `#contact?service=Data+Analysis`.
///
/// The fragment is the only place a service request lives between the hero
/// cards and the contact form, so a reload or a late-mounting form still
/// sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pub section: String,
    pub service: Option<String>,
}

impl Fragment {
    /// Parses `location.hash`. The leading `#` is optional.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('#').unwrap_or(raw);
        let (section, query) = match raw.split_once('?') {
            Some((section, query)) => (section, Some(query)),
            None => (raw, None),
        };
        let service = query
            .and_then(|q| {
                form_urlencoded::parse(q.as_bytes())
                    .find(|(k, _)| k == SERVICE_KEY)
                    .map(|(_, v)| v.trim().to_string())
            })
            .filter(|s| !s.is_empty());
        Self {
            section: section.to_string(),
            service,
        }
    }

    pub fn service_request(service: &str) -> Self {
        Self {
            section: Section::Contact.id().to_string(),
            service: Some(service.to_string()),
        }
    }

    pub fn to_hash(&self) -> String {
        match &self.service {
            Some(service) => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair(SERVICE_KEY, service)
                    .finish();
                format!("#{}?{}", self.section, query)
            }
            None => format!("#{}", self.section),
        }
    }
}

/// Returns the fragment with its `service` parameter removed, or `None` if
/// it carried none. A blank `service=` still counts as present.
pub fn strip_service_request(raw: &str) -> Option<String> {
    let raw = raw.strip_prefix('#').unwrap_or(raw);
    let (section, query) = raw.split_once('?')?;
    let pairs = form_urlencoded::parse(query.as_bytes()).collect::<Vec<_>>();
    if !pairs.iter().any(|(k, _)| k == SERVICE_KEY) {
        return None;
    }

    let rest = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().filter(|(k, _)| k != SERVICE_KEY))
        .finish();
    if rest.is_empty() {
        Some(format!("#{section}"))
    } else {
        Some(format!("#{section}?{rest}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_section() {
        let f = Fragment::parse("#projects");
        assert_eq!(f.section, "projects");
        assert_eq!(f.service, None);

        let f = Fragment::parse("");
        assert_eq!(f, Fragment::default());
    }

    #[test]
    fn test_parse_service_request() {
        let f = Fragment::parse("#contact?service=Data%20Analysis");
        assert_eq!(f.section, "contact");
        assert_eq!(f.service.as_deref(), Some("Data Analysis"));

        // form encoding and no leading '#'
        let f = Fragment::parse("contact?service=ETL+Pipelines&utm=x");
        assert_eq!(f.service.as_deref(), Some("ETL Pipelines"));
    }

    #[test]
    fn test_blank_service_is_ignored() {
        assert_eq!(Fragment::parse("#contact?service=").service, None);
        assert_eq!(Fragment::parse("#contact?service=%20%20").service, None);
        assert_eq!(Fragment::parse("#contact?other=1").service, None);
    }

    #[test]
    fn test_service_request_hash() {
        let hash = Fragment::service_request("Business Intelligence & BI").to_hash();
        assert_eq!(hash, "#contact?service=Business+Intelligence+%26+BI");
        assert_eq!(
            Fragment::parse(&hash).service.as_deref(),
            Some("Business Intelligence & BI")
        );
    }

    #[test]
    fn test_strip_service_request() {
        assert_eq!(
            strip_service_request("#contact?service=Data+Analysis").as_deref(),
            Some("#contact")
        );
        assert_eq!(
            strip_service_request("#contact?service=").as_deref(),
            Some("#contact")
        );
        assert_eq!(
            strip_service_request("#contact?service=%20").as_deref(),
            Some("#contact")
        );
        assert_eq!(
            strip_service_request("#contact?utm=x&service=ETL").as_deref(),
            Some("#contact?utm=x")
        );
        assert_eq!(strip_service_request("#contact"), None);
        assert_eq!(strip_service_request("#contact?utm=x"), None);
        assert_eq!(strip_service_request(""), None);
    }
}
