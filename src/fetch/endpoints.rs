use crate::config::SearchConfig;
use url::Url;

/// Builds request URLs for the results page and autocomplete endpoints
#[derive(Debug, Clone)]
pub struct SearchEndpoints {
    serp_base: Url,
    autocomplete_base: Url,
    language: String,
}

impl SearchEndpoints {
    pub fn new(config: &SearchConfig) -> Result<Self, url::ParseError> {
        Ok(Self {
            serp_base: Url::parse(&config.serp_base_url)?,
            autocomplete_base: Url::parse(&config.autocomplete_base_url)?,
            language: config.language.clone(),
        })
    }

    /// Results page URL asking for the top `depth` results
    pub fn serp_url(&self, query: &str, depth: usize) -> String {
        let mut url = self.serp_base.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("num", &depth.to_string())
            .append_pair("hl", &self.language);
        url.to_string()
    }

    /// Autocomplete URL; `client=chrome` selects the JSON array response
    pub fn autocomplete_url(&self, query: &str) -> String {
        let mut url = self.autocomplete_base.clone();
        url.query_pairs_mut()
            .append_pair("client", "chrome")
            .append_pair("q", query)
            .append_pair("hl", &self.language);
        url.to_string()
    }

    /// Origin of the results page, sent as `Referer` on SERP requests
    pub fn serp_origin(&self) -> String {
        format!("{}/", self.serp_base.origin().ascii_serialization())
    }
}
