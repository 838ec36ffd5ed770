use crate::ScenarioError;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE, HOST},
    Client, Method, RequestBuilder,
};
use url::Url;

pub const SYSTEM_URL: &str =
    "http://linuxtips-ecs-cluster-ingress-1836242530.us-east-1.elb.amazonaws.com/system";
pub const SYSTEM_PATH: &str = "/system";
pub const SYSTEM_HOST: &str = "chip.linuxtips.demo";
pub const SYSTEM_CONTENT_TYPE: &str = "application/json";

/// The single request the scenario sends. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTemplate {
    url: Url,
    method: Method,
    headers: HeaderMap,
}

impl Default for RequestTemplate {
    fn default() -> Self {
        Self::system()
    }
}

impl RequestTemplate {
    /// `GET /system` on the ingress, routed by the `Host` header.
    pub fn system() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(SYSTEM_CONTENT_TYPE));
        headers.insert(HOST, HeaderValue::from_static(SYSTEM_HOST));

        Self {
            url: Url::parse(SYSTEM_URL).expect("SYSTEM_URL is a valid URL"),
            method: Method::GET,
            headers,
        }
    }

    /// Same request aimed at another server. Only scheme, host and port are taken from `base`;
    /// the path stays `/system` and the headers, `Host` included, are unchanged.
    pub fn with_base_url(&self, base: &str) -> Result<Self, ScenarioError> {
        let mut url = Url::parse(base)?;
        if url.cannot_be_a_base() {
            return Err(ScenarioError::InvalidBaseUrl(base.to_string()));
        }
        url.set_path(SYSTEM_PATH);
        url.set_query(None);
        url.set_fragment(None);

        Ok(Self {
            url,
            method: self.method.clone(),
            headers: self.headers.clone(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn build(&self, client: &Client) -> RequestBuilder {
        client
            .request(self.method.clone(), self.url.clone())
            .headers(self.headers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_template() {
        let template = RequestTemplate::system();

        assert_eq!(template.method(), Method::GET);
        assert_eq!(template.url().as_str(), SYSTEM_URL);
        assert_eq!(template.headers().len(), 2);
        assert_eq!(template.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(template.headers()[HOST], "chip.linuxtips.demo");
        assert_eq!(template, RequestTemplate::default());
    }

    #[test]
    fn test_with_base_url() {
        let template = RequestTemplate::system()
            .with_base_url("http://127.0.0.1:3002/ignored?q=1")
            .unwrap();

        assert_eq!(template.url().as_str(), "http://127.0.0.1:3002/system");
        assert_eq!(template.method(), Method::GET);
        assert_eq!(template.headers(), RequestTemplate::system().headers());
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            RequestTemplate::system().with_base_url("mailto:ops@linuxtips.demo"),
            Err(ScenarioError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            RequestTemplate::system().with_base_url("not a url"),
            Err(ScenarioError::Url(_))
        ));
    }

    #[test]
    fn test_build_is_constant() {
        let client = Client::new();
        let template = RequestTemplate::system();

        let first = template.build(&client).build().unwrap();
        let second = template.build(&client).build().unwrap();

        for request in [&first, &second] {
            assert_eq!(request.method(), Method::GET);
            assert_eq!(request.url().as_str(), SYSTEM_URL);
            assert_eq!(request.headers()[HOST], SYSTEM_HOST);
            assert_eq!(request.headers()[CONTENT_TYPE], SYSTEM_CONTENT_TYPE);
            assert!(request.body().is_none());
        }
    }
}
