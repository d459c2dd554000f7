//! Request target and header construction.
//!
//! Golf Genius authenticates reads with the API key embedded in the URL path
//! (`{base}/{prefix}/{key}/{endpoint}`) and writes with a bearer token
//! (`{base}/{prefix}/{endpoint}` + `Authorization: Bearer {key}`).

use std::str::FromStr;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, Url};
use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};

/// How the credential travels to the upstream API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// Key in the path for GET, bearer header for every other verb.
    #[default]
    PathKey,
    /// Bearer header for every verb; the key never appears in the path.
    Bearer,
}

impl FromStr for AuthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "path_key" | "path" | "split" => Ok(Self::PathKey),
            "bearer" | "header" => Ok(Self::Bearer),
            other => Err(format!("Unknown auth mode: {other}")),
        }
    }
}

/// Builds request targets and auth headers for a single credential.
#[derive(Clone)]
pub struct AuthRouter {
    base_url: String,
    api_prefix: String,
    credential: String,
    mode: AuthMode,
}

impl AuthRouter {
    pub fn new(
        base_url: impl Into<String>,
        api_prefix: impl Into<String>,
        credential: impl Into<String>,
        mode: AuthMode,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_prefix: api_prefix.into().trim_matches('/').to_string(),
            credential: credential.into(),
            mode,
        }
    }

    /// Whether the credential is embedded in the path for this method.
    pub fn key_in_path(&self, method: &Method) -> bool {
        self.mode == AuthMode::PathKey && *method == Method::GET
    }

    /// Whether the bearer headers must be attached for this method.
    pub fn needs_auth_headers(&self, method: &Method) -> bool {
        !self.key_in_path(method)
    }

    /// Resolve the full URL for `endpoint`.
    pub fn build_target(&self, method: &Method, endpoint: &str) -> ApiResult<Url> {
        let endpoint = endpoint.trim_start_matches('/');
        let mut target = self.base_url.clone();
        for segment in [self.api_prefix.as_str(), self.path_key(method), endpoint] {
            if !segment.is_empty() {
                target.push('/');
                target.push_str(segment);
            }
        }

        Url::parse(&target)
            .map_err(|e| ApiError::unexpected(format!("Invalid request URL for {endpoint}: {e}")))
    }

    /// `Authorization: Bearer {key}` plus a JSON content type.
    pub fn write_headers(&self) -> ApiResult<HeaderMap> {
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", self.credential))
            .map_err(|_| ApiError::unexpected("API key contains invalid header characters"))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    fn path_key(&self, method: &Method) -> &str {
        if self.key_in_path(method) {
            &self.credential
        } else {
            ""
        }
    }
}

impl std::fmt::Debug for AuthRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthRouter")
            .field("base_url", &self.base_url)
            .field("api_prefix", &self.api_prefix)
            .field("credential", &"[REDACTED]")
            .field("mode", &self.mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "test-api-key-12345";
    const BASE: &str = "https://www.golfgenius.com";

    fn router(mode: AuthMode) -> AuthRouter {
        AuthRouter::new(BASE, "api_v2", KEY, mode)
    }

    #[test]
    fn test_get_target_embeds_key_after_prefix() {
        let url = router(AuthMode::PathKey)
            .build_target(&Method::GET, "/seasons")
            .unwrap();
        assert_eq!(url.as_str(), format!("{BASE}/api_v2/{KEY}/seasons"));
    }

    #[test]
    fn test_write_targets_exclude_key() {
        let router = router(AuthMode::PathKey);
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
            let url = router.build_target(&method, "/events/42").unwrap();
            assert_eq!(url.as_str(), format!("{BASE}/api_v2/events/42"));
            assert!(!url.path().contains(KEY));
        }
    }

    #[test]
    fn test_strips_leading_slashes() {
        let url = router(AuthMode::PathKey)
            .build_target(&Method::GET, "///seasons")
            .unwrap();
        assert_eq!(url.path(), format!("/api_v2/{KEY}/seasons"));
    }

    #[test]
    fn test_base_and_prefix_slashes_normalized() {
        let router = AuthRouter::new(format!("{BASE}/"), "/api_v2/", KEY, AuthMode::PathKey);
        let url = router.build_target(&Method::POST, "events").unwrap();
        assert_eq!(url.as_str(), format!("{BASE}/api_v2/events"));
    }

    #[test]
    fn test_write_headers() {
        let headers = router(AuthMode::PathKey).write_headers().unwrap();
        assert_eq!(
            headers.get(AUTHORIZATION).unwrap().to_str().unwrap(),
            format!("Bearer {KEY}")
        );
        assert_eq!(
            headers.get(CONTENT_TYPE).unwrap().to_str().unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_bearer_mode_never_embeds_key() {
        let router = router(AuthMode::Bearer);
        let url = router.build_target(&Method::GET, "seasons").unwrap();
        assert_eq!(url.as_str(), format!("{BASE}/api_v2/seasons"));
        assert!(router.needs_auth_headers(&Method::GET));
    }

    #[test]
    fn test_get_needs_no_headers_in_path_mode() {
        let router = router(AuthMode::PathKey);
        assert!(!router.needs_auth_headers(&Method::GET));
        assert!(router.needs_auth_headers(&Method::POST));
    }

    #[test]
    fn test_auth_mode_from_str() {
        assert_eq!("path_key".parse::<AuthMode>(), Ok(AuthMode::PathKey));
        assert_eq!("Bearer".parse::<AuthMode>(), Ok(AuthMode::Bearer));
        assert!("cookie".parse::<AuthMode>().is_err());
    }

    #[test]
    fn test_debug_redacts_credential() {
        let debug_str = format!("{:?}", router(AuthMode::PathKey));
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains(KEY));
    }
}
