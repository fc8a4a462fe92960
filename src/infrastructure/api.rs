use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;

use crate::domain::{AuthResponse, SignInRequest, SignUpRequest};

const NETWORK_ERROR_MESSAGE: &str = "An error occurred. Please try again later.";
const AUTH_FAILED_MESSAGE: &str = "Authentication failed. Please try again.";
const POST_SIGNUP_MESSAGE: &str = "Login after sign-up failed. Please try signing in.";

/// Blocking client for the authentication endpoints.
///
/// Failures are returned as ready-to-display strings: transport problems map
/// to a generic retry message, rejected credentials to whatever the server
/// said (normalized through [`AuthResponse`]). There is no automatic retry.
pub struct AuthClient {
    base_url: String,
    http: Client,
}

impl AuthClient {
    pub fn new(base_url: &str) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST <base>/signin`. Returns the access token on success.
    pub fn sign_in(&self, request: &SignInRequest) -> Result<String, String> {
        self.sign_in_with_fallback(request, AUTH_FAILED_MESSAGE)
    }

    /// `POST <base>/signup`, then an immediate sign-in with the same
    /// credentials so a fresh account lands in an authenticated session.
    pub fn sign_up_and_sign_in(&self, request: &SignUpRequest) -> Result<String, String> {
        self.sign_up(request)?;
        let follow_up = SignInRequest {
            username_or_email: request.email.clone(),
            password: request.password.clone(),
        };
        self.sign_in_with_fallback(&follow_up, POST_SIGNUP_MESSAGE)
    }

    /// `POST <base>/signup`.
    pub fn sign_up(&self, request: &SignUpRequest) -> Result<(), String> {
        let (ok, body) = self.post("signup", request)?;
        if ok {
            Ok(())
        } else {
            Err(body.failure_message(AUTH_FAILED_MESSAGE))
        }
    }

    fn sign_in_with_fallback(
        &self,
        request: &SignInRequest,
        fallback: &str,
    ) -> Result<String, String> {
        let (ok, body) = self.post("signin", request)?;
        if ok {
            // A 2xx without a token is still a failure.
            body.token()
                .map(str::to_string)
                .ok_or_else(|| body.failure_message(fallback))
        } else {
            Err(body.failure_message(fallback))
        }
    }

    fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<(bool, AuthResponse), String> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self.http.post(&url).json(body).send().map_err(|e| {
            log::warn!("request to {} failed: {}", url, e);
            NETWORK_ERROR_MESSAGE.to_string()
        })?;
        let ok = response.status().is_success();
        // Non-JSON bodies (proxies, crash pages) fall through to the fallback text.
        let body: AuthResponse = response.json().unwrap_or_default();
        Ok((ok, body))
    }
}
