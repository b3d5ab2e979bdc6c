use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEMO_EMAIL: &str = "demo@aktara.com";
pub const DEMO_PASSWORD: &str = "demo123";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub email: String,
    pub name: String,
}

/// Response of the login and signup endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthResponse {
    fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: Some(message.to_string()),
            user: None,
            token: None,
        }
    }
}

/// Account endpoints of the storefront
#[async_trait]
pub trait AccountApi: Send + Sync {
    async fn login(&self, email: &str, password: &str, remember_me: bool) -> Result<AuthResponse>;

    async fn signup(&self, name: &str, email: &str, password: &str) -> Result<AuthResponse>;

    async fn subscribe_newsletter(&self, email: &str) -> Result<()>;
}

/// Canned account API with simulated network latency
///
/// Login accepts only the demo credentials; signup accepts any email
/// containing `@`; newsletter subscription always succeeds.
#[derive(Debug, Clone)]
pub struct MockAccountApi {
    login_delay: Duration,
    signup_delay: Duration,
    newsletter_delay: Duration,
}

impl MockAccountApi {
    pub fn new() -> Self {
        Self {
            login_delay: Duration::from_millis(1000),
            signup_delay: Duration::from_millis(1200),
            newsletter_delay: Duration::from_millis(2000),
        }
    }

    /// No simulated latency
    pub fn instant() -> Self {
        Self {
            login_delay: Duration::ZERO,
            signup_delay: Duration::ZERO,
            newsletter_delay: Duration::ZERO,
        }
    }
}

impl Default for MockAccountApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountApi for MockAccountApi {
    async fn login(&self, email: &str, password: &str, remember_me: bool) -> Result<AuthResponse> {
        tokio::time::sleep(self.login_delay).await;
        tracing::debug!(email, remember_me, "mock login");

        if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            return Ok(AuthResponse {
                success: true,
                message: Some("Login successful".to_string()),
                user: Some(AuthUser {
                    email: email.to_string(),
                    name: "Demo User".to_string(),
                }),
                token: Some("mock-jwt-token".to_string()),
            });
        }

        Ok(AuthResponse::failure("Invalid email or password"))
    }

    async fn signup(&self, name: &str, email: &str, _password: &str) -> Result<AuthResponse> {
        tokio::time::sleep(self.signup_delay).await;
        tracing::debug!(name, email, "mock signup");

        if email.contains('@') {
            return Ok(AuthResponse {
                success: true,
                message: Some("Account created successfully".to_string()),
                user: Some(AuthUser {
                    email: email.to_string(),
                    name: name.to_string(),
                }),
                token: None,
            });
        }

        Ok(AuthResponse::failure("Invalid email format"))
    }

    async fn subscribe_newsletter(&self, email: &str) -> Result<()> {
        tokio::time::sleep(self.newsletter_delay).await;
        tracing::info!(email, "newsletter subscription");
        Ok(())
    }
}
