//! Login, signup and newsletter forms
//!
//! [`AuthController`] owns the active tab and the form handlers. It talks to
//! an [`AccountApi`] and turns every outcome into a [`Toast`].

mod api;
mod tabs;

pub use api::{AccountApi, AuthResponse, AuthUser, MockAccountApi, DEMO_EMAIL, DEMO_PASSWORD};
pub use tabs::AuthTab;

use serde::Serialize;

use crate::catalog::Page;
use crate::notify::{Toast, LONG_TOAST};
use crate::storage::{KeyValueStore, USER_EMAIL_KEY};

const MISSING_FIELDS: &str = "Please fill in all fields";
const TERMS_REQUIRED: &str = "Please accept the terms and conditions";

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub accept_terms: bool,
}

/// What a form submission produced
#[derive(Debug, Clone, Serialize)]
pub struct AuthOutcome {
    pub toast: Toast,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Page to go to next, if any
    #[serde(skip)]
    pub redirect: Option<Page>,
}

impl AuthOutcome {
    fn rejected(message: &str) -> Self {
        Self {
            toast: Toast::error(message).lasting(LONG_TOAST),
            user: None,
            token: None,
            redirect: None,
        }
    }

    pub fn succeeded(&self) -> bool {
        !self.toast.is_error()
    }
}

pub struct AuthController<A: AccountApi, S: KeyValueStore> {
    api: A,
    store: S,
    active: AuthTab,
    login_email: Option<String>,
}

impl<A: AccountApi, S: KeyValueStore> AuthController<A, S> {
    /// Start on the login tab, prefilled with a remembered email if present
    pub fn new(api: A, store: S) -> Self {
        let login_email = store.get(USER_EMAIL_KEY).filter(|email| !email.is_empty());
        Self {
            api,
            store,
            active: AuthTab::default(),
            login_email,
        }
    }

    pub fn active_tab(&self) -> AuthTab {
        self.active
    }

    /// Switch tabs; exactly one is active at a time
    pub fn set_active_tab(&mut self, tab: AuthTab) {
        if self.active != tab {
            tracing::debug!(?tab, "switching auth tab");
        }
        self.active = tab;
    }

    /// Email to prefill in the login form
    pub fn login_email(&self) -> Option<&str> {
        self.login_email.as_deref()
    }

    pub async fn handle_login(&mut self, form: &LoginForm) -> AuthOutcome {
        if form.email.is_empty() || form.password.is_empty() {
            return AuthOutcome::rejected(MISSING_FIELDS);
        }

        let response = match self
            .api
            .login(&form.email, &form.password, form.remember_me)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "login request failed");
                return AuthOutcome::rejected("Login failed. Please try again.");
            }
        };

        if !response.success {
            return AuthOutcome::rejected(response.message.as_deref().unwrap_or("Login failed"));
        }

        if form.remember_me {
            if let Err(e) = self.store.set(USER_EMAIL_KEY, &form.email) {
                tracing::warn!(error = %e, "could not remember login email");
            }
        }
        tracing::info!(email = %form.email, "logged in");

        AuthOutcome {
            toast: Toast::success("Login successful! Redirecting...").lasting(LONG_TOAST),
            user: response.user,
            token: response.token,
            redirect: Some(Page::Home),
        }
    }

    pub async fn handle_signup(&mut self, form: &SignupForm) -> AuthOutcome {
        if form.name.is_empty() || form.email.is_empty() || form.password.is_empty() {
            return AuthOutcome::rejected(MISSING_FIELDS);
        }
        if !form.accept_terms {
            return AuthOutcome::rejected(TERMS_REQUIRED);
        }

        let response = match self
            .api
            .signup(&form.name, &form.email, &form.password)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "signup request failed");
                return AuthOutcome::rejected("Signup failed. Please try again.");
            }
        };

        if !response.success {
            return AuthOutcome::rejected(response.message.as_deref().unwrap_or("Signup failed"));
        }

        self.set_active_tab(AuthTab::Login);
        self.login_email = Some(form.email.clone());

        AuthOutcome {
            toast: Toast::success("Account created successfully! Please sign in.")
                .lasting(LONG_TOAST),
            user: response.user,
            token: None,
            redirect: None,
        }
    }

    /// Subscribe an email to the newsletter
    pub async fn subscribe(&self, email: &str) -> Toast {
        if email.is_empty() {
            return Toast::error(MISSING_FIELDS);
        }
        match self.api.subscribe_newsletter(email).await {
            Ok(()) => Toast::success("Subscribed!"),
            Err(e) => {
                tracing::error!(error = %e, "newsletter subscription failed");
                Toast::error("Subscription failed. Please try again.")
            }
        }
    }
}
