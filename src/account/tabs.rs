use serde::Serialize;

/// The two mutually exclusive auth forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

impl AuthTab {
    pub fn title(self) -> &'static str {
        match self {
            AuthTab::Login => "Sign In",
            AuthTab::Signup => "Create Account",
        }
    }

    pub fn other(self) -> Self {
        match self {
            AuthTab::Login => AuthTab::Signup,
            AuthTab::Signup => AuthTab::Login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_login() {
        assert_eq!(AuthTab::default(), AuthTab::Login);
    }

    #[test]
    fn test_other_flips() {
        assert_eq!(AuthTab::Login.other(), AuthTab::Signup);
        assert_eq!(AuthTab::Signup.other(), AuthTab::Login);
    }
}
