use colored::Colorize;

use super::common::{prompt_line, prompt_password, value_or_prompt, Context};
use crate::account::{AuthController, AuthOutcome, LoginForm, MockAccountApi, SignupForm};
use crate::cli::args::{LoginArgs, SignupArgs, SubscribeArgs};
use crate::cli::OutputFormat;
use crate::error::{AktaraError, Result};
use crate::output;
use crate::storage::FileStore;

fn controller(ctx: &Context) -> AuthController<MockAccountApi, FileStore> {
    AuthController::new(MockAccountApi::new(), ctx.store())
}

/// Print the outcome, or turn a refusal into an error
fn finish(ctx: &Context, outcome: &AuthOutcome) -> Result<String> {
    ctx.announce(&outcome.toast);
    if !outcome.succeeded() {
        return Err(AktaraError::Rejected(outcome.toast.message.clone()));
    }
    output::format_auth(outcome, ctx.format)
}

/// Handle the login command
pub async fn login(ctx: &Context, args: &LoginArgs) -> Result<String> {
    let mut auth = controller(ctx);

    let email = match (&args.email, auth.login_email()) {
        (Some(email), _) => email.trim().to_string(),
        (None, Some(remembered)) => {
            let remembered = remembered.to_string();
            let typed = prompt_line(&format!("Email [{remembered}]"))?;
            if typed.is_empty() {
                remembered
            } else {
                typed
            }
        }
        (None, None) => prompt_line("Email")?,
    };
    let password = prompt_password("Password", args.show_password)?;

    let outcome = auth
        .handle_login(&LoginForm {
            email,
            password,
            remember_me: args.remember,
        })
        .await;

    let mut formatted = finish(ctx, &outcome)?;
    if ctx.format == OutputFormat::Pretty {
        if let Some(page) = outcome.redirect {
            formatted.push_str(&format!("\n{} {}", "Continue at:".cyan(), ctx.links()?.url(page)?));
        }
    }
    Ok(formatted)
}

/// Handle the signup command
pub async fn signup(ctx: &Context, args: &SignupArgs) -> Result<String> {
    let mut auth = controller(ctx);

    let name = value_or_prompt(args.name.as_deref(), "Full name")?;
    let email = value_or_prompt(args.email.as_deref(), "Email")?;
    let password = prompt_password("Password", args.show_password)?;

    let outcome = auth
        .handle_signup(&SignupForm {
            name,
            email,
            password,
            accept_terms: args.accept_terms,
        })
        .await;

    let mut formatted = finish(ctx, &outcome)?;
    if ctx.format == OutputFormat::Pretty {
        if let Some(email) = auth.login_email() {
            formatted.push_str(&format!(
                "\n{} aktara login --email {}",
                "Next:".cyan(),
                email
            ));
        }
    }
    Ok(formatted)
}

/// Handle the subscribe command
pub async fn subscribe(ctx: &Context, args: &SubscribeArgs) -> Result<String> {
    let toast = controller(ctx).subscribe(args.email.trim()).await;
    ctx.announce(&toast);
    if toast.is_error() {
        return Err(AktaraError::Rejected(toast.message));
    }
    output::format_toast(&toast, ctx.format)
}
