use crate::core::error::StorageError;
use crate::core::state::AppState;
use crate::models::session::SessionRecord;
use crate::models::views::{AuthOutcome, AuthPageView};
use crate::pages::wallet;
use crate::stores::user_store::LoginFailure;
use crate::utils::time::current_timestamp_millis;
use crate::validation::params::{AuthForm, AuthMode};
use tracing::{info, warn};

pub const DASHBOARD_PATH: &str = "/dashboard";
pub const LOGIN_PATH: &str = "/login";

pub const ACCOUNT_EXISTS: &str = "Account already exists. Switch to Login to continue.";
pub const NO_ACCOUNT: &str = "No account found for this email. Switch to Create Account.";
pub const WRONG_PASSWORD: &str = "Incorrect password.";

pub fn page_view(mode: AuthMode) -> AuthPageView {
    AuthPageView {
        mode: mode.as_str().to_string(),
        meta: mode.description().to_string(),
    }
}

fn rejected(message: &str) -> AuthOutcome {
    AuthOutcome {
        auth_error: Some(message.to_string()),
        ..Default::default()
    }
}

/// Validate the form, register or check credentials, then open a session
///
/// Nothing is written to the session unless every check passes.
pub async fn submit(state: &AppState, form: AuthForm) -> Result<AuthOutcome, StorageError> {
    let form = match form.validate() {
        Ok(form) => form,
        Err(errors) => {
            return Ok(AuthOutcome {
                email_invalid: errors.email.is_some(),
                password_invalid: errors.password.is_some(),
                email_error: errors.email.map(str::to_string),
                password_error: errors.password.map(str::to_string),
                ..Default::default()
            });
        }
    };

    match form.mode {
        AuthMode::Register => {
            if !state.users.register(&form.email, &form.password, current_timestamp_millis())? {
                return Ok(rejected(ACCOUNT_EXISTS));
            }
            info!(email = %form.email, "Local account created");
        }
        AuthMode::Login => match state.users.check_credentials(&form.email, &form.password)? {
            Ok(()) => {}
            Err(LoginFailure::UnknownEmail) => return Ok(rejected(NO_ACCOUNT)),
            Err(LoginFailure::WrongPassword) => {
                return Ok(AuthOutcome {
                    password_invalid: true,
                    ..rejected(WRONG_PASSWORD)
                });
            }
        },
    }

    let wallet = state.session.lock().await.wallet.clone();
    let record = SessionRecord::new(form.email, wallet, current_timestamp_millis());
    state.sessions.save(&record, form.remember_me)?;

    info!(
        email = %record.email,
        remember_me = form.remember_me,
        "Session opened"
    );

    Ok(AuthOutcome {
        success: true,
        redirect: Some(DASHBOARD_PATH.to_string()),
        ..Default::default()
    })
}

/// Connect the wallet and go to the dashboard whether or not that worked
pub async fn web3_login(state: &AppState) -> AuthOutcome {
    if let Err(e) = wallet::connect(state).await {
        warn!(error = %e, "Wallet login could not connect");
    }

    AuthOutcome {
        success: true,
        redirect: Some(DASHBOARD_PATH.to_string()),
        ..Default::default()
    }
}
