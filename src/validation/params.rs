use crate::core::error::ValidationError;
use serde::Deserialize;

pub const EMAIL_ERROR: &str = "Enter a valid email.";
pub const PASSWORD_ERROR: &str = "Password must be at least 6 characters.";
pub const MIN_PASSWORD_LEN: usize = 6;

/// Extensions accepted by the upload page
pub const ALLOWED_EXTENSIONS: [&str; 6] = ["csv", "json", "txt", "tsv", "log", "xml"];

/// Login / registration form body
#[derive(Debug, Clone, Deserialize)]
pub struct AuthForm {
    #[serde(default)]
    pub mode: AuthMode,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub remember_me: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Register => "register",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AuthMode::Login => {
                "Login with an existing node operator account. Passwords are stored locally only."
            }
            AuthMode::Register => {
                "Create a local demo account. Credentials never leave this browser."
            }
        }
    }
}

/// Field-level problems with an auth form
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Form after client-side checks: email trimmed, password untouched
#[derive(Debug)]
pub struct ValidatedAuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl AuthForm {
    pub fn validate(self) -> Result<ValidatedAuthForm, FieldErrors> {
        let email = self.email.trim().to_string();
        let mut errors = FieldErrors::default();

        if email.is_empty() || !email.contains('@') {
            errors.email = Some(EMAIL_ERROR);
        }

        if self.password.encode_utf16().count() < MIN_PASSWORD_LEN {
            errors.password = Some(PASSWORD_ERROR);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidatedAuthForm {
            mode: self.mode,
            email,
            password: self.password,
            remember_me: self.remember_me,
        })
    }
}

/// Check a file name against the upload allow-list (case-insensitive)
pub fn validate_data_file_name(file_name: &str) -> Result<(), ValidationError> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .ok_or(ValidationError::InvalidFileType)?;

    if ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFileType)
    }
}
