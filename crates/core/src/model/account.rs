use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Client-side validation failures on the account forms.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccountError {
    #[error("Please enter a valid email")]
    MissingEmail,
    #[error("Not a valid email")]
    InvalidEmail,
    #[error("Not a valid username")]
    MissingUsername,
    #[error("Please enter a password")]
    MissingPassword,
}

/// Raw sign-in form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInDraft {
    pub email: String,
    pub password: String,
}

/// Raw create-profile form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateAccountDraft {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Validated sign-in credentials.
#[derive(Debug)]
pub struct SignIn {
    email: String,
    password: SecretString,
}

/// Validated account creation request.
#[derive(Debug)]
pub struct CreateAccount {
    username: String,
    email: String,
    password: SecretString,
}

impl SignInDraft {
    /// Validate without consuming the form input.
    ///
    /// # Errors
    ///
    /// Returns `AccountError` for the first missing or malformed field,
    /// checking the password before the email.
    pub fn validate(&self) -> Result<SignIn, AccountError> {
        let password = required_password(&self.password)?;
        let email = required_email(&self.email, AccountError::MissingEmail)?;
        Ok(SignIn { email, password })
    }
}

impl CreateAccountDraft {
    /// Validate without consuming the form input.
    ///
    /// # Errors
    ///
    /// Returns `AccountError` for the first missing or malformed field,
    /// checking email, username, then password.
    pub fn validate(&self) -> Result<CreateAccount, AccountError> {
        let email = required_email(&self.email, AccountError::InvalidEmail)?;
        let username = self.username.trim();
        if username.is_empty() {
            return Err(AccountError::MissingUsername);
        }
        let password = required_password(&self.password)?;
        Ok(CreateAccount {
            username: username.to_string(),
            email,
            password,
        })
    }
}

impl SignIn {
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

impl CreateAccount {
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

fn required_email(raw: &str, missing: AccountError) -> Result<String, AccountError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(missing);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email.to_string()),
        _ => Err(AccountError::InvalidEmail),
    }
}

// Passwords are taken verbatim; only emptiness is rejected.
fn required_password(raw: &str) -> Result<SecretString, AccountError> {
    if raw.is_empty() {
        return Err(AccountError::MissingPassword);
    }
    Ok(SecretString::from(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_checks_password_first() {
        let draft = SignInDraft::default();
        assert_eq!(draft.validate().unwrap_err(), AccountError::MissingPassword);

        let draft = SignInDraft {
            email: "  ".into(),
            password: "hunter2".into(),
        };
        assert_eq!(draft.validate().unwrap_err(), AccountError::MissingEmail);
    }

    #[test]
    fn create_account_checks_email_username_password() {
        let mut draft = CreateAccountDraft::default();
        assert_eq!(draft.validate().unwrap_err(), AccountError::InvalidEmail);
        draft.email = "me@example.com".into();
        assert_eq!(draft.validate().unwrap_err(), AccountError::MissingUsername);
        draft.username = " sam ".into();
        assert_eq!(draft.validate().unwrap_err(), AccountError::MissingPassword);
        draft.password = "pw".into();

        let valid = draft.validate().unwrap();
        assert_eq!(valid.username(), "sam");
        assert_eq!(valid.password(), "pw");
        assert_eq!(draft.username, " sam ", "draft is left untouched");
    }

    #[test]
    fn debug_output_hides_password() {
        let valid = SignInDraft {
            email: "me@example.com".into(),
            password: "hunter2".into(),
        }
        .validate()
        .unwrap();
        assert!(!format!("{valid:?}").contains("hunter2"));
    }
}
