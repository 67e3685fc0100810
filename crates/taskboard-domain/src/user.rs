use serde::{Deserialize, Serialize};
use std::fmt;
use taskboard_core::TaskboardError;
use thiserror::Error;
use uuid::Uuid;

pub const PASSWORD_MIN_CHARS: usize = 10;
pub const PASSWORD_MAX_CHARS: usize = 64;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordViolation {
    #[error("Password length couldn't be less than 10 characters")]
    TooShort,

    #[error("Password length couldn't be greater than 64 characters")]
    TooLong,

    #[error("Repeated password is not equal to new password!")]
    Mismatch,

    #[error("New password couldn't be the same as current!")]
    SameAsOld,
}

impl From<PasswordViolation> for TaskboardError {
    fn from(violation: PasswordViolation) -> Self {
        TaskboardError::LocalValidation(violation.to_string())
    }
}

pub fn check_password_length(password: &str) -> Result<(), PasswordViolation> {
    let len = password.chars().count();
    if len < PASSWORD_MIN_CHARS {
        Err(PasswordViolation::TooShort)
    } else if len > PASSWORD_MAX_CHARS {
        Err(PasswordViolation::TooLong)
    } else {
        Ok(())
    }
}

/// The change-password form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
    pub repeated_password: String,
}

impl PasswordChange {
    pub fn new(
        old_password: impl Into<String>,
        new_password: impl Into<String>,
        repeated_password: impl Into<String>,
    ) -> Self {
        Self {
            old_password: old_password.into(),
            new_password: new_password.into(),
            repeated_password: repeated_password.into(),
        }
    }

    /// Length first, then the repeat, then reuse of the old password.
    pub fn validate(&self) -> Result<(), PasswordViolation> {
        check_password_length(&self.new_password)?;
        if self.new_password != self.repeated_password {
            return Err(PasswordViolation::Mismatch);
        }
        if self.new_password == self.old_password {
            return Err(PasswordViolation::SameAsOld);
        }
        Ok(())
    }

    /// Reset after a rejected attempt. The old password stays.
    pub fn clear_new_passwords(&mut self) {
        self.new_password.clear();
        self.repeated_password.clear();
    }

    pub fn clear(&mut self) {
        self.old_password.clear();
        self.clear_new_passwords();
    }
}

impl fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordChange")
            .field("old_password", &"***")
            .field("new_password", &"***")
            .field("repeated_password", &"***")
            .finish()
    }
}

/// The registration form on the landing page.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), PasswordViolation> {
        check_password_length(&self.password)
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}
