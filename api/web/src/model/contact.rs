use serde::Deserialize;
use validator::Validate;

pub const FIRST_NAME_MESSAGE: &str = "Please enter a valid first name (at least 2 characters)";
pub const LAST_NAME_MESSAGE: &str = "Please enter a valid last name (at least 2 characters)";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PASSWORD_MESSAGE: &str = "Password must be at least 8 characters";
pub const CONFIRM_PASSWORD_MESSAGE: &str = "Passwords do not match";

/// Rule order for displaying contact form errors.
pub const CONTACT_MESSAGES: [&str; 5] = [
    FIRST_NAME_MESSAGE,
    LAST_NAME_MESSAGE,
    EMAIL_MESSAGE,
    PASSWORD_MESSAGE,
    CONFIRM_PASSWORD_MESSAGE,
];

#[derive(Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactReqForm {
    #[validate(length(
        min = 2,
        message = "Please enter a valid first name (at least 2 characters)"
    ))]
    first_name: String,
    #[validate(length(
        min = 2,
        message = "Please enter a valid last name (at least 2 characters)"
    ))]
    last_name: String,
    #[validate(contains(pattern = "@", message = "Please enter a valid email address"))]
    email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    confirm_password: String,
    // Accepted as-is, neither validated nor stored.
    message: String,
}

impl ContactReqForm {
    /// Strips surrounding whitespace from the text fields. Passwords are kept verbatim.
    pub fn trimmed(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            message: self.message.trim().to_owned(),
            ..self
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
