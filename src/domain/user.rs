use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, Identifiable};

/// Identity of the signed-in person. Only display data is kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Identifiable for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for User {
    fn display_label(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }
}

/// Auth form submission. The password is accepted and then dropped; nothing
/// verifies it.
#[derive(Clone, Default)]
pub struct Credentials {
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(name: Option<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name,
            email: email.into(),
            password: password.into(),
        }
    }

    /// The supplied name, or the local part of the email when none was given.
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self
                .email
                .trim()
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
