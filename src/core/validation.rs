//! Field-level validation for the transaction and auth forms.
//!
//! Validators never fail: they return a [`FieldErrors`] map which is empty
//! when the input may be submitted.

use std::{collections::BTreeMap, fmt};

use crate::domain::{AuthMode, Credentials, TransactionDraft, TransactionKind};

const AMOUNT_MESSAGE: &str = "Please enter a valid amount";
const CATEGORY_MESSAGE: &str = "Please select a category";
const DESCRIPTION_MESSAGE: &str = "Please enter a description";
const NAME_MESSAGE: &str = "Please enter your name";
const EMAIL_MESSAGE: &str = "Please enter your email";
const PASSWORD_MESSAGE: &str = "Please enter a password";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Amount,
    Category,
    Description,
    Name,
    Email,
    Password,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Amount => "amount",
            FormField::Category => "category",
            FormField::Description => "description",
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Password => "password",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping of field to message. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear_field(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        f.write_str(&rendered.join("; "))
    }
}

/// Raw input of the add-transaction form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionForm {
    kind: TransactionKind,
    amount: String,
    category: String,
    description: String,
    errors: FieldErrors,
}

impl TransactionForm {
    pub fn new(kind: TransactionKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Convenience constructor for callers that already hold every field.
    pub fn filled(
        kind: TransactionKind,
        amount: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            amount: amount.into(),
            category: category.into(),
            description: description.into(),
            errors: FieldErrors::new(),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Categories are scoped by kind, so switching kind drops the selection.
    pub fn set_kind(&mut self, kind: TransactionKind) {
        self.kind = kind;
        self.category.clear();
    }

    pub fn set_amount(&mut self, value: impl Into<String>) {
        self.amount = value.into();
        self.errors.clear_field(FormField::Amount);
    }

    pub fn set_category(&mut self, value: impl Into<String>) {
        self.category = value.into();
        self.errors.clear_field(FormField::Category);
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
        self.errors.clear_field(FormField::Description);
    }

    pub fn validate(&self) -> FieldErrors {
        validate_transaction(self)
    }

    /// Produces the normalized draft without touching form state.
    pub fn to_draft(&self) -> Result<TransactionDraft, FieldErrors> {
        let errors = self.validate();
        errors.into_result(|| TransactionDraft {
            amount: parse_amount(&self.amount).unwrap_or_default(),
            category: self.category.clone(),
            kind: self.kind,
            description: self.description.trim().to_string(),
        })
    }

    /// Submits the form: on success the form resets to its defaults, on
    /// failure the errors are kept for display until the fields are edited.
    pub fn submit(&mut self) -> Result<TransactionDraft, FieldErrors> {
        match self.to_draft() {
            Ok(draft) => {
                *self = Self::default();
                Ok(draft)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }
}

pub fn validate_transaction(form: &TransactionForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if parse_amount(&form.amount).is_none() {
        errors.insert(FormField::Amount, AMOUNT_MESSAGE);
    }
    if form.category.is_empty() {
        errors.insert(FormField::Category, CATEGORY_MESSAGE);
    }
    if form.description.trim().is_empty() {
        errors.insert(FormField::Description, DESCRIPTION_MESSAGE);
    }
    errors
}

/// Parses a strictly positive, finite amount.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

/// Requiredness checks for the auth form; the name only matters when
/// registering.
pub fn validate_credentials(mode: AuthMode, credentials: &Credentials) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if mode == AuthMode::Register
        && credentials
            .name
            .as_deref()
            .map_or(true, |name| name.trim().is_empty())
    {
        errors.insert(FormField::Name, NAME_MESSAGE);
    }
    if credentials.email.trim().is_empty() {
        errors.insert(FormField::Email, EMAIL_MESSAGE);
    }
    if credentials.password.is_empty() {
        errors.insert(FormField::Password, PASSWORD_MESSAGE);
    }
    errors
}

/// Raw input of the sign-in/sign-up form.
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    mode: AuthMode,
    name: String,
    email: String,
    password: String,
    errors: FieldErrors,
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.errors.clear_field(FormField::Name);
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.errors.clear_field(FormField::Email);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.errors.clear_field(FormField::Password);
    }

    pub fn credentials(&self) -> Credentials {
        let name = match self.mode {
            AuthMode::Register => Some(self.name.clone()),
            AuthMode::Login => None,
        };
        Credentials::new(name, self.email.clone(), self.password.clone())
    }

    pub fn submit(&mut self) -> Result<Credentials, FieldErrors> {
        let credentials = self.credentials();
        let errors = validate_credentials(self.mode, &credentials);
        if errors.is_empty() {
            Ok(credentials)
        } else {
            self.errors = errors.clone();
            Err(errors)
        }
    }
}
