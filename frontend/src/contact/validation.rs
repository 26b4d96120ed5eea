use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\-()+]+$").expect("phone pattern compiles"));

pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone number",
            Field::Message => "Message",
        }
    }
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required(Field),
    InvalidFormat(Field),
    TooShort { field: Field, min: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required(field) => write!(f, "{} is required", field.label()),
            FieldError::InvalidFormat(Field::Email) => f.write_str("Please enter a valid email address"),
            FieldError::InvalidFormat(Field::Phone) => f.write_str("Please enter a valid phone number"),
            FieldError::InvalidFormat(field) => write!(f, "Please enter a valid {}", field.id()),
            FieldError::TooShort { field, min } => {
                write!(f, "{} must be at least {} characters long", field.label(), min)
            }
        }
    }
}

/// Field-keyed validation errors; a missing key means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, FieldError>);

impl FormErrors {
    pub fn is_valid(&self) -> bool {
        self.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn clear(&mut self, field: Field) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: Field, error: Option<FieldError>) {
        if let Some(error) = error {
            self.0.insert(field, error);
        }
    }
}

pub fn validate(form: &ContactForm) -> FormErrors {
    let mut errors = FormErrors::default();
    errors.insert(Field::Name, check_name(&form.name));
    errors.insert(Field::Email, check_email(&form.email));
    errors.insert(Field::Phone, check_phone(&form.phone));
    errors.insert(Field::Message, check_message(&form.message));
    errors
}

fn check_name(value: &str) -> Option<FieldError> {
    value.trim().is_empty().then_some(FieldError::Required(Field::Name))
}

fn check_email(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::Required(Field::Email))
    } else if !EMAIL_RE.is_match(value) {
        Some(FieldError::InvalidFormat(Field::Email))
    } else {
        None
    }
}

fn check_phone(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::Required(Field::Phone))
    } else if !PHONE_RE.is_match(value) {
        Some(FieldError::InvalidFormat(Field::Phone))
    } else {
        None
    }
}

fn check_message(value: &str) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(FieldError::Required(Field::Message))
    } else if trimmed.chars().count() < MIN_MESSAGE_CHARS {
        Some(FieldError::TooShort { field: Field::Message, min: MIN_MESSAGE_CHARS })
    } else {
        None
    }
}
