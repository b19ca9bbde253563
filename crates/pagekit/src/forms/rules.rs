//! Field validation rules
//!
//! Pure checks over a snapshot of a form control, so the rules can be
//! exercised without a page.

use pagekit_dom::{Document, NodeId};
use regex::Regex;

use crate::Messages;

/// Minimum message length, in UTF-16 code units like a DOM string length
const MIN_MESSAGE_UNITS: usize = 10;

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    InvalidEmail,
    InvalidPhone,
    InvalidName,
    MessageTooShort,
    MustAgree,
}

impl ValidationError {
    /// Localized feedback text
    pub fn message<'a>(&self, messages: &'a Messages) -> &'a str {
        match self {
            Self::Required => &messages.required,
            Self::InvalidEmail => &messages.invalid_email,
            Self::InvalidPhone => &messages.invalid_phone,
            Self::InvalidName => &messages.invalid_name,
            Self::MessageTooShort => &messages.message_too_short,
            Self::MustAgree => &messages.must_agree,
        }
    }
}

/// What the rules look at for one control
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub tag: String,
    /// Effective control type (`email`, `tel`, `checkbox`, `textarea`, ...)
    pub control_type: String,
    pub id: String,
    pub name: String,
    pub value: String,
    pub required: bool,
    pub checked: bool,
}

impl FieldSnapshot {
    /// Read the current state of `field`
    pub fn capture(doc: &Document, field: NodeId) -> Self {
        let tree = doc.tree();
        let id = doc.attr(field, "id").unwrap_or_default().to_string();
        Self {
            tag: tree.tag_name(field).unwrap_or_default().to_string(),
            control_type: tree.control_type(field),
            name: doc
                .attr(field, "name")
                .filter(|name| !name.is_empty())
                .map_or_else(|| id.clone(), str::to_string),
            id,
            value: tree.value(field),
            required: doc.has_attr(field, "required"),
            checked: tree.checked(field),
        }
    }
}

/// Compiled validation patterns
#[derive(Debug, Clone)]
pub struct Rules {
    email: Regex,
    phone: Regex,
    name: Regex,
}

impl Rules {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            email: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")?,
            phone: Regex::new(r"^[0-9\s+()\-]{10,20}$")?,
            name: Regex::new(r"^[a-zA-ZÀ-ÿ\s\-']{2,50}$")?,
        })
    }

    /// First rule `field` breaks, if any
    ///
    /// Emptiness is checked on the trimmed value. A field gets exactly one
    /// format check, picked by its type or its id/name. An unchecked
    /// required checkbox overrides everything else.
    pub fn check(&self, field: &FieldSnapshot) -> Option<ValidationError> {
        let value = field.value.trim();
        let id = field.id.to_lowercase();
        let name = field.name.to_lowercase();
        let kind = field.control_type.as_str();

        let mut error = None;
        if field.required && value.is_empty() {
            error = Some(ValidationError::Required);
        } else if !value.is_empty() {
            if kind == "email" || id.contains("email") {
                if !self.email.is_match(value) {
                    error = Some(ValidationError::InvalidEmail);
                }
            } else if kind == "tel" || id.contains("phone") {
                if !self.phone.is_match(value) {
                    error = Some(ValidationError::InvalidPhone);
                }
            } else if id.contains("name") || name.contains("name") {
                if !self.name.is_match(value) {
                    error = Some(ValidationError::InvalidName);
                }
            } else if (field.tag == "textarea" || id.contains("message"))
                && value.encode_utf16().count() < MIN_MESSAGE_UNITS
            {
                error = Some(ValidationError::MessageTooShort);
            }
        }

        if kind == "checkbox" && field.required && !field.checked {
            error = Some(ValidationError::MustAgree);
        }
        error
    }
}
