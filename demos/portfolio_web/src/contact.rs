// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact form validation.
//!
//! The form never talks to the network: a valid message is handed to the
//! callback supplied by the page.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Minimum message length, in characters, after trimming.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// A validated message. Fields are trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub message: String,
}

/// Why a submission was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactError {
    /// The name is empty.
    MissingName,
    /// The email address is not shaped like `local@domain.tld`.
    InvalidEmail,
    /// The message is shorter than [`MIN_MESSAGE_CHARS`].
    MessageTooShort,
}

impl ContactError {
    /// Text shown next to the form.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingName => "Please tell me your name.",
            Self::InvalidEmail => "That email address does not look right.",
            Self::MessageTooShort => "Your message needs at least 10 characters.",
        }
    }
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Whether `email` is plausibly an address: one `@`, a non-empty local part,
/// and a dotted domain without empty labels or whitespace.
#[must_use]
pub fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Validates raw field values.
///
/// # Errors
///
/// Returns every failed rule, in field order.
pub fn validate(name: &str, email: &str, message: &str) -> Result<ContactMessage, Vec<ContactError>> {
    let (name, email, message) = (name.trim(), email.trim(), message.trim());
    let mut errors = Vec::new();
    if name.is_empty() {
        errors.push(ContactError::MissingName);
    }
    if !is_plausible_email(email) {
        errors.push(ContactError::InvalidEmail);
    }
    if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.push(ContactError::MessageTooShort);
    }
    if errors.is_empty() {
        Ok(ContactMessage {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        })
    } else {
        Err(errors)
    }
}

/// Validates submissions and forwards valid ones to `on_submit`.
pub struct ContactForm<F> {
    on_submit: F,
    submitted: u32,
}

impl<F> fmt::Debug for ContactForm<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactForm")
            .field("submitted", &self.submitted)
            .finish_non_exhaustive()
    }
}

impl<F: FnMut(&ContactMessage)> ContactForm<F> {
    /// Creates a form that hands valid messages to `on_submit`.
    pub const fn new(on_submit: F) -> Self {
        Self {
            on_submit,
            submitted: 0,
        }
    }

    /// Validates the fields and, if they pass, calls the submit callback.
    ///
    /// # Errors
    ///
    /// Returns the failed rules; the callback is not called.
    pub fn submit(&mut self, name: &str, email: &str, message: &str) -> Result<(), Vec<ContactError>> {
        let valid = validate(name, email, message)?;
        (self.on_submit)(&valid);
        self.submitted += 1;
        Ok(())
    }

    /// Number of messages passed to the callback.
    #[must_use]
    pub const fn submitted(&self) -> u32 {
        self.submitted
    }
}
