use std::str::FromStr;

use thiserror::Error;
use urlencoding::encode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown contact field: {0}")]
pub struct UnknownField(pub String);

impl ContactField {
    /// The `name` attribute of the matching form control.
    pub fn input_name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

impl FromStr for ContactField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ContactField::Name),
            "email" => Ok(ContactField::Email),
            "message" => Ok(ContactField::Message),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

/// What the visitor has typed into the contact form so far.
///
/// Nothing is validated and nothing is ever submitted; the fields only feed
/// [`ContactForm::mail_link`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Like [`ContactForm::set`], keyed by the input's `name` attribute.
    pub fn set_named(&mut self, name: &str, value: impl Into<String>) {
        match name.parse::<ContactField>() {
            Ok(field) => self.set(field, value),
            Err(e) => log::debug!("ignoring input: {e}"),
        }
    }

    /// A `mailto:` link addressed to `recipient` with the form pre-filled.
    ///
    /// Every interpolated field is percent-encoded, so `&`, `=`, `#` and non-ASCII
    /// text can't break out of their query values.
    pub fn mail_link(&self, recipient: &str) -> String {
        format!(
            "mailto:{recipient}?subject=Message%20from%20{}%20({})&body={}",
            encode(&self.name),
            encode(&self.email),
            encode(&self.message),
        )
    }
}
