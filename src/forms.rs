//! Controlled-form state for the contact and demo-request pages.
//!
//! Nothing leaves the browser: a successful submit logs the payload, shows
//! an acknowledgement, and the page clears the form once the
//! acknowledgement window has passed.

use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("unknown form field `{0}`")]
    UnknownField(String),
}

/// A flat record of text inputs addressed by their element ids.
pub trait FormFields: Default + Clone + PartialEq + Serialize {
    /// Ids of inputs rendered with the `required` attribute.
    const REQUIRED: &'static [&'static str];

    fn field(&self, name: &str) -> Option<&str>;
    fn field_mut(&mut self, name: &str) -> Option<&mut String>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Editing,
    Submitted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState<F> {
    fields: F,
    phase: Phase,
}

impl<F: FormFields> Default for FormState<F> {
    fn default() -> Self {
        Self {
            fields: F::default(),
            phase: Phase::Editing,
        }
    }
}

impl<F: FormFields> FormState<F> {
    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    pub fn value(&self, name: &str) -> String {
        self.fields.field(name).unwrap_or_default().to_string()
    }

    pub fn set(&mut self, name: &str, value: String) -> Result<(), FormError> {
        let slot = self
            .fields
            .field_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        *slot = value;
        Ok(())
    }

    /// First required field that is still blank.
    pub fn missing(&self) -> Option<&'static str> {
        F::REQUIRED.iter().copied().find(|name| {
            self.fields
                .field(name)
                .map_or(true, |value| value.trim().is_empty())
        })
    }

    pub fn submit(&mut self) -> Result<&F, FormError> {
        if let Some(name) = self.missing() {
            return Err(FormError::MissingField(name));
        }
        self.phase = Phase::Submitted;
        Ok(&self.fields)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// JSON rendering of a submitted record, for the console log.
pub fn payload<F: Serialize>(fields: &F) -> String {
    serde_json::to_string(fields).unwrap_or_else(|e| format!("<unserializable form: {}>", e))
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub category: String,
}

impl FormFields for ContactForm {
    const REQUIRED: &'static [&'static str] = &["name", "email", "subject", "message"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "subject" => Some(&self.subject),
            "message" => Some(&self.message),
            "category" => Some(&self.category),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "name" => Some(&mut self.name),
            "email" => Some(&mut self.email),
            "subject" => Some(&mut self.subject),
            "message" => Some(&mut self.message),
            "category" => Some(&mut self.category),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DemoRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
}

impl FormFields for DemoRequest {
    const REQUIRED: &'static [&'static str] = &["name", "email"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "company" => Some(&self.company),
            "phone" => Some(&self.phone),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "name" => Some(&mut self.name),
            "email" => Some(&mut self.email),
            "company" => Some(&mut self.company),
            "phone" => Some(&mut self.phone),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_contact() -> FormState<ContactForm> {
        let mut form = FormState::<ContactForm>::default();
        form.set("name", "Ada".into()).unwrap();
        form.set("email", "ada@example.com".into()).unwrap();
        form.set("subject", "Exchange request".into()).unwrap();
        form.set("message", "Please add Bitstamp.".into()).unwrap();
        form
    }

    #[test]
    fn complete_contact_form_enters_submitted_state() {
        let mut form = filled_contact();
        let submitted = form.submit().unwrap().clone();
        assert_eq!(submitted.name, "Ada");
        assert!(form.is_submitted());
    }

    #[test]
    fn reset_after_ack_window_clears_every_field() {
        let mut form = filled_contact();
        form.set("category", "Feature Request".into()).unwrap();
        form.submit().unwrap();
        form.reset();
        assert!(!form.is_submitted());
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn blank_required_field_blocks_submit() {
        let mut form = filled_contact();
        form.set("subject", "   ".into()).unwrap();
        assert_eq!(form.submit(), Err(FormError::MissingField("subject")));
        assert!(!form.is_submitted());
        assert_eq!(form.value("name"), "Ada");
    }

    #[test]
    fn category_is_optional() {
        let form = filled_contact();
        assert_eq!(form.missing(), None);
    }

    #[test]
    fn demo_request_only_needs_name_and_email() {
        let mut form = FormState::<DemoRequest>::default();
        assert_eq!(form.missing(), Some("name"));
        form.set("name", "Grace".into()).unwrap();
        assert_eq!(form.missing(), Some("email"));
        form.set("email", "grace@example.com".into()).unwrap();
        assert!(form.submit().is_ok());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut form = FormState::<DemoRequest>::default();
        assert_eq!(
            form.set("fax", "none".into()),
            Err(FormError::UnknownField("fax".into()))
        );
    }

    #[test]
    fn payload_is_json() {
        let mut form = filled_contact();
        let json = payload(form.submit().unwrap());
        assert!(json.contains("\"email\":\"ada@example.com\""));
        assert!(json.contains("\"category\":\"\""));
    }
}
