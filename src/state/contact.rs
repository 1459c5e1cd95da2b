// Contact form fields, validation and the submit notice
use std::time::Instant;

use crate::content::ContactMessage;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContactNotice {
    Sent,
    Failed,
}

/// Per-field validation errors, cleared as the visitor retypes
#[derive(Default)]
pub struct ContactErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }
}

pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub errors: ContactErrors,
    /// True between submit and the worker's verdict
    pub sending: bool,
    pub notice: Option<(ContactNotice, Instant)>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            errors: ContactErrors::default(),
            sending: false,
            notice: None,
        }
    }

    /// Check every field and remember what is wrong; returns true when clean
    pub fn validate(&mut self) -> bool {
        self.errors = ContactErrors {
            name: self
                .name
                .trim()
                .is_empty()
                .then(|| "Name is required".to_string()),
            email: if self.email.trim().is_empty() {
                Some("Email is required".to_string())
            } else if !is_valid_email(self.email.trim()) {
                Some("Invalid email address".to_string())
            } else {
                None
            },
            subject: self
                .subject
                .trim()
                .is_empty()
                .then(|| "Subject is required".to_string()),
            message: self
                .message
                .trim()
                .is_empty()
                .then(|| "Message is required".to_string()),
        };
        self.errors.is_empty()
    }

    /// Turn the fields into a message document; the caller supplies identity
    pub fn build(&self, id: String, created_at: String) -> ContactMessage {
        ContactMessage {
            id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
            created_at,
            read: false,
        }
    }

    pub fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
        self.errors = ContactErrors::default();
    }

    pub fn set_notice(&mut self, notice: ContactNotice) {
        self.notice = Some((notice, Instant::now()));
    }

    pub fn clear_expired_notice(&mut self, timeout_secs: u64) {
        if let Some((_, time)) = &self.notice {
            if time.elapsed().as_secs() >= timeout_secs {
                self.notice = None;
            }
        }
    }
}

/// Light-weight address check: one @, something before it, a dot in the
/// domain with at least two trailing letters
pub fn is_valid_email(input: &str) -> bool {
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains('@') {
        return false;
    }
    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || ".!#$%&'*+-/=?^_`{|}~".contains(c))
    {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if host.is_empty() || host.starts_with('.') || host.ends_with('.') {
        return false;
    }
    if !host.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-') {
        return false;
    }
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("sam@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("sam@example"));
        assert!(!is_valid_email("sam@.com"));
        assert!(!is_valid_email("sam@exa mple.com"));
        assert!(!is_valid_email("sam@example.c"));
        assert!(!is_valid_email("sam@example.c0m"));
    }

    #[test]
    fn test_validate_flags_every_gap_at_once() {
        let mut form = ContactForm::new();
        assert!(!form.validate());
        assert_eq!(form.errors.name.as_deref(), Some("Name is required"));
        assert_eq!(form.errors.email.as_deref(), Some("Email is required"));
        assert_eq!(form.errors.subject.as_deref(), Some("Subject is required"));
        assert_eq!(form.errors.message.as_deref(), Some("Message is required"));

        form.email = "nope".to_string();
        assert!(!form.validate());
        assert_eq!(form.errors.email.as_deref(), Some("Invalid email address"));

        form.name = "Sam".to_string();
        form.email = "sam@example.com".to_string();
        form.subject = "Hi".to_string();
        form.message = "Hello".to_string();
        assert!(form.validate());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_build_trims_fields() {
        let mut form = ContactForm::new();
        form.name = "  Sam  ".to_string();
        form.email = " sam@example.com ".to_string();
        form.subject = "Hi".to_string();
        form.message = "Hello".to_string();
        let msg = form.build("id-1".to_string(), "2026-01-02T10:00:00+00:00".to_string());
        assert_eq!(msg.name, "Sam");
        assert_eq!(msg.email, "sam@example.com");
        assert!(!msg.read);
    }

    #[test]
    fn test_clear_fields_resets_errors() {
        let mut form = ContactForm::new();
        form.validate();
        assert!(!form.errors.is_empty());
        form.clear_fields();
        assert!(form.errors.is_empty());
    }
}
