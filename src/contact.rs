use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("valid regex"));

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Message is required")]
    MessageRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Company,
    Service,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

/// One slot per required field; phone, company and service are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<ContactError>,
    pub email: Option<ContactError>,
    pub message: Option<ContactError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: ContactField) -> Option<ContactError> {
        match field {
            ContactField::Name => self.name,
            ContactField::Email => self.email,
            ContactField::Message => self.message,
            _ => None,
        }
    }

    /// Editing a field drops its error until the next submit.
    pub fn clear(&mut self, field: ContactField) {
        match field {
            ContactField::Name => self.name = None,
            ContactField::Email => self.email = None,
            ContactField::Message => self.message = None,
            _ => {}
        }
    }
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Company => self.company = value,
            ContactField::Service => self.service = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some(ContactError::NameRequired);
        }

        if self.email.trim().is_empty() {
            errors.email = Some(ContactError::EmailRequired);
        } else if !EMAIL.is_match(&self.email) {
            errors.email = Some(ContactError::InvalidEmail);
        }

        if self.message.trim().is_empty() {
            errors.message = Some(ContactError::MessageRequired);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Sarah Johnson".into(),
            email: "sarah@bloom.example.com".into(),
            message: "We need Instagram content.".into(),
            ..Default::default()
        }
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn empty_form_flags_every_required_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.name, Some(ContactError::NameRequired));
        assert_eq!(errors.email, Some(ContactError::EmailRequired));
        assert_eq!(errors.message, Some(ContactError::MessageRequired));
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let mut form = filled();
        form.name = "   ".into();
        form.message = "\n".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.name, Some(ContactError::NameRequired));
        assert_eq!(errors.email, None);
        assert_eq!(errors.message, Some(ContactError::MessageRequired));
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["sarah", "sarah@", "sarah@bloom", "sarah@bloom.c", "sa rah@bloom.com"] {
            let mut form = filled();
            form.email = bad.into();
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.email, Some(ContactError::InvalidEmail), "{bad}");
            assert_eq!(ContactError::InvalidEmail.to_string(), "Invalid email address");
        }

        let mut form = filled();
        form.email = "First.Last+tag@Sub.Domain.COM".into();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn optional_fields_are_never_required() {
        let mut form = filled();
        form.set(ContactField::Phone, String::new());
        form.set(ContactField::Service, "multiple".into());
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn clearing_a_field_drops_its_error() {
        let mut errors = ContactForm::default().validate().unwrap_err();
        errors.clear(ContactField::Email);
        assert_eq!(errors.get(ContactField::Email), None);
        assert_eq!(errors.get(ContactField::Name), Some(ContactError::NameRequired));
        errors.clear(ContactField::Name);
        errors.clear(ContactField::Message);
        assert!(errors.is_empty());
    }
}
