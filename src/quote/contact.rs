use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern is valid")
});

pub const ATTACHMENT_ADVISORY: &str = "Máximo 10MB, formatos: PDF, JPG, PNG";
const ATTACHMENT_MAX_BYTES: u64 = 10 * 1024 * 1024;
const ATTACHMENT_TYPES: [&str; 3] = ["application/pdf", "image/jpeg", "image/png"];
const ATTACHMENT_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Company,
    Description,
}

impl ContactField {
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Nome Completo *",
            ContactField::Email => "E-mail *",
            ContactField::Phone => "Telefone *",
            ContactField::Company => "Empresa (opcional)",
            ContactField::Description => "Descrição do Projeto *",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Company => "company",
            ContactField::Description => "description",
        };
        f.write_str(name)
    }
}

/// A file the visitor picked. Only its metadata is kept; the content is never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl Attachment {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Whether the file fits the size/type note shown next to the picker.
    /// Purely informational, nothing is rejected on this basis.
    pub fn within_advisory(&self) -> bool {
        if self.size_bytes > ATTACHMENT_MAX_BYTES {
            return false;
        }
        if ATTACHMENT_TYPES.contains(&self.mime_type.as_str()) {
            return true;
        }
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ATTACHMENT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false)
    }
}

/// Per-field validation messages, ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ContactField, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: ContactField, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn remove(&mut self, field: ContactField) -> Option<&'static str> {
        self.0.remove(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub description: String,
    pub attachments: Vec<Attachment>,
}

impl ContactDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a text field as typed. A blank company is kept as `None`.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Company => {
                self.company = if value.trim().is_empty() { None } else { Some(value) };
            }
            ContactField::Description => self.description = value,
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Company => self.company.as_deref().unwrap_or(""),
            ContactField::Description => &self.description,
        }
    }

    pub fn add_attachment(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }

    pub fn remove_attachment(&mut self, index: usize) -> Option<Attachment> {
        (index < self.attachments.len()).then(|| self.attachments.remove(index))
    }

    /// Checks the required fields. An empty result means the form can be sent.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(ContactField::Name, "Nome é obrigatório");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(ContactField::Email, "E-mail é obrigatório");
        } else if !is_valid_email(email) {
            errors.insert(ContactField::Email, "E-mail inválido");
        }

        if self.phone.trim().is_empty() {
            errors.insert(ContactField::Phone, "Telefone é obrigatório");
        }

        if self.description.trim().is_empty() {
            errors.insert(ContactField::Description, "Descrição é obrigatória");
        }

        errors
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDetails {
        let mut contact = ContactDetails::new();
        contact.set_field(ContactField::Name, "Maria Souza");
        contact.set_field(ContactField::Email, "maria@empresa.com.br");
        contact.set_field(ContactField::Phone, "(62) 99999-9999");
        contact.set_field(ContactField::Description, "Loja virtual com integração de pagamentos");
        contact
    }

    #[test]
    fn complete_form_has_no_errors() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = ContactDetails::new().validate();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(ContactField::Name), Some("Nome é obrigatório"));
        assert_eq!(errors.get(ContactField::Email), Some("E-mail é obrigatório"));
        assert_eq!(errors.get(ContactField::Phone), Some("Telefone é obrigatório"));
        assert_eq!(errors.get(ContactField::Description), Some("Descrição é obrigatória"));
        assert_eq!(errors.get(ContactField::Company), None);
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut contact = filled();
        contact.set_field(ContactField::Name, "   ");
        contact.set_field(ContactField::Description, "\n\t");
        let errors = contact.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors.get(ContactField::Name).is_some());
        assert!(errors.get(ContactField::Description).is_some());
    }

    #[test]
    fn malformed_email_is_invalid_not_missing() {
        let mut contact = filled();
        contact.set_field(ContactField::Email, "not-an-email");
        assert_eq!(contact.validate().get(ContactField::Email), Some("E-mail inválido"));
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("First.Last+tag@Sub.Domain.ORG"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn company_and_attachments_are_optional() {
        let mut contact = filled();
        contact.set_field(ContactField::Company, "Acme");
        contact.add_attachment(Attachment::new("huge.zip", 50 * 1024 * 1024, "application/zip"));
        assert!(contact.validate().is_empty());

        contact.set_field(ContactField::Company, "  ");
        assert_eq!(contact.company, None);
        assert_eq!(contact.field(ContactField::Company), "");
    }

    #[test]
    fn attachment_advisory_is_size_and_type() {
        assert!(Attachment::new("brief.pdf", 1024, "application/pdf").within_advisory());
        assert!(Attachment::new("Logo.PNG", 2048, "").within_advisory());
        assert!(!Attachment::new("brief.pdf", ATTACHMENT_MAX_BYTES + 1, "application/pdf").within_advisory());
        assert!(!Attachment::new("notes.docx", 1024, "application/msword").within_advisory());
        assert!(!Attachment::new("README", 10, "").within_advisory());
    }

    #[test]
    fn remove_attachment_out_of_range_is_none() {
        let mut contact = ContactDetails::new();
        contact.add_attachment(Attachment::new("a.png", 1, "image/png"));
        assert!(contact.remove_attachment(3).is_none());
        assert_eq!(contact.remove_attachment(0).map(|a| a.name), Some("a.png".to_string()));
        assert!(contact.attachments.is_empty());
    }

    #[test]
    fn field_errors_display_lists_fields() {
        let mut errors = FieldErrors::default();
        errors.insert(ContactField::Phone, "Telefone é obrigatório");
        errors.insert(ContactField::Name, "Nome é obrigatório");
        assert_eq!(
            errors.to_string(),
            "name: Nome é obrigatório; phone: Telefone é obrigatório"
        );
    }
}
