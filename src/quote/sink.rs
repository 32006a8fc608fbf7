use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use thiserror::Error;

use super::contact::{Attachment, ContactDetails};
use super::estimate::estimate;
use super::selection::Selection;
use super::catalog;

/// Everything a finished quote request carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub service_ids: Vec<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub description: String,
    pub attachments: Vec<Attachment>,
    pub estimate: u64,
    pub submitted_at: DateTime<Utc>,
}

impl QuoteRequest {
    pub fn new(selection: &Selection, contact: &ContactDetails, submitted_at: DateTime<Utc>) -> Self {
        Self {
            service_ids: selection.ids().into_iter().map(String::from).collect(),
            name: contact.name.trim().to_string(),
            email: contact.email.trim().to_string(),
            phone: contact.phone.trim().to_string(),
            company: contact.company.as_ref().map(|c| c.trim().to_string()),
            description: contact.description.trim().to_string(),
            attachments: contact.attachments.clone(),
            estimate: estimate(selection, catalog::list()),
            submitted_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    #[error("temporary failure: {0}")]
    Transient(String),
    #[error("request rejected: {0}")]
    Rejected(String),
}

impl SinkError {
    /// Message shown under the submit button.
    pub fn user_message(&self) -> String {
        match self {
            SinkError::Transient(_) => {
                "Não foi possível enviar agora. Tente novamente em instantes.".to_string()
            }
            SinkError::Rejected(reason) => format!("Solicitação recusada: {}", reason),
        }
    }
}

/// Where finished quote requests go.
pub trait QuoteSink {
    fn submit(&mut self, request: &QuoteRequest) -> Result<(), SinkError>;
}

/// Writes the request to the browser console and nothing else.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl QuoteSink for ConsoleSink {
    fn submit(&mut self, request: &QuoteRequest) -> Result<(), SinkError> {
        let payload = serde_json::to_string(request)
            .map_err(|e| SinkError::Rejected(e.to_string()))?;
        info!("Form submitted: {}", payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::contact::ContactField;
    use chrono::TimeZone;

    fn request() -> QuoteRequest {
        let mut selection = Selection::new();
        selection.toggle("system");
        selection.toggle("web");

        let mut contact = ContactDetails::new();
        contact.set_field(ContactField::Name, " Ana ");
        contact.set_field(ContactField::Email, "ana@exemplo.com");
        contact.set_field(ContactField::Phone, "62 90000-0000");
        contact.set_field(ContactField::Description, "ERP interno");
        contact.add_attachment(Attachment::new("escopo.pdf", 2048, "application/pdf"));

        let at = Utc.with_ymd_and_hms(2024, 5, 2, 13, 30, 0).unwrap();
        QuoteRequest::new(&selection, &contact, at)
    }

    #[test]
    fn request_carries_selection_contact_and_total() {
        let request = request();
        assert_eq!(request.service_ids, vec!["web", "system"]);
        assert_eq!(request.name, "Ana");
        assert_eq!(request.company, None);
        assert_eq!(request.estimate, 15000);
        assert_eq!(request.attachments.len(), 1);
    }

    #[test]
    fn payload_uses_camel_case_keys() {
        let json = serde_json::to_value(request()).unwrap();
        assert_eq!(json["serviceIds"], serde_json::json!(["web", "system"]));
        assert_eq!(json["attachments"][0]["sizeBytes"], 2048);
        assert_eq!(json["attachments"][0]["mimeType"], "application/pdf");
        assert_eq!(json["submittedAt"], "2024-05-02T13:30:00Z");
        assert!(json.get("company").is_none());
    }

    #[test]
    fn console_sink_accepts() {
        assert_eq!(ConsoleSink.submit(&request()), Ok(()));
    }

    #[test]
    fn sink_errors_have_user_messages() {
        assert!(SinkError::Transient("timeout".into()).user_message().contains("Tente novamente"));
        assert_eq!(
            SinkError::Rejected("spam".into()).user_message(),
            "Solicitação recusada: spam"
        );
    }
}
