use chrono::Utc;
use log::{debug, info};
use thiserror::Error;

use super::catalog;
use super::contact::{Attachment, ContactDetails, ContactField, FieldErrors};
use super::estimate::estimate;
use super::selection::Selection;
use super::sink::{QuoteRequest, QuoteSink, SinkError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ServiceSelection,
    ContactDetails,
    Review,
    Submitted,
}

impl Step {
    pub const TOTAL: u8 = 3;

    /// Position shown in the "Passo N de 3" header. `Submitted` has none.
    pub fn number(self) -> Option<u8> {
        match self {
            Step::ServiceSelection => Some(1),
            Step::ContactDetails => Some(2),
            Step::Review => Some(3),
            Step::Submitted => None,
        }
    }
}

/// Decides whether the contact step may be left for the review step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewGate {
    /// Always let the visitor reach the review; validation waits for submit.
    #[default]
    DeferToSubmit,
    /// Require a valid contact form before showing the review.
    ValidateOnAdvance,
}

impl ReviewGate {
    pub fn check(self, contact: &ContactDetails) -> Result<(), FieldErrors> {
        match self {
            ReviewGate::DeferToSubmit => Ok(()),
            ReviewGate::ValidateOnAdvance => {
                let errors = contact.validate();
                if errors.is_empty() {
                    Ok(())
                } else {
                    Err(errors)
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("wizard is closed")]
    Closed,
    #[error("select at least one service first")]
    EmptySelection,
    #[error("expected step {expected:?}, wizard is at {actual:?}")]
    WrongStep { expected: Step, actual: Step },
    #[error("contact form has errors: {0}")]
    Invalid(FieldErrors),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// State of one open/close cycle of the quote modal.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteWizard {
    open: bool,
    step: Step,
    selection: Selection,
    contact: ContactDetails,
    errors: FieldErrors,
    failure: Option<String>,
    gate: ReviewGate,
}

impl Default for QuoteWizard {
    fn default() -> Self {
        Self::new(ReviewGate::default())
    }
}

impl QuoteWizard {
    pub fn new(gate: ReviewGate) -> Self {
        Self {
            open: false,
            step: Step::ServiceSelection,
            selection: Selection::new(),
            contact: ContactDetails::new(),
            errors: FieldErrors::default(),
            failure: None,
            gate,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_submitted(&self) -> bool {
        self.step == Step::Submitted
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error_for(&self, field: ContactField) -> Option<&'static str> {
        self.errors.get(field)
    }

    /// Message from the last failed hand-off to the sink.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn estimate(&self) -> u64 {
        estimate(&self.selection, catalog::list())
    }

    /// Opening an already open wizard keeps its state.
    pub fn open(&mut self) {
        if self.open {
            debug!("Quote wizard already open");
            return;
        }
        self.reset();
        self.open = true;
        info!("Quote wizard opened");
    }

    /// Drops everything entered so far. Valid from every state.
    pub fn close(&mut self) {
        self.reset();
        info!("Quote wizard closed");
    }

    fn reset(&mut self) {
        let gate = self.gate;
        *self = Self::new(gate);
    }

    pub fn toggle_service(&mut self, id: &str) -> Result<bool, WizardError> {
        self.expect_step(Step::ServiceSelection)?;
        Ok(self.selection.toggle(id))
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) -> Result<(), WizardError> {
        self.expect_step(Step::ContactDetails)?;
        self.contact.set_field(field, value);
        self.errors.remove(field);
        Ok(())
    }

    pub fn add_attachment(&mut self, attachment: Attachment) -> Result<(), WizardError> {
        self.expect_step(Step::ContactDetails)?;
        self.contact.add_attachment(attachment);
        Ok(())
    }

    pub fn remove_attachment(&mut self, index: usize) -> Result<Option<Attachment>, WizardError> {
        self.expect_step(Step::ContactDetails)?;
        Ok(self.contact.remove_attachment(index))
    }

    /// Whether a forward move is currently offered.
    pub fn can_advance(&self) -> bool {
        if !self.open {
            return false;
        }
        match self.step {
            Step::ServiceSelection => !self.selection.is_empty(),
            Step::ContactDetails => self.gate.check(&self.contact).is_ok(),
            Step::Review | Step::Submitted => false,
        }
    }

    pub fn next(&mut self) -> Result<Step, WizardError> {
        self.ensure_open()?;
        match self.step {
            Step::ServiceSelection => {
                if self.selection.is_empty() {
                    return Err(WizardError::EmptySelection);
                }
                self.step = Step::ContactDetails;
            }
            Step::ContactDetails => {
                if let Err(errors) = self.gate.check(&self.contact) {
                    self.errors = errors.clone();
                    return Err(WizardError::Invalid(errors));
                }
                self.step = Step::Review;
            }
            actual => {
                return Err(WizardError::WrongStep {
                    expected: Step::ContactDetails,
                    actual,
                })
            }
        }
        info!("Quote wizard advanced to {:?}", self.step);
        Ok(self.step)
    }

    pub fn back(&mut self) -> Result<Step, WizardError> {
        self.ensure_open()?;
        self.step = match self.step {
            Step::ContactDetails => Step::ServiceSelection,
            Step::Review => Step::ContactDetails,
            actual => {
                return Err(WizardError::WrongStep {
                    expected: Step::ContactDetails,
                    actual,
                })
            }
        };
        self.failure = None;
        info!("Quote wizard went back to {:?}", self.step);
        Ok(self.step)
    }

    /// Validates the contact form and hands the request to `sink`.
    /// Only a successful hand-off reaches `Submitted`.
    pub fn submit(&mut self, sink: &mut dyn QuoteSink) -> Result<QuoteRequest, WizardError> {
        self.expect_step(Step::Review)?;

        let errors = self.contact.validate();
        if !errors.is_empty() {
            debug!("Quote submission blocked: {}", errors);
            self.errors = errors.clone();
            return Err(WizardError::Invalid(errors));
        }
        self.errors = FieldErrors::default();

        let request = QuoteRequest::new(&self.selection, &self.contact, Utc::now());
        if let Err(e) = sink.submit(&request) {
            self.failure = Some(e.user_message());
            return Err(e.into());
        }

        self.failure = None;
        self.step = Step::Submitted;
        info!("Quote request submitted for {:?}", request.service_ids);
        Ok(request)
    }

    fn ensure_open(&self) -> Result<(), WizardError> {
        if self.open {
            Ok(())
        } else {
            Err(WizardError::Closed)
        }
    }

    fn expect_step(&self, expected: Step) -> Result<(), WizardError> {
        self.ensure_open()?;
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        requests: Vec<QuoteRequest>,
        fail_with: Option<SinkError>,
    }

    impl QuoteSink for RecordingSink {
        fn submit(&mut self, request: &QuoteRequest) -> Result<(), SinkError> {
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            self.requests.push(request.clone());
            Ok(())
        }
    }

    fn fill_contact(wizard: &mut QuoteWizard) {
        wizard.set_field(ContactField::Name, "João Lima").unwrap();
        wizard.set_field(ContactField::Email, "joao@lima.dev").unwrap();
        wizard.set_field(ContactField::Phone, "62 98888-7777").unwrap();
        wizard.set_field(ContactField::Description, "App de cardápio online").unwrap();
    }

    fn at_review() -> QuoteWizard {
        let mut wizard = QuoteWizard::default();
        wizard.open();
        wizard.toggle_service("app").unwrap();
        wizard.next().unwrap();
        fill_contact(&mut wizard);
        wizard.next().unwrap();
        wizard
    }

    fn assert_initial(wizard: &QuoteWizard) {
        assert_eq!(wizard.step(), Step::ServiceSelection);
        assert!(wizard.selection().is_empty());
        assert_eq!(wizard.contact(), &ContactDetails::new());
        assert!(wizard.errors().is_empty());
        assert!(wizard.failure().is_none());
        assert!(!wizard.is_submitted());
    }

    #[test]
    fn opens_at_first_step() {
        let mut wizard = QuoteWizard::default();
        assert!(!wizard.is_open());
        wizard.open();
        assert!(wizard.is_open());
        assert_initial(&wizard);
        assert_eq!(wizard.step().number(), Some(1));
    }

    #[test]
    fn reopening_while_open_keeps_state() {
        let mut wizard = QuoteWizard::default();
        wizard.open();
        wizard.toggle_service("web").unwrap();
        wizard.open();
        assert!(wizard.selection().is_selected("web"));
    }

    #[test]
    fn closed_wizard_rejects_operations() {
        let mut wizard = QuoteWizard::default();
        assert_eq!(wizard.toggle_service("web"), Err(WizardError::Closed));
        assert_eq!(wizard.next(), Err(WizardError::Closed));
        assert!(!wizard.can_advance());
    }

    #[test]
    fn first_step_needs_a_service() {
        let mut wizard = QuoteWizard::default();
        wizard.open();
        assert!(!wizard.can_advance());
        assert_eq!(wizard.next(), Err(WizardError::EmptySelection));
        assert_eq!(wizard.step(), Step::ServiceSelection);

        wizard.toggle_service("system").unwrap();
        assert!(wizard.can_advance());
        assert_eq!(wizard.next(), Ok(Step::ContactDetails));

        wizard.back().unwrap();
        wizard.toggle_service("system").unwrap();
        assert!(!wizard.can_advance());
    }

    #[test]
    fn contact_step_advances_without_validation_by_default() {
        let mut wizard = QuoteWizard::default();
        wizard.open();
        wizard.toggle_service("web").unwrap();
        wizard.next().unwrap();
        assert!(wizard.can_advance());
        assert_eq!(wizard.next(), Ok(Step::Review));
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn validate_on_advance_gate_blocks_incomplete_contact() {
        let mut wizard = QuoteWizard::new(ReviewGate::ValidateOnAdvance);
        wizard.open();
        wizard.toggle_service("web").unwrap();
        wizard.next().unwrap();
        assert!(!wizard.can_advance());
        assert!(matches!(wizard.next(), Err(WizardError::Invalid(_))));
        assert_eq!(wizard.step(), Step::ContactDetails);
        assert_eq!(wizard.errors().len(), 4);

        fill_contact(&mut wizard);
        assert!(wizard.errors().is_empty());
        assert_eq!(wizard.next(), Ok(Step::Review));
    }

    #[test]
    fn back_preserves_entered_values_and_errors() {
        let mut wizard = QuoteWizard::default();
        wizard.open();
        wizard.toggle_service("web").unwrap();
        wizard.next().unwrap();
        wizard.set_field(ContactField::Name, "Bia").unwrap();
        wizard.next().unwrap();
        assert!(wizard.submit(&mut RecordingSink::default()).is_err());
        let errors = wizard.errors().clone();

        assert_eq!(wizard.back(), Ok(Step::ContactDetails));
        assert_eq!(wizard.contact().name, "Bia");
        assert_eq!(wizard.errors(), &errors);

        assert_eq!(wizard.back(), Ok(Step::ServiceSelection));
        assert!(wizard.selection().is_selected("web"));
        assert!(matches!(wizard.back(), Err(WizardError::WrongStep { .. })));
    }

    #[test]
    fn editing_a_field_clears_its_error_only() {
        let mut wizard = at_review();
        wizard.back().unwrap();
        wizard.set_field(ContactField::Email, "").unwrap();
        wizard.set_field(ContactField::Phone, "").unwrap();
        wizard.next().unwrap();
        assert!(wizard.submit(&mut RecordingSink::default()).is_err());
        wizard.back().unwrap();

        wizard.set_field(ContactField::Email, "x@y.io").unwrap();
        assert_eq!(wizard.error_for(ContactField::Email), None);
        assert_eq!(wizard.error_for(ContactField::Phone), Some("Telefone é obrigatório"));
    }

    #[test]
    fn submit_rejects_each_missing_required_field() {
        for field in [
            ContactField::Name,
            ContactField::Email,
            ContactField::Phone,
            ContactField::Description,
        ] {
            let mut wizard = at_review();
            wizard.back().unwrap();
            wizard.set_field(field, "").unwrap();
            wizard.next().unwrap();

            let mut sink = RecordingSink::default();
            let result = wizard.submit(&mut sink);
            assert!(matches!(result, Err(WizardError::Invalid(_))), "{field} accepted");
            assert!(wizard.error_for(field).is_some());
            assert_eq!(wizard.step(), Step::Review);
            assert!(sink.requests.is_empty());
        }
    }

    #[test]
    fn submit_checks_email_pattern() {
        let mut wizard = at_review();
        wizard.back().unwrap();
        wizard.set_field(ContactField::Email, "not-an-email").unwrap();
        wizard.next().unwrap();
        let mut sink = RecordingSink::default();
        assert!(wizard.submit(&mut sink).is_err());
        assert_eq!(wizard.error_for(ContactField::Email), Some("E-mail inválido"));

        wizard.back().unwrap();
        wizard.set_field(ContactField::Email, "a@b.co").unwrap();
        wizard.next().unwrap();
        assert!(wizard.submit(&mut sink).is_ok());
        assert_eq!(sink.requests.len(), 1);
    }

    #[test]
    fn successful_submit_reaches_terminal_state() {
        let mut wizard = at_review();
        wizard.back().unwrap();
        wizard.set_field(ContactField::Company, "Lima Tech").unwrap();
        wizard.next().unwrap();

        let mut sink = RecordingSink::default();
        let request = wizard.submit(&mut sink).unwrap();
        assert!(wizard.is_submitted());
        assert_eq!(wizard.step().number(), None);
        assert_eq!(request.service_ids, vec!["app"]);
        assert_eq!(request.company.as_deref(), Some("Lima Tech"));
        assert_eq!(request.estimate, 8000);
        assert_eq!(sink.requests, vec![request]);

        assert!(!wizard.can_advance());
        assert!(wizard.back().is_err());
        assert!(wizard.submit(&mut sink).is_err());
        assert_eq!(sink.requests.len(), 1);
    }

    #[test]
    fn failing_sink_keeps_the_form() {
        for failure in [
            SinkError::Transient("offline".into()),
            SinkError::Rejected("duplicate".into()),
        ] {
            let mut wizard = at_review();
            let mut sink = RecordingSink {
                fail_with: Some(failure.clone()),
                ..Default::default()
            };
            assert_eq!(wizard.submit(&mut sink), Err(WizardError::Sink(failure.clone())));
            assert_eq!(wizard.step(), Step::Review);
            assert_eq!(wizard.contact().name, "João Lima");
            assert_eq!(wizard.failure(), Some(failure.user_message().as_str()));

            sink.fail_with = None;
            assert!(wizard.submit(&mut sink).is_ok());
            assert!(wizard.failure().is_none());
        }
    }

    #[test]
    fn close_resets_from_every_state() {
        let mut wizard = QuoteWizard::default();
        wizard.open();
        wizard.toggle_service("web").unwrap();
        wizard.close();
        assert!(!wizard.is_open());
        wizard.open();
        assert_initial(&wizard);

        wizard.toggle_service("web").unwrap();
        wizard.next().unwrap();
        wizard.set_field(ContactField::Name, "Caio").unwrap();
        wizard.close();
        wizard.open();
        assert_initial(&wizard);

        let mut wizard = at_review();
        wizard.submit(&mut RecordingSink::default()).unwrap();
        wizard.close();
        assert!(!wizard.is_open());
        wizard.open();
        assert_initial(&wizard);
    }

    #[test]
    fn close_keeps_the_review_gate() {
        let mut wizard = QuoteWizard::new(ReviewGate::ValidateOnAdvance);
        wizard.open();
        wizard.close();
        wizard.open();
        wizard.toggle_service("web").unwrap();
        wizard.next().unwrap();
        assert!(!wizard.can_advance());
    }

    #[test]
    fn estimate_tracks_selection() {
        let mut wizard = QuoteWizard::default();
        wizard.open();
        wizard.toggle_service("web").unwrap();
        wizard.toggle_service("app").unwrap();
        assert_eq!(wizard.estimate(), 13000);
        wizard.toggle_service("system").unwrap();
        assert_eq!(wizard.estimate(), 23000);
    }

    #[test]
    fn toggling_outside_first_step_is_refused() {
        let mut wizard = at_review();
        assert_eq!(
            wizard.toggle_service("web"),
            Err(WizardError::WrongStep {
                expected: Step::ServiceSelection,
                actual: Step::Review
            })
        );
        assert!(wizard.set_field(ContactField::Name, "x").is_err());
    }
}
