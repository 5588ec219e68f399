use tracing::{debug, warn};

use crate::{
    domain::{
        errors::{FormError, SubmissionError, SubmissionResult, ValidationError},
        models::{ContactDraft, ContactField, NewContactSubmission, SubmissionAck},
    },
    ports::contact::ContactGateway,
};

/// Where the contact form is in its submission cycle
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(SubmissionAck),
    Failed(SubmissionError),
}

/// Message displayed above the form
#[derive(Debug, Clone, PartialEq)]
pub enum FormNotice {
    Success { title: String, message: String },
    Error { message: String },
}

/// Everything the renderer needs to draw the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFormView {
    pub draft: ContactDraft,
    pub submitting: bool,
    pub notice: Option<FormNotice>,
}

/// Contact form state machine
///
/// `Idle -> Submitting -> Succeeded | Failed`. At most one submission is in
/// flight per instance: `begin_submit` refuses while `Submitting`, and
/// `submit` holds `&mut self` across the delivery.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    draft: ContactDraft,
    status: FormStatus,
    rejection: Option<ValidationError>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft(draft: ContactDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, FormStatus::Submitting)
    }

    /// Whether the submit control is interactive
    pub fn submit_enabled(&self) -> bool {
        !self.is_submitting()
    }

    /// Validation problem from the last refused submit attempt
    pub fn rejection(&self) -> Option<&ValidationError> {
        self.rejection.as_ref()
    }

    /// Apply one field edit; inputs are locked while submitting
    pub fn set_field(
        &mut self,
        field: ContactField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }
        self.draft.set(field, value);
        self.rejection = None;
        Ok(())
    }

    /// Validate the draft and enter `Submitting`
    ///
    /// On any error the status is left untouched.
    pub fn begin_submit(&mut self) -> Result<NewContactSubmission, FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }

        let submission = self.draft.validate().map_err(|e| {
            debug!(error = %e, "Contact form refused");
            self.rejection = Some(e.clone());
            FormError::Invalid(e)
        })?;

        self.rejection = None;
        self.status = FormStatus::Submitting;
        Ok(submission)
    }

    /// Record the outcome of the delivery started by `begin_submit`
    ///
    /// Success clears the draft; failure keeps it so the visitor can retry.
    pub fn finish_submit(&mut self, outcome: SubmissionResult<SubmissionAck>) {
        if !self.is_submitting() {
            warn!("Discarding submission outcome for a form that is not submitting");
            return;
        }

        self.status = match outcome {
            Ok(ack) => {
                self.draft = ContactDraft::default();
                FormStatus::Succeeded(ack)
            }
            Err(e) => FormStatus::Failed(e),
        };
    }

    /// Validate, deliver through `gateway`, and record the outcome
    pub async fn submit(&mut self, gateway: &dyn ContactGateway) -> Result<&FormStatus, FormError> {
        let submission = self.begin_submit()?;
        let outcome = gateway.deliver(submission).await;
        self.finish_submit(outcome);
        Ok(&self.status)
    }

    /// Hand out the success acknowledgment once and return to `Idle`
    pub fn take_acknowledgment(&mut self) -> Option<SubmissionAck> {
        match std::mem::take(&mut self.status) {
            FormStatus::Succeeded(ack) => Some(ack),
            other => {
                self.status = other;
                None
            }
        }
    }

    pub fn view(&self) -> ContactFormView {
        let notice = match (&self.status, &self.rejection) {
            (_, Some(rejection)) => Some(FormNotice::Error {
                message: rejection.to_string(),
            }),
            (FormStatus::Succeeded(ack), None) => Some(FormNotice::Success {
                title: ack.title.clone(),
                message: ack.message.clone(),
            }),
            (FormStatus::Failed(e), None) => Some(FormNotice::Error {
                message: format!("Your message could not be sent: {}", e),
            }),
            _ => None,
        };

        ContactFormView {
            draft: self.draft.clone(),
            submitting: self.is_submitting(),
            notice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Michael Chen").unwrap();
        form.set_field(ContactField::Email, "michael@example.com").unwrap();
        form.set_field(ContactField::Service, "yoga-beginners").unwrap();
        form.set_field(ContactField::Message, "First class?").unwrap();
        form
    }

    #[test]
    fn test_new_form_is_idle_and_empty() {
        let form = ContactForm::new();
        assert_eq!(form.status(), &FormStatus::Idle);
        assert!(form.draft().is_empty());
        assert!(form.submit_enabled());
    }

    #[test]
    fn test_second_begin_is_refused() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(FormError::AlreadySubmitting));
        assert!(!form.submit_enabled());
    }

    #[test]
    fn test_edits_locked_while_submitting() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        assert_eq!(
            form.set_field(ContactField::Name, "Someone else"),
            Err(FormError::AlreadySubmitting)
        );
        assert_eq!(form.draft().name, "Michael Chen");
    }

    #[test]
    fn test_failure_keeps_draft() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.finish_submit(Err(SubmissionError::Transport {
            message: "timed out".to_string(),
        }));

        assert!(matches!(form.status(), FormStatus::Failed(_)));
        assert_eq!(form.draft().email, "michael@example.com");
        assert!(matches!(form.view().notice, Some(FormNotice::Error { .. })));
        // A failed form can be submitted again
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_stale_outcome_is_discarded() {
        let mut form = filled_form();
        form.finish_submit(Ok(SubmissionAck::delivered(None)));
        assert_eq!(form.status(), &FormStatus::Idle);
        assert_eq!(form.draft().name, "Michael Chen");
    }

    #[test]
    fn test_acknowledgment_is_taken_once() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.finish_submit(Ok(SubmissionAck::delivered(None)));

        assert!(form.take_acknowledgment().is_some());
        assert!(form.take_acknowledgment().is_none());
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[test]
    fn test_rejection_cleared_by_edit() {
        let mut form = ContactForm::new();
        assert!(form.begin_submit().is_err());
        assert!(form.rejection().is_some());

        form.set_field(ContactField::Name, "Lisa").unwrap();
        assert!(form.rejection().is_none());
    }
}
