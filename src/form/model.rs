//! Form lifecycle: editing, validation, hand-off and reset.

use crate::form::{
    ContactFlow, FieldName, FormError, ImageAttachment, SubmissionPayload, ValidationErrors,
};
use crate::i18n::LocalizationContext;
use crate::retry::{with_retry, RetryConfig};
use crate::submission::{SubmissionReceipt, Submitter};
use crate::whatsapp;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Shape-specific behaviour of a request form.
pub trait FormSchema {
    /// Flow whose rules apply unless the caller picks another.
    fn default_flow(&self) -> ContactFlow;

    fn set_field(&mut self, field: FieldName, value: &str) -> Result<(), FormError>;

    fn images(&self) -> &[ImageAttachment];

    fn images_mut(&mut self) -> &mut Vec<ImageAttachment>;

    fn validate(&self, flow: ContactFlow, l10n: &LocalizationContext) -> ValidationErrors;

    fn whatsapp_message(&self) -> String;

    fn submission_payload(&self) -> SubmissionPayload;

    /// An empty state of the same shape (and service variant).
    fn cleared(&self) -> Self
    where
        Self: Sized;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormPhase {
    Editing,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the form is now `Submitted`
    Accepted(SubmissionPayload),
    /// Validation failed; see [`FormModel::errors`]
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Delivered(SubmissionReceipt),
    Invalid,
    /// The channel failed; the form stays editable with its data intact
    Failed,
}

/// A mounted form: state plus errors and lifecycle phase.
#[derive(Debug, Clone)]
pub struct FormModel<S: FormSchema> {
    state: S,
    flow: ContactFlow,
    phase: FormPhase,
    errors: ValidationErrors,
    failure: Option<String>,
    receipt: Option<SubmissionReceipt>,
}

impl<S: FormSchema> FormModel<S> {
    pub fn new(state: S) -> Self {
        let flow = state.default_flow();
        Self::with_flow(state, flow)
    }

    /// Mount `state` but validate it with another flow's rules.
    pub fn with_flow(state: S, flow: ContactFlow) -> Self {
        Self {
            state,
            flow,
            phase: FormPhase::Editing,
            errors: ValidationErrors::new(),
            failure: None,
            receipt: None,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn flow(&self) -> ContactFlow {
        self.flow
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Localized message of the last failed send, if any.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        self.receipt.as_ref()
    }

    pub fn images(&self) -> &[ImageAttachment] {
        self.state.images()
    }

    fn ensure_editing(&self) -> Result<(), FormError> {
        match self.phase {
            FormPhase::Editing => Ok(()),
            FormPhase::Submitted => Err(FormError::Locked),
        }
    }

    /// Assign a field and clear that field's error, if any. Other errors stay
    /// until the next validation.
    pub fn set_field(&mut self, field: FieldName, value: &str) -> Result<(), FormError> {
        self.ensure_editing()?;
        self.state.set_field(field, value)?;
        if self.errors.clear_field(field) {
            debug!("Cleared error on '{}'", field);
        }
        Ok(())
    }

    /// [`set_field`](Self::set_field) by the site's field name (`"framesCount"`).
    pub fn set_field_by_name(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        self.set_field(name.parse()?, value)
    }

    /// Append images after the ones already attached, keeping their order.
    pub fn add_images<I>(&mut self, files: I) -> Result<(), FormError>
    where
        I: IntoIterator<Item = ImageAttachment>,
    {
        self.ensure_editing()?;
        self.state.images_mut().extend(files);
        Ok(())
    }

    /// Remove the image at `index`. Out of range is a no-op returning `None`.
    pub fn remove_image(&mut self, index: usize) -> Result<Option<ImageAttachment>, FormError> {
        self.ensure_editing()?;
        let images = self.state.images_mut();
        if index < images.len() {
            Ok(Some(images.remove(index)))
        } else {
            Ok(None)
        }
    }

    /// Run the flow's rules and replace the recorded errors.
    pub fn validate(&mut self, l10n: &LocalizationContext) -> &ValidationErrors {
        self.errors = self.state.validate(self.flow, l10n);
        &self.errors
    }

    pub fn whatsapp_message(&self) -> String {
        self.state.whatsapp_message()
    }

    pub fn submission_payload(&self) -> SubmissionPayload {
        self.state.submission_payload()
    }

    /// Validate, then build the `wa.me` link carrying the message.
    ///
    /// Returns `None` when validation fails. Opening the link is up to the
    /// caller, and the form stays editable either way.
    pub fn whatsapp_link(&mut self, l10n: &LocalizationContext, number: &str) -> Option<String> {
        if !self.validate(l10n).is_empty() {
            return None;
        }
        Some(whatsapp::message_url(number, &self.whatsapp_message()))
    }

    /// Validate and, on success, move to `Submitted`.
    pub fn submit(&mut self, l10n: &LocalizationContext) -> Result<SubmitOutcome, FormError> {
        self.ensure_editing()?;
        if !self.validate(l10n).is_empty() {
            debug!("Submit rejected with {} field errors", self.errors.len());
            return Ok(SubmitOutcome::Invalid);
        }

        self.phase = FormPhase::Submitted;
        self.failure = None;
        Ok(SubmitOutcome::Accepted(self.submission_payload()))
    }

    /// Validate and deliver the payload through `submitter`, retrying per
    /// `retry`. Only a delivered payload moves the form to `Submitted`.
    pub async fn send<T: Submitter>(
        &mut self,
        l10n: &LocalizationContext,
        submitter: &T,
        retry: &RetryConfig,
    ) -> Result<SendOutcome, FormError> {
        self.ensure_editing()?;
        if !self.validate(l10n).is_empty() {
            return Ok(SendOutcome::Invalid);
        }

        self.failure = None;
        let payload = self.submission_payload();
        match with_retry(retry, "submission", || submitter.submit(&payload)).await {
            Ok(receipt) => {
                info!("Submission {} delivered", receipt.reference);
                self.phase = FormPhase::Submitted;
                self.receipt = Some(receipt.clone());
                Ok(SendOutcome::Delivered(receipt))
            }
            Err(e) => {
                warn!("Submission failed, keeping form data: {}", e);
                self.failure = Some(l10n.resolve("validation.sent_error").to_string());
                Ok(SendOutcome::Failed)
            }
        }
    }

    /// Back to an empty `Editing` form after a submission was acknowledged.
    pub fn reset(&mut self) -> Result<(), FormError> {
        if self.phase != FormPhase::Submitted {
            return Err(FormError::NotSubmitted);
        }

        self.state = self.state.cleared();
        self.phase = FormPhase::Editing;
        self.errors = ValidationErrors::new();
        self.failure = None;
        self.receipt = None;
        Ok(())
    }
}
