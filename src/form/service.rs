//! The request form shown on each service page.

use crate::form::payload::non_blank;
use crate::form::{
    validate_contact, ContactFields, ContactFlow, FieldName, FormError, FormSchema,
    ImageAttachment, ServiceDetails, ServiceRequestPayload, ServiceVariant, SubmissionPayload,
    ValidationErrors,
};
use crate::i18n::LocalizationContext;

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    details: ServiceDetails,
    images: Vec<ImageAttachment>,
}

impl ServiceRequest {
    /// An empty request for `variant`. The variant cannot change afterwards.
    pub fn new(variant: ServiceVariant) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
            details: ServiceDetails::empty(variant),
            images: Vec::new(),
        }
    }

    pub fn variant(&self) -> ServiceVariant {
        self.details.variant()
    }

    pub fn details(&self) -> &ServiceDetails {
        &self.details
    }
}

/// Append `Label: value\n`, skipping blank values.
fn push_line(text: &mut String, label: &str, value: &str) {
    if !value.trim().is_empty() {
        text.push_str(label);
        text.push_str(": ");
        text.push_str(value);
        text.push('\n');
    }
}

impl FormSchema for ServiceRequest {
    fn default_flow(&self) -> ContactFlow {
        ContactFlow::ServiceRequest
    }

    fn set_field(&mut self, field: FieldName, value: &str) -> Result<(), FormError> {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::Address => &mut self.address,
            FieldName::StartDate => &mut self.start_date,
            FieldName::EndDate => &mut self.end_date,
            FieldName::Description => &mut self.description,
            other => return self.details.set(other, value),
        };
        *slot = value.to_string();
        Ok(())
    }

    fn images(&self) -> &[ImageAttachment] {
        &self.images
    }

    fn images_mut(&mut self) -> &mut Vec<ImageAttachment> {
        &mut self.images
    }

    fn validate(&self, flow: ContactFlow, l10n: &LocalizationContext) -> ValidationErrors {
        validate_contact(
            ContactFields {
                name: &self.name,
                email: &self.email,
                phone: &self.phone,
                body: (FieldName::Description, &self.description),
            },
            flow,
            l10n,
        )
    }

    /// Chat message in fixed field order. Lines end in `\n`; the date line
    /// appears whenever a start date is set, even without an end date.
    fn whatsapp_message(&self) -> String {
        let mut text = format!("*Aanvraag: {}*\n", self.variant().code());
        push_line(&mut text, "Naam", &self.name);
        push_line(&mut text, "Email", &self.email);
        push_line(&mut text, "Tel", &self.phone);
        push_line(&mut text, "Adres", &self.address);
        push_line(&mut text, "Beschrijving", &self.description);

        if !self.start_date.trim().is_empty() {
            text.push_str(&format!("Datum: {} t/m {}\n", self.start_date, self.end_date));
        }
        if let Some(frames) = self.details.frames_count() {
            text.push_str(&format!("Aantal kozijnen: {}\n", frames));
        }
        if let Some(urgency) = self.details.urgency() {
            text.push_str(&format!("Spoed: {}\n", urgency.as_str()));
        }

        text
    }

    fn submission_payload(&self) -> SubmissionPayload {
        SubmissionPayload::ServiceRequest(ServiceRequestPayload {
            service: self.variant(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            start_date: non_blank(&self.start_date),
            end_date: non_blank(&self.end_date),
            description: self.description.clone(),
            details: self.details.clone(),
            images: self.images.iter().map(ImageAttachment::summary).collect(),
        })
    }

    fn cleared(&self) -> Self {
        Self::new(self.variant())
    }
}
