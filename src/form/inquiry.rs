//! The general contact page form.

use crate::form::payload::non_blank;
use crate::form::{
    validate_contact, ContactFields, ContactFlow, FieldName, FormError, FormSchema,
    ImageAttachment, InquiryPayload, InquirySubject, SubmissionPayload, ValidationErrors,
};
use crate::i18n::LocalizationContext;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneralInquiry {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub subject: InquirySubject,
    pub message: String,
    images: Vec<ImageAttachment>,
}

impl GeneralInquiry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormSchema for GeneralInquiry {
    fn default_flow(&self) -> ContactFlow {
        ContactFlow::GeneralInquiry
    }

    fn set_field(&mut self, field: FieldName, value: &str) -> Result<(), FormError> {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Phone => &mut self.phone,
            FieldName::Email => &mut self.email,
            FieldName::Message => &mut self.message,
            FieldName::Subject => {
                self.subject = value.parse()?;
                return Ok(());
            }
            field => {
                return Err(FormError::NotApplicable {
                    field,
                    form: "contact",
                })
            }
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
                body: (FieldName::Message, &self.message),
            },
            flow,
            l10n,
        )
    }

    /// Newline-separated chat message without a trailing newline.
    fn whatsapp_message(&self) -> String {
        let mut lines = vec!["*Contactformulier Website*".to_string()];
        let fields = [
            ("Naam", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Tel", self.phone.as_str()),
            ("Onderwerp", self.subject.label()),
            ("Bericht", self.message.as_str()),
        ];
        lines.extend(
            fields
                .into_iter()
                .filter(|(_, value)| !value.trim().is_empty())
                .map(|(label, value)| format!("{}: {}", label, value)),
        );
        lines.join("\n")
    }

    fn submission_payload(&self) -> SubmissionPayload {
        SubmissionPayload::GeneralInquiry(InquiryPayload {
            name: self.name.clone(),
            phone: non_blank(&self.phone),
            email: self.email.clone(),
            subject: self.subject,
            message: self.message.clone(),
            images: self.images.iter().map(ImageAttachment::summary).collect(),
        })
    }

    fn cleared(&self) -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> GeneralInquiry {
        let mut inquiry = GeneralInquiry::new();
        inquiry.set_field(FieldName::Name, "Fatma").unwrap();
        inquiry.set_field(FieldName::Email, "fatma@example.nl").unwrap();
        inquiry.set_field(FieldName::Message, "Graag een offerte").unwrap();
        inquiry
    }

    #[test]
    fn test_default_subject() {
        assert_eq!(GeneralInquiry::new().subject, InquirySubject::Inspection);
    }

    #[test]
    fn test_set_subject() {
        let mut inquiry = GeneralInquiry::new();
        inquiry.set_field(FieldName::Subject, "Timmerwerk").unwrap();
        assert_eq!(inquiry.subject, InquirySubject::Carpentry);
        assert!(inquiry.set_field(FieldName::Subject, "Dakwerk").is_err());
        assert_eq!(inquiry.subject, InquirySubject::Carpentry);
    }

    #[test]
    fn test_service_fields_not_applicable() {
        let mut inquiry = GeneralInquiry::new();
        assert_eq!(
            inquiry.set_field(FieldName::Address, "Kerkstraat 1"),
            Err(FormError::NotApplicable {
                field: FieldName::Address,
                form: "contact"
            })
        );
    }

    #[test]
    fn test_message_with_phone() {
        let mut inquiry = filled();
        inquiry.set_field(FieldName::Phone, "0612345678").unwrap();
        assert_eq!(
            inquiry.whatsapp_message(),
            "*Contactformulier Website*\n\
             Naam: Fatma\n\
             Email: fatma@example.nl\n\
             Tel: 0612345678\n\
             Onderwerp: Inspectie aanvragen\n\
             Bericht: Graag een offerte"
        );
    }

    #[test]
    fn test_message_without_phone() {
        let message = filled().whatsapp_message();
        assert!(!message.contains("Tel"));
        assert_eq!(message.lines().count(), 5);
    }

    #[test]
    fn test_payload_phone_optional() {
        let SubmissionPayload::GeneralInquiry(payload) = filled().submission_payload() else {
            panic!("expected an inquiry payload");
        };
        assert_eq!(payload.phone, None);
        assert_eq!(payload.subject, InquirySubject::Inspection);

        let json = serde_json::to_value(filled().submission_payload()).unwrap();
        assert_eq!(json["kind"], "general_inquiry");
        assert_eq!(json["subject"], "Inspectie aanvragen");
    }
}
