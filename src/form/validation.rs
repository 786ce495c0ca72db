//! Field validation rules for the two contact flows.
//!
//! The per-service request form and the general contact page were built
//! separately and disagree on the phone field: the service form requires it,
//! the contact page accepts an empty phone but checks the shape of a
//! non-empty one. Both are kept as named flows and the caller picks one.

use crate::form::FieldName;
use crate::i18n::LocalizationContext;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Which form's rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactFlow {
    /// Request form on a service page
    ServiceRequest,
    /// Contact page form
    GeneralInquiry,
}

/// How the phone number is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneRule {
    /// Must be non-empty, shape unchecked
    Required,
    /// May be empty, otherwise must look like a phone number
    OptionalPattern,
}

impl ContactFlow {
    pub fn phone_rule(&self) -> PhoneRule {
        match self {
            ContactFlow::ServiceRequest => PhoneRule::Required,
            ContactFlow::GeneralInquiry => PhoneRule::OptionalPattern,
        }
    }
}

/// Field → localized message, for fields that failed validation only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldName, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    /// Drop the error of a single field, returning whether there was one.
    pub fn clear_field(&mut self, field: FieldName) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> Vec<FieldName> {
        self.errors.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// The contact fields every flow validates.
#[derive(Debug, Clone, Copy)]
pub struct ContactFields<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    /// Free text body and the field it lives in (description or message)
    pub body: (FieldName, &'a str),
}

static SERVICE_EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static INQUIRY_EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_LOOSE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Email shape check. The service form accepts any `x@y.z` run inside the
/// input; the contact page requires the whole input to be one address.
pub fn is_valid_email(email: &str, flow: ContactFlow) -> bool {
    let regex = match flow {
        ContactFlow::ServiceRequest => {
            SERVICE_EMAIL_REGEX.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").unwrap())
        }
        ContactFlow::GeneralInquiry => INQUIRY_EMAIL_REGEX
            .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()),
    };
    regex.is_match(email)
}

/// Phone shape check: a `(123) 456-7890` style number, or at least eight
/// digits, spaces, `+`, `-` or parentheses.
pub fn is_valid_phone(phone: &str) -> bool {
    let strict = PHONE_REGEX.get_or_init(|| {
        Regex::new(r"^\+?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$").unwrap()
    });
    let loose = PHONE_LOOSE_REGEX.get_or_init(|| Regex::new(r"^[0-9\s+\-()]{8,}$").unwrap());
    strict.is_match(phone) || loose.is_match(phone)
}

/// Validate the contact fields under `flow`'s rules.
pub fn validate_contact(
    fields: ContactFields<'_>,
    flow: ContactFlow,
    l10n: &LocalizationContext,
) -> ValidationErrors {
    let required = || l10n.resolve("validation.required").to_string();
    let mut errors = ValidationErrors::new();

    if fields.name.trim().is_empty() {
        errors.insert(FieldName::Name, required());
    }

    // The service form only rejects a truly empty email as missing
    let email_missing = match flow {
        ContactFlow::ServiceRequest => fields.email.is_empty(),
        ContactFlow::GeneralInquiry => fields.email.trim().is_empty(),
    };
    if email_missing {
        errors.insert(FieldName::Email, required());
    } else if !is_valid_email(fields.email, flow) {
        errors.insert(FieldName::Email, l10n.resolve("validation.email_invalid"));
    }

    let phone = fields.phone.trim();
    match flow.phone_rule() {
        PhoneRule::Required if phone.is_empty() => {
            errors.insert(FieldName::Phone, required());
        }
        PhoneRule::OptionalPattern if !phone.is_empty() && !is_valid_phone(fields.phone) => {
            errors.insert(FieldName::Phone, l10n.resolve("validation.phone_invalid"));
        }
        _ => {}
    }

    let (body_field, body) = fields.body;
    if body.trim().is_empty() {
        errors.insert(body_field, required());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::TranslationTables;

    fn l10n() -> LocalizationContext {
        LocalizationContext::in_memory(TranslationTables::bundled().unwrap())
    }

    fn fields<'a>(name: &'a str, email: &'a str, phone: &'a str, body: &'a str) -> ContactFields<'a> {
        ContactFields {
            name,
            email,
            phone,
            body: (FieldName::Description, body),
        }
    }

    // ==================== Email Tests ====================

    #[test]
    fn test_email_valid_in_both_flows() {
        for flow in [ContactFlow::ServiceRequest, ContactFlow::GeneralInquiry] {
            assert!(is_valid_email("jan@example.com", flow));
            assert!(!is_valid_email("x", flow));
            assert!(!is_valid_email("jan@example", flow));
        }
    }

    #[test]
    fn test_email_flows_differ_on_embedded_address() {
        let input = "mail me: jan@example.com please";
        assert!(is_valid_email(input, ContactFlow::ServiceRequest));
        assert!(!is_valid_email(input, ContactFlow::GeneralInquiry));
    }

    #[test]
    fn test_email_inquiry_rejects_double_at() {
        assert!(!is_valid_email("a@b@c.nl", ContactFlow::GeneralInquiry));
    }

    // ==================== Phone Tests ====================

    #[test]
    fn test_phone_strict_shapes() {
        assert!(is_valid_phone("0612345678"));
        assert!(is_valid_phone("(061) 234-5678"));
        assert!(is_valid_phone("+061.234.56789"));
    }

    #[test]
    fn test_phone_loose_shapes() {
        assert!(is_valid_phone("+31 6 12345678"));
        assert!(is_valid_phone("06-26 62 51 90"));
    }

    #[test]
    fn test_phone_rejects_short_or_lettered() {
        assert!(!is_valid_phone("12-34"));
        assert!(!is_valid_phone("call me maybe"));
        assert!(!is_valid_phone("0612345678 ext"));
    }

    // ==================== validate_contact Tests ====================

    #[test]
    fn test_all_empty_service_flow() {
        let errors = validate_contact(fields("", "x", "", ""), ContactFlow::ServiceRequest, &l10n());
        assert_eq!(
            errors.fields(),
            vec![
                FieldName::Name,
                FieldName::Email,
                FieldName::Phone,
                FieldName::Description
            ]
        );
        assert_eq!(errors.get(FieldName::Name), Some("Dit veld is verplicht"));
        assert_eq!(
            errors.get(FieldName::Email),
            Some("Vul een geldig e-mailadres in")
        );
    }

    #[test]
    fn test_whitespace_email_message_per_flow() {
        let ctx = l10n();
        let service = validate_contact(
            fields("Jan", "   ", "0612345678", "Hallo"),
            ContactFlow::ServiceRequest,
            &ctx,
        );
        assert_eq!(
            service.get(FieldName::Email),
            Some("Vul een geldig e-mailadres in")
        );

        let inquiry = validate_contact(
            fields("Jan", "   ", "", "Hallo"),
            ContactFlow::GeneralInquiry,
            &ctx,
        );
        assert_eq!(inquiry.get(FieldName::Email), Some("Dit veld is verplicht"));
    }

    #[test]
    fn test_all_empty_inquiry_flow_phone_optional() {
        let errors = validate_contact(fields("", "x", "", ""), ContactFlow::GeneralInquiry, &l10n());
        assert!(!errors.contains(FieldName::Phone));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_inquiry_flow_checks_phone_shape() {
        let errors = validate_contact(
            fields("Jan", "jan@example.com", "abc", "Hallo"),
            ContactFlow::GeneralInquiry,
            &l10n(),
        );
        assert_eq!(errors.fields(), vec![FieldName::Phone]);
        assert_eq!(
            errors.get(FieldName::Phone),
            Some("Vul een geldig telefoonnummer in")
        );
    }

    #[test]
    fn test_service_flow_does_not_check_phone_shape() {
        let errors = validate_contact(
            fields("Jan", "jan@example.com", "abc", "Hallo"),
            ContactFlow::ServiceRequest,
            &l10n(),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let errors = validate_contact(
            fields("   ", "  ", " ", "\n\t"),
            ContactFlow::ServiceRequest,
            &l10n(),
        );
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(FieldName::Email), Some("Dit veld is verplicht"));
    }

    #[test]
    fn test_messages_follow_active_language() {
        let mut ctx = l10n();
        ctx.set_language("en");
        let errors = validate_contact(fields("", "a@b.c", "1", "x"), ContactFlow::ServiceRequest, &ctx);
        assert_eq!(errors.get(FieldName::Name), Some("This field is required"));
    }

    #[test]
    fn test_body_field_is_reported_under_its_name() {
        let errors = validate_contact(
            ContactFields {
                name: "Jan",
                email: "jan@example.com",
                phone: "",
                body: (FieldName::Message, ""),
            },
            ContactFlow::GeneralInquiry,
            &l10n(),
        );
        assert_eq!(errors.fields(), vec![FieldName::Message]);
    }

    #[test]
    fn test_clear_field() {
        let mut errors = ValidationErrors::new();
        errors.insert(FieldName::Name, "x");
        errors.insert(FieldName::Email, "y");
        assert!(errors.clear_field(FieldName::Name));
        assert!(!errors.clear_field(FieldName::Name));
        assert_eq!(errors.fields(), vec![FieldName::Email]);
    }

    #[test]
    fn test_errors_serialize_as_map() {
        let mut errors = ValidationErrors::new();
        errors.insert(FieldName::StartDate, "bad");
        assert_eq!(
            serde_json::to_string(&errors).unwrap(),
            r#"{"startDate":"bad"}"#
        );
    }
}
