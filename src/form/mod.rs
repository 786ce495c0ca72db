//! Service request and contact forms.
//!
//! - `fields`: field names, service variants and their variant-specific fields
//! - `validation`: the two contact flows and their rules
//! - `service` / `inquiry`: the concrete form shapes
//! - `model`: `FormModel`, the editing → submitted lifecycle around a shape
//! - `payload`: the structured submission a form projects to

mod error;
mod fields;
mod image;
mod inquiry;
mod model;
mod payload;
mod service;
mod validation;

pub use error::FormError;
pub use fields::{
    FieldName, HoutrotFields, InquirySubject, InspectiesFields, ServiceDetails, ServiceVariant,
    TimmerwerkFields, Urgency,
};
pub use image::{ImageAttachment, ImageSummary};
pub use inquiry::GeneralInquiry;
pub use model::{FormModel, FormPhase, FormSchema, SendOutcome, SubmitOutcome};
pub use payload::{InquiryPayload, ServiceRequestPayload, SubmissionPayload};
pub use service::ServiceRequest;
pub use validation::{
    is_valid_email, is_valid_phone, validate_contact, ContactFields, ContactFlow, PhoneRule,
    ValidationErrors,
};
