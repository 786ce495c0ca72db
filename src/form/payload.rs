use crate::form::{ImageSummary, InquirySubject, ServiceDetails, ServiceVariant};
use serde::Serialize;

/// Structured submission for the primary (non-WhatsApp) channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmissionPayload {
    ServiceRequest(ServiceRequestPayload),
    GeneralInquiry(InquiryPayload),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequestPayload {
    pub service: ServiceVariant,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: String,
    pub details: ServiceDetails,
    pub images: Vec<ImageSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryPayload {
    pub name: String,
    pub phone: Option<String>,
    pub email: String,
    pub subject: InquirySubject,
    pub message: String,
    pub images: Vec<ImageSummary>,
}

impl SubmissionPayload {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionPayload::ServiceRequest(_) => "service_request",
            SubmissionPayload::GeneralInquiry(_) => "general_inquiry",
        }
    }

    pub fn image_count(&self) -> usize {
        match self {
            SubmissionPayload::ServiceRequest(p) => p.images.len(),
            SubmissionPayload::GeneralInquiry(p) => p.images.len(),
        }
    }
}

/// `Some` for a non-blank value.
pub(crate) fn non_blank(value: &str) -> Option<String> {
    Some(value).filter(|v| !v.trim().is_empty()).map(str::to_string)
}
