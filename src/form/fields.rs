//! Field names, service variants and the variant-specific field sets.

use crate::form::FormError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Every input a request form can carry, named as on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Address,
    StartDate,
    EndDate,
    Description,
    Subject,
    Message,
    FramesCount,
    FloorLevel,
    Accessibility,
    PropertyType,
    YearBuilt,
    JobType,
    Material,
    Urgency,
}

impl FieldName {
    pub const ALL: [FieldName; 17] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Address,
        FieldName::StartDate,
        FieldName::EndDate,
        FieldName::Description,
        FieldName::Subject,
        FieldName::Message,
        FieldName::FramesCount,
        FieldName::FloorLevel,
        FieldName::Accessibility,
        FieldName::PropertyType,
        FieldName::YearBuilt,
        FieldName::JobType,
        FieldName::Material,
        FieldName::Urgency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Address => "address",
            FieldName::StartDate => "startDate",
            FieldName::EndDate => "endDate",
            FieldName::Description => "description",
            FieldName::Subject => "subject",
            FieldName::Message => "message",
            FieldName::FramesCount => "framesCount",
            FieldName::FloorLevel => "floorLevel",
            FieldName::Accessibility => "accessibility",
            FieldName::PropertyType => "propertyType",
            FieldName::YearBuilt => "yearBuilt",
            FieldName::JobType => "jobType",
            FieldName::Material => "material",
            FieldName::Urgency => "urgency",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Service category a request form is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceVariant {
    Houtrot,
    Timmerwerk,
    Inspecties,
}

impl ServiceVariant {
    pub fn code(&self) -> &'static str {
        match self {
            ServiceVariant::Houtrot => "houtrot",
            ServiceVariant::Timmerwerk => "timmerwerk",
            ServiceVariant::Inspecties => "inspecties",
        }
    }

    /// Translation key of the service title.
    pub fn title_key(&self) -> &'static str {
        match self {
            ServiceVariant::Houtrot => "services.houtrot",
            ServiceVariant::Timmerwerk => "services.timmerwerk",
            ServiceVariant::Inspecties => "services.inspecties",
        }
    }
}

impl fmt::Display for ServiceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::High => "high",
            Urgency::Medium => "medium",
            Urgency::Low => "low",
        }
    }

    /// Translation key of the option label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Urgency::High => "forms.opt_high",
            Urgency::Medium => "forms.opt_medium",
            Urgency::Low => "forms.opt_low",
        }
    }
}

impl FromStr for Urgency {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Urgency::High),
            "medium" => Ok(Urgency::Medium),
            "low" => Ok(Urgency::Low),
            other => Err(FormError::InvalidValue {
                field: FieldName::Urgency,
                value: other.to_string(),
            }),
        }
    }
}

/// Subject options of the general contact page. The option text doubles as
/// its value, so these stay Dutch in every language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum InquirySubject {
    #[default]
    #[serde(rename = "Inspectie aanvragen")]
    Inspection,
    #[serde(rename = "Offerte houtrotherstel")]
    WoodRotQuote,
    #[serde(rename = "Timmerwerk")]
    Carpentry,
    #[serde(rename = "Overig")]
    Other,
}

impl InquirySubject {
    pub const ALL: [InquirySubject; 4] = [
        InquirySubject::Inspection,
        InquirySubject::WoodRotQuote,
        InquirySubject::Carpentry,
        InquirySubject::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InquirySubject::Inspection => "Inspectie aanvragen",
            InquirySubject::WoodRotQuote => "Offerte houtrotherstel",
            InquirySubject::Carpentry => "Timmerwerk",
            InquirySubject::Other => "Overig",
        }
    }
}

impl FromStr for InquirySubject {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InquirySubject::ALL
            .into_iter()
            .find(|subject| subject.label() == s)
            .ok_or_else(|| FormError::InvalidValue {
                field: FieldName::Subject,
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoutrotFields {
    pub frames_count: String,
    pub floor_level: String,
    pub accessibility: String,
    pub urgency: Option<Urgency>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimmerwerkFields {
    pub job_type: String,
    pub material: String,
    pub property_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectiesFields {
    pub property_type: String,
    pub year_built: String,
    pub frames_count: String,
}

/// Service-specific questions. The variant is chosen when the form is created
/// and decides which fields exist; none of them is ever required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum ServiceDetails {
    Houtrot(HoutrotFields),
    Timmerwerk(TimmerwerkFields),
    Inspecties(InspectiesFields),
}

impl ServiceDetails {
    pub fn empty(variant: ServiceVariant) -> Self {
        match variant {
            ServiceVariant::Houtrot => ServiceDetails::Houtrot(HoutrotFields::default()),
            ServiceVariant::Timmerwerk => ServiceDetails::Timmerwerk(TimmerwerkFields::default()),
            ServiceVariant::Inspecties => ServiceDetails::Inspecties(InspectiesFields::default()),
        }
    }

    pub fn variant(&self) -> ServiceVariant {
        match self {
            ServiceDetails::Houtrot(_) => ServiceVariant::Houtrot,
            ServiceDetails::Timmerwerk(_) => ServiceVariant::Timmerwerk,
            ServiceDetails::Inspecties(_) => ServiceVariant::Inspecties,
        }
    }

    /// Fields this variant renders, in form order.
    pub fn fields(&self) -> &'static [FieldName] {
        match self {
            ServiceDetails::Houtrot(_) => &[
                FieldName::FramesCount,
                FieldName::FloorLevel,
                FieldName::Accessibility,
                FieldName::Urgency,
            ],
            ServiceDetails::Timmerwerk(_) => &[
                FieldName::JobType,
                FieldName::Material,
                FieldName::PropertyType,
            ],
            ServiceDetails::Inspecties(_) => &[
                FieldName::PropertyType,
                FieldName::YearBuilt,
                FieldName::FramesCount,
            ],
        }
    }

    /// Assign a variant field. An empty urgency clears the selection.
    pub fn set(&mut self, field: FieldName, value: &str) -> Result<(), FormError> {
        let slot = match (&mut *self, field) {
            (ServiceDetails::Houtrot(f), FieldName::Urgency) => {
                f.urgency = if value.is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
                return Ok(());
            }
            (ServiceDetails::Houtrot(f), FieldName::FramesCount) => &mut f.frames_count,
            (ServiceDetails::Houtrot(f), FieldName::FloorLevel) => &mut f.floor_level,
            (ServiceDetails::Houtrot(f), FieldName::Accessibility) => &mut f.accessibility,
            (ServiceDetails::Timmerwerk(f), FieldName::JobType) => &mut f.job_type,
            (ServiceDetails::Timmerwerk(f), FieldName::Material) => &mut f.material,
            (ServiceDetails::Timmerwerk(f), FieldName::PropertyType) => &mut f.property_type,
            (ServiceDetails::Inspecties(f), FieldName::PropertyType) => &mut f.property_type,
            (ServiceDetails::Inspecties(f), FieldName::YearBuilt) => &mut f.year_built,
            (ServiceDetails::Inspecties(f), FieldName::FramesCount) => &mut f.frames_count,
            (details, field) => {
                return Err(FormError::NotApplicable {
                    field,
                    form: details.variant().code(),
                })
            }
        };
        *slot = value.to_string();
        Ok(())
    }

    /// Number of window frames, if the variant asks for it and it was given.
    pub fn frames_count(&self) -> Option<&str> {
        let frames = match self {
            ServiceDetails::Houtrot(f) => &f.frames_count,
            ServiceDetails::Inspecties(f) => &f.frames_count,
            ServiceDetails::Timmerwerk(_) => return None,
        };
        Some(frames.as_str()).filter(|s| !s.trim().is_empty())
    }

    pub fn urgency(&self) -> Option<Urgency> {
        match self {
            ServiceDetails::Houtrot(f) => f.urgency,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name_roundtrip() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>().unwrap(), field);
        }
    }

    #[test]
    fn test_field_name_unknown() {
        assert_eq!(
            "frames".parse::<FieldName>(),
            Err(FormError::UnknownField("frames".to_string()))
        );
    }

    #[test]
    fn test_field_name_serializes_camel_case() {
        assert_eq!(
            serde_json::to_string(&FieldName::FramesCount).unwrap(),
            "\"framesCount\""
        );
    }

    #[test]
    fn test_urgency_parse() {
        assert_eq!("high".parse::<Urgency>().unwrap(), Urgency::High);
        assert!("opt_medium".parse::<Urgency>().is_err());
    }

    #[test]
    fn test_subject_parse_and_default() {
        assert_eq!(InquirySubject::default().label(), "Inspectie aanvragen");
        assert_eq!(
            "Overig".parse::<InquirySubject>().unwrap(),
            InquirySubject::Other
        );
        assert!("Anders".parse::<InquirySubject>().is_err());
    }

    #[test]
    fn test_details_set_applicable_field() {
        let mut details = ServiceDetails::empty(ServiceVariant::Timmerwerk);
        details.set(FieldName::Material, "eiken").unwrap();
        assert_eq!(
            details,
            ServiceDetails::Timmerwerk(TimmerwerkFields {
                material: "eiken".to_string(),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_details_reject_foreign_field() {
        let mut details = ServiceDetails::empty(ServiceVariant::Timmerwerk);
        assert_eq!(
            details.set(FieldName::Urgency, "high"),
            Err(FormError::NotApplicable {
                field: FieldName::Urgency,
                form: "timmerwerk"
            })
        );
        assert!(details.set(FieldName::Name, "Jan").is_err());
    }

    #[test]
    fn test_details_urgency() {
        let mut details = ServiceDetails::empty(ServiceVariant::Houtrot);
        assert_eq!(details.urgency(), None);

        details.set(FieldName::Urgency, "low").unwrap();
        assert_eq!(details.urgency(), Some(Urgency::Low));

        details.set(FieldName::Urgency, "").unwrap();
        assert_eq!(details.urgency(), None);

        assert!(details.set(FieldName::Urgency, "asap").is_err());
    }

    #[test]
    fn test_frames_count_only_when_set() {
        let mut details = ServiceDetails::empty(ServiceVariant::Inspecties);
        assert_eq!(details.frames_count(), None);
        details.set(FieldName::FramesCount, "4").unwrap();
        assert_eq!(details.frames_count(), Some("4"));
        assert_eq!(
            ServiceDetails::empty(ServiceVariant::Timmerwerk).frames_count(),
            None
        );
    }

    #[test]
    fn test_every_listed_field_is_settable() {
        for variant in [
            ServiceVariant::Houtrot,
            ServiceVariant::Timmerwerk,
            ServiceVariant::Inspecties,
        ] {
            let mut details = ServiceDetails::empty(variant);
            for field in details.fields() {
                let value = if *field == FieldName::Urgency { "medium" } else { "x" };
                assert!(details.set(*field, value).is_ok(), "{} {}", variant, field);
            }
        }
    }

    #[test]
    fn test_details_serialize_with_variant_tag() {
        let mut details = ServiceDetails::empty(ServiceVariant::Houtrot);
        details.set(FieldName::Urgency, "high").unwrap();
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["variant"], "houtrot");
        assert_eq!(json["urgency"], "high");
        assert_eq!(json["framesCount"], "");
    }
}
