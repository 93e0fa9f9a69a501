use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::Validate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub company_name: String,
    pub services: Vec<String>,
    pub province: String,
    pub city: String,
    pub postal_code: String,
    pub contact_info: VendorContact,
    /// Canadian Business Number, stored as given.
    pub business_number: String,
    pub year_established: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
    pub languages: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Maps an explicit `null` to the type's default, so it reads as "missing".
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Contact details as submitted. Absent fields stay empty until validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVendorContact {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl From<NewVendorContact> for VendorContact {
    fn from(contact: NewVendorContact) -> Self {
        Self {
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            role: contact.role,
        }
    }
}

/// Registration payload: a vendor before the repository assigns identity and timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVendor {
    #[serde(default, deserialize_with = "null_as_default")]
    pub company_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub province: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub postal_code: String,
    #[serde(default)]
    pub contact_info: Option<NewVendorContact>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub business_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub year_established: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
}

impl NewVendor {
    /// Parses a registration body. Malformed input is reported as invalid input,
    /// missing or `null` fields are left for `validate`.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| DirectoryError::InvalidInput {
            message: e.to_string(),
        })
    }

    /// Validates, then builds the stored record. Both timestamps get the same instant.
    pub fn into_vendor(self, id: String, now: DateTime<Utc>) -> Result<Vendor> {
        self.validate()?;
        let contact_info = self
            .contact_info
            .ok_or_else(|| DirectoryError::MissingFields {
                fields: vec!["contactInfo".to_string()],
            })?;

        Ok(Vendor {
            id,
            company_name: self.company_name,
            services: self.services,
            province: self.province,
            city: self.city,
            postal_code: self.postal_code,
            contact_info: contact_info.into(),
            business_number: self.business_number,
            year_established: self.year_established,
            certifications: self.certifications,
            languages: self.languages,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Filter used by `search`. Every field is optional; empty fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchCriteria {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl SearchCriteria {
    /// Appends list values and replaces scalars that are set in `other`.
    pub fn merge(mut self, other: SearchCriteria) -> Self {
        self.keywords.extend(other.keywords);
        self.services.extend(other.services);
        self.certifications.extend(other.certifications);
        self.languages.extend(other.languages);
        if other.province.is_some() {
            self.province = other.province;
        }
        if other.city.is_some() {
            self.city = other.city;
        }
        self
    }
}

pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Body of a suggestion request. `keywords` and `services` are required arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestRequest {
    pub keywords: Vec<String>,
    pub services: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl SuggestRequest {
    /// Absent or non-positive limits fall back to `default`.
    pub fn effective_limit(&self, default: usize) -> usize {
        match self.limit {
            Some(limit) if limit > 0 => usize::try_from(limit).unwrap_or(usize::MAX),
            _ => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_serializes_camel_case() {
        let now = Utc::now();
        let vendor = NewVendor {
            company_name: "Acme".to_string(),
            services: vec!["Legal".to_string()],
            province: "ON".to_string(),
            city: "Ottawa".to_string(),
            postal_code: "K1A 0B1".to_string(),
            contact_info: Some(NewVendorContact {
                name: "Ann".to_string(),
                email: "ann@acme.ca".to_string(),
                phone: "555-0100".to_string(),
                role: None,
            }),
            business_number: "123456789".to_string(),
            year_established: 1999,
            certifications: None,
            languages: vec!["English".to_string()],
        }
        .into_vendor("v1".to_string(), now)
        .unwrap();

        let json = serde_json::to_value(&vendor).unwrap();
        assert_eq!(json["companyName"], "Acme");
        assert_eq!(json["contactInfo"]["email"], "ann@acme.ca");
        assert!(json.get("certifications").is_none());
        assert!(json["contactInfo"].get("role").is_none());
        assert_eq!(json["createdAt"], json["updatedAt"]);
    }

    const REGISTRATION: &str = r#"{
        "companyName": "Maple Audit",
        "services": ["Audit"],
        "province": "Ontario",
        "city": "Ottawa",
        "postalCode": "K1A 0B1",
        "contactInfo": {"name": "Ann"},
        "businessNumber": "123456789",
        "yearEstablished": 2001,
        "languages": ["English"]
    }"#;

    #[test]
    fn test_partial_contact_reports_missing_contact_fields() {
        let data = NewVendor::from_json(REGISTRATION).unwrap();
        match data.validate() {
            Err(DirectoryError::MissingContactFields { fields }) => {
                assert_eq!(fields, vec!["email", "phone"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_null_fields_read_as_missing() {
        let body = REGISTRATION
            .replace(r#"["Audit"]"#, "null")
            .replace("2001", "null")
            .replace(r#"{"name": "Ann"}"#, r#"{"name": "Ann", "email": null, "phone": "555"}"#);
        let data = NewVendor::from_json(&body).unwrap();
        assert!(data.services.is_empty());

        match data.validate() {
            Err(DirectoryError::MissingFields { fields }) => {
                assert_eq!(fields, vec!["services", "yearEstablished"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_body_is_invalid_input() {
        let err = NewVendor::from_json(r#"{"services": "Audit"}"#).unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidInput { .. }));
        assert_eq!(err.category(), crate::utils::error::ErrorCategory::Validation);

        assert!(NewVendor::from_json("{not json").is_err());
    }

    #[test]
    fn test_into_vendor_refuses_missing_contact() {
        let mut data = NewVendor::from_json(REGISTRATION).unwrap();
        data.contact_info = None;
        let result = data.into_vendor("v1".to_string(), Utc::now());
        assert!(matches!(result, Err(DirectoryError::MissingFields { .. })));
    }

    #[test]
    fn test_suggest_request_requires_arrays() {
        let missing = serde_json::from_str::<SuggestRequest>(r#"{"keywords": ["a"]}"#);
        assert!(missing.is_err());

        let scalar = serde_json::from_str::<SuggestRequest>(r#"{"keywords": "a", "services": []}"#);
        assert!(scalar.is_err());
    }

    #[test]
    fn test_effective_limit_defaults() {
        let mut request = SuggestRequest {
            keywords: vec![],
            services: vec![],
            limit: None,
        };
        assert_eq!(request.effective_limit(5), 5);
        request.limit = Some(0);
        assert_eq!(request.effective_limit(5), 5);
        request.limit = Some(-3);
        assert_eq!(request.effective_limit(5), 5);
        request.limit = Some(2);
        assert_eq!(request.effective_limit(5), 2);
    }

    #[test]
    fn test_criteria_rejects_unknown_fields() {
        let result = serde_json::from_str::<SearchCriteria>(r#"{"region": "west"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_criteria_merge() {
        let base = SearchCriteria {
            keywords: vec!["legal".to_string()],
            province: Some("ON".to_string()),
            ..Default::default()
        };
        let merged = base.merge(SearchCriteria {
            keywords: vec!["audit".to_string()],
            province: Some("QC".to_string()),
            ..Default::default()
        });
        assert_eq!(merged.keywords, vec!["legal", "audit"]);
        assert_eq!(merged.province.as_deref(), Some("QC"));
        assert!(merged.city.is_none());
    }
}
