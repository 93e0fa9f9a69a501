use crate::domain::model::NewVendor;
use crate::utils::error::{DirectoryError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn postal_code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // A1A 1A1, A1A-1A1 or A1A1A1, either case
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z]\d[A-Za-z][ -]?\d[A-Za-z]\d$").expect("postal code pattern is valid")
    })
}

pub fn validate_postal_code(value: &str) -> Result<()> {
    if postal_code_regex().is_match(value) {
        Ok(())
    } else {
        Err(DirectoryError::InvalidPostalCode {
            value: value.to_string(),
        })
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DirectoryError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DirectoryError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(DirectoryError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

impl Validate for NewVendor {
    /// Required fields first, then contact fields, then the postal code.
    fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.company_name.is_empty() {
            missing.push("companyName");
        }
        if self.services.is_empty() {
            missing.push("services");
        }
        if self.province.is_empty() {
            missing.push("province");
        }
        if self.city.is_empty() {
            missing.push("city");
        }
        if self.postal_code.is_empty() {
            missing.push("postalCode");
        }
        if self.contact_info.is_none() {
            missing.push("contactInfo");
        }
        if self.business_number.is_empty() {
            missing.push("businessNumber");
        }
        if self.year_established == 0 {
            missing.push("yearEstablished");
        }
        if self.languages.is_empty() {
            missing.push("languages");
        }
        if !missing.is_empty() {
            return Err(DirectoryError::MissingFields {
                fields: missing.into_iter().map(String::from).collect(),
            });
        }

        if let Some(contact) = &self.contact_info {
            let missing: Vec<String> = [
                ("name", &contact.name),
                ("email", &contact.email),
                ("phone", &contact.phone),
            ]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field.to_string())
            .collect();
            if !missing.is_empty() {
                return Err(DirectoryError::MissingContactFields { fields: missing });
            }
        }

        validate_postal_code(&self.postal_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::NewVendorContact;

    fn new_vendor() -> NewVendor {
        NewVendor {
            company_name: "Maple Legal".to_string(),
            services: vec!["Legal".to_string()],
            province: "Ontario".to_string(),
            city: "Toronto".to_string(),
            postal_code: "M5V 2T6".to_string(),
            contact_info: Some(NewVendorContact {
                name: "Sam".to_string(),
                email: "sam@maple.ca".to_string(),
                phone: "416-555-0100".to_string(),
                role: Some("Partner".to_string()),
            }),
            business_number: "123456789RC0001".to_string(),
            year_established: 2004,
            certifications: None,
            languages: vec!["English".to_string(), "French".to_string()],
        }
    }

    #[test]
    fn test_validate_postal_code() {
        assert!(validate_postal_code("M5V 2T6").is_ok());
        assert!(validate_postal_code("m5v-2t6").is_ok());
        assert!(validate_postal_code("M5V2T6").is_ok());
        assert!(validate_postal_code("M5V  2T6").is_err());
        assert!(validate_postal_code("12345").is_err());
        assert!(validate_postal_code("M5V 2T6 ").is_err());
        assert!(validate_postal_code("").is_err());
    }

    #[test]
    fn test_valid_vendor_passes() {
        assert!(new_vendor().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_listed_in_order() {
        let mut vendor = new_vendor();
        vendor.languages.clear();
        vendor.company_name.clear();
        vendor.year_established = 0;

        match vendor.validate() {
            Err(DirectoryError::MissingFields { fields }) => {
                assert_eq!(fields, vec!["companyName", "yearEstablished", "languages"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_missing_contact_fields() {
        let mut vendor = new_vendor();
        if let Some(contact) = vendor.contact_info.as_mut() {
            contact.email.clear();
            contact.phone.clear();
        }

        match vendor.validate() {
            Err(DirectoryError::MissingContactFields { fields }) => {
                assert_eq!(fields, vec!["email", "phone"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_bad_postal_code_rejected_last() {
        let mut vendor = new_vendor();
        vendor.postal_code = "90210".to_string();
        assert!(matches!(
            vendor.validate(),
            Err(DirectoryError::InvalidPostalCode { .. })
        ));
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("suggest.default_limit", 5, 1).is_ok());
        assert!(validate_positive_number("suggest.default_limit", 0, 1).is_err());
    }
}
