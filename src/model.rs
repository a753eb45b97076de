//! Onboarding domain records
//!
//! Serde renames keep the persisted JSON camelCased, matching records
//! written by earlier builds of the product. See the compatibility
//! note on [`crate::storage::Envelope`].

use crate::storage::keys;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered user record, persisted under `@user_data`.
///
/// A profile created at signup carries only the identity fields; the
/// additional-details wizard fills in the rest on completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: String,
    pub name: String,
    pub mobile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default)]
    pub nominee: Option<Nominee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<BankDetails>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Residential address collected in wizard step 2
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub pin_code: String,
    pub city: String,
    pub state: String,
}

/// Nominee declaration collected in wizard step 3
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nominee {
    pub name: String,
    pub date_of_birth: String,
    pub relation: String,
    pub age: u32,
}

/// Bank account collected in wizard step 5
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub ifsc_code: String,
    pub account_no: String,
    pub account_type: String,
    pub bank_name: String,
    pub branch_name: String,
    pub bank_address: String,
}

/// The three KYC document captures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pan,
    IdFront,
    IdBack,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [Self::Pan, Self::IdFront, Self::IdBack];

    /// Vault key holding this document's image reference
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Pan => keys::PAN_IMAGE,
            Self::IdFront => keys::UID_FRONT_IMAGE,
            Self::IdBack => keys::UID_BACK_IMAGE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pan => "PAN card",
            Self::IdFront => "ID proof (front)",
            Self::IdBack => "ID proof (back)",
        }
    }
}

/// Reference to a captured document image, persisted under the
/// document's own key
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentImage {
    /// Where the image lives on this device
    pub uri: String,
    /// SHA-256 of the image bytes at attach time
    pub sha256: String,
    pub attached_at: DateTime<Utc>,
}

/// Written under `@documents_verified` once all three documents are
/// submitted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRecord {
    pub verified_at: DateTime<Utc>,
    pub status: VerificationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Completed,
}

impl VerificationRecord {
    pub fn completed_now() -> Self {
        Self {
            verified_at: Utc::now(),
            status: VerificationStatus::Completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_serializes_camel_case() {
        let profile = UserProfile {
            email: "asha@example.com".into(),
            name: "Asha Rao".into(),
            mobile: "9876543210".into(),
            pan_number: Some("ABCDE1234F".into()),
            date_of_birth: Some("1990-04-01".into()),
            gender: Some(Gender::Female),
            address: Some(Address {
                line1: "12 MG Road".into(),
                line2: None,
                pin_code: "560001".into(),
                city: "Bengaluru".into(),
                state: "Karnataka".into(),
            }),
            nominee: None,
            bank_details: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["panNumber"], "ABCDE1234F");
        assert_eq!(json["address"]["pinCode"], "560001");
        assert_eq!(json["createdAt"].as_str().is_some(), true);
        // Declared-no nominee persists as an explicit null
        assert!(json.get("nominee").is_some());

        let back: UserProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back.name, "Asha Rao");
        assert_eq!(back.gender, Some(Gender::Female));
    }

    #[test]
    fn minimal_signup_profile_parses() {
        // Shape written at signup, before the wizard runs
        let json = serde_json::json!({
            "email": "r@example.com",
            "name": "Ravi",
            "mobile": "9000000001",
            "createdAt": "2026-08-01T10:00:00Z",
        });
        let profile: UserProfile = serde_json::from_value(json).unwrap();
        assert!(profile.pan_number.is_none());
        assert!(profile.bank_details.is_none());
    }

    #[test]
    fn document_kinds_map_to_distinct_keys() {
        let keys: Vec<_> = DocumentKind::ALL.iter().map(|k| k.storage_key()).collect();
        assert_eq!(keys.len(), 3);
        assert!(keys.contains(&"@pan_image"));
        assert!(keys.iter().all(|k| k.starts_with('@')));
    }

    #[test]
    fn verification_record_status_lowercase() {
        let record = VerificationRecord::completed_now();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["status"], "completed");
    }
}
