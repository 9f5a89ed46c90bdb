pub mod choices;
pub mod form;
pub mod image;
pub mod loader;

use std::fmt;
use std::str::FromStr;

/// Route of the password form, linked from the profile screen.
pub const UPDATE_PASSWORD_ROUTE: &str = "/update-password";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            other => Err(format!("unknown gender: {other:?}")),
        }
    }
}

/// Gender travels as a plain string where `""` means unset.
mod gender_field {
    use super::Gender;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(gender: &Option<Gender>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(gender.map(Gender::as_str).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Gender>, D::Error> {
        let value = Option::<String>::deserialize(d)?;
        Ok(value.and_then(|value| match value.parse() {
            Ok(gender) => Some(gender),
            Err(_) if value.is_empty() => None,
            Err(e) => {
                tracing::warn!("dropping gender from profile: {e}");
                None
            }
        }))
    }
}

/// The profile as the server knows it.
///
/// Editable fields may be missing or `null` in a response, so they are all
/// optional here. Identity fields are never edited client-side.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(default)]
    pub id: UserId,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default, with = "gender_field")]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// Local, editable copy of a profile. This is also the update payload.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditDraft {
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub zip_code: String,
    pub timezone: String,
    #[serde(with = "gender_field")]
    pub gender: Option<Gender>,
    pub description: String,
    #[serde(rename = "profile")]
    pub profile_picture: String,
}

impl From<&ProfileRecord> for EditDraft {
    fn from(record: &ProfileRecord) -> Self {
        fn or_empty(value: &Option<String>) -> String {
            value.clone().unwrap_or_default()
        }

        Self {
            first_name: or_empty(&record.first_name),
            last_name: or_empty(&record.last_name),
            country: or_empty(&record.country),
            state: or_empty(&record.state),
            city: or_empty(&record.city),
            zip_code: or_empty(&record.zip_code),
            timezone: or_empty(&record.timezone),
            gender: record.gender,
            description: or_empty(&record.description),
            profile_picture: or_empty(&record.profile_picture),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_tolerates_missing_and_null_fields() {
        let record: ProfileRecord = serde_json::from_str(
            r#"{
                "id": 42,
                "userName": "ada",
                "email": "ada@example.com",
                "firstName": "Ada",
                "lastName": null,
                "gender": ""
            }"#,
        )
        .unwrap();

        assert_eq!(UserId(42), record.id);
        assert_eq!(Some("Ada".to_string()), record.first_name);
        assert_eq!(None, record.last_name);
        assert_eq!(None, record.city);
        assert_eq!(None, record.gender);
    }

    #[test]
    fn unknown_gender_is_read_as_unset() {
        let record: ProfileRecord =
            serde_json::from_str(r#"{"userName": "ada", "gender": "Other"}"#).unwrap();

        assert_eq!(UserId::default(), record.id);
        assert_eq!(None, record.gender);
    }

    #[test]
    fn draft_payload_has_no_identity_fields() {
        let record = ProfileRecord {
            id: UserId(7),
            user_name: "ada".to_string(),
            email: "ada@example.com".to_string(),
            first_name: Some("Ada".to_string()),
            gender: Some(Gender::Female),
            profile_picture: Some("https://cdn.example.com/ada.png".to_string()),
            ..Default::default()
        };

        let payload = serde_json::to_value(EditDraft::from(&record)).unwrap();

        assert_eq!("Ada", payload["firstName"]);
        assert_eq!("", payload["lastName"]);
        assert_eq!("Female", payload["gender"]);
        assert_eq!("https://cdn.example.com/ada.png", payload["profile"]);
        assert!(payload.get("userName").is_none());
        assert!(payload.get("email").is_none());
        assert!(payload.get("id").is_none());
    }

    #[test]
    fn unset_gender_is_sent_as_empty_string() {
        let payload = serde_json::to_value(EditDraft::default()).unwrap();

        assert_eq!("", payload["gender"]);
    }
}
