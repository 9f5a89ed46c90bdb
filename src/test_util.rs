use crate::profile::{EditDraft, Gender, ProfileRecord, UserId};

pub fn test_record() -> ProfileRecord {
    ProfileRecord {
        id: UserId(42),
        user_name: "ada".to_string(),
        email: "ada@example.com".to_string(),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        country: Some("United Kingdom".to_string()),
        state: Some("Greater London".to_string()),
        city: Some("London".to_string()),
        zip_code: Some("W1".to_string()),
        timezone: Some("+01:00".to_string()),
        gender: Some(Gender::Female),
        description: Some("Analyst of engines".to_string()),
        profile_picture: None,
    }
}

pub fn complete_draft() -> EditDraft {
    EditDraft::from(&test_record())
}
