//! Form state for the profile editor: field bindings, validation and submit.

use crate::api::UpdateProfile;
use crate::notify::Notify;
use crate::profile::{EditDraft, Gender};

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

const UPDATE_FAILED: &str = "Failed to update profile";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Country,
    State,
    City,
    ZipCode,
    Timezone,
    Gender,
    Description,
    ProfilePicture,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::FirstName,
        Field::LastName,
        Field::Country,
        Field::State,
        Field::City,
        Field::ZipCode,
        Field::Timezone,
        Field::Gender,
        Field::Description,
        Field::ProfilePicture,
    ];

    /// Fields that must be non-empty before a draft can be submitted.
    pub const REQUIRED: [Field; 8] = [
        Field::FirstName,
        Field::LastName,
        Field::Country,
        Field::State,
        Field::City,
        Field::ZipCode,
        Field::Timezone,
        Field::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Country => "Country",
            Self::State => "State",
            Self::City => "City",
            Self::ZipCode => "Zipcode",
            Self::Timezone => "Timezone",
            Self::Gender => "Gender",
            Self::Description => "Description",
            Self::ProfilePicture => "Profile Picture",
        }
    }
}

impl EditDraft {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Country => &self.country,
            Field::State => &self.state,
            Field::City => &self.city,
            Field::ZipCode => &self.zip_code,
            Field::Timezone => &self.timezone,
            Field::Gender => self.gender.map(Gender::as_str).unwrap_or(""),
            Field::Description => &self.description,
            Field::ProfilePicture => &self.profile_picture,
        }
    }

    /// Sets a field from its raw input. A gender other than `Male` or
    /// `Female` clears the choice.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Country => &mut self.country,
            Field::State => &mut self.state,
            Field::City => &mut self.city,
            Field::ZipCode => &mut self.zip_code,
            Field::Timezone => &mut self.timezone,
            Field::Gender => {
                self.gender = value.parse().ok();
                return;
            }
            Field::Description => &mut self.description,
            Field::ProfilePicture => &mut self.profile_picture,
        };
        *slot = value;
    }
}

/// Validation errors keyed by field.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorMap(BTreeMap<Field, Cow<'static, str>>);

impl ErrorMap {
    pub fn insert(&mut self, field: Field, message: impl Into<Cow<'static, str>>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(AsRef::as_ref)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_ref()))
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (_, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(message)?;
        }
        Ok(())
    }
}

/// Presence check of every required field. No format rules.
pub fn validate(draft: &EditDraft) -> ErrorMap {
    let mut errors = ErrorMap::default();
    for field in Field::REQUIRED {
        if draft.value(field).is_empty() {
            errors.insert(field, format!("{} is required", field.label()));
        }
    }
    errors
}

/// What a single input renders: its current value and, once the field has
/// been touched, its validation error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldBinding<'a> {
    pub field: Field,
    pub value: &'a str,
    pub error: Option<&'a str>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed, nothing was sent.
    Invalid(ErrorMap),
    Saved { message: String },
    Failed { message: String },
}

#[derive(Clone, Debug, Default)]
pub struct ProfileForm {
    draft: EditDraft,
    touched: BTreeSet<Field>,
    errors: ErrorMap,
    message: Option<String>,
}

impl ProfileForm {
    pub fn new(draft: EditDraft) -> Self {
        let errors = validate(&draft);
        Self {
            draft,
            touched: BTreeSet::new(),
            errors,
            message: None,
        }
    }

    pub fn draft(&self) -> &EditDraft {
        &self.draft
    }

    /// On-change handler.
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors = validate(&self.draft);
    }

    /// On-blur handler.
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn binding(&self, field: Field) -> FieldBinding<'_> {
        FieldBinding {
            field,
            value: self.draft.value(field),
            error: if self.is_touched(field) {
                self.errors.get(field)
            } else {
                None
            },
        }
    }

    pub fn bindings(&self) -> impl Iterator<Item = FieldBinding<'_>> {
        Field::ALL.into_iter().map(|field| self.binding(field))
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Message of the last submit, whichever way it went.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Validates and, when valid, sends the whole draft as one update.
    ///
    /// The outcome message is kept on the form and also notified.
    pub async fn submit(&mut self, deps: &(impl UpdateProfile + Notify)) -> SubmitOutcome {
        self.touched.extend(Field::ALL);
        self.errors = validate(&self.draft);

        if !self.errors.is_empty() {
            tracing::debug!("profile submit blocked: {}", self.errors);
            return SubmitOutcome::Invalid(self.errors.clone());
        }

        tracing::info!("submitting profile update");
        let outcome = match deps.update_profile(self.draft.clone()).await {
            Ok(response) => {
                deps.success(&response.message);
                SubmitOutcome::Saved {
                    message: response.message,
                }
            }
            Err(e) => {
                tracing::warn!("profile update failed: {e}");
                let message = e.user_message(UPDATE_FAILED);
                deps.error(&message);
                SubmitOutcome::Failed { message }
            }
        };

        self.message = match &outcome {
            SubmitOutcome::Saved { message } | SubmitOutcome::Failed { message } => {
                Some(message.clone())
            }
            SubmitOutcome::Invalid(_) => None,
        };
        outcome
    }
}
