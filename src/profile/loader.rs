use crate::api::FetchProfile;
use crate::notify::Notify;
use crate::profile::form::ProfileForm;
use crate::profile::image::ImageUpdater;
use crate::profile::{EditDraft, ProfileRecord, UserId};

const LOAD_FAILED: &str = "Failed to load profile";

/// A loaded profile screen: the record as fetched, the editable form seeded
/// from it and the picture controls of the logged-in user.
#[derive(Debug)]
pub struct ProfileScreen {
    pub record: ProfileRecord,
    pub form: ProfileForm,
    pub image: ImageUpdater,
}

impl ProfileScreen {
    pub fn new(record: ProfileRecord, user_id: UserId) -> Self {
        let form = ProfileForm::new(EditDraft::from(&record));
        let image = ImageUpdater::new(user_id);
        Self {
            record,
            form,
            image,
        }
    }

    pub fn user_name(&self) -> &str {
        &self.record.user_name
    }

    pub fn email(&self) -> &str {
        &self.record.email
    }
}

#[derive(Debug)]
pub enum ProfileView {
    /// Nothing fetched yet, only a loading indicator is shown.
    Loading,
    Loaded(Box<ProfileScreen>),
    /// The fetch failed. There is no retry.
    Failed { message: String },
}

impl ProfileView {
    pub fn screen(&self) -> Option<&ProfileScreen> {
        match self {
            Self::Loaded(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn screen_mut(&mut self) -> Option<&mut ProfileScreen> {
        match self {
            Self::Loaded(screen) => Some(screen),
            _ => None,
        }
    }
}

/// Fetches the profile of `user_id` and seeds the edit state from it.
pub async fn load(deps: &(impl FetchProfile + Notify), user_id: UserId) -> ProfileView {
    tracing::info!("loading profile of user {user_id}");

    match deps.fetch_profile(user_id).await {
        Ok(record) => ProfileView::Loaded(Box::new(ProfileScreen::new(record, user_id))),
        Err(e) => {
            tracing::error!("could not load profile of user {user_id}: {e}");
            let message = e.user_message(LOAD_FAILED);
            deps.error(&message);
            ProfileView::Failed { message }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiMessage, FetchProfileMock, ImageRequest, UpdateProfileImageMock};
    use crate::error::PfError;
    use crate::notify::notifier::NotifyMock;
    use crate::profile::form::Field;
    use crate::profile::image::ImageOutcome;
    use crate::profile::Gender;

    use assert_matches::*;
    use unimock::*;

    #[tokio::test]
    async fn load_seeds_draft_from_record() {
        let deps = Unimock::new(
            FetchProfileMock
                .next_call(matching!(UserId(42)))
                .answers(&|_, id| {
                    Ok(serde_json::from_value(serde_json::json!({
                        "id": id,
                        "userName": "a.lovelace",
                        "email": "ada@example.com",
                        "firstName": "A",
                        "country": "United Kingdom",
                        "gender": "Female",
                        "description": null
                    }))
                    .unwrap())
                }),
        );

        let view = load(&deps, UserId(42)).await;

        let screen = view.screen().unwrap();
        assert_eq!("a.lovelace", screen.user_name());
        assert_eq!("ada@example.com", screen.email());
        assert_eq!(
            &EditDraft {
                first_name: "A".to_string(),
                country: "United Kingdom".to_string(),
                gender: Some(Gender::Female),
                ..Default::default()
            },
            screen.form.draft()
        );
        assert_eq!("", screen.form.binding(Field::Description).value);
        assert_eq!(None, screen.form.binding(Field::LastName).error);
        assert_eq!(None, screen.form.message());
        assert!(!screen.image.update_enabled());
    }

    #[tokio::test]
    async fn image_actions_use_the_logged_in_user() {
        let deps = Unimock::new((
            FetchProfileMock
                .next_call(matching!(UserId(42)))
                .answers(&|_, _| {
                    Ok(serde_json::from_value(serde_json::json!({ "id": 9, "firstName": "A" }))
                        .unwrap())
                }),
            UpdateProfileImageMock
                .next_call(matching!(ImageRequest {
                    user_id: UserId(42),
                    file: None,
                    is_deleted: true,
                }))
                .answers(&|_, _| {
                    Ok(ApiMessage {
                        message: "Image deleted".to_string(),
                    })
                }),
            NotifyMock::success
                .next_call(matching!("Image deleted"))
                .returns(()),
        ));

        let view = load(&deps, UserId(42)).await;
        let screen = view.screen().unwrap();

        assert_matches!(
            screen.image.confirm_delete(&deps).await,
            ImageOutcome::Success { .. }
        );
    }

    #[tokio::test]
    async fn record_without_id_still_loads() {
        let deps = Unimock::new(
            FetchProfileMock
                .next_call(matching!(_))
                .answers(&|_, _| {
                    Ok(serde_json::from_value(serde_json::json!({ "userName": "ada" })).unwrap())
                }),
        );

        let view = load(&deps, UserId(42)).await;

        assert_eq!("ada", view.screen().unwrap().user_name());
    }

    #[tokio::test]
    async fn failed_fetch_is_reported() {
        let deps = Unimock::new((
            FetchProfileMock.next_call(matching!(_)).answers(&|_, _| {
                Err(PfError::Rejected {
                    status: 404,
                    message: "User not found".to_string(),
                })
            }),
            NotifyMock::error
                .next_call(matching!("User not found"))
                .returns(()),
        ));

        let view = load(&deps, UserId(42)).await;

        assert_matches!(view, ProfileView::Failed { message } if message == "User not found");
    }

    #[tokio::test]
    async fn transport_failure_uses_fallback_message() {
        let deps = Unimock::new((
            FetchProfileMock
                .next_call(matching!(_))
                .answers(&|_, _| Err(anyhow::anyhow!("dns error").into())),
            NotifyMock::error
                .next_call(matching!("Failed to load profile"))
                .returns(()),
        ));

        let view = load(&deps, UserId(42)).await;

        assert_matches!(view, ProfileView::Failed { message } if message == LOAD_FAILED);
    }
}
