//! Profile picture upload and removal.
//!
//! Image changes run independently of the profile form. Each action goes
//! `Idle -> InFlight -> Idle`; while one is in flight both controls are
//! disabled, so a second action is ignored rather than queued.

use crate::api::{ImageRequest, UpdateProfileImage};
use crate::error::PfResult;
use crate::notify::Notify;
use crate::profile::UserId;

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Largest accepted image, 2 MiB.
pub const MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;

const TOO_LARGE: &str = "Image must be less than 2 MB.";
const UPDATE_FAILED: &str = "Failed to update image";

/// A locally picked file that has not been uploaded yet.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingImage {
    pub file_name: String,
    pub path: PathBuf,
    pub size: u64,
}

impl PendingImage {
    /// Picks a file from disk. Only metadata is read here.
    pub async fn open(path: impl AsRef<Path>) -> PfResult<Self> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            file_name,
            path: path.to_path_buf(),
            size: metadata.len(),
        })
    }

    /// MIME type guessed from the file extension.
    pub fn content_type(&self) -> String {
        mime_guess::from_path(&self.file_name)
            .first_or_octet_stream()
            .to_string()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ImageAction {
    Update,
    Delete,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ImagePhase {
    Idle,
    InFlight(ImageAction),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ImageOutcome {
    Success { message: String },
    Failed { message: String },
    /// The action could not start: something is in flight, or there is no
    /// file to upload.
    Ignored,
}

/// What the picture area shows.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Preview {
    Local(PathBuf),
    Remote(String),
    Empty,
}

#[derive(Debug)]
struct Controls {
    pending: Option<PendingImage>,
    /// Name shown by the file input.
    input: Option<String>,
    update_disabled: bool,
    delete_disabled: bool,
    phase: ImagePhase,
}

impl Controls {
    fn update_enabled(&self) -> bool {
        !self.update_disabled && self.phase == ImagePhase::Idle && self.pending.is_some()
    }

    fn delete_enabled(&self) -> bool {
        !self.delete_disabled && self.phase == ImagePhase::Idle
    }
}

#[derive(Debug)]
pub struct ImageUpdater {
    user_id: UserId,
    controls: Mutex<Controls>,
}

/// Re-enables the controls when dropped, whichever way the action ended.
struct InFlight<'a> {
    updater: &'a ImageUpdater,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut controls = self.updater.lock();
        controls.update_disabled = false;
        controls.delete_disabled = false;
        controls.phase = ImagePhase::Idle;
    }
}

impl ImageUpdater {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            controls: Mutex::new(Controls {
                pending: None,
                input: None,
                update_disabled: false,
                delete_disabled: false,
                phase: ImagePhase::Idle,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Controls> {
        self.controls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn phase(&self) -> ImagePhase {
        self.lock().phase
    }

    pub fn pending(&self) -> Option<PendingImage> {
        self.lock().pending.clone()
    }

    pub fn input(&self) -> Option<String> {
        self.lock().input.clone()
    }

    pub fn update_enabled(&self) -> bool {
        self.lock().update_enabled()
    }

    pub fn delete_enabled(&self) -> bool {
        self.lock().delete_enabled()
    }

    /// Local preview if a file is picked, else the current picture.
    pub fn preview(&self, current_picture: &str) -> Preview {
        match &self.lock().pending {
            Some(file) => Preview::Local(file.path.clone()),
            None if current_picture.is_empty() => Preview::Empty,
            None => Preview::Remote(current_picture.to_string()),
        }
    }

    /// Holds `file` for upload if it is small enough. An oversized file is
    /// refused with a warning and leaves nothing selected.
    pub fn select_image(&self, deps: &impl Notify, file: PendingImage) -> bool {
        let mut controls = self.lock();

        if file.size <= MAX_IMAGE_BYTES {
            tracing::debug!("selected image {} ({} bytes)", file.file_name, file.size);
            controls.input = Some(file.file_name.clone());
            controls.pending = Some(file);
            controls.update_disabled = false;
            true
        } else {
            tracing::debug!("refused image {} ({} bytes)", file.file_name, file.size);
            controls.input = None;
            controls.pending = None;
            drop(controls);
            deps.warning(TOO_LARGE);
            false
        }
    }

    pub async fn confirm_update(&self, deps: &(impl UpdateProfileImage + Notify)) -> ImageOutcome {
        self.run(deps, ImageAction::Update).await
    }

    pub async fn confirm_delete(&self, deps: &(impl UpdateProfileImage + Notify)) -> ImageOutcome {
        self.run(deps, ImageAction::Delete).await
    }

    fn begin(&self, action: ImageAction) -> Option<(InFlight<'_>, ImageRequest)> {
        let mut controls = self.lock();

        let request = match action {
            ImageAction::Update if controls.update_enabled() => {
                controls.input = None;
                ImageRequest {
                    user_id: self.user_id,
                    file: controls.pending.take(),
                    is_deleted: false,
                }
            }
            ImageAction::Delete if controls.delete_enabled() => ImageRequest {
                user_id: self.user_id,
                file: None,
                is_deleted: true,
            },
            _ => return None,
        };

        controls.update_disabled = true;
        controls.delete_disabled = true;
        controls.phase = ImagePhase::InFlight(action);

        Some((InFlight { updater: self }, request))
    }

    async fn run(&self, deps: &(impl UpdateProfileImage + Notify), action: ImageAction) -> ImageOutcome {
        let Some((_in_flight, request)) = self.begin(action) else {
            tracing::debug!("image {action:?} ignored");
            return ImageOutcome::Ignored;
        };

        tracing::info!("image {action:?} for user {}", self.user_id);
        match deps.update_profile_image(request).await {
            Ok(response) => {
                deps.success(&response.message);
                ImageOutcome::Success {
                    message: response.message,
                }
            }
            Err(e) => {
                tracing::warn!("image {action:?} failed: {e}");
                let message = e.user_message(UPDATE_FAILED);
                deps.error(&message);
                ImageOutcome::Failed { message }
            }
        }
    }
}
