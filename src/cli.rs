//! Terminal front end of the profile screen.

use crate::api::{FetchProfile, UpdateProfile, UpdateProfileImage};
use crate::error::{PfError, PfResult};
use crate::notify::Notify;
use crate::profile::choices::{is_country, timezone_label, COUNTRIES, TIMEZONES};
use crate::profile::form::{Field, SubmitOutcome};
use crate::profile::image::{ImageOutcome, PendingImage, Preview};
use crate::profile::loader::{self, ProfileScreen, ProfileView};
use crate::profile::{UserId, UPDATE_PASSWORD_ROUTE};

use anyhow::anyhow;
use std::fmt::{self, Write};
use std::path::PathBuf;

#[derive(clap::Subcommand)]
pub enum Command {
    /// Show the profile form.
    Show,
    /// Change profile fields and submit them.
    Edit(EditArgs),
    /// Upload or remove the profile picture.
    Image {
        #[clap(subcommand)]
        command: ImageCommand,
    },
    /// List the timezone choices.
    Timezones,
    /// List the country choices.
    Countries,
}

#[derive(clap::Subcommand)]
pub enum ImageCommand {
    /// Upload a new picture (at most 2 MB).
    Set { path: PathBuf },
    /// Remove the current picture.
    Delete,
}

#[derive(clap::Args, Default)]
pub struct EditArgs {
    #[clap(long)]
    pub first_name: Option<String>,
    #[clap(long)]
    pub last_name: Option<String>,
    /// One of the names listed by `countries`.
    #[clap(long)]
    pub country: Option<String>,
    #[clap(long)]
    pub state: Option<String>,
    #[clap(long)]
    pub city: Option<String>,
    #[clap(long)]
    pub zip_code: Option<String>,
    /// One of the values listed by `timezones`, e.g. `+01:00`.
    #[clap(long)]
    pub timezone: Option<String>,
    #[clap(long, possible_values = ["Male", "Female"])]
    pub gender: Option<String>,
    #[clap(long)]
    pub description: Option<String>,
}

impl EditArgs {
    fn changes(&self) -> impl Iterator<Item = (Field, &str)> {
        [
            (Field::FirstName, &self.first_name),
            (Field::LastName, &self.last_name),
            (Field::Country, &self.country),
            (Field::State, &self.state),
            (Field::City, &self.city),
            (Field::ZipCode, &self.zip_code),
            (Field::Timezone, &self.timezone),
            (Field::Gender, &self.gender),
            (Field::Description, &self.description),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|value| (field, value)))
    }

    /// Country and timezone are picked from fixed lists. An empty value
    /// clears the field and is left to form validation.
    fn check_choices(&self) -> PfResult<()> {
        if let Some(country) = self.country.as_deref() {
            if !country.is_empty() && !is_country(country) {
                return Err(anyhow!("unknown country {country:?}, see `countries`").into());
            }
        }
        if let Some(timezone) = self.timezone.as_deref() {
            if !timezone.is_empty() && timezone_label(timezone).is_none() {
                return Err(anyhow!("unknown timezone {timezone:?}, see `timezones`").into());
            }
        }
        Ok(())
    }
}

pub async fn run(
    deps: &(impl FetchProfile + UpdateProfile + UpdateProfileImage + Notify),
    user_id: UserId,
    command: &Command,
) -> PfResult<()> {
    match command {
        Command::Timezones => return print_text(|out| render_timezones(out)),
        Command::Countries => return print_text(|out| render_countries(out)),
        _ => {}
    }
    if let Command::Edit(args) = command {
        args.check_choices()?;
    }

    print_text(|out| render_view(out, &ProfileView::Loading))?;
    let mut view = loader::load(deps, user_id).await;
    let screen = match &mut view {
        ProfileView::Loaded(screen) => screen,
        ProfileView::Failed { message } => return Err(anyhow!("{message}").into()),
        ProfileView::Loading => return Err(anyhow!("profile is still loading").into()),
    };

    match command {
        Command::Edit(args) => edit(deps, screen, args).await?,
        Command::Image { command } => image(deps, screen, command).await?,
        Command::Show | Command::Timezones | Command::Countries => {}
    }

    print_text(|out| render_view(out, &view))
}

fn print_text(render: impl FnOnce(&mut String) -> fmt::Result) -> PfResult<()> {
    let mut out = String::new();
    render(&mut out).map_err(anyhow::Error::from)?;
    print!("{out}");
    Ok(())
}

async fn edit(
    deps: &(impl UpdateProfile + Notify),
    screen: &mut ProfileScreen,
    args: &EditArgs,
) -> PfResult<()> {
    for (field, value) in args.changes() {
        screen.form.change(field, value);
        screen.form.blur(field);
    }

    match screen.form.submit(deps).await {
        SubmitOutcome::Saved { .. } => Ok(()),
        SubmitOutcome::Invalid(errors) => Err(PfError::Validation(errors)),
        SubmitOutcome::Failed { message } => Err(anyhow!("{message}").into()),
    }
}

async fn image(
    deps: &(impl UpdateProfileImage + Notify),
    screen: &mut ProfileScreen,
    command: &ImageCommand,
) -> PfResult<()> {
    let outcome = match command {
        ImageCommand::Set { path } => {
            let file = PendingImage::open(path).await?;
            if !screen.image.select_image(deps, file) {
                return Err(anyhow!("image {} is too large", path.display()).into());
            }
            screen.image.confirm_update(deps).await
        }
        ImageCommand::Delete => screen.image.confirm_delete(deps).await,
    };

    match outcome {
        ImageOutcome::Success { .. } => Ok(()),
        ImageOutcome::Failed { message } => Err(anyhow!("{message}").into()),
        ImageOutcome::Ignored => Err(anyhow!("image controls are disabled").into()),
    }
}

/// The profile view as text. A loading view is a single line.
pub fn render_view(out: &mut impl Write, view: &ProfileView) -> fmt::Result {
    match view {
        ProfileView::Loading => writeln!(out, "Loading profile..."),
        ProfileView::Loaded(screen) => render(out, screen),
        ProfileView::Failed { message } => writeln!(out, "{message}"),
    }
}

/// The profile screen as text. Read-only identity fields come first.
pub fn render(out: &mut impl Write, screen: &ProfileScreen) -> fmt::Result {
    let picture = match screen.image.preview(&screen.form.draft().profile_picture) {
        Preview::Local(path) => format!("{} (not uploaded)", path.display()),
        Preview::Remote(url) => url,
        Preview::Empty => "-".to_string(),
    };
    writeln!(out, "{:<16}{}", "Picture", picture)?;
    writeln!(out, "{:<16}{}", "Username", screen.user_name())?;
    writeln!(out, "{:<16}{}", "Email", screen.email())?;

    for binding in screen.form.bindings() {
        if binding.field == Field::ProfilePicture {
            continue;
        }
        let value = match binding.field {
            Field::Timezone => timezone_label(binding.value).unwrap_or(binding.value),
            _ => binding.value,
        };
        write!(out, "{:<16}{}", binding.field.label(), value)?;
        if let Some(error) = binding.error {
            write!(out, "  <- {error}")?;
        }
        writeln!(out)?;
    }

    if let Some(message) = screen.form.message() {
        writeln!(out, "\n{message}")?;
    }
    writeln!(out, "\nChange password: {UPDATE_PASSWORD_ROUTE}")
}

pub fn render_timezones(out: &mut impl Write) -> fmt::Result {
    for (value, label) in TIMEZONES {
        writeln!(out, "{value}  {label}")?;
    }
    Ok(())
}

pub fn render_countries(out: &mut impl Write) -> fmt::Result {
    for country in COUNTRIES {
        writeln!(out, "{country}")?;
    }
    Ok(())
}
