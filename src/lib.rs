pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod notify;
pub mod profile;

#[cfg(test)]
mod test_util;

use entrait::Impl;

/// Runs the configured command against the real API.
pub async fn run(app: app::App) -> error::PfResult<()> {
    let user_id = app.config.user_id;
    let config = app.config.clone();
    let app = Impl::new(app);

    cli::run(&app, user_id, &config.command).await
}
