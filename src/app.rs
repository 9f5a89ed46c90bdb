use crate::api::ApiClient;
use crate::config::Config;
use crate::error::PfResult;
use crate::notify::Console;

use entrait::*;
use std::sync::Arc;

/// Everything the profile workflow needs from the outside world.
///
/// Workflow functions never see this type directly. They ask for the
/// capabilities they use (`FetchProfile`, `Notify`, ...) and receive an
/// `Impl<App>` in production and a `Unimock` in tests.
#[derive(Clone)]
pub struct App {
    pub config: Arc<Config>,
    pub api: ApiClient,
    pub console: Console,
}

impl App {
    pub fn new(config: Config) -> PfResult<Self> {
        let api = ApiClient::new(&config)?;

        Ok(Self {
            config: Arc::new(config),
            api,
            console: Console::default(),
        })
    }
}

#[entrait(pub GetApiClient, mock_api=GetApiClientMock)]
fn get_api_client(app: &App) -> &ApiClient {
    &app.api
}

#[entrait(pub GetConsole, mock_api=GetConsoleMock)]
fn get_console(app: &App) -> &Console {
    &app.console
}
