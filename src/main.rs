use profile_editor::{app::App, config::Config};

use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::parse();
    let app = App::new(config)?;

    profile_editor::run(app).await?;

    Ok(())
}
