use anyhow::Context;
use hello_function::config::get_config;
use hello_function::startup::Application;
use hello_function::telem::{get_subscriber, init_subscriber};

#[actix_web::main]
pub async fn main() -> anyhow::Result<()> {
    //config first, the subscriber takes its name and level from it
    let config = get_config().context("failed to load config")?;

    let subscriber = get_subscriber(&config.telemetry, std::io::stdout)?;
    init_subscriber(subscriber)?;

    let app = Application::build(config).context("failed to start the server")?;
    app.run_until_stopped().await?;
    Ok(())
}
