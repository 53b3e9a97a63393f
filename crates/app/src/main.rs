use tracing_subscriber::EnvFilter;

mod demo;
mod error;
mod settings;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(format!(
            "expense_demo={level},engine={level}",
            level = settings.app.level
        ))
        .map_err(error::AppError::from)?)
        .with_writer(std::io::stderr)
        .init();

    let params = settings.demo()?;
    tracing::debug!(?params, "loaded demo settings");

    demo::Demo::new(params).run();

    Ok(())
}
