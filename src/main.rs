use anyhow::{Context, Result};
use locale_blog::{article, config, index::ContentIndex, routes, state::AppState};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_blog=info".parse()?),
        )
        .init();

    info!("Starting blog server");

    // Load configuration from environment
    let config = config::Config::from_env()?;

    // Step 1: Load the content snapshot
    info!("Loading content from {}", config.content_file);
    let snapshot = article::load_snapshot(&config.content_file)?;
    let index = ContentIndex::from_snapshot(snapshot)?;

    // Step 2: The about page cannot render without an author record
    for locale in locale_blog::i18n::Locale::all() {
        if let Err(e) = index.author(locale) {
            error!("Refusing to start: {}", e);
            return Err(e.into());
        }
    }

    // Step 3: Serve
    let addr = config.listen_addr();
    info!("Default locale: {}", config.default_locale);
    let app = routes::create_router(AppState::new(config, index));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("✓ Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
