use anyhow::Context;
use axum::ServiceExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod blog;
mod config;
mod error;
mod render;
mod routes;
mod source;
mod state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = config::AppConfig::load().context("error loading configuration")?;
    let state = match settings.store()? {
        config::StoreConfig::Supabase { url, anon_key } => {
            tracing::info!("Reading posts from Supabase at {url}");
            state::State::new(
                source::Supabase::new(&url, anon_key, settings.request_timeout())?,
                settings.public_dir.clone(),
            )
        }
        config::StoreConfig::Local(path) => state::State::new(
            source::LocalPosts::load(&path)
                .await
                .with_context(|| format!("error loading local post store {path:?}"))?,
            settings.public_dir.clone(),
        ),
    };

    let app = routes::service(std::sync::Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&settings.server_addr)
        .await
        .with_context(|| format!("error binding {}", settings.server_addr))?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(
        listener,
        ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
    .await
    .context("error serving app")
}
