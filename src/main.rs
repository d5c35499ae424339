// src/main.rs
use anyhow::Result;
use homeguide::application::{
    ports::time::Clock,
    services::{ApplicationServices, ServiceSettings},
};
use homeguide::config::AppConfig;
use homeguide::domain::{
    article::ArticleReadRepository, category::CategoryReadRepository,
    subscriber::SubscriberRepository,
};
use homeguide::infrastructure::{
    sanity::{
        SanityArticleRepository, SanityCategoryRepository, SanityClient,
        SanitySubscriberRepository,
    },
    time::SystemClock,
};
use homeguide::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    if config.sanity().token.is_none() {
        tracing::warn!("no content backend write token configured; signups will fail");
    }

    let client = Arc::new(SanityClient::new(config.sanity())?);
    let article_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(SanityArticleRepository::new(Arc::clone(&client)));
    let category_repo: Arc<dyn CategoryReadRepository> =
        Arc::new(SanityCategoryRepository::new(Arc::clone(&client)));
    let subscriber_repo: Arc<dyn SubscriberRepository> =
        Arc::new(SanitySubscriberRepository::new(Arc::clone(&client)));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        article_repo,
        category_repo,
        subscriber_repo,
        clock,
        ServiceSettings {
            site_url: config.site_url().to_string(),
            subscriber_source: config.subscriber_source().to_string(),
        },
    ));

    let state = HttpState::new(services, config.revalidate());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        dataset = %config.sanity().dataset,
        "listening on {address}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,reqwest=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
