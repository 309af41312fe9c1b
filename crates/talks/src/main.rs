use anyhow::anyhow;
use axum::serve;
use futures::TryFutureExt;
use log::{error, info, warn};
use std::{net::SocketAddr, str::FromStr};
use talks::{app, build_app_state, get_config_info, get_log_level, setup_logger};
use tokio::{net::TcpListener, signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (cli, config_source) = get_config_info()?;
    let log_level = get_log_level(&cli);

    setup_logger()
        .level(log_level)
        .level_for("sqlx", log::LevelFilter::Warn)
        .level_for("talks", log_level)
        .level_for("http_response", log_level)
        .level_for("http_request", log_level)
        .apply()?;

    let database_dir = cli.database_dir();
    let document_root = cli.document_root();
    let utc_offset = cli.utc_offset()?;
    let host = cli.host();
    let port = cli.port();

    dorset_talks_core::create_dir_all(&database_dir)?;
    if !dorset_talks_core::is_directory(&document_root) {
        warn!(
            "document root {} does not exist, slides and static files will 404",
            document_root
        );
    }

    let socket_addr = SocketAddr::from_str(&format!("{}:{}", host, port))
        .map_err(|e| anyhow!("invalid address: {}", e))?;

    let listener = TcpListener::bind(socket_addr)
        .map_err(|e| anyhow!("error binding to socket: {}", e))
        .await?;

    info!("PHP Dorset talks starting...");
    info!("  Config: {}", config_source);
    info!("  Listen: http://{}", socket_addr);
    info!("  Docs:   http://{}/docs", socket_addr);
    info!("  Database: {}", database_dir);
    info!("  Document root: {}", document_root);
    info!("  Month boundaries at UTC{}", utc_offset);

    let app_state = build_app_state(database_dir, document_root, utc_offset)
        .await
        .map_err(|e| {
            error!("error building app: {}", e);
            e
        })?;

    let app = app(app_state);

    serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
