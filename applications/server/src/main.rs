/// HamalNews Server - bilingual citizen reporting
use clap::{Parser, Subcommand};
use hamal_core::{ReportLifecycle, StorageContext};
use hamal_server::{config::ServerConfig, create_router, services::AuthService, state::AppState};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hamal-server")]
#[command(about = "HamalNews citizen reporting server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "HAMAL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Register a user (the first one becomes admin)
    AddUser {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// List all users
    ListUsers,
    /// List all reports
    ListReports,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hamal_server=info,hamal_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => serve(&config).await?,
        Commands::AddUser { username, password } => {
            add_user(&config, &username, &password).await?;
        }
        Commands::ListUsers => list_users(&config).await?,
        Commands::ListReports => list_reports(&config).await?,
    }

    Ok(())
}

async fn open_storage(config: &ServerConfig) -> anyhow::Result<Arc<hamal_storage::Database>> {
    let db = hamal_storage::open(&config.storage.database_url).await?;
    tracing::info!("Database connected");
    Ok(Arc::new(db))
}

fn build_lifecycle(config: &ServerConfig, db: Arc<hamal_storage::Database>) -> ReportLifecycle {
    let auth_service = Arc::new(AuthService::new(config.auth.bcrypt_cost));
    ReportLifecycle::new(db, auth_service)
}

async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting HamalNews server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let db = open_storage(config).await?;
    let lifecycle = Arc::new(build_lifecycle(config, db));

    if config.admin.require_auth {
        tracing::info!("Admin panel requires HTTP Basic authentication");
    } else {
        tracing::warn!("Admin panel is open to anyone (admin.require_auth = false)");
    }

    let app_state = AppState::new(
        lifecycle,
        config.default_language(),
        config.admin.require_auth,
    );
    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(config: &ServerConfig, username: &str, password: &str) -> anyhow::Result<()> {
    let db = open_storage(config).await?;
    let lifecycle = build_lifecycle(config, db);

    let user = lifecycle.register_user(username, password).await?;
    println!("Created user {} ({}) with role {}", user.username, user.id, user.role);

    Ok(())
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let db = open_storage(config).await?;
    let users = db.get_all_users().await?;

    println!("Users:");
    for user in users {
        println!("  {} - {} [{}]", user.id, user.username, user.role);
    }

    Ok(())
}

async fn list_reports(config: &ServerConfig) -> anyhow::Result<()> {
    let db = open_storage(config).await?;
    let reports = db.get_all_reports().await?;

    println!("Reports:");
    for report in reports {
        println!("  {} - {} [{}]", report.id, report.title, report.status);
    }

    Ok(())
}
