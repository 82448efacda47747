use anyhow::Result;
use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use tower_http::cors::CorsLayer;
use trader_dash::{cli, handlers, services::GatewayService, types::Config};

#[derive(Parser)]
#[command(name = "td")]
#[command(about = "Trading System Dashboard")]
struct Args {
    #[command(subcommand)]
    command: Option<cli::Commands>,

    #[arg(long, help = "Start the dashboard HTTP API instead of running a command")]
    server: bool,

    #[arg(long, default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.server {
        start_server(args.port).await
    } else {
        match args.command {
            Some(command) => cli::run_cli(cli::Cli { command }).await,
            None => {
                eprintln!("Please specify a command or use --server");
                eprintln!("Try 'td --help' for more information.");
                eprintln!();
                eprintln!("Available commands:");
                eprintln!("  instrument <id>                    - Look up an instrument");
                eprintln!("  instruments                        - List available instruments");
                eprintln!("  approve <id>                       - Submit an approval request");
                eprintln!("  limit <counterparty>               - Check the available limit");
                eprintln!("  trade <id> <counterparty> <amount> - Execute a trade");
                eprintln!("    --approve                        - Approve unknown instruments and proceed");
                eprintln!("  --server                           - Start the dashboard HTTP API");
                eprintln!("    --port <port>                    - Server port (default: 3000)");
                std::process::exit(1);
            }
        }
    }
}

async fn start_server(port: u16) -> Result<()> {
    let config = Config::load()?;
    let backend = config.base_url.clone();
    let gateway = GatewayService::new(config)?;

    let app = Router::new()
        .route("/health", get(handlers::health))
        .route("/instrument/:instrument_id", get(handlers::get_instrument))
        .route("/instruments", get(handlers::get_instruments))
        .route("/approval-request", post(handlers::post_approval_request))
        .route("/limit/:counterparty", get(handlers::get_limit))
        .route("/trade", post(handlers::post_trade))
        .layer(CorsLayer::permissive())
        .with_state(gateway);

    let listener = tokio::net::TcpListener::bind(&format!("0.0.0.0:{}", port)).await?;

    println!("Trading dashboard API running on http://localhost:{}", port);
    println!("Proxying trading backend at {}", backend);
    println!("Available endpoints:");
    println!("   GET  /health                 - Health check");
    println!("   GET  /instrument/{{id}}        - Instrument lookup");
    println!("   GET  /instruments            - Instrument identifiers");
    println!("   POST /approval-request       - Submit an approval request");
    println!("   GET  /limit/{{counterparty}}   - Available limit");
    println!("   POST /trade                  - Execute a trade");
    println!();
    println!("Press Ctrl+C to stop the server");

    axum::serve(listener, app).await?;

    Ok(())
}
