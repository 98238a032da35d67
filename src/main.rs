use clap::Parser;
use tokio::net::TcpListener;

mod app_context;
mod cli;
mod health;
mod http;
mod imagery;
mod logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::Args::parse();
    logging::init();
    imagery::init(&args);
    let app_context = app_context::init(&args)?;
    let router = http::router::new(app_context);

    let listener = TcpListener::bind(args.listen_address).await?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "TreeWalk API listening on {}.",
        listener.local_addr()?
    );
    axum::serve(listener, router).await?;
    Ok(())
}
