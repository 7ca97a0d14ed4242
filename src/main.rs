//! Worker host binary.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use notework::automations::LogMailer;
use notework::automations::builtin::SendEmailAutomation;
use notework::documents::InMemoryDocumentService;
use notework::host::{HostConfig, WorkerHost};
use notework::settings::Settings;
use notework::tools::builtin::{SayHelloTool, SearchTool};
use notework::worker::Worker;

#[derive(Parser, Debug)]
#[command(name = "notework", about = "Worker host for agent tools and automations")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the registered tools and automations over HTTP
    Serve {
        /// Address to bind, overriding NOTEWORK_BIND
        #[arg(long)]
        bind: Option<SocketAddr>,
    },

    /// List registered tools and their schemas
    ListTools,
}

/// Build the worker with the starter tools and automations registered.
fn build_worker() -> anyhow::Result<Worker> {
    let mut worker = Worker::new();

    worker.register_tool(Arc::new(SayHelloTool))?;
    worker.register_tool(Arc::new(SearchTool))?;
    worker.register_automation(Arc::new(SendEmailAutomation::new(Arc::new(LogMailer))))?;

    Ok(worker)
}

/// Run the host until ctrl-c.
async fn serve(addr: SocketAddr, worker: Worker) -> anyhow::Result<()> {
    let documents = Arc::new(InMemoryDocumentService::new());
    let mut host = WorkerHost::new(HostConfig { addr }, Arc::new(worker), documents);
    host.start().await?;

    tokio::signal::ctrl_c().await?;
    host.shutdown().await;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let worker = build_worker()?;

    match cli.command {
        Some(Command::ListTools) => {
            for schema in worker.tool_schemas() {
                println!("{}  ({})", schema.name, schema.title);
                println!("    {}", schema.description);
            }
            for name in worker.automation_names() {
                println!("{name}  (automation)");
            }
            Ok(())
        }
        Some(Command::Serve { bind }) => serve(bind.unwrap_or(settings.bind_addr), worker).await,
        None => serve(settings.bind_addr, worker).await,
    }
}
