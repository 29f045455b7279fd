use anyhow::Context;
use clap::{Parser, Subcommand};
use shelf_kernel::settings::Settings;

/// Operate the shelf greeting and book catalog services
#[derive(Debug, Parser)]
#[command(name = "shelf", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the enabled modules until Ctrl-C
    Serve {
        /// Serve only the named module; repeat for several
        #[arg(long = "module", value_name = "NAME")]
        modules: Vec<String>,
        /// Override the configured listen port
        #[arg(long)]
        port: Option<u16>,
        /// Override the configured listen host
        #[arg(long)]
        host: Option<String>,
    },
    /// Print every route with its methods
    Routes,
    /// Print the effective configuration as JSON
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut settings = Settings::load().with_context(|| "failed to load shelf settings")?;

    match cli.command {
        Command::Serve {
            modules,
            port,
            host,
        } => {
            if !modules.is_empty() {
                settings.modules.enabled = modules;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }
            if let Some(host) = host {
                settings.server.host = host;
            }

            shelf_telemetry::init(&settings.telemetry)?;
            tracing::info!(env = ?settings.environment, "shelf CLI serving");

            let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
            runtime.block_on(shelf_app::bootstrap::run(settings))
        }
        Command::Routes => {
            let registry = shelf_app::bootstrap::build_registry(&settings)?;
            let spec = shelf_http::router::merged_openapi(&registry);
            for line in route_lines(&spec) {
                println!("{line}");
            }
            Ok(())
        }
        Command::Config => {
            let rendered = serde_json::to_string_pretty(&settings)
                .context("failed to render configuration")?;
            println!("{rendered}");
            Ok(())
        }
    }
}

/// `METHOD path` lines from an OpenAPI document, sorted by path
fn route_lines(spec: &serde_json::Value) -> Vec<String> {
    let mut routes: Vec<(&str, String)> = Vec::new();

    if let Some(paths) = spec["paths"].as_object() {
        for (path, item) in paths {
            let Some(operations) = item.as_object() else {
                continue;
            };
            for method in operations.keys() {
                routes.push((path.as_str(), method.to_uppercase()));
            }
        }
    }

    routes.sort();
    routes
        .into_iter()
        .map(|(path, method)| format!("{method:<7} {path}"))
        .collect()
}
