use anyhow::Context;
use upbit_provider::config::UpstreamConfig;
use upbit_provider::mcp::UpbitServer;
use upbit_provider::transport::{sse, stdio, TransportMode, DEFAULT_SSE_PORT};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments first to determine mode
    let args: Vec<String> = std::env::args().collect();
    let (mode, port) = parse_args(&args);

    // Initialize tracing/logging
    // stdout is reserved for the MCP protocol in stdio mode
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Upbit Provider in {} mode...", mode);

    let config = UpstreamConfig::from_env()
        .map_err(anyhow::Error::msg)
        .context("invalid Upbit configuration")?;
    tracing::info!(
        base_url = %config.base_url,
        timeout_secs = config.timeout.as_secs(),
        requests_per_second = config.requests_per_second,
        "Upstream configuration loaded"
    );

    let server = UpbitServer::new(&config).context("failed to initialize Upbit server")?;

    tracing::info!("Provider capabilities:");
    tracing::info!("  - 2 tools: fetch_daily_candles, get_price_change");
    tracing::info!("  - 2 resources: upbit://markets, upbit://candles/daily/{{market}}");

    match mode {
        TransportMode::Stdio => stdio::run_stdio_server(server).await?,
        TransportMode::Sse => sse::run_sse_server(port, server).await?,
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Parse command-line arguments
fn parse_args(args: &[String]) -> (TransportMode, u16) {
    let mut mode = TransportMode::default();
    let mut port = DEFAULT_SSE_PORT;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--mode" => {
                if i + 1 < args.len() {
                    mode = match args[i + 1].parse() {
                        Ok(mode) => mode,
                        Err(e) => {
                            eprintln!("{}", e);
                            print_usage();
                            std::process::exit(1);
                        }
                    };
                    i += 1;
                }
            }
            "--stdio" => mode = TransportMode::Stdio,
            "--sse" => mode = TransportMode::Sse,
            "--port" => {
                if i + 1 < args.len() {
                    port = args[i + 1].parse().unwrap_or(DEFAULT_SSE_PORT);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    (mode, port)
}

/// Print usage information
fn print_usage() {
    println!("Upbit Provider - MCP server for Upbit daily candle data");
    println!();
    println!("USAGE:");
    println!("    upbit-provider [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --mode <MODE>       Transport mode: stdio or sse (default: stdio)");
    println!("    --stdio             Run in stdio MCP mode (shortcut for --mode stdio)");
    println!("    --sse               Run in SSE mode (shortcut for --mode sse)");
    println!("    --port <PORT>       Port for SSE mode (default: 8000)");
    println!("    --help, -h          Print this help message");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    UPBIT_BASE_URL            Upbit API base URL (default: https://api.upbit.com/v1)");
    println!("    UPBIT_TIMEOUT_SECS        Per-request timeout in seconds (default: 10)");
    println!("    UPBIT_RATE_LIMIT_PER_SEC  Client-side request budget (default: 10)");
    println!("    RUST_LOG                  Logging level (default: info)");
    println!();
    println!("EXAMPLES:");
    println!("    # Serve over stdio (Claude Desktop and other local MCP clients)");
    println!("    upbit-provider --stdio");
    println!();
    println!("    # Serve over SSE on a custom port");
    println!("    upbit-provider --mode sse --port 8080");
}
