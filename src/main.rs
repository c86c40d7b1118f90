mod cli;

use vidinfo::{config, lookup::LookupService, server};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use vidinfo_common::FormatKind;

async fn start_server(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<&Path>,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;

    // CLI (and PORT) take precedence over the config file
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config::validate_config(&config)?;

    tracing::info!("Starting vidinfo server");
    tracing::info!(
        "Server will listen on {}:{}",
        config.server.host,
        config.server.port
    );

    server::start_server(config).await
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "vidinfo=debug,vidinfo_av=debug,tower_http=debug".to_string()
        } else {
            "vidinfo=info,vidinfo_av=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Start { host, port } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(host, port, cli.config.as_deref()))
        }
        Commands::Inspect { url, json } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(inspect(&url, json, cli.config.as_deref()))
        }
        Commands::CheckTools => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(check_tools(cli.config.as_deref()))
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("vidinfo {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

async fn inspect(url: &str, json: bool, config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let service = LookupService::from_config(&config);

    let info = match service.lookup(url).await {
        Ok(info) => info,
        Err(e) => anyhow::bail!("{} ({})", e, e.code()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Title: {}", info.title);
    println!("Uploader: {}", info.uploader);
    println!("Duration: {}", info.duration);
    if !info.thumbnail.is_empty() {
        println!("Thumbnail: {}", info.thumbnail);
    }

    for kind in [FormatKind::Video, FormatKind::Audio, FormatKind::Other] {
        let formats: Vec<_> = info.formats_of(kind).collect();
        if formats.is_empty() {
            continue;
        }

        println!("\n{:?} formats: {}", kind, formats.len());
        for format in formats {
            print!("  [{}] {} {}", format.format_id, format.quality, format.ext);
            if let Some(ref size) = format.filesize {
                print!(" ({})", size);
            }
            println!();
        }
    }

    Ok(())
}

async fn check_tools(config_path: Option<&Path>) -> Result<()> {
    println!("Checking external tools...\n");

    let config = config::load_config_or_default(config_path)?;
    let service = LookupService::from_config(&config);
    let tool = service.extractor().check().await;

    let status = if tool.available { "✓" } else { "✗" };
    print!("{} {}", status, tool.name);

    if let Some(ref version) = tool.version {
        print!(" ({})", version);
    }

    if let Some(ref path) = tool.path {
        print!(" - {}", path.display());
    }

    println!();
    println!();
    if tool.available {
        println!("All required tools are available!");
    } else {
        println!("yt-dlp is missing. Install it with `pip install yt-dlp` to enable lookups.");
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!(
                "  Extractor: {} (timeout {}s)",
                config
                    .extractor
                    .path
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "yt-dlp on PATH".to_string()),
                config.extractor.timeout_secs
            );
            println!(
                "  Selection: {} video, {} audio, {} other",
                config.selection.max_video, config.selection.max_audio, config.selection.max_other
            );
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Server: {}:{}", config.server.host, config.server.port);
        }
    }

    Ok(())
}
