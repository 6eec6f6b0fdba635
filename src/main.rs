// ABOUTME: Main entry point for the ds-slides program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the presentation server
    Serve(ServeArgs),

    /// Write a standalone presentation page
    Export(ExportArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// Host address to bind
    #[arg(long)]
    host: Option<String>,

    /// HTTP port
    #[arg(short, long)]
    port: Option<u16>,

    /// WebSocket port for navigation sync (defaults to the HTTP port plus one)
    #[arg(long)]
    ws_port: Option<u16>,

    /// CSS theme files to include (local paths or URLs)
    #[arg(long, value_delimiter = ',')]
    css: Option<Vec<String>>,

    /// JavaScript theme files to include (local paths or URLs)
    #[arg(long, value_delimiter = ',')]
    js: Option<Vec<String>>,

    /// Mode for CSS/JS: 'embed' to embed content or 'link' to reference
    #[arg(long, default_value = "embed")]
    mode: String,

    /// Watch local theme files and push reloads to viewers
    #[arg(long)]
    watch: bool,
}

#[derive(Args)]
struct ExportArgs {
    /// Path to the output HTML file
    #[arg(short, long)]
    output: PathBuf,

    /// CSS theme files to include (local paths or URLs)
    #[arg(long, value_delimiter = ',')]
    css: Option<Vec<String>>,

    /// JavaScript theme files to include (local paths or URLs)
    #[arg(long, value_delimiter = ',')]
    js: Option<Vec<String>>,

    /// Mode for CSS/JS: 'embed' to embed content or 'link' to reference
    #[arg(long, default_value = "embed")]
    mode: String,
}

fn theme_assets(paths: &Option<Vec<String>>) -> Vec<ds_slides::ThemeAsset> {
    paths
        .as_ref()
        .map(|paths| {
            paths
                .iter()
                .map(|path| ds_slides::ThemeAsset::new(path))
                .collect()
        })
        .unwrap_or_default()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = ds_slides::Config::from_env();

    let result = match &cli.command {
        Some(Commands::Serve(args)) => {
            println!("Starting presentation server...");

            let options = config.get_serve_options(args.host.clone(), args.port, args.ws_port);

            let mut css = theme_assets(&args.css);
            if css.is_empty() {
                if let Some(path) = &config.theme_css {
                    css.push(ds_slides::ThemeAsset::new(path));
                }
            }
            let mut js = theme_assets(&args.js);
            if js.is_empty() {
                if let Some(path) = &config.theme_js {
                    js.push(ds_slides::ThemeAsset::new(path));
                }
            }

            let page_options = ds_slides::PageOptions {
                css,
                js,
                embed_assets: args.mode != "link" && config.embed_assets,
                ws_url: None,
            };

            ds_slides::run_presentation_server(
                ds_slides::SlideDeck::standard(),
                ds_slides::ContentStore::standard(),
                &options,
                page_options,
                args.watch,
                config.watch_debounce_ms,
            )
        }
        Some(Commands::Export(args)) => {
            println!("Exporting standalone presentation page...");

            let page_options = ds_slides::PageOptions {
                css: theme_assets(&args.css),
                js: theme_assets(&args.js),
                embed_assets: args.mode != "link",
                ws_url: None,
            };

            let deck = ds_slides::SlideDeck::standard();
            let result = ds_slides::render_page(&deck, &page_options)
                .and_then(|html| ds_slides::write_page_to_file(&html, &args.output));
            if result.is_ok() {
                println!("Page exported successfully: {:?}", args.output);
            }
            result
        }
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
