use std::fs;
use std::path::PathBuf;

use clap::Parser;

use sitegen::{Config, generate_pages, sync_dir};

#[derive(Parser)]
#[command(name = "sitegen")]
#[command(about = "Build a static site from Markdown content")]
struct Cli {
    /// Site root holding sitegen.toml, the content and asset directories
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output directory (overrides the configured one)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Load site layout
    let config = Config::load(&cli.root.join("sitegen.toml"));
    let output = cli.output.unwrap_or_else(|| cli.root.join(&config.output));

    // Copy static assets, wiping the previous build
    let assets = cli.root.join(&config.assets);
    println!("Copying static assets to {}...", output.display());
    if let Err(e) = sync_dir(&assets, &output) {
        eprintln!("Error copying assets: {}", e);
        std::process::exit(1);
    }

    // Read page template
    let template_path = cli.root.join(&config.template);
    let template = match fs::read_to_string(&template_path) {
        Ok(template) => template,
        Err(e) => {
            eprintln!("Error reading {}: {}", template_path.display(), e);
            std::process::exit(1);
        }
    };

    // Generate a page per Markdown source
    let content = cli.root.join(&config.content);
    if let Err(e) = generate_pages(&content, &template, &output) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("Built site in {}", output.display());
}
