use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use circles_site::assets::CssBuilder;
use circles_site::config::load_config;
use circles_site::mock::FixtureStore;
use circles_site::templates::{PageKey, TemplateManager};

#[derive(Parser)]
#[command(name = "circles-cli")]
#[command(about = "Maintenance CLI for the circles.diy site", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, env = "CIRCLES_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the stylesheet once and report what went in
    BuildCss,
    /// Parse every page's template set and render it with fixture data
    CheckTemplates,
    /// Load and validate configuration, then print it
    CheckConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::BuildCss => {
            let report = CssBuilder::from_config(&config.assets).build()?;
            for file in &report.files {
                println!("  + {}", file.display());
            }
            for layer in &report.skipped_layers {
                println!("  - {layer} (skipped)");
            }
            println!(
                "Wrote {} ({} bytes from {} files)",
                config.assets.css_output,
                report.bytes,
                report.files.len()
            );
        }
        Commands::CheckTemplates => {
            let templates = TemplateManager::init(&config.templates.dir)?;
            let fixtures = FixtureStore::load(&config.fixtures.dir)?;

            for page in PageKey::ALL {
                let html = match page {
                    PageKey::Home => templates.render(page, &fixtures.home(false)),
                    PageKey::Dashboard => templates.render(page, &fixtures.dashboard()),
                    PageKey::ProfilePublic => {
                        templates.render(page, &fixtures.profile_public("@maia"))
                    }
                    PageKey::ProfileInternal => {
                        templates.render(page, &fixtures.profile_internal())
                    }
                    PageKey::Circles => templates.render(page, &fixtures.circles()),
                    PageKey::Chat => templates.render(page, &fixtures.chat()),
                    PageKey::Gather => templates.render(page, &fixtures.gather()),
                    PageKey::Marketplace => templates.render(page, &fixtures.marketplace()),
                }?;
                println!("  ok {:<18} {} bytes", page.name(), html.len());
            }
        }
        Commands::CheckConfig => {
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
