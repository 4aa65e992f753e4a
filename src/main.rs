use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use url::Url;

use podsite::{
    BuildEvent, BuildReporter, EpisodesApi, NoopReporter, ReqwestClient, SharedBuildReporter,
    build_episode_page, build_home_page, enumerate_episode_paths, write_episode_artifact,
    write_home_artifact,
};

// Emoji with fallback for terminals without Unicode support
static MICROPHONE: Emoji<'_, '_> = Emoji("🎙️  ", "");
static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "[~] ");
static PAGE: Emoji<'_, '_> = Emoji("📄 ", "[p] ");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "[+] ");
static FAILURE: Emoji<'_, '_> = Emoji("❌ ", "[!] ");
static PARTY: Emoji<'_, '_> = Emoji("🎉 ", "[*] ");
static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");
static CROSS: Emoji<'_, '_> = Emoji("✗ ", "x ");

/// Generate static podcast pages from an episodes API
#[derive(Parser, Debug)]
#[command(name = "podsite")]
#[command(about = "Generate static podcast pages from an episodes API")]
#[command(version)]
struct Args {
    /// Base URL of the episodes API (end it with '/' when it has a path)
    api_url: Url,

    /// Output directory for generated page artifacts
    output_dir: PathBuf,

    /// Quiet mode - suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

/// Build reporter using indicatif for terminal output
struct IndicatifReporter {
    bar: ProgressBar,
}

impl BuildReporter for IndicatifReporter {
    fn report(&self, event: BuildEvent) {
        match event {
            BuildEvent::FetchingEpisodes { limit } => {
                self.bar.set_message(format!(
                    "{SEARCH}Fetching the {} latest episodes",
                    limit.to_string().cyan()
                ));
            }

            BuildEvent::FetchingEpisode { slug } => {
                self.bar
                    .set_message(format!("{SEARCH}Fetching episode {}", slug.cyan()));
            }

            BuildEvent::PageGenerated { route } => {
                self.bar
                    .set_message(format!("{PAGE}Generated {}", route.green()));
            }

            BuildEvent::ServingStale { route, error } => {
                self.bar.println(format!(
                    "{FAILURE}{} could not be rebuilt, serving stale copy - {}",
                    route.yellow(),
                    error.dimmed()
                ));
            }

            BuildEvent::GenerationFailed { route, error } => {
                self.bar
                    .println(format!("{FAILURE}{} - {}", route.red(), error.red()));
            }

            BuildEvent::SiteBuilt { prerendered_routes } => {
                self.bar.set_message(format!(
                    "{SUCCESS}Pre-rendered {} routes",
                    prerendered_routes.to_string().green()
                ));
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if !args.quiet {
        println!(
            "\n{}{} {}\n",
            MICROPHONE,
            "podsite".bold().magenta(),
            "- Podcast Page Generator".dimmed()
        );
    }

    let api = EpisodesApi::new(ReqwestClient::new(), args.api_url.clone());

    let bar = ProgressBar::new_spinner();
    let reporter: SharedBuildReporter = if args.quiet {
        NoopReporter::shared()
    } else {
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} {wide_msg}")
            .unwrap();
        bar.set_style(style);
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        Arc::new(IndicatifReporter { bar: bar.clone() })
    };

    let now = Utc::now();

    let home = build_home_page(&api, now, &reporter)
        .await
        .context("Failed to generate the home page")?;
    write_home_artifact(&home, &args.output_dir)
        .context("Failed to write the home page artifact")?;

    let paths = enumerate_episode_paths(&api)
        .await
        .context("Failed to enumerate episode routes")?;

    let mut generated = 0usize;
    let mut failed_routes: Vec<(String, String)> = Vec::new();

    for slug in &paths.slugs {
        match build_episode_page(&api, slug, now, &reporter).await {
            Ok(artifact) => {
                write_episode_artifact(&artifact, &args.output_dir)
                    .with_context(|| format!("Failed to write the artifact for episode '{slug}'"))?;
                generated += 1;
            }
            Err(e) => failed_routes.push((slug.clone(), e.to_string())),
        }
    }

    bar.finish_and_clear();

    if !args.quiet {
        println!(
            "\n{PARTY}{} {} episode pages generated, {} failed",
            "Build complete:".bold().green(),
            generated.to_string().green().bold(),
            if failed_routes.is_empty() {
                "0".green()
            } else {
                failed_routes.len().to_string().red().bold()
            }
        );

        if !failed_routes.is_empty() {
            println!("\n{}", "Failed routes:".red().bold());
            for (slug, error) in &failed_routes {
                println!("  {}{} - {}", CROSS, slug.yellow(), error.dimmed());
            }
        }

        println!(
            "\n{FOLDER}Output: {}\n",
            args.output_dir.display().to_string().cyan()
        );
    }

    if generated == 0 && !failed_routes.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
