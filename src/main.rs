//! studio-history CLI entry point.
//!
//! Drives the history dialog against a JSON version catalog: list an item's
//! versions, inspect or compare them, and revert to an earlier one.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use studio_history::app::selectors;
use studio_history::app::{Action, ComparePatch, HistoryAction, HistoryApp, ViewVersionAction};
use studio_history::domain::{ContentVersionRequest, HistoryRequest, VersionNumber};
use studio_history::infra::app_config::{self, AppConfig};
use studio_history::infra::notify::{NotificationLevel, RecordingNotifier};
use studio_history::infra::version_service::{
    InMemoryVersionService, VersionCatalog, VersionService,
};

#[derive(Parser, Debug)]
#[command(name = "studio-history")]
#[command(version)]
#[command(about = "Browse, compare and revert content versions", long_about = None)]
struct Args {
    /// Version catalog (JSON). Defaults to `catalog_path` from the config file.
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Site to operate on. Defaults to `active_site` from the config file.
    #[arg(short, long, global = true)]
    site: Option<String>,

    /// Versions per page
    #[arg(long, global = true)]
    rows: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the versions of an item
    History {
        path: String,
        /// Zero-based page to show
        #[arg(long, default_value = "0")]
        page: usize,
        /// List a configuration file's history instead of content
        #[arg(long)]
        config: bool,
        #[arg(long, requires = "config")]
        environment: Option<String>,
        #[arg(long, requires = "config")]
        module: Option<String>,
    },

    /// Revert an item to an earlier version
    Revert { path: String, version: String },

    /// Print the content of one version
    View { path: String, version: String },

    /// Diff the content of two versions
    Compare { path: String, a: String, b: String },

    /// Write the effective settings to the config file
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = app_config::load_config();
    if let Some(site) = args.site {
        config.active_site = site;
    }
    if let Some(rows) = args.rows {
        config.rows_per_page = rows;
    }
    if let Some(catalog) = args.catalog {
        config.catalog_path = Some(catalog);
    }

    if let Commands::InitConfig = args.command {
        app_config::save_config(&config).context("Failed to save config")?;
        println!("Wrote {}", app_config::config_path().display());
        return Ok(());
    }

    let Some(catalog_path) = config.catalog_path.clone() else {
        bail!("No version catalog given; pass --catalog or set catalog_path in the config");
    };
    let catalog = VersionCatalog::load(&catalog_path)?;
    let service = Arc::new(InMemoryVersionService::new(catalog).with_editor(&config.editor));
    let notifier = Arc::new(RecordingNotifier::default());
    let mut app = HistoryApp::from_config(&config, service.clone(), notifier.clone());

    match args.command {
        Commands::History {
            path,
            page,
            config: is_config,
            environment,
            module,
        } => {
            let request = HistoryRequest {
                path,
                environment,
                module,
                config: is_config,
            };
            app.open_history(request, None);
            app.dispatch(Action::History(HistoryAction::ChangePage(page)));
            app.settle().await;
            print_history(&app)?;
        }
        Commands::Revert { path, version } => {
            app.open_history(HistoryRequest::content(path), None);
            app.settle().await;
            ensure_history_loaded(&app)?;

            app.dispatch(Action::History(HistoryAction::RevertContent(
                VersionNumber::from(version),
            )));
            app.settle().await;
            report_notifications(&notifier)?;

            service.snapshot().save(&catalog_path)?;
            print_history(&app)?;
        }
        Commands::View { path, version } => {
            app.dispatch(Action::ViewVersion(ViewVersionAction::Show {
                request: ContentVersionRequest {
                    path,
                    version_number: VersionNumber::from(version),
                },
                on_close: None,
            }));
            app.settle().await;

            let view = &app.state.dialogs.view_version;
            if let Some(err) = &view.error {
                bail!("Failed to load version: {err}");
            }
            if let Some(version) = &view.version {
                println!("{}", version.content);
            }
        }
        Commands::Compare { path, a, b } => {
            app.open_history(HistoryRequest::content(path.clone()), None);
            app.dispatch(Action::History(HistoryAction::CompareVersions(
                ComparePatch::both(a, b),
            )));
            app.settle().await;
            ensure_history_loaded(&app)?;
            print_comparison(&app, service.as_ref(), &path).await?;
        }
        Commands::InitConfig => {}
    }

    Ok(())
}

fn ensure_history_loaded(app: &HistoryApp) -> Result<()> {
    if let Some(err) = app.state.dialogs.history.error() {
        bail!("Failed to load history: {err}");
    }
    Ok(())
}

fn report_notifications(notifier: &RecordingNotifier) -> Result<()> {
    let mut failed = None;
    for notification in notifier.take() {
        match notification.level {
            NotificationLevel::Info => println!("{}", notification.message),
            NotificationLevel::Error => failed = Some(notification.message),
        }
    }
    match failed {
        Some(message) => bail!(message),
        None => Ok(()),
    }
}

fn print_history(app: &HistoryApp) -> Result<()> {
    ensure_history_loaded(app)?;
    let history = &app.state.dialogs.history;

    if let Some(item) = &history.item {
        println!("{}", item.label.as_deref().unwrap_or(&item.path));
    }
    for record in selectors::visible_versions(history) {
        let marker = if history.current.as_ref() == Some(&record.version_number) {
            '*'
        } else {
            ' '
        };
        println!(
            "{marker} {:<8} {}  {:<12} {}",
            record.version_number,
            record.edited_date.format("%Y-%m-%d %H:%M"),
            record.edited_by,
            record.comment
        );
    }
    println!(
        "page {} of {}",
        selectors::effective_page(history) + 1,
        selectors::page_count(history)
    );
    Ok(())
}

async fn print_comparison(
    app: &HistoryApp,
    service: &dyn VersionService,
    path: &str,
) -> Result<()> {
    let history = &app.state.dialogs.history;
    let (Some(a), Some(b)) = (&history.compare.a, &history.compare.b) else {
        bail!("Two versions are needed for a comparison");
    };
    if let (None, _) | (_, None) = selectors::compare_records(history) {
        bail!("Both versions must belong to the history of {path}");
    }

    let site = &app.state.session.active_site;
    let left = service.get_version(site, path, a).await?;
    let right = service.get_version(site, path, b).await?;

    if history.compare.is_self_comparison() || left.content == right.content {
        println!("Versions {a} and {b} have identical content");
        return Ok(());
    }

    let diff = similar::TextDiff::from_lines(&left.content, &right.content);
    print!(
        "{}",
        diff.unified_diff()
            .header(&format!("{path}@{a}"), &format!("{path}@{b}"))
    );
    Ok(())
}
