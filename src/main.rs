mod app;
mod bootstrap;
mod collectors;
mod config;
mod error;
mod input;
mod models;
mod panels;
mod surface;
mod ui;
mod util;
mod view;

use anyhow::Result;
use app::App;
use clap::Parser;
use collectors::{Backend, SysinfoBackend};
use config::Config;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use surface::{ChannelSurface, Surface};
use tokio::sync::mpsc;

#[derive(Parser, Debug)]
#[command(name = "drivescope", about = "Terminal volume and memory monitor", version = "0.1")]
struct Cli {
    /// Memory poll interval in milliseconds (default from config: 1000)
    #[arg(short, long)]
    interval: Option<u64>,

    /// Color theme: default, dracula, gruvbox, nord
    #[arg(short = 't', long)]
    theme: Option<String>,

    /// Print a one-shot JSON snapshot of volumes and memory and exit
    #[arg(long)]
    json: bool,

    /// Print config file path and current values, then exit
    #[arg(long)]
    config: bool,

    /// Scan a folder and print the size of each subfolder, then exit
    #[arg(long, value_name = "PATH")]
    tree: Option<PathBuf>,

    /// Subfolder levels to expand with --tree
    #[arg(long, default_value_t = collectors::folders::DEFAULT_DEPTH)]
    depth: usize,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut cfg = Config::load();
    if let Some(ms) = cli.interval {
        cfg.general.poll_interval_ms = ms;
    }
    if let Some(theme) = cli.theme {
        cfg.general.theme = theme;
    }

    if cli.config {
        return run_print_config(&cfg);
    }
    if cli.json || cli.tree.is_some() {
        if let Err(e) = util::logging::init(cfg.log_level(), false) {
            eprintln!("Failed to initialise logging: {:#}", e);
        }
    }
    if let Some(path) = cli.tree {
        return run_tree_report(path, cli.depth, cli.json).await;
    }
    if cli.json {
        return run_json_snapshot(&cfg).await;
    }

    match util::logging::init(cfg.log_level(), true) {
        Ok(path) => info!("drivescope starting, logging to {:?}", path),
        Err(e)   => eprintln!("Failed to initialise logging: {:#}", e),
    }

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let variant = ui::theme::ThemeVariant::from_name(&cfg.general.theme);
    let result = run(&cfg, variant).await;
    restore_terminal()?;
    if let Err(e) = &result {
        error!("Application error: {:#}", e);
    }
    result
}

async fn run_json_snapshot(cfg: &Config) -> Result<()> {
    use serde_json::{json, Value};
    use util::human::fmt_bytes;

    let bridge = SysinfoBackend::new(cfg.volume_filter());

    let volumes: Value = match bridge.get_drives().await {
        Ok(list) => list.iter().map(|v| {
            json!({
                "name":            v.name,
                "kind":            v.kind.label(),
                "icon":            v.icon,
                "mount_point":     v.mount_point,
                "file_system":     v.file_system,
                "removable":       v.removable,
                "total_space":     v.total_space,
                "available_space": v.available_space,
                "used_hr":         fmt_bytes(v.used_space()),
                "total_hr":        fmt_bytes(v.total_space),
                "usage_pct":       v.usage_pct(),
            })
        }).collect(),
        Err(e) => {
            error!("Error fetching drives: {}", e);
            Value::Null
        }
    };

    let memory: Value = match bridge.get_memory_usage().await {
        Ok(m) => json!({
            "used_memory": m.used_memory,
            "max_memory":  m.max_memory,
            "usage_pct":   m.usage_pct(),
            "label":       m.label(),
        }),
        Err(e) => {
            error!("Error fetching memory usage: {}", e);
            Value::Null
        }
    };

    let snapshot = json!({
        "drivescope_version": "0.1",
        "timestamp": chrono::Local::now().to_rfc3339(),
        "volumes":   volumes,
        "memory":    memory,
    });

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

async fn run_tree_report(path: PathBuf, depth: usize, json: bool) -> Result<()> {
    let report = tokio::task::spawn_blocking(move || {
        collectors::folders::scan_folder(&path, depth)
    })
    .await??;

    if json {
        let out = serde_json::json!({
            "timestamp": chrono::Local::now().to_rfc3339(),
            "depth":     depth,
            "skipped":   report.skipped,
            "root":      report.root,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}  {}  ({} files)", report.root.path.display(), report.root.size_label(), report.root.file_count);
    for (level, folder) in report.root.flatten().into_iter().skip(1) {
        let indent = "  ".repeat(level);
        println!(
            "{}{:<w$} {:>10} {:>5}  ({} files)",
            indent,
            folder.name,
            folder.size_label(),
            util::human::fmt_pct(folder.share_of(report.root.size)),
            folder.file_count,
            w = 32usize.saturating_sub(indent.len()),
        );
    }
    if report.skipped > 0 {
        warn!("{} entries could not be read and were left out", report.skipped);
    }
    Ok(())
}

fn run_print_config(cfg: &Config) -> Result<()> {
    let path = Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    let log = util::logging::log_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    println!("Config: {}", path);
    println!();
    println!("[general]");
    println!("  poll_interval_ms = {}", cfg.general.poll_interval_ms);
    println!("  theme            = {}", cfg.general.theme);
    println!();
    println!("[logging]");
    println!("  level = {}  (file: {})", cfg.logging.level, log);
    println!();
    println!("[volumes]");
    println!("  hide_removable = {}", cfg.volumes.hide_removable);
    println!("  exclude        = {:?}", cfg.volumes.exclude);
    Ok(())
}

async fn run(cfg: &Config, variant: ui::theme::ThemeVariant) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut term = Terminal::new(backend)?;

    let (update_tx, update_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx)   = mpsc::unbounded_channel();
    app::spawn_input_thread(event_tx);

    let interval = poll_interval(cfg);
    let bridge: Arc<dyn Backend>  = Arc::new(SysinfoBackend::new(cfg.volume_filter()));
    let surface: Arc<dyn Surface> = Arc::new(ChannelSurface::new(update_tx));
    let flows = bootstrap::start(bridge, surface, interval);

    let mut app = App::new(variant);
    let result = app.run(&mut term, update_rx, event_rx).await;
    flows.shutdown();
    result
}

fn poll_interval(cfg: &Config) -> Duration {
    let interval = cfg.poll_interval();
    if interval.as_millis() != cfg.general.poll_interval_ms as u128 {
        warn!(
            "poll interval {} ms too short, using {} ms",
            cfg.general.poll_interval_ms,
            interval.as_millis()
        );
    }
    interval
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
