// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod runtime;

use altech_app::{AppState, PageKind};
use altech_tui::{AppRuntime, UiOptions};
use anyhow::{Context, Result, anyhow};
use config::Config;
use runtime::ContentRuntime;
use std::env;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const LOG_ENV: &str = "ALTECH_LOG";

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    if options.print_example_content {
        print!("{}", altech_content::example_overrides());
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `altech --print-example-config` to generate a v1 template",
            options.config_path.display()
        )
    })?;
    let ui_options = UiOptions {
        status_timeout: config.status_timeout()?,
    };
    let content_path = options
        .content_path
        .clone()
        .or_else(|| config.content_path(&options.config_path));

    let mut runtime = ContentRuntime::new(content_path);
    if options.check_only {
        let content = runtime.load_content()?;
        println!(
            "ok: {} equipment, {} capacity filters, {} gallery projects ({} images)",
            content.catalog.len(),
            content.capacity_filters.len(),
            content.gallery.len(),
            content.image_count()
        );
        return Ok(());
    }

    let log_path = config.log_file()?;
    init_logging(config.log_level(), &log_path)?;
    info!(
        config = %options.config_path.display(),
        log = %log_path.display(),
        "starting altech"
    );

    let mut state = AppState {
        active_page: options.start_page.unwrap_or_else(|| config.start_page()),
        ..AppState::default()
    };
    altech_tui::run_app(&mut state, &mut runtime, ui_options)
}

/// Installs a file-backed subscriber. `ALTECH_LOG` wins over the configured
/// level. Nothing goes to stdout since the TUI owns the terminal.
fn init_logging(level: &str, log_path: &Path) -> Result<()> {
    if let Some(dir) = log_path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)
            .with_context(|| format!("create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("open log file {}", log_path.display()))?;

    let env_filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log filter {level:?}"))?,
    };

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .compact()
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("install tracing subscriber")
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    content_path: Option<PathBuf>,
    start_page: Option<PageKind>,
    print_config_path: bool,
    print_example: bool,
    print_example_content: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        content_path: None,
        start_page: None,
        print_config_path: false,
        print_example: false,
        print_example_content: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--content" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--content requires a file path"))?;
                options.content_path = Some(PathBuf::from(value.as_ref()));
            }
            "--page" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--page requires a page name"))?;
                let page = PageKind::parse(value.as_ref()).ok_or_else(|| {
                    anyhow!(
                        "unknown page {:?}; expected one of: {}",
                        value.as_ref(),
                        PageKind::ALL.map(PageKind::label).join(", ")
                    )
                })?;
                options.start_page = Some(page);
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--print-example-content" => {
                options.print_example_content = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("altech: heavy-lift fleet catalog and project gallery");
    println!("  --config <path>          Use a specific config path");
    println!("  --content <path>         Layer a content file over the built-in content");
    println!("  --page <name>            Start on home, about, services, equipment or gallery");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a v1 config template");
    println!("  --print-example-content  Print a content override template");
    println!("  --check                  Validate config + content, then exit");
    println!("  --help                   Show this help");
}
