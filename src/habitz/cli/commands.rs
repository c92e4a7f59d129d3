//! # CLI Layer
//!
//! One possible UI client for habitz. This is the only place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Reads the environment (`HABITZ_HOME`, `RUST_LOG`)
//! - Chooses the system clock
//!
//! Every run compacts the habit file once before dispatching, so legacy or
//! hand-edited files are normalized as soon as they are touched. `doctor`
//! skips that step so it can report what it repaired.

use super::print::{print_habits, print_messages};
use super::setup::{join_name, Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use habitz::api::HabitzApi;
use habitz::config::HabitzConfig;
use habitz::error::{HabitzError, Result};
use habitz::store::fs::FileStore;
use std::path::PathBuf;

struct AppContext {
    api: HabitzApi<FileStore>,
    config: HabitzConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;
    if !matches!(cli.command, Some(Commands::Doctor)) {
        ctx.api.doctor()?;
    }

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Create { name }) => handle_create(&mut ctx, &join_name(&name)),
        Some(Commands::Done { name }) => handle_done(&mut ctx, &join_name(&name)),
        Some(Commands::Clock { name }) => handle_clock(&ctx, &join_name(&name)),
        Some(Commands::Reset { name }) => handle_reset(&mut ctx, &join_name(&name)),
        Some(Commands::Remove { name }) => handle_remove(&mut ctx, &join_name(&name)),
        Some(Commands::Doctor) => handle_doctor(&mut ctx),
        Some(Commands::Path) => handle_path(&ctx),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("HABITZ_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "habitz", "habitz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| HabitzError::Config("Could not determine data directory".to_string()))
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    let config = HabitzConfig::load(&dir)?;
    let path = config.data_path(&dir);
    log::debug!("using habit file {}", path.display());

    Ok(AppContext {
        api: HabitzApi::new(FileStore::new(path)),
        config,
    })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_habits()?;
    print_habits(&result.listed_habits, ctx.config.bar_days);
    print_messages(&result.messages);
    Ok(())
}

fn handle_create(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.create_habit(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_done(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.mark_done_today(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clock(ctx: &AppContext, name: &str) -> Result<()> {
    let result = ctx.api.time_left(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.clear_progress(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.remove_habit(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_doctor(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.doctor()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.location().display());
    Ok(())
}
