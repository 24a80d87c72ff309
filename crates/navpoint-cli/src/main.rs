// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `navpoints`: headless host for the place navpoint overlay.
//!
//! `render` loads a map snapshot (JSON), applies the persisted switches and
//! prints the primitive batch or a per-place summary table. `settings` shows
//! or changes the persisted switches. Logs go to stderr (`RUST_LOG`).
#![allow(clippy::print_stdout)]

mod output;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use navpoint_app_core::{ConfigService, OverlaySettings, SettingsPort, SETTINGS_KEY};
use navpoint_config_fs::FsConfigStore;
use navpoint_core::{plan_nav_points, MapSnapshot, NavPointOverlay, OverlayConfig};
use serde::de::DeserializeOwned;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::output::BatchRenderPort;

#[derive(Parser, Debug)]
#[command(author, version, about = "Place navpoint overlay, headless")]
struct Args {
    /// Directory holding persisted settings (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the overlay for a map snapshot
    Render(RenderArgs),
    /// Show or change the persisted switches
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(clap::Args, Debug)]
struct RenderArgs {
    /// Map snapshot JSON file (`-` reads stdin)
    #[arg(long)]
    map: PathBuf,
    /// Override the snapshot's zoom level
    #[arg(long)]
    zoom: Option<u32>,
    /// Overlay configuration JSON (thresholds, rules, styles)
    #[arg(long)]
    overlay_config: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Primitive batch as JSON
    Json,
    /// One row per planned connector
    Table,
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    /// Print the persisted switches as JSON
    Show,
    /// Change one or both switches
    Set {
        /// Master switch
        #[arg(long)]
        visible: Option<bool>,
        /// Parking-lot switch
        #[arg(long)]
        parking_lots_visible: Option<bool>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let store = open_store(args.config_dir.as_deref())?;
    match args.cmd {
        Command::Render(render) => run_render(&render, store),
        Command::Settings { action } => run_settings(action, store),
    }
}

fn open_store(dir: Option<&Path>) -> Result<FsConfigStore> {
    let store = match dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new(),
    };
    store.context("failed to open settings directory")
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn run_render(args: &RenderArgs, store: FsConfigStore) -> Result<()> {
    let mut snapshot: MapSnapshot = read_json(&args.map)?;
    if let Some(zoom) = args.zoom {
        snapshot.viewport.zoom = zoom;
    }
    let config = match &args.overlay_config {
        Some(path) => read_json(path)?,
        None => OverlayConfig::default(),
    };
    info!(
        places = snapshot.places.len(),
        segments = snapshot.segments.len(),
        zoom = snapshot.viewport.zoom,
        "rendering snapshot"
    );

    let mut overlay = NavPointOverlay::new(
        snapshot,
        BatchRenderPort::default(),
        ConfigService::new(store),
        config,
    );
    overlay.try_redraw().context("overlay redraw failed")?;

    match args.format {
        Format::Json => {
            let json = serde_json::to_string_pretty(overlay.render().primitives())?;
            println!("{json}");
        }
        Format::Table => {
            let map = overlay.model();
            let plan = plan_nav_points(
                &map.places,
                &map.segments,
                map,
                &map.viewport,
                &overlay.settings(),
                overlay.config(),
            );
            println!("{}", output::connector_table(&plan, map));
        }
    }
    Ok(())
}

fn run_settings(action: SettingsAction, store: FsConfigStore) -> Result<()> {
    let service = ConfigService::new(store);
    let current = service.load_settings_or_default();
    let settings = match action {
        SettingsAction::Show => current,
        SettingsAction::Set {
            visible,
            parking_lots_visible,
        } => {
            if visible.is_none() && parking_lots_visible.is_none() {
                bail!("nothing to change: pass --visible and/or --parking-lots-visible");
            }
            let updated = apply(current, visible, parking_lots_visible);
            service
                .save(SETTINGS_KEY, &updated)
                .context("failed to save settings")?;
            info!(
                visible = updated.visible,
                parking_lots_visible = updated.parking_lots_visible,
                "settings saved"
            );
            updated
        }
    };
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

fn apply(
    mut settings: OverlaySettings,
    visible: Option<bool>,
    parking_lots_visible: Option<bool>,
) -> OverlaySettings {
    if let Some(v) = visible {
        settings = settings.with_visible(v);
    }
    if let Some(v) = parking_lots_visible {
        settings = settings.with_parking_lots_visible(v);
    }
    settings
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn apply_leaves_unset_switches_alone() {
        let base = OverlaySettings::default();
        let out = apply(base, None, Some(false));
        assert!(out.visible);
        assert!(!out.parking_lots_visible);
        assert_eq!(apply(out, None, None), out);
    }

    #[test]
    fn args_parse_render_with_overrides() {
        let args = Args::try_parse_from([
            "navpoints",
            "--config-dir",
            "/tmp/x",
            "render",
            "--map",
            "map.json",
            "--zoom",
            "4",
            "--format",
            "table",
        ])
        .unwrap();
        assert_eq!(args.config_dir.as_deref(), Some(Path::new("/tmp/x")));
        assert!(matches!(
            args.cmd,
            Command::Render(ref r) if r.zoom == Some(4) && r.format == Format::Table
        ));
    }
}
