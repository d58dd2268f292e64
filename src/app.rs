//! Drives a [`ColorPicker`] from the command line.
//!
//! The host loads its config, restores the last session, applies any
//! overrides and simulated touches, then prints the resulting color and
//! palette.

use anyhow::Context;
use harmony_wheel::{ColorPicker, PickerLayout, PointerEvent};

use crate::cli::Cli;
use crate::config::{AppConfig, ConfigError};
use crate::session::{restore_picker, save_state};
use crate::swatch::{format_hex, format_palette};

/// Run the picker host with parsed arguments.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let (config, config_warning) = load_config(&cli)?;
    init_logging(&config);
    if let Some(warning) = config_warning {
        log::warn!("{}", warning);
    }

    let prefs = &config.preferences;
    let width = cli.width.unwrap_or(prefs.view_width);
    let layout = PickerLayout::from_width(width)
        .with_context(|| format!("view width {width} is too small for a picker"))?;
    log::debug!(
        "Layout: wheel center {:?} radius {}, slider {:?}",
        layout.wheel().center(),
        layout.wheel().radius(),
        layout.slider_bounds()
    );

    let mut picker = ColorPicker::new(layout);
    picker.on_palette_changed(|colors| {
        log::info!("palette changed: {}", format_palette(&colors));
    });

    // Config values are the starting point; a session file replaces them,
    // and an invalid one resets the picker to white with no harmony.
    picker.set_color(prefs.initial_color()?);
    picker.set_harmony_type(prefs.harmony);
    if let Some(path) = &cli.state {
        restore_picker(&mut picker, path);
    }

    if let Some(color) = cli.color {
        picker.set_color(color);
    }
    if let Some(harmony) = cli.harmony {
        picker.set_harmony_type(harmony);
    }

    picker.set_touchable(prefs.touchable && !cli.untouchable);
    for point in &cli.touch {
        let consumed = picker.on_event(&PointerEvent::Pressed { position: *point });
        if !consumed {
            log::info!("Touch at ({}, {}) was not consumed", point.x, point.y);
        }
    }

    println!("color: {}", format_hex(picker.color()));
    println!("harmony: {}", picker.harmony_type());
    println!("palette: {}", format_palette(&picker.harmonized_colors()));

    if cli.descriptor {
        let json = serde_json::to_string_pretty(picker.render_descriptor())
            .context("failed to serialize render descriptor")?;
        println!("{json}");
    }

    if let Some(path) = &cli.state {
        save_state(path, &picker.to_persisted())
            .with_context(|| format!("failed to save picker state to {}", path.display()))?;
    }

    Ok(())
}

/// Load the explicit or default config.
///
/// An explicit `--config` that cannot be loaded is fatal. A broken default
/// config falls back to defaults; the returned warning is logged once the
/// logger exists.
fn load_config(cli: &Cli) -> anyhow::Result<(AppConfig, Option<String>)> {
    if let Some(path) = &cli.config {
        let config = AppConfig::load_from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        return Ok((config, None));
    }

    match AppConfig::load_from_default_path() {
        Ok(Some(config)) => Ok((config, None)),
        Ok(None) => Ok((AppConfig::default(), None)),
        Err(e) => Ok((AppConfig::default(), Some(default_config_warning(&e)))),
    }
}

fn default_config_warning(e: &ConfigError) -> String {
    format!("Ignoring default config ({}), using defaults", e)
}

fn init_logging(config: &AppConfig) {
    // RUST_LOG overrides the configured level
    let _ = env_logger::Builder::new()
        .filter_level(config.preferences.log_level.to_level_filter())
        .parse_default_env()
        .try_init();
}
