//! Subcommand implementations

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use serde_json::{json, Map, Value};
use std::io::Write;
use std::sync::Arc;
use zizi_core::FontSpec;
use zizi_laf::{ScaleManager, ThemeContext, ThemeState, ThemeVariant, ZiziConfig};
use zizi_platform::{configurator_for, OsFamily, PlatformInfo, PlatformSignals};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the built-in theme variants
    Themes,

    /// Build a theme and print its defaults table, sorted by key
    Dump {
        /// Variant id (defaults to the configured variant)
        #[arg(short, long)]
        theme: Option<String>,

        /// Only keys starting with this prefix
        #[arg(short, long)]
        filter: Option<String>,

        /// Print JSON instead of `key = value` lines
        #[arg(long)]
        json: bool,
    },

    /// Build a theme and print a single value
    Get {
        #[arg(short, long)]
        theme: Option<String>,

        key: String,
    },

    /// Show the scale factor for a label font size and scale a value
    Scale {
        /// Label font size in points
        #[arg(long)]
        font_size: f32,

        /// OS family (windows, linux, macos); defaults to the configured one
        #[arg(long)]
        os: Option<String>,

        /// Label font family
        #[arg(long, default_value = "Dialog")]
        family: String,

        /// Logical value to scale
        value: f32,
    },

    /// Print the detected platform
    Info,
}

pub fn run(command: &Command, config: &ZiziConfig, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Themes => themes(out),
        Command::Dump {
            theme,
            filter,
            json,
        } => {
            let ctx = build(config, theme.as_deref())?;
            if *json {
                dump_json(&ctx, filter.as_deref(), out)
            } else {
                dump(&ctx, filter.as_deref(), out)
            }
        }
        Command::Get { theme, key } => {
            let ctx = build(config, theme.as_deref())?;
            match ctx.defaults().get(key) {
                Some(value) => writeln!(out, "{value}").map_err(Into::into),
                None => bail!("{key} is not defined by {}", ctx.variant().name()),
            }
        }
        Command::Scale {
            font_size,
            os,
            family,
            value,
        } => scale(config, *font_size, os.as_deref(), family, *value, out),
        Command::Info => info(config, out),
    }
}

fn themes(out: &mut impl Write) -> Result<()> {
    for variant in ThemeVariant::all() {
        writeln!(
            out,
            "{:<10} {:<14} {}",
            variant.id(),
            variant.name(),
            variant.description()
        )?;
    }
    Ok(())
}

fn build(config: &ZiziConfig, theme: Option<&str>) -> Result<Arc<ThemeContext>> {
    let variant = match theme {
        Some(id) => ThemeVariant::from_id(id).with_context(|| format!("Unknown theme `{id}`"))?,
        None => config.variant()?,
    };
    let state = ThemeState::new(config.resolver()?, config.scale_manager()?, variant)
        .with_context(|| format!("Failed to build {}", variant.name()))?;
    Ok(state.current())
}

fn dump(ctx: &ThemeContext, filter: Option<&str>, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "# {} (scale {})",
        ctx.variant().name(),
        ctx.scale().factor()
    )?;
    for (key, value) in ctx.defaults().sorted() {
        if filter.map_or(true, |prefix| key.starts_with(prefix)) {
            writeln!(out, "{key} = {value}")?;
        }
    }
    for diagnostic in ctx.diagnostics() {
        writeln!(out, "# {diagnostic}")?;
    }
    Ok(())
}

fn dump_json(ctx: &ThemeContext, filter: Option<&str>, out: &mut impl Write) -> Result<()> {
    let mut values = Map::new();
    for (key, value) in ctx.defaults().sorted() {
        if filter.map_or(true, |prefix| key.starts_with(prefix)) {
            values.insert(
                key.to_string(),
                json!({ "type": value.type_name(), "value": value.to_string() }),
            );
        }
    }
    let diagnostics: Vec<String> = ctx.diagnostics().iter().map(|d| d.to_string()).collect();
    let document = json!({
        "theme": ctx.variant().id(),
        "scale": ctx.scale().factor(),
        "values": Value::Object(values),
        "diagnostics": diagnostics,
    });
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)?;
    Ok(())
}

fn scale(
    config: &ZiziConfig,
    font_size: f32,
    os: Option<&str>,
    family: &str,
    value: f32,
    out: &mut impl Write,
) -> Result<()> {
    let signals = match os {
        Some(os) => {
            let os: OsFamily = os.parse()?;
            PlatformSignals::new(os).with_host_hidpi_aware(os.is_mac())
        }
        None => config.signals()?,
    };
    let manager = ScaleManager::new(signals, config.scale.hidpi);
    let font = FontSpec::plain(family, font_size);
    let scale = manager.scale_for_font(Some(&font));

    writeln!(out, "scaling enabled: {}", manager.is_scaling_enabled())?;
    writeln!(out, "factor: {}", scale.factor())?;
    writeln!(out, "{} -> {}", value, scale.scale(value))?;
    writeln!(out, "{} -> {} (int)", value.round() as i32, scale.scale(value.round() as i32))?;
    Ok(())
}

fn info(config: &ZiziConfig, out: &mut impl Write) -> Result<()> {
    let platform = PlatformInfo::detect();
    let signals = config.signals()?;

    writeln!(out, "os: {} ({})", platform.os, platform.os_name)?;
    writeln!(out, "arch: {}", platform.os_arch)?;
    writeln!(out, "aarch64: {}", platform.is_aarch64())?;
    writeln!(out, "unix: {}", platform.is_unix())?;
    writeln!(out, "theme os: {}", signals.os)?;
    writeln!(out, "host hidpi aware: {}", signals.host_hidpi_aware)?;
    match configurator_for(signals.os, "Zizi") {
        Ok(configurator) => {
            let hints = configurator.startup_hints();
            writeln!(out, "screen menu bar: {}", hints.screen_menu_bar)?;
            writeln!(out, "appearance: {:?}", hints.appearance)?;
        }
        Err(err) => writeln!(out, "startup hints: {err}")?,
    }
    Ok(())
}
