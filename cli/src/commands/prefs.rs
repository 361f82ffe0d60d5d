//! # Prefs Command
//!
//! File: cli/src/commands/prefs.rs
//!
//! ## Overview
//!
//! Reads and changes the stored visitor preferences.
//!
//! ```bash
//! folio prefs show
//! folio prefs show --json
//! folio prefs themes
//! folio prefs theme terminal
//! folio prefs a11y --reduce-motion true --text-scale 1.2
//! folio prefs reset
//! ```
//!
//! The preferences file is `--store`, else `FOLIO_PREFS_FILE`, else
//! `prefs.json` in the user data directory.
//!
use crate::core::error::Result;
use crate::prefs::{A11yPatch, JsonFileStore, KeyValueStore, Preferences, Theme};
use clap::{Parser, Subcommand};
use serde_json::{json, Map, Value};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
pub struct PrefsArgs {
    /// Preferences file to use.
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: PrefsCommand,
}

#[derive(Subcommand, Debug)]
enum PrefsCommand {
    /// Show the current theme, accessibility settings and their CSS effects.
    Show {
        #[arg(long)]
        json: bool,
    },
    /// List the available themes.
    Themes,
    /// Switch theme.
    Theme { id: String },
    /// Change accessibility settings. Without options, shows them.
    A11y(A11yArgs),
    /// Restore the default theme and accessibility settings.
    Reset,
}

#[derive(Parser, Debug)]
struct A11yArgs {
    #[arg(long)]
    reduce_motion: Option<bool>,
    #[arg(long)]
    high_contrast: Option<bool>,
    /// Between 0.9 and 1.3; other values are clamped.
    #[arg(long)]
    text_scale: Option<f32>,
    #[arg(long)]
    dyslexia: Option<bool>,
}

impl From<A11yArgs> for A11yPatch {
    fn from(args: A11yArgs) -> Self {
        A11yPatch {
            reduce_motion: args.reduce_motion,
            high_contrast: args.high_contrast,
            text_scale: args.text_scale,
            dyslexia: args.dyslexia,
        }
    }
}

pub async fn handle_prefs(args: PrefsArgs) -> Result<()> {
    let store = JsonFileStore::resolve(args.store.as_deref())?;
    info!("Using preferences file {}", store.path().display());
    let mut prefs = Preferences::load(store);

    match args.command {
        PrefsCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&to_json(&prefs))?);
            } else {
                print!("{}", render(&prefs));
            }
        }
        PrefsCommand::Themes => {
            for theme in Theme::ALL {
                let marker = if theme == prefs.theme() { "*" } else { " " };
                println!("{} {}", marker, theme);
            }
        }
        PrefsCommand::Theme { id } => {
            let theme: Theme = id.parse()?;
            prefs.set_theme(theme.id());
            println!("Theme set to {} ({})", theme, theme.css_class());
        }
        PrefsCommand::A11y(a11y_args) => {
            let patch = A11yPatch::from(a11y_args);
            if !patch.is_empty() {
                prefs.update_a11y(patch);
            }
            print!("{}", render(&prefs));
        }
        PrefsCommand::Reset => {
            prefs.reset();
            println!("Preferences reset to defaults.");
        }
    }
    Ok(())
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

/// Root classes for the document: the theme class first, then the
/// accessibility classes.
fn root_classes<S: KeyValueStore>(prefs: &Preferences<S>) -> Vec<String> {
    let mut classes = vec![prefs.theme().css_class()];
    classes.extend(prefs.a11y().root_classes().into_iter().map(String::from));
    classes
}

fn render<S: KeyValueStore>(prefs: &Preferences<S>) -> String {
    let a11y = prefs.a11y();
    let variables: Vec<String> = a11y
        .css_variables()
        .into_iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect();
    format!(
        "theme:          {}\n\
         reduce motion:  {}\n\
         high contrast:  {}\n\
         text scale:     {}\n\
         dyslexia font:  {}\n\
         css variables:  {}\n\
         root classes:   {}\n",
        prefs.theme(),
        on_off(a11y.reduce_motion),
        on_off(a11y.high_contrast),
        a11y.text_scale,
        on_off(a11y.dyslexia),
        variables.join("; "),
        root_classes(prefs).join(" "),
    )
}

fn to_json<S: KeyValueStore>(prefs: &Preferences<S>) -> Value {
    let variables: Map<String, Value> = prefs
        .a11y()
        .css_variables()
        .into_iter()
        .map(|(name, value)| (name.to_string(), Value::String(value)))
        .collect();
    json!({
        "theme": prefs.theme().id(),
        "a11y": prefs.a11y(),
        "cssVariables": variables,
        "rootClasses": root_classes(prefs),
    })
}
