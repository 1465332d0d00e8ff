use std::cell::RefCell;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use swatchbook::{
    builtin_registry, root_stylesheet, FileStore, ManagerConfig, MemoryDocument, Notification,
    ThemeManager, ThemeRegistry, DEFAULT_KEY,
};

use crate::swatch::swatch;

/// Pick, preview and persist color palettes.
#[derive(Debug, Parser)]
#[command(name = "swatchbook", version, about)]
pub struct Cli {
    /// JSON file holding the saved selection.
    #[arg(long, global = true, default_value = ".swatchbook.json")]
    pub store: PathBuf,

    /// YAML file of palettes to use instead of the built-in ones.
    #[arg(long, global = true)]
    pub themes: Option<PathBuf>,

    /// Default palette key of a `--themes` file.
    #[arg(long, global = true, default_value = DEFAULT_KEY)]
    pub default_theme: String,

    /// Dark palette key of a `--themes` file.
    #[arg(long, global = true)]
    pub dark_theme: Option<String>,

    /// YAML manager configuration.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List palettes, marking the saved one.
    List,
    /// Print the `:root` stylesheet of a palette (default: the saved one).
    Show { key: Option<String> },
    /// Select a palette, optionally saving it.
    Select {
        key: String,
        #[arg(long)]
        save: bool,
    },
    /// Save the current selection again.
    Save,
    /// Return to the default palette and forget the saved one.
    Reset,
    /// Print the picker markup.
    Picker,
}

impl Cli {
    /// Log level selected by `-v` flags.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    fn load_registry(&self) -> Result<Arc<ThemeRegistry>> {
        match &self.themes {
            Some(path) => {
                let registry =
                    ThemeRegistry::from_file(path, &self.default_theme, self.dark_theme.as_deref())
                        .with_context(|| format!("loading palettes from {}", path.display()))?;
                Ok(Arc::new(registry))
            }
            None => Ok(builtin_registry()),
        }
    }

    fn load_config(&self) -> Result<ManagerConfig> {
        match &self.config {
            Some(path) => ManagerConfig::from_file(path)
                .with_context(|| format!("loading config from {}", path.display())),
            None => Ok(ManagerConfig::default()),
        }
    }
}

/// Executes `cli`, writing user-facing output to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let registry = cli.load_registry()?;
    let config = cli.load_config()?;
    let container = config.container_id.clone();

    let notifications = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notifications);
    let mut manager = ThemeManager::with_config(
        Arc::clone(&registry),
        FileStore::new(&cli.store),
        MemoryDocument::new().with_element(container.as_str()),
        config,
    )
    .with_notifier(move |n: &Notification| sink.borrow_mut().push(n.clone()));

    tracing::info!(current = manager.current(), store = %cli.store.display(), "loaded selection");

    match &cli.command {
        Command::List => {
            for entry in manager.picker_entries() {
                let marker = if entry.active { "*" } else { " " };
                writeln!(
                    out,
                    "{} {}{} {:<10} {:<14} {}",
                    marker,
                    swatch(&entry.primary),
                    swatch(&entry.secondary),
                    entry.key,
                    entry.name,
                    entry.primary
                )?;
            }
        }
        Command::Show { key } => {
            let resolved = match key {
                Some(key) => match registry.resolve(key) {
                    Some(resolved) => resolved,
                    None => bail!("unknown theme '{}'", key),
                },
                None => manager.current_theme(),
            };
            writeln!(out, "{}", root_stylesheet(resolved, manager.config()))?;
        }
        Command::Select { key, save } => {
            if !manager.select(key) {
                bail!(
                    "unknown theme '{}' (available: {})",
                    key,
                    registry.keys().collect::<Vec<_>>().join(", ")
                );
            }
            let theme = manager.current_theme().theme;
            writeln!(out, "Selected {} ({})", theme.name, key)?;
            if *save && !manager.save() {
                bail!("failed to save theme '{}' to {}", key, cli.store.display());
            }
        }
        Command::Save => {
            if !manager.save() {
                bail!(
                    "failed to save theme '{}' to {}",
                    manager.current(),
                    cli.store.display()
                );
            }
        }
        Command::Reset => manager.reset(),
        Command::Picker => {
            manager.render_picker();
            let html = manager.document().inner_html(&container).unwrap_or_default();
            writeln!(out, "{}", html.trim())?;
        }
    }

    for notification in notifications.borrow().iter() {
        writeln!(out, "{} {}", style("✔").green(), notification)?;
    }

    Ok(())
}
