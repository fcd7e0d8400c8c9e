use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use redesign_review::app::ReviewSession;
use redesign_review::kernel::clamp_request_count;
use redesign_review::kernel::services::adapters::{
    ensure_settings_file, ensure_state_dir, get_settings_path, load_settings, read_settings,
    FileStorage, Osc52Clipboard,
};
use redesign_review::kernel::services::ports::{
    ClipboardSink, Settings, StateStorage, REVIEW_STATE_KEY,
};
use redesign_review::kernel::VariantId;

mod logging;

/// Review generated homepage design variants and build prompts for more.
#[derive(Parser, Debug)]
#[command(name = "redesign-review", version, long_about = None)]
struct Cli {
    /// Settings file (catalog, debounce, default request count)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Directory holding the persisted review state
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show active variants (favorites first) and dismissed variants
    List,
    /// Toggle the favorite mark on a variant
    Favorite { id: u32 },
    /// Dismiss a variant (clears its favorite mark)
    Dismiss { id: u32 },
    /// Bring a dismissed variant back
    Undo { id: u32 },
    /// Replace the feedback for a variant; no text clears it
    Feedback { id: u32, text: Vec<String> },
    /// Print the prompt requesting more variants
    Prompt {
        /// How many more variants to ask for (1-5)
        #[arg(short, long)]
        count: Option<u32>,
        /// Also copy the prompt to the clipboard (OSC 52)
        #[arg(long)]
        copy: bool,
    },
    /// Print the settings, state and log locations
    Paths,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_guard = logging::init();

    let settings = resolve_settings(cli.settings.as_deref())?;
    let state_dir = match cli.state_dir {
        Some(dir) => dir,
        None => ensure_state_dir().context("cannot determine review state directory")?,
    };

    if let Commands::Paths = cli.command {
        let settings_path = cli.settings.or_else(get_settings_path);
        println!("settings: {}", display_opt(settings_path.as_deref()));
        println!(
            "state:    {}",
            FileStorage::new(&state_dir).path_for(REVIEW_STATE_KEY).display()
        );
        println!(
            "logs:     {}",
            display_opt(log_guard.as_ref().map(|guard| guard.log_dir()))
        );
        return Ok(());
    }

    let mut session = ReviewSession::open(
        settings.catalog(),
        FileStorage::new(state_dir),
        Osc52Clipboard::stdout(),
        settings.persist_debounce(),
    );

    run(&mut session, &settings, cli.command)?;
    session
        .flush()
        .context("failed to persist review state")?;
    Ok(())
}

fn run<S: StateStorage, C: ClipboardSink>(
    session: &mut ReviewSession<S, C>,
    settings: &Settings,
    command: Commands,
) -> anyhow::Result<()> {
    match command {
        Commands::List => print_review(session),
        Commands::Favorite { id } => {
            let id = known_variant(session, id)?;
            session.toggle_favorite(id);
            let state = if session.store().state().is_favorite(id) {
                "favorited"
            } else {
                "unfavorited"
            };
            println!("{id} {state}");
        }
        Commands::Dismiss { id } => {
            let id = known_variant(session, id)?;
            session.dismiss(id);
            println!("{id} dismissed");
        }
        Commands::Undo { id } => {
            let id = known_variant(session, id)?;
            if session.undo_dismiss(id) {
                println!("{id} restored");
            } else {
                println!("{id} was not dismissed");
            }
        }
        Commands::Feedback { id, text } => {
            let id = known_variant(session, id)?;
            session.set_feedback(id, text.join(" "));
            if session.store().has_notes(id) {
                println!("{id} feedback saved");
            } else {
                println!("{id} feedback cleared");
            }
        }
        Commands::Prompt { count, copy } => {
            let count = clamp_request_count(count.unwrap_or(settings.default_request_count));
            println!("{}", session.store().prompt(count));
            if copy {
                if session.copy_prompt(count) {
                    eprintln!("copied to clipboard");
                } else {
                    eprintln!("could not copy to clipboard");
                }
            }
        }
        Commands::Paths => {}
    }
    Ok(())
}

fn resolve_settings(explicit: Option<&Path>) -> anyhow::Result<Settings> {
    if let Some(path) = explicit {
        return read_settings(path).context("failed to load settings");
    }
    if let Err(err) = ensure_settings_file() {
        tracing::warn!(error = %err, "could not create default settings file");
    }
    Ok(load_settings().unwrap_or_default())
}

fn known_variant<S: StateStorage, C: ClipboardSink>(
    session: &ReviewSession<S, C>,
    id: u32,
) -> anyhow::Result<VariantId> {
    let id = VariantId::new(id);
    if !session.store().catalog().contains(id) {
        bail!("unknown variant {id}");
    }
    Ok(id)
}

fn print_review<S: StateStorage, C: ClipboardSink>(session: &ReviewSession<S, C>) {
    let store = session.store();
    let state = store.state();

    println!("Active:");
    for variant in store.active_variants() {
        let mark = if state.is_favorite(variant.id) { '*' } else { ' ' };
        let notes = if store.has_notes(variant.id) { "  [notes]" } else { "" };
        println!(
            "  {mark} {:>3}  {:<20} {}{notes}",
            variant.id.get(),
            variant.label.as_str(),
            variant.route
        );
    }

    let dismissed = store.dismissed_variants();
    if !dismissed.is_empty() {
        println!("Dismissed:");
        for variant in dismissed {
            let notes = if store.has_notes(variant.id) { "  [notes]" } else { "" };
            println!(
                "    {:>3}  {:<20} {}{notes}",
                variant.id.get(),
                variant.label.as_str(),
                variant.route
            );
        }
    }
}

fn display_opt(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "<unavailable>".to_string())
}
