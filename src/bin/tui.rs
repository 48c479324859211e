use anyhow::Result;
use goalpost::context::{AppContext, StandardContext};
use goalpost::storage::LocalStorage;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::env;
use std::sync::Arc;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Handle help flag
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h" || args[1] == "help") {
        print_help();
        return Ok(());
    }

    let ctx = Arc::new(StandardContext::new(None));

    // CLI Command: goalpost export
    if args.len() > 1 && args[1] == "export" {
        let goals = LocalStorage::load(ctx.as_ref())?;
        println!("{}", serde_json::to_string_pretty(&goals)?);
        return Ok(());
    }

    init_logging(ctx.as_ref());

    // Normal TUI startup
    goalpost::tui::run_with_ctx(ctx)
}

/// Logs go to a file in the cache dir: once the alternate screen is up,
/// stderr is unusable. Logging is best-effort and never blocks startup.
fn init_logging(ctx: &dyn AppContext) {
    if let Some(path) = ctx.get_log_path()
        && let Ok(file) = std::fs::File::create(&path)
    {
        let _ = WriteLogger::init(LevelFilter::Info, ConfigBuilder::new().build(), file);
    }
}

fn print_help() {
    println!(
        "Goalpost v{} - Minimal local-first goal tracker (TUI)",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    goalpost                Start interactive TUI");
    println!("    goalpost export         Dump goals as JSON to stdout");
    println!("    goalpost --help         Show this help message");
    println!();
    println!("EXPORT COMMAND:");
    println!("    goalpost export > backup.json     Save goals to a file");
    println!("    goalpost export | jq '.[].name'   Filter output");
    println!();
    println!("KEYBINDINGS:");
    println!("    a            Add a goal (name, then deadline)");
    println!("    Space        Toggle selected goal done/pending");
    println!("    d            Delete selected goal");
    println!("    H            Hide/show completed goals");
    println!("    j/k          Move selection");
    println!("    ?            Full help inside the app");
    println!("    q            Quit");
}
