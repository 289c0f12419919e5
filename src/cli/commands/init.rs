use crate::config::Config;
use crate::errors::AppResult;
use crate::store::journal;

use crate::cli::parser::Cli;
use crate::ui::messages::warning;
use crate::utils::path::is_absolute;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - an empty JSON shift store (prod or test mode)
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.store {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let store_path = match &cli.store {
        // resolve the same way init_all does
        Some(custom) if is_absolute(custom) => custom.clone(),
        Some(custom) => Config::config_dir().join(custom).to_string_lossy().to_string(),
        None => Config::load().store,
    };

    println!("⚙️  Initializing WLog…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Store       : {}", &store_path);

    //
    // Journal entry (non-blocking)
    //
    if let Err(e) = journal::record(
        &store_path,
        "init",
        "store",
        &format!("Store initialized at {}", &store_path),
    ) {
        warning(format!("Failed to write journal entry: {}", e));
    }

    println!("🎉 WLog initialization completed!");
    Ok(())
}
