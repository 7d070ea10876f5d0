// Utility to set the admin password file
// Usage: cargo run --bin set_admin_password -- <password> [--file <path>]

use clap::Parser;
use std::path::PathBuf;

use event_board_api::services::PasswordStore;
use event_board_api::Config;

#[derive(Parser)]
#[command(about = "Write the event board admin password file")]
struct Args {
    /// New admin password (surrounding whitespace is trimmed)
    password: String,

    /// Password file to write [default: PASSWORD_FILE or password.txt]
    #[arg(long)]
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load environment variables
    dotenv::dotenv().ok();
    let config = Config::from_env()?;

    let path = args.file.unwrap_or(config.password_file);
    let store = PasswordStore::new(path);
    store.write(&args.password).await?;

    println!("Admin password written to {}", store.path().display());
    Ok(())
}
