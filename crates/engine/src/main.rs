//! Dice Roller - Main entry point.

use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use diceroller_engine::infrastructure::settings::AppSettings;
use diceroller_engine::presentation::Console;
use diceroller_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging. stdout belongs to the console, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "diceroller_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Dice Roller");

    // Load configuration
    let settings = AppSettings::from_env();
    tracing::info!(
        dice = %settings.dice_text,
        faces = %settings.faces_text,
        sort = %settings.sort_mode,
        output = %settings.output,
        seeded = settings.seed.is_some(),
        "Settings loaded"
    );

    let app = App::new(settings);
    let mut console = Console::new(&app);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    console.run(stdin, &mut stdout).await?;

    tracing::info!("Dice Roller stopped");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
