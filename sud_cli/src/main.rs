//! sud - play text adventures in the terminal.

mod demo;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sud_engine::{
    install, load_rooms, Console, FileStore, Game, GameConfig, GameManager, StdConsole,
};

#[derive(Parser)]
#[command(name = "sud")]
#[command(about = "Text adventure engine", version)]
struct Cli {
    /// Game configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a world loaded from a JSON rooms file
    Play {
        /// Rooms file
        rooms: PathBuf,

        /// Id of the starting room
        #[arg(short, long)]
        start: Option<String>,

        /// Player name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Play the bundled demo adventure
    Demo {
        /// Player name, asked for when omitted
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Continue a saved game
    Resume {
        /// Save file, defaults to the configured save path
        #[arg(short, long)]
        save: Option<String>,
    },

    /// Build a game from a rooms file and write it as a save
    Make {
        /// Rooms file
        rooms: PathBuf,

        /// Output save file
        #[arg(short, long, default_value = "game.json")]
        out: String,

        /// Id of the starting room
        #[arg(short, long)]
        start: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    // Game text goes to stdout, logs to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };

    let mut console = StdConsole::new();
    match cli.command {
        Commands::Play { rooms, start, name } => {
            let game = game_from_rooms(&config, &rooms, start, name.as_deref())?;
            play(game, &config, &mut console)?;
        }

        Commands::Demo { name } => {
            let name = match name {
                Some(name) => Some(name),
                None => console.read_line("Enter your character name: ")?,
            };
            let mut game = config.new_game(name.as_deref());
            demo::install_demo(&mut game)?;
            play(game, &config, &mut console)?;
        }

        Commands::Resume { save } => {
            let slot = save.unwrap_or_else(|| config.save_path.clone());
            let mut game = config.new_game(None);
            game.set_scripts(demo::scripts());
            let mut manager = GameManager::new(game, FileStore::current_dir()).with_slot(&slot);
            manager
                .load_game(&slot, &mut console)
                .with_context(|| format!("resuming {}", slot))?;
        }

        Commands::Make { rooms, out, start } => {
            let game = game_from_rooms(&config, &rooms, start, None)?;
            let mut manager = GameManager::new(game, FileStore::current_dir());
            manager
                .save_game(&out)
                .with_context(|| format!("writing {}", out))?;
            info!(out = %out, "game data written");
            println!("{} -> {}", rooms.display(), out);
        }
    }

    Ok(())
}

fn game_from_rooms(
    config: &GameConfig,
    rooms: &Path,
    start: Option<String>,
    player_name: Option<&str>,
) -> anyhow::Result<Game> {
    let definitions =
        load_rooms(rooms).with_context(|| format!("loading rooms {}", rooms.display()))?;
    let Some(first) = definitions.first() else {
        bail!("{} defines no rooms", rooms.display());
    };
    let start = start
        .or_else(|| config.start_room.clone())
        .unwrap_or_else(|| first.id.to_string());

    let mut game = config.new_game(player_name);
    install(&mut game, &definitions)?;
    game.move_player_to(start.as_str())
        .with_context(|| format!("starting room {}", start))?;
    Ok(game)
}

fn play(mut game: Game, config: &GameConfig, console: &mut StdConsole) -> anyhow::Result<()> {
    game.set_scripts(demo::scripts());
    game.show_welcome_message();
    let mut manager = GameManager::new(game, FileStore::current_dir()).with_slot(&config.save_path);
    manager.run_game(console)?;
    Ok(())
}
