use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

use game_client::{
    api::{ApiClient, GameApi},
    config::ClientConfig,
    session::GameSession,
};
use game_core::{FileStore, GameStore, GuessResult, RoundOutcome, RoundRules};
use game_types::LeaderboardEntry;

const HELP: &str = "Type the English translation and press Enter.\n\
Commands: :leaderboard, :restart, :help, :quit";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never mix with the game on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    tracing::info!("Using API at {}", config.api_url);

    if let Err(e) = run(config).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: ClientConfig) -> Result<()> {
    let api = ApiClient::new(config.api_url);
    let store = FileStore::new(config.state_file);
    let mut session = GameSession::start(api, store, RoundRules::default())?;
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("Translatle");
    println!("Welcome to Translatle.");
    println!("{}", HELP);

    loop {
        let game = session.game().clone();
        let word = match session.current_word().await {
            Ok(word) => word.clone(),
            Err(e) => {
                eprintln!("Could not load a word: {:#}", e);
                return Err(e);
            }
        };

        println!();
        println!("Points: {} | Tries: {}", game.points, game.total_tries);
        println!(
            "Translate: {} ({} letters, starts with '{}')",
            word.french, word.length, word.first_letter
        );

        let Some(line) = input.next_line().await? else {
            break;
        };

        match line.as_str() {
            ":quit" => break,
            ":help" => {
                println!("{}", HELP);
                continue;
            }
            ":leaderboard" => {
                match session.leaderboard().await {
                    Ok(entries) => print_leaderboard(&entries),
                    Err(e) => eprintln!("Could not load the leaderboard: {:#}", e),
                }
                continue;
            }
            ":restart" => {
                session.restart()?;
                println!("Progress cleared.");
                continue;
            }
            _ => {}
        }

        let report = session.guess(&line)?;
        match report.result {
            GuessResult::Correct => println!("Correct!"),
            GuessResult::Incorrect => println!("Wrong, it was '{}'.", report.expected),
        }

        match report.outcome {
            RoundOutcome::Continuing { .. } => {}
            RoundOutcome::Won { total_tries } => {
                println!("You won in {} tries!", total_tries);
                offer_leaderboard(&session, &mut input, total_tries).await?;
                println!("Starting a new game.");
            }
            RoundOutcome::Lost { .. } => {
                println!("You lost. Starting a new game.");
            }
        }
    }

    println!("Bye!");
    Ok(())
}

async fn offer_leaderboard<A: GameApi, S: GameStore>(
    session: &GameSession<A, S>,
    input: &mut Lines<BufReader<Stdin>>,
    total_tries: i32,
) -> Result<()> {
    println!("Enter your name for the leaderboard (leave empty to skip):");
    let name = input.next_line().await?.unwrap_or_default();
    if name.trim().is_empty() {
        return Ok(());
    }

    match session.submit_score(&name, total_tries).await {
        Ok(entries) => print_leaderboard(&entries),
        Err(e) => eprintln!("Could not submit your score: {:#}", e),
    }
    Ok(())
}

fn print_leaderboard(entries: &[LeaderboardEntry]) {
    if entries.is_empty() {
        println!("The leaderboard is empty.");
        return;
    }

    println!("Leaderboard (fewest tries first):");
    for (rank, entry) in entries.iter().enumerate() {
        println!("{:>2}. {:<20} {:>4}", rank + 1, entry.player, entry.score);
    }
}
