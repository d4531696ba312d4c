use clap::Parser;
use poker_hands::cards::CardId;
use poker_hands::events::{Event, Listener};
use poker_hands::scheduler::ManualScheduler;
use poker_hands::score::ScoreTable;
use poker_hands::session::{Session, SessionConfig};
use poker_hands::store::MemoryStore;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless autoplay of the card-selection scoring game")]
struct Args {
    /// Seed for shuffling and card picks
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Number of levels; level n deals n decks
    #[arg(short, long, default_value_t = 2)]
    levels: u32,

    /// Clock step between picks while a filled hand waits to be cleared
    #[arg(long, default_value_t = 250, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Delay before a filled hand is cleared
    #[arg(long, default_value_t = 1000)]
    clear_delay_ms: u64,

    /// Score table (comma-separated, header row first)
    #[arg(long)]
    table: Option<PathBuf>,
}

/// Logs every event and counts filled hands.
#[derive(Debug, Default)]
struct Narrator {
    hands: usize,
}

impl Listener for Narrator {
    fn notify(&mut self, event: &Event) {
        match event {
            Event::HandFilled(category) => {
                self.hands += 1;
                log::info!("hand #{}: {category}", self.hands);
            }
            Event::ScoreChanged(score) => log::info!("round score {score}"),
            Event::BestScoreChanged(best) => log::info!("best score {best}"),
            Event::RoundReset => log::info!("level complete"),
            Event::RoundEnded => log::info!("game over"),
            other => log::trace!("{other:?}"),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let score_table = match &args.table {
        Some(path) => std::fs::read_to_string(path)?.parse::<ScoreTable>()?,
        None => ScoreTable::standard(),
    };
    let config = SessionConfig {
        clear_delay: Duration::from_millis(args.clear_delay_ms),
        final_level: args.levels,
        score_table,
    };
    let tick = Duration::from_millis(args.tick_ms);

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut session = Session::new(config, MemoryStore::new(), ManualScheduler::new(), Narrator::default());
    session.deal_level(args.seed);

    while !session.is_game_over() {
        if session.collection().is_hand_full() {
            session.tick(tick);
            continue;
        }
        let supply: Vec<CardId> = session.collection().supply().map(|c| c.id()).collect();
        match supply.choose(&mut rng) {
            Some(&id) => {
                session.select(id);
            }
            None => session.deal_level(args.seed.wrapping_add(u64::from(session.levels().current()))),
        }
    }
    session.teardown();

    println!(
        "poker-hands {}: {} hands over {} levels, final score {}, best score {}",
        poker_hands::VERSION,
        session.listener().hands,
        session.levels().current(),
        session.score().round_score(),
        session.score().best_score()
    );
    Ok(())
}
