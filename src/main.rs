//! Letter Boxed Explorer - CLI
//!
//! Filter a dictionary against Letter Boxed constraints, search for two-word
//! solutions, and share puzzle views as tokens.

use anyhow::Result;
use clap::{Parser, Subcommand};
use letter_boxed::{
    commands::{
        BenchmarkConfig, ShareConfig, SolveConfig, cheat, decode_token, run_benchmark,
        run_explore, share, solve,
    },
    core::{SortOrder, WordStore},
    logging::init_logger,
    output::{
        print_benchmark_result, print_cheat_result, print_decode_result, print_share_token,
        print_solve_result,
    },
    solver::MAX_RESULTS,
    state,
    wordlists::{EMBEDDED, load_or_empty},
};

#[derive(Parser)]
#[command(
    name = "letter_boxed",
    about = "Letter Boxed word explorer: constraint filtering, two-word solutions, shareable views",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary: 'embedded' (default) or path to a newline-separated word file
    #[arg(short, long, global = true, default_value = EMBEDDED)]
    dictionary: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List dictionary words that can be spelled from the given letters
    Solve {
        /// Letters allowed in words
        letters: String,

        /// Letters every word must contain
        #[arg(short, long, default_value = "")]
        must_use: String,

        /// Letters no word may contain
        #[arg(short, long, default_value = "")]
        cannot_use: String,

        /// Required word prefix
        #[arg(short, long, default_value = "")]
        starts_with: String,

        /// Required word suffix
        #[arg(short, long, default_value = "")]
        ends_with: String,

        /// Adjacency groups, e.g. abc,def (letters in one group may not touch)
        #[arg(short, long = "letter-groups", visible_alias = "groups", default_value = "")]
        groups: String,

        /// alphabetical-asc, alphabetical-desc, length-asc or length-desc
        #[arg(long, default_value_t = SortOrder::default())]
        sort: SortOrder,

        /// Maximum number of words to print
        #[arg(short, long, default_value_t = MAX_RESULTS)]
        limit: usize,
    },

    /// Find two-word solutions using every given letter
    Cheat {
        /// Puzzle letters
        letters: String,

        /// Adjacency groups, e.g. abc,def,ghi,jkl
        #[arg(short, long, default_value = "")]
        groups: String,
    },

    /// Encode a puzzle view as a shareable token
    Share {
        /// Letters that may appear
        #[arg(long, default_value = "")]
        available: String,

        /// Letters that must appear somewhere
        #[arg(long, default_value = "")]
        anywhere: String,

        /// Letters words must start with
        #[arg(long, default_value = "")]
        start: String,

        /// Letters words must end with
        #[arg(long, default_value = "")]
        end: String,

        /// Adjacency groups, e.g. abc,def
        #[arg(short, long, default_value = "")]
        groups: String,

        /// Result ordering stored in the token
        #[arg(long, default_value_t = SortOrder::default())]
        sort: SortOrder,
    },

    /// Show the view and results encoded in a token
    Decode {
        /// Token, with or without the leading '#'
        token: String,
    },

    /// Interactive explorer
    Explore {
        /// Start from a shared token
        #[arg(long)]
        state: Option<String>,
    },

    /// Time filtering and pair search on random puzzles
    Benchmark {
        /// Number of random puzzles
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible puzzles
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let store = load_or_empty(&cli.dictionary);

    match cli.command {
        Commands::Solve {
            letters,
            must_use,
            cannot_use,
            starts_with,
            ends_with,
            groups,
            sort,
            limit,
        } => {
            let config = SolveConfig {
                letters,
                must_use,
                cannot_use,
                starts_with,
                ends_with,
                groups,
                sort_order: sort,
                limit,
            };
            print_solve_result(&solve(&store, &config));
        }
        Commands::Cheat { letters, groups } => {
            print_cheat_result(&cheat(&store, &letters, &groups));
        }
        Commands::Share {
            available,
            anywhere,
            start,
            end,
            groups,
            sort,
        } => {
            let config = ShareConfig {
                available,
                anywhere,
                start,
                end,
                groups,
                sort_order: sort,
            };
            print_share_token(&share(&config)?);
        }
        Commands::Decode { token } => {
            print_decode_result(&decode_token(&store, &token));
        }
        Commands::Explore { state } => run_explore_command(&store, state.as_deref())?,
        Commands::Benchmark { count, seed } => {
            let config = BenchmarkConfig {
                count,
                seed,
                ..BenchmarkConfig::default()
            };
            println!("Running benchmark on {count} random puzzles...");
            print_benchmark_result(&run_benchmark(&store, &config)?);
        }
    }

    Ok(())
}

fn run_explore_command(store: &WordStore, token: Option<&str>) -> Result<()> {
    let initial = token.map(state::decode).unwrap_or_default();
    let finished = run_explore(store, initial)?;

    println!("\nFinal view: {}", state::to_fragment(&finished));
    Ok(())
}
