use aiplay::common::setup::{
    HeredityOptions, OutputFormat, PageRankCommand, TicTacToeOptions, parse_configuration_options,
};
use aiplay::common::Task;
use aiplay::heredity::{self, ModelParameters};
use aiplay::pagerank::{self, rank_corpus};
use aiplay::tictactoe::{Outcome, play};
use aiplay::{print_blue, print_green, print_red, print_yellow};
use anyhow::{Context, Result};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

fn run_heredity(options: &HeredityOptions) -> Result<()> {
    let population = heredity::load_population_from_path(&options.data)
        .with_context(|| format!("failed to load family from {}", options.data.display()))?;
    let params = match &options.params {
        Some(path) => ModelParameters::load_from_file(path)
            .with_context(|| format!("failed to load parameters from {}", path.display()))?,
        None => ModelParameters::default(),
    };
    let posteriors = heredity::infer(&population, &params)?;
    match options.format {
        OutputFormat::Text => print!("{}", heredity::render_report(&posteriors)),
        OutputFormat::Json => println!("{}", heredity::render_json(&posteriors)?),
    }
    Ok(())
}

fn run_pagerank(command: &PageRankCommand) -> Result<()> {
    let corpus = pagerank::crawl(&command.corpus)
        .with_context(|| format!("failed to crawl {}", command.corpus.display()))?;
    info!("Crawled {} pages from {}", corpus.len(), command.corpus.display());
    let mut rng = match command.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let report = rank_corpus(&corpus, &command.options, &mut rng)?;
    match command.format {
        OutputFormat::Text => print!("{}", report.render()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn run_tictactoe(options: &TicTacToeOptions) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match play(stdin.lock(), &mut stdout, options.human)? {
        Outcome::Winner(player) if player == options.human => {
            print_green!("Well played.");
        }
        Outcome::Winner(_) => {}
        Outcome::Tie => {
            print_blue!("Nobody beats a perfect player; a tie is the best result.");
        }
        Outcome::Abandoned => {
            print_yellow!("Game abandoned.");
        }
    }
    Ok(())
}

fn main() {
    let config = parse_configuration_options();
    let result = match &config.task {
        Task::Heredity(options) => run_heredity(options),
        Task::PageRank(command) => run_pagerank(command),
        Task::TicTacToe(options) => run_tictactoe(options),
    };
    if let Err(e) = result {
        print_red!("Error: {:#}", e);
        std::process::exit(1);
    }
}
