use clap::{Arg, ArgMatches, Command, ValueEnum, builder::EnumValueParser, value_parser};
use serde::Deserialize;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::common::logging::init_logging;
use crate::pagerank::PageRankOptions;
use crate::tictactoe::Player;

/// How results are written to stdout.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, ValueEnum)]
pub enum OutputFormat {
    /// Human readable, four decimal places
    #[serde(rename = "text")]
    Text,

    /// Pretty printed JSON
    #[serde(rename = "json")]
    Json,
}

/// Side the human takes in a console game.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, ValueEnum)]
pub enum PlayerChoice {
    #[serde(rename = "x")]
    X,
    #[serde(rename = "o")]
    O,
}

impl From<PlayerChoice> for Player {
    fn from(choice: PlayerChoice) -> Self {
        match choice {
            PlayerChoice::X => Player::X,
            PlayerChoice::O => Player::O,
        }
    }
}

#[derive(Clone, Debug)]
pub struct HeredityOptions {
    pub data: PathBuf,
    pub params: Option<PathBuf>,
    pub format: OutputFormat,
}

#[derive(Clone, Debug)]
pub struct PageRankCommand {
    pub corpus: PathBuf,
    pub options: PageRankOptions,
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

#[derive(Clone, Debug)]
pub struct TicTacToeOptions {
    pub human: Player,
}

#[derive(Clone, Debug)]
pub enum Task {
    Heredity(HeredityOptions),
    PageRank(PageRankCommand),
    TicTacToe(TicTacToeOptions),
}

/// These options define the inputs from the user.
#[derive(Clone, Debug)]
pub struct CommandLineOptions {
    pub verbose: bool,
    pub task: Task,
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_parser(EnumValueParser::<OutputFormat>::new())
        .help("Output format: 'text' or 'json'")
        .default_value("text")
}

pub fn build_command() -> Command {
    Command::new("AIPLAY")
        .version("0.1.0")
        .about("Heredity inference, PageRank estimation and a perfect Tic-Tac-Toe opponent.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Enables debug logging")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("heredity")
                .about("Computes gene and trait posteriors for every person in a family CSV")
                .arg(
                    Arg::new("data")
                        .value_name("CSV")
                        .help("CSV file with columns name,mother,father,trait")
                        .value_parser(value_parser!(PathBuf))
                        .required(true),
                )
                .arg(
                    Arg::new("params")
                        .long("params")
                        .value_name("FILE")
                        .help("JSON file overriding the model parameters (optional)")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("pagerank")
                .about("Ranks the HTML pages of a directory by sampling and by iteration")
                .arg(
                    Arg::new("corpus")
                        .value_name("DIR")
                        .help("Directory containing the .html pages")
                        .value_parser(value_parser!(PathBuf))
                        .required(true),
                )
                .arg(
                    Arg::new("damping")
                        .long("damping")
                        .value_name("FLOAT")
                        .help("Probability of following a link rather than jumping")
                        .value_parser(value_parser!(f64))
                        .default_value("0.85"),
                )
                .arg(
                    Arg::new("samples")
                        .long("samples")
                        .value_name("NUMBER")
                        .help("Number of random-surfer samples")
                        .value_parser(value_parser!(usize))
                        .default_value("10000"),
                )
                .arg(
                    Arg::new("tolerance")
                        .long("tolerance")
                        .value_name("FLOAT")
                        .help("Largest per-page change accepted as converged")
                        .value_parser(value_parser!(f64))
                        .default_value("0.001"),
                )
                .arg(
                    Arg::new("max_iterations")
                        .long("max-iterations")
                        .value_name("NUMBER")
                        .help("Gives up iterating after this many rounds")
                        .value_parser(value_parser!(usize))
                        .default_value("10000"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_name("NUMBER")
                        .help("Seed for the sampler (optional)")
                        .value_parser(value_parser!(u64)),
                )
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("tictactoe")
                .about("Plays Tic-Tac-Toe against a minimax opponent")
                .arg(
                    Arg::new("player")
                        .long("player")
                        .value_parser(EnumValueParser::<PlayerChoice>::new())
                        .help("Side to play: 'x' moves first")
                        .default_value("x"),
                ),
        )
}

fn output_format(matches: &ArgMatches) -> OutputFormat {
    matches
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or(OutputFormat::Text)
}

fn options_from_matches(matches: &ArgMatches) -> Result<CommandLineOptions, clap::Error> {
    let verbose = matches.get_flag("verbose");
    let task = match matches.subcommand() {
        Some(("heredity", sub)) => Task::Heredity(HeredityOptions {
            data: required::<PathBuf>(sub, "data")?,
            params: sub.get_one::<PathBuf>("params").cloned(),
            format: output_format(sub),
        }),
        Some(("pagerank", sub)) => Task::PageRank(PageRankCommand {
            corpus: required::<PathBuf>(sub, "corpus")?,
            options: PageRankOptions {
                damping: required::<f64>(sub, "damping")?,
                samples: required::<usize>(sub, "samples")?,
                tolerance: required::<f64>(sub, "tolerance")?,
                max_iterations: required::<usize>(sub, "max_iterations")?,
            },
            seed: sub.get_one::<u64>("seed").copied(),
            format: output_format(sub),
        }),
        Some(("tictactoe", sub)) => Task::TicTacToe(TicTacToeOptions {
            human: sub
                .get_one::<PlayerChoice>("player")
                .copied()
                .unwrap_or(PlayerChoice::X)
                .into(),
        }),
        _ => {
            return Err(clap::Error::raw(
                clap::error::ErrorKind::MissingSubcommand,
                "a subcommand is required",
            ));
        }
    };
    Ok(CommandLineOptions { verbose, task })
}

fn required<T: Clone + Send + Sync + 'static>(
    matches: &ArgMatches,
    id: &str,
) -> Result<T, clap::Error> {
    matches.get_one::<T>(id).cloned().ok_or_else(|| {
        clap::Error::raw(
            clap::error::ErrorKind::MissingRequiredArgument,
            format!("missing value for '{}'", id),
        )
    })
}

/// Parses an explicit argument list. The first item is the program name.
pub fn parse_from<I, T>(args: I) -> Result<CommandLineOptions, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_command().try_get_matches_from(args)?;
    options_from_matches(&matches)
}

/// Parses `std::env::args`, exiting with clap's usage message on bad input,
/// and installs the logger.
pub fn parse_configuration_options() -> CommandLineOptions {
    let options = match parse_from(std::env::args_os()) {
        Ok(options) => options,
        Err(e) => e.exit(),
    };
    init_logging(options.verbose);
    options
}
