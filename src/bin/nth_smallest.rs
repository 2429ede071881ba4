//! Command line front end: prints the N-th minimal number of a spreadsheet column.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use std::process;

use nth_smallest::boundary::{find_nth_minimal, NthMinimalRequest, Response};
use nth_smallest::select::Strategy;
use nth_smallest::source::TabularFileSource;
use nth_smallest::SelectionServiceBuilder;

const FILE_ARG_NAME: &str = "FILE";
const RANK_ARG_NAME: &str = "N";
const STRATEGY_ARG_NAME: &str = "strategy";
const SEED_ARG_NAME: &str = "seed";
const VERBOSE_ARG_NAME: &str = "verbose";

const CLIENT_ERROR_EXIT_CODE: i32 = 2;
const SERVER_ERROR_EXIT_CODE: i32 = 1;

fn get_app() -> Command {
    Command::new("nth-smallest")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finds the N-th minimal number in the first column of an .xlsx or .csv file")
        .arg(
            Arg::new(FILE_ARG_NAME)
                .help("Path to a local .xlsx or .csv file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new(RANK_ARG_NAME)
                .help("1-based rank of the minimal number to return")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64))
                .index(2),
        )
        .arg(
            Arg::new(STRATEGY_ARG_NAME)
                .help("Selection algorithm")
                .short('s')
                .long(STRATEGY_ARG_NAME)
                .value_name("heap|quickselect")
                .value_parser(parse_strategy)
                .default_value("quickselect"),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Seed for quickselect pivot choice")
                .long(SEED_ARG_NAME)
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new(VERBOSE_ARG_NAME)
                .help("Increases log verbosity, may be repeated")
                .short('v')
                .long(VERBOSE_ARG_NAME)
                .action(ArgAction::Count),
        )
}

fn parse_strategy(name: &str) -> Result<Strategy, String> {
    name.parse::<Strategy>().map_err(|err| err.to_string())
}

fn init_logger(matches: &ArgMatches) {
    let level = match matches.get_count(VERBOSE_ARG_NAME) {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let matches = get_app().get_matches();
    init_logger(&matches);

    let strategy = matches
        .get_one::<Strategy>(STRATEGY_ARG_NAME)
        .copied()
        .unwrap_or_default();
    let mut builder = SelectionServiceBuilder::new().strategy(strategy);
    if let Some(seed) = matches.get_one::<u64>(SEED_ARG_NAME) {
        builder = builder.seed(*seed);
    }
    let service = builder.build();

    let path = matches
        .get_one::<String>(FILE_ARG_NAME)
        .expect("FILE is a required argument");
    let n = matches
        .get_one::<i64>(RANK_ARG_NAME)
        .expect("N is a required argument");

    let request = NthMinimalRequest::new(path, *n);
    match find_nth_minimal(&TabularFileSource::new(), &service, &request) {
        Response::Value(value) => println!("{value}"),
        Response::ClientError(msg) => {
            eprintln!("{msg}");
            process::exit(CLIENT_ERROR_EXIT_CODE);
        }
        Response::ServerError(msg) => {
            eprintln!("{msg}");
            process::exit(SERVER_ERROR_EXIT_CODE);
        }
    }
}
