mod args;
mod config;

use args::Args;
use clap::Parser;
use log::{debug, LevelFilter};
use search::{Clock, Engine, SearchLimits};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};
use std::error::Error;
use std::fs::File;
use utils::Position;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let config = config::build_config(&args.options)?;
    if args.list_options {
        for line in config.describe() {
            println!("{}", line);
        }
        return Ok(());
    }

    let mut engine = Engine::new(&config);
    let mut position = Position::from_fen(&args.fen)?;
    debug!("{} searching {}", engine.name(), position.fen());

    let limits = SearchLimits {
        depth: args.depth,
        move_time: args.movetime,
        nodes: args.nodes,
    };
    let report = engine.search(&mut position, &limits, &Clock::new(args.clock));

    match report.best_move {
        Some(best_move) => println!("bestmove {}", best_move),
        None => println!("bestmove (none)"),
    }
    println!(
        "info depth {} seldepth {} score cp {} nodes {} nps {} time {} hashfull {}",
        report.depth,
        report.seldepth,
        report.score,
        report.nodes,
        report.nodes_per_second(),
        report.elapsed.as_millis(),
        report.hashfull
    );

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(level.max(LevelFilter::Info), Config::default(), File::create(log_file)?)?;
    } else {
        TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?;
    }

    Ok(args)
}
