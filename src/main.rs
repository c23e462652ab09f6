use clap::{Arg, ArgAction, Command};
use maze_route::{find_path, render, Error, Query, SearchConfig};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;

#[derive(Debug)]
struct Options {
    input: Option<String>,
    config: SearchConfig,
}

fn make_options_parser() -> Command {
    Command::new("maze-route")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finds the cheapest route through a weighted maze read from stdin")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Read the maze from FILE instead of stdin"),
        )
        .arg(
            Arg::new("exhaustive")
                .short('e')
                .long("exhaustive")
                .action(ArgAction::SetTrue)
                .help("Finalize every reachable cell before tracing the route"),
        )
}

impl Options {
    fn parse() -> Self {
        let matches = make_options_parser().get_matches();
        Options {
            input: matches.get_one::<String>("input").cloned(),
            config: SearchConfig {
                exhaustive: matches.get_flag("exhaustive"),
            },
        }
    }
}

fn run(options: &Options) -> Result<(), Error> {
    let query = match &options.input {
        Some(path) => Query::read(File::open(path)?)?,
        None => Query::read(io::stdin().lock())?,
    };
    log::info!(
        "maze {}x{}, start {:?}, finish {:?}",
        query.maze().height(),
        query.maze().width(),
        query.start(),
        query.finish()
    );

    let route = find_path(&query, options.config)?;
    log::info!(
        "cost {}, length {}, visited {}",
        route.metadata.cost,
        route.metadata.length,
        route.metadata.num_nodes_visited
    );

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render::write_route(&mut writer, &route.path)?;
    writer.flush()?;
    Ok(())
}

fn main() {
    let env = env_logger::Env::new()
        .filter("MAZE_ROUTE_LOG")
        .write_style("MAZE_ROUTE_LOG_STYLE");
    env_logger::init_from_env(env);

    let options = Options::parse();
    log::debug!("options: {:?}", options);

    if let Err(e) = run(&options) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
