//! `rollup` - run the bundled datasets through each pipeline

mod render;
mod samples;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use rollup_aggregate::{OfficeService, SectorService};
use rollup_exercises::{fibonacci_until, PersonService, StateFilter};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("rollup")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Grouped aggregation over the bundled sample datasets")
        .subcommand_required(true)
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        )
        .subcommand(Command::new("sectors").about("Salary totals per sector"))
        .subcommand(Command::new("companies").about("Employees and offices per company"))
        .subcommand(
            Command::new("states")
                .about("Distinct states of adults living in large cities")
                .arg(
                    Arg::new("min-age")
                        .long("min-age")
                        .default_value("18")
                        .value_parser(value_parser!(u32))
                        .help("Minimum age, inclusive"),
                )
                .arg(
                    Arg::new("min-population")
                        .long("min-population")
                        .default_value("100000")
                        .value_parser(value_parser!(u64))
                        .help("Minimum city population, inclusive"),
                ),
        )
        .subcommand(
            Command::new("fibonacci")
                .about("Fibonacci terms before a boundary term")
                .arg(
                    Arg::new("until")
                        .long("until")
                        .required(true)
                        .value_parser(value_parser!(u64))
                        .help("Boundary; must itself be a Fibonacci term"),
                ),
        )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let json = matches.get_flag("json");
    tracing::debug!(subcommand = ?matches.subcommand_name(), json, "running");

    match matches.subcommand() {
        Some(("sectors", _)) => {
            let summaries = SectorService::new()
                .compile(&samples::collaborators())
                .context("compiling sector summaries")?;
            render::sectors(&summaries, json)
        }
        Some(("companies", _)) => {
            let employees = samples::employees();
            let offices = samples::offices();
            let companies = OfficeService::new()
                .compile(Some(employees.as_slice()), Some(offices.as_slice()))
                .context("compiling companies")?;
            render::companies(companies.as_deref(), json)
        }
        Some(("states", args)) => {
            let mut filter = StateFilter::new();
            if let Some(min_age) = args.get_one::<u32>("min-age") {
                filter = filter.with_min_age(*min_age);
            }
            if let Some(min_population) = args.get_one::<u64>("min-population") {
                filter = filter.with_min_population(*min_population);
            }
            let people = samples::people();
            let states = PersonService::new().states(Some(people.as_slice()), &filter);
            render::states(&states, json)
        }
        Some(("fibonacci", args)) => {
            let boundary = *args
                .get_one::<u64>("until")
                .context("missing --until")?;
            let terms = fibonacci_until(boundary)?;
            render::terms(&terms, json)
        }
        Some((other, _)) => anyhow::bail!("unknown subcommand: {other}"),
        None => anyhow::bail!("no subcommand given"),
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let matches = cli().get_matches();
    let output = run(&matches)?;
    println!("{output}");
    Ok(())
}
