//! Campus site engine CLI.

use anyhow::Result;
use campus_cli::cli::{Cli, Command};
use campus_cli::commands::{
    clock_for, load_config, run_cost, run_countdown, run_simulate, run_slides, run_validate,
};
use campus_cli::logging::init_logging;
use campus_cli::summary::{
    print_cost, print_countdown, print_simulation, print_slides, print_validation,
};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<i32> {
    let config = load_config(cli.config.as_deref())?;
    match &cli.command {
        Command::Validate(args) => {
            let report = run_validate(&config, args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report.result)?);
            } else {
                print_validation(&report);
            }
            Ok(if report.result.pass { 0 } else { 1 })
        }
        Command::Cost(args) => {
            print_cost(&run_cost(&config, args));
            Ok(0)
        }
        Command::Countdown(args) => {
            let clock = clock_for(args.now);
            print_countdown(&run_countdown(&config, args, clock.as_ref()));
            Ok(0)
        }
        Command::Slides => {
            print_slides(&run_slides(&config));
            Ok(0)
        }
        Command::Simulate(args) => {
            let clock = clock_for(args.now);
            let report = run_simulate(&config, args, clock.as_ref())?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_simulation(&report);
            }
            Ok(0)
        }
    }
}
