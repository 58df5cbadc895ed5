//! Fidgety CLI - build, inspect, and unpack .fidget widget files

use clap::Parser;
use fidgety::cli::{write_help, Args, SubCommand};
use fidgety::logging::init_logging;
use fidgety::{format_output, ContainerManager, OutputFormat, Report};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let Some(command) = args.command else {
        if let Err(e) = write_help(&mut std::io::stdout()) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    };

    let format = if args.json { OutputFormat::Json } else { OutputFormat::Human };
    let is_inspect = matches!(command, SubCommand::Inspect { .. });

    match run(command) {
        Ok(report) => {
            println!("{}", format_output(&report, &format));
            if !report.is_success() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            if is_inspect {
                eprintln!("Warning: {}", e);
            } else {
                eprintln!("Error: {}", e);
            }
            std::process::exit(1);
        }
    }
}

fn run(command: SubCommand) -> fidgety::Result<Report> {
    let manager = ContainerManager::new();

    match command {
        SubCommand::Inspect { file } => manager.inspect(&file).map(Report::Inspect),
        SubCommand::Extract { file, key, out } => {
            manager.extract(&file, &key, &out).map(Report::Extract)
        }
        SubCommand::Validate { file } => manager.validate(&file).map(Report::Validate),
        SubCommand::Scaffold { name } => manager.scaffold(&name).map(Report::Scaffold),
        SubCommand::Pack { folder, out } => manager.pack(&folder, &out).map(Report::Pack),
    }
}
