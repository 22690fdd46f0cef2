use clap::Parser;
use std::process::ExitCode;

use gootrago::cli::commands::{csv, translate};
use gootrago::cli::{Args, Command};
use gootrago::output::{self, OutputConfig};
use gootrago::translation::print_languages;
use gootrago::ui::Style;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        verbose: args.verbose,
        ..OutputConfig::default()
    });
    output::init_tracing();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", Style::error("Error:"));
            let code = gootrago::exit::exit_code(&err);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Csv {
            translate,
            csv: csv_args,
        }) => {
            let options = translate.resolve_options()?;
            csv::run_csv(options, csv_args.resolve_options(), args.config).await?;
        }
        None => {
            let options = args.translate.resolve_options()?;
            translate::run_translate(options, args.config).await?;
        }
    }

    Ok(())
}
