use clap::Parser;
use miette::Result;
use termscheme::cli::{Cli, Commands};
use termscheme::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Export(args) => termscheme::cli::export::run(args, &printer)?,
        Commands::List(args) => termscheme::cli::list::run(args, &printer)?,
        Commands::Data(args) => termscheme::cli::data::run(args, &printer)?,
        Commands::Completions(args) => termscheme::cli::completions::run(args)?,
    }

    Ok(())
}
