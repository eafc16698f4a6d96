use clap::Parser;
use miette::Result;
use pxsynth::cli::{Cli, Commands};
use pxsynth::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().quiet(cli.quiet);

    match cli.command {
        Commands::Build(args) => pxsynth::cli::build::run(args, &printer)?,
        Commands::Render(args) => pxsynth::cli::render::run(args, &printer)?,
        Commands::List(args) => pxsynth::cli::list::run(args, &printer)?,
        Commands::Verify(args) => pxsynth::cli::verify::run(args, &printer)?,
        Commands::Completions(args) => pxsynth::cli::completions::run(args)?,
    }

    Ok(())
}
