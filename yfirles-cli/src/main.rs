//! yfirles: spelling correction and grammar annotation from the command line

use clap::Parser;
use yfirles_cli::commands::CheckArgs;

#[derive(Parser)]
#[command(
    name = "yfirles",
    version,
    about = "Correct spelling and annotate grammar errors in Icelandic text"
)]
struct Cli {
    #[command(flatten)]
    args: CheckArgs,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.args.execute() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
