use clap::Parser;
use harmony_picker::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    harmony_picker::run(cli)
}
