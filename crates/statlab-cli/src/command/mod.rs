use clap::Parser;

mod report;

/// Prints descriptive statistics for the built-in sample.
///
/// The dataset is fixed; there are no behavioral flags.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {}

pub fn run() -> anyhow::Result<()> {
    let _args = CommandArgs::parse();
    report::run()
}
