use {
    clap::Parser,
    std::{io, sync::atomic::Ordering},
    triangular::common::DEBUG,
};

/// Print the sum of the integers from 1 to N, where N is read from stdin
#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    /// Trace the parsed input and computation to stderr
    #[arg(short, long)]
    debug: bool,
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    DEBUG.store(cli.debug, Ordering::Relaxed);
    triangular::run(&mut io::stdin().lock(), &mut io::stdout().lock())
}
