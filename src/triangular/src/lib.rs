pub mod common;
pub mod input;
pub mod sum;

use {
    common::debug_println,
    input::{Input, Source},
    std::io::{Read, Write},
    sum::{checked_sum_to_n, Triangular},
};

/// Reads `n` from `input` and writes its triangular number to `output` on a line of its own.
///
/// Unreadable or malformed input is never an error here; it silently becomes
/// [`input::DEFAULT_N`]. Only a failed write is reported.
pub fn run(input: &mut impl Read, output: &mut impl Write) -> anyhow::Result<()> {
    let Input { n, source } = input::read_n(input);
    match source {
        Source::Parsed => debug_println!("read n = {n}"),
        Source::Fallback(reason) => debug_println!("{reason}, using n = {n}"),
    }
    if checked_sum_to_n(n).is_none() {
        debug_println!("warning: n * (n + 1) overflows i64 for n = {n}, result wraps");
    }
    let result = Triangular::from(n);
    debug_println!("sum_to_n({n}) = {result}");
    writeln!(output, "{result}")?;
    output.flush()?;
    Ok(())
}
