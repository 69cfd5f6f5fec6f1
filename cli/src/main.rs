// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod args;
mod log;

use std::io::{self, Write as _};

use anyhow::Context as _;
use clap::Parser as _;

use args::Args;

fn main() -> anyhow::Result<()> {
    log::init();

    let args = Args::parse();
    let arg0 = std::env::args().next();
    tracing::info!("{} - 2532 EPROM descrambler", args::label(arg0.as_deref()));

    let stdout = io::stdout();
    run(&args, &mut stdout.lock())
}

/// Reads the input image, writes dumps to `out`, and writes the result to the output path if one
/// was given.
fn run(args: &Args, out: &mut impl io::Write) -> anyhow::Result<()> {
    tracing::info!("{} ... {}", args.mode().progressive(), args.input.display());

    let src = std::fs::read(&args.input)
        .with_context(|| format!("Failed to read EPROM image '{}'", args.input.display()))?;
    tracing::debug!("read {} bytes", src.len());

    let dst = process(args, &src, out)
        .with_context(|| format!("Failed to {} '{}'", args.mode().verb(), args.input.display()))?;

    if let Some(output) = &args.output {
        std::fs::write(output, &dst)
            .with_context(|| format!("Failed to write image '{}'", output.display()))?;
        tracing::info!("wrote {} bytes to {}", dst.len(), output.display());
    }

    Ok(())
}

/// Pushes `src` through the wiring, dumping it before and after to `out` unless asked to be quiet.
fn process(args: &Args, src: &[u8], out: &mut impl io::Write) -> anyhow::Result<Vec<u8>> {
    if !args.quiet {
        synthex_util::dump_hex(&mut *out, src).context("Failed to write dump")?;
        writeln!(out, "\n").context("Failed to write dump")?;
    }

    let dst = args.mode().apply(src)?;

    if !args.quiet {
        synthex_util::dump_hex(&mut *out, &dst).context("Failed to write dump")?;
    }
    out.flush().context("Failed to flush dump")?;

    Ok(dst)
}
