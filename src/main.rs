/*
Copyright (c) 2026 The dimensions authors

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and
associated documentation files (the “Software”), to deal in the Software without restriction,
including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense,
and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do
so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial
portions of the Software.

THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS
OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY,
WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
*/

#![warn(clippy::pedantic)]

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process,
};

use clap::Parser;
use dimensions::{
    cli::Diagnostic,
    report::{self, Inputs, DEFAULT_LENGTH},
    shapes::Float,
    Error,
};

#[derive(Debug, Parser)]
#[command(name = "dimensions")]
#[command(version)]
#[command(about = "Prints the dimensions of a square and a triangle.", long_about = None)]
struct Args {
    /// Width of the square.
    #[arg(long, default_value_t = DEFAULT_LENGTH, allow_negative_numbers = true)]
    width: Float,
    /// Height of the square.
    #[arg(long, default_value_t = DEFAULT_LENGTH, allow_negative_numbers = true)]
    height: Float,
    /// Length of each side of the triangle.
    #[arg(long, default_value_t = DEFAULT_LENGTH, allow_negative_numbers = true)]
    side: Float,
    /// Where to put the log output
    #[arg(long, short)]
    log: Option<PathBuf>,
    #[arg(long, hide = true)]
    markdown_help: Option<PathBuf>,
}

impl Args {
    fn inputs(&self) -> Inputs {
        Inputs {
            width: self.width,
            height: self.height,
            side: self.side,
        }
    }
}

/// Runs the report against `out`. A failed output is always reported before a
/// failed log.
fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), Vec<Error>> {
    if let Some(path) = &args.markdown_help {
        fs::write(path, clap_markdown::help_markdown::<Args>()).map_err(|source| {
            vec![Error::File {
                path: path.clone(),
                source,
            }]
        })?;
    }

    let lines = report::lines(&args.inputs());

    let mut errors = Vec::new();
    let written = report::write(out, &lines);
    let succeeded = written.is_ok();
    errors.extend(written.err());

    if let Some(path) = &args.log {
        errors.extend(report::write_log(path, succeeded.then_some(&lines[..])).err());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn main() {
    let args = Args::parse();

    if let Err(errors) = run(&args, &mut io::stdout().lock()) {
        if let Some(diagnostic) = Diagnostic::from_errors(&errors) {
            let _ = write!(io::stderr(), "{diagnostic}");
        }

        process::exit(1);
    }
}
