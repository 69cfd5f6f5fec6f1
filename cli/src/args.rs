// SPDX-License-Identifier: MPL-2.0

use std::path::{Path, PathBuf};

use clap::Parser;

/// Descrambles dumps of a 2532 EPROM whose address and data lines were wired to the CPU out of
/// order.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(name = "synthex")]
pub struct Args {
    /// Scramble a logical image into EPROM order instead of decoding a dump
    #[arg(short, long)]
    pub encode: bool,

    /// Don't print the raw and resulting dumps
    #[arg(short, long)]
    pub quiet: bool,

    /// The image to read
    pub input: PathBuf,

    /// Where to write the resulting image
    pub output: Option<PathBuf>,
}

/// The direction in which an image is pushed through the wiring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// From EPROM order to CPU order.
    Decode,
    /// From CPU order to EPROM order.
    Encode,
}

impl Mode {
    pub fn verb(self) -> &'static str {
        match self {
            Self::Decode => "decode",
            Self::Encode => "encode",
        }
    }

    pub fn progressive(self) -> &'static str {
        match self {
            Self::Decode => "Decoding",
            Self::Encode => "Encoding",
        }
    }

    /// Pushes `src` through the wiring in this direction.
    pub fn apply(self, src: &[u8]) -> Result<Vec<u8>, synthex::SizeError> {
        match self {
            Self::Decode => synthex::decode(src),
            Self::Encode => synthex::encode(src),
        }
    }
}

impl Args {
    pub fn mode(&self) -> Mode {
        if self.encode {
            Mode::Encode
        } else {
            Mode::Decode
        }
    }
}

/// The name this program was invoked as, taken from the path in `argv[0]`.
pub fn label(arg0: Option<&str>) -> &str {
    arg0.and_then(|it| Path::new(it).file_name())
        .and_then(|it| it.to_str())
        .unwrap_or("synthex")
}
