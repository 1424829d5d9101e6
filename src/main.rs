//! # Embedprep
//!
//! Embedprep prepares pre-tokenized clinical corpora for word-embedding
//! model training: it counts token frequencies over the whole corpus,
//! samples corpus-wide singletons, and rewrites every document with the
//! sampled singletons replaced by an unknown-token marker, bounding the
//! vocabulary size before training.
//!
//! ## Getting started
//!
//! ```sh
//! embedprep 0.1.0
//! corpus preparation tool.
//!
//! USAGE:
//!     embedprep <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help       Prints this message or the help of the given subcommand(s)
//!     prepare    Prepare a tokenized corpus for embedding training
//! ```
//!
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use embedprep::error::Error;
use embedprep::pipelines::{Pipeline, PrepEmbedding};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Embedprep::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Embedprep::Prepare(p) => {
            let pipeline = PrepEmbedding::new(
                p.src,
                p.dst,
                p.n_jobs,
                p.ratio_unknown,
                !p.keep_case,
                !p.keep_digits,
                p.seed,
            );
            pipeline.run()?;
        }
    };
    Ok(())
}
