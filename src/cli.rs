//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "embedprep", about = "corpus preparation tool.")]
/// Holds every command that is callable by the `embedprep` command.
pub enum Embedprep {
    #[structopt(about = "Prepare a tokenized corpus for embedding training")]
    Prepare(Prepare),
}

#[derive(Debug, StructOpt)]
/// Prepare command and parameters.
pub struct Prepare {
    #[structopt(parse(from_os_str), help = "source corpus location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "pipeline result destination")]
    pub dst: PathBuf,
    #[structopt(
        help = "number of worker threads",
        long = "n-jobs",
        default_value = "1",
        short = "n"
    )]
    pub n_jobs: usize,
    #[structopt(
        help = "sampling ratio for unknown-token replacement",
        long = "ratio-unknown",
        default_value = "0.5"
    )]
    pub ratio_unknown: f64,
    #[structopt(long = "keep-case", help = "do not lowercase tokens")]
    pub keep_case: bool,
    #[structopt(long = "keep-digits", help = "do not fold digits to 0")]
    pub keep_digits: bool,
    #[structopt(long = "seed", help = "fixed seed for singleton sampling")]
    pub seed: Option<u64>,
}
