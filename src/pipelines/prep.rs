//! Corpus preparation pipeline for embedding training.
//!
//! Input is a tree of pre-tokenized documents (one sentence per line,
//! tokens space-separated). The pipeline runs in two parallel map phases
//! with a sequential reduce in between:
//!
//! 1. Per-document token counting over every discovered file.
//! 1. Merge into a global frequency table; sample digit-free singletons
//!    with probability `ratio_unknown`; persist the sample to the store.
//! 1. Per-chunk rewriting: identical normalization, sampled singletons
//!    replaced by [UNKNOWN_TOKEN](crate::processing::UNKNOWN_TOKEN),
//!    output written to the mirrored path under `dst/documents`.
//!
//! The store write is a full barrier: no rewrite worker starts before the
//! sampled set is durably on disk, and each worker loads it once per
//! chunk.
use std::collections::HashMap;
use std::path::PathBuf;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::error::Error;
use crate::io::singletons::{write_singletons, SINGLETONS_FILE};
use crate::io::ensure_dir;
use crate::normalize::Normalizer;
use crate::pipelines::pipeline::Pipeline;
use crate::processing::{
    chunk_list, count_tokens, gather_documents, merge_counts, rewrite_chunk, sample_singletons,
};

pub struct PrepEmbedding {
    src: PathBuf,
    dst: PathBuf,
    n_jobs: usize,
    ratio_unknown: f64,
    lowercase: bool,
    replace_digits: bool,
    seed: Option<u64>,
}

impl PrepEmbedding {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        n_jobs: usize,
        ratio_unknown: f64,
        lowercase: bool,
        replace_digits: bool,
        seed: Option<u64>,
    ) -> Self {
        Self {
            src,
            dst,
            n_jobs,
            ratio_unknown,
            lowercase,
            replace_digits,
            seed,
        }
    }

    fn check_config(&self) -> Result<(), Error> {
        if self.n_jobs < 1 {
            return Err(Error::Config(format!(
                "n_jobs must be at least 1 (got {})",
                self.n_jobs
            )));
        }
        if !(0.0..=1.0).contains(&self.ratio_unknown) {
            return Err(Error::Config(format!(
                "ratio_unknown must be within [0.0, 1.0] (got {})",
                self.ratio_unknown
            )));
        }
        Ok(())
    }
}

impl Pipeline<()> for PrepEmbedding {
    fn version() -> &'static str {
        "0.1.0"
    }

    fn run(&self) -> Result<(), Error> {
        self.check_config()?;

        let documents_dst = self.dst.join("documents");
        ensure_dir(&documents_dst)?;
        let singletons_path = self.dst.join(SINGLETONS_FILE);

        info!("gathering documents from {:?}", self.src);
        let documents = gather_documents(&self.src)?;
        info!("{} documents to process", documents.len());

        let normalizer = Normalizer::new(self.lowercase, self.replace_digits);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.n_jobs)
            .build()?;

        info!("fetching token count");
        let tables: Vec<HashMap<String, u64>> = pool.install(|| {
            documents
                .par_iter()
                .map(|doc| count_tokens(doc, &normalizer))
                .collect::<Result<_, Error>>()
        })?;

        info!("merging counts");
        let (global, token_nb) = merge_counts(tables);

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let sample = sample_singletons(&global, self.ratio_unknown, &mut rng);

        info!("* number of singletons: {}", sample.all.len());
        info!(
            "* number of singletons in the sample ({}): {}",
            self.ratio_unknown,
            sample.sampled.len()
        );
        info!("* total number of tokens: {}", token_nb);

        info!("dumping singleton list to disk");
        write_singletons(&singletons_path, &sample.sampled)?;

        info!("chunking file list");
        let chunks = chunk_list(&documents, self.n_jobs);

        info!("starting processing files");
        pool.install(|| {
            chunks.par_iter().try_for_each(|chunk| {
                rewrite_chunk(chunk, &singletons_path, &documents_dst, &normalizer)
            })
        })?;

        info!("done");
        Ok(())
    }
}
