use std::path::PathBuf;

use clap::Parser;
use page_rank::{
    corpus::Corpus,
    error::Result,
    pagerank::{
        iterate_pagerank, sample_pagerank, Distribution, DEFAULT_DAMPING, DEFAULT_SAMPLES,
    },
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing the HTML corpus
    corpus_dir: PathBuf,

    /// Damping factor for the random-surfer model
    #[arg(long, default_value_t = DEFAULT_DAMPING)]
    damping: f64,

    /// Number of samples for the Monte-Carlo estimate
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// Emit the results as JSON instead of the plain-text report
    #[arg(long, default_value = "false")]
    json: bool,
}

#[derive(Serialize, Debug)]
struct Report {
    damping: f64,
    samples: usize,
    sampled: Distribution,
    iterated: Distribution,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let corpus = Corpus::from_dir(&args.corpus_dir)?;
    log::info!(
        "ranking {} pages from {}",
        corpus.len(),
        args.corpus_dir.display()
    );

    let sampled = sample_pagerank(&corpus, args.damping, args.samples)?;
    let iterated = iterate_pagerank(&corpus, args.damping)?;

    if args.json {
        let report = Report {
            damping: args.damping,
            samples: args.samples,
            sampled,
            iterated,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("PageRank Results from Sampling (n = {})", args.samples);
        print_distribution(&sampled);
        println!("PageRank Results from Iteration");
        print_distribution(&iterated);
    }

    Ok(())
}

fn print_distribution(dist: &Distribution) {
    let mut pages: Vec<_> = dist.iter().collect();
    pages.sort_by(|a, b| a.0.cmp(b.0));

    for (page, rank) in pages {
        println!("  {page}: {rank:.4}");
    }
}
