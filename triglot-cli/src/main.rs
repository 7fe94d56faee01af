use std::fs;
use std::io::{prelude::*, stdin};
use std::path::PathBuf;

use clap::Parser;
use triglot_core::analyzer::trigram;
use triglot_core::{corpus, Model};
use triglot_types::ClassifierConfig;

#[derive(Parser, Debug)]
#[command(about = "Identifies the language of a document from trigram frequencies.")]
struct Args {
    /// The labeled training table, one `label<TAB>text` row per line
    #[arg(long)]
    table: PathBuf,

    /// The document to classify; stdin is read when omitted
    #[arg(long)]
    doc: Option<PathBuf>,

    /// Label to report when the best match is ambiguous
    #[arg(long, default_value = "English")]
    fallback: String,

    /// Margin under which the runner-up makes the result ambiguous
    #[arg(long, default_value = "1e-10")]
    epsilon: f64,

    /// Print model and document statistics to stderr
    #[arg(long)]
    stats: bool,

    /// Print the full per-language ranking to stderr
    #[arg(long)]
    scores: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    eprintln!("Loading training table...");
    let raw = fs::read(&args.table)?;
    let table = corpus::decode(&raw)?;
    let model = Model::from_table(table)?;

    if args.stats {
        eprintln!("model: {}", model.stats());
    }

    let document = match &args.doc {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            stdin().lock().read_to_string(&mut buf)?;
            buf
        }
    };

    if args.stats {
        eprintln!(
            "document: {} trigram windows",
            trigram::window_count(&document)
        );
    }

    if args.scores {
        let mut scores = model.score(&document);
        scores.sort_unstable_by(|a, b| {
            b.score.total_cmp(&a.score).then_with(|| a.lang.cmp(&b.lang))
        });
        for entry in &scores {
            if let Some(label) = model.label(entry.lang) {
                eprintln!("{}\t{:.6}", label, entry.score);
            }
        }
    }

    let config = ClassifierConfig {
        epsilon: args.epsilon,
        fallback: args.fallback,
    };
    println!("{}", model.classify(&document, &config)?);

    Ok(())
}
