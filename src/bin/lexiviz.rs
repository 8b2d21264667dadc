//! lexiviz: command-line front end for the scoring core.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use lexiviz::{
    Bm25IdfVariant, Bm25Params, LexResult, NormalizeOptions, ScoringConfig, ScoringEngine,
    VocabularyScope,
};

#[derive(Parser)]
#[command(name = "lexiviz", version, about = "Tokenize text and score documents with BoW, TF-IDF and BM25")]
struct Cli {
    /// TOML scoring configuration.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Inputs {
    /// Query text.
    #[arg(short, long, default_value = "")]
    query: String,

    /// Document text (repeatable).
    #[arg(short, long = "doc")]
    docs: Vec<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Tokenize, lemmatize and filter stop words.
    Tokenize {
        text: String,
        #[arg(long)]
        no_lemmatize: bool,
        #[arg(long)]
        keep_stop_words: bool,
    },
    /// Print the vocabulary for a query and documents.
    Vocab {
        #[command(flatten)]
        inputs: Inputs,
        /// Restrict to query terms.
        #[arg(long)]
        query_only: bool,
    },
    /// Print term counts, document frequencies and lengths.
    Stats {
        #[command(flatten)]
        inputs: Inputs,
        #[arg(long)]
        query_only: bool,
    },
    /// Bag-of-words dot product and cosine similarity.
    Bow {
        #[command(flatten)]
        inputs: Inputs,
    },
    /// TF-IDF dot product and cosine similarity.
    Tfidf {
        #[command(flatten)]
        inputs: Inputs,
    },
    /// BM25 ranking.
    Bm25 {
        #[command(flatten)]
        inputs: Inputs,
        /// Term-frequency saturation.
        #[arg(long)]
        k1: Option<String>,
        /// Length-normalization strength.
        #[arg(long)]
        b: Option<String>,
        /// Use the Robertson IDF, which can go negative.
        #[arg(long)]
        robertson: bool,
    },
}

fn scope(query_only: bool) -> VocabularyScope {
    if query_only {
        VocabularyScope::QueryOnly
    } else {
        VocabularyScope::Union
    }
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T)) -> LexResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text(value);
    }
    Ok(())
}

fn run(cli: Cli) -> LexResult<()> {
    let config = match &cli.config {
        Some(path) => ScoringConfig::load(path)?,
        None => ScoringConfig::default(),
    };
    let engine = ScoringEngine::new();
    let json = cli.json;

    match cli.command {
        Command::Tokenize {
            text,
            no_lemmatize,
            keep_stop_words,
        } => {
            let options = NormalizeOptions {
                lemmatize: config.lemmatize && !no_lemmatize,
                remove_stop_words: config.remove_stop_words && !keep_stop_words,
            };
            let report = engine.normalize(&text, options);
            emit(json, &report, |r| {
                for token in &r.tokens {
                    let mark = if token.is_removed() { " (removed)" } else { "" };
                    println!("{}{}", token.text, mark);
                }
                println!("vocabulary: {}", r.vocabulary.join(", "));
            })?;
        }
        Command::Vocab { inputs, query_only } => {
            let vocabulary = engine
                .vocabulary(&inputs.query, &inputs.docs, scope(query_only))
                .to_vec();
            emit(json, &vocabulary, |v| println!("{}", v.join(", ")))?;
        }
        Command::Stats { inputs, query_only } => {
            let summary = engine
                .frequency_table(&inputs.query, &inputs.docs, scope(query_only))
                .summary();
            emit(json, &summary, |s| {
                for (i, term) in s.vocabulary.iter().enumerate() {
                    let counts: Vec<String> = s.tf.iter().map(|d| d[i].to_string()).collect();
                    println!("{term:<16} df={} tf=[{}]", s.df[i], counts.join(", "));
                }
                println!("lengths={:?} avg={:.3}", s.doc_lengths, s.avg_doc_length);
            })?;
        }
        Command::Bow { inputs } => {
            let report = engine.bag_of_words(&inputs.query, &inputs.docs);
            emit(json, &report, |r| {
                for i in r.ranking() {
                    let d = &r.documents[i];
                    println!("doc {i}: dot={:.4} cosine={:.4}", d.dot, d.cosine);
                }
            })?;
        }
        Command::Tfidf { inputs } => {
            let report = engine.tfidf(&inputs.query, &inputs.docs);
            emit(json, &report, |r| {
                for i in r.ranking() {
                    let d = &r.documents[i];
                    println!("doc {i}: dot={:.4} cosine={:.4}", d.dot, d.cosine);
                }
            })?;
        }
        Command::Bm25 {
            inputs,
            k1,
            b,
            robertson,
        } => {
            let params = match (k1, b) {
                (None, None) => config.bm25,
                (k1, b) => Bm25Params::parse(
                    k1.as_deref().unwrap_or(&config.bm25.k1.to_string()),
                    b.as_deref().unwrap_or(&config.bm25.b.to_string()),
                )?,
            };
            let variant = if robertson {
                Bm25IdfVariant::Robertson
            } else {
                config.idf_variant
            };
            let report = engine.bm25_with_variant(&inputs.query, &inputs.docs, params, variant)?;
            emit(json, &report, |r| {
                for i in r.ranking() {
                    let d = &r.documents[i];
                    println!(
                        "doc {i}: score={:.4} matched=[{}]",
                        d.total,
                        d.matched_terms.join(", ")
                    );
                }
            })?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
