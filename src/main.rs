mod config;
mod rank;
mod tokenize;
mod trie;

use std::env;
use std::fs;
use std::process;

use anyhow::Context;
use clap::Parser;
use simple_log::LogConfigBuilder;
use simple_log::{error, info};

use config::PhraseConfig;
use trie::Trie;

#[derive(Parser, Debug)]
#[command(version, about = "Find the most frequently repeated phrases in a text file", long_about = None)]
struct PhraserArgs {
    /// Input text file
    #[arg(short, long)]
    input: String,
    /// Minimum phrase length in words
    #[arg(long, default_value_t = 3)]
    min_len: usize,
    /// Maximum phrase length in words
    #[arg(long, default_value_t = 10)]
    max_len: usize,
    /// Number of top phrases to print
    #[arg(long, default_value_t = 10)]
    top: usize,
    #[arg(long)]
    debug: bool,
}

fn setup_debug_logging() {
    let mut temp_dir = env::temp_dir();
    temp_dir.push("phraser.log");
    if let Some(log_path) = temp_dir.to_str() {
        let config = LogConfigBuilder::builder()
            .path(log_path)
            .build();
        if let Err(_e) = simple_log::new(config) {
            error!("fail to setup log {}", log_path);
        }
    }
}

fn top_phrase_lines(text: &str, config: &PhraseConfig) -> Vec<String> {
    let sentences = tokenize::sentences(text);
    info!("tokenized {} sentences", sentences.len());

    let mut trie = Trie::new();
    for words in sentences.iter() {
        trie.insert_sentence(words, config.min_len, config.max_len);
    }

    let phrases = trie.phrases(config.min_len);
    info!("extracted {} candidate phrases", phrases.len());

    let ranked = rank::top_phrases(&phrases, config.top);
    rank::format_ranked(&ranked)
}

fn main() -> anyhow::Result<()> {
    let args = PhraserArgs::parse();

    if args.debug {
        setup_debug_logging();
    }

    let config = PhraseConfig {
        min_len: args.min_len,
        max_len: args.max_len,
        top: args.top,
    };
    if let Err(e) = config.validate() {
        eprintln!("phraser: {}", e);
        process::exit(2);
    }

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read input file {}", args.input))?;

    for line in top_phrase_lines(&text, &config) {
        println!("{}", line);
    }
    Ok(())
}
