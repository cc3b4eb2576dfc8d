use std::env;
use std::path::Path;

use log::info;
use word_count::count::{count_words_brute_force, count_words_optimized};
use word_count::select::most_frequent;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = env::args().collect::<Vec<String>>();
    if args.len() > 2 {
        println!("Usage: cargo run -- <input file>");
        return Ok(());
    }
    let path = Path::new(args.get(1).map(String::as_str).unwrap_or("sample.txt"));
    info!("counting words in {}", path.display());

    let brute = count_words_brute_force(Some(path))?;
    println!("Brute-force word count: {}", brute);

    let optimized = count_words_optimized(Some(path))?;
    println!("Optimized word count: {}", optimized);

    let (word, count) = most_frequent(&optimized);
    match word {
        Some(word) => println!("Most frequent word: ({}, {})", word, count),
        None => println!("Most frequent word: (none, 0)"),
    }

    Ok(())
}
