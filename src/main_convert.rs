// Copyright (C) 2020-2026 Andy Kurnia.

use wordtiles::{error, lexicon};

pub fn main() -> error::Returns<()> {
    env_logger::init();
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() != 3 {
        println!(
            "args:
  convertlex dictionary.txt sdict.json
    reads one word per line, writes a json array of words."
        );
        return Ok(());
    }
    let words = lexicon::read_wordlist(&args[1])?;
    std::fs::write(&args[2], serde_json::to_string_pretty(&words)?)?;
    log::info!("converted {} to {}", args[1], args[2]);
    println!("{} words", words.len());
    Ok(())
}
