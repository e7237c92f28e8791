use std::io::Read;
use std::{env, fs, process};

use anyhow::{Context, Result};
use notedown_engine::blocks_from_markdown;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <markdown-file>", args[0]);
        eprintln!("Pass '-' to read markdown from stdin");
        process::exit(1);
    }

    let markdown = if args[1] == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read markdown from stdin")?;
        buffer
    } else {
        fs::read_to_string(&args[1])
            .with_context(|| format!("Failed to read markdown file '{}'", args[1]))?
    };

    let blocks = blocks_from_markdown(&markdown)
        .context("The content uses a markdown construct that cannot be converted to blocks")?;

    println!("{}", serde_json::to_string_pretty(&blocks)?);
    Ok(())
}
