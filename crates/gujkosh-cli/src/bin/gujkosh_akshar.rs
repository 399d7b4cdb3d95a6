// gujkosh-akshar: inspect the akshar segmentation of Gujarati words.
//
// Prints each word followed by its akshar units joined with `-` and the
// code-point offset at which each unit begins. Reads words from stdin
// (one per line) when no arguments are given.
//
// Usage:
//   gujkosh-akshar [WORD...]

use std::io::{self, BufRead, Write};

use gujkosh_core::akshar;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if gujkosh_cli::wants_help(&args) {
        println!("gujkosh-akshar: Show akshar segmentation of Gujarati words.");
        println!();
        println!("Usage: gujkosh-akshar [WORD...]");
        println!();
        println!("If WORD arguments are given, segments each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Output: the word, its units joined with `-`, and the code-point");
        println!("offsets at which the units begin.");
        return;
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let segment = |word: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let chars: Vec<char> = word.chars().collect();
        let starts = akshar::boundaries(&chars);
        let units = akshar::akshars(&chars);
        let offsets: Vec<String> = starts.iter().map(|s| s.to_string()).collect();
        let _ = writeln!(out, "{word} {} [{}]", units.join("-"), offsets.join(","));
    };

    if args.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            segment(word, &mut out);
        }
    } else {
        for word in &args {
            segment(word, &mut out);
        }
    }
}
