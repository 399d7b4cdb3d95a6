// gujkosh-tag: build a tag lexicon from word/category entry files.
//
// Each content line of the input holds a word and its grammatical-category
// abbreviation separated by spaces or tabs. Categories are expanded through
// the built-in abbreviation table and written as `word;category` rows
// sorted by word. The output file must carry the `.tag` extension.
//
// Usage:
//   gujkosh-tag [-v] INPUT [INPUT...] OUTPUT.tag
//   gujkosh-tag [-v] INPUT-DIR OUTPUT.tag
//   gujkosh-tag [-v] -l LIST-FILE OUTPUT.tag
//
// Options:
//   -l, --list FILE   File containing input paths, one per line
//   -v, --verbose     Report per-file progress on stderr
//   -h, --help        Print help

use std::io::{BufWriter, Write};
use std::path::PathBuf;

use gujkosh_lex::tags::{TagLexicon, check_tag_extension};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (list, args) = gujkosh_cli::take_flag_value(&args, "--list", "-l");
    let (verbose, mut args) = gujkosh_cli::take_flag(&args, "--verbose", "-v");

    if gujkosh_cli::wants_help(&args) {
        println!("gujkosh-tag: Build a tag lexicon from word/category entries.");
        println!();
        println!("Usage: gujkosh-tag [-v] INPUT [INPUT...] OUTPUT.tag");
        println!("       gujkosh-tag [-v] INPUT-DIR OUTPUT.tag");
        println!("       gujkosh-tag [-v] -l LIST-FILE OUTPUT.tag");
        println!();
        println!("Entry lines hold a word and its category abbreviation; categories");
        println!("are expanded and written as `word;category` rows sorted by word.");
        println!("The output file must have the .tag extension.");
        println!();
        println!("Options:");
        println!("  -l, --list FILE   File containing input paths, one per line");
        println!("  -v, --verbose     Report per-file progress on stderr");
        println!("  -h, --help        Print this help");
        return;
    }

    let Some(output) = args.pop() else {
        gujkosh_cli::fatal("missing OUTPUT argument");
    };
    let output = PathBuf::from(output);
    check_tag_extension(&output).unwrap_or_else(|e| gujkosh_cli::fatal(&e.to_string()));

    let inputs = gujkosh_cli::resolve_inputs(&args, list.as_deref());

    let mut lexicon = TagLexicon::new();
    for input in &inputs {
        if verbose {
            eprintln!("processing: {}", input.display());
        }
        match lexicon.ingest_file(input) {
            Ok(duplicates) => {
                for word in duplicates {
                    eprintln!("duplicate word: {word}");
                }
            }
            // A broken input file does not stop the batch.
            Err(e) => eprintln!("{e}"),
        }
    }

    let dst = std::fs::File::create(&output)
        .unwrap_or_else(|e| gujkosh_cli::fatal(&format!("{}: {e}", output.display())));
    let mut out = BufWriter::new(dst);
    lexicon
        .write_to(&mut out)
        .and_then(|()| out.flush())
        .unwrap_or_else(|e| gujkosh_cli::fatal(&format!("{}: {e}", output.display())));

    if verbose {
        eprintln!("{} words", lexicon.len());
    }
}
