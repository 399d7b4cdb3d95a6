// gujkosh-expand: expand word-variant notation in dictionary source files.
//
// Each content line of the input is split into `;`-separated fields; the
// selected field is expanded from the compact variant notation
// base(+suffix,-suffix,...) and one `word;line` row is written per
// expanded word.
//
// Usage:
//   gujkosh-expand [-v] [-f FIELD] INPUT [INPUT...] OUTPUT
//   gujkosh-expand [-v] [-f FIELD] INPUT-DIR OUTPUT
//   gujkosh-expand [-v] [-f FIELD] -l LIST-FILE OUTPUT
//
// Options:
//   -f, --field N     Field number to expand (0-based, default: 0)
//   -l, --list FILE   File containing input paths, one per line
//   -v, --verbose     Report per-file line and record counts on stderr
//   -h, --help        Print help

use std::io::{BufWriter, Write};
use std::path::PathBuf;

use gujkosh_lex::record;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (field, args) = gujkosh_cli::take_flag_value(&args, "--field", "-f");
    let (list, args) = gujkosh_cli::take_flag_value(&args, "--list", "-l");
    let (verbose, mut args) = gujkosh_cli::take_flag(&args, "--verbose", "-v");

    if gujkosh_cli::wants_help(&args) {
        println!("gujkosh-expand: Expand word-variant notation in lexicon files.");
        println!();
        println!("Usage: gujkosh-expand [-v] [-f FIELD] INPUT [INPUT...] OUTPUT");
        println!("       gujkosh-expand [-v] [-f FIELD] INPUT-DIR OUTPUT");
        println!("       gujkosh-expand [-v] [-f FIELD] -l LIST-FILE OUTPUT");
        println!();
        println!("Each content line is split into `;`-separated fields; the selected");
        println!("field is expanded and one `word;line` row is written per word.");
        println!();
        println!("Options:");
        println!("  -f, --field N     Field number to expand (0-based, default: 0)");
        println!("  -l, --list FILE   File containing input paths, one per line");
        println!("  -v, --verbose     Report per-file counts on stderr");
        println!("  -h, --help        Print this help");
        return;
    }

    let field: usize = match field {
        Some(v) => v
            .parse()
            .unwrap_or_else(|_| gujkosh_cli::fatal("invalid number for --field")),
        None => 0,
    };

    let Some(output) = args.pop() else {
        gujkosh_cli::fatal("missing OUTPUT argument");
    };
    let output = PathBuf::from(output);
    let inputs = gujkosh_cli::resolve_inputs(&args, list.as_deref());

    let dst = std::fs::File::create(&output)
        .unwrap_or_else(|e| gujkosh_cli::fatal(&format!("{}: {e}", output.display())));
    let mut out = BufWriter::new(dst);

    for input in &inputs {
        if verbose {
            eprintln!("processing: {}", input.display());
        }
        match record::process_file(input, field, &mut out) {
            Ok(stats) => {
                if verbose {
                    eprintln!(
                        "{}: {} lines, {} records, {} skipped",
                        input.display(),
                        stats.lines,
                        stats.records,
                        stats.skipped
                    );
                }
            }
            // A broken input file does not stop the batch.
            Err(e) => eprintln!("{e}"),
        }
    }

    out.flush()
        .unwrap_or_else(|e| gujkosh_cli::fatal(&format!("{}: {e}", output.display())));
}
