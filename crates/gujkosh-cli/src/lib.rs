// gujkosh-cli: shared utilities for the command-line tools.

use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::process;

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Extract a valued flag (`--flag VALUE`, `--flag=VALUE`, or `-f VALUE`)
/// from the argument list.
///
/// Returns `(value, remaining_args)`.
pub fn take_flag_value(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;
    let prefix = format!("{long}=");

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Extract a boolean flag from the argument list.
///
/// Returns `(present, remaining_args)`.
pub fn take_flag(args: &[String], long: &str, short: &str) -> (bool, Vec<String>) {
    let mut present = false;
    let mut remaining = Vec::new();
    for arg in args {
        if arg == long || arg == short {
            present = true;
        } else {
            remaining.push(arg.clone());
        }
    }
    (present, remaining)
}

/// Expand an input path: a regular file stands for itself, a directory for
/// its regular files (sorted by name).
pub fn gather_inputs(path: &Path) -> std::io::Result<Vec<PathBuf>> {
    let meta = std::fs::metadata(path)?;
    if meta.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Read input paths from a list file, one per line; blank lines and `#`
/// comments are skipped.
pub fn read_list_file(path: &Path) -> std::io::Result<Vec<PathBuf>> {
    let file = std::fs::File::open(path)?;
    let mut paths = Vec::new();
    for line in std::io::BufReader::new(file).lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        paths.push(PathBuf::from(line));
    }
    Ok(paths)
}

/// Resolve the INPUT... arguments of the lexicon tools into concrete files:
/// either a list file, a single file-or-directory, or several files.
pub fn resolve_inputs(positional: &[String], list: Option<&str>) -> Vec<PathBuf> {
    if let Some(listfile) = list {
        if !positional.is_empty() {
            fatal("a list file cannot be combined with INPUT arguments");
        }
        return read_list_file(Path::new(listfile))
            .unwrap_or_else(|e| fatal(&format!("{listfile}: {e}")));
    }
    match positional {
        [] => fatal("missing INPUT arguments"),
        [single] => gather_inputs(Path::new(single))
            .unwrap_or_else(|e| fatal(&format!("{single}: {e}"))),
        many => many.iter().map(PathBuf::from).collect(),
    }
}
