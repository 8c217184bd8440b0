//! Fixture runner.
//!
//! For every `<case>.json` in the fixtures directory:
//! - `<case>.error` present → conversion must fail and the message must match
//!   the regex in that file;
//! - otherwise the inferred tree must equal `<case>.expected.json`.
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use json2class::ClassDescription;
use once_cell::sync::Lazy;
use regex::Regex;

static CASE_FILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<case>[^.]+)\.json$").expect("static pattern"));

/// run json2class fixtures
#[derive(Parser, Debug)]
struct Args {
    /// fixtures directory
    #[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures"))]
    dir: PathBuf,

    /// only run cases whose name matches this regex
    #[arg(long)]
    filter: Option<Regex>,

    /// root class name passed to inference
    #[arg(long, default_value = "Root")]
    class_name: String,
}

enum Outcome {
    Pass,
    Fail(String),
}

fn main() {
    let args = Args::parse();

    let cases = match collect_cases(&args.dir, args.filter.as_ref()) {
        Ok(xs) => xs,
        Err(error) => {
            eprintln!("{} failed to list {}: {error}", "error:".red().bold(), args.dir.display());
            std::process::exit(2);
        }
    };

    let mut failed = 0usize;
    for case in &cases {
        match run_case(&args.dir, case, &args.class_name) {
            Outcome::Pass => eprintln!("{} {case}", "ok  ".green()),
            Outcome::Fail(why) => {
                failed += 1;
                eprintln!("{} {case}\n{why}", "FAIL".red().bold());
            }
        }
    }

    eprintln!("—— {} cases, {} failed ——", cases.len(), failed);
    if failed > 0 {
        std::process::exit(1);
    }
}

fn collect_cases(dir: &Path, filter: Option<&Regex>) -> std::io::Result<Vec<String>> {
    let mut cases = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let file_name = entry?.file_name().to_string_lossy().to_string();
        let Some(caps) = CASE_FILE.captures(&file_name) else { continue };
        let case = caps["case"].to_string();
        if filter.is_none_or(|rx| rx.is_match(&case)) {
            cases.push(case);
        }
    }
    cases.sort();
    Ok(cases)
}

fn run_case(dir: &Path, case: &str, class_name: &str) -> Outcome {
    let input = dir.join(format!("{case}.json"));
    let value = match std::fs::read_to_string(&input)
        .map_err(|e| e.to_string())
        .and_then(|src| serde_json::from_str::<serde_json::Value>(&src).map_err(|e| e.to_string()))
    {
        Ok(v) => v,
        Err(error) => return Outcome::Fail(format!("cannot load input: {error}")),
    };
    let result = json2class::infer(class_name, &value);

    let error_file = dir.join(format!("{case}.error"));
    if error_file.exists() {
        let pattern = match std::fs::read_to_string(&error_file) {
            Ok(s) => s.trim().to_string(),
            Err(error) => return Outcome::Fail(format!("cannot read {}: {error}", error_file.display())),
        };
        let rx = match Regex::new(&pattern) {
            Ok(rx) => rx,
            Err(error) => return Outcome::Fail(format!("bad error pattern: {error}")),
        };
        return match result {
            Ok(_) => Outcome::Fail(format!("expected failure matching /{pattern}/, got success")),
            Err(error) if rx.is_match(&error.to_string()) => Outcome::Pass,
            Err(error) => Outcome::Fail(format!("error `{error}` does not match /{pattern}/")),
        };
    }

    let expected_file = dir.join(format!("{case}.expected.json"));
    let expected = match load_expected(&expected_file) {
        Ok(x) => x,
        Err(error) => return Outcome::Fail(error),
    };
    match result {
        Err(error) => Outcome::Fail(format!("unexpected error: {error}")),
        Ok(inference) if inference.root == expected => Outcome::Pass,
        Ok(inference) => Outcome::Fail(format!(
            "expected:\n{}\nactual:\n{}",
            pretty(&expected),
            pretty(&inference.root),
        )),
    }
}

/// Deserialize with JSON-path context in error messages.
fn load_expected(path: &Path) -> Result<ClassDescription, String> {
    let src = std::fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let de = &mut serde_json::Deserializer::from_str(&src);
    serde_path_to_error::deserialize::<_, ClassDescription>(de).map_err(|err| {
        let at = err.path().to_string();
        format!("{} at JSON path {at} → {}", path.display(), err.into_inner())
    })
}

fn pretty(class: &ClassDescription) -> String {
    serde_json::to_string_pretty(class).unwrap_or_else(|e| format!("<unserializable: {e}>"))
}
