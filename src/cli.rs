//! Minimal CLI: infer → (schema | file)
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::config::Config;
use crate::descriptor::FileDescriptorBuilder;
use crate::error::Error;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer a class schema from sample JSON and print it (or its file descriptor) as JSON
#[derive(Parser, Debug)]
#[command(name = "json2class", version)]
pub struct CommandLineInterface {
    /// more logging on stderr (-v info, -vv debug, -vvv trace); RUST_LOG wins
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// infer and print the class tree
    Schema(SchemaOut),
    /// infer and print the file descriptor (package, imports, comment, classes)
    File(FileOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select a subnode in each document (e.g. /data/user)
    #[arg(long)]
    json_pointer: Option<String>,

    /// root class name; defaults to the input file stem, first letter upper-cased
    #[arg(long)]
    class_name: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns.
    /// Each input is converted on its own.
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct SchemaOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct FileOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// JSON config file (package_name, file_comment, timestamp_format)
    #[arg(long)]
    config: Option<PathBuf>,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

/// One parsed input document, ready for inference.
#[derive(Debug)]
struct Source {
    path: PathBuf,
    class_name: String,
    value: Value,
}

#[derive(Serialize)]
struct Converted<T> {
    source: String,
    result: T,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load_sources(&self) -> Result<Vec<Source>> {
        let source_paths = resolve_file_path_patterns(&self.input)
            .context("failed to resolve input file paths")?;
        source_paths
            .into_iter()
            .map(|path| self.load_source(path))
            .collect()
    }

    fn load_source(&self, path: PathBuf) -> Result<Source> {
        let source_path_str = path.to_string_lossy().to_string();
        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read source file ({source_path_str})"))?;
        let mut value = serde_json::from_str::<Value>(&source)
            .with_context(|| format!("failed to parse JSON source file ({source_path_str})"))?;

        if let Some(pointer) = self.json_pointer.as_deref() {
            value = select_pointer(value, pointer)
                .with_context(|| format!("in source file ({source_path_str})"))?;
        }

        let class_name = match self.class_name.as_ref() {
            Some(name) => name.clone(),
            None => class_name_for(&path),
        };
        Ok(Source { path, class_name, value })
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Schema(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(())
                }

                let sources = target.input_settings.load_sources()?;
                let output = convert_all(sources, |source| {
                    Ok(crate::inference::infer(&source.class_name, &source.value)?.root)
                })?;
                write_output(target.out.as_deref(), &output)
            }
            Command::File(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(())
                }

                let config = match target.config.as_ref() {
                    Some(path) => Config::load(path)
                        .with_context(|| format!("failed to load config ({})", path.display()))?,
                    None => Config::default(),
                };
                let builder = FileDescriptorBuilder::new(config);

                let sources = target.input_settings.load_sources()?;
                let output = convert_all(sources, |source| {
                    let inference = crate::inference::infer(&source.class_name, &source.value)?;
                    Ok(builder.build(inference)?)
                })?;
                write_output(target.out.as_deref(), &output)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// Convert every source independently (in parallel) and keep input order.
/// A single input yields its result directly; several yield a
/// `[{source, result}]` array.
fn convert_all<T, F>(sources: Vec<Source>, convert: F) -> Result<Value>
where
    T: Serialize + Send,
    F: Fn(&Source) -> Result<T> + Sync,
{
    let mut results = sources
        .into_par_iter()
        .map(|source| {
            let source_path_str = source.path.to_string_lossy().to_string();
            let result = convert(&source)
                .with_context(|| format!("failed to convert ({source_path_str})"))?;
            info!(source = %source_path_str, class = %source.class_name, "converted");
            Ok(Converted { source: source_path_str, result })
        })
        .collect::<Result<Vec<_>>>()?;

    let value = if results.len() == 1 {
        serde_json::to_value(results.remove(0).result)?
    } else {
        serde_json::to_value(results)?
    };
    Ok(value)
}

fn write_output(out: Option<&Path>, value: &Value) -> Result<()> {
    let src = serde_json::to_string_pretty(value)?;
    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(out, &src)
            .with_context(|| format!("failed to write {}", out.display()))?;
    } else {
        println!("{src}");
    }
    Ok(())
}

fn select_pointer(mut value: Value, pointer: &str) -> Result<Value, Error> {
    value
        .pointer_mut(pointer)
        .map(Value::take)
        .ok_or_else(|| Error::PointerNotFound { pointer: pointer.to_string() })
}

fn class_name_for(path: &Path) -> String {
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    if stem.is_empty() {
        "Root".to_string()
    } else {
        crate::naming::upper_first(&stem)
    }
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>, Error>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                let path = entry.map_err(|e| Error::Io(e.into()))?;
                matched_any = true;
                out.push(path);
            }
            if !matched_any {
                return Err(Error::NoMatches { pattern: pattern.to_string() });
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
