//! docrank CLI - outline extraction and persona-driven section ranking
//!
//! Input documents are fragment dumps: JSON files with the shape of
//! [`DocumentFragments`], as produced by any PDF text extraction front end.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docrank::{report, Docrank, DocumentFragments, ExtractOptions, FontProfile, JsonFormat};

#[derive(Parser)]
#[command(name = "docrank")]
#[command(version)]
#[command(about = "Extract document outlines and rank sections by persona relevance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the outline (title + headings) of one document
    Outline {
        /// Input fragment dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Rank sections across a directory of documents for a persona
    Analyze {
        /// Directory of fragment dumps (*.json)
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Persona description (e.g. "PhD Researcher in Computational Biology")
        #[arg(long)]
        persona: String,

        /// Job to be done (e.g. "Prepare a literature review")
        #[arg(long)]
        job: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Maximum ranked sections in the output (0 = unlimited)
        #[arg(long, default_value = "10")]
        max_sections: usize,

        /// Maximum subsections per section (0 = unlimited)
        #[arg(long, default_value = "3")]
        max_subsections: usize,
    },

    /// Show document information
    Info {
        /// Input fragment dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Outline {
            input,
            output,
            compact,
        } => cmd_outline(&input, output.as_deref(), compact),
        Commands::Analyze {
            input,
            persona,
            job,
            output,
            compact,
            max_sections,
            max_subsections,
        } => cmd_analyze(
            &input,
            &persona,
            &job,
            output.as_deref(),
            compact,
            max_sections,
            max_subsections,
        ),
        Commands::Info { input } => cmd_info(&input),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_outline(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let outline = Docrank::new().outline(&doc);

    let json = report::to_json(&outline, json_format(compact))?;
    write_output(output, &json)?;

    if output.is_some() {
        eprintln!(
            "{} {} ({} headings)",
            "Extracted".green().bold(),
            doc.document_id,
            outline.headings.len()
        );
    }
    Ok(())
}

fn cmd_analyze(
    input: &Path,
    persona: &str,
    job: &str,
    output: Option<&Path>,
    compact: bool,
    max_sections: usize,
    max_subsections: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let paths = fragment_dump_paths(input)?;
    if paths.is_empty() {
        return Err(format!("no fragment dumps (*.json) found in {}", input.display()).into());
    }

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    // Per-file failures are reported and skipped; the batch continues.
    let mut docs = Vec::with_capacity(paths.len());
    for path in &paths {
        pb.set_message(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        match load_document(path) {
            Ok(doc) => docs.push(doc),
            Err(e) => {
                log::warn!("skipping {}: {}", path.display(), e);
                pb.println(format!(
                    "{} {}: {}",
                    "Skipped".yellow().bold(),
                    path.display(),
                    e
                ));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if docs.is_empty() {
        return Err("every input document failed to load".into());
    }

    let analysis = Docrank::new()
        .with_max_sections(max_sections)
        .with_max_subsections(max_subsections)
        .analyze(&docs, persona, job);

    let json = report::to_json(&analysis, json_format(compact))?;
    write_output(output, &json)?;

    eprintln!(
        "{} {} document(s), {} ranked section(s)",
        "Analyzed".green().bold(),
        analysis.metadata.total_documents,
        analysis.extracted_sections.len()
    );
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let outline = Docrank::new().outline(&doc);
    let profile = FontProfile::from_fragments(
        &doc.fragments,
        ExtractOptions::default().style.default_body_size,
    );

    let title = if outline.title.is_empty() {
        "(none)"
    } else {
        outline.title.as_str()
    };

    println!("{}", "Document Information".cyan().bold());
    println!("  ID:         {}", doc.document_id);
    println!("  Title:      {}", title);
    println!("  Pages:      {}", doc.page_count());
    println!("  Fragments:  {}", doc.len());
    println!("  Headings:   {}", outline.headings.len());
    println!("  Body size:  {:.1}pt", profile.body_size);
    Ok(())
}

/// Load one fragment dump.
fn load_document(path: &Path) -> Result<DocumentFragments, Box<dyn std::error::Error>> {
    let data = fs::read_to_string(path)?;
    let doc: DocumentFragments = serde_json::from_str(&data)?;
    Ok(doc)
}

/// All *.json files in a directory, sorted for deterministic batch order.
fn fragment_dump_paths(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")))
        .collect();
    paths.sort();
    Ok(paths)
}

fn write_output(output: Option<&Path>, json: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, json)?;
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dump(dir: &Path, name: &str, json: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(json.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_document_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dump(
            dir.path(),
            "doc.json",
            r#"{
                "document_id": "doc.pdf",
                "fragments": [
                    {"text": "Title", "font_size": 20.0, "page_number": 1, "position": 0}
                ]
            }"#,
        );

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.document_id, "doc.pdf");
        assert_eq!(doc.len(), 1);
        assert!(!doc.fragments[0].is_bold);
    }

    #[test]
    fn test_load_document_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dump(dir.path(), "bad.json", "not json at all");
        assert!(load_document(&path).is_err());
    }

    #[test]
    fn test_fragment_dump_paths_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        write_dump(dir.path(), "b.json", "{}");
        write_dump(dir.path(), "a.json", "{}");
        write_dump(dir.path(), "notes.txt", "ignored");

        let paths = fragment_dump_paths(dir.path()).unwrap();
        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }
}
