use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use walkdir::WalkDir;

use resume_parser::reader::is_supported;
use resume_parser::{parse_file, EducationLevel, ParseOptions, ParsedResume};

#[derive(Parser)]
#[command(name = "resume-parser", about = "Extract contact details, skills and education from resumes")]
struct Cli {
    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a single PDF, DOCX or text resume
    Parse {
        file: Option<PathBuf>,
        /// Comma-separated skill search terms, e.g. "python,data"
        #[arg(short, long)]
        skills: Option<String>,
        /// Education level: any, high-school, bachelors, masters, phd, professional
        #[arg(short, long)]
        education: Option<EducationLevel>,
        /// Print the result as JSON instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Parse every supported resume under a directory
    Batch {
        #[arg(short, long)]
        dir: PathBuf,
        #[arg(short, long, default_value = "resume_results.json")]
        out: PathBuf,
        #[arg(short, long)]
        skills: Option<String>,
        #[arg(short, long)]
        education: Option<EducationLevel>,
    },
}

#[derive(Serialize)]
struct BatchEntry {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<ParsedResume>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("resume_parser={level}"))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn write_heading<W: WriteColor>(out: &mut W, title: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    writeln!(out, "== {} ==", title)?;
    out.reset()
}

fn write_report<W: WriteColor>(out: &mut W, parsed: &ParsedResume) -> io::Result<()> {
    write_heading(out, "Phone Numbers")?;
    for number in &parsed.phone_numbers {
        writeln!(out, "{}", number)?;
    }
    writeln!(out)?;

    write_heading(out, "Emails")?;
    for email in &parsed.emails {
        writeln!(out, "{}", email)?;
    }
    writeln!(out)?;

    write_heading(out, "Skills")?;
    for skill in &parsed.skills {
        writeln!(out, "{}", skill)?;
    }
    writeln!(out)?;

    write_heading(out, "Education")?;
    for edu in &parsed.education {
        writeln!(out, "{}", edu)?;
    }
    if parsed.education.is_empty() {
        writeln!(out)?;
    }

    write_heading(out, "Summary")?;
    write!(out, "{}", parsed.summary)?;
    Ok(())
}

fn parse_one(file: Option<PathBuf>, options: &ParseOptions, json: bool) -> Result<()> {
    // an absent path surfaces as ParseError::MissingInput
    let path = file.unwrap_or_default();
    let parsed = parse_file(&path, options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        write_report(&mut stdout, &parsed)?;
    }
    Ok(())
}

fn collect_resumes(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_supported(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Parses every resume under `dir` and writes the results to `out`.
/// Returns (parsed, failed) counts; a failing file does not stop the batch.
fn batch_parse(dir: &Path, out: &Path, options: &ParseOptions) -> Result<(usize, usize)> {
    let files = collect_resumes(dir);
    info!(dir = %dir.display(), files = files.len(), "batch parse");

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {wide_bar} {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );

    let entries: Vec<BatchEntry> = files
        .par_iter()
        .map(|p| {
            let entry = match parse_file(p, options) {
                Ok(parsed) => BatchEntry {
                    path: p.to_string_lossy().to_string(),
                    result: Some(parsed),
                    error: None,
                },
                Err(e) => {
                    warn!(path = %p.display(), error = %e, "failed to parse resume");
                    BatchEntry {
                        path: p.to_string_lossy().to_string(),
                        result: None,
                        error: Some(e.to_string()),
                    }
                }
            };
            pb.inc(1);
            entry
        })
        .collect();

    pb.finish_with_message("parsing resumes");

    let failed = entries.iter().filter(|e| e.error.is_some()).count();
    let fout = File::create(out)?;
    serde_json::to_writer_pretty(fout, &entries)?;
    println!("Wrote {} results to {}", entries.len(), out.display());
    Ok((entries.len() - failed, failed))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Parse {
            file,
            skills,
            education,
            json,
        } => {
            let options = ParseOptions::resolve(skills, education)?;
            parse_one(file, &options, json)?
        }
        Commands::Batch {
            dir,
            out,
            skills,
            education,
        } => {
            let options = ParseOptions::resolve(skills, education)?;
            let (ok, failed) = batch_parse(&dir, &out, &options)?;
            if failed > 0 {
                eprintln!("{} of {} files could not be parsed", failed, ok + failed);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_parser::parse_text;
    use tempfile::TempDir;

    const RESUME: &str = "Sam Lee\nsam@lee.dev\n555 010 9999 1\n\nEXPERIENCE\nTaught maths\n";

    #[test]
    fn test_write_report_sections() -> Result<()> {
        let parsed = parse_text(RESUME, &ParseOptions::default());
        let mut buf = termcolor::Buffer::no_color();
        write_report(&mut buf, &parsed)?;
        let out = String::from_utf8(buf.into_inner())?;

        assert!(out.contains("== Emails ==\nsam@lee.dev\n"));
        assert!(out.contains("== Skills ==\nmaths\n"));
        assert!(out.contains("== Summary ==\nRESUME STATISTICS\n"));
        assert!(out.contains(" EXPERIENCE\nTaught maths\n"));
        Ok(())
    }

    #[test]
    fn test_write_report_blank_line_before_summary_without_education() -> Result<()> {
        let parsed = parse_text("sam@lee.dev\n", &ParseOptions::default());
        assert!(parsed.education.is_empty());
        let mut buf = termcolor::Buffer::no_color();
        write_report(&mut buf, &parsed)?;
        let out = String::from_utf8(buf.into_inner())?;

        assert!(out.contains("== Education ==\n\n== Summary ==\n"));
        Ok(())
    }

    // Single page that draws with /F1 but declares no fonts.
    fn pdf_with_undeclared_font() -> Vec<u8> {
        let content = "BT /F1 12 Tf 72 720 Td (Sam Lee) Tj ET";
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << >> /Contents 4 0 R >>"
                .to_string(),
            format!("<< /Length {} >>\nstream\n{}\nendstream", content.len(), content),
        ];
        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
        }
        let xref_at = pdf.len();
        let mut tail = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for off in offsets {
            tail.push_str(&format!("{:010} 00000 n \n", off));
        }
        tail.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_at
        ));
        pdf.extend_from_slice(tail.as_bytes());
        pdf
    }

    #[test]
    fn test_batch_parse_survives_malformed_pdf() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("good.txt"), RESUME)?;
        std::fs::write(dir.path().join("bad.pdf"), pdf_with_undeclared_font())?;
        let out = dir.path().join("results.json");

        let (ok, failed) = batch_parse(dir.path(), &out, &ParseOptions::default())?;
        assert_eq!((ok, failed), (1, 1));

        let written: serde_json::Value = serde_json::from_reader(File::open(&out)?)?;
        let entries = written.as_array().expect("array of entries");
        assert!(entries[0]["path"].as_str().unwrap().ends_with("bad.pdf"));
        assert!(entries[0]["error"].as_str().unwrap().starts_with("PDF extraction failed"));
        assert_eq!(entries[1]["result"]["emails"][0], "sam@lee.dev");
        Ok(())
    }

    #[test]
    fn test_collect_resumes_filters_and_sorts() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("b.txt"), "b")?;
        std::fs::write(dir.path().join("a.docx"), "a")?;
        std::fs::write(dir.path().join("notes.odt"), "x")?;
        std::fs::create_dir(dir.path().join("nested"))?;
        std::fs::write(dir.path().join("nested").join("c.pdf"), "c")?;

        let files = collect_resumes(dir.path());
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.docx", "b.txt", "nested/c.pdf"]);
        Ok(())
    }

    #[test]
    fn test_batch_parse_keeps_going_after_failure() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("good.txt"), RESUME)?;
        std::fs::write(dir.path().join("broken.docx"), "not a zip")?;
        let out = dir.path().join("out").with_extension("json");

        let (ok, failed) = batch_parse(dir.path(), &out, &ParseOptions::default())?;
        assert_eq!((ok, failed), (1, 1));

        let written: serde_json::Value = serde_json::from_reader(File::open(&out)?)?;
        let entries = written.as_array().expect("array of entries");
        assert_eq!(entries.len(), 2);
        assert!(entries[0]["error"].as_str().unwrap().contains("DOCX"));
        assert_eq!(entries[1]["result"]["emails"][0], "sam@lee.dev");
        Ok(())
    }

    #[test]
    fn test_cli_parses_education_level() {
        let cli = Cli::try_parse_from(["resume-parser", "parse", "cv.pdf", "--education", "Master's"])
            .expect("valid arguments");
        match cli.command {
            Commands::Parse { education, file, .. } => {
                assert_eq!(education, Some(EducationLevel::Masters));
                assert_eq!(file, Some(PathBuf::from("cv.pdf")));
            }
            _ => panic!("expected parse subcommand"),
        }
    }

    #[test]
    fn test_parse_one_without_file_is_missing_input() {
        let err = parse_one(None, &ParseOptions::default(), true).unwrap_err();
        assert_eq!(err.to_string(), "Please select a file first");
    }
}
