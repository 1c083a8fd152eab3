//! mdocx CLI - draft to DOCX export tool

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use mdocx::{
    load_draft, CleanupPipeline, Error, JsonFormat, MarkdownParser, Mdocx, SectionKind,
};

#[derive(Parser)]
#[command(name = "mdocx")]
#[command(version)]
#[command(about = "Export markdown-ish application drafts to DOCX", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a draft JSON file to a .docx document
    Export {
        /// Input draft JSON file
        #[arg(value_name = "DRAFT")]
        input: PathBuf,

        /// Output file (defaults to the input name with .docx)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Document title heading
        #[arg(long, default_value = "ERDF Application")]
        title: String,

        /// Drop the "1." numbering from section headings
        #[arg(long)]
        no_numbering: bool,
    },

    /// Convert a single markdown file to a standalone .docx
    Convert {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (defaults to the input name with .docx)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the cleaned preview text of a draft section
    Preview {
        /// Input draft JSON file
        #[arg(value_name = "DRAFT")]
        input: PathBuf,

        /// Section title (all sections if omitted)
        #[arg(short, long, value_name = "NAME")]
        section: Option<String>,
    },

    /// Print a draft's converted structure as JSON
    Json {
        /// Input draft JSON file
        #[arg(value_name = "DRAFT")]
        input: PathBuf,

        /// Compact single-line output
        #[arg(long)]
        compact: bool,
    },

    /// List the application section names in export order
    Sections,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> mdocx::Result<()> {
    match cli.command {
        Commands::Export {
            input,
            output,
            title,
            no_numbering,
        } => {
            let draft = load_draft(&input)?;
            let output = output.unwrap_or_else(|| with_docx_extension(&input));

            log::info!("exporting {} to {}", input.display(), output.display());
            Mdocx::new()
                .with_title(title)
                .with_numbered_sections(!no_numbering)
                .export(&draft, &output)?;

            println!(
                "{} wrote {} ({} sections populated)",
                "ok:".green().bold(),
                output.display().to_string().cyan(),
                draft.populated_count()
            );
            Ok(())
        }

        Commands::Convert { input, output } => {
            let text = fs::read_to_string(&input)?;
            let output = output.unwrap_or_else(|| with_docx_extension(&input));

            let bytes = Mdocx::new().convert_bytes(&text)?;
            fs::write(&output, bytes)?;

            println!(
                "{} wrote {}",
                "ok:".green().bold(),
                output.display().to_string().cyan()
            );
            Ok(())
        }

        Commands::Preview { input, section } => {
            let draft = load_draft(&input)?;
            let pipeline = CleanupPipeline::default();

            let kinds: Vec<SectionKind> = match section {
                Some(name) => {
                    let kind = SectionKind::from_title(&name)
                        .ok_or_else(|| Error::UnknownSection(name.clone()))?;
                    vec![kind]
                }
                None => SectionKind::ALL.to_vec(),
            };

            for kind in kinds {
                println!("{}", kind.title().bold());
                println!("{}", pipeline.preview(draft.section(kind)));
                println!();
            }
            Ok(())
        }

        Commands::Json { input, compact } => {
            let draft = load_draft(&input)?;
            let parser = MarkdownParser::new();
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };

            let converted: Vec<(String, Vec<mdocx::Block>)> = draft
                .sections()
                .map(|(kind, section)| {
                    (
                        kind.title().to_string(),
                        parser.parse(section.content_or_sentinel()),
                    )
                })
                .collect();

            let json = match format {
                JsonFormat::Pretty => serde_json::to_string_pretty(&converted),
                JsonFormat::Compact => serde_json::to_string(&converted),
            }
            .map_err(Error::Json)?;
            println!("{json}");
            Ok(())
        }

        Commands::Sections => {
            for (i, kind) in SectionKind::ALL.into_iter().enumerate() {
                println!("{}. {}", i + 1, kind.title());
            }
            Ok(())
        }
    }
}

fn with_docx_extension(input: &Path) -> PathBuf {
    input.with_extension("docx")
}
