use agri_qa::presentation::{self, AnswerStyle, DEFAULT_PREVIEW_ROWS};
use agri_qa::{DataConfig, QaAssistant};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "agri-qa")]
#[command(about = "Answer questions about Indian crop production, rainfall and temperature")]
#[command(version)]
struct Args {
    /// Directory holding the CSV tables (or set AGRI_QA_DATA_DIR)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Answer layout
    #[arg(long, value_enum, default_value_t = AnswerStyle::Plain, global = true)]
    style: AnswerStyle,

    /// Output format for answers
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a single question
    Ask {
        /// The question in natural language
        question: String,
    },
    /// Ask questions in a loop (#1-#4 pick a sample question)
    Interactive,
    /// List the sample questions
    Samples,
    /// Show the states, crops and years available
    Summary,
    /// Show record counts and the first rows of each table
    Preview {
        /// Rows to show per table
        #[arg(short, long, default_value_t = DEFAULT_PREVIEW_ROWS)]
        rows: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if let Commands::Samples = args.command {
        print!("{}", presentation::render_samples());
        return Ok(());
    }

    let config = DataConfig::from_env(args.data_dir.clone());
    let assistant = QaAssistant::load(&config)?;

    match &args.command {
        Commands::Ask { question } => answer(&assistant, question, &args)?,
        Commands::Interactive => interactive(&assistant, &args)?,
        Commands::Summary => print!("{}", presentation::render_summary(assistant.dataset())?),
        Commands::Preview { rows } => {
            print!("{}", presentation::render_preview(assistant.dataset(), *rows))
        }
        Commands::Samples => {}
    }

    Ok(())
}

fn answer(assistant: &QaAssistant, question: &str, args: &Args) -> Result<()> {
    let answer = assistant.ask(question)?;
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&answer)?),
        OutputFormat::Markdown => print!("{}", presentation::render_answer(&answer.markdown, args.style)),
    }
    Ok(())
}

fn interactive(assistant: &QaAssistant, args: &Args) -> Result<()> {
    println!("{}", presentation::render_header(args.style));
    if args.style == AnswerStyle::Card {
        println!("{}", presentation::render_overview(assistant.dataset()));
    }
    print!("{}", presentation::render_samples());
    println!("Type a question, #N for a sample, or 'quit' to exit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\nAsk your question: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        let question = match input.strip_prefix('#') {
            Some(_) => match presentation::sample_question(input) {
                Some(sample) => {
                    println!("{}", sample);
                    sample
                }
                None => {
                    println!("No sample question {}", input);
                    continue;
                }
            },
            None => input,
        };

        answer(assistant, question, args)?;
    }

    info!("Interactive session finished");
    Ok(())
}
