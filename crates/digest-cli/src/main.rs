//! journal-digest - summarize journal entries with a local Ollama model.

use clap::Parser;
use digest_cli::{exit_code, init_tracing, Cli, Config, Formatter, PromptConfirm};
use digest_summarizer::{AutoConfirm, BatchRunner, RunRequest, Summarizer};
use tracing::info;

#[tokio::main]
async fn main() {
    init_tracing();

    match run().await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run() -> digest_cli::Result<i32> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Check inputs, then resolve configuration: flags > config file > defaults
    let config = Config::resolve(&cli)?;

    let formatter = Formatter::new(config.settings.color);

    info!("Starting journal summarization");
    info!("Output file: {}", cli.output_md.display());
    info!("Ollama model: {}", config.summarizer.model);
    info!("Ollama URL: {}", config.summarizer.ollama_url);

    let summarizer = Summarizer::new(
        config.summarizer.provider()?,
        config.summarizer.template()?,
    );

    let output = cli.output_md.clone();
    let request = RunRequest {
        outline: cli.input_journal_org,
        entry_files: cli.input_entry_md,
        output: cli.output_md,
    };
    let mut runner = BatchRunner::new(summarizer, request);

    let report = if cli.yes {
        runner.run(&mut AutoConfirm).await?
    } else {
        runner.run(&mut PromptConfirm::stdio(formatter)).await?
    };

    println!("{}", formatter.report(&report, &output));
    Ok(exit_code(&report))
}
