//! Run the three-stage analysis pipeline against a local Ollama instance.
//!
//! Requires a running Ollama at http://localhost:11434 with the model
//! pulled (`ollama pull deepseek-r1:1.5b`).
//!
//! ```sh
//! cargo run --example analyze
//! ```

use text_analyzer::{AnalysisState, OllamaClient, OllamaConfig, Pipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = OllamaConfig::with_model("deepseek-r1:1.5b").endpoint("http://localhost:11434");
    let client = OllamaClient::new(config);
    let pipeline = Pipeline::standard();

    let state = AnalysisState::new(
        "OpenAI has announced a new language model that outperforms previous \
         benchmarks on reasoning tasks, according to researchers in San Francisco.",
    )?;

    let report = pipeline
        .execute_with_progress(&client, state, |p| {
            println!("[{}/{}] {}", p.stage_index + 1, p.total_stages, p.stage_name);
        })
        .await?;

    println!("\nClassification: {}", report.classification);
    println!("Entities:       {}", report.entities.join(", "));
    println!("Summary:        {}", report.summary);

    Ok(())
}
