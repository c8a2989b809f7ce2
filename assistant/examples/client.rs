use legal_assistant::{AnswerBackend, AskService, AssistantConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let question = std::env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    let question = if question.is_empty() {
        "What are the requirements for a valid contract?".to_string()
    } else {
        question
    };

    let service = AskService::new(AssistantConfig::from_env()?);

    println!("🔍 Asking {}", service.config().endpoint);
    println!(
        "Request: {}",
        serde_json::to_string_pretty(&service.build_request(&question))?
    );

    let response = service.ask(&question).await?;
    println!("Response: {}", serde_json::to_string_pretty(&response)?);

    println!("\n✅ Done!");
    Ok(())
}
