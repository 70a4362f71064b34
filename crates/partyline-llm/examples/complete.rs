use anyhow::Result;
use partyline_llm::{CompletionClient, CompletionOptions, CompletionRequest, Message, OpenAIClient};

#[tokio::main]
async fn main() -> Result<()> {
    let api_key = std::env::var("OPENAI_API_KEY")?;
    let client = OpenAIClient::new(api_key)?;

    let request = CompletionRequest::new(
        "gpt-3.5-turbo",
        vec![
            Message::system("You are an energetic party expert."),
            Message::human("What should I bring to a housewarming?"),
        ],
    )
    .with_options(CompletionOptions::new().temperature(0.7).max_tokens(150));

    let completion = client.complete(request).await?;

    println!("Reply: {}", completion.content.unwrap_or_default());

    if let Some(usage) = completion.usage {
        println!("Tokens used: {}", usage.total_tokens);
    }

    Ok(())
}
