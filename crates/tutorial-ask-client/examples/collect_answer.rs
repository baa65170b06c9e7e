use tutorial_ask_client::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ClientError> {
    let client = AskClient::from_env()?;

    let answer = client
        .ask("what does the plagiarism checker look at")
        .mode(AskMode::Qa)
        .collect_answer()
        .await?;

    println!("{answer}");
    Ok(())
}
