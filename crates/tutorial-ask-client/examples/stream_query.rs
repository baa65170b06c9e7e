use tutorial_ask_client::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ClientError> {
    let client = AskClient::from_env()?;

    let outcome = client
        .ask("how do I publish a tutorial")
        .mode(AskMode::Both)
        .limit(5)
        .stream(|event| match event.kind() {
            Some("token") => print!("{}", event.text().unwrap_or_default()),
            Some("error") => eprintln!("stream error: {}", event.message().unwrap_or_default()),
            Some("done") => println!(),
            _ => {}
        })
        .await?;

    if let Some(data) = outcome.data() {
        println!("{data}");
    }
    Ok(())
}
