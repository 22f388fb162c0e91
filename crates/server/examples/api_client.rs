//! Examples for using the SnipMatch Server API
//!
//! Start the server first (`cargo run -p snipmatch-server`), then run this
//! against it.

use reqwest::Client;
use serde_json::json;

const SERVER_URL: &str = "http://localhost:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    // Example 1: Health check
    println!("1. Health Check:");
    let resp = client.get(format!("{SERVER_URL}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 2: API info
    println!("2. API Info:");
    let resp = client.get(SERVER_URL).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 3: Score a batch of snippets
    println!("3. Score Snippets:");
    let resp = client
        .post(format!("{SERVER_URL}/api/v1/search"))
        .json(&json!({
            "candidates": [
                {
                    "text": "I never thought it would end like this",
                    "filename": "[P001]Episode 1.json",
                    "timestamp": "2m18s",
                    "similarity": 0.91
                },
                {
                    "text": "it is never going to end",
                    "filename": "[P001]Episode 2.json",
                    "timestamp": "11m05s",
                    "similarity": 0.64
                }
            ],
            "queryWords": ["never", "end"],
            "minRatio": 50
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 4: No candidate clears the threshold
    println!("4. No-Match Diagnostic:");
    let resp = client
        .post(format!("{SERVER_URL}/api/v1/search"))
        .json(&json!({
            "candidates": [
                {"text": "completely unrelated line", "filename": "ep3.json"}
            ],
            "queryWords": ["zebra"],
            "minRatio": 80
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 5: Malformed candidate (still HTTP 200, error envelope)
    println!("5. Malformed Candidate:");
    let resp = client
        .post(format!("{SERVER_URL}/api/v1/search"))
        .json(&json!({
            "candidates": [{"filename": "no-text.json"}],
            "queryWords": ["hello"],
            "minRatio": 0
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 6: Readiness probe
    println!("6. Readiness:");
    let resp = client.get(format!("{SERVER_URL}/ready")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("All examples completed!");
    Ok(())
}
