//! Test binary for the transcription service.
//!
//! Usage: transcribe-test <video_url> <api_key> [language] [endpoint]

use std::env;
use std::time::Instant;

use ytscribe_core::TargetLanguage;
use ytscribe_transcribe::{HttpConfig, HttpTranscriber, Transcriber, TranscriptionRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <video_url> <api_key> [language] [endpoint]", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} https://youtu.be/dQw4w9WgXcQ sk-... es", args[0]);
        std::process::exit(1);
    }

    let url = &args[1];
    let api_key = &args[2];
    let language: TargetLanguage = match args.get(3) {
        Some(code) => code.parse()?,
        None => TargetLanguage::Auto,
    };

    let mut config = HttpConfig::new();
    if let Some(endpoint) = args.get(4) {
        config = config.with_endpoint(endpoint);
    }
    println!("Using endpoint: {}", config.endpoint());
    println!("Target language: {} ({})", language.label(), language.code());

    let client = HttpTranscriber::new(config);

    println!("Sending transcription request...");
    let start = Instant::now();

    let request = TranscriptionRequest::new(url.as_str(), language, api_key.as_str());
    let result = match client.submit_transcription(&request).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Transcription failed: {}", e);
            eprintln!("User-facing message: {}", e.user_message());
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    println!();
    println!("Transcription completed in {:.2}s", elapsed.as_secs_f64());
    if let Some(english) = result.english() {
        println!("--- English Translation ---");
        println!("{}", english);
    }
    println!("--- Original Text ---");
    println!("{}", result.original());
    println!("---");

    Ok(())
}
