//! # kakaopack CLI
//!
//! Command-line interface for the kakaopack library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kakaopack::KakaoError;
use kakaopack::cli::Args;
use kakaopack::core::ParsedChat;
use kakaopack::format::{OutputFormat, write_to_format};
use kakaopack::parser::KakaoParser;

/// Participants listed in the summary.
const SUMMARY_PARTICIPANTS: usize = 5;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), KakaoError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let output_path = args.output_path();
    let format: OutputFormat = args.format.into();
    let filter_config = args.filter_config()?;
    let output_config = args.output_config();

    if format == OutputFormat::Digest && output_config.user.is_none() {
        return Err(KakaoError::invalid_format(
            "digest",
            "a target participant is required (--user)",
        ));
    }

    println!("kakaopack v{}", env!("CARGO_PKG_VERSION"));
    println!("Input:   {}", args.input);
    println!("Output:  {output_path}");
    println!("Format:  {format}");
    println!();

    let parse_start = Instant::now();
    let parsed = KakaoParser::with_config(args.kakao_config()).parse(&args.input)?;
    tracing::info!(
        messages = parsed.total_messages,
        elapsed_ms = parse_start.elapsed().as_millis(),
        "parsed transcript"
    );

    let chat = if filter_config.is_active() {
        let filtered = parsed.filtered(&filter_config);
        println!(
            "Filtered: {} of {} messages kept",
            filtered.total_messages, parsed.total_messages
        );
        filtered
    } else {
        parsed
    };

    if args.no_validate {
        if let Err(e) = chat.validate() {
            tracing::warn!(error = %e, "writing output despite failed validation");
        }
    } else {
        chat.validate()?;
    }

    print_summary(&chat);

    write_to_format(&chat, &output_path, format, &output_config)?;

    println!();
    println!(
        "Done! Output saved to {output_path} ({:.2}s)",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn print_summary(chat: &ParsedChat) {
    println!("Summary:");
    if !chat.room_name.is_empty() {
        println!("   Room:         {}", chat.room_name);
    }
    if !chat.export_date.is_empty() {
        println!("   Exported:     {}", chat.export_date);
    }
    println!("   Messages:     {}", chat.total_messages);
    println!("   Participants: {}", chat.participants.len());

    for p in chat.participants.iter().take(SUMMARY_PARTICIPANTS) {
        println!(
            "   - {}: {} messages, avg {} chars",
            p.name, p.message_count, p.avg_length
        );
    }
}
