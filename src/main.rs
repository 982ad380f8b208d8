//! # chatstats CLI
//!
//! Command-line interface for the chatstats library. The binary is the
//! file-reading boundary: it reads transcript text or scans a media
//! directory, hands in-memory values to the aggregators, and renders the
//! finalized summaries.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatstats::cli::{Args, Mode, OutputFormat};
use chatstats::media::{MediaAggregator, MediaCandidate, MediaSummary, MediaTimestamp};
use chatstats::{ChatAggregator, ChatStatsError, ChatSummary};
use chrono::{DateTime, Utc};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatStatsError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    // Print header
    println!("📊 chatstats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("🔎 Mode:    {}", args.mode);
    println!("📂 Input:   {}", args.input);
    println!("📄 Format:  {}", args.format);
    if let Some(ref output) = args.output {
        println!("💾 Output:  {}", output);
    }
    println!();

    let rendered = match args.mode {
        Mode::Chat => {
            let summary = analyze_chat(&args.input)?;
            render_output(&args, &summary, render_chat_text(&summary))?
        }
        Mode::Media => {
            let summary = analyze_media(&args.input)?;
            render_output(&args, &summary, render_media_text(&summary))?
        }
    };

    if let Some(ref output) = args.output {
        fs::write(output, rendered)?;
        println!("✅ Done! Output saved to {}", output);
    } else {
        println!("{rendered}");
    }

    println!();
    println!("⏱️  Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

/// Reads the transcript and runs the chat aggregation.
fn analyze_chat(input: &str) -> Result<ChatSummary, ChatStatsError> {
    let path = Path::new(input);
    let content = fs::read_to_string(path)?;

    println!("📖 Parsing transcript...");
    let parse_start = Instant::now();

    let summary = ChatAggregator::new()
        .aggregate(&content)
        .map_err(|e| match e {
            // Attach the file path for the terminal parse failure.
            ChatStatsError::Parse { .. } => ChatStatsError::parse_in(path),
            other => other,
        })?;

    let chat_name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    println!(
        "   {} messages from {} participants ({:.2}s)",
        summary.total_messages,
        summary.participant_count(),
        parse_start.elapsed().as_secs_f64()
    );
    println!();

    Ok(summary.with_chat_name(chat_name))
}

/// Scans the media directory and runs the media aggregation.
fn analyze_media(input: &str) -> Result<MediaSummary, ChatStatsError> {
    let path = Path::new(input);

    println!("📖 Scanning media files...");
    let scan_start = Instant::now();

    let mut candidates = Vec::new();
    collect_candidates(path, &mut candidates)?;

    println!(
        "   {} files found ({:.2}s)",
        candidates.len(),
        scan_start.elapsed().as_secs_f64()
    );
    println!();

    if candidates.is_empty() {
        // An empty directory reads as "no media", not a degenerate call.
        return Err(ChatStatsError::no_media_found_in(path));
    }

    MediaAggregator::new()
        .aggregate(candidates)
        .map_err(|e| match e {
            ChatStatsError::NoMediaFound { .. } => ChatStatsError::no_media_found_in(path),
            other => other,
        })
}

/// Recursively collects `(name, size, creation time)` descriptors.
fn collect_candidates(
    dir: &Path,
    candidates: &mut Vec<MediaCandidate>,
) -> Result<(), ChatStatsError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let entry_path: PathBuf = entry.path();
        let metadata = entry.metadata()?;

        if metadata.is_dir() {
            collect_candidates(&entry_path, candidates)?;
            continue;
        }

        let created = metadata
            .created()
            .ok()
            .map_or(MediaTimestamp::Undated, |t| {
                MediaTimestamp::Dated(DateTime::<Utc>::from(t))
            });

        let file_name = entry.file_name().to_string_lossy().into_owned();
        candidates.push(MediaCandidate::new(file_name, metadata.len(), created));
    }
    Ok(())
}

/// Picks text or JSON rendering per the CLI args.
fn render_output<T: serde::Serialize>(
    args: &Args,
    summary: &T,
    text: String,
) -> Result<String, ChatStatsError> {
    match args.format {
        OutputFormat::Text => Ok(text),
        OutputFormat::Json => {
            // Serialization of plain value types cannot fail.
            Ok(serde_json::to_string_pretty(summary).expect("summary serializes"))
        }
    }
}

fn render_chat_text(summary: &ChatSummary) -> String {
    let mut out = String::new();

    if let Some(ref name) = summary.chat_name {
        out.push_str(&format!("Chat: {}\n", name));
    }
    out.push_str(&format!("Messages:     {}\n", summary.total_messages));
    out.push_str(&format!("Words:        {}\n", summary.total_words));
    out.push_str(&format!(
        "Unique words: {}\n",
        summary.word_stats.unique_count
    ));
    out.push_str(&format!(
        "Emoji:        {}\n",
        summary.emoji_stats.total_count
    ));
    out.push_str(&format!(
        "Range:        {} .. {}\n",
        summary.time_range.start.format("%d.%m.%Y %H:%M:%S"),
        summary.time_range.end.format("%d.%m.%Y %H:%M:%S")
    ));

    out.push_str("\nParticipants:\n");
    for participant in &summary.participants {
        out.push_str(&format!(
            "  {:<20} {:>6} messages, {:>6} words, avg length {:.1}\n",
            participant.name,
            participant.message_count,
            participant.word_count,
            participant.average_message_length
        ));
    }

    if !summary.word_stats.top_words.is_empty() {
        out.push_str("\nTop words:\n");
        for word in summary.word_stats.top_words.iter().take(10) {
            out.push_str(&format!(
                "  {:<15} {:>6}  ({:.1}%)\n",
                word.word, word.count, word.percentage
            ));
        }
    }

    if !summary.emoji_stats.top_emojis.is_empty() {
        out.push_str("\nTop emoji:\n");
        for emoji in &summary.emoji_stats.top_emojis {
            out.push_str(&format!(
                "  {:<4} {:>6}  ({:.1}%)\n",
                emoji.emoji, emoji.count, emoji.percentage
            ));
        }
    }

    if let Some(busiest) = summary
        .hourly_stats
        .iter()
        .max_by_key(|h| (h.message_count, std::cmp::Reverse(h.hour)))
    {
        out.push_str(&format!(
            "\nBusiest hour: {:02}:00 ({} messages)\n",
            busiest.hour, busiest.message_count
        ));
    }

    out
}

fn render_media_text(summary: &MediaSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("Files:   {}\n", summary.total_files));
    out.push_str(&format!(
        "Images:  {} ({})\n",
        summary.image_count,
        human_size(summary.image_size_bytes)
    ));
    out.push_str(&format!(
        "Gifs:    {} ({})\n",
        summary.gif_count,
        human_size(summary.gif_size_bytes)
    ));
    out.push_str(&format!(
        "Videos:  {} ({})\n",
        summary.video_count,
        human_size(summary.video_size_bytes)
    ));
    out.push_str(&format!(
        "Total:   {}\n",
        human_size(summary.total_size_bytes)
    ));

    out.push_str("\nBy participant:\n");
    for (name, stat) in &summary.by_participant {
        out.push_str(&format!(
            "  {:<20} {:>4} img, {:>4} gif, {:>4} vid, {}\n",
            name,
            stat.image_count,
            stat.gif_count,
            stat.video_count,
            human_size(stat.total_size_bytes)
        ));
    }

    out.push_str("\nFile types:\n");
    for (ext, count) in &summary.file_type_counts {
        let label = if ext.is_empty() { "(none)" } else { ext };
        out.push_str(&format!("  {:<8} {:>6}\n", label, count));
    }

    if !summary.largest_files.is_empty() {
        out.push_str("\nLargest files:\n");
        for file in &summary.largest_files {
            out.push_str(&format!(
                "  {:<40} {}\n",
                file.file_name,
                human_size(file.size_bytes)
            ));
        }
    }

    out
}

/// Formats a byte count as B/KB/MB/GB.
fn human_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let bytes = bytes as f64;
    if bytes >= GB {
        format!("{:.2} GB", bytes / GB)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{} B", bytes)
    }
}
