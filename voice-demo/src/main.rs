mod args;
mod voice;

use args::Args;
use clap::Parser;
use prioqueue::{PriorityQueue, QueueError};
use voice::VoiceInfo;

fn main() -> Result<(), QueueError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let args = Args::parse();
    let voices = if args.voices.is_empty() {
        VoiceInfo::samples()
    } else {
        args.voices
    };

    // The queue only borrows the voices; they stay owned here.
    let mut queue = PriorityQueue::with_capacity(voices.len());
    for voice in &voices {
        if let Err(err) = queue.insert(voice, voice.priority) {
            tracing::error!(path = %voice.path, error = %err, "insert failed");
        }
    }

    print!("\n{}\n", queue.dump(|voice| *voice).title("Voice Priority Queue"));

    while let Ok((voice, priority)) = queue.pop_minimum() {
        println!("Popped:");
        println!(
            "Path: {} | Priority: {} | Count: {} | Volume: {}",
            voice.path, priority, voice.count, voice.volume
        );
    }

    let remnant = queue.delete();
    debug_assert!(remnant.is_empty());
    drop(remnant);

    Ok(())
}
