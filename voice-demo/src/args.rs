use clap::Parser;

use crate::voice::VoiceInfo;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// A voice to enqueue, written as `path:priority:count:volume`. May be repeated.
    ///
    /// If unset, enqueues the four sample voices with priorities 3, 1, 2 and 1.
    #[arg(short, long = "voice", required = false)]
    pub voices: Vec<VoiceInfo>,
}
