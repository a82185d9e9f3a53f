use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoiceInfo {
    pub priority: i64,
    pub path: String,
    pub count: u32,
    pub volume: u8,
}

impl VoiceInfo {
    pub fn new(path: &str, priority: i64, count: u32, volume: u8) -> Self {
        Self {
            priority,
            path: path.to_owned(),
            count,
            volume,
        }
    }

    pub fn samples() -> Vec<VoiceInfo> {
        vec![
            VoiceInfo::new("/voice/1.mp3", 3, 1, 50),
            VoiceInfo::new("/voice/2.mp3", 1, 2, 70),
            VoiceInfo::new("/voice/3.mp3", 2, 3, 60),
            VoiceInfo::new("/voice/4.mp3", 1, 2, 70),
        ]
    }
}

impl fmt::Display for VoiceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Path: {} | Count: {} | Volume: {}]",
            self.path, self.count, self.volume
        )
    }
}

impl FromStr for VoiceInfo {
    type Err = String;

    // path:priority:count:volume, split from the right so paths may contain ':'
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(4, ':');
        let volume = parts.next();
        let count = parts.next();
        let priority = parts.next();
        let path = parts.next();

        match (path, priority, count, volume) {
            (Some(path), Some(priority), Some(count), Some(volume)) if !path.is_empty() => {
                Ok(Self {
                    priority: priority
                        .parse()
                        .map_err(|e| format!("bad priority {:?}: {}", priority, e))?,
                    path: path.to_owned(),
                    count: count
                        .parse()
                        .map_err(|e| format!("bad count {:?}: {}", count, e))?,
                    volume: volume
                        .parse()
                        .map_err(|e| format!("bad volume {:?}: {}", volume, e))?,
                })
            }
            _ => Err(format!("expected path:priority:count:volume, got {:?}", s)),
        }
    }
}
