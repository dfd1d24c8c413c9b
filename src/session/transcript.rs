use serde::{Deserialize, Serialize};
use std::fmt;

/// Who said a transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Speaker {
    /// The voice agent conducting the interview
    Agent,
    /// The person being interviewed
    Candidate,
}

impl Speaker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Speaker::Agent => "AGENT",
            Speaker::Candidate => "CANDIDATE",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single turn of speech, appended in arrival order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
}

impl TranscriptEntry {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_wire_format() {
        let entry = TranscriptEntry::new(Speaker::Candidate, "hello");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"speaker":"CANDIDATE","text":"hello"}"#);

        let agent: Speaker = serde_json::from_str("\"AGENT\"").unwrap();
        assert_eq!(agent, Speaker::Agent);
        assert!(serde_json::from_str::<Speaker>("\"candidate\"").is_err());
    }
}
