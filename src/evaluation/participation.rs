use crate::session::{Speaker, TranscriptEntry};
use regex::Regex;
use std::sync::OnceLock;

/// Code shorter than this after cleanup does not count as an attempt
const MIN_CODE_CHARS: usize = 10;

/// Candidate lines shorter than this do not count as an answer
const MIN_ANSWER_CHARS: usize = 3;

const PLACEHOLDER: &str = "// Write your solution here";

struct CommentPatterns {
    line: Regex,
    block: Regex,
    placeholder: Regex,
}

fn patterns() -> &'static CommentPatterns {
    static PATTERNS: OnceLock<CommentPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| CommentPatterns {
        line: Regex::new(r"(?m)//.*$").expect("valid line comment regex"),
        block: Regex::new(r"(?s)/\*.*?\*/").expect("valid block comment regex"),
        placeholder: Regex::new(&format!("(?i){}", regex::escape(PLACEHOLDER)))
            .expect("valid placeholder regex"),
    })
}

/// Code with comments and the editor placeholder removed, trimmed
pub fn strip_code(code: &str) -> String {
    let p = patterns();
    let code = p.line.replace_all(code, "");
    let code = p.block.replace_all(&code, "");
    let code = p.placeholder.replace_all(&code, "");
    code.trim().to_string()
}

pub fn has_meaningful_code(code: &str) -> bool {
    strip_code(code).chars().count() > MIN_CODE_CHARS
}

pub fn has_meaningful_answers(transcripts: &[TranscriptEntry]) -> bool {
    transcripts.iter().any(|entry| {
        entry.speaker == Speaker::Candidate && entry.text.trim().chars().count() > MIN_ANSWER_CHARS
    })
}

/// Whether the candidate did enough to be worth an LLM evaluation
pub fn has_participation(code: &str, transcripts: &[TranscriptEntry]) -> bool {
    has_meaningful_answers(transcripts) || has_meaningful_code(code)
}
