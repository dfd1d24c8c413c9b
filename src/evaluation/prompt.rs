use crate::llm::ReportPrompt;
use crate::session::TranscriptEntry;

pub const SYSTEM_PROMPT: &str = r#"You are an expert technical interviewer reviewing a recorded coding interview.

Give DETAILED, SPECIFIC feedback backed by EVIDENCE quoted from the code and the conversation.

Respond with ONLY valid JSON matching this schema:

{
  "overallScore": number (1-10),
  "strengths": [
    { "aspect": string, "evidence": string (quote from code or transcript), "explanation": string }
  ],
  "improvements": [
    { "issue": string, "evidence": string (quote from code or transcript), "suggestion": string }
  ],
  "transcriptMistakes": [
    {
      "transcriptIndex": number,
      "speaker": "CANDIDATE" | "AGENT",
      "quote": string,
      "issue": string,
      "betterResponse": string
    }
  ],
  "codeAnalysis": {
    "correctness": string,
    "bugs": [
      { "lineNumber": number, "line": string, "issue": string, "fix": string }
    ],
    "timeComplexity": string,
    "spaceComplexity": string,
    "missingEdgeCases": string[]
  },
  "communicationAnalysis": {
    "clarity": string (with examples from the transcript),
    "thinkingProcess": string,
    "questionAsking": string
  },
  "nextSteps": string[]
}

Rules:
- Bugs must carry the LINE NUMBER of the offending line
- transcriptMistakes must carry the 1-based TRANSCRIPT INDEX shown in brackets
- Quote EXACT text from the code and the transcript
- Be SPECIFIC, never generic
"#;

const NO_CODE: &str = "(No code written)";
const NO_CONVERSATION: &str = "(No conversation)";

/// Transcript as `[n] SPEAKER: text` lines, 1-based, in arrival order
pub fn render_transcript(transcripts: &[TranscriptEntry]) -> String {
    if transcripts.is_empty() {
        return NO_CONVERSATION.to_string();
    }

    transcripts
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("[{}] {}: {}", i + 1, entry.speaker, entry.text))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_prompt(
    question: &str,
    code: &str,
    transcripts: &[TranscriptEntry],
    temperature: f64,
) -> ReportPrompt {
    let code = if code.is_empty() { NO_CODE } else { code };

    let user = format!(
        "Problem:\n{question}\n\nCandidate's Code:\n```\n{code}\n```\n\nFull Conversation Transcript:\n{}\n\nAnalyze THOROUGHLY with specific evidence.",
        render_transcript(transcripts),
    );

    ReportPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
        temperature,
    }
}
