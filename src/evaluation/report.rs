//! Evaluation report shape returned to the client
//!
//! Providers and prompt revisions have produced two JSON layouts: a short
//! one (`strengths`, `improvements`, `missingEdgeCases`, `communication`,
//! `nextSteps` as plain text) and the detailed one modelled here. Both are
//! folded into [`EvaluationReport`] by [`normalize`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    /// 1-10, when the model supplied one
    pub overall_score: Option<f64>,
    pub strengths: Vec<Strength>,
    pub improvements: Vec<Improvement>,
    pub transcript_mistakes: Vec<TranscriptMistake>,
    pub code_analysis: CodeAnalysis,
    pub communication_analysis: CommunicationAnalysis,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strength {
    pub aspect: String,
    pub evidence: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Improvement {
    pub issue: String,
    pub evidence: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptMistake {
    /// 1-based index into the transcript as rendered in the prompt
    pub transcript_index: Option<u64>,
    pub speaker: String,
    pub quote: String,
    pub issue: String,
    pub better_response: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeAnalysis {
    pub correctness: String,
    pub bugs: Vec<CodeBug>,
    pub time_complexity: String,
    pub space_complexity: String,
    pub missing_edge_cases: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeBug {
    pub line_number: Option<u64>,
    pub line: String,
    pub issue: String,
    pub fix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationAnalysis {
    pub clarity: String,
    pub thinking_process: String,
    pub question_asking: String,
}

impl EvaluationReport {
    /// Fixed report for a session where the candidate neither coded nor spoke
    pub fn no_participation() -> Self {
        Self {
            overall_score: Some(1.0),
            strengths: Vec::new(),
            improvements: vec![Improvement {
                issue: "No participation".to_string(),
                evidence: "No code written, no verbal communication".to_string(),
                suggestion: "Try solving even partially and explain your thought process"
                    .to_string(),
            }],
            transcript_mistakes: Vec::new(),
            code_analysis: CodeAnalysis {
                correctness: "No code submitted".to_string(),
                bugs: Vec::new(),
                time_complexity: "N/A".to_string(),
                space_complexity: "N/A".to_string(),
                missing_edge_cases: Vec::new(),
            },
            communication_analysis: CommunicationAnalysis {
                clarity: "No communication observed".to_string(),
                thinking_process: "Not demonstrated".to_string(),
                question_asking: "No questions asked".to_string(),
            },
            next_steps: vec![
                "Practice thinking out loud while coding".to_string(),
                "Start with simple examples".to_string(),
                "Ask clarifying questions".to_string(),
            ],
        }
    }
}

/// Fold a parsed completion into the detailed report shape
///
/// Missing fields become empty. Plain-text items (short layout) become
/// items whose first field carries the text.
pub fn normalize(value: Value) -> Result<EvaluationReport, String> {
    let obj = match value {
        Value::Object(obj) => obj,
        other => return Err(format!("expected a JSON object, got {}", kind(&other))),
    };

    let strengths = items(obj.get("strengths"), |item| match item {
        Value::Object(o) => Strength {
            aspect: text(o.get("aspect")),
            evidence: text(o.get("evidence")),
            explanation: text(o.get("explanation")),
        },
        other => Strength {
            aspect: text(Some(other)),
            ..Default::default()
        },
    });

    let improvements = items(obj.get("improvements"), |item| match item {
        Value::Object(o) => Improvement {
            issue: text(o.get("issue")),
            evidence: text(o.get("evidence")),
            suggestion: text(o.get("suggestion")),
        },
        other => Improvement {
            issue: text(Some(other)),
            ..Default::default()
        },
    });

    let transcript_mistakes = items(obj.get("transcriptMistakes"), |item| match item {
        Value::Object(o) => TranscriptMistake {
            transcript_index: o.get("transcriptIndex").and_then(Value::as_u64),
            speaker: text(o.get("speaker")),
            quote: text(o.get("quote")),
            issue: text(o.get("issue")),
            better_response: text(o.get("betterResponse")),
        },
        other => TranscriptMistake {
            issue: text(Some(other)),
            ..Default::default()
        },
    });

    let code = obj.get("codeAnalysis").and_then(Value::as_object);
    let mut missing_edge_cases = strings(code.and_then(|c| c.get("missingEdgeCases")));
    missing_edge_cases.extend(strings(obj.get("missingEdgeCases")));

    let code_analysis = CodeAnalysis {
        correctness: field(code, "correctness"),
        bugs: items(code.and_then(|c| c.get("bugs")), |item| match item {
            Value::Object(o) => CodeBug {
                line_number: o.get("lineNumber").and_then(Value::as_u64),
                line: text(o.get("line")),
                issue: text(o.get("issue")),
                fix: text(o.get("fix")),
            },
            other => CodeBug {
                issue: text(Some(other)),
                ..Default::default()
            },
        }),
        time_complexity: field(code, "timeComplexity"),
        space_complexity: field(code, "spaceComplexity"),
        missing_edge_cases,
    };

    let comm = obj.get("communicationAnalysis").and_then(Value::as_object);
    let mut communication_analysis = CommunicationAnalysis {
        clarity: field(comm, "clarity"),
        thinking_process: field(comm, "thinkingProcess"),
        question_asking: field(comm, "questionAsking"),
    };
    if communication_analysis.clarity.is_empty() {
        communication_analysis.clarity = text(obj.get("communication"));
    }

    Ok(EvaluationReport {
        overall_score: obj.get("overallScore").and_then(score),
        strengths,
        improvements,
        transcript_mistakes,
        code_analysis,
        communication_analysis,
        next_steps: strings(obj.get("nextSteps")),
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn score(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(parts)) => parts
            .iter()
            .map(|part| text(Some(part)))
            .collect::<Vec<_>>()
            .join("\n"),
        Some(other) => other.to_string(),
    }
}

fn field(obj: Option<&Map<String, Value>>, key: &str) -> String {
    text(obj.and_then(|o| o.get(key)))
}

/// A list of strings, accepting a single string as a one-item list
fn strings(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(list)) => list.iter().map(|v| text(Some(v))).collect(),
        Some(Value::String(s)) if s.trim().is_empty() => Vec::new(),
        Some(other) => vec![text(Some(other))],
    }
}

fn items<T>(value: Option<&Value>, map: impl Fn(&Value) -> T) -> Vec<T> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(list)) => list.iter().map(map).collect(),
        Some(Value::String(s)) if s.trim().is_empty() => Vec::new(),
        Some(other) => vec![map(other)],
    }
}
