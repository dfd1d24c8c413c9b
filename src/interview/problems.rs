use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A coding problem the agent can put to the candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub id: u32,
    pub difficulty: Difficulty,
    pub question: &'static str,
    pub hints: &'static [&'static str],
}

// Handed out strictly in this order.
static CATALOG: [Problem; 4] = [
    Problem {
        id: 1,
        difficulty: Difficulty::Easy,
        question: "Given an array of integers, return indices of two numbers that add up to a target.",
        hints: &["Consider using a hash map", "Think about the time complexity"],
    },
    Problem {
        id: 2,
        difficulty: Difficulty::Medium,
        question: "Given a binary tree, find its maximum depth.",
        hints: &["Think recursively", "Consider both left and right subtrees"],
    },
    Problem {
        id: 3,
        difficulty: Difficulty::Medium,
        question: "Reverse a linked list in-place.",
        hints: &["Think about pointer manipulation", "Consider iterative vs recursive"],
    },
    Problem {
        id: 4,
        difficulty: Difficulty::Hard,
        question: "Find the median of two sorted arrays.",
        hints: &["Binary search approach", "Think about merging"],
    },
];

/// The full problem list, in assignment order
pub fn catalog() -> &'static [Problem] {
    &CATALOG
}

/// Problem every new session starts with
pub fn first() -> &'static Problem {
    &CATALOG[0]
}
