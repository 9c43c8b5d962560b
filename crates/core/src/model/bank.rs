use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::{Question, QuestionDraft, QuestionError};
use crate::shuffle::shuffled;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,

    #[error("question id {0} appears more than once")]
    DuplicateId(QuestionId),

    #[error("question {id} is invalid: {source}")]
    Question {
        id: QuestionId,
        #[source]
        source: QuestionError,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Immutable set of questions a quiz is drawn from.
///
/// Built once at startup and handed to the session controller; cloning only
/// bumps a reference count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Arc<[Question]>,
}

impl QuestionBank {
    /// Build a bank from already validated questions.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Empty` for an empty list and
    /// `BankError::DuplicateId` when two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        let mut ids = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !ids.insert(question.id()) {
                return Err(BankError::DuplicateId(question.id()));
            }
        }
        Ok(Self {
            questions: questions.into(),
        })
    }

    /// Parse a JSON array of question objects.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Json` for malformed input, `BankError::Question`
    /// for a question that fails validation, and the errors of [`Self::new`].
    pub fn from_json(json: &str) -> Result<Self, BankError> {
        let drafts: Vec<QuestionDraft> = serde_json::from_str(json)?;
        let questions = drafts
            .into_iter()
            .map(|draft| {
                let id = draft.id;
                draft
                    .validate()
                    .map_err(|source| BankError::Question { id, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    /// The bundled digital-logic question set.
    ///
    /// # Panics
    ///
    /// Panics if the bundled data is invalid, which the unit tests rule out.
    #[must_use]
    pub fn builtin() -> Self {
        let questions = BUILTIN
            .iter()
            .map(|(id, prompt, options, answer)| {
                Question::new(QuestionId::new(*id), *prompt, *options, *answer)
                    .expect("built-in question should be valid")
            })
            .collect();
        Self::new(questions).expect("built-in bank should be valid")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// A fresh random ordering of the whole bank.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Question> {
        shuffled(&self.questions, rng)
    }
}

type BuiltinQuestion = (u64, &'static str, [&'static str; 4], &'static str);

const BUILTIN: &[BuiltinQuestion] = &[
    (
        1,
        "Which IC is used for the AND gate in TTL logic?",
        ["7400", "7408", "7432", "7486"],
        "7408",
    ),
    (
        2,
        "Which TTL gate outputs high only when both inputs are low?",
        ["NAND", "NOR", "XOR", "OR"],
        "NOR",
    ),
    (
        3,
        "What does the 7400 IC represent?",
        ["AND Gate", "OR Gate", "NAND Gate", "XOR Gate"],
        "NAND Gate",
    ),
    (
        4,
        "Which component is essential for error detection in digital circuits?",
        ["XOR Gate", "AND Gate", "NOR Gate", "NOT Gate"],
        "XOR Gate",
    ),
    (
        5,
        "Which logic gate is the backbone of flip-flops and memory circuits?",
        ["AND", "NAND", "OR", "NOR"],
        "NAND",
    ),
    (
        6,
        "What is the main application of the full-adder?",
        ["Subtraction", "Multiplication", "Division", "Binary Addition"],
        "Binary Addition",
    ),
    (
        7,
        "How many XOR gates are needed to build a full-adder using TTL?",
        ["1", "2", "3", "4"],
        "2",
    ),
    (
        8,
        "In TTL circuits, what is the role of BJTs?",
        [
            "To filter noise",
            "To amplify power",
            "To switch signals",
            "To stabilize voltage",
        ],
        "To switch signals",
    ),
    (
        9,
        "What is the main function of TTL logic in digital circuits?",
        [
            "Signal amplification",
            "Signal generation",
            "Logic switching",
            "Signal filtering",
        ],
        "Logic switching",
    ),
    (
        10,
        "Which combination of gates is used to form the carry-out in a full-adder using TTL?",
        [
            "2 AND gates and 1 XOR gate",
            "2 OR gates and 1 AND gate",
            "2 XOR gates and 1 OR gate",
            "3 AND gates and 1 OR gate",
        ],
        "3 AND gates and 1 OR gate",
    ),
    (
        11,
        "What is the output of a full-adder when A = 1, B = 1, and Cin = 1?",
        [
            "Sum = 0, Carry = 0",
            "Sum = 1, Carry = 0",
            "Sum = 0, Carry = 1",
            "Sum = 1, Carry = 1",
        ],
        "Sum = 1, Carry = 1",
    ),
    (
        12,
        "How does TTL differ from CMOS technology?",
        [
            "Uses diodes instead of BJTs",
            "Consumes more power but switches faster",
            "Uses MOSFETs instead of BJTs",
            "Consumes less power and switches slower",
        ],
        "Consumes more power but switches faster",
    ),
    (
        13,
        "What is the main characteristic of the 7408 IC in TTL circuits?",
        [
            "It is a NOT gate IC",
            "It is an AND gate IC",
            "It is an OR gate IC",
            "It is a XOR gate IC",
        ],
        "It is an AND gate IC",
    ),
    (
        14,
        "How many gates are typically used to build a full-adder circuit?",
        ["3 gates", "4 gates", "5 gates", "6 gates"],
        "6 gates",
    ),
    (
        15,
        "How does a full-adder handle the carry from previous additions?",
        [
            "Uses the sum output",
            "Uses a dedicated carry-in input",
            "Ignores the carry",
            "Generates a random output",
        ],
        "Uses a dedicated carry-in input",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn question(id: u64) -> Question {
        Question::new(QuestionId::new(id), format!("Q{id}"), ["a", "b", "c", "d"], "a").unwrap()
    }

    #[test]
    fn builtin_bank_is_valid() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.len(), 15);
        assert!(!bank.is_empty());
        assert_eq!(
            bank.questions()
                .iter()
                .find(|q| q.id() == QuestionId::new(7))
                .map(Question::correct_answer),
            Some("2")
        );
    }

    #[test]
    fn bank_rejects_empty_and_duplicate_ids() {
        assert!(matches!(QuestionBank::new(Vec::new()), Err(BankError::Empty)));
        let err = QuestionBank::new(vec![question(1), question(1)]).unwrap_err();
        assert!(matches!(err, BankError::DuplicateId(id) if id == QuestionId::new(1)));
    }

    #[test]
    fn bank_from_json_reports_invalid_question() {
        let json = r#"[
            {"id": 1, "question": "Q1", "options": ["a","b","c","d"], "correctAnswer": "a"},
            {"id": 2, "question": "Q2", "options": ["a","b","c","d"], "correctAnswer": "z"}
        ]"#;
        let err = QuestionBank::from_json(json).unwrap_err();
        assert!(matches!(err, BankError::Question { id, .. } if id == QuestionId::new(2)));
    }

    #[test]
    fn bank_from_json_rejects_malformed_input() {
        assert!(matches!(
            QuestionBank::from_json("{not json"),
            Err(BankError::Json(_))
        ));
    }

    #[test]
    fn shuffled_bank_is_a_permutation() {
        let bank = QuestionBank::new((1..=6).map(question).collect()).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let order = bank.shuffled(&mut rng);
        let mut ids: Vec<_> = order.iter().map(Question::id).collect();
        ids.sort();
        let expected: Vec<_> = (1..=6).map(QuestionId::new).collect();
        assert_eq!(ids, expected);
    }
}
