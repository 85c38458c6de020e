use crate::session::controller::Phase;
use crate::session::error::SessionError;

pub struct ChoiceQuestion {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
}

pub const AI_QUESTIONS: &[ChoiceQuestion] = &[
    ChoiceQuestion {
        prompt: "What does AI stand for?",
        options: [
            "Automatic Intelligence",
            "Artificial Intelligence",
            "Advanced Internet",
            "Awesome Inventions",
        ],
        correct: 1,
    },
    ChoiceQuestion {
        prompt: "Which of these uses AI?",
        options: [
            "A simple calculator",
            "A regular camera",
            "A voice assistant like Siri",
            "A bicycle",
        ],
        correct: 2,
    },
    ChoiceQuestion {
        prompt: "What can AI help us do?",
        options: [
            "Create art and music",
            "Answer questions",
            "Play games",
            "All of the above",
        ],
        correct: 3,
    },
    ChoiceQuestion {
        prompt: "How do AIs learn?",
        options: [
            "By reading books",
            "By looking at lots of examples",
            "By magic",
            "They don't learn at all",
        ],
        correct: 1,
    },
    ChoiceQuestion {
        prompt: "Which of these is NOT an AI?",
        options: ["Claude", "ChatGPT", "A regular calculator", "Perplexity"],
        correct: 2,
    },
];

/// Single pass multiple-choice quiz. Every answer advances, right or wrong.
pub struct ChoiceQuiz {
    questions: &'static [ChoiceQuestion],
    index: usize,
    score: usize,
    finished: bool,
}

impl ChoiceQuiz {
    pub fn new(questions: &'static [ChoiceQuestion]) -> Self {
        Self {
            questions,
            index: 0,
            score: 0,
            finished: questions.is_empty(),
        }
    }

    pub fn current(&self) -> Option<&ChoiceQuestion> {
        if self.finished {
            return None;
        }
        self.questions.get(self.index)
    }

    /// Returns whether the chosen option was right.
    pub fn answer(&mut self, option: usize) -> Result<bool, SessionError> {
        let phase = if self.finished {
            Phase::Complete
        } else {
            Phase::Active
        };
        let Some(question) = self.current() else {
            return Err(SessionError::InvalidState {
                op: "answer",
                phase,
                mode: None,
            });
        };
        if option >= question.options.len() {
            return Err(SessionError::InvalidState {
                op: "answer",
                phase,
                mode: None,
            });
        }

        let correct = option == question.correct;
        if correct {
            self.score += 1;
        }
        if self.index + 1 < self.questions.len() {
            self.index += 1;
        } else {
            self.finished = true;
        }
        Ok(correct)
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.score = 0;
        self.finished = self.questions.is_empty();
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn question_number(&self) -> usize {
        self.index + 1
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
