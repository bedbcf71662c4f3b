use std::collections::HashSet;

#[derive(Debug)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub options: &'static [&'static str],
    correct: usize,
    pub explanation: &'static str,
    pub points: u32,
}

const QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        id: "q1",
        question: "How long does it take for a plastic bottle to decompose naturally?",
        options: &["50 years", "100 years", "450+ years", "10 years"],
        correct: 2,
        explanation: "Plastic bottles take 450+ years to decompose, which is why recycling is so important!",
        points: 10,
    },
    QuizQuestion {
        id: "q2",
        question: "What percentage of energy is saved when recycling aluminum cans?",
        options: &["50%", "75%", "95%", "25%"],
        correct: 2,
        explanation: "Recycling aluminum saves 95% of the energy needed to make new cans from raw materials!",
        points: 15,
    },
    QuizQuestion {
        id: "q3",
        question: "Which waste type actually reduces carbon emissions when properly managed?",
        options: &["Plastic", "Organic/Food waste", "Paper", "Metal"],
        correct: 1,
        explanation: "Organic waste is carbon negative when composted, turning waste into valuable soil nutrients!",
        points: 20,
    },
    QuizQuestion {
        id: "q4",
        question: "How many times can paper be recycled before the fibers become too short?",
        options: &["3-4 times", "5-7 times", "10+ times", "Infinitely"],
        correct: 1,
        explanation: "Paper can be recycled 5-7 times before the fibers become too short to make new paper.",
        points: 10,
    },
    QuizQuestion {
        id: "q5",
        question: "What is the best way to clean containers before recycling?",
        options: &["Hot soapy water", "Just rinse with water", "Use bleach", "No cleaning needed"],
        correct: 1,
        explanation: "A simple rinse with water is sufficient - it removes food residue without wasting resources!",
        points: 10,
    },
];

pub fn questions() -> &'static [QuizQuestion] {
    QUESTIONS
}

#[derive(Debug, Clone, Copy)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub awarded: u32,
    pub explanation: &'static str,
}

/// Session-scoped quiz progress: running score plus the set of questions
/// already answered correctly. Points are awarded once per question.
#[derive(Default)]
pub struct QuizEngine {
    score: u32,
    completed: HashSet<&'static str>,
}

impl QuizEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Returns `None` for an unknown question id or out-of-range choice.
    pub fn answer(&mut self, question_id: &str, choice: usize) -> Option<AnswerOutcome> {
        let question = QUESTIONS.iter().find(|q| q.id == question_id)?;
        if choice >= question.options.len() {
            return None;
        }

        let correct = choice == question.correct;
        let awarded = if correct && self.completed.insert(question.id) {
            self.score += question.points;
            question.points
        } else {
            0
        };

        Some(AnswerOutcome {
            correct,
            awarded,
            explanation: question.explanation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_answer_awards_points_once() {
        let mut quiz = QuizEngine::new();
        let first = quiz.answer("q1", 2).unwrap();
        assert!(first.correct);
        assert_eq!(first.awarded, 10);
        assert_eq!(quiz.score(), 10);

        let repeat = quiz.answer("q1", 2).unwrap();
        assert!(repeat.correct);
        assert_eq!(repeat.awarded, 0);
        assert_eq!(quiz.score(), 10);
    }

    #[test]
    fn wrong_answer_scores_nothing_but_explains() {
        let mut quiz = QuizEngine::new();
        let outcome = quiz.answer("q3", 0).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.awarded, 0);
        assert!(outcome.explanation.contains("carbon negative"));
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.completed_count(), 0);
    }

    #[test]
    fn unknown_question_or_choice_is_rejected() {
        let mut quiz = QuizEngine::new();
        assert!(quiz.answer("q99", 0).is_none());
        assert!(quiz.answer("q1", 4).is_none());
    }

    #[test]
    fn full_run_totals_sixty_five_points() {
        let mut quiz = QuizEngine::new();
        for question in questions() {
            quiz.answer(question.id, question.correct);
        }
        assert_eq!(quiz.score(), 65);
        assert_eq!(quiz.completed_count(), questions().len());
    }
}
