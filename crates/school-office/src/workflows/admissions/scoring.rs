use super::domain::{NewResponse, Question};

/// Outcome of grading one answer sheet against a question bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSheet {
    pub score: u32,
    pub total: u32,
    pub responses: Vec<NewResponse>,
}

/// Grade `answers` positionally against `questions`.
///
/// Answer `i` is matched to question `i` by exact, case-sensitive comparison with the correct
/// answer. Positions past the end of `answers` are recorded as an empty submission and never
/// count as correct; answers past the end of `questions` are ignored.
pub fn grade(questions: &[Question], answers: &[String]) -> ScoreSheet {
    let responses: Vec<NewResponse> = questions
        .iter()
        .enumerate()
        .map(|(position, question)| {
            let submitted = answers.get(position);
            NewResponse {
                question_id: question.id,
                submitted_answer: submitted.cloned().unwrap_or_default(),
                correct: submitted.is_some_and(|answer| *answer == question.correct_answer),
            }
        })
        .collect();

    let score = responses.iter().filter(|response| response.correct).count() as u32;

    ScoreSheet {
        score,
        total: questions.len() as u32,
        responses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::admissions::domain::QuestionId;
    use crate::workflows::backoffice::ProgramId;
    use chrono::Utc;

    fn bank(correct: &[&str]) -> Vec<Question> {
        correct
            .iter()
            .enumerate()
            .map(|(index, answer)| Question {
                id: QuestionId(index as i64 + 1),
                program_id: ProgramId(1),
                prompt: format!("question {}", index + 1),
                correct_answer: answer.to_string(),
                decoys: ["w".to_string(), "x".to_string(), "y".to_string()],
                created_at: Utc::now(),
            })
            .collect()
    }

    fn answers(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn counts_positional_matches() {
        let sheet = grade(&bank(&["A", "B", "C"]), &answers(&["A", "X", "C"]));

        assert_eq!(sheet.score, 2);
        assert_eq!(sheet.total, 3);
        let flags: Vec<(i64, &str, bool)> = sheet
            .responses
            .iter()
            .map(|r| (r.question_id.0, r.submitted_answer.as_str(), r.correct))
            .collect();
        assert_eq!(flags, vec![(1, "A", true), (2, "X", false), (3, "C", true)]);
    }

    #[test]
    fn comparison_is_exact_and_case_sensitive() {
        let sheet = grade(
            &bank(&["JavaScript", "80"]),
            &answers(&["javascript", " 80"]),
        );
        assert_eq!(sheet.score, 0);
    }

    #[test]
    fn missing_answers_are_recorded_empty_and_wrong() {
        let sheet = grade(&bank(&["A", "B"]), &[]);

        assert_eq!((sheet.score, sheet.total), (0, 2));
        assert!(sheet
            .responses
            .iter()
            .all(|r| r.submitted_answer.is_empty() && !r.correct));
    }

    #[test]
    fn missing_answer_never_matches_an_empty_correct_answer() {
        let sheet = grade(&bank(&["", ""]), &answers(&[""]));

        assert_eq!(sheet.score, 1);
        assert!(sheet.responses[0].correct);
        assert!(!sheet.responses[1].correct);
    }

    #[test]
    fn excess_answers_are_ignored() {
        let sheet = grade(&bank(&["A"]), &answers(&["A", "B", "C"]));

        assert_eq!((sheet.score, sheet.total), (1, 1));
        assert_eq!(sheet.responses.len(), 1);
    }

    #[test]
    fn empty_bank_yields_zero_of_zero() {
        let sheet = grade(&[], &answers(&["A"]));
        assert_eq!((sheet.score, sheet.total), (0, 0));
        assert!(sheet.responses.is_empty());
    }
}
