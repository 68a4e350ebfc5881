use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::backoffice::ProgramId;

/// Identifier of a submitted application (candidature).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseId(pub i64);

/// One multiple-choice quiz question of a program's question bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub program_id: ProgramId,
    pub prompt: String,
    pub correct_answer: String,
    pub decoys: [String; 3],
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub program_id: ProgramId,
    pub prompt: String,
    pub correct_answer: String,
    pub decoys: [String; 3],
}

impl NewQuestion {
    pub(crate) fn into_question(self, id: QuestionId, created_at: DateTime<Utc>) -> Question {
        Question {
            id,
            program_id: self.program_id,
            prompt: self.prompt,
            correct_answer: self.correct_answer,
            decoys: self.decoys,
            created_at,
        }
    }
}

/// Identity and motivation supplied by the candidate. Missing fields are kept as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "nom", default)]
    pub last_name: String,
    #[serde(rename = "prenom", default)]
    pub first_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub motivation: String,
}

/// Public application form payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSubmission {
    #[serde(flatten)]
    pub candidate: Candidate,
    /// Absent when the form was posted without a program; scored against an empty bank.
    #[serde(default, alias = "filiere_id")]
    pub program_id: Option<ProgramId>,
    /// Answers aligned by position with the program's question bank.
    #[serde(default, alias = "reponses")]
    pub answers: Vec<String>,
}

/// Admission decision state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    #[serde(alias = "en_attente")]
    Pending,
    #[serde(alias = "accepte")]
    Accepted,
    #[serde(alias = "refuse")]
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

/// Stored application row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    #[serde(flatten)]
    pub candidate: Candidate,
    pub program_id: Option<ProgramId>,
    pub score: u32,
    pub status: ApplicationStatus,
    pub admin_comment: Option<String>,
    pub rejection_justification: Option<String>,
    pub decided_at: Option<DateTime<Utc>>,
    pub submitted_at: DateTime<Utc>,
}

/// Application row before the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub candidate: Candidate,
    pub program_id: Option<ProgramId>,
    pub score: u32,
    pub submitted_at: DateTime<Utc>,
}

impl NewApplication {
    pub(crate) fn into_record(self, id: ApplicationId) -> ApplicationRecord {
        ApplicationRecord {
            id,
            candidate: self.candidate,
            program_id: self.program_id,
            score: self.score,
            status: ApplicationStatus::Pending,
            admin_comment: None,
            rejection_justification: None,
            decided_at: None,
            submitted_at: self.submitted_at,
        }
    }
}

/// One candidate answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub id: ResponseId,
    pub application_id: ApplicationId,
    pub question_id: QuestionId,
    pub submitted_answer: String,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewResponse {
    pub question_id: QuestionId,
    pub submitted_answer: String,
    pub correct: bool,
}

/// Returned to the candidate once the application is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: ApplicationId,
    pub score: u32,
    pub total: u32,
}

/// Administrator decision payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRequest {
    #[serde(alias = "statut")]
    pub status: ApplicationStatus,
    #[serde(default, alias = "decision_admin")]
    pub admin_comment: Option<String>,
    #[serde(default, alias = "justification_refus")]
    pub rejection_justification: Option<String>,
}

/// Fields overwritten when a decision is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionPatch {
    pub status: ApplicationStatus,
    pub admin_comment: Option<String>,
    pub rejection_justification: Option<String>,
    pub decided_at: DateTime<Utc>,
}

/// Application joined with the name of the program applied to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationListing {
    #[serde(flatten)]
    pub application: ApplicationRecord,
    pub program_name: Option<String>,
}

/// Application together with its recorded quiz responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationDetail {
    #[serde(flatten)]
    pub application: ApplicationRecord,
    pub responses: Vec<ResponseRecord>,
}
