use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

row_id!(
    /// Identifier of a training program (filière).
    ProgramId
);
row_id!(
    /// Identifier of a scheduled cohort (promotion).
    CohortId
);
row_id!(LearnerId);
row_id!(StaffId);
row_id!(CommentId);

/// A named training track with its own question bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: ProgramId,
    pub name: String,
    pub description: Option<String>,
    pub objectives: Option<String>,
    pub curriculum: Option<String>,
    pub delivery_modes: Option<String>,
    pub accessibility: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Editable program fields; used both for creation and full overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub objectives: Option<String>,
    #[serde(default)]
    pub curriculum: Option<String>,
    #[serde(default)]
    pub delivery_modes: Option<String>,
    #[serde(default)]
    pub accessibility: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl ProgramDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub(crate) fn into_program(self, id: ProgramId, created_at: DateTime<Utc>) -> Program {
        Program {
            id,
            name: self.name,
            description: self.description,
            objectives: self.objectives,
            curriculum: self.curriculum,
            delivery_modes: self.delivery_modes,
            accessibility: self.accessibility,
            image: self.image,
            created_at,
        }
    }
}

/// A scheduled instance of a program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cohort {
    pub id: CohortId,
    pub name: String,
    pub photo: Option<String>,
    pub referent_id: Option<StaffId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub exam_start_date: Option<NaiveDate>,
    pub exam_end_date: Option<NaiveDate>,
    pub internship_required: bool,
    pub program_id: Option<ProgramId>,
    pub objectives: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortDraft {
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub referent_id: Option<StaffId>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub exam_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub exam_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub internship_required: bool,
    #[serde(default)]
    pub program_id: Option<ProgramId>,
    #[serde(default)]
    pub objectives: Option<String>,
}

impl CohortDraft {
    pub(crate) fn into_cohort(self, id: CohortId, created_at: DateTime<Utc>) -> Cohort {
        Cohort {
            id,
            name: self.name,
            photo: self.photo,
            referent_id: self.referent_id,
            start_date: self.start_date,
            end_date: self.end_date,
            exam_start_date: self.exam_start_date,
            exam_end_date: self.exam_end_date,
            internship_required: self.internship_required,
            program_id: self.program_id,
            objectives: self.objectives,
            created_at,
        }
    }
}

/// Cohort row joined with its program and referent names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CohortListing {
    #[serde(flatten)]
    pub cohort: Cohort,
    pub program_name: Option<String>,
    pub referent_last_name: Option<String>,
    pub referent_first_name: Option<String>,
}

/// Progress of a learner through their cohort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearnerStatus {
    #[default]
    #[serde(alias = "inscrit")]
    Enrolled,
    #[serde(alias = "en_cours")]
    InProgress,
    #[serde(alias = "termine")]
    Completed,
    #[serde(alias = "abandonne")]
    Dropped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Learner {
    pub id: LearnerId,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: LearnerStatus,
    pub cohort_id: Option<CohortId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerDraft {
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: LearnerStatus,
    #[serde(default)]
    pub cohort_id: Option<CohortId>,
}

impl LearnerDraft {
    pub(crate) fn into_learner(self, id: LearnerId, created_at: DateTime<Utc>) -> Learner {
        Learner {
            id,
            last_name: self.last_name,
            first_name: self.first_name,
            email: self.email,
            phone: self.phone,
            status: self.status,
            cohort_id: self.cohort_id,
            created_at,
        }
    }
}

/// Learner row joined with the cohort and program it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearnerListing {
    #[serde(flatten)]
    pub learner: Learner,
    pub cohort_name: Option<String>,
    pub program_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: StaffId,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub role: Option<String>,
    pub cv: Option<String>,
    pub experience: Option<String>,
    pub certifications: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffDraft {
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub cv: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub certifications: Option<String>,
}

impl StaffDraft {
    pub(crate) fn into_member(self, id: StaffId, created_at: DateTime<Utc>) -> StaffMember {
        StaffMember {
            id,
            last_name: self.last_name,
            first_name: self.first_name,
            email: self.email,
            role: self.role,
            cv: self.cv,
            experience: self.experience,
            certifications: self.certifications,
            created_at,
        }
    }
}

/// Category of a follow-up note attached to a learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentKind {
    #[serde(alias = "suivi")]
    FollowUp,
    #[serde(alias = "retard")]
    Late,
    Absence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub learner_id: LearnerId,
    pub kind: CommentKind,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDraft {
    pub learner_id: LearnerId,
    pub kind: CommentKind,
    pub content: String,
}

impl CommentDraft {
    pub(crate) fn into_comment(self, id: CommentId, created_at: DateTime<Utc>) -> Comment {
        Comment {
            id,
            learner_id: self.learner_id,
            kind: self.kind,
            content: self.content,
            created_at,
        }
    }
}

/// Outcome of a guarded delete: either the removed row, or how many rows still reference it
/// (in which case nothing was removed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal<T> {
    Removed(T),
    Referenced(usize),
}

/// Headline counters shown on the dashboard and landing page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub programs: usize,
    pub cohorts: usize,
    pub learners: usize,
    pub pending_applications: usize,
}
