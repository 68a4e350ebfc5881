use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use super::RepositoryError;
use crate::workflows::admissions::{
    AdmissionsRepository, ApplicationId, ApplicationListing, ApplicationRecord, ApplicationStatus,
    DecisionPatch, NewApplication, NewQuestion, NewResponse, Question, QuestionId, ResponseId,
    ResponseRecord,
};
use crate::workflows::backoffice::{
    BackOfficeRepository, Cohort, CohortDraft, CohortId, CohortListing, Comment, CommentDraft,
    CommentId, DashboardStats, Learner, LearnerDraft, LearnerId, LearnerListing, Program,
    ProgramDraft, ProgramId, Removal, StaffDraft, StaffId, StaffMember,
};

/// Auto-increment counters, one per table. Ids are never reused.
#[derive(Debug, Default)]
struct Sequences {
    programs: i64,
    cohorts: i64,
    learners: i64,
    staff: i64,
    comments: i64,
    questions: i64,
    applications: i64,
    responses: i64,
}

fn next(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

/// Rows are kept in insertion order.
#[derive(Debug, Default)]
struct Tables {
    sequences: Sequences,
    programs: Vec<Program>,
    cohorts: Vec<Cohort>,
    learners: Vec<Learner>,
    staff: Vec<StaffMember>,
    comments: Vec<Comment>,
    questions: Vec<Question>,
    applications: Vec<ApplicationRecord>,
    responses: Vec<ResponseRecord>,
}

impl Tables {
    fn program_name(&self, id: Option<ProgramId>) -> Option<String> {
        let id = id?;
        self.programs
            .iter()
            .find(|program| program.id == id)
            .map(|program| program.name.clone())
    }
}

/// Sort newest first; rows created within the same instant fall back to descending id.
fn newest_first<T, K: Ord>(rows: &mut [T], key: impl Fn(&T) -> (DateTime<Utc>, K)) {
    rows.sort_by(|a, b| key(b).cmp(&key(a)));
}

/// Process-wide store shared by every workflow service.
#[derive(Debug, Default, Clone)]
pub struct InMemorySchoolStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemorySchoolStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, RepositoryError> {
        self.tables
            .lock()
            .map_err(|_| RepositoryError::Unavailable("store mutex poisoned".to_string()))
    }
}

impl AdmissionsRepository for InMemorySchoolStore {
    fn questions_for_program(&self, program: ProgramId) -> Result<Vec<Question>, RepositoryError> {
        let tables = self.lock()?;
        Ok(tables
            .questions
            .iter()
            .filter(|question| question.program_id == program)
            .cloned()
            .collect())
    }

    fn insert_question(&self, question: NewQuestion) -> Result<QuestionId, RepositoryError> {
        let mut tables = self.lock()?;
        let id = QuestionId(next(&mut tables.sequences.questions));
        tables.questions.push(question.into_question(id, Utc::now()));
        Ok(id)
    }

    fn insert_application(
        &self,
        application: NewApplication,
        responses: Vec<NewResponse>,
    ) -> Result<ApplicationId, RepositoryError> {
        let mut tables = self.lock()?;

        // Validate every row before touching any table so a failure leaves nothing behind.
        for response in &responses {
            if !tables
                .questions
                .iter()
                .any(|question| question.id == response.question_id)
            {
                return Err(RepositoryError::Constraint(format!(
                    "response references unknown question {}",
                    response.question_id.0
                )));
            }
        }

        let id = ApplicationId(next(&mut tables.sequences.applications));
        tables.applications.push(application.into_record(id));
        for response in responses {
            let response_id = ResponseId(next(&mut tables.sequences.responses));
            tables.responses.push(ResponseRecord {
                id: response_id,
                application_id: id,
                question_id: response.question_id,
                submitted_answer: response.submitted_answer,
                correct: response.correct,
            });
        }

        Ok(id)
    }

    fn record_decision(
        &self,
        id: ApplicationId,
        patch: DecisionPatch,
    ) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        let record = tables
            .applications
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(RepositoryError::NotFound)?;

        record.status = patch.status;
        record.admin_comment = patch.admin_comment;
        record.rejection_justification = patch.rejection_justification;
        record.decided_at = Some(patch.decided_at);
        Ok(())
    }

    fn fetch_application(
        &self,
        id: ApplicationId,
    ) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let tables = self.lock()?;
        Ok(tables
            .applications
            .iter()
            .find(|record| record.id == id)
            .cloned())
    }

    fn responses_for(&self, id: ApplicationId) -> Result<Vec<ResponseRecord>, RepositoryError> {
        let tables = self.lock()?;
        Ok(tables
            .responses
            .iter()
            .filter(|response| response.application_id == id)
            .cloned()
            .collect())
    }

    fn applications(&self) -> Result<Vec<ApplicationListing>, RepositoryError> {
        let tables = self.lock()?;
        let mut listings: Vec<ApplicationListing> = tables
            .applications
            .iter()
            .map(|record| ApplicationListing {
                program_name: tables.program_name(record.program_id),
                application: record.clone(),
            })
            .collect();
        newest_first(&mut listings, |listing| {
            (listing.application.submitted_at, listing.application.id)
        });
        Ok(listings)
    }
}

impl BackOfficeRepository for InMemorySchoolStore {
    fn programs(&self) -> Result<Vec<Program>, RepositoryError> {
        let tables = self.lock()?;
        let mut programs = tables.programs.clone();
        newest_first(&mut programs, |program| (program.created_at, program.id));
        Ok(programs)
    }

    fn fetch_program(&self, id: ProgramId) -> Result<Option<Program>, RepositoryError> {
        let tables = self.lock()?;
        Ok(tables.programs.iter().find(|program| program.id == id).cloned())
    }

    fn insert_program(&self, draft: ProgramDraft) -> Result<ProgramId, RepositoryError> {
        let mut tables = self.lock()?;
        let id = ProgramId(next(&mut tables.sequences.programs));
        tables.programs.push(draft.into_program(id, Utc::now()));
        Ok(id)
    }

    fn update_program(&self, id: ProgramId, draft: ProgramDraft) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        let program = tables
            .programs
            .iter_mut()
            .find(|program| program.id == id)
            .ok_or(RepositoryError::NotFound)?;
        *program = draft.into_program(id, program.created_at);
        Ok(())
    }

    fn delete_program(&self, id: ProgramId) -> Result<Removal<Program>, RepositoryError> {
        let mut tables = self.lock()?;
        let position = tables
            .programs
            .iter()
            .position(|program| program.id == id)
            .ok_or(RepositoryError::NotFound)?;

        let questions = tables
            .questions
            .iter()
            .filter(|question| question.program_id == id)
            .count();
        if questions > 0 {
            return Ok(Removal::Referenced(questions));
        }

        let removed = tables.programs.remove(position);
        for cohort in tables
            .cohorts
            .iter_mut()
            .filter(|cohort| cohort.program_id == Some(id))
        {
            cohort.program_id = None;
        }
        Ok(Removal::Removed(removed))
    }

    fn cohorts(&self) -> Result<Vec<CohortListing>, RepositoryError> {
        let tables = self.lock()?;
        let mut listings: Vec<CohortListing> = tables
            .cohorts
            .iter()
            .map(|cohort| {
                let referent = cohort
                    .referent_id
                    .and_then(|id| tables.staff.iter().find(|member| member.id == id));
                CohortListing {
                    program_name: tables.program_name(cohort.program_id),
                    referent_last_name: referent.map(|member| member.last_name.clone()),
                    referent_first_name: referent.map(|member| member.first_name.clone()),
                    cohort: cohort.clone(),
                }
            })
            .collect();
        newest_first(&mut listings, |listing| {
            (listing.cohort.created_at, listing.cohort.id)
        });
        Ok(listings)
    }

    fn insert_cohort(&self, draft: CohortDraft) -> Result<CohortId, RepositoryError> {
        let mut tables = self.lock()?;
        let id = CohortId(next(&mut tables.sequences.cohorts));
        tables.cohorts.push(draft.into_cohort(id, Utc::now()));
        Ok(id)
    }

    fn update_cohort(&self, id: CohortId, draft: CohortDraft) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        let cohort = tables
            .cohorts
            .iter_mut()
            .find(|cohort| cohort.id == id)
            .ok_or(RepositoryError::NotFound)?;
        *cohort = draft.into_cohort(id, cohort.created_at);
        Ok(())
    }

    fn delete_cohort(&self, id: CohortId) -> Result<Cohort, RepositoryError> {
        let mut tables = self.lock()?;
        let position = tables
            .cohorts
            .iter()
            .position(|cohort| cohort.id == id)
            .ok_or(RepositoryError::NotFound)?;
        let removed = tables.cohorts.remove(position);
        for learner in tables
            .learners
            .iter_mut()
            .filter(|learner| learner.cohort_id == Some(id))
        {
            learner.cohort_id = None;
        }
        Ok(removed)
    }

    fn learners(&self) -> Result<Vec<LearnerListing>, RepositoryError> {
        let tables = self.lock()?;
        let mut listings: Vec<LearnerListing> = tables
            .learners
            .iter()
            .map(|learner| {
                let cohort = learner
                    .cohort_id
                    .and_then(|id| tables.cohorts.iter().find(|cohort| cohort.id == id));
                LearnerListing {
                    cohort_name: cohort.map(|cohort| cohort.name.clone()),
                    program_name: tables.program_name(cohort.and_then(|c| c.program_id)),
                    learner: learner.clone(),
                }
            })
            .collect();
        newest_first(&mut listings, |listing| {
            (listing.learner.created_at, listing.learner.id)
        });
        Ok(listings)
    }

    fn insert_learner(&self, draft: LearnerDraft) -> Result<LearnerId, RepositoryError> {
        let mut tables = self.lock()?;
        let id = LearnerId(next(&mut tables.sequences.learners));
        tables.learners.push(draft.into_learner(id, Utc::now()));
        Ok(id)
    }

    fn update_learner(&self, id: LearnerId, draft: LearnerDraft) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        let learner = tables
            .learners
            .iter_mut()
            .find(|learner| learner.id == id)
            .ok_or(RepositoryError::NotFound)?;
        *learner = draft.into_learner(id, learner.created_at);
        Ok(())
    }

    fn delete_learner(&self, id: LearnerId) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        let position = tables
            .learners
            .iter()
            .position(|learner| learner.id == id)
            .ok_or(RepositoryError::NotFound)?;
        tables.learners.remove(position);
        tables.comments.retain(|comment| comment.learner_id != id);
        Ok(())
    }

    fn staff(&self) -> Result<Vec<StaffMember>, RepositoryError> {
        let tables = self.lock()?;
        let mut staff = tables.staff.clone();
        newest_first(&mut staff, |member| (member.created_at, member.id));
        Ok(staff)
    }

    fn insert_staff(&self, draft: StaffDraft) -> Result<StaffId, RepositoryError> {
        let mut tables = self.lock()?;
        let id = StaffId(next(&mut tables.sequences.staff));
        tables.staff.push(draft.into_member(id, Utc::now()));
        Ok(id)
    }

    fn update_staff(&self, id: StaffId, draft: StaffDraft) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        let member = tables
            .staff
            .iter_mut()
            .find(|member| member.id == id)
            .ok_or(RepositoryError::NotFound)?;
        *member = draft.into_member(id, member.created_at);
        Ok(())
    }

    fn delete_staff(&self, id: StaffId) -> Result<Removal<StaffMember>, RepositoryError> {
        let mut tables = self.lock()?;
        let position = tables
            .staff
            .iter()
            .position(|member| member.id == id)
            .ok_or(RepositoryError::NotFound)?;

        let cohorts = tables
            .cohorts
            .iter()
            .filter(|cohort| cohort.referent_id == Some(id))
            .count();
        if cohorts > 0 {
            return Ok(Removal::Referenced(cohorts));
        }

        Ok(Removal::Removed(tables.staff.remove(position)))
    }

    fn comments_for(&self, learner: LearnerId) -> Result<Vec<Comment>, RepositoryError> {
        let tables = self.lock()?;
        let mut comments: Vec<Comment> = tables
            .comments
            .iter()
            .filter(|comment| comment.learner_id == learner)
            .cloned()
            .collect();
        newest_first(&mut comments, |comment| (comment.created_at, comment.id));
        Ok(comments)
    }

    fn insert_comment(&self, draft: CommentDraft) -> Result<CommentId, RepositoryError> {
        let mut tables = self.lock()?;
        if !tables
            .learners
            .iter()
            .any(|learner| learner.id == draft.learner_id)
        {
            return Err(RepositoryError::Constraint(format!(
                "comment references unknown learner {}",
                draft.learner_id
            )));
        }
        let id = CommentId(next(&mut tables.sequences.comments));
        tables.comments.push(draft.into_comment(id, Utc::now()));
        Ok(id)
    }

    fn stats(&self) -> Result<DashboardStats, RepositoryError> {
        let tables = self.lock()?;
        Ok(DashboardStats {
            programs: tables.programs.len(),
            cohorts: tables.cohorts.len(),
            learners: tables.learners.len(),
            pending_applications: tables
                .applications
                .iter()
                .filter(|record| record.status == ApplicationStatus::Pending)
                .count(),
        })
    }
}
