//! Back-office scenarios over a seeded store: the dashboard view of the catalog and the effect
//! of admissions on the headline counters.

use std::sync::Arc;

use school_office::store::seed::{seed_demo_data, web_bank_answers};
use school_office::store::InMemorySchoolStore;
use school_office::workflows::admissions::{
    AdmissionsService, ApplicationStatus, ApplicationSubmission, Candidate, DecisionRequest,
};
use school_office::workflows::backoffice::{
    BackOfficeError, BackOfficeService, CommentDraft, CommentKind, LearnerId, ProgramId, StaffId,
};

fn seeded() -> (
    AdmissionsService<InMemorySchoolStore>,
    BackOfficeService<InMemorySchoolStore>,
) {
    let store = Arc::new(InMemorySchoolStore::new());
    seed_demo_data(store.as_ref()).expect("seed succeeds");
    (
        AdmissionsService::new(store.clone()),
        BackOfficeService::new(store),
    )
}

#[test]
fn pending_counter_follows_admissions() {
    let (admissions, backoffice) = seeded();
    assert_eq!(backoffice.stats().expect("stats").pending_applications, 0);

    let receipt = admissions
        .submit(ApplicationSubmission {
            candidate: Candidate::default(),
            program_id: Some(ProgramId(1)),
            answers: web_bank_answers(),
        })
        .expect("recorded");
    assert_eq!((receipt.score, receipt.total), (10, 10));
    assert_eq!(backoffice.stats().expect("stats").pending_applications, 1);

    admissions
        .record_decision(
            receipt.id,
            DecisionRequest {
                status: ApplicationStatus::Accepted,
                admin_comment: None,
                rejection_justification: None,
            },
        )
        .expect("decided");
    assert_eq!(backoffice.stats().expect("stats").pending_applications, 0);

    let listing = admissions.list().expect("listing");
    assert_eq!(listing[0].program_name.as_deref(), Some("Développement Web"));
}

#[test]
fn programs_without_questions_score_out_of_zero() {
    let (admissions, _) = seeded();
    let receipt = admissions
        .submit(ApplicationSubmission {
            candidate: Candidate::default(),
            program_id: Some(ProgramId(3)),
            answers: vec!["anything".to_string()],
        })
        .expect("recorded");

    assert_eq!((receipt.score, receipt.total), (0, 0));
    assert!(admissions
        .get(receipt.id)
        .expect("present")
        .responses
        .is_empty());
}

#[test]
fn seeded_referents_cannot_be_deleted() {
    let (_, backoffice) = seeded();
    match backoffice.delete_staff(StaffId(1)) {
        Err(BackOfficeError::ReferentInUse { cohorts, .. }) => assert_eq!(cohorts, 1),
        other => panic!("expected referent guard, got {other:?}"),
    }
    assert_eq!(backoffice.staff().expect("staff").len(), 3);
}

#[test]
fn learner_follow_up_is_listed_newest_first() {
    let (_, backoffice) = seeded();
    let learner = LearnerId(1);
    for (kind, content) in [
        (CommentKind::Absence, "Absent lundi"),
        (CommentKind::FollowUp, "Entretien de suivi"),
    ] {
        backoffice
            .add_comment(CommentDraft {
                learner_id: learner,
                kind,
                content: content.to_string(),
            })
            .expect("comment stored");
    }

    let comments = backoffice.comments(learner).expect("comments");
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].content, "Entretien de suivi");

    backoffice.delete_learner(learner).expect("deleted");
    assert!(backoffice.comments(learner).expect("comments").is_empty());
}
