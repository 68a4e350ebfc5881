use clap::{Args, ValueEnum};
use school_office::error::AppError;
use school_office::store::{seed, InMemorySchoolStore};
use school_office::workflows::admissions::{
    AdmissionsService, ApplicationDetail, ApplicationStatus, ApplicationSubmission, Candidate,
    DecisionRequest,
};
use school_office::workflows::backoffice::{BackOfficeService, ProgramId};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum DemoDecision {
    /// Leave the application pending
    Pending,
    #[default]
    Accepted,
    Rejected,
}

impl From<DemoDecision> for ApplicationStatus {
    fn from(value: DemoDecision) -> Self {
        match value {
            DemoDecision::Pending => ApplicationStatus::Pending,
            DemoDecision::Accepted => ApplicationStatus::Accepted,
            DemoDecision::Rejected => ApplicationStatus::Rejected,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Program the demo candidate applies to
    #[arg(long, default_value_t = 1)]
    pub(crate) program: i64,
    /// Pipe-separated answers, in question order. Defaults to the correct answers of the web
    /// development bank.
    #[arg(long)]
    pub(crate) answers: Option<String>,
    /// Decision recorded once the application is scored
    #[arg(long, value_enum, default_value_t = DemoDecision::Accepted)]
    pub(crate) decision: DemoDecision,
    /// Optional comment stored with the decision
    #[arg(long)]
    pub(crate) comment: Option<String>,
}

pub(crate) fn split_answers(raw: &str) -> Vec<String> {
    raw.split('|').map(|answer| answer.trim().to_string()).collect()
}

/// Outcome of a demo run, printed by [`run_demo`].
#[derive(Debug)]
pub(crate) struct DemoOutcome {
    pub(crate) program_name: String,
    pub(crate) score: u32,
    pub(crate) total: u32,
    pub(crate) detail: ApplicationDetail,
}

pub(crate) fn execute_demo(args: DemoArgs) -> Result<DemoOutcome, AppError> {
    let DemoArgs {
        program,
        answers,
        decision,
        comment,
    } = args;

    let store = Arc::new(InMemorySchoolStore::new());
    seed::seed_demo_data(store.as_ref())?;
    let admissions = AdmissionsService::new(store.clone());
    let backoffice = BackOfficeService::new(store);

    let program_id = ProgramId(program);
    let program_name = backoffice.program(program_id)?.name;
    let answers = answers
        .as_deref()
        .map(split_answers)
        .unwrap_or_else(seed::web_bank_answers);

    let receipt = admissions.submit(ApplicationSubmission {
        candidate: Candidate {
            last_name: "Durand".to_string(),
            first_name: "Camille".to_string(),
            email: "camille.durand@example.com".to_string(),
            motivation: "Reconversion vers le développement".to_string(),
        },
        program_id: Some(program_id),
        answers,
    })?;

    let status = ApplicationStatus::from(decision);
    if status != ApplicationStatus::Pending {
        let rejection_justification = match status {
            ApplicationStatus::Rejected => Some("Score insuffisant".to_string()),
            _ => None,
        };
        admissions.record_decision(
            receipt.id,
            DecisionRequest {
                status,
                admin_comment: comment,
                rejection_justification,
            },
        )?;
    }

    let detail = admissions.get(receipt.id)?;
    Ok(DemoOutcome {
        program_name,
        score: receipt.score,
        total: receipt.total,
        detail,
    })
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let program = args.program;
    let outcome = execute_demo(args)?;
    let application = &outcome.detail.application;

    println!("School back-office admission demo");
    println!(
        "Candidate: {} {} <{}>",
        application.candidate.first_name,
        application.candidate.last_name,
        application.candidate.email
    );
    println!("Program: {} (id {})", outcome.program_name, program);
    println!("Score: {}/{}", outcome.score, outcome.total);

    println!("\nResponses");
    for (index, response) in outcome.detail.responses.iter().enumerate() {
        let mark = if response.correct { "correct" } else { "wrong" };
        let answer = if response.submitted_answer.is_empty() {
            "(no answer)"
        } else {
            response.submitted_answer.as_str()
        };
        println!("  {:>2}. {:<40} {}", index + 1, answer, mark);
    }

    println!("\nStatus: {}", application.status.label());
    if let Some(comment) = &application.admin_comment {
        println!("Comment: {comment}");
    }
    if let Some(justification) = &application.rejection_justification {
        println!("Justification: {justification}");
    }

    Ok(())
}
