//! Demo dataset loaded at startup so the dashboard and the application form have something to
//! show on a fresh process.

use chrono::NaiveDate;

use super::RepositoryError;
use crate::workflows::admissions::{AdmissionsRepository, NewQuestion};
use crate::workflows::backoffice::{
    BackOfficeRepository, CohortDraft, LearnerDraft, ProgramDraft, ProgramId, StaffDraft,
};

/// Row counts inserted by [`seed_demo_data`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub programs: usize,
    pub staff: usize,
    pub cohorts: usize,
    pub learners: usize,
    pub questions: usize,
}

const ACCESSIBILITY: &str = "Formation accessible aux personnes en situation de handicap";

const WEB_QUESTIONS: [(&str, &str, [&str; 3]); 10] = [
    (
        "Quel est le langage principal pour le développement frontend ?",
        "JavaScript",
        ["Python", "Java", "C++"],
    ),
    (
        "Que signifie HTML ?",
        "HyperText Markup Language",
        [
            "High Tech Modern Language",
            "Home Tool Markup Language",
            "Hyperlink Text Management Language",
        ],
    ),
    (
        "Quel framework est populaire pour React ?",
        "Next.js",
        ["Django", "Laravel", "Spring"],
    ),
    (
        "Que signifie CSS ?",
        "Cascading Style Sheets",
        [
            "Computer Style Sheets",
            "Creative Style Sheets",
            "Colorful Style Sheets",
        ],
    ),
    (
        "Quel est le port par défaut pour HTTP ?",
        "80",
        ["443", "8080", "3000"],
    ),
    (
        "Que signifie API ?",
        "Application Programming Interface",
        [
            "Automated Programming Interface",
            "Advanced Programming Interface",
            "Application Process Interface",
        ],
    ),
    (
        "Quel est le protocole sécurisé pour HTTP ?",
        "HTTPS",
        ["FTPS", "SFTP", "SSH"],
    ),
    (
        "Que signifie DOM ?",
        "Document Object Model",
        [
            "Data Object Model",
            "Dynamic Object Model",
            "Document Oriented Model",
        ],
    ),
    (
        "Quel est le langage backend le plus utilisé avec JavaScript ?",
        "Node.js",
        ["PHP", "Python", "Ruby"],
    ),
    (
        "Que signifie JSON ?",
        "JavaScript Object Notation",
        [
            "Java Standard Object Notation",
            "JavaScript Oriented Notation",
            "Java Script Object Network",
        ],
    ),
];

/// Correct answers of the web development question bank, in bank order.
pub fn web_bank_answers() -> Vec<String> {
    WEB_QUESTIONS
        .iter()
        .map(|(_, correct, _)| correct.to_string())
        .collect()
}

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn program(
    name: &str,
    description: &str,
    objectives: &str,
    curriculum: &str,
    delivery_modes: &str,
) -> ProgramDraft {
    ProgramDraft {
        name: name.to_string(),
        description: Some(description.to_string()),
        objectives: Some(objectives.to_string()),
        curriculum: Some(curriculum.to_string()),
        delivery_modes: Some(delivery_modes.to_string()),
        accessibility: Some(ACCESSIBILITY.to_string()),
        image: None,
    }
}

fn staff(
    last: &str,
    first: &str,
    email: &str,
    role: &str,
    experience: &str,
    certs: &str,
) -> StaffDraft {
    StaffDraft {
        last_name: last.to_string(),
        first_name: first.to_string(),
        email: email.to_string(),
        role: Some(role.to_string()),
        cv: None,
        experience: Some(experience.to_string()),
        certifications: Some(certs.to_string()),
    }
}

fn learner(last: &str, first: &str, email: &str, phone: &str) -> LearnerDraft {
    LearnerDraft {
        last_name: last.to_string(),
        first_name: first.to_string(),
        email: email.to_string(),
        phone: Some(phone.to_string()),
        ..LearnerDraft::default()
    }
}

/// Insert the demo catalog: three programs with their referents and cohorts, five learners and
/// the ten-question web development bank.
pub fn seed_demo_data<S>(store: &S) -> Result<SeedSummary, RepositoryError>
where
    S: AdmissionsRepository + BackOfficeRepository,
{
    let programs = [
        program(
            "Développement Web",
            "Formation complète en développement web moderne",
            "Maîtriser les technologies web actuelles",
            "HTML, CSS, JavaScript, React, Node.js",
            "Présentiel et distanciel",
        ),
        program(
            "Data Science",
            "Formation en science des données et intelligence artificielle",
            "Analyser et interpréter les données",
            "Python, SQL, Machine Learning, Statistics",
            "Présentiel",
        ),
        program(
            "Cybersécurité",
            "Formation en sécurité informatique",
            "Protéger les systèmes informatiques",
            "Réseaux, Cryptographie, Ethical Hacking",
            "Présentiel",
        ),
    ];
    let program_ids = programs
        .into_iter()
        .map(|draft| store.insert_program(draft))
        .collect::<Result<Vec<ProgramId>, _>>()?;

    let referents = [
        staff(
            "Martin",
            "Jean",
            "j.martin@ecole.fr",
            "Formateur",
            "10 ans d'expérience en développement",
            "Certifié AWS Solutions Architect",
        ),
        staff(
            "Dubois",
            "Marie",
            "m.dubois@ecole.fr",
            "Formatrice",
            "8 ans d'expérience en data science",
            "Certifiée Google Cloud Professional",
        ),
        staff(
            "Leroy",
            "Pierre",
            "p.leroy@ecole.fr",
            "Formateur",
            "12 ans d'expérience en cybersécurité",
            "Certifié CISSP",
        ),
    ];
    let staff_ids = referents
        .into_iter()
        .map(|draft| store.insert_staff(draft))
        .collect::<Result<Vec<_>, _>>()?;

    let schedules = [
        (
            "Promo Dev Web 2024",
            date(2024, 1, 15),
            date(2024, 12, 15),
            "Former des développeurs web compétents",
        ),
        (
            "Promo Data Science 2024",
            date(2024, 2, 1),
            date(2024, 12, 1),
            "Former des data scientists expérimentés",
        ),
        (
            "Promo Cybersécurité 2024",
            date(2024, 3, 1),
            date(2024, 12, 20),
            "Former des experts en sécurité informatique",
        ),
    ];
    let mut cohort_ids = Vec::with_capacity(schedules.len());
    for (index, (name, start_date, end_date, objectives)) in schedules.into_iter().enumerate() {
        let id = store.insert_cohort(CohortDraft {
            name: name.to_string(),
            referent_id: staff_ids.get(index).copied(),
            start_date,
            end_date,
            internship_required: true,
            program_id: program_ids.get(index).copied(),
            objectives: Some(objectives.to_string()),
            ..CohortDraft::default()
        })?;
        cohort_ids.push(id);
    }

    let enrolments = [
        (learner("Dupont", "Alice", "alice.dupont@email.com", "0123456789"), 0),
        (learner("Bernard", "Bob", "bob.bernard@email.com", "0123456790"), 0),
        (
            learner("Charre", "Charlie", "charlie.charre@email.com", "0123456791"),
            1,
        ),
        (learner("Durand", "David", "david.durand@email.com", "0123456792"), 1),
        (learner("Moreau", "Eve", "eve.moreau@email.com", "0123456793"), 2),
    ];
    let learners = enrolments.len();
    for (mut draft, cohort) in enrolments {
        draft.cohort_id = cohort_ids.get(cohort).copied();
        store.insert_learner(draft)?;
    }

    let web = program_ids.first().copied().unwrap_or(ProgramId(1));
    for (prompt, correct, decoys) in WEB_QUESTIONS {
        store.insert_question(NewQuestion {
            program_id: web,
            prompt: prompt.to_string(),
            correct_answer: correct.to_string(),
            decoys: decoys.map(str::to_string),
        })?;
    }

    Ok(SeedSummary {
        programs: program_ids.len(),
        staff: staff_ids.len(),
        cohorts: cohort_ids.len(),
        learners,
        questions: WEB_QUESTIONS.len(),
    })
}
