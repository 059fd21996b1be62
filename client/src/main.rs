//! # LMS Client CLI
//!
//! Command-line front end for the student client.
//!
//! ## Usage
//!
//! ```bash
//! lms-client login <email> <password>
//! lms-client signup <name> <email> <password>
//! lms-client me
//! lms-client logout
//! lms-client courses [active|completed|all]
//! lms-client course <course_id>
//! lms-client notifications
//! lms-client calendar [days]
//! lms-client submit <assignment_id> <file>... [--comment <text>]
//! ```
//!
//! Results are printed to stdout as JSON. When the backend could not be
//! reached and fixture data is shown instead, a note goes to stderr.

use anyhow::{anyhow, bail, Context};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde_json::json;

use lms_client::app::{load_course_page, notification_badge, submit_login, submit_signup, LoginForm, SignupForm};
use lms_client::config::ClientConfig;
use lms_client::services::api::{SubmissionDraft, UploadFile};
use lms_client::session::{FileSessionStore, Session};
use lms_client::{debug, ApiClient, AppError, LmsService, Outcome};
use shared::CourseStatusFilter;

const USAGE: &str = "usage: lms-client <login|signup|me|logout|courses|course|notifications|calendar|submit> [args]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let _log_guard = debug::init_logger();

    let config = ClientConfig::from_env()?;
    config.validate()?;
    tracing::info!(api_url = %config.api_url, "Starting LMS client");

    let session = Session::new(FileSessionStore::open(&config.session_file));
    let api = ApiClient::from_config(&config, session);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        bail!(USAGE);
    };

    match command.as_str() {
        "login" => {
            let [email, password] = rest else {
                bail!("usage: lms-client login <email> <password>");
            };
            let outcome = submit_login(&api, &LoginForm::new(email.as_str(), password.as_str()))
                .await
                .map_err(report_validation)?;
            print_outcome(&outcome.map(|session| session.user))?;
        }
        "signup" => {
            let [name, email, password] = rest else {
                bail!("usage: lms-client signup <name> <email> <password>");
            };
            let form = SignupForm {
                name: name.clone(),
                email: email.clone(),
                password: password.clone(),
                confirm_password: password.clone(),
            };
            let outcome = submit_signup(&api, &form).await.map_err(report_validation)?;
            print_outcome(&outcome.map(|session| session.user))?;
        }
        "me" => print_outcome(&api.me().await)?,
        "logout" => {
            api.logout();
            println!("Signed out");
        }
        "courses" => {
            let status = rest
                .first()
                .map(|raw| raw.parse::<CourseStatusFilter>())
                .transpose()
                .map_err(|e| anyhow!(e))?;
            print_outcome(&api.get_student_courses(status).await)?;
        }
        "course" => {
            let [course_id] = rest else {
                bail!("usage: lms-client course <course_id>");
            };
            let page = load_course_page(&api, course_id).await;
            if page.is_degraded() {
                eprintln!("note: parts of this course page are offline data");
            }
            print_json(&json!({
                "overview": page.overview.data(),
                "materials": page.materials.data(),
                "assignments": page.assignments.data(),
                "tests": page.tests.data(),
                "grades": page.grades.data(),
            }))?;
        }
        "notifications" => {
            let outcome = api.get_notifications().await;
            if let Some(badge) = notification_badge(outcome.data()) {
                eprintln!("unread: {}", badge);
            }
            print_outcome(&outcome)?;
        }
        "calendar" => {
            let (from, to) = calendar_range(lib_utils::now_utc(), rest.first().map(String::as_str))?;
            print_outcome(&api.get_calendar(from, to).await)?;
        }
        "submit" => {
            let (assignment_id, draft) = parse_submission(rest)?;
            print_outcome(&api.create_assignment_submission(assignment_id, &draft).await)?;
        }
        other => bail!("unknown command '{}'\n{}", other, USAGE),
    }

    Ok(())
}

const DEFAULT_CALENDAR_DAYS: i64 = 7;

/// `[days]` from `from`; days default to a week and may be negative.
fn calendar_range(from: DateTime<Utc>, days: Option<&str>) -> anyhow::Result<(DateTime<Utc>, DateTime<Utc>)> {
    let days: i64 = match days {
        Some(raw) => raw.parse().context("days must be a whole number")?,
        None => DEFAULT_CALENDAR_DAYS,
    };
    let to = Duration::try_days(days)
        .and_then(|span| from.checked_add_signed(span))
        .ok_or_else(|| anyhow!("days out of range: {}", days))?;
    Ok((from, to))
}

/// `<assignment_id> <file>... [--comment <text>]`
fn parse_submission(args: &[String]) -> anyhow::Result<(&str, SubmissionDraft)> {
    let Some((assignment_id, rest)) = args.split_first() else {
        bail!("usage: lms-client submit <assignment_id> <file>... [--comment <text>]");
    };

    let mut files = Vec::new();
    let mut comment = None;
    let mut iter = rest.iter();
    while let Some(arg) = iter.next() {
        if arg == "--comment" {
            comment = Some(iter.next().context("--comment needs a value")?.clone());
        } else {
            files.push(UploadFile::from_path(arg)?);
        }
    }

    let mut draft = SubmissionDraft::new(files);
    if let Some(comment) = comment {
        draft = draft.with_comment(comment);
    }
    Ok((assignment_id.as_str(), draft))
}

fn report_validation(err: AppError) -> anyhow::Error {
    match err {
        AppError::Validation(errors) => {
            for (field, message) in errors.iter() {
                eprintln!("{}: {}", field, message);
            }
            anyhow!("invalid input")
        }
        other => other.into(),
    }
}

fn print_outcome<T: Serialize>(outcome: &Outcome<T>) -> anyhow::Result<()> {
    if let Some(cause) = outcome.cause() {
        eprintln!("note: backend unavailable ({}), showing offline data", cause);
    }
    print_json(outcome.data())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> DateTime<Utc> {
        lib_utils::parse_utc("2025-03-01T10:00:00Z").unwrap()
    }

    #[test]
    fn test_calendar_range_defaults_to_a_week() {
        let (from, to) = calendar_range(start(), None).unwrap();
        assert_eq!(to - from, Duration::days(7));
    }

    #[test]
    fn test_calendar_range_parses_days() {
        let (_, to) = calendar_range(start(), Some("30")).unwrap();
        assert_eq!(to, start() + Duration::days(30));

        let (_, back) = calendar_range(start(), Some("-2")).unwrap();
        assert_eq!(back, start() - Duration::days(2));
    }

    #[test]
    fn test_calendar_range_rejects_huge_or_malformed_days() {
        // Overflows the date range without overflowing i64
        assert!(calendar_range(start(), Some("100000000")).is_err());
        assert!(calendar_range(start(), Some(&i64::MAX.to_string())).is_err());
        assert!(calendar_range(start(), Some("soon")).is_err());
    }
}
