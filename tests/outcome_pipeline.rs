// tests/outcome_pipeline.rs
//! A signup flow exercised end to end: rule accumulation, capture of a
//! std error, an authorization gate and an async tail.

use kitbag::outcome::{Error, ErrorCategory, ErrorList, Outcome};
use kitbag::strings::validate::{is_alphabetic, is_valid_email};

#[derive(Debug, Clone)]
struct SignupForm {
    username: String,
    email: String,
    age: String,
}

#[derive(Debug, PartialEq, Eq)]
struct Member {
    username: String,
    email: String,
    age: u8,
}

fn form(username: &str, email: &str, age: &str) -> SignupForm {
    SignupForm {
        username: username.to_owned(),
        email: email.to_owned(),
        age: age.to_owned(),
    }
}

fn check(passed: bool, error: Error) -> Outcome<()> {
    if passed {
        Outcome::success(())
    } else {
        Outcome::failure(error)
    }
}

fn validate(form: &SignupForm) -> Outcome<()> {
    Outcome::combine([
        check(
            is_alphabetic(&form.username),
            Error::validation("username.alphabetic", "username must contain only letters"),
        ),
        check(
            is_valid_email(&form.email),
            Error::validation("email.shape", "email address is malformed"),
        ),
    ])
}

fn admit(form: SignupForm) -> Outcome<Member> {
    validate(&form)
        .and_then(|()| Outcome::capture(|| form.age.parse::<u8>()))
        .ensure_with(
            |age| *age >= 18,
            |age| Error::authorization("age.minor", format!("members must be adults, got {age}")),
        )
        .map(|age| Member {
            username: form.username,
            email: form.email,
            age,
        })
}

async fn reserve_handle(member: Member) -> Outcome<(Member, u64)> {
    if member.username == "admin" {
        Outcome::conflict("handle.taken", "that handle is reserved")
    } else {
        Outcome::success((member, 42))
    }
}

#[test]
fn a_clean_signup_comes_back_as_a_member() {
    let outcome = admit(form("alice", "alice@example.com", "34"));
    assert_eq!(
        outcome.into_value(),
        Member {
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            age: 34,
        }
    );
}

#[test]
fn every_broken_rule_is_reported_at_once() {
    let outcome = admit(form("al1ce", "not-an-email", "34"));
    let codes: Vec<&str> = outcome.errors().iter().map(Error::code).collect();
    assert_eq!(codes, ["username.alphabetic", "email.shape"]);
    assert_eq!(outcome.category(), ErrorCategory::Validation);
}

#[test]
fn a_malformed_age_is_captured_as_unexpected() {
    let outcome = admit(form("bob", "bob@example.com", "not-a-number"));
    let primary = outcome.primary_error().unwrap();
    assert_eq!(primary.code(), "ParseIntError");
    assert_eq!(primary.category(), ErrorCategory::Unexpected);
    assert!(primary.source_ref().is_some());
}

#[test]
fn minors_are_rejected_with_an_authorization_error() {
    let outcome = admit(form("carol", "carol@example.com", "15"));
    assert_eq!(outcome.category(), ErrorCategory::Authorization);
    assert_eq!(outcome.primary_error().unwrap().code(), "age.minor");
}

#[test]
fn outcomes_convert_into_std_results_for_interop() {
    let ok: Result<Member, ErrorList> = admit(form("erin", "erin@example.com", "29")).into();
    assert!(ok.is_ok());

    let err: Result<Member, ErrorList> = admit(form("3rin", "erin@example.com", "29")).into();
    let errors = err.unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.primary().code(), "username.alphabetic");
}

#[tokio::test]
async fn the_async_tail_runs_only_on_success() {
    let admitted = admit(form("dave", "dave@example.com", "40"))
        .and_then_async(reserve_handle)
        .await;
    let (member, handle) = admitted.into_value();
    assert_eq!(member.username, "dave");
    assert_eq!(handle, 42);

    let rejected = admit(form("admin", "admin@example.com", "40"))
        .and_then_async(reserve_handle)
        .await;
    assert_eq!(rejected.category(), ErrorCategory::Conflict);
}
