//! End-to-end form sessions driven through transitions.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use formedible_form::{FormCallbacks, FormEngine, FormError, Transition};
use formedible_validator::{
    FieldConfig, FieldErrors, FieldGroup, FieldRules, FieldStatus, FieldValue, NamedFieldConfig,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn signup_rules() -> FieldRules {
    FieldRules::new()
        .with("email", FieldConfig::new().required().email())
        .with("password", FieldConfig::new().required().min_length(8))
        .with("confirm", FieldConfig::new().required().equal_to("password"))
}

async fn fill(form: &mut FormEngine, field: &str, value: &str) {
    form.dispatch(Transition::Change {
        field: field.into(),
        value: value.into(),
    })
    .await
    .unwrap();
}

#[derive(Default)]
struct Counts {
    start: AtomicUsize,
    success: AtomicUsize,
    error: AtomicUsize,
}

fn counting(counts: &Arc<Counts>) -> FormCallbacks {
    let start = Arc::clone(counts);
    let success = Arc::clone(counts);
    let error = Arc::clone(counts);
    FormCallbacks::new()
        .on_validate_start(move || {
            start.start.fetch_add(1, Ordering::SeqCst);
        })
        .on_validate_success(move || {
            success.success.fetch_add(1, Ordering::SeqCst);
        })
        .on_validate_error(move |_: &FieldErrors| {
            error.error.fetch_add(1, Ordering::SeqCst);
        })
}

#[tokio::test]
async fn submit_valid_form_reports_success_once() {
    let counts = Arc::new(Counts::default());
    let mut form = FormEngine::new(signup_rules()).with_observer(counting(&counts));

    fill(&mut form, "email", "ada@example.com").await;
    fill(&mut form, "password", "correct horse").await;
    fill(&mut form, "confirm", "correct horse").await;
    form.dispatch(Transition::Submit).await.unwrap();

    assert!(form.state().submitted);
    assert!(!form.state().errors.has_errors());
    assert_eq!(form.state().errors.len(), 3);
    assert_eq!(counts.start.load(Ordering::SeqCst), 1);
    assert_eq!(counts.success.load(Ordering::SeqCst), 1);
    assert_eq!(counts.error.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn submit_invalid_form_reports_errors() {
    let counts = Arc::new(Counts::default());
    let mut form = FormEngine::new(signup_rules()).with_observer(counting(&counts));

    fill(&mut form, "email", "not-an-email").await;
    fill(&mut form, "password", "short").await;
    form.dispatch(Transition::Submit).await.unwrap();

    let errors = &form.state().errors;
    assert_eq!(errors.message("email"), Some("Invalid email format"));
    assert_eq!(errors.message("password"), Some("Minimum length is 8"));
    assert_eq!(errors.message("confirm"), Some("This field is required"));
    assert_eq!(counts.error.load(Ordering::SeqCst), 1);
    assert_eq!(counts.success.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn fixing_a_field_after_submit_revalidates_the_form() {
    let counts = Arc::new(Counts::default());
    let mut form = FormEngine::new(signup_rules()).with_observer(counting(&counts));

    fill(&mut form, "email", "ada@example.com").await;
    fill(&mut form, "password", "correct horse").await;
    fill(&mut form, "confirm", "correct hose").await;
    form.dispatch(Transition::Submit).await.unwrap();
    assert_eq!(
        form.state().errors.message("confirm"),
        Some("This field must match with password")
    );

    fill(&mut form, "confirm", "correct horse").await;
    assert_eq!(form.state().status("confirm"), &FieldStatus::Valid);
    assert_eq!(counts.start.load(Ordering::SeqCst), 2);
    assert_eq!(counts.success.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn blur_marks_touched_without_validating() {
    let mut form = FormEngine::new(signup_rules());
    form.dispatch(Transition::Blur {
        field: "email".into(),
    })
    .await
    .unwrap();

    assert!(form.state().is_blurred("email"));
    assert!(!form.state().is_blurred("password"));
    assert!(form.state().errors.is_empty());
}

#[tokio::test]
async fn add_then_remove_field_restores_the_form() {
    let mut form = FormEngine::new(signup_rules());
    fill(&mut form, "email", "ada@example.com").await;
    let before = form.state().clone();

    form.add_field(NamedFieldConfig::new(
        "nickname",
        FieldConfig::new().max_length(12).initial_value("ace"),
    ))
    .await
    .unwrap();

    assert!(form.rules().contains("nickname"));
    assert_eq!(
        form.state().value("nickname"),
        Some(&FieldValue::from("ace"))
    );
    assert_eq!(form.state().status("nickname"), &FieldStatus::Unvalidated);
    assert_eq!(form.state().blurred.get("nickname"), Some(&false));

    form.remove_field("nickname").await.unwrap();

    assert!(!form.rules().contains("nickname"));
    assert_eq!(form.state(), &before);
}

#[tokio::test]
async fn added_field_joins_validation_after_submit() {
    let mut form = FormEngine::new(signup_rules());
    form.dispatch(Transition::Submit).await.unwrap();

    form.add_field(NamedFieldConfig::new(
        "company",
        FieldConfig::new().required(),
    ))
    .await
    .unwrap();

    assert_eq!(
        form.state().errors.message("company"),
        Some("This field is required")
    );
}

#[tokio::test]
async fn removed_field_drops_out_of_validation() {
    let mut form = FormEngine::new(signup_rules());
    fill(&mut form, "email", "ada@example.com").await;
    fill(&mut form, "password", "correct horse").await;

    form.remove_field("confirm").await.unwrap();
    form.dispatch(Transition::Submit).await.unwrap();

    assert!(!form.state().errors.contains("confirm"));
    assert!(!form.state().errors.has_errors());
}

#[tokio::test]
async fn group_failure_marks_listed_fields() {
    let rules = FieldRules::new()
        .with("start", FieldConfig::new().required().date())
        .with("end", FieldConfig::new().required().date());
    let mut form = FormEngine::new(rules);
    form.add_group(
        "range",
        FieldGroup::new(["start", "end"], |values| {
            let start = values.text("start")?;
            let end = values.text("end")?;
            (start > end).then(|| "End date must be after start date".to_owned())
        }),
    );

    fill(&mut form, "start", "2024-05-10").await;
    fill(&mut form, "end", "2024-05-01").await;
    let errors = form.validate_all_fields().await;

    assert_eq!(
        errors.message("start"),
        Some("End date must be after start date")
    );
    assert_eq!(
        errors.message("end"),
        Some("End date must be after start date")
    );
    assert_eq!(form.state().errors, errors);

    form.remove_group("range");
    let errors = form.validate_all_fields().await;
    assert!(!errors.has_errors());
}

#[tokio::test]
async fn group_never_overrides_a_field_error() {
    let rules = FieldRules::new()
        .with("start", FieldConfig::new().required())
        .with("end", FieldConfig::new().required());
    let mut form = FormEngine::new(rules);
    form.add_group(
        "always",
        FieldGroup::new(["start", "end"], |_| Some("Group failed".to_owned())),
    );

    fill(&mut form, "start", "x").await;
    let errors = form.validate_all_fields().await;

    assert_eq!(errors.message("start"), Some("Group failed"));
    assert_eq!(errors.message("end"), Some("This field is required"));
}

#[tokio::test]
async fn validate_single_field_notifies_observer() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let callbacks = FormCallbacks::new().on_field_validate({
        let seen = Arc::clone(&seen);
        move |field: &str, valid: bool| {
            seen.lock().unwrap().push((field.to_owned(), valid));
        }
    });
    let mut form = FormEngine::new(signup_rules()).with_observer(callbacks);

    let applied = form.validate_single_field("password").await.unwrap();
    assert_eq!(
        applied.status(),
        Some(&FieldStatus::invalid("This field is required"))
    );

    fill(&mut form, "password", "correct horse").await;
    form.validate_single_field("password").await.unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![("password".to_owned(), false), ("password".to_owned(), true)]
    );
    assert_eq!(form.state().status("password"), &FieldStatus::Valid);
    assert!(!form.state().errors.contains("email"));
}

#[tokio::test]
async fn validate_single_field_rejects_unknown_field() {
    let mut form = FormEngine::new(signup_rules());
    let err = form.validate_single_field("nickname").await.unwrap_err();
    assert!(matches!(err, FormError::UnknownField(field) if field == "nickname"));
}

#[rstest]
#[case(r#"{"type": "RESET"}"#, "RESET")]
#[case(r#"{"type": "change", "payload": {"field": "email", "value": "x"}}"#, "change")]
#[tokio::test]
async fn unknown_json_transition_leaves_state_alone(#[case] json: &str, #[case] kind: &str) {
    let mut form = FormEngine::new(signup_rules());
    let before = form.state().clone();

    let err = form.dispatch_json(json).await.unwrap_err();

    assert!(matches!(err, FormError::UnknownTransition(k) if k == kind));
    assert_eq!(form.state(), &before);
}

#[tokio::test]
async fn json_session() {
    let mut form = FormEngine::new(signup_rules());
    for json in [
        r#"{"type": "CHANGE", "payload": {"field": "email", "value": "ada@example.com"}}"#,
        r#"{"type": "BLUR", "payload": {"field": "email"}}"#,
        r#"{"type": "ADD_FIELD", "payload": {"fieldName": "newsletter", "initialValue": false}}"#,
        r#"{"type": "SUBMIT"}"#,
    ] {
        form.dispatch_json(json).await.unwrap();
    }

    let state = form.state();
    assert!(state.submitted);
    assert!(state.is_blurred("email"));
    assert_eq!(state.value("newsletter"), Some(&FieldValue::Bool(false)));
    assert_eq!(state.status("email"), &FieldStatus::Valid);
    assert_eq!(
        state.errors.message("password"),
        Some("This field is required")
    );
}
