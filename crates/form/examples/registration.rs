//! A registration form with a username availability check, driven by JSON
//! transitions the way a UI layer would send them.
//!
//! Run with:
//! `FORMEDIBLE_LOG=debug cargo run -p formedible-form --example registration`

use std::time::Duration;

use formedible_form::{FormCallbacks, FormEngine, FormError};
use formedible_validator::{
    AsyncOutcome, FieldConfig, FieldErrors, FieldGroup, FieldRules, FieldValue, FieldValues,
    NamedFieldConfig, RuleKind,
};

async fn username_available(value: FieldValue, _: FieldValues) -> AsyncOutcome {
    tokio::time::sleep(Duration::from_millis(20)).await;
    Ok((value.as_text() == "admin").then(|| "That username is taken".to_owned()))
}

#[tokio::main]
async fn main() -> Result<(), FormError> {
    if let Err(e) = formedible_log::auto_init() {
        eprintln!("logging disabled: {e}");
    }

    let rules = FieldRules::new()
        .with(
            "username",
            FieldConfig::new()
                .required()
                .min_length(3)
                .async_validate(username_available),
        )
        .with("email", FieldConfig::new().required().email())
        .with("password", FieldConfig::new().required().min_length(8))
        .with(
            "confirmPassword",
            FieldConfig::new()
                .required()
                .equal_to("password")
                .message(RuleKind::EqualTo, "Passwords do not match"),
        );

    let callbacks = FormCallbacks::new()
        .on_validate_success(|| println!("form is valid, submitting"))
        .on_validate_error(|errors: &FieldErrors| {
            for (field, message) in errors.invalid() {
                println!("  {field}: {message}");
            }
        })
        .on_field_validate(|field, valid| println!("{field} checked: valid={valid}"));

    let mut form = FormEngine::new(rules).with_observer(callbacks);
    form.add_group(
        "credentials",
        FieldGroup::new(["password"], |values| {
            let username = values.text("username")?;
            let password = values.text("password")?;
            (!username.is_empty() && password.contains(username.as_ref()))
                .then(|| "Password must not contain the username".to_owned())
        }),
    );

    for json in [
        r#"{"type": "CHANGE", "payload": {"field": "username", "value": "admin"}}"#,
        r#"{"type": "BLUR", "payload": {"field": "username"}}"#,
    ] {
        form.dispatch_json(json).await?;
    }
    form.validate_single_field("username").await?;

    println!("first submit:");
    for json in [
        r#"{"type": "CHANGE", "payload": {"field": "username", "value": "ada"}}"#,
        r#"{"type": "CHANGE", "payload": {"field": "email", "value": "ada@example.com"}}"#,
        r#"{"type": "CHANGE", "payload": {"field": "password", "value": "ada-lovelace"}}"#,
        r#"{"type": "SUBMIT"}"#,
    ] {
        form.dispatch_json(json).await?;
    }

    println!("after fixing the password:");
    form.dispatch_json(
        r#"{"type": "CHANGE", "payload": {"field": "password", "value": "analytical engine"}}"#,
    )
    .await?;
    form.dispatch_json(
        r#"{"type": "CHANGE", "payload": {"field": "confirmPassword", "value": "analytical engine"}}"#,
    )
    .await?;

    form.add_field(NamedFieldConfig::new(
        "terms",
        FieldConfig::new().required().initial_value(false),
    ))
    .await?;
    println!("values after adding terms:");
    for (name, value) in form.state().values.iter() {
        println!("  {name} = {value}");
    }

    Ok(())
}
