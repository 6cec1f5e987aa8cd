//! Evaluate a sign-up form's rules against a set of values.
//!
//! Run with: `cargo run -p formedible-validator --example basic_usage`

use formedible_validator::*;

fn main() {
    let rules = FieldRules::new()
        .with("username", FieldConfig::new().required().min_length(3).max_length(16))
        .with("email", FieldConfig::new().required().email())
        .with("password", FieldConfig::new().required().min_length(8))
        .with(
            "confirmPassword",
            FieldConfig::new().required().equal_to("password"),
        )
        .with(
            "age",
            FieldConfig::new()
                .condition(Condition::Between {
                    min: 18.0,
                    max: 120.0,
                })
                .condition_message("You must be at least 18"),
        );

    let mut groups = FieldGroups::default();
    groups.insert(
        "credentials".to_owned(),
        FieldGroup::new(["username", "password"], |values| {
            let username = values.text("username")?;
            let password = values.text("password")?;
            password
                .contains(username.as_ref())
                .then(|| "Password must not contain the username".to_owned())
        }),
    );

    let values: FieldValues = [
        ("username", "ada"),
        ("email", "ada@example"),
        ("password", "ada-lovelace"),
        ("confirmPassword", "ada-lovelace"),
        ("age", "16"),
    ]
    .into_iter()
    .collect();

    let errors = evaluate_all_fields(&values, &rules, &groups);
    for (field, status) in errors.iter() {
        match status {
            FieldStatus::Invalid(message) => println!("{field:>16}: {message}"),
            FieldStatus::Valid => println!("{field:>16}: ok"),
            FieldStatus::Unvalidated => println!("{field:>16}: -"),
        }
    }
}
