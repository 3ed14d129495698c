//! Structural validation of raw directory payloads.
//!
//! Validation is all-or-nothing: the first record that fails a type check
//! rejects the entire payload, so a partially valid list is never admitted.
//! Output order matches input order; no sorting, no deduplication.

use serde_json::Value;

use crate::error::FormatError;
use crate::ids::UserId;
use crate::user::User;

/// Validate a decoded JSON payload into user records.
///
/// The payload must be an array of objects, each carrying an integer `id`
/// and string `name`/`email`. Extra fields are dropped.
pub fn users_from_value(payload: &Value) -> Result<Vec<User>, FormatError> {
    let records = payload.as_array().ok_or(FormatError::NotAList)?;

    let mut users = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        users.push(user_from_record(index, record)?);
    }

    Ok(users)
}

fn user_from_record(index: usize, record: &Value) -> Result<User, FormatError> {
    let id = record
        .get("id")
        .and_then(Value::as_i64)
        .ok_or(FormatError::Field { index, field: "id" })?;
    let name = record
        .get("name")
        .and_then(Value::as_str)
        .ok_or(FormatError::Field { index, field: "name" })?;
    let email = record
        .get("email")
        .and_then(Value::as_str)
        .ok_or(FormatError::Field { index, field: "email" })?;

    Ok(User {
        id: UserId(id),
        name: name.to_owned(),
        email: email.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_records_are_admitted_in_order() {
        let payload = json!([
            { "id": 7, "name": "Ada", "email": "ada@x.com" },
            { "id": 3, "name": "Grace", "email": "grace@x.com" },
            { "id": 5, "name": "Edsger", "email": "edsger@x.com" },
        ]);

        let users = users_from_value(&payload).expect("payload is valid");

        assert_eq!(users.len(), 3);
        assert_eq!(
            users.iter().map(|u| u.id).collect::<Vec<_>>(),
            vec![UserId(7), UserId(3), UserId(5)],
            "input order must be preserved"
        );
        assert_eq!(users[0].name, "Ada");
        assert_eq!(users[0].email, "ada@x.com");
    }

    #[test]
    fn extra_fields_are_dropped() {
        let payload = json!([{
            "id": 1,
            "name": "Ada",
            "email": "ada@x.com",
            "username": "ada",
            "address": { "city": "London" },
        }]);

        let users = users_from_value(&payload).expect("extra fields are fine");
        assert_eq!(
            users,
            vec![User {
                id: UserId(1),
                name: "Ada".to_owned(),
                email: "ada@x.com".to_owned(),
            }]
        );
    }

    #[test]
    fn empty_array_yields_empty_list() {
        let users = users_from_value(&json!([])).expect("empty list is valid");
        assert!(users.is_empty());
    }

    #[test]
    fn non_array_payloads_are_rejected() {
        for payload in [json!({}), json!("users"), json!(null), json!(42)] {
            assert_eq!(
                users_from_value(&payload),
                Err(FormatError::NotAList),
                "payload {payload} must be rejected as a whole"
            );
        }
    }

    #[test]
    fn string_id_rejects_the_whole_payload() {
        let payload = json!([
            { "id": "x", "name": "Ada", "email": "ada@x.com" },
        ]);

        assert_eq!(
            users_from_value(&payload),
            Err(FormatError::Field { index: 0, field: "id" })
        );
    }

    #[test]
    fn fractional_id_is_not_an_integer() {
        let payload = json!([
            { "id": 1.5, "name": "Ada", "email": "ada@x.com" },
        ]);

        assert_eq!(
            users_from_value(&payload),
            Err(FormatError::Field { index: 0, field: "id" })
        );
    }

    #[test]
    fn missing_email_is_rejected() {
        let payload = json!([
            { "id": 1, "name": "Ada" },
        ]);

        assert_eq!(
            users_from_value(&payload),
            Err(FormatError::Field { index: 0, field: "email" })
        );
    }

    #[test]
    fn non_string_name_is_rejected() {
        let payload = json!([
            { "id": 1, "name": 42, "email": "ada@x.com" },
        ]);

        assert_eq!(
            users_from_value(&payload),
            Err(FormatError::Field { index: 0, field: "name" })
        );
    }

    #[test]
    fn one_bad_record_fails_fast_with_its_index() {
        let payload = json!([
            { "id": 1, "name": "Ada", "email": "ada@x.com" },
            { "id": 2, "name": "Grace", "email": null },
            { "id": "broken", "name": "Edsger", "email": "edsger@x.com" },
        ]);

        // The first invalid record wins; nothing partial survives.
        assert_eq!(
            users_from_value(&payload),
            Err(FormatError::Field { index: 1, field: "email" })
        );
    }
}
