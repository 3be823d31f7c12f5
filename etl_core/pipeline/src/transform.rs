use crate::records::{CombinedRecord, PostRecord, UserRecord};
use common::error::diagnostics::DiagnosticMessage;
use log::{error, info};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("invalid input shape: {context}")]
    InvalidShape { context: DiagnosticMessage },
    #[error("field selection failed: {context}")]
    FieldSelection { context: DiagnosticMessage },
}

impl TransformError {
    #[track_caller]
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidShape {
            context: DiagnosticMessage::new(message.into()),
        }
    }

    #[track_caller]
    pub fn field_selection(message: impl Into<String>) -> Self {
        Self::FieldSelection {
            context: DiagnosticMessage::new(message.into()),
        }
    }
}

/// Project both collections and left-join posts onto users by `user_id`.
///
/// Output order follows the posts input; a post whose `user_id` matches
/// several users produces one row per match, in the users' original order.
pub fn transform(users: &Value, posts: &Value) -> Result<Vec<CombinedRecord>, TransformError> {
    match join_posts_with_users(users, posts) {
        Ok(rows) => {
            info!("transformation successful, produced {} rows", rows.len());
            Ok(rows)
        }
        Err(err) => {
            error!("transformation error: {}", err);
            Err(err)
        }
    }
}

fn join_posts_with_users(
    users: &Value,
    posts: &Value,
) -> Result<Vec<CombinedRecord>, TransformError> {
    let users = array(users, "users")?
        .iter()
        .map(UserRecord::project)
        .collect::<Result<Vec<_>, _>>()?;
    let posts = array(posts, "posts")?
        .iter()
        .map(PostRecord::project)
        .collect::<Result<Vec<_>, _>>()?;

    let mut users_by_id: HashMap<i64, Vec<&UserRecord>> = HashMap::new();
    for user in &users {
        users_by_id.entry(user.user_id).or_default().push(user);
    }

    let mut combined = Vec::with_capacity(posts.len());
    for post in &posts {
        match users_by_id.get(&post.user_id) {
            Some(matched) => {
                combined.extend(
                    matched
                        .iter()
                        .map(|user| CombinedRecord::joined(post, Some(*user))),
                );
            }
            None => combined.push(CombinedRecord::joined(post, None)),
        }
    }

    Ok(combined)
}

fn array<'a>(value: &'a Value, name: &str) -> Result<&'a Vec<Value>, TransformError> {
    value.as_array().ok_or_else(|| {
        TransformError::invalid_shape(format!("{} payload is not a JSON array", name))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ann() -> Value {
        json!({"id": 1, "name": "Ann", "username": "ann1", "email": "a@x.com"})
    }

    fn post(user_id: i64, id: i64, title: &str, body: &str) -> Value {
        json!({"userId": user_id, "id": id, "title": title, "body": body})
    }

    #[test]
    fn test_projection_renames_keys_and_passes_fields_through() {
        let rows = transform(&json!([ann()]), &json!([post(1, 100, "T", "B")]))
            .expect("valid inputs");

        assert_eq!(
            rows,
            vec![CombinedRecord {
                user_id: 1,
                post_id: 100,
                title: "T".into(),
                body: "B".into(),
                name: Some("Ann".into()),
                username: Some("ann1".into()),
                email: Some("a@x.com".into()),
            }]
        );
    }

    #[test]
    fn test_join_emits_one_row_per_post() {
        let users = json!([
            ann(),
            {"id": 2, "name": "Bob", "username": "bob2", "email": "b@x.com"},
        ]);
        let posts = json!([
            post(1, 100, "T1", "B1"),
            post(2, 101, "T2", "B2"),
            post(1, 102, "T3", "B3"),
        ]);

        let rows = transform(&users, &posts).expect("valid inputs");
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_unmatched_post_keeps_post_fields_and_nulls_user_fields() {
        let users = json!([ann()]);
        let posts = json!([post(1, 100, "T", "B"), post(2, 101, "T2", "B2")]);

        let rows = transform(&users, &posts).expect("valid inputs");
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1],
            CombinedRecord {
                user_id: 2,
                post_id: 101,
                title: "T2".into(),
                body: "B2".into(),
                name: None,
                username: None,
                email: None,
            }
        );
    }

    #[test]
    fn test_output_follows_posts_order() {
        let users = json!([ann()]);
        let posts = json!([
            post(1, 102, "c", "c"),
            post(1, 100, "a", "a"),
            post(1, 101, "b", "b"),
        ]);

        let rows = transform(&users, &posts).expect("valid inputs");
        let ids: Vec<i64> = rows.iter().map(|r| r.post_id).collect();
        assert_eq!(ids, vec![102, 100, 101]);
    }

    #[test]
    fn test_duplicate_user_ids_expand_per_match_in_user_order() {
        let users = json!([
            ann(),
            {"id": 1, "name": "Ann 2", "username": "ann2", "email": "a2@x.com"},
        ]);
        let posts = json!([post(1, 100, "T", "B")]);

        let rows = transform(&users, &posts).expect("valid inputs");
        let names: Vec<Option<String>> = rows.iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, vec![Some("Ann".into()), Some("Ann 2".into())]);
    }

    #[test]
    fn test_missing_user_field_fails() {
        let users = json!([{"id": 1, "name": "Ann", "username": "ann1"}]); // no email
        let posts = json!([post(1, 100, "T", "B")]);

        let err = transform(&users, &posts).expect_err("email is required");
        assert!(matches!(err, TransformError::FieldSelection { .. }));
    }

    #[test]
    fn test_wrongly_typed_field_fails() {
        let posts = json!([{"userId": "1", "id": 100, "title": "T", "body": "B"}]);

        let err = transform(&json!([ann()]), &posts).expect_err("userId must be an integer");
        assert!(matches!(err, TransformError::FieldSelection { .. }));
    }

    #[test]
    fn test_non_array_input_fails() {
        let err = transform(&json!({"id": 1}), &json!([])).expect_err("users must be an array");
        assert!(matches!(err, TransformError::InvalidShape { .. }));
    }

    #[test]
    fn test_non_object_record_fails() {
        let err = transform(&json!([ann()]), &json!([1, 2])).expect_err("records must be objects");
        assert!(matches!(err, TransformError::InvalidShape { .. }));
    }

    #[test]
    fn test_empty_posts_yield_empty_output() {
        let rows = transform(&json!([ann()]), &json!([])).expect("valid inputs");
        assert!(rows.is_empty());
    }
}
