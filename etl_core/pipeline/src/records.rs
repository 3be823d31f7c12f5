use crate::transform::TransformError;
use serde_json::{Map, Value};

/// User row after projection: `id` renamed to `user_id`, the rest kept.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub user_id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
}

impl UserRecord {
    pub fn project(raw: &Value) -> Result<Self, TransformError> {
        let record = object(raw)?;
        Ok(Self {
            user_id: require_i64(record, "id")?,
            name: require_string(record, "name")?,
            username: require_string(record, "username")?,
            email: require_string(record, "email")?,
        })
    }
}

/// Post row after projection: `userId` renamed to `user_id`, `id` to `post_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    pub user_id: i64,
    pub post_id: i64,
    pub title: String,
    pub body: String,
}

impl PostRecord {
    pub fn project(raw: &Value) -> Result<Self, TransformError> {
        let record = object(raw)?;
        Ok(Self {
            user_id: require_i64(record, "userId")?,
            post_id: require_i64(record, "id")?,
            title: require_string(record, "title")?,
            body: require_string(record, "body")?,
        })
    }
}

/// One output row of the left join. User fields are `None` when the post's
/// `user_id` matched no user.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedRecord {
    pub user_id: i64,
    pub post_id: i64,
    pub title: String,
    pub body: String,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
}

impl CombinedRecord {
    pub fn joined(post: &PostRecord, user: Option<&UserRecord>) -> Self {
        Self {
            user_id: post.user_id,
            post_id: post.post_id,
            title: post.title.clone(),
            body: post.body.clone(),
            name: user.map(|u| u.name.clone()),
            username: user.map(|u| u.username.clone()),
            email: user.map(|u| u.email.clone()),
        }
    }
}

fn object(value: &Value) -> Result<&Map<String, Value>, TransformError> {
    value
        .as_object()
        .ok_or_else(|| TransformError::invalid_shape("record is not a JSON object"))
}

fn require_i64(record: &Map<String, Value>, field: &str) -> Result<i64, TransformError> {
    record.get(field).and_then(Value::as_i64).ok_or_else(|| {
        TransformError::field_selection(format!("missing or non-integer field '{}'", field))
    })
}

fn require_string(record: &Map<String, Value>, field: &str) -> Result<String, TransformError> {
    record
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| {
            TransformError::field_selection(format!("missing or non-text field '{}'", field))
        })
}
