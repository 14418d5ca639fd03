//! Posts with their likes and comments.

use serde_json::Value;

use super::Record;

/// A post. `userId` points at the author; nothing checks that it exists.
pub type Post = Record;

pub const USER_ID_FIELD: &str = "userId";
pub const LIKES_FIELD: &str = "likes";
pub const COMMENTS_FIELD: &str = "comments";

/// Body field naming the post to like or comment on.
pub const POST_ID_FIELD: &str = "postId";
/// Body field carrying the comment to append.
pub const COMMENT_FIELD: &str = "comment";

/// Add one like. Anything but a non-zero number restarts the count at 1.
///
/// Non-numeric counts are reset rather than concatenated or coerced.
pub fn add_like(post: &mut Post) {
    let next = match post.get(LIKES_FIELD) {
        Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
            (Some(0), _) => Value::from(1),
            (Some(i), _) => Value::from(i.saturating_add(1)),
            (None, Some(f)) if f != 0.0 => Value::from(f + 1.0),
            _ => Value::from(1),
        },
        _ => Value::from(1),
    };
    post.insert(LIKES_FIELD.to_string(), next);
}

/// Append a comment, creating the list if needed. A missing comment is stored as `null`.
pub fn push_comment(post: &mut Post, comment: Option<Value>) {
    let comment = comment.unwrap_or(Value::Null);
    match post.get_mut(COMMENTS_FIELD) {
        Some(Value::Array(comments)) => comments.push(comment),
        _ => {
            post.insert(COMMENTS_FIELD.to_string(), Value::Array(vec![comment]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_like_from_absent() {
        let mut post = Post::new();
        add_like(&mut post);
        add_like(&mut post);
        add_like(&mut post);
        assert_eq!(post[LIKES_FIELD], json!(3));
    }

    #[test]
    fn test_add_like_resets_non_numbers() {
        let mut post = Post::new();
        post.insert(LIKES_FIELD.to_string(), json!(null));
        add_like(&mut post);
        assert_eq!(post[LIKES_FIELD], json!(1));

        post.insert(LIKES_FIELD.to_string(), json!(0));
        add_like(&mut post);
        assert_eq!(post[LIKES_FIELD], json!(1));

        post.insert(LIKES_FIELD.to_string(), json!("5"));
        add_like(&mut post);
        assert_eq!(post[LIKES_FIELD], json!(1));

        post.insert(LIKES_FIELD.to_string(), json!(true));
        add_like(&mut post);
        assert_eq!(post[LIKES_FIELD], json!(1));

        post.insert(LIKES_FIELD.to_string(), json!(9));
        add_like(&mut post);
        assert_eq!(post[LIKES_FIELD], json!(10));
    }

    #[test]
    fn test_push_comment_keeps_order() {
        let mut post = Post::new();
        push_comment(&mut post, Some(json!("first")));
        push_comment(&mut post, Some(json!({"text": "second"})));
        push_comment(&mut post, None);
        assert_eq!(
            post[COMMENTS_FIELD],
            json!(["first", {"text": "second"}, null])
        );
    }
}
