use rusqlite::{Connection, OptionalExtension};
use serde::Serialize;

use crate::sanitize::escape_like;
use crate::server::error::ServerError;

#[derive(Debug, Serialize)]
pub struct Post {
    pub post_id: i64,
    pub title: String,
    pub content: String,
}

#[derive(Debug)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

pub fn list_posts(db: &Connection) -> Result<Vec<Post>, ServerError> {
    let mut query = db.prepare("SELECT post_id, title, content FROM posts")?;
    let rows = query.query_map((), |row| {
        let post = Post {
            post_id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
        };
        Ok(post)
    })?;

    let mut posts = Vec::new();
    for post in rows {
        posts.push(post?)
    }

    Ok(posts)
}

pub fn insert_post(db: &Connection, post: &NewPost) -> Result<i64, ServerError> {
    db.execute(
        "INSERT INTO posts (title, content) VALUES (?1, ?2)",
        (&post.title, &post.content),
    )?;
    Ok(db.last_insert_rowid())
}

/// Case-insensitive starts-with lookup. Returns at most one post; which
/// one wins among titles sharing a prefix is unspecified.
pub fn find_post_by_title_prefix(db: &Connection, prefix: &str) -> Result<Option<Post>, ServerError> {
    let pattern = format!("{}%", escape_like(&prefix.to_lowercase()));
    let mut query = db.prepare(
        "SELECT post_id, title, content FROM posts
         WHERE lower(title) LIKE ?1 ESCAPE '\\'
         LIMIT 1",
    )?;
    let post = query
        .query_row([&pattern], |row| {
            Ok(Post {
                post_id: row.get(0)?,
                title: row.get(1)?,
                content: row.get(2)?,
            })
        })
        .optional()?;

    Ok(post)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(include_str!("./db/migrations/0-init.sql"))
            .unwrap();
        conn
    }

    #[test]
    fn insert_then_list_round_trips() {
        let db = test_db();
        let id = insert_post(
            &db,
            &NewPost { title: "Test Post".to_owned(), content: "Hello".to_owned() },
        )
        .unwrap();
        assert!(id > 0);

        let posts = list_posts(&db).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Test Post");
        assert_eq!(posts[0].content, "Hello");
    }

    #[test]
    fn list_is_empty_on_fresh_store() {
        let db = test_db();
        assert!(list_posts(&db).unwrap().is_empty());
    }

    #[test]
    fn prefix_match_is_case_insensitive() {
        let db = test_db();
        insert_post(
            &db,
            &NewPost { title: "Hello World".to_owned(), content: "first".to_owned() },
        )
        .unwrap();

        for lookup in ["hello", "HELLO", "Hello"] {
            let post = find_post_by_title_prefix(&db, lookup).unwrap();
            assert_eq!(post.unwrap().title, "Hello World", "lookup {}", lookup);
        }
    }

    #[test]
    fn missing_prefix_returns_none() {
        let db = test_db();
        insert_post(
            &db,
            &NewPost { title: "Hello World".to_owned(), content: "first".to_owned() },
        )
        .unwrap();
        assert!(find_post_by_title_prefix(&db, "goodbye").unwrap().is_none());
    }

    #[test]
    fn wildcards_in_lookup_match_literally() {
        let db = test_db();
        insert_post(
            &db,
            &NewPost { title: "100% organic".to_owned(), content: "pure".to_owned() },
        )
        .unwrap();
        insert_post(
            &db,
            &NewPost { title: "percent".to_owned(), content: "other".to_owned() },
        )
        .unwrap();

        // "%" must not act as a match-anything operator.
        let post = find_post_by_title_prefix(&db, "%").unwrap();
        assert!(post.is_none());

        let post = find_post_by_title_prefix(&db, "100%").unwrap();
        assert_eq!(post.unwrap().title, "100% organic");
    }

    #[test]
    fn only_one_post_returned_for_shared_prefix() {
        let db = test_db();
        insert_post(
            &db,
            &NewPost { title: "Rust 101".to_owned(), content: "a".to_owned() },
        )
        .unwrap();
        insert_post(
            &db,
            &NewPost { title: "Rust 202".to_owned(), content: "b".to_owned() },
        )
        .unwrap();

        let post = find_post_by_title_prefix(&db, "rust").unwrap().unwrap();
        assert!(post.title.starts_with("Rust"));
    }
}
