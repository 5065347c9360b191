#![cfg(feature = "rusqlite")]

use rowgraph::prelude::*;
use rowgraph::MappingError;

use crate::common::sqlite::{BLOG_QUERY, setup_db};
use crate::common::{Avatar, user_graph};

#[test]
fn test_blog_graph_from_sqlite() {
    let conn = setup_db();
    let mapping = user_graph().unwrap();

    let users = mapping
        .parse(&mut BatchCursor::new(&conn, BLOG_QUERY))
        .unwrap();

    assert_eq!(users.len(), 2);
    let user2 = &users[1];
    assert_eq!(user2.name, "User2");
    assert_eq!(user2.posts.len(), 2);
    let anonymous = &user2.posts[1].comments[1];
    assert_eq!(anonymous.title, "AnonymousComment");
    assert_eq!(anonymous.user_id, None);
    assert_eq!(
        user2.avatar.as_ref().map(|a| a.uri.as_str()),
        Some("http://example.com/img2.png")
    );
}

#[test]
fn test_repeated_executions() {
    let conn = setup_db();
    let mapping = user_graph().unwrap();

    let first = mapping
        .parse(&mut BatchCursor::new(&conn, BLOG_QUERY))
        .unwrap();
    for _ in 0..10 {
        let again = mapping
            .parse(&mut BatchCursor::new(&conn, BLOG_QUERY))
            .unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn test_select_star_with_extra_column() {
    let conn = setup_db();
    let mapping = Mapping::<Avatar>::configure(|avatar| {
        avatar.rename(Avatar::URI, "Url")?;
        Ok(())
    })
    .unwrap();

    let avatars = mapping
        .parse(&mut BatchCursor::new(&conn, "SELECT * FROM Avatar"))
        .unwrap();

    assert_eq!(
        avatars,
        vec![
            Avatar {
                user_id: 1,
                uri: "http://example.com/img1.png".into(),
                width: 100,
                height: 100,
            },
            Avatar {
                user_id: 2,
                uri: "http://example.com/img2.png".into(),
                width: 100,
                height: 100,
            },
        ]
    );
}

#[test]
fn test_statements_without_columns_are_skipped() {
    let conn = setup_db();
    let mapping = Mapping::<Avatar>::configure(|avatar| {
        avatar.rename(Avatar::URI, "Url")?;
        Ok(())
    })
    .unwrap();

    let avatars = mapping
        .parse(&mut BatchCursor::new(
            &conn,
            "UPDATE Avatar SET Width = 50 WHERE UserId = 2; SELECT * FROM Avatar WHERE UserId = 2;",
        ))
        .unwrap();

    assert_eq!(avatars.len(), 1);
    assert_eq!(avatars[0].width, 50);
}

#[test]
fn test_sql_error_is_reported() {
    let conn = setup_db();
    let mapping = user_graph().unwrap();
    let err = mapping
        .parse(&mut BatchCursor::new(&conn, "SELECT * FROM Nowhere;"))
        .unwrap_err();
    assert!(matches!(err, MappingError::Rusqlite(_)));
}

#[test]
fn test_cursor_walks_result_sets() {
    let conn = setup_db();
    let mut cursor = BatchCursor::new(&conn, "SELECT 1 AS a; SELECT 'x' AS b, NULL AS c;");

    assert!(cursor.advance_result_set().unwrap());
    assert_eq!(cursor.column_name(0).unwrap(), "a");
    assert!(cursor.advance_row().unwrap());
    assert_eq!(cursor.value(0).unwrap().as_i64(), Some(1));
    assert!(!cursor.advance_row().unwrap());

    assert!(cursor.advance_result_set().unwrap());
    assert_eq!(cursor.column_count(), 2);
    assert!(cursor.advance_row().unwrap());
    assert_eq!(cursor.value_by_name("B").unwrap().as_str(), Some("x"));
    assert!(cursor.value(1).unwrap().is_null());

    assert!(!cursor.advance_result_set().unwrap());
}

fn junk_db() -> rusqlite::Connection {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE t (a INTEGER, junk TEXT);
         INSERT INTO t VALUES (1, CAST(x'FF' AS TEXT));",
    )
    .unwrap();
    conn
}

#[test]
fn test_invalid_utf8_text_in_unread_column() {
    #[derive(Entity, Debug, Default, Clone, PartialEq)]
    struct OnlyA {
        a: i64,
        #[entity(ignore)]
        junk: String,
    }

    #[derive(Entity, Debug, Default, Clone, PartialEq)]
    struct RawJunk {
        a: i64,
        junk: Vec<u8>,
    }

    let conn = junk_db();
    let only = Mapping::<OnlyA>::configure(|_| Ok(()))
        .unwrap()
        .parse(&mut BatchCursor::new(&conn, "SELECT a, junk FROM t"))
        .unwrap();
    assert_eq!(only[0].a, 1);

    let raw = Mapping::<RawJunk>::configure(|_| Ok(()))
        .unwrap()
        .parse(&mut BatchCursor::new(&conn, "SELECT a, junk FROM t"))
        .unwrap();
    assert_eq!(raw[0].junk, vec![0xff]);
}

#[test]
fn test_invalid_utf8_text_into_string_names_the_cell() {
    #[derive(Entity, Debug, Default, Clone, PartialEq)]
    struct TextJunk {
        a: i64,
        junk: String,
    }

    let conn = junk_db();
    let err = Mapping::<TextJunk>::configure(|_| Ok(()))
        .unwrap()
        .parse(&mut BatchCursor::new(&conn, "SELECT a, junk FROM t"))
        .unwrap_err();

    match err {
        MappingError::Read {
            result_set,
            row,
            column,
            found,
            ..
        } => assert_eq!((result_set, row, column.as_str(), found), (0, 0, "junk", "BLOB")),
        other => panic!("unexpected error: {other}"),
    }
}
