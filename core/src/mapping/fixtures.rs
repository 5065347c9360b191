//! Hand-written entities shared by the mapping unit tests.

use crate::cursor::{MemoryCursor, ResultSet};
use crate::entity::{ColumnField, Entity, FieldRef};
use crate::value::Value;

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct User {
    pub(crate) user_id: i32,
    pub(crate) name: String,
    pub(crate) posts: Vec<Post>,
    pub(crate) avatar: Option<Avatar>,
    pub(crate) session: Option<i32>,
}

impl User {
    pub(crate) const POSTS: FieldRef<User, Vec<Post>> =
        FieldRef::<User, Vec<Post>>::new("posts", |u| &mut u.posts);
    pub(crate) const AVATAR: FieldRef<User, Option<Avatar>> =
        FieldRef::<User, Option<Avatar>>::new("avatar", |u| &mut u.avatar);
    pub(crate) const NAME_FIELD: FieldRef<User, String> =
        FieldRef::<User, String>::new("name", |u| &mut u.name);
    pub(crate) const SESSION: FieldRef<User, Option<i32>> =
        FieldRef::<User, Option<i32>>::new("session", |u| &mut u.session);
}

impl Entity for User {
    const NAME: &'static str = "User";
    const RELATIONS: &'static [&'static str] = &["posts", "avatar"];

    fn columns() -> Vec<ColumnField<Self>> {
        vec![
            ColumnField::<Self>::new("user_id", "UserId", "i32", false, |e, v| {
                e.user_id = v.convert()?;
                Ok(())
            }),
            ColumnField::<Self>::new("name", "Name", "String", false, |e, v| {
                e.name = v.convert()?;
                Ok(())
            }),
            ColumnField::<Self>::new("session", "Session", "Option<i32>", false, |e, v| {
                e.session = v.convert()?;
                Ok(())
            }),
        ]
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Post {
    pub(crate) post_id: i32,
    pub(crate) user_id: i32,
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) comments: Vec<Comment>,
}

impl Post {
    pub(crate) const COMMENTS: FieldRef<Post, Vec<Comment>> =
        FieldRef::<Post, Vec<Comment>>::new("comments", |p| &mut p.comments);
    pub(crate) const BODY: FieldRef<Post, String> =
        FieldRef::<Post, String>::new("body", |p| &mut p.body);
}

impl Entity for Post {
    const NAME: &'static str = "Post";
    const RELATIONS: &'static [&'static str] = &["comments"];

    fn columns() -> Vec<ColumnField<Self>> {
        vec![
            ColumnField::<Self>::new("post_id", "PostId", "i32", false, |e, v| {
                e.post_id = v.convert()?;
                Ok(())
            }),
            ColumnField::<Self>::new("user_id", "UserId", "i32", false, |e, v| {
                e.user_id = v.convert()?;
                Ok(())
            }),
            ColumnField::<Self>::new("title", "Title", "String", false, |e, v| {
                e.title = v.convert()?;
                Ok(())
            }),
            ColumnField::<Self>::new("body", "Body", "String", false, |e, v| {
                e.body = v.convert()?;
                Ok(())
            }),
        ]
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Comment {
    pub(crate) comment_id: i32,
    pub(crate) post_id: i32,
    pub(crate) user_id: Option<i32>,
}

impl Entity for Comment {
    const NAME: &'static str = "Comment";

    fn columns() -> Vec<ColumnField<Self>> {
        vec![
            ColumnField::<Self>::new("comment_id", "CommentId", "i32", false, |e, v| {
                e.comment_id = v.convert()?;
                Ok(())
            }),
            ColumnField::<Self>::new("post_id", "PostId", "i32", false, |e, v| {
                e.post_id = v.convert()?;
                Ok(())
            }),
            ColumnField::<Self>::new("user_id", "UserId", "Option<i32>", false, |e, v| {
                e.user_id = v.convert()?;
                Ok(())
            }),
        ]
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Avatar {
    pub(crate) user_id: i32,
    pub(crate) uri: String,
}

impl Avatar {
    pub(crate) const URI: FieldRef<Avatar, String> =
        FieldRef::<Avatar, String>::new("uri", |a| &mut a.uri);
}

impl Entity for Avatar {
    const NAME: &'static str = "Avatar";

    fn columns() -> Vec<ColumnField<Self>> {
        vec![
            ColumnField::<Self>::new("user_id", "UserId", "i32", false, |e, v| {
                e.user_id = v.convert()?;
                Ok(())
            }),
            ColumnField::<Self>::new("uri", "Uri", "String", false, |e, v| {
                e.uri = v.convert()?;
                Ok(())
            }),
        ]
    }
}

pub(crate) fn users() -> ResultSet {
    ResultSet::new(["UserId", "Name"])
        .row([Value::from(1), Value::from("A")])
        .row([Value::from(2), Value::from("B")])
}

pub(crate) fn posts() -> ResultSet {
    ResultSet::new(["PostId", "UserId", "Title", "Body"])
        .row([Value::from(10), Value::from(1), Value::from("P1"), Value::from("b1")])
        .row([Value::from(11), Value::from(2), Value::from("P2"), Value::from("b2")])
}

pub(crate) fn comments() -> ResultSet {
    ResultSet::new(["CommentId", "PostId", "UserId"]).row([
        Value::from(100),
        Value::from(10),
        Value::Null,
    ])
}

pub(crate) fn avatars() -> ResultSet {
    ResultSet::new(["UserId", "Url"]).row([Value::from(1), Value::from("http://a/1.png")])
}

pub(crate) fn cursor(sets: Vec<ResultSet>) -> MemoryCursor {
    MemoryCursor::new(sets)
}
