use rowgraph::prelude::*;
use rowgraph::{FieldKind, MappingError};

use crate::common::{Avatar, Comment, User};

#[derive(Entity, Debug, Default, Clone, PartialEq)]
#[entity(name = "Account")]
struct Account {
    account_id: i64,
    #[entity(column = "display_name")]
    label: String,
    #[entity(optional)]
    nickname: Option<String>,
    active: bool,
    #[entity(ignore)]
    cache: Vec<u8>,
    #[entity(relation)]
    owner: Option<User>,
}

#[derive(Entity, Debug, Default, Clone, PartialEq)]
#[entity(rename_all = "SCREAMING_SNAKE_CASE")]
struct Shouty {
    first_value: i32,
    r#type: String,
}

#[test]
fn test_pascal_case_columns() {
    let columns: Vec<_> = Comment::columns()
        .iter()
        .map(|column| (column.name, column.column))
        .collect();
    assert_eq!(
        columns,
        vec![
            ("comment_id", "CommentId"),
            ("post_id", "PostId"),
            ("user_id", "UserId"),
            ("title", "Title"),
            ("body", "Body"),
        ]
    );
}

#[test]
fn test_field_attributes() {
    assert_eq!(<Account as Entity>::NAME, "Account");
    assert_eq!(Account::RELATIONS, &["owner"]);
    assert_eq!(Account::IGNORED, &["cache"]);

    let columns = Account::columns();
    let described: Vec<_> = columns
        .iter()
        .map(|column| (column.name, column.column, column.optional))
        .collect();
    assert_eq!(
        described,
        vec![
            ("account_id", "account_id", false),
            ("label", "display_name", false),
            ("nickname", "nickname", true),
            ("active", "active", false),
        ]
    );
    assert_eq!(columns[2].type_name, "Option<String>");

    assert_eq!(Account::field_kind("owner"), Some(FieldKind::Relation));
    assert_eq!(Account::field_kind("cache"), Some(FieldKind::Ignored));
    assert_eq!(Account::field_kind("label"), Some(FieldKind::Column));
    assert_eq!(Account::field_kind("missing"), None);
}

#[test]
fn test_rename_rule_and_raw_identifiers() {
    let columns: Vec<_> = Shouty::columns()
        .iter()
        .map(|column| (column.name, column.column))
        .collect();
    assert_eq!(columns, vec![("first_value", "FIRST_VALUE"), ("type", "TYPE")]);
    assert_eq!(Shouty::TYPE.name(), "type");
}

#[test]
fn test_field_refs_access_fields() {
    let mut avatar = Avatar::default();
    *Avatar::URI.get_mut(&mut avatar) = "x.png".into();
    *Avatar::WIDTH.get_mut(&mut avatar) = 7;
    assert_eq!(avatar.uri, "x.png");
    assert_eq!(avatar.width, 7);
    assert_eq!(User::POSTS.name(), "posts");
}

#[test]
fn test_generated_setters_convert_values() {
    let set = ResultSet::new(["ACCOUNT_ID", "Display_Name", "active", "cache"]).row([
        Value::from(9),
        Value::from("Nine"),
        Value::from(1),
        Value::from(vec![1u8, 2, 3]),
    ]);
    let accounts = Mapping::<Account>::configure(|_| Ok(()))
        .unwrap()
        .parse(&mut MemoryCursor::new(vec![set]))
        .unwrap();

    assert_eq!(
        accounts,
        vec![Account {
            account_id: 9,
            label: "Nine".into(),
            nickname: None,
            active: true,
            cache: Vec::new(),
            owner: None,
        }]
    );
}

#[test]
fn test_builder_rejects_wrong_field_kinds() {
    let err = Mapping::<Account>::configure(|account| {
        account.rename(Account::CACHE, "blob")?;
        Ok(())
    })
    .unwrap_err();
    assert!(matches!(
        err,
        MappingError::FieldKind {
            entity: "Account",
            field: "cache",
            expected: "column",
            actual: "ignored"
        }
    ));

    let err = Mapping::<Account>::configure(|account| {
        account.include_single(
            Account::OWNER,
            |a| a.account_id,
            |u: &User| i64::from(u.user_id),
            1,
        )?;
        account.include_single(
            Account::OWNER,
            |a| a.account_id,
            |u: &User| i64::from(u.user_id),
            2,
        )?;
        Ok(())
    })
    .unwrap_err();
    assert!(matches!(err, MappingError::DuplicateRelation { .. }));
}

#[test]
fn test_field_named_like_entity_const_gets_suffix() {
    assert_eq!(<User as Entity>::NAME, "User");
    assert_eq!(User::NAME, "User");
    assert_eq!(User::NAME_FIELD.name(), "name");

    let mut user = User::default();
    *User::NAME_FIELD.get_mut(&mut user) = "User1".into();
    assert_eq!(user.name, "User1");
}
