//! Column types behind optional features.

#[cfg(any(feature = "uuid", feature = "chrono"))]
use rowgraph::prelude::*;

#[cfg(feature = "uuid")]
#[test]
fn test_uuid_fields() {
    use uuid::Uuid;

    #[derive(Entity, Debug, Default, Clone)]
    struct Session {
        id: Uuid,
        parent: Option<Uuid>,
    }

    let id = Uuid::new_v4();
    let set = ResultSet::new(["id", "parent"])
        .row([Value::from(id.to_string()), Value::Null])
        .row([Value::from(id.as_bytes().to_vec()), Value::from(id.to_string())]);

    let sessions = Mapping::<Session>::configure(|_| Ok(()))
        .unwrap()
        .parse(&mut MemoryCursor::new(vec![set]))
        .unwrap();

    assert_eq!(sessions[0].id, id);
    assert_eq!(sessions[0].parent, None);
    assert_eq!(sessions[1].id, id);
    assert_eq!(sessions[1].parent, Some(id));
}

#[cfg(feature = "chrono")]
#[test]
fn test_chrono_fields() {
    use chrono::{NaiveDate, NaiveDateTime};

    #[derive(Entity, Debug, Default, Clone)]
    #[entity(rename_all = "camelCase")]
    struct Event {
        happened_on: NaiveDate,
        logged_at: Option<NaiveDateTime>,
    }

    let set = ResultSet::new(["happenedOn", "loggedAt"])
        .row([Value::from("2024-02-29"), Value::from("2024-02-29T10:30:00")])
        .row([Value::Null, Value::Null]);

    let events = Mapping::<Event>::configure(|_| Ok(()))
        .unwrap()
        .parse(&mut MemoryCursor::new(vec![set]))
        .unwrap();

    assert_eq!(events[0].happened_on, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    assert_eq!(
        events[0].logged_at.map(|at| at.to_string()),
        Some("2024-02-29 10:30:00".to_string())
    );
    assert_eq!(events[1].happened_on, NaiveDate::default());
    assert_eq!(events[1].logged_at, None);
}

#[cfg(feature = "serde")]
#[test]
fn test_value_serde() {
    use rowgraph::Value;

    let values = vec![
        Value::from(3),
        Value::from(1.5),
        Value::from("text"),
        Value::from(vec![0u8, 1]),
        Value::Null,
    ];
    let json = serde_json::to_string(&values).unwrap();
    let back: Vec<Value<'static>> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, values);
}
