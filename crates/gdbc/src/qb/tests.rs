//! Tests for the qb facade.

use crate::qb::{
    SqlQb, delete, delete_from, insert, insert_into, select, select_from, update,
};

#[test]
fn test_select_joins_columns_in_order() {
    let columns = ["id", "name", "email", "created_at"];
    let qb = select(columns).from("users");
    assert_eq!(
        qb.build(),
        format!("SELECT {} FROM users", columns.join(", "))
    );
    assert!(!qb.build().contains("WHERE"));
}

#[test]
fn test_select_where_is_a_suffix() {
    let base = select(["id"]).from("users");
    let filtered = base.clone().r#where("status = 'active'");
    assert_eq!(
        filtered.build(),
        format!("{} WHERE status = 'active'", base.build())
    );
}

#[test]
fn test_select_accepts_owned_columns() {
    let columns: Vec<String> = (0..3).map(|i| format!("col{i}")).collect();
    let qb = select(columns).from("t");
    assert_eq!(qb.build(), "SELECT col0, col1, col2 FROM t");
}

#[test]
fn test_select_from_selects_all_columns() {
    assert_eq!(select_from("users").build(), "SELECT * FROM users");
    assert_eq!(
        select_from("users").r#where("id = 1").build(),
        select(["*"]).from("users").r#where("id = 1").build()
    );
}

#[test]
fn test_insert_basic() {
    let qb = insert("T").columns(["a", "b"]).value(1).value("x");
    assert_eq!(qb.build(), "INSERT INTO T (a, b) VALUES (1, x)");
}

#[test]
fn test_insert_accumulates() {
    let qb = insert_into("T")
        .columns(["a"])
        .columns(["b"])
        .value(1)
        .value(2);
    assert_eq!(qb.build(), "INSERT INTO T (a, b) VALUES (1, 2)");
}

#[test]
fn test_update_basic() {
    let qb = update("T").set("a", 1).set("b", 2).r#where("id=5");
    assert_eq!(qb.build(), "UPDATE T SET a = 1, b = 2 WHERE id=5");
}

#[test]
fn test_update_reset_keeps_position() {
    let qb = update("T").set("a", 1).set("b", 2).set("a", 3);
    assert!(qb.build().contains("a = 3, b = 2"));
}

#[test]
fn test_delete_basic() {
    assert_eq!(delete("T").build(), "DELETE FROM T");
    assert_eq!(delete_from("T").r#where("id=5").build(), "DELETE FROM T WHERE id=5");
}

#[test]
fn test_build_is_idempotent() {
    let qb = update("users").set("status", "'inactive'").r#where("id = 1");
    let first = qb.build();
    assert_eq!(qb.build(), first);
    assert_eq!(qb.to_sql(), first);
    assert_eq!(qb.to_string(), first);

    // Further mutation after rendering is allowed.
    let qb = qb.set("updated_at", "now()");
    assert_eq!(
        qb.build(),
        "UPDATE users SET status = 'inactive', updated_at = now() WHERE id = 1"
    );
}

#[test]
fn test_builders_are_independent() {
    let a = select(["id"]).from("a");
    let b = select(["name"]).from("b").r#where("x = 1");
    assert_eq!(a.build(), "SELECT id FROM a");
    assert_eq!(b.build(), "SELECT name FROM b WHERE x = 1");
}

#[test]
fn test_values_are_not_escaped() {
    let qb = insert("users").columns(["name"]).value("'O'Brien'");
    assert_eq!(qb.build(), "INSERT INTO users (name) VALUES ('O'Brien')");
}

#[test]
fn test_default_validate_passes() {
    assert!(select(["id"]).validate().is_ok());
    assert!(update("t").validate().is_ok());
    assert!(delete("t").validate().is_ok());
    assert!(insert("t").columns(["a"]).validate().is_err());
}
