//! Integration tests for the qb module.

use crate::config::BuilderConfig;
use crate::qb::{
    Condition, StatementBuilder, StatementKind, Term, builder, delete_from, insert_into, select,
    term, update,
};
use crate::row::Row;
use crate::value::Value;

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

// ==================== Scenarios ====================

#[test]
fn test_select_with_where() {
    let sql = select(&["id", "name"])
        .from("users")
        .where_clause(term("status", "active"))
        .build()
        .unwrap();

    assert!(sql.contains("SELECT id, name"));
    assert!(sql.contains("FROM users"));
    assert!(sql.contains("WHERE status = 'active'"));
    assert!(!sql.contains("ORDER BY"));
    assert!(!sql.contains("GROUP BY"));
    assert_eq!(sql, "SELECT id, name FROM users WHERE status = 'active'");
}

#[test]
fn test_update_with_where() {
    let sql = update("users")
        .set(Row::new().col("name", "Bob"))
        .where_clause(term("id", 1))
        .build()
        .unwrap();

    assert!(sql.contains("UPDATE users SET name = 'Bob'"));
    assert!(sql.contains("WHERE id = '1'"));
}

#[test]
fn test_insert_single_row() {
    let sql = insert_into("users")
        .values(Row::new().col("id", 1).col("name", "A"))
        .build()
        .unwrap();

    assert_eq!(sql, "INSERT INTO users (id, name) VALUES ('1', 'A')");
}

#[test]
fn test_delete_with_where() {
    let sql = delete_from("users")
        .where_clause(term("id", 1))
        .build()
        .unwrap();

    assert!(sql.contains("DELETE FROM users"));
    assert!(sql.contains("WHERE id = '1'"));
}

// ==================== SELECT ====================

#[test]
fn test_select_empty_columns_is_star() {
    let sql = select(&[]).from("users").build().unwrap();
    assert_eq!(sql, "SELECT * FROM users");
}

#[test]
fn test_select_keeps_column_order() {
    let column_sets: [&[&str]; 4] = [
        &["a"],
        &["z", "a", "m"],
        &["count(*)", "name"],
        &["id", "id"],
    ];
    for cols in column_sets {
        for table in ["t", "users", "public.orders"] {
            let sql = select(cols).from(table).build().unwrap();
            assert_eq!(count(&sql, "SELECT"), 1, "{sql}");
            assert_eq!(count(&sql, "FROM"), 1, "{sql}");
            assert!(sql.starts_with(&format!("SELECT {} FROM {table}", cols.join(", "))));
        }
    }
}

#[test]
fn test_select_clause_order() {
    let sql = select(&["dept", "count(*)"])
        .from("staff")
        .where_clause(Term::new().eq("active", true).gte("age", 18))
        .order_by(&["dept"])
        .group_by(&["dept"])
        .build()
        .unwrap();

    assert_eq!(
        sql,
        "SELECT dept, count(*) FROM staff WHERE active = 'true' AND age >= '18' \
         ORDER BY dept GROUP BY dept"
    );
}

#[test]
fn test_where_sequence_is_anded_without_parens() {
    let sql = select(&["*"])
        .from("t")
        .where_clause(vec![term("a", 1), Term::new().lt("b", 2)])
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE a = '1' AND b < '2'");
}

#[test]
fn test_where_clause_replaces_previous() {
    let sql = select(&["*"])
        .from("t")
        .where_clause(term("a", 1))
        .where_clause(term("b", 2))
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE b = '2'");
}

#[test]
fn test_where_empty_in_list() {
    let sql = select(&["id"])
        .from("t")
        .where_clause(Term::new().in_list("id", Vec::<i64>::new()))
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT id FROM t WHERE 1=0");

    let query = select(&["id"])
        .from("t")
        .where_clause(Term::new().not_in("id", Vec::<i64>::new()))
        .build_query()
        .unwrap();
    assert_eq!(query.sql, "SELECT id FROM t WHERE 1=1");
    assert!(query.params.is_empty());
}

#[test]
fn test_where_or_group() {
    let sql = select(&["*"])
        .from("t")
        .where_clause(Condition::or([term("a", 1), term("b", 2)]))
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE (a = '1' OR b = '2')");
}

#[test]
fn test_join_accepts_or_groups() {
    let sql = select(&["u.id", "o.total"])
        .from("users u")
        .join(
            "orders o",
            Condition::or([term("o.user_id", "u.id"), term("o.owner_id", "u.id")]),
        )
        .join("items i", Term::new().gt("i.qty", 0))
        .where_clause(term("u.status", "active"))
        .build()
        .unwrap();

    assert_eq!(
        sql,
        "SELECT u.id, o.total FROM users u \
         JOIN orders o ON (o.user_id = 'u.id' OR o.owner_id = 'u.id') \
         JOIN items i ON i.qty > '0' \
         WHERE u.status = 'active'"
    );
}

#[test]
fn test_join_without_predicate() {
    let sql = select(&["*"])
        .from("a")
        .join("b", Vec::<Condition>::new())
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT * FROM a JOIN b ON 1=1");
}

#[test]
fn test_case_sql() {
    let qb = select(&["id"]).from("t").case(&[
        ("score > 90", "'A'"),
        ("score > 80", "'B'"),
    ]);
    assert_eq!(
        qb.case_sql().as_deref(),
        Some("CASE WHEN score > 90 THEN 'A' WHEN score > 80 THEN 'B' END")
    );
    // Never spliced into the select list.
    assert_eq!(qb.build().unwrap(), "SELECT id FROM t");
    assert_eq!(builder().case_sql(), None);
}

// ==================== UPDATE ====================

#[test]
fn test_set_merges_later_wins() {
    let sql = update("users")
        .set(Row::new().col("name", "Alice").col("age", 30))
        .set(Row::new().col("name", "Bob"))
        .build()
        .unwrap();
    assert_eq!(sql, "UPDATE users SET name = 'Bob', age = '30'");
}

#[test]
fn test_update_without_set_is_invalid() {
    let err = update("users").where_clause(term("id", 1)).build().unwrap_err();
    assert!(err.is_invalid_statement());
}

#[test]
fn test_update_null_value() {
    let sql = update("users")
        .set(Row::new().col("deleted_at", Value::Null))
        .build()
        .unwrap();
    assert_eq!(sql, "UPDATE users SET deleted_at = 'null'");
}

// ==================== INSERT ====================

#[test]
fn test_insert_aligns_rows_to_first_row_columns() {
    let sql = insert_into("users")
        .values(Row::new().col("id", 1).col("name", "A").col("age", 20))
        .values(Row::new().col("name", "B").col("age", 21).col("id", 2))
        .values(Row::new().col("age", 22).col("id", 3).col("name", "C"))
        .build()
        .unwrap();

    assert_eq!(
        sql,
        "INSERT INTO users (id, name, age) VALUES \
         ('1', 'A', '20'), ('2', 'B', '21'), ('3', 'C', '22')"
    );
}

#[test]
fn test_insert_rejects_inconsistent_rows() {
    let err = insert_into("users")
        .values(Row::new().col("id", 1).col("name", "A"))
        .values(Row::new().col("id", 2).col("email", "b@x"))
        .build()
        .unwrap_err();

    assert!(err.is_malformed_insert_rows());
    let message = err.to_string();
    assert!(message.contains("row 1"), "{message}");
    assert!(message.contains("id, email"), "{message}");
}

#[test]
fn test_insert_rejects_missing_columns() {
    let err = insert_into("users")
        .values(Row::new().col("id", 1).col("name", "A"))
        .values(Row::new().col("id", 2))
        .build_query()
        .unwrap_err();
    assert!(err.is_malformed_insert_rows());
}

#[test]
fn test_insert_non_strict_renders_row_order() {
    let config = BuilderConfig::new().strict_insert_rows(false);
    let sql = StatementBuilder::with_config(config)
        .insert_into("users")
        .values(Row::new().col("id", 1).col("name", "A"))
        .values(Row::new().col("email", "b@x").col("id", 2))
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "INSERT INTO users (id, name) VALUES ('1', 'A'), ('b@x', '2')"
    );
}

#[test]
fn test_insert_empty_first_row_is_invalid() {
    let err = insert_into("users").values(Row::new()).build().unwrap_err();
    assert!(err.is_invalid_statement());
}

// ==================== Statement kind ====================

#[test]
fn test_empty_builder_is_invalid() {
    let err = builder().build().unwrap_err();
    assert!(err.is_invalid_statement());
    assert!(builder().statement_kind().is_err());
}

#[test]
fn test_incomplete_modes_are_invalid() {
    let incomplete: Vec<StatementBuilder> = vec![
        builder().from("users"),
        builder().update("users"),
        builder().insert_into("users"),
        builder().set(Row::new().col("a", 1)),
        builder().values(Row::new().col("a", 1)),
        builder().where_clause(term("a", 1)).order_by(&["a"]),
    ];
    for qb in incomplete {
        assert!(qb.build().unwrap_err().is_invalid_statement(), "{qb:?}");
    }
}

#[test]
fn test_kind_priority_order() {
    let all = select(&["id"])
        .from("a")
        .update("b")
        .set(Row::new().col("x", 1))
        .insert_into("c")
        .values(Row::new().col("y", 2))
        .delete_from("d");
    assert_eq!(all.statement_kind().unwrap(), StatementKind::Select);

    let no_select = update("b")
        .set(Row::new().col("x", 1))
        .insert_into("c")
        .values(Row::new().col("y", 2))
        .delete_from("d");
    assert_eq!(no_select.statement_kind().unwrap(), StatementKind::Update);
    assert!(no_select.build().unwrap().starts_with("UPDATE b"));

    let insert_or_delete = insert_into("c")
        .values(Row::new().col("y", 2))
        .delete_from("d");
    assert_eq!(
        insert_or_delete.statement_kind().unwrap(),
        StatementKind::Insert
    );

    // select columns without a source table fall through.
    let delete = select(&["id"]).delete_from("d");
    assert_eq!(delete.statement_kind().unwrap(), StatementKind::Delete);
    assert_eq!(delete.build().unwrap(), "DELETE FROM d");
}

// ==================== Placeholders ====================

#[test]
fn test_build_query_numbers_in_text_order() {
    let query = select(&["*"])
        .from("orders o")
        .join("users u", term("u.region", "eu"))
        .where_clause(vec![
            Condition::from(Term::new().in_list("o.status", vec!["new", "paid"])),
            Condition::or([Term::new().gt("o.total", 100), term("o.vip", true)]),
        ])
        .build_query()
        .unwrap();

    assert_eq!(query.kind, StatementKind::Select);
    assert_eq!(
        query.sql,
        "SELECT * FROM orders o JOIN users u ON u.region = $1 \
         WHERE o.status IN ($2, $3) AND (o.total > $4 OR o.vip = $5)"
    );
    assert_eq!(
        query.params,
        vec![
            Value::from("eu"),
            Value::from("new"),
            Value::from("paid"),
            Value::from(100),
            Value::from(true),
        ]
    );
    assert_eq!(query.params_ref().len(), 5);
}

#[test]
fn test_build_query_update_and_insert() {
    let query = update("users")
        .set(Row::new().col("name", "Bob").col("age", 40))
        .where_clause(term("id", 7))
        .build_query()
        .unwrap();
    assert_eq!(query.sql, "UPDATE users SET name = $1, age = $2 WHERE id = $3");
    assert_eq!(query.params.len(), 3);

    let query = insert_into("users")
        .values(Row::new().col("id", 1).col("name", "A"))
        .values(Row::new().col("name", "B").col("id", 2))
        .build_query()
        .unwrap();
    assert_eq!(query.kind, StatementKind::Insert);
    assert_eq!(
        query.sql,
        "INSERT INTO users (id, name) VALUES ($1, $2), ($3, $4)"
    );
    assert_eq!(
        query.params,
        vec![Value::from(1), Value::from("A"), Value::from(2), Value::from("B")]
    );
}

#[test]
fn test_build_is_repeatable() {
    let qb = delete_from("sessions").where_clause(Term::new().lt("expires", 10));
    assert_eq!(qb.build().unwrap(), qb.build().unwrap());
    assert_eq!(qb.build_query().unwrap(), qb.build_query().unwrap());
}

#[test]
fn test_builder_without_logging() {
    let config = BuilderConfig::new().log_statements(false);
    let sql = StatementBuilder::with_config(config)
        .delete_from("t")
        .build()
        .unwrap();
    assert_eq!(sql, "DELETE FROM t");
}
