// ABOUTME: Tests for row-range LIMIT/OFFSET clause generation and parameter binding
// ABOUTME: Covers the documented ranges, dialect spellings, and clause/parameter agreement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{RecordingBinder, Rejected, RejectingBinder};
use sqlbind::database_plugins::shared::limits::bind_window;
use sqlbind::database_plugins::{
    bind_limits, limits_clause, limits_clause_for, paginate, BoundParameters, Dialect,
    PositionalBinder,
};
use sqlbind::errors::BindingError;
use sqlbind::{RowRange, SqlValue};

const MAX: i32 = i32::MAX;

fn bound_ints(from: i32, to: i32, start: usize) -> (Vec<i32>, usize) {
    let mut binder = RecordingBinder::default();
    let next = bind_limits(start, &mut binder, from, to).unwrap();
    let values = binder
        .values()
        .into_iter()
        .map(|value| match value {
            SqlValue::Integer(n) => n,
            other => panic!("pagination bound a non-integer value: {other:?}"),
        })
        .collect();
    (values, next)
}

#[test]
fn test_unbounded_range_has_no_clause() {
    assert_eq!(limits_clause(0, MAX), "");
    assert_eq!(bound_ints(0, MAX, 1), (vec![], 1));
}

#[test]
fn test_first_page_binds_limit_only() {
    assert_eq!(limits_clause(0, 9), " LIMIT ? ");
    assert_eq!(bound_ints(0, 9, 1), (vec![10], 2));
}

#[test]
fn test_middle_page_binds_limit_then_offset() {
    assert_eq!(limits_clause(5, 14), " LIMIT ? OFFSET ? ");
    assert_eq!(bound_ints(5, 14, 1), (vec![10, 5], 3));
}

#[test]
fn test_open_ended_range_binds_offset_only() {
    assert_eq!(limits_clause(5, MAX), " LIMIT NULL OFFSET ? ");
    assert_eq!(bound_ints(5, MAX, 1), (vec![5], 2));
}

#[test]
fn test_inverted_range_degrades_to_no_limit() {
    // No limit, but the offset from `from` still applies
    assert_eq!(limits_clause(5, 2), " LIMIT NULL OFFSET ? ");
    assert_eq!(bound_ints(5, 2, 1), (vec![5], 2));

    assert_eq!(limits_clause(0, -3), "");
    assert_eq!(bound_ints(0, -3, 1), (vec![], 1));
}

#[test]
fn test_zero_from_never_emits_offset() {
    for to in [-1, 0, 1, 9, MAX - 1, MAX] {
        assert!(!limits_clause(0, to).contains("OFFSET"), "to = {to}");
    }
}

#[test]
fn test_max_to_never_emits_limit_value() {
    for from in [0, 1, 5, 1_000, MAX - 1, MAX] {
        let clause = limits_clause(from, MAX);
        assert!(!clause.contains("LIMIT ?"), "from = {from}");
        let (values, _) = bound_ints(from, MAX, 1);
        assert!(values.len() <= 1);
    }
}

#[test]
fn test_single_row_range() {
    assert_eq!(limits_clause(7, 7), " LIMIT ? OFFSET ? ");
    assert_eq!(bound_ints(7, 7, 1), (vec![1, 7], 3));
}

#[test]
fn test_bind_limits_continues_from_caller_index() {
    let mut binder = RecordingBinder::default();
    let next = bind_limits(4, &mut binder, 20, 29).unwrap();
    assert_eq!(next, 6);
    assert_eq!(binder.indexes(), vec![4, 5]);
}

#[test]
fn test_clause_placeholders_match_bound_parameters() {
    let froms = [0, 1, 2, 5, 100, MAX - 1, MAX];
    let tos = [-5, -1, 0, 1, 2, 4, 5, 9, 14, 100, MAX - 1, MAX];
    for from in froms {
        for to in tos {
            let clause = limits_clause(from, to);
            let (values, next) = bound_ints(from, to, 3);
            assert_eq!(
                clause.matches('?').count(),
                values.len(),
                "from = {from}, to = {to}, clause = {clause:?}"
            );
            assert_eq!(next, 3 + values.len());
        }
    }
}

#[test]
fn test_limit_matches_formula() {
    for (from, to) in [(0, 0), (0, 9), (3, 3), (3, 10), (10, 3), (0, -1), (4, MAX)] {
        let expected = if (0..MAX).contains(&to) && to >= from {
            to - from + 1
        } else {
            0
        };
        assert_eq!(RowRange::new(from, to).limit(), expected, "({from}, {to})");
    }
}

#[test]
fn test_sqlite_dialect_spells_unbounded_limit_as_minus_one() {
    let range = RowRange::starting_at(5);
    assert_eq!(
        limits_clause_for(Dialect::Sqlite, range, 1),
        " LIMIT -1 OFFSET ? "
    );
    assert_eq!(
        limits_clause_for(Dialect::Sqlite, RowRange::new(5, 14), 1),
        " LIMIT ? OFFSET ? "
    );
    assert_eq!(limits_clause_for(Dialect::Sqlite, RowRange::all(), 1), "");
}

#[test]
fn test_generic_dialect_matches_limits_clause() {
    for (from, to) in [(0, MAX), (0, 9), (5, 14), (5, MAX), (5, 2)] {
        assert_eq!(
            limits_clause_for(Dialect::Generic, RowRange::new(from, to), 1),
            limits_clause(from, to)
        );
    }
}

#[test]
fn test_postgres_dialect_numbers_placeholders_from_first_index() {
    assert_eq!(
        limits_clause_for(Dialect::Postgres, RowRange::new(5, 14), 3),
        " LIMIT $3 OFFSET $4 "
    );
    assert_eq!(
        limits_clause_for(Dialect::Postgres, RowRange::new(0, 9), 1),
        " LIMIT $1 "
    );
    assert_eq!(
        limits_clause_for(Dialect::Postgres, RowRange::starting_at(5), 2),
        " LIMIT ALL OFFSET $2 "
    );
    assert_eq!(limits_clause_for(Dialect::Postgres, RowRange::all(), 1), "");
}

#[test]
fn test_postgres_placeholders_match_bound_parameters() {
    for (from, to) in [(0, MAX), (0, 9), (5, 14), (5, MAX), (5, 2)] {
        let clause = limits_clause_for(Dialect::Postgres, RowRange::new(from, to), 1);
        let (values, _) = bound_ints(from, to, 1);
        assert_eq!(clause.matches('$').count(), values.len(), "({from}, {to})");
    }
}

#[test]
fn test_postgres_clause_sizes_its_own_statement() {
    let clause = limits_clause_for(Dialect::Postgres, RowRange::new(5, 14), 1);
    let mut params = BoundParameters::for_sql(&format!("SELECT 1{clause}"));
    assert_eq!(params.len(), 2);

    assert_eq!(bind_limits(1, &mut params, 5, 14), Ok(3));
    assert_eq!(
        params.into_values().unwrap(),
        vec![SqlValue::Integer(10), SqlValue::Integer(5)]
    );
}

#[test]
fn test_paginate_appends_clause_after_base_parameters() {
    let base_sql = "SELECT id FROM blocks WHERE height >= ? ORDER BY height";
    let mut params = BoundParameters::for_sql(base_sql);
    params.bind_i64(1, 720).unwrap();

    let (sql, statement) = paginate(Dialect::Sqlite, base_sql, params, RowRange::new(5, 14)).unwrap();

    assert_eq!(sql, format!("{base_sql} LIMIT ? OFFSET ? "));
    assert_eq!(
        statement.into_values().unwrap(),
        vec![
            SqlValue::BigInt(720),
            SqlValue::Integer(10),
            SqlValue::Integer(5)
        ]
    );
}

#[test]
fn test_paginate_numbers_postgres_placeholders_after_base() {
    let base_sql = "SELECT id FROM blocks WHERE generator = $1 AND height >= $2";
    let mut params = BoundParameters::for_sql(base_sql);
    params.bind_text(1, "NXT-7A48").unwrap();
    params.bind_i32(2, 100).unwrap();

    let (sql, statement) =
        paginate(Dialect::Postgres, base_sql, params, RowRange::starting_at(20)).unwrap();

    assert_eq!(sql, format!("{base_sql} LIMIT ALL OFFSET $3 "));
    assert_eq!(
        statement.into_values().unwrap(),
        vec![
            SqlValue::Text("NXT-7A48".to_owned()),
            SqlValue::Integer(100),
            SqlValue::Integer(20)
        ]
    );
}

#[test]
fn test_paginate_rejects_surplus_parameters() {
    let base_sql = "SELECT v FROM t WHERE v >= ?";
    let mut params = BoundParameters::new();
    params.bind_i32(1, 3).unwrap();
    params.bind_i32(2, 999).unwrap();

    assert_eq!(
        paginate(Dialect::Sqlite, base_sql, params, RowRange::new(0, 4)).err(),
        Some(BindingError::IndexOutOfRange {
            index: 2,
            parameter_count: 1
        })
    );
}

#[test]
fn test_paginate_rejects_missing_parameters() {
    let base_sql = "SELECT v FROM t WHERE v >= ? AND v < ?";
    let mut params = BoundParameters::new();
    params.bind_i32(1, 3).unwrap();

    assert_eq!(
        paginate(Dialect::Generic, base_sql, params, RowRange::all()).err(),
        Some(BindingError::MissingParameter { index: 2 })
    );
}

#[test]
fn test_bind_limits_propagates_statement_error_unchanged() {
    let mut binder = RejectingBinder;
    assert_eq!(
        bind_limits(7, &mut binder, 5, 14),
        Err(Rejected { index: 7 })
    );
    // Nothing to bind, so the statement is never touched
    assert_eq!(bind_limits(7, &mut binder, 0, MAX), Ok(7));
}

#[test]
fn test_bind_limits_into_bound_parameters() {
    let sql = format!("SELECT id FROM blocks WHERE height > ?{}", limits_clause(5, 14));
    let mut params = BoundParameters::for_sql(&sql);
    assert_eq!(params.len(), 3);

    let next = bind_limits(2, &mut params, 5, 14).unwrap();
    assert_eq!(next, 4);
    assert_eq!(params.get(2), Some(&SqlValue::Integer(10)));
    assert_eq!(params.get(3), Some(&SqlValue::Integer(5)));
    assert_eq!(
        params.into_values(),
        Err(BindingError::MissingParameter { index: 1 })
    );
}

#[test]
fn test_bind_window_uses_precomputed_window() {
    let mut binder = RecordingBinder::default();
    let window = RowRange::new(5, 14).window();
    let next = bind_window(1, &mut binder, window).unwrap();
    assert_eq!(next, 1 + window.placeholder_count());
    assert_eq!(
        binder.values(),
        vec![SqlValue::Integer(10), SqlValue::Integer(5)]
    );
}
