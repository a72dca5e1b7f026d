//! Applying the rendered schema to a real SQLite store.

use curriculum_core::{schema, sql};
use rusqlite::{Connection, ErrorCode};

fn open() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    apply(&conn);
    conn
}

fn apply(conn: &Connection) {
    let registry = schema::registry().unwrap();
    let script = sql::schema_script(&registry).unwrap();
    conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
    conn.execute_batch(&script).unwrap();
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(err, rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation)
}

fn seed_student_number_parents(conn: &Connection) {
    conn.execute_batch(
        "INSERT INTO student_number_usage (usage_id, description) VALUES ('Budget', 'Budget round');
         INSERT INTO student_number_instance (instance_id, acad_year, usage_id) VALUES (1, 2024, 'Budget');
         INSERT INTO fee_status (fee_status_id, status_description) VALUES ('H', 'Home');
         INSERT INTO aos_code (aos_code, description) VALUES ('MUSPER', 'Music Performance');",
    )
    .unwrap();
}

#[test]
fn test_every_table_is_created() {
    let conn = open();
    let registry = schema::registry().unwrap();

    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count as usize, registry.len());

    let index: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name = 'IX_curriculum'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(index, 1);
}

#[test]
fn test_script_is_idempotent() {
    let conn = open();
    apply(&conn);
}

#[test]
fn test_duplicate_student_number_rejected() {
    let conn = open();
    seed_student_number_parents(&conn);

    let insert = "INSERT INTO student_number \
                  (instance_id, fee_status_id, origin, aos_code, session, student_count) \
                  VALUES (1, 'H', 'Recruitment', 'MUSPER', 0, 10.5)";
    conn.execute(insert, []).unwrap();

    let err = conn.execute(insert, []).unwrap_err();
    assert!(is_constraint_violation(&err), "{err}");

    conn.execute(
        "INSERT INTO student_number \
         (instance_id, fee_status_id, origin, aos_code, session, student_count) \
         VALUES (1, 'H', 'Recruitment', 'MUSPER', 1, 8)",
        [],
    )
    .unwrap();
}

#[test]
fn test_audit_row_survives_missing_parent() {
    let conn = open();

    conn.execute(
        "INSERT INTO audit_component (component_id, description, datestamp, cmd) \
         VALUES (999, 'Deleted component', '2024-01-01 09:00:00', 'DELETE')",
        [],
    )
    .unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM audit_component", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_live_foreign_key_enforced() {
    let conn = open();

    let err = conn
        .execute("INSERT INTO cost_week (cost_id, acad_week) VALUES (42, 1)", [])
        .unwrap_err();
    assert!(is_constraint_violation(&err), "{err}");
}

#[test]
fn test_defaults_applied() {
    let conn = open();
    conn.execute_batch(
        "INSERT INTO cgroup_strand (strand_id, description) VALUES ('MISC', 'Miscellaneous');
         INSERT INTO calendar (calendar_type, long_description) VALUES ('Standard', 'Standard calendar');
         INSERT INTO cgroup (cgroup_id, description) VALUES (1, 'Principal study');
         INSERT INTO component (component_id, description, calendar_type, coordination_eligible)
             VALUES (1, 'Harmony', 'Standard', 0);
         INSERT INTO cgroup_config (cgroup_id, component_id) VALUES (1, 1);
         INSERT INTO curriculum (curriculum_id, description, created_date, acad_year)
             VALUES (1, 'Main Curriculum', '2024-01-01 00:00:00', 2024);
         INSERT INTO tt_change (tt_change_id, date_created, category, description)
             VALUES (1, '2024-01-01', 'Reporting', 'Add a report');
         INSERT INTO cost_type (cost_type, is_pay, is_contact, nominal_account)
             VALUES ('Teaching', 1, 1, 5000);
         INSERT INTO student_number_usage (usage_id) VALUES ('Budget');
         INSERT INTO student_number_instance (instance_id, acad_year, usage_id)
             VALUES (1, 2024, 'Budget');",
    )
    .unwrap();

    let int = |sql: &str| -> i64 { conn.query_row(sql, [], |row| row.get(0)).unwrap() };

    assert_eq!(int("SELECT ratio FROM cgroup_config"), 1);
    assert_eq!(int("SELECT can_edit FROM curriculum"), 1);
    assert_eq!(int("SELECT closed FROM tt_change"), 0);
    assert_eq!(int("SELECT suspend FROM tt_change"), 0);
    assert_eq!(int("SELECT surpress FROM student_number_instance"), 0);
    assert_eq!(int("SELECT surpress_all FROM student_number_usage"), 0);

    let strand: String = conn
        .query_row("SELECT strand FROM cgroup", [], |row| row.get(0))
        .unwrap();
    assert_eq!(strand, "MISC");

    let multiplier: f64 = conn
        .query_row("SELECT cost_multiplier FROM cost_type", [], |row| row.get(0))
        .unwrap();
    assert_eq!(multiplier, 1.0);

    let stamped: Option<String> = conn
        .query_row(
            "SELECT input_datetime FROM student_number_instance",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(stamped.is_some());
}

#[test]
fn test_schema_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("curriculum.db");

    {
        let conn = Connection::open(&path).unwrap();
        apply(&conn);
        conn.execute(
            "INSERT INTO hecos_code (hecos, code_name) VALUES (100637, 'Music')",
            [],
        )
        .unwrap();
    }

    let conn = Connection::open(&path).unwrap();
    apply(&conn);
    let name: String = conn
        .query_row(
            "SELECT code_name FROM hecos_code WHERE hecos = 100637",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(name, "Music");
}
