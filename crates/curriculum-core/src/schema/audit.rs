//! Audit tables.
//!
//! History of changes to mutable tables. Rows are only appended, and no
//! column references a live table: the audited row may since have been
//! deleted and its history must survive that.

use crate::catalog::{
    ColumnDef as Col, ColumnType as Ty, DefaultValue, Lifecycle, Namespace, TableDef,
};

/// All audit tables in registration order.
pub fn tables() -> Vec<TableDef> {
    vec![
        audit_cgroup(),
        audit(),
        audit_action(),
        audit_component(),
        audit_cost(),
        audit_course(),
        audit_course_session(),
        audit_relationships(),
    ]
}

fn history(entity: &str, table_name: &str) -> TableDef {
    TableDef::new(entity, table_name)
        .in_namespace(Namespace::Audit)
        .with_lifecycle(Lifecycle::AppendOnly)
}

/// Columns closing every mirror of a live table.
fn change_stamp() -> [Col; 2] {
    [
        Col::new("datestamp", Ty::DateTime).not_null(),
        Col::new("cmd", Ty::varchar(23)).not_null(),
    ]
}

fn audit_cgroup() -> TableDef {
    history("audit_cgroup", "audit_cgroup")
        .with_column(Col::new("cgroup_id", Ty::Integer).not_null())
        .with_column(Col::new("description", Ty::varchar(200)).not_null())
        .with_column(Col::new("strand", Ty::varchar(5)).not_null())
        .with_column(Col::new("notes", Ty::varchar(200)))
        .with_column(Col::new("curriculum_id", Ty::Integer))
        .with_columns(change_stamp())
}

fn audit() -> TableDef {
    history("Audit", "tt_audit")
        .with_column(Col::new("username", Ty::varchar(100)).not_null())
        .with_column(Col::new("datestamp", Ty::DateTime).not_null())
        .with_column(Col::new("action", Ty::varchar(50)).not_null())
        .with_column(Col::new("cost_id", Ty::Integer))
        .with_column(Col::new("group_id", Ty::Integer))
        .with_column(Col::new("staff_id", Ty::varchar(50)))
        .with_column(Col::new("student_id", Ty::char(11)))
        .with_column(Col::new("actioned", Ty::Boolean).with_default(DefaultValue::Bool(false)))
        .with_column(Col::new("audit_id", Ty::Integer).primary_key())
}

fn audit_action() -> TableDef {
    history("AuditAction", "tt_audit_action")
        .with_lifecycle(Lifecycle::Mutable)
        .with_column(Col::new("action", Ty::varchar(50)).primary_key())
        .with_column(Col::new("detail_level", Ty::varchar(50)).not_null())
}

fn audit_component() -> TableDef {
    history("audit_component", "audit_component")
        .with_column(Col::new("component_id", Ty::Integer))
        .with_column(Col::new("description", Ty::unicode(200)))
        .with_column(Col::new("module_code", Ty::varchar(9)))
        .with_column(Col::new("calendar_type", Ty::unicode(20)))
        .with_column(Col::new("coordination_eligible", Ty::Boolean))
        .with_column(Col::new("hecos", Ty::Integer))
        .with_column(Col::new("staffing_band", Ty::Integer))
        .with_column(Col::new("curriculum_id", Ty::Integer))
        .with_columns(change_stamp())
}

fn audit_cost() -> TableDef {
    history("audit_cost", "audit_cost")
        .with_column(Col::new("cost_id", Ty::Integer).not_null())
        .with_column(Col::new("component_id", Ty::Integer).not_null())
        .with_column(Col::new("room_type", Ty::varchar(20)))
        .with_column(Col::new("cost_type", Ty::varchar(20)).not_null())
        .with_column(Col::new("description", Ty::varchar(200)).not_null())
        .with_column(Col::new("max_group_size", Ty::Integer).not_null())
        .with_column(Col::new("mins_per_group", Ty::Integer).not_null())
        .with_column(Col::new("cost_per_group", Ty::Integer).not_null())
        .with_column(Col::new("notes", Ty::varchar(8000)))
        .with_column(Col::new("number_of_staff", Ty::decimal(5, 2)))
        .with_column(Col::new("tt_type", Ty::Integer))
        .with_columns(change_stamp())
}

fn audit_course() -> TableDef {
    history("audit_course", "audit_course")
        .with_column(Col::new("course_id", Ty::Integer).not_null())
        .with_column(Col::new("aos_code", Ty::char(6)))
        .with_column(Col::new("pathway", Ty::varchar(50)).not_null())
        .with_column(Col::new("combined_with", Ty::varchar(50)))
        .with_column(Col::new("award", Ty::varchar(10)))
        .with_column(Col::new("notes", Ty::varchar(8000)))
        .with_column(Col::new("curriculum_id", Ty::Integer))
        .with_columns(change_stamp())
}

fn audit_course_session() -> TableDef {
    history("audit_course_session", "audit_course_session")
        .with_column(Col::new("course_session_id", Ty::Integer).not_null())
        .with_column(Col::new("session", Ty::Integer).not_null())
        .with_column(Col::new("costc", Ty::char(6)))
        .with_column(Col::new("description", Ty::varchar(100)).not_null())
        .with_column(Col::new("notes", Ty::unicode_text()))
        .with_column(Col::new("curriculum_id", Ty::Integer))
        .with_columns(change_stamp())
}

/// Links created or removed between parent and child rows of the junction
/// tables, e.g. components joining a component group.
fn audit_relationships() -> TableDef {
    history("audit_relationships", "audit_relationships")
        .with_column(Col::new("tbl", Ty::varchar(50)).not_null())
        .with_column(Col::new("lcom_username", Ty::varchar(50)).not_null())
        .with_column(Col::new("cmd", Ty::varchar(20)).not_null())
        .with_column(Col::new("datestamp", Ty::DateTime).not_null())
        .with_column(Col::new("parent", Ty::Integer).not_null())
        .with_column(Col::new("child", Ty::Integer).not_null())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_foreign_keys() {
        for table in tables() {
            assert_eq!(
                table.foreign_key_columns().count(),
                0,
                "{} must not reference live rows",
                table.entity
            );
        }
    }

    #[test]
    fn test_mirrors_end_with_change_stamp() {
        for table in tables().iter().filter(|t| t.entity.starts_with("audit_c")) {
            let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(&names[names.len() - 2..], &["datestamp", "cmd"], "{}", table.entity);
            assert_eq!(table.primary_key().count(), 0);
        }
    }

    #[test]
    fn test_lifecycle() {
        let tables = tables();
        let action = tables.iter().find(|t| t.entity == "AuditAction").unwrap();
        assert!(action.is_mutable());
        assert!(tables
            .iter()
            .filter(|t| t.entity != "AuditAction")
            .all(|t| t.lifecycle == Lifecycle::AppendOnly));
    }
}
