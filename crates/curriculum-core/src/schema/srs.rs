//! Read-only mirror of the student-records system.

use crate::catalog::{ColumnDef as Col, ColumnType as Ty, Lifecycle, Namespace, TableDef};

/// All student-records tables in registration order.
pub fn tables() -> Vec<TableDef> {
    vec![student(), student_enrols()]
}

fn mirror(table_name: &str) -> TableDef {
    TableDef::new(table_name, table_name)
        .in_namespace(Namespace::StudentRecords)
        .with_lifecycle(Lifecycle::ReadOnly)
}

fn student() -> TableDef {
    mirror("tt_student")
        .with_column(Col::new("student_id", Ty::char(11)).not_null())
        .with_column(Col::new("name", Ty::varchar(100)).not_null())
        .with_column(Col::new("instrument", Ty::varchar(50)))
}

fn student_enrols() -> TableDef {
    mirror("tt_student_enrols")
        .with_column(Col::new("student_id", Ty::char(11)).not_null())
        .with_column(Col::new("aos_code", Ty::char(6)).not_null())
        .with_column(Col::new("session", Ty::Integer).not_null())
        .with_column(Col::new("acad_year", Ty::Integer).not_null())
        .with_column(Col::new("score", Ty::varchar(10)))
        .with_column(Col::new("stage", Ty::varchar(50)).not_null())
        .with_column(Col::new("module_code", Ty::varchar(15)).not_null())
}
