//! Integration tests for the loaded curriculum model and its documentation.

use curriculum_core::docs::{DESCRIPTION_MISSING, FK_MARKER, PK_MARKER};
use curriculum_core::{
    ColumnOrder, CurriculumModel, DefaultValue, DocOptions, Namespace, TableDef,
};

fn model() -> CurriculumModel {
    CurriculumModel::load().unwrap()
}

/// Split a synthesized doc into `(column, type, note)` entries.
fn attributes(doc: &str) -> Vec<(String, String, String)> {
    let (_, listing) = doc.split_once("    ----------").unwrap();
    let lines: Vec<&str> = listing.lines().skip(1).collect();
    lines
        .chunks(2)
        .map(|pair| {
            let (name, ty) = pair[0].trim().split_once(" : ").unwrap();
            (name.to_string(), ty.to_string(), pair[1].trim().to_string())
        })
        .collect()
}

fn default_of<'a>(table: &'a TableDef, column: &str) -> Option<&'a DefaultValue> {
    table.get_column(column).unwrap().default.as_ref()
}

#[test]
fn test_foreign_keys_reference_resolved_entities() {
    let model = model();

    for table in model.registry().tables() {
        let doc = model.doc(&table.entity).unwrap();
        let attrs = attributes(doc);
        for column in table.foreign_key_columns() {
            let target = column.primary_reference().unwrap();
            let entity = model.registry().entity_for_table(&target.table).unwrap();
            let (_, _, note) = attrs.iter().find(|(name, _, _)| *name == column.name).unwrap();

            assert!(
                note.ends_with(&format!("{FK_MARKER} See `{entity}`.")),
                "{}.{}: {}",
                table.entity,
                column.name,
                note
            );
        }
    }
}

#[test]
fn test_component_hecos_references_hecos_code() {
    let model = model();
    let doc = model.doc("Component").unwrap();

    assert!(doc.contains("    hecos : INTEGER\n        **[FK]** See `HecosCode`."));
    assert!(!doc.contains("See `hecos_code`"));
}

#[test]
fn test_every_column_listed_once_in_declaration_order() {
    let model = model();

    for table in model.registry().tables() {
        let listed: Vec<String> = attributes(model.doc(&table.entity).unwrap())
            .into_iter()
            .map(|(name, _, _)| name)
            .collect();
        let declared: Vec<String> = table.columns.iter().map(|c| c.name.clone()).collect();

        assert_eq!(listed, declared, "{}", table.entity);
    }
}

#[test]
fn test_listing_is_reproducible() {
    let first = model();
    let second = model();

    assert_eq!(first.docs(), second.docs());
}

#[test]
fn test_alphabetical_listing() {
    let model =
        CurriculumModel::load_with(DocOptions::default().with_column_order(ColumnOrder::Alphabetical))
            .unwrap();
    let names: Vec<String> = attributes(model.doc("Cost").unwrap())
        .into_iter()
        .map(|(name, _, _)| name)
        .collect();

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert_eq!(names.len(), 12);
}

#[test]
fn test_primary_key_markers() {
    let model = model();

    for table in model.registry().tables() {
        for (name, _, note) in attributes(model.doc(&table.entity).unwrap()) {
            let column = table.get_column(&name).unwrap();
            assert_eq!(
                note.starts_with(PK_MARKER),
                column.primary_key,
                "{}.{}",
                table.entity,
                name
            );
        }
    }
}

#[test]
fn test_types_are_rendered() {
    let model = model();
    let attrs = attributes(model.doc("SN").unwrap());

    let types: Vec<&str> = attrs.iter().map(|(_, ty, _)| ty.as_str()).collect();
    assert_eq!(
        types,
        vec!["INTEGER", "VARCHAR(20)", "VARCHAR(50)", "CHAR(6)", "INTEGER", "DECIMAL(10, 5)"]
    );
}

#[test]
fn test_missing_comment_placeholder() {
    let model = model();
    let doc = model.doc("Cost").unwrap();

    assert!(doc.contains(&format!("    tt_type : INTEGER\n        {DESCRIPTION_MISSING}")));
}

#[test]
fn test_missing_table_description_placeholder() {
    let model = model();

    assert!(model
        .doc("RoomType")
        .unwrap()
        .starts_with("    :Name in DB: ``room_type``\n\n    Description missing\n"));
    assert!(model
        .doc("tt_Type")
        .unwrap()
        .contains("tt_type_id : INTEGER\n        **[PK]** Description missing"));
}

#[test]
fn test_cross_system_reference_keeps_comment() {
    let model = model();
    let member = model.table("TGroupMember").unwrap();
    let student = member.get_column("student_id").unwrap();

    assert!(student.cross_system.is_some());
    assert!(!student.is_foreign_key());
    assert!(model
        .doc("TGroupMember")
        .unwrap()
        .contains("**[PK]** Un-enforced foreign key to student list."));
}

#[test]
fn test_business_defaults() {
    let model = model();
    let registry = model.registry();

    assert_eq!(
        default_of(registry.get("CGroupConfig").unwrap(), "ratio"),
        Some(&DefaultValue::Int(1))
    );
    assert_eq!(
        default_of(registry.get("CostType").unwrap(), "cost_multiplier"),
        Some(&DefaultValue::Float(1.0))
    );
    assert_eq!(
        default_of(registry.get("Curriculum").unwrap(), "can_edit"),
        Some(&DefaultValue::Bool(true))
    );
    assert_eq!(
        default_of(registry.get("SNInstance").unwrap(), "surpress"),
        Some(&DefaultValue::Bool(false))
    );
    assert_eq!(
        default_of(registry.get("Change").unwrap(), "closed"),
        Some(&DefaultValue::Bool(false))
    );
    assert_eq!(
        default_of(registry.get("CGroup").unwrap(), "strand"),
        Some(&DefaultValue::String("MISC".into()))
    );
    assert_eq!(
        default_of(registry.get("CourseSession").unwrap(), "session"),
        Some(&DefaultValue::Int(1))
    );
}

#[test]
fn test_composite_keys() {
    let model = model();
    let key = |entity: &str| model.table(entity).unwrap().primary_key_names();

    assert_eq!(
        key("SN"),
        vec!["instance_id", "fee_status_id", "origin", "aos_code", "session"]
    );
    assert_eq!(
        key("Fee"),
        vec!["acad_year", "fee_cat_id", "fee_status_id", "session"]
    );
    assert_eq!(
        key("CalendarMap"),
        vec!["acad_week", "curriculum_id", "calendar_type"]
    );
    assert_eq!(key("CGroupConfig"), vec!["cgroup_id", "component_id"]);
    assert_eq!(key("CostWeek"), vec!["cost_id", "acad_week"]);
    assert_eq!(key("TGroupMember"), vec!["tgroup_id", "student_id"]);
    assert_eq!(key("TGroupStaffing"), vec!["tgroup_id", "staff_id"]);
}

#[test]
fn test_curriculum_index() {
    let model = model();
    let curriculum = model.table("Curriculum").unwrap();
    let index = &curriculum.indexes[0];

    assert_eq!(index.name, "IX_curriculum");
    assert_eq!(index.columns, vec!["acad_year", "usage_id"]);
    assert!(!index.unique);
}

#[test]
fn test_curriculum_owns_its_children() {
    let model = model();
    let children: Vec<&str> = model
        .registry()
        .references_to("Curriculum")
        .unwrap()
        .iter()
        .map(|r| r.from.entity.as_str())
        .collect();

    assert_eq!(children, vec!["Course", "CalendarMap", "CGroup", "Component"]);
}

#[test]
fn test_audit_docs_have_no_cross_references() {
    let model = model();

    for table in model.registry().tables_in(Namespace::Audit) {
        assert!(!model.doc(&table.entity).unwrap().contains(FK_MARKER));
    }
}

#[test]
fn test_parameter_table() {
    let model = model();
    let parameter = model.table("parameter").unwrap();

    assert_eq!(parameter.table_name, "_parameter");
    assert_eq!(parameter.primary_key_names(), vec!["parameter"]);
    assert!(model
        .doc("parameter")
        .unwrap()
        .starts_with("    :Name in DB: ``_parameter``"));
}
