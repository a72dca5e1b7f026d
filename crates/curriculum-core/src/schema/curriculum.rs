//! Curriculum and costing tables.

use crate::catalog::{ColumnDef as Col, ColumnType as Ty, DefaultValue, IndexDef, TableDef};

/// Name of the external system holding student records.
pub const STUDENT_RECORDS: &str = "student records";

/// All core tables in registration order.
pub fn tables() -> Vec<TableDef> {
    vec![
        parameter(),
        aos_code(),
        calendar(),
        cgroup_strand(),
        component_staffing(),
        cost_type(),
        cost_type_pay(),
        costc(),
        department(),
        fee_category(),
        fee_status(),
        hecos_code(),
        module(),
        room_type(),
        sn_origin_config(),
        sn_usage(),
        change(),
        instrument(),
        stage(),
        tt_type(),
        week(),
        course_session(),
        curriculum(),
        course(),
        fee(),
        sn_instance(),
        calendar_map(),
        cgroup(),
        component(),
        student_number(),
        cgroup_config(),
        cost(),
        cost_week(),
        tgroup(),
        tgroup_member(),
        tgroup_staffing(),
        course_config(),
        course_session_config(),
    ]
}

/// Process-wide named settings.
fn parameter() -> TableDef {
    TableDef::new("parameter", "_parameter")
        .with_column(Col::new("parameter", Ty::varchar(100)).primary_key())
        .with_column(Col::new("value", Ty::varchar(100)))
}

fn aos_code() -> TableDef {
    TableDef::new("aos_code", "aos_code")
        .with_description(
            "An area of study.\n\nUsed Matches the code used in the student record system.",
        )
        .with_column(
            Col::new("aos_code", Ty::char(6))
                .primary_key()
                .comment("6 character unique identifier."),
        )
        .with_column(Col::new("description", Ty::varchar(50)).comment("Name of the area of study."))
        .with_column(
            Col::new("fee_cat_id", Ty::varchar(20)).references("fee_category", "fee_cat_id"),
        )
        .with_column(
            Col::new("department_id", Ty::nchar(3)).references("department", "department_id"),
        )
        .with_column(
            Col::new("pathway", Ty::varchar(50)).comment("Alternative to description field."),
        )
        .with_column(
            Col::new("valid_for_projection", Ty::Boolean)
                .comment("Flag for inclusion in future projection exercises."),
        )
        .with_column(
            Col::new("require_foundation", Ty::Boolean)
                .comment("Flag for whether the area of study includes a foundation year."),
        )
}

fn calendar() -> TableDef {
    TableDef::new("Calendar", "calendar")
        .with_description("A type of calendar.")
        .with_column(
            Col::new("calendar_type", Ty::unicode(20))
                .primary_key()
                .comment("Unique identifier for calendar type."),
        )
        .with_column(
            Col::new("long_description", Ty::unicode(200))
                .not_null()
                .comment("Detailed description of the calendar type."),
        )
        .with_column(
            Col::new("epoch_name", Ty::unicode(20))
                .comment("Name of the calendar blocks (e.g. 'term')"),
        )
}

fn cgroup_strand() -> TableDef {
    TableDef::new("CgroupStrand", "cgroup_strand")
        .with_description("A strand to which the component group belongs.")
        .with_column(
            Col::new("strand_id", Ty::varchar(5))
                .primary_key()
                .comment("Unique identifier for the strand."),
        )
        .with_column(
            Col::new("description", Ty::varchar(30))
                .not_null()
                .comment("Description of the stand."),
        )
}

fn component_staffing() -> TableDef {
    TableDef::new("ComponentStaffing", "component_staffing")
        .with_description(
            "Level of staffing on a component.\n\n\
             Discrete levels of staffing, according to the number of different staff working on the component.\n\
             Bands shouldn't overlap.",
        )
        .with_column(
            Col::new("band_id", Ty::Integer)
                .primary_key()
                .comment("Unique identifier for the staffing band."),
        )
        .with_column(
            Col::new("description", Ty::varchar(50))
                .not_null()
                .comment("Description of the band (should state the interval)."),
        )
        .with_column(
            Col::new("multiplier", Ty::decimal(10, 5))
                .not_null()
                .comment("Multiplier used in the calculation of module coordination."),
        )
}

fn cost_type() -> TableDef {
    TableDef::new("CostType", "cost_type")
        .with_description(
            "A category for the cost.\n\n\
             Used to modify the resource requirements of costs, and\n\
             to decide which costs are timetabled.",
        )
        .with_column(
            Col::new("cost_type", Ty::varchar(20))
                .primary_key()
                .comment("Unique identifier for the cost type."),
        )
        .with_column(
            Col::new("cost_multiplier", Ty::float(53))
                .not_null()
                .with_default(DefaultValue::Float(1.0))
                .comment("Decimal multiplier by which the minutes or value of the cost are multiplied."),
        )
        .with_column(
            Col::new("is_pay", Ty::Boolean)
                .not_null()
                .comment("If the cost relates to pay."),
        )
        .with_column(
            Col::new("is_contact", Ty::Boolean)
                .not_null()
                .comment("If the cost is staff-student contact time."),
        )
        .with_column(
            Col::new("nominal_account", Ty::Integer)
                .not_null()
                .comment("The general ledger account that thiscost type defaults to."),
        )
        .with_column(Col::new("is_assessing", Ty::Boolean).comment("If the cost is an assesment."))
        .with_column(
            Col::new("is_assignment", Ty::Boolean)
                .comment("If the cost is an assignment, i.e. invokes 'script' marking."),
        )
        .with_column(Col::new("is_taught", Ty::Boolean).comment("If the cost is teaching."))
}

fn cost_type_pay() -> TableDef {
    TableDef::new("CostTypePay", "cost_type_pay")
        .with_description("Provides description for the cost_type is_pay flag.")
        .with_column(
            Col::new("is_pay", Ty::Boolean)
                .primary_key()
                .comment("True or false for pay or nonpay respectively."),
        )
        .with_column(
            Col::new("description", Ty::varchar(30))
                .not_null()
                .comment("Verbose description like 'pay' or 'non-pay'."),
        )
}

fn costc() -> TableDef {
    TableDef::new("Costc", "costc")
        .with_description("A cost centre, or 'budget code'.")
        .with_column(
            Col::new("costc", Ty::char(6))
                .primary_key()
                .comment("Unique identifier for a cost centre."),
        )
        .with_column(
            Col::new("description", Ty::varchar(50))
                .not_null()
                .comment("Description of the cost centre."),
        )
        .with_column(
            Col::new("pathway", Ty::Boolean)
                .not_null()
                .comment("Alternative to description."),
        )
        .with_column(Col::new("primary_aos_code", Ty::char(6)).references("aos_code", "aos_code"))
        .with_column(
            Col::new("department_id", Ty::char(1)).references("department", "department_id"),
        )
}

fn department() -> TableDef {
    TableDef::new("Department", "department")
        .with_description(
            "A school or department.\n\nUsually a parent object for areas of study, or cost centre.",
        )
        .with_column(
            Col::new("department_id", Ty::nchar(3))
                .primary_key()
                .comment("Unique identifier for the department."),
        )
        .with_column(
            Col::new("description", Ty::varchar(50))
                .not_null()
                .comment("Short description of the department."),
        )
        .with_column(
            Col::new("long_description", Ty::varchar(50))
                .not_null()
                .comment("Formal title of the Department."),
        )
}

fn fee_category() -> TableDef {
    TableDef::new("FeeCategory", "fee_category")
        .with_description("A high-level category of fee.")
        .with_column(
            Col::new("fee_cat_id", Ty::varchar(20))
                .primary_key()
                .comment("Unique identifier for the category."),
        )
        .with_column(
            Col::new("description", Ty::nchar(10))
                .not_null()
                .comment("Description of the category."),
        )
}

fn fee_status() -> TableDef {
    TableDef::new("FeeStatus", "fee_status")
        .with_description("A low-level student fee status.\n\nUsually corresponds to a type of domicile.")
        .with_column(
            Col::new("fee_status_id", Ty::varchar(20))
                .primary_key()
                .comment("Unique identifier for the fee status. Should match SRS."),
        )
        .with_column(
            Col::new("status_description", Ty::varchar(50))
                .not_null()
                .comment("Description of the status."),
        )
        .with_column(Col::new("home_overseas", Ty::char(1)).references("fee_category", "fee_cat_id"))
}

fn hecos_code() -> TableDef {
    TableDef::new("HecosCode", "hecos_code")
        .with_description("Higher Education Classification of Subject.")
        .with_column(
            Col::new("hecos", Ty::Integer)
                .primary_key()
                .comment("Identifier for the classification."),
        )
        .with_column(
            Col::new("code_name", Ty::varchar(100))
                .not_null()
                .comment("Description of the classification."),
        )
}

fn module() -> TableDef {
    TableDef::new("Module", "module")
        .with_description(
            "A sub-category of component.\n\nShould exist for each credit-bearing component.",
        )
        .with_column(
            Col::new("module_code", Ty::varchar(9))
                .primary_key()
                .comment("Unique identifier for the module. Should match SRS."),
        )
        .with_column(
            Col::new("credits", Ty::Integer)
                .comment("Number of credits awarded upon successful completion."),
        )
        .with_column(Col::new("description", Ty::varchar(100)).comment("Description of the module."))
}

fn room_type() -> TableDef {
    TableDef::new("RoomType", "room_type")
        .with_column(
            Col::new("room_type", Ty::varchar(20))
                .primary_key()
                .comment("Unique identifier for the room_type. Is descriptive."),
        )
        .with_column(
            Col::new("average_sq_metre", Ty::Integer)
                .with_default(DefaultValue::Null)
                .comment("Average size of this room type, in square meters."),
        )
        .with_column(
            Col::new("on_campus", Ty::Boolean)
                .comment("If the room is on campus, i.e. creates a space requirement."),
        )
}

fn sn_origin_config() -> TableDef {
    TableDef::new("SNOriginConfig", "student_number_origin_config")
        .with_description("Valid combinations of origins and set categories.")
        .with_column(Col::new("origin", Ty::varchar(50)).primary_key())
        .with_column(Col::new("set_cat_id", Ty::char(3)).primary_key())
}

fn sn_usage() -> TableDef {
    TableDef::new("SNUsage", "student_number_usage")
        .with_description("What the student numbers are used for.")
        .with_column(
            Col::new("usage_id", Ty::varchar(20))
                .primary_key()
                .comment("Unique identifier for the usage."),
        )
        .with_column(Col::new("description", Ty::varchar(200)).comment("Description of the use."))
        .with_column(
            Col::new("surpress_all", Ty::Boolean)
                .with_default(DefaultValue::Bool(false))
                .comment("If this usage should be hidden in reporting."),
        )
        .with_column(Col::new("set_cat_id", Ty::char(3)))
}

fn change() -> TableDef {
    TableDef::new("Change", "tt_change")
        .with_description("A request to change the system.")
        .with_column(
            Col::new("tt_change_id", Ty::Integer)
                .primary_key()
                .comment("Unique identifier."),
        )
        .with_column(
            Col::new("date_created", Ty::Date)
                .not_null()
                .comment("Date the change was requested."),
        )
        .with_column(
            Col::new("category", Ty::varchar(50))
                .not_null()
                .comment("Rough categorisation of the change."),
        )
        .with_column(
            Col::new("screen", Ty::varchar(50))
                .comment("Screen of the app which would primarily be affected."),
        )
        .with_column(
            Col::new("requested_by", Ty::varchar(100)).comment("User that requested the change."),
        )
        .with_column(
            Col::new("description", Ty::varchar(8000))
                .not_null()
                .comment("Verbose description of what should be changed."),
        )
        .with_column(
            Col::new("progress", Ty::varchar(8000))
                .comment("Feedback and explanation of any progress made (or not made)."),
        )
        .with_column(
            Col::new("closed", Ty::Boolean)
                .not_null()
                .with_default(DefaultValue::Bool(false))
                .comment("If the request is either complete or cancelled"),
        )
        .with_column(Col::new("closed_date", Ty::Date).comment("Date the request was closed."))
        .with_column(
            Col::new("closed_version", Ty::nchar(10))
                .comment("The version of the app in which the change was closed."),
        )
        .with_column(
            Col::new("suspend", Ty::Boolean)
                .with_default(DefaultValue::Bool(false))
                .comment("If the field has been 'parked'."),
        )
}

fn instrument() -> TableDef {
    TableDef::new("Instrument", "tt_instrument")
        .with_description(
            "A type of instrument.\n\nExists to map several similar instrument names to shorter versions.",
        )
        .with_column(
            Col::new("instrument", Ty::varchar(50))
                .primary_key()
                .comment("Long name of the instrument."),
        )
        .with_column(
            Col::new("short_instrument", Ty::varchar(50))
                .comment("Shortened name of the instrument, or instrument group."),
        )
}

fn stage() -> TableDef {
    TableDef::new("Stage", "tt_stage")
        .with_description("The stage of an enrolment, or application.")
        .with_column(
            Col::new("stage", Ty::varchar(50))
                .primary_key()
                .comment("Unique identifer for the stage."),
        )
        .with_column(
            Col::new("is_pending", Ty::Boolean)
                .not_null()
                .comment("If the stage is not yet a committed enrolment."),
        )
}

fn tt_type() -> TableDef {
    TableDef::new("tt_Type", "tt_type")
        .with_column(Col::new("tt_type_id", Ty::Integer).primary_key())
        .with_column(Col::new("description", Ty::varchar(20)).not_null())
}

fn week() -> TableDef {
    TableDef::new("Week", "week")
        .with_description(
            "Mapper to take celcat weeks to financial periods.\n\n\
             Used for accurate temporal costing of non-contractual costs.",
        )
        .with_column(
            Col::new("celcat_week", Ty::Integer)
                .primary_key()
                .comment("Unique numebr for the week in Celcat."),
        )
        .with_column(
            Col::new("period", Ty::Integer)
                .not_null()
                .comment("Financial period to which the week belongs. "),
        )
}

fn course_session() -> TableDef {
    TableDef::new("CourseSession", "course_session")
        .with_description("A year of study, in a given course.")
        .with_column(
            Col::new("course_session_id", Ty::Integer)
                .primary_key()
                .comment("Unique identifier for the course session."),
        )
        .with_column(
            Col::new("session", Ty::Integer)
                .not_null()
                .with_default(DefaultValue::Int(1))
                .comment("The enumerated year of study."),
        )
        .with_column(Col::new("costc", Ty::char(6)).references("costc", "costc"))
        .with_column(
            Col::new("description", Ty::varchar(100))
                .not_null()
                .comment("Description of the year of study. Not to include session."),
        )
        .with_column(
            Col::new("level", Ty::Integer)
                .comment("Qualification level of study (*not* level of final qualification)."),
        )
        .with_column(
            Col::new("notes", Ty::unicode_text())
                .with_default(DefaultValue::Null)
                .comment("Additional notes on the course session."),
        )
        .with_column(
            Col::new("curriculum_id", Ty::Integer)
                .comment("The curriculum to which the course_session belongs."),
        )
}

fn curriculum() -> TableDef {
    TableDef::new("Curriculum", "curriculum")
        .with_description("A specification of curriculum delivery.")
        .with_column(
            Col::new("curriculum_id", Ty::Integer)
                .primary_key()
                .comment("Unique identifier for the curriculum."),
        )
        .with_column(
            Col::new("description", Ty::varchar(100))
                .not_null()
                .comment("Description of the curriculum (likely to be 'Main Curriculum')."),
        )
        .with_column(
            Col::new("created_date", Ty::DateTime)
                .not_null()
                .comment("When the curriculum was created."),
        )
        .with_column(
            Col::new("acad_year", Ty::Integer)
                .not_null()
                .comment("The academic year in whic hthe curriculum runs."),
        )
        .with_column(
            Col::new("usage_id", Ty::varchar(20)).references("student_number_usage", "usage_id"),
        )
        .with_column(
            Col::new("can_edit", Ty::Boolean)
                .with_default(DefaultValue::Bool(true))
                .comment("If the contens of the curriculum can be edited."),
        )
        .with_index(IndexDef::new("IX_curriculum", ["acad_year", "usage_id"]))
}

fn course() -> TableDef {
    TableDef::new("Course", "course")
        .with_description("A set of course sessions.")
        .with_column(
            Col::new("course_id", Ty::Integer)
                .primary_key()
                .comment("Unique identifier for the course."),
        )
        .with_column(Col::new("aos_code", Ty::char(6)).references("aos_code", "aos_code"))
        .with_column(
            Col::new("pathway", Ty::varchar(50))
                .not_null()
                .comment("Description of the course, or major pathway if combined."),
        )
        .with_column(
            Col::new("combined_with", Ty::varchar(50))
                .comment("Optional - name of the minor pathway, if combined."),
        )
        .with_column(Col::new("award", Ty::varchar(10)).comment("Short name of the final award."))
        .with_column(
            Col::new("curriculum_id", Ty::Integer).references("curriculum", "curriculum_id"),
        )
}

fn fee() -> TableDef {
    TableDef::new("Fee", "fee")
        .with_description("A course fee, unique to year, category, status and session.")
        .with_column(
            Col::new("acad_year", Ty::Integer)
                .primary_key()
                .comment("Academic year."),
        )
        .with_column(
            Col::new("fee_cat_id", Ty::varchar(20))
                .primary_key()
                .references("fee_category", "fee_cat_id"),
        )
        .with_column(
            Col::new("fee_status_id", Ty::varchar(20))
                .primary_key()
                .references("fee_status", "fee_status_id"),
        )
        .with_column(
            Col::new("session", Ty::Integer)
                .primary_key()
                .comment("Year of study."),
        )
        .with_column(
            Col::new("gross_fee", Ty::decimal(10, 2))
                .not_null()
                .comment("Gross fee, before any waivers."),
        )
        .with_column(
            Col::new("waiver", Ty::decimal(10, 2))
                .comment("Reduction to fee that will be universally applied. "),
        )
}

fn sn_instance() -> TableDef {
    TableDef::new("SNInstance", "student_number_instance")
        .with_description("An instance of a set of student numbers.")
        .with_column(
            Col::new("instance_id", Ty::Integer)
                .primary_key()
                .comment("Unique identifier for the instance."),
        )
        .with_column(Col::new("acad_year", Ty::Integer).not_null().comment("Academic year."))
        .with_column(
            Col::new("usage_id", Ty::varchar(20))
                .not_null()
                .references("student_number_usage", "usage_id"),
        )
        .with_column(
            Col::new("input_datetime", Ty::DateTime)
                .with_default(DefaultValue::CurrentTimestamp)
                .comment("When the instance was created."),
        )
        .with_column(
            Col::new("lcom_username", Ty::varchar(50))
                .comment("Login name of the user that created the instance."),
        )
        .with_column(
            Col::new("surpress", Ty::Boolean)
                .not_null()
                .with_default(DefaultValue::Bool(false))
                .comment("If the instance should be hidden from reporting."),
        )
        .with_column(Col::new("costc", Ty::char(6)).references("costc", "costc"))
}

fn calendar_map() -> TableDef {
    TableDef::new("CalendarMap", "calendar_map")
        .with_description("Mapping weeks from an academic calendar in to actual celcat weeks.")
        .with_column(
            Col::new("acad_week", Ty::Integer)
                .primary_key()
                .comment("Week of the academic calendar."),
        )
        .with_column(
            Col::new("curriculum_id", Ty::Integer)
                .primary_key()
                .references("curriculum", "curriculum_id"),
        )
        .with_column(
            Col::new("term", Ty::Integer)
                .not_null()
                .comment("Epoch to which the week belongs."),
        )
        .with_column(
            Col::new("description", Ty::unicode(50))
                .comment("Optional field for any special name of the week."),
        )
        .with_column(
            Col::new("calendar_type", Ty::unicode(20))
                .primary_key()
                .references("calendar", "calendar_type"),
        )
        .with_column(
            Col::new("celcat_week", Ty::Integer)
                .not_null()
                .references("week", "celcat_week"),
        )
}

fn cgroup() -> TableDef {
    TableDef::new("CGroup", "cgroup")
        .with_description("A group of mutually exclusive components.")
        .with_column(
            Col::new("cgroup_id", Ty::Integer)
                .primary_key()
                .comment("Unique identifier for the component group."),
        )
        .with_column(
            Col::new("description", Ty::varchar(200))
                .not_null()
                .comment("Description of the component group."),
        )
        .with_column(
            Col::new("strand", Ty::varchar(5))
                .not_null()
                .with_default(DefaultValue::String("MISC".to_string()))
                .references("cgroup_strand", "strand_id"),
        )
        .with_column(
            Col::new("notes", Ty::varchar(8000)).comment("Notes about the compoennt group."),
        )
        .with_column(
            Col::new("curriculum_id", Ty::Integer).references("curriculum", "curriculum_id"),
        )
}

fn component() -> TableDef {
    TableDef::new("Component", "component")
        .with_description("Similar to a module, a collection of costs.")
        .with_column(
            Col::new("component_id", Ty::Integer)
                .primary_key()
                .comment("Unique identifier for the component."),
        )
        .with_column(
            Col::new("description", Ty::unicode(200))
                .not_null()
                .comment("Description of the component."),
        )
        .with_column(
            Col::new("module_code", Ty::varchar(9))
                .comment("Module code for matching back to student data."),
        )
        .with_column(
            Col::new("calendar_type", Ty::unicode(20))
                .not_null()
                .references("calendar", "calendar_type"),
        )
        .with_column(
            Col::new("coordination_eligible", Ty::Boolean)
                .not_null()
                .comment("If the component should incur the additional Module Coordination cost."),
        )
        .with_column(Col::new("hecos", Ty::Integer).references("hecos_code", "hecos"))
        .with_column(
            Col::new("staffing_band", Ty::Integer).references("component_staffing", "band_id"),
        )
        .with_column(
            Col::new("curriculum_id", Ty::Integer).references("curriculum", "curriculum_id"),
        )
}

fn student_number() -> TableDef {
    TableDef::new("SN", "student_number")
        .with_description("A student number in an instance, with several aggregations.")
        .with_column(
            Col::new("instance_id", Ty::Integer)
                .primary_key()
                .references("student_number_instance", "instance_id"),
        )
        .with_column(
            Col::new("fee_status_id", Ty::varchar(20))
                .primary_key()
                .references("fee_status", "fee_status_id"),
        )
        .with_column(
            Col::new("origin", Ty::varchar(50))
                .primary_key()
                .comment("Where the student numbers come from."),
        )
        .with_column(
            Col::new("aos_code", Ty::char(6))
                .primary_key()
                .references("aos_code", "aos_code"),
        )
        .with_column(
            Col::new("session", Ty::Integer)
                .primary_key()
                .comment("Year of study; should match sessions in course_session."),
        )
        .with_column(
            Col::new("student_count", Ty::decimal(10, 5))
                .not_null()
                .comment("Number of students."),
        )
}

fn cgroup_config() -> TableDef {
    TableDef::new("CGroupConfig", "cgroup_config")
        .with_description("Define membership of component_group.")
        .with_column(
            Col::new("cgroup_id", Ty::Integer)
                .primary_key()
                .with_index()
                .references("cgroup", "cgroup_id"),
        )
        .with_column(
            Col::new("component_id", Ty::Integer)
                .primary_key()
                .references("component", "component_id"),
        )
        .with_column(
            Col::new("ratio", Ty::Integer)
                .not_null()
                .with_default(DefaultValue::Int(1))
                .comment(
                    "Number to control prediction of relative enrolment of students within the component group.",
                ),
        )
}

/// `mins_per_group` and `number_of_staff` apply only to pay cost types,
/// `cost_per_group` only to non-pay ones. The store does not enforce this.
fn cost() -> TableDef {
    TableDef::new("Cost", "cost")
        .with_description("An instance of curriculum delivery.")
        .with_column(
            Col::new("cost_id", Ty::Integer)
                .primary_key()
                .comment("Unique identifier for the cost."),
        )
        .with_column(
            Col::new("component_id", Ty::Integer)
                .not_null()
                .references("component", "component_id"),
        )
        .with_column(Col::new("room_type", Ty::varchar(20)).references("room_type", "room_type"))
        .with_column(
            Col::new("cost_type", Ty::varchar(20))
                .not_null()
                .references("cost_type", "cost_type"),
        )
        .with_column(
            Col::new("description", Ty::varchar(200))
                .not_null()
                .comment("Description of the cost."),
        )
        .with_column(
            Col::new("max_group_size", Ty::Integer)
                .not_null()
                .comment("Maximum number of students in a group; variable in calculating the number of groups required."),
        )
        .with_column(
            Col::new("mins_per_group", Ty::Integer)
                .not_null()
                .comment("Number of minutes delivered per group per week. Only used if the cost type is pay."),
        )
        .with_column(
            Col::new("cost_per_group", Ty::Integer)
                .not_null()
                .comment("Financial cost per group per week. Only used if the cost type is non-pay."),
        )
        .with_column(Col::new("notes", Ty::varchar(8000)).comment("Notes about the cost."))
        .with_column(
            Col::new("number_of_staff", Ty::decimal(5, 2))
                .comment("Number of staff required to deliver the cost (per group per week). Only used if the cost type is pay."),
        )
        .with_column(Col::new("tt_type", Ty::Integer).with_default(DefaultValue::Int(1)))
        .with_column(
            Col::new("unit_cost", Ty::Integer)
                .not_null()
                .with_default(DefaultValue::Int(0))
                .comment("Number of minutes delivered if pay or financial cost if non pay, per group per week."),
        )
}

fn cost_week() -> TableDef {
    TableDef::new("CostWeek", "cost_week")
        .with_description("Which academic weeks that a cost runs.")
        .with_column(
            Col::new("cost_id", Ty::Integer)
                .primary_key()
                .references("cost", "cost_id"),
        )
        .with_column(Col::new("acad_week", Ty::Integer).primary_key())
}

fn tgroup() -> TableDef {
    TableDef::new("TGroup", "tt_tgroup")
        .with_description("A group of students to be timetabled together.")
        .with_column(
            Col::new("tgroup_id", Ty::Integer)
                .primary_key()
                .comment("Unique identifier for the group."),
        )
        .with_column(
            Col::new("cost_id", Ty::Integer)
                .not_null()
                .references("cost", "cost_id"),
        )
        .with_column(
            Col::new("notes", Ty::varchar(255))
                .comment("Notes for the benefit of either academic staff or timetabling staff."),
        )
        .with_column(Col::new("room_type", Ty::varchar(20)).references("room_type", "room_type"))
}

fn tgroup_member() -> TableDef {
    TableDef::new("TGroupMember", "tt_tgroup_membership")
        .with_description("Membership of a timetabling group.")
        .with_column(
            Col::new("tgroup_id", Ty::Integer)
                .primary_key()
                .references("tt_tgroup", "tgroup_id"),
        )
        .with_column(
            Col::new("student_id", Ty::char(11))
                .primary_key()
                .cross_system(STUDENT_RECORDS, "student list")
                .comment("Un-enforced foreign key to student list."),
        )
}

fn tgroup_staffing() -> TableDef {
    TableDef::new("TGroupStaffing", "tt_tgroup_staffing")
        .with_description("How staff are assigned to a group.")
        .with_column(
            Col::new("tgroup_id", Ty::Integer)
                .primary_key()
                .references("tt_tgroup", "tgroup_id"),
        )
        .with_column(
            Col::new("staff_id", Ty::varchar(50))
                .primary_key()
                .comment("Unique identifier for a member of staff."),
        )
}

fn course_config() -> TableDef {
    TableDef::new("CourseConfig", "course_config")
        .with_description("Configuring the course to course_session relationships.")
        .with_column(
            Col::new("course_id", Ty::Integer)
                .primary_key()
                .references("course", "course_id"),
        )
        .with_column(
            Col::new("course_session_id", Ty::Integer)
                .primary_key()
                .references("course_session", "course_session_id"),
        )
}

fn course_session_config() -> TableDef {
    TableDef::new("CourseSessionConfig", "course_session_config")
        .with_description("Configure the course_session to component group relationship.")
        .with_column(
            Col::new("course_session_id", Ty::Integer)
                .primary_key()
                .references("course_session", "course_session_id"),
        )
        .with_column(
            Col::new("cgroup_id", Ty::Integer)
                .primary_key()
                .references("cgroup", "cgroup_id"),
        )
}
