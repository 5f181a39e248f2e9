//! Registry construction and lookup behavior.

use uniplan_errors::ErrorKind;
use uniplan_tools::build_registry;

#[test]
fn test_registry_contains_full_tool_surface() {
    let registry = build_registry();
    let names: Vec<&str> = registry.list().iter().map(|tool| tool.name).collect();
    assert_eq!(
        names,
        vec![
            "auditories_free",
            "auditories_occupancy_check",
            "directories_get",
            "employees_search",
            "global_subject_search",
            "schedule_get",
            "schedule_get_day",
            "schedule_search_event",
            "structure_group_info",
            "system_current_week",
        ]
    );
}

#[test]
fn test_every_schema_is_a_flat_object() {
    for tool in build_registry().list() {
        assert_eq!(
            tool.input_schema["type"], "object",
            "schema of {} must be an object",
            tool.name
        );
        assert!(
            tool.input_schema.get("properties").is_some(),
            "schema of {} must declare properties",
            tool.name
        );
        let rendered = tool.input_schema.to_string();
        assert!(
            !rendered.contains("anyOf") && !rendered.contains("oneOf"),
            "schema of {} must stay flat for tool-calling clients",
            tool.name
        );
    }
}

#[test]
fn test_required_fields_exist_in_properties() {
    for tool in build_registry().list() {
        let properties = tool.input_schema["properties"]
            .as_object()
            .expect("properties object");
        if let Some(required) = tool.input_schema.get("required") {
            for field in required.as_array().expect("required array") {
                let field = field.as_str().expect("required entries are strings");
                assert!(
                    properties.contains_key(field),
                    "{}: required field {field} missing from properties",
                    tool.name
                );
            }
        }
    }
}

#[test]
fn test_lookup_finds_registered_tool() {
    let registry = build_registry();
    let entry = registry.lookup("schedule_get").unwrap();
    assert_eq!(entry.name, "schedule_get");
    assert!(!entry.description.is_empty());
}

#[test]
fn test_unknown_tool_is_not_found() {
    let err = build_registry().lookup("schedule_delete").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
