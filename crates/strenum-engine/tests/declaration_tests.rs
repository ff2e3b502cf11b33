use super::*;

#[test]
fn test_insertion_order_is_member_order() {
    let mut decl: Declaration<i64> = Declaration::new();
    decl.insert("C", 3_i64).unwrap();
    decl.insert("A", ()).unwrap();
    decl.insert("B", AutoValue::new()).unwrap();

    let names: Vec<&str> = decl.names().map(|n| &**n).collect();
    assert_eq!(names, ["C", "A", "B"]);
    assert_eq!(decl.len(), 3);
    assert!(!decl.is_empty());
}

#[test]
fn test_empty_grouping_is_placeholder() {
    let value: DeclaredValue<i64> = ().into();
    assert!(value.is_placeholder());
    assert!(!value.is_auto());
    assert_eq!(value.explicit(), None);
}

#[test]
fn test_string_values_convert_to_explicit() {
    let value: DeclaredValue<Arc<str>> = "blue".into();
    assert_eq!(value.explicit().map(|v| &**v), Some("blue"));

    let value: DeclaredValue<Arc<str>> = String::from("green").into();
    assert_eq!(value, DeclaredValue::Explicit(Arc::from("green")));
}

#[test]
fn test_reusing_a_name_is_rejected() {
    let mut decl: Declaration<i64> = Declaration::new();
    decl.insert("A", 1_i64).unwrap();
    let err = decl.insert("A", 2_i64).unwrap_err();
    assert!(matches!(err, EnumError::DuplicateName { ref name } if name == "A"));
    assert_eq!(err.to_string(), "attempted to reuse key: \"A\"");
    // The first binding survives.
    assert_eq!(decl.get("A"), Some(&DeclaredValue::Explicit(1)));
}

#[test]
fn test_invalid_names_never_enter_the_declaration() {
    let mut decl: Declaration<i64> = Declaration::new();
    assert!(decl.insert("__init__", 1).is_err());
    assert!(decl.insert("9lives", 1).is_err());
    assert!(decl.is_empty());
}

#[test]
fn test_get_mut_keeps_position() {
    let mut decl: Declaration<i64> = Declaration::new()
        .with("A", ())
        .unwrap()
        .with("B", 2_i64)
        .unwrap()
        .with("C", ())
        .unwrap();
    assert!(decl.has_placeholders());

    *decl.get_mut("A").unwrap() = DeclaredValue::Auto(AutoValue::new());
    for (_, value) in decl.iter_mut() {
        if value.is_placeholder() {
            *value = DeclaredValue::Auto(AutoValue::new());
        }
    }

    assert!(!decl.has_placeholders());
    let entries: Vec<(&str, bool)> = decl.iter().map(|(n, v)| (&**n, v.is_auto())).collect();
    assert_eq!(entries, [("A", true), ("B", false), ("C", true)]);
    assert!(decl.contains("B"));
    assert!(!decl.contains("D"));
}
