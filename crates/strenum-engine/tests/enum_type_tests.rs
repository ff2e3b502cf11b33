use super::*;
use crate::declaration::AutoValue;
use crate::hook::Sequential;

fn numbers(decl: Declaration<i64>, options: &BuildOptions) -> Result<EnumType<i64>> {
    EnumType::finalize("Number", decl, &Sequential, options)
}

#[test]
fn test_auto_values_are_sequential() {
    let decl = Declaration::new()
        .with("ONE", AutoValue::new())
        .unwrap()
        .with("TWO", AutoValue::new())
        .unwrap()
        .with("THREE", AutoValue::new())
        .unwrap();
    let ty = numbers(decl, &BuildOptions::default()).unwrap();

    let pairs: Vec<(&str, i64)> = ty.iter().map(|m| (m.name(), *m.value())).collect();
    assert_eq!(pairs, [("ONE", 1), ("TWO", 2), ("THREE", 3)]);
    assert_eq!(ty.len(), 3);
}

#[test]
fn test_auto_values_follow_explicit_ones() {
    let decl = Declaration::new()
        .with("A", 10_i64)
        .unwrap()
        .with("B", AutoValue::new())
        .unwrap();
    let ty = numbers(decl, &BuildOptions::default().with_start(0)).unwrap();
    assert_eq!(*ty.member("B").unwrap().value(), 11);
}

#[test]
fn test_placeholder_reaching_the_engine_is_an_error() {
    let decl = Declaration::new().with("A", ()).unwrap();
    let err = numbers(decl, &BuildOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        EnumError::UnresolvedPlaceholder { ref enum_name, ref member }
            if enum_name == "Number" && member == "A"
    ));
}

#[test]
fn test_duplicate_values_become_aliases() {
    let decl = Declaration::new()
        .with("RED", 1_i64)
        .unwrap()
        .with("CRIMSON", 1_i64)
        .unwrap()
        .with("BLUE", 2_i64)
        .unwrap();
    let ty = numbers(decl, &BuildOptions::default()).unwrap();

    assert_eq!(ty.len(), 2);
    assert_eq!(ty.names().collect::<Vec<_>>(), ["RED", "BLUE"]);

    let crimson = ty.get("CRIMSON").unwrap();
    assert_eq!(crimson.name(), "RED");
    assert!(crimson.is(ty.get("RED").unwrap()));

    let all: Vec<&str> = ty.iter_with_aliases().map(|(name, _)| name).collect();
    assert_eq!(all, ["RED", "CRIMSON", "BLUE"]);
}

#[test]
fn test_unique_policy_reports_every_alias() {
    let decl = Declaration::new()
        .with("A", 1_i64)
        .unwrap()
        .with("B", 1_i64)
        .unwrap()
        .with("C", 2_i64)
        .unwrap()
        .with("D", 1_i64)
        .unwrap();
    let err = numbers(decl, &BuildOptions::default().unique()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "duplicate values found in <enum 'Number'>: B -> A, D -> A"
    );
}

#[test]
fn test_lookups() {
    let decl = Declaration::new()
        .with("A", 1_i64)
        .unwrap()
        .with("B", 2_i64)
        .unwrap();
    let ty = numbers(decl, &BuildOptions::default()).unwrap();

    assert_eq!(ty.lookup(&2_i64).map(Member::name), Some("B"));
    assert!(ty.lookup(&3_i64).is_none());
    assert!(ty.contains_value(&1_i64));

    let err = ty.value_of(&3_i64).unwrap_err();
    assert_eq!(err.to_string(), "3 is not a valid Number");

    let err = ty.member("Z").unwrap_err();
    assert!(matches!(err, EnumError::UnknownMember { ref name, .. } if name == "Z"));
}

#[test]
fn test_membership_is_by_type_identity() {
    let make = || {
        let decl = Declaration::new().with("A", 1_i64).unwrap();
        numbers(decl, &BuildOptions::default()).unwrap()
    };
    let first = make();
    let second = make();

    assert_ne!(first.id(), second.id());
    let a = first.get("A").unwrap();
    assert!(first.contains(a));
    assert!(!second.contains(a));
    assert!(!a.is(second.get("A").unwrap()));
    assert_eq!(a.owner(), first.id());
    assert_eq!(a.index(), 0);
}

#[test]
fn test_rendering() {
    let decl = Declaration::new().with("RED", 1_i64).unwrap();
    let ty = numbers(decl, &BuildOptions::default()).unwrap();
    let red = ty.get("RED").unwrap();

    assert_eq!(ty.to_string(), "<enum 'Number'>");
    assert_eq!(red.to_string(), "Number.RED");
    assert_eq!(format!("{red:?}"), "<Number.RED: 1>");
    assert_eq!(red.owner_name(), "Number");
}

#[test]
fn test_names_from_options() {
    let decl: Declaration<i64> = Declaration::new();
    let ty = numbers(decl, &BuildOptions::default()).unwrap();
    assert_eq!(ty.qualname(), "Number");
    assert_eq!(ty.module(), None);
    assert!(ty.is_empty());

    let decl: Declaration<i64> = Declaration::new();
    let options = BuildOptions::default()
        .with_module("app.numbers")
        .with_qualname("Outer.Number");
    let ty = numbers(decl, &options).unwrap();
    assert_eq!(ty.qualname(), "Outer.Number");
    assert_eq!(ty.module(), Some("app.numbers"));
}

#[test]
fn test_into_iterator() {
    let decl = Declaration::new()
        .with("A", 1_i64)
        .unwrap()
        .with("B", 2_i64)
        .unwrap();
    let ty = numbers(decl, &BuildOptions::default()).unwrap();
    let mut total = 0_i64;
    for member in &ty {
        total += *member.value();
    }
    assert_eq!(total, 3);
}

#[test]
fn test_member_index_is_canonical_position() {
    let mut decl = Declaration::new();
    for i in 0..70_000_i64 {
        decl.insert(format!("M{i}").as_str(), i).unwrap();
    }
    decl.insert("ALIAS", 5_i64).unwrap();
    let ty = numbers(decl, &BuildOptions::default()).unwrap();

    assert_eq!(ty.len(), 70_000);
    for (position, member) in ty.iter().enumerate() {
        assert_eq!(member.index(), position);
    }
    assert_eq!(ty.get("ALIAS").unwrap().index(), 5);
    assert_eq!(ty.get("M69999").unwrap().index(), 69_999);
}
