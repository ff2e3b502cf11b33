use super::*;
use crate::error::EnumError;
use crate::hook::Sequential;

#[test]
fn test_split_names() {
    let names: Vec<&str> = split_names("A B,C ,  D\tE").collect();
    assert_eq!(names, ["A", "B", "C", "D", "E"]);
    assert_eq!(split_names(" , ").count(), 0);
}

#[test]
fn test_names_are_auto_valued_in_order() {
    let ty = EnumType::<i64>::functional(
        "Animal",
        ["ANT", "BEE", "CAT"],
        &Sequential,
        &BuildOptions::default(),
    )
    .unwrap();
    let pairs: Vec<(&str, i64)> = ty.iter().map(|m| (m.name(), *m.value())).collect();
    assert_eq!(pairs, [("ANT", 1), ("BEE", 2), ("CAT", 3)]);
}

#[test]
fn test_pairs_keep_their_values() {
    let specs: Vec<MemberSpec<i64>> = vec![("A", 5_i64).into(), "B".into()];
    let ty = EnumType::<i64>::functional("Mixed", specs, &Sequential, &BuildOptions::default())
        .unwrap();
    assert_eq!(*ty.member("A").unwrap().value(), 5);
    assert_eq!(*ty.member("B").unwrap().value(), 6);
}

#[test]
fn test_empty_spec_list_builds_empty_type() {
    let ty = EnumType::<i64>::functional(
        "Empty",
        Vec::<MemberSpec<i64>>::new(),
        &Sequential,
        &BuildOptions::default(),
    )
    .unwrap();
    assert!(ty.is_empty());
    assert_eq!(ty.name(), "Empty");
}

#[test]
fn test_repeated_names_are_rejected() {
    let err =
        EnumType::<i64>::functional("Dup", ["A", "A"], &Sequential, &BuildOptions::default())
            .unwrap_err();
    assert!(matches!(err, EnumError::DuplicateName { ref name } if name == "A"));
}

#[test]
fn test_spec_name() {
    let name: MemberSpec<i64> = "A".into();
    let pair: MemberSpec<i64> = ("B", 2_i64).into();
    assert_eq!(name.name(), "A");
    assert_eq!(pair.name(), "B");
    assert_eq!(MemberSpec::<i64>::from(String::from("A")), name);
}
