use super::*;

#[test]
fn test_value_is_the_member_name() {
    assert_eq!(&*NameAsValue.next_value("RED", 1, 0, &[]), "RED");
}

#[test]
fn test_other_inputs_are_ignored() {
    let earlier: Vec<StrValue> = vec![Arc::from("A"), Arc::from("B")];
    assert_eq!(&*NameAsValue.next_value("C", 100, 2, &earlier), "C");
    assert_eq!(&*NameAsValue.next_value("C", -5, 0, &[]), "C");
}
