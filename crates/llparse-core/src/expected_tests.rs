use crate::Expected;

#[test]
fn insert_keeps_first_occurrence() {
    let mut set = Expected::new();

    assert!(set.insert("b"));
    assert!(set.insert("a"));
    assert!(!set.insert("b"));

    assert_eq!(set.to_vec(), vec!["b", "a"]);
}

#[test]
fn union_appends_missing_in_order() {
    let mut left: Expected = ["x", "y"].into_iter().collect();
    let right: Expected = ["z", "x", "w"].into_iter().collect();

    left.union(right);

    assert_eq!(left.to_vec(), vec!["x", "y", "z", "w"]);
}

#[test]
fn equality_is_ordered() {
    let ab: Expected = ["a", "b"].into_iter().collect();
    let ba: Expected = ["b", "a"].into_iter().collect();

    assert_ne!(ab, ba);
    assert_eq!(ab, ab.clone());
}

#[test]
fn display() {
    assert_eq!(Expected::new().to_string(), "nothing");
    assert_eq!(Expected::singleton(")").to_string(), "`)`");

    let set: Expected = [r"\d+", "("].into_iter().collect();
    insta::assert_snapshot!(set, @r"one of `\d+`, `(`");
}

#[test]
fn contains() {
    let set = Expected::singleton("end of input");

    assert!(set.contains("end of input"));
    assert!(!set.contains("end"));
    assert_eq!(set.len(), 1);
    assert!(!set.is_empty());
}
