use pretty_assertions::assert_eq;

use super::*;

fn geometry() -> Universe {
    let mut u = Universe::new();
    u.register("Shape", 0, Vec::<String>::new())
        .expect("register Shape");
    u.register("Polygon", 0, ["Shape"]).expect("register Polygon");
    u.register("Triangle", 0, ["Polygon"])
        .expect("register Triangle");
    u.register("Circle", 0, ["Shape"]).expect("register Circle");
    u.register("Widget", 0, Vec::<String>::new())
        .expect("register Widget");
    u
}

#[test]
fn conforms_is_reflexive() {
    let u = geometry();
    assert!(u.conforms("Shape", "Shape"));
    // Reflexivity holds even for names the universe has never seen.
    assert!(u.conforms("Bogus", "Bogus"));
}

#[test]
fn conforms_follows_direct_edge() {
    let u = geometry();
    assert!(u.conforms("Circle", "Shape"));
    assert!(!u.conforms("Shape", "Circle"));
}

#[test]
fn conforms_is_transitive() {
    let u = geometry();
    assert!(u.conforms("Triangle", "Shape"));
}

#[test]
fn unrelated_types_do_not_conform() {
    let u = geometry();
    assert!(!u.conforms("Widget", "Shape"));
    assert!(!u.conforms("Circle", "Widget"));
}

#[test]
fn unregistered_name_conforms_only_to_itself() {
    let u = geometry();
    assert!(!u.conforms("Bogus", "Shape"));
    assert!(!u.conforms("Shape", "Bogus"));
}

#[test]
fn duplicate_registration_fails() {
    let mut u = geometry();
    let err = u
        .register("Shape", 0, Vec::<String>::new())
        .expect_err("duplicate must fail");
    assert_eq!(err, UniverseError::Duplicate("Shape".into()));
}

#[test]
fn unknown_target_fails() {
    let mut u = Universe::new();
    let err = u
        .register("Circle", 0, ["Shape"])
        .expect_err("unknown target must fail");
    assert_eq!(
        err,
        UniverseError::UnknownTarget {
            name: "Circle".into(),
            target: "Shape".into(),
        }
    );
    // Failed registration leaves the universe unchanged.
    assert!(u.is_empty());
}

#[test]
fn entry_records_arity() {
    let mut u = Universe::new();
    u.register("List", 1, Vec::<String>::new())
        .expect("register List");
    assert_eq!(u.arity("List"), Some(1));
    assert_eq!(u.arity("Missing"), None);
    assert!(u.contains("List"));
    assert_eq!(u.len(), 1);
}

#[test]
fn diamond_conformance() {
    let mut u = Universe::new();
    u.register("Top", 0, Vec::<String>::new()).expect("Top");
    u.register("Left", 0, ["Top"]).expect("Left");
    u.register("Right", 0, ["Top"]).expect("Right");
    u.register("Bottom", 0, ["Left", "Right"]).expect("Bottom");

    assert!(u.conforms("Bottom", "Top"));
    assert!(u.conforms("Bottom", "Left"));
    assert!(u.conforms("Bottom", "Right"));
    assert!(!u.conforms("Left", "Right"));
}
