use rule_rail::Either;

#[test]
fn either_accessors_pick_the_present_side() {
    let left: Either<&str, u8> = Either::Left("l");
    let right: Either<&str, u8> = Either::Right(3);

    assert!(left.is_left());
    assert!(!left.is_right());
    assert_eq!(left.left(), Some("l"));
    assert_eq!(left.right(), None);
    assert_eq!(right.right(), Some(3));
    assert_eq!(right.left(), None);
}

#[test]
fn either_converts_to_and_from_result() {
    assert_eq!(Either::<&str, u8>::Right(1).into_result(), Ok(1));
    assert_eq!(Either::<&str, u8>::Left("bad").into_result(), Err("bad"));
    assert_eq!(Either::from(Ok::<u8, &str>(1)), Either::Right(1));
    assert_eq!(Either::from(Err::<u8, &str>("bad")), Either::Left("bad"));
}

#[test]
fn either_as_ref_borrows() {
    let owned: Either<String, Vec<u8>> = Either::Left("text".to_string());
    assert_eq!(owned.as_ref().left().map(String::as_str), Some("text"));
}
