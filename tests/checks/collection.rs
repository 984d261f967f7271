use rule_rail::checks::*;
use rule_rail::combinators::check_prop;

#[test]
fn size_rules_on_slices() {
    let non_empty = collection_non_empty::<u8>("empty");
    let min = collection_min_size::<u8>(2, "too few");
    let max = collection_max_size::<u8>(2, "too many");
    let range = collection_size_in_range::<u8>(1, 2, "wrong size");

    assert!(non_empty.validate(&[]).is_invalid());
    assert!(min.validate(&[1]).is_invalid());
    assert!(min.validate(&[1, 2]).is_valid());
    assert!(max.validate(&[1, 2]).is_valid());
    assert!(max.validate(&[1, 2, 3]).is_invalid());
    assert!(range.validate(&[]).is_invalid());
    assert!(range.validate(&[1, 2]).is_valid());
}

#[test]
fn size_rules_on_vec_fields() {
    struct Cart {
        items: Vec<&'static str>,
    }

    let rule = check_prop(|c: &Cart| c.items.as_slice(), collection_max_size(3, "cart is full"));
    assert!(rule.validate(&Cart { items: vec!["a", "b"] }).is_valid());
    assert_eq!(
        rule.validate(&Cart { items: vec!["a", "b", "c", "d"] }).errors(),
        vec!["cart is full"]
    );

    let owned = collection_non_empty::<u8>("no bytes").on_deref::<Vec<u8>>();
    assert!(owned.validate(&vec![]).is_invalid());
}
