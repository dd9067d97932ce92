use std::any::Any;

use listpool::{ListPool, SyncRoot, UntypedList, UntypedListError};

fn out_of_range(index: isize, length: usize) -> UntypedListError {
    UntypedListError::IndexOutOfRange {
        param: "index",
        index,
        length,
    }
}

fn as_i32(item: &dyn Any) -> i32 {
    *item.downcast_ref::<i32>().unwrap()
}

#[test]
fn test_add_and_read_back() {
    let mut list = ListPool::<i32>::new();
    let mut untyped = list.as_untyped();

    assert_eq!(untyped.add(Box::new(42)), Ok(0));
    assert_eq!(untyped.add(Box::new(43)), Ok(1));

    assert_eq!(untyped.len(), 2);
    assert_eq!(as_i32(untyped.get(0).unwrap()), 42);
    assert_eq!(as_i32(untyped.get(1).unwrap()), 43);
}

#[test]
fn test_add_past_capacity() {
    let mut list = ListPool::<i32>::with_capacity(16).unwrap();
    let mut untyped = list.as_untyped();

    for value in 0..100 {
        untyped.add(Box::new(value)).unwrap();
    }

    assert_eq!(untyped.len(), 100);
    for value in 0..100 {
        assert_eq!(untyped.contains(Some(&value)), Ok(true));
    }
}

#[test]
fn test_add_wrong_type() {
    let mut list = ListPool::<i32>::new();
    let mut untyped = list.as_untyped();

    let error = untyped.add(Box::new("not a number")).unwrap_err();
    assert!(matches!(
        error,
        UntypedListError::TypeMismatch { param: "item", .. }
    ));
    assert!(untyped.is_empty());
}

#[test]
fn test_insert_wrong_type() {
    let mut list: ListPool<i32> = [1].into_iter().collect();
    let mut untyped = list.as_untyped();

    let error = untyped.insert(0, Box::new(1u64)).unwrap_err();
    assert!(matches!(
        error,
        UntypedListError::TypeMismatch { param: "item", .. }
    ));
}

#[test]
fn test_set_wrong_type() {
    let mut list: ListPool<i32> = [1, 2].into_iter().collect();
    let mut untyped = list.as_untyped();

    let error = untyped.set(1, Box::new(2.0f64)).unwrap_err();
    assert!(matches!(
        error,
        UntypedListError::TypeMismatch { param: "value", .. }
    ));
}

#[test]
fn test_type_checked_before_index() {
    let mut list = ListPool::<i32>::new();
    let mut untyped = list.as_untyped();

    let error = untyped.set(5, Box::new("x")).unwrap_err();
    assert!(matches!(
        error,
        UntypedListError::TypeMismatch { param: "value", .. }
    ));
}

#[test]
fn test_queries_with_wrong_type() {
    let mut list: ListPool<i32> = [1].into_iter().collect();
    let mut untyped = list.as_untyped();
    let wrong = String::from("1");

    for result in [
        untyped.contains(Some(&wrong)).map(|_| ()),
        untyped.index_of(Some(&wrong)).map(|_| ()),
        untyped.remove(Some(&wrong)).map(|_| ()),
    ] {
        assert!(matches!(
            result,
            Err(UntypedListError::TypeMismatch { param: "item", .. })
        ));
    }
    assert_eq!(untyped.len(), 1);
}

#[test]
fn test_null_is_never_present() {
    let mut list: ListPool<i32> = [1, 2].into_iter().collect();
    let mut untyped = list.as_untyped();

    assert_eq!(untyped.contains(None), Ok(false));
    assert_eq!(untyped.index_of(None), Ok(-1));
    assert_eq!(untyped.remove(None), Ok(false));
    assert_eq!(untyped.len(), 2);
}

#[test]
fn test_contains_and_index_of() {
    let mut list: ListPool<i32> = [10, 20, 30].into_iter().collect();
    let untyped = list.as_untyped();

    assert_eq!(untyped.contains(Some(&10)), Ok(true));
    assert_eq!(untyped.contains(Some(&40)), Ok(false));
    assert_eq!(untyped.index_of(Some(&10)), Ok(0));
    assert_eq!(untyped.index_of(Some(&20)), Ok(1));
    assert_eq!(untyped.index_of(Some(&30)), Ok(2));
    assert_eq!(untyped.index_of(Some(&40)), Ok(-1));
}

#[test]
fn test_get_out_of_range() {
    let mut list: ListPool<i32> = [1].into_iter().collect();
    let untyped = list.as_untyped();

    assert_eq!(untyped.get(-1).unwrap_err(), out_of_range(-1, 1));
    assert_eq!(untyped.get(1).unwrap_err(), out_of_range(1, 1));
}

#[test]
fn test_set_in_range_and_out_of_range() {
    let mut list: ListPool<i32> = [1, 2, 3].into_iter().collect();
    let mut untyped = list.as_untyped();

    untyped.set(2, Box::new(30)).unwrap();
    assert_eq!(as_i32(untyped.get(2).unwrap()), 30);
    assert_eq!(untyped.len(), 3);

    assert_eq!(untyped.set(-1, Box::new(0)), Err(out_of_range(-1, 3)));
    assert_eq!(untyped.set(3, Box::new(0)), Err(out_of_range(3, 3)));
}

#[test]
fn test_insert_positions() {
    let mut list: ListPool<i32> = [1, 3].into_iter().collect();
    let mut untyped = list.as_untyped();

    untyped.insert(1, Box::new(2)).unwrap();
    untyped.insert(3, Box::new(4)).unwrap();
    assert_eq!(untyped.insert(-1, Box::new(0)), Err(out_of_range(-1, 4)));
    assert_eq!(untyped.insert(5, Box::new(0)), Err(out_of_range(5, 4)));

    assert_eq!(list.as_slice(), [1, 2, 3, 4]);
}

#[test]
fn test_remove_at() {
    let mut list: ListPool<i32> = [1, 2, 3].into_iter().collect();
    let mut untyped = list.as_untyped();

    untyped.remove_at(1).unwrap();
    assert_eq!(untyped.contains(Some(&2)), Ok(false));
    assert_eq!(untyped.len(), 2);

    assert_eq!(untyped.remove_at(-1), Err(out_of_range(-1, 2)));
    assert_eq!(untyped.remove_at(2), Err(out_of_range(2, 2)));
}

#[test]
fn test_remove_at_on_empty_list() {
    let mut list = ListPool::<i32>::new();
    let mut untyped = list.as_untyped();

    assert_eq!(untyped.remove_at(0), Err(out_of_range(0, 0)));
}

#[test]
fn test_remove_by_value() {
    let mut list: ListPool<i32> = [5, 6, 5].into_iter().collect();
    let mut untyped = list.as_untyped();

    assert_eq!(untyped.remove(Some(&5)), Ok(true));
    assert_eq!(untyped.remove(Some(&9)), Ok(false));
    assert_eq!(untyped.len(), 2);
    assert_eq!(list.as_slice(), [6, 5]);
}

#[test]
fn test_clear() {
    let mut list: ListPool<i32> = [1, 2, 3].into_iter().collect();
    let mut untyped = list.as_untyped();

    untyped.clear();
    assert!(untyped.is_empty());
    assert_eq!(untyped.iter().count(), 0);
}

#[test]
fn test_copy_to_vec() {
    let mut list: ListPool<i32> = [1, 2, 3].into_iter().collect();
    let untyped = list.as_untyped();
    let mut target = vec![0; 3];

    untyped.copy_to(&mut target, 0).unwrap();
    assert_eq!(target, [1, 2, 3]);
}

#[test]
fn test_copy_to_errors() {
    let mut list: ListPool<i32> = [1, 2, 3].into_iter().collect();
    let untyped = list.as_untyped();

    let mut wrong = vec![0u8; 3];
    assert!(matches!(
        untyped.copy_to(&mut wrong, 0),
        Err(UntypedListError::TypeMismatch { param: "array", .. })
    ));

    let mut short = vec![0; 4];
    assert_eq!(
        untyped.copy_to(&mut short, 2),
        Err(UntypedListError::DestinationTooSmall {
            required: 3,
            available: 2
        })
    );
}

#[test]
fn test_iterate_values() {
    let mut list: ListPool<i32> = [1, 2, 3].into_iter().collect();
    let untyped = list.as_untyped();

    let values: Vec<i32> = untyped.iter().map(as_i32).collect();
    assert_eq!(values, [1, 2, 3]);
}

#[test]
fn test_flags() {
    let mut list = ListPool::<i32>::new();
    let untyped = list.as_untyped();

    assert!(!untyped.is_fixed_size());
    assert!(!untyped.is_read_only());
    assert!(!untyped.is_synchronized());
    assert!(untyped.sync_root().is::<SyncRoot>());
}

#[test]
fn test_usable_as_trait_object() {
    let mut list = ListPool::<String>::new();
    let mut untyped = list.as_untyped();
    let object: &mut dyn UntypedList = &mut untyped;

    object.add(Box::new(String::from("a"))).unwrap();
    object.insert(0, Box::new(String::from("b"))).unwrap();

    assert_eq!(object.len(), 2);
    assert_eq!(object.index_of(Some(&String::from("a"))), Ok(1));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        out_of_range(-1, 3).to_string(),
        "Index out of range: index = -1 for list of length 3"
    );
    assert_eq!(
        UntypedListError::TypeMismatch {
            param: "value",
            expected: "i32"
        }
        .to_string(),
        "Type mismatch: value is not of type i32"
    );
}
