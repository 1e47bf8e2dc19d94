use fastlist_core::{search, DynamicArray, ListError};

#[test]
fn end_to_end_scenario() {
    let mut list = DynamicArray::new();
    list.push(10);
    list.push(20);
    list.push(30);
    assert_eq!(list.len(), 3);
    assert_eq!(list, [10, 20, 30]);

    list.insert(1, 15).unwrap();
    assert_eq!(list, [10, 15, 20, 30]);

    assert_eq!(list.remove_at(0), Ok(10));
    assert_eq!(list, [15, 20, 30]);

    assert_eq!(list.index_of(&20), Some(1));
    assert!(!list.remove(&99));

    assert_eq!(list.remove_all(|&x| x >= 20), 2);
    assert_eq!(list, [15]);
}

#[test]
fn sorted_insertion_via_binary_search() {
    let mut list = DynamicArray::new();
    for value in [42, 7, 19, 3, 88, 19, 0] {
        let at = match list.binary_search(&value) {
            Ok(found) => found,
            Err(insert_at) => insert_at,
        };
        list.insert(at, value).unwrap();
    }
    assert_eq!(list, [0, 3, 7, 19, 19, 42, 88]);

    let encoded = search::encode_insertion_point(list.binary_search(&50));
    assert!(encoded < 0);
    assert_eq!(!encoded, 6);
}

#[test]
fn every_indexed_operation_rejects_out_of_range() {
    let mut list: DynamicArray<u32> = (0..4).collect();
    let oob = ListError::IndexOutOfBounds { index: 4, len: 4 };

    assert_eq!(list.get(4), Err(oob.clone()));
    assert_eq!(list.get_mut(4).map(|v| *v), Err(oob.clone()));
    assert_eq!(list.remove_at(4), Err(oob.clone()));
    assert_eq!(list.swap_remove_at(4), Err(oob));
    assert_eq!(
        list.insert(5, 0),
        Err(ListError::InsertOutOfBounds { index: 5, len: 4 })
    );
    assert_eq!(list, [0, 1, 2, 3]);
}

#[test]
fn destructive_capacity_reduction() {
    let mut list: DynamicArray<String> = ["a", "b", "c", "d"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    list.set_capacity(2).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list.as_slice(), &["a".to_string(), "b".to_string()]);

    list.push("e".to_string());
    assert_eq!(list.capacity(), 4);
    let joined: String = list.into_iter().collect();
    assert_eq!(joined, "abe");
}
