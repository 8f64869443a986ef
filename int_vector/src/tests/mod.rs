use super::*;
use crossbeam::scope;
use proptest::prelude::*;

#[test]
fn test_new_is_unallocated() {
    let v = IntVector::new();
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), 0);
    assert!(v.is_empty());
    assert_eq!(v.at(0), Err(IntVectorError::IndexOutOfRange { index: 0, len: 0 }));
}

#[test]
fn test_push_pop_copy_walkthrough() {
    let mut v = IntVector::new();
    v.push(1);
    v.push(2);
    v.push(3);
    assert_eq!(v.len(), 3);
    assert_eq!(v.capacity(), 4);
    assert_eq!(v.at(0), Ok(1));
    assert_eq!(v.at(1), Ok(2));
    assert_eq!(v.at(2), Ok(3));

    assert_eq!(v.pop(), Ok(3));
    assert_eq!(v.len(), 2);
    // 2 < 4 / 2 does not hold, so no shrink
    assert_eq!(v.capacity(), 4);

    v.push(3);
    assert_eq!(v.len(), 3);

    let copy = v.clone();
    assert_eq!(copy.len(), 3);
    assert_eq!(copy.as_slice(), &[1, 2, 3]);
    assert_ne!(copy.as_slice().as_ptr(), v.as_slice().as_ptr());
}

#[test]
fn test_grow_doubles_capacity() {
    let mut v = IntVector::new();
    let mut seen = Vec::new();
    for i in 0..9 {
        v.push(i);
        seen.push(v.capacity());
    }
    assert_eq!(seen, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
}

#[test]
fn test_pop_shrinks_by_half() {
    let mut v: IntVector = (0..8).collect();
    assert_eq!(v.capacity(), 8);

    let mut caps = Vec::new();
    while let Ok(_) = v.pop() {
        caps.push((v.len(), v.capacity()));
    }
    assert_eq!(
        caps,
        vec![(7, 8), (6, 8), (5, 8), (4, 8), (3, 4), (2, 4), (1, 2), (0, 1)]
    );
    // floor of one slot, ready for the next push
    assert_eq!(v.capacity(), 1);
}

#[test]
fn test_pop_empty_is_out_of_range() {
    let mut v = IntVector::new();
    let err = v.pop().unwrap_err();
    assert_eq!(err, IntVectorError::Empty);
    assert!(err.is_out_of_range());
    assert_eq!(err.to_string(), "cannot pop from an empty vector");
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), 0);
}

#[test]
fn test_at_out_of_range_leaves_state() {
    let v: IntVector = [5, 6].into_iter().collect();
    let err = v.at(2).unwrap_err();
    assert_eq!(err, IntVectorError::IndexOutOfRange { index: 2, len: 2 });
    assert!(err.is_out_of_range());
    assert_eq!(err.to_string(), "index 2 out of range for vector of length 2");
    assert_eq!(v.as_slice(), &[5, 6]);
}

#[test]
fn test_at_ignores_stale_slots() {
    let mut v: IntVector = (0..4).collect();
    v.clear();
    assert!(v.at(0).is_err());
    v.push(42);
    assert_eq!(v.at(0), Ok(42));
    assert!(v.at(1).is_err());
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_index_operator_is_checked() {
    let v: IntVector = (1..=3).collect();
    let _ = v[3];
}

#[test]
fn test_get_unchecked() {
    let v: IntVector = (10..13).collect();
    assert_eq!(v[1], 11);
    // SAFETY: 2 < v.len()
    assert_eq!(unsafe { v.get_unchecked(2) }, 12);
}

#[test]
fn test_clear_keeps_capacity() {
    let mut v: IntVector = (0..5).collect();
    let cap = v.capacity();
    v.clear();
    assert_eq!(v.len(), 0);
    assert!(v.is_empty());
    assert_eq!(v.capacity(), cap);

    for i in 0..cap as i32 {
        v.push(i);
    }
    assert_eq!(v.capacity(), cap);
}

#[test]
fn test_clone_is_independent() {
    let mut a: IntVector = (1..=5).collect();
    let mut b = a.clone();
    assert_eq!(a, b);
    assert_eq!(b.capacity(), a.capacity());

    b.push(6);
    b.pop().unwrap();
    b.pop().unwrap();
    assert_eq!(a.as_slice(), &[1, 2, 3, 4, 5]);
    assert_eq!(b.as_slice(), &[1, 2, 3, 4]);

    a.clear();
    a.push(9);
    assert_eq!(b.as_slice(), &[1, 2, 3, 4]);
    assert_eq!(a.as_slice(), &[9]);
}

#[test]
fn test_clone_empty_does_not_allocate() {
    let a = IntVector::new();
    let b = a.clone();
    assert_eq!(b.capacity(), 0);
    assert!(b.is_empty());
}

#[test]
fn test_try_push() {
    let mut v = IntVector::new();
    for i in 0..5 {
        assert!(v.try_push(i).is_ok());
    }
    assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4]);
    assert_eq!(v.capacity(), 8);
}

#[test]
fn test_try_allocate_rejects_oversized_layout() {
    assert!(matches!(
        RawBuffer::try_allocate(usize::MAX),
        Err(IntVectorError::CapacityOverflow)
    ));
    assert!(matches!(
        RawBuffer::try_allocate(isize::MAX as usize / 2),
        Err(IntVectorError::CapacityOverflow)
    ));
    assert_eq!(RawBuffer::try_allocate(0).map(|b| b.capacity()), Ok(0));
}

#[test]
fn test_try_push_overflow_leaves_vector_unchanged() {
    let mut v: IntVector = (1..=4).collect();
    assert_eq!(v.capacity(), 4);

    // doubled capacity does not fit in usize
    let err = v.try_push_with(5, |_| None).unwrap_err();
    assert_eq!(err, IntVectorError::CapacityOverflow);
    assert_eq!(err.to_string(), "capacity overflow");
    assert!(!err.is_out_of_range());
    assert_eq!((v.len(), v.capacity()), (4, 4));
    assert_eq!(v.as_slice(), &[1, 2, 3, 4]);

    // capacity fits in usize but the byte size does not
    let err = v.try_push_with(5, |_| Some(usize::MAX)).unwrap_err();
    assert_eq!(err, IntVectorError::CapacityOverflow);
    assert_eq!((v.len(), v.capacity()), (4, 4));
    assert_eq!(v.as_slice(), &[1, 2, 3, 4]);

    // still usable afterwards
    v.try_push(5).unwrap();
    assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
    assert_eq!(v.capacity(), 8);
}

#[test]
fn test_try_push_skips_growth_when_room_left() {
    let mut v: IntVector = (1..=3).collect();
    assert_eq!(v.capacity(), 4);
    v.try_push_with(4, |_| panic!("must not grow")).unwrap();
    assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn test_extend_follows_growth_rule() {
    let mut v = IntVector::new();
    v.extend([1, 2, 3]);
    assert_eq!(v.capacity(), 4);
    v.extend(vec![4, 5]);
    assert_eq!(v.capacity(), 8);
    assert_eq!(v.len(), 5);
}

#[test]
fn test_iterators() {
    let v: IntVector = [10, 20, 30].into_iter().collect();

    let mut sum = 0;
    for &x in &v {
        sum += x;
    }
    assert_eq!(sum, 60);

    let doubled: Vec<i32> = v.iter().map(|x| x * 2).collect();
    assert_eq!(doubled, vec![20, 40, 60]);
    assert_eq!(format!("{:?}", v), "[10, 20, 30]");
}

#[test]
fn test_equality_ignores_capacity() {
    let mut a: IntVector = (0..8).collect();
    for _ in 0..6 {
        a.pop().unwrap();
    }
    let b: IntVector = (0..2).collect();
    assert_ne!(a.capacity(), b.capacity());
    assert_eq!(a, b);
}

#[test]
fn test_concurrency() {
    let v: IntVector = (0..100).collect();

    scope(|s| {
        s.spawn(|_| {
            let total: i32 = v.iter().sum();
            assert_eq!(total, 4950);
        });
        s.spawn(|_| {
            assert_eq!(v.at(99), Ok(99));
        });
    })
    .unwrap();
}

proptest! {
    #[test]
    fn prop_push_keeps_order(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut v = IntVector::new();
        for &x in &values {
            let before = v.capacity();
            let full = v.len() == before;
            v.push(x);
            if full {
                prop_assert_eq!(v.capacity(), if before == 0 { 1 } else { before * 2 });
            } else {
                prop_assert_eq!(v.capacity(), before);
            }
        }
        prop_assert_eq!(v.len(), values.len());
        for (i, &x) in values.iter().enumerate() {
            prop_assert_eq!(v.at(i), Ok(x));
        }
    }

    #[test]
    fn prop_pop_keeps_invariant(len in 0usize..200, pops in 0usize..250) {
        let mut v: IntVector = (0..len as i32).collect();
        for _ in 0..pops {
            let before = v.len();
            match v.pop() {
                Ok(x) => prop_assert_eq!(x, before as i32 - 1),
                Err(e) => {
                    prop_assert_eq!(before, 0);
                    prop_assert_eq!(e, IntVectorError::Empty);
                }
            }
            prop_assert!(v.len() <= v.capacity());
            if !v.is_empty() {
                prop_assert!(v.capacity() >= 1);
            }
        }
        prop_assert_eq!(v.len(), len.saturating_sub(pops));
    }

    #[test]
    fn prop_clone_independent(
        values in prop::collection::vec(any::<i32>(), 1..100),
        extra in any::<i32>(),
    ) {
        let a: IntVector = values.iter().copied().collect();
        let mut b = a.clone();
        b.push(extra);
        b.pop().unwrap();
        b.pop().unwrap();
        prop_assert_eq!(a.as_slice(), values.as_slice());
        prop_assert_eq!(b.as_slice(), &values[..values.len() - 1]);
    }
}
