use int_vector::IntVector;
use std::thread;

fn main() {
    println!("--- Copy Independence Example ---");
    let original: IntVector = (1..=4).collect();
    let mut copy = original.clone();

    copy.push(5);
    copy.pop().unwrap();
    copy.pop().unwrap();

    println!("Original: {:?} (cap {})", original, original.capacity());
    println!("Copy:     {:?} (cap {})", copy, copy.capacity());
    assert_eq!(original.as_slice(), &[1, 2, 3, 4]);

    // The copy owns its buffer and can move to another thread on its own.
    let handle = thread::spawn(move || {
        copy.push(100);
        copy
    });
    let copy = handle.join().unwrap();
    println!("Copy back from thread: {:?}", copy);
    println!("Original untouched: {:?}", original);
}
