use int_vector::IntVector;

fn main() {
    println!("--- Basic Usage Example ---");
    let mut v = IntVector::new();

    for i in 1..=5 {
        v.push(i * 10);
        println!("Pushed: {}, len: {}, cap: {}", i * 10, v.len(), v.capacity());
    }

    println!("Elements: {:?}", v);

    while let Ok(val) = v.pop() {
        println!("Popped: {}, len: {}, cap: {}", val, v.len(), v.capacity());
    }

    if let Err(e) = v.pop() {
        println!("Pop on empty vector: {}", e);
    }
}
