//! Sequence transformer demonstration.
//!
//! Shows the same input sequence flowing through named functions,
//! inline closures, factory-made closures, and the persistent variant.
//!
//! Run with: cargo run --example transform_demo

use funcs_common::PersistentSeq;
use funcs_common::sequence::for_each;
use funcs_higher_order::{
    double, double_numbers, make_multiplier, quadruple, transform_numbers, transform_persistent,
};

fn main() {
    let numbers = vec![1, 2, 3];

    println!("=== Sequence Transformer ===\n");

    // Named functions as transform values
    println!("Named transform functions:");
    println!("  {:?} -> {:?}", numbers, double_numbers(&numbers));
    println!("  {:?} -> {:?}", numbers, transform_numbers(&numbers, quadruple));

    // Anonymous transform written at the call site
    println!("\nInline closure:");
    println!("  {:?} -> {:?}", numbers, transform_numbers(&numbers, |n| n * 2));

    // Factory-made closures, each with its own captured factor
    println!("\nFactory-made closures:");
    let double_fn = make_multiplier(2);
    let triple_fn = make_multiplier(3);
    println!("  {:?} -> {:?}", numbers, transform_numbers(&numbers, &double_fn));
    println!("  {:?} -> {:?}", numbers, transform_numbers(&numbers, &triple_fn));

    // Persistent sequence: the original survives every transformation
    println!("\nPersistent sequence (structural sharing):");
    let seq = PersistentSeq::from_slice(&numbers);
    let scaled = transform_persistent(&seq, double);
    println!("  {:?} -> {:?}", seq.to_vec(), scaled.to_vec());

    print!("  elements of the untouched original:");
    for_each(|n| print!(" {n}"), &seq.to_vec());
    println!();
}
