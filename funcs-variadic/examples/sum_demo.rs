//! Summation demonstration.
//!
//! Run with: cargo run --example sum_demo

use funcs_variadic::sum_up;

fn main() {
    println!("=== Summation ===\n");

    let numbers = vec![1, 2, 2, 2];
    println!("{:?} -> {}", numbers, sum_up(&numbers));

    // Variable number of arguments at the call site
    println!("sum_up!(1, 2, 3, 4, 5, 6) -> {}", sum_up!(1, 2, 3, 4, 5, 6));
    println!(
        "sum_up!(2, 55, 66, 7, 8, 1, 1, 1, 25) -> {}",
        sum_up!(2, 55, 66, 7, 8, 1, 1, 1, 25)
    );
    println!("sum_up!() -> {}", sum_up!());
}
