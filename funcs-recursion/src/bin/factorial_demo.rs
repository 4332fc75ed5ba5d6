//! 팩토리얼 데모 (Factorial demo)
//!
//! 실행 방법: cargo run --bin factorial_demo

use funcs_recursion::{factorial_recursive, try_factorial};

fn main() {
    println!("=== Recursive Factorial ===\n");

    println!("5: {}", factorial_recursive(5));
    println!("9: {}", factorial_recursive(9));

    // 부호 있는 진입점은 음수를 거부한다 (The signed entry point rejects negatives).
    match try_factorial(-3) {
        Ok(value) => println!("-3: {value}"),
        Err(err) => println!("-3: {err}"),
    }
}
