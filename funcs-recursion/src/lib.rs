//! 재귀: 자기 자신을 호출하는 함수 (Recursion: a function that calls itself)
//!
//! 팩토리얼을 세 가지 프로세스로 계산합니다:
//! - 선형 재귀 (Linear recursion)
//! - 명시적 누산기를 사용한 반복 (Iteration with an explicit accumulator)
//! - 이터레이터 관용구 (The iterator idiom)
//!
//! 부호 있는 입력은 [`try_factorial`]이 검사합니다
//! (Signed input is checked by [`try_factorial`]).

pub mod factorial;

pub use factorial::{
    FactorialError, factorial, factorial_iterative, factorial_recursive, try_factorial,
};
