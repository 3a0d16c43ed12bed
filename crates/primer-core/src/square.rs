//! DelayedSquare - 一定時間サスペンドしてから二乗を返す非同期計算
//!
//! # 学習ポイント
//! - `tokio::time::sleep` はスレッドをブロックしない（他のタスクは進み続ける）
//! - 失敗は例外ではなく `Outcome::Failure` で返す
//! - 関連型 (`Squarable::Output`) で整数の二乗を桁あふれさせない
//!
//! Each invocation owns its own timer. There is no cancellation: once a
//! computation starts it always resolves.

use std::fmt;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

use crate::domain::{ComputationState, Outcome, SquareError};

/// Delay applied before every square resolves.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// A number that can be checked for sign and squared exactly.
///
/// Integers widen into the next larger type so `n * n` never overflows.
/// Floats square in place.
pub trait Squarable: Copy + Send + fmt::Debug + 'static {
    type Output: Copy + Send + fmt::Debug + 'static;

    fn is_negative(self) -> bool;

    fn square(self) -> Self::Output;
}

macro_rules! widening_square {
    ($($input:ty => $output:ty),* $(,)?) => {
        $(
            impl Squarable for $input {
                type Output = $output;

                fn is_negative(self) -> bool {
                    self < 0
                }

                fn square(self) -> $output {
                    let n = <$output>::from(self);
                    n * n
                }
            }
        )*
    };
}

widening_square!(i8 => i16, i16 => i32, i32 => i64, i64 => i128);

macro_rules! float_square {
    ($($float:ty),*) => {
        $(
            impl Squarable for $float {
                type Output = $float;

                // NaN and -0.0 are not below zero, so they square like any other value.
                fn is_negative(self) -> bool {
                    self < 0.0
                }

                fn square(self) -> $float {
                    self * self
                }
            }
        )*
    };
}

float_square!(f32, f64);

/// Computes squares after a fixed delay.
///
/// The delay is the only setting; `Default` uses [`DEFAULT_DELAY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayedSquare {
    delay: Duration,
}

impl Default for DelayedSquare {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl DelayedSquare {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Suspend for the configured delay, then square `n`.
    ///
    /// Negative input resolves to `Failure("Negative number not allowed")`.
    pub async fn compute<N: Squarable>(&self, n: N) -> Outcome<N::Output> {
        debug!(input = ?n, delay_ms = self.delay.as_millis() as u64, "square pending");
        sleep(self.delay).await;

        let outcome = evaluate(n);
        debug!(input = ?n, kind = ?outcome.kind(), "square resolved");
        outcome
    }

    /// Start the computation as its own tokio task.
    ///
    /// Must be called from within a tokio runtime. The returned handle can be
    /// checked for its state or consumed for the outcome; dropping it does not
    /// stop the timer.
    pub fn spawn<N: Squarable>(&self, n: N) -> PendingSquare<N::Output> {
        let square = *self;
        let handle = tokio::spawn(async move { square.compute(n).await });
        PendingSquare { handle }
    }
}

/// Square `n` after [`DEFAULT_DELAY`].
pub async fn compute_square_delayed<N: Squarable>(n: N) -> Outcome<N::Output> {
    DelayedSquare::default().compute(n).await
}

fn evaluate<N: Squarable>(n: N) -> Outcome<N::Output> {
    if n.is_negative() {
        Outcome::from_error(SquareError::NegativeInput)
    } else {
        Outcome::Success(n.square())
    }
}

/// Handle to a spawned delayed square.
pub struct PendingSquare<T> {
    handle: JoinHandle<Outcome<T>>,
}

impl<T> PendingSquare<T> {
    pub fn state(&self) -> ComputationState {
        if self.handle.is_finished() {
            ComputationState::Resolved
        } else {
            ComputationState::Pending
        }
    }

    /// Wait for the square to resolve.
    pub async fn outcome(self) -> Outcome<T> {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(e) => Outcome::Failure(format!("square task did not complete: {e}")),
        }
    }
}

impl<T> fmt::Debug for PendingSquare<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingSquare")
            .field("state", &self.state())
            .finish()
    }
}
