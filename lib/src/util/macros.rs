/// Evaluates the tokens, logging how long they took at `DEBUG`.
#[doc(hidden)]
#[macro_export]
macro_rules! time {
    ($($token:tt)*) => ({
        let start = std::time::Instant::now();
        let value = { $($token)* };
        $crate::tracing::debug!("{} {}:{} took {}ms",
            stringify!($($token)*), file!(), line!(), start.elapsed().as_millis());

        value
    });
}

pub use time;
