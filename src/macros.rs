#![allow(unused_macros)]

/// Helper macro for reading the strategy slot
///
/// ```rust, ignore
///  let strategy = read_lock!(self.strategy)?;
///  let line = strategy.method_line(method, 0)?;
/// ```
macro_rules! read_lock {
    ($arc_rwlock:expr) => {
        $arc_rwlock.read().map_err(|_| crate::Error::LockError)
    };
}

/// Helper macro for writing to the strategy slot
///
/// ```rust, ignore
///  let mut slot = write_lock!(self.strategy)?;
///  *slot = replacement;
/// ```
macro_rules! write_lock {
    ($arc_rwlock:expr) => {
        $arc_rwlock.write().map_err(|_| crate::Error::LockError)
    };
}
