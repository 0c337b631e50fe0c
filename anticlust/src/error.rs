use std::collections::TryReserveError;

use thiserror::Error;

/// Failure modes of the core. The exchange loop itself is pure arithmetic
/// over already-allocated buffers and cannot fail; only construction of the
/// point store, membership index, category index and objective cache can,
/// and only on allocation failure.
#[derive(Debug, Error)]
pub enum AnticlustError {
    #[error("allocation failed while building the optimizer state")]
    OutOfMemory,
}

impl From<TryReserveError> for AnticlustError {
    fn from(_: TryReserveError) -> Self {
        AnticlustError::OutOfMemory
    }
}

/// Allocate a zeroed/default-filled `Vec<T>` of exactly `len` elements,
/// reporting `OutOfMemory` instead of aborting the process the way a plain
/// `vec![default; len]` would on allocation failure.
pub(crate) fn try_vec_filled<T: Clone>(value: T, len: usize) -> Result<Vec<T>, AnticlustError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)?;
    v.resize(len, value);
    Ok(v)
}

/// Same as [`try_vec_filled`] but for a `Vec` built incrementally from an
/// iterator of known length, reserving once up front.
pub(crate) fn try_collect_exact<T, I: IntoIterator<Item = T>>(
    iter: I,
    len: usize,
) -> Result<Vec<T>, AnticlustError>
where
    I::IntoIter: Iterator<Item = T>,
{
    let mut v = Vec::new();
    v.try_reserve_exact(len)?;
    v.extend(iter);
    Ok(v)
}
