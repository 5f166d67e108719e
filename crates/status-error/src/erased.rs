//! `FailureStatus<Erased<W>>`: a failure status of any domain behind one type.
//!
//! Construction narrows any typed code whose value is erasure-safe (through
//! the generic `From` impl); there is no in-place construction since the
//! erased domain has no value type of its own. `Default` is the empty code,
//! which is not success and therefore a valid failure status.

use status_core::{CanonicalWidth, Erased, ErasureError, ErasureSafe, StaticDomain};

use crate::FailureStatus;

pub type ErasedFailure<const W: usize> = FailureStatus<Erased<W>>;

impl<const W: usize> FailureStatus<Erased<W>>
where
    Erased<W>: CanonicalWidth,
{
    /// Reinterpret as a failure status of domain `D` without checking the
    /// domain. Debug builds assert it.
    ///
    /// # Safety
    ///
    /// `self` must have been narrowed from domain `D`.
    pub unsafe fn widen<D>(&self) -> FailureStatus<D>
    where
        D: StaticDomain,
        D::Value: ErasureSafe,
    {
        // SAFETY: upheld by the caller.
        unsafe { FailureStatus::from_erased(self.as_status_code()) }
    }

    pub fn try_widen<D>(&self) -> Result<FailureStatus<D>, ErasureError>
    where
        D: StaticDomain,
        D::Value: ErasureSafe,
    {
        FailureStatus::try_from_erased(self.as_status_code())
    }
}
