use std::fmt;
use std::ops::Deref;

use status_core::{
    Accepts, CanonicalWidth, Domain, Errc, Erased, ErasureError, ErasureSafe, IntoStatusCode,
    IntoStatusCodeWith, StaticDomain, StatusCode,
};

use crate::fatal::{ContractViolation, terminate};

/// A [`StatusCode`] that is never success.
///
/// Every constructor checks the code it is handed; a success value means the
/// caller or the domain is broken, and the process aborts on the spot. Once
/// built, a `FailureStatus` is immutable: it can be replaced wholesale by
/// another failure status but never edited into success.
///
/// Read access to the underlying code goes through `Deref`, so
/// `status.value()` gives `&D::Value` for typed domains and the erased
/// payload by value for `FailureStatus<Erased<W>>`.
pub struct FailureStatus<D: Domain> {
    code: StatusCode<D>,
}

impl<D: Domain> FailureStatus<D> {
    /// Take ownership of `code`, aborting if it is success.
    pub fn new(code: StatusCode<D>) -> Self {
        if code.success() {
            terminate(ContractViolation::success_value(&code));
        }
        Self { code }
    }

    /// Copy `code`, aborting if it is success.
    pub fn from_ref(code: &StatusCode<D>) -> Self {
        Self::new(code.clone())
    }

    /// Convert `source` with extra arguments, aborting if the result is
    /// success.
    pub fn with<T, A>(source: T, args: A) -> Self
    where
        T: IntoStatusCodeWith<A>,
        D: Accepts<T::Domain>,
    {
        Self::new(D::accept(source.into_status_code_with(args)))
    }

    pub fn as_status_code(&self) -> &StatusCode<D> {
        &self.code
    }

    pub fn into_status_code(self) -> StatusCode<D> {
        self.code
    }

    pub fn domain(&self) -> &D {
        self.code.domain()
    }

    pub fn generic_code(&self) -> Errc {
        self.code.generic_code()
    }
}

impl<D: StaticDomain> FailureStatus<D> {
    pub fn from_value(value: D::Value) -> Self {
        Self::new(StatusCode::new(value))
    }

    /// Build the domain value from `args` directly, without an intermediate
    /// status code.
    pub fn in_place<A>(args: A) -> Self
    where
        D::Value: From<A>,
    {
        Self::from_value(D::Value::from(args))
    }

    /// Narrow into the erased representation of width `W`.
    pub fn erase<const W: usize>(&self) -> FailureStatus<Erased<W>>
    where
        D::Value: ErasureSafe,
        Erased<W>: CanonicalWidth,
    {
        FailureStatus::new(self.code.erase::<W>())
    }

    /// Rebuild a typed failure status from an erased code without checking
    /// which domain it came from. Debug builds assert the domain identity.
    ///
    /// # Safety
    ///
    /// `code` must have been narrowed from domain `D`.
    pub unsafe fn from_erased<const W: usize>(code: &StatusCode<Erased<W>>) -> Self
    where
        D::Value: ErasureSafe,
        Erased<W>: CanonicalWidth,
    {
        // SAFETY: upheld by the caller.
        Self::new(unsafe { code.widen::<D>() })
    }

    /// Checked counterpart of [`FailureStatus::from_erased`].
    pub fn try_from_erased<const W: usize>(
        code: &StatusCode<Erased<W>>,
    ) -> Result<Self, ErasureError>
    where
        D::Value: ErasureSafe,
        Erased<W>: CanonicalWidth,
    {
        code.try_widen::<D>().map(Self::new)
    }
}

/// Construction from anything with an [`IntoStatusCode`] impl whose domain
/// this one accepts: codes of `D` itself, foreign error types, and (for
/// erased targets) any erasure-safe typed code.
impl<D, T> From<T> for FailureStatus<D>
where
    T: IntoStatusCode,
    D: Accepts<T::Domain>,
{
    fn from(source: T) -> Self {
        Self::new(D::accept(source.into_status_code()))
    }
}

/// Only meaningful when the default value is itself a failure (or for the
/// empty erased code); otherwise this aborts like any other success value.
impl<D: Domain> Default for FailureStatus<D>
where
    StatusCode<D>: Default,
{
    fn default() -> Self {
        Self::new(StatusCode::default())
    }
}

impl<D: Domain> Deref for FailureStatus<D> {
    type Target = StatusCode<D>;

    fn deref(&self) -> &StatusCode<D> {
        &self.code
    }
}

impl<D: Domain> AsRef<StatusCode<D>> for FailureStatus<D> {
    fn as_ref(&self) -> &StatusCode<D> {
        &self.code
    }
}

impl<D: Domain> Clone for FailureStatus<D> {
    fn clone(&self) -> Self {
        Self {
            code: self.code.clone(),
        }
    }
}

impl<D: Domain> Copy for FailureStatus<D> where D::Value: Copy {}

impl<D: Domain> fmt::Debug for FailureStatus<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FailureStatus").field(&self.code).finish()
    }
}
