use crate::{CanonicalWidth, Domain, Erased, ErasureSafe, StaticDomain, StatusCode};

/// Extension point for turning arbitrary error values into status codes.
///
/// Any error type can opt in without this crate knowing about it: implement
/// the trait next to the type and every constructor that takes
/// `impl IntoStatusCode` accepts it. Conversions that need extra arguments
/// implement [`IntoStatusCodeWith`] instead.
pub trait IntoStatusCode {
    type Domain: Domain;

    fn into_status_code(self) -> StatusCode<Self::Domain>;
}

impl<D: Domain> IntoStatusCode for StatusCode<D> {
    type Domain = D;

    fn into_status_code(self) -> StatusCode<D> {
        self
    }
}

impl<D: Domain> IntoStatusCode for &StatusCode<D> {
    type Domain = D;

    fn into_status_code(self) -> StatusCode<D> {
        self.clone()
    }
}

/// [`IntoStatusCode`] with extra construction arguments, e.g. the context
/// an error happened in.
///
/// `Args` is a type parameter so the implementing type stays local to its
/// own crate: `impl IntoStatusCodeWith<&str> for MyError` is allowed
/// anywhere `MyError` is defined. Several arguments travel as a tuple.
pub trait IntoStatusCodeWith<Args> {
    type Domain: Domain;

    fn into_status_code_with(self, args: Args) -> StatusCode<Self::Domain>;
}

/// Domains whose status codes can be built from a status code of domain `S`.
///
/// Every domain accepts its own codes. The erased family additionally
/// accepts any typed domain whose value is [`ErasureSafe`], narrowing it.
pub trait Accepts<S: Domain>: Domain {
    fn accept(code: StatusCode<S>) -> StatusCode<Self>;
}

impl<D: Domain> Accepts<D> for D {
    fn accept(code: StatusCode<D>) -> StatusCode<D> {
        code
    }
}

impl<S, const W: usize> Accepts<S> for Erased<W>
where
    S: StaticDomain,
    S::Value: ErasureSafe,
    Erased<W>: CanonicalWidth,
{
    fn accept(code: StatusCode<S>) -> StatusCode<Erased<W>> {
        code.erase::<W>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnyStatus, Errc, GenericCode, GenericDomain};

    #[derive(Debug, Clone, Copy)]
    struct Timeout;

    impl<'a> IntoStatusCodeWith<(u32, &'a str)> for Timeout {
        type Domain = GenericDomain;

        fn into_status_code_with(self, (attempts, _op): (u32, &'a str)) -> GenericCode {
            if attempts == 0 {
                GenericCode::new(Errc::OperationCanceled)
            } else {
                GenericCode::new(Errc::TimedOut)
            }
        }
    }

    fn through<D, T>(source: T) -> StatusCode<D>
    where
        T: IntoStatusCode,
        D: Accepts<T::Domain>,
    {
        D::accept(source.into_status_code())
    }

    #[test]
    fn extra_arguments_reach_the_conversion() {
        assert_eq!(*Timeout.into_status_code_with((3, "connect")).value(), Errc::TimedOut);
        assert_eq!(
            *Timeout.into_status_code_with((0, "connect")).value(),
            Errc::OperationCanceled
        );
    }

    #[test]
    fn identity_conversion_keeps_the_code() {
        let code = GenericCode::new(Errc::TimedOut);
        let same: GenericCode = through(&code);
        assert_eq!(*same.value(), Errc::TimedOut);
    }

    #[test]
    fn erased_targets_narrow_typed_codes() {
        let erased: StatusCode<Erased<8>> = through(Errc::ResourceBusy);
        assert_eq!(erased.domain_name(), GenericDomain.name());
        assert!(erased == Errc::ResourceBusy);
    }

    #[test]
    fn erased_targets_accept_erased_codes_unchanged() {
        let erased = GenericCode::new(Errc::BrokenPipe).erase::<16>();
        let again: StatusCode<Erased<16>> = through(erased);
        assert!(again == Errc::BrokenPipe);
    }
}
