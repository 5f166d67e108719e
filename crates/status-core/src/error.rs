use crate::DomainId;

/// Why a checked widening of an erased status code was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "diagnostic", derive(miette::Diagnostic))]
pub enum ErasureError {
    #[error("erased status code is empty, expected a code of domain {expected}")]
    #[cfg_attr(feature = "diagnostic", diagnostic(code(status_core::erasure::empty)))]
    EmptyDomain { expected: &'static str },

    #[error("erased status code belongs to {found_name} ({found}), not {expected_name} ({expected})")]
    #[cfg_attr(
        feature = "diagnostic",
        diagnostic(
            code(status_core::erasure::domain_mismatch),
            help("widen into the domain the code was narrowed from")
        )
    )]
    DomainMismatch {
        expected: DomainId,
        expected_name: &'static str,
        found: DomainId,
        found_name: &'static str,
    },

    // Two domains claiming one id but storing different value types.
    #[error("domain {domain} stored a value of a different type than it declares")]
    #[cfg_attr(feature = "diagnostic", diagnostic(code(status_core::erasure::value_type)))]
    ValueTypeMismatch { domain: &'static str },
}
