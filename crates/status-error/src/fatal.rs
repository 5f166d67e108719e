use status_core::{Domain, DomainId, StatusCode};

/// A broken contract of [`crate::FailureStatus`].
///
/// Never returned: it describes the condition that is reported right before
/// the process aborts.
#[derive(Debug, Clone, thiserror::Error)]
#[cfg_attr(feature = "diagnostic", derive(miette::Diagnostic))]
pub enum ContractViolation {
    #[error("failure status constructed from a success value of domain {domain}: {value}")]
    #[cfg_attr(
        feature = "diagnostic",
        diagnostic(
            code(status_error::invariant::success_value),
            help("check the domain's success rule or the code handed to this call site")
        )
    )]
    SuccessValue {
        domain: &'static str,
        domain_id: Option<DomainId>,
        value: String,
    },
}

impl ContractViolation {
    pub(crate) fn success_value<D: Domain>(code: &StatusCode<D>) -> Self {
        ContractViolation::SuccessValue {
            domain: code.domain().name(),
            domain_id: code.domain().id(),
            value: format!("{code:?}"),
        }
    }
}

/// Report `violation` and abort. No unwinding, no handler.
#[cold]
#[inline(never)]
pub(crate) fn terminate(violation: ContractViolation) -> ! {
    #[cfg(feature = "tracing")]
    match &violation {
        ContractViolation::SuccessValue {
            domain, domain_id, ..
        } => tracing::error!(
            domain,
            domain_id = ?domain_id,
            error = %violation,
            "failure status invariant violated; aborting"
        ),
    }
    eprintln!("fatal: {violation}");
    std::process::abort()
}
