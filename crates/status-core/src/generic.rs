//! The generic error classification and its domain.
//!
//! [`Errc`] is the baseline every other domain can map onto; its numeric
//! values are the POSIX errno numbers as used on Linux.

use std::io;

use crate::{AnyStatus, DomainId, IntoStatusCode, StaticDomain, StatusCode};

pub const GENERIC_DOMAIN_ID: DomainId = DomainId::from_u128(0x746d_6354_f4f7_33e9_a5c1_3b6e_0d4f_8e01);

/// Cross-platform error classification.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum Errc {
    Success = 0,
    Unknown = -1,

    OperationNotPermitted = 1,
    NoSuchFileOrDirectory = 2,
    NoSuchProcess = 3,
    Interrupted = 4,
    IoError = 5,
    NoSuchDeviceOrAddress = 6,
    ArgumentListTooLong = 7,
    ExecutableFormatError = 8,
    BadFileDescriptor = 9,
    NoChildProcess = 10,
    ResourceUnavailableTryAgain = 11,
    NotEnoughMemory = 12,
    PermissionDenied = 13,
    BadAddress = 14,
    ResourceBusy = 16,
    FileExists = 17,
    CrossDeviceLink = 18,
    NoSuchDevice = 19,
    NotADirectory = 20,
    IsADirectory = 21,
    InvalidArgument = 22,
    TooManyFilesOpenInSystem = 23,
    TooManyFilesOpen = 24,
    InappropriateIoControlOperation = 25,
    TextFileBusy = 26,
    FileTooLarge = 27,
    NoSpaceOnDevice = 28,
    InvalidSeek = 29,
    ReadOnlyFileSystem = 30,
    TooManyLinks = 31,
    BrokenPipe = 32,
    ArgumentOutOfDomain = 33,
    ResultOutOfRange = 34,
    ResourceDeadlockWouldOccur = 35,
    FilenameTooLong = 36,
    NoLockAvailable = 37,
    FunctionNotSupported = 38,
    DirectoryNotEmpty = 39,
    TooManySymbolicLinkLevels = 40,
    NoMessage = 42,
    IdentifierRemoved = 43,
    NoLink = 67,
    ProtocolError = 71,
    BadMessage = 74,
    ValueTooLarge = 75,
    IllegalByteSequence = 84,
    NotASocket = 88,
    DestinationAddressRequired = 89,
    MessageSize = 90,
    WrongProtocolType = 91,
    NoProtocolOption = 92,
    ProtocolNotSupported = 93,
    NotSupported = 95,
    AddressFamilyNotSupported = 97,
    AddressInUse = 98,
    AddressNotAvailable = 99,
    NetworkDown = 100,
    NetworkUnreachable = 101,
    NetworkReset = 102,
    ConnectionAborted = 103,
    ConnectionReset = 104,
    NoBufferSpace = 105,
    AlreadyConnected = 106,
    NotConnected = 107,
    TimedOut = 110,
    ConnectionRefused = 111,
    HostUnreachable = 113,
    ConnectionAlreadyInProgress = 114,
    OperationInProgress = 115,
    OperationCanceled = 125,
    OwnerDead = 130,
    StateNotRecoverable = 131,
}

impl Errc {
    pub const ALL: [Errc; 74] = [
        Errc::Success,
        Errc::Unknown,
        Errc::OperationNotPermitted,
        Errc::NoSuchFileOrDirectory,
        Errc::NoSuchProcess,
        Errc::Interrupted,
        Errc::IoError,
        Errc::NoSuchDeviceOrAddress,
        Errc::ArgumentListTooLong,
        Errc::ExecutableFormatError,
        Errc::BadFileDescriptor,
        Errc::NoChildProcess,
        Errc::ResourceUnavailableTryAgain,
        Errc::NotEnoughMemory,
        Errc::PermissionDenied,
        Errc::BadAddress,
        Errc::ResourceBusy,
        Errc::FileExists,
        Errc::CrossDeviceLink,
        Errc::NoSuchDevice,
        Errc::NotADirectory,
        Errc::IsADirectory,
        Errc::InvalidArgument,
        Errc::TooManyFilesOpenInSystem,
        Errc::TooManyFilesOpen,
        Errc::InappropriateIoControlOperation,
        Errc::TextFileBusy,
        Errc::FileTooLarge,
        Errc::NoSpaceOnDevice,
        Errc::InvalidSeek,
        Errc::ReadOnlyFileSystem,
        Errc::TooManyLinks,
        Errc::BrokenPipe,
        Errc::ArgumentOutOfDomain,
        Errc::ResultOutOfRange,
        Errc::ResourceDeadlockWouldOccur,
        Errc::FilenameTooLong,
        Errc::NoLockAvailable,
        Errc::FunctionNotSupported,
        Errc::DirectoryNotEmpty,
        Errc::TooManySymbolicLinkLevels,
        Errc::NoMessage,
        Errc::IdentifierRemoved,
        Errc::NoLink,
        Errc::ProtocolError,
        Errc::BadMessage,
        Errc::ValueTooLarge,
        Errc::IllegalByteSequence,
        Errc::NotASocket,
        Errc::DestinationAddressRequired,
        Errc::MessageSize,
        Errc::WrongProtocolType,
        Errc::NoProtocolOption,
        Errc::ProtocolNotSupported,
        Errc::NotSupported,
        Errc::AddressFamilyNotSupported,
        Errc::AddressInUse,
        Errc::AddressNotAvailable,
        Errc::NetworkDown,
        Errc::NetworkUnreachable,
        Errc::NetworkReset,
        Errc::ConnectionAborted,
        Errc::ConnectionReset,
        Errc::NoBufferSpace,
        Errc::AlreadyConnected,
        Errc::NotConnected,
        Errc::TimedOut,
        Errc::ConnectionRefused,
        Errc::HostUnreachable,
        Errc::ConnectionAlreadyInProgress,
        Errc::OperationInProgress,
        Errc::OperationCanceled,
        Errc::OwnerDead,
        Errc::StateNotRecoverable,
    ];

    pub const fn raw(self) -> i32 {
        self as i32
    }

    pub fn from_raw(raw: i32) -> Option<Errc> {
        Self::ALL.iter().copied().find(|errc| errc.raw() == raw)
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Errc::Success)
    }
}

impl From<io::ErrorKind> for Errc {
    fn from(kind: io::ErrorKind) -> Self {
        use io::ErrorKind as K;
        match kind {
            K::NotFound => Errc::NoSuchFileOrDirectory,
            K::PermissionDenied => Errc::PermissionDenied,
            K::ConnectionRefused => Errc::ConnectionRefused,
            K::ConnectionReset => Errc::ConnectionReset,
            K::HostUnreachable => Errc::HostUnreachable,
            K::NetworkUnreachable => Errc::NetworkUnreachable,
            K::ConnectionAborted => Errc::ConnectionAborted,
            K::NotConnected => Errc::NotConnected,
            K::AddrInUse => Errc::AddressInUse,
            K::AddrNotAvailable => Errc::AddressNotAvailable,
            K::NetworkDown => Errc::NetworkDown,
            K::BrokenPipe => Errc::BrokenPipe,
            K::AlreadyExists => Errc::FileExists,
            K::WouldBlock => Errc::ResourceUnavailableTryAgain,
            K::NotADirectory => Errc::NotADirectory,
            K::IsADirectory => Errc::IsADirectory,
            K::DirectoryNotEmpty => Errc::DirectoryNotEmpty,
            K::ReadOnlyFilesystem => Errc::ReadOnlyFileSystem,
            K::InvalidInput => Errc::InvalidArgument,
            K::InvalidData => Errc::BadMessage,
            K::TimedOut => Errc::TimedOut,
            K::WriteZero | K::UnexpectedEof => Errc::IoError,
            K::StorageFull => Errc::NoSpaceOnDevice,
            K::NotSeekable => Errc::InvalidSeek,
            K::FileTooLarge => Errc::FileTooLarge,
            K::ResourceBusy => Errc::ResourceBusy,
            K::ExecutableFileBusy => Errc::TextFileBusy,
            K::Deadlock => Errc::ResourceDeadlockWouldOccur,
            K::TooManyLinks => Errc::TooManyLinks,
            K::ArgumentListTooLong => Errc::ArgumentListTooLong,
            K::Interrupted => Errc::Interrupted,
            K::Unsupported => Errc::NotSupported,
            K::OutOfMemory => Errc::NotEnoughMemory,
            _ => Errc::Unknown,
        }
    }
}

/// The domain of [`Errc`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenericDomain;

pub type GenericCode = StatusCode<GenericDomain>;

impl StaticDomain for GenericDomain {
    type Value = Errc;

    const ID: DomainId = GENERIC_DOMAIN_ID;
    const NAME: &'static str = "generic";

    fn success(value: &Errc) -> bool {
        value.is_success()
    }

    fn generic_code(value: &Errc) -> Errc {
        *value
    }

    fn equivalent(value: &Errc, other: &dyn AnyStatus) -> bool {
        other.domain_id() == Some(GENERIC_DOMAIN_ID) && other.value_as::<Errc>() == Some(*value)
    }
}

impl IntoStatusCode for Errc {
    type Domain = GenericDomain;

    fn into_status_code(self) -> GenericCode {
        GenericCode::new(self)
    }
}

impl IntoStatusCode for io::ErrorKind {
    type Domain = GenericDomain;

    fn into_status_code(self) -> GenericCode {
        GenericCode::new(self.into())
    }
}

impl IntoStatusCode for &io::Error {
    type Domain = GenericDomain;

    fn into_status_code(self) -> GenericCode {
        // errno numbers only line up with `Errc` on Linux
        #[cfg(target_os = "linux")]
        if let Some(errc) = self.raw_os_error().and_then(Errc::from_raw) {
            return GenericCode::new(errc);
        }
        self.kind().into_status_code()
    }
}

impl IntoStatusCode for io::Error {
    type Domain = GenericDomain;

    fn into_status_code(self) -> GenericCode {
        (&self).into_status_code()
    }
}
