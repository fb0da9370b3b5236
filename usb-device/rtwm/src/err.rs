pub use usb_if::err::TransferError;

pub type Result<T = ()> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Timeout")]
    Timeout,
    #[error("No memory")]
    OutOfMemory,
    #[error("Would block")]
    WouldBlock,
    #[error("Truncated record")]
    Truncated,
    #[error("Checksum invalid")]
    ChecksumInvalid,
    #[error("Unsupported chip")]
    UnsupportedChip,
    #[error("ROM read failed")]
    RomReadFailed,
    #[error("IO error: {0}")]
    Io(TransferError),
    #[error("Invalid argument")]
    InvalidArgument,
    #[error("Network is down")]
    NetDown,
    #[error("No buffer space available")]
    NoBufs,
    #[error("Firmware error: {0}")]
    Firmware(&'static str),
}

impl From<TransferError> for Error {
    fn from(value: TransferError) -> Self {
        match value {
            TransferError::Timeout => Self::Timeout,
            other => Self::Io(other),
        }
    }
}

impl Error {
    /// 背压类错误，调用方应稍后重试而不是放弃设备
    pub fn is_backpressure(&self) -> bool {
        matches!(self, Self::WouldBlock | Self::NoBufs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_timeout_maps_to_timeout() {
        assert_eq!(Error::from(TransferError::Timeout), Error::Timeout);
        assert_eq!(
            Error::from(TransferError::Stall),
            Error::Io(TransferError::Stall)
        );
        assert!(Error::WouldBlock.is_backpressure());
        assert!(!Error::Timeout.is_backpressure());
    }
}
