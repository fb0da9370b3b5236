use alloc::string::String;

/// 传输错误
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("Stall")]
    Stall,
    #[error("Timeout")]
    Timeout,
    #[error("Cancelled")]
    Cancelled,
    #[error("Request queue full")]
    RequestQueueFull,
    #[error("Other error: {0}")]
    Other(String),
}

impl TransferError {
    /// 取消类错误不需要清除 stall，也不应重新提交
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
