//! 设备驱动所使用的主机侧接口
//!
//! 控制传输为同步往返；批量传输由主机的异步传输引擎完成，
//! 缓冲区在提交时移交给引擎，完成时随 [`BulkCompletion`] 归还。

use alloc::vec::Vec;
use core::time::Duration;

use crate::{
    err::TransferError,
    transfer::{ControlSetup, Direction},
};

/// USB 设备速度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DeviceSpeed {
    Low = 0,
    Full = 1,
    High = 2,
    Wireless = 3,
    SuperSpeed = 4,
    SuperSpeedPlus = 5,
}

impl From<u8> for DeviceSpeed {
    fn from(value: u8) -> Self {
        match value {
            0 => DeviceSpeed::Low,
            1 => DeviceSpeed::Full,
            2 => DeviceSpeed::High,
            3 => DeviceSpeed::Wireless,
            4 => DeviceSpeed::SuperSpeed,
            5 => DeviceSpeed::SuperSpeedPlus,
            _ => DeviceSpeed::Full,
        }
    }
}

impl DeviceSpeed {
    pub fn is_super_speed(&self) -> bool {
        matches!(self, Self::SuperSpeed | Self::SuperSpeedPlus)
    }
}

/// 同步控制传输
pub trait ControlPipe: Send + Sync {
    fn control_in(
        &self,
        setup: ControlSetup,
        data: &mut [u8],
        timeout: Duration,
    ) -> Result<usize, TransferError>;

    fn control_out(
        &self,
        setup: ControlSetup,
        data: &[u8],
        timeout: Duration,
    ) -> Result<usize, TransferError>;
}

/// 一次批量传输请求
#[derive(Debug)]
pub struct BulkTransfer {
    /// 驱动侧管道编号，完成时原样带回
    pub pipe: usize,
    pub endpoint: u8,
    pub direction: Direction,
    /// 驱动侧缓冲区编号
    pub token: usize,
    pub buffer: Vec<u8>,
    /// OUT: 有效数据长度；IN: 最大接收长度
    pub len: usize,
}

impl BulkTransfer {
    pub fn complete(self, actual: usize, result: Result<(), TransferError>) -> BulkCompletion {
        BulkCompletion {
            pipe: self.pipe,
            token: self.token,
            buffer: self.buffer,
            actual,
            result,
        }
    }
}

/// 批量传输完成通知
#[derive(Debug)]
pub struct BulkCompletion {
    pub pipe: usize,
    pub token: usize,
    pub buffer: Vec<u8>,
    pub actual: usize,
    pub result: Result<(), TransferError>,
}

/// 异步批量传输引擎
///
/// `submit` 不得在调用栈内同步回调完成通知。
pub trait BulkEngine: Send + Sync {
    fn submit(&self, transfer: BulkTransfer);

    /// 取消管道上所有未完成的传输，可重复调用
    fn stop(&self, pipe: usize);

    fn clear_stall(&self, pipe: usize, endpoint: u8);
}
