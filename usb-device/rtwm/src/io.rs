//! 寄存器访问层
//!
//! 所有寄存器读写都是一次同步的厂商控制传输，失败时按固定间隔重试。

use alloc::sync::Arc;
use core::time::Duration;

use log::{trace, warn};
use usb_if::{
    host::ControlPipe,
    transfer::{ControlSetup, Recipient, Request, RequestType},
};

use crate::{
    err::{Error, Result},
    osal::{Kernel, delay_us},
    reg::*,
};

const REQUEST_TIMEOUT: Duration = Duration::from_millis(250);
const REQUEST_RETRIES: usize = 10;
const REQUEST_PAUSE: Duration = Duration::from_millis(10);

/// 把 `val` 放到 `mask` 对应的位段
pub const fn field(mask: u32, val: u32) -> u32 {
    (val << mask.trailing_zeros()) & mask
}

/// 取出 `mask` 对应的位段
pub const fn get_field(reg: u32, mask: u32) -> u32 {
    (reg & mask) >> mask.trailing_zeros()
}

pub(crate) struct Io {
    pipe: Arc<dyn ControlPipe>,
    kernel: Arc<dyn Kernel>,
}

impl Io {
    pub fn new(pipe: Arc<dyn ControlPipe>, kernel: Arc<dyn Kernel>) -> Self {
        Self { pipe, kernel }
    }

    pub fn kernel(&self) -> &Arc<dyn Kernel> {
        &self.kernel
    }

    pub fn delay(&self, us: u64) {
        delay_us(self.kernel.as_ref(), us);
    }

    fn setup(addr: u16) -> ControlSetup {
        ControlSetup {
            request_type: RequestType::Vendor,
            recipient: Recipient::Device,
            request: Request::from(REQ_REGS),
            value: addr,
            index: 0,
        }
    }

    fn retry(
        &self,
        addr: u16,
        mut f: impl FnMut() -> core::result::Result<usize, usb_if::err::TransferError>,
    ) -> Result {
        let mut last = None;
        for left in (0..REQUEST_RETRIES).rev() {
            match f() {
                Ok(_) => return Ok(()),
                Err(e) => {
                    trace!("control request {addr:#x} failed: {e:?} (retries left: {left})");
                    last = Some(e);
                    self.kernel.delay(REQUEST_PAUSE);
                }
            }
        }
        if let Some(e) = last {
            warn!("control request {addr:#x} gave up: {e:?}");
        }
        Err(Error::Timeout)
    }

    pub fn write_region(&self, addr: u16, data: &[u8]) -> Result {
        self.retry(addr, || {
            self.pipe
                .control_out(Self::setup(addr), data, REQUEST_TIMEOUT)
        })
    }

    pub fn read_region(&self, addr: u16, buf: &mut [u8]) -> Result {
        self.retry(addr, || {
            self.pipe
                .control_in(Self::setup(addr), &mut *buf, REQUEST_TIMEOUT)
        })
    }

    pub fn write8(&self, addr: u16, val: u8) -> Result {
        self.write_region(addr, &[val])
    }

    pub fn write16(&self, addr: u16, val: u16) -> Result {
        self.write_region(addr, &val.to_le_bytes())
    }

    pub fn write32(&self, addr: u16, val: u32) -> Result {
        self.write_region(addr, &val.to_le_bytes())
    }

    /// 读失败时返回全 1
    pub fn read8(&self, addr: u16) -> u8 {
        let mut buf = [0u8; 1];
        match self.read_region(addr, &mut buf) {
            Ok(()) => buf[0],
            Err(e) => {
                warn!("read8 {addr:#x} failed: {e}");
                0xff
            }
        }
    }

    pub fn read16(&self, addr: u16) -> u16 {
        let mut buf = [0u8; 2];
        match self.read_region(addr, &mut buf) {
            Ok(()) => u16::from_le_bytes(buf),
            Err(e) => {
                warn!("read16 {addr:#x} failed: {e}");
                0xffff
            }
        }
    }

    pub fn read32(&self, addr: u16) -> u32 {
        let mut buf = [0u8; 4];
        match self.read_region(addr, &mut buf) {
            Ok(()) => u32::from_le_bytes(buf),
            Err(e) => {
                warn!("read32 {addr:#x} failed: {e}");
                0xffff_ffff
            }
        }
    }

    pub fn setbits8(&self, addr: u16, clr: u8, set: u8) -> Result {
        self.write8(addr, (self.read8(addr) & !clr) | set)
    }

    pub fn setbits16(&self, addr: u16, clr: u16, set: u16) -> Result {
        self.write16(addr, (self.read16(addr) & !clr) | set)
    }

    pub fn setbits32(&self, addr: u16, clr: u32, set: u32) -> Result {
        self.write32(addr, (self.read32(addr) & !clr) | set)
    }

    /// 对 32 位寄存器中的第 `shift` 个字节做单字节读改写
    pub fn setbits8_shift(&self, addr: u16, clr: u32, set: u32, shift: u16) -> Result {
        let bits = 8 * shift as u32;
        self.setbits8(addr + shift, (clr >> bits) as u8, (set >> bits) as u8)
    }

    pub fn bb_read(&self, addr: u16) -> u32 {
        self.read32(addr)
    }

    pub fn bb_write(&self, addr: u16, val: u32) -> Result {
        self.write32(addr, val)
    }

    pub fn bb_setbits(&self, addr: u16, clr: u32, set: u32) -> Result {
        self.setbits32(addr, clr, set)
    }

    pub fn rf_write(&self, chain: usize, addr: u8, val: u32) -> Result {
        self.bb_write(
            bb_lssi_param(chain),
            field(BB_LSSI_PARAM_ADDR_M, addr as u32) | field(BB_LSSI_PARAM_DATA_M, val),
        )
    }

    /// 关闭 CCA 后读回，避免读到瞬态值
    pub fn rf_read_cca_off(&self, chain: usize, addr: u8) -> u32 {
        if addr != RF_AC {
            let _ = self
                .bb_setbits(BB_CCA_ON_SEC, 0, BB_CCA_ON_SEC_CCA_OFF)
                .inspect_err(|e| warn!("failed to turn CCA off: {e}"));
        }
        let val = self.rf_readback(chain, addr, 0);
        if addr != RF_AC {
            let _ = self
                .bb_setbits(BB_CCA_ON_SEC, BB_CCA_ON_SEC_CCA_OFF, 0)
                .inspect_err(|e| warn!("failed to turn CCA on: {e}"));
        }
        val
    }

    /// 写入地址后等待固定时间再读回
    pub fn rf_read_settle(&self, chain: usize, addr: u8) -> u32 {
        self.rf_readback(chain, addr, 20)
    }

    fn rf_readback(&self, chain: usize, addr: u8, settle_us: u64) -> u32 {
        let pi_mode = self.bb_read(bb_hssi_param1(chain)) & BB_HSSI_PARAM1_PI != 0;
        let _ = self
            .bb_setbits(BB_HSSI_READ, BB_HSSI_READ_ADDR_M, addr as u32)
            .inspect_err(|e| warn!("failed to select RF register {addr:#x}: {e}"));
        if settle_us != 0 {
            self.delay(settle_us);
        }
        let val = self.bb_read(if pi_mode {
            bb_hspi_readback(chain)
        } else {
            bb_lssi_readback(chain)
        });
        get_field(val, BB_LSSI_READBACK_DATA_M)
    }

    /// 轮询 `cond`，最多 `tries` 次，每次间隔 `interval_us`
    pub fn poll(&self, tries: usize, interval_us: u64, mut cond: impl FnMut(&Self) -> bool) -> bool {
        for _ in 0..tries {
            if cond(self) {
                return true;
            }
            self.delay(interval_us);
        }
        false
    }
}
