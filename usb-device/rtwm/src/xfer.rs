//! 批量传输管道与端点映射
//!
//! 每个管道同一时刻最多一个传输在引擎中。提交时缓冲区随
//! [`BulkTransfer`] 交给引擎，令牌里记录槽位号与代数，设备停止后
//! 代数递增，迟到的完成通知据此丢弃。

use alloc::vec::Vec;

use log::{debug, trace};
use usb_if::{
    host::{BulkCompletion, BulkEngine, BulkTransfer},
    transfer::Direction,
};

use crate::{
    err::{Error, Result},
    net::Ac,
};

/// 批量管道
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pipe {
    Rx = 0,
    TxBe = 1,
    TxBk = 2,
    TxVi = 3,
    TxVo = 4,
}

impl Pipe {
    pub const COUNT: usize = 5;
    pub const TX: [Pipe; 4] = [Pipe::TxBe, Pipe::TxBk, Pipe::TxVi, Pipe::TxVo];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(Self::Rx),
            1 => Some(Self::TxBe),
            2 => Some(Self::TxBk),
            3 => Some(Self::TxVi),
            4 => Some(Self::TxVo),
            _ => None,
        }
    }

    pub fn for_ac(ac: Ac) -> Self {
        match ac {
            Ac::Be => Self::TxBe,
            Ac::Bk => Self::TxBk,
            Ac::Vi => Self::TxVi,
            Ac::Vo => Self::TxVo,
        }
    }

    pub fn is_tx(self) -> bool {
        self != Self::Rx
    }
}

/// 最多使用的 bulk-out 端点数
pub const MAX_EPOUT: usize = 4;

/// 管道到端点地址的映射
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    addr: [u8; Pipe::COUNT],
    ntx: usize,
}

impl Endpoints {
    /// 由接口上的 bulk 端点地址建立映射
    ///
    /// 第一个 IN 端点用于接收；OUT 端点最多取 4 个，VO 固定用第一个，
    /// 其余按数量分给 VI 与 BE/BK。
    pub fn from_addrs(addrs: &[u8]) -> Result<Self> {
        let rx = addrs
            .iter()
            .copied()
            .find(|&a| Direction::from_address(a) == Direction::In)
            .ok_or(Error::InvalidArgument)?;
        let out: Vec<u8> = addrs
            .iter()
            .copied()
            .filter(|&a| Direction::from_address(a) == Direction::Out)
            .take(MAX_EPOUT)
            .collect();

        let (be, vi) = match out.len() {
            4 | 3 => (out[2], out[1]),
            2 => (out[1], out[0]),
            1 => (out[0], out[0]),
            n => {
                debug!("invalid number of Tx bulk pipes ({n})");
                return Err(Error::InvalidArgument);
            }
        };

        let mut addr = [0; Pipe::COUNT];
        addr[Pipe::Rx.index()] = rx;
        addr[Pipe::TxBe.index()] = be;
        addr[Pipe::TxBk.index()] = be;
        addr[Pipe::TxVi.index()] = vi;
        addr[Pipe::TxVo.index()] = out[0];
        Ok(Self {
            addr,
            ntx: out.len(),
        })
    }

    pub fn addr(&self, pipe: Pipe) -> u8 {
        self.addr[pipe.index()]
    }

    /// bulk-out 端点数，决定 TX 队列划分
    pub fn ntx(&self) -> usize {
        self.ntx
    }
}

/// 一个已接受的完成通知
#[derive(Debug)]
pub(crate) struct Completed {
    pub pipe: Pipe,
    pub slot: usize,
    pub buffer: Vec<u8>,
    pub actual: usize,
    pub result: core::result::Result<(), usb_if::err::TransferError>,
}

pub(crate) struct Xfers {
    eps: Endpoints,
    busy: [bool; Pipe::COUNT],
    generation: usize,
}

const SLOT_BITS: usize = 8;
const SLOT_MASK: usize = (1 << SLOT_BITS) - 1;

impl Xfers {
    pub fn new(eps: Endpoints) -> Self {
        Self {
            eps,
            busy: [false; Pipe::COUNT],
            generation: 0,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.eps
    }

    pub fn is_busy(&self, pipe: Pipe) -> bool {
        self.busy[pipe.index()]
    }

    fn token(&self, slot: usize) -> usize {
        (self.generation << SLOT_BITS) | (slot & SLOT_MASK)
    }

    /// 把槽位 `slot` 的缓冲区交给引擎
    pub fn submit(
        &mut self,
        bulk: &dyn BulkEngine,
        pipe: Pipe,
        slot: usize,
        buffer: Vec<u8>,
        len: usize,
    ) {
        let direction = if pipe.is_tx() {
            Direction::Out
        } else {
            Direction::In
        };
        trace!("submit {pipe:?} slot {slot} len {len}");
        self.busy[pipe.index()] = true;
        bulk.submit(BulkTransfer {
            pipe: pipe.index(),
            endpoint: self.eps.addr(pipe),
            direction,
            token: self.token(slot),
            buffer,
            len,
        });
    }

    /// 校验完成通知；过期或未知管道的通知返回 `None`
    pub fn accept(&mut self, c: BulkCompletion) -> Option<Completed> {
        let pipe = Pipe::from_index(c.pipe)?;
        if c.token >> SLOT_BITS != self.generation || !self.busy[pipe.index()] {
            debug!("stale completion on {pipe:?} ignored");
            return None;
        }
        self.busy[pipe.index()] = false;
        Some(Completed {
            pipe,
            slot: c.token & SLOT_MASK,
            buffer: c.buffer,
            actual: c.actual,
            result: c.result,
        })
    }

    pub fn clear_stall(&self, bulk: &dyn BulkEngine, pipe: Pipe) {
        bulk.clear_stall(pipe.index(), self.eps.addr(pipe));
    }

    /// 停止所有管道，之后到达的完成通知一律作废；可重复调用
    pub fn abort_all(&mut self, bulk: &dyn BulkEngine) {
        for i in 0..Pipe::COUNT {
            bulk.stop(i);
        }
        self.busy = [false; Pipe::COUNT];
        self.generation = self.generation.wrapping_add(1) & (usize::MAX >> SLOT_BITS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spin::Mutex;
    use usb_if::err::TransferError;

    #[derive(Default)]
    struct Engine {
        submitted: Mutex<Vec<BulkTransfer>>,
        stopped: Mutex<Vec<usize>>,
    }

    impl BulkEngine for Engine {
        fn submit(&self, transfer: BulkTransfer) {
            self.submitted.lock().push(transfer);
        }

        fn stop(&self, pipe: usize) {
            self.stopped.lock().push(pipe);
        }

        fn clear_stall(&self, _pipe: usize, _endpoint: u8) {}
    }

    #[test]
    fn endpoint_mapping_by_count() {
        let eps = Endpoints::from_addrs(&[0x81, 0x02, 0x03, 0x04]).unwrap();
        assert_eq!(eps.ntx(), 3);
        assert_eq!(eps.addr(Pipe::Rx), 0x81);
        assert_eq!(eps.addr(Pipe::TxVo), 0x02);
        assert_eq!(eps.addr(Pipe::TxVi), 0x03);
        assert_eq!(eps.addr(Pipe::TxBe), 0x04);
        assert_eq!(eps.addr(Pipe::TxBk), 0x04);

        let eps = Endpoints::from_addrs(&[0x02, 0x81, 0x03]).unwrap();
        assert_eq!(eps.addr(Pipe::TxVo), 0x02);
        assert_eq!(eps.addr(Pipe::TxVi), 0x02);
        assert_eq!(eps.addr(Pipe::TxBe), 0x03);

        let eps = Endpoints::from_addrs(&[0x81, 0x05]).unwrap();
        assert_eq!(eps.ntx(), 1);
        assert_eq!(eps.addr(Pipe::TxBk), 0x05);
    }

    #[test]
    fn endpoint_mapping_rejects_bad_sets() {
        assert_eq!(Endpoints::from_addrs(&[0x81]), Err(Error::InvalidArgument));
        assert_eq!(Endpoints::from_addrs(&[0x02]), Err(Error::InvalidArgument));
        let eps = Endpoints::from_addrs(&[0x81, 1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(eps.ntx(), 4);
    }

    #[test]
    fn stale_completion_after_abort() {
        let engine = Engine::default();
        let eps = Endpoints::from_addrs(&[0x81, 0x02]).unwrap();
        let mut xfers = Xfers::new(eps);
        xfers.submit(&engine, Pipe::TxVo, 3, vec![0; 8], 8);
        assert!(xfers.is_busy(Pipe::TxVo));
        let t = engine.submitted.lock().pop().unwrap();
        assert_eq!(t.endpoint, 0x02);
        assert_eq!(t.direction, Direction::Out);

        xfers.abort_all(&engine);
        assert_eq!(engine.stopped.lock().len(), Pipe::COUNT);
        assert!(!xfers.is_busy(Pipe::TxVo));
        assert!(xfers.accept(t.complete(0, Err(TransferError::Cancelled))).is_none());
    }

    #[test]
    fn completion_returns_slot() {
        let engine = Engine::default();
        let eps = Endpoints::from_addrs(&[0x81, 0x02]).unwrap();
        let mut xfers = Xfers::new(eps);
        xfers.submit(&engine, Pipe::Rx, 0, vec![0; 64], 64);
        let t = engine.submitted.lock().pop().unwrap();
        assert_eq!(t.direction, Direction::In);
        let done = xfers.accept(t.complete(24, Ok(()))).unwrap();
        assert_eq!(done.pipe, Pipe::Rx);
        assert_eq!(done.slot, 0);
        assert_eq!(done.actual, 24);
        assert!(!xfers.is_busy(Pipe::Rx));
    }
}
