//! 集成测试用的模拟适配器
//!
//! 寄存器按字节保存；写入之后对少数状态寄存器做出芯片会做的反应，
//! 使上电、EFuse 读取与 LLT 初始化中的轮询能够结束。批量传输与工作项
//! 只记录，由测试决定何时完成或执行。
#![allow(dead_code)]

use std::{
    collections::BTreeMap,
    sync::{Arc, Weak},
    time::Duration,
};

use crab_rtwm::*;
use spin::{Mutex, Once};
use usb_if::{
    host::{BulkCompletion, BulkTransfer},
    transfer::ControlSetup,
};

pub const APS_FSMCO: u16 = 0x004;
pub const EFUSE_CTRL: u16 = 0x030;
pub const CR: u16 = 0x100;
pub const LLT_INIT: u16 = 0x1e0;
pub const RQPN: u16 = 0x200;
pub const RQPN_NPQ: u16 = 0x214;
pub const TXPKT_EMPTY: u16 = 0x41a;
pub const DARFRC: u16 = 0x430;
pub const TXPKTBUF_BCNQ1_BDNY: u16 = 0x457;
pub const MACID: u16 = 0x610;
pub const CAMCMD: u16 = 0x670;
pub const CAMWRITE: u16 = 0x674;
pub const MSR: u16 = 0x102;

pub const RX_ENDPOINT: u8 = 0x81;
pub const ENDPOINTS: [u8; 4] = [RX_ENDPOINT, 0x02, 0x03, 0x04];
pub const MACADDR: MacAddr = [0x00, 0xe0, 0x4c, 0x12, 0x34, 0x56];

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 模拟芯片的寄存器空间
#[derive(Default)]
pub struct SimChip {
    mem: Mutex<BTreeMap<u16, u8>>,
    pub writes: Mutex<Vec<(u16, Vec<u8>)>>,
    /// 为真时 MAC 永远不报告上电完成
    pub stuck_power: Mutex<bool>,
}

impl SimChip {
    pub fn new() -> Self {
        let chip = Self::default();
        chip.reset();
        chip
    }

    /// 复位后的寄存器状态
    pub fn reset(&self) {
        let mut mem = self.mem.lock();
        mem.clear();
        mem.insert(TXPKT_EMPTY, 0x30);
        drop(mem);
        self.settle();
    }

    pub fn get8(&self, addr: u16) -> u8 {
        *self.mem.lock().get(&addr).unwrap_or(&0)
    }

    pub fn get16(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.get8(addr), self.get8(addr + 1)])
    }

    pub fn get32(&self, addr: u16) -> u32 {
        u32::from_le_bytes([
            self.get8(addr),
            self.get8(addr + 1),
            self.get8(addr + 2),
            self.get8(addr + 3),
        ])
    }

    pub fn set8(&self, addr: u16, val: u8) {
        self.mem.lock().insert(addr, val);
    }

    pub fn written(&self, addr: u16) -> bool {
        self.writes.lock().iter().any(|(a, _)| *a == addr)
    }

    fn or8(mem: &mut BTreeMap<u16, u8>, addr: u16, bits: u8) {
        *mem.entry(addr).or_insert(0) |= bits;
    }

    fn clear8(mem: &mut BTreeMap<u16, u8>, addr: u16, bits: u8) {
        *mem.entry(addr).or_insert(0) &= !bits;
    }

    /// 芯片对写入的反应
    fn settle(&self) {
        let mut mem = self.mem.lock();
        if *self.stuck_power.lock() {
            Self::clear8(&mut mem, APS_FSMCO + 2, 0x02);
        } else {
            // SUS_HOST 置位，APFM_ONMAC / APFM_OFF 立即完成
            Self::or8(&mut mem, APS_FSMCO + 2, 0x02);
            Self::clear8(&mut mem, APS_FSMCO + 1, 0x03);
        }
        // LLT 写操作立即完成
        Self::clear8(&mut mem, LLT_INIT + 3, 0xc0);
    }
}

impl ControlPipe for SimChip {
    fn control_in(
        &self,
        setup: ControlSetup,
        data: &mut [u8],
        _timeout: Duration,
    ) -> core::result::Result<usize, TransferError> {
        let mem = self.mem.lock();
        for (i, v) in data.iter_mut().enumerate() {
            *v = *mem.get(&(setup.value + i as u16)).unwrap_or(&0);
        }
        Ok(data.len())
    }

    fn control_out(
        &self,
        setup: ControlSetup,
        data: &[u8],
        _timeout: Duration,
    ) -> core::result::Result<usize, TransferError> {
        {
            let mut mem = self.mem.lock();
            for (i, v) in data.iter().enumerate() {
                mem.insert(setup.value + i as u16, *v);
            }
            if setup.value == EFUSE_CTRL {
                // 空 EFuse：每个字节都是结束标记
                mem.insert(EFUSE_CTRL, 0xff);
                Self::or8(&mut mem, EFUSE_CTRL + 3, 0x80);
            }
        }
        self.writes.lock().push((setup.value, data.to_vec()));
        self.settle();
        Ok(data.len())
    }
}

/// 记录排队的工作项
#[derive(Default)]
pub struct SimKernel {
    pending: Mutex<Vec<Work>>,
}

impl SimKernel {
    pub fn scheduled(&self, work: Work) -> bool {
        self.pending.lock().contains(&work)
    }

    pub fn take(&self) -> Vec<Work> {
        core::mem::take(&mut *self.pending.lock())
    }
}

impl Kernel for SimKernel {
    fn delay(&self, _duration: Duration) {}

    fn schedule(&self, work: Work, _after: Duration) {
        let mut pending = self.pending.lock();
        if !pending.contains(&work) {
            pending.push(work);
        }
    }

    fn cancel(&self, work: Work) {
        self.pending.lock().retain(|w| *w != work);
    }
}

#[derive(Default)]
pub struct SimBulk {
    submitted: Mutex<Vec<BulkTransfer>>,
    pub stopped: Mutex<Vec<usize>>,
}

impl SimBulk {
    pub fn take(&self) -> Vec<BulkTransfer> {
        core::mem::take(&mut *self.submitted.lock())
    }

    /// 取出一个发往 `endpoint` 的传输
    pub fn take_endpoint(&self, endpoint: u8) -> Option<BulkTransfer> {
        let mut submitted = self.submitted.lock();
        let pos = submitted.iter().position(|t| t.endpoint == endpoint)?;
        Some(submitted.remove(pos))
    }
}

impl BulkEngine for SimBulk {
    fn submit(&self, transfer: BulkTransfer) {
        self.submitted.lock().push(transfer);
    }

    fn stop(&self, pipe: usize) {
        self.stopped.lock().push(pipe);
    }

    fn clear_stall(&self, _pipe: usize, _endpoint: u8) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetEvent {
    Input {
        node: Option<NodeId>,
        data: Vec<u8>,
        flags: RxFlags,
    },
    TxComplete {
        node: NodeId,
        len: usize,
        ok: bool,
    },
    Ratectl {
        node: NodeId,
        success: bool,
        retries: u8,
    },
}

/// 记录上行回调；回调内会重新进入驱动
#[derive(Default)]
pub struct SimNet {
    pub events: Mutex<Vec<NetEvent>>,
    dev: Once<Weak<Urtwm>>,
    /// 回调里观察到的运行状态
    pub reentered: Mutex<Vec<bool>>,
}

impl SimNet {
    pub fn take(&self) -> Vec<NetEvent> {
        core::mem::take(&mut *self.events.lock())
    }

    fn reenter(&self) {
        if let Some(dev) = self.dev.get().and_then(Weak::upgrade) {
            let running = dev.is_running();
            let _ = dev.stats();
            self.reentered.lock().push(running);
        }
    }
}

impl NetStack for SimNet {
    fn input(&self, node: Option<NodeId>, frame: RxFrame, _rssi: i8, _nf: i8) {
        self.reenter();
        self.events.lock().push(NetEvent::Input {
            node,
            data: frame.data,
            flags: frame.flags,
        });
    }

    fn tx_complete(&self, node: NodeId, frame: Vec<u8>, ok: bool) {
        self.reenter();
        self.events.lock().push(NetEvent::TxComplete {
            node,
            len: frame.len(),
            ok,
        });
    }

    fn ratectl_tx_complete(&self, node: NodeId, success: bool, retries: u8) {
        self.events.lock().push(NetEvent::Ratectl {
            node,
            success,
            retries,
        });
    }

    fn ratectl_rate(&self, _node: NodeId) -> u8 {
        108
    }

    fn beacon_alloc(&self) -> Option<Vec<u8>> {
        None
    }
}

pub struct Harness {
    pub dev: Arc<Urtwm>,
    pub chip: Arc<SimChip>,
    pub bulk: Arc<SimBulk>,
    pub kernel: Arc<SimKernel>,
    pub net: Arc<SimNet>,
}

impl Harness {
    pub fn attach(kind: ChipKind) -> Self {
        Self::attach_with(kind, Config::new().macaddr(MACADDR))
    }

    pub fn attach_with(kind: ChipKind, config: Config) -> Self {
        init_logging();
        let chip = Arc::new(SimChip::new());
        let bulk = Arc::new(SimBulk::default());
        let kernel = Arc::new(SimKernel::default());
        let net = Arc::new(SimNet::default());
        let host = Host {
            control: chip.clone(),
            bulk: bulk.clone(),
            kernel: kernel.clone(),
            net: net.clone(),
        };
        let dev = Arc::new(
            Urtwm::attach(kind, DeviceSpeed::High, &ENDPOINTS, host, config)
                .expect("attach"),
        );
        net.dev.call_once(|| Arc::downgrade(&dev));
        Self {
            dev,
            chip,
            bulk,
            kernel,
            net,
        }
    }

    /// 执行所有已排队的工作项，直到不再产生新的
    pub fn run_pending(&self) {
        for _ in 0..8 {
            let works = self.kernel.take();
            if works.is_empty() {
                return;
            }
            for w in works {
                self.dev.run_work(w);
            }
        }
    }

    /// 以 `actual` 字节完成一个传输
    pub fn complete(&self, t: BulkTransfer, actual: usize) {
        let c: BulkCompletion = t.complete(actual, Ok(()));
        self.dev.transfer_complete(c);
    }
}
