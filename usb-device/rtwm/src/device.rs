//! 设备实例与对外接口
//!
//! 所有状态放在 [`Softc`] 中，由一把设备锁保护。向协议栈的回调（收到的帧、
//! 发送完成）在持锁期间只入队，释放锁之后再统一派发，协议栈可以在回调
//! 中重新进入驱动。

use alloc::{collections::VecDeque, sync::Arc, vec::Vec};
use core::{
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

use bitflags::bitflags;
use log::{debug, info, warn};
use spin::Mutex;
use usb_if::host::{BulkCompletion, BulkEngine, ControlPipe, DeviceSpeed};

use crate::{
    chip::{Chip, ChipKind},
    cmdq::{CmdQueue, Command},
    config::Config,
    err::{Error, Result},
    fw::H2c,
    io::Io,
    key::{self, Key},
    mac::{Vap, WME_DEFAULT},
    net::*,
    node::NodeTable,
    osal::{Kernel, Work},
    pool::Pool,
    reg::*,
    rom::{RomInfo, efuse_read},
    xfer::{Endpoints, Xfers},
};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct Flags: u32 {
        const RUNNING = 0x0001;
        const FW_LOADED = 0x0002;
        const TEMP_MEASURED = 0x0004;
        const IQK_RUNNING = 0x0008;
        /// CCK 高功率模式，影响 CCK RSSI 的计算
        const CCK_HIPWR = 0x0010;
        const RXCKSUM_EN = 0x0100;
        const RXCKSUM6_EN = 0x0200;
    }
}

/// 支持的 USB 设备
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceId {
    pub vendor: u16,
    pub product: u16,
    pub kind: ChipKind,
}

const fn dev(vendor: u16, product: u16, kind: ChipKind) -> DeviceId {
    DeviceId {
        vendor,
        product,
        kind,
    }
}

const VENDOR_REALTEK: u16 = 0x0bda;

pub const DEVICES: &[DeviceId] = &[
    dev(VENDOR_REALTEK, 0x8812, ChipKind::Rtl8812au),
    dev(VENDOR_REALTEK, 0x881a, ChipKind::Rtl8812au),
    dev(VENDOR_REALTEK, 0x881b, ChipKind::Rtl8812au),
    dev(VENDOR_REALTEK, 0x881c, ChipKind::Rtl8812au),
    dev(VENDOR_REALTEK, 0x0811, ChipKind::Rtl8821au),
    dev(VENDOR_REALTEK, 0x0821, ChipKind::Rtl8821au),
    dev(VENDOR_REALTEK, 0x8822, ChipKind::Rtl8821au),
    dev(VENDOR_REALTEK, 0xa811, ChipKind::Rtl8821au),
];

/// 按 VID/PID 查找芯片型号
pub fn match_device(vendor: u16, product: u16) -> Option<ChipKind> {
    DEVICES
        .iter()
        .find(|d| d.vendor == vendor && d.product == product)
        .map(|d| d.kind)
}

/// 宿主提供的服务
#[derive(Clone)]
pub struct Host {
    pub control: Arc<dyn ControlPipe>,
    pub bulk: Arc<dyn BulkEngine>,
    pub kernel: Arc<dyn Kernel>,
    pub net: Arc<dyn NetStack>,
}

/// 接口计数
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// 丢弃的接收帧
    pub ierrors: u64,
    /// 发送失败
    pub oerrors: u64,
}

/// 释放锁之后才交给协议栈的回调
#[derive(Debug)]
pub(crate) enum Upcall {
    Input {
        node: Option<NodeId>,
        frame: RxFrame,
        rssi: i8,
        nf: i8,
    },
    TxComplete {
        node: NodeId,
        frame: Vec<u8>,
        ok: bool,
    },
    RatectlTxComplete {
        node: NodeId,
        success: bool,
        retries: u8,
    },
}

/// 发送队列上限
pub const SND_QUEUE_LEN: usize = 50;

/// USB RX 聚合参数：页数阈值与超时
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UsbDma {
    pub size: u8,
    pub time: u8,
}

pub(crate) struct Softc {
    pub io: Io,
    pub bulk: Arc<dyn BulkEngine>,
    pub net: Arc<dyn NetStack>,
    pub cmdq: Arc<CmdQueue>,
    pub chip: Chip,
    pub rom: RomInfo,
    pub config: Config,
    pub flags: Flags,
    pub usb_dma: UsbDma,
    pub macaddr: MacAddr,
    pub xfers: Xfers,
    pub rx_pool: Option<Pool>,
    pub tx_pool: Option<Pool>,
    pub snd: VecDeque<TxFrame>,
    /// 已提交、尚未完成的发送数（无固件时）
    pub tx_n_active: usize,
    pub h2c: H2c,
    pub fwver: u16,
    /// 上次校准时的温度
    pub thcal_temp: u8,
    pub last_rssi: i8,
    pub curchan: Channel,
    pub vap: Option<Vap>,
    pub nodes: NodeTable,
    pub keys_bmap: u64,
    pub stats: Stats,
    pub upcalls: Vec<Upcall>,
    pub promisc: bool,
    pub allmulti: bool,
    pub mcast: Vec<MacAddr>,
    pub slottime: u8,
    pub wme: [WmeParams; 4],
    pub txparams: [TxParams; PhyMode::COUNT],
    pub protmode: Protection,
}

impl Softc {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        io: Io,
        host: &Host,
        cmdq: Arc<CmdQueue>,
        chip: Chip,
        rom: RomInfo,
        config: Config,
        usb_dma: UsbDma,
        xfers: Xfers,
    ) -> Self {
        let mut flags = Flags::empty();
        flags.set(Flags::RXCKSUM_EN, config.rx_csum);
        flags.set(Flags::RXCKSUM6_EN, config.rx_csum6);
        let macaddr = config.macaddr.unwrap_or(rom.macaddr);

        Self {
            io,
            bulk: host.bulk.clone(),
            net: host.net.clone(),
            cmdq,
            chip,
            rom,
            config,
            flags,
            usb_dma,
            macaddr,
            xfers,
            rx_pool: None,
            tx_pool: None,
            snd: VecDeque::with_capacity(SND_QUEUE_LEN),
            tx_n_active: 0,
            h2c: H2c::default(),
            fwver: 0,
            thcal_temp: 0,
            last_rssi: 0,
            curchan: Channel::new(1, ChanKind::B),
            vap: None,
            nodes: NodeTable::new(),
            keys_bmap: 0,
            stats: Stats::default(),
            upcalls: Vec::new(),
            promisc: false,
            allmulti: false,
            mcast: Vec::new(),
            slottime: 9,
            wme: WME_DEFAULT,
            txparams: core::array::from_fn(|m| {
                TxParams::for_mode(PhyMode::try_from(m as u8).unwrap_or(PhyMode::B))
            }),
            protmode: Protection::None,
        }
    }

    pub(crate) fn upcall(&mut self, u: Upcall) {
        self.upcalls.push(u);
    }

    /// 为带节点的帧报告发送结果
    pub(crate) fn complete_refs(&mut self, refs: Vec<(Option<Vec<u8>>, Option<NodeId>)>, ok: bool) {
        for refs in refs {
            if let (Some(frame), Some(node)) = refs {
                self.upcall(Upcall::TxComplete { node, frame, ok });
            }
        }
    }

    /// 丢弃发送队列中的帧
    pub(crate) fn drain_snd(&mut self) {
        while let Some(f) = self.snd.pop_front() {
            self.upcall(Upcall::TxComplete {
                node: f.node,
                frame: f.data,
                ok: false,
            });
        }
    }

    /// 停止传输、释放缓冲池并下电，不检查 RUNNING
    pub(crate) fn teardown(&mut self) {
        self.xfers.abort_all(self.bulk.as_ref());
        self.drain_snd();
        if let Some(mut pool) = self.tx_pool.take() {
            let refs = pool.reset();
            self.complete_refs(refs, false);
        }
        self.rx_pool = None;
        self.tx_n_active = 0;
        self.chip.power_off(&self.io);
    }

    pub(crate) fn stop(&mut self) {
        if !self.flags.contains(Flags::RUNNING) {
            return;
        }
        self.flags.remove(
            Flags::RUNNING | Flags::FW_LOADED | Flags::TEMP_MEASURED | Flags::IQK_RUNNING,
        );
        self.fwver = 0;
        self.thcal_temp = 0;
        self.teardown();
        debug!("stopped");
    }

    /// 持锁处理命令队列，设备未运行时保留队列中的命令
    pub(crate) fn cmdq_run(&mut self) {
        if !self.flags.contains(Flags::RUNNING) {
            return;
        }
        while let Some(cmd) = self.cmdq.pop() {
            self.run_cmd(cmd);
        }
    }

    fn run_cmd(&mut self, cmd: Command) {
        match cmd {
            Command::KeySet(k) => {
                if let Err(e) = key::key_set(&self.io, &k) {
                    warn!("cannot set key {}: {e}", k.keyix);
                }
            }
            Command::KeyDel(k) => key::key_del(&self.io, &k, &mut self.keys_bmap),
            Command::MediaStatus(macid) => self.set_media_status(macid),
            Command::SetPwrmode => {
                let _ = self.set_pwrmode(true);
            }
            Command::UpdateSlot(slot) => self.update_slot_cb(slot),
            Command::Calibrate => self.calib_cb(),
        }
    }
}

/// 一个已连接的 RTL8812AU / RTL8821AU 适配器
pub struct Urtwm {
    sc: Mutex<Softc>,
    detached: AtomicBool,
    cmdq: Arc<CmdQueue>,
    net: Arc<dyn NetStack>,
    kernel: Arc<dyn Kernel>,
}

impl Urtwm {
    /// 识别芯片并读取 EFuse，不上电
    ///
    /// `endpoints` 为接口上所有 bulk 端点的地址。
    pub fn attach(
        kind: ChipKind,
        speed: DeviceSpeed,
        endpoints: &[u8],
        host: Host,
        config: Config,
    ) -> Result<Self> {
        let eps = Endpoints::from_addrs(endpoints)?;
        let io = Io::new(host.control.clone(), host.kernel.clone());

        let mut chip = Chip::new(kind);
        chip.read_chipid(&io).inspect_err(|_| warn!("unsupported test chip"))?;

        let usb_dma = if speed.is_super_speed() {
            UsbDma {
                size: 0x07,
                time: 0x1a,
            }
        } else {
            UsbDma {
                size: 0x01,
                time: 0x10,
            }
        };

        let bt_func = !chip.is_12a() && io.read32(MULTI_FUNC_CTRL) & MULTI_BT_FUNC_EN != 0;
        let raw = efuse_read(&io)?;
        let rom = RomInfo::parse(&chip, &raw, bt_func);
        chip.config_rom(&rom);

        let p = chip.params();
        let macaddr = config.macaddr.unwrap_or(rom.macaddr);
        info!(
            "MAC/BB {}, RF 6052 {}T{}R, {} Tx endpoints, address {:02x?}",
            p.name,
            p.ntxchains,
            p.nrxchains,
            eps.ntx(),
            macaddr
        );

        let cmdq = Arc::new(CmdQueue::new(host.kernel.clone()));
        let sc = Softc::new(
            io,
            &host,
            cmdq.clone(),
            chip,
            rom,
            config,
            usb_dma,
            Xfers::new(eps),
        );

        Ok(Self {
            sc: Mutex::new(sc),
            detached: AtomicBool::new(false),
            cmdq,
            net: host.net,
            kernel: host.kernel,
        })
    }

    fn dispatch(&self, upcalls: Vec<Upcall>) {
        for u in upcalls {
            match u {
                Upcall::Input {
                    node,
                    frame,
                    rssi,
                    nf,
                } => self.net.input(node, frame, rssi, nf),
                Upcall::TxComplete { node, frame, ok } => self.net.tx_complete(node, frame, ok),
                Upcall::RatectlTxComplete {
                    node,
                    success,
                    retries,
                } => self.net.ratectl_tx_complete(node, success, retries),
            }
        }
    }

    /// 持锁执行 `f`，释放锁后派发积累的回调
    fn locked<R>(&self, f: impl FnOnce(&mut Softc) -> R) -> R {
        let mut sc = self.sc.lock();
        let ret = f(&mut sc);
        let upcalls = core::mem::take(&mut sc.upcalls);
        drop(sc);
        self.dispatch(upcalls);
        ret
    }

    /// 已 detach 时返回 [`Error::NetDown`]
    fn with<R>(&self, f: impl FnOnce(&mut Softc) -> Result<R>) -> Result<R> {
        if self.detached.load(Ordering::Acquire) {
            return Err(Error::NetDown);
        }
        self.locked(f)
    }

    pub fn is_running(&self) -> bool {
        self.sc.lock().flags.contains(Flags::RUNNING)
    }

    pub fn macaddr(&self) -> MacAddr {
        self.sc.lock().macaddr
    }

    pub fn chip(&self) -> ChipKind {
        self.sc.lock().chip.kind
    }

    pub fn stats(&self) -> Stats {
        self.sc.lock().stats
    }

    /// 上电并初始化硬件；失败时设备回到停止状态
    pub fn init(&self) -> Result {
        self.with(|sc| sc.init())
    }

    pub fn stop(&self) {
        if self.detached.load(Ordering::Acquire) {
            return;
        }
        self.locked(|sc| sc.stop());
    }

    /// 设备拔出：停止所有活动并丢弃未处理的命令
    pub fn detach(&self) {
        if self.detached.swap(true, Ordering::AcqRel) {
            return;
        }
        self.kernel.cancel(Work::Calibration);
        self.locked(|sc| {
            sc.stop();
            sc.vap = None;
            sc.nodes.clear();
        });
        self.kernel.cancel(Work::PowerModeInit);
        self.kernel.cancel(Work::TsfSync);
        self.kernel.cancel(Work::CommandQueue);
        self.cmdq.clear();
        debug!("detached");
    }

    /// 排队发送一个数据帧
    pub fn transmit(&self, frame: TxFrame) -> Result {
        self.with(|sc| sc.transmit(frame))
    }

    /// 发送协议栈构造好的帧；`params` 为 `None` 时按数据帧处理
    pub fn raw_xmit(&self, frame: TxFrame, params: Option<RawParams>) -> Result {
        self.with(|sc| sc.raw_xmit(frame, params))
    }

    /// 传输引擎报告一个批量传输完成
    pub fn transfer_complete(&self, completion: BulkCompletion) {
        if self.detached.load(Ordering::Acquire) {
            return;
        }
        self.locked(|sc| sc.transfer_complete(completion));
    }

    /// 执行宿主调度的工作项
    pub fn run_work(&self, work: Work) {
        if self.detached.load(Ordering::Acquire) {
            return;
        }
        match work {
            Work::CommandQueue => self.locked(|sc| sc.cmdq_run()),
            Work::Calibration => {
                let _ = self.cmdq.enqueue(Command::Calibrate);
            }
            Work::PowerModeInit => {
                let _ = self.cmdq.enqueue(Command::SetPwrmode);
            }
            Work::TsfSync => self.locked(|sc| sc.tsf_sync_adhoc()),
        }
    }

    /// 创建唯一的 vap
    pub fn vap_create(&self, opmode: OpMode, myaddr: Option<MacAddr>) -> Result {
        self.with(|sc| sc.vap_create(opmode, myaddr))
    }

    pub fn vap_delete(&self) -> Result {
        self.with(|sc| {
            sc.vap_delete();
            Ok(())
        })
    }

    /// 802.11 状态切换；进入 RUN 时 `bss` 为当前 BSS
    pub fn newstate(&self, state: State, bss: Option<Bss>) -> Result {
        self.with(|sc| sc.newstate(state, bss))
    }

    pub fn scan_start(&self) -> Result {
        self.with(|sc| sc.scan_start())
    }

    pub fn scan_end(&self) -> Result {
        self.with(|sc| sc.scan_end())
    }

    pub fn set_channel(&self, chan: Channel) -> Result {
        self.with(|sc| sc.set_channel(chan))
    }

    /// 支持的信道
    pub fn channels(&self) -> Vec<Channel> {
        crate::chan::supported_channels()
    }

    /// 为密钥分配 CAM 槽位
    ///
    /// `static_ix` 为 vap 静态密钥的索引（0..4），成对密钥传 `None`。
    pub fn key_alloc(&self, static_ix: Option<u8>) -> Result<u8> {
        self.with(|sc| sc.key_alloc(static_ix))
    }

    /// 写入硬件密钥；软件加密的密钥不应交给驱动
    pub fn key_set(&self, key: Key) -> Result {
        self.with(|sc| sc.process_key(key, true))
    }

    pub fn key_delete(&self, key: Key) -> Result {
        self.with(|sc| sc.process_key(key, false))
    }

    /// 节点（重新）关联
    pub fn newassoc(&self, node: NodeId, info: NodeInfo, isnew: bool) -> Result {
        self.with(|sc| {
            if let Some(id) = sc.nodes.newassoc(node, info, isnew) {
                sc.cmdq.enqueue(Command::MediaStatus(id | MACID_VALID))?;
            }
            Ok(())
        })
    }

    pub fn node_free(&self, node: NodeId) -> Result {
        self.with(|sc| {
            if let Some(id) = sc.nodes.free(node) {
                sc.cmdq.enqueue(Command::MediaStatus(id))?;
            }
            Ok(())
        })
    }

    pub fn wme_update(&self, params: [WmeParams; 4]) -> Result {
        self.with(|sc| sc.wme_update(params))
    }

    /// 更新时隙长度（us）
    pub fn update_slot(&self, slottime: u8) -> Result {
        self.with(|sc| sc.cmdq.enqueue(Command::UpdateSlot(slottime)))
    }

    pub fn update_promisc(&self, promisc: bool) -> Result {
        self.with(|sc| sc.update_promisc(promisc))
    }

    /// 更新组播过滤；`allmulti` 时接收所有组播
    pub fn update_mcast(&self, addrs: &[MacAddr], allmulti: bool) -> Result {
        self.with(|sc| sc.update_mcast(addrs, allmulti))
    }

    /// 切换 IPv4 / IPv6 接收校验和卸载
    pub fn set_rx_checksum(&self, v4: bool, v6: bool) -> Result {
        self.with(|sc| sc.set_rx_checksum(v4, v6))
    }

    /// STA 模式下开关省电
    pub fn set_powersave(&self, enable: bool) -> Result {
        self.with(|sc| sc.set_powersave(enable))
    }

    pub fn update_beacon(&self) -> Result {
        self.with(|sc| sc.update_beacon())
    }

    pub fn get_tsf(&self) -> Result<u64> {
        self.with(|sc| Ok(sc.get_tsf()))
    }

    pub fn set_txparams(&self, mode: PhyMode, params: TxParams) -> Result {
        self.with(|sc| {
            sc.txparams[u8::from(mode) as usize] = params;
            Ok(())
        })
    }

    pub fn set_protection(&self, prot: Protection) -> Result {
        self.with(|sc| {
            sc.protmode = prot;
            Ok(())
        })
    }
}

impl Drop for Urtwm {
    fn drop(&mut self) {
        self.detach();
    }
}

/// 周期工作的间隔
pub(crate) const CALIB_INTERVAL: Duration = Duration::from_secs(2);
