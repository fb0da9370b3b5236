//! vap 状态与 MAC 层设置：工作模式、接收过滤、EDCA、TSF 与 beacon

use alloc::vec::Vec;
use core::time::Duration;

use log::{debug, warn};

use crate::{
    cmdq::Command,
    device::{CALIB_INTERVAL, Flags, Softc},
    err::{Error, Result},
    frame::{FLAGS0_BMCAST, QSEL_BEACON, TXDW1_MACID_M, TXDW1_QSEL_M, TXDW3_DRVRATE},
    frame::{TXDW4_DATARATE_M, TxDesc},
    io::field,
    key::{self, Key, WEP_NKID},
    net::*,
    osal::Work,
    rate::{RIDX_CCK1, RIDX_OFDM6},
    reg::*,
};

/// 协议栈未下发参数前使用的 WME 参数（BE/BK/VI/VO）
pub(crate) const WME_DEFAULT: [WmeParams; 4] = [
    WmeParams {
        aifsn: 3,
        logcwmin: 4,
        logcwmax: 10,
        txop: 0,
        acm: false,
    },
    WmeParams {
        aifsn: 7,
        logcwmin: 4,
        logcwmax: 10,
        txop: 0,
        acm: false,
    },
    WmeParams {
        aifsn: 2,
        logcwmin: 3,
        logcwmax: 4,
        txop: 94,
        acm: false,
    },
    WmeParams {
        aifsn: 2,
        logcwmin: 2,
        logcwmax: 3,
        txop: 47,
        acm: false,
    },
];

/// 各访问类别的 EDCA 参数寄存器
const WME_REG: [u16; 4] = [EDCA_BE_PARAM, EDCA_BK_PARAM, EDCA_VI_PARAM, EDCA_VO_PARAM];

const DUR_SIFS: u8 = 10;
const DUR_OFDM_SIFS: u8 = 16;

/// 允许接收的管理帧（RXFLTMAP0）
const RXFLTMAP_MGT_DEFAULT: u16 = 0x7f3f;

const SUBTYPE_ASSOC_REQ: u8 = 0x00;
const SUBTYPE_ASSOC_RESP: u8 = 0x10;
const SUBTYPE_REASSOC_REQ: u8 = 0x20;
const SUBTYPE_REASSOC_RESP: u8 = 0x30;
const SUBTYPE_PROBE_REQ: u8 = 0x40;

/// IBSS 下两次 TSF 同步的间隔
const TSF_SYNC_INTERVAL: Duration = Duration::from_secs(60);

/// 唯一的虚拟接口
pub(crate) struct Vap {
    pub opmode: OpMode,
    pub myaddr: MacAddr,
    pub state: State,
    pub bss: Option<Bss>,
    /// 静态密钥，设备启动后重新写入
    pub keys: [Option<Key>; WEP_NKID as usize],
    pub beacon: Option<Vec<u8>>,
    pub bcn_desc: TxDesc,
    /// 省电
    pub pmgt: bool,
}

impl Vap {
    pub fn new(opmode: OpMode, myaddr: MacAddr) -> Self {
        let mut bcn_desc = TxDesc::new();
        bcn_desc.flags0 |= FLAGS0_BMCAST;
        bcn_desc.txdw3 = TXDW3_DRVRATE;
        // QSEL_BEACON 隐含硬件序列号
        TxDesc::set(&mut bcn_desc.txdw1, TXDW1_QSEL_M, QSEL_BEACON);
        TxDesc::set(&mut bcn_desc.txdw1, TXDW1_MACID_M, MACID_BC as u32);
        Self {
            opmode,
            myaddr,
            state: State::Init,
            bss: None,
            keys: [None; WEP_NKID as usize],
            beacon: None,
            bcn_desc,
            pmgt: false,
        }
    }

    fn sends_beacons(&self) -> bool {
        matches!(self.opmode, OpMode::HostAp | OpMode::Ibss)
    }
}

/// 组播地址在 64 位哈希过滤表中的位置
pub fn multi_pos(maddr: &MacAddr) -> u8 {
    const MASK: u64 = 0x0000_4d10_1df4_81b4;
    let mut pos: u8 = 0x27;
    for (i, &b) in maddr.iter().enumerate() {
        let start = if i == 0 { 1 } else { 0 };
        for j in start..8 {
            if (b >> j) & 1 != 0 {
                pos ^= (MASK >> (i * 8 + j - 1)) as u8;
            }
        }
    }
    pos & 0x3f
}

/// 组播过滤表（MAR 两个 32 位字）
pub fn multi_filter(addrs: &[MacAddr], allmulti: bool) -> [u32; 2] {
    if allmulti {
        return [!0; 2];
    }
    let mut mfilt = [0u32; 2];
    for a in addrs {
        let pos = multi_pos(a) as usize;
        mfilt[pos / 32] |= 1 << (pos % 32);
    }
    mfilt
}

impl Softc {
    fn opmode(&self) -> OpMode {
        self.vap.as_ref().map_or(self.config.opmode, |v| v.opmode)
    }

    pub(crate) fn is_running(&self) -> bool {
        self.flags.contains(Flags::RUNNING)
    }

    pub(crate) fn require_running(&self) -> Result {
        if self.is_running() {
            Ok(())
        } else {
            Err(Error::NetDown)
        }
    }

    pub(crate) fn vap_create(&mut self, opmode: OpMode, myaddr: Option<MacAddr>) -> Result {
        if self.vap.is_some() {
            return Err(Error::InvalidArgument);
        }
        let addr = myaddr.unwrap_or(self.macaddr);
        debug!("vap created: {opmode:?} {addr:02x?}");
        self.vap = Some(Vap::new(opmode, addr));
        Ok(())
    }

    /// 删除 vap，取消所有经由它的发送
    pub(crate) fn vap_delete(&mut self) {
        if self.vap.is_none() {
            return;
        }
        if let Err(e) = self.newstate(State::Init, None) {
            warn!("vap delete: {e}");
        }
        let kernel = self.io.kernel().clone();
        if self.opmode() == OpMode::Ibss {
            kernel.cancel(Work::TsfSync);
        }
        if let Some(pool) = self.tx_pool.as_mut() {
            let mut refs = pool.flush_pending(|s| s.node.is_some());
            refs.extend(pool.clear_refs(|s| s.node.is_some()));
            self.complete_refs(refs, false);
        }
        self.vap = None;
    }

    pub(crate) fn set_mode(&self, mode: u8) -> Result {
        self.io.setbits8(MSR, MSR_MASK, mode)
    }

    pub(crate) fn set_rx_bssid_all(&self, enable: bool) -> Result {
        if enable {
            self.io.setbits32(RCR, RCR_CBSSID_BCN, 0)
        } else {
            self.io.setbits32(RCR, 0, RCR_CBSSID_BCN)
        }
    }

    pub(crate) fn set_multi(&self) -> Result {
        let mfilt = multi_filter(&self.mcast, self.allmulti);
        self.io.write32(MAR, mfilt[0])?;
        self.io.write32(MAR + 4, mfilt[1])?;
        debug!("MC filter {:08x}:{:08x}", mfilt[0], mfilt[1]);
        Ok(())
    }

    pub(crate) fn set_promisc(&self) -> Result {
        let Some(vap) = self.vap.as_ref() else {
            return Ok(());
        };
        if vap.opmode == OpMode::Monitor {
            return Ok(());
        }
        let mask1 = RCR_ACF | RCR_ADF | RCR_AMF | RCR_AAP;
        let mut mask2 = RCR_APM;
        if vap.state == State::Run {
            match vap.opmode {
                OpMode::Sta => mask2 |= RCR_CBSSID_BCN | RCR_CBSSID_DATA,
                OpMode::Ibss => mask2 |= RCR_CBSSID_DATA,
                _ => {}
            }
        }
        if self.promisc {
            self.io.setbits32(RCR, mask2, mask1)
        } else {
            self.io.setbits32(RCR, mask1, mask2)
        }
    }

    pub(crate) fn rxfilter_init(&self) -> Result {
        self.set_multi()?;

        let mut filter = RXFLTMAP_MGT_DEFAULT;
        let opmode = self.opmode();
        match opmode {
            OpMode::Sta => {
                filter &= !(rxfltmap_subtype(SUBTYPE_ASSOC_REQ)
                    | rxfltmap_subtype(SUBTYPE_REASSOC_REQ)
                    | rxfltmap_subtype(SUBTYPE_PROBE_REQ));
            }
            OpMode::HostAp => {
                filter &= !(rxfltmap_subtype(SUBTYPE_ASSOC_RESP)
                    | rxfltmap_subtype(SUBTYPE_REASSOC_RESP));
            }
            OpMode::Ibss | OpMode::Monitor => {}
        }
        self.io.write16(RXFLTMAP0, filter)?;
        // 控制帧与数据帧一律拒绝，进入 RUN 后再放开数据帧
        self.io.write16(RXFLTMAP1, 0)?;
        self.io.write16(RXFLTMAP2, 0)?;

        let mut rcr = RCR_AM
            | RCR_AB
            | RCR_APM
            | RCR_HTC_LOC_CTRL
            | RCR_APP_PHYSTS
            | RCR_APP_ICV
            | RCR_APP_MIC
            | RCR_DIS_CHK_14
            | RCR_VHT_ACK;
        if self.flags.intersects(Flags::RXCKSUM_EN | Flags::RXCKSUM6_EN) {
            rcr |= RCR_TCP_OFFLD_EN;
        }
        if opmode == OpMode::Monitor {
            rcr |= RCR_ACF | RCR_ADF | RCR_AMF | RCR_AAP;
        }
        self.io.write32(RCR, rcr)?;

        if self.promisc {
            self.set_promisc()?;
        }
        Ok(())
    }

    pub(crate) fn edca_init(&self) -> Result {
        let io = &self.io;
        for reg in [SPEC_SIFS, MAC_SPEC_SIFS, SIFS_CCK, SIFS_OFDM] {
            io.write16(reg, 0x100a)?;
        }
        io.write32(EDCA_BE_PARAM, 0x005e_a42b)?;
        io.write32(EDCA_BK_PARAM, 0x0000_a44f)?;
        io.write32(EDCA_VI_PARAM, 0x005e_a324)?;
        io.write32(EDCA_VO_PARAM, 0x002f_a226)?;
        // 80 MHz 时钟
        io.write8(USTIME_TSF, 0x50)?;
        io.write8(USTIME_EDCA, 0x50)
    }

    fn aifs(&self, ac: usize, slottime: u8) -> u8 {
        let sifs = if self.curchan.is_5ghz() {
            DUR_OFDM_SIFS
        } else {
            DUR_SIFS
        };
        self.wme[ac]
            .aifsn
            .wrapping_mul(slottime)
            .wrapping_add(sifs)
    }

    pub(crate) fn wme_update(&mut self, params: [WmeParams; 4]) -> Result {
        self.wme = params;
        if !self.is_running() {
            return Ok(());
        }
        let mut acm = 0u8;
        for (ac, p) in params.iter().enumerate() {
            let aifs = self.aifs(ac, self.slottime);
            self.io.write32(
                WME_REG[ac],
                field(EDCA_PARAM_TXOP_M, p.txop as u32)
                    | field(EDCA_PARAM_ECWMIN_M, p.logcwmin as u32)
                    | field(EDCA_PARAM_ECWMAX_M, p.logcwmax as u32)
                    | field(EDCA_PARAM_AIFS_M, aifs as u32),
            )?;
            if ac != Ac::Be as usize && p.acm {
                acm |= 1 << ac;
            }
        }
        if acm != 0 {
            acm |= ACMHWCTRL_EN;
        }
        self.io.setbits8(ACMHWCTRL, ACMHWCTRL_ACM_MASK, acm)
    }

    /// 命令队列中执行：写入时隙长度并按新时隙刷新 AIFS
    pub(crate) fn update_slot_cb(&mut self, slottime: u8) {
        debug!("setting slot time to {slottime}us");
        self.slottime = slottime;
        let res = self.io.write8(SLOT, slottime).and_then(|_| {
            (0..WME_REG.len()).try_for_each(|ac| {
                self.io.write8(WME_REG[ac], self.aifs(ac, slottime))
            })
        });
        if let Err(e) = res {
            warn!("cannot update slot time: {e}");
        }
    }

    pub(crate) fn update_promisc(&mut self, promisc: bool) -> Result {
        self.promisc = promisc;
        if self.is_running() {
            self.set_promisc()?;
        }
        Ok(())
    }

    pub(crate) fn update_mcast(&mut self, addrs: &[MacAddr], allmulti: bool) -> Result {
        self.mcast.clear();
        self.mcast.extend_from_slice(addrs);
        self.allmulti = allmulti;
        if self.is_running() {
            self.set_multi()?;
        }
        Ok(())
    }

    pub(crate) fn set_rx_checksum(&mut self, v4: bool, v6: bool) -> Result {
        let old = self.flags;
        self.flags.set(Flags::RXCKSUM_EN, v4);
        self.flags.set(Flags::RXCKSUM6_EN, v6);
        if old == self.flags || !self.is_running() {
            return Ok(());
        }
        if v4 || v6 {
            self.io.setbits32(RCR, 0, RCR_TCP_OFFLD_EN)
        } else {
            self.io.setbits32(RCR, RCR_TCP_OFFLD_EN, 0)
        }
    }

    pub(crate) fn set_powersave(&mut self, enable: bool) -> Result {
        let running = self.is_running();
        let Some(vap) = self.vap.as_mut() else {
            return Err(Error::InvalidArgument);
        };
        if vap.opmode != OpMode::Sta {
            return Err(Error::InvalidArgument);
        }
        vap.pmgt = enable;
        if running {
            self.set_pwrmode(true)?;
        }
        Ok(())
    }

    pub(crate) fn scan_start(&mut self) -> Result {
        self.require_running()?;
        // 接收任意 BSSID 的 beacon 与 probe response
        if !matches!(self.opmode(), OpMode::Ibss | OpMode::HostAp) {
            self.set_rx_bssid_all(true)?;
        }
        Ok(())
    }

    pub(crate) fn scan_end(&mut self) -> Result {
        self.require_running()?;
        if !self.promisc && !matches!(self.opmode(), OpMode::Ibss | OpMode::HostAp) {
            self.set_rx_bssid_all(false)?;
        }
        let run = self.vap.as_ref().is_some_and(|v| v.state == State::Run);
        self.chip.set_led(&self.io, run)
    }

    /// 高 32 位与低 32 位分两次读取
    pub(crate) fn get_tsf(&self) -> u64 {
        let hi = self.io.read32(tsftr(0) + 4) as u64;
        let lo = self.io.read32(tsftr(0)) as u64;
        (hi << 32) + lo
    }

    fn tsf_sync_enable(&mut self, opmode: OpMode) -> Result {
        self.io.write8(DUAL_TSF_RST, DUAL_TSF_RST0)?;
        match opmode {
            OpMode::Sta => self.io.setbits8(BCN_CTRL, BCN_CTRL_DIS_TSF_UDT0, 0),
            OpMode::Ibss => {
                self.io.kernel().schedule(Work::TsfSync, Duration::ZERO);
                self.io.setbits8(BCN_CTRL, 0, BCN_CTRL_EN_BCN)
            }
            OpMode::HostAp => self.io.setbits8(BCN_CTRL, 0, BCN_CTRL_EN_BCN),
            OpMode::Monitor => {
                warn!("undefined opmode {opmode:?}");
                Ok(())
            }
        }
    }

    /// IBSS 下周期性地只接收本 BSSID 的 beacon 并同步 TSF
    ///
    /// 未设置 BSSID 过滤时任何 beacon 都可能改写 TSF。
    pub(crate) fn tsf_sync_adhoc(&mut self) {
        let intval = match self.vap.as_ref() {
            Some(vap) if vap.opmode == OpMode::Ibss && vap.state == State::Run => {
                vap.bss.map_or(100, |b| b.intval)
            }
            _ => return,
        };
        let res = (|| -> Result {
            self.set_rx_bssid_all(false)?;
            self.io.setbits8(BCN_CTRL, BCN_CTRL_DIS_TSF_UDT0, 0)?;
            self.io
                .kernel()
                .delay(Duration::from_millis(intval as u64 * 5));
            self.io.setbits8(BCN_CTRL, 0, BCN_CTRL_DIS_TSF_UDT0)?;
            self.set_rx_bssid_all(true)
        })();
        if let Err(e) = res {
            warn!("TSF sync failed: {e}");
        }
        self.io.kernel().schedule(Work::TsfSync, TSF_SYNC_INTERVAL);
    }

    /// 把 vap 的 beacon 交给芯片，之后由芯片按 beacon 间隔重复发送
    fn tx_beacon(&mut self) -> Result {
        let Some(vap) = self.vap.as_ref() else {
            return Err(Error::InvalidArgument);
        };
        let Some(beacon) = vap.beacon.clone() else {
            return Err(Error::InvalidArgument);
        };
        let desc = vap.bcn_desc;
        self.check_txlen(beacon.len())?;
        let idx = self.getbuf().ok_or(Error::OutOfMemory)?;
        self.tx_start(idx, desc, beacon, Ac::Vo, None);
        Ok(())
    }

    fn setup_beacon(&mut self, chan: Channel) -> Result {
        let Some(beacon) = self.net.beacon_alloc() else {
            warn!("could not allocate beacon frame");
            return Err(Error::OutOfMemory);
        };
        let Some(vap) = self.vap.as_mut() else {
            return Err(Error::InvalidArgument);
        };
        vap.beacon = Some(beacon);
        let ridx = if chan.is_5ghz() { RIDX_OFDM6 } else { RIDX_CCK1 };
        vap.bcn_desc.txdw4 = field(TXDW4_DATARATE_M, ridx as u32);

        self.tx_beacon()?;
        // beacon 队列偶尔卡住，再推一次
        self.tx_beacon()
    }

    pub(crate) fn update_beacon(&mut self) -> Result {
        self.require_running()?;
        match self.vap.as_ref() {
            Some(vap) if vap.sends_beacons() => {}
            _ => return Err(Error::InvalidArgument),
        }
        let Some(beacon) = self.net.beacon_alloc() else {
            warn!("could not allocate beacon frame");
            return Err(Error::OutOfMemory);
        };
        if let Some(vap) = self.vap.as_mut() {
            vap.beacon = Some(beacon);
        }
        self.tx_beacon()
    }

    /// 离开 RUN：停掉周期任务、关闭 beacon 与数据帧接收、恢复 EDCA
    fn leave_run(&mut self, opmode: OpMode) -> Result {
        let kernel = self.io.kernel().clone();
        kernel.cancel(Work::Calibration);
        if opmode == OpMode::Ibss {
            kernel.cancel(Work::TsfSync);
        }
        kernel.cancel(Work::PowerModeInit);
        let _ = self.set_pwrmode(false);

        let io = &self.io;
        self.chip.set_led(io, false)?;
        self.set_mode(MSR_NOLINK)?;
        io.write16(RXFLTMAP2, 0)?;
        io.setbits8(BCN_CTRL, BCN_CTRL_EN_BCN, BCN_CTRL_DIS_TSF_UDT0)?;
        io.write8(DUAL_TSF_RST, DUAL_TSF_RST0)?;
        io.write32(EDCA_VO_PARAM, 0x002f_3217)?;
        io.write32(EDCA_VI_PARAM, 0x005e_4317)?;
        io.write32(EDCA_BE_PARAM, 0x0010_5320)?;
        io.write32(EDCA_BK_PARAM, 0x0000_a444)
    }

    fn enter_run(&mut self, opmode: OpMode, bss: Option<Bss>) -> Result {
        if opmode == OpMode::Monitor {
            return self.chip.set_led(&self.io, true);
        }
        let Some(bss) = bss else {
            warn!("could not move to RUN state");
            return Err(Error::InvalidArgument);
        };
        let mode = match opmode {
            OpMode::Sta => MSR_INFRA,
            OpMode::Ibss => MSR_ADHOC,
            _ => MSR_AP,
        };
        if let Some(vap) = self.vap.as_mut() {
            vap.bss = Some(bss);
        }

        let io = &self.io;
        self.set_mode(mode)?;
        io.write16(BCN_PSR_RPT, 0xc000 | (bss.associd & 0x3fff))?;
        let b = &bss.bssid;
        io.write32(BSSID, u32::from_le_bytes([b[0], b[1], b[2], b[3]]))?;
        io.write16(BSSID + 4, u16::from_le_bytes([b[4], b[5]]))?;
        // 开始接收数据帧并放开 AC 队列
        io.write16(RXFLTMAP2, 0xffff)?;
        io.write8(TXPAUSE, 0)?;
        io.write16(BCN_INTERVAL, bss.intval)?;

        if !self.promisc {
            let mut rcr = io.read32(RCR);
            if opmode != OpMode::HostAp {
                rcr |= RCR_CBSSID_DATA;
                if opmode != OpMode::Ibss {
                    rcr |= RCR_CBSSID_BCN;
                }
            }
            io.write32(RCR, rcr)?;
        }

        if opmode == OpMode::Sta {
            if let Err(e) = self.push_nulldata() {
                debug!("null data frame was not uploaded: {e}");
            }
        }
        if matches!(opmode, OpMode::HostAp | OpMode::Ibss) {
            self.setup_beacon(bss.chan)
                .inspect_err(|e| warn!("unable to push beacon into the chip: {e}"))?;
        }
        self.tsf_sync_enable(opmode)?;
        self.chip.set_led(&self.io, true)?;

        // 重新开始温度校准
        self.flags.remove(Flags::TEMP_MEASURED);
        self.thcal_temp = self.rom.thermal_meter;
        self.io.kernel().schedule(Work::Calibration, CALIB_INTERVAL);
        Ok(())
    }

    /// 802.11 状态切换，成功后才更新 vap 状态
    pub(crate) fn newstate(&mut self, nstate: State, bss: Option<Bss>) -> Result {
        let Some(vap) = self.vap.as_ref() else {
            return Err(Error::InvalidArgument);
        };
        let (ostate, opmode) = (vap.state, vap.opmode);
        debug!("{ostate:?} -> {nstate:?}");

        if self.is_running() {
            if ostate == State::Run {
                if let Err(e) = self.leave_run(opmode) {
                    warn!("leaving RUN state: {e}");
                }
            }
            match nstate {
                State::Scan => self.io.setbits8(TXPAUSE, 0, TX_QUEUE_AC)?,
                State::Run => self.enter_run(opmode, bss)?,
                _ => {}
            }
        } else if nstate != State::Init {
            return Err(Error::NetDown);
        }

        if let Some(vap) = self.vap.as_mut() {
            vap.state = nstate;
            if nstate != State::Run {
                vap.bss = None;
            }
        }
        Ok(())
    }

    /// 分配 CAM 槽位：静态密钥使用其索引，其余从 4 开始分配
    pub(crate) fn key_alloc(&mut self, static_ix: Option<u8>) -> Result<u8> {
        match static_ix {
            Some(ix) if ix < WEP_NKID => Ok(ix),
            Some(_) => Err(Error::InvalidArgument),
            None => key::alloc_slot(&mut self.keys_bmap).ok_or(Error::NoBufs),
        }
    }

    /// 静态密钥记录在 vap 中，设备未运行时等启动后再写入
    pub(crate) fn process_key(&mut self, k: Key, set: bool) -> Result {
        if k.is_static() {
            let Some(vap) = self.vap.as_mut() else {
                return Err(Error::InvalidArgument);
            };
            vap.keys[k.keyix as usize] = set.then_some(k);
            if !self.is_running() {
                return Ok(());
            }
        }
        let cmd = if set {
            Command::KeySet(k)
        } else {
            Command::KeyDel(k)
        };
        self.cmdq.enqueue(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::tests::TestDev;

    #[test]
    fn multicast_hash() {
        // 01:00:5e:00:00:01
        let pos = multi_pos(&[0x01, 0x00, 0x5e, 0x00, 0x00, 0x01]);
        assert!(pos < 64);
        let f = multi_filter(&[[0x01, 0x00, 0x5e, 0x00, 0x00, 0x01]], false);
        assert_eq!(f[pos as usize / 32], 1 << (pos % 32));
        assert_eq!(f[1 - pos as usize / 32], 0);
        assert_eq!(multi_filter(&[], true), [!0, !0]);
        assert_eq!(multi_filter(&[], false), [0, 0]);
    }

    #[test]
    fn multicast_hash_ignores_group_bit() {
        // 第一个字节的最低位不参与计算
        assert_eq!(
            multi_pos(&[0x01, 0x00, 0x5e, 0x7f, 0x00, 0xfb]),
            multi_pos(&[0x00, 0x00, 0x5e, 0x7f, 0x00, 0xfb])
        );
    }

    #[test]
    fn beacon_descriptor_template() {
        let vap = Vap::new(OpMode::HostAp, [2; 6]);
        let d = vap.bcn_desc;
        assert_eq!(d.flags0 & FLAGS0_BMCAST, FLAGS0_BMCAST);
        assert_eq!(d.txdw1 & TXDW1_QSEL_M, QSEL_BEACON << 8);
        assert_eq!(d.txdw1 & TXDW1_MACID_M, MACID_BC as u32);
        assert!(vap.sends_beacons());
    }

    #[test]
    fn rxfilter_by_opmode() {
        let t = TestDev::running(OpMode::Sta);
        t.sc.lock().rxfilter_init().unwrap();
        let map0 = t.regs.get32(RXFLTMAP0) as u16;
        assert_eq!(map0 & rxfltmap_subtype(SUBTYPE_PROBE_REQ), 0);
        assert_ne!(map0 & rxfltmap_subtype(SUBTYPE_ASSOC_RESP), 0);
        let rcr = t.regs.get32(RCR);
        assert_ne!(rcr & RCR_TCP_OFFLD_EN, 0);
        assert_eq!(rcr & RCR_AAP, 0);

        let t = TestDev::running(OpMode::Monitor);
        t.sc.lock().rxfilter_init().unwrap();
        assert_ne!(t.regs.get32(RCR) & RCR_AAP, 0);
    }

    #[test]
    fn checksum_offload_toggle() {
        let t = TestDev::running(OpMode::Sta);
        let mut sc = t.sc.lock();
        sc.rxfilter_init().unwrap();
        sc.set_rx_checksum(false, false).unwrap();
        assert_eq!(t.regs.get32(RCR) & RCR_TCP_OFFLD_EN, 0);
        sc.set_rx_checksum(false, true).unwrap();
        assert_ne!(t.regs.get32(RCR) & RCR_TCP_OFFLD_EN, 0);
        assert!(!sc.flags.contains(Flags::RXCKSUM_EN));
        assert!(sc.flags.contains(Flags::RXCKSUM6_EN));
    }

    #[test]
    fn wme_update_writes_edca() {
        let t = TestDev::running(OpMode::Sta);
        let mut sc = t.sc.lock();
        let mut params = WME_DEFAULT;
        params[Ac::Vi as usize].acm = true;
        sc.wme_update(params).unwrap();
        // BE: aifs = 3 * 9 + 10
        let be = t.regs.get32(EDCA_BE_PARAM);
        assert_eq!(be & EDCA_PARAM_AIFS_M, 37);
        assert_eq!((be & EDCA_PARAM_ECWMAX_M) >> 12, 10);
        let vo = t.regs.get32(EDCA_VO_PARAM);
        assert_eq!(vo >> 16, 47);
        assert_eq!(
            t.regs.get32(ACMHWCTRL) as u8 & ACMHWCTRL_ACM_MASK,
            ACMHWCTRL_EN | 1 << Ac::Vi as u8
        );
    }

    #[test]
    fn slot_time_refreshes_aifs() {
        let t = TestDev::running(OpMode::Sta);
        let mut sc = t.sc.lock();
        sc.update_slot_cb(20);
        assert_eq!(t.regs.get32(SLOT) as u8, 20);
        assert_eq!(t.regs.get32(EDCA_BK_PARAM) as u8, 7 * 20 + 10);
    }

    #[test]
    fn run_state_sets_bssid_and_mode() {
        let t = TestDev::running(OpMode::Sta);
        let mut sc = t.sc.lock();
        let bss = Bss {
            bssid: [0x00, 0x11, 0x22, 0x33, 0x44, 0x55],
            addr: [0x00, 0x11, 0x22, 0x33, 0x44, 0x55],
            associd: 0xc005,
            intval: 100,
            chan: Channel::new(6, ChanKind::G),
        };
        sc.newstate(State::Run, Some(bss)).unwrap();
        assert_eq!(t.regs.get32(MSR) as u8 & MSR_MASK, MSR_INFRA);
        assert_eq!(t.regs.get32(BSSID), 0x3322_1100);
        assert_eq!(t.regs.get32(BSSID + 4) as u16, 0x5544);
        assert_eq!(t.regs.get32(BCN_PSR_RPT) as u16, 0xc005);
        assert_eq!(t.regs.get32(RXFLTMAP2) as u16, 0xffff);
        let rcr = t.regs.get32(RCR);
        assert_ne!(rcr & RCR_CBSSID_BCN, 0);
        assert!(t.kernel.scheduled(Work::Calibration));

        sc.newstate(State::Scan, None).unwrap();
        assert_eq!(t.regs.get32(MSR) as u8 & MSR_MASK, MSR_NOLINK);
        assert_eq!(t.regs.get32(RXFLTMAP2) as u16, 0);
        assert_eq!(t.regs.get32(TXPAUSE) as u8, TX_QUEUE_AC);
        assert!(!t.kernel.scheduled(Work::Calibration));
        assert!(sc.vap.as_ref().is_some_and(|v| v.bss.is_none()));
    }

    #[test]
    fn run_without_bss_fails() {
        let t = TestDev::running(OpMode::HostAp);
        let mut sc = t.sc.lock();
        assert_eq!(sc.newstate(State::Run, None), Err(Error::InvalidArgument));
        assert_eq!(sc.vap.as_ref().map(|v| v.state), Some(State::Init));
    }

    #[test]
    fn static_keys_wait_for_start() {
        let t = TestDev::stopped(OpMode::Sta);
        let mut sc = t.sc.lock();
        let k = Key::new(1, key::Cipher::Wep, &[1, 2, 3, 4, 5], BROADCAST_ADDR);
        sc.process_key(k, true).unwrap();
        assert_eq!(sc.cmdq.len(), 0);
        assert_eq!(sc.vap.as_ref().and_then(|v| v.keys[1]), Some(k));

        let ix = sc.key_alloc(None).unwrap();
        assert_eq!(ix, WEP_NKID);
        let pk = Key::new(ix, key::Cipher::AesCcm, &[7; 16], [2; 6]);
        sc.process_key(pk, true).unwrap();
        assert_eq!(sc.cmdq.pop(), Some(Command::KeySet(pk)));
        assert_eq!(sc.key_alloc(Some(9)), Err(Error::InvalidArgument));
    }
}
