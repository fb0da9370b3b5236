//! 与上层 802.11 协议栈之间的接口
//!
//! 协议栈负责关联、扫描、速率控制算法与加解密，驱动只把它的决定写进
//! 硬件。帧在两个方向上都以完整的 802.11 帧（不含 FCS）传递。

use alloc::vec::Vec;

use bitflags::bitflags;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::key::Cipher;

/// 协议栈侧的节点句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

pub type MacAddr = [u8; 6];

pub const BROADCAST_ADDR: MacAddr = [0xff; 6];

pub fn is_multicast(addr: &MacAddr) -> bool {
    addr[0] & 0x01 != 0
}

/// WME 访问类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Ac {
    Be = 0,
    Bk = 1,
    Vi = 2,
    Vo = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    Sta,
    Ibss,
    HostAp,
    Monitor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum State {
    Init,
    Scan,
    Auth,
    Assoc,
    Run,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum PhyMode {
    B = 0,
    G = 1,
    A = 2,
    NG = 3,
    NA = 4,
}

impl PhyMode {
    pub const COUNT: usize = 5;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanKind {
    /// 仅 CCK
    B,
    G,
    A,
    Ht20,
    /// HT40，扩展信道在上
    Ht40Above,
    /// HT40，扩展信道在下
    Ht40Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    pub num: u8,
    pub kind: ChanKind,
}

impl Channel {
    pub const fn new(num: u8, kind: ChanKind) -> Self {
        Self { num, kind }
    }

    pub fn is_5ghz(&self) -> bool {
        self.num > 14
    }

    pub fn is_2ghz(&self) -> bool {
        !self.is_5ghz()
    }

    pub fn is_ht(&self) -> bool {
        matches!(
            self.kind,
            ChanKind::Ht20 | ChanKind::Ht40Above | ChanKind::Ht40Below
        )
    }

    pub fn is_ht40(&self) -> bool {
        matches!(self.kind, ChanKind::Ht40Above | ChanKind::Ht40Below)
    }

    /// 中心频率，MHz
    pub fn freq(&self) -> u16 {
        match self.num {
            14 => 2484,
            n if n < 14 => 2407 + 5 * n as u16,
            n => 5000 + 5 * n as u16,
        }
    }

    pub fn mode(&self) -> PhyMode {
        match self.kind {
            ChanKind::B => PhyMode::B,
            ChanKind::G => PhyMode::G,
            ChanKind::A => PhyMode::A,
            _ if self.is_5ghz() => PhyMode::NA,
            _ => PhyMode::NG,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protection {
    None,
    CtsOnly,
    RtsCts,
}

/// 每种 PHY 模式的发送参数，速率单位为 500kbps，MCS 带 [`RATE_MCS`] 位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxParams {
    pub mgmt_rate: u8,
    pub mcast_rate: u8,
    /// 固定单播速率
    pub ucast_rate: Option<u8>,
    pub max_retry: u8,
}

pub const RATE_MCS: u8 = 0x80;

impl TxParams {
    pub fn for_mode(mode: PhyMode) -> Self {
        let rate = match mode {
            PhyMode::A | PhyMode::NA => 12,
            _ => 2,
        };
        Self {
            mgmt_rate: rate,
            mcast_rate: rate,
            ucast_rate: None,
            max_retry: 6,
        }
    }
}

/// 关联节点的能力
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeInfo {
    pub addr: MacAddr,
    pub ht: bool,
    pub sgi20: bool,
    pub sgi40: bool,
}

/// 进入 RUN 状态时的 BSS 信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bss {
    pub bssid: MacAddr,
    /// BSS 节点地址
    pub addr: MacAddr,
    pub associd: u16,
    /// beacon 间隔，TU
    pub intval: u16,
    pub chan: Channel,
}

/// WME 参数，`txop` 单位 32us
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WmeParams {
    pub aifsn: u8,
    pub logcwmin: u8,
    pub logcwmax: u8,
    pub txop: u16,
    /// 需要准入控制
    pub acm: bool,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TxFlags: u8 {
        /// A-MPDU 成员
        const AMPDU = 0x01;
        /// EAPOL 帧，使用管理帧速率
        const EAPOL = 0x02;
    }
}

/// 待发送的数据帧
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxFrame {
    pub node: NodeId,
    pub data: Vec<u8>,
    pub ac: Ac,
    pub flags: TxFlags,
    /// 协议栈分配的序列号
    pub seqno: u16,
    /// 由硬件加密时使用的算法；帧已由协议栈封装好加密头
    pub hw_cipher: Option<Cipher>,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RawFlags: u8 {
        const NOACK = 0x01;
        const RTS = 0x02;
        const CTS = 0x04;
    }
}

/// 原始帧发送参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawParams {
    pub rate0: u8,
    pub try0: u8,
    pub flags: RawFlags,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RxFlags: u8 {
        /// 已由硬件解密
        const DECRYPTED = 0x01;
        /// IP/TCP/UDP 校验和已由硬件验证
        const CSUM_VALID = 0x02;
        const AMPDU = 0x04;
        const SHORT_GI = 0x08;
    }
}

/// 收到的帧
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RxFrame {
    pub data: Vec<u8>,
    pub flags: RxFlags,
    /// 500kbps 单位，MCS 带 [`RATE_MCS`] 位
    pub rate: u8,
    pub tsf_low: u32,
}

/// 上层协议栈
///
/// `input`、`tx_complete`、`ratectl_tx_complete` 在驱动锁释放后调用，
/// 实现可以在其中重新进入驱动（例如立即发送下一帧）。
/// `ratectl_rate` 与 `beacon_alloc` 在持锁时调用，不得重入驱动。
pub trait NetStack: Send + Sync {
    /// `node` 为 `None` 时帧应交给所有 vap；`rssi` 为相对底噪 `nf` 的值
    fn input(&self, node: Option<NodeId>, frame: RxFrame, rssi: i8, nf: i8);

    fn tx_complete(&self, node: NodeId, frame: Vec<u8>, ok: bool);

    /// 固件报告的单帧发送结果
    fn ratectl_tx_complete(&self, node: NodeId, success: bool, retries: u8);

    /// 速率控制为节点选择的速率
    fn ratectl_rate(&self, node: NodeId) -> u8;

    /// 当前 BSS 的 beacon 帧
    fn beacon_alloc(&self) -> Option<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_modes() {
        assert_eq!(Channel::new(6, ChanKind::Ht20).mode(), PhyMode::NG);
        assert_eq!(Channel::new(36, ChanKind::Ht40Above).mode(), PhyMode::NA);
        assert_eq!(Channel::new(1, ChanKind::B).mode(), PhyMode::B);
        assert!(Channel::new(149, ChanKind::A).is_5ghz());
        assert!(!Channel::new(149, ChanKind::A).is_ht());
    }

    #[test]
    fn channel_freq() {
        assert_eq!(Channel::new(1, ChanKind::G).freq(), 2412);
        assert_eq!(Channel::new(14, ChanKind::B).freq(), 2484);
        assert_eq!(Channel::new(36, ChanKind::A).freq(), 5180);
    }

    #[test]
    fn group_address() {
        assert!(is_multicast(&BROADCAST_ADDR));
        assert!(is_multicast(&[0x01, 0x00, 0x5e, 0, 0, 1]));
        assert!(!is_multicast(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]));
    }
}
