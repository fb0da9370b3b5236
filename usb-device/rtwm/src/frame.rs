//! 硬件 TX 描述符与 RX 状态记录
//!
//! 两者都是固定布局的小端位域结构，偏移与位宽由硬件决定。

use num_enum::TryFromPrimitive;

use crate::io::{field, get_field};

/// TX 描述符长度
pub const TX_DESC_LEN: usize = 40;

// flags0
pub const FLAGS0_BMCAST: u8 = 0x01;
pub const FLAGS0_LSG: u8 = 0x04;
pub const FLAGS0_FSG: u8 = 0x08;
pub const FLAGS0_OWN: u8 = 0x80;

// txdw1
pub const TXDW1_MACID_M: u32 = 0x0000_003f;
pub const TXDW1_QSEL_M: u32 = 0x0000_1f00;
pub const TXDW1_RAID_M: u32 = 0x001f_0000;
pub const TXDW1_CIPHER_M: u32 = 0x00c0_0000;
pub const TXDW1_PKTOFF_M: u32 = 0x1f00_0000;

pub const QSEL_BEACON: u32 = 0x10;
pub const QSEL_MGNT: u32 = 0x12;

pub const CIPHER_NONE: u32 = 0;
pub const CIPHER_RC4: u32 = 1;
pub const CIPHER_AES: u32 = 3;

// txdw2
pub const TXDW2_AGGEN: u32 = 0x0000_1000;
pub const TXDW2_AGGBK: u32 = 0x0001_0000;
pub const TXDW2_SPE_RPT: u32 = 0x0008_0000;
pub const TXDW2_AMPDU_DEN_M: u32 = 0x0070_0000;

// txdw3
pub const TXDW3_DRVRATE: u32 = 0x0000_0100;
pub const TXDW3_CTS2SELF: u32 = 0x0000_0800;
pub const TXDW3_RTSEN: u32 = 0x0000_1000;
pub const TXDW3_HWRTSEN: u32 = 0x0000_2000;
pub const TXDW3_MAX_AGG_M: u32 = 0x003e_0000;

// txdw4
pub const TXDW4_DATARATE_M: u32 = 0x0000_007f;
pub const TXDW4_DATARATE_FB_LMT_M: u32 = 0x0000_1f00;
pub const TXDW4_RTSRATE_FB_LMT_M: u32 = 0x0001_e000;
pub const TXDW4_RETRY_LMT_ENA: u32 = 0x0002_0000;
pub const TXDW4_RETRY_LMT_M: u32 = 0x00fc_0000;
pub const TXDW4_RTSRATE_M: u32 = 0x1f00_0000;

// txdw5
pub const TXDW5_SGI: u32 = 0x0000_0010;

// flags7
pub const FLAGS7_AGGNUM_M: u16 = 0xff00;

// txdw8 / txdw9
pub const TXDW8_HWSEQ_EN: u32 = 0x0000_8000;
pub const TXDW9_SEQ_M: u32 = 0x00ff_f000;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TxDesc {
    pub pktlen: u16,
    pub offset: u8,
    pub flags0: u8,
    pub txdw1: u32,
    pub txdw2: u32,
    pub txdw3: u32,
    pub txdw4: u32,
    pub txdw5: u32,
    pub txdw6: u32,
    pub txdsum: u16,
    pub flags7: u16,
    pub txdw8: u32,
    pub txdw9: u32,
}

impl TxDesc {
    /// LSG/FSG/OWN 已置位、偏移为描述符长度的空描述符
    pub fn new() -> Self {
        Self {
            offset: TX_DESC_LEN as u8,
            flags0: FLAGS0_LSG | FLAGS0_FSG | FLAGS0_OWN,
            ..Default::default()
        }
    }

    pub fn set(word: &mut u32, mask: u32, val: u32) {
        *word = (*word & !mask) | field(mask, val);
    }

    pub fn to_bytes(&self) -> [u8; TX_DESC_LEN] {
        let mut b = [0u8; TX_DESC_LEN];
        b[0..2].copy_from_slice(&self.pktlen.to_le_bytes());
        b[2] = self.offset;
        b[3] = self.flags0;
        let words = [
            self.txdw1, self.txdw2, self.txdw3, self.txdw4, self.txdw5, self.txdw6,
        ];
        for (i, w) in words.iter().enumerate() {
            b[4 + 4 * i..8 + 4 * i].copy_from_slice(&w.to_le_bytes());
        }
        b[28..30].copy_from_slice(&self.txdsum.to_le_bytes());
        b[30..32].copy_from_slice(&self.flags7.to_le_bytes());
        b[32..36].copy_from_slice(&self.txdw8.to_le_bytes());
        b[36..40].copy_from_slice(&self.txdw9.to_le_bytes());
        b
    }

    pub fn from_bytes(b: &[u8; TX_DESC_LEN]) -> Self {
        let w = |o: usize| u32::from_le_bytes([b[o], b[o + 1], b[o + 2], b[o + 3]]);
        Self {
            pktlen: u16::from_le_bytes([b[0], b[1]]),
            offset: b[2],
            flags0: b[3],
            txdw1: w(4),
            txdw2: w(8),
            txdw3: w(12),
            txdw4: w(16),
            txdw5: w(20),
            txdw6: w(24),
            txdsum: u16::from_le_bytes([b[28], b[29]]),
            flags7: u16::from_le_bytes([b[30], b[31]]),
            txdw8: w(32),
            txdw9: w(36),
        }
    }

    /// 重新计算校验和
    pub fn seal(&mut self) {
        self.txdsum = 0;
        self.txdsum = checksum(&self.to_bytes());
    }
}

/// 前 32 字节按 16 位小端字异或
pub fn checksum(desc: &[u8]) -> u16 {
    desc[..32]
        .chunks_exact(2)
        .fold(0u16, |sum, w| sum ^ u16::from_le_bytes([w[0], w[1]]))
}

/// RX 状态记录长度
pub const RX_STAT_LEN: usize = 24;

// rxdw0
pub const RXDW0_PKTLEN_M: u32 = 0x0000_3fff;
pub const RXDW0_CRCERR: u32 = 0x0000_4000;
pub const RXDW0_ICVERR: u32 = 0x0000_8000;
pub const RXDW0_INFOSZ_M: u32 = 0x000f_0000;
pub const RXDW0_CIPHER_M: u32 = 0x0070_0000;
pub const RXDW0_QOS: u32 = 0x0080_0000;
pub const RXDW0_PHYST: u32 = 0x0400_0000;

// rxdw1
pub const RXDW1_MACID_M: u32 = 0x0000_003f;
pub const RXDW1_CKSUM_ERR: u32 = 0x0010_0000;
pub const RXDW1_IPV6: u32 = 0x0020_0000;
pub const RXDW1_UDP: u32 = 0x0040_0000;
pub const RXDW1_CKSUM: u32 = 0x0080_0000;

// rxdw2
pub const RXDW2_RPT_C2H: u32 = 0x1000_0000;

// rxdw3
pub const RXDW3_RATE_M: u32 = 0x0000_003f;

// rxdw4
pub const RXDW4_SGI: u32 = 0x0000_0001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RxStat {
    pub dw: [u32; 6],
}

impl RxStat {
    pub fn parse(buf: &[u8]) -> Option<Self> {
        let b = buf.get(..RX_STAT_LEN)?;
        let mut dw = [0u32; 6];
        for (i, w) in b.chunks_exact(4).enumerate() {
            dw[i] = u32::from_le_bytes([w[0], w[1], w[2], w[3]]);
        }
        Some(Self { dw })
    }

    pub fn pktlen(&self) -> usize {
        get_field(self.dw[0], RXDW0_PKTLEN_M) as usize
    }

    /// PHY 状态等附加信息长度，字节
    pub fn infosz(&self) -> usize {
        get_field(self.dw[0], RXDW0_INFOSZ_M) as usize * 8
    }

    pub fn total_len(&self) -> usize {
        RX_STAT_LEN + self.infosz() + self.pktlen()
    }

    pub fn has_error(&self) -> bool {
        self.dw[0] & (RXDW0_CRCERR | RXDW0_ICVERR) != 0
    }

    pub fn cipher(&self) -> u32 {
        get_field(self.dw[0], RXDW0_CIPHER_M)
    }

    pub fn has_phystat(&self) -> bool {
        self.dw[0] & RXDW0_PHYST != 0
    }

    pub fn is_c2h(&self) -> bool {
        self.dw[2] & RXDW2_RPT_C2H != 0
    }

    pub fn rate(&self) -> u8 {
        get_field(self.dw[3], RXDW3_RATE_M) as u8
    }

    pub fn sgi(&self) -> bool {
        self.dw[4] & RXDW4_SGI != 0
    }

    pub fn tsf_low(&self) -> u32 {
        self.dw[5]
    }
}

/// 一个 USB 传输中依次排列的 RX 记录
///
/// 除最后一条外每条记录按 8 字节对齐。记录长度为 0 或超出剩余长度时
/// 停止遍历，残缺的尾部记录被丢弃。
pub struct Records<'a> {
    buf: &'a [u8],
}

pub fn records(buf: &[u8]) -> Records<'_> {
    Records { buf }
}

impl<'a> Iterator for Records<'a> {
    /// 状态记录与包含状态头在内的整条记录
    type Item = (RxStat, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let stat = RxStat::parse(self.buf)?;
        if stat.pktlen() == 0 {
            return None;
        }
        let totlen = stat.total_len();
        if totlen > self.buf.len() {
            return None;
        }
        let record = &self.buf[..totlen];
        let advance = if totlen < self.buf.len() {
            totlen.next_multiple_of(8).min(self.buf.len())
        } else {
            totlen
        };
        self.buf = &self.buf[advance..];
        Some((stat, record))
    }
}

/// RX PHY 状态的前 9 字节
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhyStat {
    pub gain_trsw: [u8; 2],
    pub pwdb_all: u8,
    pub cfosho: [u8; 4],
}

impl PhyStat {
    pub const LEN: usize = 9;

    pub fn parse(buf: &[u8]) -> Option<Self> {
        let b = buf.get(..Self::LEN)?;
        Some(Self {
            gain_trsw: [b[0], b[1]],
            pwdb_all: b[4],
            cfosho: [b[5], b[6], b[7], b[8]],
        })
    }

    /// OFDM/HT 帧的 RSSI：各接收链增益的平均值
    pub fn rssi_ofdm(&self, nrxchains: usize) -> i8 {
        let n = nrxchains.clamp(1, 2);
        let sum: i32 = self.gain_trsw[..n]
            .iter()
            .map(|&g| (g & 0x7f) as i32 - 110)
            .sum();
        (sum / n as i32) as i8
    }
}

/// 固件上报事件号
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum C2hId {
    Debug = 0x00,
    TxReport = 0x03,
    BtInfo = 0x09,
    RaReport = 0x0c,
    IqkFinished = 0x11,
}

pub const TXRPTB0_RETRY_OVER: u8 = 0x80;
pub const TXRPTB0_LIFE_EXPIRE: u8 = 0x40;
pub const TXRPTB2_RETRY_CNT_M: u8 = 0x3f;

/// 单帧发送报告
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxReport {
    pub txrptb0: u8,
    pub macid: u8,
    pub retries: u8,
    pub queue_time: u16,
    pub final_rate: u8,
}

impl TxReport {
    pub const LEN: usize = 8;

    /// 长度必须恰好为 [`TxReport::LEN`]
    pub fn parse(buf: &[u8]) -> Option<Self> {
        if buf.len() != Self::LEN {
            return None;
        }
        Some(Self {
            txrptb0: buf[0],
            macid: buf[1],
            retries: buf[2] & TXRPTB2_RETRY_CNT_M,
            queue_time: u16::from_le_bytes([buf[3], buf[4]]),
            final_rate: buf[5],
        })
    }

    pub fn success(&self) -> bool {
        self.txrptb0 & TXRPTB0_RETRY_OVER == 0
    }
}

/// 802.11 头部的几个字段
pub mod wh {
    use crate::net::MacAddr;

    pub const MIN_LEN: usize = 16;
    pub const ACK_LEN: usize = 10;
    pub const HDR_LEN: usize = 24;
    pub const QOS_HDR_LEN: usize = 26;

    pub const FC0_TYPE_MASK: u8 = 0x0c;
    pub const FC0_TYPE_MGT: u8 = 0x00;
    pub const FC0_TYPE_CTL: u8 = 0x04;
    pub const FC0_TYPE_DATA: u8 = 0x08;
    pub const FC0_SUBTYPE_QOS: u8 = 0x80;
    pub const FC0_SUBTYPE_NODATA: u8 = 0x40;
    pub const FC0_SUBTYPE_QOS_NULL: u8 = 0xc0;
    pub const FC1_DIR_MASK: u8 = 0x03;
    pub const FC1_DIR_TODS: u8 = 0x01;
    pub const FC1_DIR_DSTODS: u8 = 0x03;
    pub const FC1_PROTECTED: u8 = 0x40;

    pub const QOS_TID: u8 = 0x0f;
    pub const QOS_ACKPOLICY: u8 = 0x60;
    pub const QOS_ACKPOLICY_NOACK: u8 = 0x20;

    pub fn fc_type(f: &[u8]) -> u8 {
        f.first().map_or(0, |b| b & FC0_TYPE_MASK)
    }

    pub fn is_protected(f: &[u8]) -> bool {
        f.get(1).is_some_and(|b| b & FC1_PROTECTED != 0)
    }

    /// QoS 数据帧带有按 TID 划分的序列号
    pub fn has_qos_seq(f: &[u8]) -> bool {
        f.first()
            .is_some_and(|b| b & (FC0_TYPE_MASK | FC0_SUBTYPE_QOS) == FC0_TYPE_DATA | FC0_SUBTYPE_QOS)
    }

    /// QoS 控制字段的第一个字节
    pub fn qos(f: &[u8]) -> Option<u8> {
        if !has_qos_seq(f) {
            return None;
        }
        let off = if f[1] & FC1_DIR_MASK == FC1_DIR_DSTODS {
            30
        } else {
            24
        };
        f.get(off).copied()
    }

    fn addr(f: &[u8], off: usize) -> Option<MacAddr> {
        f.get(off..off + 6)?.try_into().ok()
    }

    pub fn addr1(f: &[u8]) -> Option<MacAddr> {
        addr(f, 4)
    }

    pub fn addr2(f: &[u8]) -> Option<MacAddr> {
        addr(f, 10)
    }

    /// 清零序列号与分片号
    pub fn clear_seq(f: &mut [u8]) {
        if let Some(seq) = f.get_mut(22..24) {
            seq.fill(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pktlen: usize, infosz_units: u32, dw0_extra: u32) -> Vec<u8> {
        let mut v = vec![0u8; RX_STAT_LEN];
        let dw0 = pktlen as u32 | (infosz_units << 16) | dw0_extra;
        v[0..4].copy_from_slice(&dw0.to_le_bytes());
        v.resize(RX_STAT_LEN + infosz_units as usize * 8 + pktlen, 0xaa);
        v
    }

    #[test]
    fn checksum_covers_first_32_bytes() {
        let mut d = TxDesc::new();
        d.pktlen = 0x1234;
        d.txdw1 = 0x0012_0501;
        d.txdw4 = 0x0002_1f09;
        d.txdw9 = 0xdead_beef;
        d.seal();
        let b = d.to_bytes();
        let mut expect = 0u16;
        for i in 0..16 {
            if i == 14 {
                continue;
            }
            expect ^= u16::from_le_bytes([b[2 * i], b[2 * i + 1]]);
        }
        assert_eq!(d.txdsum, expect);

        let before = d.txdsum;
        d.txdw8 = 0xffff_ffff;
        d.txdw9 = 0;
        d.seal();
        assert_eq!(d.txdsum, before);
        d.seal();
        assert_eq!(d.txdsum, before);
    }

    #[test]
    fn desc_layout() {
        let mut d = TxDesc::new();
        d.pktlen = 100;
        TxDesc::set(&mut d.txdw1, TXDW1_QSEL_M, QSEL_MGNT);
        TxDesc::set(&mut d.txdw1, TXDW1_MACID_M, 1);
        d.flags7 = 0x0300;
        d.txdw9 = field(TXDW9_SEQ_M, 0x123);
        let b = d.to_bytes();
        assert_eq!(&b[0..4], &[100, 0, 40, 0x8c]);
        assert_eq!(&b[4..8], &[0x01, 0x12, 0, 0]);
        assert_eq!(&b[30..32], &[0x00, 0x03]);
        assert_eq!(&b[36..40], &[0x00, 0x30, 0x12, 0x00]);
        assert_eq!(TxDesc::from_bytes(&b), d);
    }

    #[test]
    fn walk_aligned_records() {
        let mut buf = record(30, 0, 0);
        buf.resize(buf.len().next_multiple_of(8), 0);
        buf.extend(record(20, 4, RXDW0_PHYST));
        buf.resize(buf.len().next_multiple_of(8), 0);
        buf.extend(record(11, 0, 0));
        let got: Vec<_> = records(&buf).map(|(s, r)| (s.pktlen(), r.len())).collect();
        assert_eq!(got, vec![(30, 54), (20, 76), (11, 35)]);
    }

    #[test]
    fn truncated_tail_is_dropped() {
        let mut buf = record(30, 0, 0);
        buf.resize(56, 0);
        let mut tail = record(200, 0, 0);
        tail.truncate(100);
        buf.extend(tail);
        let got: Vec<_> = records(&buf).collect();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].0.pktlen(), 30);
    }

    #[test]
    fn zero_length_stops_walk() {
        let mut buf = record(16, 0, 0);
        buf.extend([0u8; 64]);
        assert_eq!(records(&buf).count(), 1);
        assert_eq!(records(&[0u8; 10]).count(), 0);
    }

    #[test]
    fn status_fields() {
        let mut b = record(40, 2, RXDW0_PHYST | RXDW0_CRCERR | (3 << 20));
        b[8..12].copy_from_slice(&RXDW2_RPT_C2H.to_le_bytes());
        b[12..16].copy_from_slice(&0x4du32.to_le_bytes());
        let s = RxStat::parse(&b).unwrap();
        assert_eq!(s.infosz(), 16);
        assert_eq!(s.total_len(), 80);
        assert!(s.has_error());
        assert!(s.has_phystat());
        assert!(s.is_c2h());
        assert_eq!(s.cipher(), 3);
        assert_eq!(s.rate(), 0x0d);
    }

    #[test]
    fn ofdm_rssi_averages_chains() {
        let p = PhyStat::parse(&[0x50, 0x40 | 0x80, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(p.rssi_ofdm(1), 0x50 - 110);
        assert_eq!(p.rssi_ofdm(2), ((0x50 - 110) + (0x40 - 110)) / 2);
    }

    #[test]
    fn tx_report_parse() {
        let r = TxReport::parse(&[0x80 | 0x12, 5, 0xc3, 1, 0, 9, 0, 0]).unwrap();
        assert_eq!(r.macid, 5);
        assert_eq!(r.retries, 3);
        assert!(!r.success());
        assert!(TxReport::parse(&[0; 7]).is_none());
    }

    #[test]
    fn qos_header_fields() {
        let mut f = vec![0u8; 26];
        f[0] = wh::FC0_TYPE_DATA | wh::FC0_SUBTYPE_QOS;
        f[24] = 0x25;
        assert!(wh::has_qos_seq(&f));
        assert_eq!(wh::qos(&f), Some(0x25));
        f[0] = wh::FC0_TYPE_MGT;
        assert_eq!(wh::qos(&f), None);
        assert_eq!(wh::fc_type(&f), wh::FC0_TYPE_MGT);
    }
}
