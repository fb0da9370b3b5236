//! 硬件速率索引
//!
//! 0..=3 为 CCK，4..=11 为 OFDM，12 起为 MCS0..MCS15。

use crate::net::{PhyMode, RATE_MCS};

pub const RIDX_CCK1: u8 = 0;
pub const RIDX_CCK55: u8 = 2;
pub const RIDX_CCK11: u8 = 3;
pub const RIDX_OFDM6: u8 = 4;
pub const RIDX_OFDM24: u8 = 8;
pub const RIDX_OFDM36: u8 = 9;
pub const RIDX_OFDM54: u8 = 11;
pub const RIDX_COUNT: usize = 28;
pub const RIDX_UNKNOWN: u8 = 0xff;

pub const fn ridx_mcs(i: u8) -> u8 {
    12 + i
}

/// 索引 0..=11 对应的 500kbps 速率
pub const RIDX2RATE: [u8; 12] = [2, 4, 11, 22, 12, 18, 24, 36, 48, 72, 96, 108];

pub fn is_cck(ridx: u8) -> bool {
    ridx <= RIDX_CCK11
}

pub fn rate2ridx(rate: u8) -> u8 {
    if rate & RATE_MCS != 0 {
        return (rate & 0x0f) + 12;
    }
    match RIDX2RATE.iter().position(|&r| r == rate) {
        Some(i) => i as u8,
        None => RIDX_UNKNOWN,
    }
}

pub fn ridx2rate(ridx: u8) -> u8 {
    match RIDX2RATE.get(ridx as usize) {
        Some(&r) => r,
        None => RATE_MCS | (ridx.saturating_sub(12)),
    }
}

/// TX 描述符中的速率自适应表编号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Raid {
    Bgn2T40 = 0,
    Bgn1T40 = 1,
    Bgn2T = 2,
    Bgn1T = 3,
    Gn2T = 4,
    Gn1T = 5,
    Bg = 6,
    G = 7,
    B = 8,
}

/// 按 PHY 模式、链路数与带宽选择 RAID；组播与非 HT 节点退回传统速率
pub fn raid(mode: PhyMode, legacy_only: bool, ntxchains: usize, ht40: bool) -> Raid {
    let mode = match mode {
        PhyMode::NA if legacy_only => PhyMode::A,
        PhyMode::NG if legacy_only => PhyMode::G,
        m => m,
    };
    match mode {
        PhyMode::A => Raid::G,
        PhyMode::B => Raid::B,
        PhyMode::G => Raid::Bg,
        PhyMode::NA if ntxchains == 1 => Raid::Gn1T,
        PhyMode::NA => Raid::Gn2T,
        PhyMode::NG => match (ntxchains == 1, ht40) {
            (true, true) => Raid::Bgn1T40,
            (true, false) => Raid::Bgn1T,
            (false, true) => Raid::Bgn2T40,
            (false, false) => Raid::Bgn2T,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_index_mapping() {
        assert_eq!(rate2ridx(2), RIDX_CCK1);
        assert_eq!(rate2ridx(22), RIDX_CCK11);
        assert_eq!(rate2ridx(72), RIDX_OFDM36);
        assert_eq!(rate2ridx(RATE_MCS | 4), ridx_mcs(4));
        assert_eq!(rate2ridx(RATE_MCS | 15), 27);
        assert_eq!(rate2ridx(5), RIDX_UNKNOWN);
        assert_eq!(ridx2rate(RIDX_OFDM54), 108);
        assert_eq!(ridx2rate(ridx_mcs(7)), RATE_MCS | 7);
    }

    #[test]
    fn raid_selection() {
        assert_eq!(raid(PhyMode::NG, false, 2, true), Raid::Bgn2T40);
        assert_eq!(raid(PhyMode::NG, false, 1, false), Raid::Bgn1T);
        assert_eq!(raid(PhyMode::NG, true, 2, true), Raid::Bg);
        assert_eq!(raid(PhyMode::NA, false, 1, false), Raid::Gn1T);
        assert_eq!(raid(PhyMode::NA, true, 1, false), Raid::G);
        assert_eq!(raid(PhyMode::A, false, 2, false), Raid::G);
        assert_eq!(raid(PhyMode::B, false, 2, false), Raid::B);
    }
}
