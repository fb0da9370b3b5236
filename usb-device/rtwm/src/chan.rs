//! 频段与信道切换、发射功率

use alloc::vec::Vec;

use log::{debug, trace};

use crate::{
    device::Softc,
    err::{Error, Result},
    io::field,
    net::{ChanKind, Channel},
    rate::{RIDX_CCK1, RIDX_CCK11, RIDX_COUNT, RIDX_OFDM6, ridx_mcs},
    reg::*,
};

const CHAN_2GHZ: [u8; 14] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14];

const CHAN_5GHZ: [u8; 54] = [
    36, 38, 40, 42, 44, 46, 48, 50, 52, 54, 56, 58, 60, 62, 64, 100, 102, 104, 106, 108, 110, 112,
    114, 116, 118, 120, 122, 124, 126, 128, 130, 132, 134, 136, 138, 140, 142, 144, 149, 151, 153,
    155, 157, 159, 161, 163, 165, 167, 168, 169, 171, 173, 175, 177,
];

/// 支持的信道，每个信道号以其基本模式列出
pub fn supported_channels() -> Vec<Channel> {
    CHAN_2GHZ
        .iter()
        .map(|&n| Channel::new(n, ChanKind::G))
        .chain(CHAN_5GHZ.iter().map(|&n| Channel::new(n, ChanKind::A)))
        .collect()
}

/// BB swing 编码对应的 TX_SCALE 值：0、-3、-6、-9 dB
const BB_SWING: [u32; 4] = [0x200, 0x16a, 0x101, 0xb6];

/// 功率表分组
fn power_group(chan: &Channel) -> Option<usize> {
    let n = chan.num;
    if chan.is_2ghz() {
        return match n {
            1..=2 => Some(0),
            3..=5 => Some(1),
            6..=8 => Some(2),
            9..=11 => Some(3),
            12..=14 => Some(4),
            _ => None,
        };
    }
    const UPPER: [u8; 14] = [42, 48, 58, 64, 106, 114, 122, 130, 138, 144, 155, 161, 171, 177];
    if n < 36 {
        return None;
    }
    UPPER.iter().position(|&hi| n <= hi)
}

fn fc_area(n: u8) -> u32 {
    match n {
        36..=48 => 0x0928_0000,
        50..=64 => 0x08a6_0000,
        100..=116 => 0x08a4_0000,
        118.. => 0x0824_0000,
        _ => 0x12d4_0000,
    }
}

fn rf_band(n: u8) -> u32 {
    match n {
        36..=64 => 0x1_0100,
        100..=140 => 0x3_0100,
        141.. => 0x5_0100,
        _ => 0,
    }
}

impl Softc {
    pub(crate) fn set_channel(&mut self, chan: Channel) -> Result {
        self.require_running()?;
        if power_group(&chan).is_none() {
            return Err(Error::InvalidArgument);
        }
        self.set_chan(&chan)?;
        self.curchan = chan;
        Ok(())
    }

    /// 切换频段；`force` 为假时频段未变则不做任何事
    pub(crate) fn set_band(&mut self, chan: &Channel, force: bool) -> Result {
        let on_5ghz = self.io.read8(CCK_CHECK) & CCK_CHECK_5GHZ != 0;
        if !force && chan.is_5ghz() == on_5ghz {
            return Ok(());
        }

        let swing = if chan.is_2ghz() {
            self.chip.set_band_2ghz(&self.io, &self.rom)?;
            self.rom.bbswing_2g
        } else {
            self.chip.set_band_5ghz(&self.io, &self.rom)?;
            self.rom.bbswing_5g
        };
        debug!("band switched to {} GHz", if chan.is_5ghz() { 5 } else { 2 });

        for i in 0..2 {
            let val = BB_SWING[((swing >> (2 * i)) & 0x3) as usize];
            self.io
                .bb_setbits(bb_tx_scale(i), BB_TX_SCALE_SWING_M, field(BB_TX_SCALE_SWING_M, val))?;
        }
        Ok(())
    }

    /// 2480 MHz 附近的杂散，只有 RTL8812AU 需要处理
    fn fix_spur(&self, chan: &Channel) -> Result {
        if !self.chip.is_12a() {
            return Ok(());
        }
        let io = &self.io;
        let n = chan.num;
        let ht40 = chan.is_ht40();

        if self.chip.c_cut {
            if ht40 && n == 11 {
                io.bb_setbits(BB_RFMOD, 0, 0xc00)?;
                io.bb_setbits(BB_ADC_BUF_CLK, 0, BB_ADC_BUF_CLK_BIT)?;
            } else {
                io.bb_setbits(BB_RFMOD, 0x400, 0x800)?;
                if !ht40 && (n == 13 || n == 14) {
                    io.bb_setbits(BB_RFMOD, 0, 0x300)?;
                    io.bb_setbits(BB_ADC_BUF_CLK, 0, BB_ADC_BUF_CLK_BIT)?;
                } else {
                    io.bb_setbits(BB_RFMOD, 0x100, 0x200)?;
                    io.bb_setbits(BB_ADC_BUF_CLK, BB_ADC_BUF_CLK_BIT, 0)?;
                }
            }
        } else if !ht40 && (n == 13 || n == 14) {
            // ADC 时钟切到 160M
            io.bb_setbits(BB_RFMOD, 0, 0x300)?;
        } else if chan.is_2ghz() {
            io.bb_setbits(BB_RFMOD, 0x100, 0x200)?;
        }
        Ok(())
    }

    fn l1_peak_th(&self) -> u32 {
        if self.chip.nrxchains() == 2 && self.chip.ntxchains() == 2 {
            0x01c0_0000
        } else {
            0x0200_0000
        }
    }

    pub(crate) fn set_chan(&mut self, chan: &Channel) -> Result {
        self.set_band(chan, false)?;

        let io = &self.io;
        let n = chan.num;
        io.bb_setbits(BB_FC_AREA, BB_FC_AREA_M, fc_area(n))?;

        for i in 0..self.chip.nrxchains() {
            self.chip
                .rf_setbits(io, i, RF_CHNLBW, RF_CHNLBW_BAND_M, rf_band(n))?;
            self.fix_spur(chan)?;
            self.chip
                .rf_setbits(io, i, RF_CHNLBW, RF_CHNLBW_CHNL_M, n as u32)?;
        }

        let bw = if chan.is_ht40() {
            let ext = if chan.kind == ChanKind::Ht40Above {
                DATA_SEC_PRIM_DOWN_20
            } else {
                DATA_SEC_PRIM_UP_20
            };
            io.setbits16(WMAC_TRXPTCL_CTL, 0x100, 0x80)?;
            io.write8(DATA_SEC, ext)?;

            io.bb_setbits(BB_RFMOD, 0x0030_03c3, 0x0030_0201)?;
            io.bb_setbits(BB_ADC_BUF_CLK, BB_ADC_BUF_CLK_BIT, 0)?;
            io.bb_setbits(BB_RFMOD, BB_RFMOD_EXT_CHAN_M, field(BB_RFMOD_EXT_CHAN_M, ext as u32))?;
            io.bb_setbits(
                BB_CCA_ON_SEC,
                BB_CCA_ON_SEC_EXT_CHAN_M,
                field(BB_CCA_ON_SEC_EXT_CHAN_M, ext as u32),
            )?;

            let th = if io.read8(BB_L1_PEAK_CHK) & 0x04 != 0 {
                0x0180_0000
            } else {
                self.l1_peak_th()
            };
            io.bb_setbits(BB_L1_PEAK_TH, BB_L1_PEAK_TH_M, th)?;

            if chan.kind == ChanKind::Ht40Above {
                io.bb_setbits(BB_CCK0_SYSTEM, BB_CCK0_SIDEBAND, 0)?;
            } else {
                io.bb_setbits(BB_CCK0_SYSTEM, 0, BB_CCK0_SIDEBAND)?;
            }
            RF_CHNLBW_BW40
        } else {
            io.setbits16(WMAC_TRXPTCL_CTL, 0x180, 0)?;
            io.write8(DATA_SEC, DATA_SEC_NO_EXT)?;

            io.bb_setbits(BB_RFMOD, 0x0030_03c3, 0x0030_0200)?;
            io.bb_setbits(BB_ADC_BUF_CLK, BB_ADC_BUF_CLK_BIT, 0)?;
            io.bb_setbits(BB_L1_PEAK_TH, BB_L1_PEAK_TH_M, self.l1_peak_th())?;
            RF_CHNLBW_BW20
        };

        self.fix_spur(chan)?;
        for i in 0..2 {
            self.chip.rf_setbits(io, i, RF_CHNLBW, RF_CHNLBW_BW_M, bw)?;
        }
        trace!("channel {n} ({:?})", chan.kind);

        self.set_txpower(chan)
    }

    /// 计算一条发射通路每个速率的功率索引
    pub(crate) fn get_txpower(&self, chain: usize, chan: &Channel) -> Option<[u8; RIDX_COUNT]> {
        let group = power_group(chan)?;
        let ntx = self.chip.ntxchains();
        let max_mcs = ridx_mcs(ntx as u8 * 8 - 1) as usize;
        let pwr = &self.rom.txpwr;
        let mut power = [0i16; RIDX_COUNT];

        let (base, diffs) = if chan.is_2ghz() {
            for p in &mut power[RIDX_CCK1 as usize..=RIDX_CCK11 as usize] {
                *p = pwr.cck[chain][group] as i16;
            }
            let diffs = if chan.is_ht40() {
                &pwr.bw40_diff_2g[chain]
            } else {
                &pwr.bw20_diff_2g[chain]
            };
            (pwr.ht40_2g[chain][group], diffs)
        } else {
            let diffs = if chan.is_ht40() {
                &pwr.bw40_diff_5g[chain]
            } else {
                &pwr.bw20_diff_5g[chain]
            };
            (pwr.ht40_5g[chain][group], diffs)
        };
        for p in &mut power[RIDX_OFDM6 as usize..=max_mcs] {
            *p = base as i16;
        }

        // 每多一条空间流，其 MCS 叠加对应的差值
        for (i, &diff) in diffs.iter().enumerate().take(ntx) {
            let min_mcs = ridx_mcs(i as u8 * 8) as usize;
            for p in &mut power[min_mcs..=max_mcs] {
                *p += diff as i16;
            }
        }

        let mut out = [0u8; RIDX_COUNT];
        for (o, p) in out.iter_mut().zip(power) {
            *o = p.clamp(0, MAX_TX_PWR) as u8;
        }
        Some(out)
    }

    fn write_txpower(&self, chain: usize, chan: &Channel, power: &[u8; RIDX_COUNT]) -> Result {
        let word = |ridx: usize| u32::from_le_bytes([power[ridx], power[ridx + 1], power[ridx + 2], power[ridx + 3]]);
        let io = &self.io;

        if chan.is_2ghz() {
            io.bb_write(bb_txagc_cck11_1(chain), word(RIDX_CCK1 as usize))?;
        }
        let ofdm = RIDX_OFDM6 as usize;
        io.bb_write(bb_txagc_ofdm18_6(chain), word(ofdm))?;
        io.bb_write(bb_txagc_ofdm54_24(chain), word(ofdm + 4))?;

        let mcs = ridx_mcs(0) as usize;
        io.bb_write(bb_txagc_mcs3_0(chain), word(mcs))?;
        io.bb_write(bb_txagc_mcs7_4(chain), word(mcs + 4))?;
        io.bb_write(bb_txagc_mcs11_8(chain), word(mcs + 8))?;
        io.bb_write(bb_txagc_mcs15_12(chain), word(mcs + 12))
    }

    pub(crate) fn set_txpower(&self, chan: &Channel) -> Result {
        for chain in 0..self.chip.ntxchains() {
            let Some(power) = self.get_txpower(chain, chan) else {
                debug!("incorrect channel {}", chan.num);
                return Err(Error::InvalidArgument);
            };
            trace!("Tx power for chain {chain}: {power:?}");
            self.write_txpower(chain, chan, &power)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{device::tests::TestDev, io::get_field, net::OpMode};

    #[test]
    fn channel_list() {
        let chans = supported_channels();
        assert_eq!(chans.len(), 68);
        assert_eq!(chans[0], Channel::new(1, ChanKind::G));
        assert!(chans.contains(&Channel::new(165, ChanKind::A)));
        assert!(chans.iter().all(|c| power_group(c).is_some()));
    }

    #[test]
    fn power_groups() {
        assert_eq!(power_group(&Channel::new(1, ChanKind::G)), Some(0));
        assert_eq!(power_group(&Channel::new(11, ChanKind::G)), Some(3));
        assert_eq!(power_group(&Channel::new(14, ChanKind::B)), Some(4));
        assert_eq!(power_group(&Channel::new(36, ChanKind::A)), Some(0));
        assert_eq!(power_group(&Channel::new(100, ChanKind::A)), Some(4));
        assert_eq!(power_group(&Channel::new(149, ChanKind::A)), Some(10));
        assert_eq!(power_group(&Channel::new(177, ChanKind::A)), Some(13));
        assert_eq!(power_group(&Channel::new(30, ChanKind::A)), None);
        assert_eq!(power_group(&Channel::new(180, ChanKind::A)), None);
    }

    #[test]
    fn txpower_per_rate() {
        let t = TestDev::stopped(OpMode::Sta);
        let mut sc = t.sc.lock();
        sc.rom.txpwr.cck[0][2] = 0x20;
        sc.rom.txpwr.ht40_2g[0][2] = 0x28;
        sc.rom.txpwr.bw20_diff_2g[0] = [1, -2, 0, 0];
        sc.rom.txpwr.bw40_diff_2g[0] = [0x7, 0, 0, 0];

        let p = sc.get_txpower(0, &Channel::new(6, ChanKind::Ht20)).unwrap();
        assert_eq!(p[RIDX_CCK1 as usize], 0x20);
        assert_eq!(p[RIDX_OFDM6 as usize], 0x28);
        assert_eq!(p[ridx_mcs(0) as usize], 0x29);
        // 第二条空间流叠加两个差值
        assert_eq!(p[ridx_mcs(8) as usize], 0x27);

        sc.rom.txpwr.ht40_2g[0][2] = 0x3d;
        let p = sc.get_txpower(0, &Channel::new(6, ChanKind::Ht40Above)).unwrap();
        assert_eq!(p[ridx_mcs(7) as usize], MAX_TX_PWR as u8);
        assert_eq!(p[RIDX_OFDM6 as usize], 0x3d);
    }

    #[test]
    fn txpower_5ghz_has_no_cck() {
        let t = TestDev::stopped(OpMode::Sta);
        let mut sc = t.sc.lock();
        sc.rom.txpwr.cck[0] = [0x20; 6];
        sc.rom.txpwr.ht40_5g[0][10] = 0x30;
        sc.rom.txpwr.bw20_diff_5g[0] = [-8, 0, 0, 0];

        let p = sc.get_txpower(0, &Channel::new(149, ChanKind::Ht20)).unwrap();
        assert_eq!(p[RIDX_CCK1 as usize], 0);
        assert_eq!(p[RIDX_OFDM6 as usize], 0x30);
        assert_eq!(p[ridx_mcs(3) as usize], 0x28);
    }

    #[test]
    fn txagc_writes() {
        let t = TestDev::running(OpMode::Sta);
        let mut sc = t.sc.lock();
        sc.rom.txpwr.cck[1] = [0x11; 6];
        sc.rom.txpwr.ht40_5g[1] = [0x22; 14];
        t.regs.set32(bb_txagc_cck11_1(1), 0xdead_beef);

        sc.set_txpower(&Channel::new(40, ChanKind::A)).unwrap();
        assert_eq!(t.regs.get32(bb_txagc_ofdm18_6(1)), 0x2222_2222);
        assert_eq!(t.regs.get32(bb_txagc_mcs15_12(1)), 0x2222_2222);
        // 5 GHz 不写 CCK
        assert_eq!(t.regs.get32(bb_txagc_cck11_1(1)), 0xdead_beef);

        sc.set_txpower(&Channel::new(1, ChanKind::G)).unwrap();
        assert_eq!(t.regs.get32(bb_txagc_cck11_1(1)), 0x1111_1111);
    }

    #[test]
    fn band_switch_sets_swing() {
        let t = TestDev::running(OpMode::Sta);
        let mut sc = t.sc.lock();
        sc.rom.bbswing_5g = 0b0110;
        sc.set_band(&Channel::new(36, ChanKind::A), false).unwrap();
        assert_ne!(t.regs.get32(CCK_CHECK) & CCK_CHECK_5GHZ as u32, 0);
        assert_eq!(get_field(t.regs.get32(bb_tx_scale(0)), BB_TX_SCALE_SWING_M), 0x101);
        assert_eq!(get_field(t.regs.get32(bb_tx_scale(1)), BB_TX_SCALE_SWING_M), 0x16a);

        // 频段未变时不重复切换
        t.regs.set32(bb_tx_scale(0), 0);
        sc.set_band(&Channel::new(40, ChanKind::A), false).unwrap();
        assert_eq!(t.regs.get32(bb_tx_scale(0)), 0);
        sc.set_band(&Channel::new(40, ChanKind::A), true).unwrap();
        assert_ne!(t.regs.get32(bb_tx_scale(0)), 0);
    }

    #[test]
    fn ht40_channel_programming() {
        let t = TestDev::running(OpMode::Sta);
        let mut sc = t.sc.lock();
        sc.set_channel(Channel::new(40, ChanKind::Ht40Above)).unwrap();
        assert_eq!(sc.curchan, Channel::new(40, ChanKind::Ht40Above));
        assert_eq!(get_field(t.regs.get32(BB_FC_AREA), BB_FC_AREA_M), 0x0928_0000 >> 17);
        assert_eq!(t.regs.get32(DATA_SEC) as u8, DATA_SEC_PRIM_DOWN_20);
        assert_eq!(
            get_field(t.regs.get32(BB_RFMOD), BB_RFMOD_EXT_CHAN_M),
            DATA_SEC_PRIM_DOWN_20 as u32
        );
        assert_eq!(t.regs.get32(BB_L1_PEAK_TH) & BB_L1_PEAK_TH_M, 0x01c0_0000);
        assert_eq!(t.regs.get32(WMAC_TRXPTCL_CTL) & 0x180, 0x80);
    }

    #[test]
    fn ht20_channel_programming() {
        let t = TestDev::running(OpMode::Sta);
        let mut sc = t.sc.lock();
        t.regs.set32(DATA_SEC, 0xff);
        t.regs.set32(WMAC_TRXPTCL_CTL, 0x180);
        sc.set_channel(Channel::new(6, ChanKind::Ht20)).unwrap();
        assert_eq!(t.regs.get32(DATA_SEC) as u8, DATA_SEC_NO_EXT);
        assert_eq!(t.regs.get32(WMAC_TRXPTCL_CTL) & 0x180, 0);
        assert_eq!(t.regs.get32(BB_FC_AREA) & BB_FC_AREA_M, 0x12d4_0000);
        assert_eq!(t.regs.get32(BB_RFMOD) & 0x0030_03c3, 0x0030_0200);
    }

    #[test]
    fn channel_requires_running() {
        let t = TestDev::stopped(OpMode::Sta);
        let mut sc = t.sc.lock();
        assert_eq!(sc.set_channel(Channel::new(6, ChanKind::G)), Err(Error::NetDown));

        let t = TestDev::running(OpMode::Sta);
        let mut sc = t.sc.lock();
        assert_eq!(
            sc.set_channel(Channel::new(15, ChanKind::A)),
            Err(Error::InvalidArgument)
        );
        assert_eq!(sc.curchan, Channel::new(1, ChanKind::B));
    }
}
