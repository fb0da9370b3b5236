//! 芯片型号相关的参数与操作
//!
//! 两代芯片寄存器布局基本相同，差异集中在上电/下电序列、RF 读回方式、
//! 频段切换与初始化表。型号在 attach 时确定，之后不再改变。

use log::debug;

use crate::{
    err::{Error, Result},
    io::Io,
    reg::*,
    rom::RomInfo,
    table::{Program, Variant},
};

pub mod r12a;
pub mod r21a;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipKind {
    Rtl8812au,
    Rtl8821au,
}

/// 每种芯片固定的参数
#[derive(Debug)]
pub struct ChipParams {
    pub name: &'static str,
    pub fw_name: &'static str,
    pub fw_sig: u16,
    /// 支持固件 IQ 校准的最低固件版本
    pub fw_iqk_ver: u16,
    pub page_count: u32,
    pub pktbuf_count: u32,
    pub tx_boundary: u8,
    pub tx_agg_desc_num: u32,
    pub npubq_pages: u32,
    pub page_size: usize,
    pub rx_dma_size: u16,
    pub ntxchains: usize,
    pub nrxchains: usize,
    pub ampdu_max_time: u8,
    /// 是否有第二个 beacon 队列
    pub has_bcnq1: bool,
}

pub static R12A_PARAMS: ChipParams = ChipParams {
    name: "RTL8812AU",
    fw_name: "urtwm-rtl8812aufw",
    fw_sig: 0x950,
    fw_iqk_ver: 0x19,
    page_count: 248,
    pktbuf_count: 255,
    tx_boundary: 249,
    tx_agg_desc_num: 1,
    npubq_pages: 219,
    page_size: 512,
    rx_dma_size: 0x3e80,
    ntxchains: 2,
    nrxchains: 2,
    ampdu_max_time: 0x70,
    has_bcnq1: false,
};

pub static R21A_PARAMS: ChipParams = ChipParams {
    name: "RTL8821AU",
    fw_name: "urtwm-rtl8821aufw",
    fw_sig: 0x210,
    fw_iqk_ver: 0x16,
    page_count: 243,
    pktbuf_count: 255,
    tx_boundary: 244,
    tx_agg_desc_num: 6,
    npubq_pages: 219,
    page_size: 256,
    rx_dma_size: 0x3e80,
    ntxchains: 1,
    nrxchains: 1,
    ampdu_max_time: 0x5e,
    has_bcnq1: true,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedKind {
    /// 芯片自带的 LED 控制
    Chip,
    /// minicard / solo / combo 板型
    Mini,
}

#[derive(Debug, Clone, Copy)]
pub struct Chip {
    pub kind: ChipKind,
    pub c_cut: bool,
    pub led: LedKind,
    /// 无外置 PA/LNA 的 RTL8812AU 使用另一张 MAC 表
    pub mac_no_ext: bool,
}

impl Chip {
    pub fn new(kind: ChipKind) -> Self {
        Self {
            kind,
            c_cut: false,
            led: LedKind::Chip,
            mac_no_ext: false,
        }
    }

    pub fn params(&self) -> &'static ChipParams {
        match self.kind {
            ChipKind::Rtl8812au => &R12A_PARAMS,
            ChipKind::Rtl8821au => &R21A_PARAMS,
        }
    }

    pub fn is_12a(&self) -> bool {
        self.kind == ChipKind::Rtl8812au
    }

    pub fn ntxchains(&self) -> usize {
        self.params().ntxchains
    }

    pub fn nrxchains(&self) -> usize {
        self.params().nrxchains
    }

    /// 读取 SYS_CFG，拒绝测试芯片并识别 RTL8812AU C-cut
    pub fn read_chipid(&mut self, io: &Io) -> Result {
        let reg = io.read32(SYS_CFG);
        if reg & SYS_CFG_TRP_VAUX_EN != 0 {
            return Err(Error::UnsupportedChip);
        }
        if self.is_12a() && (reg & SYS_CFG_CHIP_VER_RTL_M) >> 12 == CHIP_C_CUT {
            debug!("RTL8812AU C-cut");
            self.c_cut = true;
        }
        Ok(())
    }

    /// 根据 ROM 内容选择 LED 控制方式与 MAC 表
    pub fn config_rom(&mut self, rom: &RomInfo) {
        self.led = match rom.board_type {
            BOARD_TYPE_MINICARD | BOARD_TYPE_SOLO | BOARD_TYPE_COMBO => LedKind::Mini,
            _ => LedKind::Chip,
        };
        if self.is_12a() && !(rom.ext_pa_2g || rom.ext_lna_2g || rom.ext_pa_5g || rom.ext_lna_5g)
        {
            self.mac_no_ext = true;
        }
    }

    pub fn check_condition(&self, rom: &RomInfo, cond: &[u8; 3]) -> bool {
        match self.kind {
            ChipKind::Rtl8812au => r12a::check_condition(rom, cond),
            ChipKind::Rtl8821au => r21a::check_condition(rom, cond),
        }
    }

    pub fn mac_table(&self) -> &'static [(u16, u8)] {
        match self.kind {
            ChipKind::Rtl8812au if self.mac_no_ext => crate::table::r12a::RTL8812AU_MAC_NO_EXT_PA_LNA,
            ChipKind::Rtl8812au => crate::table::r12a::RTL8812AU_MAC,
            ChipKind::Rtl8821au => crate::table::r21a::RTL8821AU_MAC,
        }
    }

    pub fn bb_table(&self) -> &'static [&'static [Variant<Program<u16>>]] {
        match self.kind {
            ChipKind::Rtl8812au => crate::table::r12a::RTL8812AU_BB,
            ChipKind::Rtl8821au => crate::table::r21a::RTL8821AU_BB,
        }
    }

    pub fn agc_table(&self) -> &'static [&'static [Variant<&'static [u32]>]] {
        match self.kind {
            ChipKind::Rtl8812au => crate::table::r12a::RTL8812AU_AGC,
            ChipKind::Rtl8821au => crate::table::r21a::RTL8821AU_AGC,
        }
    }

    /// 第 `chain` 条 RF 通路的表
    pub fn rf_table(&self, chain: usize) -> Option<&'static [&'static [Variant<Program<u8>>]]> {
        match self.kind {
            ChipKind::Rtl8812au => crate::table::r12a::RTL8812AU_RF.get(chain).copied(),
            ChipKind::Rtl8821au => crate::table::r21a::RTL8821AU_RF.get(chain).copied(),
        }
    }

    pub fn rf_read(&self, io: &Io, chain: usize, addr: u8) -> u32 {
        if self.is_12a() && !self.c_cut {
            io.rf_read_cca_off(chain, addr)
        } else {
            io.rf_read_settle(chain, addr)
        }
    }

    pub fn rf_setbits(&self, io: &Io, chain: usize, addr: u8, clr: u32, set: u32) -> Result {
        let val = self.rf_read(io, chain, addr);
        io.rf_write(chain, addr, (val & !clr) | set)
    }

    pub fn power_on(&self, io: &Io) -> Result {
        match self.kind {
            ChipKind::Rtl8812au => r12a::power_on(io),
            ChipKind::Rtl8821au => r21a::power_on(io),
        }
    }

    /// 下电过程中的错误只记录，不返回
    pub fn power_off(&self, io: &Io) {
        match self.kind {
            ChipKind::Rtl8812au => r12a::power_off(self, io),
            ChipKind::Rtl8821au => r21a::power_off(self, io),
        }
    }

    pub fn fw_reset(&self, io: &Io) -> Result {
        let bit = match self.kind {
            ChipKind::Rtl8812au => r12a::RSV_CTRL2_FW_RESET,
            ChipKind::Rtl8821au => r21a::RSV_CTRL2_FW_RESET,
        };
        io.setbits8(RSV_CTRL, RSV_CTRL_WLOCK_00, 0)?;
        io.setbits8(RSV_CTRL2, bit, 0)?;
        io.setbits8_shift(SYS_FUNC_EN, SYS_FUNC_EN_CPUEN as u32, 0, 1)?;
        io.setbits8(RSV_CTRL, RSV_CTRL_WLOCK_00, 0)?;
        io.setbits8(RSV_CTRL2, 0, bit)?;
        io.setbits8_shift(SYS_FUNC_EN, 0, SYS_FUNC_EN_CPUEN as u32, 1)
    }

    pub fn set_page_size(&self, io: &Io) -> Result {
        match self.kind {
            ChipKind::Rtl8812au => io.setbits8(PBP, PBP_PSTX_M, PBP_512 << 4),
            ChipKind::Rtl8821au => Ok(()),
        }
    }

    pub fn crystalcap_write(&self, io: &Io, crystalcap: u8) -> Result {
        let val = (crystalcap & 0x3f) as u32;
        let mask = match self.kind {
            ChipKind::Rtl8812au => r12a::MAC_PHY_CRYSTALCAP_M,
            ChipKind::Rtl8821au => r21a::MAC_PHY_CRYSTALCAP_M,
        };
        io.setbits32(MAC_PHY_CTRL, mask, crate::io::field(mask, val | (val << 6)))
    }

    pub fn set_led(&self, io: &Io, on: bool) -> Result {
        let dis = if on { 0 } else { LEDCFG0_DIS };
        match (self.led, self.kind) {
            (LedKind::Mini, _) => {
                if on {
                    io.setbits8(LEDCFG2, 0x0f, LEDCFG2_EN)
                } else {
                    io.setbits8(LEDCFG2, 0x6f, LEDCFG2_DIS)?;
                    io.setbits8(MAC_PINMUX_CFG, 0x01, 0)
                }
            }
            (LedKind::Chip, ChipKind::Rtl8812au) => io.setbits8(LEDCFG0, 0x8f, LEDCFG_SW_EN | dis),
            (LedKind::Chip, ChipKind::Rtl8821au) => io.write8(LEDCFG2, LEDCFG_SW_EN | dis),
        }
    }

    pub fn set_band_2ghz(&self, io: &Io, rom: &RomInfo) -> Result {
        match self.kind {
            ChipKind::Rtl8812au => r12a::set_band_2ghz(io, rom),
            ChipKind::Rtl8821au => r21a::set_band_2ghz(io, rom),
        }
    }

    pub fn set_band_5ghz(&self, io: &Io, rom: &RomInfo) -> Result {
        match self.kind {
            ChipKind::Rtl8812au => r12a::set_band_5ghz(io, rom),
            ChipKind::Rtl8821au => r21a::set_band_5ghz(io, rom),
        }
    }

    pub fn rssi_cck(&self, cfosho0: u8, cck_hipwr: bool) -> i8 {
        match self.kind {
            ChipKind::Rtl8812au => r12a::rssi_cck(cfosho0, cck_hipwr),
            ChipKind::Rtl8821au => r21a::rssi_cck(cfosho0),
        }
    }

    pub fn parse_rom_specific(&self, info: &mut RomInfo, rom: &[u8], bt_func: bool) {
        match self.kind {
            ChipKind::Rtl8812au => r12a::parse_rom(info, rom),
            ChipKind::Rtl8821au => r21a::parse_rom(info, rom, bt_func),
        }
    }
}

pub const BOARD_TYPE_HIGHPA: u8 = 1;
pub const BOARD_TYPE_MINICARD: u8 = 2;
pub const BOARD_TYPE_SOLO: u8 = 3;
pub const BOARD_TYPE_COMBO: u8 = 4;

pub const RSV_CTRL_WLOCK_00: u8 = 0x02;
pub const MAC_PINMUX_CFG: u16 = 0x043;

/// 设置 RFE 引脚复用与反相位
pub(crate) fn rfe_write(io: &Io, chain: usize, pinmux: u32, inv: u32) -> Result {
    io.bb_write(bb_rfe_pinmux(chain), pinmux)?;
    io.bb_setbits(bb_rfe_inv(chain), BB_RFE_INV_M, inv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn led_selection_by_board() {
        let mut chip = Chip::new(ChipKind::Rtl8812au);
        let mut rom = RomInfo::default();
        rom.board_type = BOARD_TYPE_SOLO;
        chip.config_rom(&rom);
        assert_eq!(chip.led, LedKind::Mini);
        assert!(chip.mac_no_ext);

        let mut chip = Chip::new(ChipKind::Rtl8812au);
        rom.board_type = 0;
        rom.ext_lna_5g = true;
        chip.config_rom(&rom);
        assert_eq!(chip.led, LedKind::Chip);
        assert!(!chip.mac_no_ext);
    }

    #[test]
    fn params_are_fixed_per_kind() {
        let chip = Chip::new(ChipKind::Rtl8821au);
        assert_eq!(chip.ntxchains(), 1);
        assert_eq!(chip.params().tx_boundary, 244);
        assert!(chip.params().has_bcnq1);
        assert_eq!(Chip::new(ChipKind::Rtl8812au).params().fw_sig, 0x950);
    }
}
