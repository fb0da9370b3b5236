//! RTL8812AU 专有操作

use log::{error, trace, warn};

use super::{Chip, MAC_PINMUX_CFG, rfe_write};
use crate::{
    err::{Error, Result},
    io::Io,
    reg::*,
    rom::{
        ROM_LNA_TYPE_2G, ROM_LNA_TYPE_5G, ROM_PA_TYPE, ROM_RF_BOARD_OPT, ROM_RF_BT_OPT,
        ROM_RFE_OPTION, RomInfo, rom_var,
    },
    table::cond12,
};

pub const RSV_CTRL2_FW_RESET: u8 = 0x08;
pub const MAC_PHY_CRYSTALCAP_M: u32 = 0x7ff8_0000;

const LPLDO_CTRL_SLEEP: u8 = 0x10;

const ROM_MACADDR: usize = 215;

/// 外置 PA/LNA 类型与条件位图匹配
pub fn check_condition(rom: &RomInfo, cond: &[u8; 3]) -> bool {
    if cond[0] == 0 {
        return true;
    }

    let masks = [
        (rom.ext_pa_2g, cond12::GPA | cond12::ty(rom.type_pa_2g)),
        (rom.ext_pa_5g, cond12::APA | cond12::ty(rom.type_pa_5g)),
        (rom.ext_lna_2g, cond12::GLNA | cond12::ty(rom.type_lna_2g)),
        (rom.ext_lna_5g, cond12::ALNA | cond12::ty(rom.type_lna_5g)),
    ];
    if masks.iter().all(|&(present, _)| !present) {
        return false;
    }
    let masks = masks.iter().filter(|(present, _)| *present).map(|&(_, m)| m);

    cond.iter()
        .take_while(|&&c| c != 0)
        .any(|&c| masks.clone().any(|m| c & m == m))
}

pub fn power_on(io: &Io) -> Result {
    io.setbits8(SPS0_CTRL + 1, 0, 0x01)?;
    io.setbits16(0x014, 0x0180, 0)?;
    io.setbits8(LPLDO_CTRL, LPLDO_CTRL_SLEEP, 0)?;
    io.write8(GPIO_IOSEL, 0)?;
    io.write8(MAC_PINMUX_CFG, 0)?;

    io.setbits8_shift(APS_FSMCO, APS_FSMCO_AFSM_HSUS, 0, 1)?;
    io.setbits8_shift(SYS_FUNC_EN, 0, SYS_FUNC_EN_CPUEN as u32, 1)?;
    io.setbits8_shift(APS_FSMCO, APS_FSMCO_APFM_RSM, 0, 1)?;

    if !io.poll(5000, 10, |io| io.read32(APS_FSMCO) & APS_FSMCO_SUS_HOST != 0) {
        error!("timeout waiting for chip power up");
        return Err(Error::Timeout);
    }

    io.setbits8_shift(APS_FSMCO, APS_FSMCO_AFSM_HSUS, 0, 1)?;
    io.setbits8_shift(APS_FSMCO, 0, APS_FSMCO_APFM_ONMAC, 1)?;
    if !io.poll(5000, 10, |io| {
        io.read16(APS_FSMCO) as u32 & APS_FSMCO_APFM_ONMAC == 0
    }) {
        return Err(Error::Timeout);
    }

    io.write16(CR, 0)?;
    io.setbits16(CR, 0, CR_POWER_ON)
}

/// 下电，过程中的错误只记录
pub fn power_off(chip: &Chip, io: &Io) {
    if let Err(e) = try_power_off(chip, io) {
        warn!("power off: {e}");
    }
}

fn try_power_off(chip: &Chip, io: &Io) -> Result {
    io.write8(CR, 0)?;
    io.write8(TXPAUSE, TX_QUEUE_ALL)?;
    if !io.poll(5000, 10, |io| io.read32(SCH_TXCMD) == 0) {
        error!("failed to block Tx queues");
        return Ok(());
    }

    // 关闭 CCK/OFDM 并复位基带
    io.write8(bb_hssi_param1(0), 0x04)?;
    io.write8(bb_hssi_param1(1), 0x04)?;
    io.setbits8(SYS_FUNC_EN, SYS_FUNC_EN_BBRSTB as u8, 0)?;
    io.delay(1);
    io.setbits8(SYS_FUNC_EN, SYS_FUNC_EN_BB_GLB_RST as u8, 0)?;

    io.write8(CR, (CR_HCI_TXDMA_EN | CR_HCI_RXDMA_EN) as u8)?;
    io.setbits8_shift(CR, CR_ENSEC as u32, 0, 1)?;
    io.setbits8(DUAL_TSF_RST, 0, DUAL_TSF_RST_TXOK)?;

    if io.read8(MCUFWDL) as u32 & MCUFWDL_RAM_DL_SEL != 0 {
        chip.fw_reset(io)?;
    }
    io.setbits8_shift(SYS_FUNC_EN, SYS_FUNC_EN_CPUEN as u32, 0, 1)?;
    io.write8(MCUFWDL, 0)?;

    io.write8(bb_hssi_param1(0), 0x04)?;
    io.write8(bb_hssi_param1(1), 0x04)?;
    io.setbits8(SYS_FUNC_EN, SYS_FUNC_EN_BB_GLB_RST as u8, 0)?;
    io.delay(1);

    io.setbits8_shift(
        APS_FSMCO,
        0xff,
        APS_FSMCO_SOP_RCK | APS_FSMCO_SOP_ABG,
        3,
    )?;
    io.setbits8(SYS_CLKR, SYS_CLKR_ANA8M as u8, 0)?;

    io.setbits8_shift(APS_FSMCO, 0, APS_FSMCO_APFM_OFF, 1)?;
    if !io.poll(5000, 10, |io| {
        io.read16(APS_FSMCO) as u32 & APS_FSMCO_APFM_OFF == 0
    }) {
        error!("could not turn off MAC");
        return Ok(());
    }

    io.setbits8_shift(SYS_FUNC_EN, SYS_FUNC_EN_CPUEN as u32, 0, 1)?;
    io.write8(MCUFWDL, (MCUFWDL_EN | MCUFWDL_CHKSUM_RPT) as u8)?;

    // GPIO 置为输入
    io.setbits8(GPIO_IO_SEL, 0xf0, 0xc0)?;
    io.write8(MAC_PINMUX_CFG, 0x07)?;
    io.write8(GPIO_OUT, 0)?;
    io.write8(GPIO_IOSEL, 0xff)?;
    io.write8(GPIO_MOD, 0)?;

    io.setbits16(0x014, 0, 0x0180)?;
    io.setbits8(SPS0_CTRL + 1, 0x01, 0)?;
    io.setbits8(LPLDO_CTRL, 0, LPLDO_CTRL_SLEEP)?;
    io.setbits8(SYS_CLKR, SYS_CLKR_ANA8M as u8, 0)?;

    io.setbits8_shift(APS_FSMCO, 0xff, APS_FSMCO_SOP_RCK, 3)?;
    io.setbits8(RF_CTRL, 0x02, 0)?;
    io.setbits8(RF_B_CTRL, 0x02, 0)?;
    io.setbits8_shift(APS_FSMCO, 0, APS_FSMCO_AFSM_HSUS, 1)
}

pub fn set_band_2ghz(io: &Io, rom: &RomInfo) -> Result {
    io.bb_setbits(BB_OFDMCCK_EN, 0, BB_OFDMCCK_EN_CCK | BB_OFDMCCK_EN_OFDM)?;
    io.bb_setbits(BB_BW_INDICATION, 0x02, 0x01)?;
    io.bb_setbits(BB_PWED_TH, 0x3e000, 0x2e000)?;
    io.bb_setbits(BB_AGC_TABLE, 0x03, 0)?;

    match rom.rfe_type {
        0..=2 => {
            for chain in 0..2 {
                rfe_write(io, chain, 0x7777_7777, 0)?;
            }
        }
        3 => {
            for chain in 0..2 {
                rfe_write(io, chain, 0x5433_7770, 0x0100_0000)?;
            }
            io.bb_setbits(BB_ANTSEL_SW, 0x0303, 0x01)?;
        }
        4 => {
            for chain in 0..2 {
                rfe_write(io, chain, 0x7777_7777, 0x0010_0000)?;
            }
        }
        5 => {
            io.write8(bb_rfe_pinmux(0) + 2, 0x77)?;
            io.bb_write(bb_rfe_pinmux(1), 0x7777_7777)?;
            io.setbits8(bb_rfe_inv(0) + 3, 0x01, 0)?;
            io.bb_setbits(bb_rfe_inv(1), BB_RFE_INV_M, 0)?;
        }
        _ => {}
    }

    io.bb_setbits(BB_TX_PATH, 0xf0, 0x10)?;
    io.bb_setbits(BB_CCK_RX_PATH, 0x0f00_0000, 0x0100_0000)?;
    io.setbits32(RRSR, RRSR_RATE_BITMAP_M, RRSR_BASIC_2GHZ)?;
    io.write8(CCK_CHECK, 0)
}

pub fn set_band_5ghz(io: &Io, rom: &RomInfo) -> Result {
    io.write8(CCK_CHECK, CCK_CHECK_5GHZ)?;
    wait_txpkt_empty(io);

    io.bb_setbits(BB_OFDMCCK_EN, BB_OFDMCCK_EN_CCK, BB_OFDMCCK_EN_OFDM)?;
    io.bb_setbits(BB_BW_INDICATION, 0x01, 0x02)?;
    io.bb_setbits(BB_PWED_TH, 0x3e000, 0x2a000)?;
    io.bb_setbits(BB_AGC_TABLE, 0x03, 0x01)?;

    let rfe = match rom.rfe_type {
        0 => Some((0x7733_7717, 0x0100_0000)),
        1 => Some((0x7733_7717, 0)),
        2 | 4 => Some((0x7733_7777, 0x0100_0000)),
        3 => Some((0x5433_7717, 0x0100_0000)),
        _ => None,
    };
    if let Some((pinmux, inv)) = rfe {
        for chain in 0..2 {
            rfe_write(io, chain, pinmux, inv)?;
        }
    }
    match rom.rfe_type {
        3 => io.bb_setbits(BB_ANTSEL_SW, 0x0303, 0x01)?,
        5 => {
            io.write8(bb_rfe_pinmux(0) + 2, 0x33)?;
            io.bb_write(bb_rfe_pinmux(1), 0x7733_7777)?;
            io.setbits8(bb_rfe_inv(0) + 3, 0, 0x01)?;
            io.bb_setbits(bb_rfe_inv(1), BB_RFE_INV_M, 0x0100_0000)?;
        }
        _ => {}
    }

    io.bb_setbits(BB_TX_PATH, 0xf0, 0)?;
    io.bb_setbits(BB_CCK_RX_PATH, 0, 0x0f00_0000)?;
    io.setbits32(RRSR, RRSR_RATE_BITMAP_M, RRSR_BASIC_5GHZ)
}

/// 等待 TX 包缓冲排空，超时只告警
pub(crate) fn wait_txpkt_empty(io: &Io) {
    if !io.poll(100, 25, |io| io.read16(TXPKT_EMPTY) & 0x30 == 0x30) {
        warn!("TXPKT_EMPTY check failed ({:#06x})", io.read16(TXPKT_EMPTY));
    }
}

/// CCK 帧的 RSSI，由 LNA/VGA 索引分段计算
pub fn rssi_cck(cfosho0: u8, cck_hipwr: bool) -> i8 {
    let lna = (cfosho0 & 0xe0) >> 5;
    let vga = (cfosho0 & 0x1f) as i8;
    let mut pwdb = 6 - 2 * vga;

    match lna {
        7 => {
            if vga > 27 {
                pwdb = -100 + 6;
            } else {
                pwdb += -100 + 2 * 27;
            }
        }
        6 => pwdb += -48 + 2 * 2,
        5 => pwdb += -42 + 2 * 7,
        4 => pwdb += -36 + 2 * 7,
        3 => pwdb += -24 + 2 * 7,
        2 => {
            pwdb += -6 + 2 * 5;
            if cck_hipwr {
                pwdb -= 6;
            }
        }
        1 => pwdb += 8,
        _ => pwdb += 14,
    }
    pwdb
}

pub fn parse_rom(info: &mut RomInfo, rom: &[u8]) {
    let pa_type = rom_var(rom[ROM_PA_TYPE], 0);
    let lna_2g = rom_var(rom[ROM_LNA_TYPE_2G], 0);
    let lna_5g = rom_var(rom[ROM_LNA_TYPE_5G], 0);

    info.ext_pa_2g = pa_type & 0x30 == 0x30;
    info.ext_pa_5g = pa_type & 0x03 == 0x03;
    info.ext_lna_2g = lna_2g & 0x08 != 0;
    info.ext_lna_5g = lna_5g & 0x08 != 0;
    info.bt_coex = (rom[ROM_RF_BOARD_OPT] & 0xe0) >> 5 == super::BOARD_TYPE_HIGHPA;
    info.bt_ant_num = rom[ROM_RF_BT_OPT] & 0x01;

    let pa_bits = |l: u8| ((l >> 2) & 1) | (((l >> 6) & 1) << 2);
    let lna_bits = |l: u8| (l & 3) | (((l >> 4) & 3) << 2);
    if info.ext_pa_2g {
        info.type_pa_2g = pa_bits(lna_2g);
    }
    if info.ext_pa_5g {
        info.type_pa_5g = pa_bits(lna_5g);
    }
    if info.ext_lna_2g {
        info.type_lna_2g = lna_bits(lna_2g);
    }
    if info.ext_lna_5g {
        info.type_lna_5g = lna_bits(lna_5g);
    }

    let rfe_option = rom[ROM_RFE_OPTION];
    info.rfe_type = if rfe_option & 0x80 != 0 {
        match (info.ext_lna_5g, info.ext_pa_5g) {
            (false, _) => 4,
            (true, false) => 2,
            (true, true) if info.ext_pa_2g && info.ext_lna_2g => 3,
            (true, true) => 0,
        }
    } else {
        let t = rfe_option & 0x3f;
        // EFUSE 映射错误的板子
        if t == 4 && info.ext_pa_2g && info.ext_lna_2g && info.ext_pa_5g && info.ext_lna_5g {
            0
        } else {
            t
        }
    };
    trace!(
        "ext PA/LNA {}/{} (2 GHz) {}/{} (5 GHz), rfe type {}",
        info.ext_pa_2g, info.ext_lna_2g, info.ext_pa_5g, info.ext_lna_5g, info.rfe_type
    );

    info.macaddr.copy_from_slice(&rom[ROM_MACADDR..ROM_MACADDR + 6]);
}
