//! RTL8821AU 专有操作

use log::{error, warn};

use super::{Chip, r12a::wait_txpkt_empty};
use crate::{
    err::{Error, Result},
    io::Io,
    reg::*,
    rom::{
        ROM_LNA_TYPE_2G, ROM_LNA_TYPE_5G, ROM_PA_TYPE, ROM_RF_BT_OPT, RomInfo, rom_var,
    },
    table::cond21,
};

pub const RSV_CTRL2_FW_RESET: u8 = 0x01;
pub const MAC_PHY_CRYSTALCAP_M: u32 = 0x00ff_f000;

const RFE_PINMUX_LNA_M: u32 = 0x0000_f000;
const RFE_PINMUX_PA_A_M: u32 = 0x0000_00f0;

const ROM_MACADDR: usize = 263;

pub fn check_condition(rom: &RomInfo, cond: &[u8; 3]) -> bool {
    if cond[0] == 0 {
        return true;
    }

    let mut mask = 0;
    if rom.ext_pa_5g {
        mask |= cond21::EXT_PA_5G;
    }
    if rom.ext_lna_5g {
        mask |= cond21::EXT_LNA_5G;
    }
    if rom.bt_coex {
        mask |= cond21::BT;
    }
    if !rom.ext_pa_2g && !rom.ext_lna_2g && !rom.ext_pa_5g && !rom.ext_lna_5g && !rom.bt_coex {
        mask = cond21::BOARD_DEF;
    }
    if mask == 0 {
        return false;
    }

    cond.iter().take_while(|&&c| c != 0).any(|&c| c == mask)
}

pub fn power_on(io: &Io) -> Result {
    io.setbits8_shift(APS_FSMCO, APS_FSMCO_AFSM_HSUS | APS_FSMCO_APDM_HPDN, 0, 1)?;
    io.setbits8(GPIO_INTM + 2, 0x01, 0)?;
    io.setbits8_shift(APS_FSMCO, APS_FSMCO_AFSM_HSUS | APS_FSMCO_AFSM_PCIE, 0, 1)?;
    io.setbits8(LDOA15_CTRL, 0, LDOA15_CTRL_EN)?;
    io.setbits8(BT_COEX, 0x10, 0)?;
    io.delay(1000);
    io.setbits8(SYS_ISO_CTRL, SYS_ISO_CTRL_IP2MAC, 0)?;

    io.setbits8_shift(
        APS_FSMCO,
        APS_FSMCO_APFM_RSM | APS_FSMCO_AFSM_HSUS | APS_FSMCO_AFSM_PCIE,
        0,
        1,
    )?;
    if !io.poll(5000, 10, |io| io.read32(APS_FSMCO) & APS_FSMCO_SUS_HOST != 0) {
        error!("timeout waiting for chip power up");
        return Err(Error::Timeout);
    }

    io.setbits8_shift(APS_FSMCO, 0, APS_FSMCO_RDY_MACON, 2)?;
    io.setbits8_shift(APS_FSMCO, APS_FSMCO_APDM_HPDN, 0, 1)?;
    io.setbits8_shift(APS_FSMCO, APS_FSMCO_AFSM_HSUS | APS_FSMCO_AFSM_PCIE, 0, 1)?;

    io.setbits8_shift(APS_FSMCO, 0, APS_FSMCO_APFM_ONMAC, 1)?;
    if !io.poll(5000, 10, |io| {
        io.read16(APS_FSMCO) as u32 & APS_FSMCO_APFM_ONMAC == 0
    }) {
        return Err(Error::Timeout);
    }

    // GPIO 与 BT 相关的固定设置
    io.setbits8(LEDCFG3, 0, 0x01)?;
    io.setbits8(BT_COEX, 0, 0x30)?;
    io.setbits8(PWR_LDO, 0x40, 0)?;
    io.setbits8(GPIO_INTM + 1, 0, 0x02)?;
    io.setbits8(0x063, 0, 0x02)?;
    io.setbits8(0x062, 0x02, 0)?;
    io.setbits8(HSIMR, 0, 0x01)?;
    io.setbits8(HSIMR + 2, 0, 0x02)?;
    io.setbits8(MAC_PHY_CTRL + 2, 0xff, 0x82)?;
    io.setbits8(AFE_MISC, 0, 0x40)?;

    io.write16(CR, 0)?;
    io.setbits16(CR, 0, CR_POWER_ON)?;

    if io.read32(SYS_CFG) & SYS_CFG_TRP_BT_EN != 0 {
        io.setbits8(RSV_MAC_PWR, 0, 0x40)?;
    }
    Ok(())
}

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

    io.write8(RF_CTRL, 0)?;
    io.setbits8(LEDCFG3, 0x01, 0)?;
    io.setbits8(GPIO_INTM + 1, 0x02, 0)?;
    io.setbits8_shift(APS_FSMCO, 0, APS_FSMCO_RDY_MACON, 2)?;

    io.setbits8_shift(APS_FSMCO, 0, APS_FSMCO_APFM_OFF, 1)?;
    if !io.poll(5000, 10, |io| {
        io.read16(APS_FSMCO) as u32 & APS_FSMCO_APFM_OFF == 0
    }) {
        error!("could not turn off MAC");
        return Ok(());
    }

    io.setbits8(SYS_ISO_CTRL, 0, SYS_ISO_CTRL_IP2MAC)?;
    io.setbits8(LDOA15_CTRL, LDOA15_CTRL_EN, 0)?;
    io.setbits8_shift(APS_FSMCO, APS_FSMCO_AFSM_PCIE, APS_FSMCO_AFSM_HSUS, 1)?;
    // GPIO9 作为外部唤醒
    io.setbits8(GPIO_INTM + 2, 0, 0x01)
}

fn bypass_ext_lna_2ghz(io: &Io) -> Result {
    io.bb_setbits(bb_rfe_inv(0), 0x0010_0000, 0)?;
    io.bb_setbits(bb_rfe_inv(0), 0x0040_0000, 0)?;
    io.bb_setbits(bb_rfe_pinmux(0), 0, 0x07)?;
    io.bb_setbits(bb_rfe_pinmux(0), 0, 0x0700)
}

pub fn set_band_2ghz(io: &Io, rom: &RomInfo) -> Result {
    io.bb_setbits(BB_OFDMCCK_EN, 0, BB_OFDMCCK_EN_CCK | BB_OFDMCCK_EN_OFDM)?;

    // 关闭 PA 与 LNA
    io.bb_setbits(bb_rfe_pinmux(0), RFE_PINMUX_LNA_M, 0x7000)?;
    io.bb_setbits(bb_rfe_pinmux(0), RFE_PINMUX_PA_A_M, 0x70)?;

    if rom.ext_lna_2g {
        io.bb_setbits(bb_rfe_inv(0), 0, 0x0010_0000)?;
        io.bb_setbits(bb_rfe_inv(0), 0x0040_0000, 0)?;
        io.bb_setbits(bb_rfe_pinmux(0), 0x05, 0x02)?;
        io.bb_setbits(bb_rfe_pinmux(0), 0x0500, 0x0200)?;
    } else {
        bypass_ext_lna_2ghz(io)?;
    }

    io.bb_setbits(bb_tx_scale(0), 0x0f00, 0)?;
    io.bb_setbits(BB_TX_PATH, 0xf0, 0x10)?;
    io.bb_setbits(BB_CCK_RX_PATH, 0x0f00_0000, 0x0100_0000)?;
    io.setbits32(RRSR, RRSR_RATE_BITMAP_M, RRSR_BASIC_2GHZ)?;
    io.write8(CCK_CHECK, 0)
}

pub fn set_band_5ghz(io: &Io, rom: &RomInfo) -> Result {
    io.bb_setbits(bb_rfe_pinmux(0), RFE_PINMUX_LNA_M, 0x5000)?;
    io.bb_setbits(bb_rfe_pinmux(0), RFE_PINMUX_PA_A_M, 0x40)?;
    if rom.ext_lna_2g {
        bypass_ext_lna_2ghz(io)?;
    }

    io.write8(CCK_CHECK, CCK_CHECK_5GHZ)?;
    wait_txpkt_empty(io);

    io.bb_setbits(BB_OFDMCCK_EN, BB_OFDMCCK_EN_CCK, BB_OFDMCCK_EN_OFDM)?;
    io.bb_setbits(bb_tx_scale(0), 0x0f00, 0x0100)?;
    io.bb_setbits(BB_TX_PATH, 0xf0, 0)?;
    io.bb_setbits(BB_CCK_RX_PATH, 0, 0x0f00_0000)?;
    io.setbits32(RRSR, RRSR_RATE_BITMAP_M, RRSR_BASIC_5GHZ)
}

pub fn rssi_cck(cfosho0: u8) -> i8 {
    let lna = (cfosho0 & 0xe0) >> 5;
    let mut pwdb = -6 - 2 * (cfosho0 & 0x1f) as i8;
    match lna {
        5 => pwdb -= 32,
        4 => pwdb -= 24,
        2 => pwdb -= 11,
        1 => pwdb += 5,
        0 => pwdb += 21,
        _ => {}
    }
    pwdb
}

/// `bt_func` 为 MULTI_FUNC_CTRL 中的 BT 使能位
pub fn parse_rom(info: &mut RomInfo, rom: &[u8], bt_func: bool) {
    let pa_type = rom_var(rom[ROM_PA_TYPE], 0);
    let lna_2g = rom_var(rom[ROM_LNA_TYPE_2G], 0);
    let lna_5g = rom_var(rom[ROM_LNA_TYPE_5G], 0);

    info.ext_pa_2g = pa_type & 0x10 != 0;
    info.ext_pa_5g = pa_type & 0x01 != 0;
    info.ext_lna_2g = lna_2g & 0x08 != 0;
    info.ext_lna_5g = lna_5g & 0x08 != 0;
    info.bt_coex = bt_func;
    info.bt_ant_num = rom[ROM_RF_BT_OPT] & 0x01;

    info.macaddr.copy_from_slice(&rom[ROM_MACADDR..ROM_MACADDR + 6]);
}
