//! EFuse 读取与 ROM 映像解析
//!
//! EFuse 按字节轮询读取，内容是带头部的稀疏编码：每个头部给出 8 字节
//! 块的偏移与一个 4 位掩码，掩码中为 0 的位对应的 2 字节字跟在头部之后。

use log::{debug, error, trace};

use crate::{
    chip::Chip,
    err::{Error, Result},
    io::{Io, field},
    reg::*,
};

pub const ROM_SIZE: usize = EFUSE_MAX_LEN as usize;

pub const MAX_GROUP_2G: usize = 6;
pub const MAX_GROUP_5G: usize = 14;
pub const MAX_TX_COUNT: usize = 4;
pub const MAX_CHAINS: usize = 2;

const DEF_TX_PWR_2G: u8 = 0x2d;
const DEF_TX_PWR_5G: u8 = 0xfe;
const CRYSTALCAP_DEF: u8 = 0x20;

// ROM 映像中的字段偏移
const ROM_TX_PWR: usize = 16;
const ROM_TX_PWR_LEN: usize = 42;
pub(crate) const ROM_CRYSTALCAP: usize = 185;
pub(crate) const ROM_THERMAL_METER: usize = 186;
pub(crate) const ROM_PA_TYPE: usize = 188;
pub(crate) const ROM_LNA_TYPE_2G: usize = 189;
pub(crate) const ROM_LNA_TYPE_5G: usize = 191;
pub(crate) const ROM_RF_BOARD_OPT: usize = 193;
pub(crate) const ROM_RF_BT_OPT: usize = 195;
pub(crate) const ROM_TX_BBSWING_2G: usize = 198;
pub(crate) const ROM_TX_BBSWING_5G: usize = 199;
pub(crate) const ROM_RFE_OPTION: usize = 202;

// 单条通路功率表内的偏移
const PWR_CCK: usize = 0;
const PWR_HT40_2G: usize = 6;
const PWR_HT20_OFDM_2G: usize = 11;
const PWR_DIFF123_2G: usize = 12;
const PWR_HT40_5G: usize = 18;
const PWR_HT20_OFDM_5G: usize = 32;
const PWR_HT40_HT20_5G: usize = 33;
const PWR_OFDM_OFDM_5G: usize = 36;
const PWR_HT80_HT160_5G: usize = 38;

/// 0xff 表示未烧写
pub(crate) fn rom_var(v: u8, def: u8) -> u8 {
    if v != 0xff { v } else { def }
}

/// 4 位有符号数扩展为 8 位
fn sign4(v: u8) -> i8 {
    (if v & 0x08 != 0 { v | 0xf0 } else { v }) as i8
}

fn low(v: u8) -> i8 {
    sign4(v & 0x0f)
}

fn high(v: u8) -> i8 {
    sign4(v >> 4)
}

/// 每条发射通路的功率基准与差值
#[derive(Debug, Clone, Default)]
pub struct TxPower {
    pub cck: [[u8; MAX_GROUP_2G]; MAX_CHAINS],
    pub ht40_2g: [[u8; MAX_GROUP_2G]; MAX_CHAINS],
    pub ht40_5g: [[u8; MAX_GROUP_5G]; MAX_CHAINS],

    pub cck_diff_2g: [[i8; MAX_TX_COUNT]; MAX_CHAINS],
    pub ofdm_diff_2g: [[i8; MAX_TX_COUNT]; MAX_CHAINS],
    pub bw20_diff_2g: [[i8; MAX_TX_COUNT]; MAX_CHAINS],
    pub bw40_diff_2g: [[i8; MAX_TX_COUNT]; MAX_CHAINS],

    pub ofdm_diff_5g: [[i8; MAX_TX_COUNT]; MAX_CHAINS],
    pub bw20_diff_5g: [[i8; MAX_TX_COUNT]; MAX_CHAINS],
    pub bw40_diff_5g: [[i8; MAX_TX_COUNT]; MAX_CHAINS],
    pub bw80_diff_5g: [[i8; MAX_TX_COUNT]; MAX_CHAINS],
    pub bw160_diff_5g: [[i8; MAX_TX_COUNT]; MAX_CHAINS],
}

/// 解析后的 ROM 信息
#[derive(Debug, Clone, Default)]
pub struct RomInfo {
    pub crystalcap: u8,
    pub thermal_meter: u8,
    pub bbswing_2g: u8,
    pub bbswing_5g: u8,
    pub regulatory: u8,
    pub board_type: u8,

    pub ext_pa_2g: bool,
    pub ext_pa_5g: bool,
    pub ext_lna_2g: bool,
    pub ext_lna_5g: bool,
    pub type_pa_2g: u8,
    pub type_pa_5g: u8,
    pub type_lna_2g: u8,
    pub type_lna_5g: u8,
    pub rfe_type: u8,

    pub bt_coex: bool,
    pub bt_ant_num: u8,

    pub macaddr: [u8; 6],
    pub txpwr: TxPower,
}

impl RomInfo {
    /// 解析 ROM 映像；`bt_func` 只对 RTL8821AU 有意义
    pub fn parse(chip: &Chip, rom: &[u8; ROM_SIZE], bt_func: bool) -> Self {
        let mut info = RomInfo {
            crystalcap: rom_var(rom[ROM_CRYSTALCAP], CRYSTALCAP_DEF),
            thermal_meter: rom[ROM_THERMAL_METER],
            bbswing_2g: rom_var(rom[ROM_TX_BBSWING_2G], 0),
            bbswing_5g: rom_var(rom[ROM_TX_BBSWING_5G], 0),
            ..Default::default()
        };

        for chain in 0..chip.ntxchains() {
            let base = ROM_TX_PWR + chain * ROM_TX_PWR_LEN;
            parse_tx_power(&mut info.txpwr, chain, &rom[base..base + ROM_TX_PWR_LEN]);
        }

        let board = rom[ROM_RF_BOARD_OPT];
        info.regulatory = board & 0x07;
        info.board_type = (rom_var(board, 0) & 0xe0) >> 5;
        debug!("regulatory type {}, board type {}", info.regulatory, info.board_type);

        chip.parse_rom_specific(&mut info, rom, bt_func);
        info
    }
}

fn parse_tx_power(p: &mut TxPower, i: usize, pwr: &[u8]) {
    for j in 0..MAX_GROUP_2G - 1 {
        p.cck[i][j] = rom_var(pwr[PWR_CCK + j], DEF_TX_PWR_2G);
        p.ht40_2g[i][j] = rom_var(pwr[PWR_HT40_2G + j], DEF_TX_PWR_2G);
    }
    p.cck[i][MAX_GROUP_2G - 1] = rom_var(pwr[PWR_CCK + MAX_GROUP_2G - 1], DEF_TX_PWR_2G);

    let ht20_ofdm = pwr[PWR_HT20_OFDM_2G];
    p.cck_diff_2g[i][0] = 0;
    p.ofdm_diff_2g[i][0] = low(ht20_ofdm);
    p.bw20_diff_2g[i][0] = high(ht20_ofdm);
    p.bw40_diff_2g[i][0] = 0;
    // diff123 共 3 项，第 0 项不使用
    for j in 1..MAX_TX_COUNT - 1 {
        let ht40_ht20 = pwr[PWR_DIFF123_2G + 2 * j];
        let ofdm_cck = pwr[PWR_DIFF123_2G + 2 * j + 1];
        p.cck_diff_2g[i][j] = low(ofdm_cck);
        p.ofdm_diff_2g[i][j] = high(ofdm_cck);
        p.bw20_diff_2g[i][j] = low(ht40_ht20);
        p.bw40_diff_2g[i][j] = high(ht40_ht20);
    }

    for j in 0..MAX_GROUP_5G {
        p.ht40_5g[i][j] = rom_var(pwr[PWR_HT40_5G + j], DEF_TX_PWR_5G);
    }

    let ht20_ofdm = pwr[PWR_HT20_OFDM_5G];
    let ofdm_ofdm = &pwr[PWR_OFDM_OFDM_5G..PWR_OFDM_OFDM_5G + 2];
    p.ofdm_diff_5g[i][0] = low(ht20_ofdm);
    p.ofdm_diff_5g[i][1] = high(ofdm_ofdm[0]);
    p.ofdm_diff_5g[i][2] = low(ofdm_ofdm[0]);
    p.ofdm_diff_5g[i][3] = low(ofdm_ofdm[1]);
    p.bw20_diff_5g[i][0] = high(ht20_ofdm);
    p.bw40_diff_5g[i][0] = 0;
    for j in 1..MAX_TX_COUNT - 1 {
        let v = pwr[PWR_HT40_HT20_5G + j];
        p.bw20_diff_5g[i][j] = low(v);
        p.bw40_diff_5g[i][j] = high(v);
    }
    for j in 0..MAX_TX_COUNT {
        let v = pwr[PWR_HT80_HT160_5G + j];
        p.bw80_diff_5g[i][j] = high(v);
        p.bw160_diff_5g[i][j] = low(v);
    }
}

/// 打开 EFuse 访问与时钟
pub(crate) fn efuse_switch_power(io: &Io) -> Result {
    io.write8(EFUSE_ACCESS, EFUSE_ACCESS_ON)?;

    let reg = io.read16(SYS_FUNC_EN);
    if reg & SYS_FUNC_EN_ELDR == 0 {
        io.write16(SYS_FUNC_EN, reg | SYS_FUNC_EN_ELDR)?;
    }
    let want = SYS_CLKR_LOADER_EN | SYS_CLKR_ANA8M;
    let reg = io.read16(SYS_CLKR);
    if reg & want != want {
        io.write16(SYS_CLKR, reg | want)?;
    }
    Ok(())
}

/// EFuse 顺序读取器
struct EfuseReader<'a> {
    io: &'a Io,
    addr: u16,
}

impl EfuseReader<'_> {
    fn next(&mut self) -> Result<u8> {
        if self.addr >= EFUSE_MAX_LEN {
            return Err(Error::RomReadFailed);
        }
        let reg = self.io.read32(EFUSE_CTRL);
        let reg = (reg & !EFUSE_CTRL_ADDR_M) | field(EFUSE_CTRL_ADDR_M, self.addr as u32);
        self.io.write32(EFUSE_CTRL, reg & !EFUSE_CTRL_VALID)?;

        let mut data = 0;
        let ok = self.io.poll(100, 1000, |io| {
            let reg = io.read32(EFUSE_CTRL);
            data = (reg & EFUSE_CTRL_DATA_M) as u8;
            reg & EFUSE_CTRL_VALID != 0
        });
        if !ok {
            error!("could not read efuse byte at address {:#x}", self.addr);
            return Err(Error::Timeout);
        }
        self.addr += 1;
        Ok(data)
    }
}

/// 解码 EFuse 字节流到 `rom`
///
/// 头部低 5 位为 0x0f 时为扩展头，偏移的高位在下一个字节中；
/// 若下一个字节的低 4 位仍为 0x0f，该头部作废，从该字节重新解析。
pub(crate) fn decode_efuse(
    rom: &mut [u8; ROM_SIZE],
    mut next: impl FnMut() -> Result<u8>,
) -> Result {
    rom.fill(0xff);

    let mut reg = next()?;
    while reg != 0xff {
        let off;
        if reg & 0x1f == 0x0f {
            let lo = reg >> 5;
            reg = next()?;
            if reg & 0x0f == 0x0f {
                continue;
            }
            off = ((reg & 0xf0) >> 1) | lo;
        } else {
            off = reg >> 4;
        }

        let msk = reg & 0x0f;
        for i in 0..4 {
            if msk & (1 << i) != 0 {
                continue;
            }
            for b in 0..2 {
                let data = next()?;
                let pos = off as usize * 8 + i * 2 + b;
                match rom.get_mut(pos) {
                    Some(slot) => {
                        trace!("rom[{pos:#05x}] = {data:#04x}");
                        *slot = data;
                    }
                    None => trace!("efuse data past end of map at {pos:#x}"),
                }
            }
        }
        reg = next()?;
    }
    Ok(())
}

/// 读取整个 EFuse 映射，结束后总是关闭 EFuse 访问
pub(crate) fn efuse_read(io: &Io) -> Result<[u8; ROM_SIZE]> {
    let mut rom = [0xffu8; ROM_SIZE];
    let res = efuse_switch_power(io).and_then(|_| {
        let mut reader = EfuseReader { io, addr: 0 };
        decode_efuse(&mut rom, || reader.next())
    });
    let _ = io.write8(EFUSE_ACCESS, EFUSE_ACCESS_OFF);
    match res {
        Ok(()) => Ok(rom),
        Err(e) => {
            error!("error while reading ROM: {e}");
            Err(Error::RomReadFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chip::ChipKind;
    use alloc::{sync::Arc, vec, vec::Vec};

    fn script(bytes: Vec<u8>) -> impl FnMut() -> Result<u8> {
        let mut it = bytes.into_iter();
        move || it.next().ok_or(Error::RomReadFailed)
    }

    #[test]
    fn decode_plain_and_extended_headers() {
        let mut rom = [0u8; ROM_SIZE];
        let stream = vec![
            // 块 1，掩码 0b1110：只有第 0 个字
            0x1e, 0xaa, 0xbb,
            // 扩展头：低位 2，高位 (0x30 >> 1) = 0x18，块 0x1a，掩码 0b1100
            0x4f, 0x3c, 0x01, 0x02, 0x03, 0x04,
            0xff,
        ];
        decode_efuse(&mut rom, script(stream)).unwrap();

        assert_eq!(&rom[8..10], &[0xaa, 0xbb]);
        assert_eq!(rom[10], 0xff);
        let base = 0x1a * 8;
        assert_eq!(&rom[base..base + 4], &[1, 2, 3, 4]);
        assert_eq!(rom[base + 4], 0xff);
        assert_eq!(rom.iter().filter(|&&b| b != 0xff).count(), 6);
    }

    #[test]
    fn invalid_extended_header_restarts_parse() {
        let mut rom = [0u8; ROM_SIZE];
        // 0x0f 后跟 0x2f：低 4 位仍为 0x0f，0x2f 重新作为头部
        // 0x2f & 0x1f == 0x0f，继续作为扩展头，下一字节 0x0e
        let stream = vec![0x0f, 0x2f, 0x0e, 0x11, 0x22, 0xff];
        decode_efuse(&mut rom, script(stream)).unwrap();
        assert_eq!(&rom[8..10], &[0x11, 0x22]);
    }

    #[test]
    fn truncated_stream_fails() {
        let mut rom = [0u8; ROM_SIZE];
        assert!(decode_efuse(&mut rom, script(vec![0x1e, 0xaa])).is_err());
    }

    #[test]
    fn sign_extension() {
        assert_eq!(low(0x0f), -1);
        assert_eq!(high(0x80), -8);
        assert_eq!(low(0x07), 7);
        assert_eq!(high(0x7f), 7);
    }

    #[test]
    fn parse_defaults_and_power() {
        let chip = Chip::new(ChipKind::Rtl8821au);
        let mut raw = [0xffu8; ROM_SIZE];
        raw[ROM_TX_PWR + PWR_CCK] = 0x20;
        raw[ROM_TX_PWR + PWR_HT20_OFDM_2G] = 0xf2;
        raw[ROM_TX_PWR + PWR_HT40_5G + 3] = 0x28;
        raw[ROM_RF_BOARD_OPT] = 0x41;

        let info = RomInfo::parse(&chip, &raw, false);
        assert_eq!(info.crystalcap, CRYSTALCAP_DEF);
        assert_eq!(info.txpwr.cck[0][0], 0x20);
        assert_eq!(info.txpwr.cck[0][1], DEF_TX_PWR_2G);
        assert_eq!(info.txpwr.ofdm_diff_2g[0][0], 2);
        assert_eq!(info.txpwr.bw20_diff_2g[0][0], -1);
        assert_eq!(info.txpwr.ht40_5g[0][3], 0x28);
        assert_eq!(info.txpwr.ht40_5g[0][0], DEF_TX_PWR_5G);
        assert_eq!(info.regulatory, 1);
        assert_eq!(info.board_type, 2);
    }

    #[test]
    fn efuse_read_gives_up_and_closes_access() {
        use crate::io::tests::{RegFile, io_with};

        // 寄存器文件不会置位 VALID
        let regs = Arc::new(RegFile::default());
        let io = io_with(regs.clone());
        assert_eq!(efuse_read(&io), Err(Error::RomReadFailed));
        assert_eq!(regs.get32(EFUSE_ACCESS) & 0xff, EFUSE_ACCESS_OFF as u32);
        assert_ne!(regs.get32(SYS_FUNC_EN) as u16 & SYS_FUNC_EN_ELDR, 0);
    }
}
