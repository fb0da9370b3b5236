//! 固件下载与主机到固件（H2C）命令
//!
//! 命令通过 4 个轮转的邮箱寄存器发送，每个邮箱 4 字节，命令超过 3 字节
//! 时先写扩展邮箱。主邮箱的写入触发固件，所以最后写。

use core::time::Duration;

use log::{debug, info, warn};

use crate::{
    device::{Flags, Softc},
    err::{Error, Result},
    frame::{
        FLAGS0_FSG, FLAGS0_LSG, FLAGS0_OWN, QSEL_MGNT, TX_DESC_LEN, TXDW1_QSEL_M,
        TXDW3_DRVRATE, TXDW4_DATARATE_M, TXDW8_HWSEQ_EN, TxDesc, wh,
    },
    io::{Io, field},
    net::{OpMode, PhyMode, State},
    osal::Work,
    rate::{RIDX_CCK1, RIDX_OFDM6},
    reg::*,
    xfer::Pipe,
};

/// 固件镜像头
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FwHeader {
    pub signature: u16,
    pub version: u16,
    pub subversion: u16,
    pub month: u8,
    pub date: u8,
    pub hour: u8,
    pub minute: u8,
}

impl FwHeader {
    pub fn parse(image: &[u8]) -> Option<Self> {
        let b = image.get(..FW_HEADER_SIZE)?;
        Some(Self {
            signature: u16::from_le_bytes([b[0], b[1]]),
            version: u16::from_le_bytes([b[4], b[5]]),
            subversion: u16::from_le_bytes([b[6], b[7]]),
            month: b[8],
            date: b[9],
            hour: b[10],
            minute: b[11],
        })
    }

    pub fn matches(&self, fw_sig: u16) -> bool {
        self.signature >> 4 == fw_sig
    }
}

/// 校验镜像长度并拆出固件版本与去掉头部后的代码
///
/// 签名不匹配时整个镜像都是代码，版本为 0。
pub fn split_image(image: &[u8], fw_sig: u16) -> Result<(u16, &[u8])> {
    if image.len() < FW_HEADER_SIZE || image.len() > FW_MAX_SIZE {
        warn!("wrong firmware size ({})", image.len());
        return Err(Error::Firmware("wrong firmware size"));
    }
    match FwHeader::parse(image) {
        Some(hdr) if hdr.matches(fw_sig) => {
            debug!(
                "FW V{}.{} {:02}-{:02} {:02}:{:02}",
                hdr.version, hdr.subversion, hdr.month, hdr.date, hdr.hour, hdr.minute
            );
            Ok((hdr.version, &image[FW_HEADER_SIZE..]))
        }
        _ => Ok((0, image)),
    }
}

fn load_page(io: &Io, page: usize, mut data: &[u8]) -> Result {
    let reg = io.read32(MCUFWDL);
    io.write32(
        MCUFWDL,
        (reg & !MCUFWDL_PAGE_M) | field(MCUFWDL_PAGE_M, page as u32),
    )?;

    let mut off = FW_START_ADDR;
    while !data.is_empty() {
        let mlen = if data.len() > FW_MAX_BLOCK_SIZE {
            FW_MAX_BLOCK_SIZE
        } else if data.len() > 4 {
            4
        } else {
            1
        };
        io.write_region(off, &data[..mlen])?;
        off += mlen as u16;
        data = &data[mlen..];
    }
    Ok(())
}

fn checksum_report(io: &Io) -> bool {
    io.poll(25, 10_000, |io| io.read32(MCUFWDL) & MCUFWDL_CHKSUM_RPT != 0)
}

/// 分页上传固件代码，返回固件版本
pub(crate) fn load_firmware(sc: &Softc, image: &[u8]) -> Result<u16> {
    let p = sc.chip.params();
    let io = &sc.io;
    let (version, code) = split_image(image, p.fw_sig)?;

    if io.read8(MCUFWDL) & MCUFWDL_RAM_DL_SEL as u8 != 0 {
        io.write8(MCUFWDL, 0)?;
        sc.chip.fw_reset(io)?;
    }

    io.setbits8(MCUFWDL, 0, MCUFWDL_EN as u8)?;
    // 8051 复位
    io.setbits8_shift(MCUFWDL, MCUFWDL_ROM_DLEN, 0, 2)?;

    let mut verified = false;
    for ntries in 0..3 {
        io.setbits8(MCUFWDL, 0, MCUFWDL_CHKSUM_RPT as u8)?;
        for (page, chunk) in code.chunks(FW_PAGE_SIZE).enumerate() {
            if let Err(e) = load_page(io, page, chunk) {
                debug!("could not load firmware page {page} (try {ntries}): {e}");
            }
        }
        if checksum_report(io) {
            verified = true;
            break;
        }
        debug!("timeout waiting for checksum report (try {ntries})");
    }
    if !verified {
        warn!("firmware checksum was not reported");
    }

    io.setbits8(MCUFWDL, MCUFWDL_EN as u8, 0)?;
    io.setbits32(MCUFWDL, MCUFWDL_WINTINI_RDY, MCUFWDL_RDY)?;
    sc.chip.fw_reset(io)?;

    if !io.poll(20, 10_000, |io| io.read32(MCUFWDL) & MCUFWDL_WINTINI_RDY != 0) {
        warn!("timeout waiting for firmware readiness");
        return Err(Error::Timeout);
    }
    info!("{}: firmware {} loaded", p.name, p.fw_name);
    Ok(version)
}

/// 邮箱轮转状态
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct H2c {
    pub cur: usize,
}

impl H2c {
    pub fn send(&mut self, io: &Io, id: u8, msg: &[u8]) -> Result {
        if msg.len() > H2C_MSG_LEN {
            return Err(Error::InvalidArgument);
        }
        let box_bit = 1u8 << self.cur;
        if !io.poll(100, 2000, |io| io.read8(HMETFR) & box_bit == 0) {
            warn!("could not send firmware command {id:#x}");
            return Err(Error::Timeout);
        }

        let mut cmd = [0u8; 1 + H2C_MSG_LEN];
        cmd[0] = id;
        cmd[1..1 + msg.len()].copy_from_slice(msg);
        if msg.len() > 3 {
            io.write32(
                hmebox_ext(self.cur),
                u32::from_le_bytes([cmd[4], cmd[5], cmd[6], cmd[7]]),
            )?;
        }
        io.write32(
            hmebox(self.cur),
            u32::from_le_bytes([cmd[0], cmd[1], cmd[2], cmd[3]]),
        )?;
        self.cur = (self.cur + 1) % H2C_NBOX;
        Ok(())
    }
}

pub fn msrrpt(macid: u8) -> [u8; 3] {
    let b0 = if macid & MACID_VALID != 0 {
        MSRRPT_B0_ASSOC
    } else {
        MSRRPT_B0_DISASSOC
    };
    [b0, macid & !MACID_VALID, 0]
}

pub fn pwrmode(enable: bool) -> [u8; 6] {
    let (mode, state) = if enable {
        (PWRMODE_LEG, PWRMODE_STATE_RFON)
    } else {
        (PWRMODE_CAM, PWRMODE_STATE_ALLON)
    };
    let b1 = field(PWRMODE_B1_SMART_PS_M as u32, PWRMODE_B1_LEG_NULLDATA as u32)
        | field(PWRMODE_B1_RLBM_M as u32, PWRMODE_B1_MODE_MIN as u32);
    [mode, b1 as u8, 0, 0, state, PWRMODE_B5_NO_BTCOEX]
}

/// IQ 校准命令：信道号、频段与带宽、5 GHz 外置 PA/LNA
pub fn iq_calib(chan: u8, on_5ghz: bool, ht40: bool, ext_pa_5g: bool, ext_lna_5g: bool) -> [u8; 3] {
    let band = if on_5ghz {
        IQ_CALIB_BAND_5G
    } else {
        IQ_CALIB_BAND_2G
    };
    let bw = if ht40 { IQ_CALIB_BW_40 } else { IQ_CALIB_BW_20 };
    [chan, band | bw, ext_pa_5g as u8 | (ext_lna_5g as u8) << 1]
}

/// 预留页中 Null Data 与 QoS Null Data 帧的页号
pub fn rsvd_page(null_data: u8) -> [u8; 5] {
    [0, 0, null_data, null_data + 1, 0]
}

/// 填写一个 Null Data（或 QoS Null Data）描述符与帧，返回占用长度
fn construct_nulldata(
    buf: &mut [u8],
    bssid: &[u8; 6],
    myaddr: &[u8; 6],
    bss_addr: &[u8; 6],
    legacy_b: bool,
    qos: bool,
) -> usize {
    let mut desc = TxDesc {
        offset: TX_DESC_LEN as u8,
        flags0: FLAGS0_OWN | FLAGS0_FSG | FLAGS0_LSG,
        txdw3: TXDW3_DRVRATE,
        ..Default::default()
    };
    TxDesc::set(&mut desc.txdw1, TXDW1_QSEL_M, QSEL_MGNT);
    let ridx = if legacy_b { RIDX_CCK1 } else { RIDX_OFDM6 };
    TxDesc::set(&mut desc.txdw4, TXDW4_DATARATE_M, ridx as u32);

    let f = &mut buf[TX_DESC_LEN..];
    f[0] = wh::FC0_TYPE_DATA;
    f[1] = wh::FC1_DIR_TODS;
    f[4..10].copy_from_slice(bssid);
    f[10..16].copy_from_slice(myaddr);
    f[16..22].copy_from_slice(bss_addr);
    if qos {
        desc.pktlen = wh::QOS_HDR_LEN as u16;
        f[0] |= wh::FC0_SUBTYPE_QOS_NULL;
        // TID 0 (BE)
        f[24] = 0;
    } else {
        desc.txdw8 = TXDW8_HWSEQ_EN;
        desc.pktlen = wh::HDR_LEN as u16;
        f[0] |= wh::FC0_SUBTYPE_NODATA;
    }
    desc.seal();
    buf[..TX_DESC_LEN].copy_from_slice(&desc.to_bytes());
    TX_DESC_LEN + desc.pktlen as usize
}

impl Softc {
    /// 固件未加载时命令被丢弃，不视为错误
    pub(crate) fn fw_cmd(&mut self, id: u8, msg: &[u8]) -> Result {
        if !self.flags.contains(Flags::FW_LOADED) {
            debug!("firmware was not loaded; command {id:#x} discarded");
            return Ok(());
        }
        self.h2c.send(&self.io, id, msg)
    }

    pub(crate) fn set_media_status(&mut self, macid: u8) {
        if let Err(e) = self.fw_cmd(CMD_MSR_RPT, &msrrpt(macid)) {
            warn!("cannot change media status: {e}");
        }
    }

    /// `off` 为真时按 vap 的省电设置进入省电，否则保持常醒
    pub(crate) fn set_pwrmode(&mut self, off: bool) -> Result {
        let Some(vap) = self.vap.as_ref() else {
            return Ok(());
        };
        let enable = off && vap.state == State::Run && vap.pmgt;
        let res = self.fw_cmd(CMD_SET_PWRMODE, &pwrmode(enable));
        if let Err(e) = &res {
            warn!("CMD_SET_PWRMODE was not sent: {e}");
        }
        res
    }

    /// 把 Null Data 帧放入预留页，供固件省电时使用
    pub(crate) fn push_nulldata(&mut self) -> Result {
        if !self.flags.contains(Flags::FW_LOADED) {
            return Ok(());
        }
        let (bssid, bss_addr, myaddr, mut bcn_desc) = match self.vap.as_ref() {
            Some(vap) if vap.opmode == OpMode::Sta => match vap.bss.as_ref() {
                Some(bss) => (bss.bssid, bss.addr, vap.myaddr, vap.bcn_desc),
                None => return Err(Error::InvalidArgument),
            },
            _ => return Err(Error::InvalidArgument),
        };
        let page_size = self.chip.params().page_size;
        let legacy_b = self.curchan.mode() == PhyMode::B;
        let on_5ghz = self.curchan.is_5ghz();

        let Some(idx) = self.getbuf() else {
            return Err(Error::OutOfMemory);
        };
        let bcn_size = BCN_MAX_SIZE.next_multiple_of(page_size);
        let required = bcn_size + 2 * page_size;

        let ridx = if on_5ghz { RIDX_OFDM6 } else { RIDX_CCK1 };
        bcn_desc.txdw4 = field(TXDW4_DATARATE_M, ridx as u32);
        bcn_desc.pktlen = (required - TX_DESC_LEN) as u16;
        bcn_desc.seal();

        let Some(pool) = self.tx_pool.as_mut() else {
            return Err(Error::NetDown);
        };
        if pool.buf(idx).map_or(0, |b| b.len()) < required {
            pool.unget(idx);
            return Err(Error::NoBufs);
        }
        let Some(buf) = pool.buf_mut(idx) else {
            return Err(Error::NoBufs);
        };
        buf[..required].fill(0);
        buf[..TX_DESC_LEN].copy_from_slice(&bcn_desc.to_bytes());
        let null_size = construct_nulldata(
            &mut buf[bcn_size..],
            &bssid,
            &myaddr,
            &bss_addr,
            legacy_b,
            false,
        );
        let qos_off = bcn_size + null_size.next_multiple_of(page_size);
        construct_nulldata(
            &mut buf[qos_off..],
            &bssid,
            &myaddr,
            &bss_addr,
            legacy_b,
            true,
        );

        let io = &self.io;
        // 不在这里检测 beacon
        io.setbits8_shift(CR, 0, CR_ENSWBCN as u32, 1)?;
        io.setbits8_shift(FWHW_TXQ_CTRL, FWHW_TXQ_CTRL_REAL_BEACON, 0, 2)?;
        io.setbits8_shift(TDECTRL, TDECTRL_BCN_VALID, 0, 2)?;

        let slot = pool.slot_mut(idx);
        slot.len = required;
        slot.pipe = Pipe::TxVo;
        pool.push_pending(idx);
        self.tx_kick(Pipe::TxVo);

        if !self
            .io
            .poll(10, 100, |io| io.read32(TDECTRL) & TDECTRL_BCN_VALID != 0)
        {
            warn!("null data frame was not recognized");
            return Err(Error::InvalidArgument);
        }
        debug!("null data frame was recognized");

        let null_page = bcn_size.div_ceil(page_size) as u8;
        self.fw_cmd(CMD_RSVD_PAGE, &rsvd_page(null_page))
            .inspect_err(|e| warn!("CMD_RSVD_PAGE was not sent: {e}"))?;

        let io = &self.io;
        io.setbits8_shift(FWHW_TXQ_CTRL, 0, FWHW_TXQ_CTRL_REAL_BEACON, 2)?;
        io.setbits8_shift(CR, CR_ENSWBCN as u32, 0, 1)?;

        // 立即进入省电会打断四次握手
        io.kernel()
            .schedule(Work::PowerModeInit, Duration::from_secs(5));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::tests::{RegFile, io_with};
    use alloc::{sync::Arc, vec, vec::Vec};

    fn image(sig: u16, code_len: usize) -> Vec<u8> {
        let mut v = vec![0u8; FW_HEADER_SIZE + code_len];
        v[0..2].copy_from_slice(&(sig << 4).to_le_bytes());
        v[4..6].copy_from_slice(&0x2cu16.to_le_bytes());
        v[8] = 3;
        v[9] = 17;
        v
    }

    #[test]
    fn header_is_stripped_on_signature_match() {
        let img = image(0x950, 100);
        let (ver, code) = split_image(&img, 0x950).unwrap();
        assert_eq!(ver, 0x2c);
        assert_eq!(code.len(), 100);

        let (ver, code) = split_image(&img, 0x210).unwrap();
        assert_eq!(ver, 0);
        assert_eq!(code.len(), img.len());
    }

    #[test]
    fn image_size_limits() {
        assert!(split_image(&[0u8; FW_HEADER_SIZE - 1], 0x950).is_err());
        assert!(split_image(&vec![0u8; FW_MAX_SIZE + 1], 0x950).is_err());
    }

    #[test]
    fn page_is_written_in_shrinking_blocks() {
        let regs = Arc::new(RegFile::default());
        let io = io_with(regs.clone());
        let data: Vec<u8> = (0..203u8).collect();
        load_page(&io, 2, &data).unwrap();

        assert_eq!(regs.get32(MCUFWDL) & MCUFWDL_PAGE_M, 2 << 16);
        let lens: Vec<usize> = regs
            .writes
            .lock()
            .iter()
            .filter(|(a, _)| *a >= FW_START_ADDR)
            .map(|(_, d)| d.len())
            .collect();
        assert_eq!(lens, vec![196, 4, 1, 1, 1]);
        let mem = regs.mem.lock();
        assert_eq!(mem[&(FW_START_ADDR + 202)], 202);
    }

    #[test]
    fn long_command_writes_ext_box_first() {
        let regs = Arc::new(RegFile::default());
        let io = io_with(regs.clone());
        let mut h2c = H2c::default();
        h2c.send(&io, CMD_SET_PWRMODE, &pwrmode(true)).unwrap();
        h2c.send(&io, CMD_MSR_RPT, &msrrpt(5 | MACID_VALID)).unwrap();
        assert_eq!(h2c.cur, 2);

        let writes = regs.writes.lock();
        assert_eq!(writes[0].0, hmebox_ext(0));
        assert_eq!(writes[0].1, vec![0, PWRMODE_STATE_RFON, PWRMODE_B5_NO_BTCOEX, 0]);
        assert_eq!(writes[1].0, hmebox(0));
        assert_eq!(writes[1].1, vec![CMD_SET_PWRMODE, PWRMODE_LEG, 0x20, 0]);
        assert_eq!(writes[2], (hmebox(1), vec![CMD_MSR_RPT, MSRRPT_B0_ASSOC, 5, 0]));
    }

    #[test]
    fn busy_box_times_out() {
        let regs = Arc::new(RegFile::default());
        let io = io_with(regs.clone());
        regs.set32(HMETFR, 0x01);
        let mut h2c = H2c::default();
        assert_eq!(h2c.send(&io, CMD_MSR_RPT, &msrrpt(0)), Err(Error::Timeout));
        assert_eq!(h2c.cur, 0);
        assert!(regs.writes.lock().is_empty());
    }

    #[test]
    fn nulldata_frames() {
        let mut buf = vec![0u8; 128];
        let n = construct_nulldata(&mut buf, &[1; 6], &[2; 6], &[3; 6], false, false);
        assert_eq!(n, TX_DESC_LEN + wh::HDR_LEN);
        let desc = TxDesc::from_bytes(buf[..TX_DESC_LEN].try_into().unwrap());
        assert_eq!(desc.txdw8, TXDW8_HWSEQ_EN);
        assert_eq!(desc.txdw4 & TXDW4_DATARATE_M, RIDX_OFDM6 as u32);
        assert_eq!(
            buf[TX_DESC_LEN],
            wh::FC0_TYPE_DATA | wh::FC0_SUBTYPE_NODATA
        );
        assert_eq!(&buf[TX_DESC_LEN + 4..TX_DESC_LEN + 10], &[1; 6]);

        let n = construct_nulldata(&mut buf, &[1; 6], &[2; 6], &[3; 6], true, true);
        assert_eq!(n, TX_DESC_LEN + wh::QOS_HDR_LEN);
        let desc = TxDesc::from_bytes(buf[..TX_DESC_LEN].try_into().unwrap());
        assert_eq!(desc.txdw4 & TXDW4_DATARATE_M, RIDX_CCK1 as u32);
        assert_eq!(buf[TX_DESC_LEN], wh::FC0_TYPE_DATA | wh::FC0_SUBTYPE_QOS_NULL);
        assert_eq!(desc.txdsum, crate::frame::checksum(&{
            let mut d = desc;
            d.txdsum = 0;
            d.to_bytes()
        }));
    }

    #[test]
    fn command_payloads() {
        assert_eq!(msrrpt(3), [MSRRPT_B0_DISASSOC, 3, 0]);
        assert_eq!(pwrmode(false), [PWRMODE_CAM, 0x20, 0, 0, PWRMODE_STATE_ALLON, 0x40]);
        assert_eq!(rsvd_page(1), [0, 0, 1, 2, 0]);
        assert_eq!(iq_calib(149, true, true, false, true), [149, 0x22, 0x02]);
        assert_eq!(iq_calib(6, false, false, true, false), [6, 0x11, 0x01]);
    }
}
