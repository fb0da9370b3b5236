//! 硬件初始化序列
//!
//! 顺序固定：分配缓冲区、上电、下载固件、MAC 表、LLT 与 DMA 队列、
//! MAC 参数、BB/AGC/RF 表、频段、CAM 与天线，最后置 RUNNING 并开始接收。
//! 任何一步失败都会停止并下电。

use log::{debug, info, trace, warn};

use crate::{
    cmdq::Command,
    device::{Flags, Softc},
    err::{Error, Result},
    fw::{self, H2c},
    io::{Io, field, get_field},
    key,
    reg::*,
    table,
};

const LLT_INIT_OP_NO_ACTIVE: u32 = 0;
const LLT_END: u32 = 0xff;

/// 按 bulk-out 端点数划分 TX 页
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct QueuePages {
    pub npq: u32,
    pub hpq: u32,
    pub lpq: u32,
    pub qmap: u16,
}

pub(crate) fn queue_pages(ntx: usize, page_count: u32, npubq: u32) -> QueuePages {
    let hasnq = ntx >= 2;
    let haslq = ntx >= 3;
    let nqueues = 1 + hasnq as u32 + haslq as u32;
    let nqpages = (page_count - npubq) / nqueues;
    // 余下的页给高优先级队列
    let nrempages = (page_count - npubq) % nqueues;
    let qmap = match nqueues {
        1 => TRXDMA_CTRL_QMAP_HQ,
        2 => TRXDMA_CTRL_QMAP_HQ_NQ,
        _ => TRXDMA_CTRL_QMAP_3EP,
    };
    QueuePages {
        npq: if hasnq { nqpages } else { 0 },
        hpq: nqpages + nrempages,
        lpq: if haslq { nqpages } else { 0 },
        qmap,
    }
}

fn llt_write(io: &Io, addr: u32, data: u32) -> Result {
    io.write32(
        LLT_INIT,
        field(LLT_INIT_OP_M, LLT_INIT_OP_WRITE)
            | field(LLT_INIT_ADDR_M, addr)
            | field(LLT_INIT_DATA_M, data),
    )?;
    if io.poll(20, 10, |io| {
        get_field(io.read32(LLT_INIT), LLT_INIT_OP_M) == LLT_INIT_OP_NO_ACTIVE
    }) {
        Ok(())
    } else {
        Err(Error::Timeout)
    }
}

/// `[0, page_count)` 为保留页链表，之后到 `pktbuf_count` 为环形缓冲
fn llt_init(io: &Io, page_count: u32, pktbuf_count: u32) -> Result {
    for i in 0..page_count {
        llt_write(io, i, i + 1)?;
    }
    llt_write(io, page_count, LLT_END)?;
    for i in page_count + 1..pktbuf_count - 1 {
        llt_write(io, i, i + 1)?;
    }
    llt_write(io, pktbuf_count - 1, page_count + 1)
}

/// 每次重试速率索引降 1
pub(crate) fn mrr_init(io: &Io) -> Result {
    for i in 0..MRR_SIZE {
        io.write8(DARFRC + i, i as u8 + 1)?;
    }
    Ok(())
}

/// 11ac 自动降速表
fn arfb_init(io: &Io) -> Result {
    io.write32(arfr_5g(0), 0x0000_0010)?;
    io.write32(arfr_5g(0) + 4, 0xffff_f000)?;
    io.write32(arfr_5g(1), 0x0000_0010)?;
    io.write32(arfr_5g(1) + 4, 0x003f_f000)?;
    io.write32(arfr_2g(0), 0x0000_0015)?;
    io.write32(arfr_2g(0) + 4, 0x003f_f000)?;
    io.write32(arfr_2g(1), 0x0000_0015)?;
    io.write32(arfr_2g(1) + 4, 0xffcf_f000)
}

impl Softc {
    /// 已在运行时什么也不做
    pub(crate) fn init(&mut self) -> Result {
        if self.is_running() {
            return Ok(());
        }
        if let Err(e) = self.init_hw() {
            warn!("initialization failed: {e}");
            self.flags.remove(Flags::FW_LOADED);
            self.fwver = 0;
            self.teardown();
            return Err(e);
        }

        self.flags.insert(Flags::RUNNING);
        self.rx_kick();

        // 静态密钥必须在 CAM 清空之后写入
        let keys = self.vap.as_ref().map(|v| v.keys).unwrap_or_default();
        for k in keys.into_iter().flatten() {
            if let Err(e) = self.cmdq.enqueue(Command::KeySet(k)) {
                warn!("static key {} was not installed: {e}", k.keyix);
            }
        }
        info!("{} running", self.chip.params().name);
        Ok(())
    }

    fn init_hw(&mut self) -> Result {
        self.alloc_pools()?;

        let io = &self.io;
        if self.chip.is_12a() {
            io.write8(RF_CTRL, RF_CTRL_EN | RF_CTRL_SDMRSTB)?;
            io.write8(RF_CTRL, RF_CTRL_EN | RF_CTRL_RSTB | RF_CTRL_SDMRSTB)?;
            io.write8(RF_B_CTRL, RF_CTRL_EN | RF_CTRL_SDMRSTB)?;
            io.write8(RF_B_CTRL, RF_CTRL_EN | RF_CTRL_RSTB | RF_CTRL_SDMRSTB)?;
        }
        self.chip.power_on(io)?;

        let loaded = self
            .config
            .firmware_image()
            .map(|image| fw::load_firmware(self, image));
        match loaded {
            Some(Ok(version)) => {
                self.fwver = version;
                self.flags.insert(Flags::FW_LOADED);
            }
            Some(Err(e)) => warn!("firmware was not loaded: {e}"),
            None => debug!("running without firmware"),
        }
        self.h2c = H2c::default();

        self.mac_init()
            .inspect_err(|_| warn!("error while initializing MAC block"))?;
        self.dma_init()?;
        self.mac_params()?;
        self.bb_init()?;
        self.rf_init()?;

        let chan = self.curchan;
        self.set_band(&chan, true)?;

        let io = &self.io;
        key::cam_init(io)?;
        io.write16(
            SECCFG,
            SECCFG_TXUCKEY_DEF
                | SECCFG_RXUCKEY_DEF
                | SECCFG_TXENC_ENA
                | SECCFG_RXDEC_ENA
                | SECCFG_TXBCKEY_DEF
                | SECCFG_RXBCKEY_DEF,
        )?;
        self.antsel_init()?;

        let io = &self.io;
        io.write8(HWSEQ_CTRL, TX_QUEUE_ALL)?;
        // 关闭 BAR
        io.write32(BAR_MODE_CTRL, 0x0201_ffff)?;
        io.write8(NAV_UPPER, 0)?;
        io.setbits8(GPIO_MUXCFG, GPIO_MUXCFG_ENBT, 0)?;
        // RTS 带宽与数据帧相同
        io.setbits8(QUEUE_CTRL, 0x08, 0)?;
        io.write8(EARLY_MODE_CONTROL + 3, 0x01)?;
        mrr_init(io)?;

        // 复位 USB 模式切换设置
        io.write8(SDIO_CTRL, 0)?;
        io.write8(ACLK_MON, 0)?;
        io.write8(USB_HRPWM, 0)
    }

    fn mac_init(&self) -> Result {
        for &(reg, val) in self.chip.mac_table() {
            self.io.write8(reg, val)?;
        }
        Ok(())
    }

    fn dma_init(&self) -> Result {
        let p = self.chip.params();
        let io = &self.io;
        llt_init(io, p.page_count, p.pktbuf_count)?;

        let q = queue_pages(self.xfers.endpoints().ntx(), p.page_count, p.npubq_pages);
        io.write8(RQPN_NPQ, q.npq as u8)?;
        io.write32(
            RQPN,
            field(RQPN_PUBQ_M, p.npubq_pages)
                | field(RQPN_HPQ_M, q.hpq)
                | field(RQPN_LPQ_M, q.lpq)
                | RQPN_LD,
        )?;

        io.write8(TXPKTBUF_BCNQ_BDNY, p.tx_boundary)?;
        io.write8(TXPKTBUF_MGQ_BDNY, p.tx_boundary)?;
        io.write8(TXPKTBUF_WMAC_LBK_BF_HD, p.tx_boundary)?;
        io.write8(TRXFF_BNDY, p.tx_boundary)?;
        io.write8(TDECTRL + 1, p.tx_boundary)?;
        if p.has_bcnq1 {
            io.write8(TXPKTBUF_BCNQ1_BDNY, p.tx_boundary + 8)?;
            io.write8(DWBCN1_CTRL + 1, p.tx_boundary + 8)?;
            io.setbits8(DWBCN1_CTRL + 2, 0, DWBCN1_CTRL_SEL_EN)?;
        }

        io.setbits16(TRXDMA_CTRL, TRXDMA_CTRL_QMAP_M, q.qmap)?;
        io.write16(TRXFF_BNDY + 2, p.rx_dma_size - 1)?;
        self.chip.set_page_size(io)
    }

    /// MAC 层参数：地址、过滤、重试、EDCA、USB 与 AMPDU 聚合、beacon
    fn mac_params(&self) -> Result {
        let p = self.chip.params();
        let io = &self.io;

        // 丢弃错误的 TX
        io.setbits8_shift(TXDMA_OFFSET_CHK, 0, TXDMA_OFFSET_DROP_DATA_EN, 1)?;
        io.write8(RX_DRVINFO_SZ, RX_DRVINFO_SZ_DEF)?;
        io.write32(HIMR, 0)?;
        io.write32(HIMRE, 0)?;

        let myaddr = self.vap.as_ref().map_or(self.macaddr, |v| v.myaddr);
        io.write_region(MACID, &myaddr)?;
        self.set_mode(MSR_NOLINK)?;
        self.rxfilter_init()?;

        io.setbits32(RRSR, RRSR_RATE_BITMAP_M, RRSR_RATE_CCK_ONLY_1M)?;
        io.write16(
            RL,
            (field(RL_SRL_M as u32, 0x30) | field(RL_LRL_M as u32, 0x30)) as u16,
        )?;
        self.edca_init()?;

        io.setbits8(FWHW_TXQ_CTRL, 0, FWHW_TXQ_CTRL_AMPDU_RTY_NEW)?;
        io.write8(ACKTO, 0x80)?;

        io.setbits32(TDECTRL, TDECTRL_BLK_DESC_NUM_M, p.tx_agg_desc_num)?;
        if p.has_bcnq1 {
            io.write8(DWBCN1_CTRL, (p.tx_agg_desc_num << 1) as u8)?;
        }
        io.write16(
            RXDMA_AGG_PG_TH,
            self.usb_dma.size as u16 | (self.usb_dma.time as u16) << 8,
        )?;
        io.setbits8(TRXDMA_CTRL, 0, TRXDMA_CTRL_RXDMA_AGG_EN)?;

        io.write16(BCN_CTRL, 0x1010)?;
        io.write16(TBTT_PROHIBIT, 0x6404)?;
        io.write8(DRVERLYINT, 0x05)?;
        io.write8(BCNDMATIM, 0x02)?;
        io.write16(BCNTCFG, 0x660f)?;

        // USB3 接收间隔与突发长度
        io.write8(USB_DMA_AGG_CTRL, 0x01)?;
        io.write16(RXDMA_STATUS, 0x7400)?;
        io.write8(RXDMA_STATUS + 1, 0xf5)?;

        io.write8(AMPDU_MAX_TIME, p.ampdu_max_time)?;
        io.write32(AMPDU_MAX_LENGTH, 0xffff_ffff)?;
        io.write8(USTIME_TSF, 0x50)?;
        io.write8(USTIME_EDCA, 0x50)?;

        if !self.chip.is_12a() || io.read8(TYPE_ID + 3) & 0x80 != 0 {
            if io.read8(USB_INFO) & 0x30 == 0 {
                // 512 字节
                io.setbits8(RXDMA_PRO, 0x20, 0x1e)?;
            } else {
                // 64 字节
                io.setbits8(RXDMA_PRO, 0x10, 0x2e)?;
            }
        } else {
            // USB 3.0，1 KB
            io.setbits8(RXDMA_PRO, 0x30, 0x0e)?;
            io.setbits8(USB_AP_CTRL, 0x18, 0)?;
        }

        io.setbits8(HT_SINGLE_AMPDU, 0, HT_SINGLE_AMPDU_PKT_ENA)?;
        // VHT 需要 11K 包长
        io.write8(RX_PKT_LIMIT, 0x18)?;
        io.write8(PIFS, 0)?;
        io.write16(MAX_AGGR_NUM, 0x1f1f)?;

        if self.chip.is_12a() {
            io.setbits8(FWHW_TXQ_CTRL, FWHW_TXQ_CTRL_AMPDU_RTY_NEW, 0)?;
        } else {
            io.write8(FWHW_TXQ_CTRL, FWHW_TXQ_CTRL_AMPDU_RTY_NEW)?;
            io.write32(FAST_EDCA_CTRL, 0x0308_7777)?;
        }

        // 不复位 MAC
        io.setbits8(RSV_CTRL, 0, 0x60)?;
        arfb_init(io)?;
        // 必须在设置 RxFF 边界之后
        io.setbits8(CR, 0, (CR_MACTXEN | CR_MACRXEN) as u8)
    }

    fn bb_init(&mut self) -> Result {
        let io = &self.io;
        let (chip, rom) = (&self.chip, &self.rom);

        io.setbits8(SYS_FUNC_EN, 0, SYS_FUNC_EN_USBA as u8)?;
        io.setbits8(
            SYS_FUNC_EN,
            0,
            (SYS_FUNC_EN_BBRSTB | SYS_FUNC_EN_BB_GLB_RST) as u8,
        )?;
        io.write8(RF_CTRL, RF_CTRL_EN | RF_CTRL_RSTB | RF_CTRL_SDMRSTB)?;
        io.write8(RF_B_CTRL, RF_CTRL_EN | RF_CTRL_RSTB | RF_CTRL_SDMRSTB)?;

        for (i, entry) in chip.bb_table().iter().enumerate() {
            let Some(v) = table::select(entry, |cond| chip.check_condition(rom, cond)) else {
                warn!("BB table entry {i}: no matching condition");
                return Err(Error::InvalidArgument);
            };
            for (reg, val) in v.data.iter() {
                trace!("BB: reg {reg:#05x}, val {val:#010x}");
                io.bb_write(reg, val)?;
                io.delay(1);
            }
        }

        for (i, entry) in chip.agc_table().iter().enumerate() {
            let Some(v) = table::select(entry, |cond| chip.check_condition(rom, cond)) else {
                warn!("AGC table entry {i}: no matching condition");
                return Err(Error::InvalidArgument);
            };
            for &val in v.data {
                trace!("AGC: val {val:#010x}");
                io.bb_write(BB_AGC_CORE, val)?;
                io.delay(1);
            }
        }

        for i in 0..chip.nrxchains() {
            io.bb_write(bb_ofdm0_agccore1(i), 0x22)?;
            io.delay(1);
            io.bb_write(bb_ofdm0_agccore1(i), 0x20)?;
            io.delay(1);
        }

        chip.crystalcap_write(io, rom.crystalcap)?;
        let hipwr = io.bb_read(BB_CCK_HIPWR_CHK) & BB_CCK_HIPWR != 0;
        self.flags.set(Flags::CCK_HIPWR, hipwr);
        Ok(())
    }

    fn rf_init(&self) -> Result {
        let io = &self.io;
        let (chip, rom) = (&self.chip, &self.rom);

        for chain in 0..chip.nrxchains() {
            let Some(entries) = chip.rf_table(chain) else {
                warn!("no RF table for chain {chain}");
                return Err(Error::InvalidArgument);
            };
            debug!("RF init: chain {chain}");
            for (i, entry) in entries.iter().enumerate() {
                let Some(v) = table::select(entry, |cond| chip.check_condition(rom, cond)) else {
                    warn!("RF table entry {i}: no matching condition");
                    return Err(Error::InvalidArgument);
                };
                for (reg, val) in v.data.iter() {
                    // 假寄存器号表示延时，值为微秒数
                    if reg > RF_DELAY_MARK {
                        io.delay(val as u64);
                        continue;
                    }
                    trace!("RF: reg {reg:#04x}, val {val:#07x}");
                    io.rf_write(chain, reg, val)?;
                    io.delay(1);
                }
            }
        }
        Ok(())
    }

    fn antsel_init(&self) -> Result {
        let io = &self.io;
        io.write8(LEDCFG2, 0x82)?;
        io.bb_setbits(bb_fpga0_rfparam(0), 0, BB_FPGA0_RFPARAM_ANTSEL_EN)?;
        let ant = get_field(io.bb_read(bb_fpga0_rfifaceoe(0)), BB_FPGA0_RFIFACEOE0_ANT_M);
        debug!("antenna {ant}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        chip::ChipKind,
        device::tests::TestDev,
        io::tests::{RegFile, io_with},
        net::OpMode,
    };
    use alloc::sync::Arc;

    #[test]
    fn queue_split_by_endpoints() {
        // 248 页，公共队列 219 页
        let q = queue_pages(3, 248, 219);
        assert_eq!((q.npq, q.hpq, q.lpq), (9, 11, 9));
        assert_eq!(q.qmap, TRXDMA_CTRL_QMAP_3EP);

        let q = queue_pages(2, 248, 219);
        assert_eq!((q.npq, q.hpq, q.lpq), (14, 15, 0));
        assert_eq!(q.qmap, TRXDMA_CTRL_QMAP_HQ_NQ);

        let q = queue_pages(1, 243, 219);
        assert_eq!((q.npq, q.hpq, q.lpq), (0, 24, 0));
        assert_eq!(q.qmap, TRXDMA_CTRL_QMAP_HQ);
    }

    #[test]
    fn mrr_steps_down_one_rate() {
        let regs = Arc::new(RegFile::default());
        let io = io_with(regs.clone());
        mrr_init(&io).unwrap();
        assert_eq!(regs.get32(DARFRC), 0x0403_0201);
        assert_eq!(regs.get32(DARFRC + 4), 0x0807_0605);
    }

    #[test]
    fn llt_busy_times_out() {
        // 写入后 OP 位保持为 WRITE
        let regs = Arc::new(RegFile::default());
        let io = io_with(regs.clone());
        assert_eq!(llt_init(&io, 4, 8), Err(Error::Timeout));
        assert_eq!(regs.writes.lock().len(), 1);
    }

    #[test]
    fn failed_power_on_leaves_device_stopped() {
        let t = TestDev::stopped(OpMode::Sta);
        let mut sc = t.sc.lock();
        assert_eq!(sc.init(), Err(Error::Timeout));
        assert!(!sc.is_running());
        assert!(sc.rx_pool.is_none());
        assert!(sc.tx_pool.is_none());
        assert!(t.bulk.take().is_empty());
    }

    #[test]
    fn init_is_idempotent_while_running() {
        let t = TestDev::running(OpMode::Sta);
        let mut sc = t.sc.lock();
        t.regs.writes.lock().clear();
        sc.init().unwrap();
        assert!(t.regs.writes.lock().is_empty());
    }

    #[test]
    fn antenna_and_bb_tables_exist_for_both_chips() {
        for kind in [ChipKind::Rtl8812au, ChipKind::Rtl8821au] {
            let t = TestDev::new(kind);
            let sc = t.sc.lock();
            assert!(!sc.chip.bb_table().is_empty());
            assert!(!sc.chip.agc_table().is_empty());
            assert!(sc.chip.rf_table(0).is_some());
        }
    }
}
