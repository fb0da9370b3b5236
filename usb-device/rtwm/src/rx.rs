//! 接收通路：RX 聚合记录拆分、固件上报（C2H）与信号强度

use alloc::vec::Vec;

use log::{debug, trace, warn};
use usb_if::{err::TransferError, host::BulkCompletion};

use crate::{
    device::{Flags, Softc, Upcall},
    frame::*,
    net::*,
    rate,
    reg::{MACID_MAX, NOISE_FLOOR},
    xfer::{Completed, Pipe},
};

/// 从记录中取出、尚未决定目标节点的帧
struct RxRecord {
    stat: RxStat,
    data: Vec<u8>,
    flags: RxFlags,
}

impl Softc {
    /// 传输引擎的完成通知
    pub(crate) fn transfer_complete(&mut self, c: BulkCompletion) {
        let Some(c) = self.xfers.accept(c) else {
            return;
        };
        if c.pipe == Pipe::Rx {
            self.rx_done(c);
        } else {
            self.tx_done(c);
        }
    }

    /// RX 管道空闲时提交下一个接收缓冲区
    pub(crate) fn rx_kick(&mut self) {
        if self.xfers.is_busy(Pipe::Rx) {
            return;
        }
        let Some(pool) = self.rx_pool.as_mut() else {
            return;
        };
        let Some(idx) = pool.inactive_to_active() else {
            return;
        };
        let len = pool.bufsz();
        let Some(buf) = pool.lend(idx) else {
            pool.retire_active_to_inactive(idx);
            return;
        };
        self.xfers.submit(self.bulk.as_ref(), Pipe::Rx, idx, buf, len);
    }

    fn rx_done(&mut self, c: Completed) {
        let Completed {
            slot,
            buffer,
            actual,
            result,
            ..
        } = c;
        let records = match result {
            Ok(()) => self.report_intr(&buffer[..actual.min(buffer.len())]),
            Err(_) => Vec::new(),
        };
        if let Some(pool) = self.rx_pool.as_mut() {
            pool.restore(slot, buffer);
            pool.retire_active_to_inactive(slot);
        }
        match result {
            Ok(()) => {
                self.rx_kick();
                for r in records {
                    self.rx_frame(r);
                }
            }
            Err(TransferError::Cancelled) => {}
            Err(e) => {
                warn!("RX transfer failed: {e:?}");
                self.xfers.clear_stall(self.bulk.as_ref(), Pipe::Rx);
                self.stats.ierrors += 1;
                self.rx_kick();
            }
        }
        // 接收可能释放了发送瓶颈
        self.start();
    }

    /// 一个 USB 传输的内容：固件上报或若干接收记录
    fn report_intr(&mut self, buf: &[u8]) -> Vec<RxRecord> {
        let Some(stat) = RxStat::parse(buf) else {
            self.stats.ierrors += 1;
            return Vec::new();
        };
        if stat.is_c2h() {
            self.c2h_report(&buf[RX_STAT_LEN..]);
            return Vec::new();
        }
        records(buf)
            .filter_map(|(stat, record)| self.rx_copy(stat, record))
            .collect()
    }

    fn rx_copy(&mut self, stat: RxStat, record: &[u8]) -> Option<RxRecord> {
        // 未运行时不向协议栈交帧
        if !self.flags.contains(Flags::RUNNING) {
            return None;
        }
        if stat.has_error() {
            debug!(
                "RX flags error ({})",
                if stat.dw[0] & RXDW0_CRCERR != 0 { "CRC" } else { "ICV" }
            );
            self.stats.ierrors += 1;
            return None;
        }
        if stat.pktlen() < wh::ACK_LEN {
            debug!("frame is too short: {}", stat.pktlen());
            self.stats.ierrors += 1;
            return None;
        }

        let mut flags = RxFlags::empty();
        let rxdw1 = stat.dw[1];
        if rxdw1 & RXDW1_CKSUM != 0 {
            trace!(
                "{}/{} checksum is {}",
                if rxdw1 & RXDW1_UDP != 0 { "UDP" } else { "TCP" },
                if rxdw1 & RXDW1_IPV6 != 0 { "IPv6" } else { "IP" },
                if rxdw1 & RXDW1_CKSUM_ERR != 0 { "invalid" } else { "valid" }
            );
            if rxdw1 & RXDW1_CKSUM_ERR != 0 {
                self.stats.ierrors += 1;
                return None;
            }
            let enabled = if rxdw1 & RXDW1_IPV6 != 0 {
                Flags::RXCKSUM6_EN
            } else {
                Flags::RXCKSUM_EN
            };
            if self.flags.contains(enabled) {
                flags |= RxFlags::CSUM_VALID;
            }
        }

        Some(RxRecord {
            stat,
            data: record.to_vec(),
            flags,
        })
    }

    fn rssi(&self, ridx: u8, physt: &PhyStat) -> i8 {
        if rate::is_cck(ridx) {
            self.chip
                .rssi_cck(physt.cfosho[0], self.flags.contains(Flags::CCK_HIPWR))
        } else {
            physt.rssi_ofdm(self.chip.nrxchains())
        }
    }

    /// 去掉状态头，找出发送节点并排入上行回调
    fn rx_frame(&mut self, r: RxRecord) {
        let RxRecord {
            stat,
            data: mut m,
            mut flags,
        } = r;
        let infosz = stat.infosz();
        let hdr = RX_STAT_LEN + infosz;
        let frame = &m[hdr..];
        let ridx = stat.rate();

        if wh::is_protected(frame) && stat.cipher() != 0 {
            flags |= RxFlags::DECRYPTED;
        }
        let node = if frame.len() >= wh::MIN_LEN {
            wh::addr2(frame).and_then(|a| self.nodes.by_addr(&a))
        } else {
            None
        };

        let physt = (infosz != 0 && stat.has_phystat())
            .then(|| PhyStat::parse(&m[RX_STAT_LEN..hdr]))
            .flatten();
        let rssi = match physt {
            Some(p) => {
                let rssi = self.rssi(ridx, &p);
                trace!("rssi={rssi}");
                self.last_rssi = rssi;
                if let Some(peer) = node.and_then(|n| self.nodes.get_mut(n)) {
                    peer.last_rssi = rssi;
                }
                rssi
            }
            None => node
                .and_then(|n| self.nodes.get(n))
                .map_or(self.last_rssi, |p| p.last_rssi),
        };

        if stat.sgi() {
            flags |= RxFlags::SHORT_GI;
        }
        if node
            .and_then(|n| self.nodes.get(n))
            .is_some_and(|p| p.info.ht)
        {
            flags |= RxFlags::AMPDU;
        }

        m.drain(..hdr);
        let nf = NOISE_FLOOR;
        self.upcall(Upcall::Input {
            node,
            frame: RxFrame {
                data: m,
                flags,
                rate: rate::ridx2rate(ridx),
                tsf_low: stat.tsf_low(),
            },
            rssi: rssi.saturating_sub(nf),
            nf,
        });
    }

    fn c2h_report(&mut self, buf: &[u8]) {
        if buf.len() < 2 {
            warn!("C2H report too short (len {})", buf.len());
            return;
        }
        let payload = &buf[2..];
        match C2hId::try_from(buf[0]) {
            Ok(C2hId::TxReport) => self.ratectl_tx_complete(payload),
            Ok(C2hId::IqkFinished) => {
                debug!("FW IQ calibration finished");
                self.flags.remove(Flags::IQK_RUNNING);
            }
            _ => warn!("C2H report {} was not handled", buf[0]),
        }
    }

    fn ratectl_tx_complete(&mut self, buf: &[u8]) {
        let Some(rpt) = TxReport::parse(buf) else {
            warn!(
                "wrong report size ({}, must be {})",
                buf.len(),
                TxReport::LEN
            );
            return;
        };
        if rpt.macid as usize > MACID_MAX {
            warn!("macid {} is too big", rpt.macid);
            return;
        }
        let Some(node) = self.nodes.by_macid(rpt.macid) else {
            debug!("macid {}, no node", rpt.macid);
            return;
        };
        trace!(
            "frame for macid {} was{} sent ({} retries)",
            rpt.macid,
            if rpt.success() { "" } else { " not" },
            rpt.retries
        );
        self.upcall(Upcall::RatectlTxComplete {
            node,
            success: rpt.success(),
            retries: rpt.retries,
        });
    }
}
