//! 发送通路：TX 描述符、待发队列与批量传输完成处理

use alloc::vec::Vec;

use log::{debug, trace, warn};
use usb_if::err::TransferError;

use crate::{
    device::{Flags, SND_QUEUE_LEN, Softc, Upcall},
    err::{Error, Result},
    frame::*,
    io::field,
    net::*,
    pool::Pool,
    rate::{self, RIDX_CCK55, RIDX_OFDM24, RIDX_OFDM36, ridx_mcs},
    reg::MACID_BC,
    xfer::{Completed, Pipe},
};

pub const TX_LIST_COUNT: usize = 16;
/// 描述符加最长的 802.11 帧
pub const TX_BUFSZ: usize = TX_DESC_LEN + 2312;
pub const RX_LIST_COUNT: usize = 1;
pub const RX_BUFSZ: usize = 8 * 1024;

const MAX_TID: u8 = 8;
const SEQ_RANGE: u16 = 4096;
/// A-MPDU 最小间隔，16us
const AMPDU_DENSITY: u32 = 7;

/// 构造描述符所需的帧属性
struct FrameInfo {
    ftype: u8,
    qos: Option<u8>,
    mcast: bool,
}

impl FrameInfo {
    fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < wh::MIN_LEN {
            return Err(Error::InvalidArgument);
        }
        Ok(Self {
            ftype: wh::fc_type(data),
            qos: wh::qos(data),
            mcast: wh::addr1(data).is_some_and(|a| is_multicast(&a)),
        })
    }

    fn noack(&self) -> bool {
        self.qos
            .is_some_and(|q| q & wh::QOS_ACKPOLICY == wh::QOS_ACKPOLICY_NOACK)
    }
}

/// RTS/CTS 保护，RTS 固定使用 24Mbps
fn tx_protection(txd: &mut TxDesc, mode: Protection) {
    match mode {
        Protection::CtsOnly => txd.txdw3 |= TXDW3_CTS2SELF,
        Protection::RtsCts => txd.txdw3 |= TXDW3_RTSEN,
        Protection::None => return,
    }
    txd.txdw3 |= TXDW3_HWRTSEN;
    txd.txdw4 |= field(TXDW4_RTSRATE_M, RIDX_OFDM24 as u32);
    txd.txdw4 |= field(TXDW4_RTSRATE_FB_LMT_M, 0xf);
}

fn set_seq(txd: &mut TxDesc, qos: bool, seqno: u16) {
    if qos {
        txd.txdw9 |= field(TXDW9_SEQ_M, (seqno % SEQ_RANGE) as u32);
    } else {
        // 非 QoS 帧由硬件编号
        txd.txdw8 |= TXDW8_HWSEQ_EN;
    }
}

impl Softc {
    pub(crate) fn alloc_pools(&mut self) -> Result {
        self.rx_pool = Some(Pool::alloc(RX_LIST_COUNT, RX_BUFSZ, Pipe::Rx)?);
        self.tx_pool = Some(Pool::alloc(TX_LIST_COUNT, TX_BUFSZ, Pipe::TxBe)?);
        Ok(())
    }

    /// 取一个空闲的发送缓冲区
    pub(crate) fn getbuf(&mut self) -> Option<usize> {
        let idx = self.tx_pool.as_mut()?.acquire();
        if idx.is_none() {
            debug!("out of xmit buffers");
        }
        idx
    }

    pub(crate) fn check_txlen(&self, len: usize) -> Result {
        let max = self.tx_pool.as_ref().map_or(0, |p| p.bufsz());
        if TX_DESC_LEN + len > max {
            warn!("frame too long: {len}");
            return Err(Error::InvalidArgument);
        }
        Ok(())
    }

    fn raid(&self, txd: &mut TxDesc, legacy_only: bool) {
        let chan = self.curchan;
        let raid = rate::raid(
            chan.mode(),
            legacy_only,
            self.chip.ntxchains(),
            chan.is_ht40(),
        );
        txd.txdw1 |= field(TXDW1_RAID_M, raid as u32);
    }

    fn uses_ratectl(&self) -> bool {
        self.flags.contains(Flags::FW_LOADED)
    }

    /// 为协议栈交下来的帧选择速率并填写描述符
    fn data_desc(&mut self, f: &mut TxFrame) -> Result<TxDesc> {
        self.check_txlen(f.data.len())?;
        let info = FrameInfo::parse(&f.data)?;
        let peer = self.nodes.get(f.node).copied();
        let ht = peer.is_some_and(|p| p.info.ht);
        let chan = self.curchan;
        let tp = self.txparams[u8::from(chan.mode()) as usize];
        let eapol = f.flags.contains(TxFlags::EAPOL);
        let ampdu = f.flags.contains(TxFlags::AMPDU);
        let tid = info.qos.map_or(0, |q| q & wh::QOS_TID);

        let rate = if info.ftype == wh::FC0_TYPE_MGT {
            tp.mgmt_rate
        } else if info.mcast {
            tp.mcast_rate
        } else if let Some(r) = tp.ucast_rate {
            r
        } else if eapol {
            tp.mgmt_rate
        } else if self.uses_ratectl() {
            self.net.ratectl_rate(f.node)
        } else if ht {
            RATE_MCS | 4
        } else if chan.mode() != PhyMode::B {
            rate::ridx2rate(RIDX_OFDM36)
        } else {
            rate::ridx2rate(RIDX_CCK55)
        };
        let ridx = rate::rate2ridx(rate);

        let mut txd = TxDesc::new();
        let macid;
        let qsel;
        if info.mcast {
            txd.flags0 |= FLAGS0_BMCAST;
            macid = MACID_BC;
            qsel = QSEL_MGNT;
        } else {
            if !info.noack() {
                txd.txdw4 = TXDW4_RETRY_LMT_ENA | field(TXDW4_RETRY_LMT_M, tp.max_retry as u32);
            }
            macid = self.nodes.macid(f.node);
            if info.ftype == wh::FC0_TYPE_DATA {
                qsel = (tid % MAX_TID) as u32;
                if ampdu {
                    txd.txdw2 |= TXDW2_AGGEN | field(TXDW2_AMPDU_DEN_M, AMPDU_DENSITY);
                    txd.txdw3 |= field(TXDW3_MAX_AGG_M, 0x1f);
                } else {
                    txd.txdw2 |= TXDW2_AGGBK;
                }
                txd.txdw2 |= TXDW2_SPE_RPT;
                if self.uses_ratectl() {
                    self.tx_n_active += 1;
                }
                if ridx >= ridx_mcs(0) && ridx != rate::RIDX_UNKNOWN {
                    let sgi = peer.is_some_and(|p| {
                        if chan.is_ht40() {
                            p.info.sgi40
                        } else {
                            p.info.sgi20
                        }
                    });
                    if sgi {
                        txd.txdw5 |= TXDW5_SGI;
                    }
                }
                tx_protection(&mut txd, self.protmode);
                txd.txdw4 |= field(TXDW4_DATARATE_FB_LMT_M, 0x1f);
            } else {
                qsel = QSEL_MGNT;
            }
        }

        txd.txdw1 |= field(TXDW1_QSEL_M, qsel);
        txd.txdw1 |= field(TXDW1_MACID_M, macid as u32);
        txd.txdw4 |= field(TXDW4_DATARATE_M, ridx as u32);
        self.raid(&mut txd, info.mcast || !ht);

        if self.uses_ratectl()
            || info.mcast
            || tp.ucast_rate.is_some()
            || eapol
            || info.ftype != wh::FC0_TYPE_DATA
        {
            txd.txdw3 |= TXDW3_DRVRATE;
        }

        if info.qos.is_some() && ampdu {
            wh::clear_seq(&mut f.data);
        }
        set_seq(&mut txd, info.qos.is_some(), f.seqno);

        if let Some(c) = f.hw_cipher {
            txd.txdw1 |= field(TXDW1_CIPHER_M, c.tx_cipher());
        }
        Ok(txd)
    }

    /// 按调用者给出的速率、重试次数与保护方式填写描述符
    fn raw_desc(&self, f: &TxFrame, params: RawParams) -> Result<TxDesc> {
        self.check_txlen(f.data.len())?;
        let info = FrameInfo::parse(&f.data)?;
        let ht = self.nodes.get(f.node).is_some_and(|p| p.info.ht);

        let mut txd = TxDesc::new();
        if info.mcast {
            txd.flags0 |= FLAGS0_BMCAST;
        }
        if !params.flags.contains(RawFlags::NOACK) {
            txd.txdw4 = TXDW4_RETRY_LMT_ENA | field(TXDW4_RETRY_LMT_M, params.try0 as u32);
        }
        if params.flags.contains(RawFlags::RTS) {
            tx_protection(&mut txd, Protection::RtsCts);
        }
        if params.flags.contains(RawFlags::CTS) {
            tx_protection(&mut txd, Protection::CtsOnly);
        }

        txd.txdw1 |= field(TXDW1_MACID_M, MACID_BC as u32);
        txd.txdw1 |= field(TXDW1_QSEL_M, QSEL_MGNT);
        let cipher = f.hw_cipher.map_or(CIPHER_NONE, |c| c.tx_cipher());
        txd.txdw1 |= field(TXDW1_CIPHER_M, cipher);

        let ridx = rate::rate2ridx(params.rate0);
        txd.txdw4 |= field(TXDW4_DATARATE_M, ridx as u32);
        txd.txdw4 |= field(TXDW4_DATARATE_FB_LMT_M, 0x1f);
        txd.txdw3 |= TXDW3_DRVRATE;
        self.raid(&mut txd, info.mcast || !ht);

        set_seq(&mut txd, wh::has_qos_seq(&f.data), f.seqno);
        Ok(txd)
    }

    /// 把描述符与帧写入缓冲区并排入对应管道
    ///
    /// 长度须已由 [`Softc::check_txlen`] 检查。`node` 为空的帧（beacon）
    /// 完成时不通知协议栈。
    pub(crate) fn tx_start(
        &mut self,
        idx: usize,
        mut txd: TxDesc,
        frame: Vec<u8>,
        ac: Ac,
        node: Option<NodeId>,
    ) {
        let pipe = match wh::fc_type(&frame) {
            wh::FC0_TYPE_CTL | wh::FC0_TYPE_MGT => Pipe::TxVo,
            _ => Pipe::for_ac(ac),
        };
        txd.pktlen = frame.len() as u16;
        txd.seal();

        let Some(pool) = self.tx_pool.as_mut() else {
            return;
        };
        let len = TX_DESC_LEN + frame.len();
        let Some(buf) = pool.buf_mut(idx) else {
            warn!("tx buffer {idx} is in flight");
            pool.unget(idx);
            return;
        };
        buf[..TX_DESC_LEN].copy_from_slice(&txd.to_bytes());
        buf[TX_DESC_LEN..len].copy_from_slice(&frame);

        let slot = pool.slot_mut(idx);
        slot.len = len;
        slot.pipe = pipe;
        if node.is_some() {
            slot.frame = Some(frame);
            slot.node = node;
        }
        pool.push_pending(idx);
        trace!("queued {len} bytes on {pipe:?}");
        self.tx_kick(pipe);
    }

    /// 管道空闲时提交它的下一个待发缓冲区
    pub(crate) fn tx_kick(&mut self, pipe: Pipe) {
        if self.xfers.is_busy(pipe) {
            return;
        }
        let Some(pool) = self.tx_pool.as_mut() else {
            return;
        };
        let Some(idx) = pool.pending_to_active(pipe) else {
            trace!("empty pending queue on {pipe:?}");
            if Pipe::TX.iter().all(|&p| !self.xfers.is_busy(p)) {
                self.tx_n_active = 0;
            }
            return;
        };
        let len = pool.slot(idx).len;
        let Some(buf) = pool.lend(idx) else {
            let refs = pool.retire_active_to_inactive(idx);
            self.complete_refs(alloc::vec![refs], false);
            return;
        };
        self.xfers.submit(self.bulk.as_ref(), pipe, idx, buf, len);
        if !self.flags.contains(Flags::FW_LOADED) {
            self.tx_n_active += 1;
        }
    }

    fn txeof(&mut self, idx: usize, buf: Vec<u8>, ok: bool) {
        let Some(pool) = self.tx_pool.as_mut() else {
            return;
        };
        pool.restore(idx, buf);
        if let (Some(frame), Some(node)) = pool.retire_active_to_inactive(idx) {
            self.upcall(Upcall::TxComplete { node, frame, ok });
        }
        if !self.flags.contains(Flags::FW_LOADED) {
            self.tx_n_active = self.tx_n_active.saturating_sub(1);
        }
    }

    pub(crate) fn tx_done(&mut self, c: Completed) {
        let pipe = c.pipe;
        match c.result {
            Ok(()) => {
                self.txeof(c.slot, c.buffer, true);
                self.tx_kick(pipe);
            }
            Err(e) => {
                self.txeof(c.slot, c.buffer, false);
                if e != TransferError::Cancelled {
                    warn!("{pipe:?} transfer failed: {e:?}");
                    self.xfers.clear_stall(self.bulk.as_ref(), pipe);
                    self.tx_kick(pipe);
                }
            }
        }
        self.start();
    }

    /// 依次处理发送队列，缓冲区用完时停下
    pub(crate) fn start(&mut self) {
        while let Some(mut f) = self.snd.pop_front() {
            let Some(idx) = self.getbuf() else {
                self.snd.push_front(f);
                break;
            };
            trace!("start: node {:?}, {} bytes", f.node, f.data.len());
            match self.data_desc(&mut f) {
                Ok(txd) => self.tx_start(idx, txd, f.data, f.ac, Some(f.node)),
                Err(e) => {
                    debug!("cannot send frame: {e}");
                    self.stats.oerrors += 1;
                    if let Some(pool) = self.tx_pool.as_mut() {
                        pool.unget(idx);
                    }
                    self.upcall(Upcall::TxComplete {
                        node: f.node,
                        frame: f.data,
                        ok: false,
                    });
                    break;
                }
            }
        }
    }

    pub(crate) fn transmit(&mut self, f: TxFrame) -> Result {
        if !self.flags.contains(Flags::RUNNING) {
            return Err(Error::NetDown);
        }
        if self.snd.len() >= SND_QUEUE_LEN {
            return Err(Error::NoBufs);
        }
        self.snd.push_back(f);
        self.start();
        Ok(())
    }

    pub(crate) fn raw_xmit(&mut self, mut f: TxFrame, params: Option<RawParams>) -> Result {
        if !self.flags.contains(Flags::RUNNING) {
            return Err(Error::NetDown);
        }
        let idx = self.getbuf().ok_or(Error::NoBufs)?;
        let txd = match params {
            None => self.data_desc(&mut f),
            Some(p) => self.raw_desc(&f, p),
        };
        match txd {
            Ok(txd) => {
                self.tx_start(idx, txd, f.data, f.ac, Some(f.node));
                Ok(())
            }
            Err(e) => {
                if let Some(pool) = self.tx_pool.as_mut() {
                    pool.unget(idx);
                }
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{device::tests::TestDev, key::Cipher};

    const PEER: MacAddr = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55];

    fn data_frame(dst: MacAddr, qos: Option<u8>) -> Vec<u8> {
        let mut f = alloc::vec![0u8; 64];
        f[0] = wh::FC0_TYPE_DATA;
        f[1] = wh::FC1_DIR_TODS;
        f[4..10].copy_from_slice(&dst);
        f[22] = 0x50;
        if let Some(q) = qos {
            f[0] |= wh::FC0_SUBTYPE_QOS;
            f[24] = q;
        }
        f
    }

    fn frame(node: usize, data: Vec<u8>) -> TxFrame {
        TxFrame {
            node: NodeId(node),
            data,
            ac: Ac::Be,
            flags: TxFlags::empty(),
            seqno: 4097,
            hw_cipher: None,
        }
    }

    fn peer_info(ht: bool) -> NodeInfo {
        NodeInfo {
            addr: PEER,
            ht,
            sgi20: true,
            sgi40: false,
        }
    }

    fn sent_desc(t: &TestDev) -> (Pipe, TxDesc, Vec<u8>) {
        let x = t.bulk.take().pop().unwrap();
        let desc: [u8; TX_DESC_LEN] = x.buffer[..TX_DESC_LEN].try_into().unwrap();
        let pipe = Pipe::from_index(x.pipe).unwrap();
        (pipe, TxDesc::from_bytes(&desc), x.buffer[TX_DESC_LEN..x.len].to_vec())
    }

    #[test]
    fn unicast_data_without_firmware() {
        let t = TestDev::running(OpMode::Sta);
        let mut sc = t.sc.lock();
        sc.nodes.newassoc(NodeId(1), peer_info(false), true);
        sc.curchan = Channel::new(6, ChanKind::G);
        let data = data_frame(PEER, None);
        sc.transmit(frame(1, data.clone())).unwrap();

        let (pipe, d, body) = sent_desc(&t);
        assert_eq!(pipe, Pipe::TxBe);
        assert_eq!(body, data);
        assert_eq!(d.pktlen as usize, data.len());
        assert_eq!(d.flags0 & FLAGS0_BMCAST, 0);
        assert_eq!(d.txdw1 & TXDW1_MACID_M, 0);
        assert_eq!(d.txdw1 & TXDW1_QSEL_M, 0);
        assert_eq!(d.txdw4 & TXDW4_DATARATE_M, RIDX_OFDM36 as u32);
        assert_ne!(d.txdw4 & TXDW4_RETRY_LMT_ENA, 0);
        assert_ne!(d.txdw2 & TXDW2_AGGBK, 0);
        assert_eq!(d.txdw3 & TXDW3_DRVRATE, 0);
        assert_ne!(d.txdw8 & TXDW8_HWSEQ_EN, 0);
        assert_eq!(sc.tx_n_active, 1);
    }

    #[test]
    fn multicast_goes_out_at_mcast_rate() {
        let t = TestDev::running(OpMode::HostAp);
        let mut sc = t.sc.lock();
        sc.curchan = Channel::new(36, ChanKind::A);
        sc.transmit(frame(9, data_frame(BROADCAST_ADDR, None))).unwrap();
        let (_, d, _) = sent_desc(&t);
        assert_ne!(d.flags0 & FLAGS0_BMCAST, 0);
        assert_eq!(d.txdw1 & TXDW1_MACID_M, MACID_BC as u32);
        assert_eq!(d.txdw1 & TXDW1_QSEL_M, field(TXDW1_QSEL_M, QSEL_MGNT));
        assert_eq!(d.txdw4 & TXDW4_DATARATE_M, rate::RIDX_OFDM6 as u32);
        assert_eq!(d.txdw4 & TXDW4_RETRY_LMT_ENA, 0);
        assert_ne!(d.txdw3 & TXDW3_DRVRATE, 0);
    }

    #[test]
    fn qos_ampdu_uses_stack_sequence() {
        let t = TestDev::running(OpMode::Sta);
        let mut sc = t.sc.lock();
        sc.nodes.newassoc(NodeId(1), peer_info(true), true);
        sc.curchan = Channel::new(6, ChanKind::Ht20);
        sc.protmode = Protection::RtsCts;
        let mut f = frame(1, data_frame(PEER, Some(0x05 | wh::QOS_ACKPOLICY_NOACK)));
        f.flags = TxFlags::AMPDU;
        f.ac = Ac::Vi;
        f.hw_cipher = Some(Cipher::AesCcm);
        sc.transmit(f).unwrap();

        let (pipe, d, body) = sent_desc(&t);
        assert_eq!(pipe, Pipe::TxVi);
        assert_eq!(&body[22..24], &[0, 0]);
        assert_eq!(d.txdw1 & TXDW1_QSEL_M, field(TXDW1_QSEL_M, 5));
        assert_eq!(d.txdw1 & TXDW1_CIPHER_M, field(TXDW1_CIPHER_M, CIPHER_AES));
        assert_eq!(d.txdw4 & TXDW4_DATARATE_M, ridx_mcs(4) as u32);
        assert_eq!(d.txdw4 & TXDW4_RETRY_LMT_ENA, 0);
        assert_ne!(d.txdw2 & TXDW2_AGGEN, 0);
        assert_ne!(d.txdw3 & (TXDW3_RTSEN | TXDW3_HWRTSEN), 0);
        assert_ne!(d.txdw5 & TXDW5_SGI, 0);
        assert_eq!(d.txdw8 & TXDW8_HWSEQ_EN, 0);
        assert_eq!(d.txdw9, field(TXDW9_SEQ_M, 1));
    }

    #[test]
    fn one_transfer_per_pipe() {
        let t = TestDev::running(OpMode::Sta);
        let mut sc = t.sc.lock();
        sc.nodes.newassoc(NodeId(1), peer_info(false), true);
        for _ in 0..3 {
            sc.transmit(frame(1, data_frame(PEER, None))).unwrap();
        }
        let sent = t.bulk.take();
        assert_eq!(sent.len(), 1);
        assert_eq!(sc.tx_pool.as_ref().unwrap().count(), (1, 13, 2));

        let done = sent.into_iter().next().unwrap().complete(100, Ok(()));
        sc.transfer_complete(done);
        assert_eq!(t.bulk.take().len(), 1);
        let ups = core::mem::take(&mut sc.upcalls);
        assert!(matches!(
            ups.as_slice(),
            [Upcall::TxComplete { node: NodeId(1), ok: true, .. }]
        ));
    }

    #[test]
    fn active_count_survives_idle_pipe() {
        let t = TestDev::running(OpMode::Sta);
        let mut sc = t.sc.lock();
        sc.nodes.newassoc(NodeId(1), peer_info(false), true);
        sc.transmit(frame(1, data_frame(PEER, None))).unwrap();
        let mut vo = frame(1, data_frame(PEER, None));
        vo.ac = Ac::Vo;
        sc.transmit(vo).unwrap();
        assert_eq!(sc.tx_n_active, 2);

        let sent = t.bulk.take();
        let be = sent
            .into_iter()
            .find(|x| x.pipe == Pipe::TxBe.index())
            .unwrap();
        sc.transfer_complete(be.complete(100, Ok(())));
        // VO 仍在发送
        assert!(sc.xfers.is_busy(Pipe::TxVo));
        assert_eq!(sc.tx_n_active, 1);
    }

    #[test]
    fn backlog_waits_for_buffers() {
        let t = TestDev::running(OpMode::Sta);
        let mut sc = t.sc.lock();
        for _ in 0..TX_LIST_COUNT + 4 {
            sc.transmit(frame(1, data_frame(PEER, None))).unwrap();
        }
        assert_eq!(sc.snd.len(), 4);
        assert_eq!(sc.getbuf(), None);

        let x = t.bulk.take().pop().unwrap();
        sc.transfer_complete(x.complete(0, Err(TransferError::Stall)));
        // 释放的缓冲区立即被积压的帧占用
        assert_eq!(sc.snd.len(), 3);
        let ups = core::mem::take(&mut sc.upcalls);
        assert!(matches!(ups.as_slice(), [Upcall::TxComplete { ok: false, .. }]));
        assert_eq!(t.bulk.take().len(), 1);
    }

    #[test]
    fn queue_limit_and_down() {
        let t = TestDev::running(OpMode::Sta);
        let mut sc = t.sc.lock();
        for _ in 0..TX_LIST_COUNT + SND_QUEUE_LEN {
            sc.transmit(frame(1, data_frame(PEER, None))).unwrap();
        }
        assert_eq!(
            sc.transmit(frame(1, data_frame(PEER, None))),
            Err(Error::NoBufs)
        );
        sc.stop();
        assert_eq!(
            sc.transmit(frame(1, data_frame(PEER, None))),
            Err(Error::NetDown)
        );
        // 所有已接受的帧都以失败结束
        let failed = sc
            .upcalls
            .iter()
            .filter(|u| matches!(u, Upcall::TxComplete { ok: false, .. }))
            .count();
        assert_eq!(failed, TX_LIST_COUNT + SND_QUEUE_LEN);
    }

    #[test]
    fn raw_frame_parameters() {
        let t = TestDev::running(OpMode::Monitor);
        let mut sc = t.sc.lock();
        let params = RawParams {
            rate0: 22,
            try0: 3,
            flags: RawFlags::CTS,
        };
        let mut data = data_frame(PEER, None);
        data[0] = wh::FC0_TYPE_MGT | 0x80;
        sc.raw_xmit(frame(2, data), Some(params)).unwrap();
        let (pipe, d, _) = sent_desc(&t);
        assert_eq!(pipe, Pipe::TxVo);
        assert_eq!(d.txdw4 & TXDW4_DATARATE_M, rate::RIDX_CCK11 as u32);
        assert_eq!(d.txdw4 & TXDW4_RETRY_LMT_M, field(TXDW4_RETRY_LMT_M, 3));
        assert_ne!(d.txdw3 & TXDW3_CTS2SELF, 0);
        assert_ne!(d.txdw3 & TXDW3_DRVRATE, 0);
        assert_eq!(d.txdw1 & TXDW1_MACID_M, MACID_BC as u32);

        assert_eq!(
            sc.raw_xmit(frame(2, alloc::vec![0; 8]), None),
            Err(Error::InvalidArgument)
        );
        assert_eq!(sc.tx_pool.as_ref().unwrap().count().1, TX_LIST_COUNT - 1);
    }
}
