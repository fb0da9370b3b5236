mod common;

use common::*;
use crab_rtwm::*;

const BSSID: MacAddr = [0x02, 0x11, 0x22, 0x33, 0x44, 0x55];
const DST: MacAddr = [0x02, 0xaa, 0xbb, 0xcc, 0xdd, 0xee];
const TX_DESC_LEN: usize = 40;
const RX_STAT_LEN: usize = 24;

const EP_VO: u8 = 0x02;
const EP_VI: u8 = 0x03;
const EP_BE: u8 = 0x04;

/// STA 已关联到 BSSID 的运行中设备
fn associated() -> Harness {
    let h = Harness::attach(ChipKind::Rtl8812au);
    h.dev.vap_create(OpMode::Sta, None).unwrap();
    h.dev.init().unwrap();
    h.dev
        .newstate(
            State::Run,
            Some(Bss {
                bssid: BSSID,
                addr: BSSID,
                associd: 1,
                intval: 100,
                chan: Channel::new(1, ChanKind::G),
            }),
        )
        .unwrap();
    h
}

fn header(fc0: u8, fc1: u8, a1: MacAddr, a2: MacAddr, a3: MacAddr) -> Vec<u8> {
    let mut f = vec![fc0, fc1, 0, 0];
    f.extend_from_slice(&a1);
    f.extend_from_slice(&a2);
    f.extend_from_slice(&a3);
    f.extend_from_slice(&[0, 0]);
    f
}

/// ToDS 数据帧
fn data_frame(payload: usize) -> Vec<u8> {
    let mut f = header(0x08, 0x01, BSSID, MACADDR, DST);
    f.extend((0..payload).map(|i| i as u8));
    f
}

fn tx(data: Vec<u8>, ac: Ac) -> TxFrame {
    TxFrame {
        node: NodeId(1),
        data,
        ac,
        flags: TxFlags::empty(),
        seqno: 7,
        hw_cipher: None,
    }
}

/// 单条接收记录：状态头只填包长
fn rx_record(frame: &[u8], dw0_extra: u32) -> Vec<u8> {
    let mut rec = vec![0u8; RX_STAT_LEN];
    let dw0 = frame.len() as u32 | dw0_extra;
    rec[..4].copy_from_slice(&dw0.to_le_bytes());
    rec.extend_from_slice(frame);
    rec
}

fn deliver_rx(h: &Harness, payload: &[u8]) {
    let mut t = h.bulk.take_endpoint(RX_ENDPOINT).expect("RX transfer");
    t.buffer[..payload.len()].copy_from_slice(payload);
    h.complete(t, payload.len());
}

#[test]
fn data_frame_goes_out_with_descriptor() {
    let h = associated();
    let _ = h.net.take();
    let frame = data_frame(40);
    h.dev.transmit(tx(frame.clone(), Ac::Be)).unwrap();

    let t = h.bulk.take_endpoint(EP_BE).expect("BE transfer");
    assert_eq!(t.len, TX_DESC_LEN + frame.len());
    assert_eq!(&t.buffer[TX_DESC_LEN..t.len], frame.as_slice());
    // 描述符第一个字的低 16 位为包长
    assert_eq!(
        u16::from_le_bytes([t.buffer[0], t.buffer[1]]) as usize,
        frame.len()
    );

    h.complete(t, TX_DESC_LEN + frame.len());
    assert_eq!(
        h.net.take(),
        vec![NetEvent::TxComplete {
            node: NodeId(1),
            len: frame.len(),
            ok: true,
        }]
    );
    // 回调发生在锁外，可以重新进入驱动
    assert_eq!(h.net.reentered.lock().last(), Some(&true));
}

#[test]
fn access_categories_map_to_endpoints() {
    let h = associated();
    h.dev.transmit(tx(data_frame(8), Ac::Vo)).unwrap();
    h.dev.transmit(tx(data_frame(8), Ac::Vi)).unwrap();
    // 管理帧总是走 VO 管道
    let probe = header(0x40, 0x00, BSSID, MACADDR, BSSID);
    h.dev
        .raw_xmit(
            tx(probe, Ac::Be),
            Some(RawParams {
                rate0: 2,
                try0: 3,
                flags: RawFlags::empty(),
            }),
        )
        .unwrap();

    assert!(h.bulk.take_endpoint(EP_VO).is_some());
    assert!(h.bulk.take_endpoint(EP_VI).is_some());
    // 第二个 VO 传输等第一个完成
    assert!(h.bulk.take_endpoint(EP_VO).is_none());
}

#[test]
fn one_transfer_in_flight_per_pipe() {
    let h = associated();
    let _ = h.net.take();
    h.dev.transmit(tx(data_frame(16), Ac::Be)).unwrap();
    h.dev.transmit(tx(data_frame(32), Ac::Be)).unwrap();

    let first = h.bulk.take_endpoint(EP_BE).unwrap();
    assert!(h.bulk.take_endpoint(EP_BE).is_none());
    let len = first.len;
    h.complete(first, len);

    let second = h.bulk.take_endpoint(EP_BE).expect("next transfer");
    assert_eq!(second.len, TX_DESC_LEN + data_frame(32).len());
}

#[test]
fn received_frame_reaches_stack() {
    let h = associated();
    let _ = h.net.take();
    h.dev
        .newassoc(
            NodeId(9),
            NodeInfo {
                addr: BSSID,
                ht: false,
                sgi20: false,
                sgi40: false,
            },
            true,
        )
        .unwrap();

    let frame = header(0x08, 0x02, MACADDR, BSSID, DST);
    deliver_rx(&h, &rx_record(&frame, 0));

    assert_eq!(
        h.net.take(),
        vec![NetEvent::Input {
            node: Some(NodeId(9)),
            data: frame,
            flags: RxFlags::empty(),
        }]
    );
    assert_eq!(h.net.reentered.lock().last(), Some(&true));
    // 接收缓冲区重新提交
    assert!(h.bulk.take_endpoint(RX_ENDPOINT).is_some());
}

#[test]
fn aggregated_records_are_split() {
    let h = associated();
    let _ = h.net.take();
    let a = header(0x08, 0x02, MACADDR, BSSID, DST);
    let mut b = header(0x08, 0x02, MACADDR, BSSID, DST);
    b.extend_from_slice(&[0x5a; 13]);

    let mut buf = rx_record(&a, 0);
    buf.resize(buf.len().next_multiple_of(8), 0);
    buf.extend(rx_record(&b, 0));
    deliver_rx(&h, &buf);

    let lens: Vec<usize> = h
        .net
        .take()
        .into_iter()
        .filter_map(|e| match e {
            NetEvent::Input { data, .. } => Some(data.len()),
            _ => None,
        })
        .collect();
    assert_eq!(lens, vec![a.len(), b.len()]);
}

#[test]
fn crc_errors_are_counted_and_dropped() {
    let h = associated();
    let _ = h.net.take();
    let frame = header(0x08, 0x02, MACADDR, BSSID, DST);
    // RXDW0_CRCERR
    deliver_rx(&h, &rx_record(&frame, 0x0000_4000));

    assert!(h.net.take().is_empty());
    assert_eq!(h.dev.stats().ierrors, 1);
    assert!(h.bulk.take_endpoint(RX_ENDPOINT).is_some());
}

#[test]
fn late_completion_after_stop_is_ignored() {
    let h = associated();
    let _ = h.net.take();
    h.dev.transmit(tx(data_frame(16), Ac::Be)).unwrap();
    let t = h.bulk.take_endpoint(EP_BE).unwrap();

    h.dev.stop();
    // 停止时在途的帧以失败结束
    assert_eq!(
        h.net.take(),
        vec![NetEvent::TxComplete {
            node: NodeId(1),
            len: data_frame(16).len(),
            ok: false,
        }]
    );

    let len = t.len;
    h.complete(t, len);
    assert!(h.net.take().is_empty());
}
