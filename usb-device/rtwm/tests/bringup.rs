mod common;

use common::*;
use crab_rtwm::*;
use usb_if::transfer::Direction;

#[test]
fn attach_reads_identity() {
    let h = Harness::attach(ChipKind::Rtl8812au);
    assert_eq!(h.dev.chip(), ChipKind::Rtl8812au);
    assert_eq!(h.dev.macaddr(), MACADDR);
    assert!(!h.dev.is_running());
    // attach 不提交任何传输
    assert!(h.bulk.take().is_empty());
}

#[test]
fn rtl8812au_reaches_running_without_firmware() {
    let h = Harness::attach(ChipKind::Rtl8812au);
    h.dev.init().unwrap();
    assert!(h.dev.is_running());

    // 3 个 bulk-out 端点：29 个非公共页分给 HQ/NQ/LQ
    assert_eq!(h.chip.get8(RQPN_NPQ), 9);
    assert_eq!(h.chip.get32(RQPN), 0x80db_090b);
    // 环形链表的最后一页指回保留页之后
    assert_eq!(h.chip.get32(LLT_INIT), 0x0000_fef9);
    assert_eq!(h.chip.get32(DARFRC), 0x0403_0201);
    assert_eq!(h.chip.get8(CR) & 0xc0, 0xc0);
    assert_eq!(h.chip.get8(MSR) & 0x03, 0);
    for (i, b) in MACADDR.iter().enumerate() {
        assert_eq!(h.chip.get8(MACID + i as u16), *b);
    }
    // CAM 已清空
    assert_eq!(h.chip.get32(CAMCMD), 0xc000_0000);

    let rx = h.bulk.take_endpoint(RX_ENDPOINT).expect("RX transfer");
    assert_eq!(rx.direction, Direction::In);
    assert!(rx.len > 0);
    assert!(h.bulk.take().is_empty());
}

#[test]
fn rtl8821au_reaches_running() {
    let h = Harness::attach(ChipKind::Rtl8821au);
    h.dev.init().unwrap();
    assert!(h.dev.is_running());

    assert_eq!(h.chip.get8(RQPN_NPQ), 8);
    assert_eq!(h.chip.get32(RQPN), 0x80db_0808);
    // 第二个 beacon 队列紧跟在 TX 边界之后
    assert_eq!(h.chip.get8(TXPKTBUF_BCNQ1_BDNY), 252);
}

#[test]
fn init_is_noop_while_running() {
    let h = Harness::attach(ChipKind::Rtl8812au);
    h.dev.init().unwrap();
    h.chip.writes.lock().clear();
    h.dev.init().unwrap();
    assert!(h.chip.writes.lock().is_empty());
}

#[test]
fn failed_power_on_can_be_retried() {
    let h = Harness::attach(ChipKind::Rtl8812au);
    *h.chip.stuck_power.lock() = true;
    assert_eq!(h.dev.init(), Err(Error::Timeout));
    assert!(!h.dev.is_running());
    assert!(h.bulk.take_endpoint(RX_ENDPOINT).is_none());

    *h.chip.stuck_power.lock() = false;
    h.chip.reset();
    h.dev.init().unwrap();
    assert!(h.dev.is_running());
    assert!(h.bulk.take_endpoint(RX_ENDPOINT).is_some());
}

#[test]
fn stop_and_restart() {
    let h = Harness::attach(ChipKind::Rtl8812au);
    h.dev.init().unwrap();
    let _ = h.bulk.take();

    h.dev.stop();
    assert!(!h.dev.is_running());
    assert!(!h.bulk.stopped.lock().is_empty());
    // 停止后拒绝发送
    assert_eq!(
        h.dev.transmit(TxFrame {
            node: NodeId(1),
            data: vec![0; 64],
            ac: Ac::Be,
            flags: TxFlags::empty(),
            seqno: 0,
            hw_cipher: None,
        }),
        Err(Error::NetDown)
    );

    h.dev.init().unwrap();
    assert!(h.dev.is_running());
    assert!(h.bulk.take_endpoint(RX_ENDPOINT).is_some());
}

#[test]
fn static_keys_installed_after_init() {
    let h = Harness::attach(ChipKind::Rtl8812au);
    h.dev.vap_create(OpMode::Sta, None).unwrap();
    let key = Key::new(1, Cipher::Wep, &[0x11; 5], [0; 6]);
    h.dev.key_set(key).unwrap();
    // 设备未运行，只记录在 vap 中
    assert!(!h.chip.written(CAMWRITE));

    h.dev.init().unwrap();
    assert!(h.kernel.scheduled(Work::CommandQueue));
    h.run_pending();

    // CTL0 最后写入：WEP40、keyid 1、有效
    assert_eq!(h.chip.get32(CAMWRITE), 0x0000_8005);
    assert_eq!(h.chip.get32(CAMCMD), 0x8001_0008);
}

#[test]
fn detach_cancels_work() {
    let h = Harness::attach(ChipKind::Rtl8812au);
    h.dev.init().unwrap();
    h.dev.vap_create(OpMode::Sta, None).unwrap();
    h.dev.update_slot(20).unwrap();
    assert!(h.kernel.scheduled(Work::CommandQueue));

    h.dev.detach();
    assert!(!h.dev.is_running());
    assert!(!h.kernel.scheduled(Work::CommandQueue));
    assert_eq!(h.dev.init(), Err(Error::NetDown));
}
