//! RTL8812AU / RTL8821AU USB 802.11ac 网卡驱动
//!
//! 驱动只负责芯片相关的控制与数据通路：寄存器访问、芯片上电与初始化、
//! 信道与校准、TX 描述符构造与 RX 状态记录解析。802.11 协议状态机、
//! 速率控制算法与加解密由上层协议栈（[`NetStack`]）完成。

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod err;
pub mod net;
pub mod osal;

mod calib;
mod chan;
mod chip;
mod cmdq;
mod config;
mod device;
mod frame;
mod fw;
mod init;
mod io;
mod key;
mod mac;
mod node;
mod pool;
mod rate;
mod reg;
mod rom;
mod rx;
mod table;
mod tx;
mod xfer;

pub use chip::ChipKind;
pub use config::Config;
pub use device::{DEVICES, DeviceId, Host, SND_QUEUE_LEN, Stats, Urtwm, match_device};
pub use err::{Error, Result};
pub use key::{Cipher, Key};
pub use net::*;
pub use osal::{Kernel, Work};
pub use xfer::Pipe;

pub use usb_if::err::TransferError;
pub use usb_if::host::{BulkEngine, ControlPipe, DeviceSpeed};
