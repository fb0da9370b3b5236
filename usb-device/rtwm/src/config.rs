use alloc::sync::Arc;

use crate::net::{MacAddr, OpMode};

/// 驱动配置
#[derive(Debug, Clone)]
pub struct Config {
    /// 固件镜像；为 `None` 时不加载固件，硬件速率控制与省电不可用
    pub firmware: Option<Arc<[u8]>>,
    /// IPv4 接收校验和卸载
    pub rx_csum: bool,
    /// IPv6 接收校验和卸载
    pub rx_csum6: bool,
    /// 默认工作模式
    pub opmode: OpMode,
    /// 覆盖 EFuse 中的 MAC 地址
    pub macaddr: Option<MacAddr>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            firmware: None,
            rx_csum: true,
            rx_csum6: true,
            opmode: OpMode::Sta,
            macaddr: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn firmware(mut self, image: impl Into<Arc<[u8]>>) -> Self {
        self.firmware = Some(image.into());
        self
    }

    pub fn rx_checksum(mut self, v4: bool, v6: bool) -> Self {
        self.rx_csum = v4;
        self.rx_csum6 = v6;
        self
    }

    pub fn opmode(mut self, opmode: OpMode) -> Self {
        self.opmode = opmode;
        self
    }

    pub fn macaddr(mut self, addr: MacAddr) -> Self {
        self.macaddr = Some(addr);
        self
    }

    /// 实际使用的固件镜像；未启用 `firmware` 特性时总为 `None`
    pub(crate) fn firmware_image(&self) -> Option<&[u8]> {
        if cfg!(feature = "firmware") {
            self.firmware.as_deref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn builder_overrides_defaults() {
        let cfg = Config::new()
            .rx_checksum(false, true)
            .opmode(OpMode::HostAp)
            .macaddr([2, 0, 0, 0, 0, 1]);
        assert!(!cfg.rx_csum);
        assert!(cfg.rx_csum6);
        assert_eq!(cfg.opmode, OpMode::HostAp);
        assert!(cfg.firmware_image().is_none());
    }

    #[cfg(feature = "firmware")]
    #[test]
    fn firmware_image_is_shared() {
        let cfg = Config::new().firmware(vec![1u8, 2, 3]);
        assert_eq!(cfg.firmware_image(), Some(&[1u8, 2, 3][..]));
    }
}
