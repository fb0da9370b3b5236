//! MAC / BB / RF 寄存器地址与位定义

/// 厂商控制请求号
pub const REQ_REGS: u8 = 0x05;

// MAC 系统配置
pub const SYS_ISO_CTRL: u16 = 0x000;
pub const SYS_FUNC_EN: u16 = 0x002;
pub const APS_FSMCO: u16 = 0x004;
pub const SYS_CLKR: u16 = 0x008;
pub const AFE_MISC: u16 = 0x010;
pub const SPS0_CTRL: u16 = 0x011;
pub const RSV_CTRL: u16 = 0x01c;
pub const RSV_CTRL2: u16 = 0x01d;
pub const RF_CTRL: u16 = 0x01f;
pub const LDOA15_CTRL: u16 = 0x020;
pub const LPLDO_CTRL: u16 = 0x023;
pub const PWR_LDO: u16 = 0x025;
pub const MAC_PHY_CTRL: u16 = 0x02c;
pub const EFUSE_CTRL: u16 = 0x030;
pub const ACLK_MON: u16 = 0x03e;
pub const GPIO_MUXCFG: u16 = 0x040;
pub const GPIO_IO_SEL: u16 = 0x042;
pub const GPIO_OUT: u16 = 0x045;
pub const GPIO_IOSEL: u16 = 0x046;
pub const GPIO_MOD: u16 = 0x047;
pub const GPIO_INTM: u16 = 0x048;
pub const LEDCFG0: u16 = 0x04c;
pub const LEDCFG2: u16 = 0x04e;
pub const LEDCFG3: u16 = 0x04f;
pub const HSIMR: u16 = 0x058;
pub const BT_COEX: u16 = 0x067;
pub const MULTI_FUNC_CTRL: u16 = 0x068;
pub const SDIO_CTRL: u16 = 0x070;
pub const RF_B_CTRL: u16 = 0x076;
pub const RSV_MAC_PWR: u16 = 0x07c;
pub const MCUFWDL: u16 = 0x080;
pub const HIMR: u16 = 0x0b0;
pub const HIMRE: u16 = 0x0b8;
pub const EFUSE_ACCESS: u16 = 0x0cf;
pub const SYS_CFG: u16 = 0x0f0;
pub const TYPE_ID: u16 = 0x0fc;

// MAC 通用配置
pub const CR: u16 = 0x100;
pub const MSR: u16 = 0x102;
pub const PBP: u16 = 0x104;
pub const TRXDMA_CTRL: u16 = 0x10c;
pub const TRXFF_BNDY: u16 = 0x114;
pub const HMETFR: u16 = 0x1cc;
pub const LLT_INIT: u16 = 0x1e0;

pub const fn hmebox(idx: usize) -> u16 {
    0x1d0 + 4 * idx as u16
}

pub const fn hmebox_ext(idx: usize) -> u16 {
    0x1f0 + 4 * idx as u16
}

// DMA / FIFO
pub const RQPN: u16 = 0x200;
pub const TDECTRL: u16 = 0x208;
pub const TXDMA_OFFSET_CHK: u16 = 0x20c;
pub const RQPN_NPQ: u16 = 0x214;
pub const DWBCN1_CTRL: u16 = 0x228;
pub const RXDMA_AGG_PG_TH: u16 = 0x280;
pub const RXDMA_STATUS: u16 = 0x288;
pub const RXDMA_PRO: u16 = 0x290;
pub const EARLY_MODE_CONTROL: u16 = 0x2bc;

// 协议配置
pub const TXPKT_EMPTY: u16 = 0x41a;
pub const FWHW_TXQ_CTRL: u16 = 0x420;
pub const HWSEQ_CTRL: u16 = 0x423;
pub const TXPKTBUF_BCNQ_BDNY: u16 = 0x424;
pub const TXPKTBUF_MGQ_BDNY: u16 = 0x425;
pub const SPEC_SIFS: u16 = 0x428;
pub const RL: u16 = 0x42a;
pub const DARFRC: u16 = 0x430;
pub const RRSR: u16 = 0x440;
pub const CCK_CHECK: u16 = 0x454;
pub const AMPDU_MAX_TIME: u16 = 0x456;
pub const TXPKTBUF_BCNQ1_BDNY: u16 = 0x457;
pub const AMPDU_MAX_LENGTH: u16 = 0x458;
pub const TXPKTBUF_WMAC_LBK_BF_HD: u16 = 0x45d;
pub const FAST_EDCA_CTRL: u16 = 0x460;
pub const DATA_SEC: u16 = 0x483;
pub const QUEUE_CTRL: u16 = 0x4c6;
pub const HT_SINGLE_AMPDU: u16 = 0x4c7;
pub const MAX_AGGR_NUM: u16 = 0x4ca;
pub const BAR_MODE_CTRL: u16 = 0x4cc;

pub const fn arfr_5g(i: u16) -> u16 {
    0x444 + 8 * i
}

pub const fn arfr_2g(i: u16) -> u16 {
    0x48c + 8 * i
}

// EDCA
pub const EDCA_VO_PARAM: u16 = 0x500;
pub const EDCA_VI_PARAM: u16 = 0x504;
pub const EDCA_BE_PARAM: u16 = 0x508;
pub const EDCA_BK_PARAM: u16 = 0x50c;
pub const BCNTCFG: u16 = 0x510;
pub const PIFS: u16 = 0x512;
pub const SIFS_CCK: u16 = 0x514;
pub const SIFS_OFDM: u16 = 0x516;
pub const SLOT: u16 = 0x51b;
pub const TXPAUSE: u16 = 0x522;
pub const TBTT_PROHIBIT: u16 = 0x540;
pub const BCN_CTRL: u16 = 0x550;
pub const DUAL_TSF_RST: u16 = 0x553;
pub const BCN_INTERVAL: u16 = 0x554;
pub const DRVERLYINT: u16 = 0x558;
pub const BCNDMATIM: u16 = 0x559;
pub const USTIME_TSF: u16 = 0x55c;
pub const ACMHWCTRL: u16 = 0x5c0;
pub const SCH_TXCMD: u16 = 0x5f8;

pub const fn tsftr(id: u16) -> u16 {
    0x560 + 8 * id
}

// WMAC
pub const RCR: u16 = 0x608;
pub const RX_PKT_LIMIT: u16 = 0x60c;
pub const RX_DRVINFO_SZ: u16 = 0x60f;
pub const MACID: u16 = 0x610;
pub const BSSID: u16 = 0x618;
pub const MAR: u16 = 0x620;
pub const USTIME_EDCA: u16 = 0x638;
pub const MAC_SPEC_SIFS: u16 = 0x63a;
pub const ACKTO: u16 = 0x640;
pub const NAV_UPPER: u16 = 0x652;
pub const WMAC_TRXPTCL_CTL: u16 = 0x668;
pub const CAMCMD: u16 = 0x670;
pub const CAMWRITE: u16 = 0x674;
pub const SECCFG: u16 = 0x680;
pub const RXFLTMAP0: u16 = 0x6a0;
pub const RXFLTMAP1: u16 = 0x6a2;
pub const RXFLTMAP2: u16 = 0x6a4;
pub const BCN_PSR_RPT: u16 = 0x6a8;

// USB
pub const USB_AP_CTRL: u16 = 0xf008;
pub const USB_DMA_AGG_CTRL: u16 = 0xf050;
pub const USB_INFO: u16 = 0xfe17;
pub const USB_HRPWM: u16 = 0xfe58;

// SYS_FUNC_EN
pub const SYS_FUNC_EN_BBRSTB: u16 = 0x0001;
pub const SYS_FUNC_EN_BB_GLB_RST: u16 = 0x0002;
pub const SYS_FUNC_EN_USBA: u16 = 0x0004;
pub const SYS_FUNC_EN_CPUEN: u16 = 0x0400;
pub const SYS_FUNC_EN_ELDR: u16 = 0x1000;

// APS_FSMCO
pub const APS_FSMCO_APFM_ONMAC: u32 = 0x0000_0100;
pub const APS_FSMCO_APFM_OFF: u32 = 0x0000_0200;
pub const APS_FSMCO_APFM_RSM: u32 = 0x0000_0400;
pub const APS_FSMCO_AFSM_HSUS: u32 = 0x0000_0800;
pub const APS_FSMCO_AFSM_PCIE: u32 = 0x0000_1000;
pub const APS_FSMCO_APDM_HPDN: u32 = 0x0000_8000;
pub const APS_FSMCO_RDY_MACON: u32 = 0x0001_0000;
pub const APS_FSMCO_SUS_HOST: u32 = 0x0002_0000;
pub const APS_FSMCO_SOP_ABG: u32 = 0x0800_0000;
pub const APS_FSMCO_SOP_RCK: u32 = 0x2000_0000;

// SYS_ISO_CTRL
pub const SYS_ISO_CTRL_IP2MAC: u8 = 0x20;

// LDOA15_CTRL
pub const LDOA15_CTRL_EN: u8 = 0x01;

// SYS_CLKR
pub const SYS_CLKR_ANA8M: u16 = 0x0002;
pub const SYS_CLKR_LOADER_EN: u16 = 0x0020;

// RF_CTRL
pub const RF_CTRL_EN: u8 = 0x01;
pub const RF_CTRL_RSTB: u8 = 0x02;
pub const RF_CTRL_SDMRSTB: u8 = 0x04;

// GPIO_MUXCFG
pub const GPIO_MUXCFG_ENBT: u8 = 0x20;

// EFUSE_CTRL
pub const EFUSE_CTRL_DATA_M: u32 = 0x0000_00ff;
pub const EFUSE_CTRL_ADDR_M: u32 = 0x0003_ff00;
pub const EFUSE_CTRL_VALID: u32 = 0x8000_0000;
pub const EFUSE_ACCESS_ON: u8 = 0x69;
pub const EFUSE_ACCESS_OFF: u8 = 0x00;
pub const EFUSE_MAX_LEN: u16 = 512;

// MULTI_FUNC_CTRL
pub const MULTI_BT_FUNC_EN: u32 = 0x0004_0000;

// SYS_CFG
pub const SYS_CFG_TRP_VAUX_EN: u32 = 0x0080_0000;
pub const SYS_CFG_CHIP_VER_RTL_M: u32 = 0x0000_f000;
pub const SYS_CFG_TRP_BT_EN: u32 = 0x0100_0000;
pub const CHIP_C_CUT: u32 = 1;

// MCUFWDL
pub const MCUFWDL_EN: u32 = 0x0000_0001;
pub const MCUFWDL_RDY: u32 = 0x0000_0002;
pub const MCUFWDL_CHKSUM_RPT: u32 = 0x0000_0004;
pub const MCUFWDL_WINTINI_RDY: u32 = 0x0000_0040;
pub const MCUFWDL_RAM_DL_SEL: u32 = 0x0000_0080;
pub const MCUFWDL_PAGE_M: u32 = 0x0007_0000;
pub const MCUFWDL_ROM_DLEN: u32 = 0x0008_0000;
pub const MCUFWDL_CPRST: u32 = 0x0080_0000;

/// 固件下载窗口
pub const FW_START_ADDR: u16 = 0x1000;
pub const FW_PAGE_SIZE: usize = 4096;
pub const FW_MAX_SIZE: usize = 0x8000;
pub const FW_HEADER_SIZE: usize = 32;
pub const FW_MAX_BLOCK_SIZE: usize = 196;

// CR
pub const CR_HCI_TXDMA_EN: u16 = 0x0001;
pub const CR_HCI_RXDMA_EN: u16 = 0x0002;
pub const CR_TXDMA_EN: u16 = 0x0004;
pub const CR_RXDMA_EN: u16 = 0x0008;
pub const CR_PROTOCOL_EN: u16 = 0x0010;
pub const CR_SCHEDULE_EN: u16 = 0x0020;
pub const CR_MACTXEN: u16 = 0x0040;
pub const CR_MACRXEN: u16 = 0x0080;
pub const CR_ENSWBCN: u16 = 0x0100;
pub const CR_ENSEC: u16 = 0x0200;
pub const CR_CALTMR_EN: u16 = 0x0400;
/// 上电后打开的 DMA 与协议模块
pub const CR_POWER_ON: u16 = CR_HCI_TXDMA_EN
    | CR_TXDMA_EN
    | CR_HCI_RXDMA_EN
    | CR_RXDMA_EN
    | CR_PROTOCOL_EN
    | CR_SCHEDULE_EN
    | CR_ENSEC
    | CR_CALTMR_EN;

// MSR
pub const MSR_NOLINK: u8 = 0x00;
pub const MSR_ADHOC: u8 = 0x01;
pub const MSR_INFRA: u8 = 0x02;
pub const MSR_AP: u8 = 0x03;
pub const MSR_MASK: u8 = MSR_AP;

// PBP
pub const PBP_PSTX_M: u8 = 0xf0;
pub const PBP_512: u8 = 3;

// TRXDMA_CTRL
pub const TRXDMA_CTRL_RXDMA_AGG_EN: u8 = 0x04;
pub const TRXDMA_CTRL_QMAP_M: u16 = 0xfff0;
/// 三个及以上 bulk-out 端点
pub const TRXDMA_CTRL_QMAP_3EP: u16 = 0xf5b0;
pub const TRXDMA_CTRL_QMAP_HQ_NQ: u16 = 0xfaf0;
pub const TRXDMA_CTRL_QMAP_HQ: u16 = 0xfff0;

// LLT_INIT
pub const LLT_INIT_DATA_M: u32 = 0x0000_00ff;
pub const LLT_INIT_ADDR_M: u32 = 0x0000_ff00;
pub const LLT_INIT_OP_M: u32 = 0xc000_0000;
pub const LLT_INIT_OP_WRITE: u32 = 1;

// RQPN
pub const RQPN_HPQ_M: u32 = 0x0000_00ff;
pub const RQPN_LPQ_M: u32 = 0x0000_ff00;
pub const RQPN_PUBQ_M: u32 = 0x00ff_0000;
pub const RQPN_LD: u32 = 0x8000_0000;

// DWBCN1_CTRL
pub const DWBCN1_CTRL_SEL_EN: u8 = 0x02;

// TDECTRL
pub const TDECTRL_BLK_DESC_NUM_M: u32 = 0x0000_00f0;
pub const TDECTRL_BCN_VALID: u32 = 0x0001_0000;

// TXDMA_OFFSET_CHK
pub const TXDMA_OFFSET_DROP_DATA_EN: u32 = 0x0000_0200;

// FWHW_TXQ_CTRL
pub const FWHW_TXQ_CTRL_AMPDU_RTY_NEW: u8 = 0x80;
pub const FWHW_TXQ_CTRL_REAL_BEACON: u32 = 0x0040_0000;

// HT_SINGLE_AMPDU
pub const HT_SINGLE_AMPDU_PKT_ENA: u8 = 0x80;

// RL
pub const RL_LRL_M: u16 = 0x003f;
pub const RL_SRL_M: u16 = 0x3f00;

// RRSR
pub const RRSR_RATE_BITMAP_M: u32 = 0x000f_ffff;
pub const RRSR_RATE_CCK_ONLY_1M: u32 = 0x000f_fff1;
/// 1/2/5.5/11/6/12/24 Mbps
pub const RRSR_BASIC_2GHZ: u32 = 0x15f;
/// 6/12/24 Mbps
pub const RRSR_BASIC_5GHZ: u32 = 0x150;
pub const CCK_CHECK_5GHZ: u8 = 0x80;

// DATA_SEC
pub const DATA_SEC_NO_EXT: u8 = 0x00;
pub const DATA_SEC_PRIM_UP_20: u8 = 0x01;
pub const DATA_SEC_PRIM_DOWN_20: u8 = 0x02;

// EDCA_XX_PARAM
pub const EDCA_PARAM_AIFS_M: u32 = 0x0000_00ff;
pub const EDCA_PARAM_ECWMIN_M: u32 = 0x0000_0f00;
pub const EDCA_PARAM_ECWMAX_M: u32 = 0x0000_f000;
pub const EDCA_PARAM_TXOP_M: u32 = 0xffff_0000;

// ACMHWCTRL
pub const ACMHWCTRL_EN: u8 = 0x01;
pub const ACMHWCTRL_ACM_MASK: u8 = 0x0f;

// BCN_CTRL
pub const BCN_CTRL_EN_BCN: u8 = 0x08;
pub const BCN_CTRL_DIS_TSF_UDT0: u8 = 0x10;

// DUAL_TSF_RST
pub const DUAL_TSF_RST0: u8 = 0x01;
pub const DUAL_TSF_RST_TXOK: u8 = 0x20;

// TXPAUSE
pub const TX_QUEUE_AC: u8 = 0x0f;
pub const TX_QUEUE_ALL: u8 = 0xff;

// RCR
pub const RCR_AAP: u32 = 0x0000_0001;
pub const RCR_APM: u32 = 0x0000_0002;
pub const RCR_AM: u32 = 0x0000_0004;
pub const RCR_AB: u32 = 0x0000_0008;
pub const RCR_CBSSID_DATA: u32 = 0x0000_0040;
pub const RCR_CBSSID_BCN: u32 = 0x0000_0080;
pub const RCR_ADF: u32 = 0x0000_0800;
pub const RCR_ACF: u32 = 0x0000_1000;
pub const RCR_AMF: u32 = 0x0000_2000;
pub const RCR_HTC_LOC_CTRL: u32 = 0x0000_4000;
pub const RCR_DIS_CHK_14: u32 = 0x0020_0000;
pub const RCR_TCP_OFFLD_EN: u32 = 0x0200_0000;
pub const RCR_VHT_ACK: u32 = 0x0400_0000;
pub const RCR_APP_PHYSTS: u32 = 0x1000_0000;
pub const RCR_APP_ICV: u32 = 0x2000_0000;
pub const RCR_APP_MIC: u32 = 0x4000_0000;

pub const RX_DRVINFO_SZ_DEF: u8 = 4;

/// RXFLTMAP 中管理帧子类型对应的位
pub const fn rxfltmap_subtype(subtype: u8) -> u16 {
    1 << (subtype >> 4)
}

// CAM
pub const CAMCMD_ADDR_M: u32 = 0x0000_ffff;
pub const CAMCMD_WRITE: u32 = 0x0001_0000;
pub const CAMCMD_CLR: u32 = 0x4000_0000;
pub const CAMCMD_POLLING: u32 = 0x8000_0000;
pub const CAM_ENTRY_COUNT: usize = 64;
pub const CAM_ALGO_M: u32 = 0x0000_001c;
pub const CAM_KEYID_M: u32 = 0x0000_0003;
pub const CAM_MACLO_M: u32 = 0xffff_0000;
pub const CAM_VALID: u32 = 0x0000_8000;
pub const CAM_ALGO_WEP40: u32 = 1;
pub const CAM_ALGO_TKIP: u32 = 2;
pub const CAM_ALGO_AES: u32 = 4;
pub const CAM_ALGO_WEP104: u32 = 5;

pub const fn cam_ctl0(entry: u32) -> u32 {
    entry * 8
}

pub const fn cam_ctl1(entry: u32) -> u32 {
    entry * 8 + 1
}

pub const fn cam_key(entry: u32, i: u32) -> u32 {
    entry * 8 + 2 + i
}

pub const fn cam_ctl6(entry: u32) -> u32 {
    entry * 8 + 6
}

pub const fn cam_ctl7(entry: u32) -> u32 {
    entry * 8 + 7
}

// SECCFG
pub const SECCFG_TXUCKEY_DEF: u16 = 0x0001;
pub const SECCFG_RXUCKEY_DEF: u16 = 0x0002;
pub const SECCFG_TXENC_ENA: u16 = 0x0004;
pub const SECCFG_RXDEC_ENA: u16 = 0x0008;
pub const SECCFG_TXBCKEY_DEF: u16 = 0x0040;
pub const SECCFG_RXBCKEY_DEF: u16 = 0x0080;

// LEDCFG
pub const LEDCFG2_DIS: u8 = 0x08;
pub const LEDCFG2_EN: u8 = 0x60;
pub const LEDCFG0_DIS: u8 = 0x08;
pub const LEDCFG_SW_EN: u8 = 0x20;

// 基带寄存器
pub const BB_OFDMCCK_EN: u16 = 0x808;
pub const BB_TX_PATH: u16 = 0x80c;
pub const BB_AGC_CORE: u16 = 0x81c;
pub const BB_AGC_TABLE: u16 = 0x82c;
pub const BB_PWED_TH: u16 = 0x830;
pub const BB_BW_INDICATION: u16 = 0x834;
pub const BB_CCA_ON_SEC: u16 = 0x838;
pub const BB_L1_PEAK_TH: u16 = 0x848;
pub const BB_FC_AREA: u16 = 0x860;
pub const BB_RFMOD: u16 = 0x8ac;
pub const BB_HSSI_READ: u16 = 0x8b0;
pub const BB_ADC_BUF_CLK: u16 = 0x8c4;
pub const BB_ANTSEL_SW: u16 = 0x900;
pub const BB_SINGLETONE_CONT_TX: u16 = 0x914;
pub const BB_CCK0_SYSTEM: u16 = 0xa00;
pub const BB_CCK_RX_PATH: u16 = 0xa04;

pub const fn bb_fpga0_rfparam(idx: usize) -> u16 {
    0x878 + 4 * idx as u16
}

pub const fn bb_fpga0_rfifaceoe(chain: usize) -> u16 {
    0x860 + 4 * chain as u16
}

/// RTL8812AU C-cut 以前的芯片在此处标记 CCK 高功率模式
pub const BB_CCK_HIPWR_CHK: u16 = 0x804;
pub const BB_CCK_HIPWR: u32 = 0x0001_0000;
pub const BB_L1_PEAK_CHK: u16 = 0x837;

pub const BB_RFMOD_EXT_CHAN_M: u32 = 0x0000_003c;
pub const BB_CCA_ON_SEC_EXT_CHAN_M: u32 = 0xf000_0000;
pub const BB_L1_PEAK_TH_M: u32 = 0x03c0_0000;
pub const BB_FC_AREA_M: u32 = 0x1ffe_0000;
pub const BB_ADC_BUF_CLK_BIT: u32 = 0x4000_0000;
pub const BB_CCK0_SIDEBAND: u32 = 0x0000_0010;
pub const BB_FPGA0_RFPARAM_ANTSEL_EN: u32 = 0x0000_2000;
pub const BB_FPGA0_RFIFACEOE0_ANT_M: u32 = 0x0000_0300;
pub const BB_HSSI_READ_ADDR_M: u32 = 0x0000_00ff;
pub const BB_CCA_ON_SEC_CCA_OFF: u32 = 0x0000_0008;
pub const BB_OFDMCCK_EN_CCK: u32 = 0x1000_0000;
pub const BB_OFDMCCK_EN_OFDM: u32 = 0x2000_0000;

pub const fn bb_ofdm0_agccore1(chain: usize) -> u16 {
    0xc50 + 0x200 * chain as u16
}

pub const fn bb_tx_scale(chain: usize) -> u16 {
    0xc1c + 0x200 * chain as u16
}

pub const fn bb_txagc_cck11_1(chain: usize) -> u16 {
    0xc20 + 0x200 * chain as u16
}

pub const fn bb_txagc_ofdm18_6(chain: usize) -> u16 {
    0xc24 + 0x200 * chain as u16
}

pub const fn bb_txagc_ofdm54_24(chain: usize) -> u16 {
    0xc28 + 0x200 * chain as u16
}

pub const fn bb_txagc_mcs3_0(chain: usize) -> u16 {
    0xc2c + 0x200 * chain as u16
}

pub const fn bb_txagc_mcs7_4(chain: usize) -> u16 {
    0xc30 + 0x200 * chain as u16
}

pub const fn bb_txagc_mcs11_8(chain: usize) -> u16 {
    0xc34 + 0x200 * chain as u16
}

pub const fn bb_txagc_mcs15_12(chain: usize) -> u16 {
    0xc38 + 0x200 * chain as u16
}

pub const fn bb_lssi_param(chain: usize) -> u16 {
    0xc90 + 0x200 * chain as u16
}

pub const fn bb_hssi_param1(chain: usize) -> u16 {
    0xc00 + 0x200 * chain as u16
}

pub const fn bb_lssi_readback(chain: usize) -> u16 {
    0xd08 + 0x40 * chain as u16
}

pub const fn bb_hspi_readback(chain: usize) -> u16 {
    0xd04 + 0x40 * chain as u16
}

pub const fn bb_rfe_pinmux(chain: usize) -> u16 {
    0xcb0 + 0x200 * chain as u16
}

pub const fn bb_rfe_inv(chain: usize) -> u16 {
    0xcb4 + 0x200 * chain as u16
}

pub const BB_TX_SCALE_SWING_M: u32 = 0xffe0_0000;
pub const BB_HSSI_PARAM1_PI: u32 = 0x0000_0004;
pub const BB_RFE_INV_M: u32 = 0x3ff0_0000;
pub const BB_LSSI_PARAM_ADDR_M: u32 = 0x0ff0_0000;
pub const BB_LSSI_PARAM_DATA_M: u32 = 0x000f_ffff;
pub const BB_LSSI_READBACK_DATA_M: u32 = 0x000f_ffff;

// RF 寄存器
pub const RF_AC: u8 = 0x00;
pub const RF_CHNLBW: u8 = 0x18;
pub const RF_T_METER: u8 = 0x42;
pub const RF_LCK: u8 = 0xb4;

pub const RF_CHNLBW_CHNL_M: u32 = 0x0000_00ff;
pub const RF_CHNLBW_BW20: u32 = 0x0000_0c00;
pub const RF_CHNLBW_BW40: u32 = 0x0000_0400;
pub const RF_CHNLBW_BW_M: u32 = 0x0000_0c00;
pub const RF_CHNLBW_LCSTART: u32 = 0x0000_8000;
pub const RF_CHNLBW_BAND_M: u32 = 0x0007_0300;
pub const RF_T_METER_START: u32 = 0x0003_0000;
pub const RF_T_METER_VAL_M: u32 = 0x0000_fc00;
pub const RF_LCK_ENABLE: u32 = 0x0000_4000;

/// RF 表中大于该值的寄存器号表示延时（微秒）
pub const RF_DELAY_MARK: u8 = 0xf8;

// 主机到固件的命令
pub const CMD_RSVD_PAGE: u8 = 0x00;
pub const CMD_MSR_RPT: u8 = 0x01;
pub const CMD_SET_PWRMODE: u8 = 0x20;
pub const CMD_IQ_CALIBRATE: u8 = 0x45;
pub const H2C_NBOX: usize = 4;
pub const H2C_MSG_LEN: usize = 7;

pub const MSRRPT_B0_DISASSOC: u8 = 0x00;
pub const MSRRPT_B0_ASSOC: u8 = 0x01;

pub const PWRMODE_CAM: u8 = 0;
pub const PWRMODE_LEG: u8 = 1;
pub const PWRMODE_B1_RLBM_M: u8 = 0x0f;
pub const PWRMODE_B1_SMART_PS_M: u8 = 0xf0;
pub const PWRMODE_B1_MODE_MIN: u8 = 0;
pub const PWRMODE_B1_LEG_NULLDATA: u8 = 2;
pub const PWRMODE_STATE_RFON: u8 = 0x04;
pub const PWRMODE_STATE_ALLON: u8 = 0x0c;
pub const PWRMODE_B5_NO_BTCOEX: u8 = 0x40;

pub const IQ_CALIB_BAND_2G: u8 = 0x10;
pub const IQ_CALIB_BAND_5G: u8 = 0x20;
pub const IQ_CALIB_BW_20: u8 = 0x01;
pub const IQ_CALIB_BW_40: u8 = 0x02;

/// 为 beacon 预留的最大长度
pub const BCN_MAX_SIZE: usize = 512;

/// 多速率重试表长度
pub const MRR_SIZE: u16 = 8;

/// 最大发射功率索引
pub const MAX_TX_PWR: i16 = 0x3f;

/// 噪声底噪，单位 dBm
pub const NOISE_FLOOR: i8 = -95;

/// MAC id
pub const MACID_BC: u8 = 1;
pub const MACID_MAX: usize = 127;
pub const MACID_VALID: u8 = 0x80;
