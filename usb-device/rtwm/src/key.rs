//! 硬件加密槽（CAM）

use log::{debug, warn};

use crate::{
    err::{Error, Result},
    frame::{CIPHER_AES, CIPHER_RC4},
    io::{Io, field},
    net::MacAddr,
    reg::*,
};

/// 静态（WEP/组）密钥槽位数，位于 CAM 开头
pub const WEP_NKID: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cipher {
    Wep,
    Tkip,
    AesCcm,
}

impl Cipher {
    /// TX 描述符中的加密类型
    pub(crate) fn tx_cipher(self) -> u32 {
        match self {
            Self::Wep | Self::Tkip => CIPHER_RC4,
            Self::AesCcm => CIPHER_AES,
        }
    }
}

/// 写入硬件的密钥
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    /// CAM 槽位
    pub keyix: u8,
    pub cipher: Cipher,
    pub key: [u8; 16],
    pub keylen: usize,
    pub macaddr: MacAddr,
}

impl Key {
    pub fn new(keyix: u8, cipher: Cipher, material: &[u8], macaddr: MacAddr) -> Self {
        let mut key = [0u8; 16];
        let keylen = material.len().min(key.len());
        key[..keylen].copy_from_slice(&material[..keylen]);
        Self {
            keyix,
            cipher,
            key,
            keylen,
            macaddr,
        }
    }

    /// 是否为 vap 的静态密钥（0..4 槽）
    pub fn is_static(&self) -> bool {
        self.keyix < WEP_NKID
    }

    fn algo(&self) -> u32 {
        match self.cipher {
            Cipher::Wep if self.keylen < 8 => CAM_ALGO_WEP40,
            Cipher::Wep => CAM_ALGO_WEP104,
            Cipher::Tkip => CAM_ALGO_TKIP,
            Cipher::AesCcm => CAM_ALGO_AES,
        }
    }

    fn keyid(&self) -> u32 {
        if self.is_static() {
            self.keyix as u32
        } else {
            0
        }
    }
}

/// 从位图中分配一个成对密钥槽；表满时返回 `None`
pub(crate) fn alloc_slot(bmap: &mut u64) -> Option<u8> {
    let free = (WEP_NKID as usize..CAM_ENTRY_COUNT).find(|&i| *bmap & (1 << i) == 0);
    match free {
        Some(i) => {
            *bmap |= 1 << i;
            Some(i as u8)
        }
        None => {
            warn!("no free space in the key table");
            None
        }
    }
}

pub(crate) fn cam_init(io: &Io) -> Result {
    io.write32(CAMCMD, CAMCMD_POLLING | CAMCMD_CLR)
}

fn cam_write(io: &Io, addr: u32, data: u32) -> Result {
    io.write32(CAMWRITE, data)?;
    io.write32(
        CAMCMD,
        CAMCMD_POLLING | CAMCMD_WRITE | field(CAMCMD_ADDR_M, addr),
    )
}

/// 写入密钥，CTL0 最后写入使槽位生效
pub(crate) fn key_set(io: &Io, k: &Key) -> Result {
    let ix = k.keyix as u32;
    if ix as usize >= CAM_ENTRY_COUNT {
        return Err(Error::InvalidArgument);
    }
    debug!(
        "key set: keyix {}, keyid {}, algo {}, len {}, macaddr {:02x?}",
        k.keyix,
        k.keyid(),
        k.algo(),
        k.keylen,
        k.macaddr
    );

    cam_write(io, cam_ctl6(ix), 0)?;
    cam_write(io, cam_ctl7(ix), 0)?;
    for (i, word) in k.key.chunks_exact(4).enumerate() {
        let word = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
        cam_write(io, cam_key(ix, i as u32), word)?;
    }
    let m = &k.macaddr;
    cam_write(io, cam_ctl1(ix), u32::from_le_bytes([m[2], m[3], m[4], m[5]]))?;
    cam_write(
        io,
        cam_ctl0(ix),
        field(CAM_ALGO_M, k.algo())
            | field(CAM_KEYID_M, k.keyid())
            | field(CAM_MACLO_M, u16::from_le_bytes([m[0], m[1]]) as u32)
            | CAM_VALID,
    )
}

/// 清空槽位并在位图中释放
pub(crate) fn key_del(io: &Io, k: &Key, bmap: &mut u64) {
    let ix = k.keyix as u32;
    debug!("key del: keyix {}, macaddr {:02x?}", k.keyix, k.macaddr);
    let _ = cam_write(io, cam_ctl0(ix), 0);
    let _ = cam_write(io, cam_ctl1(ix), 0);
    for i in 0..4 {
        let _ = cam_write(io, cam_key(ix, i), 0);
    }
    if (ix as usize) < CAM_ENTRY_COUNT {
        *bmap &= !(1u64 << ix);
    }
}
