//! MAC id 表
//!
//! 固件在 TX 报告里只给出 MAC id，驱动据此找回协议栈的节点。

use alloc::collections::BTreeMap;

use log::{debug, warn};

use crate::{
    net::{MacAddr, NodeId, NodeInfo},
    reg::{MACID_BC, MACID_MAX},
};

/// 尚未分配 MAC id
pub const MACID_UNDEFINED: u8 = 0xff;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Peer {
    pub id: u8,
    pub info: NodeInfo,
    pub last_rssi: i8,
}

pub(crate) struct NodeTable {
    ids: [Option<NodeId>; MACID_MAX + 1],
    peers: BTreeMap<NodeId, Peer>,
}

impl NodeTable {
    pub fn new() -> Self {
        Self {
            ids: [None; MACID_MAX + 1],
            peers: BTreeMap::new(),
        }
    }

    /// 记录节点；`isnew` 时为其分配 MAC id（跳过广播 id）
    ///
    /// 返回新分配的 id，表满或无需分配时返回 `None`。
    pub fn newassoc(&mut self, node: NodeId, info: NodeInfo, isnew: bool) -> Option<u8> {
        let peer = self.peers.entry(node).or_insert(Peer {
            id: MACID_UNDEFINED,
            info,
            last_rssi: 0,
        });
        peer.info = info;
        if !isnew || peer.id != MACID_UNDEFINED {
            return None;
        }

        let free = (0..=MACID_MAX)
            .filter(|&id| id != MACID_BC as usize)
            .find(|&id| self.ids[id].is_none());
        match free {
            Some(id) => {
                self.ids[id] = Some(node);
                peer.id = id as u8;
                debug!("node {node:?} ({:02x?}) got macid {id}", info.addr);
                Some(id as u8)
            }
            None => {
                warn!("node table is full");
                None
            }
        }
    }

    /// 删除节点，返回它占用的 MAC id
    pub fn free(&mut self, node: NodeId) -> Option<u8> {
        let peer = self.peers.remove(&node)?;
        if peer.id == MACID_UNDEFINED {
            return None;
        }
        self.ids[peer.id as usize] = None;
        Some(peer.id)
    }

    pub fn get(&self, node: NodeId) -> Option<&Peer> {
        self.peers.get(&node)
    }

    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut Peer> {
        self.peers.get_mut(&node)
    }

    pub fn by_macid(&self, macid: u8) -> Option<NodeId> {
        self.ids.get(macid as usize).copied().flatten()
    }

    pub fn by_addr(&self, addr: &MacAddr) -> Option<NodeId> {
        self.peers
            .iter()
            .find(|(_, p)| &p.info.addr == addr)
            .map(|(&n, _)| n)
    }

    pub fn macid(&self, node: NodeId) -> u8 {
        self.peers.get(&node).map_or(MACID_UNDEFINED, |p| p.id)
    }

    pub fn clear(&mut self) {
        self.ids = [None; MACID_MAX + 1];
        self.peers.clear();
    }
}
