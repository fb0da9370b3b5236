//! 批量传输缓冲池
//!
//! 每个方向一个固定大小的池，缓冲区在 inactive / active / pending 三个队列
//! 之间流转，任何时刻恰好属于其中一个。队列里存的是槽位编号，移动缓冲区
//! 就是移动编号。提交给传输引擎期间，缓冲区本身暂时离开槽位。

use alloc::{collections::VecDeque, vec::Vec};

use crate::{
    err::{Error, Result},
    net::NodeId,
    xfer::Pipe,
};

pub(crate) struct Slot {
    buf: Option<Vec<u8>>,
    /// 有效数据长度
    pub len: usize,
    /// 发送完成时交还给协议栈的原始帧
    pub frame: Option<Vec<u8>>,
    pub node: Option<NodeId>,
    /// 帧应走的管道
    pub pipe: Pipe,
}

impl Slot {
    fn clear(&mut self) -> (Option<Vec<u8>>, Option<NodeId>) {
        self.len = 0;
        (self.frame.take(), self.node.take())
    }
}

pub(crate) struct Pool {
    slots: Vec<Slot>,
    bufsz: usize,
    active: VecDeque<usize>,
    inactive: VecDeque<usize>,
    pending: VecDeque<usize>,
}

impl Pool {
    /// 分配 `count` 个 `size` 字节的缓冲区，全部放入 inactive
    pub fn alloc(count: usize, size: usize, pipe: Pipe) -> Result<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(count)
            .map_err(|_| Error::OutOfMemory)?;
        for _ in 0..count {
            let mut buf = Vec::new();
            buf.try_reserve_exact(size)
                .map_err(|_| Error::OutOfMemory)?;
            buf.resize(size, 0);
            slots.push(Slot {
                buf: Some(buf),
                len: 0,
                frame: None,
                node: None,
                pipe,
            });
        }
        Ok(Self {
            slots,
            bufsz: size,
            active: VecDeque::with_capacity(count),
            inactive: (0..count).collect(),
            pending: VecDeque::with_capacity(count),
        })
    }

    pub fn bufsz(&self) -> usize {
        self.bufsz
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, idx: usize) -> &Slot {
        &self.slots[idx]
    }

    pub fn slot_mut(&mut self, idx: usize) -> &mut Slot {
        &mut self.slots[idx]
    }

    /// 缓冲区内容，提交给引擎期间为 `None`
    pub fn buf_mut(&mut self, idx: usize) -> Option<&mut Vec<u8>> {
        self.slots[idx].buf.as_mut()
    }

    pub fn buf(&self, idx: usize) -> Option<&[u8]> {
        self.slots[idx].buf.as_deref()
    }

    /// 取走缓冲区交给传输引擎
    pub fn lend(&mut self, idx: usize) -> Option<Vec<u8>> {
        self.slots[idx].buf.take()
    }

    /// 传输引擎归还缓冲区
    pub fn restore(&mut self, idx: usize, buf: Vec<u8>) {
        if let Some(slot) = self.slots.get_mut(idx) {
            slot.buf = Some(buf);
        }
    }

    /// 从 inactive 头部取一个空闲缓冲区；为空时返回 `None`
    pub fn acquire(&mut self) -> Option<usize> {
        self.inactive.pop_front()
    }

    /// 清除帧与节点引用并放回 inactive 尾部
    pub fn release(&mut self, idx: usize) -> (Option<Vec<u8>>, Option<NodeId>) {
        let refs = self.slots[idx].clear();
        self.inactive.push_back(idx);
        refs
    }

    /// 未用过的缓冲区放回 inactive 头部
    pub fn unget(&mut self, idx: usize) {
        self.slots[idx].clear();
        self.inactive.push_front(idx);
    }

    pub fn push_pending(&mut self, idx: usize) {
        self.pending.push_back(idx);
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// 取出第一个发往 `pipe` 的 pending 缓冲区并移入 active
    pub fn pending_to_active(&mut self, pipe: Pipe) -> Option<usize> {
        let pos = self
            .pending
            .iter()
            .position(|&i| self.slots[i].pipe == pipe)?;
        let idx = self.pending.remove(pos)?;
        self.active.push_back(idx);
        Some(idx)
    }

    /// inactive 头部移入 active
    pub fn inactive_to_active(&mut self) -> Option<usize> {
        let idx = self.inactive.pop_front()?;
        self.active.push_back(idx);
        Some(idx)
    }

    /// 从 active 中摘下 `idx`；不在 active 中时返回 `false`
    pub fn retire(&mut self, idx: usize) -> bool {
        match self.active.iter().position(|&i| i == idx) {
            Some(pos) => {
                self.active.remove(pos);
                true
            }
            None => false,
        }
    }

    /// 把 active 中的 `idx` 直接移回 inactive
    pub fn retire_active_to_inactive(&mut self, idx: usize) -> (Option<Vec<u8>>, Option<NodeId>) {
        if self.retire(idx) {
            self.release(idx)
        } else {
            (None, None)
        }
    }

    /// 丢弃所有 pending 中满足 `pred` 的缓冲区，返回被清掉的引用
    pub fn flush_pending(
        &mut self,
        mut pred: impl FnMut(&Slot) -> bool,
    ) -> Vec<(Option<Vec<u8>>, Option<NodeId>)> {
        let mut out = Vec::new();
        let mut keep = VecDeque::with_capacity(self.pending.len());
        while let Some(idx) = self.pending.pop_front() {
            if pred(&self.slots[idx]) {
                out.push(self.release(idx));
            } else {
                keep.push_back(idx);
            }
        }
        self.pending = keep;
        out
    }

    /// 清除 active 与 inactive 槽位中满足 `pred` 的帧与节点引用
    pub fn clear_refs(&mut self, mut pred: impl FnMut(&Slot) -> bool) -> Vec<(Option<Vec<u8>>, Option<NodeId>)> {
        let mut out = Vec::new();
        for &idx in self.active.iter().chain(self.inactive.iter()) {
            let slot = &mut self.slots[idx];
            if pred(slot) {
                out.push(slot.clear());
            }
        }
        out
    }

    /// 所有缓冲区回到 inactive，引用一并释放
    pub fn reset(&mut self) -> Vec<(Option<Vec<u8>>, Option<NodeId>)> {
        let mut out = Vec::new();
        let queued: Vec<usize> = self.active.drain(..).chain(self.pending.drain(..)).collect();
        for idx in queued {
            out.push(self.release(idx));
        }
        for &idx in self.inactive.iter() {
            let refs = self.slots[idx].clear();
            if refs.0.is_some() || refs.1.is_some() {
                out.push(refs);
            }
        }
        out
    }

    pub fn count(&self) -> (usize, usize, usize) {
        (self.active.len(), self.inactive.len(), self.pending.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    fn check_partition(pool: &Pool) {
        let all: Vec<usize> = pool
            .active
            .iter()
            .chain(pool.inactive.iter())
            .chain(pool.pending.iter())
            .copied()
            .collect();
        let set: BTreeSet<usize> = all.iter().copied().collect();
        assert_eq!(all.len(), pool.len(), "buffer duplicated or lost");
        assert_eq!(set.len(), pool.len());
    }

    #[test]
    fn alloc_fills_inactive() {
        let pool = Pool::alloc(4, 128, Pipe::TxBe).unwrap();
        assert_eq!(pool.count(), (0, 4, 0));
        assert_eq!(pool.buf(0).unwrap().len(), 128);
        check_partition(&pool);
    }

    #[test]
    fn acquire_until_empty() {
        let mut pool = Pool::alloc(2, 16, Pipe::TxBe).unwrap();
        let a = pool.acquire().unwrap();
        let b = pool.acquire().unwrap();
        assert_ne!(a, b);
        assert!(pool.acquire().is_none());
        pool.unget(b);
        pool.unget(a);
        assert_eq!(pool.acquire(), Some(a));
    }

    #[test]
    fn queues_stay_partitioned() {
        let mut pool = Pool::alloc(6, 16, Pipe::TxBe).unwrap();
        // 固定的伪随机操作序列
        let mut seed = 0x2545_f491u32;
        let mut held = Vec::new();
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            match seed % 5 {
                0 => {
                    if let Some(i) = pool.acquire() {
                        held.push(i);
                    }
                }
                1 => {
                    if let Some(i) = held.pop() {
                        pool.slot_mut(i).pipe = if seed & 0x100 != 0 { Pipe::TxVo } else { Pipe::TxBe };
                        pool.push_pending(i);
                    }
                }
                2 => {
                    pool.pending_to_active(Pipe::TxVo);
                }
                3 => {
                    let front = pool.active.front().copied();
                    if let Some(i) = front {
                        pool.retire_active_to_inactive(i);
                    }
                }
                _ => {
                    if let Some(i) = held.pop() {
                        pool.release(i);
                    }
                }
            }
            let mut total = pool.count();
            total.1 += held.len();
            assert_eq!(total.0 + total.1 + total.2, 6);
        }
        for i in held {
            pool.release(i);
        }
        check_partition(&pool);
    }

    #[test]
    fn pending_is_per_pipe() {
        let mut pool = Pool::alloc(3, 16, Pipe::TxBe).unwrap();
        let a = pool.acquire().unwrap();
        let b = pool.acquire().unwrap();
        pool.slot_mut(b).pipe = Pipe::TxVo;
        pool.push_pending(a);
        pool.push_pending(b);
        assert_eq!(pool.pending_to_active(Pipe::TxVo), Some(b));
        assert_eq!(pool.pending_to_active(Pipe::TxVo), None);
        assert_eq!(pool.pending_to_active(Pipe::TxBe), Some(a));
        check_partition(&pool);
    }

    #[test]
    fn release_drops_references() {
        let mut pool = Pool::alloc(1, 16, Pipe::TxBe).unwrap();
        let i = pool.acquire().unwrap();
        pool.slot_mut(i).frame = Some(vec![1, 2, 3]);
        pool.slot_mut(i).node = Some(NodeId(7));
        pool.push_pending(i);
        pool.pending_to_active(Pipe::TxBe);
        let (frame, node) = pool.retire_active_to_inactive(i);
        assert_eq!(frame, Some(vec![1, 2, 3]));
        assert_eq!(node, Some(NodeId(7)));
        assert!(pool.slot(i).frame.is_none());
        assert_eq!(pool.count(), (0, 1, 0));
    }

    #[test]
    fn lend_and_restore() {
        let mut pool = Pool::alloc(1, 8, Pipe::Rx).unwrap();
        let i = pool.inactive_to_active().unwrap();
        let buf = pool.lend(i).unwrap();
        assert!(pool.buf(i).is_none());
        pool.restore(i, buf);
        assert_eq!(pool.buf(i).unwrap().len(), 8);
    }
}
