//! 延迟命令队列
//!
//! 需要睡眠或较长寄存器序列的操作不在调用者的上下文中执行，而是放入
//! 固定容量的环形队列，由 [`Work::CommandQueue`] 工作项持锁依次处理。

use alloc::sync::Arc;
use core::time::Duration;

use crossbeam::queue::ArrayQueue;
use log::warn;

use crate::{
    err::{Error, Result},
    key::Key,
    osal::{Kernel, Work},
};

pub const CMDQ_SIZE: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    KeySet(Key),
    KeyDel(Key),
    /// 向固件报告 MAC id 的关联状态，低 7 位为 id，最高位表示已关联
    MediaStatus(u8),
    /// 按当前状态更新固件省电模式
    SetPwrmode,
    /// 写入新的时隙长度并刷新 AIFS
    UpdateSlot(u8),
    /// 温度校准
    Calibrate,
}

pub(crate) struct CmdQueue {
    ring: ArrayQueue<Command>,
    kernel: Arc<dyn Kernel>,
}

impl CmdQueue {
    pub fn new(kernel: Arc<dyn Kernel>) -> Self {
        Self {
            ring: ArrayQueue::new(CMDQ_SIZE),
            kernel,
        }
    }

    /// 入队并调度处理任务；队列满时立即返回 [`Error::WouldBlock`]
    pub fn enqueue(&self, cmd: Command) -> Result {
        if let Err(cmd) = self.ring.push(cmd) {
            warn!("cmdq overflow, {cmd:?} dropped");
            return Err(Error::WouldBlock);
        }
        self.kernel.schedule(Work::CommandQueue, Duration::ZERO);
        Ok(())
    }

    pub fn pop(&self) -> Option<Command> {
        self.ring.pop()
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// 丢弃所有未处理的命令
    pub fn clear(&self) {
        while self.ring.pop().is_some() {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use spin::Mutex;

    #[derive(Default)]
    struct CountingKernel {
        scheduled: Mutex<Vec<Work>>,
    }

    impl Kernel for CountingKernel {
        fn delay(&self, _duration: Duration) {}

        fn schedule(&self, work: Work, _after: Duration) {
            self.scheduled.lock().push(work);
        }

        fn cancel(&self, _work: Work) {}
    }

    #[test]
    fn full_queue_would_block() {
        let kernel = Arc::new(CountingKernel::default());
        let q = CmdQueue::new(kernel.clone());
        for i in 0..CMDQ_SIZE {
            q.enqueue(Command::UpdateSlot(i as u8)).unwrap();
        }
        assert_eq!(q.enqueue(Command::Calibrate), Err(Error::WouldBlock));
        assert_eq!(kernel.scheduled.lock().len(), CMDQ_SIZE);
        assert!(kernel.scheduled.lock().iter().all(|&w| w == Work::CommandQueue));

        let drained: Vec<_> = core::iter::from_fn(|| q.pop()).collect();
        let expect: Vec<_> = (0..CMDQ_SIZE as u8).map(Command::UpdateSlot).collect();
        assert_eq!(drained, expect);
    }

    #[test]
    fn clear_drops_pending() {
        let q = CmdQueue::new(Arc::new(CountingKernel::default()));
        q.enqueue(Command::SetPwrmode).unwrap();
        q.enqueue(Command::MediaStatus(0x85)).unwrap();
        assert_eq!(q.len(), 2);
        q.clear();
        assert!(q.pop().is_none());
        q.enqueue(Command::Calibrate).unwrap();
        assert_eq!(q.pop(), Some(Command::Calibrate));
    }
}
