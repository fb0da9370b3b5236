use core::time::Duration;

/// 驱动需要宿主系统提供的服务
///
/// `schedule` 的工作项由宿主在自己的任务上下文中通过
/// [`Urtwm::run_work`](crate::Urtwm::run_work) 执行，不得在调用栈内同步执行。
pub trait Kernel: Send + Sync {
    fn delay(&self, duration: Duration);

    /// 延迟 `after` 后执行一次 `work`；已排队的同名工作项被替换
    fn schedule(&self, work: Work, after: Duration);

    /// 取消尚未执行的工作项，可重复调用
    fn cancel(&self, work: Work);
}

/// 延迟工作项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Work {
    /// 排空命令队列
    CommandQueue,
    /// 周期温度校准
    Calibration,
    /// IBSS 模式下的 TSF 同步
    TsfSync,
    /// 省电模式初始化
    PowerModeInit,
}

pub(crate) fn delay_us(kernel: &dyn Kernel, us: u64) {
    kernel.delay(Duration::from_micros(us));
}
