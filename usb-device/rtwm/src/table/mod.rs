//! 芯片初始化寄存器表
//!
//! 每个表项由若干备选 [`Variant`] 组成，按顺序比较条件位图，第一个
//! 命中的备选生效。最后一个备选的条件为空，总是命中。表数据只读，
//! 多个适配器实例共享。

#[rustfmt::skip]
pub mod r12a;
#[rustfmt::skip]
pub mod r21a;

/// 外置 PA/LNA 条件位
pub mod cond12 {
    pub const GPA: u8 = 0x01;
    pub const APA: u8 = 0x02;
    pub const GLNA: u8 = 0x04;
    pub const ALNA: u8 = 0x08;

    /// 高 4 位为 PA/LNA 类型
    pub const fn ty(t: u8) -> u8 {
        t << 4
    }
}

/// RTL8821AU 板型条件
pub mod cond21 {
    pub const EXT_PA_5G: u8 = 0x01;
    pub const EXT_LNA_5G: u8 = 0x02;
    pub const BOARD_DEF: u8 = 0x04;
    pub const BT: u8 = 0x08;
}

/// 条件数组中的空位，同时表示无条件备选
pub const COND_NONE: u8 = 0;

#[derive(Debug)]
pub struct Variant<D: 'static> {
    pub cond: [u8; 3],
    pub data: D,
}

impl<D> Variant<D> {
    pub fn is_unconditional(&self) -> bool {
        self.cond[0] == COND_NONE
    }
}

/// 一段寄存器写序列，`regs` 与 `vals` 一一对应
#[derive(Debug, Clone, Copy)]
pub struct Program<R: 'static> {
    pub regs: &'static [R],
    pub vals: &'static [u32],
}

impl<R: Copy> Program<R> {
    pub fn iter(&self) -> impl Iterator<Item = (R, u32)> + '_ {
        self.regs.iter().copied().zip(self.vals.iter().copied())
    }
}

/// 按顺序选出第一个满足 `matches` 的备选
///
/// 无条件备选直接命中，`matches` 只对非空条件调用。
pub fn select<'a, D>(
    variants: &'a [Variant<D>],
    mut matches: impl FnMut(&[u8; 3]) -> bool,
) -> Option<&'a Variant<D>> {
    variants
        .iter()
        .find(|v| v.is_unconditional() || matches(&v.cond))
}

#[cfg(test)]
mod tests {
    use super::cond12::*;
    use super::*;

    static REGS: [u16; 1] = [0x800];
    static V0: [u32; 1] = [0x10];
    static V1: [u32; 1] = [0x20];
    static V2: [u32; 1] = [0x30];

    static ENTRY: [Variant<Program<u16>>; 3] = [
        Variant {
            cond: [GLNA | ty(1), 0, 0],
            data: Program {
                regs: &REGS,
                vals: &V0,
            },
        },
        Variant {
            cond: [APA | ty(0), GPA | ty(2), 0],
            data: Program {
                regs: &REGS,
                vals: &V1,
            },
        },
        Variant {
            cond: [0, 0, 0],
            data: Program {
                regs: &REGS,
                vals: &V2,
            },
        },
    ];

    #[test]
    fn picks_second_alternative() {
        let chosen = select(&ENTRY, |cond| cond.contains(&(GPA | ty(2)))).unwrap();
        assert_eq!(chosen.data.vals, &[0x20]);
    }

    #[test]
    fn falls_back_to_unconditional() {
        let chosen = select(&ENTRY, |_| false).unwrap();
        assert_eq!(chosen.data.vals, &[0x30]);
        assert!(chosen.is_unconditional());
    }

    #[test]
    fn program_pairs_regs_with_values() {
        let pairs: Vec<_> = ENTRY[0].data.iter().collect();
        assert_eq!(pairs, vec![(0x800u16, 0x10u32)]);
    }
}
