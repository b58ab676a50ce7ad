//! # 参数模型
//!
//! Bi2Se3 的层间距常数，以及由重复单元数 N 和真空层厚度导出的相对间距。
//!
//! 所有相对间距都是绝对间距除以 c 轴总长度，可直接用作 Direct 坐标的 c 分量。
//!
//! ## 依赖关系
//! - 被 `generators/` 和 `commands/` 使用
//! - 使用 `error.rs`

use crate::error::{PoscarError, Result};
use serde::{Deserialize, Serialize};

/// 晶胞类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatticeKind {
    Hexagonal,
    Rhombohedral,
}

impl std::fmt::Display for LatticeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LatticeKind::Hexagonal => write!(f, "hexagonal"),
            LatticeKind::Rhombohedral => write!(f, "rhombohedral"),
        }
    }
}

/// 物理常数（单位：Å）
///
/// 每次运行构造一次，显式传入参数模型，两种晶胞共用同一组常数。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// 外层 Se 到 Bi 的层间距
    pub c1: f64,
    /// Bi 到中心 Se 的层间距
    pub c2: f64,
    /// 范德华间隙
    pub c_vdw: f64,
    /// 六方晶格常数 a
    pub a: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        PhysicalConstants {
            c1: 1.7644,
            c2: 1.8799,
            c_vdw: 2.2328,
            a: 4.138,
        }
    }
}

impl PhysicalConstants {
    /// 五原子层 (QL) 厚度
    pub fn c_ql(&self) -> f64 {
        2.0 * (self.c1 + self.c2)
    }

    /// 一个 QL 加一个范德华间隙
    pub fn c_t(&self) -> f64 {
        self.c_ql() + self.c_vdw
    }

    /// 六方重复单元高度（三个 QL）
    pub fn c_hex(&self) -> f64 {
        3.0 * self.c_t()
    }

    /// c 轴总长度 = N × c_hex + 真空层
    pub fn c_total(&self, params: &RunParameters) -> f64 {
        params.repeats as f64 * self.c_hex() + params.vacuum
    }

    /// 计算相对间距
    pub fn relative_spacings(&self, params: &RunParameters) -> RelativeSpacings {
        let total = self.c_total(params);
        RelativeSpacings {
            c1: self.c1 / total,
            c2: self.c2 / total,
            c_vdw: self.c_vdw / total,
            c_ql: self.c_ql() / total,
            c_t: self.c_t() / total,
            c_hex: self.c_hex() / total,
            c_total_abs: total,
        }
    }
}

/// 运行参数（已校验）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunParameters {
    pub kind: LatticeKind,
    pub repeats: u32,
    pub vacuum: f64,
}

impl RunParameters {
    /// 校验并创建运行参数
    pub fn new(kind: LatticeKind, repeats: u32, vacuum: f64) -> Result<Self> {
        if repeats < 1 {
            return Err(PoscarError::InvalidRepeatCount { n: repeats });
        }
        if !vacuum.is_finite() || vacuum < 0.0 {
            return Err(PoscarError::InvalidVacuum { vacuum });
        }

        if kind == LatticeKind::Rhombohedral {
            // 多重复单元的菱方原胞需要重新推导晶格矢量和原子位置，不支持
            if repeats != 1 {
                return Err(PoscarError::RhombohedralRepeat { n: repeats });
            }
            if vacuum != 0.0 {
                return Err(PoscarError::RhombohedralVacuum { vacuum });
            }
        }

        Ok(RunParameters {
            kind,
            repeats,
            vacuum,
        })
    }
}

/// 相对间距：绝对间距 / c 轴总长度
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelativeSpacings {
    pub c1: f64,
    pub c2: f64,
    pub c_vdw: f64,
    pub c_ql: f64,
    pub c_t: f64,
    pub c_hex: f64,
    /// c 轴总长度 (Å)
    pub c_total_abs: f64,
}
