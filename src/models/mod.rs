//! # 数据模型模块
//!
//! 定义物理常数、运行参数以及晶体结构数据模型。
//!
//! ## 依赖关系
//! - 被 `generators/`, `writers/` 和 `commands/` 使用
//! - 子模块: params, structure

pub mod params;
pub mod structure;

pub use params::{LatticeKind, PhysicalConstants, RelativeSpacings, RunParameters};
pub use structure::{Atom, Lattice, Species, Structure};
