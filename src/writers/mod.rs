//! # 结构文件输出模块
//!
//! 将生成器的结构序列化为模拟软件可读的文本格式。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`
//! - 子模块: poscar

pub mod poscar;

pub use poscar::{to_poscar_string, write_poscar_file, PoscarOptions};
