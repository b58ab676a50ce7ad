//! # 统一错误处理模块
//!
//! 定义 bi2se3-poscar 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 参数错误：N < 1、真空层为负（用法错误，退出码 2）
//! - 约束错误：菱方原胞只支持 N = 1 且无真空层（退出码 2）
//! - I/O 错误：无法创建或写入输出文件（退出码 1）
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// 统一错误类型
#[derive(Error, Debug)]
pub enum PoscarError {
    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("repeat count must be a positive integer (got {n})")]
    InvalidRepeatCount { n: u32 },

    #[error("vacuum thickness must be a non-negative length (got {vacuum})")]
    InvalidVacuum { vacuum: f64 },

    // ─────────────────────────────────────────────────────────────
    // 菱方原胞约束
    // ─────────────────────────────────────────────────────────────
    #[error("rhombohedral cell supports exactly one repeat unit (got N = {n})")]
    RhombohedralRepeat { n: u32 },

    #[error("rhombohedral cell is bulk only, vacuum must be 0 (got {vacuum})")]
    RhombohedralVacuum { vacuum: f64 },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl PoscarError {
    /// 是否属于命令行用法/约束错误（打印 usage，退出码 2）
    pub fn is_usage(&self) -> bool {
        !matches!(self, PoscarError::FileWriteError { .. })
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, PoscarError>;
