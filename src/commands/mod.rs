//! # 命令执行模块
//!
//! 执行一次生成：校验参数 → 生成结构 → 写出文件 → 打印摘要。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `models/`, `generators/`, `writers/`, `utils/`
//! - 子模块: generate

pub mod generate;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令
pub fn run(cli: &Cli) -> Result<()> {
    generate::execute(cli)
}
