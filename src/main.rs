//! # bi2se3-poscar - Bi2Se3 结构文件生成器
//!
//! 由少量层间距常数生成 VASP POSCAR 文件，支持两种晶胞：
//! - `hex`   - 六方超胞，N 个重复单元（每个 3 QL）+ 可选真空层，用于 slab 计算
//! - `rhomb` - 菱方原胞，仅体相（N = 1，无真空层）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── models/      (常数、参数与结构模型)
//!   │     ├── generators/  (六方 / 菱方生成器)
//!   │     └── writers/     (POSCAR 输出)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```
//!
//! ## 退出码
//! - 0: 成功
//! - 2: 参数错误或菱方约束不满足（打印 usage）
//! - 1: 写文件失败

mod cli;
mod commands;
mod error;
mod generators;
mod models;
mod utils;
mod writers;

use clap::{CommandFactory, Parser};
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(&cli) {
        if e.is_usage() {
            // 与 clap 的参数错误一致：usage 之后给出具体原因，退出码 2
            eprintln!("{}", Cli::command().render_usage());
            utils::output::print_error(&format!("{}", e));
            std::process::exit(2);
        }
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
