//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数：
//! `bi2se3-poscar <hex|rhomb> <N> <VACUUM> [-o PATH] [--vasp5] [-q]`
//!
//! 参数格式错误由 clap 处理（打印 usage，退出码 2）。
//! 菱方原胞的 N / 真空层约束在参数模型中校验。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/` 使用
//! - 参数传递给 `commands/generate.rs`

use crate::models::LatticeKind;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// 命令行中的晶胞类型
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LatticeArg {
    /// Hexagonal supercell (N repeat units plus optional vacuum)
    Hex,
    /// Primitive rhombohedral cell (N = 1, no vacuum)
    Rhomb,
}

impl From<LatticeArg> for LatticeKind {
    fn from(arg: LatticeArg) -> Self {
        match arg {
            LatticeArg::Hex => LatticeKind::Hexagonal,
            LatticeArg::Rhomb => LatticeKind::Rhombohedral,
        }
    }
}

/// bi2se3-poscar - Bi2Se3 结构文件生成器
#[derive(Parser, Debug)]
#[command(name = "bi2se3-poscar")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Generate VASP POSCAR files for Bi2Se3 slabs and bulk cells", long_about = None)]
pub struct Cli {
    /// Lattice representation
    #[arg(value_enum)]
    pub lattice: LatticeArg,

    /// Number of hexagonal repeat units (3 quintuple layers each)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub repeats: u32,

    /// Vacuum thickness added along c, in Angstrom
    #[arg(value_parser = parse_vacuum, allow_negative_numbers = true)]
    pub vacuum: f64,

    /// Output structure file
    #[arg(short, long, default_value = "POSCAR")]
    pub output: PathBuf,

    /// Write the VASP 5 element symbol line above the atom counts
    #[arg(long, default_value_t = false)]
    pub vasp5: bool,

    /// Do not print progress messages or the summary table
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

/// 解析真空层厚度，拒绝负数和非有限值
fn parse_vacuum(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("'{}' is not a number: {}", s, e))?;

    if !value.is_finite() || value < 0.0 {
        return Err(format!("vacuum must be a non-negative length (got {})", s));
    }
    Ok(value)
}
