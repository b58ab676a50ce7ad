//! # 结构生成命令实现
//!
//! ## 流程
//! 1. 由命令行参数构造并校验 `RunParameters`（失败时不创建任何文件）
//! 2. 计算相对间距，调用对应晶胞的生成器
//! 3. 写出 POSCAR 文件
//! 4. 打印层间距摘要表
//!
//! ## 依赖关系
//! - 使用 `cli/mod.rs` 定义的参数
//! - 使用 `models/`, `generators/`, `writers/`
//! - 使用 `utils/output.rs`, `utils/summary.rs`

use crate::cli::Cli;
use crate::error::Result;
use crate::generators;
use crate::models::{PhysicalConstants, RunParameters};
use crate::utils::{output, summary};
use crate::writers::{write_poscar_file, PoscarOptions};

/// 执行生成命令
pub fn execute(cli: &Cli) -> Result<()> {
    let params = RunParameters::new(cli.lattice.into(), cli.repeats, cli.vacuum)?;
    let constants = PhysicalConstants::default();

    if !cli.quiet {
        output::print_header(&format!("Generating Bi2Se3 {} cell", params.kind));
        output::print_info(&format!(
            "N = {}, vacuum = {} A, a = {} A",
            params.repeats, params.vacuum, constants.a
        ));
    }

    let rel = constants.relative_spacings(&params);
    let structure = generators::generate(&constants, &rel, &params);

    let options = PoscarOptions {
        species_line: cli.vasp5,
    };
    write_poscar_file(&cli.output, &structure, &options)?;

    if !cli.quiet {
        output::print_success(&format!(
            "Wrote {} atoms to '{}'",
            structure.atoms.len(),
            cli.output.display()
        ));
        summary::print_summary(&constants, &rel, &structure);
    }

    Ok(())
}
