//! # VASP POSCAR 输出
//!
//! ## 输出格式
//! ```text
//! Comment line (header)
//! 4.138                  # scaling factor
//! a1 a2 a3               # lattice vector a
//! b1 b2 b3               # lattice vector b
//! c1 c2 c3               # lattice vector c
//! Bi Se                  # element symbols (仅 --vasp5)
//! n1 n2                  # number of atoms per element
//! Direct
//! x y z label            # 每个原子一行，先 Bi 后 Se
//! ```
//!
//! 浮点数使用最短往返表示 (`{:?}`)，不做固定位数舍入。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `models/structure.rs`

use crate::error::{PoscarError, Result};
use crate::models::Structure;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 输出选项
#[derive(Debug, Clone, Copy, Default)]
pub struct PoscarOptions {
    /// 在原子数行之前写出元素符号行 (VASP 5+)
    pub species_line: bool,
}

/// 将结构转换为 POSCAR 格式字符串
pub fn to_poscar_string(structure: &Structure, options: &PoscarOptions) -> String {
    // 原子数行按位置对应坐标块，原子必须已按元素分组
    debug_assert!(structure.is_grouped());

    let mut result = String::new();

    // Line 0: Comment
    result.push_str(&format!("{}\n", structure.header));

    // Line 1: Scale
    result.push_str(&format!("{:?}\n", structure.lattice.scale));

    // Lines 2-4: Lattice
    for row in &structure.lattice.vectors {
        result.push_str(&format!("{:?} {:?} {:?}\n", row[0], row[1], row[2]));
    }

    let counts = structure.species_counts();

    if options.species_line {
        let symbols: Vec<String> = counts.iter().map(|(sp, _)| sp.to_string()).collect();
        result.push_str(&format!("{}\n", symbols.join(" ")));
    }

    let numbers: Vec<String> = counts.iter().map(|(_, n)| n.to_string()).collect();
    result.push_str(&format!("{}\n", numbers.join(" ")));

    // Coordinate type
    result.push_str("Direct\n");

    // Atom positions
    for atom in &structure.atoms {
        let [x, y, z] = atom.position;
        result.push_str(&format!("{:?} {:?} {:?} {}\n", x, y, z, atom.label));
    }

    result
}

/// 写出 POSCAR 文件（覆盖已存在的文件）
pub fn write_poscar_file(
    path: &Path,
    structure: &Structure,
    options: &PoscarOptions,
) -> Result<()> {
    let content = to_poscar_string(structure, options);
    let map_err = |e| PoscarError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(map_err)?);
    writer.write_all(content.as_bytes()).map_err(map_err)?;
    writer.flush().map_err(map_err)?;

    Ok(())
}
