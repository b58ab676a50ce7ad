//! # 生成结果摘要
//!
//! 用 `tabled` 打印各层间距的绝对值与相对值，以及晶胞信息。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `models/`

use crate::models::{PhysicalConstants, RelativeSpacings, Structure};

use colored::Colorize;
use tabled::{Table, Tabled};

/// 摘要表中的一行
#[derive(Debug, Clone, Tabled)]
struct SpacingRow {
    #[tabled(rename = "Spacing")]
    name: &'static str,
    #[tabled(rename = "Absolute (Å)")]
    absolute: String,
    #[tabled(rename = "Fraction of c")]
    fraction: String,
}

fn spacing_rows(constants: &PhysicalConstants, rel: &RelativeSpacings) -> Vec<SpacingRow> {
    [
        ("Se1-Bi (c1)", constants.c1, rel.c1),
        ("Bi-Se2 (c2)", constants.c2, rel.c2),
        ("vdW gap", constants.c_vdw, rel.c_vdw),
        ("QL", constants.c_ql(), rel.c_ql),
        ("QL + vdW", constants.c_t(), rel.c_t),
        ("Hex repeat", constants.c_hex(), rel.c_hex),
        ("Total c", rel.c_total_abs, 1.0),
    ]
    .into_iter()
    .map(|(name, absolute, fraction)| SpacingRow {
        name,
        absolute: format!("{:.4}", absolute),
        fraction: format!("{:.6}", fraction),
    })
    .collect()
}

/// 打印摘要
pub fn print_summary(
    constants: &PhysicalConstants,
    rel: &RelativeSpacings,
    structure: &Structure,
) {
    let table = Table::new(spacing_rows(constants, rel)).to_string();
    println!("\n{}", table);

    let counts = structure
        .species_counts()
        .iter()
        .map(|(sp, n)| format!("{}{}", sp, n))
        .collect::<Vec<_>>()
        .join(" ");
    let [a, b, c] = structure.lattice.lengths();

    println!(
        "\n  {} {}   {} {:.4} {:.4} {:.4} Å   {} {:.4} Å³   {} {:.4} Å\n",
        "Atoms:".bold(),
        counts,
        "Cell:".bold(),
        a,
        b,
        c,
        "Volume:".bold(),
        structure.lattice.volume(),
        "Atomic span along z:".bold(),
        z_span(structure)
    );
}

/// 原子在 z 方向上的跨度 (Å)
fn z_span(structure: &Structure) -> f64 {
    let (lo, hi) = structure
        .atoms
        .iter()
        .map(|atom| structure.lattice.cartesian(atom.position)[2])
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), z| {
            (lo.min(z), hi.max(z))
        });
    if lo.is_finite() {
        hi - lo
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LatticeKind, RunParameters};

    #[test]
    fn test_spacing_rows() {
        let constants = PhysicalConstants::default();
        let params = RunParameters::new(LatticeKind::Hexagonal, 1, 0.0).unwrap();
        let rows = spacing_rows(&constants, &constants.relative_spacings(&params));

        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].absolute, "1.7644");
        assert_eq!(rows[5].absolute, "28.5642");
        assert_eq!(rows[5].fraction, "1.000000");
        assert_eq!(rows[6].absolute, "28.5642");

        let table = Table::new(rows).to_string();
        assert!(table.contains("vdW gap"));
        assert!(table.contains("2.2328"));
    }

    #[test]
    fn test_z_span_of_hex_slab() {
        let constants = PhysicalConstants::default();
        let params = RunParameters::new(LatticeKind::Hexagonal, 2, 10.0).unwrap();
        let rel = constants.relative_spacings(&params);
        let structure = crate::generators::generate(&constants, &rel, &params);

        // 6 个 QL + 5 个范德华间隙
        let expected = 6.0 * constants.c_ql() + 5.0 * constants.c_vdw;
        assert!((z_span(&structure) - expected).abs() < 1e-9);
    }
}
