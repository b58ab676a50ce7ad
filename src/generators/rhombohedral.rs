//! # 菱方原胞生成器
//!
//! 仅支持一个重复单元、无真空层：2 个 Bi + 3 个 Se。
//!
//! 三个基矢由六方基矢组合得到 (r1 + r2 + r3 = c_hex)，等长、夹角相等。
//! 原子都位于三重轴上，分数坐标形如 (x, x, x)，x 为六方相对间距除以 c_hex。
//! 对 N = 1、无真空层的六方超胞，两者描述同一组笛卡尔原子。
//!
//! ## 依赖关系
//! - 被 `generators/mod.rs` 调用
//! - 使用 `models/`

use crate::models::{Atom, Lattice, PhysicalConstants, RelativeSpacings, Species, Structure};

/// 生成菱方原胞
pub fn generate(constants: &PhysicalConstants, rel: &RelativeSpacings) -> Structure {
    let h = rel.c_hex;

    // 以 a 为单位的 c_hex 长度
    let c = rel.c_hex * rel.c_total_abs / constants.a;
    let t = 3f64.sqrt() / 6.0;
    let lattice = Lattice::new(
        constants.a,
        [
            [0.5, t, c / 3.0],
            [-0.5, t, c / 3.0],
            [0.0, -2.0 * t, c / 3.0],
        ],
    );

    let sites = [
        (Species::Bi, "Bi'", (rel.c1 + 2.0 * rel.c2) / h + 2.0 / 3.0),
        (Species::Bi, "Bi", rel.c1 / h),
        (Species::Se, "Se1", 2.0 / 3.0),
        (Species::Se, "Se1'", rel.c_ql / h),
        (Species::Se, "Se2", (rel.c1 + rel.c2) / h + 1.0 / 3.0),
    ];

    let atoms = sites
        .iter()
        .map(|&(species, role, x)| {
            Atom::new(species, format!("{} r0 {}", species, role), [x, x, x])
        })
        .collect();

    Structure::new(
        "Bi2Se3 rhombohedral primitive cell, 1x5 layers, vacuum 0.0 A",
        lattice,
        atoms,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::hexagonal;
    use crate::generators::test_support::{same_site, wrap_to_hex};
    use crate::models::{LatticeKind, RunParameters};

    fn cells() -> (Structure, Structure) {
        let constants = PhysicalConstants::default();
        let rhomb = RunParameters::new(LatticeKind::Rhombohedral, 1, 0.0).unwrap();
        let hex = RunParameters::new(LatticeKind::Hexagonal, 1, 0.0).unwrap();
        (
            generate(&constants, &constants.relative_spacings(&rhomb)),
            hexagonal::generate(&constants, &constants.relative_spacings(&hex), &hex),
        )
    }

    #[test]
    fn test_fixed_atom_list() {
        let (s, _) = cells();
        assert_eq!(s.species_counts(), vec![(Species::Bi, 2), (Species::Se, 3)]);
        assert_eq!(s.atoms.len(), 5);

        let labels: Vec<&str> = s.atoms.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Bi r0 Bi'", "Bi r0 Bi", "Se r0 Se1", "Se r0 Se1'", "Se r0 Se2"]
        );

        for atom in &s.atoms {
            let [x, y, z] = atom.position;
            assert_eq!(x, y);
            assert_eq!(y, z);
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_equal_length_basis() {
        let (s, _) = cells();
        let [a, b, c] = s.lattice.lengths();
        assert!((a - b).abs() < 1e-12);
        assert!((b - c).abs() < 1e-12);
        assert_eq!(s.lattice.scale, 4.138);

        // r1 + r2 + r3 沿六方 c 轴，长度为 c_hex
        let sum: Vec<f64> = (0..3)
            .map(|i| s.lattice.vectors.iter().map(|v| v[i]).sum())
            .collect();
        assert!(sum[0].abs() < 1e-12);
        assert!(sum[1].abs() < 1e-12);
        assert!((sum[2] * 4.138 - 28.5642).abs() < 1e-9);
    }

    #[test]
    fn test_volume_is_third_of_hex_cell() {
        let (rhomb, hex) = cells();
        assert!((3.0 * rhomb.lattice.volume() - hex.lattice.volume()).abs() < 1e-9);
    }

    #[test]
    fn test_same_atoms_as_hex_cell() {
        let (rhomb, hex) = cells();
        let a = 4.138;
        let c = hex.lattice.lengths()[2];

        // 菱方原胞原子及其 r1、r1+r2 平移像，应恰好覆盖六方超胞的 15 个原子
        let shifts = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]];
        let mut matched = vec![false; hex.atoms.len()];

        for atom in &rhomb.atoms {
            for shift in shifts {
                let frac = [
                    atom.position[0] + shift[0],
                    atom.position[1] + shift[1],
                    atom.position[2] + shift[2],
                ];
                let p = wrap_to_hex(rhomb.lattice.cartesian(frac), a, c);
                let hit = hex
                    .atoms
                    .iter()
                    .position(|h| h.species == atom.species && same_site(h.position, p));
                match hit {
                    Some(i) => matched[i] = true,
                    None => panic!("{} has no hex counterpart at {:?}", atom.label, p),
                }
            }
        }

        assert!(matched.iter().all(|&m| m));
    }
}
