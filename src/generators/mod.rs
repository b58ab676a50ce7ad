//! # 结构生成器模块
//!
//! 由相对间距生成晶格矢量和原子分数坐标。两种晶胞互相独立，均为纯函数。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/`
//! - 子模块: hexagonal, rhombohedral

pub mod hexagonal;
pub mod rhombohedral;

use crate::models::{LatticeKind, PhysicalConstants, RelativeSpacings, RunParameters, Structure};

/// 按晶胞类型分派到对应的生成器
pub fn generate(
    constants: &PhysicalConstants,
    rel: &RelativeSpacings,
    params: &RunParameters,
) -> Structure {
    match params.kind {
        LatticeKind::Hexagonal => hexagonal::generate(constants, rel, params),
        LatticeKind::Rhombohedral => rhombohedral::generate(constants, rel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Species;

    fn build(kind: LatticeKind, n: u32, vacuum: f64) -> Structure {
        let constants = PhysicalConstants::default();
        let params = RunParameters::new(kind, n, vacuum).unwrap();
        generate(&constants, &constants.relative_spacings(&params), &params)
    }

    #[test]
    fn test_dispatch_by_kind() {
        let hex = build(LatticeKind::Hexagonal, 2, 5.0);
        assert_eq!(hex.species_counts(), vec![(Species::Bi, 12), (Species::Se, 18)]);

        let rhomb = build(LatticeKind::Rhombohedral, 1, 0.0);
        assert_eq!(rhomb.species_counts(), vec![(Species::Bi, 2), (Species::Se, 3)]);
    }

    #[test]
    fn test_generation_is_deterministic() {
        for (kind, n, vacuum) in [
            (LatticeKind::Hexagonal, 3, 12.0),
            (LatticeKind::Rhombohedral, 1, 0.0),
        ] {
            let first = build(kind, n, vacuum);
            let second = build(kind, n, vacuum);
            assert_eq!(first.header, second.header);
            assert_eq!(first.lattice, second.lattice);
            assert_eq!(first.atoms, second.atoms);
        }
    }
}
