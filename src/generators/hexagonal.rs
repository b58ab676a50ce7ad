//! # 六方超胞生成器
//!
//! 每个重复单元含 3 个五原子层 (QL)，共 6 个 Bi 和 9 个 Se。
//!
//! ## 层序
//! ```text
//! QL 内自下而上:  Se1   Bi    Se2      Bi'       Se1'
//! 局部高度:       0     c1    c1+c2    c1+2c2    c_ql
//! ```
//! QL q 的起点为 n·c_hex + q·c_t。第 k = 5q + j 个原子层的面内位置
//! 在 (2/3,1/3) → (0,0) → (1/3,2/3) 之间循环，对应真实晶体的 ABC 堆垛。
//!
//! ## 依赖关系
//! - 被 `generators/mod.rs` 调用
//! - 使用 `models/`

use crate::models::{
    Atom, Lattice, PhysicalConstants, RelativeSpacings, RunParameters, Species, Structure,
};

/// 面内三个等价位置
const SITES: [[f64; 2]; 3] = [[2.0 / 3.0, 1.0 / 3.0], [0.0, 0.0], [1.0 / 3.0, 2.0 / 3.0]];

/// 每个重复单元中的 QL 数
const QL_PER_REPEAT: usize = 3;

/// 一个 QL 中的五个原子层
const QL_LAYERS: [(Species, &str); 5] = [
    (Species::Se, "Se1"),
    (Species::Bi, "Bi"),
    (Species::Se, "Se2"),
    (Species::Bi, "Bi'"),
    (Species::Se, "Se1'"),
];

/// 每层在 QL 内的相对高度
fn layer_offsets(rel: &RelativeSpacings) -> [f64; 5] {
    [0.0, rel.c1, rel.c1 + rel.c2, rel.c1 + 2.0 * rel.c2, rel.c_ql]
}

/// 生成 N 个重复单元的六方超胞
pub fn generate(
    constants: &PhysicalConstants,
    rel: &RelativeSpacings,
    params: &RunParameters,
) -> Structure {
    let n_repeats = params.repeats as usize;
    let offsets = layer_offsets(rel);

    let mut layers = Vec::with_capacity(n_repeats * QL_PER_REPEAT * QL_LAYERS.len());
    for n in 0..n_repeats {
        for q in 0..QL_PER_REPEAT {
            let ql_base = n as f64 * rel.c_hex + q as f64 * rel.c_t;
            for (j, &(species, role)) in QL_LAYERS.iter().enumerate() {
                let [x, y] = SITES[(QL_LAYERS.len() * q + j) % SITES.len()];
                let z = ql_base + offsets[j];
                layers.push(Atom::new(
                    species,
                    format!("{} r{} QL{} {}", species, n, q, role),
                    [x, y, z],
                ));
            }
        }
    }

    // 元素分组是全局的：所有 Bi 在前，所有 Se 在后，组内保持生成顺序
    let atoms: Vec<Atom> = Species::ALL
        .iter()
        .flat_map(|&sp| layers.iter().filter(move |a| a.species == sp).cloned())
        .collect();

    let c_rel = rel.c_total_abs / constants.a;
    let lattice = Lattice::new(
        constants.a,
        [
            [1.0, 0.0, 0.0],
            [-0.5, 3f64.sqrt() / 2.0, 0.0],
            [0.0, 0.0, c_rel],
        ],
    );

    let header = format!(
        "Bi2Se3 hexagonal {}x15 layers, vacuum {:?} A",
        params.repeats, params.vacuum
    );

    Structure::new(header, lattice, atoms)
}
