//! # 晶体结构数据模型
//!
//! 生成器的输出：晶格矢量 + 按元素分组的原子列表。
//!
//! ## 依赖关系
//! - 被 `generators/` 和 `writers/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 元素种类，声明顺序即 POSCAR 中的元素顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Species {
    Bi,
    Se,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::Bi, Species::Se];
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Species::Bi => write!(f, "Bi"),
            Species::Se => write!(f, "Se"),
        }
    }
}

/// 晶格：缩放因子 + 以缩放因子为单位的三个晶格矢量（行向量）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lattice {
    pub scale: f64,
    pub vectors: [[f64; 3]; 3],
}

impl Lattice {
    pub fn new(scale: f64, vectors: [[f64; 3]; 3]) -> Self {
        Lattice { scale, vectors }
    }

    /// 分数坐标转笛卡尔坐标 (Å)
    pub fn cartesian(&self, frac: [f64; 3]) -> [f64; 3] {
        let m = self.vectors;
        let s = self.scale;
        [
            s * (frac[0] * m[0][0] + frac[1] * m[1][0] + frac[2] * m[2][0]),
            s * (frac[0] * m[0][1] + frac[1] * m[1][1] + frac[2] * m[2][1]),
            s * (frac[0] * m[0][2] + frac[1] * m[1][2] + frac[2] * m[2][2]),
        ]
    }

    /// 晶胞体积 (Å³)
    pub fn volume(&self) -> f64 {
        let [a, b, c] = self.vectors;

        // 行列式计算
        let det = a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
            + a[2] * (b[0] * c[1] - b[1] * c[0]);
        det.abs() * self.scale.powi(3)
    }

    /// 各晶格矢量长度 (Å)
    pub fn lengths(&self) -> [f64; 3] {
        self.vectors
            .map(|v| self.scale * (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt())
    }
}

/// 原子信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub species: Species,

    /// 来源标签（重复单元、QL 序号、层位），写在坐标行末尾
    pub label: String,

    /// 分数坐标 [x, y, z]
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(species: Species, label: impl Into<String>, position: [f64; 3]) -> Self {
        Atom {
            species,
            label: label.into(),
            position,
        }
    }
}

/// 晶体结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    /// 第一行注释
    pub header: String,

    pub lattice: Lattice,

    /// 原子列表，已按元素分组
    pub atoms: Vec<Atom>,
}

impl Structure {
    pub fn new(header: impl Into<String>, lattice: Lattice, atoms: Vec<Atom>) -> Self {
        Structure {
            header: header.into(),
            lattice,
            atoms,
        }
    }

    /// 按声明顺序统计每种元素的原子数
    pub fn species_counts(&self) -> Vec<(Species, usize)> {
        Species::ALL
            .iter()
            .map(|&sp| (sp, self.atoms.iter().filter(|a| a.species == sp).count()))
            .collect()
    }

    /// 原子是否按元素连续分组，且分组顺序与 `species_counts` 一致
    pub fn is_grouped(&self) -> bool {
        self.atoms
            .windows(2)
            .all(|w| w[0].species <= w[1].species)
    }
}
