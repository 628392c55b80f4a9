/*
 * Axis / Axes: 命名轴系统
 *
 * 每个轴有名字和固定长度，两个轴名字相同即视为同一个轴。
 * 张量的形状由其 `Axes` 决定，元素级运算按轴名对齐（而非按位置），
 * 归约运算通过 `out_axes` 指定保留哪些轴。
 *
 * # 示例
 * ```
 * use only_graph::nn::{Axes, Axis};
 *
 * let n = Axis::new("N", 4).unwrap();
 * let c = Axis::new("C", 3).unwrap();
 * let axes = Axes::new(vec![c.clone(), n.clone()]).unwrap();
 * assert_eq!(axes.lengths(), vec![3, 4]);
 * assert_eq!(axes.to_string(), "(C:3, N:4)");
 * ```
 */

use super::GraphError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 命名轴：名字 + 长度
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Axis {
    name: String,
    length: usize,
}

impl Axis {
    /// 创建一个轴，长度必须大于0
    pub fn new(name: &str, length: usize) -> Result<Self, GraphError> {
        if name.is_empty() {
            return Err(GraphError::InvalidAxis("轴名不能为空".to_string()));
        }
        if length == 0 {
            return Err(GraphError::InvalidAxis(format!(
                "轴`{name}`的长度必须大于0"
            )));
        }
        Ok(Self {
            name: name.to_string(),
            length,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn length(&self) -> usize {
        self.length
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.length)
    }
}

/// 有序且轴名唯一的轴集合。空集合表示标量
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Axes {
    axes: Vec<Axis>,
}

impl Axes {
    /// 创建轴集合，轴名重复时报错
    pub fn new(axes: Vec<Axis>) -> Result<Self, GraphError> {
        for (i, axis) in axes.iter().enumerate() {
            if axes[..i].iter().any(|a| a.name == axis.name) {
                return Err(GraphError::DuplicateAxis(axis.name.clone()));
            }
        }
        Ok(Self { axes })
    }

    /// 标量对应的空轴集合
    pub const fn scalar() -> Self {
        Self { axes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Axis> {
        self.axes.iter()
    }

    /// 各轴长度，即对应张量的形状
    pub fn lengths(&self) -> Vec<usize> {
        self.axes.iter().map(Axis::length).collect()
    }

    /// 元素总数（标量为1）
    pub fn size(&self) -> usize {
        self.axes.iter().map(Axis::length).product()
    }

    pub fn names(&self) -> Vec<&str> {
        self.axes.iter().map(Axis::name).collect()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.axes.iter().position(|a| a.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Axis> {
        self.axes.iter().find(|a| a.name == name)
    }

    pub fn contains(&self, axis: &Axis) -> bool {
        self.position(&axis.name).is_some()
    }

    /// 判断本集合的轴是否都在`other`中
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.axes.iter().all(|a| other.contains(a))
    }

    /// 判断两个集合是否含有相同的轴（忽略顺序）
    pub fn same_set(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset_of(other)
    }

    /// 并集：先保持`self`的顺序，再追加`other`独有的轴。
    /// 同名轴长度不同时报错
    pub fn union(&self, other: &Self) -> Result<Self, GraphError> {
        self.check_lengths_agree(other)?;
        let mut axes = self.axes.clone();
        axes.extend(other.axes.iter().filter(|a| !self.contains(a)).cloned());
        Ok(Self { axes })
    }

    /// 交集，保持`self`的顺序
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            axes: self
                .axes
                .iter()
                .filter(|a| other.contains(a))
                .cloned()
                .collect(),
        }
    }

    /// 差集：`self`中不在`other`里的轴
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            axes: self
                .axes
                .iter()
                .filter(|a| !other.contains(a))
                .cloned()
                .collect(),
        }
    }

    /// 同名轴的长度必须一致
    pub fn check_lengths_agree(&self, other: &Self) -> Result<(), GraphError> {
        for axis in &self.axes {
            match other.get(&axis.name) {
                Some(o) if o.length != axis.length => {
                    return Err(GraphError::AxesMismatch {
                        left: self.clone(),
                        right: other.clone(),
                        message: format!(
                            "轴`{}`的长度不一致：{} vs {}",
                            axis.name, axis.length, o.length
                        ),
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

impl From<Axis> for Axes {
    fn from(axis: Axis) -> Self {
        Self { axes: vec![axis] }
    }
}

impl<'a> IntoIterator for &'a Axes {
    type Item = &'a Axis;
    type IntoIter = std::slice::Iter<'a, Axis>;

    fn into_iter(self) -> Self::IntoIter {
        self.axes.iter()
    }
}

impl fmt::Display for Axes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.axes.iter().map(ToString::to_string).collect();
        write!(f, "({})", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_err;

    fn axis(name: &str, length: usize) -> Axis {
        Axis::new(name, length).unwrap()
    }

    #[test]
    fn test_axis_zero_length() {
        assert_err!(Axis::new("N", 0), GraphError::InvalidAxis(msg) if msg.contains("N"));
        assert_err!(Axis::new("", 2), GraphError::InvalidAxis(_));
    }

    #[test]
    fn test_axes_duplicate_name() {
        let result = Axes::new(vec![axis("N", 2), axis("N", 2)]);
        assert_err!(result, GraphError::DuplicateAxis(name) if name == "N");
    }

    #[test]
    fn test_axes_scalar() {
        let s = Axes::scalar();
        assert!(s.is_empty());
        assert_eq!(s.size(), 1);
        assert_eq!(s.lengths(), Vec::<usize>::new());
        assert_eq!(s.to_string(), "()");
    }

    #[test]
    fn test_axes_set_operations() {
        let a = Axes::new(vec![axis("C", 3), axis("N", 4)]).unwrap();
        let b = Axes::new(vec![axis("N", 4), axis("H", 2)]).unwrap();

        assert_eq!(a.union(&b).unwrap().names(), vec!["C", "N", "H"]);
        assert_eq!(a.intersection(&b).names(), vec!["N"]);
        assert_eq!(a.difference(&b).names(), vec!["C"]);
        assert_eq!(b.difference(&a).names(), vec!["H"]);
        assert!(!a.same_set(&b));
        assert!(a.intersection(&b).is_subset_of(&a));
    }

    #[test]
    fn test_axes_same_set_ignores_order() {
        let a = Axes::new(vec![axis("C", 3), axis("N", 4)]).unwrap();
        let b = Axes::new(vec![axis("N", 4), axis("C", 3)]).unwrap();
        assert!(a.same_set(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_axes_union_length_conflict() {
        let a = Axes::from(axis("N", 4));
        let b = Axes::from(axis("N", 5));
        assert_err!(a.union(&b), GraphError::AxesMismatch { .. });
    }
}
