//! 商品过滤/排序引擎
//!
//! 对内存中的商品集合做纯同步变换：过滤谓词取合取，
//! 排序在副本上进行，源集合从不被修改。
//!
//! 价格区间编辑采用双重策略：
//! - 实时编辑 (`try_set_*`): 违反 min <= max 的提议被拒绝，控件回退；
//! - 失焦提交 (`commit_*`): 非法值被钳制到最近的合法边界。
//!
//! 两种行为必须同时保留，不可互相简化。

use crate::Plant;

/// 价格滑块的下界
pub const PRICE_FLOOR: f64 = 0.0;
/// 价格滑块的上界
pub const PRICE_CEIL: f64 = 1000.0;

// =========================================================
// 价格区间 (PriceRange)
// =========================================================

/// 闭区间价格过滤条件，始终满足 min <= max
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: PRICE_FLOOR,
            max: PRICE_CEIL,
        }
    }
}

impl PriceRange {
    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// 价格是否落在区间内（闭区间）
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }

    /// 实时编辑：提议新的下界
    ///
    /// 超出 `[PRICE_FLOOR, max]` 的提议被拒绝并返回 `false`，
    /// 调用方应将控件回退到上一次接受的值。
    pub fn try_set_min(&mut self, value: f64) -> bool {
        if !value.is_finite() || value < PRICE_FLOOR || value > self.max {
            return false;
        }
        self.min = value;
        true
    }

    /// 实时编辑：提议新的上界，规则与 [`Self::try_set_min`] 对称
    pub fn try_set_max(&mut self, value: f64) -> bool {
        if !value.is_finite() || value > PRICE_CEIL || value < self.min {
            return false;
        }
        self.max = value;
        true
    }

    /// 失焦提交：将待定下界钳制到 `[PRICE_FLOOR, max]` 后写入
    ///
    /// 返回实际生效的值，供控件显示。
    pub fn commit_min(&mut self, value: f64) -> f64 {
        let value = if value.is_finite() { value } else { PRICE_FLOOR };
        self.min = value.clamp(PRICE_FLOOR, self.max);
        self.min
    }

    /// 失焦提交：将待定上界钳制到 `[min, PRICE_CEIL]` 后写入
    pub fn commit_max(&mut self, value: f64) -> f64 {
        let value = if value.is_finite() { value } else { PRICE_CEIL };
        self.max = value.clamp(self.min, PRICE_CEIL);
        self.max
    }
}

// =========================================================
// 过滤条件 (CatalogFilter)
// =========================================================

/// 目录页过滤条件，瞬态 UI 状态，不持久化
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CatalogFilter {
    /// 仅显示有库存商品；关闭时跳过库存检查
    pub in_stock: bool,
    /// 仅显示折扣商品；关闭时跳过折扣检查
    pub on_discount: bool,
    /// 价格区间，始终生效
    pub price: PriceRange,
}

impl CatalogFilter {
    /// 合取谓词：商品需满足所有启用的条件
    pub fn matches(&self, plant: &Plant) -> bool {
        let in_stock = !self.in_stock || plant.in_stock;
        let on_discount = !self.on_discount || plant.on_discount();
        in_stock && on_discount && self.price.contains(plant.price)
    }

    /// 恢复所有过滤条件到默认值
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =========================================================
// 排序 (SortOrder)
// =========================================================

/// 排序全序，六种取法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    PriceAsc,
    PriceDesc,
    RatingDesc,
    RatingAsc,
    NameAsc,
    NameDesc,
}

impl SortOrder {
    /// 解析目录页下拉框的排序标签；未识别的标签返回 None（排序为 no-op）
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Low to High" => Some(Self::PriceAsc),
            "High to Low" => Some(Self::PriceDesc),
            "Top Rated" => Some(Self::RatingDesc),
            "Lowest Rated" => Some(Self::RatingAsc),
            "A to Z" => Some(Self::NameAsc),
            "Z to A" => Some(Self::NameDesc),
            _ => None,
        }
    }

    /// 解析首页 Trending 区块的快捷排序标签
    pub fn from_quick_label(label: &str) -> Option<Self> {
        match label {
            "featured" => Some(Self::RatingDesc),
            "cheapest" => Some(Self::PriceAsc),
            "name" => Some(Self::NameAsc),
            _ => None,
        }
    }

    fn apply(self, items: &mut [Plant]) {
        match self {
            Self::PriceAsc => items.sort_by(|a, b| a.price.total_cmp(&b.price)),
            Self::PriceDesc => items.sort_by(|a, b| b.price.total_cmp(&a.price)),
            Self::RatingDesc => items.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            Self::RatingAsc => items.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
            Self::NameAsc => items.sort_by(|a, b| a.name.cmp(&b.name)),
            Self::NameDesc => items.sort_by(|a, b| b.name.cmp(&a.name)),
        }
    }
}

// =========================================================
// 视图变换 (View Transformations)
// =========================================================

/// 过滤后的商品视图（复制，不动源集合）
pub fn filtered(items: &[Plant], filter: &CatalogFilter) -> Vec<Plant> {
    items
        .iter()
        .filter(|plant| filter.matches(plant))
        .cloned()
        .collect()
}

/// 按标签排序后的副本；标签未识别时原样返回
pub fn sorted_by_label(items: &[Plant], label: &str) -> Vec<Plant> {
    let mut sorted = items.to_vec();
    if let Some(order) = SortOrder::from_label(label) {
        order.apply(&mut sorted);
    }
    sorted
}

/// 目录页展示视图：先过滤再排序
pub fn catalog_view(items: &[Plant], filter: &CatalogFilter, sort_label: &str) -> Vec<Plant> {
    sorted_by_label(&filtered(items, filter), sort_label)
}

/// 首页快捷排序：识别标签时就地重排存储的列表
pub fn quick_sort_in_place(items: &mut [Plant], label: &str) {
    if let Some(order) = SortOrder::from_quick_label(label) {
        order.apply(items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(name: &str, price: f64, rating: f64, stock: u32, discount: u32) -> Plant {
        Plant {
            id: format!("id-{name}"),
            name: name.to_string(),
            description: String::new(),
            price,
            discount_percentage: discount,
            discounted_price: (discount > 0).then(|| price * (100 - discount) as f64 / 100.0),
            stock_count: stock,
            in_stock: stock > 0,
            rating,
            image: String::new(),
        }
    }

    fn sample() -> Vec<Plant> {
        vec![
            plant("Monstera", 45.0, 4.5, 3, 0),
            plant("Aloe", 10.0, 2.0, 0, 20),
            plant("Bonsai", 120.0, 5.0, 1, 0),
            plant("Cactus", 15.0, 3.5, 7, 10),
        ]
    }

    #[test]
    fn default_filter_keeps_everything() {
        let items = sample();
        let filter = CatalogFilter::default();
        assert_eq!(filtered(&items, &filter).len(), items.len());
    }

    #[test]
    fn filters_apply_conjunctively() {
        let items = sample();
        let filter = CatalogFilter {
            in_stock: true,
            on_discount: true,
            ..Default::default()
        };

        let view = filtered(&items, &filter);
        // Only Cactus is both in stock and discounted
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Cactus");
    }

    #[test]
    fn disabling_a_toggle_removes_its_clause() {
        let items = sample();
        let both = CatalogFilter {
            in_stock: true,
            on_discount: true,
            ..Default::default()
        };
        let stock_only = CatalogFilter {
            in_stock: true,
            ..Default::default()
        };

        let with_clause: Vec<_> = items
            .iter()
            .filter(|p| p.in_stock && p.on_discount())
            .cloned()
            .collect();
        assert_eq!(filtered(&items, &both), with_clause);

        let without_clause: Vec<_> = items.iter().filter(|p| p.in_stock).cloned().collect();
        assert_eq!(filtered(&items, &stock_only), without_clause);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let items = sample();
        let mut filter = CatalogFilter::default();
        assert!(filter.price.try_set_min(10.0));
        assert!(filter.price.try_set_max(45.0));

        let view = filtered(&items, &filter);
        let names: Vec<_> = view.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Monstera", "Aloe", "Cactus"]);
    }

    #[test]
    fn sort_labels_order_price_and_rating() {
        let items = vec![plant("A", 15.0, 5.0, 1, 0), plant("B", 10.0, 2.0, 1, 0)];

        let cheap_first = sorted_by_label(&items, "Low to High");
        assert_eq!(cheap_first[0].price, 10.0);
        assert_eq!(cheap_first[1].price, 15.0);

        let top_rated = sorted_by_label(&items, "Top Rated");
        assert_eq!(top_rated[0].rating, 5.0);
        assert_eq!(top_rated[1].rating, 2.0);
    }

    #[test]
    fn sorting_copies_and_unknown_label_is_a_noop() {
        let items = sample();
        let before = items.clone();

        let view = sorted_by_label(&items, "rating");
        assert_eq!(view, before);
        assert_eq!(items, before);
    }

    #[test]
    fn sorting_is_idempotent() {
        let items = sample();
        let once = sorted_by_label(&items, "Z to A");
        let twice = sorted_by_label(&once, "Z to A");
        assert_eq!(once, twice);
    }

    #[test]
    fn quick_sort_reorders_in_place() {
        let mut items = sample();
        quick_sort_in_place(&mut items, "cheapest");
        let prices: Vec<_> = items.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![10.0, 15.0, 45.0, 120.0]);

        let before = items.clone();
        quick_sort_in_place(&mut items, "rating");
        assert_eq!(items, before);
    }

    #[test]
    fn live_edit_rejects_min_above_max() {
        let mut range = PriceRange::default();
        assert!(range.try_set_max(600.0));
        assert!(range.try_set_min(200.0));

        // Proposal above the current max is rejected, last accepted value stays
        assert!(!range.try_set_min(700.0));
        assert_eq!(range.min(), 200.0);

        // Proposal below the current min is rejected too
        assert!(!range.try_set_max(5.0));
        assert_eq!(range.max(), 600.0);
    }

    #[test]
    fn live_edit_rejects_out_of_slider_bounds() {
        let mut range = PriceRange::default();
        assert!(!range.try_set_min(-1.0));
        assert!(!range.try_set_max(1001.0));
        assert_eq!(range.min(), PRICE_FLOOR);
        assert_eq!(range.max(), PRICE_CEIL);
    }

    #[test]
    fn swapped_bounds_reject_live_but_clamp_on_commit() {
        let mut range = PriceRange::default();
        assert!(range.try_set_min(10.0));
        assert!(range.try_set_max(600.0));

        // Live edit: swapping is rejected outright
        assert!(!range.try_set_min(600.1));
        assert!(!range.try_set_max(9.9));

        // Commit pass: pending min above max is clamped down to max
        assert_eq!(range.commit_min(700.0), 600.0);
        assert_eq!(range.min(), 600.0);

        // And a pending max below min is clamped up to min
        let mut range = PriceRange::default();
        range.try_set_min(10.0);
        assert_eq!(range.commit_max(5.0), 10.0);
        assert_eq!(range.max(), 10.0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut filter = CatalogFilter {
            in_stock: true,
            on_discount: true,
            ..Default::default()
        };
        filter.price.try_set_min(100.0);
        filter.price.try_set_max(500.0);

        filter.reset();

        assert!(!filter.in_stock);
        assert!(!filter.on_discount);
        assert_eq!(filter.price, PriceRange::default());
    }
}
