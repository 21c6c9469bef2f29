//! Settlement names from fixed syllable tables

use crate::core::types::RegionId;

const PREFIXES: [&str; 14] = [
    "天", "龙", "金", "北", "南", "西", "东", "长", "安", "宁", "平", "定", "盛", "新",
];
const SUFFIXES: [&str; 12] = [
    "京", "都", "城", "港", "州", "山", "原", "堡", "镇", "关", "江", "川",
];

pub fn settlement_name(id: RegionId) -> String {
    let id = id.index();
    format!(
        "{}{}",
        PREFIXES[id % PREFIXES.len()],
        SUFFIXES[(id * 3) % SUFFIXES.len()]
    )
}

pub fn wilderness_name(id: RegionId) -> String {
    format!("Region {}", id.0)
}
