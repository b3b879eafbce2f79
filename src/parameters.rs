//! Parameters (RFC 8941 Section 3.1.2)
//!
//! ## 概要
//!
//! Item / Inner List に付随する、挿入順を保持するキー→値マップを提供します。
//! 値は Bare Item のみで、パラメーターにパラメーターは付けられません。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_sfv::{BareItem, Parameters};
//!
//! let params = Parameters::new()
//!     .add("a", BareItem::integer(1).unwrap()).unwrap()
//!     .add("b", BareItem::boolean(false)).unwrap();
//!
//! assert_eq!(params.get("a"), Some(&BareItem::Integer(1)));
//! assert_eq!(params.to_string(), ";a=1;b=?0");
//! ```

use core::fmt;

use crate::bare_item::BareItem;
use crate::error::Error;
use crate::index;
use crate::key::Key;
use crate::serializer;

/// Item / Inner List のパラメーター
///
/// 挿入順を保持するキー→Bare Item のマップ。キーはすべて構築時に検証済み。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parameters {
    entries: Vec<(Key, BareItem)>,
}

impl Parameters {
    /// 空のパラメーターを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// メンバー数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// キーが存在するかどうか
    pub fn has(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// キーで値を取得
    pub fn get(&self, key: &str) -> Option<&BareItem> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// 符号付きインデックスでキーと値を取得
    ///
    /// 負のインデックスは末尾からの参照。範囲外は `None`。
    pub fn get_by_index(&self, index: i64) -> Option<(&Key, &BareItem)> {
        let pos = index::normalize(index, self.entries.len())?;
        self.entries.get(pos).map(|(k, v)| (k, v))
    }

    /// キーを挿入順に返す
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// キーと値のペアを挿入順に返す
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &BareItem)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// キーに値を設定
    ///
    /// キーが既にあれば位置を保ったまま値を更新し、なければ末尾に追加する。
    /// 同じ値の設定は何もしない。
    pub fn add(self, key: &str, value: BareItem) -> Result<Self, Error> {
        let key = Key::new(key)?;
        Ok(self.set(key, value))
    }

    /// キーを末尾に追加
    ///
    /// キーが既にあれば取り除いてから末尾に追加する。
    pub fn append(mut self, key: &str, value: BareItem) -> Result<Self, Error> {
        let key = Key::new(key)?;

        if let Some(pos) = self.position(key.as_str()) {
            if pos == self.entries.len() - 1 && self.entries[pos].1 == value {
                return Ok(self);
            }
            self.entries.remove(pos);
        }

        self.entries.push((key, value));
        Ok(self)
    }

    /// キーを先頭に追加
    ///
    /// キーが既にあれば取り除いてから先頭に追加する。
    pub fn prepend(mut self, key: &str, value: BareItem) -> Result<Self, Error> {
        let key = Key::new(key)?;

        if let Some(pos) = self.position(key.as_str()) {
            if pos == 0 && self.entries[pos].1 == value {
                return Ok(self);
            }
            self.entries.remove(pos);
        }

        self.entries.insert(0, (key, value));
        Ok(self)
    }

    /// キーを削除 (存在しないキーは無視)
    pub fn remove(mut self, keys: &[&str]) -> Self {
        self.entries.retain(|(k, _)| !keys.contains(&k.as_str()));
        self
    }

    /// 符号付きインデックスで削除 (範囲外は無視)
    pub fn remove_by_index(mut self, indices: &[i64]) -> Self {
        let len = self.entries.len();
        let mut remove: Vec<usize> = indices
            .iter()
            .filter_map(|&i| index::normalize(i, len))
            .collect();
        remove.sort_unstable();
        remove.dedup();

        for pos in remove.into_iter().rev() {
            self.entries.remove(pos);
        }
        self
    }

    /// 別のパラメーターを統合
    ///
    /// `other` の各ペアを挿入順に `add` 相当で適用する。
    pub fn merge(mut self, other: &Parameters) -> Self {
        for (key, value) in other.iter() {
            self = self.set(key.clone(), value.clone());
        }
        self
    }

    /// すべてのメンバーを削除
    pub fn clear(mut self) -> Self {
        self.entries.clear();
        self
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    fn set(mut self, key: Key, value: BareItem) -> Self {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => {
                if entry.1 != value {
                    entry.1 = value;
                }
            }
            None => self.entries.push((key, value)),
        }
        self
    }

    /// キーに値を設定する (パーサー用、in-place)
    pub(crate) fn set_parsed(&mut self, key: Key, value: BareItem) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        serializer::serialize_parameters(self, &mut out);
        f.write_str(&out)
    }
}
