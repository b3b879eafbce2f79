//! Dictionary フィールド (RFC 8941 Section 3.2)
//!
//! ## 概要
//!
//! トップレベルの Dictionary フィールドを提供します。挿入順を保持する
//! キー→メンバーのマップで、メンバーは Item または Inner List です。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_sfv::{BareItem, Dictionary};
//!
//! let dict = Dictionary::from_http_value(b"a=1, b=2;x=?0, c").unwrap();
//! assert_eq!(dict.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
//!
//! // 値なしのキーは Boolean true
//! let c = dict.get("c").unwrap().as_item().unwrap();
//! assert_eq!(c.bare_item(), &BareItem::Boolean(true));
//!
//! assert_eq!(dict.to_http_value(), "a=1, b=2;x=?0, c");
//! ```

use core::fmt;

use crate::error::Error;
use crate::index;
use crate::key::Key;
use crate::member::Member;
use crate::parser::Parser;
use crate::serializer;

/// Dictionary フィールド
///
/// 挿入順を保持するキー→メンバーのマップ。キーはすべて構築時に検証済み。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dictionary {
    entries: Vec<(Key, Member)>,
}

impl Dictionary {
    /// 空の Dictionary を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// Dictionary フィールド値をパース
    ///
    /// 空入力は空の Dictionary になる。重複キーは位置を保ったまま
    /// 後の値で上書きされる。
    pub fn from_http_value(input: &[u8]) -> Result<Self, Error> {
        Parser::new(input).parse_dictionary_field()
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
    pub fn get(&self, key: &str) -> Option<&Member> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// 符号付きインデックスでキーと値を取得
    ///
    /// 負のインデックスは末尾からの参照。範囲外は `None`。
    pub fn get_by_index(&self, index: i64) -> Option<(&Key, &Member)> {
        let pos = index::normalize(index, self.entries.len())?;
        self.entries.get(pos).map(|(k, v)| (k, v))
    }

    /// キーを挿入順に返す
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// キーと値のペアを挿入順に返す
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Member)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// キーに値を設定
    ///
    /// キーが既にあれば位置を保ったまま値を更新し、なければ末尾に追加する。
    /// 同じ値の設定は何もしない。
    pub fn add(self, key: &str, member: Member) -> Result<Self, Error> {
        let key = Key::new(key)?;
        Ok(self.set(key, member))
    }

    /// キーを末尾に追加
    ///
    /// キーが既にあれば取り除いてから末尾に追加する。
    pub fn append(mut self, key: &str, member: Member) -> Result<Self, Error> {
        let key = Key::new(key)?;

        if let Some(pos) = self.position(key.as_str()) {
            if pos == self.entries.len() - 1 && self.entries[pos].1 == member {
                return Ok(self);
            }
            self.entries.remove(pos);
        }

        self.entries.push((key, member));
        Ok(self)
    }

    /// キーを先頭に追加
    ///
    /// キーが既にあれば取り除いてから先頭に追加する。
    pub fn prepend(mut self, key: &str, member: Member) -> Result<Self, Error> {
        let key = Key::new(key)?;

        if let Some(pos) = self.position(key.as_str()) {
            if pos == 0 && self.entries[pos].1 == member {
                return Ok(self);
            }
            self.entries.remove(pos);
        }

        self.entries.insert(0, (key, member));
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

    /// 別の Dictionary を統合
    ///
    /// `other` の各ペアを挿入順に `add` 相当で適用する。
    pub fn merge(mut self, other: &Dictionary) -> Self {
        for (key, member) in other.iter() {
            self = self.set(key.clone(), member.clone());
        }
        self
    }

    /// すべてのメンバーを削除
    pub fn clear(mut self) -> Self {
        self.entries.clear();
        self
    }

    /// HTTP フィールド値を生成
    ///
    /// 空の Dictionary は空文字列になる。
    pub fn to_http_value(&self) -> String {
        let mut out = String::new();
        serializer::serialize_dictionary(self, &mut out);
        out
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    fn set(mut self, key: Key, member: Member) -> Self {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => {
                if entry.1 != member {
                    entry.1 = member;
                }
            }
            None => self.entries.push((key, member)),
        }
        self
    }

    /// キーに値を設定する (パーサー用、in-place)
    pub(crate) fn set_parsed(&mut self, key: Key, member: Member) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = member,
            None => self.entries.push((key, member)),
        }
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_http_value())
    }
}
