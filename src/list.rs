//! List フィールド (RFC 8941 Section 3.1)
//!
//! ## 概要
//!
//! トップレベルの List フィールドを提供します。メンバーは Item または
//! Inner List です。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_sfv::{Item, List};
//!
//! let list = List::from_http_value(b"sugar, tea, rum").unwrap();
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.to_http_value(), "sugar, tea, rum");
//!
//! let list = list.push(Item::token("milk").unwrap().into());
//! assert_eq!(list.to_http_value(), "sugar, tea, rum, milk");
//! ```

use core::fmt;

use crate::error::{Error, Offset};
use crate::index;
use crate::inner_list::insert_position;
use crate::member::Member;
use crate::parser::Parser;
use crate::serializer;

/// List フィールド
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct List {
    members: Vec<Member>,
}

impl List {
    /// 空の List を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// メンバーの列から作成
    pub fn from_members(members: Vec<Member>) -> Self {
        List { members }
    }

    /// List フィールド値をパース
    ///
    /// 空入力は空の List になる。
    pub fn from_http_value(input: &[u8]) -> Result<Self, Error> {
        Parser::new(input).parse_list_field()
    }

    /// メンバー数
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// 符号付きインデックスが範囲内かどうか
    pub fn has(&self, index: i64) -> bool {
        index::normalize(index, self.members.len()).is_some()
    }

    /// 符号付きインデックスで取得
    ///
    /// 負のインデックスは末尾からの参照。範囲外は `None`。
    pub fn get(&self, index: i64) -> Option<&Member> {
        let pos = index::normalize(index, self.members.len())?;
        self.members.get(pos)
    }

    /// メンバーを順に返す
    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    /// 末尾に追加
    pub fn push(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// 先頭に追加
    pub fn unshift(mut self, member: Member) -> Self {
        self.members.insert(0, member);
        self
    }

    /// 正規化したインデックスの直前に挿入
    ///
    /// `index == len` は末尾への追加。それ以外の範囲外はエラー。
    pub fn insert(mut self, index: i64, member: Member) -> Result<Self, Error> {
        let pos = insert_position(index, self.members.len())?;
        self.members.insert(pos, member);
        Ok(self)
    }

    /// 正規化したインデックスのメンバーを置換
    ///
    /// 同じ値への置換は何もしない。範囲外はエラー。
    pub fn replace(mut self, index: i64, member: Member) -> Result<Self, Error> {
        let pos = index::normalize(index, self.members.len())
            .ok_or(Error::InvalidOffset(Offset::Index(index)))?;
        if self.members[pos] != member {
            self.members[pos] = member;
        }
        Ok(self)
    }

    /// 符号付きインデックスで削除 (範囲外は無視)
    pub fn remove_by_index(mut self, indices: &[i64]) -> Self {
        let len = self.members.len();
        let mut remove: Vec<usize> = indices
            .iter()
            .filter_map(|&i| index::normalize(i, len))
            .collect();
        remove.sort_unstable();
        remove.dedup();

        for pos in remove.into_iter().rev() {
            self.members.remove(pos);
        }
        self
    }

    /// すべてのメンバーを削除
    pub fn clear(mut self) -> Self {
        self.members.clear();
        self
    }

    /// HTTP フィールド値を生成
    ///
    /// 空の List は空文字列になる。
    pub fn to_http_value(&self) -> String {
        let mut out = String::new();
        serializer::serialize_list(self, &mut out);
        out
    }

    /// パーサー用コンストラクタ
    pub(crate) fn from_parsed(members: Vec<Member>) -> Self {
        List { members }
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_http_value())
    }
}
