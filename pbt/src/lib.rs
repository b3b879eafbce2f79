//! PBT テスト共通ユーティリティ

use proptest::prelude::*;

use shiguredo_sfv::{BareItem, Decimal, Dictionary, InnerList, Item, List, Member, Parameters};

// ========================================
// Bare Item 生成
// ========================================

/// キー: `[a-z*]` で始まり `[a-z0-9_\-.*]` が続く
pub fn key() -> impl Strategy<Value = String> {
    "[a-z*][a-z0-9_.*-]{0,7}".prop_map(|s| s)
}

/// トークン: `[A-Za-z*]` で始まり tchar が続く
pub fn token() -> impl Strategy<Value = String> {
    "[A-Za-z*][A-Za-z0-9:/!#$%&'*+.^_`|~-]{0,7}".prop_map(|s| s)
}

/// String: 0x20..=0x7E のみ (`"` と `\` を含む)
pub fn sf_string() -> impl Strategy<Value = String> {
    "[\\x20-\\x7e]{0,16}".prop_map(|s| s)
}

/// Integer: 15 桁以内
pub fn integer() -> impl Strategy<Value = i64> {
    -999_999_999_999_999i64..=999_999_999_999_999
}

/// Decimal: 1/1000 単位で表現できる範囲全体
pub fn decimal() -> impl Strategy<Value = Decimal> {
    (-999_999_999_999_999i64..=999_999_999_999_999)
        .prop_map(|thousandths| Decimal::from_f64(thousandths as f64 / 1000.0).unwrap())
}

/// Byte Sequence の中身
pub fn byte_sequence() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..24)
}

/// Date: Integer と同じ範囲
pub fn date() -> impl Strategy<Value = i64> {
    -999_999_999_999_999i64..=999_999_999_999_999
}

/// Display String: 任意の Unicode 文字列
pub fn display_string() -> impl Strategy<Value = String> {
    ".{0,8}".prop_map(|s| s)
}

/// 任意の Bare Item
pub fn bare_item() -> impl Strategy<Value = BareItem> {
    prop_oneof![
        integer().prop_map(BareItem::Integer),
        decimal().prop_map(BareItem::Decimal),
        sf_string().prop_map(|s| BareItem::string(s).unwrap()),
        token().prop_map(|s| BareItem::token(s).unwrap()),
        byte_sequence().prop_map(BareItem::ByteSequence),
        any::<bool>().prop_map(BareItem::Boolean),
        date().prop_map(|d| BareItem::date(d).unwrap()),
        display_string().prop_map(BareItem::display_string),
    ]
}

// ========================================
// コンテナ生成
// ========================================

/// Parameters (キー 0..4 個)
pub fn parameters() -> impl Strategy<Value = Parameters> {
    proptest::collection::vec((key(), bare_item()), 0..4).prop_map(|entries| {
        entries
            .into_iter()
            .fold(Parameters::new(), |params, (key, value)| {
                params.add(&key, value).unwrap()
            })
    })
}

/// Item
pub fn item() -> impl Strategy<Value = Item> {
    (bare_item(), parameters())
        .prop_map(|(bare, params)| Item::new(bare).with_parameters(params))
}

/// Inner List (メンバー 0..4 個)
pub fn inner_list() -> impl Strategy<Value = InnerList> {
    (proptest::collection::vec(item(), 0..4), parameters())
        .prop_map(|(items, params)| InnerList::from_items(items).with_parameters(params))
}

/// List / Dictionary のメンバー
pub fn member() -> impl Strategy<Value = Member> {
    prop_oneof![
        item().prop_map(Member::from),
        inner_list().prop_map(Member::from),
    ]
}

/// List (メンバー 0..4 個)
pub fn list() -> impl Strategy<Value = List> {
    proptest::collection::vec(member(), 0..4).prop_map(List::from_members)
}

/// Dictionary (キー 0..4 個)
pub fn dictionary() -> impl Strategy<Value = Dictionary> {
    proptest::collection::vec((key(), member()), 0..4).prop_map(|entries| {
        entries
            .into_iter()
            .fold(Dictionary::new(), |dict, (key, member)| {
                dict.add(&key, member).unwrap()
            })
    })
}
