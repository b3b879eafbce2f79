//! パーサーのプロパティテスト

use proptest::prelude::*;
use shiguredo_sfv::{parse_dictionary, parse_item, parse_list, BareItem, Error};
use shiguredo_sfv_pbt::{dictionary, integer, list, sf_string};

// ========================================
// 空白の扱い
// ========================================

// 先頭・末尾の SP はパース結果に影響しない
proptest! {
    #[test]
    fn prop_item_surrounding_sp(value in integer(), lead in 0usize..4, trail in 0usize..4) {
        let input = format!("{}{}{}", " ".repeat(lead), value, " ".repeat(trail));
        let item = parse_item(input.as_bytes()).unwrap();
        prop_assert_eq!(item.bare_item(), &BareItem::Integer(value));
    }
}

// コンマ前後の OWS はパース結果に影響しない
proptest! {
    #[test]
    fn prop_list_ows_around_comma(
        list in list(),
        seps in proptest::collection::vec(("[ \t]{0,3}", "[ \t]{0,3}"), 0..8)
    ) {
        prop_assume!(list.len() >= 2);

        // 正準形のコンマ区切りを OWS 付きに置き換える
        let members: Vec<String> = list
            .iter()
            .map(|member| {
                let single = shiguredo_sfv::List::from_members(vec![member.clone()]);
                single.to_http_value()
            })
            .collect();

        let mut input = String::new();
        for (i, member) in members.iter().enumerate() {
            if i > 0 {
                let (before, after) = seps.get(i % seps.len().max(1)).cloned()
                    .unwrap_or_default();
                input.push_str(&before);
                input.push(',');
                input.push_str(&after);
            }
            input.push_str(member);
        }

        let reparsed = parse_list(input.as_bytes()).unwrap();
        prop_assert_eq!(list, reparsed);
    }
}

// ========================================
// 数値の境界
// ========================================

// 15 桁を超える整数は常に拒否
proptest! {
    #[test]
    fn prop_integer_too_long_rejected(head in 1u8..=9, rest in proptest::collection::vec(0u8..=9, 15..20)) {
        let mut input = head.to_string();
        for d in rest {
            input.push((b'0' + d) as char);
        }
        prop_assert!(parse_item(input.as_bytes()).is_err());
    }
}

// 小数部 1..=3 桁の Decimal はそのまま受理
proptest! {
    #[test]
    fn prop_decimal_fraction_digits(int_part in 0i64..=999_999_999_999, frac in "[0-9]{1,3}") {
        let input = format!("{}.{}", int_part, frac);
        let item = parse_item(input.as_bytes()).unwrap();
        prop_assert!(item.bare_item().as_decimal().is_some());
    }
}

// 小数部 4 桁以上は拒否
proptest! {
    #[test]
    fn prop_decimal_fraction_too_long(int_part in 0i64..=999, frac in "[0-9]{4,6}") {
        let input = format!("{}.{}", int_part, frac);
        prop_assert!(parse_item(input.as_bytes()).is_err());
    }
}

// ========================================
// String の内容
// ========================================

// 許される文字だけからなる String はエスケープ込みで往復する
proptest! {
    #[test]
    fn prop_string_roundtrip(content in sf_string()) {
        let mut input = String::from('"');
        for c in content.chars() {
            if c == '"' || c == '\\' {
                input.push('\\');
            }
            input.push(c);
        }
        input.push('"');

        let item = parse_item(input.as_bytes()).unwrap();
        prop_assert_eq!(item.bare_item().as_string(), Some(content.as_str()));
    }
}

// ========================================
// 失敗の形
// ========================================

// 構文エラーは必ず位置を持つ
proptest! {
    #[test]
    fn prop_syntax_errors_carry_offset(input in proptest::collection::vec(any::<u8>(), 0..32)) {
        match parse_dictionary(&input) {
            Ok(_) => (),
            Err(Error::Syntax { offset, .. }) => {
                let offset = offset.expect("parser errors carry an offset");
                prop_assert!(offset <= input.len());
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }
}

// 空入力: List / Dictionary は空、Item はエラー
#[test]
fn prop_empty_input() {
    assert!(parse_list(b"").unwrap().is_empty());
    assert!(parse_dictionary(b"").unwrap().is_empty());
    assert!(parse_item(b"").is_err());
}

// Dictionary の重複キーは最後の値が勝ち、位置は最初の出現のまま
proptest! {
    #[test]
    fn prop_dictionary_duplicate_last_wins(dict in dictionary()) {
        prop_assume!(!dict.is_empty());

        let (first_key, _) = dict.get_by_index(0).unwrap();
        let first_key = first_key.as_str().to_string();

        // 既存の先頭キーを末尾にもう一度書く
        let mut input = dict.to_http_value();
        input.push_str(", ");
        input.push_str(&first_key);
        input.push_str("=42");

        let reparsed = parse_dictionary(input.as_bytes()).unwrap();
        prop_assert_eq!(reparsed.len(), dict.len());
        let (reparsed_first, member) = reparsed.get_by_index(0).unwrap();
        prop_assert_eq!(reparsed_first.as_str(), first_key.as_str());
        prop_assert_eq!(
            member.as_item().unwrap().bare_item(),
            &BareItem::Integer(42)
        );
    }
}
