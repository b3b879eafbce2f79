//! 正準直列化 (RFC 8941 Section 4.1)
//!
//! 同じ構造は常にバイト単位で同一のフィールド値になる。値の不変条件は
//! 構築時に検証済みのため、ここでの失敗はない。

use crate::bare_item::{BareItem, Decimal};
use crate::base64;
use crate::dictionary::Dictionary;
use crate::inner_list::InnerList;
use crate::item::Item;
use crate::key::Key;
use crate::list::List;
use crate::member::Member;
use crate::parameters::Parameters;

pub(crate) fn serialize_list(list: &List, out: &mut String) {
    let mut first = true;
    for member in list.iter() {
        if !first {
            out.push_str(", ");
        }
        first = false;
        serialize_member(member, out);
    }
}

pub(crate) fn serialize_dictionary(dict: &Dictionary, out: &mut String) {
    let mut first = true;
    for (key, member) in dict.iter() {
        if !first {
            out.push_str(", ");
        }
        first = false;

        serialize_key(key, out);

        // Boolean true の Item は値を省略してパラメーターのみ出力する
        match member {
            Member::Item(item) if item.bare_item() == &BareItem::Boolean(true) => {
                serialize_parameters(item.parameters(), out);
            }
            _ => {
                out.push('=');
                serialize_member(member, out);
            }
        }
    }
}

pub(crate) fn serialize_member(member: &Member, out: &mut String) {
    match member {
        Member::Item(item) => serialize_item(item, out),
        Member::InnerList(list) => serialize_inner_list(list, out),
    }
}

pub(crate) fn serialize_item(item: &Item, out: &mut String) {
    serialize_bare_item(item.bare_item(), out);
    serialize_parameters(item.parameters(), out);
}

pub(crate) fn serialize_inner_list(list: &InnerList, out: &mut String) {
    out.push('(');
    let mut first = true;
    for item in list.iter() {
        if !first {
            out.push(' ');
        }
        first = false;
        serialize_item(item, out);
    }
    out.push(')');
    serialize_parameters(list.parameters(), out);
}

pub(crate) fn serialize_parameters(params: &Parameters, out: &mut String) {
    for (key, value) in params.iter() {
        out.push(';');
        serialize_key(key, out);

        // Boolean true は値を省略する
        if value == &BareItem::Boolean(true) {
            continue;
        }

        out.push('=');
        serialize_bare_item(value, out);
    }
}

pub(crate) fn serialize_key(key: &Key, out: &mut String) {
    out.push_str(key.as_str());
}

pub(crate) fn serialize_bare_item(item: &BareItem, out: &mut String) {
    match item {
        BareItem::Integer(v) => out.push_str(&v.to_string()),
        BareItem::Decimal(v) => serialize_decimal(*v, out),
        BareItem::String(v) => serialize_string(v, out),
        BareItem::Token(v) => out.push_str(v),
        BareItem::ByteSequence(v) => {
            out.push(':');
            out.push_str(&base64::encode(v));
            out.push(':');
        }
        BareItem::Boolean(v) => out.push_str(if *v { "?1" } else { "?0" }),
        #[cfg(feature = "date")]
        BareItem::Date(v) => {
            out.push('@');
            out.push_str(&v.to_string());
        }
        #[cfg(feature = "display-string")]
        BareItem::DisplayString(v) => serialize_display_string(v, out),
    }
}

pub(crate) fn serialize_decimal(decimal: Decimal, out: &mut String) {
    let thousandths = decimal.thousandths();
    if thousandths < 0 {
        out.push('-');
    }

    let abs = thousandths.unsigned_abs();
    let integer = abs / 1000;
    let fraction = (abs % 1000) as u32;

    out.push_str(&integer.to_string());
    out.push('.');

    // 末尾のゼロは省くが、小数部は最低 1 桁
    let digits = [
        (fraction / 100) as u8,
        (fraction / 10 % 10) as u8,
        (fraction % 10) as u8,
    ];
    let keep = if digits[2] != 0 {
        3
    } else if digits[1] != 0 {
        2
    } else {
        1
    };
    for d in &digits[..keep] {
        out.push((b'0' + d) as char);
    }
}

fn serialize_string(value: &str, out: &mut String) {
    out.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
}

#[cfg(feature = "display-string")]
fn serialize_display_string(value: &str, out: &mut String) {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    out.push_str("%\"");
    for b in value.bytes() {
        if b == b'%' || b == b'"' || !(0x20..=0x7E).contains(&b) {
            out.push('%');
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0xF) as usize] as char);
        } else {
            out.push(b as char);
        }
    }
    out.push('"');
}
