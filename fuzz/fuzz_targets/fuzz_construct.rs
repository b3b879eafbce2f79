#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shiguredo_sfv::{
    parse_list, BareItem, InnerList, Item, List, Member, Parameters,
};

#[derive(Arbitrary, Debug)]
enum FuzzBareItem {
    Integer(i64),
    Decimal(f64),
    String(String),
    Token(String),
    ByteSequence(Vec<u8>),
    Boolean(bool),
    Date(i64),
    DisplayString(String),
}

#[derive(Arbitrary, Debug)]
struct FuzzItem {
    bare_item: FuzzBareItem,
    parameters: Vec<(String, FuzzBareItem)>,
}

#[derive(Arbitrary, Debug)]
enum FuzzMember {
    Item(FuzzItem),
    InnerList(Vec<FuzzItem>, Vec<(String, FuzzBareItem)>),
}

fn build_bare_item(input: FuzzBareItem) -> Option<BareItem> {
    match input {
        FuzzBareItem::Integer(v) => BareItem::integer(v).ok(),
        FuzzBareItem::Decimal(v) => BareItem::decimal(v).ok(),
        FuzzBareItem::String(v) => BareItem::string(v).ok(),
        FuzzBareItem::Token(v) => BareItem::token(v).ok(),
        FuzzBareItem::ByteSequence(v) => Some(BareItem::byte_sequence(v)),
        FuzzBareItem::Boolean(v) => Some(BareItem::boolean(v)),
        FuzzBareItem::Date(v) => BareItem::date(v).ok(),
        FuzzBareItem::DisplayString(v) => Some(BareItem::display_string(v)),
    }
}

fn build_parameters(input: Vec<(String, FuzzBareItem)>) -> Option<Parameters> {
    let mut params = Parameters::new();
    for (key, value) in input {
        let value = build_bare_item(value)?;
        params = params.add(&key, value).ok()?;
    }
    Some(params)
}

fn build_item(input: FuzzItem) -> Option<Item> {
    let bare_item = build_bare_item(input.bare_item)?;
    let params = build_parameters(input.parameters)?;
    Some(Item::new(bare_item).with_parameters(params))
}

fn build_member(input: FuzzMember) -> Option<Member> {
    match input {
        FuzzMember::Item(item) => Some(build_item(item)?.into()),
        FuzzMember::InnerList(items, params) => {
            let items: Option<Vec<Item>> = items.into_iter().map(build_item).collect();
            let list = InnerList::from_items(items?)
                .with_parameters(build_parameters(params)?);
            Some(list.into())
        }
    }
}

// 有効な入力から構築した List は 直列化 → パース で元に戻る
fuzz_target!(|members: Vec<FuzzMember>| {
    let mut list = List::new();
    for member in members {
        match build_member(member) {
            Some(member) => list = list.push(member),
            None => return,
        }
    }

    let value = list.to_http_value();
    let reparsed = parse_list(value.as_bytes()).unwrap();
    assert_eq!(list, reparsed);
});
