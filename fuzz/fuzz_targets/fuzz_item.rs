#![no_main]

use libfuzzer_sys::fuzz_target;
use shiguredo_sfv::parse_item;

fuzz_target!(|data: &[u8]| {
    if let Ok(item) = parse_item(data) {
        let _ = item.bare_item();
        let _ = item.parameters();

        // 直列化は正準形: 再パースして同じ構造・同じバイト列になる
        let value = item.to_http_value();
        let reparsed = parse_item(value.as_bytes()).unwrap();
        assert_eq!(item, reparsed);
        assert_eq!(value, reparsed.to_http_value());
    }
});
