#![no_main]

use libfuzzer_sys::fuzz_target;
use shiguredo_sfv::parse_list;

fuzz_target!(|data: &[u8]| {
    if let Ok(list) = parse_list(data) {
        for member in list.iter() {
            let _ = member.as_item();
            let _ = member.as_inner_list();
            let _ = member.parameters();
        }

        // 直列化は正準形: 再パースして同じ構造・同じバイト列になる
        let value = list.to_http_value();
        let reparsed = parse_list(value.as_bytes()).unwrap();
        assert_eq!(list, reparsed);
        assert_eq!(value, reparsed.to_http_value());
    }
});
