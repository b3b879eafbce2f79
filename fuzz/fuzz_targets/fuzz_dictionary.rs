#![no_main]

use libfuzzer_sys::fuzz_target;
use shiguredo_sfv::parse_dictionary;

fuzz_target!(|data: &[u8]| {
    if let Ok(dict) = parse_dictionary(data) {
        for (key, member) in dict.iter() {
            assert!(dict.has(key.as_str()));
            assert_eq!(dict.get(key.as_str()), Some(member));
        }

        // 直列化は正準形: 再パースして同じ構造・同じバイト列になる
        let value = dict.to_http_value();
        let reparsed = parse_dictionary(value.as_bytes()).unwrap();
        assert_eq!(dict, reparsed);
        assert_eq!(value, reparsed.to_http_value());
    }
});
