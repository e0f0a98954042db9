//! Fuzz target for tag value escaping

#![no_main]

use libfuzzer_sys::fuzz_target;
use slirc_wire::TagValue;

fuzz_target!(|value: String| {
    let encoded = TagValue::from(value.as_str()).encode();
    assert_eq!(TagValue::parse(&encoded).as_str(), value);

    // Decoding arbitrary wire text never panics.
    let _ = TagValue::parse(&value);
});
