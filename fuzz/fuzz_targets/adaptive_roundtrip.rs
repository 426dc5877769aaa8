#![no_main]
use fgk::adaptive::{AdaptiveDecoder, AdaptiveEncoder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let bits = AdaptiveEncoder::new().encode(data);
    let decoded = AdaptiveDecoder::new()
        .decode(&bits)
        .expect("own output must decode");
    assert_eq!(decoded, data);
});
