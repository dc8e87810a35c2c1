//! Fuzz target for option-name parsing.
//!
//! Strict parsing must agree with the lenient fallback whenever it succeeds.

#![no_main]

use decrypt_text::{AnimateOn, RevealDirection};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let lenient = RevealDirection::from_name(data);
    if let Ok(strict) = data.parse::<RevealDirection>() {
        assert_eq!(strict, lenient);
        assert_eq!(strict.as_str().parse::<RevealDirection>().ok(), Some(strict));
    }
    let _ = data.parse::<AnimateOn>();
});
