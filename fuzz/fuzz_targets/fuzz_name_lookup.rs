#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Lookup must never panic, only return Ok/Err — and an Ok id must
    // round-trip through its stored name.
    if let Ok(id) = x86db::find_by_name(data) {
        let name = x86db::name_of(id);
        assert!(!name.is_empty());
        assert_eq!(x86db::find_by_name(name), Ok(id));
    }
});
