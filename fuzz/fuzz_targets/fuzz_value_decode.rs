#![no_main]
use bacwire_core::encoding::reader::Reader;
use bacwire_core::encoding::value::{decode_application_value, encode_application_value};
use bacwire_core::encoding::writer::Writer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut r = Reader::new(data);
    while let Ok(value) = decode_application_value(&mut r) {
        let len = encode_application_value(&mut Writer::sizing(), &value)
            .expect("decoded values re-encode");
        let mut out = vec![0u8; len];
        let mut w = Writer::new(&mut out);
        assert_eq!(encode_application_value(&mut w, &value), Ok(len));

        let mut again = Reader::new(&out);
        let decoded = decode_application_value(&mut again).expect("re-encoded value decodes");
        assert_eq!(decoded.tag(), value.tag());
        assert!(again.is_empty());
    }
});
