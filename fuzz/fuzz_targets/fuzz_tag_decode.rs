#![no_main]
use bacwire_core::encoding::tag::{
    bacnet_tag_number_and_value_decode, decode_tag_number_and_value, Tag,
};
use bacwire_core::encoding::{reader::Reader, writer::Writer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&max, data)) = data.split_first() else {
        return;
    };
    let max_len = usize::from(max);

    if let Ok((header, len)) = bacnet_tag_number_and_value_decode(data, max_len) {
        assert!(len <= max_len.min(data.len()));
        assert_eq!(decode_tag_number_and_value(data), Ok((header, len)));
    }

    let mut r = Reader::new(data);
    if let Ok(tag) = Tag::decode(&mut r) {
        let mut buf = [0u8; 8];
        let mut w = Writer::new(&mut buf);
        let written = tag.encode(&mut w).expect("tag header fits 8 bytes");
        assert!(written <= r.position());

        let mut again = Reader::new(&buf[..written]);
        assert_eq!(Tag::decode(&mut again), Ok(tag));
        assert!(again.is_empty());
    }
});
