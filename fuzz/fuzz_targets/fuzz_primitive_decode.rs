#![no_main]
use bacwire_core::encoding::primitives::{
    bacnet_bitstring_application_decode, bacnet_boolean_context_decode,
    bacnet_character_string_application_decode, bacnet_date_application_decode,
    bacnet_enumerated_application_decode, bacnet_object_id_context_decode,
    bacnet_octet_string_application_decode, bacnet_signed_application_decode,
    bacnet_unsigned_application_decode, bacnet_unsigned_context_decode,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&max, data)) = data.split_first() else {
        return;
    };
    let max_len = usize::from(max);
    let bound = max_len.min(data.len());

    let consumed = [
        bacnet_unsigned_application_decode(data, max_len).map(|(_, n)| n),
        bacnet_signed_application_decode(data, max_len).map(|(_, n)| n),
        bacnet_enumerated_application_decode(data, max_len).map(|(_, n)| n),
        bacnet_date_application_decode(data, max_len).map(|(_, n)| n),
        bacnet_octet_string_application_decode::<64>(data, max_len).map(|(_, n)| n),
        bacnet_character_string_application_decode::<64>(data, max_len).map(|(_, n)| n),
        bacnet_bitstring_application_decode::<16>(data, max_len).map(|(_, n)| n),
        bacnet_unsigned_context_decode(data, max_len, 0).map(|(_, n)| n),
        bacnet_boolean_context_decode(data, max_len, 1).map(|(_, n)| n),
        bacnet_object_id_context_decode(data, max_len, 2).map(|(_, n)| n),
    ];
    for len in consumed.into_iter().flatten() {
        assert!(len > 0 && len <= bound);
    }
});
