/// Simple acknowledgement and the max-segments/max-APDU octet of a confirmed request.
pub mod confirmed;
/// APDU type discriminant.
pub mod pdu;

pub use confirmed::{
    decode_max_apdu, decode_max_segs, encode_max_segs_max_apdu, encode_simple_ack, SimpleAck,
};
pub use pdu::ApduType;
