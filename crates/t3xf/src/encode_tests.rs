use crate::{Argument, BinaryString, EncodeErrorKind, Encoder, Opcode, Reference};

fn encode_all(instrs: Vec<(Opcode, Argument)>) -> (Vec<u8>, Vec<String>) {
    let mut e = Encoder::new();
    for (op, arg) in instrs {
        e.encode(op, arg).unwrap();
    }
    let (bytes, errors) = e.assemble();
    (bytes, errors.iter().map(ToString::to_string).collect())
}

#[test]
fn unresolved_reference_keeps_placeholder() {
    let (bytes, errors) = encode_all(vec![(Opcode::REF, Reference(1).into())]);

    assert_eq!(bytes, [0xfc, 0xff, 0xff, 0xff]);
    insta::assert_snapshot!(errors.join("\n"), @"[0x0000] ref: unknown reference: instruction 1 was never emitted");
}

#[test]
fn reference_classes() {
    let (bytes, errors) = encode_all(vec![
        (Opcode::REF, Reference(0).into()),
        (Opcode::FROZEN_REF, Reference(0).into()),
        (Opcode::GOTO, Reference(0).into()),
        (Opcode::SCAN, Reference(1).into()),
    ]);

    assert!(errors.is_empty());
    assert_eq!(
        bytes,
        [
            0x00, 0x00, 0x00, 0x00, //
            0x00, 0x00, 0x00, 0x80, //
            0x01, 0x00, 0x00, 0x00, //
            0x05, 0x00, 0x00, 0x80, //
        ]
    );
}

#[test]
fn forward_reference_is_patched_when_target_is_emitted() {
    let mut e = Encoder::new();
    e.encode(Opcode::GOTO, Reference(2).into()).unwrap();
    e.encode(Opcode::NATLONG, Argument::Int(7)).unwrap();
    e.encode(Opcode::SKIP, Argument::None).unwrap();

    let (bytes, errors) = e.assemble();
    assert!(errors.is_empty());
    // GOTO points at byte 12: NATLONG occupies 8 bytes after the GOTO word.
    assert_eq!(&bytes[..4], &[0x0d, 0x00, 0x00, 0x00]);
}

#[test]
fn fixed_size_instructions() {
    let (bytes, _) = encode_all(vec![(Opcode::SCAN, Argument::None)]);
    assert_eq!(bytes, [0xd3, 0x00, 0x00, 0x00]);

    let (bytes, _) = encode_all(vec![(Opcode::LINE, Argument::Int(1))]);
    assert_eq!(bytes, [0x06, 0x00, 0x00, 0x00]);

    let (bytes, _) = encode_all(vec![(Opcode::NATLONG, Argument::Int(42))]);
    assert_eq!(bytes, [0x43, 0x01, 0x00, 0x00, 0x2a, 0x00, 0x00, 0x00]);

    let (bytes, _) = encode_all(vec![(Opcode::IEEE754DP, Argument::Float(1.0))]);
    assert_eq!(bytes.len(), 12);
    assert_eq!(&bytes[4..], &1.0f64.to_bits().to_le_bytes());
}

#[test]
fn string_padding() {
    for len in 0..10 {
        let s = "x".repeat(len);
        let (bytes, _) = encode_all(vec![(Opcode::NAME, Argument::Str(s))]);
        assert_eq!(bytes.len(), 8 + len.div_ceil(4) * 4, "length {len}");
        assert_eq!(bytes[4] as usize, len);
        assert!(bytes[8 + len..].iter().all(|&b| b == 0));
    }
}

#[test]
fn binary_string_lengths_count_elements() {
    let bits = BinaryString::from_bits("101").unwrap();
    let (bytes, _) = encode_all(vec![(Opcode::BITS, Argument::Binary(bits))]);
    assert_eq!(bytes, [0x13, 0x01, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0xa0, 0, 0, 0]);

    let nibbles = BinaryString::from_hex("abc").unwrap();
    let (bytes, _) = encode_all(vec![(Opcode::NIBBLES, Argument::Binary(nibbles))]);
    assert_eq!(&bytes[4..12], &[0x03, 0x00, 0x00, 0x00, 0xab, 0xc0, 0, 0]);

    let octets = BinaryString::from_octets("0102030405").unwrap();
    let (bytes, _) = encode_all(vec![(Opcode::OCTETS, Argument::Binary(octets))]);
    assert_eq!(bytes.len(), 16);
    assert_eq!(bytes[4], 5);
}

#[test]
fn invalid_arguments() {
    let mut e = Encoder::new();
    e.encode(Opcode::SKIP, Argument::None).unwrap();

    let err = e
        .encode(Opcode::NATLONG, Argument::Int(1 << 31))
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"[0x0004] natlong: invalid argument: argument too large: 2147483648");

    let err = e.encode(Opcode::VAR, Argument::Int(0x10000)).unwrap_err();
    assert!(matches!(err.kind, EncodeErrorKind::InvalidArgument(_)));

    let err = e.encode(Opcode::NAME, Argument::Int(1)).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"[0x0004] name: invalid argument: string argument expected: Int(1)");

    let short = BinaryString::new(9, vec![0xff]);
    assert!(e.encode(Opcode::BITS, Argument::Binary(short)).is_err());

    // Failed instructions leave no trace.
    assert_eq!(e.len(), 1);
    assert_eq!(e.byte_len(), 4);
}

#[test]
fn placeholder_bound_to_earlier_instruction() {
    let mut e = Encoder::new();
    let var = e.encode(Opcode::VAR, Argument::None).unwrap();
    let site = e.encode_placeholder(Opcode::REF).unwrap();
    e.bind(site, Reference(var as u32)).unwrap();

    let (bytes, errors) = e.assemble();
    assert!(errors.is_empty());
    assert_eq!(&bytes[4..], &[0, 0, 0, 0]);
}

#[test]
fn placeholder_bound_to_later_instruction() {
    let mut e = Encoder::new();
    let site = e.encode_placeholder(Opcode::REF).unwrap();
    e.bind(site, Reference(2)).unwrap();
    e.encode(Opcode::SKIP, Argument::None).unwrap();
    e.encode(Opcode::FUNCTION, Argument::None).unwrap();

    let (bytes, errors) = e.assemble();
    assert!(errors.is_empty());
    assert_eq!(&bytes[..4], &[8, 0, 0, 0]);
}

#[test]
fn unbound_placeholder_is_reported() {
    let mut e = Encoder::new();
    e.encode(Opcode::SKIP, Argument::None).unwrap();
    e.encode_placeholder(Opcode::REF).unwrap();

    let (_, errors) = e.assemble();
    insta::assert_snapshot!(errors[0].to_string(), @"[0x0004] ref: unknown reference: placeholder was never bound");
    assert!(e.bind(0, Reference(0)).is_err());
}

#[test]
fn unknown_reference_leaves_resolved_bytes_untouched() {
    let mut e = Encoder::new();
    e.encode(Opcode::REF, Reference(1).into()).unwrap();
    e.encode(Opcode::REF, Reference(0).into()).unwrap();
    e.encode(Opcode::REF, Reference(9).into()).unwrap();

    let (bytes, errors) = e.assemble();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, EncodeErrorKind::UnknownReference(9));
    assert_eq!(
        bytes,
        [4, 0, 0, 0, 0, 0, 0, 0, 0xfc, 0xff, 0xff, 0xff]
    );
}
