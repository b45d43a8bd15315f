use super::*;
use crate::{json, run};
use gbstep::WordOrder;

const ADD_START: &str = "15|0|0|0|0|0|0|65534|256|0|0|0|0|0:::198|1";

#[test]
fn decode_start_reads_every_field() {
    let start = decode_start("1|2|3|4|5|6|7|65534|256|1|0|1|0|1:::9|8|7").unwrap();
    let expected = CpuInit::builder()
        .a(1)
        .b(2)
        .c(3)
        .d(4)
        .e(5)
        .h(6)
        .l(7)
        .sp(0xFFFE)
        .pc(0x0100)
        .zero(true)
        .half_carry(true)
        .ime(true)
        .build();
    assert_eq!(start.registers, expected);
    assert_eq!(start.seed, vec![9, 8, 7]);
    assert_eq!(encode_start(&start), "1|2|3|4|5|6|7|65534|256|1|0|1|0|1:::9|8|7");
}

#[test]
fn add_step_produces_finish_line() {
    let start = decode_start(ADD_START).unwrap();
    let finish = run(&start, WordOrder::Little).unwrap();

    assert_eq!(finish.registers.a, 0x10);
    assert_eq!(finish.registers.f(), 0x20);
    assert_eq!(finish.clock, 2);
    assert_eq!(
        encode_finish(&finish),
        "16|0|0|0|0|32|0|0|65534|258|0|0|1|0|0|2:::0|256|198:0|257|1"
    );
}

#[test]
fn finish_line_round_trips() {
    let line = "1|2|3|4|5|176|6|7|8|9|1|0|1|1|1|12:::0|256|205:1|257|8192:3|65532|259";
    let finish = decode_finish(line).unwrap();

    assert_eq!(finish.registers.f(), 0xB0);
    assert_eq!(finish.clock, 12);
    assert_eq!(
        finish.trace,
        vec![
            MemoryRecord::read8(256, 205),
            MemoryRecord::read16(257, 8192),
            MemoryRecord::write16(65532, 259),
        ]
    );
    assert_eq!(encode_finish(&finish), line);
}

#[test]
fn empty_trace_encodes_as_empty_section() {
    let finish = decode_finish("0|0|0|0|0|0|0|0|0|0|0|0|0|0|0|0:::").unwrap();
    assert!(finish.trace.is_empty());
    assert!(encode_finish(&finish).ends_with("|0:::"));
}

#[test]
fn flag_mismatch_is_rejected() {
    let err = decode_finish("0|0|0|0|0|16|0|0|0|0|1|0|0|0|0|0:::").unwrap_err();
    assert!(matches!(
        err,
        ProtocolError::FlagMismatch {
            f: 16,
            expected: 0x80
        }
    ));
}

#[test]
fn malformed_lines_are_rejected() {
    assert!(matches!(
        decode_start("0|0|0"),
        Err(ProtocolError::MissingSection { .. })
    ));
    assert!(matches!(
        decode_start("0|0|0:::1"),
        Err(ProtocolError::FieldCount {
            expected: 14,
            found: 3
        })
    ));
    assert!(matches!(
        decode_start("256|0|0|0|0|0|0|0|0|0|0|0|0|0:::1"),
        Err(ProtocolError::InvalidField { field: "A", .. })
    ));
    assert!(matches!(
        decode_start("0|0|0|0|0|0|0|0|0|2|0|0|0|0:::1"),
        Err(ProtocolError::InvalidField { field: "Z", .. })
    ));
    assert!(matches!(
        decode_start("0|0|0|0|0|0|0|0|0|0|0|0|0|0:::"),
        Err(ProtocolError::EmptySeed)
    ));
    assert!(matches!(
        decode_finish("0|0|0|0|0|0|0|0|0|0|0|0|0|0|0|0:::7|0|0"),
        Err(ProtocolError::UnknownRecordKind(7))
    ));
    assert!(matches!(
        decode_finish("0|0|0|0|0|0|0|0|0|0|0|0|0|0|0|0:::0|1"),
        Err(ProtocolError::InvalidRecord(_))
    ));
    // Byte records carry byte values.
    assert!(matches!(
        decode_finish("0|0|0|0|0|0|0|0|0|0|0|0|0|0|0|0:::2|1|300"),
        Err(ProtocolError::InvalidRecord(_))
    ));
}

#[test]
fn illegal_opcode_surfaces_core_error() {
    let start = decode_start("0|0|0|0|0|0|0|0|0|0|0|0|0|0:::211").unwrap();
    let err = run(&start, WordOrder::Little).unwrap_err();
    assert_eq!(
        err,
        gbstep::Error::IllegalOpcode {
            opcode: 0xD3,
            pc: 0
        }
    );
}

#[test]
fn word_order_changes_immediate_composition() {
    // JP a16 with operand bytes 0x12, 0x34.
    let start = decode_start("0|0|0|0|0|0|0|0|0|0|0|0|0|0:::195|18|52").unwrap();

    let little = run(&start, WordOrder::Little).unwrap();
    assert_eq!(little.registers.pc, 0x3412);

    let big = run(&start, WordOrder::Big).unwrap();
    assert_eq!(big.registers.pc, 0x1234);
}

#[test]
fn json_and_text_agree() {
    let start = decode_start(ADD_START).unwrap();
    let encoded = json::encode_start(&start).unwrap();
    assert_eq!(json::decode_start(&encoded).unwrap(), start);

    let finish = run(&start, WordOrder::Little).unwrap();
    let encoded = json::encode_finish(&finish).unwrap();
    let decoded = json::decode_finish(&encoded).unwrap();
    assert_eq!(decoded, finish);
    assert_eq!(encode_finish(&decoded), encode_finish(&finish));
}

#[test]
fn json_start_defaults_missing_registers() {
    let start = json::decode_start(r#"{"registers":{"a":15},"seed":[198,1]}"#).unwrap();
    assert_eq!(start.registers.a, 15);
    assert_eq!(start.registers.sp, 0);

    assert!(matches!(
        json::decode_start(r#"{"registers":{},"seed":[]}"#),
        Err(ProtocolError::EmptySeed)
    ));
}

fn finish_json(flags: u8, trace: &str) -> String {
    format!(
        r#"{{"registers":{{"a":0,"b":0,"c":0,"d":0,"e":0,"h":0,"l":0,"flags":{flags},"sp":0,"pc":0,"ime":false}},"clock":1,"trace":{trace}}}"#
    )
}

#[test]
fn json_finish_validates_like_text() {
    let ok = json::decode_finish(&finish_json(
        0xB0,
        r#"[{"kind":"Read8","address":0,"value":255}]"#,
    ))
    .unwrap();
    assert_eq!(ok.registers.f(), 0xB0);
    assert_eq!(ok.trace, vec![MemoryRecord::read8(0, 0xFF)]);

    assert!(matches!(
        json::decode_finish(&finish_json(0xFF, "[]")),
        Err(ProtocolError::FlagMismatch {
            f: 0xFF,
            expected: 0xF0
        })
    ));
    assert!(matches!(
        json::decode_finish(&finish_json(
            0x00,
            r#"[{"kind":"Write8","address":1,"value":300}]"#
        )),
        Err(ProtocolError::InvalidRecord(_))
    ));

    // Word records may carry any 16-bit value.
    let word = json::decode_finish(&finish_json(
        0x00,
        r#"[{"kind":"Write16","address":1,"value":300}]"#,
    ))
    .unwrap();
    assert_eq!(word.trace, vec![MemoryRecord::write16(1, 300)]);
}
