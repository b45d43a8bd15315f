use super::*;
use crate::Error;

#[test]
fn fresh_addresses_consume_seed_in_order() {
    let mut mem = SeededMemory::new(vec![0x11, 0x22, 0x33]).unwrap();

    assert_eq!(mem.read8(0x8000).unwrap(), 0x11);
    assert_eq!(mem.read8(0x0042).unwrap(), 0x22);
    assert_eq!(mem.cursor(), 2);
}

#[test]
fn materialized_addresses_are_memoized() {
    let mut mem = SeededMemory::new(vec![0x11, 0x22, 0x33]).unwrap();

    assert_eq!(mem.read8(0x1000).unwrap(), 0x11);
    assert_eq!(mem.read8(0x1000).unwrap(), 0x11);
    assert_eq!(mem.cursor(), 1);
    assert_eq!(mem.read8(0x1001).unwrap(), 0x22);
}

#[test]
fn cursor_wraps_at_end_of_seed() {
    let mut mem = SeededMemory::new(vec![0xAA, 0xBB]).unwrap();

    let values: Vec<u8> = (0..5).map(|addr| mem.read8(addr).unwrap()).collect();
    assert_eq!(values, [0xAA, 0xBB, 0xAA, 0xBB, 0xAA]);
    assert_eq!(mem.cursor(), 1);
}

#[test]
fn write_to_fresh_address_consumes_seed_and_overwrites() {
    let mut mem = SeededMemory::new(vec![0x11, 0x22]).unwrap();

    mem.write8(0xC000, 0x99).unwrap();
    assert_eq!(mem.cursor(), 1);
    assert_eq!(mem.peek(0xC000), Some(0x99));
    // The next fresh address gets the following seed byte.
    assert_eq!(mem.read8(0xC001).unwrap(), 0x22);
    // The materializing read is not part of the trace.
    assert_eq!(
        mem.trace(),
        &[
            MemoryRecord::write8(0xC000, 0x99),
            MemoryRecord::read8(0xC001, 0x22),
        ]
    );
}

#[test]
fn write_to_materialized_address_overwrites() {
    let mut mem = SeededMemory::new(vec![0x11]).unwrap();

    assert_eq!(mem.read8(0xC000).unwrap(), 0x11);
    mem.write8(0xC000, 0x5A).unwrap();
    assert_eq!(mem.read8(0xC000).unwrap(), 0x5A);
    assert_eq!(mem.cursor(), 0);
}

#[test]
fn preload_does_not_touch_cursor() {
    let mut mem = SeededMemory::new(vec![0x11, 0x22]).unwrap();
    mem.preload(0x0100, 0xCB);

    assert_eq!(mem.read8(0x0100).unwrap(), 0xCB);
    assert_eq!(mem.read8(0x0101).unwrap(), 0x11);
}

#[test]
fn word_access_is_a_single_record() {
    let mut mem = SeededMemory::new(vec![0x34, 0x12]).unwrap();

    assert_eq!(mem.read16(0x2000).unwrap(), 0x1234);
    assert_eq!(mem.trace(), &[MemoryRecord::read16(0x2000, 0x1234)]);

    mem.begin_instruction();
    mem.write16(0x3000, 0xBEEF).unwrap();
    assert_eq!(mem.trace(), &[MemoryRecord::write16(0x3000, 0xBEEF)]);
    assert_eq!(mem.peek(0x3000), Some(0xEF));
    assert_eq!(mem.peek(0x3001), Some(0xBE));
}

#[test]
fn big_word_order_swaps_bytes() {
    let mut mem = SeededMemory::with_word_order(vec![0x12, 0x34], WordOrder::Big).unwrap();
    assert_eq!(mem.read16(0x2000).unwrap(), 0x1234);

    mem.write16(0x3000, 0xBEEF).unwrap();
    assert_eq!(mem.peek(0x3000), Some(0xBE));
    assert_eq!(mem.peek(0x3001), Some(0xEF));

    let mut fixed = FixedMemory::with_word_order(vec![0x12, 0x34], WordOrder::Big).unwrap();
    assert_eq!(fixed.read16(0).unwrap(), 0x1234);
}

#[test]
fn word_access_wraps_address_space() {
    let mut mem = SeededMemory::new(vec![0x00]).unwrap();
    mem.preload(0xFFFF, 0xCD);
    mem.preload(0x0000, 0xAB);
    assert_eq!(mem.read16(0xFFFF).unwrap(), 0xABCD);
}

#[test]
fn begin_instruction_clears_trace() {
    let mut mem = SeededMemory::new(vec![0x00]).unwrap();
    mem.read8(0).unwrap();
    mem.write8(1, 2).unwrap();
    assert_eq!(mem.access_trace().len(), 2);

    mem.begin_instruction();
    assert!(mem.access_trace().is_empty());
    assert_eq!(mem.peek(1), Some(2));
}

#[test]
fn fixed_memory_rejects_out_of_range() {
    let mut mem = FixedMemory::new(vec![0x01, 0x02, 0x03, 0x04]).unwrap();
    assert_eq!(mem.as_bytes().len(), 4);
    assert_eq!(mem.read8(3).unwrap(), 0x04);

    let overrun = Error::OutOfRange {
        address: 4,
        len: 4,
    };
    assert_eq!(mem.read8(4).unwrap_err(), overrun);
    assert_eq!(mem.write8(4, 0xFF).unwrap_err(), overrun);
    // The high byte of the word lies past the end.
    assert_eq!(mem.read16(3).unwrap_err(), overrun);
    assert_eq!(mem.write16(3, 0xFFFF).unwrap_err(), overrun);

    // Failed accesses leave nothing in the trace or in memory.
    assert_eq!(mem.trace(), &[MemoryRecord::read8(3, 0x04)]);
    assert_eq!(mem.as_bytes(), &[0x01, 0x02, 0x03, 0x04]);
}

#[test]
fn straddling_word_write_changes_nothing() {
    let mut mem = FixedMemory::new(vec![0x00; 2]).unwrap();

    assert_eq!(
        mem.write16(1, 0xABCD).unwrap_err(),
        Error::OutOfRange { address: 2, len: 2 }
    );
    assert_eq!(mem.as_bytes(), &[0x00, 0x00]);
    assert!(mem.trace().is_empty());

    // The last in-range word still works.
    mem.write16(0, 0xABCD).unwrap();
    assert_eq!(mem.as_bytes(), &[0xCD, 0xAB]);
    assert_eq!(mem.trace(), &[MemoryRecord::write16(0, 0xABCD)]);
}

#[test]
fn oversized_image_is_rejected() {
    assert_eq!(
        FixedMemory::new(vec![0x00; 0x10001]).unwrap_err(),
        Error::ImageTooLarge { len: 0x10001 }
    );

    let mut full = FixedMemory::new(vec![0x00; 0x10000]).unwrap();
    full.write8(0xFFFF, 0x42).unwrap();
    assert_eq!(full.read8(0xFFFF).unwrap(), 0x42);
}

#[test]
fn fixed_memory_reads_and_writes() {
    let mut mem = FixedMemory::new(vec![0x00; 0x10]).unwrap();
    mem.write16(0x04, 0x1234).unwrap();
    assert_eq!(&mem.as_bytes()[4..6], &[0x34, 0x12]);
    assert_eq!(mem.read8(0x05).unwrap(), 0x12);
}

#[test]
fn empty_inputs_are_rejected() {
    assert_eq!(SeededMemory::new(Vec::new()).unwrap_err(), Error::EmptySeed);
    assert_eq!(FixedMemory::new(Vec::new()).unwrap_err(), Error::EmptyImage);
}

#[test]
fn seeded_snapshot_preserves_cursor_and_cells() {
    let mut mem = SeededMemory::new(vec![0x11, 0x22, 0x33]).unwrap();
    mem.read8(0x1000).unwrap();
    mem.write8(0x2000, 0x99).unwrap();

    let json = serde_json::to_string(&mem).unwrap();
    let mut restored: SeededMemory = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.cursor(), mem.cursor());
    assert_eq!(restored.materialized(), mem.materialized());
    assert!(restored.trace().is_empty());
    assert_eq!(restored.read8(0x3000).unwrap(), mem.read8(0x3000).unwrap());
}

#[test]
fn snapshot_with_empty_seed_is_rejected() {
    let json = r#"{"seed":[],"cursor":0,"cells":{},"word_order":"Little"}"#;
    assert!(serde_json::from_str::<SeededMemory>(json).is_err());

    let json = r#"{"bytes":[],"word_order":"Little"}"#;
    assert!(serde_json::from_str::<FixedMemory>(json).is_err());
}

#[test]
fn snapshot_with_cursor_past_seed_is_rejected() {
    let json = r#"{"seed":[1,2,3],"cursor":3,"cells":{},"word_order":"Little"}"#;
    let err = serde_json::from_str::<SeededMemory>(json).unwrap_err();
    assert!(err.to_string().contains("seed cursor 3"), "{err}");

    let json = r#"{"seed":[1,2,3],"cursor":2,"cells":{},"word_order":"Little"}"#;
    let mut mem: SeededMemory = serde_json::from_str(json).unwrap();
    assert_eq!(mem.read8(0x4000).unwrap(), 3);
    assert_eq!(mem.cursor(), 0);
}
