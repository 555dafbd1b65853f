use qecc_code::arena::{request_bytes, BitSlice, RandomArena};
use qecc_core::RngHandle;

#[test]
fn sequential_consumes_partition_the_buffer() {
    let mut arena = RandomArena::from_bytes((0..10).collect());
    assert_eq!(arena.total(), 10);

    assert_eq!(arena.consume(3).unwrap(), &[0, 1, 2]);
    assert_eq!(arena.consume(4).unwrap(), &[3, 4, 5, 6]);
    assert_eq!(arena.consumed(), 7);
    assert_eq!(arena.remaining(), 3);

    assert_eq!(arena.consume(3).unwrap(), &[7, 8, 9]);
    assert_eq!(arena.remaining(), 0);
    assert!(arena.consume(0).unwrap().is_empty());
}

#[test]
fn exhaustion_is_reported_without_moving_cursor() {
    let mut arena = RandomArena::from_bytes(vec![0xAA; 6]);
    arena.consume(4).unwrap();

    let err = arena.consume(3).expect_err("only two bytes remain");
    assert_eq!(err.code(), "arena-exhausted");
    assert_eq!(err.info().context.get("requested").map(String::as_str), Some("3"));
    assert_eq!(err.info().context.get("consumed").map(String::as_str), Some("4"));
    assert_eq!(arena.consumed(), 4);

    assert_eq!(arena.consume(2).unwrap(), &[0xAA, 0xAA]);
    assert!(arena.consume(usize::MAX).is_err());
}

#[test]
fn arena_fill_follows_the_seed() {
    let mut a = RandomArena::new(64, &mut RngHandle::from_seed(11));
    let mut b = RandomArena::new(64, &mut RngHandle::from_seed(11));
    let mut c = RandomArena::new(64, &mut RngHandle::from_seed(12));
    let bytes_a = a.consume(64).unwrap().to_vec();
    assert_eq!(bytes_a, b.consume(64).unwrap());
    assert_ne!(bytes_a, c.consume(64).unwrap());
}

#[test]
fn request_includes_one_slack_byte() {
    assert_eq!(request_bytes(0), 1);
    assert_eq!(request_bytes(1), 2);
    assert_eq!(request_bytes(8), 2);
    assert_eq!(request_bytes(9), 3);
}

#[test]
fn bit_slice_reads_lsb_first() {
    let bytes = [0b0000_0101u8, 0b1000_0000];
    let bits = BitSlice::new(&bytes);
    assert_eq!(bits.len_bits(), 16);
    assert!(bits.bit(0).unwrap());
    assert!(!bits.bit(1).unwrap());
    assert!(bits.bit(2).unwrap());
    assert!(bits.bit(15).unwrap());
    assert_eq!(bits.bit(16).unwrap_err().code(), "read-past-end");

    assert_eq!(bits.read_bits(0, 3).unwrap(), 0b101);
    assert_eq!(bits.read_bits(13, 3).unwrap(), 0b100);
    assert_eq!(bits.read_bits(14, 3).unwrap_err().code(), "read-past-end");
    assert_eq!(bits.read_bits(0, 65).unwrap_err().code(), "read-too-wide");
    assert_eq!(bits.read_bits(usize::MAX, 2).unwrap_err().code(), "read-past-end");
    assert_eq!(bits.read_bits(usize::MAX - 1, 64).unwrap_err().code(), "read-past-end");
}

#[test]
fn consume_bits_sizes_the_slice() {
    let mut arena = RandomArena::from_bytes(vec![0xFF; 8]);
    let slice = arena.consume_bits(9).unwrap();
    assert_eq!(slice.len_bits(), 24);
    assert_eq!(arena.consumed(), 3);
}
