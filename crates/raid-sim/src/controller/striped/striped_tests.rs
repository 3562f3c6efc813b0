use super::{LostChunk, Striped};
use crate::layout::geometry::Span;
use crate::retention::array::Array;

fn span(start: u64, len: usize) -> Span {
    Span::new(start, len).expect("addressable span")
}

fn paired(members: usize, chunk: usize) -> Striped {
    let lanes = (0..members / 2).map(|p| vec![2 * p, 2 * p + 1]).collect();
    Striped::new(Array::init_array(members, chunk), lanes)
}

#[test]
fn write_distributes_chunks_round_robin_over_lanes() {
    let mut s = Striped::new(Array::init_array(3, 2), vec![vec![0], vec![1], vec![2]]);
    s.write(span(0, 8), b"AABBCCDD").expect("write");

    assert_eq!(s.array().disk(0).chunk(0), Some(&b"AA"[..]));
    assert_eq!(s.array().disk(1).chunk(0), Some(&b"BB"[..]));
    assert_eq!(s.array().disk(2).chunk(0), Some(&b"CC"[..]));
    assert_eq!(s.array().disk(0).chunk(1), Some(&b"DD"[..]));
    assert_eq!(s.stored_bytes(), 8);
}

#[test]
fn mirrors_in_a_lane_hold_identical_copies() {
    let mut s = paired(4, 3);
    s.write(span(1, 7), b"abcdefg").expect("write");

    for row in 0..2 {
        assert_eq!(s.array().disk(0).chunk(row), s.array().disk(1).chunk(row));
        assert_eq!(s.array().disk(2).chunk(row), s.array().disk(3).chunk(row));
    }
    assert_eq!(s.read(span(0, 9)), Ok(b"\0abcdefg\0".to_vec()));
}

#[test]
fn partial_write_reseeds_a_lost_mirror_from_its_partner() {
    let mut s = paired(2, 4);
    s.write(span(0, 4), b"wxyz").expect("write");
    s.array_mut().fail_disk(0).expect("valid index");

    s.write(span(1, 1), b"Q").expect("write");

    assert_eq!(s.array().disk(0).chunk(0), Some(&b"wQyz"[..]));
    assert_eq!(s.array().disk(1).chunk(0), Some(&b"wQyz"[..]));
}

#[test]
fn read_fails_only_when_every_copy_is_gone() {
    let mut s = paired(4, 2);
    s.write(span(0, 8), b"11223344").expect("write");

    s.array_mut().fail_disk(0).expect("valid index");
    assert_eq!(s.read(span(0, 8)), Ok(b"11223344".to_vec()));

    s.array_mut().fail_disk(1).expect("valid index");
    assert_eq!(s.read(span(0, 8)), Err(LostChunk { lane: 0, row: 0 }));
    assert_eq!(s.read(span(2, 2)), Ok(b"22".to_vec()));
}

#[test]
fn stored_bytes_survives_member_loss() {
    let mut s = Striped::new(Array::init_array(2, 4), vec![vec![0], vec![1]]);
    s.write(span(0, 6), b"abcdef").expect("write");
    assert_eq!(s.stored_bytes(), 8);

    s.array_mut().fail_disk(1).expect("valid index");
    assert_eq!(s.stored_bytes(), 8);
}

#[test]
fn rebuild_member_restores_only_lost_rows() {
    let mut s = paired(2, 2);
    s.write(span(0, 6), b"aabbcc").expect("write");
    s.array_mut().fail_disk(1).expect("valid index");

    assert_eq!(s.rebuild_member(1), Ok(3));
    assert_eq!(s.array().disk(1).chunks(), s.array().disk(0).chunks());
    assert_eq!(s.rebuild_member(1), Ok(0));
}

#[test]
fn rebuild_member_without_a_mirror_reports_the_lost_chunk() {
    let mut s = Striped::new(Array::init_array(2, 2), vec![vec![0], vec![1]]);
    s.write(span(0, 4), b"aabb").expect("write");
    s.array_mut().fail_disk(1).expect("valid index");

    assert_eq!(s.rebuild_member(1), Err(LostChunk { lane: 1, row: 0 }));
}

#[test]
fn partial_write_into_a_lost_chunk_fails_without_storing() {
    let mut s = Striped::new(Array::init_array(2, 4), vec![vec![0], vec![1]]);
    s.write(span(0, 16), b"ABCDEFGHIJKLMNOP").expect("write");
    s.array_mut().fail_disk(0).expect("valid index");

    assert_eq!(
        s.write(span(0, 1), b"X"),
        Err(LostChunk { lane: 0, row: 0 })
    );
    assert!(s.array().disk(0).is_empty());
    assert_eq!(s.read(span(0, 4)), Err(LostChunk { lane: 0, row: 0 }));

    // The healthy chunk in front of the lost one stays untouched.
    assert_eq!(
        s.write(span(6, 4), b"wxyz"),
        Err(LostChunk { lane: 0, row: 1 })
    );
    assert_eq!(s.array().disk(1).chunk(0), Some(&b"EFGH"[..]));
    assert!(s.array().disk(0).is_empty());
}

#[test]
fn full_chunk_write_replaces_a_lost_chunk() {
    let mut s = paired(2, 4);
    s.write(span(0, 4), b"ABCD").expect("write");
    s.array_mut().fail_disk(0).expect("valid index");
    s.array_mut().fail_disk(1).expect("valid index");

    s.write(span(0, 4), b"WXYZ").expect("full chunk");
    assert_eq!(s.read(span(0, 4)), Ok(b"WXYZ".to_vec()));
    assert_eq!(s.array().disk(0).chunk(0), s.array().disk(1).chunk(0));
}
