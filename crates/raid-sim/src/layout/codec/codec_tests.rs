use super::*;

fn as_chunks(shards: &[Vec<u8>]) -> Vec<Chunk> {
    shards.iter().cloned().map(Chunk::Present).collect()
}

#[test]
fn xor_encode_splits_pads_and_appends_parity() {
    let codec = XorCodec::new(2).expect("codec");
    let shards = codec.encode(b"ABC", 2).expect("encode");

    assert_eq!(shards.len(), 3);
    assert_eq!(shards[0], b"AB".to_vec());
    assert_eq!(shards[1], vec![b'C', 0]);
    assert_eq!(shards[2], vec![b'A' ^ b'C', b'B']);
}

#[test]
fn xor_parity_of_single_byte_shards() {
    let codec = XorCodec::new(2).expect("codec");
    let shards = codec.encode(b"AB", 1).expect("encode");
    assert_eq!(shards, vec![vec![b'A'], vec![b'B'], vec![b'A' ^ b'B']]);
}

#[test]
fn xor_reconstructs_any_single_shard() {
    let codec = XorCodec::new(3).expect("codec");
    let shards = codec.encode(b"HELLO_RAID5!", 4).expect("encode");

    for lost in 0..codec.total_shards() {
        let mut set = as_chunks(&shards);
        set[lost] = Chunk::Absent;
        codec.reconstruct(&mut set).expect("reconstruct");
        assert_eq!(set, as_chunks(&shards), "lost shard {lost}");
    }
}

#[test]
fn reed_solomon_reconstructs_any_two_shards() {
    let codec = ReedSolomonCodec::new(3, 2).expect("codec");
    let shards = codec.encode(b"dual parity keeps data alive", 10).expect("encode");
    assert_eq!(&shards[0], b"dual parit");

    for a in 0..codec.total_shards() {
        for b in (a + 1)..codec.total_shards() {
            let mut set = as_chunks(&shards);
            set[a] = Chunk::Absent;
            set[b] = Chunk::Absent;
            codec.reconstruct(&mut set).expect("reconstruct");
            assert_eq!(set, as_chunks(&shards), "lost shards {a} and {b}");
        }
    }
}

#[test]
fn reconstruct_is_a_noop_on_complete_sets() {
    let codec = ReedSolomonCodec::new(2, 2).expect("codec");
    let shards = codec.encode(b"ABCD", 2).expect("encode");
    let mut set = as_chunks(&shards);

    codec.reconstruct(&mut set).expect("first pass");
    codec.reconstruct(&mut set).expect("second pass");
    assert_eq!(set, as_chunks(&shards));
}

#[test]
fn reconstruct_fails_beyond_parity_budget() {
    let codec = XorCodec::new(2).expect("codec");
    let mut set = as_chunks(&codec.encode(b"AB", 1).expect("encode"));
    set[0] = Chunk::Absent;
    set[2] = Chunk::Absent;

    let err = codec.reconstruct(&mut set).expect_err("two losses on single parity");
    assert_eq!(
        err,
        RaidError::TooManyMissingShards {
            missing: 2,
            parity: 1
        }
    );

    let rs = ReedSolomonCodec::new(2, 2).expect("codec");
    let mut set = vec![Chunk::Absent, Chunk::Absent, Chunk::Absent, Chunk::zeroed(2)];
    assert!(matches!(
        rs.reconstruct(&mut set),
        Err(RaidError::TooManyMissingShards { missing: 3, parity: 2 })
    ));
}

#[test]
fn reconstruct_rejects_malformed_sets() {
    let codec = XorCodec::new(2).expect("codec");

    let mut short = vec![Chunk::zeroed(1), Chunk::zeroed(1)];
    assert!(matches!(
        codec.reconstruct(&mut short),
        Err(RaidError::ShardMismatch(_))
    ));

    let mut ragged = vec![Chunk::zeroed(1), Chunk::zeroed(2), Chunk::Absent];
    assert!(matches!(
        codec.reconstruct(&mut ragged),
        Err(RaidError::ShardMismatch(_))
    ));
}

#[test]
fn encode_rejects_oversized_buffers_and_zero_shards() {
    let codec = XorCodec::new(2).expect("codec");
    assert!(matches!(
        codec.encode(b"ABCDE", 2),
        Err(RaidError::ShardMismatch(_))
    ));
    assert!(matches!(
        codec.encode(b"", 0),
        Err(RaidError::ShardMismatch(_))
    ));
}

#[test]
fn codec_construction_validates_shape() {
    assert!(XorCodec::new(0).is_err());
    assert!(matches!(
        ReedSolomonCodec::new(0, 2),
        Err(RaidError::Codec(_))
    ));
    assert!(matches!(
        ReedSolomonCodec::new(250, 10),
        Err(RaidError::Codec(_))
    ));

    let rs = ReedSolomonCodec::new(4, 2).expect("codec");
    assert_eq!(rs.data_shards(), 4);
    assert_eq!(rs.parity_shards(), 2);
    assert_eq!(rs.total_shards(), 6);
}

#[test]
fn compute_parity_rejects_wrong_shard_counts() {
    let xor = XorCodec::new(2).expect("codec");
    let rs = ReedSolomonCodec::new(2, 1).expect("codec");

    for codec in [&xor as &dyn ShardCodec, &rs] {
        let mut short = vec![vec![1u8, 2], vec![3, 4]];
        assert!(codec.compute_parity(&mut short).is_err(), "{codec:?} short set");
        let mut long = vec![vec![0u8; 2]; 4];
        assert!(codec.compute_parity(&mut long).is_err(), "{codec:?} long set");
    }

    let mut none: Vec<Vec<u8>> = Vec::new();
    assert!(matches!(
        xor.compute_parity(&mut none),
        Err(RaidError::ShardMismatch(_))
    ));
}
