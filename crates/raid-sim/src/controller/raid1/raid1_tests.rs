use crate::controller::RaidLevel;
use crate::controller::raid1::Raid1Controller;
use crate::controller::traits::controller::RaidController;
use crate::error::RaidError;

#[test]
fn new_requires_two_mirrors() {
    assert_eq!(
        Raid1Controller::new(1, 4).unwrap_err(),
        RaidError::InvalidMemberCount {
            level: RaidLevel::Raid1,
            members: 1,
            requirement: "at least 2 disks",
        }
    );
    assert!(Raid1Controller::new(2, 4).is_ok());
}

#[test]
fn every_member_holds_every_chunk() {
    let mut raid = Raid1Controller::new(3, 2).expect("valid shape");
    raid.write(b"mirror", 0).expect("write");

    let first = raid.disks()[0].chunks().to_vec();
    assert_eq!(first.len(), 3);
    for disk in raid.disks() {
        assert_eq!(disk.chunks(), &first[..]);
    }
    assert_eq!(raid.stored_bytes(), 6);
}

#[test]
fn read_survives_all_but_one_member_lost() {
    let mut raid = Raid1Controller::new(3, 4).expect("valid shape");
    raid.write(b"keep me safe", 0).expect("write");
    raid.clear_disk(0).expect("clear");
    raid.clear_disk(2).expect("clear");

    assert_eq!(raid.read(0, 12).expect("read"), b"keep me safe".to_vec());
}

#[test]
fn read_fails_when_all_members_lost() {
    let mut raid = Raid1Controller::new(2, 4).expect("valid shape");
    raid.write(b"gone", 0).expect("write");
    raid.clear_disk(0).expect("clear");
    raid.clear_disk(1).expect("clear");

    assert_eq!(
        raid.read(0, 4).unwrap_err(),
        RaidError::NoHealthyMirror { chunk: 0 }
    );
}

#[test]
fn clear_disk_leaves_other_mirrors_alone() {
    let mut raid = Raid1Controller::new(2, 2).expect("valid shape");
    raid.write(b"abcd", 0).expect("write");
    raid.clear_disk(1).expect("clear");

    assert!(raid.disks()[1].is_empty());
    assert_eq!(raid.disks()[0].len(), 2);
    assert_eq!(
        raid.clear_disk(5).unwrap_err(),
        RaidError::IndexOutOfRange { index: 5, disks: 2 }
    );
}

#[test]
fn partial_write_after_loss_keeps_mirrors_identical() {
    let mut raid = Raid1Controller::new(2, 4).expect("valid shape");
    raid.write(b"abcdefgh", 0).expect("write");
    raid.clear_disk(0).expect("clear");
    raid.write(b"Z", 5).expect("write");

    let disks = raid.disks();
    assert_eq!(disks[0].chunk(1), disks[1].chunk(1));
    assert_eq!(disks[0].chunk(1), Some(&b"eZgh"[..]));
    assert!(disks[0].is_lost(0, 4));

    raid.clear_disk(1).expect("clear");
    assert_eq!(
        raid.read(0, 8).unwrap_err(),
        RaidError::NoHealthyMirror { chunk: 0 }
    );
    assert_eq!(raid.read(4, 4).expect("rewritten chunk"), b"eZgh".to_vec());
}

#[test]
fn partial_write_into_a_chunk_lost_on_every_mirror_fails() {
    let mut raid = Raid1Controller::new(2, 4).expect("valid shape");
    raid.write(b"ABCDEFGH", 0).expect("write");
    raid.clear_disk(0).expect("clear");
    raid.clear_disk(1).expect("clear");

    assert_eq!(
        raid.write(b"X", 0).unwrap_err(),
        RaidError::NoHealthyMirror { chunk: 0 }
    );
    assert_eq!(
        raid.read(0, 4).unwrap_err(),
        RaidError::NoHealthyMirror { chunk: 0 }
    );

    raid.write(b"WXYZ", 0).expect("whole chunk replaces lost data");
    assert_eq!(raid.read(0, 4).expect("read"), b"WXYZ".to_vec());
    assert_eq!(
        raid.read(0, 8).unwrap_err(),
        RaidError::NoHealthyMirror { chunk: 1 }
    );
}
