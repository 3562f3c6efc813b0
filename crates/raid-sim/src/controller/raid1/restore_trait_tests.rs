use crate::controller::raid1::Raid1Controller;
use crate::controller::traits::controller::RaidController;
use crate::controller::traits::restore::Restore;
use crate::error::RaidError;

#[test]
fn rebuild_recovers_missing_member_from_any_other() {
    for missing in 0..3 {
        let mut raid = Raid1Controller::new(3, 3).expect("valid shape");
        raid.write(b"mirrored bytes", 0).expect("write");
        let expected = raid.disks()[(missing + 1) % 3].chunks().to_vec();
        raid.clear_disk(missing).expect("clear");

        let restorer: &mut dyn Restore = &mut raid;
        assert_eq!(restorer.rebuild_disk(missing).expect("rebuild"), 5);

        assert_eq!(raid.disks()[missing].chunks(), &expected[..]);
    }
}

#[test]
fn rebuild_rejects_invalid_index() {
    let mut raid = Raid1Controller::new(2, 2).expect("valid shape");
    assert_eq!(
        raid.rebuild_disk(2).unwrap_err(),
        RaidError::IndexOutOfRange { index: 2, disks: 2 }
    );
}

#[test]
fn rebuild_fails_without_a_surviving_mirror() {
    let mut raid = Raid1Controller::new(2, 2).expect("valid shape");
    raid.write(b"ab", 0).expect("write");
    raid.clear_disk(0).expect("clear");
    raid.clear_disk(1).expect("clear");

    assert_eq!(
        raid.rebuild_disk(0).unwrap_err(),
        RaidError::NoHealthyMirror { chunk: 0 }
    );
}

#[test]
fn restore_is_reachable_through_the_controller_trait() {
    let mut raid = Raid1Controller::new(2, 2).expect("valid shape");
    raid.write(b"abcd", 0).expect("write");
    raid.clear_disk(0).expect("clear");

    let restorer = raid.as_restore_mut().expect("RAID1 supports restore");
    assert_eq!(restorer.rebuild_disk(0).expect("rebuild"), 2);
    assert_eq!(raid.read(0, 4).expect("read"), b"abcd".to_vec());
}
