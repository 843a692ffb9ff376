extern crate std;

use alloc::string::String;

use super::*;

#[test]
fn ring_storage_capacity() {
  let storage: RingStorage<u32> = RingStorage::with_capacity(5);
  assert_eq!(storage.capacity(), 5);
}

#[test]
fn ring_storage_write_take_roundtrip() {
  let mut storage: RingStorage<u32> = RingStorage::with_capacity(3);

  unsafe {
    storage.write_unchecked(0, 10);
    storage.write_unchecked(1, 20);
    storage.write_unchecked(2, 30);

    assert_eq!(storage.take_unchecked(0), 10);
    assert_eq!(storage.take_unchecked(1), 20);
    assert_eq!(storage.take_unchecked(2), 30);
  }
}

#[test]
fn ring_storage_get_borrows_live_slot() {
  let mut storage: RingStorage<String> = RingStorage::with_capacity(2);

  unsafe {
    storage.write_unchecked(1, String::from("live"));
    assert_eq!(storage.get_unchecked(1), "live");
    drop(storage.take_unchecked(1));
  }
}

#[test]
fn ring_storage_slot_reuse_after_take() {
  let mut storage: RingStorage<String> = RingStorage::with_capacity(1);

  unsafe {
    storage.write_unchecked(0, String::from("first"));
    assert_eq!(storage.take_unchecked(0), "first");

    storage.write_unchecked(0, String::from("second"));
    assert_eq!(storage.take_unchecked(0), "second");
  }
}
