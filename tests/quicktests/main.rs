//! Property tests that drive every container through the `OrderedContainer` trait object.

use quickcheck::{Arbitrary, Gen};
use simplelog::{Config, LevelFilter, TestLogger};

mod contract;

/// An enum for the various kinds of "things" to do to
/// a container in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Delete the value from the data structure
    Delete(T),
    /// Compare sequences against the model
    Sequence,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Delete(T::arbitrary(g)),
            2 => Op::Sequence,
            _ => unreachable!(),
        }
    }
}

/// Routes the crate's `trace!` output through the test harness so failures show the rotations
/// that led up to them.
pub fn init_logging() {
    // Every test calls this and only the first one installs the logger.
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}
