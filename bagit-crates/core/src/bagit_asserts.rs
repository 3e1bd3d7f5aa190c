//! Leveled assertions for the solver invariants.
//!
//! Cheap checks (e.g. a single membership test) are `simple` and always active. Checks which walk
//! a whole bag are `moderate`, and checks which walk the whole packing state are `advanced`; these
//! are only enabled for tests or when the `debug-checks` feature is turned on.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const BAGIT_ASSERT_LEVEL_DEFINITION: u8 = BAGIT_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const BAGIT_ASSERT_LEVEL_DEFINITION: u8 = BAGIT_ASSERT_ADVANCED;

pub const BAGIT_ASSERT_SIMPLE: u8 = 1;
pub const BAGIT_ASSERT_MODERATE: u8 = 2;
pub const BAGIT_ASSERT_ADVANCED: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! bagit_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::BAGIT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::BAGIT_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! bagit_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::BAGIT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::BAGIT_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! bagit_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::BAGIT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::BAGIT_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! bagit_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::BAGIT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::BAGIT_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}
