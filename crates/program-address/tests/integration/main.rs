// Reason: this is the test module
#![allow(clippy::tests_outside_test_module)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
// Reason: we can infer what went wrong without the message
#![allow(clippy::missing_assert_message)]

mod fixtures;
mod properties;
