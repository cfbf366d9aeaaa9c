//! Extraction tests against realistic booking-platform feeds.

mod extract;
