//! Integration tests against an in-process stub backend

mod desk_tests;
