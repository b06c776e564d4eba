/// Unit test target covering the analytics engine's public surface

mod engine_tests;
