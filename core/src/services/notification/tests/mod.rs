//! Unit tests for the notification service

mod service_tests;
