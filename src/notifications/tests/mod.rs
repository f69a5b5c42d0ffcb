//! Tests for the notification system
